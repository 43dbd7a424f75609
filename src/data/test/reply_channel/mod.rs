use crate::{data::reply_channel::ReplyChannelRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild_id;
