use crate::{data::channel_counter::ChannelCounterRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod get_many;
mod increment;
