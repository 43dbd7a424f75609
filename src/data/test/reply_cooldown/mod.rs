use crate::{data::reply_cooldown::ReplyCooldownRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get;
