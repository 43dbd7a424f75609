use crate::{data::opt_out::OptOutRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod is_opted_out;
