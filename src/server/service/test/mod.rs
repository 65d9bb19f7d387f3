use crate::server::{error::AppError, service::password::PasswordService};
use test_utils::builder::TestBuilder;

mod user;
