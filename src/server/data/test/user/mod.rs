use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod get_all;

fn user_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        id: None,
        email: email.to_string(),
        password: "hash".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
    }
}
