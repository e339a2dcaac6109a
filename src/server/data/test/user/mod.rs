use crate::server::{
    data::user::UserRepository,
    model::{pagination::PageRequest, user::CreateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials_by_email;
mod get_all_paginated;
mod set_admin;

fn params(email: &str, admin: bool) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        name: "Ada".to_string(),
        password_hash: "salt$digest".to_string(),
        admin,
    }
}
