use crate::server::data::wishlist::WishlistRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod get_for_user;
mod remove;
