use crate::server::{
    data::review::ReviewRepository,
    model::{pagination::PageRequest, review::CreateReviewParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_accommodation_paginated;
mod rating_summaries;
