use crate::{data::user::UserRepository, model::live::LiveUser};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod ensure;
