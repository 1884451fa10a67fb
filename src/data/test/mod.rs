use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod lot;
