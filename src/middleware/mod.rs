//! Request guards applied ahead of the business logic.

pub mod auth;
