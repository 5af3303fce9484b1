//! Route handlers grouped by resource.

pub mod admin;
pub mod health;
pub mod ideas;
