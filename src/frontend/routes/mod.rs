//! Frontend Routes

pub mod health;
pub mod home;
pub mod post;
