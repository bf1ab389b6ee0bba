//! Route handlers organized by page

pub mod adoptions;
pub mod health;
pub mod home;
