//! Route handlers

pub mod health;
pub mod claims;
pub mod review;
pub mod audit;
