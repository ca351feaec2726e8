//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod places;
pub mod user_places;
