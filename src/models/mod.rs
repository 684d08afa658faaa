//! Data models for the rental domain.
//!
//! Each submodule owns one entity's types:
//! - `property`: stored property rows, the insertable subset, and the
//!   search filter bag
//! - `reservation`: the guest-reservation read model
//! - `user`: account rows

pub mod property;
pub mod reservation;
pub mod user;

pub use property::*;
pub use reservation::*;
pub use user::*;
