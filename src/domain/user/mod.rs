//! User domain — profiles keyed by wallet address.
//!
//! Unlike the market and wallet endpoints, every user endpoint wraps its
//! response in the [`ApiResponse`] envelope.

pub mod client;
pub mod wire;

pub use wire::{ApiResponse, CreateUserRequest, UpdateUserRequest, UserProfile};
