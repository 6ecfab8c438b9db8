//! Upstream travel API: token exchange, HTTP plumbing and typed wire models

pub mod auth;
pub mod booking;
pub mod client;
pub mod hotels;
pub mod offers;

pub use auth::{AccessToken, TokenProvider, TokenResponse};
pub use client::AmadeusClient;
