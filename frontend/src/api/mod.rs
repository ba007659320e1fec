mod auth;
pub mod client;
mod orders;
mod products;
pub mod types;
mod users;

pub use client::*;
pub use types::*;
