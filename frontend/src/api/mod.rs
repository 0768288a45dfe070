mod applications;
mod auth;
pub mod client;
mod kits;
mod leads;
pub mod query;
mod resellers;
pub mod storage;
pub mod types;

pub use client::*;
pub use query::{Order, Query};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
