//! HTTP adapter exposing the matching and profile endpoints.

pub mod cache_control;
pub mod error;
pub mod health;
pub mod matches;
pub mod profiles;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
