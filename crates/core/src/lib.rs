//! Core types and logic for artsearch
//!
//! Query building, pagination state, record projection and the action handler
//! live here. Nothing in this crate performs network I/O.

mod catalog;
pub mod constants;
mod endpoint;
mod env_config;
mod error;
mod handler;
mod navigation;
mod projection;
mod query;
mod reference;
mod settings;
mod store_trait;

pub use catalog::*;
pub use endpoint::*;
pub use env_config::*;
pub use error::*;
pub use handler::*;
pub use navigation::*;
pub use projection::*;
pub use query::*;
pub use reference::*;
pub use settings::*;
pub use store_trait::*;
