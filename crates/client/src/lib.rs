//! HTTP access to the museum catalog
//!
//! [`CatalogClient`] performs the requests, [`ReferenceCache`] keeps the
//! classification and century lists, and [`Session`] drives a browsing session
//! from user actions.

mod client;
mod error;
mod observer;
mod reference_cache;
mod session;

#[cfg(test)]
mod tests;

pub use client::{CatalogClient, truncate};
pub use error::ClientError;
pub use observer::{FetchObserver, NoopObserver};
pub use reference_cache::{ReferenceCache, ReferenceLists};
pub use session::{Outcome, Session};
