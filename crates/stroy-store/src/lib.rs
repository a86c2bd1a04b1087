//! # stroy-store
//!
//! Ordered in-memory storage for StroyCRM records.
//!
//! - [`EntityStore`]: insert, update-by-id, delete-by-id, snapshot listing
//! - [`DeletionGuard`]: pluggable veto over deletions
//! - [`LastMatching`]: guard protecting the final record matching a predicate

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod guard;
pub mod store;

mod proptests;

pub use guard::{DeletionGuard, LastMatching};
pub use store::EntityStore;
