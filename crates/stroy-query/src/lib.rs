//! # stroy-query
//!
//! List filtering for StroyCRM screens.
//!
//! - [`ListFilter`]: substring filter over a fixed set of field selectors
//! - [`filter_records`]: one-shot functional form

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod filter;

mod proptests;

pub use filter::{FieldSelector, ListFilter, filter_records};
