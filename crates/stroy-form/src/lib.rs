//! # stroy-form
//!
//! Draft management for StroyCRM create/edit dialogs.
//!
//! - [`FormController`]: the `Closed` / `Create` / `Edit` state machine
//! - [`FormMode`]: which of those states the controller is in
//! - [`Draft`]: the uncommitted field values

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod controller;
pub mod draft;

pub use controller::{FormController, FormMode};
pub use draft::Draft;
