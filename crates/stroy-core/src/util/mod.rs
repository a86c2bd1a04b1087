//! Utility modules.
//!
//! # Modules
//!
//! - [`text`]: Case folding and initials

pub mod text;
