//! Stroy Core: shared types, schema, errors and utilities.
//!
//! This crate provides the foundational types used across all StroyCRM crates.
//! It has no internal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Identifiers, attribute maps, and record schemas
//! - [`entity`]: The [`Entity`] trait and attribute/record conversions
//! - [`util`]: Text helpers shared by filters and views

#![doc = include_str!("../README.md")]

pub mod entity;
pub mod error;
pub mod types;
pub mod util;

// Re-export key types at crate root for convenience
pub use entity::Entity;
pub use error::{Error, Result};
pub use types::{Attributes, EntityId, FieldKind, FieldSpec, Requirement, Schema};

// Convenience re-exports from util
pub use util::text::{fold_case, initials};
