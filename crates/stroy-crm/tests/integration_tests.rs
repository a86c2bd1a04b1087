//! Integration test suite for StroyCRM screens.
//!
//! Drives the workspace the way the shell does: navigate, search, open a
//! dialog, edit fields, submit, delete.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;
mod integration;
