//! Property-based tests for list filtering.
