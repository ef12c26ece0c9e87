//! Core data models for Roster.
//!
//! This crate provides the employee [`Record`] stored by the flat-file
//! record store, along with the field-level validation that keeps a record
//! representable as a single delimited line.

pub mod record;

pub use record::{Field, FieldViolation, Record, DELIMITER, FORBIDDEN_CHARS};
