//! Critical Mind Catalog
//!
//! The static topic dataset consumed by the ranking and progress engine.
//! Topics are loaded once at startup, validated, and never mutated for the
//! rest of the session.
//!
//! # Invariants
//!
//! - The catalog holds at least one topic
//! - Topic ids are unique
//! - Every topic has at least one section
//!
//! Validation happens once in [`Catalog::new`]; downstream code does not
//! re-check per call.

pub mod catalog;
pub mod error;
pub mod models;

pub use catalog::{validate, Catalog};
pub use error::{Error, Result, Violation};
pub use models::{Category, Section, Topic};
