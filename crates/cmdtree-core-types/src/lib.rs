//! Core types shared across cmdtree facilities
//!
//! This crate provides foundational types used by both the dispatch engine
//! and its logging facility:
//!
//! - **Correlation types**: InvocationId
//! - **Schema constants**: Canonical field keys, event names and rejection reasons

pub mod correlation;
pub mod schema;

pub use correlation::InvocationId;
