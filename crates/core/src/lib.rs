//! Domain rules for the learning profile store.
//!
//! This crate has no storage dependencies: key namespaces, progress and
//! completion derivation, and contact submission rules are all pure
//! functions over data passed in by the caller.

pub mod contact;
pub mod error;
pub mod keys;
pub mod progress;
pub mod types;
