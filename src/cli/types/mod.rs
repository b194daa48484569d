//! Type-safe wrappers for NHL feed identifiers.

pub mod ids;
