//! Shared types.

pub mod collections;
