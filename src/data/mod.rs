//! Data layer
//!
//! The record model, value comparison rules and record loaders.

pub mod loaders;
pub mod record;
pub mod value_compare;
