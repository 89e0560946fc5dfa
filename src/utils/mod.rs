//! Utility functions and helpers.

pub mod seed_data;
