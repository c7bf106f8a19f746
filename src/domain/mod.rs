//! Core domain types and logic.

pub mod accessor;
pub mod document;
pub mod error;
pub mod section;
pub mod value;
