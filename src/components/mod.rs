//! UI Components module
//!
//! Reusable widgets drawn around a running question.

pub mod nav_bar;
