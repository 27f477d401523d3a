//! Domain types of the teacher administration screen.

pub mod action;
pub mod filter;
pub mod listing;
pub mod teacher;
pub mod types;
