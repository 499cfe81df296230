//! Fixtures shared by the tests of all crates.

pub mod catalog;
pub mod contact;
