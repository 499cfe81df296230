//! In-memory persistence. Everything is lost when the process exits.

pub mod contact;
