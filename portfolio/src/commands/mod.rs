pub mod catalog;
pub mod email;
pub mod serve;
