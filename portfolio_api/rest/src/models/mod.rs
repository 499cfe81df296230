use serde::Serialize;

pub mod catalog;
pub mod contact;

#[derive(Serialize)]
pub struct ApiError {
    pub message: &'static str,
}
