use std::{any::Any, panic::AssertUnwindSafe};

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use super::request_id::RequestId;
use crate::routes::internal_server_error;

/// Turn a panicking handler into a 500 response. Must be added before
/// [`request_id::add`](super::request_id::add) so the request id is known.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(request: Request, next: Next) -> Response {
    let request_id = request.extensions().get::<RequestId>().copied();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            match request_id {
                Some(request_id) => internal_server_error(anyhow!(
                    "handler for request {request_id} panicked: {message}"
                )),
                None => internal_server_error(anyhow!("request handler panicked: {message}")),
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload")
}
