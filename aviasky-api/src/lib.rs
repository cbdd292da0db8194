use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod event;
pub mod handler;

pub use error::HandlerError;
pub use event::{Event, HandlerResponse};
pub use handler::{Action, TravelHandler};

/// HTTP front for the handler: any method on any path becomes an [`Event`].
pub fn app(handler: Arc<TravelHandler>) -> Router {
    Router::new()
        .fallback(invoke)
        .layer(TraceLayer::new_for_http())
        .with_state(handler)
}

async fn invoke(
    State(handler): State<Arc<TravelHandler>>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
) -> HandlerResponse {
    let event = Event {
        http_method: method.to_string(),
        query_string_parameters: Some(params),
    };
    handler.handle(&event)
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        for (name, value) in self.headers {
            match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header"),
            }
        }

        response
    }
}
