//! Prometheus counters for the admin API, exposed at `/metrics`.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use tracing::error;

use crate::models::ReturnTransition;

lazy_static! {
    static ref RETURN_TRANSITIONS: IntCounterVec = register_int_counter_vec!(
        "casa_return_transitions_total",
        "Return workflow transitions by outcome",
        &["transition", "outcome"]
    )
    .expect("metric can be created");
    static ref HTTP_REQUESTS: IntCounterVec = register_int_counter_vec!(
        "casa_http_requests_total",
        "HTTP requests served by method and status",
        &["method", "status"]
    )
    .expect("metric can be created");
}

pub fn record_transition(transition: ReturnTransition, outcome: &str) {
    RETURN_TRANSITIONS
        .with_label_values(&[transition.as_str(), outcome])
        .inc();
}

pub fn transition_count(transition: ReturnTransition, outcome: &str) -> u64 {
    RETURN_TRANSITIONS
        .with_label_values(&[transition.as_str(), outcome])
        .get()
}

/// Counts every response by method and status code.
pub async fn http_metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let response = next.run(request).await;
    HTTP_REQUESTS
        .with_label_values(&[method.as_str(), response.status().as_str()])
        .inc();
    response
}

/// Renders the default registry in the text exposition format.
pub fn render() -> Result<String, prometheus::Error> {
    // Touch the statics so they appear even before first use.
    lazy_static::initialize(&RETURN_TRANSITIONS);
    lazy_static::initialize(&HTTP_REQUESTS);

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

pub async fn metrics_handler() -> Response {
    match render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_are_counted_per_outcome() {
        let before = transition_count(ReturnTransition::IssueRefund, "unit_test");
        record_transition(ReturnTransition::IssueRefund, "unit_test");
        assert_eq!(
            transition_count(ReturnTransition::IssueRefund, "unit_test"),
            before + 1
        );
    }

    #[test]
    fn render_includes_registered_counters() {
        record_transition(ReturnTransition::AdminApprove, "success");
        let text = render().unwrap();
        assert!(text.contains("casa_return_transitions_total"));
    }
}
