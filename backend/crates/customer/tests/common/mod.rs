use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;

use customer::domain::entity::{CustomerSubmission, SubmissionReceipt};
use customer::domain::gateway::CustomerGateway;
use customer::{
    CustomerConfig, CustomerError, CustomerResult, customer_router, customer_router_shared,
};

/// Gateway that keeps every submission so tests can inspect it
#[derive(Debug, Default)]
pub struct RecordingGateway {
    submissions: Mutex<Vec<CustomerSubmission>>,
}

impl RecordingGateway {
    /// Snapshot of the submissions received so far
    pub fn submissions(&self) -> Vec<CustomerSubmission> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions().is_empty()
    }
}

impl CustomerGateway for RecordingGateway {
    async fn submit(&self, submission: &CustomerSubmission) -> CustomerResult<SubmissionReceipt> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());

        Ok(SubmissionReceipt {
            upstream_status: 202,
            upstream_body: Value::Null,
        })
    }
}

/// Gateway that answers every submission with a fixed upstream failure
pub struct FailingGateway {
    pub status: u16,
}

impl CustomerGateway for FailingGateway {
    async fn submit(&self, _submission: &CustomerSubmission) -> CustomerResult<SubmissionReceipt> {
        Err(CustomerError::UpstreamRejected {
            status: self.status,
        })
    }
}

/// App mounted the way the binary mounts it, plus a handle on the gateway
pub fn recording_app() -> (Router, Arc<RecordingGateway>) {
    let gateway = Arc::new(RecordingGateway::default());
    let app = mount(customer_router_shared(gateway.clone(), CustomerConfig::default()));
    (app, gateway)
}

pub fn failing_app(status: u16) -> Router {
    mount(customer_router_shared(
        Arc::new(FailingGateway { status }),
        CustomerConfig::default(),
    ))
}

/// App built exactly as the binary builds it without an upstream URL
pub fn fallback_app() -> Router {
    mount(customer_router(CustomerConfig::default()).unwrap())
}

/// App forwarding to an upstream that accepts connections but never answers
pub async fn silent_upstream_app(timeout: Duration) -> Router {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/customers", listener.local_addr().unwrap());
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let config = CustomerConfig {
        upstream_url: Some(url),
        upstream_timeout: timeout,
        ..Default::default()
    };
    mount(customer_router(config).unwrap())
}

fn mount(router: Router) -> Router {
    Router::new().nest("/api/customers", router)
}

/// A record that passes every rule
pub fn valid_body() -> Value {
    json!({
        "firstName": "Ivan",
        "middleName": "",
        "lastName": "Petrov",
        "egn": "8505031239",
        "address": "123 Sofia Street",
        "postcode": "1000",
        "phoneNumber": "+359888123456",
        "email": ""
    })
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert status, returning the JSON body
pub async fn expect_json(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
