//! HTTP Handlers

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::{Extensions, HeaderMap, StatusCode};
use std::net::SocketAddr;
use std::sync::Arc;

use platform::client::{ClientInfo, extract_client_info};

use crate::application::config::CustomerConfig;
use crate::application::{SubmitCustomerUseCase, ValidateCustomerUseCase};
use crate::domain::gateway::CustomerGateway;
use crate::error::CustomerResult;
use crate::presentation::dto::{CustomerRequest, SubmitResponse, ValidationResponse};
use crate::presentation::extract::CustomerJson;

/// Shared state for customer handlers
pub struct CustomerAppState<G>
where
    G: CustomerGateway + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub config: Arc<CustomerConfig>,
}

impl<G> Clone for CustomerAppState<G>
where
    G: CustomerGateway + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            config: self.config.clone(),
        }
    }
}

/// Client address and user agent; connect info is absent under test harnesses
fn client_info(headers: &HeaderMap, extensions: &Extensions) -> ClientInfo {
    let direct_ip = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    extract_client_info(headers, direct_ip)
}

// ============================================================================
// Validate
// ============================================================================

/// POST /api/customers/validate
pub async fn validate_customer(
    headers: HeaderMap,
    extensions: Extensions,
    CustomerJson(req): CustomerJson<CustomerRequest>,
) -> CustomerResult<Json<ValidationResponse>> {
    let client = client_info(&headers, &extensions);
    tracing::debug!(client_ip = %client.ip_string(), "Validating customer record");

    let validated = ValidateCustomerUseCase::new().execute(req.into())?;

    Ok(Json(ValidationResponse::accepted(validated)))
}

// ============================================================================
// Submit
// ============================================================================

/// POST /api/customers
pub async fn submit_customer<G>(
    State(state): State<CustomerAppState<G>>,
    headers: HeaderMap,
    extensions: Extensions,
    CustomerJson(req): CustomerJson<CustomerRequest>,
) -> CustomerResult<(StatusCode, Json<SubmitResponse>)>
where
    G: CustomerGateway + Send + Sync + 'static,
{
    let client = client_info(&headers, &extensions);
    tracing::info!(
        client_ip = %client.ip_string(),
        user_agent = client.user_agent.as_deref().unwrap_or("unknown"),
        "Customer submission received"
    );

    let use_case = SubmitCustomerUseCase::new(state.gateway.clone(), state.config.clone());
    let output = use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            ok: true,
            submission: output.submission,
            upstream_status: output.receipt.upstream_status,
        }),
    ))
}
