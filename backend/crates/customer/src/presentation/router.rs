//! Customer Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::CustomerConfig;
use crate::domain::gateway::CustomerGateway;
use crate::error::CustomerResult;
use crate::infra::{DiscardingGateway, HttpCustomerGateway};
use crate::presentation::handlers::{self, CustomerAppState};

/// Create the customer router, picking the gateway from config
///
/// Without an upstream URL, submissions are accepted and dropped.
pub fn customer_router(config: CustomerConfig) -> CustomerResult<Router> {
    match HttpCustomerGateway::from_config(&config)? {
        Some(gateway) => {
            tracing::info!(upstream = %gateway.url(), "Customer submissions forwarded upstream");
            Ok(customer_router_generic(gateway, config))
        }
        None => {
            tracing::warn!("No upstream URL configured; customer submissions are accepted and dropped");
            Ok(customer_router_generic(DiscardingGateway::new(), config))
        }
    }
}

/// Create a generic customer router for any gateway implementation
pub fn customer_router_generic<G>(gateway: G, config: CustomerConfig) -> Router
where
    G: CustomerGateway + Send + Sync + 'static,
{
    customer_router_shared(Arc::new(gateway), config)
}

/// Create the router around a gateway the caller keeps a handle to
pub fn customer_router_shared<G>(gateway: Arc<G>, config: CustomerConfig) -> Router
where
    G: CustomerGateway + Send + Sync + 'static,
{
    let state = CustomerAppState {
        gateway,
        config: Arc::new(config),
    };

    Router::new()
        .route("/", post(handlers::submit_customer::<G>))
        .route("/validate", post(handlers::validate_customer))
        .with_state(state)
}
