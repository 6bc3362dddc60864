//! Route definitions and request handlers

use alloy::primitives::Address;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::str::FromStr;
use tracing::{error, info};
use crate::{errors::OracleError, oracle::PriceOracle};

#[derive(Clone)]
pub struct AppState {
    pub oracle: PriceOracle,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/token-price/:lp_address", get(get_token_price))
        // A bare or trailing-slash path means the parameter was omitted.
        .route("/api/token-price", get(missing_lp_address))
        .route("/api/token-price/", get(missing_lp_address))
        .with_state(state)
}

async fn get_token_price(
    State(state): State<AppState>,
    Path(lp_address): Path<String>,
) -> Response {
    let lp_address = lp_address.trim();
    if lp_address.is_empty() {
        return missing_lp_address().await;
    }

    let pool = match Address::from_str(lp_address) {
        Ok(address) => address,
        Err(e) => {
            error!("Rejecting malformed LP address {:?}: {}", lp_address, e);
            let err = OracleError::InvalidAddress {
                input: lp_address.to_string(),
            };
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
        }
    };

    match state.oracle.get_pair_price(pool).await {
        Ok(prices) => {
            info!("💹 Served pair price for {}", pool);
            (StatusCode::OK, Json(prices)).into_response()
        }
        Err(e) => {
            error!("Price computation failed for {}: {}", pool, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn missing_lp_address() -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        "LP address is required".to_string(),
    )
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::providers::ProviderBuilder;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::util::ServiceExt;
    use crate::{config::Config, types::{UNISWAP_V2_FACTORY, USDT_MAINNET}};

    // Provider pointed at a closed port: handlers under test reject their
    // input before any RPC call goes out.
    fn test_router() -> Router {
        let config = Config {
            rpc_url: "http://127.0.0.1:1".to_string(),
            stablecoin_address: USDT_MAINNET,
            factory_address: UNISWAP_V2_FACTORY,
            port: 3000,
            rpc_timeout_secs: 1,
        };
        let provider = Arc::new(
            ProviderBuilder::new()
                .on_http(config.rpc_url.parse().unwrap())
                .boxed(),
        );
        router(AppState {
            oracle: PriceOracle::new(provider, &config),
        })
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    #[tokio::test]
    async fn missing_lp_address_returns_400_with_exact_body() {
        for uri in ["/api/token-price", "/api/token-price/"] {
            let response = test_router()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_bytes(response).await;
            assert_eq!(body, br#"{"error":"LP address is required"}"#);
        }
    }

    #[tokio::test]
    async fn blank_lp_address_returns_400() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/token-price/%20%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_bytes(response).await;
        assert_eq!(body, br#"{"error":"LP address is required"}"#);
    }

    #[tokio::test]
    async fn malformed_lp_address_returns_500() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/token-price/not-an-address")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().contains("invalid address"));
    }
}
