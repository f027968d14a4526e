use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::Context;
use axum::{response::Html, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    routes::apply_routes,
    services::maps_client::{
        maps_service::{MapsService, MapsServiceConfig},
        types::maps_service_error::MapsServiceError,
    },
    types::app_state::AppState,
};

const ENV_PLACES_API_KEY: &str = "GOOGLE_PLACES_API_KEY";
const ENV_PLACES_HOST: &str = "GOOGLE_PLACES_HOST";
const ENV_PLACES_TIMEOUT_SECS: &str = "PLACES_TIMEOUT_SECS";
const ENV_BIND_ADDR: &str = "BIND_ADDR";

const DEFAULT_PLACES_HOST: &str = "https://maps.googleapis.com";
const DEFAULT_PLACES_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Clone)]
pub struct AppConfig {
    pub places_host: String,
    pub places_api_key: Option<String>,
    pub places_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            places_host: DEFAULT_PLACES_HOST.to_string(),
            places_api_key: None,
            places_timeout: DEFAULT_PLACES_TIMEOUT,
            bind_addr: DEFAULT_BIND_ADDR,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// A missing API key is not an error: the server starts and the address
    /// endpoints report the misconfiguration per request.
    pub fn from_env() -> anyhow::Result<Self> {
        let places_api_key = env::var(ENV_PLACES_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());

        let places_host = env::var(ENV_PLACES_HOST)
            .unwrap_or_else(|_| DEFAULT_PLACES_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        let places_timeout = match env::var(ENV_PLACES_TIMEOUT_SECS) {
            Ok(secs) => Duration::from_secs(
                secs.parse()
                    .with_context(|| format!("Invalid {ENV_PLACES_TIMEOUT_SECS}: {secs}"))?,
            ),
            Err(_) => DEFAULT_PLACES_TIMEOUT,
        };

        let bind_addr = match env::var(ENV_BIND_ADDR) {
            Ok(addr) => addr
                .parse()
                .with_context(|| format!("Invalid {ENV_BIND_ADDR}: {addr}"))?,
            Err(_) => DEFAULT_BIND_ADDR,
        };

        Ok(Self {
            places_host,
            places_api_key,
            places_timeout,
            bind_addr,
        })
    }
}

pub fn gen_app(config: AppConfig) -> Result<Router, MapsServiceError> {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        maps_service: MapsService::new(MapsServiceConfig {
            api_key: config.places_api_key,
            host: config.places_host,
            timeout: config.places_timeout,
        })?,
    };

    Ok(apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn root() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub places_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let places_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        places_host: places_server.url(),
        places_api_key: Some("key".to_string()),
        places_timeout: Duration::from_secs(2),
        ..AppConfig::default()
    })
    .unwrap();

    MockApp { app, places_server }
}

/// App whose upstream accepts connections and never answers.
#[cfg(test)]
pub async fn gen_stalled_app(timeout: Duration) -> Router {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut connections = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            connections.push(socket);
        }
    });

    gen_app(AppConfig {
        places_host: format!("http://{}", addr),
        places_api_key: Some("key".to_string()),
        places_timeout: timeout,
        ..AppConfig::default()
    })
    .unwrap()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn serves_index_page() {
        let app = gen_app(AppConfig::default()).unwrap();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.contains("/api/address/autocomplete"));
        assert!(body.contains("/api/address/place"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = gen_app(AppConfig::default()).unwrap();

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn config_from_env() {
        env::set_var(ENV_PLACES_API_KEY, "secret");
        env::set_var(ENV_PLACES_HOST, "http://localhost:9999/");
        env::set_var(ENV_PLACES_TIMEOUT_SECS, "7");
        env::set_var(ENV_BIND_ADDR, "127.0.0.1:8080");

        let config = AppConfig::from_env().unwrap();

        assert_eq!(config.places_api_key.as_deref(), Some("secret"));
        assert_eq!(config.places_host, "http://localhost:9999");
        assert_eq!(config.places_timeout, Duration::from_secs(7));
        assert_eq!(
            config.bind_addr,
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );

        env::set_var(ENV_PLACES_TIMEOUT_SECS, "soon");

        assert!(AppConfig::from_env().is_err());

        env::remove_var(ENV_PLACES_API_KEY);
        env::remove_var(ENV_PLACES_HOST);
        env::remove_var(ENV_PLACES_TIMEOUT_SECS);
        env::remove_var(ENV_BIND_ADDR);

        let config = AppConfig::from_env().unwrap();

        assert_eq!(config.places_api_key, None);
        assert_eq!(config.places_host, DEFAULT_PLACES_HOST);
        assert_eq!(config.places_timeout, DEFAULT_PLACES_TIMEOUT);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }
}
