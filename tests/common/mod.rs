// Shared harness: router over a temp SQLite file, "today" fixed at 2023-06-15.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use tower::ServiceExt;

use producao::application::{build_router, AppState};
use producao::db::{create_connection_pool, initialize_database};
use producao::infrastructure::FixedClock;
use producao::services::CreateCriacaoRequest;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: tempfile::TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl TestResponse {
    pub fn template(&self) -> &str {
        self.body["template"].as_str().unwrap_or_default()
    }

    pub fn context(&self) -> &serde_json::Value {
        &self.body["context"]
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

pub fn hoje() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
}

/// App with batch "123" (Cachorro) already registered
pub fn setup() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let pool = Arc::new(create_connection_pool(&dir.path().join("test.db"), 2).unwrap());
    initialize_database(&pool.get().unwrap()).unwrap();

    let state = AppState::wire(pool, Arc::new(FixedClock(hoje())));
    state
        .criacao_service
        .create_criacao(CreateCriacaoRequest {
            id: "123".to_string(),
            raca: "Cachorro".to_string(),
            data_entrada: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        })
        .unwrap();

    TestApp {
        router: build_router(state.clone()),
        state,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> TestResponse {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(req).await
    }

    /// POST an urlencoded form
    pub async fn post(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            serde_json::json!(null)
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::json!(null))
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a collection for batch "123" through the form
    pub async fn nova_coleta(&self, data: &str, quantidade: &str) -> TestResponse {
        self.post(
            "/coletas/novo",
            &[("criacao", "123"), ("data", data), ("quantidade", quantidade)],
        )
        .await
    }
}

fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' => (b as char).to_string(),
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}
