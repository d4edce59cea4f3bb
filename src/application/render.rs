// src/application/render.rs
//
// Rendered pages: a template name plus the context it is rendered with.
// Pages are sent as JSON `{"template": ..., "context": {...}}`.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct Page {
    status: StatusCode,
    template: &'static str,
    context: Map<String, Value>,
}

impl Page {
    pub fn new(template: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            template,
            context: Map::new(),
        }
    }

    /// Add a context variable
    pub fn with<T: Serialize>(mut self, key: &str, value: T) -> AppResult<Self> {
        self.context.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn template(&self) -> &'static str {
        self.template
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "template": self.template,
            "context": self.context,
        });
        (self.status, Json(body)).into_response()
    }
}

/// 302 Found to `location`
pub fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_collected() {
        let page = Page::new("listar_coletas.html")
            .with("coletas", vec![1, 2])
            .unwrap();
        assert_eq!(page.template(), "listar_coletas.html");
        assert_eq!(page.context["coletas"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_redirect_is_found() {
        let response = redirect("/coletas");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/coletas");
    }
}
