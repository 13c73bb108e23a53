use axum::Json;
use serde_json::{json, Value};

use super::util::time;

pub async fn get_health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": time::current_time_iso(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::test_support::test_state;

    #[tokio::test]
    async fn health_reports_ok_with_timestamp() {
        let app = crate::router(test_state("http://127.0.0.1:9"));

        let res = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status"], "ok");
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn root_serves_the_front_end() {
        let app = crate::router(test_state("http://127.0.0.1:9"));

        let res = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("/api/generate"));
    }
}
