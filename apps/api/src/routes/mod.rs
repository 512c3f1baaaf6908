pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/catalog/rank", post(handlers::handle_rank))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::catalog::test_support::sample_catalog;
    use crate::config::Config;
    use crate::extraction::test_support::{build_docx, build_pdf_without_media_box};

    const BOUNDARY: &str = "resume-tailor-test-boundary";

    fn test_state() -> AppState {
        AppState {
            config: Config {
                catalog_path: PathBuf::from("catalog.csv"),
                port: 0,
                rust_log: "debug".to_string(),
                max_upload_bytes: 1024 * 1024,
            },
            catalog: Arc::new(sample_catalog()),
        }
    }

    /// Encodes `(field, file name, content)` parts as multipart/form-data.
    fn multipart_body(parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (field, file_name, content) in parts {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyze_request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(resp: axum::response::Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_catalog_rows() {
        let resp = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["catalog_rows"], 3);
    }

    #[tokio::test]
    async fn test_analyze_docx_pair() {
        let resume = build_docx(&[
            "About Me",
            "Analyst with a love of clean data.",
            "",
            "Skills",
            "Python, SQL, Communication",
        ]);
        let job = build_docx(&[
            "Job Title: Data Analyst",
            "Skills",
            "Python, Communication, Leadership",
        ]);
        let body = multipart_body(&[
            ("resume", "cv.docx", &resume),
            ("job_description", "posting.docx", &job),
        ]);

        let resp = build_router(test_state())
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        let report = &json["report"];
        assert_eq!(report["job_title"], "Data Analyst");
        assert_eq!(report["skill_match"]["match_percentage"], 66);
        assert_eq!(report["skill_match"]["missing"][0], "Leadership");
        assert_eq!(report["top_roles"][0]["job_title"], "Data Analyst");
        assert!(json["analysis_id"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_accepts_plain_text() {
        let body = multipart_body(&[
            ("resume", "cv.txt", b"Skills\nRust, Go\n"),
            ("job_description", "job.md", b"Skills\nRust\n"),
        ]);

        let resp = build_router(test_state())
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["report"]["job_title"], "Uploaded Job");
    }

    #[tokio::test]
    async fn test_missing_job_description_is_400() {
        let body = multipart_body(&[("resume", "cv.txt", b"Skills\nRust, Go\n")]);

        let resp = build_router(test_state())
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = json_body(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_corrupt_docx_is_422() {
        let body = multipart_body(&[
            ("resume", "cv.docx", b"not a zip archive"),
            ("job_description", "job.txt", b"Skills\nRust\n"),
        ]);

        let resp = build_router(test_state())
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(resp).await;
        assert_eq!(json["error"]["code"], "FORMAT_ERROR");
    }

    #[tokio::test]
    async fn test_structurally_broken_pdf_is_422() {
        let pdf = build_pdf_without_media_box();
        let body = multipart_body(&[
            ("resume", "cv.pdf", &pdf),
            ("job_description", "job.txt", b"Skills\nRust\n"),
        ]);

        let resp = build_router(test_state())
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(resp).await;
        assert_eq!(json["error"]["code"], "FORMAT_ERROR");
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_422() {
        let body = multipart_body(&[
            ("resume", "cv.odt", b"whatever"),
            ("job_description", "job.txt", b"Skills\nRust\n"),
        ]);

        let resp = build_router(test_state())
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_rank_endpoint() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/catalog/rank")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"skills":["Figma","Prototyping"]}"#))
            .unwrap();

        let resp = build_router(test_state()).oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["top_roles"][0]["job_title"], "Product Designer");
        assert_eq!(json["top_roles"].as_array().unwrap().len(), 3);
    }
}
