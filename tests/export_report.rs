//! Tests for report export driven through the full pipeline.

use httptest::{matchers::*, responders::*, Expectation, Server};

use seo_audit::export::{export_pdf, report_html, write_html_report, PdfRenderer};
use seo_audit::{analyze, Config};

async fn audited_report(server: &Server) -> seo_audit::AuditReport {
    let page = r#"<html>
        <head><title>Export Me</title></head>
        <body><h1>Export Me</h1><a href="/self">Self</a></body>
    </html>"#;
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body(page)),
    );

    let config = Config {
        url: server.url("/").to_string(),
        timeout_seconds: 5,
        ..Default::default()
    };
    analyze(&config).await.expect("analysis should succeed")
}

#[tokio::test]
async fn test_html_export_contains_report_fields_and_issues() {
    let server = Server::run();
    let report = audited_report(&server).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("audit.html");
    write_html_report(&report, &path).expect("export should succeed");

    let written = std::fs::read_to_string(&path).expect("Failed to read export");
    assert!(written.contains("Export Me"));
    // Meta description is missing on the page, so the issue list carries it
    assert!(written.contains("Missing meta description - High priority"));
    assert_eq!(written, report_html(&report));
}

#[tokio::test]
async fn test_pdf_export_round_trips_renderer_bytes() {
    struct StubRenderer;
    impl PdfRenderer for StubRenderer {
        fn render(&self, html: &str) -> anyhow::Result<Vec<u8>> {
            Ok(format!("%PDF-stub:{}", html.len()).into_bytes())
        }
    }

    let server = Server::run();
    let report = audited_report(&server).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("audit.pdf");
    export_pdf(&StubRenderer, &report, &path).expect("export should succeed");

    let written = std::fs::read(&path).expect("Failed to read export");
    assert!(written.starts_with(b"%PDF-stub:"));
}
