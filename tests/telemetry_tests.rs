//! Log output produced by the binary's subscriber.

use std::io;
use std::sync::{Arc, Mutex};

use domain_agent::domain::{check_availability, Deps};
use domain_agent::telemetry::{subscriber, DEFAULT_LOG_FILTER};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Shared in-memory log sink.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture() -> (Captured, tracing::subscriber::DefaultGuard) {
    let sink = Captured::default();
    let writer = sink.clone();
    let guard = tracing::subscriber::set_default(subscriber(
        EnvFilter::new(DEFAULT_LOG_FILTER),
        move || writer.clone(),
        false,
    ));
    (sink, guard)
}

#[tokio::test]
async fn lookup_is_logged_with_its_span_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("domainName", "brockbuilds.net"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domainAvailability": "AVAILABLE",
            "domainName": "brockbuilds.net",
        })))
        .mount(&server)
        .await;
    let deps = Deps::new(reqwest::Client::new(), Some("secret-key".to_string()))
        .with_endpoint(server.uri());
    let (logs, _guard) = capture();

    check_availability(&deps, &["brockbuilds.net".to_string()])
        .await
        .unwrap();

    let output = logs.contents();
    assert!(output.contains("calling domain availability API"), "{output}");
    assert!(output.contains("domain_name=brockbuilds.net"), "{output}");
    assert!(output.contains("credits=\"DA\""), "{output}");
    assert!(output.contains("status=200"), "{output}");
    assert!(output.contains("AVAILABLE"), "{output}");
    assert!(output.contains("domain availability checked"), "{output}");
    assert!(output.contains("close"), "{output}");
    assert!(!output.contains("secret-key"), "{output}");
}

#[tokio::test]
async fn rejected_lookup_is_logged_as_warning() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;
    let deps = Deps::new(reqwest::Client::new(), Some("secret-key".to_string()))
        .with_endpoint(server.uri());
    let (logs, _guard) = capture();

    check_availability(&deps, &["google.com".to_string()])
        .await
        .unwrap_err();

    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("status=401"), "{output}");
    assert!(!output.contains("secret-key"), "{output}");
}
