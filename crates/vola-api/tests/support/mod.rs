//! Canned-response HTTP server for exercising the client end to end.

use std::io::Read;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

pub struct FakeApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeApi {
    /// Serve the given `(status, body)` pairs, one per incoming request.
    pub fn serve(responses: Vec<(u16, &str)>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake api");
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("ip listener");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let responses: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();

        let handle = std::thread::spawn(move || {
            for (status, body) in responses {
                let Ok(mut request) = server.recv() else {
                    return;
                };
                let mut received = String::new();
                let _ = request.as_reader().read_to_string(&mut received);
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());
                recorded.lock().unwrap().push(Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    authorization,
                    body: received,
                });
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
            handle: Some(handle),
        }
    }

    /// Wait for every canned response to be served and return the requests.
    pub fn finish(mut self) -> Vec<Recorded> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("fake api thread");
        }
        self.requests.lock().unwrap().clone()
    }
}

/// A base URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn credential(role: &str) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u-1","role":"{role}"}}"#))
    )
}

pub const PLAN_JSON: &str = r#"{
    "id": "plan-1",
    "name": "Beach cleanup",
    "description": "Collect plastic on the north shore",
    "startDate": "2025-06-01T08:00:00Z",
    "endDate": "2025-06-01T16:00:00Z",
    "volunteerNumber": 12,
    "destinationId": "dest-9",
    "category_id": "cat-3",
    "associationId": "assoc-2",
    "isActive": true,
    "createdAt": "2025-05-01T10:00:00Z",
    "updatedAt": "2025-05-02T10:00:00Z"
}"#;
