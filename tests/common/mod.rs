//! Shared test harness for integration tests.
//!
//! [`TestHarness`] wires a [`FakeProvider`] into a full [`AppContext`]. The
//! [`TestHarness::with_server`] constructor starts Axum on a random port for
//! HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use highlights_common::{Error, Result};
use highlights_hub::config::Config;
use highlights_hub::provider::VideoSearchProvider;
use highlights_hub::server::{create_router, AppContext};
use serde_json::{json, Value};

/// What the fake provider answers with.
#[derive(Clone)]
pub enum FakeResponse {
    Payload(Value),
    Upstream(u16, String),
    Transport(String),
}

/// Provider double that records every phrase it is asked for.
pub struct FakeProvider {
    response: FakeResponse,
    calls: AtomicUsize,
    phrases: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new(response: FakeResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            phrases: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn phrases(&self) -> Vec<String> {
        self.phrases.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl VideoSearchProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn search(&self, phrase: &str) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.phrases.lock().unwrap().push(phrase.to_string());

        match &self.response {
            FakeResponse::Payload(value) => Ok(value.clone()),
            FakeResponse::Upstream(status, text) => Err(Error::upstream(*status, text.clone())),
            FakeResponse::Transport(msg) => Err(Error::Http(msg.clone())),
        }
    }
}

pub struct TestHarness {
    pub ctx: AppContext,
    pub provider: Arc<FakeProvider>,
}

impl TestHarness {
    pub fn new(response: FakeResponse) -> Self {
        Self::with_config(Config::default(), response)
    }

    pub fn with_config(config: Config, response: FakeResponse) -> Self {
        let provider = Arc::new(FakeProvider::new(response));
        let ctx = AppContext::new(config, provider.clone());
        Self { ctx, provider }
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx.clone(), None)
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server(response: FakeResponse) -> (Self, SocketAddr) {
        let harness = Self::new(response);
        let app = harness.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}

/// One well-formed provider search item.
pub fn item(id: &str, title: &str) -> Value {
    json!({
        "kind": "youtube#searchResult",
        "id": { "kind": "youtube#video", "videoId": id },
        "snippet": {
            "title": title,
            "description": "",
            "thumbnails": {
                "default": { "url": format!("https://i.ytimg.com/vi/{id}/default.jpg") },
                "high": { "url": format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg") }
            },
            "publishedAt": "2024-01-01T00:00:00Z",
            "channelTitle": "NHL"
        }
    })
}

pub fn payload(items: Vec<Value>) -> Value {
    json!({
        "kind": "youtube#searchListResponse",
        "items": items,
    })
}

/// Four items, three of which look like highlights.
pub fn mixed_payload() -> Value {
    payload(vec![
        item("goal1", "Bruins vs Leafs Highlights"),
        item("talk1", "Coach interview after practice"),
        item("goal2", "Pastrnak hat trick goal"),
        item("save1", "Swayman incredible save"),
    ])
}
