use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Value};

use crate::client::Transport;
use crate::error::Result;

type Respond = Box<dyn Fn(usize, &Url) -> Result<Value> + Send + Sync>;

/// In-process transport that counts calls and answers after a short delay,
/// so concurrent lookups overlap.
pub struct FakeTransport {
    calls: AtomicUsize,
    delay: Duration,
    respond: Respond,
}

impl FakeTransport {
    /// `respond` gets the zero-based call number and the requested URL.
    pub fn new(respond: impl Fn(usize, &Url) -> Result<Value> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            delay: Duration::from_millis(20),
            respond: Box::new(respond),
        })
    }

    pub fn returning(payload: Value) -> Arc<Self> {
        Self::new(move |_, _| Ok(payload.clone()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn fetch_json(&self, url: &Url) -> Result<Value> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        (self.respond)(call, url)
    }
}

pub fn endpoint() -> Url {
    Url::parse("https://api.example.com/v1.1/pull/nfl/current/active_players.json").unwrap()
}

pub fn brady_payload() -> Value {
    json!({
        "activeplayers": {
            "playerentry": [{
                "player": { "ID": "7549", "LastName": "Brady", "FirstName": "Tom", "Position": "QB" },
                "team": { "ID": "50", "Abbreviation": "NE" }
            }]
        }
    })
}
