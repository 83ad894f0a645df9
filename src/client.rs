use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::error::Result;

/// Outbound fetch capability used by the coordinator.
#[async_trait]
pub trait Transport {
    /// GETs `url` and decodes the body as JSON.
    async fn fetch_json(&self, url: &Url) -> Result<Value>;
}

pub type DynTransport = Arc<dyn Transport + Send + Sync>;
