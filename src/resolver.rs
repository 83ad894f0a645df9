use std::sync::Arc;

use reqwest::Url;

use crate::api_client::HttpTransport;
use crate::cache::ResultCache;
use crate::coordinator::FetchCoordinator;
use crate::error::{Error, Result};
use crate::query_key::RequestIdentity;
use crate::settings::Settings;
use crate::types::{PlayerList, PlayerQuery};

/// Answers `player` field lookups by name or id.
pub struct PlayerResolver {
    endpoint: Url,
    coordinator: FetchCoordinator,
}

impl PlayerResolver {
    pub fn new(endpoint: Url, coordinator: FetchCoordinator) -> Self {
        Self {
            endpoint,
            coordinator,
        }
    }

    /// HTTP transport and a fresh cache, configured from `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = Arc::new(HttpTransport::from_settings(settings)?);
        let coordinator = FetchCoordinator::new(transport, Arc::new(ResultCache::new()));
        Ok(Self::new(settings.endpoint.clone(), coordinator))
    }

    pub fn cache(&self) -> &Arc<ResultCache> {
        self.coordinator.cache()
    }

    pub fn identity(&self, query: &PlayerQuery) -> Result<RequestIdentity> {
        RequestIdentity::build(&self.endpoint, query)
    }

    pub async fn resolve_query(&self, query: &PlayerQuery) -> Result<PlayerList> {
        let identity = self.identity(query)?;

        if let Some(players) = self.coordinator.resolve(&identity).await? {
            return Ok(players);
        }

        self.cache()
            .get(&identity)
            .ok_or(Error::PlayerNotResolvable(identity))
    }

    /// Cached records for `query`, without touching the player service.
    pub fn cached(&self, query: &PlayerQuery) -> Result<Option<PlayerList>> {
        Ok(self.cache().get(&self.identity(query)?))
    }
}
