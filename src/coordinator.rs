use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, trace, warn};

use crate::cache::{AlwaysMiss, CachePolicy, ResultCache};
use crate::client::{DynTransport, Transport};
use crate::error::{Error, Result};
use crate::query_key::RequestIdentity;
use crate::types::PlayerList;
use crate::validator;

type PendingFetch = Shared<BoxFuture<'static, Result<PlayerList>>>;
type PendingMap = HashMap<RequestIdentity, PendingFetch>;

/// Runs at most one fetch per request identity at a time.
///
/// Every caller that arrives while a fetch is in flight awaits that same
/// fetch and gets the same outcome. The in-flight entry is removed as soon as
/// the fetch settles, so the next call after a success or a failure starts
/// over.
pub struct FetchCoordinator {
    transport: DynTransport,
    cache: Arc<ResultCache>,
    policy: Box<dyn CachePolicy + Send + Sync>,
    pending: Arc<Mutex<PendingMap>>,
}

impl FetchCoordinator {
    /// Uses the [`AlwaysMiss`] policy: every call not joining an in-flight
    /// fetch goes to the player service.
    pub fn new(transport: DynTransport, cache: Arc<ResultCache>) -> Self {
        Self {
            transport,
            cache,
            policy: Box::new(AlwaysMiss),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_policy(mut self, policy: impl CachePolicy + Send + Sync + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    pub fn is_pending(&self, identity: &RequestIdentity) -> bool {
        lock(&self.pending).contains_key(identity)
    }

    /// Resolves `identity` by joining the in-flight fetch or starting one.
    ///
    /// Returns `Ok(None)` without fetching when the cache policy reports a
    /// hit; reading the cache is then up to the caller.
    pub async fn resolve(&self, identity: &RequestIdentity) -> Result<Option<PlayerList>> {
        // The lock is only held to look up or register the fetch, never
        // across the await.
        let fetch = match lock(&self.pending).entry(identity.clone()) {
            Entry::Occupied(e) => {
                debug!(%identity, "joining in-flight player fetch");
                e.get().clone()
            }
            Entry::Vacant(e) => {
                if !self.policy.is_miss(identity, &self.cache) {
                    debug!(%identity, "cache policy reported a hit, not fetching");
                    return Ok(None);
                }
                debug!(%identity, "fetching players");
                e.insert(self.start_fetch(identity.clone())).clone()
            }
        };

        fetch.await.map(Some)
    }

    fn start_fetch(&self, identity: RequestIdentity) -> PendingFetch {
        let transport = self.transport.clone();
        let cache = self.cache.clone();
        let settle = Settle {
            pending: Arc::downgrade(&self.pending),
            identity: identity.clone(),
        };

        // Runs on its own task so it completes even if every caller goes away.
        let task = tokio::spawn(async move {
            let outcome = fetch_players(transport.as_ref(), &identity).await;
            match &outcome {
                Ok(players) => {
                    debug!(%identity, count = players.len(), "storing fetched players");
                    trace!(%identity, ?players, "fetched players");
                    cache.put(identity.clone(), players.clone());
                }
                Err(e) => warn!(%identity, error = %e, "player fetch failed"),
            }
            drop(settle);
            outcome
        });

        task.map(|joined| joined.unwrap_or_else(|e| Err(Error::FetchAborted(e.to_string()))))
            .boxed()
            .shared()
    }
}

async fn fetch_players(
    transport: &(dyn Transport + Send + Sync),
    identity: &RequestIdentity,
) -> Result<PlayerList> {
    let payload = transport.fetch_json(identity.url()).await?;
    Ok(Arc::new(validator::extract_players(payload)?))
}

/// Removes the in-flight entry when dropped, including while a fetch unwinds.
struct Settle {
    pending: Weak<Mutex<PendingMap>>,
    identity: RequestIdentity,
}

impl Drop for Settle {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.upgrade() {
            lock(&pending).remove(&self.identity);
        }
    }
}

fn lock(pending: &Mutex<PendingMap>) -> MutexGuard<'_, PendingMap> {
    pending.lock().unwrap_or_else(|e| e.into_inner())
}
