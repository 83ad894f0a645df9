use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::query_key::RequestIdentity;
use crate::types::PlayerList;

/// Last validated player list per request identity.
///
/// Entries live as long as the cache does; nothing expires or gets evicted.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: Mutex<HashMap<RequestIdentity, PlayerList>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identity: &RequestIdentity) -> Option<PlayerList> {
        self.lock().get(identity).cloned()
    }

    pub fn put(&self, identity: RequestIdentity, players: PlayerList) {
        self.lock().insert(identity, players);
    }

    pub fn contains(&self, identity: &RequestIdentity) -> bool {
        self.lock().contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<RequestIdentity, PlayerList>> {
        // a panic while holding the lock cannot leave a half-written entry
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Decides whether a lookup must go to the player service.
pub trait CachePolicy {
    fn is_miss(&self, identity: &RequestIdentity, cache: &ResultCache) -> bool;
}

impl<F> CachePolicy for F
where
    F: Fn(&RequestIdentity, &ResultCache) -> bool,
{
    fn is_miss(&self, identity: &RequestIdentity, cache: &ResultCache) -> bool {
        self(identity, cache)
    }
}

/// Every lookup fetches. The cache is written but never served from.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysMiss;

impl CachePolicy for AlwaysMiss {
    fn is_miss(&self, _identity: &RequestIdentity, _cache: &ResultCache) -> bool {
        true
    }
}

/// Serves any cached entry; fetches only identities never seen before.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreferCached;

impl CachePolicy for PreferCached {
    fn is_miss(&self, identity: &RequestIdentity, cache: &ResultCache) -> bool {
        !cache.contains(identity)
    }
}
