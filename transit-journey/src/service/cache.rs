//! Caching layer for static feeds.
//!
//! The route network and stop inventory change rarely, so they are kept for
//! a while between plans. Vehicle positions are live and never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{RouteFeature, Stop};

/// Which static feed an entry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FeedKind {
    Routes,
    Stops,
}

/// Cached feed entry.
#[derive(Debug, Clone)]
enum CachedFeed {
    Routes(Arc<Vec<RouteFeature>>),
    Stops(Arc<Vec<Stop>>),
}

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 4,
        }
    }
}

/// Cache for the route network and stop inventory.
pub struct FeedCache {
    feeds: MokaCache<FeedKind, CachedFeed>,
}

impl FeedCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let feeds = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { feeds }
    }

    /// Get the cached route network.
    pub async fn routes(&self) -> Option<Arc<Vec<RouteFeature>>> {
        match self.feeds.get(&FeedKind::Routes).await {
            Some(CachedFeed::Routes(routes)) => Some(routes),
            _ => None,
        }
    }

    pub async fn insert_routes(&self, routes: Arc<Vec<RouteFeature>>) {
        self.feeds
            .insert(FeedKind::Routes, CachedFeed::Routes(routes))
            .await;
    }

    /// Get the cached stop inventory.
    pub async fn stops(&self) -> Option<Arc<Vec<Stop>>> {
        match self.feeds.get(&FeedKind::Stops).await {
            Some(CachedFeed::Stops(stops)) => Some(stops),
            _ => None,
        }
    }

    pub async fn insert_stops(&self, stops: Arc<Vec<Stop>>) {
        self.feeds
            .insert(FeedKind::Stops, CachedFeed::Stops(stops))
            .await;
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.feeds.invalidate_all();
    }
}
