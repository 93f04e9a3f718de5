//! Page regeneration cache
//!
//! Each generated page is kept for its revalidate window. Requests after
//! the window regenerate the page; when that fails the stale copy keeps
//! being served.

use crate::error::Result;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
struct CachedPage<V> {
    page: V,
    generated_at: Instant,
}

/// Generated pages keyed by path
#[derive(Debug)]
pub struct PageCache<V> {
    revalidate: Duration,
    pages: RwLock<HashMap<String, CachedPage<V>>>,
}

impl<V: Clone> PageCache<V> {
    pub fn new(revalidate: Duration) -> Self {
        Self {
            revalidate,
            pages: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached page for `key`, regenerating it when missing or stale
    ///
    /// A missing page that fails to generate returns the error. A stale page
    /// that fails to regenerate is served as is, unless the source reports
    /// it no longer exists.
    pub async fn get_or_generate<F, Fut>(&self, key: &str, generate: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        let stale = {
            let pages = self.pages.read().await;
            match pages.get(key) {
                Some(cached) if cached.generated_at.elapsed() < self.revalidate => {
                    return Ok(cached.page.clone());
                }
                Some(cached) => Some(cached.page.clone()),
                None => None,
            }
        };

        debug!(key = %key, stale = stale.is_some(), "Generating page");

        match generate().await {
            Ok(page) => {
                self.pages.write().await.insert(
                    key.to_string(),
                    CachedPage {
                        page: page.clone(),
                        generated_at: Instant::now(),
                    },
                );
                Ok(page)
            }
            Err(e) if e.is_not_found() => {
                self.pages.write().await.remove(key);
                Err(e)
            }
            Err(e) => match stale {
                Some(page) => {
                    warn!(key = %key, error = %e, "Regeneration failed, serving stale page");
                    Ok(page)
                }
                None => Err(e),
            },
        }
    }

    /// Store a freshly generated page
    pub async fn insert(&self, key: &str, page: V) {
        self.pages.write().await.insert(
            key.to_string(),
            CachedPage {
                page,
                generated_at: Instant::now(),
            },
        );
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.pages.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }
}
