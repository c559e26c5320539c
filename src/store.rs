use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::models::AnalysisResult;

struct StoredAnalysis {
    seq: u64,
    saved_at: Instant,
    result: AnalysisResult,
}

#[derive(Default)]
struct Entries {
    by_url: HashMap<String, StoredAnalysis>,
    next_seq: u64,
}

/// In-memory cache of finished analyses keyed by normalized URL.
///
/// Cheaply cloneable — all clones share the same underlying map via `Arc`.
/// Saving a URL again replaces the earlier result and makes it the newest
/// entry.
#[derive(Clone, Default)]
pub struct AnalysisStore {
    entries: Arc<RwLock<Entries>>,
    ttl: Option<Duration>,
}

impl AnalysisStore {
    /// A store whose entries never expire.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose entries are ignored by [`get`](Self::get) once older
    /// than `ttl` and dropped on the next [`save`](Self::save). `None`
    /// disables expiry.
    pub fn with_ttl(ttl: Option<Duration>) -> Self {
        Self {
            entries: Arc::default(),
            ttl,
        }
    }

    pub async fn save(&self, result: AnalysisResult) {
        let mut entries = self.entries.write().await;
        if let Some(ttl) = self.ttl {
            let before = entries.by_url.len();
            entries.by_url.retain(|_, stored| stored.saved_at.elapsed() < ttl);
            let pruned = before - entries.by_url.len();
            if pruned > 0 {
                tracing::debug!(pruned, "Dropped expired analyses");
            }
        }
        let seq = entries.next_seq;
        entries.next_seq += 1;
        entries.by_url.insert(
            result.url.clone(),
            StoredAnalysis {
                seq,
                saved_at: Instant::now(),
                result,
            },
        );
    }

    /// The stored result for `url`, unless it has expired.
    pub async fn get(&self, url: &str) -> Option<AnalysisResult> {
        let entries = self.entries.read().await;
        let stored = entries.by_url.get(url)?;
        match self.ttl {
            Some(ttl) if stored.saved_at.elapsed() >= ttl => None,
            _ => Some(stored.result.clone()),
        }
    }

    /// Up to `limit` results, most recently saved first.
    pub async fn recent(&self, limit: usize) -> Vec<AnalysisResult> {
        let entries = self.entries.read().await;
        let mut stored: Vec<&StoredAnalysis> = entries.by_url.values().collect();
        stored.sort_by(|a, b| b.seq.cmp(&a.seq));
        stored
            .into_iter()
            .take(limit)
            .map(|s| s.result.clone())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.by_url.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
