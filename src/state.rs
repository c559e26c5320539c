use crate::fetch::PageFetcher;
use crate::store::AnalysisStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: AnalysisStore,
    pub fetcher: PageFetcher,
    pub recent_limit_max: usize,
}
