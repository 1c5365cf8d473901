use std::sync::Arc;

use tokio::sync::RwLock;

use crate::board::JobBoard;
use crate::extraction::JobExtractor;
use crate::ingest::inbox::EmailSource;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Single-writer board: each operation is atomic with respect to the
    /// request that triggered it. No persistence behind it.
    pub board: Arc<RwLock<JobBoard>>,
    pub llm: LlmClient,
    /// Pluggable extraction backend. Production: `GeminiExtractor`.
    pub extractor: Arc<dyn JobExtractor>,
    /// Pluggable mail source. Production: `MockInbox` until a real
    /// integration lands.
    pub inbox: Arc<dyn EmailSource>,
}
