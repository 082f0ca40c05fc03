use std::path::PathBuf;
use std::time::Duration;

use scoutx_core::DEFAULT_DATASET_PATHS;

/// Configuration for the retrieval engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Candidate dataset locations, tried in order
    pub dataset_paths: Vec<PathBuf>,
    /// How many keyword/background/skill entries statistics report
    pub stats_top_n: usize,
    /// Upper bound on the per-query result count
    pub max_limit: usize,
    /// Time budget for one generative explanation call
    pub explain_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dataset_paths: DEFAULT_DATASET_PATHS.iter().copied().map(PathBuf::from).collect(),
            stats_top_n: 15,
            max_limit: 20,
            explain_timeout: Duration::from_secs(10),
        }
    }
}

impl EngineConfig {
    /// Replace the candidate dataset list with a single concrete path
    pub fn with_dataset(mut self, path: PathBuf) -> Self {
        self.dataset_paths = vec![path];
        self
    }
}
