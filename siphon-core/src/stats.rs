use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransferStats {
    pub chunks: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub elapsed_ms: u64,
    /// The run stopped because the source ran out of data.
    pub source_exhausted: bool,
    /// The run stopped at the configured chunk limit.
    pub hit_limit: bool,
    pub started_ts: i64,
}
