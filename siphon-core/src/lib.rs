#![forbid(unsafe_code)]

pub mod error;
pub mod stats;

pub mod util {
    pub mod num;
}

pub mod channel;
pub mod progress;
pub mod pump;
pub mod source;

// Re-exports: stable API surface
pub use channel::{Backend, Channel, PortParams, open_channel};
pub use pump::{DEFAULT_CHUNK_SIZE, TransferOptions, pump};
pub use stats::TransferStats;
