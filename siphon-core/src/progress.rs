use crate::stats::TransferStats;
use std::io::Write;

/// Cosmetic run feedback; no effect on correctness.
pub trait Progress {
    fn chunk_done(&mut self, chunks: u64);
    fn finish(&mut self, stats: &TransferStats);
}

/// Overwrites a single terminal line with the running chunk count.
pub struct TermProgress;

impl Progress for TermProgress {
    fn chunk_done(&mut self, chunks: u64) {
        eprint!("\rprocessed {chunks} chunks");
        let _ = std::io::stderr().flush();
    }

    fn finish(&mut self, stats: &TransferStats) {
        if stats.chunks > 0 {
            eprintln!();
        }
        eprintln!(
            "{} chunks, {} bytes in {} ms",
            stats.chunks, stats.bytes_received, stats.elapsed_ms
        );
    }
}

pub struct NullProgress;

impl Progress for NullProgress {
    fn chunk_done(&mut self, _chunks: u64) {}

    fn finish(&mut self, _stats: &TransferStats) {}
}
