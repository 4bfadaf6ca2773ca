use crate::channel::Channel;
use crate::error::Result;
use crate::progress::Progress;
use crate::source::ChunkSource;
use crate::stats::TransferStats;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use time::OffsetDateTime;

pub const DEFAULT_CHUNK_SIZE: usize = 1024;

#[derive(Clone, Debug)]
pub struct TransferOptions {
    /// Byte offset into the source where reading starts.
    pub seek_offset: u64,
    /// Bytes per chunk sent over the channel.
    pub chunk_size: usize,
    /// Stop after this many chunks; `None` runs to end-of-file.
    pub chunk_limit: Option<u64>,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            seek_offset: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_limit: None,
        }
    }
}

/// Send one chunk and collect the equal-length response into `resp`, one
/// byte per poll, discarding no-data sentinels without counting them.
/// There is no aggregate deadline: a device that stalls blocks here until
/// it answers. That lockstep exchange is the protocol, not an oversight.
pub fn round_trip(channel: &mut dyn Channel, chunk: &[u8], resp: &mut Vec<u8>) -> Result<()> {
    channel.send(chunk)?;
    resp.clear();
    while resp.len() < chunk.len() {
        if let Some(byte) = channel.recv_byte()? {
            resp.push(byte);
        }
    }
    Ok(())
}

/// Stream `source` through the channel into `dest`, chunk by chunk, in
/// strict one-to-one order: response `i` is appended before chunk `i + 1`
/// is read. Stops at end-of-file or at `opts.chunk_limit`, whichever comes
/// first. The destination is truncated at start and flushed before return;
/// the channel and both files are released on every exit path by drop.
pub fn pump(
    channel: &mut dyn Channel,
    source: &Path,
    dest: &Path,
    opts: &TransferOptions,
    progress: &mut dyn Progress,
) -> Result<TransferStats> {
    let started_ts = OffsetDateTime::now_utc().unix_timestamp();
    let clock = Instant::now();

    let mut src = ChunkSource::open(source, opts.seek_offset, opts.chunk_size)?;
    let mut out = File::create(dest)?;

    tracing::info!(
        source = %source.display(),
        dest = %dest.display(),
        offset = opts.seek_offset,
        chunk_size = opts.chunk_size,
        limit = opts.chunk_limit,
        "transfer start"
    );

    let mut stats = TransferStats {
        started_ts,
        ..Default::default()
    };
    let mut chunk = Vec::with_capacity(opts.chunk_size);
    let mut resp = Vec::with_capacity(opts.chunk_size);

    loop {
        if let Some(limit) = opts.chunk_limit {
            if stats.chunks >= limit {
                stats.hit_limit = true;
                break;
            }
        }
        let n = src.next_chunk(&mut chunk)?;
        if n == 0 {
            stats.source_exhausted = true;
            break;
        }

        round_trip(channel, &chunk, &mut resp)?;
        out.write_all(&resp)?;

        stats.chunks += 1;
        stats.bytes_sent += n as u64;
        stats.bytes_received += resp.len() as u64;
        progress.chunk_done(stats.chunks);
        tracing::trace!(chunk = stats.chunks, len = n, "round trip done");
    }

    out.flush()?;
    stats.elapsed_ms = clock.elapsed().as_millis() as u64;
    progress.finish(&stats);
    tracing::info!(
        chunks = stats.chunks,
        bytes = stats.bytes_received,
        elapsed_ms = stats.elapsed_ms,
        "transfer done"
    );
    Ok(stats)
}
