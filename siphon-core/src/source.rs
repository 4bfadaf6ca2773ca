use crate::error::{Result, SiphonError};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Lazy, finite, non-restartable sequence of fixed-size chunks read off an
/// open stream. Every chunk is exactly `chunk_size` bytes except possibly
/// the last one, which may be shorter at true end-of-file.
pub struct ChunkSource<R: Read> {
    inner: R,
    chunk_size: usize,
}

impl ChunkSource<File> {
    /// Open `path` and position the sequence at `seek_offset`. An offset at
    /// or past end-of-file yields an empty sequence, not an error.
    pub fn open(path: &Path, seek_offset: u64, chunk_size: usize) -> Result<Self> {
        let mut f = File::open(path)?;
        f.seek(SeekFrom::Start(seek_offset))?;
        Self::new(f, chunk_size)
    }
}

impl<R: Read> ChunkSource<R> {
    pub fn new(inner: R, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(SiphonError::Config("chunk size must be nonzero".into()));
        }
        Ok(Self { inner, chunk_size })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Fill `buf` with the next chunk and return its length, 0 once the
    /// stream is exhausted. Short reads from the underlying stream are
    /// re-polled, so chunk boundaries never depend on transport
    /// fragmentation.
    pub fn next_chunk(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        buf.clear();
        buf.resize(self.chunk_size, 0);
        let mut filled = 0;
        while filled < self.chunk_size {
            let n = self.inner.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        buf.truncate(filled);
        Ok(filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(ChunkSource::new(Cursor::new(vec![1u8, 2, 3]), 0).is_err());
    }

    #[test]
    fn full_chunks_then_short_tail() {
        let data: Vec<u8> = (0..10u8).collect();
        let mut src = ChunkSource::new(Cursor::new(data), 4).unwrap();
        let mut buf = Vec::new();

        assert_eq!(src.next_chunk(&mut buf).unwrap(), 4);
        assert_eq!(buf, &[0, 1, 2, 3]);
        assert_eq!(src.next_chunk(&mut buf).unwrap(), 4);
        assert_eq!(buf, &[4, 5, 6, 7]);
        assert_eq!(src.next_chunk(&mut buf).unwrap(), 2);
        assert_eq!(buf, &[8, 9]);
        assert_eq!(src.next_chunk(&mut buf).unwrap(), 0);
        assert!(buf.is_empty());
    }

    /// A reader that trickles one byte per read call; chunks must still
    /// come out full-size.
    struct OneByteReader(Cursor<Vec<u8>>);

    impl Read for OneByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let end = buf.len().min(1);
            self.0.read(&mut buf[..end])
        }
    }

    #[test]
    fn short_reads_are_repolled() {
        let data: Vec<u8> = (0..8u8).collect();
        let mut src = ChunkSource::new(OneByteReader(Cursor::new(data)), 8).unwrap();
        let mut buf = Vec::new();
        assert_eq!(src.next_chunk(&mut buf).unwrap(), 8);
        assert_eq!(buf, &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(src.next_chunk(&mut buf).unwrap(), 0);
    }

    #[test]
    fn open_seeks_to_offset() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&[0xAAu8; 16]).unwrap();
        f.write_all(&[0xBBu8; 8]).unwrap();
        f.flush().unwrap();

        let mut src = ChunkSource::open(f.path(), 16, 8).unwrap();
        let mut buf = Vec::new();
        assert_eq!(src.next_chunk(&mut buf).unwrap(), 8);
        assert_eq!(buf, &[0xBB; 8]);
        assert_eq!(src.next_chunk(&mut buf).unwrap(), 0);
    }

    #[test]
    fn offset_past_eof_is_empty() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&[1u8, 2, 3]).unwrap();
        f.flush().unwrap();

        let mut src = ChunkSource::open(f.path(), 1024, 8).unwrap();
        let mut buf = Vec::new();
        assert_eq!(src.next_chunk(&mut buf).unwrap(), 0);
    }
}
