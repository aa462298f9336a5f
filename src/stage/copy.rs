//! Bounded-buffer stream copy.

use crate::core::constants::COPY_BUFFER_SIZE;
use std::io::{self, Read, Write};

/// Copies all bytes from `reader` to `writer` through a fixed-size
/// intermediate buffer and returns the number of bytes copied.
///
/// Each iteration reads up to [`COPY_BUFFER_SIZE`] bytes and writes exactly
/// the bytes read; the loop stops when the source is exhausted. Interrupted
/// reads are retried. The writer is flushed before returning. Both streams
/// are borrowed, so their release stays scoped at the caller on every exit
/// path.
///
/// # Errors
///
/// Returns the first I/O error raised by the reader or the writer.
pub fn copy_stream<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut copied: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..read])?;
        copied += read as u64;
    }

    writer.flush()?;
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::copy_stream;
    use crate::core::constants::COPY_BUFFER_SIZE;
    use std::io::{self, Cursor, Read};

    #[test]
    fn copies_source_byte_for_byte() {
        let source = vec![0xFFu8; 500];
        let mut reader = Cursor::new(source.clone());
        let mut dest = Vec::new();

        let copied = copy_stream(&mut reader, &mut dest).unwrap();
        assert_eq!(copied, 500);
        assert_eq!(dest, source);
    }

    #[test]
    fn empty_source_copies_zero_bytes() {
        let mut reader = Cursor::new(Vec::<u8>::new());
        let mut dest = Vec::new();

        let copied = copy_stream(&mut reader, &mut dest).unwrap();
        assert_eq!(copied, 0);
        assert!(dest.is_empty());
    }

    #[test]
    fn sources_larger_than_the_buffer_copy_completely() {
        let source: Vec<u8> = (0..COPY_BUFFER_SIZE * 3 + 17)
            .map(|i| (i % 251) as u8)
            .collect();
        let mut reader = Cursor::new(source.clone());
        let mut dest = Vec::new();

        let copied = copy_stream(&mut reader, &mut dest).unwrap();
        assert_eq!(copied, source.len() as u64);
        assert_eq!(dest, source);
    }

    /// A reader that yields tiny chunks and one spurious interruption, the
    /// way a pipe or socket might.
    struct ChunkedReader {
        data: Vec<u8>,
        position: usize,
        interrupted: bool,
    }

    impl Read for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "try again"));
            }
            let remaining = self.data.len() - self.position;
            let chunk = remaining.min(7).min(buf.len());
            buf[..chunk].copy_from_slice(&self.data[self.position..self.position + chunk]);
            self.position += chunk;
            Ok(chunk)
        }
    }

    #[test]
    fn short_reads_and_interruptions_are_handled() {
        let data: Vec<u8> = (0..100).collect();
        let mut reader = ChunkedReader {
            data: data.clone(),
            position: 0,
            interrupted: false,
        };
        let mut dest = Vec::new();

        let copied = copy_stream(&mut reader, &mut dest).unwrap();
        assert_eq!(copied, 100);
        assert_eq!(dest, data);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn reader_errors_are_propagated() {
        let mut dest = Vec::new();
        let err = copy_stream(&mut FailingReader, &mut dest).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
