//! Incremental rune decoding from byte streams
//!
//! Bytes are read in fixed-size chunks. Complete UTF-8 sequences are decoded
//! immediately, an incomplete trailing sequence is carried over to the next
//! read, and invalid bytes decode as U+FFFD.

use std::io::{self, Read};

/// Default read size in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Reads runes from a byte stream in a single forward pass
pub struct RuneReader<R> {
    reader: R,
    chunk_size: usize,
    /// Bytes of a sequence split across reads
    carry: Vec<u8>,
    bytes_read: u64,
}

impl<R: Read> RuneReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size: chunk_size.max(4),
            carry: Vec::with_capacity(4),
            bytes_read: 0,
        }
    }

    /// Total bytes consumed from the underlying reader
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Feed every rune of the stream to `f`, in order.
    ///
    /// Stops at the first read error; runes decoded before the error have
    /// already been delivered.
    pub fn for_each_rune<F: FnMut(char)>(&mut self, mut f: F) -> io::Result<()> {
        let mut chunk = vec![0u8; self.chunk_size];

        loop {
            let n = match self.reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.bytes_read += n as u64;

            if self.carry.is_empty() {
                let consumed = decode_prefix(&chunk[..n], &mut f);
                self.carry.extend_from_slice(&chunk[consumed..n]);
            } else {
                self.carry.extend_from_slice(&chunk[..n]);
                let pending = std::mem::take(&mut self.carry);
                let consumed = decode_prefix(&pending, &mut f);
                self.carry.extend_from_slice(&pending[consumed..]);
            }
        }

        // Stream ended inside a multi-byte sequence
        if !self.carry.is_empty() {
            self.carry.clear();
            f(char::REPLACEMENT_CHARACTER);
        }

        Ok(())
    }
}

/// Decode all complete sequences in `bytes`, returning how many bytes were consumed
fn decode_prefix<F: FnMut(char)>(bytes: &[u8], f: &mut F) -> usize {
    let mut offset = 0;

    loop {
        match std::str::from_utf8(&bytes[offset..]) {
            Ok(text) => {
                text.chars().for_each(&mut *f);
                return bytes.len();
            }
            Err(e) => {
                let valid_end = offset + e.valid_up_to();
                std::str::from_utf8(&bytes[offset..valid_end])
                    .unwrap_or_default()
                    .chars()
                    .for_each(&mut *f);
                offset = valid_end;

                match e.error_len() {
                    Some(len) => {
                        f(char::REPLACEMENT_CHARACTER);
                        offset += len;
                    }
                    // Incomplete sequence at the end: wait for more input
                    None => return offset,
                }
            }
        }
    }
}
