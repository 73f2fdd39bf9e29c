use std::io::Read;

use crate::Result;

/// A bounded sliding window over the not-yet-consumed bytes of the input
/// source.
///
/// The first `len` bytes of the storage are the valid unconsumed window;
/// bytes beyond `len` are stale. The capacity is fixed at construction and
/// caps the length of any single match, since rule selection only ever sees
/// the window.
///
/// Consumed bytes are evicted from the front and the freed space is refilled
/// from the source, so the window stays close to capacity while input
/// remains. Once the source reports end of input, no further reads are
/// attempted.
#[derive(Debug)]
pub(crate) struct InputBuffer {
    storage: Vec<u8>,
    len: usize,
    exhausted: bool,
    bytes_read: usize,
}

impl InputBuffer {
    /// Create a buffer with the given fixed capacity. The buffer is empty
    /// until the first call to `refill`.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity],
            len: 0,
            exhausted: false,
            bytes_read: 0,
        }
    }

    /// The valid unconsumed window.
    #[inline]
    pub(crate) fn window(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// The number of valid unconsumed bytes.
    #[allow(dead_code)]
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Check if the window is empty.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed capacity of the buffer.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Check if the source has reported end of input.
    #[allow(dead_code)]
    #[inline]
    pub(crate) fn source_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The total number of bytes read from the source so far.
    #[inline]
    pub(crate) fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    /// Evict `n` bytes from the front of the window.
    ///
    /// The caller must have matched exactly these bytes; `n` must not exceed
    /// the window length.
    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.len);
        self.storage.copy_within(n..self.len, 0);
        self.len -= n;
    }

    /// Top the window up to capacity from the source.
    ///
    /// Reads repeatedly until the buffer is full or the source reports end
    /// of input. After a `consume(n)` this reads back at most `n` bytes,
    /// since the rest of the buffer is still occupied.
    pub(crate) fn refill(&mut self, reader: &mut impl Read) -> Result<()> {
        while self.len < self.storage.len() && !self.exhausted {
            let count = reader.read(&mut self.storage[self.len..])?;
            if count == 0 {
                self.exhausted = true;
            } else {
                self.len += count;
                self.bytes_read += count;
            }
        }
        Ok(())
    }
}
