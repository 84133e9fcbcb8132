//! Line buffer for console input

use crate::config::LINE_SIZE;

/// Line input buffer
///
/// Bytes at and past the cursor are kept zeroed on every edit, so the
/// buffer always reads as a zero-terminated line.
pub struct LineBuffer {
    buf: [u8; LINE_SIZE],
    len: usize,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_SIZE],
            len: 0,
        }
    }

    /// Push a character
    ///
    /// Returns `false` without storing anything if the buffer is full.
    pub fn push(&mut self, c: u8) -> bool {
        if self.len < LINE_SIZE {
            self.buf[self.len] = c;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Remove last character
    ///
    /// Clears the slot that falls out of the line. Returns `false` at position zero.
    pub fn backspace(&mut self) -> bool {
        if self.len > 0 {
            self.len -= 1;
            self.buf[self.len] = 0;
            true
        } else {
            false
        }
    }

    /// Restart the line at position zero, keeping stale bytes.
    ///
    /// Used by the wrapping overflow policy. Bytes past the cursor are not part
    /// of the line and get overwritten as input continues.
    pub fn rewind(&mut self) {
        self.len = 0;
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf = [0u8; LINE_SIZE];
        self.len = 0;
    }

    /// Get buffer as string slice, `None` if the bytes are not UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if full
    pub fn is_full(&self) -> bool {
        self.len == LINE_SIZE
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get the whole backing storage, including bytes past the cursor
    pub fn raw(&self) -> &[u8; LINE_SIZE] {
        &self.buf
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
