//! Append-only little-endian byte sink with offset backpatching.
//!
//! The OBD container stores absolute offsets to sections whose position is
//! only known after a variable-length section is written. `reserve_u32`
//! hands out the placeholder's offset so the caller can backfill it with
//! `replace_with_u32` once the real value exists.

pub struct ByteWriter {
    pub data: Vec<u8>,
    offset: usize,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            offset: 0,
        }
    }

    fn offset(&mut self, offset: usize) {
        self.offset += offset;
    }

    pub fn get_offset(&self) -> usize {
        self.offset
    }

    pub fn append_u8(&mut self, i: u8) {
        self.data.push(i);
        self.offset(1);
    }

    pub fn append_i8(&mut self, i: i8) {
        self.data.extend(i.to_le_bytes());
        self.offset(1);
    }

    pub fn append_u16(&mut self, i: u16) {
        self.data.extend(i.to_le_bytes());
        self.offset(2);
    }

    pub fn append_u32(&mut self, i: u32) {
        self.data.extend(i.to_le_bytes());
        self.offset(4);
    }

    pub fn append_i32(&mut self, i: i32) {
        self.data.extend(i.to_le_bytes());
        self.offset(4);
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) {
        self.data.extend_from_slice(i);
        self.offset(i.len());
    }

    pub fn append_string(&mut self, s: &str) {
        self.data.extend(s.as_bytes());
        self.offset(s.len());
    }

    /// Appends a zeroed u32 and returns its offset for a later backfill.
    pub fn reserve_u32(&mut self) -> usize {
        let start = self.offset;
        self.append_u32(0);
        start
    }

    pub fn replace(&mut self, start: usize, length: usize, slice: &[u8]) {
        self.data[start..(start + length)].copy_from_slice(&slice[..length]);
    }

    pub fn replace_with_u32(&mut self, start: usize, val: u32) {
        let bytes = val.to_le_bytes();
        self.replace(start, 4, &bytes);
    }
}
