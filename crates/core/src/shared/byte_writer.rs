/// Big-endian append buffer used by the encoder.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn put_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn put_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_i16(&mut self, v: i16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_f32(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::byte_reader::ByteReader;

    #[test]
    fn test_writes_big_endian() {
        let mut w = ByteWriter::default();
        w.put_u16(0x0102);
        w.put_u32(0x0304_0506);
        assert_eq!(w.into_inner(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_len_tracks_writes() {
        let mut w = ByteWriter::with_capacity(16);
        assert!(w.is_empty());
        w.put_u64(7);
        w.put_u8(1);
        assert_eq!(w.len(), 9);
    }

    #[test]
    fn test_reader_reads_back_mixed_values() {
        let mut w = ByteWriter::default();
        w.put_i16(-300);
        w.put_i32(-70_000);
        w.put_f32(1.5);
        w.put_f64(-2.25);
        w.put_bytes(b"ok");
        let bytes = w.into_inner();

        let mut r = ByteReader::new(&bytes);
        assert_eq!(r.read_i16().unwrap(), -300);
        assert_eq!(r.read_i32().unwrap(), -70_000);
        assert_eq!(r.read_f32().unwrap(), 1.5);
        assert_eq!(r.read_f64().unwrap(), -2.25);
        assert_eq!(r.read_bytes(2).unwrap(), b"ok");
        assert!(r.is_empty());
    }
}
