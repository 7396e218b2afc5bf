//! Fixed-offset integer access into header buffers
//!
//! Checkers read a whole header into a buffer and pick fields out of it
//! at the offsets their grammar dictates. All functions panic if the
//! field does not fit into the buffer; offsets are compile-time
//! constants at every call site.

/// ```
/// # use lince_common::bytes::*;
/// assert_eq!(be_u16(&[0x01, 0x02, 0x03], 1), 0x0203);
/// ```
pub fn be_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes(buf[offset..offset + 2].try_into().unwrap())
}

pub fn le_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(buf[offset..offset + 2].try_into().unwrap())
}

pub fn be_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(buf[offset..offset + 4].try_into().unwrap())
}

/// Signed variant for dimension fields where a negative value must be
/// caught by the `>= 1` validity check rather than wrap to a huge size.
pub fn be_i32(buf: &[u8], offset: usize) -> i32 {
    i32::from_be_bytes(buf[offset..offset + 4].try_into().unwrap())
}

pub fn le_i32(buf: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap())
}
