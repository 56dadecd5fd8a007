//! Big-endian integer access at fixed offsets.
//!
//! 64-bit values travel as two 32-bit big-endian halves, high half first,
//! which is byte-for-byte the same as one big-endian `u64`.
//!
//! Callers check the buffer length against the layout size before calling
//! any of these, so offsets are always in bounds.

#[inline]
pub fn write_u32_be(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

#[inline]
pub fn read_u32_be(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(buf[offset..offset + 4].try_into().unwrap_or([0; 4]))
}

/// Write `value` as high then low 32-bit big-endian halves.
#[inline]
pub fn write_u64_be(buf: &mut [u8], offset: usize, value: u64) {
    write_u32_be(buf, offset, (value >> 32) as u32);
    write_u32_be(buf, offset + 4, value as u32);
}

/// Read two 32-bit big-endian halves and combine as `high * 2^32 + low`.
#[inline]
pub fn read_u64_be(buf: &[u8], offset: usize) -> u64 {
    let high = read_u32_be(buf, offset) as u64;
    let low = read_u32_be(buf, offset + 4) as u64;
    (high << 32) | low
}
