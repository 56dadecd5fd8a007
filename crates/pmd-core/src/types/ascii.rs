//! Fixed-width, space-padded ASCII text fields.
//!
//! PMD carries text (the instrument symbol) in fixed-width slots. Encoding
//! writes one byte per character, pads with spaces, and silently truncates
//! anything that does not fit. Decoding returns the slot verbatim, padding
//! included.

/// Width of the instrument field in every profile.
pub const INSTRUMENT_LEN: usize = 8;

/// Fill byte for unused trailing positions.
pub const PAD: u8 = b' ';

/// Stand-in byte for characters that have no ASCII representation.
const REPLACEMENT: u8 = b'?';

/// Write `s` into `dst`, one byte per character, padding the rest of `dst`
/// with [`PAD`].
///
/// Characters beyond `dst.len()` are dropped. Non-ASCII characters are
/// written as `?`. Returns the number of characters written.
#[inline]
pub fn write_padded(dst: &mut [u8], s: &str) -> usize {
    let mut count = 0;
    for (slot, ch) in dst.iter_mut().zip(s.chars()) {
        *slot = if ch.is_ascii() { ch as u8 } else { REPLACEMENT };
        count += 1;
    }
    dst[count..].fill(PAD);
    count
}

/// Read a fixed-width slot as ASCII text without trimming.
///
/// Each byte is masked to 7 bits, so the result is always pure ASCII.
#[inline]
pub fn read_padded(src: &[u8]) -> String {
    src.iter().map(|&b| (b & 0x7f) as char).collect()
}

/// Encode an instrument symbol into its fixed wire representation.
#[inline]
pub fn instrument_to_bytes(s: &str) -> [u8; INSTRUMENT_LEN] {
    let mut buf = [PAD; INSTRUMENT_LEN];
    write_padded(&mut buf, s);
    buf
}

/// Decode an instrument symbol, keeping any trailing padding.
#[inline]
pub fn instrument_from_bytes(buf: &[u8; INSTRUMENT_LEN]) -> String {
    read_padded(buf)
}
