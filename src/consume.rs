use crate::error::{err, ErrorKind};
use crate::Error;

/// Attempts to claim `bytes` bytes out of `input`.
pub fn consume_bytes<'a>(input: &mut &'a [u8], bytes: usize) -> Result<&'a [u8], Error> {
    if bytes > input.len() {
        return err(ErrorKind::Eof, "EOF");
    }
    let (bytes, remaining) = input.split_at(bytes);
    *input = remaining;
    Ok(bytes)
}

/// Like `consume_bytes` but returns a `[u8; N]`.
pub fn consume_array<const N: usize>(input: &mut &[u8]) -> Result<[u8; N], Error> {
    let bytes = consume_bytes(input, N)?;
    let mut array = [0; N];
    array.copy_from_slice(bytes);
    Ok(array)
}

/// Reads a big-endian `i64`, advancing `input`.
pub fn consume_i64(input: &mut &[u8]) -> Result<i64, Error> {
    consume_array(input).map(i64::from_be_bytes)
}

/// Reads a big-endian `i32`, advancing `input`.
pub fn consume_i32(input: &mut &[u8]) -> Result<i32, Error> {
    consume_array(input).map(i32::from_be_bytes)
}

/// Check if `input` is empty or return error.
pub fn expect_eof(input: &[u8]) -> Result<(), Error> {
    if cfg!(not(fuzzing)) && !input.is_empty() {
        err(ErrorKind::TrailingBytes, "Expected EOF")
    } else {
        Ok(())
    }
}
