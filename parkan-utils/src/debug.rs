//! `Debug` formatters for large byte buffers.
//!
//! Texture files carry tens of kilobytes of pixel indices, which makes the
//! derived `Debug` output unreadable. These helpers are meant to be plugged
//! into `custom_debug` field attributes:
//!
//! ```ignore
//! #[derive(custom_debug::Debug)]
//! struct Blob {
//!     #[debug(with = parkan_utils::debug::trimmed_bytes_fmt)]
//!     data: Vec<u8>,
//! }
//! ```

use std::fmt;

const FIRST_N_BYTES: usize = 8;

/// Print the length of a byte buffer followed by its first few bytes in hex.
#[cfg(not(feature = "debug-print-all"))]
pub fn trimmed_bytes_fmt<T: AsRef<[u8]>>(bytes: &T, f: &mut fmt::Formatter) -> fmt::Result {
    let bytes = bytes.as_ref();
    let shown = &bytes[..bytes.len().min(FIRST_N_BYTES)];

    write!(f, "{} bytes [", bytes.len())?;
    for (i, byte) in shown.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{byte:02x}")?;
    }
    if bytes.len() > shown.len() {
        f.write_str(" ..")?;
    }
    f.write_str("]")
}

/// Print every byte of the buffer.
#[cfg(feature = "debug-print-all")]
pub fn trimmed_bytes_fmt<T: AsRef<[u8]>>(bytes: &T, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:02x?}", bytes.as_ref())
}
