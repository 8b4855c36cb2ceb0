//! Hands the boot time across the C boundary as NUL-terminated text.

use crate::error::{BootTimeError, STATUS_INVALID_ARGUMENT, STATUS_OK};
use crate::locator::BootTimeLocator;
use crate::source::LogSource;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
}

impl TextEncoding {
    /// Bytes needed for `text` plus its terminator.
    pub fn encoded_len(self, text: &str) -> usize {
        match self {
            Self::Utf8 => text.len() + 1,
            Self::Utf16Le => (text.encode_utf16().count() + 1) * 2,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("encoded text needs {required} bytes but the buffer holds {capacity}")]
pub struct EncodeError {
    pub required: usize,
    pub capacity: usize,
}

/// Writes `text` and a NUL terminator into `out` and returns the byte count,
/// terminator included. Nothing is written when it does not fit.
pub fn encode_text(text: &str, encoding: TextEncoding, out: &mut [u8]) -> Result<usize, EncodeError> {
    let required = encoding.encoded_len(text);
    if required > out.len() {
        return Err(EncodeError {
            required,
            capacity: out.len(),
        });
    }

    match encoding {
        TextEncoding::Utf8 => {
            out[..text.len()].copy_from_slice(text.as_bytes());
            out[text.len()] = 0;
        }
        TextEncoding::Utf16Le => {
            let units = text.encode_utf16().chain(Some(0));
            for (slot, unit) in out.chunks_exact_mut(2).zip(units) {
                slot.copy_from_slice(&unit.to_le_bytes());
            }
        }
    }

    Ok(required)
}

/// Locates the boot time in `source` and writes it as UTF-8 decimal text.
pub fn write_boot_time<S: LogSource>(
    locator: &BootTimeLocator,
    source: S,
    out: &mut [u8],
) -> Result<usize, BootTimeError> {
    let boot_time = locator
        .locate_in(source)?
        .ok_or_else(|| locator.not_found())?;
    Ok(encode_text(&boot_time.to_string(), TextEncoding::Utf8, out)?)
}

/// Turns a write result into a status code, storing the byte count on success.
pub fn complete(result: Result<usize, BootTimeError>, real_length: &mut u32) -> i32 {
    match result {
        Ok(written) => {
            *real_length = written as u32;
            STATUS_OK
        }
        Err(err) => {
            debug!(%err, "boot time unavailable");
            err.status()
        }
    }
}

/// Writes the last boot time of this machine into `buffer` as NUL-terminated
/// UTF-8 decimal seconds since the Unix epoch.
///
/// Returns `0` and sets `*real_length` (terminator included) on success, `-1`
/// when the text does not fit `max_length`, `-2` when the log holds no boot
/// record, `-3` on a system error and `-4` for a null pointer.
///
/// # Safety
/// `buffer` must be valid for writes of `max_length` bytes and `real_length`
/// must be valid for a `u32` write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn get_last_bootup_time(
    buffer: *mut u8,
    max_length: u32,
    real_length: *mut u32,
) -> i32 {
    if buffer.is_null() || real_length.is_null() {
        return STATUS_INVALID_ARGUMENT;
    }

    let out = unsafe { std::slice::from_raw_parts_mut(buffer, max_length as usize) };
    let real_length = unsafe { &mut *real_length };

    let locator = BootTimeLocator::default();
    let result = locator
        .locate()
        .and_then(|found| found.ok_or_else(|| locator.not_found()))
        .and_then(|boot_time| {
            Ok(encode_text(&boot_time.to_string(), TextEncoding::Utf8, out)?)
        });

    complete(result, real_length)
}
