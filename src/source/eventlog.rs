use super::{BatchRead, LogSource};
use std::io;
use tracing::debug;
use windows_sys::Win32::Foundation::{
    ERROR_HANDLE_EOF, ERROR_INSUFFICIENT_BUFFER, GetLastError, HANDLE,
};
use windows_sys::Win32::System::EventLog::{
    CloseEventLog, EVENTLOG_BACKWARDS_READ, EVENTLOG_SEQUENTIAL_READ, OpenEventLogW,
    ReadEventLogW,
};

/// Handle to a classic Windows event log, closed on drop.
pub struct EventLog {
    name: String,
    handle: HANDLE,
}

impl EventLog {
    pub fn open(source_name: &str) -> io::Result<Self> {
        let wide: Vec<u16> = source_name.encode_utf16().chain(Some(0)).collect();

        let handle = unsafe { OpenEventLogW(std::ptr::null(), wide.as_ptr()) };
        if handle.is_null() {
            return Err(io::Error::last_os_error());
        }

        debug!(source = source_name, "opened event log");
        Ok(Self {
            name: source_name.to_owned(),
            handle,
        })
    }
}

impl LogSource for EventLog {
    fn read_batch(&mut self, buf: &mut [u8]) -> BatchRead {
        let capacity = u32::try_from(buf.len()).unwrap_or(u32::MAX);
        let mut bytes_read = 0u32;
        let mut min_needed = 0u32;

        let ok = unsafe {
            ReadEventLogW(
                self.handle,
                EVENTLOG_SEQUENTIAL_READ | EVENTLOG_BACKWARDS_READ,
                0,
                buf.as_mut_ptr().cast(),
                capacity,
                &mut bytes_read,
                &mut min_needed,
            )
        };

        if ok != 0 {
            return BatchRead::Filled(bytes_read as usize);
        }

        match unsafe { GetLastError() } {
            ERROR_INSUFFICIENT_BUFFER => BatchRead::BufferTooSmall {
                required: min_needed as usize,
            },
            ERROR_HANDLE_EOF => BatchRead::EndOfLog,
            code => BatchRead::Failed(io::Error::from_raw_os_error(code as i32)),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        unsafe {
            CloseEventLog(self.handle);
        }
    }
}

unsafe impl Send for EventLog {}
