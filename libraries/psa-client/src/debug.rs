// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Debug output for the PSA client.
//!
//! The board registers a writer once with [`set_debug_writer`]; after that
//! `debug!` formats `PSA_DEBUG: file:line: message` lines into it. Until a
//! writer is registered, messages are discarded.
//!
//! ```ignore
//! unsafe { psa_client::debug::set_debug_writer(uart_writer) };
//! debug!("service {:#x} is at version {}", sid, v);
//! ```

use core::cell::Cell;
use core::fmt::{self, Write};

/// Sink for debug output, usually a UART or a RAM ring buffer.
pub trait IoWrite {
    /// Writes a prefix of `buf` and returns how many bytes were taken.
    fn write(&mut self, buf: &[u8]) -> usize;
}

struct DebugWriterSlot(Cell<Option<&'static mut dyn IoWrite>>);

// Sound only while every access to the slot comes from one thread, which is
// the contract callers of `set_debug_writer` accept.
unsafe impl Sync for DebugWriterSlot {}

static DEBUG_WRITER: DebugWriterSlot = DebugWriterSlot(Cell::new(None));

/// Registers the debug writer and returns the previous one, if any.
///
/// # Safety
///
/// The slot is unsynchronized. While a writer is registered, `debug!`,
/// `set_debug_writer` and `take_debug_writer` must all run on a single
/// thread of execution, and never from an interrupt handler that can
/// preempt another `debug!`.
pub unsafe fn set_debug_writer(
    writer: &'static mut dyn IoWrite,
) -> Option<&'static mut dyn IoWrite> {
    DEBUG_WRITER.0.replace(Some(writer))
}

/// Unregisters the debug writer and hands it back.
///
/// # Safety
///
/// Same contract as [`set_debug_writer`].
pub unsafe fn take_debug_writer() -> Option<&'static mut dyn IoWrite> {
    DEBUG_WRITER.0.take()
}

struct WriterAdapter<'a>(&'a mut (dyn IoWrite + 'static));

impl Write for WriterAdapter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let written = self.0.write(bytes);
            if written == 0 {
                return Err(fmt::Error);
            }
            bytes = &bytes[written.min(bytes.len())..];
        }
        Ok(())
    }
}

/// Backend of the `debug!` macro.
pub fn begin_debug_fmt(args: fmt::Arguments, file_line: &(&'static str, u32)) {
    // Taking the writer out of the slot also stops a nested `debug!` from
    // aliasing it.
    if let Some(writer) = DEBUG_WRITER.0.take() {
        let (file, line) = *file_line;
        let mut adapter = WriterAdapter(&mut *writer);
        let _ = write!(adapter, "PSA_DEBUG: {}:{}: ", file, line);
        let _ = adapter.write_fmt(args);
        let _ = adapter.write_str("\r\n");
        DEBUG_WRITER.0.set(Some(writer));
    }
}

/// Formats one line into the registered debug writer.
#[macro_export]
macro_rules! debug {
    () => ({
        // Allow an empty debug!() to print the location when hit
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::begin_debug_fmt(format_args!("{}", $msg), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::begin_debug_fmt(format_args!($fmt, $($arg)+), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::boxed::Box;
    use std::cell::RefCell;
    use std::string::String;

    /// Accepts at most `chunk` bytes per write.
    struct Recorder {
        out: &'static RefCell<String>,
        chunk: usize,
    }

    impl IoWrite for Recorder {
        fn write(&mut self, buf: &[u8]) -> usize {
            let n = buf.len().min(self.chunk);
            self.out
                .borrow_mut()
                .push_str(core::str::from_utf8(&buf[..n]).unwrap());
            n
        }
    }

    // The test harness runs tests on several threads while the writer slot is
    // an unsynchronized global. This is the only test in the crate that
    // registers a writer or emits `debug!` output, which keeps the
    // single-thread contract of `set_debug_writer`.
    #[test]
    fn registered_writer_receives_lines() {
        debug!("nobody is listening");

        let out: &'static RefCell<String> = Box::leak(Box::new(RefCell::new(String::new())));
        let recorder = Box::leak(Box::new(Recorder { out, chunk: 3 }));
        assert!(unsafe { set_debug_writer(recorder) }.is_none());

        debug!("psa_connect({:#x}, {}) = {}", 0x40u32, 1, -2147483647);
        {
            let text = out.borrow();
            assert!(text.starts_with("PSA_DEBUG: "));
            assert!(text.contains("debug.rs:"));
            assert!(text.ends_with(": psa_connect(0x40, 1) = -2147483647\r\n"));
        }

        debug!();
        assert_eq!(out.borrow().matches("\r\n").count(), 2);

        assert!(unsafe { take_debug_writer() }.is_some());
        debug!("dropped");
        assert_eq!(out.borrow().matches("\r\n").count(), 2);
        assert!(!out.borrow().contains("dropped"));
    }
}
