// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Support for in-kernel debugging.
//!
//! Output produced by `debug!` is formatted with `core::fmt` and handed, a
//! line at a time, to the [`IoWrite`] sink the board registered with
//! [`set_debug_writer`]. Before a sink is registered, output is discarded.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! debug!("Yes the code gets here with value {}", i);
//! debug!("got here"); // includes message count
//! ```
//!
//! A board typically routes the output to its console UART during setup:
//!
//! ```rust,ignore
//! static UART: SapphireUart = ...;
//! unsafe { kernel::debug::set_debug_writer(&UART) };
//! ```

use core::fmt::{self, Write};

/// A byte sink that `debug!` output can be written to.
pub trait IoWrite {
    /// Write as many bytes of `buf` as possible, returning how many were
    /// consumed.
    fn write(&self, buf: &[u8]) -> usize;
}

static mut DEBUG_WRITER: Option<&'static dyn IoWrite> = None;

/// Register the sink used by `debug!`.
///
/// # Safety
///
/// Must be called during board setup, before interrupts are enabled and
/// before any other code can be executing `debug!`.
pub unsafe fn set_debug_writer(writer: &'static dyn IoWrite) {
    DEBUG_WRITER = Some(writer);
}

/// Adapts an `IoWrite` sink to `core::fmt::Write`.
struct DebugWriter<'a> {
    sink: &'a dyn IoWrite,
}

impl Write for DebugWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut remaining = s.as_bytes();
        while !remaining.is_empty() {
            let written = self.sink.write(remaining);
            if written == 0 {
                // The sink made no progress; drop the rest of the line.
                return Err(fmt::Error);
            }
            remaining = remaining.get(written..).unwrap_or(&[]);
        }
        Ok(())
    }
}

fn write_line(sink: &dyn IoWrite, args: fmt::Arguments) -> fmt::Result {
    let mut writer = DebugWriter { sink };
    writer.write_fmt(args)?;
    writer.write_str("\r\n")
}

/// Write a debug message followed by a line break. Called by `debug!`.
pub fn debug_println(args: fmt::Arguments) {
    // SAFETY: the writer is only replaced during single-threaded board
    // setup, see `set_debug_writer`.
    let writer = unsafe { DEBUG_WRITER };
    if let Some(sink) = writer {
        // A sink that stops accepting bytes truncates the message, there is
        // nowhere to report that.
        let _ = write_line(sink, args);
    }
}

/// In-kernel `println()` debugging.
#[macro_export]
macro_rules! debug {
    () => ({
        // Allow an empty debug!() to print an empty line
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_println(format_args!("{}", $msg))
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_println(format_args!($fmt, $($arg)+))
    });
}
