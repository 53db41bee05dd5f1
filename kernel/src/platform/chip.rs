// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Interrupt controller interface used by peripheral drivers.
//!
//! The board (or host OS port) owns the interrupt controller. A driver asks
//! it to route one interrupt line to the driver's [`InterruptHandler`], to
//! unmask that line, and to mask interrupts on the current core while the
//! driver services an interrupt.

use crate::ErrorCode;

/// A peripheral that services its own interrupt line.
pub trait InterruptHandler {
    /// Called by the platform when the peripheral's interrupt line is
    /// asserted.
    fn handle_interrupt(&self);
}

/// Masking of interrupts on the current core.
pub trait InterruptLock {
    /// Mask interrupts and return a key describing the previous state.
    fn lock(&self) -> usize;

    /// Restore the interrupt state captured in `key`.
    fn unlock(&self, key: usize);
}

/// The platform interrupt controller, as seen by a peripheral driver.
pub trait InterruptController<'a>: InterruptLock {
    /// Route `interrupt` to `handler`.
    ///
    /// Returns `Err(ErrorCode::BUSY)` if the line is already routed to
    /// another handler and `Err(ErrorCode::INVAL)` if the controller has no
    /// such line.
    fn connect(&self, interrupt: u32, handler: &'a dyn InterruptHandler)
        -> Result<(), ErrorCode>;

    /// Unmask `interrupt` at the controller.
    fn enable(&self, interrupt: u32);
}

/// Keeps interrupts masked for as long as it is alive.
///
/// The key returned by [`InterruptLock::lock`] is handed back to
/// [`InterruptLock::unlock`] when the guard is dropped, on every path out of
/// the scope that created it.
#[must_use = "interrupts are unmasked again as soon as the guard is dropped"]
pub struct InterruptLockGuard<'g, L: InterruptLock + ?Sized> {
    lock: &'g L,
    key: usize,
}

impl<'g, L: InterruptLock + ?Sized> InterruptLockGuard<'g, L> {
    pub fn new(lock: &'g L) -> Self {
        let key = lock.lock();
        InterruptLockGuard { lock, key }
    }
}

impl<L: InterruptLock + ?Sized> Drop for InterruptLockGuard<'_, L> {
    fn drop(&mut self) {
        self.lock.unlock(self.key);
    }
}
