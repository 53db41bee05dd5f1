// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Character-level interface for UART controllers.
//!
//! A UART driver offers two sets of operations. [`Poll`] moves single bytes
//! by spinning on the controller's status. [`IrqControl`] exposes the pieces
//! an interrupt-driven serial layer needs: per-direction interrupt enables,
//! readiness queries and single-shot FIFO access. The serial layer registers
//! an [`IrqClient`] through [`InterruptDriven::set_irq_client`]; the driver
//! calls it from its interrupt handler and the client moves the data.
//!
//! All operations take `&self`, the driver instance being the device handle.

/// Polled, byte-at-a-time access.
pub trait Poll {
    /// Transmit `byte`.
    ///
    /// Spins until the transmitter has room. There is no timeout: if the
    /// hardware never reports space this never returns.
    fn poll_out(&self, byte: u8);

    /// Return the next received byte, or `None` if nothing is waiting.
    fn poll_in(&self) -> Option<u8>;
}

/// Interrupt and FIFO control of an interrupt-driven UART.
pub trait IrqControl {
    /// Enable the transmit-ready interrupt.
    fn irq_tx_enable(&self);

    /// Disable the transmit-ready interrupt.
    fn irq_tx_disable(&self);

    /// Enable the receive-ready interrupt.
    fn irq_rx_enable(&self);

    /// Disable the receive-ready interrupt.
    fn irq_rx_disable(&self);

    /// Whether the transmitter can accept another byte.
    fn irq_tx_ready(&self) -> bool;

    /// Whether at least one received byte is waiting.
    fn irq_rx_ready(&self) -> bool;

    /// Push bytes from `tx_data` into the transmit FIFO, returning how many
    /// were taken.
    fn fifo_fill(&self, tx_data: &[u8]) -> usize;

    /// Pop received bytes into `rx_data`, returning how many were stored.
    fn fifo_read(&self, rx_data: &mut [u8]) -> usize;

    /// Enable error interrupts (framing, parity, overrun).
    fn irq_err_enable(&self);

    /// Disable error interrupts.
    fn irq_err_disable(&self);

    /// Whether a transmit or receive interrupt condition is asserted.
    fn irq_is_pending(&self) -> bool;

    /// Start processing interrupts in the client.
    ///
    /// Returns `true` when the client can go ahead with the readiness
    /// queries, i.e. no further acknowledgment is needed.
    fn irq_update(&self) -> bool;
}

/// Receives interrupt notifications from an interrupt-driven UART.
pub trait IrqClient {
    /// Called from the UART's interrupt handler, with interrupts masked.
    ///
    /// `uart` is the device that raised the interrupt; the client uses it to
    /// query readiness and to fill or drain the FIFOs.
    fn handle_irq(&self, uart: &dyn IrqControl);
}

/// An interrupt-driven UART that reports to an [`IrqClient`].
pub trait InterruptDriven<'a>: IrqControl {
    /// Set the client called on every UART interrupt, replacing any
    /// previously registered one.
    fn set_irq_client(&self, client: &'a dyn IrqClient);
}

/// Full UART interface.
pub trait Uart<'a>: Poll + InterruptDriven<'a> {}
