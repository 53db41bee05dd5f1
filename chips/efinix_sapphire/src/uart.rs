// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Efinix Sapphire SoC UART.
//!
//! The controller has four 32-bit registers. Interrupt control and status
//! share one register: bits 0 and 1 enable the tx and rx interrupts, bits 8
//! and 9 report tx and rx readiness, and the two upper bytes hold the tx FIFO
//! availability and the rx FIFO occupancy. The readiness and FIFO fields are
//! not affected by writes, so the interrupt enables can be changed with a
//! read-modify-write of the whole register.
//!
//! Framing is fixed at 8 data bits, no parity and one stop bit. The baud rate
//! is programmed once, in [`SapphireUart::init`].

use kernel::debug;
use kernel::debug::IoWrite;
use kernel::hil::uart::{self, IrqControl, Poll};
use kernel::platform::chip::{InterruptController, InterruptHandler, InterruptLockGuard};
use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::cells::OptionalCell;
use kernel::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::config::CONFIG;
use crate::interrupts;

pub const UART0_BASE: StaticRef<SapphireUartRegisters> =
    unsafe { StaticRef::new(0xF801_0000 as *const SapphireUartRegisters) };

/// Frequency of the clock feeding the UART in the reference Sapphire design.
pub const SYSTEM_CLOCK_HZ: u32 = 100_000_000;

/// Clock samples the receiver takes per bit.
const SAMPLES_PER_BAUD: u32 = 8;

const PRESCALER_MASK: u32 = CLOCK_DIVIDER::PRESCALER.mask;

register_structs! {
    pub SapphireUartRegisters {
        /// Transmit (write) and receive (read) data
        (0x00 => data: ReadWrite<u32, DATA::Register>),
        /// Interrupt enables, readiness flags and FIFO levels
        (0x04 => status: ReadWrite<u32, STATUS::Register>),
        /// Baud clock prescaler
        (0x08 => clock_divider: ReadWrite<u32, CLOCK_DIVIDER::Register>),
        /// Sampling, parity and stop bit configuration
        (0x0c => frame_config: ReadWrite<u32, FRAME_CONFIG::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    DATA [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    STATUS [
        TX_IRQ_ENABLE OFFSET(0) NUMBITS(1) [],
        RX_IRQ_ENABLE OFFSET(1) NUMBITS(1) [],
        TX_READY OFFSET(8) NUMBITS(1) [],
        RX_READY OFFSET(9) NUMBITS(1) [],
        /// Free space in the tx FIFO. The low byte of the register's upper
        /// half-word.
        TX_AVAILABILITY OFFSET(16) NUMBITS(8) [],
        /// Bytes waiting in the rx FIFO
        RX_OCCUPANCY OFFSET(24) NUMBITS(8) []
    ],
    CLOCK_DIVIDER [
        PRESCALER OFFSET(0) NUMBITS(20) []
    ],
    FRAME_CONFIG [
        /// Samples per bit, minus one
        SAMPLING OFFSET(0) NUMBITS(8) [],
        PARITY OFFSET(8) NUMBITS(8) [
            Disabled = 0,
            Even = 1,
            Odd = 2
        ],
        STOP OFFSET(16) NUMBITS(8) [
            One = 0,
            Two = 1
        ]
    ]
];

/// Clock divider value for `baud_rate` given the system clock.
///
/// Computes `system_clock_hz / (baud_rate * 8) - 1` in wrapping unsigned
/// arithmetic and keeps the 20 bits the register holds. Baud rates the
/// divider cannot produce are not rejected, they result in a wrapped value.
/// A baud rate of zero is treated as a quotient of zero.
pub const fn prescaler(system_clock_hz: u32, baud_rate: u32) -> u32 {
    let divisor = baud_rate.wrapping_mul(SAMPLES_PER_BAUD);
    let quotient = match system_clock_hz.checked_div(divisor) {
        Some(quotient) => quotient,
        None => 0,
    };
    quotient.wrapping_sub(1) & PRESCALER_MASK
}

/// Hardware parameters of one UART instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UartConfig {
    /// Line speed in bit/s, programmed by `init`.
    pub baud_rate: u32,
    /// Frequency of the clock feeding the UART, in Hz.
    pub system_clock_hz: u32,
    /// Interrupt controller line of the UART.
    pub irq: u32,
}

impl UartConfig {
    /// Configuration of UART0 of the reference design at `baud_rate`.
    pub const fn new(baud_rate: u32) -> UartConfig {
        UartConfig {
            baud_rate,
            system_clock_hz: SYSTEM_CLOCK_HZ,
            irq: interrupts::UART0,
        }
    }
}

pub struct SapphireUart<'a> {
    registers: StaticRef<SapphireUartRegisters>,
    config: UartConfig,
    controller: &'a dyn InterruptController<'a>,
    client: OptionalCell<&'a dyn uart::IrqClient>,
}

impl<'a> SapphireUart<'a> {
    pub const fn new(
        base: StaticRef<SapphireUartRegisters>,
        config: UartConfig,
        controller: &'a dyn InterruptController<'a>,
    ) -> SapphireUart<'a> {
        SapphireUart {
            registers: base,
            config,
            controller,
            client: OptionalCell::empty(),
        }
    }

    /// Program the line settings and, in interrupt-driven builds, route the
    /// UART interrupt to this driver.
    ///
    /// Must be called once, before any other operation. The driver itself
    /// cannot fail; an error is only returned if the interrupt controller
    /// refuses the connection.
    pub fn init(&'a self) -> Result<(), ErrorCode> {
        self.init_with(CONFIG.interrupt_driven)
    }

    fn init_with(&'a self, interrupt_driven: bool) -> Result<(), ErrorCode> {
        self.configure_line();

        if interrupt_driven {
            self.connect_interrupt()?;
        }

        Ok(())
    }

    pub fn config(&self) -> UartConfig {
        self.config
    }

    fn configure_line(&self) {
        let regs = self.registers;
        let prescaler = prescaler(self.config.system_clock_hz, self.config.baud_rate);
        regs.clock_divider
            .write(CLOCK_DIVIDER::PRESCALER.val(prescaler));

        // 8 data bits, no parity, 1 stop bit
        let frame = FRAME_CONFIG::SAMPLING.val(SAMPLES_PER_BAUD - 1)
            + FRAME_CONFIG::PARITY::Disabled
            + FRAME_CONFIG::STOP::One;
        regs.frame_config.write(frame);

        if CONFIG.trace_init {
            debug!(
                "sapphire uart: {} baud, prescaler {:#x}, frame {:#x}",
                self.config.baud_rate,
                prescaler,
                u32::from(frame)
            );
        }
    }

    fn connect_interrupt(&'a self) -> Result<(), ErrorCode> {
        self.controller.connect(self.config.irq, self)?;
        self.controller.enable(self.config.irq);
        Ok(())
    }

    /// Blocking transmit of `bytes`, used by panic and debug writers.
    ///
    /// Does not touch the interrupt enables. Blocks indefinitely if the
    /// transmitter never reports space.
    pub fn transmit_sync(&self, bytes: &[u8]) {
        for &byte in bytes {
            self.poll_out(byte);
        }
    }
}

impl uart::Poll for SapphireUart<'_> {
    fn poll_out(&self, byte: u8) {
        let regs = self.registers;
        while regs.status.read(STATUS::TX_AVAILABILITY) == 0 {}
        regs.data.write(DATA::VALUE.val(byte.into()));
    }

    fn poll_in(&self) -> Option<u8> {
        let regs = self.registers;
        if regs.status.read(STATUS::RX_OCCUPANCY) != 0 {
            Some(regs.data.read(DATA::VALUE) as u8)
        } else {
            None
        }
    }
}

impl uart::IrqControl for SapphireUart<'_> {
    fn irq_tx_enable(&self) {
        self.registers.status.modify(STATUS::TX_IRQ_ENABLE::SET);
    }

    fn irq_tx_disable(&self) {
        self.registers.status.modify(STATUS::TX_IRQ_ENABLE::CLEAR);
    }

    fn irq_rx_enable(&self) {
        self.registers.status.modify(STATUS::RX_IRQ_ENABLE::SET);
    }

    fn irq_rx_disable(&self) {
        self.registers.status.modify(STATUS::RX_IRQ_ENABLE::CLEAR);
    }

    fn irq_tx_ready(&self) -> bool {
        self.registers.status.is_set(STATUS::TX_READY)
    }

    fn irq_rx_ready(&self) -> bool {
        self.registers.status.is_set(STATUS::RX_READY)
    }

    fn fifo_fill(&self, tx_data: &[u8]) -> usize {
        let regs = self.registers;
        let byte = match tx_data.first() {
            Some(&byte) => byte,
            None => return 0,
        };

        // The hardware reports how much room is left, but a single byte is
        // written per call whatever the level.
        let _availability = regs.status.read(STATUS::TX_AVAILABILITY);
        regs.data.write(DATA::VALUE.val(byte.into()));
        1
    }

    fn fifo_read(&self, rx_data: &mut [u8]) -> usize {
        let regs = self.registers;
        let slot = match rx_data.first_mut() {
            Some(slot) => slot,
            None => return 0,
        };

        if regs.status.read(STATUS::RX_OCCUPANCY) == 0 {
            return 0;
        }
        *slot = regs.data.read(DATA::VALUE) as u8;
        1
    }

    // The controller does not report line errors.
    fn irq_err_enable(&self) {}

    fn irq_err_disable(&self) {}

    fn irq_is_pending(&self) -> bool {
        let status = self.registers.status.extract();
        status.is_set(STATUS::TX_READY) || status.is_set(STATUS::RX_READY)
    }

    fn irq_update(&self) -> bool {
        true
    }
}

impl<'a> uart::InterruptDriven<'a> for SapphireUart<'a> {
    fn set_irq_client(&self, client: &'a dyn uart::IrqClient) {
        self.client.set(client);
    }
}

impl<'a> uart::Uart<'a> for SapphireUart<'a> {}

impl InterruptHandler for SapphireUart<'_> {
    fn handle_interrupt(&self) {
        let _lock = InterruptLockGuard::new(self.controller);

        self.client.map(|client| client.handle_irq(self));

        // The interrupt is latched on the enable edge: toggle the enable of
        // every direction still asserted so it can fire again.
        if self.irq_tx_ready() {
            self.irq_tx_disable();
            self.irq_tx_enable();
        }

        if self.irq_rx_ready() {
            self.irq_rx_disable();
            self.irq_rx_enable();
        }
    }
}

impl IoWrite for SapphireUart<'_> {
    fn write(&self, buf: &[u8]) -> usize {
        self.transmit_sync(buf);
        buf.len()
    }
}
