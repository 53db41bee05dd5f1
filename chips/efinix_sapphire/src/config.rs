// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Compile-time configuration options of the Sapphire chip crate.
//!
//! Options are fields of a `const` object instead of `#[cfg]` attributes on
//! the code itself. Both settings of every option are type-checked in every
//! build, and the compiler folds the constant so a disabled path costs
//! nothing in the binary.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether `SapphireUart::init` routes the UART interrupt line to the
    /// driver and unmasks it.
    ///
    /// Without it the UART is used in polling mode only. The interrupt
    /// operations remain callable, but nothing services the line.
    pub(crate) interrupt_driven: bool,

    /// Whether `SapphireUart::init` reports the programmed clock divider and
    /// frame configuration through `debug!`.
    pub(crate) trace_init: bool,
}

/// The configuration of this build, taken from the crate's cargo features.
pub(crate) const CONFIG: Config = Config {
    interrupt_driven: cfg!(feature = "interrupt_driven"),
    trace_init: cfg!(feature = "trace_init"),
};
