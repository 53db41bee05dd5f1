// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Shared kernel support for chip drivers.
//!
//! This crate holds the Hardware Interface Layer (HIL) traits that chip
//! drivers implement, the interfaces a driver needs from the platform
//! interrupt controller, the `debug!` output path, and small utilities for
//! memory mapped registers.

#![no_std]

// This is used to run the tests on a host
#[cfg(test)]
extern crate std;

#[macro_use]
pub mod debug;
pub mod errorcode;
pub mod hil;
pub mod platform;
pub mod utilities;

pub use crate::errorcode::ErrorCode;
