// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Drivers and support modules for the Efinix Sapphire SoC

#![no_std]

// This is used to run the tests on a host
#[cfg(test)]
extern crate std;

mod config;

pub mod interrupts;
pub mod uart;
