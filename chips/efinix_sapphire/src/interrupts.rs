// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Named PLIC interrupt lines of the Sapphire SoC.

pub const UART0: u32 = 1;
