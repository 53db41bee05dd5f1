// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Wrapper type for safe pointers to static memory.

use core::ops::Deref;

/// A pointer to memory that stays valid for the rest of the program, most
/// often a block of memory mapped device registers.
///
/// Drivers hold a `StaticRef` to their register block instead of a `&'static`
/// reference so the address can be written as a `const` before the registers
/// are ever touched.
pub struct StaticRef<T> {
    ptr: *const T,
}

impl<T> StaticRef<T> {
    /// Create a new `StaticRef` from a raw pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned for `T`, and valid to dereference for
    /// the remaining lifetime of the program. If it points at device memory,
    /// all accesses through `T` must be volatile (as they are with the
    /// register types in `utilities::registers`).
    pub const unsafe fn new(ptr: *const T) -> StaticRef<T> {
        StaticRef { ptr }
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> Deref for StaticRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: `new` requires the pointer to stay valid forever.
        unsafe { &*self.ptr }
    }
}
