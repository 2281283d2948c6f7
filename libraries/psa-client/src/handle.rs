// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

use crate::ffi::{psa_handle_t, PSA_NULL_HANDLE};

/// A connection handle returned by `psa_connect`.
///
/// Valid handles are positive. [`Handle::NULL`] never refers to a
/// connection and closing it has no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Handle(psa_handle_t);

impl Handle {
    pub const NULL: Handle = Handle(PSA_NULL_HANDLE);

    pub const fn from_raw(raw: psa_handle_t) -> Handle {
        Handle(raw)
    }

    pub const fn as_raw(self) -> psa_handle_t {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == PSA_NULL_HANDLE
    }
}

impl From<Handle> for psa_handle_t {
    fn from(handle: Handle) -> psa_handle_t {
        handle.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle() {
        assert!(Handle::NULL.is_null());
        assert_eq!(Handle::NULL.as_raw(), 0);
        assert!(!Handle::from_raw(7).is_null());
        assert_eq!(psa_handle_t::from(Handle::from_raw(7)), 7);
    }
}
