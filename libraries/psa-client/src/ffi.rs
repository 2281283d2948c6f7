// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Raw PSA client API, as declared by `psa/client.h`.
//!
//! On bare-metal Arm targets the functions are provided by the SPM runtime
//! at link time. Hosted builds get stand-ins that panic, so the rest of the
//! crate still builds and tests on a development machine.

#![allow(non_camel_case_types)]

use core::ffi::c_void;

pub type psa_handle_t = i32;
pub type psa_status_t = i32;

/// Version of the PSA Firmware Framework implemented by the SPM.
pub const PSA_FRAMEWORK_VERSION: u32 = 0x0100;
/// Returned by `psa_version` when the service is absent or not accessible.
pub const PSA_VERSION_NONE: u32 = 0;

pub const PSA_SUCCESS: psa_status_t = 0;
pub const PSA_CONNECTION_REFUSED: psa_status_t = i32::MIN + 1;
pub const PSA_CONNECTION_BUSY: psa_status_t = i32::MIN + 2;
pub const PSA_DROP_CONNECTION: psa_status_t = i32::MIN;

pub const PSA_NULL_HANDLE: psa_handle_t = 0;

/// Maximum number of input plus output vectors in one `psa_call`.
pub const PSA_MAX_IOVEC: usize = 4;

/// Input vector: a buffer the service reads.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct psa_invec {
    pub base: *const c_void,
    pub len: usize,
}

/// Output vector: a buffer the service writes.
#[repr(C)]
#[derive(Debug)]
pub struct psa_outvec {
    pub base: *mut c_void,
    pub len: usize,
}

#[cfg(all(target_arch = "arm", target_os = "none"))]
extern "C" {
    pub fn psa_framework_version() -> u32;
    pub fn psa_version(sid: u32) -> u32;
    pub fn psa_connect(sid: u32, minor_version: u32) -> psa_handle_t;
    pub fn psa_call(
        handle: psa_handle_t,
        in_vec: *const psa_invec,
        in_len: usize,
        out_vec: *mut psa_outvec,
        out_len: usize,
    ) -> psa_status_t;
    pub fn psa_close(handle: psa_handle_t);
}

/// # Safety
///
/// Only callable where the SPM runtime is linked in.
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
pub unsafe extern "C" fn psa_framework_version() -> u32 {
    unimplemented!()
}

/// # Safety
///
/// Only callable where the SPM runtime is linked in.
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
pub unsafe extern "C" fn psa_version(_sid: u32) -> u32 {
    unimplemented!()
}

/// # Safety
///
/// Only callable where the SPM runtime is linked in.
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
pub unsafe extern "C" fn psa_connect(_sid: u32, _minor_version: u32) -> psa_handle_t {
    unimplemented!()
}

/// # Safety
///
/// `in_vec` and `out_vec` must point to `in_len` and `out_len` valid
/// vectors whose buffers stay alive for the duration of the call.
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
pub unsafe extern "C" fn psa_call(
    _handle: psa_handle_t,
    _in_vec: *const psa_invec,
    _in_len: usize,
    _out_vec: *mut psa_outvec,
    _out_len: usize,
) -> psa_status_t {
    unimplemented!()
}

/// # Safety
///
/// Only callable where the SPM runtime is linked in.
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
pub unsafe extern "C" fn psa_close(_handle: psa_handle_t) {
    unimplemented!()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_values() {
        assert_eq!(PSA_DROP_CONNECTION as u32, 0x8000_0000);
        assert_eq!(PSA_CONNECTION_REFUSED as u32, 0x8000_0001);
        assert_eq!(PSA_CONNECTION_BUSY as u32, 0x8000_0002);
        assert_eq!(PSA_SUCCESS, 0);
        assert_eq!(PSA_NULL_HANDLE, 0);
        assert_eq!(PSA_FRAMEWORK_VERSION, 0x0100);
    }

    #[test]
    fn iovec_layout() {
        use core::mem::{align_of, size_of};
        assert_eq!(size_of::<psa_invec>(), 2 * size_of::<usize>());
        assert_eq!(size_of::<psa_outvec>(), 2 * size_of::<usize>());
        assert_eq!(align_of::<psa_invec>(), align_of::<usize>());
        assert_eq!(core::mem::offset_of!(psa_outvec, len), size_of::<usize>());
    }
}
