// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! The PSA client operations.
//!
//! [`PsaClient`] mirrors the five raw calls one to one. The free functions
//! and [`Connection`] layer the typed API on top of any implementation of
//! it, which is [`Spm`] in a real image and a mock in tests.

use core::convert::TryFrom;

use crate::config;
use crate::ffi::{self, psa_handle_t, psa_invec, psa_outvec, psa_status_t, PSA_MAX_IOVEC};
use crate::handle::Handle;
use crate::iovec::{InVec, OutVec};
use crate::status::{CallError, ConnectError, Status};
use crate::version::Version;

/// Access to a Secure Partition Manager.
///
/// Values are passed through unchanged: statuses and handles follow the
/// PSA Firmware Framework encoding.
pub trait PsaClient {
    fn framework_version(&self) -> u32;

    /// Returns the minor version of service `sid`, or `PSA_VERSION_NONE`.
    fn version(&self, sid: u32) -> u32;

    /// Returns a positive handle, `PSA_CONNECTION_REFUSED` or
    /// `PSA_CONNECTION_BUSY`.
    fn connect(&self, sid: u32, minor_version: u32) -> psa_handle_t;

    fn call(
        &self,
        handle: psa_handle_t,
        in_vec: &[InVec<'_>],
        out_vec: &mut [OutVec<'_>],
    ) -> psa_status_t;

    /// Closing `PSA_NULL_HANDLE` has no effect.
    fn close(&self, handle: psa_handle_t);
}

/// The SPM linked into the image.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spm;

impl PsaClient for Spm {
    fn framework_version(&self) -> u32 {
        let version = unsafe { ffi::psa_framework_version() };
        if config::CONFIG.trace_psa_calls {
            debug!("psa_framework_version() = {:#06x}", version);
        }
        version
    }

    fn version(&self, sid: u32) -> u32 {
        let version = unsafe { ffi::psa_version(sid) };
        if config::CONFIG.trace_psa_calls {
            debug!("psa_version({:#x}) = {:#06x}", sid, version);
        }
        version
    }

    fn connect(&self, sid: u32, minor_version: u32) -> psa_handle_t {
        let handle = unsafe { ffi::psa_connect(sid, minor_version) };
        if config::CONFIG.trace_psa_calls {
            debug!("psa_connect({:#x}, {}) = {}", sid, minor_version, handle);
        }
        handle
    }

    fn call(
        &self,
        handle: psa_handle_t,
        in_vec: &[InVec<'_>],
        out_vec: &mut [OutVec<'_>],
    ) -> psa_status_t {
        let status = unsafe {
            ffi::psa_call(
                handle,
                in_vec.as_ptr().cast::<psa_invec>(),
                in_vec.len(),
                out_vec.as_mut_ptr().cast::<psa_outvec>(),
                out_vec.len(),
            )
        };
        if config::CONFIG.trace_psa_calls {
            debug!(
                "psa_call({}, {} in, {} out) = {}",
                handle,
                in_vec.len(),
                out_vec.len(),
                status
            );
        }
        status
    }

    fn close(&self, handle: psa_handle_t) {
        if config::CONFIG.trace_psa_calls {
            debug!("psa_close({})", handle);
        }
        unsafe { ffi::psa_close(handle) }
    }
}

pub fn framework_version<C: PsaClient>(client: &C) -> Version {
    Version::from_raw(client.framework_version())
}

/// Version of service `sid`, or `None` when the service does not exist or
/// the caller may not access it.
pub fn version<C: PsaClient>(client: &C, sid: u32) -> Option<Version> {
    Version::from_service(client.version(sid))
}

/// Opens a connection to service `sid` at `minor_version`.
///
/// An invalid `sid` or a denied connection is a programmer error that the
/// SPM handles without returning.
pub fn connect<C: PsaClient>(
    client: &C,
    sid: u32,
    minor_version: u32,
) -> Result<Connection<'_, C>, ConnectError> {
    let raw = client.connect(sid, minor_version);
    if raw > 0 {
        Ok(Connection {
            client,
            handle: Handle::from_raw(raw),
        })
    } else {
        Err(ConnectError::try_from(Status::from_raw(raw)).unwrap_or(ConnectError::Refused))
    }
}

/// Sends a request on `handle` and returns the non-negative service result.
pub fn call<C: PsaClient>(
    client: &C,
    handle: Handle,
    in_vec: &[InVec<'_>],
    out_vec: &mut [OutVec<'_>],
) -> Result<u32, CallError> {
    if in_vec.len() + out_vec.len() > PSA_MAX_IOVEC {
        return Err(CallError::TooManyVectors);
    }
    Status::from_raw(client.call(handle.as_raw(), in_vec, out_vec)).into_call_result()
}

/// An open connection to a RoT service. Closed when dropped.
#[derive(Debug)]
pub struct Connection<'c, C: PsaClient> {
    client: &'c C,
    handle: Handle,
}

impl<C: PsaClient> Connection<'_, C> {
    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn call(&self, in_vec: &[InVec<'_>], out_vec: &mut [OutVec<'_>]) -> Result<u32, CallError> {
        call(self.client, self.handle, in_vec, out_vec)
    }

    /// Gives up ownership of the handle without closing it.
    pub fn into_handle(self) -> Handle {
        let handle = self.handle;
        core::mem::forget(self);
        handle
    }

    /// Closes the connection now.
    pub fn close(self) {}
}

impl<C: PsaClient> Drop for Connection<'_, C> {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            self.client.close(self.handle.as_raw());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{PSA_CONNECTION_BUSY, PSA_CONNECTION_REFUSED, PSA_DROP_CONNECTION};
    use std::cell::{Cell, RefCell};
    use std::vec::Vec;

    /// An SPM with one service, which echoes its first input vector into
    /// its first output vector and returns the number of bytes copied.
    #[derive(Debug)]
    struct MockSpm {
        connect_result: Cell<psa_handle_t>,
        call_status: Cell<Option<psa_status_t>>,
        calls: Cell<usize>,
        closed: RefCell<Vec<psa_handle_t>>,
    }

    const ECHO_SID: u32 = 0x0000_f000;

    impl MockSpm {
        fn new() -> MockSpm {
            MockSpm {
                connect_result: Cell::new(5),
                call_status: Cell::new(None),
                calls: Cell::new(0),
                closed: RefCell::new(Vec::new()),
            }
        }
    }

    impl PsaClient for MockSpm {
        fn framework_version(&self) -> u32 {
            ffi::PSA_FRAMEWORK_VERSION
        }

        fn version(&self, sid: u32) -> u32 {
            if sid == ECHO_SID {
                2
            } else {
                ffi::PSA_VERSION_NONE
            }
        }

        fn connect(&self, _sid: u32, _minor_version: u32) -> psa_handle_t {
            self.connect_result.get()
        }

        fn call(
            &self,
            _handle: psa_handle_t,
            in_vec: &[InVec<'_>],
            out_vec: &mut [OutVec<'_>],
        ) -> psa_status_t {
            self.calls.set(self.calls.get() + 1);
            if let Some(status) = self.call_status.get() {
                return status;
            }
            match (in_vec.first(), out_vec.first_mut()) {
                (Some(input), Some(output)) => {
                    let n = input.len().min(output.len());
                    unsafe {
                        core::ptr::copy_nonoverlapping(
                            input.as_raw().base.cast::<u8>(),
                            output.as_raw().base.cast::<u8>(),
                            n,
                        );
                    }
                    n as psa_status_t
                }
                _ => 0,
            }
        }

        fn close(&self, handle: psa_handle_t) {
            self.closed.borrow_mut().push(handle);
        }
    }

    #[test]
    fn versions() {
        let spm = MockSpm::new();
        assert_eq!(framework_version(&spm), Version::FRAMEWORK);
        assert_eq!(version(&spm, ECHO_SID), Some(Version::from_raw(2)));
        assert_eq!(version(&spm, 0x1234), None);
    }

    #[test]
    fn echo_call_then_close_on_drop() {
        let spm = MockSpm::new();
        {
            let conn = connect(&spm, ECHO_SID, 1).unwrap();
            assert_eq!(conn.handle(), Handle::from_raw(5));

            let mut out = [0u8; 8];
            let n = conn
                .call(
                    &[InVec::from_slice(b"ping")],
                    &mut [OutVec::from_mut_slice(&mut out)],
                )
                .unwrap();
            assert_eq!(n, 4);
            assert_eq!(&out[..4], b"ping");
            assert!(spm.closed.borrow().is_empty());
        }
        assert_eq!(*spm.closed.borrow(), [5]);
    }

    #[test]
    fn connect_failures() {
        let spm = MockSpm::new();
        spm.connect_result.set(PSA_CONNECTION_REFUSED);
        assert_eq!(
            connect(&spm, ECHO_SID, 1).unwrap_err(),
            ConnectError::Refused
        );
        spm.connect_result.set(PSA_CONNECTION_BUSY);
        assert_eq!(connect(&spm, ECHO_SID, 1).unwrap_err(), ConnectError::Busy);
        assert!(spm.closed.borrow().is_empty());
    }

    #[test]
    fn call_errors() {
        let spm = MockSpm::new();
        let conn = connect(&spm, ECHO_SID, 1).unwrap();

        spm.call_status.set(Some(-3));
        assert_eq!(conn.call(&[], &mut []), Err(CallError::Service(-3)));

        spm.call_status.set(Some(PSA_DROP_CONNECTION));
        assert_eq!(conn.call(&[], &mut []), Err(CallError::DropConnection));

        conn.close();
        assert_eq!(*spm.closed.borrow(), [5]);
    }

    #[test]
    fn too_many_vectors_never_reach_the_spm() {
        let spm = MockSpm::new();
        let conn = connect(&spm, ECHO_SID, 1).unwrap();
        let a = [0u8; 1];
        let mut b = [0u8; 1];
        let mut c = [0u8; 1];
        let ins = [InVec::from_slice(&a), InVec::empty(), InVec::empty()];
        let mut outs = [OutVec::from_mut_slice(&mut b), OutVec::from_mut_slice(&mut c)];
        assert_eq!(conn.call(&ins, &mut outs), Err(CallError::TooManyVectors));
        assert_eq!(spm.calls.get(), 0);

        assert_eq!(conn.call(&ins, &mut outs[..1]), Ok(1));
        assert_eq!(spm.calls.get(), 1);
    }

    #[test]
    fn into_handle_skips_close() {
        let spm = MockSpm::new();
        let handle = connect(&spm, ECHO_SID, 1).unwrap().into_handle();
        assert_eq!(handle.as_raw(), 5);
        assert!(spm.closed.borrow().is_empty());

        assert_eq!(
            call(&spm, handle, &[InVec::from_slice(b"x")], &mut []),
            Ok(0)
        );
        spm.close(handle.as_raw());
        assert_eq!(*spm.closed.borrow(), [5]);
    }
}
