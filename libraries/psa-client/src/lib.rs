// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Client side of the Arm PSA Firmware Framework 1.0 IPC API.
//!
//! Non-secure or secure partition code talks to Root-of-Trust services
//! through five calls implemented by the Secure Partition Manager (SPM):
//! `psa_framework_version`, `psa_version`, `psa_connect`, `psa_call` and
//! `psa_close`. The [`ffi`] module declares them exactly as the SPM links
//! them in. The rest of the crate wraps them in typed form:
//!
//! - [`Handle`], [`Status`] and [`Version`] replace the raw integers,
//! - [`InVec`] and [`OutVec`] build I/O vectors from borrowed slices,
//! - [`PsaClient`] is the seam between the typed layer and the SPM; [`Spm`]
//!   is the linked implementation,
//! - [`Connection`] owns a connection handle and closes it on drop.
//!
//! ```ignore
//! let spm = Spm;
//! let conn = psa_client::connect(&spm, CRYPTO_SID, 1)?;
//! let mut digest = [0u8; 32];
//! let len = conn.call(&[InVec::from_slice(b"abc")], &mut [OutVec::from_mut_slice(&mut digest)])?;
//! ```

#![no_std]

#[macro_use]
pub mod debug;

mod client;
mod config;
pub mod ffi;
mod handle;
mod iovec;
mod status;
mod version;

pub use crate::client::{call, connect, framework_version, version, Connection, PsaClient, Spm};
pub use crate::handle::Handle;
pub use crate::iovec::{InVec, OutVec};
pub use crate::status::{CallError, ConnectError, Status};
pub use crate::version::Version;

pub use crate::ffi::{
    PSA_CONNECTION_BUSY, PSA_CONNECTION_REFUSED, PSA_DROP_CONNECTION, PSA_FRAMEWORK_VERSION,
    PSA_MAX_IOVEC, PSA_NULL_HANDLE, PSA_SUCCESS, PSA_VERSION_NONE,
};

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
