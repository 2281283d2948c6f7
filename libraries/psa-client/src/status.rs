// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! PSA status codes and the errors of `connect` and `call`.

use core::convert::TryFrom;

use crate::ffi::{
    psa_status_t, PSA_CONNECTION_BUSY, PSA_CONNECTION_REFUSED, PSA_DROP_CONNECTION, PSA_SUCCESS,
};

/// A `psa_status_t`. Non-negative values are success, negative values are
/// errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Status(psa_status_t);

impl Status {
    pub const SUCCESS: Status = Status(PSA_SUCCESS);
    pub const CONNECTION_REFUSED: Status = Status(PSA_CONNECTION_REFUSED);
    pub const CONNECTION_BUSY: Status = Status(PSA_CONNECTION_BUSY);
    pub const DROP_CONNECTION: Status = Status(PSA_DROP_CONNECTION);

    pub const fn from_raw(raw: psa_status_t) -> Status {
        Status(raw)
    }

    pub const fn as_raw(self) -> psa_status_t {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    pub const fn is_error(self) -> bool {
        self.0 < 0
    }
}

impl From<psa_status_t> for Status {
    fn from(raw: psa_status_t) -> Status {
        Status(raw)
    }
}

impl From<Status> for psa_status_t {
    fn from(status: Status) -> psa_status_t {
        status.0
    }
}

/// Why a connection was not established.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectError {
    /// The service refused the connection.
    Refused,
    /// The service cannot accept more connections right now.
    Busy,
}

impl TryFrom<Status> for ConnectError {
    type Error = ();

    fn try_from(status: Status) -> Result<Self, Self::Error> {
        match status.0 {
            PSA_CONNECTION_REFUSED => Ok(ConnectError::Refused),
            PSA_CONNECTION_BUSY => Ok(ConnectError::Busy),
            _ => Err(()),
        }
    }
}

impl From<ConnectError> for Status {
    fn from(err: ConnectError) -> Status {
        match err {
            ConnectError::Refused => Status::CONNECTION_REFUSED,
            ConnectError::Busy => Status::CONNECTION_BUSY,
        }
    }
}

/// Why a call did not succeed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallError {
    /// The connection was dropped by the service. The handle must still be
    /// closed.
    DropConnection,
    /// A negative status defined by the service.
    Service(psa_status_t),
    /// More than `PSA_MAX_IOVEC` vectors were passed. Caught before the
    /// request reaches the SPM.
    TooManyVectors,
}

impl TryFrom<Status> for CallError {
    type Error = ();

    fn try_from(status: Status) -> Result<Self, Self::Error> {
        match status.0 {
            PSA_DROP_CONNECTION => Ok(CallError::DropConnection),
            raw if raw < 0 => Ok(CallError::Service(raw)),
            _ => Err(()),
        }
    }
}

impl Status {
    /// Splits the status of a `psa_call` into its service result and error.
    pub fn into_call_result(self) -> Result<u32, CallError> {
        CallError::try_from(self).map_or(Ok(self.0 as u32), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_error() {
        assert!(Status::SUCCESS.is_success());
        assert!(Status::from_raw(12).is_success());
        assert!(Status::from_raw(-1).is_error());
        assert!(Status::DROP_CONNECTION.is_error());
        assert_eq!(psa_status_t::from(Status::from(-5)), -5);
    }

    #[test]
    fn connect_errors() {
        assert_eq!(
            ConnectError::try_from(Status::CONNECTION_REFUSED),
            Ok(ConnectError::Refused)
        );
        assert_eq!(
            ConnectError::try_from(Status::CONNECTION_BUSY),
            Ok(ConnectError::Busy)
        );
        assert_eq!(ConnectError::try_from(Status::from_raw(3)), Err(()));
        assert_eq!(Status::from(ConnectError::Busy), Status::CONNECTION_BUSY);
    }

    #[test]
    fn call_results() {
        assert_eq!(Status::from_raw(0).into_call_result(), Ok(0));
        assert_eq!(Status::from_raw(42).into_call_result(), Ok(42));
        assert_eq!(
            Status::DROP_CONNECTION.into_call_result(),
            Err(CallError::DropConnection)
        );
        assert_eq!(
            Status::from_raw(-135).into_call_result(),
            Err(CallError::Service(-135))
        );
        assert_eq!(CallError::try_from(Status::SUCCESS), Err(()));
    }
}
