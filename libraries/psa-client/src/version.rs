// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

use crate::ffi::{PSA_FRAMEWORK_VERSION, PSA_VERSION_NONE};

/// A framework or service version.
///
/// The framework version is encoded as `0xMMmm`. A service version is
/// whatever 32-bit value the service declares; [`Version::major`] keeps all
/// bits above the low byte so that no value is folded onto another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Version(u32);

impl Version {
    pub const FRAMEWORK: Version = Version(PSA_FRAMEWORK_VERSION);

    pub const fn from_raw(raw: u32) -> Version {
        Version(raw)
    }

    /// Decodes the value returned by `psa_version`, which is
    /// `PSA_VERSION_NONE` when the service is absent.
    pub const fn from_service(raw: u32) -> Option<Version> {
        if raw == PSA_VERSION_NONE {
            None
        } else {
            Some(Version(raw))
        }
    }

    pub const fn as_raw(self) -> u32 {
        self.0
    }

    pub const fn major(self) -> u32 {
        self.0 >> 8
    }

    pub const fn minor(self) -> u8 {
        self.0 as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_is_1_0() {
        assert_eq!(Version::FRAMEWORK.major(), 1);
        assert_eq!(Version::FRAMEWORK.minor(), 0);
        assert_eq!(Version::FRAMEWORK.as_raw(), 0x0100);
    }

    #[test]
    fn service_versions() {
        assert_eq!(Version::from_service(0), None);
        let v = Version::from_service(3).unwrap();
        assert_eq!(v.major(), 0);
        assert_eq!(v.minor(), 3);
        assert!(Version::from_raw(0x0101) > Version::FRAMEWORK);
    }

    #[test]
    fn wide_service_versions_keep_every_bit() {
        for raw in [0x100, 0xffff, 0x0001_0203, u32::MAX] {
            let v = Version::from_service(raw).unwrap();
            assert_eq!((v.major() << 8) | v.minor() as u32, raw);
        }
        let v = Version::from_service(0x0001_0203).unwrap();
        assert_eq!(v.major(), 0x102);
        assert_eq!(v.minor(), 3);
    }
}
