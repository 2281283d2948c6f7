// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Compile-time configuration options.
//!
//! Options are fields of a typed `const` so that disabled code paths are
//! still type-checked; the compiler folds them away. Cargo features only
//! select the values below.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether [`Spm`](crate::Spm) should trace every PSA call to the debug
    /// output.
    ///
    /// If enabled, each call prints its arguments and the value returned by
    /// the SPM, e.g. `psa_connect(0x1000, 1) = 3`.
    pub(crate) trace_psa_calls: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined.
pub(crate) const CONFIG: Config = Config {
    trace_psa_calls: cfg!(feature = "trace_psa_calls"),
};
