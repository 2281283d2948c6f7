// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! I/O vectors borrowing Rust slices.
//!
//! [`InVec`] and [`OutVec`] have the layout of `psa_invec` and
//! `psa_outvec`, so a slice of them is passed to `psa_call` as is. The
//! lifetime ties each vector to the buffer it describes.

use core::ffi::c_void;
use core::marker::PhantomData;

use crate::ffi::{psa_invec, psa_outvec};

#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct InVec<'a> {
    raw: psa_invec,
    _buf: PhantomData<&'a [u8]>,
}

impl<'a> InVec<'a> {
    pub fn from_slice(buf: &'a [u8]) -> InVec<'a> {
        InVec {
            raw: psa_invec {
                base: buf.as_ptr().cast::<c_void>(),
                len: buf.len(),
            },
            _buf: PhantomData,
        }
    }

    /// An empty vector. PSA allows a null base with zero length.
    pub const fn empty() -> InVec<'static> {
        InVec {
            raw: psa_invec {
                base: core::ptr::null(),
                len: 0,
            },
            _buf: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.raw.len
    }

    pub fn is_empty(&self) -> bool {
        self.raw.len == 0
    }

    pub fn as_raw(&self) -> &psa_invec {
        &self.raw
    }
}

#[repr(transparent)]
#[derive(Debug)]
pub struct OutVec<'a> {
    raw: psa_outvec,
    _buf: PhantomData<&'a mut [u8]>,
}

impl<'a> OutVec<'a> {
    pub fn from_mut_slice(buf: &'a mut [u8]) -> OutVec<'a> {
        OutVec {
            raw: psa_outvec {
                base: buf.as_mut_ptr().cast::<c_void>(),
                len: buf.len(),
            },
            _buf: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.raw.len
    }

    pub fn is_empty(&self) -> bool {
        self.raw.len == 0
    }

    pub fn as_raw(&self) -> &psa_outvec {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_describe_slices() {
        let input = [1u8, 2, 3];
        let v = InVec::from_slice(&input);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_raw().base, input.as_ptr().cast::<c_void>());

        let mut output = [0u8; 16];
        let ptr = output.as_mut_ptr();
        let o = OutVec::from_mut_slice(&mut output);
        assert_eq!(o.len(), 16);
        assert_eq!(o.as_raw().base, ptr.cast::<c_void>());

        assert!(InVec::empty().is_empty());
        assert!(InVec::empty().as_raw().base.is_null());
    }

    #[test]
    fn transparent_layout() {
        use core::mem::size_of;
        assert_eq!(size_of::<InVec<'_>>(), size_of::<psa_invec>());
        assert_eq!(size_of::<OutVec<'_>>(), size_of::<psa_outvec>());
    }
}
