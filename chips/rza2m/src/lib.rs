// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Register maps for the Renesas RZ/A2M (R7S9210) peripherals.
//!
//! Each module describes one peripheral block: the register layout as a
//! `register_structs!` overlay, the field layout of each register as
//! `register_bitfields!`, and the fixed base address of every instance of
//! the block. Nothing here touches the hardware on its own; drivers take a
//! [`StaticRef`] to the block and go through the `tock-registers`
//! interfaces.

#![no_std]
#![crate_name = "rza2m"]
#![crate_type = "rlib"]
// `rcanfd` and `eptpc` have large nested `register_structs!` definitions
// and require a deeper recursion limit than the default to fully expand.
#![recursion_limit = "256"]

mod static_ref;

pub use static_ref::StaticRef;

pub mod edmac;
pub mod eptpc;
pub mod etherc;
pub mod imr;
pub mod l2c;
pub mod nandc;
pub mod poe3;
pub mod rcanfd;
pub mod riic;
pub mod rspi;
pub mod scifa;
