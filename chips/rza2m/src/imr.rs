// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Image renderer (IMR-LS2).
//!
//! The renderer is driven by a display list in memory. The list address
//! goes into `dlsar`, rendering starts with `CR::RS`, and completion is
//! signalled through `SR::TRA` (or `SR::INT` for an `INT` opcode in the
//! list). The [`op`] module encodes display list words.

use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub ImrRegisters {
        (0x00 => _reserved0),
        /// Control register
        (0x08 => pub cr: WriteOnly<u32, CR::Register>),
        /// Status register
        (0x0c => pub sr: ReadOnly<u32, SR::Register>),
        /// Status clear register
        (0x10 => pub srcr: WriteOnly<u32, SR::Register>),
        /// Interrupt control register
        (0x14 => pub icr: ReadWrite<u32, SR::Register>),
        /// Interrupt mask register
        (0x18 => pub imr: ReadWrite<u32, SR::Register>),
        /// Display list stack pointer
        (0x1c => pub dlsp: ReadOnly<u32>),
        /// Display list status register
        (0x20 => pub dlsr: ReadOnly<u32, DLSR::Register>),
        (0x24 => _reserved1),
        /// Display list start address
        (0x30 => pub dlsar: ReadWrite<u32>),
        /// Destination start address
        (0x34 => pub dsar: ReadWrite<u32>),
        /// Source start address
        (0x38 => pub ssar: ReadWrite<u32>),
        /// Destination stride
        (0x3c => pub dstr: ReadWrite<u32, STRIDE::Register>),
        /// Source stride
        (0x40 => pub sstr: ReadWrite<u32, STRIDE::Register>),
        (0x44 => _reserved2),
        /// Destination coordinate offset
        (0x50 => pub dsor: ReadWrite<u32, DSOR::Register>),
        /// Rendering mode register
        (0x54 => pub cmrcr: ReadWrite<u32, CMR::Register>),
        (0x58 => pub cmrcsr: WriteOnly<u32, CMR::Register>),
        (0x5c => pub cmrccr: WriteOnly<u32, CMR::Register>),
        /// Clear color rendering
        (0x60 => pub trimr: ReadWrite<u32, TRIM::Register>),
        (0x64 => pub trimsr: WriteOnly<u32, TRIM::Register>),
        (0x68 => pub trimcr: WriteOnly<u32, TRIM::Register>),
        /// Clear color value
        (0x6c => pub tricr: ReadWrite<u32, TRICR::Register>),
        /// UV decimal point position
        (0x70 => pub uvdpor: ReadWrite<u32, UVDPOR::Register>),
        /// Source texture size
        (0x74 => pub susr: ReadWrite<u32, SUSR::Register>),
        (0x78 => pub svsr: ReadWrite<u32, SVSR::Register>),
        (0x7c => _reserved3),
        /// Clipping rectangle
        (0x80 => pub xminr: ReadWrite<u32, COORD::Register>),
        (0x84 => pub yminr: ReadWrite<u32, COORD::Register>),
        (0x88 => pub xmaxr: ReadWrite<u32, COORD::Register>),
        (0x8c => pub ymaxr: ReadWrite<u32, COORD::Register>),
        /// Auto-generated mesh size and origin
        (0x90 => pub amxsr: ReadWrite<u32, COORD::Register>),
        (0x94 => pub amysr: ReadWrite<u32, COORD::Register>),
        (0x98 => pub amxor: ReadWrite<u32, COORD::Register>),
        (0x9c => pub amyor: ReadWrite<u32, COORD::Register>),
        (0xa0 => _reserved4),
        /// Rendering mode register 2
        (0xe4 => pub cmrcr2: ReadWrite<u32, CMR2::Register>),
        (0xe8 => pub cmrcsr2: WriteOnly<u32, CMR2::Register>),
        (0xec => pub cmrccr2: WriteOnly<u32, CMR2::Register>),
        (0xf0 => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(ImrRegisters, dlsar) == 0x30);
const _: () = assert!(core::mem::offset_of!(ImrRegisters, cmrcr2) == 0xe4);

register_bitfields![u32,
    CR [
        /// Software reset
        SWRST OFFSET(15) NUMBITS(1) [],
        /// Rendering start
        RS OFFSET(0) NUMBITS(1) []
    ],
    /// Shared by SR, SRCR, ICR and IMR
    SR [
        /// Rendering in progress (SR only)
        REN OFFSET(5) NUMBITS(1) [],
        /// Display list INT instruction executed
        INT OFFSET(2) NUMBITS(1) [],
        /// Illegal instruction
        IER OFFSET(1) NUMBITS(1) [],
        /// Display list TRAP instruction executed
        TRA OFFSET(0) NUMBITS(1) []
    ],
    DLSR [
        /// Current nesting level of GOSUB
        LEVEL OFFSET(0) NUMBITS(4) []
    ],
    STRIDE [
        STRIDE OFFSET(0) NUMBITS(14) []
    ],
    DSOR [
        /// Signed X offset
        DOX OFFSET(16) NUMBITS(16) [],
        /// Signed Y offset
        DOY OFFSET(0) NUMBITS(16) []
    ],
    CMR [
        /// Source Y interpolation
        SUVS OFFSET(13) NUMBITS(1) [],
        /// Texture mapping
        TME OFFSET(12) NUMBITS(1) [],
        /// Bilinear filter
        BFE OFFSET(11) NUMBITS(1) [],
        /// Auto sort of source coordinates
        AUTOSG OFFSET(10) NUMBITS(1) [],
        /// Auto sort of destination coordinates
        AUTODG OFFSET(9) NUMBITS(1) [],
        /// Y-only (luminance) rendering
        Y10 OFFSET(8) NUMBITS(1) [],
        /// Source image mode
        YISM OFFSET(7) NUMBITS(1) [],
        /// Source UV shift
        SUV OFFSET(5) NUMBITS(2) [],
        /// Destination UV shift
        DUV OFFSET(3) NUMBITS(2) [],
        /// Color lookup
        CLCE OFFSET(2) NUMBITS(1) [],
        /// Luminance correction
        LUCE OFFSET(1) NUMBITS(1) []
    ],
    CMR2 [
        /// Destination color conversion table
        DCTE OFFSET(15) NUMBITS(1) [],
        /// Texture color conversion table
        TCTE OFFSET(12) NUMBITS(1) [],
        UVFORM OFFSET(6) NUMBITS(1) [],
        YUV422FORM OFFSET(5) NUMBITS(1) [],
        YUV422E OFFSET(2) NUMBITS(1) []
    ],
    TRIM [
        /// Clear with TRICR color before rendering
        TCM OFFSET(6) NUMBITS(1) [],
        /// Source transparent color enable
        TME OFFSET(0) NUMBITS(1) []
    ],
    TRICR [
        YCFORM OFFSET(31) NUMBITS(1) [],
        COLOR OFFSET(0) NUMBITS(24) []
    ],
    UVDPOR [
        /// Enable the DDP field
        DDP OFFSET(8) NUMBITS(1) [],
        /// Destination decimal point position
        DDPP OFFSET(4) NUMBITS(3) [],
        /// Source decimal point position
        UVDPO OFFSET(0) NUMBITS(3) []
    ],
    SUSR [
        /// Source width minus one
        SUW OFFSET(16) NUMBITS(11) [],
        /// Source width minus one for the second plane
        SUW2 OFFSET(0) NUMBITS(11) []
    ],
    SVSR [
        /// Source height minus one
        SVS OFFSET(0) NUMBITS(11) []
    ],
    COORD [
        VALUE OFFSET(0) NUMBITS(13) []
    ]
];

pub const IMR_BASE_ADDR: usize = 0xE830_1000;

pub const IMR_BASE: StaticRef<ImrRegisters> =
    unsafe { StaticRef::new(IMR_BASE_ADDR as *const ImrRegisters) };

/// Display list instruction words.
pub mod op {
    pub const fn nop(n: u16) -> u32 {
        (0x80 << 24) | n as u32
    }

    /// Write `n` following words to consecutive registers starting at `reg`.
    pub const fn wtl(reg: usize, n: u16) -> u32 {
        (0x81 << 24) | (((reg / 4) as u32 & 0xff) << 16) | n as u32
    }

    /// Write a 16-bit immediate to `reg`.
    pub const fn wts(reg: usize, data: u16) -> u32 {
        (0x82 << 24) | (((reg / 4) as u32 & 0xff) << 16) | data as u32
    }

    /// Like [`wtl`], with a 14-bit register index and 10-bit count.
    pub const fn wtl2(reg: usize, n: u16) -> u32 {
        (0x83 << 24) | (((reg / 4) as u32 & 0x3fff) << 10) | (n as u32 & 0x3ff)
    }

    pub const SYNCM: u32 = 0x86 << 24;
    pub const INT: u32 = 0x88 << 24;

    /// Draw `n` vertices as independent triangles.
    pub const fn tri(n: u16) -> u32 {
        (0x8a << 24) | n as u32
    }

    pub const fn line(n: u16) -> u32 {
        (0x8b << 24) | n as u32
    }

    pub const GOSUB: u32 = 0x8c << 24;
    pub const RET: u32 = 0x8d << 24;
    pub const TRAP: u32 = 0x8f << 24;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(ImrRegisters, cr), 0x08);
        assert_eq!(offset_of!(ImrRegisters, sr), 0x0c);
        assert_eq!(offset_of!(ImrRegisters, imr), 0x18);
        assert_eq!(offset_of!(ImrRegisters, dlsr), 0x20);
        assert_eq!(offset_of!(ImrRegisters, sstr), 0x40);
        assert_eq!(offset_of!(ImrRegisters, dsor), 0x50);
        assert_eq!(offset_of!(ImrRegisters, cmrccr), 0x5c);
        assert_eq!(offset_of!(ImrRegisters, tricr), 0x6c);
        assert_eq!(offset_of!(ImrRegisters, svsr), 0x78);
        assert_eq!(offset_of!(ImrRegisters, xminr), 0x80);
        assert_eq!(offset_of!(ImrRegisters, amyor), 0x9c);
        assert_eq!(offset_of!(ImrRegisters, cmrccr2), 0xec);
        assert_eq!(core::mem::size_of::<ImrRegisters>(), 0xf0);
    }

    #[test]
    fn status_bits() {
        let sr = InMemoryRegister::<u32, SR::Register>::new(0x21);
        assert!(sr.is_set(SR::TRA));
        assert!(sr.is_set(SR::REN));
        assert!(!sr.is_set(SR::IER));
    }

    #[test]
    fn rendering_mode() {
        let cmr = InMemoryRegister::<u32, CMR::Register>::new(0);
        cmr.write(CMR::TME::SET + CMR::BFE::SET + CMR::DUV.val(1));
        assert_eq!(cmr.get(), 0x1808);
        assert_eq!(cmr.read(CMR::DUV), 1);
    }

    #[test]
    fn display_list_words() {
        assert_eq!(op::tri(3), 0x8a00_0003);
        assert_eq!(op::wtl(0x54, 2), 0x8115_0002);
        assert_eq!(op::wts(0x3c, 1024), 0x820f_0400);
        assert_eq!(op::wtl2(0x54, 1), 0x8300_5401);
        assert_eq!(op::TRAP, 0x8f00_0000);
    }
}
