// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Serial communication interface with FIFO (SCIFA).

use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const CHANNEL_COUNT: usize = 5;
pub const FIFO_DEPTH: usize = 16;

register_structs! {
    pub ScifaRegisters {
        /// Serial mode register
        (0x00 => pub smr: ReadWrite<u16, SMR::Register>),
        /// Bit rate register (MDDR when SEMR.MDDRS is set)
        (0x02 => pub brr_mddr: ReadWrite<u8>),
        (0x03 => _reserved0),
        /// Serial control register
        (0x04 => pub scr: ReadWrite<u16, SCR::Register>),
        /// Transmit FIFO data register
        (0x06 => pub ftdr: WriteOnly<u8>),
        (0x07 => _reserved1),
        /// Serial status register
        (0x08 => pub fsr: ReadWrite<u16, FSR::Register>),
        /// Receive FIFO data register
        (0x0a => pub frdr: ReadOnly<u8>),
        (0x0b => _reserved2),
        /// FIFO control register
        (0x0c => pub fcr: ReadWrite<u16, FCR::Register>),
        /// FIFO data count register
        (0x0e => pub fdr: ReadOnly<u16, FDR::Register>),
        /// Serial port register
        (0x10 => pub sptr: ReadWrite<u16, SPTR::Register>),
        /// Line status register
        (0x12 => pub lsr: ReadWrite<u16, LSR::Register>),
        /// Serial extended mode register
        (0x14 => pub semr: ReadWrite<u8, SEMR::Register>),
        (0x15 => _reserved3),
        /// FIFO trigger control register
        (0x16 => pub ftcr: ReadWrite<u16, FTCR::Register>),
        (0x18 => @END),
    }
}

const _: () = assert!(core::mem::size_of::<ScifaRegisters>() == 0x18);

register_bitfields![u16,
    SMR [
        /// Communication mode: 0 = asynchronous, 1 = clock synchronous
        CM OFFSET(7) NUMBITS(1) [
            Asynchronous = 0,
            Synchronous = 1
        ],
        /// Character length: 0 = 8 bits, 1 = 7 bits
        CHR OFFSET(6) NUMBITS(1) [
            Bits8 = 0,
            Bits7 = 1
        ],
        PE OFFSET(5) NUMBITS(1) [],
        PM OFFSET(4) NUMBITS(1) [
            Even = 0,
            Odd = 1
        ],
        STOP OFFSET(3) NUMBITS(1) [
            One = 0,
            Two = 1
        ],
        /// Clock select: P1 / 4^CKS
        CKS OFFSET(0) NUMBITS(2) [
            Div1 = 0,
            Div4 = 1,
            Div16 = 2,
            Div64 = 3
        ]
    ],
    SCR [
        TIE OFFSET(7) NUMBITS(1) [],
        RIE OFFSET(6) NUMBITS(1) [],
        TE OFFSET(5) NUMBITS(1) [],
        RE OFFSET(4) NUMBITS(1) [],
        REIE OFFSET(3) NUMBITS(1) [],
        TEIE OFFSET(2) NUMBITS(1) [],
        CKE OFFSET(0) NUMBITS(2) []
    ],
    FSR [
        /// Number of parity errors in the receive FIFO
        PERN OFFSET(12) NUMBITS(4) [],
        /// Number of framing errors in the receive FIFO
        FERN OFFSET(8) NUMBITS(4) [],
        ER OFFSET(7) NUMBITS(1) [],
        TEND OFFSET(6) NUMBITS(1) [],
        TDFE OFFSET(5) NUMBITS(1) [],
        BRK OFFSET(4) NUMBITS(1) [],
        FER OFFSET(3) NUMBITS(1) [],
        PER OFFSET(2) NUMBITS(1) [],
        RDF OFFSET(1) NUMBITS(1) [],
        DR OFFSET(0) NUMBITS(1) []
    ],
    FCR [
        /// RTS# output active trigger
        RSTRG OFFSET(8) NUMBITS(3) [],
        RTRG OFFSET(6) NUMBITS(2) [
            Bytes1 = 0,
            Bytes4 = 1,
            Bytes8 = 2,
            Bytes14 = 3
        ],
        TTRG OFFSET(4) NUMBITS(2) [
            Bytes8 = 0,
            Bytes4 = 1,
            Bytes2 = 2,
            Bytes0 = 3
        ],
        /// Modem control enable
        MCE OFFSET(3) NUMBITS(1) [],
        TFRST OFFSET(2) NUMBITS(1) [],
        RFRST OFFSET(1) NUMBITS(1) [],
        LOOP OFFSET(0) NUMBITS(1) []
    ],
    FDR [
        T OFFSET(8) NUMBITS(5) [],
        R OFFSET(0) NUMBITS(5) []
    ],
    SPTR [
        RTS2IO OFFSET(7) NUMBITS(1) [],
        RTS2DT OFFSET(6) NUMBITS(1) [],
        CTS2IO OFFSET(5) NUMBITS(1) [],
        CTS2DT OFFSET(4) NUMBITS(1) [],
        SCKIO OFFSET(3) NUMBITS(1) [],
        SCKDT OFFSET(2) NUMBITS(1) [],
        SPB2IO OFFSET(1) NUMBITS(1) [],
        SPB2DT OFFSET(0) NUMBITS(1) []
    ],
    LSR [
        PER OFFSET(8) NUMBITS(4) [],
        FER OFFSET(2) NUMBITS(4) [],
        /// Overrun error
        ORER OFFSET(0) NUMBITS(1) []
    ],
    FTCR [
        RTRGS OFFSET(15) NUMBITS(1) [],
        RFTC OFFSET(8) NUMBITS(5) [],
        TTRGS OFFSET(7) NUMBITS(1) [],
        TFTC OFFSET(0) NUMBITS(5) []
    ]
];

register_bitfields![u8,
    SEMR [
        /// Baud rate generator double-speed mode
        BGDM OFFSET(7) NUMBITS(1) [],
        /// Bit rate modulation enable
        BRME OFFSET(5) NUMBITS(1) [],
        /// BRR/MDDR select
        MDDRS OFFSET(4) NUMBITS(1) [],
        DIR OFFSET(3) NUMBITS(1) [
            LsbFirst = 0,
            MsbFirst = 1
        ],
        NFEN OFFSET(2) NUMBITS(1) [],
        /// Asynchronous base clock: 0 = 16 cycles per bit, 1 = 8
        ABCS0 OFFSET(0) NUMBITS(1) []
    ]
];

pub const SCIFA_BASE_ADDRS: [usize; CHANNEL_COUNT] = [
    0xE800_7000,
    0xE800_7800,
    0xE800_8000,
    0xE800_8800,
    0xE800_9000,
];

pub const SCIFA0_BASE_ADDR: usize = SCIFA_BASE_ADDRS[0];
pub const SCIFA1_BASE_ADDR: usize = SCIFA_BASE_ADDRS[1];
pub const SCIFA2_BASE_ADDR: usize = SCIFA_BASE_ADDRS[2];
pub const SCIFA3_BASE_ADDR: usize = SCIFA_BASE_ADDRS[3];
pub const SCIFA4_BASE_ADDR: usize = SCIFA_BASE_ADDRS[4];

pub const SCIFA0_BASE: StaticRef<ScifaRegisters> =
    unsafe { StaticRef::new(SCIFA0_BASE_ADDR as *const ScifaRegisters) };
pub const SCIFA1_BASE: StaticRef<ScifaRegisters> =
    unsafe { StaticRef::new(SCIFA1_BASE_ADDR as *const ScifaRegisters) };
pub const SCIFA2_BASE: StaticRef<ScifaRegisters> =
    unsafe { StaticRef::new(SCIFA2_BASE_ADDR as *const ScifaRegisters) };
pub const SCIFA3_BASE: StaticRef<ScifaRegisters> =
    unsafe { StaticRef::new(SCIFA3_BASE_ADDR as *const ScifaRegisters) };
pub const SCIFA4_BASE: StaticRef<ScifaRegisters> =
    unsafe { StaticRef::new(SCIFA4_BASE_ADDR as *const ScifaRegisters) };

/// Base address of SCIFA `channel`, or `None` past the last channel.
pub const fn scifa_base_addr(channel: usize) -> Option<usize> {
    if channel < CHANNEL_COUNT {
        Some(SCIFA_BASE_ADDRS[channel])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(ScifaRegisters, brr_mddr), 0x02);
        assert_eq!(offset_of!(ScifaRegisters, scr), 0x04);
        assert_eq!(offset_of!(ScifaRegisters, ftdr), 0x06);
        assert_eq!(offset_of!(ScifaRegisters, fsr), 0x08);
        assert_eq!(offset_of!(ScifaRegisters, frdr), 0x0a);
        assert_eq!(offset_of!(ScifaRegisters, fdr), 0x0e);
        assert_eq!(offset_of!(ScifaRegisters, lsr), 0x12);
        assert_eq!(offset_of!(ScifaRegisters, semr), 0x14);
        assert_eq!(offset_of!(ScifaRegisters, ftcr), 0x16);
    }

    #[test]
    fn channel_addresses() {
        assert_eq!(SCIFA0_BASE_ADDR, 0xE800_7000);
        assert_eq!(SCIFA2_BASE_ADDR, 0xE800_8000);
        assert_eq!(SCIFA4_BASE_ADDR, 0xE800_9000);
        for (n, addr) in SCIFA_BASE_ADDRS.iter().enumerate() {
            assert_eq!(*addr, 0xE800_7000 + 0x800 * n);
            assert_eq!(scifa_base_addr(n), Some(*addr));
        }
        assert_eq!(scifa_base_addr(CHANNEL_COUNT), None);
    }

    #[test]
    fn mode_8n1() {
        let smr = InMemoryRegister::<u16, SMR::Register>::new(0xff);
        smr.write(SMR::CM::Asynchronous + SMR::CHR::Bits8 + SMR::STOP::One + SMR::CKS::Div1);
        assert_eq!(smr.get(), 0);

        let scr = InMemoryRegister::<u16, SCR::Register>::new(0);
        scr.write(SCR::TE::SET + SCR::RE::SET + SCR::RIE::SET);
        assert_eq!(scr.get(), 0x70);
    }

    #[test]
    fn fifo_status() {
        let fdr = InMemoryRegister::<u16, FDR::Register>::new(0x0a03);
        assert_eq!(fdr.read(FDR::T), 10);
        assert_eq!(fdr.read(FDR::R), 3);

        let fsr = InMemoryRegister::<u16, FSR::Register>::new(0x0060);
        assert!(fsr.is_set(FSR::TEND));
        assert!(fsr.is_set(FSR::TDFE));
        assert!(!fsr.is_set(FSR::DR));

        let semr = InMemoryRegister::<u8, SEMR::Register>::new(0);
        semr.write(SEMR::ABCS0::SET + SEMR::NFEN::SET);
        assert_eq!(semr.get(), 0x05);
    }
}
