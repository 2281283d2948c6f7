// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Ethernet DMA controller (EDMAC).
//!
//! The RZ/A2M has two EDMAC channels, one per Ethernet MAC, and a third
//! instance (PTPEDMAC) dedicated to the PTP frame path of the EPTPC. All
//! three share the same register layout. The DMA engine walks rings of
//! 16-byte descriptors in RAM; their layout is described by
//! [`TxDescriptor`] and [`RxDescriptor`].

use crate::StaticRef;
use tock_registers::registers::{InMemoryRegister, ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub EdmacRegisters {
        /// EDMAC mode register
        (0x00 => pub edmr: ReadWrite<u32, EDMR::Register>),
        (0x04 => _reserved0),
        /// EDMAC transmit request register
        (0x08 => pub edtrr: ReadWrite<u32, EDTRR::Register>),
        (0x0c => _reserved1),
        /// EDMAC receive request register
        (0x10 => pub edrrr: ReadWrite<u32, EDRRR::Register>),
        (0x14 => _reserved2),
        /// Transmit descriptor list start address register
        (0x18 => pub tdlar: ReadWrite<u32>),
        (0x1c => _reserved3),
        /// Receive descriptor list start address register
        (0x20 => pub rdlar: ReadWrite<u32>),
        (0x24 => _reserved4),
        /// ETHERC/EDMAC status register
        (0x28 => pub eesr: ReadWrite<u32, EESR::Register>),
        (0x2c => _reserved5),
        /// ETHERC/EDMAC status interrupt enable register
        (0x30 => pub eesipr: ReadWrite<u32, EESIPR::Register>),
        (0x34 => _reserved6),
        /// ETHERC/EDMAC transmit/receive status copy enable register
        (0x38 => pub trscer: ReadWrite<u32, TRSCER::Register>),
        (0x3c => _reserved7),
        /// Missed-frame counter register
        (0x40 => pub rmfcr: ReadWrite<u32, RMFCR::Register>),
        (0x44 => _reserved8),
        /// Transmit FIFO threshold register
        (0x48 => pub tftr: ReadWrite<u32, TFTR::Register>),
        (0x4c => _reserved9),
        /// FIFO depth register
        (0x50 => pub fdr: ReadWrite<u32, FDR::Register>),
        (0x54 => _reserved10),
        /// Receive method control register
        (0x58 => pub rmcr: ReadWrite<u32, RMCR::Register>),
        (0x5c => _reserved11),
        /// Transmit FIFO underflow counter
        (0x64 => pub tfucr: ReadWrite<u32, TFUCR::Register>),
        /// Receive FIFO overflow counter
        (0x68 => pub rfocr: ReadWrite<u32, RFOCR::Register>),
        /// Independent output signal setting register
        (0x6c => pub iosr: ReadWrite<u32, IOSR::Register>),
        /// Flow control start FIFO threshold setting register
        (0x70 => pub fcftr: ReadWrite<u32, FCFTR::Register>),
        (0x74 => _reserved12),
        /// Receive data padding insert register
        (0x78 => pub rpadir: ReadWrite<u32, RPADIR::Register>),
        /// Transmit interrupt setting register
        (0x7c => pub trimd: ReadWrite<u32, TRIMD::Register>),
        (0x80 => _reserved13),
        /// Receive buffer write address register
        (0xc8 => pub rbwar: ReadOnly<u32>),
        /// Receive descriptor fetch address register
        (0xcc => pub rdfar: ReadOnly<u32>),
        (0xd0 => _reserved14),
        /// Transmit buffer read address register
        (0xd4 => pub tbrar: ReadOnly<u32>),
        /// Transmit descriptor fetch address register
        (0xd8 => pub tdfar: ReadOnly<u32>),
        (0xdc => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(EdmacRegisters, eesr) == 0x28);
const _: () = assert!(core::mem::offset_of!(EdmacRegisters, tfucr) == 0x64);
const _: () = assert!(core::mem::offset_of!(EdmacRegisters, tdfar) == 0xd8);

register_bitfields![u32,
    EDMR [
        /// Little endian descriptors
        DE OFFSET(6) NUMBITS(1) [],
        /// Descriptor length
        DL OFFSET(4) NUMBITS(2) [
            Bytes16 = 0,
            Bytes32 = 1,
            Bytes64 = 2
        ],
        /// Software reset of the EDMAC and ETHERC
        SWR OFFSET(0) NUMBITS(1) []
    ],
    EDTRR [
        /// Transmit request
        TR OFFSET(0) NUMBITS(1) []
    ],
    EDRRR [
        /// Receive request
        RR OFFSET(0) NUMBITS(1) []
    ],
    EESR [
        TWB OFFSET(30) NUMBITS(1) [],
        TABT OFFSET(26) NUMBITS(1) [],
        RABT OFFSET(25) NUMBITS(1) [],
        RFCOF OFFSET(24) NUMBITS(1) [],
        ADE OFFSET(23) NUMBITS(1) [],
        /// ETHERC status register source
        ECI OFFSET(22) NUMBITS(1) [],
        /// Frame transfer complete
        TC OFFSET(21) NUMBITS(1) [],
        /// Transmit descriptor empty
        TDE OFFSET(20) NUMBITS(1) [],
        TFUF OFFSET(19) NUMBITS(1) [],
        /// Frame received
        FR OFFSET(18) NUMBITS(1) [],
        /// Receive descriptor empty
        RDE OFFSET(17) NUMBITS(1) [],
        RFOF OFFSET(16) NUMBITS(1) [],
        CND OFFSET(11) NUMBITS(1) [],
        DLC OFFSET(10) NUMBITS(1) [],
        CD OFFSET(9) NUMBITS(1) [],
        TRO OFFSET(8) NUMBITS(1) [],
        RMAF OFFSET(7) NUMBITS(1) [],
        RRF OFFSET(4) NUMBITS(1) [],
        RTLF OFFSET(3) NUMBITS(1) [],
        RTSF OFFSET(2) NUMBITS(1) [],
        PRE OFFSET(1) NUMBITS(1) [],
        CERF OFFSET(0) NUMBITS(1) []
    ],
    EESIPR [
        TWBIP OFFSET(30) NUMBITS(1) [],
        TABTIP OFFSET(26) NUMBITS(1) [],
        RABTIP OFFSET(25) NUMBITS(1) [],
        RFCOFIP OFFSET(24) NUMBITS(1) [],
        ADEIP OFFSET(23) NUMBITS(1) [],
        ECIIP OFFSET(22) NUMBITS(1) [],
        TCIP OFFSET(21) NUMBITS(1) [],
        TDEIP OFFSET(20) NUMBITS(1) [],
        TFUFIP OFFSET(19) NUMBITS(1) [],
        FRIP OFFSET(18) NUMBITS(1) [],
        RDEIP OFFSET(17) NUMBITS(1) [],
        RFOFIP OFFSET(16) NUMBITS(1) [],
        CNDIP OFFSET(11) NUMBITS(1) [],
        DLCIP OFFSET(10) NUMBITS(1) [],
        CDIP OFFSET(9) NUMBITS(1) [],
        TROIP OFFSET(8) NUMBITS(1) [],
        RMAFIP OFFSET(7) NUMBITS(1) [],
        RRFIP OFFSET(4) NUMBITS(1) [],
        RTLFIP OFFSET(3) NUMBITS(1) [],
        RTSFIP OFFSET(2) NUMBITS(1) [],
        PREIP OFFSET(1) NUMBITS(1) [],
        CERFIP OFFSET(0) NUMBITS(1) []
    ],
    TRSCER [
        /// Suppress copying of the multicast-received flag into RD0
        RMAFCE OFFSET(7) NUMBITS(1) [],
        /// Suppress copying of the residual-bit flag into RD0
        RRFCE OFFSET(4) NUMBITS(1) []
    ],
    RMFCR [
        MFC OFFSET(0) NUMBITS(16) []
    ],
    TFTR [
        /// Transmit FIFO threshold in units of 4 bytes, 0 = store and forward
        TFT OFFSET(0) NUMBITS(11) []
    ],
    FDR [
        TFD OFFSET(8) NUMBITS(5) [],
        RFD OFFSET(0) NUMBITS(5) []
    ],
    RMCR [
        /// Keep EDRRR.RR set after each received frame
        RNR OFFSET(0) NUMBITS(1) []
    ],
    TFUCR [
        UNDER OFFSET(0) NUMBITS(16) []
    ],
    RFOCR [
        OVER OFFSET(0) NUMBITS(16) []
    ],
    IOSR [
        /// External loopback mode
        ELB OFFSET(0) NUMBITS(1) []
    ],
    FCFTR [
        RFFO OFFSET(16) NUMBITS(3) [],
        RFDO OFFSET(0) NUMBITS(3) []
    ],
    RPADIR [
        /// Padding size in bytes
        PADS OFFSET(16) NUMBITS(2) [],
        /// Padding slot position
        PADR OFFSET(0) NUMBITS(6) []
    ],
    TRIMD [
        /// Transmit interrupt mode: 0 = on transfer, 1 = on write-back
        TIM OFFSET(4) NUMBITS(1) [],
        /// Transmit interrupt enable
        TIS OFFSET(0) NUMBITS(1) []
    ]
];

register_bitfields![u32,
    TD0 [
        /// Descriptor owned by the EDMAC
        TACT OFFSET(31) NUMBITS(1) [],
        /// Last descriptor of the ring
        TDLE OFFSET(30) NUMBITS(1) [],
        /// Frame position of the buffer
        TFP OFFSET(28) NUMBITS(2) [
            Middle = 0,
            Last = 1,
            First = 2,
            Whole = 3
        ],
        /// Error occurred during transmission
        TFE OFFSET(27) NUMBITS(1) [],
        /// Write-back complete interrupt
        TWBI OFFSET(26) NUMBITS(1) [],
        /// Transmit frame status
        TFS OFFSET(0) NUMBITS(26) []
    ],
    TD1 [
        /// Transmit buffer length in bytes
        TBL OFFSET(16) NUMBITS(16) []
    ],
    RD0 [
        /// Descriptor owned by the EDMAC
        RACT OFFSET(31) NUMBITS(1) [],
        /// Last descriptor of the ring
        RDLE OFFSET(30) NUMBITS(1) [],
        RFP OFFSET(28) NUMBITS(2) [
            Middle = 0,
            Last = 1,
            First = 2,
            Whole = 3
        ],
        /// Error occurred during reception
        RFE OFFSET(27) NUMBITS(1) [],
        /// Receive frame status
        RFS OFFSET(0) NUMBITS(27) []
    ],
    RD1 [
        /// Receive buffer length in bytes
        RBL OFFSET(16) NUMBITS(16) [],
        /// Received frame length in bytes
        RFL OFFSET(0) NUMBITS(16) []
    ]
];

/// Transmit descriptor, 16 bytes, as laid out in RAM with `EDMR.DL = 16`.
#[repr(C, align(16))]
pub struct TxDescriptor {
    pub td0: InMemoryRegister<u32, TD0::Register>,
    pub td1: InMemoryRegister<u32, TD1::Register>,
    /// Transmit buffer address
    pub td2: InMemoryRegister<u32>,
    _padding: InMemoryRegister<u32>,
}

/// Receive descriptor, 16 bytes, as laid out in RAM with `EDMR.DL = 16`.
#[repr(C, align(16))]
pub struct RxDescriptor {
    pub rd0: InMemoryRegister<u32, RD0::Register>,
    pub rd1: InMemoryRegister<u32, RD1::Register>,
    /// Receive buffer address
    pub rd2: InMemoryRegister<u32>,
    _padding: InMemoryRegister<u32>,
}

impl TxDescriptor {
    pub fn new() -> Self {
        TxDescriptor {
            td0: InMemoryRegister::new(0),
            td1: InMemoryRegister::new(0),
            td2: InMemoryRegister::new(0),
            _padding: InMemoryRegister::new(0),
        }
    }
}

impl RxDescriptor {
    pub fn new() -> Self {
        RxDescriptor {
            rd0: InMemoryRegister::new(0),
            rd1: InMemoryRegister::new(0),
            rd2: InMemoryRegister::new(0),
            _padding: InMemoryRegister::new(0),
        }
    }
}

impl Default for TxDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RxDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

const _: () = assert!(core::mem::size_of::<TxDescriptor>() == 16);
const _: () = assert!(core::mem::size_of::<RxDescriptor>() == 16);

pub const EDMAC0_BASE_ADDR: usize = 0xE820_4000;
pub const EDMAC1_BASE_ADDR: usize = 0xE820_4200;
pub const PTPEDMAC_BASE_ADDR: usize = 0xE820_4400;

pub const EDMAC0_BASE: StaticRef<EdmacRegisters> =
    unsafe { StaticRef::new(EDMAC0_BASE_ADDR as *const EdmacRegisters) };
pub const EDMAC1_BASE: StaticRef<EdmacRegisters> =
    unsafe { StaticRef::new(EDMAC1_BASE_ADDR as *const EdmacRegisters) };
pub const PTPEDMAC_BASE: StaticRef<EdmacRegisters> =
    unsafe { StaticRef::new(PTPEDMAC_BASE_ADDR as *const EdmacRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[test]
    fn register_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(EdmacRegisters, edmr), 0x00);
        assert_eq!(offset_of!(EdmacRegisters, edtrr), 0x08);
        assert_eq!(offset_of!(EdmacRegisters, edrrr), 0x10);
        assert_eq!(offset_of!(EdmacRegisters, tdlar), 0x18);
        assert_eq!(offset_of!(EdmacRegisters, rdlar), 0x20);
        assert_eq!(offset_of!(EdmacRegisters, eesipr), 0x30);
        assert_eq!(offset_of!(EdmacRegisters, rmcr), 0x58);
        assert_eq!(offset_of!(EdmacRegisters, rpadir), 0x78);
        assert_eq!(offset_of!(EdmacRegisters, rbwar), 0xc8);
        assert_eq!(core::mem::size_of::<EdmacRegisters>(), 0xdc);
    }

    #[test]
    fn instance_addresses() {
        assert_eq!(EDMAC0_BASE_ADDR, 0xE8204000);
        assert_eq!(EDMAC1_BASE_ADDR - EDMAC0_BASE_ADDR, 0x200);
        assert_eq!(PTPEDMAC_BASE_ADDR, 0xE8204400);
    }

    #[test]
    fn edmr_fields() {
        let edmr = InMemoryRegister::<u32, EDMR::Register>::new(0);
        edmr.write(EDMR::DE::SET + EDMR::DL::Bytes16);
        assert_eq!(edmr.get(), 0x40);
        edmr.modify(EDMR::SWR::SET);
        assert_eq!(edmr.get(), 0x41);
        assert!(edmr.matches_all(EDMR::DL::Bytes16));
    }

    #[test]
    fn eesr_status_bits() {
        let eesr = InMemoryRegister::<u32, EESR::Register>::new(0x0026_0000);
        assert!(eesr.is_set(EESR::FR));
        assert!(eesr.is_set(EESR::RDE));
        assert!(eesr.is_set(EESR::TC));
        assert!(!eesr.is_set(EESR::TDE));
    }

    #[test]
    fn descriptor_fields() {
        let td = TxDescriptor::new();
        td.td0.write(TD0::TACT::SET + TD0::TDLE::SET + TD0::TFP::Whole);
        td.td1.write(TD1::TBL.val(1514));
        assert_eq!(td.td0.get(), 0xF000_0000);
        assert_eq!(td.td1.get(), 1514 << 16);

        let rd = RxDescriptor::new();
        rd.rd1.set((1536 << 16) | 60);
        assert_eq!(rd.rd1.read(RD1::RBL), 1536);
        assert_eq!(rd.rd1.read(RD1::RFL), 60);
        rd.rd0.modify(RD0::RACT::SET);
        assert_eq!(rd.rd0.get(), 0x8000_0000);
    }
}
