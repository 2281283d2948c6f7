// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Ethernet MAC controller (ETHERC).

use crate::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub EthercRegisters {
        /// ETHERC mode register
        (0x00 => pub ecmr: ReadWrite<u32, ECMR::Register>),
        (0x04 => _reserved0),
        /// Receive frame maximum length register
        (0x08 => pub rflr: ReadWrite<u32, RFLR::Register>),
        (0x0c => _reserved1),
        /// ETHERC status register
        (0x10 => pub ecsr: ReadWrite<u32, ECSR::Register>),
        (0x14 => _reserved2),
        /// ETHERC interrupt enable register
        (0x18 => pub ecsipr: ReadWrite<u32, ECSIPR::Register>),
        (0x1c => _reserved3),
        /// PHY interface register
        (0x20 => pub pir: ReadWrite<u32, PIR::Register>),
        (0x24 => _reserved4),
        /// PHY status register
        (0x28 => pub psr: ReadWrite<u32, PSR::Register>),
        (0x2c => _reserved5),
        /// Random number generation counter upper limit setting register
        (0x40 => pub rdmlr: ReadWrite<u32, RDMLR::Register>),
        (0x44 => _reserved6),
        /// Interpacket gap register
        (0x50 => pub ipgr: ReadWrite<u32, IPGR::Register>),
        /// Automatic PAUSE frame register
        (0x54 => pub apr: ReadWrite<u32, APR::Register>),
        /// Manual PAUSE frame register
        (0x58 => pub mpr: ReadWrite<u32, MPR::Register>),
        (0x5c => _reserved7),
        /// Received PAUSE frame counter
        (0x60 => pub rfcf: ReadWrite<u32, RFCF::Register>),
        /// PAUSE frame retransmit count setting register
        (0x64 => pub tpauser: ReadWrite<u32, TPAUSER::Register>),
        /// PAUSE frame retransmit counter
        (0x68 => pub tpausecr: ReadWrite<u32, TPAUSECR::Register>),
        /// Broadcast frame receive count setting register
        (0x6c => pub bcfrr: ReadWrite<u32, BCFRR::Register>),
        (0x70 => _reserved8),
        /// MAC address high setting register, first four octets
        (0xc0 => pub mahr: ReadWrite<u32>),
        (0xc4 => _reserved9),
        /// MAC address low setting register, last two octets
        (0xc8 => pub malr: ReadWrite<u32, MALR::Register>),
        (0xcc => _reserved10),
        /// Transmit retry over counter register
        (0xd0 => pub trocr: ReadWrite<u32>),
        /// Late collision detect counter register
        (0xd4 => pub cdcr: ReadWrite<u32>),
        /// Lost carrier counter register
        (0xd8 => pub lccr: ReadWrite<u32>),
        /// Carrier not detect counter register
        (0xdc => pub cndcr: ReadWrite<u32>),
        (0xe0 => _reserved11),
        /// CRC error frame receive counter register
        (0xe4 => pub cefcr: ReadWrite<u32>),
        /// Frame receive error counter register
        (0xe8 => pub frecr: ReadWrite<u32>),
        /// Too-short frame receive counter register
        (0xec => pub tsfrcr: ReadWrite<u32>),
        /// Too-long frame receive counter register
        (0xf0 => pub tlfrcr: ReadWrite<u32>),
        /// Received alignment error frame counter register
        (0xf4 => pub rfcr: ReadWrite<u32>),
        /// Multicast address frame receive counter register
        (0xf8 => pub mafcr: ReadWrite<u32>),
        (0xfc => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(EthercRegisters, pir) == 0x20);
const _: () = assert!(core::mem::offset_of!(EthercRegisters, mahr) == 0xc0);
const _: () = assert!(core::mem::offset_of!(EthercRegisters, mafcr) == 0xf8);

register_bitfields![u32,
    ECMR [
        /// Transmit PAUSE frame retransmission
        TPC OFFSET(20) NUMBITS(1) [],
        /// Zero-time PAUSE frame enable
        ZPF OFFSET(19) NUMBITS(1) [],
        /// PAUSE frame receive mode
        PFR OFFSET(18) NUMBITS(1) [],
        /// Operating mode for receiving PAUSE frames
        RXF OFFSET(17) NUMBITS(1) [],
        /// Operating mode for transmitting PAUSE frames
        TXF OFFSET(16) NUMBITS(1) [],
        /// CRC error frame receive mode
        PRCEF OFFSET(12) NUMBITS(1) [],
        /// Magic packet detection enable
        MPDE OFFSET(9) NUMBITS(1) [],
        /// Receive enable
        RE OFFSET(6) NUMBITS(1) [],
        /// Transmit enable
        TE OFFSET(5) NUMBITS(1) [],
        /// Internal loopback mode
        ILB OFFSET(3) NUMBITS(1) [],
        /// Bit rate: 0 = 10 Mbps, 1 = 100 Mbps
        RTM OFFSET(2) NUMBITS(1) [
            Mbps10 = 0,
            Mbps100 = 1
        ],
        /// Duplex mode
        DM OFFSET(1) NUMBITS(1) [
            Half = 0,
            Full = 1
        ],
        /// Promiscuous mode
        PRM OFFSET(0) NUMBITS(1) []
    ],
    RFLR [
        RFL OFFSET(0) NUMBITS(12) []
    ],
    ECSR [
        /// Continuous broadcast frame reception
        BFR OFFSET(5) NUMBITS(1) [],
        /// PAUSE frame retransmit retry over
        PSRTO OFFSET(4) NUMBITS(1) [],
        /// Link signal changed
        LCHNG OFFSET(2) NUMBITS(1) [],
        /// Magic packet detected
        MPD OFFSET(1) NUMBITS(1) [],
        /// False carrier detected
        ICD OFFSET(0) NUMBITS(1) []
    ],
    ECSIPR [
        BFSIPR OFFSET(5) NUMBITS(1) [],
        PSRTOIP OFFSET(4) NUMBITS(1) [],
        LCHNGIP OFFSET(2) NUMBITS(1) [],
        MPDIP OFFSET(1) NUMBITS(1) [],
        ICDIP OFFSET(0) NUMBITS(1) []
    ],
    PIR [
        /// MII/RMII management data in
        MDI OFFSET(3) NUMBITS(1) [],
        /// MII/RMII management data out
        MDO OFFSET(2) NUMBITS(1) [],
        /// MII/RMII management mode: 0 = read, 1 = write
        MMD OFFSET(1) NUMBITS(1) [],
        /// MII/RMII management data clock
        MDC OFFSET(0) NUMBITS(1) []
    ],
    PSR [
        /// ET0_LINKSTA pin status
        LMON OFFSET(0) NUMBITS(1) []
    ],
    RDMLR [
        RMD OFFSET(0) NUMBITS(20) []
    ],
    IPGR [
        /// Interpacket gap in units of 4 bit times, offset by 96
        IPG OFFSET(0) NUMBITS(5) []
    ],
    APR [
        AP OFFSET(0) NUMBITS(16) []
    ],
    MPR [
        MP OFFSET(0) NUMBITS(16) []
    ],
    RFCF [
        RPAUSE OFFSET(0) NUMBITS(8) []
    ],
    TPAUSER [
        TPAUSE OFFSET(0) NUMBITS(16) []
    ],
    TPAUSECR [
        TXP OFFSET(0) NUMBITS(8) []
    ],
    BCFRR [
        BCF OFFSET(0) NUMBITS(16) []
    ],
    MALR [
        MA OFFSET(0) NUMBITS(16) []
    ]
];

pub const ETHERC0_BASE_ADDR: usize = 0xE820_4100;
pub const ETHERC1_BASE_ADDR: usize = 0xE820_4300;

pub const ETHERC0_BASE: StaticRef<EthercRegisters> =
    unsafe { StaticRef::new(ETHERC0_BASE_ADDR as *const EthercRegisters) };
pub const ETHERC1_BASE: StaticRef<EthercRegisters> =
    unsafe { StaticRef::new(ETHERC1_BASE_ADDR as *const EthercRegisters) };

/// Split a MAC address into the `MAHR`/`MALR` register values.
///
/// The first octet sent on the wire lands in the most significant byte of
/// `MAHR`.
pub const fn mac_address_words(mac: [u8; 6]) -> (u32, u32) {
    let high = u32::from_be_bytes([mac[0], mac[1], mac[2], mac[3]]);
    let low = ((mac[4] as u32) << 8) | mac[5] as u32;
    (high, low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(EthercRegisters, rflr), 0x08);
        assert_eq!(offset_of!(EthercRegisters, ecsr), 0x10);
        assert_eq!(offset_of!(EthercRegisters, ecsipr), 0x18);
        assert_eq!(offset_of!(EthercRegisters, psr), 0x28);
        assert_eq!(offset_of!(EthercRegisters, rdmlr), 0x40);
        assert_eq!(offset_of!(EthercRegisters, ipgr), 0x50);
        assert_eq!(offset_of!(EthercRegisters, bcfrr), 0x6c);
        assert_eq!(offset_of!(EthercRegisters, malr), 0xc8);
        assert_eq!(offset_of!(EthercRegisters, cefcr), 0xe4);
        assert_eq!(core::mem::size_of::<EthercRegisters>(), 0xfc);
    }

    #[test]
    fn channel_addresses_follow_edmac() {
        assert_eq!(ETHERC0_BASE_ADDR - crate::edmac::EDMAC0_BASE_ADDR, 0x100);
        assert_eq!(ETHERC1_BASE_ADDR - crate::edmac::EDMAC1_BASE_ADDR, 0x100);
    }

    #[test]
    fn ecmr_full_duplex_100m() {
        let ecmr = InMemoryRegister::<u32, ECMR::Register>::new(0);
        ecmr.write(ECMR::RE::SET + ECMR::TE::SET + ECMR::DM::Full + ECMR::RTM::Mbps100);
        assert_eq!(ecmr.get(), 0x66);
        assert!(!ecmr.is_set(ECMR::PRM));
    }

    #[test]
    fn mac_address_split() {
        let (high, low) = mac_address_words([0x74, 0x90, 0x50, 0x00, 0x79, 0x03]);
        assert_eq!(high, 0x7490_5000);
        assert_eq!(low, 0x7903);
        let malr = InMemoryRegister::<u32, MALR::Register>::new(low);
        assert_eq!(malr.read(MALR::MA), 0x7903);
    }
}
