// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! I2C bus interface (RIIC).
//!
//! Every register occupies a 32-bit slot; only the low byte is defined.

use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const CHANNEL_COUNT: usize = 4;

register_structs! {
    pub RiicRegisters {
        /// I2C bus control register 1
        (0x00 => pub iccr1: ReadWrite<u32, ICCR1::Register>),
        /// I2C bus control register 2
        (0x04 => pub iccr2: ReadWrite<u32, ICCR2::Register>),
        /// I2C bus mode registers
        (0x08 => pub icmr1: ReadWrite<u32, ICMR1::Register>),
        (0x0c => pub icmr2: ReadWrite<u32, ICMR2::Register>),
        (0x10 => pub icmr3: ReadWrite<u32, ICMR3::Register>),
        /// I2C bus function enable register
        (0x14 => pub icfer: ReadWrite<u32, ICFER::Register>),
        /// I2C bus status enable register
        (0x18 => pub icser: ReadWrite<u32, ICSER::Register>),
        /// I2C bus interrupt enable register
        (0x1c => pub icier: ReadWrite<u32, ICIER::Register>),
        /// I2C bus status registers
        (0x20 => pub icsr1: ReadWrite<u32, ICSR1::Register>),
        (0x24 => pub icsr2: ReadWrite<u32, ICSR2::Register>),
        /// Slave address registers 0 to 2
        (0x28 => pub icsar: [ReadWrite<u32, ICSAR::Register>; 3]),
        /// I2C bus bit rate low-level register
        (0x34 => pub icbrl: ReadWrite<u32, ICBR::Register>),
        /// I2C bus bit rate high-level register
        (0x38 => pub icbrh: ReadWrite<u32, ICBR::Register>),
        /// I2C bus transmit data register
        (0x3c => pub icdrt: WriteOnly<u32, ICDR::Register>),
        /// I2C bus receive data register
        (0x40 => pub icdrr: ReadOnly<u32, ICDR::Register>),
        (0x44 => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(RiicRegisters, icbrl) == 0x34);
const _: () = assert!(core::mem::size_of::<RiicRegisters>() == 0x44);

register_bitfields![u32,
    ICCR1 [
        /// Bus interface enable
        ICE OFFSET(7) NUMBITS(1) [],
        /// Internal reset
        IICRST OFFSET(6) NUMBITS(1) [],
        /// Extra SCL clock cycle output
        CLO OFFSET(5) NUMBITS(1) [],
        /// SCLO/SDAO write protect
        SOWP OFFSET(4) NUMBITS(1) [],
        SCLO OFFSET(3) NUMBITS(1) [],
        SDAO OFFSET(2) NUMBITS(1) [],
        SCLI OFFSET(1) NUMBITS(1) [],
        SDAI OFFSET(0) NUMBITS(1) []
    ],
    ICCR2 [
        /// Bus busy
        BBSY OFFSET(7) NUMBITS(1) [],
        /// Master mode
        MST OFFSET(6) NUMBITS(1) [],
        /// Transmit mode
        TRS OFFSET(5) NUMBITS(1) [],
        /// Stop condition request
        SP OFFSET(3) NUMBITS(1) [],
        /// Restart condition request
        RS OFFSET(2) NUMBITS(1) [],
        /// Start condition request
        ST OFFSET(1) NUMBITS(1) []
    ],
    ICMR1 [
        /// MST/TRS write protect
        MTWP OFFSET(7) NUMBITS(1) [],
        /// Internal reference clock: P0 / 2^CKS
        CKS OFFSET(4) NUMBITS(3) [],
        /// BC write protect
        BCWP OFFSET(3) NUMBITS(1) [],
        /// Bit counter
        BC OFFSET(0) NUMBITS(3) []
    ],
    ICMR2 [
        /// SDA output delay clock source
        DLCS OFFSET(7) NUMBITS(1) [],
        /// SDA output delay counter
        SDDL OFFSET(4) NUMBITS(3) [],
        TMOH OFFSET(2) NUMBITS(1) [],
        TMOL OFFSET(1) NUMBITS(1) [],
        /// Timeout detection: 0 = long, 1 = short
        TMOS OFFSET(0) NUMBITS(1) []
    ],
    ICMR3 [
        WAIT OFFSET(6) NUMBITS(1) [],
        /// RDRF flag set timing
        RDRFS OFFSET(5) NUMBITS(1) [],
        /// ACKBT write protect
        ACKWP OFFSET(4) NUMBITS(1) [],
        /// Transmit acknowledge: 1 sends NACK
        ACKBT OFFSET(3) NUMBITS(1) [],
        /// Received acknowledge
        ACKBR OFFSET(2) NUMBITS(1) [],
        /// Noise filter stages minus one
        NF OFFSET(0) NUMBITS(2) []
    ],
    ICFER [
        /// Fast-mode plus enable
        FMPE OFFSET(7) NUMBITS(1) [],
        /// SCL synchronous circuit enable
        SCLE OFFSET(6) NUMBITS(1) [],
        /// Digital noise filter enable
        NFE OFFSET(5) NUMBITS(1) [],
        /// Suspend transfer on NACK
        NACKE OFFSET(4) NUMBITS(1) [],
        /// Slave arbitration lost detection
        SALE OFFSET(3) NUMBITS(1) [],
        /// NACK transmission arbitration lost detection
        NALE OFFSET(2) NUMBITS(1) [],
        /// Master arbitration lost detection
        MALE OFFSET(1) NUMBITS(1) [],
        /// Timeout function enable
        TMOE OFFSET(0) NUMBITS(1) []
    ],
    ICSER [
        HOAE OFFSET(7) NUMBITS(1) [],
        DIDE OFFSET(5) NUMBITS(1) [],
        GCAE OFFSET(3) NUMBITS(1) [],
        SAR2E OFFSET(2) NUMBITS(1) [],
        SAR1E OFFSET(1) NUMBITS(1) [],
        SAR0E OFFSET(0) NUMBITS(1) []
    ],
    ICIER [
        TIE OFFSET(7) NUMBITS(1) [],
        TEIE OFFSET(6) NUMBITS(1) [],
        RIE OFFSET(5) NUMBITS(1) [],
        NAKIE OFFSET(4) NUMBITS(1) [],
        SPIE OFFSET(3) NUMBITS(1) [],
        STIE OFFSET(2) NUMBITS(1) [],
        ALIE OFFSET(1) NUMBITS(1) [],
        TMOIE OFFSET(0) NUMBITS(1) []
    ],
    ICSR1 [
        /// Host address detected
        HOA OFFSET(7) NUMBITS(1) [],
        /// Device-ID address detected
        DID OFFSET(5) NUMBITS(1) [],
        /// General call address detected
        GCA OFFSET(3) NUMBITS(1) [],
        AAS2 OFFSET(2) NUMBITS(1) [],
        AAS1 OFFSET(1) NUMBITS(1) [],
        AAS0 OFFSET(0) NUMBITS(1) []
    ],
    ICSR2 [
        /// Transmit data empty
        TDRE OFFSET(7) NUMBITS(1) [],
        /// Transmit end
        TEND OFFSET(6) NUMBITS(1) [],
        /// Receive data full
        RDRF OFFSET(5) NUMBITS(1) [],
        NACKF OFFSET(4) NUMBITS(1) [],
        STOP OFFSET(3) NUMBITS(1) [],
        START OFFSET(2) NUMBITS(1) [],
        /// Arbitration lost
        AL OFFSET(1) NUMBITS(1) [],
        TMOF OFFSET(0) NUMBITS(1) []
    ],
    ICSAR [
        /// 10-bit address format
        FS OFFSET(15) NUMBITS(1) [
            SevenBit = 0,
            TenBit = 1
        ],
        /// Slave address; a 7-bit address sits in bits 1 to 7
        SVA OFFSET(0) NUMBITS(10) []
    ],
    ICBR [
        BR OFFSET(0) NUMBITS(5) []
    ],
    ICDR [
        DATA OFFSET(0) NUMBITS(8) []
    ]
];

pub const RIIC_BASE_ADDRS: [usize; CHANNEL_COUNT] =
    [0xE803_A000, 0xE803_A400, 0xE803_A800, 0xE803_AC00];

pub const RIIC0_BASE_ADDR: usize = RIIC_BASE_ADDRS[0];
pub const RIIC1_BASE_ADDR: usize = RIIC_BASE_ADDRS[1];
pub const RIIC2_BASE_ADDR: usize = RIIC_BASE_ADDRS[2];
pub const RIIC3_BASE_ADDR: usize = RIIC_BASE_ADDRS[3];

pub const RIIC0_BASE: StaticRef<RiicRegisters> =
    unsafe { StaticRef::new(RIIC0_BASE_ADDR as *const RiicRegisters) };
pub const RIIC1_BASE: StaticRef<RiicRegisters> =
    unsafe { StaticRef::new(RIIC1_BASE_ADDR as *const RiicRegisters) };
pub const RIIC2_BASE: StaticRef<RiicRegisters> =
    unsafe { StaticRef::new(RIIC2_BASE_ADDR as *const RiicRegisters) };
pub const RIIC3_BASE: StaticRef<RiicRegisters> =
    unsafe { StaticRef::new(RIIC3_BASE_ADDR as *const RiicRegisters) };

/// Base address of RIIC `channel`, or `None` past the last channel.
pub const fn riic_base_addr(channel: usize) -> Option<usize> {
    if channel < CHANNEL_COUNT {
        Some(RIIC_BASE_ADDRS[channel])
    } else {
        None
    }
}

/// Encodes a 7-bit slave address for an ICSAR register.
pub const fn seven_bit_address(addr: u8) -> u32 {
    ((addr & 0x7f) as u32) << 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(RiicRegisters, icmr3), 0x10);
        assert_eq!(offset_of!(RiicRegisters, icier), 0x1c);
        assert_eq!(offset_of!(RiicRegisters, icsr2), 0x24);
        assert_eq!(offset_of!(RiicRegisters, icsar), 0x28);
        assert_eq!(offset_of!(RiicRegisters, icdrt), 0x3c);
        assert_eq!(offset_of!(RiicRegisters, icdrr), 0x40);
    }

    #[test]
    fn channel_addresses() {
        assert_eq!(RIIC0_BASE_ADDR, 0xE803_A000);
        assert_eq!(RIIC1_BASE_ADDR, 0xE803_A400);
        assert_eq!(RIIC3_BASE_ADDR, 0xE803_AC00);
        assert_eq!(riic_base_addr(2), Some(0xE803_A800));
        assert_eq!(riic_base_addr(CHANNEL_COUNT), None);
    }

    #[test]
    fn reset_sequence_bits() {
        let iccr1 = InMemoryRegister::<u32, ICCR1::Register>::new(0x1f);
        iccr1.write(ICCR1::ICE::SET + ICCR1::IICRST::SET);
        assert_eq!(iccr1.get(), 0xc0);

        let icsr2 = InMemoryRegister::<u32, ICSR2::Register>::new(0x84);
        assert!(icsr2.is_set(ICSR2::TDRE));
        assert!(icsr2.is_set(ICSR2::START));
        assert!(!icsr2.is_set(ICSR2::NACKF));
    }

    #[test]
    fn slave_address() {
        let sar = InMemoryRegister::<u32, ICSAR::Register>::new(0);
        sar.write(ICSAR::SVA.val(seven_bit_address(0x50)) + ICSAR::FS::SevenBit);
        assert_eq!(sar.get(), 0xa0);
    }
}
