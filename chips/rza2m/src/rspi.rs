// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Renesas serial peripheral interface (RSPI).

use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

pub const CHANNEL_COUNT: usize = 3;
pub const COMMAND_COUNT: usize = 4;

register_structs! {
    pub RspiRegisters {
        /// Control register
        (0x00 => pub spcr: ReadWrite<u8, SPCR::Register>),
        /// Slave select polarity register
        (0x01 => pub sslp: ReadWrite<u8, SSLP::Register>),
        /// Pin control register
        (0x02 => pub sppcr: ReadWrite<u8, SPPCR::Register>),
        /// Status register
        (0x03 => pub spsr: ReadWrite<u8, SPSR::Register>),
        /// Data register, accessed with the width selected in SPDCR.SPLW
        (0x04 => pub spdr: ReadWrite<u32>),
        /// Sequence control register
        (0x08 => pub spscr: ReadWrite<u8, SPSCR::Register>),
        /// Sequence status register
        (0x09 => pub spssr: ReadOnly<u8, SPSSR::Register>),
        /// Bit rate register
        (0x0a => pub spbr: ReadWrite<u8>),
        /// Data control register
        (0x0b => pub spdcr: ReadWrite<u8, SPDCR::Register>),
        /// Clock delay register
        (0x0c => pub spckd: ReadWrite<u8, DELAY::Register>),
        /// Slave select negation delay register
        (0x0d => pub sslnd: ReadWrite<u8, DELAY::Register>),
        /// Next-access delay register
        (0x0e => pub spnd: ReadWrite<u8, DELAY::Register>),
        (0x0f => _reserved0),
        /// Command registers 0 to 3
        (0x10 => pub spcmd: [ReadWrite<u16, SPCMD::Register>; COMMAND_COUNT]),
        (0x18 => _reserved1),
        /// Buffer control register
        (0x20 => pub spbfcr: ReadWrite<u8, SPBFCR::Register>),
        (0x21 => _reserved2),
        /// Buffer data count setting register
        (0x22 => pub spbfdr: ReadOnly<u16, SPBFDR::Register>),
        (0x24 => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(RspiRegisters, spcmd) == 0x10);
const _: () = assert!(core::mem::offset_of!(RspiRegisters, spbfdr) == 0x22);

register_bitfields![u8,
    SPCR [
        /// Receive interrupt enable
        SPRIE OFFSET(7) NUMBITS(1) [],
        /// Function enable
        SPE OFFSET(6) NUMBITS(1) [],
        /// Transmit interrupt enable
        SPTIE OFFSET(5) NUMBITS(1) [],
        /// Error interrupt enable
        SPEIE OFFSET(4) NUMBITS(1) [],
        MSTR OFFSET(3) NUMBITS(1) [
            Slave = 0,
            Master = 1
        ],
        /// Mode fault error detection enable
        MODFEN OFFSET(2) NUMBITS(1) []
    ],
    SSLP [
        SSL0P OFFSET(0) NUMBITS(1) [
            ActiveLow = 0,
            ActiveHigh = 1
        ]
    ],
    SPPCR [
        /// MOSI idle fixed value enable
        MOIFE OFFSET(5) NUMBITS(1) [],
        /// MOSI idle fixed value
        MOIFV OFFSET(4) NUMBITS(1) [],
        /// Loopback
        SPLP OFFSET(0) NUMBITS(1) []
    ],
    SPSR [
        /// Receive buffer full
        SPRF OFFSET(7) NUMBITS(1) [],
        /// Transmit end
        TEND OFFSET(6) NUMBITS(1) [],
        /// Transmit buffer empty
        SPTEF OFFSET(5) NUMBITS(1) [],
        /// Mode fault
        MODF OFFSET(2) NUMBITS(1) [],
        /// Overrun
        OVRF OFFSET(0) NUMBITS(1) []
    ],
    SPSCR [
        /// Last command in the sequence
        SPSLN OFFSET(0) NUMBITS(2) []
    ],
    SPSSR [
        /// Command currently in use
        SPCP OFFSET(0) NUMBITS(2) []
    ],
    SPDCR [
        /// Dummy data transmission enable
        TXDMY OFFSET(7) NUMBITS(1) [],
        /// Access width of SPDR
        SPLW OFFSET(5) NUMBITS(2) [
            Byte = 1,
            HalfWord = 2,
            Word = 3
        ]
    ],
    DELAY [
        /// Delay in RSPCK cycles minus one
        CYCLES OFFSET(0) NUMBITS(3) []
    ],
    SPBFCR [
        TXRST OFFSET(7) NUMBITS(1) [],
        RXRST OFFSET(6) NUMBITS(1) [],
        TXTRG OFFSET(4) NUMBITS(2) [],
        RXTRG OFFSET(0) NUMBITS(3) []
    ]
];

register_bitfields![u16,
    SPCMD [
        SCKDEN OFFSET(15) NUMBITS(1) [],
        SLNDEN OFFSET(14) NUMBITS(1) [],
        SPNDEN OFFSET(13) NUMBITS(1) [],
        LSBF OFFSET(12) NUMBITS(1) [
            MsbFirst = 0,
            LsbFirst = 1
        ],
        /// Data length
        SPB OFFSET(8) NUMBITS(4) [
            Bits8 = 7,
            Bits16 = 15,
            Bits32 = 3
        ],
        /// Keep SSL asserted after transfer
        SSLKP OFFSET(7) NUMBITS(1) [],
        /// Bit rate division: base rate / 2^BRDV
        BRDV OFFSET(2) NUMBITS(2) [],
        CPOL OFFSET(1) NUMBITS(1) [],
        CPHA OFFSET(0) NUMBITS(1) []
    ],
    SPBFDR [
        /// Bytes in the transmit buffer
        T OFFSET(8) NUMBITS(4) [],
        /// Bytes in the receive buffer
        R OFFSET(0) NUMBITS(6) []
    ]
];

pub const RSPI_BASE_ADDRS: [usize; CHANNEL_COUNT] = [0xE800_C800, 0xE800_D000, 0xE800_D800];

pub const RSPI0_BASE_ADDR: usize = RSPI_BASE_ADDRS[0];
pub const RSPI1_BASE_ADDR: usize = RSPI_BASE_ADDRS[1];
pub const RSPI2_BASE_ADDR: usize = RSPI_BASE_ADDRS[2];

pub const RSPI0_BASE: StaticRef<RspiRegisters> =
    unsafe { StaticRef::new(RSPI0_BASE_ADDR as *const RspiRegisters) };
pub const RSPI1_BASE: StaticRef<RspiRegisters> =
    unsafe { StaticRef::new(RSPI1_BASE_ADDR as *const RspiRegisters) };
pub const RSPI2_BASE: StaticRef<RspiRegisters> =
    unsafe { StaticRef::new(RSPI2_BASE_ADDR as *const RspiRegisters) };

/// Base address of RSPI `channel`, or `None` past the last channel.
pub const fn rspi_base_addr(channel: usize) -> Option<usize> {
    if channel < CHANNEL_COUNT {
        Some(RSPI_BASE_ADDRS[channel])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        use core::mem::{offset_of, size_of};
        assert_eq!(offset_of!(RspiRegisters, spsr), 0x03);
        assert_eq!(offset_of!(RspiRegisters, spdr), 0x04);
        assert_eq!(offset_of!(RspiRegisters, spscr), 0x08);
        assert_eq!(offset_of!(RspiRegisters, spdcr), 0x0b);
        assert_eq!(offset_of!(RspiRegisters, spnd), 0x0e);
        assert_eq!(offset_of!(RspiRegisters, spbfcr), 0x20);
        assert_eq!(size_of::<RspiRegisters>(), 0x24);
    }

    #[test]
    fn channel_addresses() {
        assert_eq!(RSPI0_BASE_ADDR, 0xE800_C800);
        assert_eq!(RSPI1_BASE_ADDR, 0xE800_D000);
        assert_eq!(RSPI2_BASE_ADDR, 0xE800_D800);
        assert_eq!(rspi_base_addr(1), Some(RSPI1_BASE_ADDR));
        assert_eq!(rspi_base_addr(CHANNEL_COUNT), None);
    }

    #[test]
    fn master_mode_8bit() {
        let spcr = InMemoryRegister::<u8, SPCR::Register>::new(0);
        spcr.write(SPCR::MSTR::Master);
        spcr.modify(SPCR::SPE::SET);
        assert_eq!(spcr.get(), 0x48);

        let cmd = InMemoryRegister::<u16, SPCMD::Register>::new(0);
        cmd.write(SPCMD::SPB::Bits8 + SPCMD::CPOL::SET + SPCMD::CPHA::SET);
        assert_eq!(cmd.get(), 0x0703);

        let spdcr = InMemoryRegister::<u8, SPDCR::Register>::new(0);
        spdcr.write(SPDCR::SPLW::Byte);
        assert_eq!(spdcr.get(), 0x20);
    }

    #[test]
    fn buffer_counts() {
        let spbfdr = InMemoryRegister::<u16, SPBFDR::Register>::new(0x0402);
        assert_eq!(spbfdr.read(SPBFDR::T), 4);
        assert_eq!(spbfdr.read(SPBFDR::R), 2);
    }
}
