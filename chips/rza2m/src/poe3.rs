// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Port output enable 3 (POE3).
//!
//! Places the MTU3 complementary PWM pins in high impedance when a POE
//! input pin is asserted, when outputs short, or on oscillation stop.

use crate::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub Poe3Registers {
        /// Input level control/status register 1 (POE0#)
        (0x00 => pub icsr1: ReadWrite<u16, ICSR::Register>),
        /// Output level control/status register 1
        (0x02 => pub ocsr1: ReadWrite<u16, OCSR::Register>),
        /// Input level control/status register 2 (POE4#)
        (0x04 => pub icsr2: ReadWrite<u16, ICSR::Register>),
        /// Output level control/status register 2
        (0x06 => pub ocsr2: ReadWrite<u16, OCSR::Register>),
        /// Input level control/status register 3 (POE8#)
        (0x08 => pub icsr3: ReadWrite<u16, ICSR::Register>),
        /// Software port output enable register
        (0x0a => pub spoer: ReadWrite<u8, SPOER::Register>),
        /// Port output enable control register 1
        (0x0b => pub poecr1: ReadWrite<u8, POECR1::Register>),
        /// Port output enable control register 2
        (0x0c => pub poecr2: ReadWrite<u16, POECR2::Register>),
        (0x0e => _reserved0),
        /// Port output enable control register 4 (MTU3/MTU4 additional sources)
        (0x10 => pub poecr4: ReadWrite<u16, POECR_ADD::Register>),
        /// Port output enable control register 5 (MTU0 additional sources)
        (0x12 => pub poecr5: ReadWrite<u16, POECR_ADD::Register>),
        (0x14 => _reserved1),
        /// Input level control/status register 4 (POE10#)
        (0x16 => pub icsr4: ReadWrite<u16, ICSR::Register>),
        /// Input level control/status register 5 (POE11#)
        (0x18 => pub icsr5: ReadWrite<u16, ICSR::Register>),
        /// Active level setting register 1
        (0x1a => pub alr1: ReadWrite<u16, ALR1::Register>),
        /// Input level control/status register 6 (oscillation stop)
        (0x1c => pub icsr6: ReadWrite<u16, ICSR6::Register>),
        (0x1e => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(Poe3Registers, spoer) == 0x0a);
const _: () = assert!(core::mem::offset_of!(Poe3Registers, icsr4) == 0x16);

register_bitfields![u16,
    /// Layout shared by ICSR1 to ICSR5. POEE exists from ICSR3 onwards.
    ICSR [
        /// High-impedance request detected on the pin
        POEF OFFSET(12) NUMBITS(1) [],
        /// Pin enable
        POEE OFFSET(9) NUMBITS(1) [],
        /// Interrupt enable
        PIE OFFSET(8) NUMBITS(1) [],
        /// Pin input mode
        POEM OFFSET(0) NUMBITS(2) [
            FallingEdge = 0,
            Low8Times16 = 1,
            Low16Times16 = 2,
            Low128Times16 = 3
        ]
    ],
    OCSR [
        /// Output short flag
        OSF OFFSET(15) NUMBITS(1) [],
        /// Output short high-impedance enable
        OCE OFFSET(9) NUMBITS(1) [],
        /// Output short interrupt enable
        OIE OFFSET(8) NUMBITS(1) []
    ],
    POECR2 [
        MTU3BDZE OFFSET(10) NUMBITS(1) [],
        MTU4ACZE OFFSET(9) NUMBITS(1) [],
        MTU4BDZE OFFSET(8) NUMBITS(1) []
    ],
    POECR_ADD [
        /// Add the ICSR6 oscillation stop source
        IC6ADD OFFSET(6) NUMBITS(1) [],
        IC5ADD OFFSET(5) NUMBITS(1) [],
        IC4ADD OFFSET(4) NUMBITS(1) [],
        IC3ADD OFFSET(3) NUMBITS(1) [],
        IC2ADD OFFSET(2) NUMBITS(1) [],
        IC1ADD OFFSET(1) NUMBITS(1) []
    ],
    ALR1 [
        /// Active level setting enable
        OLSEN OFFSET(7) NUMBITS(1) [],
        OLSG2B OFFSET(5) NUMBITS(1) [],
        OLSG2A OFFSET(4) NUMBITS(1) [],
        OLSG1B OFFSET(3) NUMBITS(1) [],
        OLSG1A OFFSET(2) NUMBITS(1) [],
        OLSG0B OFFSET(1) NUMBITS(1) [],
        OLSG0A OFFSET(0) NUMBITS(1) []
    ],
    ICSR6 [
        /// Oscillation stop detected
        OSTSTF OFFSET(12) NUMBITS(1) [],
        /// Oscillation stop high-impedance enable
        OSTSTE OFFSET(9) NUMBITS(1) []
    ]
];

register_bitfields![u8,
    SPOER [
        MTU0BZHIZ OFFSET(2) NUMBITS(1) [],
        MTU4CDZHIZ OFFSET(1) NUMBITS(1) [],
        MTU3BDZHIZ OFFSET(0) NUMBITS(1) []
    ],
    POECR1 [
        MTU0DZE OFFSET(3) NUMBITS(1) [],
        MTU0CZE OFFSET(2) NUMBITS(1) [],
        MTU0BZE OFFSET(1) NUMBITS(1) [],
        MTU0AZE OFFSET(0) NUMBITS(1) []
    ]
];

pub const POE3_BASE_ADDR: usize = 0xFCFF_D800;

pub const POE3_BASE: StaticRef<Poe3Registers> =
    unsafe { StaticRef::new(POE3_BASE_ADDR as *const Poe3Registers) };

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        use core::mem::{offset_of, size_of};
        assert_eq!(offset_of!(Poe3Registers, ocsr1), 0x02);
        assert_eq!(offset_of!(Poe3Registers, icsr3), 0x08);
        assert_eq!(offset_of!(Poe3Registers, poecr1), 0x0b);
        assert_eq!(offset_of!(Poe3Registers, poecr2), 0x0c);
        assert_eq!(offset_of!(Poe3Registers, poecr4), 0x10);
        assert_eq!(offset_of!(Poe3Registers, poecr5), 0x12);
        assert_eq!(offset_of!(Poe3Registers, alr1), 0x1a);
        assert_eq!(offset_of!(Poe3Registers, icsr6), 0x1c);
        assert_eq!(size_of::<Poe3Registers>(), 0x1e);
        assert_eq!(POE3_BASE_ADDR, 0xFCFFD800);
    }

    #[test]
    fn input_level_control() {
        let icsr = InMemoryRegister::<u16, ICSR::Register>::new(0);
        icsr.write(ICSR::POEE::SET + ICSR::PIE::SET + ICSR::POEM::Low16Times16);
        assert_eq!(icsr.get(), 0x0302);

        icsr.set(0x1000 | icsr.get());
        assert!(icsr.is_set(ICSR::POEF));
        icsr.modify(ICSR::POEF::CLEAR);
        assert!(!icsr.is_set(ICSR::POEF));
        assert!(icsr.matches_all(ICSR::POEM::Low16Times16));
    }

    #[test]
    fn high_impedance_controls() {
        let poecr1 = InMemoryRegister::<u8, POECR1::Register>::new(0);
        poecr1.write(POECR1::MTU0AZE::SET + POECR1::MTU0DZE::SET);
        assert_eq!(poecr1.get(), 0x09);

        let spoer = InMemoryRegister::<u8, SPOER::Register>::new(0);
        spoer.write(SPOER::MTU3BDZHIZ::SET);
        assert_eq!(spoer.get(), 0x01);
    }
}
