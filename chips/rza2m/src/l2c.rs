// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Level 2 cache controller (Arm CoreLink L2C-310).
//!
//! The controller is configured with eight 64 KiB ways and 32-byte lines.
//! Maintenance operations by way take a mask of [`WAY_MASK_ALL`] style;
//! operations by physical address take a line-aligned address.

use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

pub const WAY_COUNT: usize = 8;
pub const WAY_MASK_ALL: u32 = (1 << WAY_COUNT) - 1;
pub const LINE_SIZE: usize = 32;

register_structs! {
    pub L2cRegisters {
        /// Cache ID register
        (0x000 => pub cache_id: ReadOnly<u32, CACHE_ID::Register>),
        /// Cache type register
        (0x004 => pub cache_type: ReadOnly<u32, CACHE_TYPE::Register>),
        (0x008 => _reserved0),
        /// Control register
        (0x100 => pub control: ReadWrite<u32, CONTROL::Register>),
        /// Auxiliary control register
        (0x104 => pub aux_control: ReadWrite<u32, AUX_CONTROL::Register>),
        /// Tag RAM latency control register
        (0x108 => pub tag_ram_control: ReadWrite<u32, RAM_LATENCY::Register>),
        /// Data RAM latency control register
        (0x10c => pub data_ram_control: ReadWrite<u32, RAM_LATENCY::Register>),
        (0x110 => _reserved1),
        /// Event counter control register
        (0x200 => pub ev_counter_ctrl: ReadWrite<u32, EV_COUNTER_CTRL::Register>),
        /// Event counter 1 configuration register
        (0x204 => pub ev_counter1_cfg: ReadWrite<u32, EV_COUNTER_CFG::Register>),
        /// Event counter 0 configuration register
        (0x208 => pub ev_counter0_cfg: ReadWrite<u32, EV_COUNTER_CFG::Register>),
        /// Event counter values
        (0x20c => pub ev_counter1: ReadWrite<u32>),
        (0x210 => pub ev_counter0: ReadWrite<u32>),
        /// Interrupt mask register
        (0x214 => pub int_mask: ReadWrite<u32, INTERRUPT::Register>),
        /// Masked interrupt status register
        (0x218 => pub int_mask_status: ReadOnly<u32, INTERRUPT::Register>),
        /// Raw interrupt status register
        (0x21c => pub int_raw_status: ReadOnly<u32, INTERRUPT::Register>),
        /// Interrupt clear register
        (0x220 => pub int_clear: ReadWrite<u32, INTERRUPT::Register>),
        (0x224 => _reserved2),
        /// Cache sync register
        (0x730 => pub cache_sync: ReadWrite<u32, BACKGROUND_OP::Register>),
        (0x734 => _reserved3),
        /// Invalidate line by physical address
        (0x770 => pub inv_pa: ReadWrite<u32, BY_PA::Register>),
        (0x774 => _reserved4),
        /// Invalidate by way
        (0x77c => pub inv_way: ReadWrite<u32, BY_WAY::Register>),
        (0x780 => _reserved5),
        /// Clean line by physical address
        (0x7b0 => pub clean_pa: ReadWrite<u32, BY_PA::Register>),
        (0x7b4 => _reserved6),
        /// Clean line by set/way
        (0x7b8 => pub clean_index: ReadWrite<u32, BY_INDEX::Register>),
        /// Clean by way
        (0x7bc => pub clean_way: ReadWrite<u32, BY_WAY::Register>),
        (0x7c0 => _reserved7),
        /// Clean and invalidate line by physical address
        (0x7f0 => pub clean_inv_pa: ReadWrite<u32, BY_PA::Register>),
        (0x7f4 => _reserved8),
        /// Clean and invalidate line by set/way
        (0x7f8 => pub clean_inv_index: ReadWrite<u32, BY_INDEX::Register>),
        /// Clean and invalidate by way
        (0x7fc => pub clean_inv_way: ReadWrite<u32, BY_WAY::Register>),
        (0x800 => _reserved9),
        /// Data and instruction lockdown registers, one pair per master
        (0x900 => pub lockdown: [Lockdown; 8]),
        (0x940 => _reserved10),
        /// Lockdown by line enable register
        (0x950 => pub lock_line_en: ReadWrite<u32, LOCK_LINE_EN::Register>),
        /// Cache lockdown by way unlock register
        (0x954 => pub unlock_way: ReadWrite<u32, BY_WAY::Register>),
        (0x958 => _reserved11),
        /// Address filtering start register
        (0xc00 => pub addr_filtering_start: ReadWrite<u32, ADDR_FILTERING_START::Register>),
        /// Address filtering end register
        (0xc04 => pub addr_filtering_end: ReadWrite<u32, ADDR_FILTERING_END::Register>),
        (0xc08 => _reserved12),
        /// Debug control register
        (0xf40 => pub debug_ctrl: ReadWrite<u32, DEBUG_CTRL::Register>),
        (0xf44 => _reserved13),
        /// Prefetch control register
        (0xf60 => pub prefetch_ctrl: ReadWrite<u32, PREFETCH_CTRL::Register>),
        (0xf64 => _reserved14),
        /// Power control register
        (0xf80 => pub power_ctrl: ReadWrite<u32, POWER_CTRL::Register>),
        (0xf84 => @END),
    },

    pub Lockdown {
        (0x0 => pub d: ReadWrite<u32, BY_WAY::Register>),
        (0x4 => pub i: ReadWrite<u32, BY_WAY::Register>),
        (0x8 => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(L2cRegisters, control) == 0x100);
const _: () = assert!(core::mem::offset_of!(L2cRegisters, cache_sync) == 0x730);
const _: () = assert!(core::mem::offset_of!(L2cRegisters, power_ctrl) == 0xf80);

register_bitfields![u32,
    CACHE_ID [
        IMPLEMENTER OFFSET(24) NUMBITS(8) [],
        CACHE_ID OFFSET(10) NUMBITS(6) [],
        PART_NUMBER OFFSET(6) NUMBITS(4) [
            L2C310 = 3
        ],
        RTL_RELEASE OFFSET(0) NUMBITS(6) []
    ],
    CACHE_TYPE [
        DATA_BANKING OFFSET(31) NUMBITS(1) [],
        CTYPE OFFSET(25) NUMBITS(4) [],
        /// 0 = unified, 1 = harvard
        H OFFSET(24) NUMBITS(1) [],
        DL2_WAY_SIZE OFFSET(20) NUMBITS(3) [],
        DL2_ASSOC OFFSET(18) NUMBITS(1) [],
        DL2_LINE_LEN OFFSET(12) NUMBITS(2) [],
        IL2_WAY_SIZE OFFSET(8) NUMBITS(3) [],
        IL2_ASSOC OFFSET(6) NUMBITS(1) [],
        IL2_LINE_LEN OFFSET(0) NUMBITS(2) []
    ],
    CONTROL [
        L2_ENABLE OFFSET(0) NUMBITS(1) []
    ],
    AUX_CONTROL [
        EARLY_BRESP OFFSET(30) NUMBITS(1) [],
        INSTR_PREFETCH OFFSET(29) NUMBITS(1) [],
        DATA_PREFETCH OFFSET(28) NUMBITS(1) [],
        NS_INT_ACCESS OFFSET(27) NUMBITS(1) [],
        NS_LOCKDOWN OFFSET(26) NUMBITS(1) [],
        /// Cache replacement policy: 0 = pseudo-random, 1 = round-robin
        REPLACEMENT OFFSET(25) NUMBITS(1) [],
        FORCE_WRITE_ALLOC OFFSET(23) NUMBITS(2) [
            UseAttributes = 0,
            NoAllocate = 1,
            Allocate = 2
        ],
        SHARED_OVERRIDE OFFSET(22) NUMBITS(1) [],
        PARITY OFFSET(21) NUMBITS(1) [],
        EVENT_MONITOR OFFSET(20) NUMBITS(1) [],
        WAY_SIZE OFFSET(17) NUMBITS(3) [
            KiB16 = 1,
            KiB32 = 2,
            KiB64 = 3,
            KiB128 = 4,
            KiB256 = 5,
            KiB512 = 6
        ],
        /// 0 = 8-way, 1 = 16-way
        ASSOCIATIVITY OFFSET(16) NUMBITS(1) [
            Ways8 = 0,
            Ways16 = 1
        ],
        SHARED_INV OFFSET(13) NUMBITS(1) [],
        EXCLUSIVE OFFSET(12) NUMBITS(1) [],
        STORE_BUF_LIMIT OFFSET(11) NUMBITS(1) [],
        HIGH_PRIORITY_SO OFFSET(10) NUMBITS(1) [],
        FULL_LINE_ZERO OFFSET(0) NUMBITS(1) []
    ],
    RAM_LATENCY [
        /// Write access latency, cycles minus one
        WRITE OFFSET(8) NUMBITS(3) [],
        /// Read access latency, cycles minus one
        READ OFFSET(4) NUMBITS(3) [],
        /// Setup latency, cycles minus one
        SETUP OFFSET(0) NUMBITS(3) []
    ],
    EV_COUNTER_CTRL [
        COUNTER1_RESET OFFSET(2) NUMBITS(1) [],
        COUNTER0_RESET OFFSET(1) NUMBITS(1) [],
        ENABLE OFFSET(0) NUMBITS(1) []
    ],
    EV_COUNTER_CFG [
        SOURCE OFFSET(2) NUMBITS(4) [],
        INTERRUPT OFFSET(0) NUMBITS(2) []
    ],
    INTERRUPT [
        DECERR OFFSET(8) NUMBITS(1) [],
        SLVERR OFFSET(7) NUMBITS(1) [],
        ERRRD OFFSET(6) NUMBITS(1) [],
        ERRRT OFFSET(5) NUMBITS(1) [],
        ERRWD OFFSET(4) NUMBITS(1) [],
        ERRWT OFFSET(3) NUMBITS(1) [],
        PARRD OFFSET(2) NUMBITS(1) [],
        PARRT OFFSET(1) NUMBITS(1) [],
        ECNTR OFFSET(0) NUMBITS(1) []
    ],
    BACKGROUND_OP [
        /// Operation in progress
        C OFFSET(0) NUMBITS(1) []
    ],
    BY_PA [
        /// Line address
        TAG_INDEX OFFSET(5) NUMBITS(27) [],
        C OFFSET(0) NUMBITS(1) []
    ],
    BY_INDEX [
        WAY OFFSET(28) NUMBITS(3) [],
        INDEX OFFSET(5) NUMBITS(11) [],
        C OFFSET(0) NUMBITS(1) []
    ],
    BY_WAY [
        WAYS OFFSET(0) NUMBITS(16) []
    ],
    LOCK_LINE_EN [
        ENABLE OFFSET(0) NUMBITS(1) []
    ],
    ADDR_FILTERING_START [
        START OFFSET(20) NUMBITS(12) [],
        ENABLE OFFSET(0) NUMBITS(1) []
    ],
    ADDR_FILTERING_END [
        END OFFSET(20) NUMBITS(12) []
    ],
    DEBUG_CTRL [
        /// Secure privileged non-invasive debug enable
        SPNIDEN OFFSET(2) NUMBITS(1) [],
        /// Disable write-back, force write-through
        DWB OFFSET(1) NUMBITS(1) [],
        /// Disable cache linefill
        DCL OFFSET(0) NUMBITS(1) []
    ],
    PREFETCH_CTRL [
        DOUBLE_LINEFILL OFFSET(30) NUMBITS(1) [],
        INSTR_PREFETCH OFFSET(29) NUMBITS(1) [],
        DATA_PREFETCH OFFSET(28) NUMBITS(1) [],
        DL_WRAP_DISABLE OFFSET(27) NUMBITS(1) [],
        PREFETCH_DROP OFFSET(24) NUMBITS(1) [],
        INCR_DOUBLE_LINEFILL OFFSET(23) NUMBITS(1) [],
        NOT_SAME_ID_EXCL_SEQ OFFSET(21) NUMBITS(1) [],
        PREFETCH_OFFSET OFFSET(0) NUMBITS(5) []
    ],
    POWER_CTRL [
        DYNAMIC_CLK_GATING OFFSET(1) NUMBITS(1) [],
        STANDBY_MODE OFFSET(0) NUMBITS(1) []
    ]
];

pub const L2C_BASE_ADDR: usize = 0x1F00_3000;

pub const L2C_BASE: StaticRef<L2cRegisters> =
    unsafe { StaticRef::new(L2C_BASE_ADDR as *const L2cRegisters) };

/// Value of a `*_PA` maintenance register for the line holding `addr`.
pub const fn line_address(addr: u32) -> u32 {
    addr & !(LINE_SIZE as u32 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(L2cRegisters, cache_type), 0x004);
        assert_eq!(offset_of!(L2cRegisters, aux_control), 0x104);
        assert_eq!(offset_of!(L2cRegisters, data_ram_control), 0x10c);
        assert_eq!(offset_of!(L2cRegisters, ev_counter_ctrl), 0x200);
        assert_eq!(offset_of!(L2cRegisters, int_clear), 0x220);
        assert_eq!(offset_of!(L2cRegisters, inv_pa), 0x770);
        assert_eq!(offset_of!(L2cRegisters, inv_way), 0x77c);
        assert_eq!(offset_of!(L2cRegisters, clean_way), 0x7bc);
        assert_eq!(offset_of!(L2cRegisters, clean_inv_way), 0x7fc);
        assert_eq!(offset_of!(L2cRegisters, lockdown), 0x900);
        assert_eq!(offset_of!(L2cRegisters, lock_line_en), 0x950);
        assert_eq!(offset_of!(L2cRegisters, addr_filtering_end), 0xc04);
        assert_eq!(offset_of!(L2cRegisters, debug_ctrl), 0xf40);
        assert_eq!(offset_of!(L2cRegisters, prefetch_ctrl), 0xf60);
        assert_eq!(L2C_BASE_ADDR, 0x1F003000);
    }

    #[test]
    fn cache_id_decodes_part_number() {
        // r3p3 L2C-310 from Arm
        let id = InMemoryRegister::<u32, CACHE_ID::Register>::new(0x4100_00c9);
        assert_eq!(id.read(CACHE_ID::IMPLEMENTER), 0x41);
        assert!(id.matches_all(CACHE_ID::PART_NUMBER::L2C310));
        assert_eq!(id.read(CACHE_ID::RTL_RELEASE), 9);
    }

    #[test]
    fn aux_control_geometry() {
        let aux = InMemoryRegister::<u32, AUX_CONTROL::Register>::new(0);
        aux.write(AUX_CONTROL::WAY_SIZE::KiB64 + AUX_CONTROL::ASSOCIATIVITY::Ways8);
        assert_eq!(aux.get(), 0x0006_0000);
    }

    #[test]
    fn ram_latency_and_maintenance() {
        let tag = InMemoryRegister::<u32, RAM_LATENCY::Register>::new(0);
        tag.write(RAM_LATENCY::SETUP.val(1) + RAM_LATENCY::READ.val(1) + RAM_LATENCY::WRITE.val(1));
        assert_eq!(tag.get(), 0x111);

        assert_eq!(WAY_MASK_ALL, 0xff);
        assert_eq!(line_address(0x2000_003f), 0x2000_0020);
    }
}
