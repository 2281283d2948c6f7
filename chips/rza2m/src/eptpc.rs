// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! PTP clock (EPTPC).
//!
//! The EPTPC is split into a common block, holding the local clock counter,
//! the statistical time correction, the pulse timers and the packet
//! relation controller, and one synchronization frame processing unit
//! (SYNFP) per Ethernet port. Time values are 80 bits wide: a 48-bit
//! seconds field split over an upper (`..U`) and middle (`..M`) register,
//! and a 32-bit nanoseconds field in the lower (`..L`) register.

use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

/// Number of pulse output timers in the common block.
pub const TIMER_COUNT: usize = 6;

register_structs! {
    pub EptpcRegisters {
        /// Interrupt source status register
        (0x000 => pub miesr: ReadWrite<u32, MIESR::Register>),
        /// Interrupt request permission register
        (0x004 => pub mieipr: ReadWrite<u32, MIESR::Register>),
        (0x008 => _reserved0),
        /// ELC output / IPLS interrupt request permission register
        (0x010 => pub elippr: ReadWrite<u32, ELIPPR::Register>),
        /// ELC output / IPLS interrupt permission automatic clearing register
        (0x014 => pub elipacr: ReadWrite<u32, ELIPPR::Register>),
        (0x018 => _reserved1),
        /// Local clock counter status register
        (0x040 => pub stsr: ReadWrite<u32, STSR::Register>),
        /// Local clock counter status notification permission register
        (0x044 => pub stipr: ReadWrite<u32, STSR::Register>),
        (0x048 => _reserved2),
        /// Local clock counter clock frequency setting register
        (0x050 => pub stcfr: ReadWrite<u32, STCFR::Register>),
        /// Local clock counter mode register
        (0x054 => pub stmr: ReadWrite<u32, STMR::Register>),
        /// Sync message reception timeout register
        (0x058 => pub syntor: ReadWrite<u32>),
        (0x05c => _reserved3),
        /// IPLS interrupt request timer select register
        (0x060 => pub iptselr: ReadWrite<u32, TIMER_SELECT::Register>),
        /// MINT interrupt request timer select register
        (0x064 => pub mitselr: ReadWrite<u32, TIMER_SELECT::Register>),
        /// ELC output timer select register
        (0x068 => pub eltselr: ReadWrite<u32, TIMER_SELECT::Register>),
        /// Time synchronization channel select register
        (0x06c => pub stchselr: ReadWrite<u32, STCHSELR::Register>),
        (0x070 => _reserved4),
        /// Local clock counter start register
        (0x080 => pub synstartr: ReadWrite<u32, SYNSTARTR::Register>),
        /// Local clock counter initial value load directive register
        (0x084 => pub lcivldr: ReadWrite<u32, LCIVLDR::Register>),
        (0x088 => _reserved5),
        /// Sync timeout detection threshold A, upper and lower words
        (0x090 => pub syntdaru: ReadWrite<u32>),
        (0x094 => pub syntdarl: ReadWrite<u32>),
        /// Sync timeout detection threshold B, upper and lower words
        (0x098 => pub syntdbru: ReadWrite<u32>),
        (0x09c => pub syntdbrl: ReadWrite<u32>),
        (0x0a0 => _reserved6),
        /// Local clock counter initial value
        (0x0b0 => pub lcivru: ReadWrite<u32, SECONDS_UPPER::Register>),
        (0x0b4 => pub lcivrm: ReadWrite<u32>),
        (0x0b8 => pub lcivrl: ReadWrite<u32>),
        (0x0bc => _reserved7),
        /// Worst10 acquisition directive register
        (0x104 => pub getw10r: ReadWrite<u32, GETW10R::Register>),
        /// Positive gradient limit
        (0x108 => pub plimitru: ReadWrite<u32>),
        (0x10c => pub plimitrm: ReadWrite<u32>),
        (0x110 => pub plimitrl: ReadWrite<u32>),
        /// Negative gradient limit
        (0x114 => pub mlimitru: ReadWrite<u32>),
        (0x118 => pub mlimitrm: ReadWrite<u32>),
        (0x11c => pub mlimitrl: ReadWrite<u32>),
        /// Statistical information acquisition directive register
        (0x120 => pub getinfor: ReadWrite<u32, GETINFOR::Register>),
        (0x124 => _reserved8),
        /// Local clock counter current value
        (0x130 => pub lccvru: ReadOnly<u32, SECONDS_UPPER::Register>),
        (0x134 => pub lccvrm: ReadOnly<u32>),
        (0x138 => pub lccvrl: ReadOnly<u32>),
        (0x13c => _reserved9),
        /// Positive gradient worst10 value
        (0x14c => pub pw10vru: ReadOnly<u32>),
        (0x150 => pub pw10vrm: ReadOnly<u32>),
        (0x154 => pub pw10vrl: ReadOnly<u32>),
        (0x158 => _reserved10),
        /// Negative gradient worst10 value
        (0x16c => pub mw10ru: ReadOnly<u32>),
        (0x170 => pub mw10rm: ReadOnly<u32>),
        (0x174 => pub mw10rl: ReadOnly<u32>),
        (0x178 => _reserved11),
        /// Pulse output timers
        (0x190 => pub timers: [PulseTimer; TIMER_COUNT]),
        (0x1f0 => _reserved12),
        /// Timer start register
        (0x1fc => pub tmstartr: ReadWrite<u32, TMSTARTR::Register>),
        /// Packet relation controller status register
        (0x200 => pub prsr: ReadWrite<u32, PRSR::Register>),
        /// Packet relation controller interrupt permission register
        (0x204 => pub pripr: ReadWrite<u32, PRSR::Register>),
        (0x208 => _reserved13),
        /// Port 0 MAC address
        (0x210 => pub prmacru0: ReadWrite<u32, MAC_UPPER::Register>),
        (0x214 => pub prmacrl0: ReadWrite<u32, MAC_LOWER::Register>),
        /// Port 1 MAC address
        (0x218 => pub prmacru1: ReadWrite<u32, MAC_UPPER::Register>),
        (0x21c => pub prmacrl1: ReadWrite<u32, MAC_LOWER::Register>),
        /// Channel 0/1 transmission disable register
        (0x220 => pub trndisr: ReadWrite<u32, TRNDISR::Register>),
        (0x224 => _reserved14),
        /// Relay mode register
        (0x230 => pub trnmr: ReadWrite<u32, TRNMR::Register>),
        /// Cut-through transfer start threshold register
        (0x234 => pub trncttdr: ReadWrite<u32, TRNCTTDR::Register>),
        (0x238 => @END),
    },

    pub PulseTimer {
        /// Start time, upper and lower words of the nanosecond counter
        (0x0 => pub tmsttru: ReadWrite<u32>),
        (0x4 => pub tmsttrl: ReadWrite<u32>),
        /// Cycle in nanoseconds
        (0x8 => pub tmcycr: ReadWrite<u32, TMCYCR::Register>),
        /// Pulse width in nanoseconds
        (0xc => pub tmplsr: ReadWrite<u32, TMPLSR::Register>),
        (0x10 => @END),
    }
}

register_structs! {
    pub SynfpRegisters {
        /// SYNFP status register
        (0x000 => pub sysr: ReadWrite<u32, SYSR::Register>),
        /// SYNFP status notification permission register
        (0x004 => pub syipr: ReadWrite<u32, SYSR::Register>),
        (0x008 => _reserved0),
        /// SYNFP MAC address
        (0x010 => pub symacru: ReadWrite<u32, MAC_UPPER::Register>),
        (0x014 => pub symacrl: ReadWrite<u32, MAC_LOWER::Register>),
        /// SYNFP LLC-CTL value register
        (0x018 => pub syllcctlr: ReadWrite<u32, SYLLCCTLR::Register>),
        /// SYNFP local IP address register
        (0x01c => pub syipaddrr: ReadWrite<u32>),
        (0x020 => _reserved1),
        /// SYNFP PTP version setting register
        (0x040 => pub syspvrr: ReadWrite<u32, SYSPVRR::Register>),
        /// SYNFP domain number setting register
        (0x044 => pub sydomr: ReadWrite<u32, SYDOMR::Register>),
        (0x048 => _reserved2),
        /// Announce, Sync, Delay_Req and Delay_Resp message flag registers
        (0x050 => pub anfr: ReadWrite<u32, MESSAGE_FLAGS::Register>),
        (0x054 => pub synfr: ReadWrite<u32, MESSAGE_FLAGS::Register>),
        (0x058 => pub dyrqfr: ReadWrite<u32, MESSAGE_FLAGS::Register>),
        (0x05c => pub dyrpfr: ReadWrite<u32, MESSAGE_FLAGS::Register>),
        /// SYNFP local clock ID
        (0x060 => pub sycidru: ReadWrite<u32>),
        (0x064 => pub sycidrl: ReadWrite<u32>),
        /// SYNFP local port number register
        (0x068 => pub sypnumr: ReadWrite<u32, SYPNUMR::Register>),
        (0x06c => _reserved3),
        /// SYNFP register value load directive register
        (0x080 => pub syrvldr: ReadWrite<u32, SYRVLDR::Register>),
        /// SYNFP reception filter registers
        (0x084 => pub syrfl1r: ReadWrite<u32>),
        (0x088 => pub syrfl2r: ReadWrite<u32>),
        /// SYNFP transmission enable register
        (0x08c => pub sytrenr: ReadWrite<u32, SYTRENR::Register>),
        (0x090 => _reserved4),
        /// Master clock ID
        (0x094 => pub mtcidu: ReadWrite<u32>),
        (0x098 => pub mtcidl: ReadWrite<u32>),
        /// Master clock port number register
        (0x09c => pub mtpid: ReadWrite<u32, SYPNUMR::Register>),
        (0x0a0 => _reserved5),
        /// SYNFP transmission interval setting register
        (0x0b4 => pub sytlir: ReadWrite<u32, SYTLIR::Register>),
        /// SYNFP received logMessageInterval value indication register
        (0x0b8 => pub syrlir: ReadOnly<u32, SYTLIR::Register>),
        /// offsetFromMaster value
        (0x0bc => pub ofmru: ReadOnly<u32>),
        (0x0c0 => pub ofmrl: ReadOnly<u32>),
        /// meanPathDelay value
        (0x0c4 => pub mpdru: ReadOnly<u32>),
        (0x0c8 => pub mpdrl: ReadOnly<u32>),
        (0x0cc => _reserved6),
        /// grandmasterPriority field setting register
        (0x0e0 => pub gmpr: ReadWrite<u32, GMPR::Register>),
        /// grandmasterClockQuality field setting register
        (0x0e4 => pub gmcqr: ReadWrite<u32>),
        /// grandmasterIdentity field setting register
        (0x0e8 => pub gmidru: ReadWrite<u32>),
        (0x0ec => pub gmidrl: ReadWrite<u32>),
        /// currentUtcOffset / timeSource field setting register
        (0x0f0 => pub cuotsr: ReadWrite<u32>),
        /// stepsRemoved field setting register
        (0x0f4 => pub srr: ReadWrite<u32, SRR::Register>),
        (0x0f8 => _reserved7),
        /// PTP-primary message destination MAC address
        (0x100 => pub ppmacru: ReadWrite<u32, MAC_UPPER::Register>),
        (0x104 => pub ppmacrl: ReadWrite<u32, MAC_LOWER::Register>),
        /// PTP-pdelay message destination MAC address
        (0x108 => pub pdmacru: ReadWrite<u32, MAC_UPPER::Register>),
        (0x10c => pub pdmacrl: ReadWrite<u32, MAC_LOWER::Register>),
        /// PTP message EtherType setting register
        (0x110 => pub petyper: ReadWrite<u32, PETYPER::Register>),
        (0x114 => _reserved8),
        /// PTP-primary and PTP-pdelay message destination IP addresses
        (0x120 => pub ppipr: ReadWrite<u32>),
        (0x124 => pub pdipr: ReadWrite<u32>),
        /// PTP event / general message TOS setting registers
        (0x128 => pub petosr: ReadWrite<u32, TOS::Register>),
        (0x12c => pub pgtosr: ReadWrite<u32, TOS::Register>),
        /// PTP-primary / PTP-pdelay message TTL setting registers
        (0x130 => pub ppttlr: ReadWrite<u32, TTL::Register>),
        (0x134 => pub pdttlr: ReadWrite<u32, TTL::Register>),
        /// PTP event / general message UDP destination port number registers
        (0x138 => pub peudpr: ReadWrite<u32, UDP_PORT::Register>),
        (0x13c => pub pgudpr: ReadWrite<u32, UDP_PORT::Register>),
        /// Frame reception filter setting register
        (0x140 => pub ffltr: ReadWrite<u32, FFLTR::Register>),
        (0x144 => _reserved9),
        /// Frame reception filter MAC addresses 0 and 1
        (0x160 => pub fmac0ru: ReadWrite<u32, MAC_UPPER::Register>),
        (0x164 => pub fmac0rl: ReadWrite<u32, MAC_LOWER::Register>),
        (0x168 => pub fmac1ru: ReadWrite<u32, MAC_UPPER::Register>),
        (0x16c => pub fmac1rl: ReadWrite<u32, MAC_LOWER::Register>),
        (0x170 => _reserved10),
        /// Asymmetric delay setting register
        (0x180 => pub dasymru: ReadWrite<u32, DASYMRU::Register>),
        (0x184 => pub dasymrl: ReadWrite<u32>),
        /// Timestamp latency setting register
        (0x188 => pub tslatr: ReadWrite<u32, TSLATR::Register>),
        /// SYNFP operation setting register
        (0x18c => pub syconfr: ReadWrite<u32, SYCONFR::Register>),
        /// SYNFP frame format setting register
        (0x190 => pub syformr: ReadWrite<u32, SYFORMR::Register>),
        /// Response message reception timeout register
        (0x194 => pub rstoutr: ReadWrite<u32>),
        (0x198 => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(EptpcRegisters, lcivru) == 0x0b0);
const _: () = assert!(core::mem::offset_of!(EptpcRegisters, timers) == 0x190);
const _: () = assert!(core::mem::offset_of!(EptpcRegisters, tmstartr) == 0x1fc);
const _: () = assert!(core::mem::offset_of!(SynfpRegisters, syconfr) == 0x18c);

register_bitfields![u32,
    MIESR [
        /// Pulse timer interrupt sources
        CYC OFFSET(16) NUMBITS(6) [],
        /// Packet relation controller
        PRC OFFSET(3) NUMBITS(1) [],
        /// SYNFP1
        SY1 OFFSET(2) NUMBITS(1) [],
        /// SYNFP0
        SY0 OFFSET(1) NUMBITS(1) [],
        /// Local clock counter status
        ST OFFSET(0) NUMBITS(1) []
    ],
    ELIPPR [
        /// Pulse timer output to the ELC
        CYCP OFFSET(16) NUMBITS(6) [],
        /// Pulse timer interrupt to the IPLS
        CYCO OFFSET(0) NUMBITS(6) []
    ],
    STSR [
        /// Worst10 values acquired
        W10D OFFSET(4) NUMBITS(1) [],
        /// Sync message reception timeout
        SYNTOUT OFFSET(3) NUMBITS(1) [],
        /// Synchronization lost
        SYNCOUT OFFSET(1) NUMBITS(1) [],
        /// Synchronized
        SYNC OFFSET(0) NUMBITS(1) []
    ],
    STCFR [
        /// Local clock counter frequency
        STCF OFFSET(0) NUMBITS(2) [
            MHz20 = 0,
            MHz25 = 1,
            MHz50 = 2,
            MHz100 = 3
        ]
    ],
    STMR [
        /// Sync timeout detection enable, threshold B
        ALEN1 OFFSET(29) NUMBITS(1) [],
        /// Sync timeout detection enable, threshold A
        ALEN0 OFFSET(28) NUMBITS(1) [],
        /// Gradient detection mode
        DETMD OFFSET(14) NUMBITS(1) [],
        /// Correction mode
        CMTMD OFFSET(13) NUMBITS(1) [],
        /// Worst10 acquisition interval
        WINT OFFSET(0) NUMBITS(8) []
    ],
    TIMER_SELECT [
        /// One bit per pulse timer
        TMR OFFSET(0) NUMBITS(6) []
    ],
    STCHSELR [
        /// SYNFP channel used for time synchronization
        SYSEL OFFSET(0) NUMBITS(1) [
            Synfp0 = 0,
            Synfp1 = 1
        ]
    ],
    SYNSTARTR [
        STR OFFSET(0) NUMBITS(1) []
    ],
    LCIVLDR [
        LOAD OFFSET(0) NUMBITS(1) []
    ],
    SECONDS_UPPER [
        /// Bits 47:32 of the seconds field
        VALUE OFFSET(0) NUMBITS(16) []
    ],
    GETW10R [
        GW10 OFFSET(0) NUMBITS(1) []
    ],
    GETINFOR [
        INFO OFFSET(0) NUMBITS(1) []
    ],
    TMCYCR [
        TMCYC OFFSET(0) NUMBITS(30) []
    ],
    TMPLSR [
        TMPLS OFFSET(0) NUMBITS(29) []
    ],
    TMSTARTR [
        EN OFFSET(0) NUMBITS(6) []
    ],
    PRSR [
        /// Relay MAC address error
        MACE OFFSET(28) NUMBITS(1) [],
        /// Underflow of the relay FIFOs
        URE1 OFFSET(30) NUMBITS(1) [],
        URE0 OFFSET(29) NUMBITS(1) [],
        /// Overflow of the relay FIFOs
        OVRE3 OFFSET(3) NUMBITS(1) [],
        OVRE2 OFFSET(2) NUMBITS(1) [],
        OVRE1 OFFSET(1) NUMBITS(1) [],
        OVRE0 OFFSET(0) NUMBITS(1) []
    ],
    MAC_UPPER [
        /// First three octets of the MAC address
        MAC OFFSET(0) NUMBITS(24) []
    ],
    MAC_LOWER [
        /// Last three octets of the MAC address
        MAC OFFSET(0) NUMBITS(24) []
    ],
    TRNDISR [
        TDIS OFFSET(0) NUMBITS(2) []
    ],
    TRNMR [
        /// Relay through port 1
        FWD1 OFFSET(9) NUMBITS(1) [],
        /// Relay through port 0
        FWD0 OFFSET(8) NUMBITS(1) [],
        /// Relay mode: store-and-forward or cut-through
        MOD OFFSET(0) NUMBITS(1) [
            StoreAndForward = 0,
            CutThrough = 1
        ]
    ],
    TRNCTTDR [
        THVAL OFFSET(0) NUMBITS(11) []
    ],
    SYSR [
        /// Response message reception timeout
        RESDN OFFSET(20) NUMBITS(1) [],
        /// Sync message reception timeout
        SYNTO OFFSET(16) NUMBITS(1) [],
        /// Master clock ID changed
        MTCIDC OFFSET(12) NUMBITS(1) [],
        /// Delay response timeout
        DRPTO OFFSET(6) NUMBITS(1) [],
        /// Interval deviation
        INTDEV OFFSET(5) NUMBITS(1) [],
        /// Delay request overflow
        DRQOVR OFFSET(4) NUMBITS(1) [],
        /// meanPathDelay updated
        MPDUD OFFSET(2) NUMBITS(1) [],
        /// logMessageInterval changed
        INTCHG OFFSET(1) NUMBITS(1) [],
        /// offsetFromMaster updated
        OFMUD OFFSET(0) NUMBITS(1) []
    ],
    SYLLCCTLR [
        CTL OFFSET(0) NUMBITS(8) []
    ],
    SYSPVRR [
        /// transportSpecific field
        TRSP OFFSET(12) NUMBITS(4) [],
        /// versionPTP field
        VER OFFSET(0) NUMBITS(4) []
    ],
    SYDOMR [
        DNUM OFFSET(0) NUMBITS(8) []
    ],
    MESSAGE_FLAGS [
        /// flagField of the transmitted message
        FLAG OFFSET(0) NUMBITS(16) []
    ],
    SYPNUMR [
        PNUM OFFSET(0) NUMBITS(16) []
    ],
    SYRVLDR [
        /// Load the announce message fields
        ANUP OFFSET(2) NUMBITS(1) [],
        /// Load the stepsRemoved field
        STUP OFFSET(1) NUMBITS(1) [],
        /// Load the best master clock fields
        BMUP OFFSET(0) NUMBITS(1) []
    ],
    SYTRENR [
        /// Delay_Resp transmission enable
        DRPEN OFFSET(12) NUMBITS(1) [],
        /// Delay_Req transmission enable
        DRQEN OFFSET(8) NUMBITS(1) [],
        /// Sync transmission enable
        SYNEN OFFSET(4) NUMBITS(1) [],
        /// Announce transmission enable
        ANCE OFFSET(0) NUMBITS(1) []
    ],
    SYTLIR [
        /// logMessageInterval of Delay_Req
        DREQ OFFSET(16) NUMBITS(8) [],
        /// logMessageInterval of Sync
        SYNC OFFSET(8) NUMBITS(8) [],
        /// logMessageInterval of Announce
        ANCE OFFSET(0) NUMBITS(8) []
    ],
    GMPR [
        /// grandmasterPriority1
        GMPR1 OFFSET(16) NUMBITS(8) [],
        /// grandmasterPriority2
        GMPR2 OFFSET(0) NUMBITS(8) []
    ],
    SRR [
        SRMV OFFSET(0) NUMBITS(16) []
    ],
    PETYPER [
        TYPE OFFSET(0) NUMBITS(16) []
    ],
    TOS [
        TOS OFFSET(0) NUMBITS(8) []
    ],
    TTL [
        TTL OFFSET(0) NUMBITS(8) []
    ],
    UDP_PORT [
        PORT OFFSET(0) NUMBITS(16) []
    ],
    FFLTR [
        /// Forward frames that miss the filter to the EDMAC
        EXTPRM OFFSET(18) NUMBITS(1) [],
        /// Receive frames addressed to FMAC1
        ENB OFFSET(17) NUMBITS(1) [],
        /// Receive frames addressed to FMAC0
        PRT OFFSET(16) NUMBITS(1) [],
        /// Reception filter select
        SEL OFFSET(0) NUMBITS(1) []
    ],
    DASYMRU [
        /// Bits 47:32 of the asymmetric delay
        DASYM OFFSET(0) NUMBITS(16) []
    ],
    TSLATR [
        /// Ingress timestamp latency in nanoseconds
        IGP OFFSET(16) NUMBITS(16) [],
        /// Egress timestamp latency in nanoseconds
        EGP OFFSET(0) NUMBITS(16) []
    ],
    SYCONFR [
        /// Transmit clock mode
        TCMOD OFFSET(28) NUMBITS(3) [],
        /// Sync message transmission with one-step clock
        TCYC OFFSET(0) NUMBITS(8) []
    ],
    SYFORMR [
        /// Frame format of the port
        FORM1 OFFSET(1) NUMBITS(1) [],
        FORM0 OFFSET(0) NUMBITS(1) []
    ]
];

pub const EPTPC_BASE_ADDR: usize = 0xE820_4800;
pub const EPTPC0_BASE_ADDR: usize = 0xE820_5000;
pub const EPTPC1_BASE_ADDR: usize = 0xE820_5400;

pub const EPTPC_BASE: StaticRef<EptpcRegisters> =
    unsafe { StaticRef::new(EPTPC_BASE_ADDR as *const EptpcRegisters) };
pub const EPTPC0_BASE: StaticRef<SynfpRegisters> =
    unsafe { StaticRef::new(EPTPC0_BASE_ADDR as *const SynfpRegisters) };
pub const EPTPC1_BASE: StaticRef<SynfpRegisters> =
    unsafe { StaticRef::new(EPTPC1_BASE_ADDR as *const SynfpRegisters) };

/// Split a PTP timestamp into the `U`, `M` and `L` words of an 80-bit time
/// register triple such as `LCIVRU`/`LCIVRM`/`LCIVRL`.
///
/// Seconds beyond 48 bits are truncated, as the hardware counter wraps.
pub const fn split_timestamp(seconds: u64, nanoseconds: u32) -> (u32, u32, u32) {
    (
        ((seconds >> 32) & 0xffff) as u32,
        seconds as u32,
        nanoseconds,
    )
}

/// Inverse of [`split_timestamp`].
pub const fn join_timestamp(upper: u32, middle: u32, lower: u32) -> (u64, u32) {
    ((((upper & 0xffff) as u64) << 32) | middle as u64, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn common_block_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(EptpcRegisters, stsr), 0x040);
        assert_eq!(offset_of!(EptpcRegisters, stmr), 0x054);
        assert_eq!(offset_of!(EptpcRegisters, synstartr), 0x080);
        assert_eq!(offset_of!(EptpcRegisters, getinfor), 0x120);
        assert_eq!(offset_of!(EptpcRegisters, lccvru), 0x130);
        assert_eq!(offset_of!(EptpcRegisters, mw10rl), 0x174);
        assert_eq!(offset_of!(EptpcRegisters, prsr), 0x200);
        assert_eq!(offset_of!(EptpcRegisters, trncttdr), 0x234);
        assert_eq!(core::mem::size_of::<PulseTimer>(), 0x10);
        assert_eq!(core::mem::size_of::<EptpcRegisters>(), 0x238);
    }

    #[test]
    fn synfp_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(SynfpRegisters, symacru), 0x010);
        assert_eq!(offset_of!(SynfpRegisters, syspvrr), 0x040);
        assert_eq!(offset_of!(SynfpRegisters, syrvldr), 0x080);
        assert_eq!(offset_of!(SynfpRegisters, ofmru), 0x0bc);
        assert_eq!(offset_of!(SynfpRegisters, gmpr), 0x0e0);
        assert_eq!(offset_of!(SynfpRegisters, petyper), 0x110);
        assert_eq!(offset_of!(SynfpRegisters, ffltr), 0x140);
        assert_eq!(offset_of!(SynfpRegisters, rstoutr), 0x194);
        assert_eq!(core::mem::size_of::<SynfpRegisters>(), 0x198);
    }

    #[test]
    fn synfp_blocks_do_not_overlap() {
        let size = core::mem::size_of::<SynfpRegisters>();
        assert!(EPTPC0_BASE_ADDR + size <= EPTPC1_BASE_ADDR);
        assert!(EPTPC_BASE_ADDR + core::mem::size_of::<EptpcRegisters>() <= EPTPC0_BASE_ADDR);
    }

    #[test]
    fn timestamp_words() {
        let (u, m, l) = split_timestamp(0x0001_2345_6789, 999_999_999);
        assert_eq!((u, m, l), (0x0001, 0x2345_6789, 999_999_999));
        assert_eq!(join_timestamp(u, m, l), (0x0001_2345_6789, 999_999_999));

        let lcivru = InMemoryRegister::<u32, SECONDS_UPPER::Register>::new(0);
        lcivru.write(SECONDS_UPPER::VALUE.val(u));
        assert_eq!(lcivru.get(), 1);
    }

    #[test]
    fn ptp_version_and_domain() {
        let syspvrr = InMemoryRegister::<u32, SYSPVRR::Register>::new(0);
        syspvrr.write(SYSPVRR::VER.val(2) + SYSPVRR::TRSP.val(0));
        assert_eq!(syspvrr.get(), 2);

        let stcfr = InMemoryRegister::<u32, STCFR::Register>::new(0);
        stcfr.write(STCFR::STCF::MHz100);
        assert_eq!(stcfr.get(), 3);
        assert!(stcfr.matches_all(STCFR::STCF::MHz100));
    }
}
