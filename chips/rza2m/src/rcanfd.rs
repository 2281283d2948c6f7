// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! CAN-FD controller (RCANFD), CAN FD mode register map.
//!
//! The controller has two channels sharing one global block, eight receive
//! FIFOs, three common FIFOs per channel, 64 transmit buffers per channel,
//! a windowed acceptance filter list and 32 receive message buffers. All
//! message slots use the 64-byte payload layout of CAN FD mode.

use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const CHANNEL_COUNT: usize = 2;
pub const RX_FIFO_COUNT: usize = 8;
pub const COMMON_FIFOS_PER_CHANNEL: usize = 3;
pub const COMMON_FIFO_COUNT: usize = COMMON_FIFOS_PER_CHANNEL * CHANNEL_COUNT;
pub const TX_BUFFERS_PER_CHANNEL: usize = 64;
pub const TX_BUFFER_COUNT: usize = TX_BUFFERS_PER_CHANNEL * CHANNEL_COUNT;
pub const RX_BUFFER_COUNT: usize = 32;
/// Acceptance filter rules visible through the page window at once.
pub const AFL_PAGE_RULES: usize = 16;
/// Payload words of a message slot.
pub const PAYLOAD_WORDS: usize = 16;

register_structs! {
    pub RcanfdRegisters {
        /// Per-channel nominal bit rate, control, status and error flags
        (0x0000 => pub channels: [ChannelRegisters; CHANNEL_COUNT]),
        (0x0020 => _reserved0),
        /// Global configuration register
        (0x0084 => pub gcfg: ReadWrite<u32, GCFG::Register>),
        /// Global control register
        (0x0088 => pub gctr: ReadWrite<u32, GCTR::Register>),
        /// Global status register
        (0x008c => pub gsts: ReadOnly<u32, GSTS::Register>),
        /// Global error flag register
        (0x0090 => pub gerfl: ReadWrite<u32, GERFL::Register>),
        /// Global timestamp counter register
        (0x0094 => pub gtsc: ReadOnly<u32, GTSC::Register>),
        /// Global acceptance filter list entry control register
        (0x0098 => pub gaflectr: ReadWrite<u32, GAFLECTR::Register>),
        /// Global acceptance filter list configuration register
        (0x009c => pub gaflcfg0: ReadWrite<u32, GAFLCFG::Register>),
        (0x00a0 => _reserved1),
        /// Receive message buffer number register
        (0x00a4 => pub rmnb: ReadWrite<u32, RMNB::Register>),
        /// Receive message buffer new data registers, one bit per buffer
        (0x00a8 => pub rmnd: [ReadWrite<u32>; 4]),
        /// Receive FIFO configuration/control registers
        (0x00b8 => pub rfcc: [ReadWrite<u32, RFCC::Register>; RX_FIFO_COUNT]),
        /// Receive FIFO status registers
        (0x00d8 => pub rfsts: [ReadWrite<u32, RFSTS::Register>; RX_FIFO_COUNT]),
        /// Receive FIFO pointer control registers
        (0x00f8 => pub rfpctr: [WriteOnly<u32, FIFO_PCTR::Register>; RX_FIFO_COUNT]),
        /// Common FIFO configuration/control registers, three per channel
        (0x0118 => pub cfcc: [ReadWrite<u32, CFCC::Register>; COMMON_FIFO_COUNT]),
        (0x0130 => _reserved2),
        /// Common FIFO status registers
        (0x0178 => pub cfsts: [ReadWrite<u32, CFSTS::Register>; COMMON_FIFO_COUNT]),
        (0x0190 => _reserved3),
        /// Common FIFO pointer control registers
        (0x01d8 => pub cfpctr: [WriteOnly<u32, FIFO_PCTR::Register>; COMMON_FIFO_COUNT]),
        (0x01f0 => _reserved4),
        /// FIFO empty status register
        (0x0238 => pub fests: ReadOnly<u32, FIFO_FLAGS::Register>),
        /// FIFO full status register
        (0x023c => pub ffsts: ReadOnly<u32, FIFO_FLAGS::Register>),
        /// FIFO message lost status register
        (0x0240 => pub fmsts: ReadOnly<u32, FIFO_FLAGS::Register>),
        /// Receive FIFO interrupt flag status register
        (0x0244 => pub rfists: ReadOnly<u32>),
        /// Common FIFO receive interrupt flag status register
        (0x0248 => pub cfrists: ReadOnly<u32>),
        /// Common FIFO transmit interrupt flag status register
        (0x024c => pub cftists: ReadOnly<u32>),
        /// Transmit buffer control registers
        (0x0250 => pub tmc: [ReadWrite<u8, TMC::Register>; TX_BUFFER_COUNT]),
        /// Transmit buffer status registers
        (0x02d0 => pub tmsts: [ReadWrite<u8, TMSTS::Register>; TX_BUFFER_COUNT]),
        /// Transmit buffer transmit request status registers
        (0x0350 => pub tmtrsts: [ReadOnly<u32>; 4]),
        (0x0360 => _reserved5),
        /// Transmit buffer transmit abort request status registers
        (0x0370 => pub tmtarsts: [ReadOnly<u32>; 4]),
        (0x0380 => _reserved6),
        /// Transmit buffer transmit complete status registers
        (0x0390 => pub tmtcsts: [ReadOnly<u32>; 4]),
        (0x03a0 => _reserved7),
        /// Transmit buffer transmit abort status registers
        (0x03b0 => pub tmtasts: [ReadOnly<u32>; 4]),
        (0x03c0 => _reserved8),
        /// Transmit buffer interrupt enable configuration registers
        (0x03d0 => pub tmiec: [ReadWrite<u32>; 4]),
        (0x03e0 => _reserved9),
        /// Transmit queue configuration/control registers
        (0x03f0 => pub txqcc: [ReadWrite<u32, TXQCC::Register>; CHANNEL_COUNT]),
        (0x03f8 => _reserved10),
        /// Transmit queue status registers
        (0x0410 => pub txqsts: [ReadWrite<u32, TXQSTS::Register>; CHANNEL_COUNT]),
        (0x0418 => _reserved11),
        /// Transmit queue pointer control registers
        (0x0430 => pub txqpctr: [WriteOnly<u32, FIFO_PCTR::Register>; CHANNEL_COUNT]),
        (0x0438 => _reserved12),
        /// Transmit history configuration/control registers
        (0x0450 => pub thlcc: [ReadWrite<u32, THLCC::Register>; CHANNEL_COUNT]),
        (0x0458 => _reserved13),
        /// Global test interrupt status register
        (0x0460 => pub gtintsts0: ReadOnly<u32>),
        (0x0464 => _reserved14),
        /// Global test configuration register
        (0x0468 => pub gtstcfg: ReadWrite<u32, GTSTCFG::Register>),
        /// Global test control register
        (0x046c => pub gtstctr: ReadWrite<u32, GTSTCTR::Register>),
        /// Transmit history status registers
        (0x0470 => pub thlsts: [ReadWrite<u32, THLSTS::Register>; CHANNEL_COUNT]),
        (0x0478 => _reserved15),
        /// Global lock key register
        (0x047c => pub glockk: WriteOnly<u32>),
        (0x0480 => _reserved16),
        /// Transmit history pointer control registers
        (0x0490 => pub thlpctr: [WriteOnly<u32, FIFO_PCTR::Register>; CHANNEL_COUNT]),
        (0x0498 => _reserved17),
        /// Global RAM configuration register
        (0x04fc => pub grmcfg: ReadWrite<u32, GRMCFG::Register>),
        /// Per-channel data bit rate and CAN FD settings
        (0x0500 => pub fd_channels: [FdChannelRegisters; CHANNEL_COUNT]),
        (0x0540 => _reserved18),
        /// Acceptance filter list window, page selected by GAFLECTR.AFLPN
        (0x1000 => pub gafl: [AcceptanceRule; AFL_PAGE_RULES]),
        (0x1100 => _reserved19),
        /// Receive message buffers
        (0x2000 => pub rm: [RxMessageBuffer; RX_BUFFER_COUNT]),
        /// Receive FIFO access windows
        (0x3000 => pub rf: [FifoMessage; RX_FIFO_COUNT]),
        /// Common FIFO access windows
        (0x3400 => pub cf: [FifoMessage; COMMON_FIFO_COUNT]),
        (0x3700 => _reserved20),
        /// Transmit buffers
        (0x4000 => pub tm: [TxMessageBuffer; TX_BUFFER_COUNT]),
        (0x8000 => @END),
    },

    pub ChannelRegisters {
        /// Nominal bit rate configuration register
        (0x0 => pub ncfg: ReadWrite<u32, NCFG::Register>),
        /// Channel control register
        (0x4 => pub ctr: ReadWrite<u32, CTR::Register>),
        /// Channel status register
        (0x8 => pub sts: ReadOnly<u32, STS::Register>),
        /// Channel error flag register
        (0xc => pub erfl: ReadWrite<u32, ERFL::Register>),
        (0x10 => @END),
    },

    pub FdChannelRegisters {
        /// Data bit rate configuration register
        (0x00 => pub dcfg: ReadWrite<u32, DCFG::Register>),
        /// CAN FD configuration register
        (0x04 => pub fdcfg: ReadWrite<u32, FDCFG::Register>),
        /// CAN FD control register
        (0x08 => pub fdctr: ReadWrite<u32, FDCTR::Register>),
        /// CAN FD status register
        (0x0c => pub fdsts: ReadWrite<u32, FDSTS::Register>),
        /// CAN FD CRC register
        (0x10 => pub fdcrc: ReadOnly<u32, FDCRC::Register>),
        (0x14 => _reserved0),
        (0x20 => @END),
    },

    pub AcceptanceRule {
        /// Acceptance filter ID register
        (0x0 => pub id: ReadWrite<u32, GAFLID::Register>),
        /// Acceptance filter mask register
        (0x4 => pub mask: ReadWrite<u32, GAFLM::Register>),
        /// Acceptance filter pointer 0 register
        (0x8 => pub p0: ReadWrite<u32, GAFLP0::Register>),
        /// Acceptance filter pointer 1 register, one bit per FIFO target
        (0xc => pub p1: ReadWrite<u32, GAFLP1::Register>),
        (0x10 => @END),
    },

    pub RxMessageBuffer {
        (0x00 => pub id: ReadOnly<u32, MSG_ID::Register>),
        (0x04 => pub ptr: ReadOnly<u32, MSG_PTR::Register>),
        (0x08 => pub fdsts: ReadOnly<u32, MSG_FD::Register>),
        (0x0c => pub data: [ReadOnly<u32>; PAYLOAD_WORDS]),
        (0x4c => _reserved0),
        (0x80 => @END),
    },

    pub FifoMessage {
        (0x00 => pub id: ReadWrite<u32, MSG_ID::Register>),
        (0x04 => pub ptr: ReadWrite<u32, MSG_PTR::Register>),
        (0x08 => pub fdsts: ReadWrite<u32, MSG_FD::Register>),
        (0x0c => pub data: [ReadWrite<u32>; PAYLOAD_WORDS]),
        (0x4c => _reserved0),
        (0x80 => @END),
    },

    pub TxMessageBuffer {
        (0x00 => pub id: ReadWrite<u32, MSG_ID::Register>),
        (0x04 => pub ptr: ReadWrite<u32, MSG_PTR::Register>),
        (0x08 => pub fdctr: ReadWrite<u32, MSG_FD::Register>),
        (0x0c => pub data: [ReadWrite<u32>; PAYLOAD_WORDS]),
        (0x4c => _reserved0),
        (0x80 => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(RcanfdRegisters, gcfg) == 0x0084);
const _: () = assert!(core::mem::offset_of!(RcanfdRegisters, fd_channels) == 0x0500);
const _: () = assert!(core::mem::offset_of!(RcanfdRegisters, gafl) == 0x1000);
const _: () = assert!(core::mem::offset_of!(RcanfdRegisters, tm) == 0x4000);

register_bitfields![u32,
    NCFG [
        /// Nominal time segment 2 minus one
        NTSEG2 OFFSET(25) NUMBITS(7) [],
        /// Nominal time segment 1 minus one
        NTSEG1 OFFSET(17) NUMBITS(8) [],
        /// Nominal resynchronization jump width minus one
        NSJW OFFSET(10) NUMBITS(7) [],
        /// Nominal bit rate prescaler minus one
        NBRP OFFSET(0) NUMBITS(10) []
    ],
    CTR [
        /// Restricted operation mode
        ROM OFFSET(31) NUMBITS(1) [],
        /// CRC error test
        CRCT OFFSET(30) NUMBITS(1) [],
        /// Channel test mode select
        CTMS OFFSET(25) NUMBITS(2) [
            BasicTest = 0,
            ListenOnly = 1,
            ExternalLoopback = 2,
            InternalLoopback = 3
        ],
        /// Channel test mode enable
        CTME OFFSET(24) NUMBITS(1) [],
        /// Error display mode
        ERRD OFFSET(23) NUMBITS(1) [],
        /// Bus-off recovery mode
        BOM OFFSET(21) NUMBITS(2) [
            Iso11898 = 0,
            EntryHalt = 1,
            EndHalt = 2,
            Software = 3
        ],
        TDCVFIE OFFSET(19) NUMBITS(1) [],
        SOCOIE OFFSET(18) NUMBITS(1) [],
        EOCOIE OFFSET(17) NUMBITS(1) [],
        /// Transmit abort interrupt enable
        TAIE OFFSET(16) NUMBITS(1) [],
        /// Arbitration lost interrupt enable
        ALIE OFFSET(15) NUMBITS(1) [],
        /// Bus lock interrupt enable
        BLIE OFFSET(14) NUMBITS(1) [],
        /// Overload frame transmit interrupt enable
        OLIE OFFSET(13) NUMBITS(1) [],
        /// Bus-off recovery interrupt enable
        BORIE OFFSET(12) NUMBITS(1) [],
        /// Bus-off entry interrupt enable
        BOEIE OFFSET(11) NUMBITS(1) [],
        /// Error passive interrupt enable
        EPIE OFFSET(10) NUMBITS(1) [],
        /// Error warning interrupt enable
        EWIE OFFSET(9) NUMBITS(1) [],
        /// Bus error interrupt enable
        BEIE OFFSET(8) NUMBITS(1) [],
        /// Forcible return from bus-off
        RTBO OFFSET(3) NUMBITS(1) [],
        /// Channel stop mode
        CSLPR OFFSET(2) NUMBITS(1) [],
        /// Channel mode select
        CHMDC OFFSET(0) NUMBITS(2) [
            Communication = 0,
            Reset = 1,
            Halt = 2
        ]
    ],
    STS [
        /// Transmit error counter
        TEC OFFSET(24) NUMBITS(8) [],
        /// Receive error counter
        REC OFFSET(16) NUMBITS(8) [],
        /// Error state indication flag
        ESIF OFFSET(8) NUMBITS(1) [],
        /// Communication status
        COMSTS OFFSET(7) NUMBITS(1) [],
        /// Receive status
        RECSTS OFFSET(6) NUMBITS(1) [],
        /// Transmit status
        TRMSTS OFFSET(5) NUMBITS(1) [],
        /// Bus-off status
        BOSTS OFFSET(4) NUMBITS(1) [],
        /// Error passive status
        EPSTS OFFSET(3) NUMBITS(1) [],
        /// Channel stop status
        CSLPSTS OFFSET(2) NUMBITS(1) [],
        /// Channel halt status
        CHLTSTS OFFSET(1) NUMBITS(1) [],
        /// Channel reset status
        CRSTSTS OFFSET(0) NUMBITS(1) []
    ],
    ERFL [
        /// CRC calculation data
        CRCREG OFFSET(16) NUMBITS(15) [],
        ADERR OFFSET(14) NUMBITS(1) [],
        B0ERR OFFSET(13) NUMBITS(1) [],
        B1ERR OFFSET(12) NUMBITS(1) [],
        CERR OFFSET(11) NUMBITS(1) [],
        AERR OFFSET(10) NUMBITS(1) [],
        FERR OFFSET(9) NUMBITS(1) [],
        SERR OFFSET(8) NUMBITS(1) [],
        ALF OFFSET(7) NUMBITS(1) [],
        BLF OFFSET(6) NUMBITS(1) [],
        OVLF OFFSET(5) NUMBITS(1) [],
        BORF OFFSET(4) NUMBITS(1) [],
        BOEF OFFSET(3) NUMBITS(1) [],
        EPF OFFSET(2) NUMBITS(1) [],
        EWF OFFSET(1) NUMBITS(1) [],
        BEF OFFSET(0) NUMBITS(1) []
    ],
    GCFG [
        /// Interval timer prescaler
        ITRCP OFFSET(16) NUMBITS(16) [],
        /// Timestamp source
        TSBTCS OFFSET(13) NUMBITS(3) [],
        TSSS OFFSET(12) NUMBITS(1) [],
        /// Timestamp clock prescaler, as a power of two
        TSP OFFSET(8) NUMBITS(4) [],
        /// Payload overflow mode
        CMPOC OFFSET(5) NUMBITS(1) [],
        /// CAN clock source: 0 = clkc, 1 = external
        DCS OFFSET(4) NUMBITS(1) [],
        /// Mirror function enable
        MME OFFSET(3) NUMBITS(1) [],
        /// DLC replacement enable
        DRE OFFSET(2) NUMBITS(1) [],
        /// DLC check enable
        DCE OFFSET(1) NUMBITS(1) [],
        /// Transmit priority: 0 = ID, 1 = buffer number
        TPRI OFFSET(0) NUMBITS(1) []
    ],
    GCTR [
        /// Timestamp reset
        TSRST OFFSET(16) NUMBITS(1) [],
        CMPOFIE OFFSET(11) NUMBITS(1) [],
        THLEIE OFFSET(10) NUMBITS(1) [],
        MEIE OFFSET(9) NUMBITS(1) [],
        DEIE OFFSET(8) NUMBITS(1) [],
        /// Global stop mode
        GSLPR OFFSET(2) NUMBITS(1) [],
        /// Global mode select
        GMDC OFFSET(0) NUMBITS(2) [
            Operating = 0,
            Reset = 1,
            Test = 2
        ]
    ],
    GSTS [
        /// CAN RAM initialization in progress
        GRAMINIT OFFSET(3) NUMBITS(1) [],
        GSLPSTS OFFSET(2) NUMBITS(1) [],
        GHLTSTS OFFSET(1) NUMBITS(1) [],
        GRSTSTS OFFSET(0) NUMBITS(1) []
    ],
    GERFL [
        /// ECC error flags for channel 1 and 0
        EEF1 OFFSET(17) NUMBITS(1) [],
        EEF0 OFFSET(16) NUMBITS(1) [],
        CMPOF OFFSET(3) NUMBITS(1) [],
        THLES OFFSET(2) NUMBITS(1) [],
        MES OFFSET(1) NUMBITS(1) [],
        DEF OFFSET(0) NUMBITS(1) []
    ],
    GTSC [
        TS OFFSET(0) NUMBITS(16) []
    ],
    GAFLECTR [
        /// Acceptance filter list write enable
        AFLDAE OFFSET(8) NUMBITS(1) [],
        /// Acceptance filter list page number
        AFLPN OFFSET(0) NUMBITS(5) []
    ],
    GAFLCFG [
        /// Number of rules for channel 0
        RNC0 OFFSET(16) NUMBITS(9) [],
        /// Number of rules for channel 1
        RNC1 OFFSET(0) NUMBITS(9) []
    ],
    RMNB [
        /// Receive message buffer payload size
        RMPLS OFFSET(8) NUMBITS(3) [],
        /// Number of receive message buffers
        NRXMB OFFSET(0) NUMBITS(8) []
    ],
    RFCC [
        /// Interrupt generation counter value
        RFIGCV OFFSET(13) NUMBITS(3) [],
        /// Interrupt source: 0 = threshold, 1 = every message
        RFIM OFFSET(12) NUMBITS(1) [],
        /// FIFO depth
        RFDC OFFSET(8) NUMBITS(3) [
            Disabled = 0,
            Messages4 = 1,
            Messages8 = 2,
            Messages16 = 3,
            Messages32 = 4,
            Messages48 = 5,
            Messages64 = 6,
            Messages128 = 7
        ],
        /// Payload size code
        RFPLS OFFSET(4) NUMBITS(3) [],
        /// Interrupt enable
        RFIE OFFSET(1) NUMBITS(1) [],
        /// FIFO enable
        RFE OFFSET(0) NUMBITS(1) []
    ],
    RFSTS [
        /// Unread message counter
        RFMC OFFSET(8) NUMBITS(8) [],
        RFIF OFFSET(3) NUMBITS(1) [],
        RFMLT OFFSET(2) NUMBITS(1) [],
        RFFLL OFFSET(1) NUMBITS(1) [],
        RFEMP OFFSET(0) NUMBITS(1) []
    ],
    FIFO_PCTR [
        /// Write 0xff to advance the read (or write) pointer
        PC OFFSET(0) NUMBITS(8) []
    ],
    CFCC [
        /// Message transmission interval
        CFITT OFFSET(24) NUMBITS(8) [],
        /// FIFO depth
        CFDC OFFSET(21) NUMBITS(3) [],
        /// Linked transmit buffer
        CFTML OFFSET(16) NUMBITS(5) [],
        CFIGCV OFFSET(13) NUMBITS(3) [],
        CFIM OFFSET(12) NUMBITS(1) [],
        /// Interval timer resolution
        CFITR OFFSET(11) NUMBITS(1) [],
        /// Interval timer clock source
        CFITSS OFFSET(10) NUMBITS(1) [],
        /// FIFO mode
        CFM OFFSET(8) NUMBITS(2) [
            Receive = 0,
            Transmit = 1,
            Gateway = 2
        ],
        /// Payload size code
        CFPLS OFFSET(4) NUMBITS(3) [],
        CFTXIE OFFSET(2) NUMBITS(1) [],
        CFRXIE OFFSET(1) NUMBITS(1) [],
        CFE OFFSET(0) NUMBITS(1) []
    ],
    CFSTS [
        CFMC OFFSET(8) NUMBITS(8) [],
        CFTXIF OFFSET(4) NUMBITS(1) [],
        CFRXIF OFFSET(3) NUMBITS(1) [],
        CFMLT OFFSET(2) NUMBITS(1) [],
        CFFLL OFFSET(1) NUMBITS(1) [],
        CFEMP OFFSET(0) NUMBITS(1) []
    ],
    FIFO_FLAGS [
        /// Transmit history buffers
        THL OFFSET(16) NUMBITS(2) [],
        /// Common FIFOs
        CF OFFSET(8) NUMBITS(6) [],
        /// Receive FIFOs
        RF OFFSET(0) NUMBITS(8) []
    ],
    TXQCC [
        /// Transmit queue depth
        TXQDC OFFSET(8) NUMBITS(4) [],
        TXQIM OFFSET(7) NUMBITS(1) [],
        TXQIE OFFSET(5) NUMBITS(1) [],
        TXQE OFFSET(0) NUMBITS(1) []
    ],
    TXQSTS [
        TXQIF OFFSET(2) NUMBITS(1) [],
        TXQFLL OFFSET(1) NUMBITS(1) [],
        TXQEMP OFFSET(0) NUMBITS(1) []
    ],
    THLCC [
        /// Dedicated transmit buffer entries only
        THLDTE OFFSET(10) NUMBITS(1) [],
        THLIM OFFSET(9) NUMBITS(1) [],
        THLIE OFFSET(8) NUMBITS(1) [],
        THLE OFFSET(0) NUMBITS(1) []
    ],
    THLSTS [
        THLMC OFFSET(8) NUMBITS(6) [],
        THLIF OFFSET(3) NUMBITS(1) [],
        THLELT OFFSET(2) NUMBITS(1) [],
        THLFLL OFFSET(1) NUMBITS(1) [],
        THLEMP OFFSET(0) NUMBITS(1) []
    ],
    GTSTCFG [
        /// RAM test page
        RTMPS OFFSET(16) NUMBITS(7) [],
        /// Inter-channel communication test channels
        ICBCE OFFSET(0) NUMBITS(2) []
    ],
    GTSTCTR [
        /// RAM test enable
        RTME OFFSET(2) NUMBITS(1) [],
        /// Inter-channel communication test enable
        ICBCTME OFFSET(0) NUMBITS(1) []
    ],
    GRMCFG [
        /// 0 = classical CAN mode, 1 = CAN FD mode
        RCMC OFFSET(0) NUMBITS(1) [
            Classical = 0,
            Fd = 1
        ]
    ],
    DCFG [
        /// Data resynchronization jump width minus one
        DSJW OFFSET(24) NUMBITS(4) [],
        /// Data time segment 2 minus one
        DTSEG2 OFFSET(16) NUMBITS(4) [],
        /// Data time segment 1 minus one
        DTSEG1 OFFSET(8) NUMBITS(5) [],
        /// Data bit rate prescaler minus one
        DBRP OFFSET(0) NUMBITS(8) []
    ],
    FDCFG [
        /// Classical CAN only
        CLOE OFFSET(30) NUMBITS(1) [],
        /// RX edge filter enable
        REFE OFFSET(29) NUMBITS(1) [],
        /// FD only
        FDOE OFFSET(28) NUMBITS(1) [],
        /// Transceiver delay compensation offset
        TDCO OFFSET(16) NUMBITS(7) [],
        /// Error state indication mode
        ESIC OFFSET(10) NUMBITS(1) [],
        /// Transceiver delay compensation enable
        TDCE OFFSET(9) NUMBITS(1) [],
        /// Transceiver delay compensation offset configuration
        TDCOC OFFSET(8) NUMBITS(1) [],
        /// Error occurrence counter configuration
        EOCCFG OFFSET(0) NUMBITS(3) []
    ],
    FDCTR [
        /// Successful occurrence counter clear
        SOCCLR OFFSET(1) NUMBITS(1) [],
        /// Error occurrence counter clear
        EOCCLR OFFSET(0) NUMBITS(1) []
    ],
    FDSTS [
        /// Transceiver delay compensation result
        TDCR OFFSET(24) NUMBITS(7) [],
        /// Successful occurrence counter
        SOC OFFSET(16) NUMBITS(8) [],
        /// Error occurrence counter
        EOC OFFSET(8) NUMBITS(8) [],
        /// Transceiver delay compensation violation flag
        TDCVF OFFSET(7) NUMBITS(1) [],
        SOCO OFFSET(1) NUMBITS(1) [],
        EOCO OFFSET(0) NUMBITS(1) []
    ],
    FDCRC [
        /// Stuff bit count
        SCNT OFFSET(24) NUMBITS(4) [],
        CRCREG OFFSET(0) NUMBITS(21) []
    ],
    GAFLID [
        /// IDE select
        GAFLIDE OFFSET(31) NUMBITS(1) [],
        /// RTR select
        GAFLRTR OFFSET(30) NUMBITS(1) [],
        /// Match messages transmitted by this node (mirror)
        GAFLLB OFFSET(29) NUMBITS(1) [],
        GAFLID OFFSET(0) NUMBITS(29) []
    ],
    GAFLM [
        GAFLIDEM OFFSET(31) NUMBITS(1) [],
        GAFLRTRM OFFSET(30) NUMBITS(1) [],
        /// Information label bit 1
        GAFLIFL1 OFFSET(29) NUMBITS(1) [],
        GAFLIDM OFFSET(0) NUMBITS(29) []
    ],
    GAFLP0 [
        /// Receive pointer label
        GAFLPTR OFFSET(16) NUMBITS(16) [],
        /// Receive message buffer valid
        GAFLRMV OFFSET(15) NUMBITS(1) [],
        /// Receive message buffer number
        GAFLRMDP OFFSET(8) NUMBITS(7) [],
        /// Information label bit 0
        GAFLIFL0 OFFSET(7) NUMBITS(1) [],
        /// Minimum DLC
        GAFLDLC OFFSET(0) NUMBITS(4) []
    ],
    GAFLP1 [
        /// Common FIFO targets, three bits per channel
        GAFLFDP_CF OFFSET(8) NUMBITS(6) [],
        /// Receive FIFO targets
        GAFLFDP_RF OFFSET(0) NUMBITS(8) []
    ],
    MSG_ID [
        /// Extended identifier
        IDE OFFSET(31) NUMBITS(1) [],
        /// Remote frame
        RTR OFFSET(30) NUMBITS(1) [],
        /// Store in the transmit history
        THLEN OFFSET(29) NUMBITS(1) [],
        ID OFFSET(0) NUMBITS(29) []
    ],
    MSG_PTR [
        /// Data length code
        DLC OFFSET(28) NUMBITS(4) [],
        /// Receive timestamp
        TS OFFSET(0) NUMBITS(16) []
    ],
    MSG_FD [
        /// Label, copied from GAFLPTR on reception
        PTR OFFSET(16) NUMBITS(16) [],
        /// FD frame format
        FDF OFFSET(2) NUMBITS(1) [],
        /// Bit rate switch
        BRS OFFSET(1) NUMBITS(1) [],
        /// Error state indicator
        ESI OFFSET(0) NUMBITS(1) []
    ]
];

register_bitfields![u8,
    TMC [
        /// Transmit one-shot mode
        TMOM OFFSET(2) NUMBITS(1) [],
        /// Transmit abort request
        TMTAR OFFSET(1) NUMBITS(1) [],
        /// Transmit request
        TMTR OFFSET(0) NUMBITS(1) []
    ],
    TMSTS [
        TMTARM OFFSET(4) NUMBITS(1) [],
        TMTRM OFFSET(3) NUMBITS(1) [],
        /// Transmit result
        TMTRF OFFSET(1) NUMBITS(2) [
            InProgress = 0,
            Aborted = 1,
            Completed = 2,
            CompletedAfterAbortRequest = 3
        ],
        TMTSTS OFFSET(0) NUMBITS(1) []
    ]
];

pub const RCANFD_BASE_ADDR: usize = 0xE802_0000;

pub const RCANFD_BASE: StaticRef<RcanfdRegisters> =
    unsafe { StaticRef::new(RCANFD_BASE_ADDR as *const RcanfdRegisters) };

/// Index into the common FIFO arrays for FIFO `fifo` of channel `channel`,
/// or `None` if either is out of range.
pub const fn common_fifo_index(channel: usize, fifo: usize) -> Option<usize> {
    if channel < CHANNEL_COUNT && fifo < COMMON_FIFOS_PER_CHANNEL {
        Some(channel * COMMON_FIFOS_PER_CHANNEL + fifo)
    } else {
        None
    }
}

/// Index into the transmit buffer arrays for buffer `buffer` of channel
/// `channel`, or `None` if either is out of range.
pub const fn tx_buffer_index(channel: usize, buffer: usize) -> Option<usize> {
    if channel < CHANNEL_COUNT && buffer < TX_BUFFERS_PER_CHANNEL {
        Some(channel * TX_BUFFERS_PER_CHANNEL + buffer)
    } else {
        None
    }
}

/// Payload length in bytes encoded by a CAN FD data length code.
pub const fn dlc_to_len(dlc: u8) -> usize {
    match dlc & 0xf {
        dlc @ 0..=8 => dlc as usize,
        9 => 12,
        10 => 16,
        11 => 20,
        12 => 24,
        13 => 32,
        14 => 48,
        _ => 64,
    }
}

/// Smallest data length code whose payload holds `len` bytes, or `None`
/// if `len` exceeds a CAN FD frame.
pub const fn len_to_dlc(len: usize) -> Option<u8> {
    match len {
        0..=8 => Some(len as u8),
        9..=12 => Some(9),
        13..=16 => Some(10),
        17..=20 => Some(11),
        21..=24 => Some(12),
        25..=32 => Some(13),
        33..=48 => Some(14),
        49..=64 => Some(15),
        _ => None,
    }
}

/// Payload size in bytes selected by the `RFPLS`/`CFPLS`/`RMPLS` codes.
pub const fn payload_size(code: u32) -> usize {
    match code & 0x7 {
        0 => 8,
        1 => 12,
        2 => 16,
        3 => 20,
        4 => 24,
        5 => 32,
        6 => 48,
        _ => 64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn global_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(RcanfdRegisters, gctr), 0x0088);
        assert_eq!(offset_of!(RcanfdRegisters, gaflcfg0), 0x009c);
        assert_eq!(offset_of!(RcanfdRegisters, rmnb), 0x00a4);
        assert_eq!(offset_of!(RcanfdRegisters, rfcc), 0x00b8);
        assert_eq!(offset_of!(RcanfdRegisters, rfpctr), 0x00f8);
        assert_eq!(offset_of!(RcanfdRegisters, cfsts), 0x0178);
        assert_eq!(offset_of!(RcanfdRegisters, cfpctr), 0x01d8);
        assert_eq!(offset_of!(RcanfdRegisters, fests), 0x0238);
        assert_eq!(offset_of!(RcanfdRegisters, tmc), 0x0250);
        assert_eq!(offset_of!(RcanfdRegisters, tmsts), 0x02d0);
        assert_eq!(offset_of!(RcanfdRegisters, tmiec), 0x03d0);
        assert_eq!(offset_of!(RcanfdRegisters, txqcc), 0x03f0);
        assert_eq!(offset_of!(RcanfdRegisters, thlcc), 0x0450);
        assert_eq!(offset_of!(RcanfdRegisters, glockk), 0x047c);
        assert_eq!(offset_of!(RcanfdRegisters, grmcfg), 0x04fc);
        assert_eq!(offset_of!(RcanfdRegisters, rm), 0x2000);
        assert_eq!(offset_of!(RcanfdRegisters, rf), 0x3000);
        assert_eq!(offset_of!(RcanfdRegisters, cf), 0x3400);
        assert_eq!(core::mem::size_of::<RcanfdRegisters>(), 0x8000);
    }

    #[test]
    fn per_channel_strides() {
        use core::mem::size_of;
        assert_eq!(size_of::<ChannelRegisters>(), 0x10);
        assert_eq!(size_of::<FdChannelRegisters>(), 0x20);
        assert_eq!(size_of::<AcceptanceRule>(), 0x10);
        assert_eq!(size_of::<RxMessageBuffer>(), 0x80);
        assert_eq!(size_of::<FifoMessage>(), 0x80);
        assert_eq!(size_of::<TxMessageBuffer>(), 0x80);
        assert_eq!(core::mem::offset_of!(TxMessageBuffer, data), 0x0c);
        assert_eq!(RCANFD_BASE_ADDR, 0xE8020000);
    }

    #[test]
    fn channel_indices() {
        assert_eq!(common_fifo_index(0, 2), Some(2));
        assert_eq!(common_fifo_index(1, 0), Some(3));
        assert_eq!(tx_buffer_index(1, 0), Some(64));
        assert_eq!(tx_buffer_index(1, 63), Some(TX_BUFFER_COUNT - 1));
    }

    #[test]
    fn channel_indices_stay_in_their_channel() {
        assert_eq!(common_fifo_index(0, COMMON_FIFOS_PER_CHANNEL), None);
        assert_eq!(common_fifo_index(CHANNEL_COUNT, 0), None);
        assert_eq!(tx_buffer_index(0, TX_BUFFERS_PER_CHANNEL), None);
        assert_eq!(tx_buffer_index(CHANNEL_COUNT, 0), None);
        assert_eq!(
            common_fifo_index(CHANNEL_COUNT - 1, COMMON_FIFOS_PER_CHANNEL - 1),
            Some(COMMON_FIFO_COUNT - 1)
        );
    }

    #[test]
    fn nominal_bit_timing() {
        // 500 kbit/s from a 40 MHz clock: 80 tq per bit, prescaler 1.
        let ncfg = InMemoryRegister::<u32, NCFG::Register>::new(0);
        ncfg.write(
            NCFG::NBRP.val(0) + NCFG::NSJW.val(15) + NCFG::NTSEG1.val(62) + NCFG::NTSEG2.val(15),
        );
        assert_eq!(ncfg.get(), (15 << 25) | (62 << 17) | (15 << 10));
        assert_eq!(ncfg.read(NCFG::NTSEG1) + ncfg.read(NCFG::NTSEG2) + 3, 80);
    }

    #[test]
    fn channel_mode_transitions() {
        let ctr = InMemoryRegister::<u32, CTR::Register>::new(0x0000_0005);
        assert!(ctr.matches_all(CTR::CHMDC::Reset + CTR::CSLPR::SET));
        ctr.modify(CTR::CSLPR::CLEAR);
        ctr.modify(CTR::CHMDC::Communication);
        assert_eq!(ctr.get(), 0);
    }

    #[test]
    fn transmit_buffer_status() {
        let tmsts = InMemoryRegister::<u8, TMSTS::Register>::new(0b0000_0100);
        assert!(tmsts.matches_all(TMSTS::TMTRF::Completed));
        let tmc = InMemoryRegister::<u8, TMC::Register>::new(0);
        tmc.write(TMC::TMTR::SET);
        assert_eq!(tmc.get(), 1);
    }

    #[test]
    fn message_header_fields() {
        let id = InMemoryRegister::<u32, MSG_ID::Register>::new(0);
        id.write(MSG_ID::IDE::SET + MSG_ID::ID.val(0x1234_5678));
        assert_eq!(id.get(), 0x9234_5678);

        let ptr = InMemoryRegister::<u32, MSG_PTR::Register>::new(0xf000_0abc);
        assert_eq!(dlc_to_len(ptr.read(MSG_PTR::DLC) as u8), 64);
        assert_eq!(ptr.read(MSG_PTR::TS), 0xabc);
    }

    #[test]
    fn dlc_encoding() {
        for dlc in 0..16u8 {
            assert_eq!(len_to_dlc(dlc_to_len(dlc)), Some(dlc));
        }
        assert_eq!(len_to_dlc(13), Some(10));
        assert_eq!(len_to_dlc(65), None);
        assert_eq!(payload_size(RFCC::RFPLS.read(7 << 4)), 64);
        assert_eq!(payload_size(0), 8);
    }
}
