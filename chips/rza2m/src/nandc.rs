// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! NAND flash controller (NANDC).
//!
//! Register map of the NAND flash interface: command sequencer, ECC engine,
//! data FIFO, built-in DMA and the timing registers for asynchronous and
//! source-synchronous devices. Up to eight devices (chip enables) share the
//! controller.

use crate::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

pub const DEVICE_COUNT: usize = 8;

register_structs! {
    pub NandcRegisters {
        /// Command register, writing it starts the selected sequence
        (0x000 => pub command: ReadWrite<u32, COMMAND::Register>),
        /// Control register
        (0x004 => pub control: ReadWrite<u32, CONTROL::Register>),
        /// Status register
        (0x008 => pub status: ReadOnly<u32, STATUS::Register>),
        /// Mask applied to the device status byte
        (0x00c => pub status_mask: ReadWrite<u32, STATUS_MASK::Register>),
        /// Interrupt mask register
        (0x010 => pub int_mask: ReadWrite<u32, INT::Register>),
        /// Interrupt status register
        (0x014 => pub int_status: ReadWrite<u32, INT::Register>),
        /// ECC control register
        (0x018 => pub ecc_ctrl: ReadWrite<u32, ECC_CTRL::Register>),
        /// ECC code offset in the spare area
        (0x01c => pub ecc_offset: ReadWrite<u32, ECC_OFFSET::Register>),
        /// ECC status register
        (0x020 => pub ecc_stat: ReadOnly<u32, ECC_STAT::Register>),
        /// Column and row addresses, address set 0
        (0x024 => pub addr0_col: ReadWrite<u32, ADDR_COL::Register>),
        (0x028 => pub addr0_row: ReadWrite<u32, ADDR_ROW::Register>),
        /// Column and row addresses, address set 1
        (0x02c => pub addr1_col: ReadWrite<u32, ADDR_COL::Register>),
        (0x030 => pub addr1_row: ReadWrite<u32, ADDR_ROW::Register>),
        /// Protection window register
        (0x034 => pub protect: ReadWrite<u32, PROTECT::Register>),
        /// Data FIFO access port
        (0x038 => pub fifo_data: ReadWrite<u32>),
        /// Data register for register-mode transfers
        (0x03c => pub data_reg: ReadWrite<u32>),
        /// Data register transfer size
        (0x040 => pub data_reg_size: ReadWrite<u32, DATA_REG_SIZE::Register>),
        /// Per-device ready/busy polling pointers
        (0x044 => pub dev_ptr: [ReadWrite<u32>; DEVICE_COUNT]),
        /// DMA target address, low and high words
        (0x064 => pub dma_addr_l: ReadWrite<u32>),
        (0x068 => pub dma_addr_h: ReadWrite<u32>),
        /// DMA byte count
        (0x06c => pub dma_cnt: ReadWrite<u32>),
        /// DMA control register
        (0x070 => pub dma_ctrl: ReadWrite<u32, DMA_CTRL::Register>),
        /// Bad block management control register
        (0x074 => pub bbm_ctrl: ReadWrite<u32, BBM_CTRL::Register>),
        (0x078 => _reserved0),
        /// Memory device control register
        (0x080 => pub mem_ctrl: ReadWrite<u32, MEM_CTRL::Register>),
        /// Data transfer size for page-size independent transfers
        (0x084 => pub data_size: ReadWrite<u32, DATA_SIZE::Register>),
        /// Asynchronous interface timings
        (0x088 => pub timings_asyn: ReadWrite<u32, TIMINGS_ASYN::Register>),
        /// Source-synchronous interface timings
        (0x08c => pub timings_syn: ReadWrite<u32, TIMINGS_SYN::Register>),
        /// Command sequence timing registers
        (0x090 => pub time_seq_0: ReadWrite<u32, TIME_SEQ_0::Register>),
        (0x094 => pub time_seq_1: ReadWrite<u32, TIME_SEQ_1::Register>),
        /// Generic sequence timing registers
        (0x098 => pub time_gen_seq_0: ReadWrite<u32, TIME_GEN_SEQ::Register>),
        (0x09c => pub time_gen_seq_1: ReadWrite<u32, TIME_GEN_SEQ::Register>),
        (0x0a0 => pub time_gen_seq_2: ReadWrite<u32, TIME_GEN_SEQ::Register>),
        (0x0a4 => _reserved1),
        /// FIFO initialization register
        (0x0b0 => pub fifo_init: WriteOnly<u32, FIFO_INIT::Register>),
        /// FIFO state register
        (0x0b4 => pub fifo_state: ReadOnly<u32, FIFO_STATE::Register>),
        /// Generic command sequence control register
        (0x0b8 => pub gen_seq_ctrl: ReadWrite<u32, GEN_SEQ_CTRL::Register>),
        /// Multi-LUN control register
        (0x0bc => pub mlun: ReadWrite<u32, MLUN::Register>),
        /// Per-device size registers
        (0x0c0 => pub dev_size: [ReadWrite<u32, DEV_SIZE::Register>; DEVICE_COUNT]),
        /// Column count and sector count of the super-sequence engine
        (0x0e0 => pub ss_ccnt0: ReadWrite<u32>),
        (0x0e4 => pub ss_ccnt1: ReadWrite<u32>),
        (0x0e8 => pub ss_scnt: ReadWrite<u32>),
        (0x0ec => pub ss_addr_dev_ctrl: ReadWrite<u32>),
        /// Super-sequence command opcodes
        (0x0f0 => pub ss_cmd: [ReadWrite<u32>; 4]),
        (0x100 => pub ss_addr: ReadWrite<u32>),
        (0x104 => pub ss_msel: ReadWrite<u32>),
        (0x108 => pub ss_req: ReadWrite<u32>),
        (0x10c => pub ss_brk: ReadWrite<u32>),
        (0x110 => _reserved2),
        /// DMA trigger level register
        (0x114 => pub dma_tlvl: ReadWrite<u32, DMA_TLVL::Register>),
        (0x118 => _reserved3),
        /// Generic sequence timing register 3
        (0x134 => pub time_gen_seq_3: ReadWrite<u32, TIME_GEN_SEQ::Register>),
        (0x138 => @END),
    }
}

const _: () = assert!(core::mem::offset_of!(NandcRegisters, dev_ptr) == 0x044);
const _: () = assert!(core::mem::offset_of!(NandcRegisters, mem_ctrl) == 0x080);
const _: () = assert!(core::mem::offset_of!(NandcRegisters, dev_size) == 0x0c0);

register_bitfields![u32,
    COMMAND [
        /// Third command opcode
        CMD_2 OFFSET(24) NUMBITS(8) [],
        /// Second (or fourth) command opcode
        CMD_1_3 OFFSET(16) NUMBITS(8) [],
        /// First command opcode
        CMD_0 OFFSET(8) NUMBITS(8) [],
        /// Address set: 0 = ADDR0, 1 = ADDR1
        ADDR_SEL OFFSET(7) NUMBITS(1) [],
        /// Data path: 0 = FIFO/DMA, 1 = data register
        INPUT_SEL OFFSET(6) NUMBITS(1) [
            Fifo = 0,
            DataRegister = 1
        ],
        /// Command sequence number
        CMD_SEQ OFFSET(0) NUMBITS(6) []
    ],
    CONTROL [
        /// Read the status byte automatically after each sequence
        AUTO_READ_STAT_EN OFFSET(23) NUMBITS(1) [],
        MLUN_EN OFFSET(22) NUMBITS(1) [],
        /// Small-block device addressing
        SMALL_BLOCK_EN OFFSET(21) NUMBITS(1) [],
        ADDR1_AUTO_INCR OFFSET(17) NUMBITS(1) [],
        ADDR0_AUTO_INCR OFFSET(16) NUMBITS(1) [],
        /// Write protection window enable
        PROT_EN OFFSET(14) NUMBITS(1) [],
        /// Bad block management enable
        BBM_EN OFFSET(13) NUMBITS(1) [],
        /// Data bus width
        IO_WIDTH OFFSET(12) NUMBITS(1) [
            Bits8 = 0,
            Bits16 = 1
        ],
        /// Pages per block
        BLOCK_SIZE OFFSET(6) NUMBITS(2) [
            Pages32 = 0,
            Pages64 = 1,
            Pages128 = 2,
            Pages256 = 3
        ],
        ECC_EN OFFSET(5) NUMBITS(1) [],
        /// Global interrupt enable
        INT_EN OFFSET(4) NUMBITS(1) [],
        /// ECC codeword size
        ECC_BLOCK_SIZE OFFSET(1) NUMBITS(2) [
            Bytes256 = 0,
            Bytes512 = 1,
            Bytes1024 = 2
        ],
        READ_STATUS_EN OFFSET(0) NUMBITS(1) []
    ],
    STATUS [
        /// ID of the last command sequence
        CMD_ID OFFSET(16) NUMBITS(8) [],
        /// Data register holds valid data
        DATA_REG_ST OFFSET(10) NUMBITS(1) [],
        DATASIZE_ERROR_ST OFFSET(9) NUMBITS(1) [],
        /// Controller busy
        CTRL_STAT OFFSET(8) NUMBITS(1) [],
        /// Device ready/busy, one bit per chip enable
        MEM_ST OFFSET(0) NUMBITS(8) []
    ],
    STATUS_MASK [
        /// Status bit signalling an error
        ERROR_MASK OFFSET(8) NUMBITS(8) [],
        /// Status bit signalling ready
        STATE_MASK OFFSET(0) NUMBITS(8) []
    ],
    INT [
        /// ECC threshold exceeded, one bit per device
        ECC_INT OFFSET(24) NUMBITS(8) [],
        /// Status error, one bit per device
        STAT_ERR_INT OFFSET(16) NUMBITS(8) [],
        /// Device ready, one bit per device
        MEM_RDY_INT OFFSET(8) NUMBITS(8) [],
        /// Page size error
        PG_SZ_ERR_INT OFFSET(6) NUMBITS(1) [],
        /// DMA transfer finished
        DMA_INT OFFSET(3) NUMBITS(1) [],
        /// Data register ready
        DATA_REG_INT OFFSET(2) NUMBITS(1) [],
        /// Command sequence finished
        CMD_END_INT OFFSET(1) NUMBITS(1) [],
        /// Protected area access
        PROT_INT OFFSET(0) NUMBITS(1) []
    ],
    ECC_CTRL [
        /// ECC data source
        ECC_SEL OFFSET(16) NUMBITS(2) [],
        /// Corrected bit threshold for ECC_INT
        ERR_THRESHOLD OFFSET(8) NUMBITS(6) [],
        /// Correction capability
        ECC_CAP OFFSET(0) NUMBITS(3) [
            Bits2 = 0,
            Bits4 = 1,
            Bits8 = 2,
            Bits16 = 3,
            Bits24 = 4,
            Bits32 = 5
        ]
    ],
    ECC_OFFSET [
        ECC_OFFSET OFFSET(0) NUMBITS(16) []
    ],
    ECC_STAT [
        /// Threshold exceeded, one bit per device
        ECC_OVER OFFSET(16) NUMBITS(8) [],
        /// Uncorrectable error, one bit per device
        ECC_UNC OFFSET(8) NUMBITS(8) [],
        /// Correctable error, one bit per device
        ECC_ERROR OFFSET(0) NUMBITS(8) []
    ],
    ADDR_COL [
        COL OFFSET(0) NUMBITS(16) []
    ],
    ADDR_ROW [
        ROW OFFSET(0) NUMBITS(24) []
    ],
    PROTECT [
        /// Last protected block
        PROT_UP OFFSET(16) NUMBITS(16) [],
        /// First protected block
        PROT_DOWN OFFSET(0) NUMBITS(16) []
    ],
    DATA_REG_SIZE [
        /// Bytes moved through the data register, minus one
        SIZE OFFSET(0) NUMBITS(2) []
    ],
    DMA_CTRL [
        DMA_START OFFSET(7) NUMBITS(1) [],
        /// 0 = scatter-gather, 1 = SFR mode
        DMA_MODE OFFSET(5) NUMBITS(1) [],
        DMA_BURST OFFSET(2) NUMBITS(3) [
            Incr4 = 0,
            Stream = 1,
            Single = 2,
            Incr = 3,
            Incr8 = 4,
            Incr16 = 5
        ],
        ERR_FLAG OFFSET(1) NUMBITS(1) [],
        DMA_READY OFFSET(0) NUMBITS(1) []
    ],
    BBM_CTRL [
        /// Remap table address
        RMP_INIT OFFSET(0) NUMBITS(1) []
    ],
    MEM_CTRL [
        /// Write protect, one bit per device
        MEM_WP OFFSET(8) NUMBITS(8) [],
        /// Selected chip enable
        MEM_CE OFFSET(0) NUMBITS(3) []
    ],
    DATA_SIZE [
        SIZE OFFSET(0) NUMBITS(15) []
    ],
    TIMINGS_ASYN [
        /// RE/WE high hold time in controller clocks
        TRWH OFFSET(4) NUMBITS(4) [],
        /// RE/WE pulse width in controller clocks
        TRWP OFFSET(0) NUMBITS(4) []
    ],
    TIMINGS_SYN [
        TCAD OFFSET(0) NUMBITS(4) []
    ],
    TIME_SEQ_0 [
        T_WHR OFFSET(24) NUMBITS(6) [],
        T_RHW OFFSET(16) NUMBITS(6) [],
        T_ADL OFFSET(8) NUMBITS(6) [],
        T_CCS OFFSET(0) NUMBITS(6) []
    ],
    TIME_SEQ_1 [
        T_RR OFFSET(8) NUMBITS(6) [],
        T_WB OFFSET(0) NUMBITS(6) []
    ],
    TIME_GEN_SEQ [
        T3 OFFSET(24) NUMBITS(6) [],
        T2 OFFSET(16) NUMBITS(6) [],
        T1 OFFSET(8) NUMBITS(6) [],
        T0 OFFSET(0) NUMBITS(6) []
    ],
    FIFO_INIT [
        RESET OFFSET(0) NUMBITS(1) []
    ],
    FIFO_STATE [
        DF_W_EMPTY OFFSET(6) NUMBITS(1) [],
        DF_R_FULL OFFSET(5) NUMBITS(1) [],
        CF_ACCPT_W OFFSET(4) NUMBITS(1) [],
        CF_ACCPT_R OFFSET(3) NUMBITS(1) [],
        CF_EMPTY OFFSET(2) NUMBITS(1) [],
        DF_W_FULL OFFSET(1) NUMBITS(1) [],
        DF_R_EMPTY OFFSET(0) NUMBITS(1) []
    ],
    GEN_SEQ_CTRL [
        /// Fourth command opcode of the generic sequence
        CMD3 OFFSET(16) NUMBITS(8) [],
        IMD_SEQ OFFSET(15) NUMBITS(1) [],
        DELAY_EN OFFSET(13) NUMBITS(2) [],
        DATA_EN OFFSET(12) NUMBITS(1) [],
        ROW_A1 OFFSET(10) NUMBITS(2) [],
        ROW_A0 OFFSET(8) NUMBITS(2) [],
        COL_A1 OFFSET(6) NUMBITS(2) [],
        COL_A0 OFFSET(4) NUMBITS(2) [],
        CMD3_EN OFFSET(3) NUMBITS(1) [],
        CMD2_EN OFFSET(2) NUMBITS(1) [],
        CMD1_EN OFFSET(1) NUMBITS(1) [],
        CMD0_EN OFFSET(0) NUMBITS(1) []
    ],
    MLUN [
        /// Row address bits selecting the LUN
        MLUN_IDX OFFSET(0) NUMBITS(3) []
    ],
    DEV_SIZE [
        /// Device size in blocks
        DEV_SIZE OFFSET(0) NUMBITS(12) []
    ],
    DMA_TLVL [
        /// FIFO level that triggers a DMA burst
        DMA_TLVL OFFSET(0) NUMBITS(8) []
    ]
];

pub const NANDC_BASE_ADDR: usize = 0xE821_8000;

pub const NANDC_BASE: StaticRef<NandcRegisters> =
    unsafe { StaticRef::new(NANDC_BASE_ADDR as *const NandcRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(NandcRegisters, ecc_stat), 0x020);
        assert_eq!(offset_of!(NandcRegisters, addr1_row), 0x030);
        assert_eq!(offset_of!(NandcRegisters, fifo_data), 0x038);
        assert_eq!(offset_of!(NandcRegisters, dma_addr_l), 0x064);
        assert_eq!(offset_of!(NandcRegisters, bbm_ctrl), 0x074);
        assert_eq!(offset_of!(NandcRegisters, time_gen_seq_2), 0x0a0);
        assert_eq!(offset_of!(NandcRegisters, fifo_init), 0x0b0);
        assert_eq!(offset_of!(NandcRegisters, ss_ccnt0), 0x0e0);
        assert_eq!(offset_of!(NandcRegisters, ss_cmd), 0x0f0);
        assert_eq!(offset_of!(NandcRegisters, ss_brk), 0x10c);
        assert_eq!(offset_of!(NandcRegisters, dma_tlvl), 0x114);
        assert_eq!(offset_of!(NandcRegisters, time_gen_seq_3), 0x134);
        assert_eq!(NANDC_BASE_ADDR, 0xE8218000);
    }

    #[test]
    fn page_read_command() {
        // READ PAGE: 0x00, five address cycles, 0x30.
        let command = InMemoryRegister::<u32, COMMAND::Register>::new(0);
        command.write(
            COMMAND::CMD_0.val(0x00)
                + COMMAND::CMD_1_3.val(0x30)
                + COMMAND::INPUT_SEL::Fifo
                + COMMAND::CMD_SEQ.val(0x2a),
        );
        assert_eq!(command.get(), 0x0030_002a);
    }

    #[test]
    fn control_and_ecc() {
        let control = InMemoryRegister::<u32, CONTROL::Register>::new(0);
        control.write(
            CONTROL::ECC_EN::SET
                + CONTROL::BLOCK_SIZE::Pages64
                + CONTROL::ECC_BLOCK_SIZE::Bytes512
                + CONTROL::INT_EN::SET,
        );
        assert_eq!(control.get(), 0x72);

        let ecc = InMemoryRegister::<u32, ECC_STAT::Register>::new(0x0000_0201);
        assert_eq!(ecc.read(ECC_STAT::ECC_ERROR), 1);
        assert_eq!(ecc.read(ECC_STAT::ECC_UNC), 2);
    }
}
