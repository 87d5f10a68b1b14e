use super::op::{Op, OperandKind};
use super::register::{
    decode_condition, decode_pair, decode_register, decode_stack_pair, RegPair, RegisterOrMemory,
};
use crate::memory::Memory;

#[cfg(test)]
#[path = "./decoder_test.rs"]
mod decoder_test;

/// One row of the 256-entry opcode table: how many bytes the instruction
/// occupies, how to print its trailing operand (if any), the fully
/// resolved mnemonic text (register/pair/condition names are baked in,
/// since they are a pure function of the opcode byte alone), and which
/// semantic family the interpreter should dispatch to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpCodeEntry {
    pub length: u8,
    pub operand_kind: OperandKind,
    pub mnemonic: String,
    pub op: Op,
}

fn entry(length: u8, mnemonic: impl Into<String>, operand_kind: OperandKind, op: Op) -> OpCodeEntry {
    OpCodeEntry { length, operand_kind, mnemonic: mnemonic.into(), op }
}

fn mov_entry(opcode: u8) -> OpCodeEntry {
    let dst = decode_register(opcode, 3);
    let src = decode_register(opcode, 0);
    entry(1, format!("MOV {},{}", dst.as_str(), src.as_str()), OperandKind::None, Op::Mov)
}

fn alu_entry(opcode: u8, name: &str, op: Op) -> OpCodeEntry {
    let src = decode_register(opcode, 0);
    entry(1, format!("{} {}", name, src.as_str()), OperandKind::None, op)
}

fn inr_dcr_entry(opcode: u8, name: &str, op: Op) -> OpCodeEntry {
    let r = decode_register(opcode, 3);
    entry(1, format!("{} {}", name, r.as_str()), OperandKind::None, op)
}

fn mvi_entry(opcode: u8) -> OpCodeEntry {
    let r = decode_register(opcode, 3);
    entry(2, format!("MVI {}", r.as_str()), OperandKind::Immediate, Op::Mvi)
}

fn lxi_entry(opcode: u8) -> OpCodeEntry {
    let p = decode_pair(opcode);
    entry(3, format!("LXI {}", p.as_str()), OperandKind::Immediate, Op::Lxi)
}

fn inx_dcx_entry(opcode: u8, name: &str, op: Op) -> OpCodeEntry {
    let p = decode_pair(opcode);
    entry(1, format!("{} {}", name, p.as_str()), OperandKind::None, op)
}

fn dad_entry(opcode: u8) -> OpCodeEntry {
    let p = decode_pair(opcode);
    entry(1, format!("DAD {}", p.as_str()), OperandKind::None, Op::Dad)
}

fn stax_entry(opcode: u8) -> OpCodeEntry {
    let p = if opcode == 0x02 { RegPair::Bc } else { RegPair::De };
    entry(1, format!("STAX {}", p.as_str()), OperandKind::None, Op::Stax)
}

fn ldax_entry(opcode: u8) -> OpCodeEntry {
    let p = if opcode == 0x0A { RegPair::Bc } else { RegPair::De };
    entry(1, format!("LDAX {}", p.as_str()), OperandKind::None, Op::Ldax)
}

fn rcc_entry(opcode: u8) -> OpCodeEntry {
    let cond = decode_condition(opcode);
    entry(1, format!("R{}", cond.as_str()), OperandKind::None, Op::Rcc)
}

fn jcc_entry(opcode: u8) -> OpCodeEntry {
    let cond = decode_condition(opcode);
    entry(3, format!("J{}", cond.as_str()), OperandKind::Address, Op::Jcc)
}

fn ccc_entry(opcode: u8) -> OpCodeEntry {
    let cond = decode_condition(opcode);
    entry(3, format!("C{}", cond.as_str()), OperandKind::Address, Op::Ccc)
}

fn rst_entry(opcode: u8) -> OpCodeEntry {
    let n = (opcode >> 3) & 0x7;
    entry(1, format!("RST {}", n), OperandKind::None, Op::Rst)
}

fn push_entry(opcode: u8) -> OpCodeEntry {
    let p = decode_stack_pair(opcode);
    entry(1, format!("PUSH {}", p.as_str()), OperandKind::None, Op::Push)
}

fn pop_entry(opcode: u8) -> OpCodeEntry {
    let p = decode_stack_pair(opcode);
    entry(1, format!("POP {}", p.as_str()), OperandKind::None, Op::Pop)
}

/// Computes the opcode-table row for a single byte. This is the single
/// source of truth for instruction length/mnemonic/family; `build_table`
/// just calls it 256 times up front.
pub fn decode_opcode(opcode: u8) -> OpCodeEntry {
    match opcode {
        0x00 => entry(1, "NOP", OperandKind::None, Op::Nop),
        0x07 => entry(1, "RLC", OperandKind::None, Op::Rlc),
        0x0F => entry(1, "RRC", OperandKind::None, Op::Rrc),
        0x17 => entry(1, "RAL", OperandKind::None, Op::Ral),
        0x1F => entry(1, "RAR", OperandKind::None, Op::Rar),
        0x22 => entry(3, "SHLD", OperandKind::Address, Op::Shld),
        0x27 => entry(1, "DAA", OperandKind::None, Op::Unimplemented),
        0x2A => entry(3, "LHLD", OperandKind::Address, Op::Lhld),
        0x2F => entry(1, "CMA", OperandKind::None, Op::Cma),
        0x32 => entry(3, "STA", OperandKind::Address, Op::Sta),
        0x37 => entry(1, "STC", OperandKind::None, Op::Stc),
        0x3A => entry(3, "LDA", OperandKind::Address, Op::Lda),
        0x3F => entry(1, "CMC", OperandKind::None, Op::Cmc),
        0x76 => entry(1, "HLT", OperandKind::None, Op::Halt),
        0xC3 => entry(3, "JMP", OperandKind::Address, Op::Jmp),
        0xC6 => entry(2, "ADI", OperandKind::Immediate, Op::Adi),
        0xC9 => entry(1, "RET", OperandKind::None, Op::Ret),
        0xCD => entry(3, "CALL", OperandKind::Address, Op::Call),
        0xCE => entry(2, "ACI", OperandKind::Immediate, Op::Aci),
        0xD3 => entry(2, "OUT", OperandKind::Immediate, Op::Out),
        0xD6 => entry(2, "SUI", OperandKind::Immediate, Op::Sui),
        0xDB => entry(2, "IN", OperandKind::Immediate, Op::In),
        0xDE => entry(2, "SBI", OperandKind::Immediate, Op::Unimplemented),
        0xE3 => entry(1, "XTHL", OperandKind::None, Op::Xthl),
        0xE6 => entry(2, "ANI", OperandKind::Immediate, Op::Ani),
        0xE9 => entry(1, "PCHL", OperandKind::None, Op::Pchl),
        0xEB => entry(1, "XCHG", OperandKind::None, Op::Xchg),
        0xEE => entry(2, "XRI", OperandKind::Immediate, Op::Xri),
        0xF3 => entry(1, "DI", OperandKind::None, Op::Unimplemented),
        0xF6 => entry(2, "ORI", OperandKind::Immediate, Op::Ori),
        0xF9 => entry(1, "SPHL", OperandKind::None, Op::Sphl),
        0xFB => entry(1, "EI", OperandKind::None, Op::Unimplemented),
        0xFE => entry(2, "CPI", OperandKind::Immediate, Op::Cpi),

        0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 | 0xCB | 0xD9 | 0xDD | 0xED | 0xFD => {
            entry(1, "UNKNOWN", OperandKind::None, Op::Unknown)
        }

        0x40..=0x7F => mov_entry(opcode),
        0x80..=0x87 => alu_entry(opcode, "ADD", Op::Add),
        0x88..=0x8F => alu_entry(opcode, "ADC", Op::Adc),
        0x90..=0x97 => alu_entry(opcode, "SUB", Op::Sub),
        0x98..=0x9F => alu_entry(opcode, "SBB", Op::Unimplemented),
        0xA0..=0xA7 => alu_entry(opcode, "ANA", Op::Ana),
        0xA8..=0xAF => alu_entry(opcode, "XRA", Op::Xra),
        0xB0..=0xB7 => alu_entry(opcode, "ORA", Op::Ora),
        0xB8..=0xBF => alu_entry(opcode, "CMP", Op::Cmp),

        _ if opcode & 0xC7 == 0x04 => inr_dcr_entry(opcode, "INR", Op::Inr),
        _ if opcode & 0xC7 == 0x05 => inr_dcr_entry(opcode, "DCR", Op::Dcr),
        _ if opcode & 0xC7 == 0x06 => mvi_entry(opcode),
        _ if opcode & 0xCF == 0x01 => lxi_entry(opcode),
        _ if opcode & 0xCF == 0x03 => inx_dcx_entry(opcode, "INX", Op::Inx),
        _ if opcode & 0xCF == 0x0B => inx_dcx_entry(opcode, "DCX", Op::Dcx),
        _ if opcode & 0xCF == 0x09 => dad_entry(opcode),
        _ if opcode & 0xCF == 0x02 => stax_entry(opcode),
        _ if opcode & 0xCF == 0x0A => ldax_entry(opcode),
        _ if opcode & 0xC7 == 0xC0 => rcc_entry(opcode),
        _ if opcode & 0xC7 == 0xC2 => jcc_entry(opcode),
        _ if opcode & 0xC7 == 0xC4 => ccc_entry(opcode),
        _ if opcode & 0xC7 == 0xC7 => rst_entry(opcode),
        _ if opcode & 0xCF == 0xC5 => push_entry(opcode),
        _ if opcode & 0xCF == 0xC1 => pop_entry(opcode),

        _ => unreachable!("every byte 0x00-0xFF is covered by the patterns above"),
    }
}

/// Builds the full, immutable 256-row opcode table once.
pub fn build_table() -> Vec<OpCodeEntry> {
    (0..=255u16).map(|b| decode_opcode(b as u8)).collect()
}

/// Stateless formatter for the disassembly line format described in the
/// external-interfaces section of this crate's design: `AAAA: BB BB BB
/// MNEMONIC [#|$]HHLL`.
pub struct Decoder {
    table: Vec<OpCodeEntry>,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder { table: build_table() }
    }
}

impl Decoder {
    pub fn new() -> Self {
        Decoder::default()
    }

    pub fn entry(&self, opcode: u8) -> &OpCodeEntry {
        &self.table[opcode as usize]
    }

    fn byte_col(b: Option<u8>) -> String {
        match b {
            Some(v) => format!("{:02X}", v),
            None => "  ".to_string(),
        }
    }

    /// Renders one disassembly line for the instruction at `addr`, and
    /// returns its length in bytes so the caller can advance.
    pub fn line_at(&self, addr: u16, memory: &Memory) -> (String, u8) {
        let opcode = memory.read_u8(addr);
        let row = self.entry(opcode);

        let op1 = if row.length >= 2 { Some(memory.read_u8(addr.wrapping_add(1))) } else { None };
        let op2 = if row.length >= 3 { Some(memory.read_u8(addr.wrapping_add(2))) } else { None };

        let bytes = format!("{} {} {}", Self::byte_col(Some(opcode)), Self::byte_col(op1), Self::byte_col(op2));

        let text = match row.operand_kind {
            OperandKind::None => row.mnemonic.clone(),
            OperandKind::Immediate if row.length == 2 => {
                format!("{} #{:02X}", row.mnemonic, op1.unwrap_or(0))
            }
            OperandKind::Immediate => {
                let value = u16::from(op2.unwrap_or(0)) << 8 | u16::from(op1.unwrap_or(0));
                format!("{} #{:04X}", row.mnemonic, value)
            }
            OperandKind::Address => {
                let value = u16::from(op2.unwrap_or(0)) << 8 | u16::from(op1.unwrap_or(0));
                format!("{} ${:04X}", row.mnemonic, value)
            }
        };

        (format!("{:04X}: {}  {}", addr, bytes, text), row.length)
    }

    /// Walks the entire 64 KiB address space from 0, one line per
    /// instruction, per the disassemble() contract.
    pub fn disassemble(&self, memory: &Memory) -> String {
        let mut out = String::new();
        let mut addr: u32 = 0;
        while addr < 0x1_0000 {
            let (line, length) = self.line_at(addr as u16, memory);
            out.push_str(&line);
            out.push('\n');
            addr += u32::from(length);
        }
        out
    }
}
