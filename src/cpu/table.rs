/*!
table.rs - Static 256-entry opcode decode table.

Purpose
=======
Maps every opcode byte to its (mnemonic, addressing mode) pair. The table
is built at compile time by a `const fn`, so `decode` is a single indexed
load with no branching and no lazy initialization.

Coverage
========
- All 151 documented NMOS 6502 opcodes.
- The undocumented combined operations LAX, SAX, DCP, ISB, SLO, RLA, SRE
  and RRA in every addressing mode real silicon provides.
- $EB, an undocumented alias of SBC #imm.
- Undocumented multi-byte NOPs, decoded with their real addressing modes so
  operand bytes are consumed and timed correctly.
- Everything else (KIL/JAM, ANC, ALR, ARR, XAA, AXS, AHX, TAS, LAS, SHX,
  SHY, LXA) decodes to a one-byte implied NOP.

Penalty assignment
==================
Indexed modes carry `Penalty::OnPageCross` for reads and
`Penalty::Always` for stores and read-modify-write forms.
*/

use crate::cpu::instruction::AddressingMode::*;
use crate::cpu::instruction::Mnemonic::*;
use crate::cpu::instruction::Penalty::{Always, OnPageCross};
use crate::cpu::instruction::{AddressingMode, Instruction, Mnemonic};

/// Opcode used for bytes without defined behavior.
pub const UNDEFINED: Instruction = Instruction::new(Nop, Implicit);

/// The decode table, indexed by opcode.
pub static OPCODES: [Instruction; 256] = build_table();

/// Decode an opcode byte. Total over all 256 values.
#[inline]
pub fn decode(opcode: u8) -> Instruction {
    OPCODES[opcode as usize]
}

/// True when `opcode` has no defined behavior and runs as a one-byte NOP.
///
/// The documented $EA and the undocumented one-byte NOP aliases are not
/// counted as undefined.
pub fn is_undefined(opcode: u8) -> bool {
    decode(opcode) == UNDEFINED && !matches!(opcode, 0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xEA | 0xFA)
}

const fn build_table() -> [Instruction; 256] {
    let mut table = [UNDEFINED; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = entry(i as u8);
        i += 1;
    }
    table
}

#[inline]
const fn op(mnemonic: Mnemonic, mode: AddressingMode) -> Instruction {
    Instruction::new(mnemonic, mode)
}

const fn entry(opcode: u8) -> Instruction {
    match opcode {
        // Loads
        0xA9 => op(Lda, Immediate),
        0xA5 => op(Lda, ZeroPage),
        0xB5 => op(Lda, ZeroPageX),
        0xAD => op(Lda, Absolute),
        0xBD => op(Lda, AbsoluteX(OnPageCross)),
        0xB9 => op(Lda, AbsoluteY(OnPageCross)),
        0xA1 => op(Lda, IndexedIndirect),
        0xB1 => op(Lda, IndirectIndexed(OnPageCross)),
        0xA2 => op(Ldx, Immediate),
        0xA6 => op(Ldx, ZeroPage),
        0xB6 => op(Ldx, ZeroPageY),
        0xAE => op(Ldx, Absolute),
        0xBE => op(Ldx, AbsoluteY(OnPageCross)),
        0xA0 => op(Ldy, Immediate),
        0xA4 => op(Ldy, ZeroPage),
        0xB4 => op(Ldy, ZeroPageX),
        0xAC => op(Ldy, Absolute),
        0xBC => op(Ldy, AbsoluteX(OnPageCross)),

        // Stores
        0x85 => op(Sta, ZeroPage),
        0x95 => op(Sta, ZeroPageX),
        0x8D => op(Sta, Absolute),
        0x9D => op(Sta, AbsoluteX(Always)),
        0x99 => op(Sta, AbsoluteY(Always)),
        0x81 => op(Sta, IndexedIndirect),
        0x91 => op(Sta, IndirectIndexed(Always)),
        0x86 => op(Stx, ZeroPage),
        0x96 => op(Stx, ZeroPageY),
        0x8E => op(Stx, Absolute),
        0x84 => op(Sty, ZeroPage),
        0x94 => op(Sty, ZeroPageX),
        0x8C => op(Sty, Absolute),

        // Register transfers
        0xAA => op(Tax, Implicit),
        0xBA => op(Tsx, Implicit),
        0xA8 => op(Tay, Implicit),
        0x8A => op(Txa, Implicit),
        0x9A => op(Txs, Implicit),
        0x98 => op(Tya, Implicit),

        // Stack
        0x48 => op(Pha, Implicit),
        0x08 => op(Php, Implicit),
        0x68 => op(Pla, Implicit),
        0x28 => op(Plp, Implicit),

        // Logical
        0x29 => op(And, Immediate),
        0x25 => op(And, ZeroPage),
        0x35 => op(And, ZeroPageX),
        0x2D => op(And, Absolute),
        0x3D => op(And, AbsoluteX(OnPageCross)),
        0x39 => op(And, AbsoluteY(OnPageCross)),
        0x21 => op(And, IndexedIndirect),
        0x31 => op(And, IndirectIndexed(OnPageCross)),
        0x49 => op(Eor, Immediate),
        0x45 => op(Eor, ZeroPage),
        0x55 => op(Eor, ZeroPageX),
        0x4D => op(Eor, Absolute),
        0x5D => op(Eor, AbsoluteX(OnPageCross)),
        0x59 => op(Eor, AbsoluteY(OnPageCross)),
        0x41 => op(Eor, IndexedIndirect),
        0x51 => op(Eor, IndirectIndexed(OnPageCross)),
        0x09 => op(Ora, Immediate),
        0x05 => op(Ora, ZeroPage),
        0x15 => op(Ora, ZeroPageX),
        0x0D => op(Ora, Absolute),
        0x1D => op(Ora, AbsoluteX(OnPageCross)),
        0x19 => op(Ora, AbsoluteY(OnPageCross)),
        0x01 => op(Ora, IndexedIndirect),
        0x11 => op(Ora, IndirectIndexed(OnPageCross)),
        0x24 => op(Bit, ZeroPage),
        0x2C => op(Bit, Absolute),

        // Arithmetic
        0x69 => op(Adc, Immediate),
        0x65 => op(Adc, ZeroPage),
        0x75 => op(Adc, ZeroPageX),
        0x6D => op(Adc, Absolute),
        0x7D => op(Adc, AbsoluteX(OnPageCross)),
        0x79 => op(Adc, AbsoluteY(OnPageCross)),
        0x61 => op(Adc, IndexedIndirect),
        0x71 => op(Adc, IndirectIndexed(OnPageCross)),
        0xE9 => op(Sbc, Immediate),
        0xE5 => op(Sbc, ZeroPage),
        0xF5 => op(Sbc, ZeroPageX),
        0xED => op(Sbc, Absolute),
        0xFD => op(Sbc, AbsoluteX(OnPageCross)),
        0xF9 => op(Sbc, AbsoluteY(OnPageCross)),
        0xE1 => op(Sbc, IndexedIndirect),
        0xF1 => op(Sbc, IndirectIndexed(OnPageCross)),
        0xEB => op(Sbc, Immediate),

        // Compare
        0xC9 => op(Cmp, Immediate),
        0xC5 => op(Cmp, ZeroPage),
        0xD5 => op(Cmp, ZeroPageX),
        0xCD => op(Cmp, Absolute),
        0xDD => op(Cmp, AbsoluteX(OnPageCross)),
        0xD9 => op(Cmp, AbsoluteY(OnPageCross)),
        0xC1 => op(Cmp, IndexedIndirect),
        0xD1 => op(Cmp, IndirectIndexed(OnPageCross)),
        0xE0 => op(Cpx, Immediate),
        0xE4 => op(Cpx, ZeroPage),
        0xEC => op(Cpx, Absolute),
        0xC0 => op(Cpy, Immediate),
        0xC4 => op(Cpy, ZeroPage),
        0xCC => op(Cpy, Absolute),

        // Increment / decrement
        0xE6 => op(Inc, ZeroPage),
        0xF6 => op(Inc, ZeroPageX),
        0xEE => op(Inc, Absolute),
        0xFE => op(Inc, AbsoluteX(Always)),
        0xE8 => op(Inx, Implicit),
        0xC8 => op(Iny, Implicit),
        0xC6 => op(Dec, ZeroPage),
        0xD6 => op(Dec, ZeroPageX),
        0xCE => op(Dec, Absolute),
        0xDE => op(Dec, AbsoluteX(Always)),
        0xCA => op(Dex, Implicit),
        0x88 => op(Dey, Implicit),

        // Shifts / rotates
        0x0A => op(Asl, Accumulator),
        0x06 => op(Asl, ZeroPage),
        0x16 => op(Asl, ZeroPageX),
        0x0E => op(Asl, Absolute),
        0x1E => op(Asl, AbsoluteX(Always)),
        0x4A => op(Lsr, Accumulator),
        0x46 => op(Lsr, ZeroPage),
        0x56 => op(Lsr, ZeroPageX),
        0x4E => op(Lsr, Absolute),
        0x5E => op(Lsr, AbsoluteX(Always)),
        0x2A => op(Rol, Accumulator),
        0x26 => op(Rol, ZeroPage),
        0x36 => op(Rol, ZeroPageX),
        0x2E => op(Rol, Absolute),
        0x3E => op(Rol, AbsoluteX(Always)),
        0x6A => op(Ror, Accumulator),
        0x66 => op(Ror, ZeroPage),
        0x76 => op(Ror, ZeroPageX),
        0x6E => op(Ror, Absolute),
        0x7E => op(Ror, AbsoluteX(Always)),

        // Jumps / returns
        0x4C => op(Jmp, Absolute),
        0x6C => op(Jmp, Indirect),
        0x20 => op(Jsr, Absolute),
        0x60 => op(Rts, Implicit),
        0x40 => op(Rti, Implicit),

        // Branches
        0x90 => op(Bcc, Relative),
        0xB0 => op(Bcs, Relative),
        0xF0 => op(Beq, Relative),
        0x30 => op(Bmi, Relative),
        0xD0 => op(Bne, Relative),
        0x10 => op(Bpl, Relative),
        0x50 => op(Bvc, Relative),
        0x70 => op(Bvs, Relative),

        // Flag control
        0x18 => op(Clc, Implicit),
        0xD8 => op(Cld, Implicit),
        0x58 => op(Cli, Implicit),
        0xB8 => op(Clv, Implicit),
        0x38 => op(Sec, Implicit),
        0xF8 => op(Sed, Implicit),
        0x78 => op(Sei, Implicit),

        // Break
        0x00 => op(Brk, Implicit),

        // Undocumented NOP aliases (multi-byte forms read their operand)
        0x04 | 0x44 | 0x64 => op(Nop, ZeroPage),
        0x0C => op(Nop, Absolute),
        0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 => op(Nop, ZeroPageX),
        0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xEA | 0xFA => op(Nop, Implicit),
        0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => op(Nop, AbsoluteX(OnPageCross)),
        0x80 | 0x82 | 0x89 | 0xC2 | 0xE2 => op(Nop, Immediate),

        // Undocumented combined operations
        0xA3 => op(Lax, IndexedIndirect),
        0xA7 => op(Lax, ZeroPage),
        0xAF => op(Lax, Absolute),
        0xB3 => op(Lax, IndirectIndexed(OnPageCross)),
        0xB7 => op(Lax, ZeroPageY),
        0xBF => op(Lax, AbsoluteY(OnPageCross)),
        0x83 => op(Sax, IndexedIndirect),
        0x87 => op(Sax, ZeroPage),
        0x8F => op(Sax, Absolute),
        0x97 => op(Sax, ZeroPageY),
        0xC3 => op(Dcp, IndexedIndirect),
        0xC7 => op(Dcp, ZeroPage),
        0xCF => op(Dcp, Absolute),
        0xD3 => op(Dcp, IndirectIndexed(Always)),
        0xD7 => op(Dcp, ZeroPageX),
        0xDB => op(Dcp, AbsoluteY(Always)),
        0xDF => op(Dcp, AbsoluteX(Always)),
        0xE3 => op(Isb, IndexedIndirect),
        0xE7 => op(Isb, ZeroPage),
        0xEF => op(Isb, Absolute),
        0xF3 => op(Isb, IndirectIndexed(Always)),
        0xF7 => op(Isb, ZeroPageX),
        0xFB => op(Isb, AbsoluteY(Always)),
        0xFF => op(Isb, AbsoluteX(Always)),
        0x03 => op(Slo, IndexedIndirect),
        0x07 => op(Slo, ZeroPage),
        0x0F => op(Slo, Absolute),
        0x13 => op(Slo, IndirectIndexed(Always)),
        0x17 => op(Slo, ZeroPageX),
        0x1B => op(Slo, AbsoluteY(Always)),
        0x1F => op(Slo, AbsoluteX(Always)),
        0x23 => op(Rla, IndexedIndirect),
        0x27 => op(Rla, ZeroPage),
        0x2F => op(Rla, Absolute),
        0x33 => op(Rla, IndirectIndexed(Always)),
        0x37 => op(Rla, ZeroPageX),
        0x3B => op(Rla, AbsoluteY(Always)),
        0x3F => op(Rla, AbsoluteX(Always)),
        0x43 => op(Sre, IndexedIndirect),
        0x47 => op(Sre, ZeroPage),
        0x4F => op(Sre, Absolute),
        0x53 => op(Sre, IndirectIndexed(Always)),
        0x57 => op(Sre, ZeroPageX),
        0x5B => op(Sre, AbsoluteY(Always)),
        0x5F => op(Sre, AbsoluteX(Always)),
        0x63 => op(Rra, IndexedIndirect),
        0x67 => op(Rra, ZeroPage),
        0x6F => op(Rra, Absolute),
        0x73 => op(Rra, IndirectIndexed(Always)),
        0x77 => op(Rra, ZeroPageX),
        0x7B => op(Rra, AbsoluteY(Always)),
        0x7F => op(Rra, AbsoluteX(Always)),

        _ => UNDEFINED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::instruction::Penalty;

    #[test]
    fn decode_is_total() {
        for op in 0..=255u8 {
            let i = decode(op);
            assert_eq!(i, OPCODES[op as usize]);
        }
    }

    #[test]
    fn documented_spot_checks() {
        assert_eq!(decode(0xA9), op(Lda, Immediate));
        assert_eq!(decode(0xBD), op(Lda, AbsoluteX(Penalty::OnPageCross)));
        assert_eq!(decode(0x9D), op(Sta, AbsoluteX(Penalty::Always)));
        assert_eq!(decode(0x99), op(Sta, AbsoluteY(Penalty::Always)));
        assert_eq!(decode(0x91), op(Sta, IndirectIndexed(Penalty::Always)));
        assert_eq!(decode(0xB1), op(Lda, IndirectIndexed(Penalty::OnPageCross)));
        assert_eq!(decode(0xB6), op(Ldx, ZeroPageY));
        assert_eq!(decode(0x96), op(Stx, ZeroPageY));
        assert_eq!(decode(0x6C), op(Jmp, Indirect));
        assert_eq!(decode(0x20), op(Jsr, Absolute));
        assert_eq!(decode(0x00), op(Brk, Implicit));
        assert_eq!(decode(0x40), op(Rti, Implicit));
        assert_eq!(decode(0x0A), op(Asl, Accumulator));
        assert_eq!(decode(0x1E), op(Asl, AbsoluteX(Penalty::Always)));
        assert_eq!(decode(0xD0), op(Bne, Relative));
        assert_eq!(decode(0x24), op(Bit, ZeroPage));
        assert_eq!(decode(0xEA), op(Nop, Implicit));
    }

    #[test]
    fn undocumented_spot_checks() {
        assert_eq!(decode(0xA3), op(Lax, IndexedIndirect));
        assert_eq!(decode(0xB3), op(Lax, IndirectIndexed(Penalty::OnPageCross)));
        assert_eq!(decode(0xBF), op(Lax, AbsoluteY(Penalty::OnPageCross)));
        assert_eq!(decode(0x97), op(Sax, ZeroPageY));
        assert_eq!(decode(0xD3), op(Dcp, IndirectIndexed(Penalty::Always)));
        assert_eq!(decode(0xDF), op(Dcp, AbsoluteX(Penalty::Always)));
        assert_eq!(decode(0xFF), op(Isb, AbsoluteX(Penalty::Always)));
        assert_eq!(decode(0x1B), op(Slo, AbsoluteY(Penalty::Always)));
        assert_eq!(decode(0x27), op(Rla, ZeroPage));
        assert_eq!(decode(0x57), op(Sre, ZeroPageX));
        assert_eq!(decode(0x63), op(Rra, IndexedIndirect));
        assert_eq!(decode(0xEB), op(Sbc, Immediate));
        assert_eq!(decode(0x1C), op(Nop, AbsoluteX(Penalty::OnPageCross)));
        assert_eq!(decode(0x80), op(Nop, Immediate));
        assert_eq!(decode(0x14), op(Nop, ZeroPageX));
    }

    #[test]
    fn unmapped_opcodes_fall_back_to_implied_nop() {
        for opcode in [0x02, 0x12, 0x0B, 0x4B, 0x6B, 0x8B, 0x9B, 0xAB, 0xBB, 0xCB, 0x9E, 0x9F] {
            assert_eq!(decode(opcode), UNDEFINED, "opcode {opcode:#04X}");
            assert!(is_undefined(opcode));
        }
        assert!(!is_undefined(0xEA));
        assert!(!is_undefined(0x1A));
        assert!(!is_undefined(0xA9));
    }

    #[test]
    fn undocumented_form_counts() {
        let count = |m: Mnemonic| OPCODES.iter().filter(|i| i.mnemonic == m).count();
        assert_eq!(count(Lax), 6);
        assert_eq!(count(Sax), 4);
        for m in [Dcp, Isb, Slo, Rla, Sre, Rra] {
            assert_eq!(count(m), 7, "{m}");
        }
    }
}
