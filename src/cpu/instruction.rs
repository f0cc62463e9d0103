/*!
instruction.rs - Decoded instruction vocabulary: mnemonics and addressing modes.

An `Instruction` is the immutable (mnemonic, addressing mode) pair that
the decode table yields for an opcode byte. The executor matches on the
mnemonic exhaustively, so adding a variant here is a compile error until
every dispatch site handles it.
*/

use std::fmt;

/// Operation performed by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Load/Store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Register transfers
    Tax,
    Tsx,
    Tay,
    Txa,
    Txs,
    Tya,
    // Stack
    Pha,
    Php,
    Pla,
    Plp,
    // Logical
    And,
    Eor,
    Ora,
    Bit,
    // Arithmetic / compare
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    // Increment / decrement
    Inc,
    Inx,
    Iny,
    Dec,
    Dex,
    Dey,
    // Shifts / rotates
    Asl,
    Lsr,
    Rol,
    Ror,
    // Jumps / returns
    Jmp,
    Jsr,
    Rts,
    Rti,
    // Branches
    Bcc,
    Bcs,
    Beq,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,
    // Flag control
    Clc,
    Cld,
    Cli,
    Clv,
    Sec,
    Sed,
    Sei,
    // Misc
    Brk,
    Nop,
    // Undocumented combined operations
    Lax,
    Sax,
    Dcp,
    Isb,
    Slo,
    Rla,
    Sre,
    Rra,
}

impl Mnemonic {
    /// Upper-case assembler name.
    pub fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tsx => "TSX",
            Tay => "TAY",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            And => "AND",
            Eor => "EOR",
            Ora => "ORA",
            Bit => "BIT",
            Adc => "ADC",
            Sbc => "SBC",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Asl => "ASL",
            Lsr => "LSR",
            Rol => "ROL",
            Ror => "ROR",
            Jmp => "JMP",
            Jsr => "JSR",
            Rts => "RTS",
            Rti => "RTI",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Brk => "BRK",
            Nop => "NOP",
            Lax => "LAX",
            Sax => "SAX",
            Dcp => "DCP",
            Isb => "ISB",
            Slo => "SLO",
            Rla => "RLA",
            Sre => "SRE",
            Rra => "RRA",
        }
    }

    /// True for the eight undocumented combined operations.
    pub fn is_undocumented(self) -> bool {
        use Mnemonic::*;
        matches!(self, Lax | Sax | Dcp | Isb | Slo | Rla | Sre | Rra)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether an indexed mode pays its extra cycle unconditionally or only
/// when the index carries into the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Penalty {
    /// Stores and read-modify-write forms: +1 cycle, crossing or not.
    Always,
    /// Reads: +1 cycle only when a page boundary is crossed.
    OnPageCross,
}

/// Rule for locating an instruction's operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implicit,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX(Penalty),
    AbsoluteY(Penalty),
    Relative,
    Indirect,
    IndexedIndirect,
    IndirectIndexed(Penalty),
}

impl AddressingMode {
    /// Operand bytes following the opcode.
    pub fn operand_len(self) -> u16 {
        use AddressingMode::*;
        match self {
            Implicit | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndexedIndirect
            | IndirectIndexed(_) => 1,
            Absolute | AbsoluteX(_) | AbsoluteY(_) | Indirect => 2,
        }
    }
}

/// A decoded opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
}

impl Instruction {
    pub const fn new(mnemonic: Mnemonic, mode: AddressingMode) -> Self {
        Self { mnemonic, mode }
    }

    /// Total length in bytes, opcode included.
    pub fn byte_len(self) -> u16 {
        1 + self.mode.operand_len()
    }

    /// Render with the operand bytes that follow the opcode, e.g. `LDA $80F5,X`.
    ///
    /// `lo` / `hi` are the raw bytes after the opcode; `hi` is ignored by
    /// one-byte modes and both are ignored by implied forms. `pc` is the
    /// address of the opcode, used to show branch targets.
    pub fn disassemble(self, pc: u16, lo: u8, hi: u8) -> String {
        use AddressingMode::*;
        let word = u16::from_le_bytes([lo, hi]);
        let m = self.mnemonic;
        match self.mode {
            Implicit => m.to_string(),
            Accumulator => format!("{m} A"),
            Immediate => format!("{m} #${lo:02X}"),
            ZeroPage => format!("{m} ${lo:02X}"),
            ZeroPageX => format!("{m} ${lo:02X},X"),
            ZeroPageY => format!("{m} ${lo:02X},Y"),
            Absolute => format!("{m} ${word:04X}"),
            AbsoluteX(_) => format!("{m} ${word:04X},X"),
            AbsoluteY(_) => format!("{m} ${word:04X},Y"),
            Relative => {
                let target = pc.wrapping_add(2).wrapping_add(lo as i8 as u16);
                format!("{m} ${target:04X}")
            }
            Indirect => format!("{m} (${word:04X})"),
            IndexedIndirect => format!("{m} (${lo:02X},X)"),
            IndirectIndexed(_) => format!("{m} (${lo:02X}),Y"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AddressingMode::*;
        let mode = match self.mode {
            Implicit => "",
            Accumulator => " A",
            Immediate => " #imm",
            ZeroPage => " zp",
            ZeroPageX => " zp,X",
            ZeroPageY => " zp,Y",
            Absolute => " abs",
            AbsoluteX(_) => " abs,X",
            AbsoluteY(_) => " abs,Y",
            Relative => " rel",
            Indirect => " (ind)",
            IndexedIndirect => " (zp,X)",
            IndirectIndexed(_) => " (zp),Y",
        };
        write!(f, "{}{}", self.mnemonic, mode)
    }
}
