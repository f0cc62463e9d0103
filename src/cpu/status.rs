/*!
status.rs - The 6502 processor status register (P).

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (no storage on the die; always reads back as 1)
  B = BREAK (no storage either; synthesized only when P is pushed)
  D = DECIMAL (stored and toggled, but the NES variant ignores it in ADC/SBC)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY

B flag
======
The live register never holds B. When P is pushed, the pushed byte gets
one of two patterns:
  - PHP / BRK        -> UNUSED | BREAK  (0x30)
  - NMI / IRQ entry  -> UNUSED only     (0x20)
When P is pulled (PLP / RTI) BREAK is dropped and UNUSED forced on.
*/

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const IRQ_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Bits OR-ed into P when an instruction (PHP, BRK) pushes it.
    pub const INSTRUCTION_PUSH: Status = Status::UNUSED.union(Status::BREAK);
    /// Bits OR-ed into P when hardware interrupt entry pushes it.
    pub const INTERRUPT_PUSH: Status = Status::UNUSED;

    /// Status at power-on: I set, plus the two B-position bits (0x34).
    pub const POWER_ON: Status = Status::IRQ_DISABLE
        .union(Status::UNUSED)
        .union(Status::BREAK);

    /// Byte written to the stack by PHP / BRK.
    #[inline]
    pub fn for_instruction_push(self) -> u8 {
        (self | Self::INSTRUCTION_PUSH).bits()
    }

    /// Byte written to the stack by NMI / IRQ entry.
    #[inline]
    pub fn for_interrupt_push(self) -> u8 {
        ((self | Self::INTERRUPT_PUSH) - Self::BREAK).bits()
    }

    /// Reconstruct P from a byte pulled off the stack (PLP / RTI).
    #[inline]
    pub fn from_stack(byte: u8) -> Self {
        (Self::from_bits_retain(byte) - Self::BREAK) | Self::UNUSED
    }

    /// Recompute ZERO and NEGATIVE from a freshly written register value.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.set(Self::ZERO, value == 0);
        self.set(Self::NEGATIVE, value & 0x80 != 0);
    }
}
