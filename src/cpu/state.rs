/*!
state.rs - Canonical 6502 CPU architectural state (registers + flags).

Overview
========
`CpuState` is the single owner of all architecturally visible registers.
It intentionally excludes:
  - Bus / memory logic
  - Instruction decode / dispatch logic
  - Timing / cycle accounting
Those live in higher layers (access, addressing, dispatch).

Invariant
=========
A, X and Y are only writable through `set_a` / `set_x` / `set_y`, each of
which stores the value and recomputes ZERO and NEGATIVE in one step. No
other path can change those two flags alongside a register write. S, PC
and P setters store the raw value with no side effects.

Power-on pattern
================
A = X = Y = 0, S = $FD, P = $34. PC is left at $0000; the driver decides
where execution starts (reset vector or an explicit entry point).
*/

use crate::cpu::status::Status;

/// Pure architectural register / flag container for the 6502 CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: Status,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0x0000,
            status: Status::POWER_ON,
        }
    }
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction / Reset
    // ---------------------------------------------------------------------

    /// Create a new CPU state using power-on defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the power-on register pattern. PC is preserved.
    pub fn power_on(&mut self) {
        let pc = self.pc;
        *self = Self::default();
        self.pc = pc;
    }

    // ---------------------------------------------------------------------
    // Basic Accessors (Read)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    // ---------------------------------------------------------------------
    // Mutators (Write)
    // ---------------------------------------------------------------------

    /// Store A and recompute ZERO / NEGATIVE.
    #[inline]
    pub fn set_a(&mut self, v: u8) {
        self.a = v;
        self.status.set_zn(v);
    }

    /// Store X and recompute ZERO / NEGATIVE.
    #[inline]
    pub fn set_x(&mut self, v: u8) {
        self.x = v;
        self.status.set_zn(v);
    }

    /// Store Y and recompute ZERO / NEGATIVE.
    #[inline]
    pub fn set_y(&mut self, v: u8) {
        self.y = v;
        self.status.set_zn(v);
    }

    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    pub fn set_status(&mut self, v: Status) {
        self.status = v;
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    /// Return the current PC and advance it by one.
    #[inline]
    pub fn take_pc(&mut self) -> u16 {
        let pc = self.pc;
        self.advance_pc(1);
        pc
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    /// Return true if every bit in `flag` is set.
    #[inline]
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Assign a flag bit based on boolean `value`.
    #[inline]
    pub fn assign_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }

    /// CARRY as the 0/1 value folded into ADC / ROL / ROR.
    #[inline]
    pub fn carry_bit(&self) -> u8 {
        self.flag(Status::CARRY) as u8
    }

    // ---------------------------------------------------------------------
    // Stack pointer address helpers
    // ---------------------------------------------------------------------
    //
    // 6502 stack lives on page $01, SP post-decrement on push and
    // pre-increment on pull:
    //   Push: write at $0100 | SP, then SP = SP - 1
    //   Pull: SP = SP + 1, then read at $0100 | SP

    /// Address for the next push; decrements SP.
    #[inline]
    pub(crate) fn push_slot(&mut self) -> u16 {
        let addr = 0x0100 | self.sp as u16;
        self.sp = self.sp.wrapping_sub(1);
        addr
    }

    /// Address for the next pull; increments SP first.
    #[inline]
    pub(crate) fn pull_slot(&mut self) -> u16 {
        self.sp = self.sp.wrapping_add(1);
        0x0100 | self.sp as u16
    }
}
