/*!
rmw.rs - Read-Modify-Write family: shifts, rotates, memory INC / DEC

Overview
========
    ASL: 0A (A), 06, 16, 0E, 1E
    LSR: 4A (A), 46, 56, 4E, 5E
    ROL: 2A (A), 26, 36, 2E, 3E
    ROR: 6A (A), 66, 76, 6E, 7E
    INC: E6, F6, EE, FE
    DEC: C6, D6, CE, DE

Cycle Rules
===========
- Accumulator forms: opcode + 1 internal = 2 cycles, no memory access.
- Memory forms: addressing, then read, 1 internal, write (see
  `execute::rmw_memory`). abs,X carries `Penalty::Always`, so e.g.
  INC abs,X is 7 cycles whether or not the index crosses a page.

Every memory form writes its result back.
*/

use crate::cpu::access::CycleBus;
use crate::cpu::execute::{self, rmw_memory, update_zn};
use crate::cpu::instruction::AddressingMode;
use crate::cpu::state::CpuState;

/// Apply `op` to A (accumulator mode) or to memory at `addr`.
#[inline]
fn shift<M, F>(cpu: &mut CpuState, mem: &mut M, mode: AddressingMode, addr: u16, op: F)
where
    M: CycleBus,
    F: FnOnce(&mut CpuState, u8) -> u8,
{
    if mode == AddressingMode::Accumulator {
        mem.idle();
        let a = cpu.a();
        let r = op(cpu, a);
        cpu.set_a(r);
    } else {
        rmw_memory(cpu, mem, addr, op);
    }
}

pub(super) fn asl<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, mode: AddressingMode, addr: u16) {
    shift(cpu, mem, mode, addr, execute::asl);
}

pub(super) fn lsr<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, mode: AddressingMode, addr: u16) {
    shift(cpu, mem, mode, addr, execute::lsr);
}

pub(super) fn rol<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, mode: AddressingMode, addr: u16) {
    shift(cpu, mem, mode, addr, execute::rol);
}

pub(super) fn ror<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, mode: AddressingMode, addr: u16) {
    shift(cpu, mem, mode, addr, execute::ror);
}

pub(super) fn inc<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    rmw_memory(cpu, mem, addr, |c, v| {
        let r = v.wrapping_add(1);
        update_zn(c, r);
        r
    });
}

pub(super) fn dec<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    rmw_memory(cpu, mem, addr, |c, v| {
        let r = v.wrapping_sub(1);
        update_zn(c, r);
        r
    });
}
