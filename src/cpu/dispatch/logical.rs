/*!
logical.rs - Logical opcode family (AND / ORA / EOR / BIT)

    AND: 29, 25, 35, 2D, 3D*, 39*, 21, 31*
    ORA: 09, 05, 15, 0D, 1D*, 19*, 01, 11*
    EOR: 49, 45, 55, 4D, 5D*, 59*, 41, 51*
    BIT: 24, 2C

(*) +1 cycle on page cross, charged during resolution.

BIT sets Z from A & M, V from bit 6 of M and N from bit 7 of M; A is
unchanged.
*/

use crate::cpu::access::CycleBus;
use crate::cpu::execute;
use crate::cpu::state::CpuState;

pub(super) fn and<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    execute::and(cpu, v);
}

pub(super) fn ora<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    execute::ora(cpu, v);
}

pub(super) fn eor<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    execute::eor(cpu, v);
}

pub(super) fn bit<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    execute::bit(cpu, v);
}
