/*!
compare.rs - Compare opcode family (CMP / CPX / CPY)

    CMP: C9, C5, D5, CD, DD*, D9*, C1, D1*
    CPX: E0, E4, EC
    CPY: C0, C4, CC

Subtract without storing: CARRY = reg >= M, Z/N from the wrapped
difference. OVERFLOW is untouched.
*/

use crate::cpu::access::CycleBus;
use crate::cpu::execute::compare;
use crate::cpu::state::CpuState;

pub(super) fn cmp<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    let reg = cpu.a();
    compare(cpu, reg, v);
}

pub(super) fn cpx<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    let reg = cpu.x();
    compare(cpu, reg, v);
}

pub(super) fn cpy<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    let reg = cpu.y();
    compare(cpu, reg, v);
}
