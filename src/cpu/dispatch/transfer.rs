/*!
transfer.rs - Register transfer and register increment family

    TAX AA   TAY A8   TXA 8A   TYA 98   TSX BA   TXS 9A
    INX E8   INY C8   DEX CA   DEY 88

Every instruction here is 2 cycles: the opcode fetch plus one internal
cycle. All but TXS update Z/N through the destination register's setter;
TXS copies X into S with no flag effect.
*/

use crate::cpu::access::CycleBus;
use crate::cpu::state::CpuState;

pub(super) fn tax<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_x(cpu.a());
}

pub(super) fn tay<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_y(cpu.a());
}

pub(super) fn txa<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_a(cpu.x());
}

pub(super) fn tya<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_a(cpu.y());
}

pub(super) fn tsx<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_x(cpu.sp());
}

pub(super) fn txs<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_sp(cpu.x());
}

pub(super) fn inx<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_x(cpu.x().wrapping_add(1));
}

pub(super) fn iny<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_y(cpu.y().wrapping_add(1));
}

pub(super) fn dex<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_x(cpu.x().wrapping_sub(1));
}

pub(super) fn dey<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle();
    cpu.set_y(cpu.y().wrapping_sub(1));
}
