/*!
load_store.rs - Load / Store opcode family handler

Overview
========
Loads (set Z/N through the register setter):
    LDA: A9, A5, B5, AD, BD*, B9*, A1, B1*
    LDX: A2, A6, B6, AE, BE*
    LDY: A0, A4, B4, AC, BC*

Stores (no flags changed):
    STA: 85, 95, 8D, 9D, 99, 81, 91
    STX: 86, 96, 8E
    STY: 84, 94, 8C

(*) Page-cross penalty is charged by the resolver from the table's
`Penalty::OnPageCross`; the store forms carry `Penalty::Always`.

Cycle Accounting
================
A load is one read of the effective address, a store one write. Nothing
else is charged here.
*/

use crate::cpu::access::CycleBus;
use crate::cpu::state::CpuState;

#[inline]
pub(super) fn lda<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    cpu.set_a(v);
}

#[inline]
pub(super) fn ldx<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    cpu.set_x(v);
}

#[inline]
pub(super) fn ldy<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    cpu.set_y(v);
}

#[inline]
pub(super) fn sta<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    mem.write(addr, cpu.a());
}

#[inline]
pub(super) fn stx<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    mem.write(addr, cpu.x());
}

#[inline]
pub(super) fn sty<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    mem.write(addr, cpu.y());
}
