/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, RMW, branch)

Purpose
=======
Centralize side-effect logic shared by the dispatch families: the
undocumented combined operations reuse exactly the same ADC / CMP / shift
helpers as their documented halves, so there is one implementation of
each flag rule.

Scope (crate-visible)
---------------------
Flag helpers:
    update_zn
Logical / arithmetic on A:
    and, ora, eor, bit, adc, sbc
Compare:
    compare
Shifts / rotates (value in, value out, CARRY + Z/N updated):
    asl, lsr, rol, ror
Read-modify-write choreography:
    rmw_memory
Branch:
    branch

Flag rules
==========
- ADC uses bit-level carry propagation: the carry INTO bit 7 is recovered
  as c6 = a7 ^ m7 ^ r7, the carry OUT is c7 = majority(a7, m7, c6).
  OVERFLOW = c6 ^ c7, CARRY = c7. DECIMAL is ignored (NES 2A03).
- SBC is ADC with the operand inverted.
- CMP / CPX / CPY: CARRY = reg >= m, Z/N from reg - m (wrapped).
*/

use crate::cpu::access::CycleBus;
use crate::cpu::addressing::page_crossed;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;

// ---------------------------------------------------------------------------
// Flag helpers
// ---------------------------------------------------------------------------

/// Z/N for a value that is not written to A, X or Y (memory results, compares).
#[inline]
pub(crate) fn update_zn(cpu: &mut CpuState, v: u8) {
    cpu.assign_flag(Status::ZERO, v == 0);
    cpu.assign_flag(Status::NEGATIVE, v & 0x80 != 0);
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and(cpu: &mut CpuState, v: u8) {
    cpu.set_a(cpu.a() & v);
}

#[inline]
pub(crate) fn ora(cpu: &mut CpuState, v: u8) {
    cpu.set_a(cpu.a() | v);
}

#[inline]
pub(crate) fn eor(cpu: &mut CpuState, v: u8) {
    cpu.set_a(cpu.a() ^ v);
}

#[inline]
pub(crate) fn bit(cpu: &mut CpuState, v: u8) {
    cpu.assign_flag(Status::ZERO, cpu.a() & v == 0);
    cpu.assign_flag(Status::NEGATIVE, v & 0x80 != 0);
    cpu.assign_flag(Status::OVERFLOW, v & 0x40 != 0);
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn adc(cpu: &mut CpuState, m: u8) {
    let a = cpu.a();
    let result = a.wrapping_add(m).wrapping_add(cpu.carry_bit());

    let a7 = a >> 7;
    let m7 = m >> 7;
    let r7 = result >> 7;
    let c6 = a7 ^ m7 ^ r7;
    let c7 = (a7 & m7) | (a7 & c6) | (m7 & c6);

    cpu.assign_flag(Status::CARRY, c7 != 0);
    cpu.assign_flag(Status::OVERFLOW, (c6 ^ c7) != 0);
    cpu.set_a(result);
}

#[inline]
pub(crate) fn sbc(cpu: &mut CpuState, m: u8) {
    adc(cpu, !m);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn compare(cpu: &mut CpuState, reg: u8, m: u8) {
    cpu.assign_flag(Status::CARRY, reg >= m);
    update_zn(cpu, reg.wrapping_sub(m));
}

// ---------------------------------------------------------------------------
// Shifts / Rotates
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl(cpu: &mut CpuState, v: u8) -> u8 {
    cpu.assign_flag(Status::CARRY, v & 0x80 != 0);
    let r = v << 1;
    update_zn(cpu, r);
    r
}

#[inline]
pub(crate) fn lsr(cpu: &mut CpuState, v: u8) -> u8 {
    cpu.assign_flag(Status::CARRY, v & 0x01 != 0);
    let r = v >> 1;
    update_zn(cpu, r);
    r
}

#[inline]
pub(crate) fn rol(cpu: &mut CpuState, v: u8) -> u8 {
    let carry_in = cpu.carry_bit();
    cpu.assign_flag(Status::CARRY, v & 0x80 != 0);
    let r = (v << 1) | carry_in;
    update_zn(cpu, r);
    r
}

#[inline]
pub(crate) fn ror(cpu: &mut CpuState, v: u8) -> u8 {
    let carry_in = cpu.carry_bit() << 7;
    cpu.assign_flag(Status::CARRY, v & 0x01 != 0);
    let r = (v >> 1) | carry_in;
    update_zn(cpu, r);
    r
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory) choreography
// ---------------------------------------------------------------------------

/// Read `addr`, spend the modify cycle, write the transformed value back.
/// Returns the value written.
pub(crate) fn rmw_memory<M, F>(cpu: &mut CpuState, mem: &mut M, addr: u16, transform: F) -> u8
where
    M: CycleBus,
    F: FnOnce(&mut CpuState, u8) -> u8,
{
    let old = mem.read(addr);
    mem.idle();
    let new = transform(cpu, old);
    mem.write(addr, new);
    new
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// Take the branch to `target` when `take` holds. A taken branch costs one
/// cycle, plus one more when `target` is on a different page than the
/// instruction that follows the branch.
#[inline]
pub(crate) fn branch<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, take: bool, target: u16) {
    if !take {
        return;
    }
    mem.idle();
    if page_crossed(cpu.pc(), target) {
        mem.idle();
    }
    cpu.set_pc(target);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
