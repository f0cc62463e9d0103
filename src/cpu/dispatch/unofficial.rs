/*!
unofficial.rs - NOP aliases and the undocumented combined operations

NOP
===
    EA and the one-byte aliases 1A 3A 5A 7A DA FA, plus every opcode
    without defined behavior: 1 internal cycle (2 total).
    80 82 89 C2 E2 (#imm), 04 44 64 (zp), 14 34 54 74 D4 F4 (zp,X),
    0C (abs), 1C 3C 5C 7C DC FC (abs,X): a dummy read of the resolved
    address, so operand bytes are consumed and timed like a load.

Combined operations
===================
    LAX  LDA + LDX              (load; abs,Y and (zp),Y pay on page cross)
    SAX  store A & X            (no flags)
    DCP  DEC mem, CMP A
    ISB  INC mem, SBC
    SLO  ASL mem, ORA
    RLA  ROL mem, AND
    SRE  LSR mem, EOR
    RRA  ROR mem, ADC

Each RMW form is one read, one internal cycle and one write of the
modified value; the register operation then uses that value directly
without touching the bus again.
*/

use crate::cpu::access::CycleBus;
use crate::cpu::execute::{self, compare, rmw_memory};
use crate::cpu::instruction::AddressingMode;
use crate::cpu::state::CpuState;

pub(super) fn nop<M: CycleBus>(mem: &mut M, mode: AddressingMode, addr: u16) {
    match mode {
        AddressingMode::Implicit | AddressingMode::Accumulator => mem.idle(),
        _ => {
            let _ = mem.read(addr);
        }
    }
}

pub(super) fn lax<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    cpu.set_a(v);
    cpu.set_x(v);
}

pub(super) fn sax<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    mem.write(addr, cpu.a() & cpu.x());
}

pub(super) fn dcp<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, |_, v| v.wrapping_sub(1));
    let a = cpu.a();
    compare(cpu, a, r);
}

pub(super) fn isb<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, |_, v| v.wrapping_add(1));
    execute::sbc(cpu, r);
}

pub(super) fn slo<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, execute::asl);
    execute::ora(cpu, r);
}

pub(super) fn rla<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, execute::rol);
    execute::and(cpu, r);
}

pub(super) fn sre<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, execute::lsr);
    execute::eor(cpu, r);
}

pub(super) fn rra<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, execute::ror);
    execute::adc(cpu, r);
}

#[cfg(test)]
mod tests {
    use crate::cpu::status::Status;
    use crate::test_utils::{setup, step_cycles};

    #[test]
    fn implied_nop_changes_nothing_but_pc() {
        let mut cpu = setup(&[0xEA, 0x1A]);
        let before = *cpu.state();
        assert_eq!(step_cycles(&mut cpu), 2);
        assert_eq!(step_cycles(&mut cpu), 2);
        let after = *cpu.state();
        assert_eq!(after.pc(), 0x8002);
        assert_eq!((after.a(), after.x(), after.y()), (before.a(), before.x(), before.y()));
        assert_eq!(after.status(), before.status());
    }

    #[test]
    fn undefined_opcode_runs_as_one_byte_nop() {
        // $02 (KIL on hardware) and $0B (ANC) both degrade to NOP.
        let mut cpu = setup(&[0x02, 0x0B]);
        assert_eq!(step_cycles(&mut cpu), 2);
        assert_eq!(step_cycles(&mut cpu), 2);
        assert_eq!(cpu.state().pc(), 0x8002);
    }

    #[test]
    fn multi_byte_nops_consume_operands() {
        // NOP #$11 ; NOP $22 ; NOP $33,X ; NOP $4444 ; NOP $44F0,X (crosses)
        let mut cpu = setup(&[0x80, 0x11, 0x04, 0x22, 0x14, 0x33, 0x0C, 0x44, 0x44, 0x1C, 0xF0, 0x44]);
        cpu.state_mut().set_x(0x20);
        assert_eq!(step_cycles(&mut cpu), 2);
        assert_eq!(step_cycles(&mut cpu), 3);
        assert_eq!(step_cycles(&mut cpu), 4);
        assert_eq!(step_cycles(&mut cpu), 4);
        assert_eq!(step_cycles(&mut cpu), 5);
        assert_eq!(cpu.state().pc(), 0x800C);
        assert!(cpu.bus().writes().is_empty());
    }

    #[test]
    fn lax_loads_a_and_x() {
        // LAX $10
        let mut cpu = setup(&[0xA7, 0x10]);
        cpu.bus_mut().poke(0x0010, 0x80);
        assert_eq!(step_cycles(&mut cpu), 3);
        assert_eq!(cpu.state().a(), 0x80);
        assert_eq!(cpu.state().x(), 0x80);
        assert!(cpu.state().flag(Status::NEGATIVE));
    }

    #[test]
    fn sax_stores_a_and_x_without_flags() {
        // SAX $10
        let mut cpu = setup(&[0x87, 0x10]);
        cpu.state_mut().set_a(0xF0);
        cpu.state_mut().set_x(0x3C);
        let flags = cpu.state().status();
        assert_eq!(step_cycles(&mut cpu), 3);
        assert_eq!(cpu.bus().peek(0x0010), 0x30);
        assert_eq!(cpu.state().status(), flags);
    }

    #[test]
    fn dcp_decrements_then_compares() {
        // DCP $10
        let mut cpu = setup(&[0xC7, 0x10]);
        cpu.state_mut().set_a(0x40);
        cpu.bus_mut().poke(0x0010, 0x41);
        assert_eq!(step_cycles(&mut cpu), 5);
        assert_eq!(cpu.bus().peek(0x0010), 0x40);
        assert!(cpu.state().flag(Status::ZERO));
        assert!(cpu.state().flag(Status::CARRY));
        assert_eq!(cpu.bus().writes().len(), 1);
    }

    #[test]
    fn isb_increments_then_subtracts() {
        // SEC ; ISB $10
        let mut cpu = setup(&[0x38, 0xE7, 0x10]);
        cpu.state_mut().set_a(0x10);
        cpu.bus_mut().poke(0x0010, 0x04);
        step_cycles(&mut cpu);
        assert_eq!(step_cycles(&mut cpu), 5);
        assert_eq!(cpu.bus().peek(0x0010), 0x05);
        assert_eq!(cpu.state().a(), 0x0B);
    }

    #[test]
    fn slo_shifts_memory_then_ors() {
        // SLO $0200
        let mut cpu = setup(&[0x0F, 0x00, 0x02]);
        cpu.state_mut().set_a(0x01);
        cpu.bus_mut().poke(0x0200, 0x81);
        assert_eq!(step_cycles(&mut cpu), 6);
        assert_eq!(cpu.bus().peek(0x0200), 0x02);
        assert_eq!(cpu.state().a(), 0x03);
        assert!(cpu.state().flag(Status::CARRY));
    }

    #[test]
    fn rla_rotates_memory_then_ands() {
        // RLA $10 with carry in
        let mut cpu = setup(&[0x27, 0x10]);
        cpu.state_mut().assign_flag(Status::CARRY, true);
        cpu.state_mut().set_a(0x0F);
        cpu.bus_mut().poke(0x0010, 0x82);
        step_cycles(&mut cpu);
        assert_eq!(cpu.bus().peek(0x0010), 0x05);
        assert_eq!(cpu.state().a(), 0x05);
        assert!(cpu.state().flag(Status::CARRY));
    }

    #[test]
    fn sre_shifts_memory_then_eors() {
        // SRE $10
        let mut cpu = setup(&[0x47, 0x10]);
        cpu.state_mut().set_a(0xFF);
        cpu.bus_mut().poke(0x0010, 0x03);
        step_cycles(&mut cpu);
        assert_eq!(cpu.bus().peek(0x0010), 0x01);
        assert_eq!(cpu.state().a(), 0xFE);
        assert!(cpu.state().flag(Status::CARRY));
    }

    #[test]
    fn rra_rotate_carry_feeds_adc() {
        // RRA $10: $03 -> $01 with C = 1, then A = $10 + $01 + 1
        let mut cpu = setup(&[0x67, 0x10]);
        cpu.state_mut().assign_flag(Status::CARRY, false);
        cpu.state_mut().set_a(0x10);
        cpu.bus_mut().poke(0x0010, 0x03);
        step_cycles(&mut cpu);
        assert_eq!(cpu.bus().peek(0x0010), 0x01);
        assert_eq!(cpu.state().a(), 0x12);
        assert!(!cpu.state().flag(Status::CARRY));
    }

    #[test]
    fn undocumented_rmw_indexed_forms_always_pay() {
        // DCP $0200,Y ; DCP ($10),Y, neither crossing a page.
        let mut cpu = setup(&[0xDB, 0x00, 0x02, 0xD3, 0x10]);
        cpu.state_mut().set_y(0x01);
        cpu.bus_mut().poke_word(0x0010, 0x0300);
        assert_eq!(step_cycles(&mut cpu), 7);
        assert_eq!(step_cycles(&mut cpu), 8);
    }

    #[test]
    fn lax_indirect_indexed_pays_only_on_cross() {
        // LAX ($10),Y
        let mut cpu = setup(&[0xB3, 0x10, 0xB3, 0x10]);
        cpu.bus_mut().poke_word(0x0010, 0x02F0);
        cpu.state_mut().set_y(0x01);
        assert_eq!(step_cycles(&mut cpu), 5);
        cpu.state_mut().set_y(0x20);
        assert_eq!(step_cycles(&mut cpu), 6);
    }
}
