/*!
control_flow.rs - Control flow opcode family (JMP / JSR / RTS / RTI / BRK)

Cycle Rules
===========
    JMP abs  4C  3   (opcode + 2 operand)
    JMP ind  6C  5   (opcode + 2 operand + 2 pointer; $xxFF page-wrap bug)
    JSR      20  6   (opcode + 2 operand + push PCH/PCL + 1 internal)
    RTS      60  6   (opcode + 3 internal + pull PCL/PCH), then PC + 1
    RTI      40  6   (opcode + 2 internal + pull P + pull PCL/PCH)
    BRK      00  7   (opcode + signature byte + push PCH/PCL/P + vector)

Notes
=====
- JSR pushes the address of its own last byte (return - 1).
- RTI applies the PLP rule to the pulled status and does not add 1 to PC.
- BRK pushes PC = BRK address + 2 and P with BREAK set, then vectors
  through $FFFE like an IRQ.
*/

use crate::cpu::access::{CycleBus, fetch_byte, pull, pull_word, push_word};
use crate::cpu::interrupt::{IRQ_VECTOR, push_frame};
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;

#[inline]
pub(super) fn jmp(cpu: &mut CpuState, target: u16) {
    cpu.set_pc(target);
}

pub(super) fn jsr<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, target: u16) {
    let ret = cpu.pc().wrapping_sub(1);
    push_word(cpu, mem, ret);
    mem.idle();
    cpu.set_pc(target);
}

pub(super) fn rts<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle_n(3);
    let ret = pull_word(cpu, mem);
    cpu.set_pc(ret.wrapping_add(1));
}

pub(super) fn rti<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle_n(2);
    let p = pull(cpu, mem);
    cpu.set_status(Status::from_stack(p));
    let pc = pull_word(cpu, mem);
    cpu.set_pc(pc);
}

pub(super) fn brk<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    let _signature = fetch_byte(cpu, mem);
    let p = cpu.status().for_instruction_push();
    push_frame(cpu, mem, p, IRQ_VECTOR);
}
