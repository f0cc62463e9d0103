/*!
stack.rs - Stack opcode family (PHA / PHP / PLA / PLP)

Cycle Rules
===========
    PHA, PHP: opcode + write + 1 internal          = 3
    PLA, PLP: opcode + 2 internal + read           = 4

B flag
======
PHP pushes P with both B-position bits set. PLP drops BREAK and forces
UNUSED on, since neither bit is stored in the live register.
*/

use crate::cpu::access::{CycleBus, pull, push};
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;

pub(super) fn pha<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    let a = cpu.a();
    push(cpu, mem, a);
    mem.idle();
}

pub(super) fn php<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    let p = cpu.status().for_instruction_push();
    push(cpu, mem, p);
    mem.idle();
}

pub(super) fn pla<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle_n(2);
    let v = pull(cpu, mem);
    cpu.set_a(v);
}

pub(super) fn plp<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) {
    mem.idle_n(2);
    let v = pull(cpu, mem);
    cpu.set_status(Status::from_stack(v));
}
