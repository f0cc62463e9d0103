/*!
branches.rs - Relative branch opcode handler (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Overview
========
Each branch tests exactly one flag against one polarity:

    BPL 10  N clear     BMI 30  N set
    BVC 50  V clear     BVS 70  V set
    BCC 90  C clear     BCS B0  C set
    BNE D0  Z clear     BEQ F0  Z set

The resolver has already consumed the signed offset and computed the
target relative to the instruction after the branch.

Cycle Rules
===========
Base cost: 2 cycles (opcode + offset).
If branch is taken: +1 cycle.
If branch is taken and target is on another page: +1 more.
*/

use crate::cpu::access::CycleBus;
use crate::cpu::execute::branch;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;

/// Branch to `target` when `flag` equals `when_set`.
pub(super) fn handle<M: CycleBus>(
    cpu: &mut CpuState,
    mem: &mut M,
    flag: Status,
    when_set: bool,
    target: u16,
) {
    let take = cpu.flag(flag) == when_set;
    branch(cpu, mem, take, target);
}
