/*!
flags.rs - Flag control family

    CLC 18  SEC 38
    CLI 58  SEI 78
    CLV B8
    CLD D8  SED F8

Each sets or clears exactly one flag in 2 cycles.
*/

use crate::cpu::access::CycleBus;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;

#[inline]
pub(super) fn handle<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, flag: Status, on: bool) {
    mem.idle();
    cpu.assign_flag(flag, on);
}
