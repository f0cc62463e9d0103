/*!
arithmetic.rs - ADC / SBC opcode family

    ADC: 69, 65, 75, 6D, 7D*, 79*, 61, 71*
    SBC: E9, E5, F5, ED, FD*, F9*, E1, F1*, EB (undocumented alias of E9)

(*) +1 cycle on page cross, charged during resolution.

Binary mode only: the 2A03 has no decimal adder, so DECIMAL is stored but
has no effect here. Flag math lives in `execute::adc`.
*/

use crate::cpu::access::CycleBus;
use crate::cpu::execute;
use crate::cpu::state::CpuState;

pub(super) fn adc<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    execute::adc(cpu, v);
}

pub(super) fn sbc<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, addr: u16) {
    let v = mem.read(addr);
    execute::sbc(cpu, v);
}
