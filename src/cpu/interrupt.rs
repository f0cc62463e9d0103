/*!
interrupt.rs - Hardware interrupt kinds and the shared entry sequence.

Entry sequence (NMI / IRQ)
==========================
    2 internal cycles
    push PCH, push PCL                 (2 writes)
    push P | UNUSED, BREAK clear       (1 write)
    set I
    PC = word at vector                (2 reads)
                                       = 7 cycles

BRK runs the same push / vector tail with the instruction push pattern
(BREAK set) and the IRQ vector.

The pending-interrupt slot lives on `Cpu`. Masking IRQ against the I flag
is the driver's decision; entry never consults it.
*/

use std::fmt;

use crate::cpu::access::{CycleBus, push, push_word};
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;

pub const NMI_VECTOR: u16 = 0xFFFA;
/// Read by the driver to find the entry point; reset is not an `Interrupt` kind.
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// A hardware interrupt request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interrupt {
    Nmi,
    Irq,
}

impl Interrupt {
    /// Address of the little-endian handler pointer.
    pub fn vector(self) -> u16 {
        match self {
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq => IRQ_VECTOR,
        }
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Interrupt::Nmi => "NMI",
            Interrupt::Irq => "IRQ",
        })
    }
}

/// Full hardware entry for `kind`. Returns the PC that was pushed.
pub(crate) fn enter<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, kind: Interrupt) -> u16 {
    let return_pc = cpu.pc();
    mem.idle_n(2);
    let p = cpu.status().for_interrupt_push();
    push_frame(cpu, mem, p, kind.vector());
    return_pc
}

/// Push PC and `pushed_status`, set I, and load PC from `vector`.
pub(crate) fn push_frame<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, pushed_status: u8, vector: u16) {
    let pc = cpu.pc();
    push_word(cpu, mem, pc);
    push(cpu, mem, pushed_status);
    cpu.assign_flag(Status::IRQ_DISABLE, true);
    let target = mem.read_word(vector);
    cpu.set_pc(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CycleCounter;
    use crate::cpu::access::Clocked;
    use crate::test_utils::Recorder;

    fn enter_with(kind: Interrupt, status: Status) -> (CpuState, Recorder, u64) {
        let mut rec = Recorder::new();
        rec.poke_word(NMI_VECTOR, 0x9000);
        rec.poke_word(IRQ_VECTOR, 0xA000);
        let mut cycles = CycleCounter::new();
        let mut cpu = CpuState::new();
        cpu.set_pc(0x1234);
        cpu.set_status(status);
        {
            let mut mem = Clocked::new(&mut rec, &mut cycles);
            assert_eq!(enter(&mut cpu, &mut mem, kind), 0x1234);
        }
        (cpu, rec, cycles.total())
    }

    #[test]
    fn vectors() {
        assert_eq!(Interrupt::Nmi.vector(), 0xFFFA);
        assert_eq!(Interrupt::Irq.vector(), 0xFFFE);
    }

    #[test]
    fn irq_entry_pushes_frame_and_loads_vector() {
        let (cpu, rec, cycles) = enter_with(Interrupt::Irq, Status::CARRY | Status::UNUSED);
        assert_eq!(cycles, 7);
        assert_eq!(cpu.pc(), 0xA000);
        assert!(cpu.flag(Status::IRQ_DISABLE));
        assert_eq!(cpu.sp(), 0xFA);
        assert_eq!(rec.writes(), vec![(0x01FD, 0x12), (0x01FC, 0x34), (0x01FB, 0x21)]);
    }

    #[test]
    fn nmi_entry_uses_its_own_vector() {
        let (cpu, _, cycles) = enter_with(Interrupt::Nmi, Status::UNUSED);
        assert_eq!(cycles, 7);
        assert_eq!(cpu.pc(), 0x9000);
    }

    #[test]
    fn pushed_status_never_carries_break() {
        let (_, rec, _) = enter_with(Interrupt::Irq, Status::all());
        assert_eq!(rec.peek(0x01FB), 0xEF);
    }
}
