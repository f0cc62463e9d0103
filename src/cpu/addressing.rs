/*!
addressing.rs - Effective address resolution for every 6502 addressing mode.

Overview
========
`resolve` consumes the operand bytes that follow the opcode (advancing PC)
and returns the effective address the instruction operates on. It charges
the index / pointer cycles of the mode as it goes:

| Mode                     | Operand bytes | Extra cycle                       |
|--------------------------|---------------|-----------------------------------|
| implicit / accumulator   | 0             | none                              |
| immediate                | 1 (not read)  | none; the address IS the operand  |
| zp                       | 1             | none                              |
| zp,X / zp,Y              | 1             | always (index add)                |
| abs                      | 2             | none                              |
| abs,X / abs,Y            | 2             | per `Penalty`                     |
| relative                 | 1             | none here (branch charges)        |
| (ind)                    | 2             | pointer word read                 |
| (zp,X)                   | 1             | always (index add) + pointer read |
| (zp),Y                   | 1             | pointer read, then per `Penalty`  |

Page crossing
=============
A crossing occurred when the high byte of the base differs from the high
byte of base + index. With `Penalty::OnPageCross` the extra cycle is
charged only then; `Penalty::Always` charges it regardless.

Quirks reproduced
=================
- Zero-page indexing wraps inside page 0 ($80 + $93 -> $13).
- Zero-page pointers read their high byte from (ptr + 1) & $FF.
- JMP (ind) with the pointer at $xxFF reads its high byte from $xx00.
*/

use crate::cpu::access::{CycleBus, fetch_byte, fetch_word};
use crate::cpu::instruction::{AddressingMode, Penalty};
use crate::cpu::state::CpuState;

/// Consume the operand of `mode` and return the effective address.
///
/// Implicit and accumulator forms return 0; the executor never looks at it.
/// Relative returns the branch target computed from the PC after the
/// offset byte.
pub(crate) fn resolve<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, mode: AddressingMode) -> u16 {
    use AddressingMode::*;
    match mode {
        Implicit | Accumulator => 0,
        Immediate => cpu.take_pc(),
        ZeroPage => fetch_byte(cpu, mem) as u16,
        ZeroPageX => {
            let base = fetch_byte(cpu, mem);
            mem.idle();
            base.wrapping_add(cpu.x()) as u16
        }
        ZeroPageY => {
            let base = fetch_byte(cpu, mem);
            mem.idle();
            base.wrapping_add(cpu.y()) as u16
        }
        Absolute => fetch_word(cpu, mem),
        AbsoluteX(penalty) => {
            let base = fetch_word(cpu, mem);
            indexed(mem, base, cpu.x(), penalty)
        }
        AbsoluteY(penalty) => {
            let base = fetch_word(cpu, mem);
            indexed(mem, base, cpu.y(), penalty)
        }
        Relative => {
            let offset = fetch_byte(cpu, mem) as i8;
            cpu.pc().wrapping_add(offset as u16)
        }
        Indirect => {
            let ptr = fetch_word(cpu, mem);
            read_word_indirect_bug(mem, ptr)
        }
        IndexedIndirect => {
            let zp = fetch_byte(cpu, mem);
            mem.idle();
            read_word_zp(mem, zp.wrapping_add(cpu.x()))
        }
        IndirectIndexed(penalty) => {
            let zp = fetch_byte(cpu, mem);
            let base = read_word_zp(mem, zp);
            indexed(mem, base, cpu.y(), penalty)
        }
    }
}

/// True when `a` and `b` lie in different 256-byte pages.
#[inline]
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

#[inline]
fn indexed<M: CycleBus>(mem: &mut M, base: u16, index: u8, penalty: Penalty) -> u16 {
    let addr = base.wrapping_add(index as u16);
    if penalty == Penalty::Always || page_crossed(base, addr) {
        mem.idle();
    }
    addr
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Read a 16-bit little endian pointer from zero page with wraparound
/// on the high byte.
#[inline]
pub(crate) fn read_word_zp<M: CycleBus>(mem: &mut M, base: u8) -> u16 {
    let lo = mem.read(base as u16) as u16;
    let hi = mem.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP (indirect) hardware bug: when the low byte of the pointer is $FF
/// the high byte is fetched from the start of the same page.
#[inline]
pub(crate) fn read_word_indirect_bug<M: CycleBus>(mem: &mut M, addr: u16) -> u16 {
    let lo = mem.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = mem.read(hi_addr) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CycleCounter;
    use crate::cpu::access::Clocked;
    use crate::test_utils::Recorder;

    const ORIGIN: u16 = 0x0400;

    /// Resolve `mode` against `operand` bytes placed at ORIGIN.
    /// Returns (effective address, cycles charged, PC after).
    fn run(
        operand: &[u8],
        mode: AddressingMode,
        prep: impl FnOnce(&mut CpuState, &mut Recorder),
    ) -> (u16, u64, u16) {
        let mut rec = Recorder::new();
        rec.load(ORIGIN, operand);
        let mut cpu = CpuState::new();
        cpu.set_pc(ORIGIN);
        prep(&mut cpu, &mut rec);
        let mut cycles = CycleCounter::new();
        let addr = {
            let mut mem = Clocked::new(&mut rec, &mut cycles);
            resolve(&mut cpu, &mut mem, mode)
        };
        (addr, cycles.total(), cpu.pc())
    }

    #[test]
    fn implied_forms_consume_nothing() {
        for mode in [AddressingMode::Implicit, AddressingMode::Accumulator] {
            let (_, cycles, pc) = run(&[], mode, |_, _| {});
            assert_eq!(cycles, 0);
            assert_eq!(pc, ORIGIN);
        }
    }

    #[test]
    fn immediate_returns_operand_slot_without_reading() {
        let (addr, cycles, pc) = run(&[0x7F], AddressingMode::Immediate, |_, _| {});
        assert_eq!(addr, ORIGIN);
        assert_eq!(cycles, 0);
        assert_eq!(pc, ORIGIN + 1);
    }

    #[test]
    fn zero_page() {
        let (addr, cycles, pc) = run(&[0x44], AddressingMode::ZeroPage, |_, _| {});
        assert_eq!((addr, cycles, pc), (0x0044, 1, ORIGIN + 1));
    }

    #[test]
    fn zero_page_x_wraps_in_page_zero() {
        let (addr, cycles, _) = run(&[0x80], AddressingMode::ZeroPageX, |c, _| c.set_x(0x93));
        assert_eq!(addr, 0x0013);
        assert_eq!(cycles, 2);
    }

    #[test]
    fn zero_page_y_wraps_in_page_zero() {
        let (addr, cycles, _) = run(&[0x36], AddressingMode::ZeroPageY, |c, _| c.set_y(0xF1));
        assert_eq!(addr, 0x0027);
        assert_eq!(cycles, 2);
    }

    #[test]
    fn absolute() {
        let (addr, cycles, pc) = run(&[0x36, 0xF0], AddressingMode::Absolute, |_, _| {});
        assert_eq!((addr, cycles, pc), (0xF036, 2, ORIGIN + 2));
    }

    #[test]
    fn absolute_x_penalties() {
        let always = AddressingMode::AbsoluteX(Penalty::Always);
        let on_cross = AddressingMode::AbsoluteX(Penalty::OnPageCross);

        let (addr, cycles, _) = run(&[0x36, 0xF0], always, |c, _| c.set_x(0x31));
        assert_eq!((addr, cycles), (0xF067, 3));

        let (addr, cycles, _) = run(&[0x36, 0xF0], on_cross, |c, _| c.set_x(0x31));
        assert_eq!((addr, cycles), (0xF067, 2));

        let (addr, cycles, _) = run(&[0x36, 0xF0], on_cross, |c, _| c.set_x(0xF0));
        assert_eq!((addr, cycles), (0xF126, 3));
    }

    #[test]
    fn absolute_y_wraps_past_top_of_memory() {
        let mode = AddressingMode::AbsoluteY(Penalty::OnPageCross);
        let (addr, cycles, _) = run(&[0xFF, 0xFF], mode, |c, _| c.set_y(0x02));
        assert_eq!((addr, cycles), (0x0001, 3));
    }

    #[test]
    fn relative_targets_from_next_instruction() {
        // Forward +4 and backward -2 relative to ORIGIN + 1.
        let (addr, cycles, _) = run(&[0x04], AddressingMode::Relative, |_, _| {});
        assert_eq!((addr, cycles), (ORIGIN + 5, 1));
        let (addr, _, _) = run(&[0xFE], AddressingMode::Relative, |_, _| {});
        assert_eq!(addr, ORIGIN - 1);
    }

    #[test]
    fn indirect_reads_pointer_then_target() {
        let (addr, cycles, _) = run(&[0x10, 0x03], AddressingMode::Indirect, |_, r| {
            r.poke(0x0310, 0x34);
            r.poke(0x0311, 0x12);
        });
        assert_eq!((addr, cycles), (0x1234, 4));
    }

    #[test]
    fn indirect_page_wrap_bug() {
        let (addr, _, _) = run(&[0xFF, 0x10], AddressingMode::Indirect, |_, r| {
            r.poke(0x10FF, 0x34);
            r.poke(0x1000, 0x12);
            r.poke(0x1100, 0x56);
        });
        assert_eq!(addr, 0x1234);
    }

    #[test]
    fn indexed_indirect() {
        let (addr, cycles, _) = run(&[0xF0], AddressingMode::IndexedIndirect, |c, r| {
            c.set_x(0x95);
            r.poke(0x0085, 0x12);
            r.poke(0x0086, 0x90);
        });
        assert_eq!((addr, cycles), (0x9012, 4));
    }

    #[test]
    fn indexed_indirect_pointer_wraps_in_page_zero() {
        let (addr, _, _) = run(&[0xFE], AddressingMode::IndexedIndirect, |c, r| {
            c.set_x(0x01);
            r.poke(0x00FF, 0x00);
            r.poke(0x0000, 0x20);
        });
        assert_eq!(addr, 0x2000);
    }

    #[test]
    fn indirect_indexed_page_cross() {
        let mode = AddressingMode::IndirectIndexed(Penalty::OnPageCross);
        let ptr = |r: &mut Recorder| {
            r.poke(0x0042, 0x12);
            r.poke(0x0043, 0x90);
        };

        let (addr, cycles, _) = run(&[0x42], mode, |c, r| {
            c.set_y(0x83);
            ptr(r);
        });
        assert_eq!((addr, cycles), (0x9095, 3));

        let (addr, cycles, _) = run(&[0x42], mode, |c, r| {
            c.set_y(0xF3);
            ptr(r);
        });
        assert_eq!((addr, cycles), (0x9105, 4));
    }

    #[test]
    fn indirect_indexed_store_always_pays() {
        let mode = AddressingMode::IndirectIndexed(Penalty::Always);
        let (addr, cycles, _) = run(&[0x42], mode, |c, r| {
            c.set_y(0x01);
            r.poke(0x0042, 0x00);
            r.poke(0x0043, 0x02);
        });
        assert_eq!((addr, cycles), (0x0201, 4));
    }

    #[test]
    fn page_cross_compares_high_bytes() {
        assert!(!page_crossed(0x80F5, 0x80FF));
        assert!(page_crossed(0x80F5, 0x8105));
        assert!(page_crossed(0xFFFF, 0x0000));
    }
}
