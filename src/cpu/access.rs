/*!
access.rs - Cycle-charged bus access used by every instruction helper.

Timing model
============
Each bus read and each bus write is one CPU cycle, so `CycleBus::read`
and `CycleBus::write` tick once after the access. Cycles in which the
real chip does internal work (index addition, ALU, stack pointer
adjustment) are charged with `idle`, which ticks without touching the
bus. Summed over an instruction this reproduces the documented NMOS
6502 cycle counts.

`Clocked` pairs a borrowed `Bus` with a borrowed `Ticker` for the
duration of one step. Helpers are generic over `CycleBus` so unit tests
can drive them with any stand-in.
*/

use crate::bus::{Bus, Ticker};
use crate::cpu::state::CpuState;

/// Memory surface whose every access costs one cycle.
pub(crate) trait CycleBus {
    /// Read a byte, charging one cycle.
    fn read(&mut self, addr: u16) -> u8;

    /// Write a byte, charging one cycle.
    fn write(&mut self, addr: u16, value: u8);

    /// Charge one cycle with no bus access.
    fn idle(&mut self);

    /// Charge `n` idle cycles.
    #[inline]
    fn idle_n(&mut self, n: u32) {
        for _ in 0..n {
            self.idle();
        }
    }

    /// Little-endian word: low byte at `addr`, high byte at `addr + 1`.
    #[inline]
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// A `Bus` + `Ticker` pair borrowed for one step.
pub(crate) struct Clocked<'a, B: Bus, T: Ticker> {
    bus: &'a mut B,
    ticker: &'a mut T,
}

impl<'a, B: Bus, T: Ticker> Clocked<'a, B, T> {
    #[inline]
    pub(crate) fn new(bus: &'a mut B, ticker: &'a mut T) -> Self {
        Self { bus, ticker }
    }
}

impl<B: Bus, T: Ticker> CycleBus for Clocked<'_, B, T> {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        let v = self.bus.read(addr);
        self.ticker.tick();
        v
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
        self.ticker.tick();
    }

    #[inline]
    fn idle(&mut self) {
        self.ticker.tick();
    }
}

// -------------------------------------------------------------------------
// Instruction stream and stack helpers
// -------------------------------------------------------------------------

/// Fetch next byte from the instruction stream, incrementing PC.
#[inline]
pub(crate) fn fetch_byte<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) -> u8 {
    let pc = cpu.take_pc();
    mem.read(pc)
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
#[inline]
pub(crate) fn fetch_word<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) -> u16 {
    let lo = fetch_byte(cpu, mem) as u16;
    let hi = fetch_byte(cpu, mem) as u16;
    (hi << 8) | lo
}

#[inline]
pub(crate) fn push<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, v: u8) {
    let addr = cpu.push_slot();
    mem.write(addr, v);
}

#[inline]
pub(crate) fn pull<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) -> u8 {
    let addr = cpu.pull_slot();
    mem.read(addr)
}

/// Push a return address: high byte first, so it pulls back low byte first.
#[inline]
pub(crate) fn push_word<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, v: u16) {
    push(cpu, mem, (v >> 8) as u8);
    push(cpu, mem, v as u8);
}

#[inline]
pub(crate) fn pull_word<M: CycleBus>(cpu: &mut CpuState, mem: &mut M) -> u16 {
    let lo = pull(cpu, mem) as u16;
    let hi = pull(cpu, mem) as u16;
    (hi << 8) | lo
}
