//! Shared test utilities for driving the CPU against an in-memory bus.
//!
//! `Recorder` is a flat 64 KiB `Bus` that also logs every access in order,
//! so tests can assert on exact bus traffic as well as final memory. The
//! `setup` helpers place a program at `PROGRAM_ORIGIN`, point the reset,
//! NMI and IRQ vectors at fixed handlers and return a ready `Cpu`.
//!
//! Vectors installed by `setup`:
//! - NMI   ($FFFA) -> `NMI_HANDLER`
//! - RESET ($FFFC) -> `PROGRAM_ORIGIN`
//! - IRQ   ($FFFE) -> `IRQ_HANDLER`

#![allow(dead_code)]

use crate::bus::Bus;
use crate::clock::CycleCounter;
use crate::cpu::Cpu;

pub const PROGRAM_ORIGIN: u16 = 0x8000;
pub const NMI_HANDLER: u16 = 0x9000;
pub const IRQ_HANDLER: u16 = 0xA000;

/// One observed bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u16, u8),
    Write(u16, u8),
}

/// Flat RAM bus that records every access.
#[derive(Clone)]
pub struct Recorder {
    mem: Box<[u8; 0x1_0000]>,
    log: Vec<Access>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            mem: Box::new([0; 0x1_0000]),
            log: Vec::new(),
        }
    }

    /// Copy `bytes` into memory at `origin` (wrapping at $FFFF), unlogged.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            self.mem[origin.wrapping_add(i as u16) as usize] = *b;
        }
    }

    pub fn peek(&self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    pub fn poke(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
    }

    pub fn poke_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.poke(addr, lo);
        self.poke(addr.wrapping_add(1), hi);
    }

    pub fn accesses(&self) -> &[Access] {
        &self.log
    }

    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.log
            .iter()
            .filter_map(|a| match *a {
                Access::Write(addr, v) => Some((addr, v)),
                Access::Read(..) => None,
            })
            .collect()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl Bus for Recorder {
    fn read(&mut self, addr: u16) -> u8 {
        let v = self.mem[addr as usize];
        self.log.push(Access::Read(addr, v));
        v
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
        self.log.push(Access::Write(addr, value));
    }
}

pub type TestCpu = Cpu<Recorder, CycleCounter>;

/// CPU with `prg` at `PROGRAM_ORIGIN`, vectors installed and PC at the
/// program start. Registers are in the power-on pattern.
pub fn setup(prg: &[u8]) -> TestCpu {
    setup_at(PROGRAM_ORIGIN, prg)
}

/// Like `setup`, with the program placed (and PC set) at `origin`.
pub fn setup_at(origin: u16, prg: &[u8]) -> TestCpu {
    let mut bus = Recorder::new();
    bus.load(origin, prg);
    bus.poke_word(0xFFFA, NMI_HANDLER);
    bus.poke_word(0xFFFC, origin);
    bus.poke_word(0xFFFE, IRQ_HANDLER);
    let mut cpu = Cpu::new(bus, CycleCounter::new());
    cpu.power_on();
    cpu.state_mut().set_pc(origin);
    cpu.bus_mut().clear_log();
    cpu
}

/// Execute one step and return the cycles it charged.
pub fn step_cycles(cpu: &mut TestCpu) -> u64 {
    let before = cpu.ticker().total();
    cpu.step();
    cpu.ticker().since(before)
}

/// Execute `n` steps and return the total cycles charged.
pub fn run_steps(cpu: &mut TestCpu, n: usize) -> u64 {
    (0..n).map(|_| step_cycles(cpu)).sum()
}
