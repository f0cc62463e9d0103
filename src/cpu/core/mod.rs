/*!
core::Cpu - The 6502 CPU façade: registers, injected bus / ticker, interrupt slot.

Design
======
- `Cpu<B, T>` owns a `CpuState`, the `Bus` it reads and writes, the
  `Ticker` it reports cycles to, and the single pending-interrupt slot.
- The bus and ticker are generic parameters so the hot path is
  monomorphized; `&mut B`, `&mut T` and boxed trait objects also
  implement the traits for drivers that want to keep ownership.
- `step` is the only entry point that advances time. It either services
  the pending interrupt or runs exactly one instruction, and always runs
  to completion.

Step sequence
=============
1. If an interrupt is pending, take it from the slot, run the 7-cycle
   entry sequence and return.
2. Fetch the opcode at PC (1 cycle) and decode it.
3. Resolve the operand (`addressing::resolve`).
4. Execute (`dispatch::execute`).

Interrupt slot
==============
At most one request is held. An NMI request replaces a pending IRQ; an
IRQ request never displaces a pending NMI. The I flag is not consulted
here: a driver that honors masking simply does not request an IRQ while
`state().flag(Status::IRQ_DISABLE)` is set.
*/

use log::{Level, debug, log_enabled, trace};

use crate::bus::{Bus, Ticker};
use crate::cpu::access::{Clocked, fetch_byte};
use crate::cpu::addressing::resolve;
use crate::cpu::dispatch;
use crate::cpu::interrupt::{self, Interrupt};
use crate::cpu::state::CpuState;
use crate::cpu::table::{decode, is_undefined};

/// Registers plus the pending interrupt: everything `step` depends on
/// besides bus contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub state: CpuState,
    pub interrupt: Option<Interrupt>,
}

pub struct Cpu<B: Bus, T: Ticker> {
    state: CpuState,
    bus: B,
    ticker: T,
    interrupt: Option<Interrupt>,
}

impl<B: Bus, T: Ticker> Cpu<B, T> {
    /// Construct a CPU bound to `bus` and `ticker`, registers in the
    /// power-on pattern and PC at $0000.
    pub fn new(bus: B, ticker: T) -> Self {
        Self {
            state: CpuState::new(),
            bus,
            ticker,
            interrupt: None,
        }
    }

    /// Reset registers to A = X = Y = 0, S = $FD, P = $34. PC is kept and
    /// the bus is not touched.
    pub fn power_on(&mut self) {
        self.state.power_on();
        debug!("power on: PC=${:04X}", self.state.pc());
    }

    /// Service the pending interrupt, or execute one instruction.
    pub fn step(&mut self) {
        let Self {
            state,
            bus,
            ticker,
            interrupt: pending,
        } = self;
        let mut mem = Clocked::new(bus, ticker);

        if let Some(kind) = pending.take() {
            let ret = interrupt::enter(state, &mut mem, kind);
            debug!(
                "{kind} entry: return ${ret:04X}, vector ${:04X} -> ${:04X}",
                kind.vector(),
                state.pc()
            );
            return;
        }

        let pc = state.pc();
        let opcode = fetch_byte(state, &mut mem);
        let instr = decode(opcode);

        if log_enabled!(Level::Trace) {
            trace!(
                "{pc:04X}  {opcode:02X}  {:<12} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
                instr.to_string(),
                state.a(),
                state.x(),
                state.y(),
                state.status().bits(),
                state.sp()
            );
            if is_undefined(opcode) {
                trace!("undefined opcode ${opcode:02X} at ${pc:04X} executed as NOP");
            }
        }

        let addr = resolve(state, &mut mem, instr.mode);
        dispatch::execute(state, &mut mem, instr, addr);
    }

    // ---------------------------------------------------------------------
    // Interrupt slot
    // ---------------------------------------------------------------------

    /// Record an interrupt to be serviced at the start of the next step.
    pub fn request_interrupt(&mut self, kind: Interrupt) {
        if self.interrupt == Some(Interrupt::Nmi) && kind == Interrupt::Irq {
            return;
        }
        self.interrupt = Some(kind);
    }

    pub fn pending_interrupt(&self) -> Option<Interrupt> {
        self.interrupt
    }

    /// Drop the pending request, if any, returning it.
    pub fn clear_interrupt(&mut self) -> Option<Interrupt> {
        self.interrupt.take()
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// Give back the bus and ticker.
    pub fn into_parts(self) -> (CpuState, B, T) {
        (self.state, self.bus, self.ticker)
    }

    // ---------------------------------------------------------------------
    // Snapshot / restore
    // ---------------------------------------------------------------------

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            interrupt: self.interrupt,
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.state = snapshot.state;
        self.interrupt = snapshot.interrupt;
    }
}

impl<B: Bus + std::fmt::Debug, T: Ticker + std::fmt::Debug> std::fmt::Debug for Cpu<B, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("state", &self.state)
            .field("interrupt", &self.interrupt)
            .field("bus", &self.bus)
            .field("ticker", &self.ticker)
            .finish()
    }
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
