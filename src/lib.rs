#![doc = r#"
nes6502 library crate.

A cycle-accurate NMOS 6502 CPU core as found in the NES 2A03: the full
documented instruction set plus the eight commonly emulated undocumented
combined operations, with binary-only arithmetic.

Modules:
- bus: the `Bus` (memory) and `Ticker` (clock) capabilities the core consumes
- clock: `CycleCounter`, a ticker that totals cycles
- cpu: 6502 CPU core (facade + state + decode + addressing + dispatch)
- logger: timestamped stdout logger used by the runner binary
- ram: `FlatRam`, a flat 64 KiB bus for tests and the runner

In tests, a recording bus and CPU builders are available under
`crate::test_utils`.
"#]

pub mod bus;
pub mod clock;
pub mod cpu;
pub mod logger;
pub mod ram;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, Ticker};
pub use clock::CycleCounter;
pub use cpu::{CpuState, Interrupt, Snapshot, Status};
pub use cpu::core::Cpu;
pub use ram::{FlatRam, LoadError};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
