/*!
cpu::mod - Public façade for the NMOS 6502 (2A03) CPU core.

Layout:

    status.rs       - `Status` bitset, push patterns and the pull rule.
    state.rs        - `CpuState` register file (A/X/Y setters recompute Z/N).
    instruction.rs  - `Mnemonic`, `AddressingMode`, `Penalty`, `Instruction`.
    table.rs        - Static 256-entry decode table and `decode`.
    access.rs       - `CycleBus`: one tick per bus access, plus idle cycles.
    addressing.rs   - Operand resolution for all 13 addressing modes.
    execute.rs      - Semantic helpers (ALU, shifts, RMW, branch).
    dispatch/       - Exhaustive per-mnemonic executor, split into families.
    interrupt.rs    - `Interrupt` kinds, vectors and the entry sequence.
    core/           - `Cpu<B, T>` façade: step, interrupt slot, snapshots.

The public surface is the `Cpu` façade together with the register/flag
types and the decoder. Internal module layout is not part of the API.

Usage:
```rust
use nes6502::{Cpu, CycleCounter, FlatRam, Interrupt};

let mut ram = FlatRam::new();
ram.poke(0x8000, 0xEA); // NOP
let mut cpu = Cpu::new(ram, CycleCounter::new());
cpu.power_on();
cpu.state_mut().set_pc(0x8000);
cpu.step();
assert_eq!(cpu.ticker().total(), 2);

cpu.request_interrupt(Interrupt::Nmi);
cpu.step();
assert_eq!(cpu.ticker().total(), 9);
```
*/

pub(crate) mod access;
pub(crate) mod addressing;
pub mod core;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod instruction;
pub mod interrupt;
pub mod state;
pub mod status;
pub mod table;


pub use crate::cpu::core::{Cpu, Snapshot};
pub use crate::cpu::instruction::{AddressingMode, Instruction, Mnemonic, Penalty};
pub use crate::cpu::interrupt::{IRQ_VECTOR, Interrupt, NMI_VECTOR, RESET_VECTOR};
pub use crate::cpu::state::CpuState;
pub use crate::cpu::status::Status;
pub use crate::cpu::table::decode;
