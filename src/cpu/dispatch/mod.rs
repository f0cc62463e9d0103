/*!
dispatch - Instruction executor: routes a decoded instruction to its family.

Overview
========
`execute` runs after the opcode has been fetched and the operand resolved
(`addressing::resolve`). It matches exhaustively on the mnemonic, so a new
`Mnemonic` variant does not compile until it is routed here.

Families
========
    load_store   LDA LDX LDY STA STX STY
    transfer     TAX TAY TXA TYA TSX TXS INX INY DEX DEY
    stack        PHA PHP PLA PLP
    logical      AND ORA EOR BIT
    arithmetic   ADC SBC
    compare      CMP CPX CPY
    rmw          ASL LSR ROL ROR INC DEC
    branches     BCC BCS BEQ BMI BNE BPL BVC BVS
    control_flow JMP JSR RTS RTI BRK
    flags        CLC CLD CLI CLV SEC SED SEI
    unofficial   NOP (all aliases) LAX SAX DCP ISB SLO RLA SRE RRA

Cycle Accounting
================
Handlers never count cycles themselves. Every bus access they make goes
through `CycleBus` and ticks once; internal cycles are charged with
`idle`. The opcode fetch and addressing cycles have already been charged
by the time a handler runs.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod flags;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod rmw;
pub(crate) mod stack;
pub(crate) mod transfer;
pub(crate) mod unofficial;

use crate::cpu::access::CycleBus;
use crate::cpu::instruction::{Instruction, Mnemonic};
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;

/// Execute `instr` against the already-resolved effective address `addr`.
pub(crate) fn execute<M: CycleBus>(cpu: &mut CpuState, mem: &mut M, instr: Instruction, addr: u16) {
    use Mnemonic::*;
    let mode = instr.mode;
    match instr.mnemonic {
        // Load / Store
        Lda => load_store::lda(cpu, mem, addr),
        Ldx => load_store::ldx(cpu, mem, addr),
        Ldy => load_store::ldy(cpu, mem, addr),
        Sta => load_store::sta(cpu, mem, addr),
        Stx => load_store::stx(cpu, mem, addr),
        Sty => load_store::sty(cpu, mem, addr),

        // Register transfers / register increments
        Tax => transfer::tax(cpu, mem),
        Tay => transfer::tay(cpu, mem),
        Txa => transfer::txa(cpu, mem),
        Tya => transfer::tya(cpu, mem),
        Tsx => transfer::tsx(cpu, mem),
        Txs => transfer::txs(cpu, mem),
        Inx => transfer::inx(cpu, mem),
        Iny => transfer::iny(cpu, mem),
        Dex => transfer::dex(cpu, mem),
        Dey => transfer::dey(cpu, mem),

        // Stack
        Pha => stack::pha(cpu, mem),
        Php => stack::php(cpu, mem),
        Pla => stack::pla(cpu, mem),
        Plp => stack::plp(cpu, mem),

        // Logical
        And => logical::and(cpu, mem, addr),
        Ora => logical::ora(cpu, mem, addr),
        Eor => logical::eor(cpu, mem, addr),
        Bit => logical::bit(cpu, mem, addr),

        // Arithmetic / compare
        Adc => arithmetic::adc(cpu, mem, addr),
        Sbc => arithmetic::sbc(cpu, mem, addr),
        Cmp => compare::cmp(cpu, mem, addr),
        Cpx => compare::cpx(cpu, mem, addr),
        Cpy => compare::cpy(cpu, mem, addr),

        // Shifts / rotates / memory increments
        Asl => rmw::asl(cpu, mem, mode, addr),
        Lsr => rmw::lsr(cpu, mem, mode, addr),
        Rol => rmw::rol(cpu, mem, mode, addr),
        Ror => rmw::ror(cpu, mem, mode, addr),
        Inc => rmw::inc(cpu, mem, addr),
        Dec => rmw::dec(cpu, mem, addr),

        // Branches
        Bcc => branches::handle(cpu, mem, Status::CARRY, false, addr),
        Bcs => branches::handle(cpu, mem, Status::CARRY, true, addr),
        Bne => branches::handle(cpu, mem, Status::ZERO, false, addr),
        Beq => branches::handle(cpu, mem, Status::ZERO, true, addr),
        Bpl => branches::handle(cpu, mem, Status::NEGATIVE, false, addr),
        Bmi => branches::handle(cpu, mem, Status::NEGATIVE, true, addr),
        Bvc => branches::handle(cpu, mem, Status::OVERFLOW, false, addr),
        Bvs => branches::handle(cpu, mem, Status::OVERFLOW, true, addr),

        // Jumps / returns / software interrupt
        Jmp => control_flow::jmp(cpu, addr),
        Jsr => control_flow::jsr(cpu, mem, addr),
        Rts => control_flow::rts(cpu, mem),
        Rti => control_flow::rti(cpu, mem),
        Brk => control_flow::brk(cpu, mem),

        // Flag control
        Clc => flags::handle(cpu, mem, Status::CARRY, false),
        Cld => flags::handle(cpu, mem, Status::DECIMAL, false),
        Cli => flags::handle(cpu, mem, Status::IRQ_DISABLE, false),
        Clv => flags::handle(cpu, mem, Status::OVERFLOW, false),
        Sec => flags::handle(cpu, mem, Status::CARRY, true),
        Sed => flags::handle(cpu, mem, Status::DECIMAL, true),
        Sei => flags::handle(cpu, mem, Status::IRQ_DISABLE, true),

        // NOP and undocumented combined operations
        Nop => unofficial::nop(mem, mode, addr),
        Lax => unofficial::lax(cpu, mem, addr),
        Sax => unofficial::sax(cpu, mem, addr),
        Dcp => unofficial::dcp(cpu, mem, addr),
        Isb => unofficial::isb(cpu, mem, addr),
        Slo => unofficial::slo(cpu, mem, addr),
        Rla => unofficial::rla(cpu, mem, addr),
        Sre => unofficial::sre(cpu, mem, addr),
        Rra => unofficial::rra(cpu, mem, addr),
    }
}
