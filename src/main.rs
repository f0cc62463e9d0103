//! Runner: load a raw 6502 binary into flat RAM and step the CPU.
//!
//! ```text
//! nes6502 [options] IMAGE
//!     -o, --origin ADDR     load address of IMAGE (default $0000)
//!     -e, --entry ADDR      start PC (default: reset vector read from memory)
//!     -n, --steps N         stop after N steps (default 1000000)
//!         --nmi-every N     request an NMI every N cycles
//!         --irq-every N     request an IRQ every N cycles while I is clear
//!     -t, --trap            stop when an instruction jumps to itself
//!     -v, --verbose         raise log level (repeatable; -vv disassembles
//!                           each instruction, -vvv adds register traces)
//!     -h, --help            print usage
//! ```
//!
//! Numbers accept `$C000`, `0xC000` or plain decimal.

use std::fs;
use std::path::PathBuf;

use getopts::Options;
use log::{Level, debug, info, log_enabled, warn};
use thiserror::Error;

use nes6502::logger::StdoutLogger;
use nes6502::{Cpu, CycleCounter, FlatRam, Interrupt, LoadError, Status};
use nes6502::cpu::{RESET_VECTOR, decode};

// Exit codes used by the runner.
const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1; // Generic error.
const EXIT_INVALID_IMAGE: i32 = 2; // Image missing or does not fit.
const EXIT_USAGE: i32 = 3; // Bad command line.
const EXIT_TRAPPED: i32 = 4; // --trap hit before the step limit.

const DEFAULT_STEPS: u64 = 1_000_000;

#[derive(Debug, Error)]
enum RunError {
    #[error("{0}")]
    Args(#[from] getopts::Fail),
    #[error("missing IMAGE argument")]
    MissingImage,
    #[error("invalid value {value:?} for --{flag}")]
    InvalidNumber { flag: &'static str, value: String },
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl RunError {
    fn exit_code(&self) -> i32 {
        match self {
            RunError::Args(_) | RunError::MissingImage | RunError::InvalidNumber { .. } => EXIT_USAGE,
            RunError::Io { .. } | RunError::Load(_) => EXIT_INVALID_IMAGE,
            RunError::Logger(_) => EXIT_FAILURE,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct RunConfig {
    image: PathBuf,
    origin: u16,
    entry: Option<u16>,
    steps: u64,
    nmi_every: Option<u64>,
    irq_every: Option<u64>,
    trap: bool,
    verbosity: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    StepLimit,
    Trapped(u16),
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("o", "origin", "load address of IMAGE (default $0000)", "ADDR");
    opts.optopt("e", "entry", "start PC (default: reset vector)", "ADDR");
    opts.optopt("n", "steps", "stop after N steps", "N");
    opts.optopt("", "nmi-every", "request an NMI every N cycles", "N");
    opts.optopt("", "irq-every", "request an IRQ every N cycles while I is clear", "N");
    opts.optflag("t", "trap", "stop when an instruction jumps to itself");
    opts.optflagmulti("v", "verbose", "raise log level (repeatable)");
    opts.optflag("h", "help", "print usage");
    opts
}

/// Parse `$hex`, `0xhex` or decimal.
fn parse_number(flag: &'static str, value: &str) -> Result<u64, RunError> {
    let invalid = || RunError::InvalidNumber {
        flag,
        value: value.to_string(),
    };
    let parsed = if let Some(hex) = value.strip_prefix('$') {
        u64::from_str_radix(hex, 16)
    } else if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        value.parse::<u64>()
    };
    parsed.map_err(|_| invalid())
}

fn parse_address(flag: &'static str, value: &str) -> Result<u16, RunError> {
    let n = parse_number(flag, value)?;
    u16::try_from(n).map_err(|_| RunError::InvalidNumber {
        flag,
        value: value.to_string(),
    })
}

fn parse_period(flag: &'static str, value: Option<String>) -> Result<Option<u64>, RunError> {
    match value {
        None => Ok(None),
        Some(v) => match parse_number(flag, &v)? {
            0 => Err(RunError::InvalidNumber { flag, value: v }),
            n => Ok(Some(n)),
        },
    }
}

/// `None` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<RunConfig>, RunError> {
    let matches = options().parse(args)?;
    if matches.opt_present("h") {
        return Ok(None);
    }
    let image = matches.free.first().ok_or(RunError::MissingImage)?;
    let origin = match matches.opt_str("origin") {
        Some(v) => parse_address("origin", &v)?,
        None => 0x0000,
    };
    let entry = match matches.opt_str("entry") {
        Some(v) => Some(parse_address("entry", &v)?),
        None => None,
    };
    let steps = match matches.opt_str("steps") {
        Some(v) => parse_number("steps", &v)?,
        None => DEFAULT_STEPS,
    };
    Ok(Some(RunConfig {
        image: PathBuf::from(image),
        origin,
        entry,
        steps,
        nmi_every: parse_period("nmi-every", matches.opt_str("nmi-every"))?,
        irq_every: parse_period("irq-every", matches.opt_str("irq-every"))?,
        trap: matches.opt_present("trap"),
        verbosity: matches.opt_count("verbose"),
    }))
}

/// One listing line read with `peek`, e.g. `8000  A9 10     LDA #$10`.
/// Undocumented opcodes are marked with `*`.
fn disassemble_at(ram: &FlatRam, pc: u16) -> String {
    let instr = decode(ram.peek(pc));
    let bytes: Vec<String> = (0..instr.byte_len())
        .map(|i| format!("{:02X}", ram.peek(pc.wrapping_add(i))))
        .collect();
    let lo = ram.peek(pc.wrapping_add(1));
    let hi = ram.peek(pc.wrapping_add(2));
    let mark = if instr.mnemonic.is_undocumented() { '*' } else { ' ' };
    format!(
        "{pc:04X}  {:<8} {mark}{}",
        bytes.join(" "),
        instr.disassemble(pc, lo, hi)
    )
}

/// Drive `cpu` per `config`. Returns why the run stopped and how many steps ran.
fn run(cpu: &mut Cpu<FlatRam, CycleCounter>, config: &RunConfig) -> (Outcome, u64) {
    let mut next_nmi = config.nmi_every;
    let mut next_irq = config.irq_every;

    for step in 0..config.steps {
        let now = cpu.ticker().total();
        if let (Some(due), Some(every)) = (next_nmi, config.nmi_every) {
            if now >= due {
                cpu.request_interrupt(Interrupt::Nmi);
                next_nmi = Some(due + every);
            }
        }
        if let (Some(due), Some(every)) = (next_irq, config.irq_every) {
            if now >= due && !cpu.state().flag(Status::IRQ_DISABLE) {
                cpu.request_interrupt(Interrupt::Irq);
                // A pending NMI keeps the slot; retry on a later step.
                if cpu.pending_interrupt() == Some(Interrupt::Irq) {
                    next_irq = Some(due + every);
                }
            }
        }

        let servicing = cpu.pending_interrupt().is_some();
        let pc = cpu.state().pc();
        if !servicing && log_enabled!(Level::Debug) {
            debug!("{}", disassemble_at(cpu.bus(), pc));
        }
        cpu.step();
        if config.trap && !servicing && cpu.state().pc() == pc {
            return (Outcome::Trapped(pc), step + 1);
        }
    }
    (Outcome::StepLimit, config.steps)
}

fn execute(config: &RunConfig) -> Result<Outcome, RunError> {
    let image = fs::read(&config.image).map_err(|source| RunError::Io {
        path: config.image.clone(),
        source,
    })?;
    let ram = FlatRam::with_image(config.origin, &image)?;
    info!(
        "loaded {} bytes from {} at ${:04X}",
        image.len(),
        config.image.display(),
        config.origin
    );

    let entry = config.entry.unwrap_or_else(|| ram.peek_word(RESET_VECTOR));
    let mut cpu = Cpu::new(ram, CycleCounter::new());
    cpu.power_on();
    cpu.state_mut().set_pc(entry);
    info!("entry ${entry:04X}");

    let (outcome, steps) = run(&mut cpu, config);
    let s = cpu.state();
    match outcome {
        Outcome::StepLimit => warn!("step limit of {steps} reached"),
        Outcome::Trapped(pc) => info!("trapped at ${pc:04X} after {steps} steps"),
    }
    println!(
        "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} steps:{} cycles:{}",
        s.pc(),
        s.a(),
        s.x(),
        s.y(),
        s.status().bits(),
        s.sp(),
        steps,
        cpu.ticker().total()
    );
    Ok(outcome)
}

fn usage(program: &str) -> String {
    let brief = format!("Usage: {program} [options] IMAGE");
    options().usage(&brief)
}

/// Parses arguments, runs, and returns an exit code.
fn init() -> i32 {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("nes6502");

    let config = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print!("{}", usage(program));
            return EXIT_SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            eprint!("{}", usage(program));
            return e.exit_code();
        }
    };

    if let Err(e) = StdoutLogger::init(StdoutLogger::level_for_verbosity(config.verbosity)) {
        let e = RunError::from(e);
        eprintln!("{e}");
        return e.exit_code();
    }

    match execute(&config) {
        Ok(Outcome::StepLimit) => EXIT_SUCCESS,
        Ok(Outcome::Trapped(_)) => EXIT_TRAPPED,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}

fn main() {
    let exit_code = init();
    std::process::exit(exit_code);
}
