/*!
Timestamped stdout logger for the runner.

Lines look like `[2026-10-14 09:30:01.123] -- [TRACE] 8000  A9  LDA #imm ...`.
The core only talks to the `log` facade; installing this logger is the
binary's job.
*/

use chrono::{DateTime, Local};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct StdoutLogger {
    level: LevelFilter,
}

impl StdoutLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install as the global logger at `level`.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Map a repeat count of `-v` to a level: 0 warn, 1 info, 2 debug, 3+ trace.
    pub fn level_for_verbosity(count: usize) -> LevelFilter {
        match count {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn format(record: &Record<'_>) -> String {
        let local: DateTime<Local> = Local::now();
        format!(
            "[{}] -- [{}] {}",
            local.format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            println!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}
