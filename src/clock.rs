/*!
Cycle accounting for drivers and tests.

The core reports elapsed time one cycle at a time through `Ticker::tick`.
A console driver would fan each tick out to the PPU (three dots) and the
APU; a test or the runner only needs the total, which `CycleCounter`
accumulates.
*/

use crate::bus::Ticker;

/// A `Ticker` that counts every cycle it is told about.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleCounter {
    total: u64,
}

impl CycleCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total cycles ticked since construction or the last `reset`.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn reset(&mut self) {
        self.total = 0;
    }

    /// Cycles elapsed since an earlier reading of `total()`.
    #[inline]
    pub fn since(&self, earlier: u64) -> u64 {
        self.total.wrapping_sub(earlier)
    }
}

impl Ticker for CycleCounter {
    #[inline]
    fn tick(&mut self) {
        self.total = self.total.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_tick() {
        let mut c = CycleCounter::new();
        for _ in 0..7 {
            c.tick();
        }
        assert_eq!(c.total(), 7);
        let mark = c.total();
        c.tick();
        c.tick();
        assert_eq!(c.since(mark), 2);
        c.reset();
        assert_eq!(c.total(), 0);
    }
}
