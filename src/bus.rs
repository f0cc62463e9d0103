/*!
bus: Trait abstractions decoupling the CPU core from whatever owns the
address space and the master clock.

Rationale:
- The CPU only needs two capabilities from the outside world: a byte-wide
  read/write surface over the 16-bit address space, and a sink that is told
  each time a processor cycle elapses.
- Accepting traits instead of a concrete console bus:
  * Keeps mapping (RAM mirroring, PPU/APU register windows, cartridge
    banking) entirely on the implementor's side.
  * Lets tests drive the core with a flat 64 KiB array and a counter.
  * Allows instrumentation (recording every access) without touching the core.

Contract:
- `Bus::read` takes `&mut self` because reads of mapped I/O registers have
  side effects on real hardware (e.g. clearing a status latch).
- `Ticker::tick` is invoked exactly once per elapsed CPU cycle, never batched.
- Both are infallible at this layer. An implementor that needs to model a
  fault must do so on its own side of the interface.
*/

/// Byte-addressable memory surface seen by the CPU.
pub trait Bus {
    /// Read a byte from the CPU-visible address space.
    fn read(&mut self, addr: u16) -> u8;

    /// Write a byte to the CPU-visible address space.
    fn write(&mut self, addr: u16, value: u8);
}

/// Cycle accounting sink. Called once per processor cycle.
pub trait Ticker {
    fn tick(&mut self);
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

impl<T: Ticker + ?Sized> Ticker for &mut T {
    #[inline]
    fn tick(&mut self) {
        (**self).tick()
    }
}

impl<B: Bus + ?Sized> Bus for Box<B> {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

impl<T: Ticker + ?Sized> Ticker for Box<T> {
    #[inline]
    fn tick(&mut self) {
        (**self).tick()
    }
}
