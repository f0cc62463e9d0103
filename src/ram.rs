/*!
RAM module: a flat 64 KiB address space implementing `Bus`.

Address map:
- $0000-$FFFF: plain read/write storage, no mirroring, no mapped I/O.

This is the memory used by the test suite and the runner binary. A console
emulator supplies its own `Bus` with real mapping instead; the CPU core
never depends on this type.
*/

use thiserror::Error;

use crate::bus::Bus;

/// Size of the flat address space (in bytes).
pub const ADDRESS_SPACE_SIZE: usize = 0x1_0000;

/// Errors raised while placing a program image into memory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("image of {len} bytes at ${origin:04X} overruns the 64 KiB address space")]
    Overrun { origin: u16, len: usize },
    #[error("empty image")]
    Empty,
}

/// 64 KiB of RAM covering the whole CPU address space.
pub struct FlatRam {
    data: Box<[u8; ADDRESS_SPACE_SIZE]>,
}

impl Default for FlatRam {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatRam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatRam")
            .field("len", &self.data.len())
            .finish()
    }
}

impl FlatRam {
    /// Create a new RAM instance initialized to 0.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE_SIZE]),
        }
    }

    /// Create RAM pre-filled with `bytes` starting at `origin`.
    pub fn with_image(origin: u16, bytes: &[u8]) -> Result<Self, LoadError> {
        let mut ram = Self::new();
        ram.load(origin, bytes)?;
        Ok(ram)
    }

    /// Clear RAM contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Copy `bytes` into memory starting at `origin`.
    ///
    /// The image must fit below $10000; it is never wrapped around to $0000.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) -> Result<(), LoadError> {
        if bytes.is_empty() {
            return Err(LoadError::Empty);
        }
        let start = origin as usize;
        let end = start + bytes.len();
        if end > ADDRESS_SPACE_SIZE {
            return Err(LoadError::Overrun {
                origin,
                len: bytes.len(),
            });
        }
        self.data[start..end].copy_from_slice(bytes);
        log::debug!(
            "loaded {} bytes at ${:04X}-${:04X}",
            bytes.len(),
            origin,
            end - 1
        );
        Ok(())
    }

    /// Read a byte without going through the CPU (no tick). For tests/tools.
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Write a byte without going through the CPU (no tick). For tests/tools.
    #[inline]
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Little-endian word at `addr`; the high byte comes from `addr + 1` wrapping at $FFFF.
    #[inline]
    pub fn peek_word(&self, addr: u16) -> u16 {
        let lo = self.peek(addr) as u16;
        let hi = self.peek(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Store a little-endian word (e.g. an interrupt vector).
    #[inline]
    pub fn poke_word(&mut self, addr: u16, value: u16) {
        self.poke(addr, value as u8);
        self.poke(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Expose the internal slice (read-only). Useful for diagnostics or hashing.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Bus for FlatRam {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
