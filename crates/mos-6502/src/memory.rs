//! Flat 64K address space and the fixed 6502 memory map.
//!
//! The regions below carry meaning for the CPU but nothing enforces access
//! restrictions: any byte may be read or written through any address.

use emu_core::Bus;

/// Size of the address space in bytes.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// First and last zero page addresses.
pub const ZERO_PAGE_START: u16 = 0x0000;
pub const ZERO_PAGE_END: u16 = 0x00FF;

/// First and last stack page addresses.
pub const STACK_PAGE_START: u16 = 0x0100;
pub const STACK_PAGE_END: u16 = 0x01FF;

/// Conventional load address for user programs, just past the stack page.
pub const USER_PROGRAM_START: u16 = 0x0200;

/// NMI vector (low byte; high byte follows).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Zero-filled 64K RAM.
///
/// Word reads come from the [`Bus`] provided methods, which are the same
/// ones the addressing modes use.
///
/// Owned by the emulation session. The CPU only reads from it; writes come
/// from whoever loads the program image.
#[derive(Clone)]
pub struct Memory {
    ram: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .finish_non_exhaustive()
    }
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: [0; MEMORY_SIZE],
        }
    }

    /// Read one byte.
    #[must_use]
    pub fn read_byte(&self, address: u16) -> u8 {
        self.ram[usize::from(address)]
    }

    /// Write one byte.
    pub fn write_byte(&mut self, address: u16, value: u8) {
        self.ram[usize::from(address)] = value;
    }

    /// Copy `bytes` into memory starting at `address`.
    ///
    /// Addresses wrap past $FFFF back to $0000.
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        let mut addr = address;
        for &byte in bytes {
            self.write_byte(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Store a little-endian word, e.g. to seed one of the vectors.
    pub fn write_word(&mut self, address: u16, value: u16) {
        self.load(address, &value.to_le_bytes());
    }
}

impl Bus for Memory {
    fn read(&mut self, address: u16) -> u8 {
        self.read_byte(address)
    }

    fn write(&mut self, address: u16, value: u8) {
        self.write_byte(address, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_memory_is_zero_filled() {
        let mem = Memory::new();
        assert_eq!(mem.read_byte(0x0000), 0);
        assert_eq!(mem.read_byte(0x8000), 0);
        assert_eq!(mem.read_byte(0xFFFF), 0);
    }

    #[test]
    fn read_word_is_little_endian() {
        let mut mem = Memory::new();
        mem.load(0x1234, &[0x10, 0x12]);
        assert_eq!(mem.read_word(0x1234), 0x1210);
    }

    #[test]
    fn read_word_composes_bytes_across_the_address_space() {
        let mut mem = Memory::new();
        for addr in 0..=0xFFFFu16 {
            mem.write_byte(addr, (addr ^ (addr >> 8)) as u8);
        }
        for addr in 0..=0xFFFEu16 {
            let expected =
                u16::from(mem.read_byte(addr)) | (u16::from(mem.read_byte(addr + 1)) << 8);
            assert_eq!(mem.read_word(addr), expected, "at ${addr:04X}");
        }
    }

    #[test]
    fn read_word_at_top_of_memory_wraps_to_zero() {
        let mut mem = Memory::new();
        mem.write_byte(0xFFFF, 0x34);
        mem.write_byte(0x0000, 0x12);
        assert_eq!(mem.read_word(0xFFFF), 0x1234);
    }

    #[test]
    fn zero_page_word_wraps_within_page() {
        let mut mem = Memory::new();
        mem.write_byte(0x00FF, 0x34);
        mem.write_byte(0x0000, 0x12);
        mem.write_byte(0x0100, 0x99);
        let word = mem.read_word_zero_page_wrap(0xFF);
        assert_eq!(word >> 8, u16::from(mem.read_byte(0x0000)));
        assert_eq!(word, 0x1234);
    }

    #[test]
    fn load_wraps_past_top() {
        let mut mem = Memory::new();
        mem.load(0xFFFE, &[1, 2, 3]);
        assert_eq!(mem.read_byte(0xFFFE), 1);
        assert_eq!(mem.read_byte(0xFFFF), 2);
        assert_eq!(mem.read_byte(0x0000), 3);
    }

    #[test]
    fn write_word_seeds_reset_vector() {
        let mut mem = Memory::new();
        mem.write_word(RESET_VECTOR, USER_PROGRAM_START);
        assert_eq!(mem.read_byte(0xFFFC), 0x00);
        assert_eq!(mem.read_byte(0xFFFD), 0x02);
    }
}
