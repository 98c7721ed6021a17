//! Memory bus interface.

/// Memory bus interface.
///
/// Components access memory through this trait. Reads are infallible: every
/// 16-bit address decodes to something, even if it is open bus.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Read a little-endian word.
    ///
    /// The high byte comes from `address + 1`, wrapping to $0000 when
    /// `address` is $FFFF.
    fn read_word(&mut self, address: u16) -> u16 {
        let low = self.read(address);
        let high = self.read(address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Read a little-endian word from a zero page pointer.
    ///
    /// The high byte comes from `(pointer + 1) & $FF`, so a pointer at $FF
    /// takes its high byte from $00 rather than $0100.
    fn read_word_zero_page_wrap(&mut self, pointer: u8) -> u16 {
        let low = self.read(u16::from(pointer));
        let high = self.read(u16::from(pointer.wrapping_add(1)));
        u16::from_le_bytes([low, high])
    }
}
