//! 6502 processor status register (P).
//!
//! The status register contains flags that reflect the result of operations
//! and control CPU behavior. Each flag is a named bit mask; the register is
//! never laid out through compiler-dependent bitfields.

/// Carry flag - set if operation resulted in carry/borrow.
pub const C: u8 = 0x01;

/// Zero flag - set if result is zero.
pub const Z: u8 = 0x02;

/// Interrupt disable - when set, IRQ interrupts are ignored.
pub const I: u8 = 0x04;

/// Decimal mode - enables BCD arithmetic for ADC/SBC.
pub const D: u8 = 0x08;

/// Break flag.
pub const B: u8 = 0x10;

/// Unused bit - always reads as 1 on hardware, never stored here.
pub const U: u8 = 0x20;

/// Overflow flag - set if signed arithmetic overflowed.
pub const V: u8 = 0x40;

/// Negative flag - set if result has bit 7 set.
pub const N: u8 = 0x80;

/// Processor status register.
///
/// Holds the seven real flags. Every flag starts clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Status(pub u8);

impl Status {
    /// Create a status register with every flag clear.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create status from a raw P value. The unused bit is dropped.
    #[must_use]
    pub const fn from_byte(value: u8) -> Self {
        Self(value & !U)
    }

    /// Raw P value as the hardware would present it, unused bit set.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self.0 | U
    }

    /// Check if a flag is set.
    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set a flag.
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Clear a flag.
    pub fn clear(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    /// Set or clear a flag based on condition.
    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }

    /// Update N and Z flags based on a value. No other flag is touched.
    pub fn update_nz(&mut self, value: u8) {
        self.set_if(N, value & 0x80 != 0);
        self.set_if(Z, value == 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_nz_zero_sets_z_only() {
        let mut p = Status::new();
        p.update_nz(0x00);
        assert!(p.is_set(Z));
        assert!(!p.is_set(N));
    }

    #[test]
    fn update_nz_negative_sets_n_only() {
        let mut p = Status::new();
        p.update_nz(0x80);
        assert!(p.is_set(N));
        assert!(!p.is_set(Z));
    }

    #[test]
    fn update_nz_preserves_other_flags() {
        let mut p = Status(C | I | D | B | V | Z);
        p.update_nz(0x01);
        assert_eq!(p, Status(C | I | D | B | V));
    }

    #[test]
    fn unused_bit_only_appears_in_byte_view() {
        let p = Status::from_byte(0xFF);
        assert!(!p.is_set(U));
        assert_eq!(p.to_byte(), 0xFF);
        assert_eq!(Status::new().to_byte(), U);
    }
}
