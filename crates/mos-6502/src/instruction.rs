//! Opcode decoding.
//!
//! One table maps opcode bytes to instructions. The dispatcher and the
//! addressing resolver both work from the decoded [`Instruction`], so they
//! cannot disagree about which opcodes exist.

use crate::AddressingMode;

/// LDA #$nn
pub const LDA_IMMEDIATE: u8 = 0xA9;
/// LDA $nn
pub const LDA_ZERO_PAGE: u8 = 0xA5;
/// LDA $nn,X
pub const LDA_ZERO_PAGE_X: u8 = 0xB5;
/// LDA $nnnn
pub const LDA_ABSOLUTE: u8 = 0xAD;
/// LDA $nnnn,X
pub const LDA_ABSOLUTE_X: u8 = 0xBD;
/// LDA $nnnn,Y
pub const LDA_ABSOLUTE_Y: u8 = 0xB9;
/// LDA ($nn,X)
pub const LDA_INDEXED_INDIRECT: u8 = 0xA1;
/// LDA ($nn),Y
pub const LDA_INDIRECT_INDEXED: u8 = 0xB1;

/// Every LDA encoding, in opcode order.
pub const LDA_OPCODES: [(u8, AddressingMode); 8] = [
    (LDA_INDEXED_INDIRECT, AddressingMode::IndexedIndirect),
    (LDA_ZERO_PAGE, AddressingMode::ZeroPage),
    (LDA_IMMEDIATE, AddressingMode::Immediate),
    (LDA_ABSOLUTE, AddressingMode::Absolute),
    (LDA_INDIRECT_INDEXED, AddressingMode::IndirectIndexed),
    (LDA_ZERO_PAGE_X, AddressingMode::ZeroPageX),
    (LDA_ABSOLUTE_Y, AddressingMode::AbsoluteY),
    (LDA_ABSOLUTE_X, AddressingMode::AbsoluteX),
];

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Load accumulator.
    Lda(AddressingMode),
}

impl Instruction {
    /// Decode an opcode byte. `None` for anything not implemented.
    #[must_use]
    pub const fn decode(opcode: u8) -> Option<Self> {
        let mode = match opcode {
            LDA_IMMEDIATE => AddressingMode::Immediate,
            LDA_ZERO_PAGE => AddressingMode::ZeroPage,
            LDA_ZERO_PAGE_X => AddressingMode::ZeroPageX,
            LDA_ABSOLUTE => AddressingMode::Absolute,
            LDA_ABSOLUTE_X => AddressingMode::AbsoluteX,
            LDA_ABSOLUTE_Y => AddressingMode::AbsoluteY,
            LDA_INDEXED_INDIRECT => AddressingMode::IndexedIndirect,
            LDA_INDIRECT_INDEXED => AddressingMode::IndirectIndexed,
            _ => return None,
        };
        Some(Self::Lda(mode))
    }

    /// The opcode byte that encodes this instruction.
    #[must_use]
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Lda(mode) => match mode {
                AddressingMode::Immediate => LDA_IMMEDIATE,
                AddressingMode::ZeroPage => LDA_ZERO_PAGE,
                AddressingMode::ZeroPageX => LDA_ZERO_PAGE_X,
                AddressingMode::Absolute => LDA_ABSOLUTE,
                AddressingMode::AbsoluteX => LDA_ABSOLUTE_X,
                AddressingMode::AbsoluteY => LDA_ABSOLUTE_Y,
                AddressingMode::IndexedIndirect => LDA_INDEXED_INDIRECT,
                AddressingMode::IndirectIndexed => LDA_INDIRECT_INDEXED,
            },
        }
    }

    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lda(_) => "LDA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_agrees_with_decoder() {
        for (opcode, mode) in LDA_OPCODES {
            let instr = Instruction::decode(opcode);
            assert_eq!(instr, Some(Instruction::Lda(mode)), "opcode ${opcode:02X}");
            assert_eq!(Instruction::Lda(mode).opcode(), opcode);
        }
    }

    #[test]
    fn exactly_eight_opcodes_decode() {
        let decoded = (0..=0xFF_u8)
            .filter(|&op| Instruction::decode(op).is_some())
            .count();
        assert_eq!(decoded, LDA_OPCODES.len());
    }

    #[test]
    fn non_lda_opcodes_are_rejected() {
        // STA zp, NOP, BRK, LDX #
        for opcode in [0x85, 0xEA, 0x00, 0xA2] {
            assert_eq!(Instruction::decode(opcode), None);
        }
    }
}
