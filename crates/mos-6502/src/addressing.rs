//! LDA addressing modes.
//!
//! - Immediate: #$nn (literal value)
//! - Zero Page: $nn (8-bit address in page zero)
//! - Zero Page,X: $nn,X (8-bit address + X, wraps in page zero)
//! - Absolute: $nnnn (16-bit address)
//! - Absolute,X: $nnnn,X (16-bit address + X, may cross page)
//! - Absolute,Y: $nnnn,Y (16-bit address + Y, may cross page)
//! - Indexed Indirect: ($nn,X) (pointer in zero page indexed by X)
//! - Indirect Indexed: ($nn),Y (zero page pointer + Y)
//!
//! Resolution reads operand bytes starting at the current PC but does not
//! move it; the dispatcher advances PC by [`Operand::pc_advance`].

use emu_core::Bus;

use crate::Registers;

/// Addressing mode of a decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Immediate,
    ZeroPage,
    ZeroPageX,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    /// ($nn,X)
    IndexedIndirect,
    /// ($nn),Y
    IndirectIndexed,
}

impl AddressingMode {
    /// Operand bytes following the opcode.
    #[must_use]
    pub const fn operand_len(self) -> u8 {
        match self {
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::IndexedIndirect
            | Self::IndirectIndexed => 1,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY => 2,
        }
    }

    /// Cycles after the opcode fetch, before any page-cross penalty.
    #[must_use]
    pub const fn base_cycles(self) -> u8 {
        match self {
            Self::Immediate => 1,
            Self::ZeroPage => 2,
            Self::ZeroPageX | Self::Absolute | Self::AbsoluteX | Self::AbsoluteY => 3,
            Self::IndirectIndexed => 4,
            Self::IndexedIndirect => 5,
        }
    }

    /// Whether indexing can cost an extra cycle on a page crossing.
    #[must_use]
    pub const fn has_page_penalty(self) -> bool {
        matches!(
            self,
            Self::AbsoluteX | Self::AbsoluteY | Self::IndirectIndexed
        )
    }

    /// Assembler-style operand syntax, for logs.
    #[must_use]
    pub const fn syntax(self) -> &'static str {
        match self {
            Self::Immediate => "#$nn",
            Self::ZeroPage => "$nn",
            Self::ZeroPageX => "$nn,X",
            Self::Absolute => "$nnnn",
            Self::AbsoluteX => "$nnnn,X",
            Self::AbsoluteY => "$nnnn,Y",
            Self::IndexedIndirect => "($nn,X)",
            Self::IndirectIndexed => "($nn),Y",
        }
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Value to load.
    pub value: u8,
    /// Effective address, `None` for immediate operands.
    pub address: Option<u16>,
    /// Bytes PC moves past the operand.
    pub pc_advance: u8,
    /// Cycles excluding the opcode fetch, page-cross penalty included.
    pub cycles: u8,
    /// Indexing carried out of the base address's page.
    pub page_crossed: bool,
}

/// Whether adding `index` to the low byte of `base` carries into the next
/// page. Evaluated on the pre-index base address.
#[must_use]
pub const fn page_crossed(base: u16, index: u8) -> bool {
    (base & 0x00FF) + index as u16 >= 0x0100
}

/// Resolve `mode` against the operand bytes at `regs.pc`.
///
/// Never fails: every operand byte is in range and every computed address
/// wraps within 16 bits.
pub fn resolve<B: Bus>(mode: AddressingMode, regs: &Registers, bus: &mut B) -> Operand {
    let pc = regs.pc;

    // Indexed modes also yield the pre-index base and the index applied
    let (address, indexed) = match mode {
        AddressingMode::Immediate => {
            return Operand {
                value: bus.read(pc),
                address: None,
                pc_advance: mode.operand_len(),
                cycles: mode.base_cycles(),
                page_crossed: false,
            };
        }
        AddressingMode::ZeroPage => (u16::from(bus.read(pc)), None),
        AddressingMode::ZeroPageX => {
            // Stays inside page zero
            let base = bus.read(pc);
            (u16::from(base.wrapping_add(regs.x)), Some((u16::from(base), regs.x)))
        }
        AddressingMode::Absolute => (bus.read_word(pc), None),
        AddressingMode::AbsoluteX => {
            let base = bus.read_word(pc);
            (base.wrapping_add(u16::from(regs.x)), Some((base, regs.x)))
        }
        AddressingMode::AbsoluteY => {
            let base = bus.read_word(pc);
            (base.wrapping_add(u16::from(regs.y)), Some((base, regs.y)))
        }
        AddressingMode::IndexedIndirect => {
            let pointer = bus.read(pc).wrapping_add(regs.x);
            (bus.read_word_zero_page_wrap(pointer), None)
        }
        AddressingMode::IndirectIndexed => {
            let pointer = bus.read(pc);
            let base = bus.read_word_zero_page_wrap(pointer);
            (base.wrapping_add(u16::from(regs.y)), Some((base, regs.y)))
        }
    };

    let crossed = mode.has_page_penalty()
        && indexed.is_some_and(|(base, index)| page_crossed(base, index));

    Operand {
        value: bus.read(address),
        address: Some(address),
        pc_advance: mode.operand_len(),
        cycles: mode.base_cycles() + u8::from(crossed),
        page_crossed: crossed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Memory;

    fn regs_at(pc: u16, x: u8, y: u8) -> Registers {
        Registers {
            pc,
            x,
            y,
            ..Registers::new()
        }
    }

    #[test]
    fn page_cross_uses_low_byte_of_base() {
        assert!(page_crossed(0x12FF, 0x01));
        assert!(!page_crossed(0x1210, 0x01));
        assert!(!page_crossed(0x1200, 0xFF));
        assert!(page_crossed(0x1201, 0xFF));
        assert!(!page_crossed(0xFFFF, 0x00));
    }

    #[test]
    fn only_indexed_absolute_and_indirect_y_pay_penalty() {
        let penalised: Vec<_> = crate::instruction::LDA_OPCODES
            .iter()
            .filter_map(|&(_, mode)| mode.has_page_penalty().then_some(mode))
            .collect();
        assert_eq!(
            penalised,
            vec![
                AddressingMode::IndirectIndexed,
                AddressingMode::AbsoluteY,
                AddressingMode::AbsoluteX,
            ]
        );
    }

    #[test]
    fn resolve_charges_penalty_only_for_penalised_modes() {
        // Every operand and pointer low byte is $FF, so any index of 1
        // carries out of its page.
        for (_, mode) in crate::instruction::LDA_OPCODES {
            let mut mem = Memory::new();
            mem.load(0x0200, &[0xFF, 0x30]);
            mem.write_byte(0x00FF, 0xFF);
            let op = resolve(mode, &regs_at(0x0200, 0x01, 0x01), &mut mem);

            assert_eq!(op.page_crossed, mode.has_page_penalty(), "{mode:?}");
            assert_eq!(
                op.cycles,
                mode.base_cycles() + u8::from(mode.has_page_penalty()),
                "{mode:?}"
            );
        }
    }

    #[test]
    fn immediate_has_no_effective_address() {
        let mut mem = Memory::new();
        mem.load(0x0200, &[0x45]);
        let op = resolve(AddressingMode::Immediate, &regs_at(0x0200, 0, 0), &mut mem);
        assert_eq!(op.value, 0x45);
        assert_eq!(op.address, None);
        assert_eq!((op.pc_advance, op.cycles), (1, 1));
    }

    #[test]
    fn zero_page_x_wraps_within_page() {
        let mut mem = Memory::new();
        mem.load(0x0200, &[0xF0]);
        mem.write_byte(0x0010, 0x77);
        mem.write_byte(0x0110, 0x99);
        let op = resolve(AddressingMode::ZeroPageX, &regs_at(0x0200, 0x20, 0), &mut mem);
        assert_eq!(op.address, Some(0x0010));
        assert_eq!(op.value, 0x77);
        assert_eq!(op.cycles, 3);
        assert!(!op.page_crossed);
    }

    #[test]
    fn absolute_y_crossing_adds_cycle() {
        let mut mem = Memory::new();
        mem.load(0x0200, &[0x80, 0x30]);
        mem.write_byte(0x3100, 0x5A);
        let op = resolve(AddressingMode::AbsoluteY, &regs_at(0x0200, 0, 0x80), &mut mem);
        assert_eq!(op.address, Some(0x3100));
        assert_eq!(op.value, 0x5A);
        assert_eq!((op.pc_advance, op.cycles), (2, 4));
        assert!(op.page_crossed);
    }

    #[test]
    fn indexed_indirect_pointer_wraps_in_zero_page() {
        let mut mem = Memory::new();
        mem.load(0x0200, &[0xFE]);
        // $FE + X(1) = $FF; pointer bytes at $FF and $00
        mem.write_byte(0x00FF, 0x00);
        mem.write_byte(0x0000, 0x40);
        mem.write_byte(0x0100, 0x99);
        mem.write_byte(0x4000, 0x11);
        let op = resolve(
            AddressingMode::IndexedIndirect,
            &regs_at(0x0200, 0x01, 0),
            &mut mem,
        );
        assert_eq!(op.address, Some(0x4000));
        assert_eq!(op.value, 0x11);
        assert_eq!(op.cycles, 5);
    }

    #[test]
    fn indirect_indexed_effective_address_wraps_past_top() {
        let mut mem = Memory::new();
        mem.load(0x0200, &[0x10]);
        mem.load(0x0010, &[0xFF, 0xFF]);
        mem.write_byte(0x0001, 0x3C);
        let op = resolve(
            AddressingMode::IndirectIndexed,
            &regs_at(0x0200, 0, 0x02),
            &mut mem,
        );
        assert_eq!(op.address, Some(0x0001));
        assert_eq!(op.value, 0x3C);
        assert_eq!(op.cycles, 5);
        assert!(op.page_crossed);
    }
}
