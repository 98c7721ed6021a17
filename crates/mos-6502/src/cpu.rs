//! 6502 CPU implementation.
//!
//! Each `step()` fetches one opcode, resolves its addressing mode, executes
//! it and returns the cycles the real chip would have spent: one for the
//! opcode fetch plus the mode's cost, plus one more when indexing crosses
//! a page.

use emu_core::{Bus, Cpu, Observable, Ticks, Value};
use log::{debug, trace, warn};

use crate::flags::{self, C, D, I, N, V, Z};
use crate::memory::RESET_VECTOR;
use crate::{CpuError, Instruction, Registers, resolve};

/// The MOS 6502 CPU.
#[derive(Debug, Clone)]
pub struct Mos6502 {
    /// CPU registers.
    pub regs: Registers,

    /// Total cycles executed since construction.
    total_cycles: u64,
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl Mos6502 {
    /// Create a new 6502 in reset state with PC at 0.
    ///
    /// Use [`Mos6502::initialize`] to also load PC from the reset vector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            total_cycles: 0,
        }
    }

    /// Create a CPU in reset state with PC loaded from $FFFC-$FFFD.
    #[must_use]
    pub fn initialize<B: Bus>(bus: &mut B) -> Self {
        let mut cpu = Self::new();
        cpu.reset(bus);
        cpu
    }

    /// Total cycles executed since construction.
    #[must_use]
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Execute one decoded instruction, returning cycles after the fetch.
    fn execute<B: Bus>(&mut self, bus: &mut B, instr: Instruction) -> u8 {
        match instr {
            Instruction::Lda(mode) => {
                let operand = resolve(mode, &self.regs, bus);
                self.regs.pc = self
                    .regs
                    .pc
                    .wrapping_add(u16::from(operand.pc_advance));
                self.do_lda(operand.value);

                trace!(
                    "LDA {} -> A=${:02X} addr={:04X?} cycles={} crossed={}",
                    mode.syntax(),
                    operand.value,
                    operand.address,
                    1 + operand.cycles,
                    operand.page_crossed
                );
                operand.cycles
            }
        }
    }

    fn do_lda(&mut self, val: u8) {
        self.regs.a = val;
        self.regs.p.update_nz(val);
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl Cpu for Mos6502 {
    type Registers = Registers;
    type Error = CpuError;

    fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Ticks, CpuError> {
        let pc = self.regs.pc;
        let opcode = bus.read(pc);
        self.regs.pc = pc.wrapping_add(1);

        let Some(instr) = Instruction::decode(opcode) else {
            warn!("unimplemented opcode ${opcode:02X} at ${pc:04X}");
            return Err(CpuError::UnimplementedOpcode { opcode, pc });
        };

        trace!("${pc:04X}: {opcode:02X} {}", instr.mnemonic());

        // Opcode fetch
        let cycles = 1 + self.execute(bus, instr);
        self.total_cycles += u64::from(cycles);
        Ok(Ticks::from(cycles))
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Self::Registers {
        self.regs
    }

    fn reset<B: Bus>(&mut self, bus: &mut B) {
        self.regs = Registers::new();
        self.regs.pc = bus.read_word(RESET_VECTOR);
        debug!("reset: vector ${RESET_VECTOR:04X} -> PC ${:04X}", self.regs.pc);
    }
}

impl Observable for Mos6502 {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "pc" => Some(self.regs.pc.into()),
            "a" => Some(self.regs.a.into()),
            "x" => Some(self.regs.x.into()),
            "y" => Some(self.regs.y.into()),
            "s" | "sp" => Some(self.regs.s.into()),
            "p" | "status" => Some(self.regs.p.to_byte().into()),
            "flags.c" | "c" => Some(self.regs.p.is_set(C).into()),
            "flags.z" | "z" => Some(self.regs.p.is_set(Z).into()),
            "flags.i" | "i" => Some(self.regs.p.is_set(I).into()),
            "flags.d" | "d" => Some(self.regs.p.is_set(D).into()),
            "flags.b" | "b" => Some(self.regs.p.is_set(flags::B).into()),
            "flags.v" | "v" => Some(self.regs.p.is_set(V).into()),
            "flags.n" | "n" => Some(self.regs.p.is_set(N).into()),
            "cycle" => Some(Value::U64(self.total_cycles)),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "pc", "a", "x", "y", "s", "p", "flags.c", "flags.z", "flags.i", "flags.d", "flags.b",
            "flags.v", "flags.n", "cycle",
        ]
    }
}
