//! Top-level emulation session.
//!
//! One `Machine` owns one [`Memory`] and one [`Mos6502`]. Nothing else
//! touches either while the session lives, so a second session is simply a
//! second `Machine`.

use emu_core::{Cpu, Observable, Ticks, Value};
use log::debug;
use mos_6502::{Memory, Mos6502, Registers};
use thiserror::Error;

use crate::config::{MachineConfig, span_end};

/// Errors from building or running a machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A configured segment or loaded image runs past $FFFF.
    #[error("segment at ${address:04X} with {len} bytes runs past $FFFF")]
    SegmentOverflow { address: u16, len: usize },

    /// The CPU hit an instruction it cannot execute.
    #[error(transparent)]
    Cpu(#[from] mos_6502::CpuError),
}

/// A 6502 with 64K of RAM.
#[derive(Debug, Clone)]
pub struct Machine {
    cpu: Mos6502,
    memory: Memory,
}

impl Machine {
    /// Create a new machine from the given configuration.
    ///
    /// Loads every segment, writes the reset vector if one is configured,
    /// then resets the CPU so PC comes from $FFFC-$FFFD.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment does not fit in the address space.
    pub fn new(config: &MachineConfig) -> Result<Self, MachineError> {
        let mut memory = Memory::new();

        for segment in &config.segments {
            load_checked(&mut memory, segment.address, &segment.bytes)?;
        }

        if let Some(vector) = config.reset_vector {
            memory.write_word(mos_6502::memory::RESET_VECTOR, vector);
        }

        let mut cpu = Mos6502::initialize(&mut memory);
        cpu.regs.x = config.x;
        cpu.regs.y = config.y;

        Ok(Self { cpu, memory })
    }

    /// Execute one instruction.
    pub fn step(&mut self) -> Result<Ticks, MachineError> {
        Ok(self.cpu.step(&mut self.memory)?)
    }

    /// Execute whole instructions until at least `budget` cycles have been
    /// spent.
    ///
    /// An instruction that starts inside the budget always completes, so the
    /// result can overshoot by up to one instruction's worth. A zero budget
    /// executes nothing.
    pub fn run(&mut self, budget: Ticks) -> Result<Ticks, MachineError> {
        let mut spent = Ticks::ZERO;
        while spent < budget {
            spent += self.step()?;
        }
        debug!(
            "run: budget {budget} spent {spent}, PC ${:04X}",
            self.cpu.pc()
        );
        Ok(spent)
    }

    /// Snapshot of the CPU registers.
    #[must_use]
    pub fn registers(&self) -> Registers {
        self.cpu.registers()
    }

    /// Reload PC from the reset vector and clear registers and flags.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.memory);
    }

    /// Reference to the CPU.
    #[must_use]
    pub fn cpu(&self) -> &Mos6502 {
        &self.cpu
    }

    /// Mutable reference to the CPU.
    pub fn cpu_mut(&mut self) -> &mut Mos6502 {
        &mut self.cpu
    }

    /// Reference to RAM.
    #[must_use]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable reference to RAM, for loaders.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Write bytes into RAM at `address`.
    ///
    /// Rejects images that would run past $FFFF, leaving RAM untouched.
    pub fn load(&mut self, address: u16, bytes: &[u8]) -> Result<(), MachineError> {
        load_checked(&mut self.memory, address, bytes)
    }
}

fn load_checked(memory: &mut Memory, address: u16, bytes: &[u8]) -> Result<(), MachineError> {
    if span_end(address, bytes.len()).is_none() {
        return Err(MachineError::SegmentOverflow {
            address,
            len: bytes.len(),
        });
    }
    memory.load(address, bytes);
    Ok(())
}

impl Observable for Machine {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("cpu.") {
            self.cpu.query(rest)
        } else if let Some(rest) = path.strip_prefix("memory.") {
            let addr =
                if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
                    u16::from_str_radix(hex, 16).ok()
                } else if let Some(hex) = rest.strip_prefix('$') {
                    u16::from_str_radix(hex, 16).ok()
                } else {
                    rest.parse().ok()
                };
            addr.map(|a| Value::U8(self.memory.read_byte(a)))
        } else {
            self.cpu.query(path)
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &["cpu.<6502_paths>", "memory.<address>"]
    }
}
