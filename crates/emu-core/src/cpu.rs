//! CPU core trait.

use crate::{Bus, Ticks};

/// A CPU core.
///
/// CPUs execute instructions and access memory through a bus. The bus is
/// passed in, not owned, so the session that owns both decides how they are
/// wired together.
///
/// CPUs expose their internal state for observation and debugging.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// The error reported when an instruction cannot be executed.
    type Error;

    /// Execute one complete instruction.
    ///
    /// Returns the number of CPU cycles the instruction took, including the
    /// opcode fetch.
    fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Ticks, Self::Error>;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Reset the CPU, reloading the program counter from the bus.
    fn reset<B: Bus>(&mut self, bus: &mut B);
}
