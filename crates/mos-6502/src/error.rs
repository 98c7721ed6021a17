//! CPU execution errors.

use thiserror::Error;

/// Why an instruction could not be executed.
///
/// Execution cannot continue past an opcode the core does not interpret;
/// the host decides whether to halt, log or trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The fetched byte is not an implemented opcode. `pc` is the address
    /// the opcode was fetched from.
    #[error("unimplemented opcode ${opcode:02X} at ${pc:04X}")]
    UnimplementedOpcode { opcode: u8, pc: u16 },
}
