//! Cycle-counted MOS 6502 CPU core.
//!
//! Executes one whole instruction per [`Cpu::step`](emu_core::Cpu::step)
//! and reports how many cycles it took. The instruction set covered is the
//! accumulator load (LDA) family across all eight of its addressing modes,
//! including the page-crossing penalty and zero-page wraparound the real
//! chip exhibits.

mod addressing;
mod cpu;
mod error;
pub mod flags;
pub mod instruction;
pub mod memory;
mod registers;

pub use addressing::{AddressingMode, Operand, page_crossed, resolve};
pub use cpu::Mos6502;
pub use error::CpuError;
pub use flags::Status;
pub use instruction::Instruction;
pub use memory::Memory;
pub use registers::{Registers, STACK_POINTER_INIT};
