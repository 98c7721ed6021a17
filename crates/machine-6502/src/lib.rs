//! A minimal 6502 machine: one CPU and a flat 64K of RAM.
//!
//! The host describes the memory image with a [`MachineConfig`], builds a
//! [`Machine`] from it, and then steps instructions one at a time or runs
//! them against a cycle budget.

mod config;
mod machine;

pub use config::{MachineConfig, Segment};
pub use machine::{Machine, MachineError};
