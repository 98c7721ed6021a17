//! Core traits and types for cycle-counted emulation.
//!
//! A CPU reaches memory only through a [`Bus`], reports the time each
//! instruction takes as [`Ticks`], and exposes its state through
//! [`Observable`] queries that never affect emulation.

mod bus;
mod cpu;
mod observable;
mod ticks;

pub use bus::Bus;
pub use cpu::Cpu;
pub use observable::{Observable, Value};
pub use ticks::Ticks;
