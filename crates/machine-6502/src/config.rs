//! Machine configuration: the memory image and register presets.

use mos_6502::memory::USER_PROGRAM_START;

/// A run of bytes placed at a fixed address before the CPU starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// First address written.
    pub address: u16,
    /// Bytes to write. Must not run past $FFFF.
    pub bytes: Vec<u8>,
}

impl Segment {
    #[must_use]
    pub fn new(address: u16, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            address,
            bytes: bytes.into(),
        }
    }

    /// Address just past the segment, or `None` if it runs off the top of
    /// memory.
    #[must_use]
    pub fn end(&self) -> Option<u32> {
        span_end(self.address, self.bytes.len())
    }
}

/// End of `len` bytes written from `address`, or `None` past $FFFF.
pub(crate) fn span_end(address: u16, len: usize) -> Option<u32> {
    let end = u32::from(address).checked_add(u32::try_from(len).ok()?)?;
    (end <= 0x1_0000).then_some(end)
}

/// Configuration for constructing a [`Machine`](crate::Machine).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MachineConfig {
    /// Program and data images, written in order. Later segments overwrite
    /// earlier ones where they overlap.
    pub segments: Vec<Segment>,
    /// Written to $FFFC-$FFFD after the segments. `None` keeps whatever the
    /// segments put there (zero if nothing did).
    pub reset_vector: Option<u16>,
    /// X register after reset.
    pub x: u8,
    /// Y register after reset.
    pub y: u8,
}

impl MachineConfig {
    /// A single program loaded at `origin` with the reset vector pointing at
    /// it.
    #[must_use]
    pub fn program(origin: u16, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            segments: vec![Segment::new(origin, bytes)],
            reset_vector: Some(origin),
            ..Self::default()
        }
    }

    /// A program at the conventional user region, $0200.
    #[must_use]
    pub fn user_program(bytes: impl Into<Vec<u8>>) -> Self {
        Self::program(USER_PROGRAM_START, bytes)
    }

    /// Add a data segment.
    #[must_use]
    pub fn with_segment(mut self, address: u16, bytes: impl Into<Vec<u8>>) -> Self {
        self.segments.push(Segment::new(address, bytes));
        self
    }

    /// Preset the index registers.
    #[must_use]
    pub fn with_index(mut self, x: u8, y: u8) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}
