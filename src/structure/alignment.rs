// Thu Oct 15 2026 - Alex

use std::fmt;

/// Power-of-two byte alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alignment {
    value: u64,
}

impl Alignment {
    pub const SCALAR: Alignment = Alignment { value: 4 };
    pub const VECTOR: Alignment = Alignment { value: 16 };

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    /// Rounds `offset` up to the next multiple of this alignment.
    pub fn align(&self, offset: u64) -> u64 {
        (offset + self.value - 1) & !(self.value - 1)
    }

    pub fn is_aligned(&self, offset: u64) -> bool {
        offset & (self.value - 1) == 0
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
