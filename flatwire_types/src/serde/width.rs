use std::fmt;

/// Byte width of a fixed-width integer.
///
/// The discriminant is the width in bytes. The names follow the widths
/// of the integer types that the wire convention is shared with.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum Width {
    Byte = 1,
    Short = 2,
    Int = 4,
    Long = 8,
}

impl Width {
    pub const ALL: [Width; 4] = [Width::Byte, Width::Short, Width::Int, Width::Long];

    pub fn bytes(self) -> usize {
        self as u8 as usize
    }

    /// The largest value representable in this width.
    pub fn max_value(self) -> u64 {
        match self {
            Width::Long => u64::MAX,
            narrower => (1u64 << (8 * narrower.bytes())) - 1,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}
