use core::fmt;

/// Why a tier name or iteration count was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrecisionError {
    /// More Newton passes than any tier provides (0..=2).
    TooManyIterations(u32),
    /// Neither `nrN` nor a bare iteration count.
    UnknownName,
}

impl fmt::Display for PrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionError::TooManyIterations(n) => {
                write!(f, "no precision tier with {n} Newton iterations (expected 0, 1 or 2)")
            }
            PrecisionError::UnknownName => {
                f.write_str("unrecognized precision tier (expected nr0, nr1, nr2 or 0..=2)")
            }
        }
    }
}

impl core::error::Error for PrecisionError {}
