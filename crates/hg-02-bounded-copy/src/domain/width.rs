//! # Size Widths
//!
//! The unsigned integer type whose maximum bounds an allocation. Maxima are
//! held as `u128` so every width compares against a `usize` length without
//! truncating either side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An unsigned size type with a known maximum.
pub trait SizeWidth {
    /// Largest representable value.
    const MAX: u128;
    /// Type name, for diagnostics.
    const NAME: &'static str;
}

macro_rules! size_width {
    ($($ty:ty),*) => {
        $(
            impl SizeWidth for $ty {
                const MAX: u128 = <$ty>::MAX as u128;
                const NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

size_width!(u8, u16, u32, u64, usize);

/// Runtime choice of size width, for configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeWidthKind {
    /// 8-bit sizes (max 255)
    U8,
    /// 16-bit sizes (max 65535)
    U16,
    /// 32-bit sizes
    U32,
    /// 64-bit sizes
    U64,
    /// Platform pointer width
    Usize,
}

impl SizeWidthKind {
    /// Largest representable value for this width.
    pub fn max(self) -> u128 {
        match self {
            Self::U8 => <u8 as SizeWidth>::MAX,
            Self::U16 => <u16 as SizeWidth>::MAX,
            Self::U32 => <u32 as SizeWidth>::MAX,
            Self::U64 => <u64 as SizeWidth>::MAX,
            Self::Usize => <usize as SizeWidth>::MAX,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::U8 => <u8 as SizeWidth>::NAME,
            Self::U16 => <u16 as SizeWidth>::NAME,
            Self::U32 => <u32 as SizeWidth>::NAME,
            Self::U64 => <u64 as SizeWidth>::NAME,
            Self::Usize => <usize as SizeWidth>::NAME,
        }
    }
}

impl fmt::Display for SizeWidthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
