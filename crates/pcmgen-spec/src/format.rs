//! Sample format descriptors and their numeric ranges.
//!
//! A descriptor such as `S16_LE` names the binary encoding of one sample:
//!
//! ```text
//! descriptor := sign? depth order?
//! sign       := 'S' | 'U'          (default: signed)
//! depth      := digit+             (8, 16 or 32)
//! order      := '_LE' | '_BE'      (default: little-endian)
//! ```
//!
//! Matching is ASCII case-insensitive and surrounding whitespace is ignored.
//! The resolved [`SampleFormat`] also supplies the peak, bottom and midline
//! values the waveform algorithms scale against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Width of one sample container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 8-bit samples.
    Eight,
    /// 16-bit samples.
    Sixteen,
    /// 32-bit samples.
    ThirtyTwo,
}

impl BitDepth {
    /// Maps a parsed bit count onto a supported depth.
    pub fn from_bits(bits: u64) -> Option<Self> {
        match bits {
            8 => Some(BitDepth::Eight),
            16 => Some(BitDepth::Sixteen),
            32 => Some(BitDepth::ThirtyTwo),
            _ => None,
        }
    }

    /// Number of bits per sample.
    pub fn bits(&self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::ThirtyTwo => 32,
        }
    }

    /// Number of bytes per sample.
    pub fn bytes(&self) -> usize {
        self.bits() as usize / 8
    }
}

/// Whether samples are two's-complement signed or offset-binary unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Signed samples centered on zero.
    Signed,
    /// Unsigned samples centered on the midline.
    Unsigned,
}

/// Byte order of multi-byte samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Least-significant byte first.
    #[default]
    LittleEndian,
    /// Most-significant byte first.
    BigEndian,
}

/// A resolved sample encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SampleFormat {
    /// Container width.
    pub bit_depth: BitDepth,
    /// Signed or unsigned representation.
    pub signedness: Signedness,
    /// Byte order of each sample.
    pub byte_order: ByteOrder,
}

impl SampleFormat {
    /// Every canonical format, in the order they are listed to users.
    pub const ALL: [SampleFormat; 10] = [
        SampleFormat::new(BitDepth::Eight, Signedness::Signed, ByteOrder::LittleEndian),
        SampleFormat::new(BitDepth::Eight, Signedness::Unsigned, ByteOrder::LittleEndian),
        SampleFormat::new(BitDepth::Sixteen, Signedness::Signed, ByteOrder::LittleEndian),
        SampleFormat::new(BitDepth::Sixteen, Signedness::Signed, ByteOrder::BigEndian),
        SampleFormat::new(BitDepth::Sixteen, Signedness::Unsigned, ByteOrder::LittleEndian),
        SampleFormat::new(BitDepth::Sixteen, Signedness::Unsigned, ByteOrder::BigEndian),
        SampleFormat::new(BitDepth::ThirtyTwo, Signedness::Signed, ByteOrder::LittleEndian),
        SampleFormat::new(BitDepth::ThirtyTwo, Signedness::Signed, ByteOrder::BigEndian),
        SampleFormat::new(BitDepth::ThirtyTwo, Signedness::Unsigned, ByteOrder::LittleEndian),
        SampleFormat::new(BitDepth::ThirtyTwo, Signedness::Unsigned, ByteOrder::BigEndian),
    ];

    /// Creates a format from its parts.
    pub const fn new(bit_depth: BitDepth, signedness: Signedness, byte_order: ByteOrder) -> Self {
        Self {
            bit_depth,
            signedness,
            byte_order,
        }
    }

    /// Resolves a descriptor such as `U8`, `S16_LE` or `S32_BE`.
    ///
    /// # Example
    /// ```
    /// use pcmgen_spec::{BitDepth, ByteOrder, SampleFormat, Signedness};
    ///
    /// let format = SampleFormat::parse("U8").unwrap();
    /// assert_eq!(format.bit_depth, BitDepth::Eight);
    /// assert_eq!(format.signedness, Signedness::Unsigned);
    /// assert_eq!(format.byte_order, ByteOrder::LittleEndian);
    /// assert_eq!(format.peak(), 255);
    /// assert_eq!(format.bottom(), 0);
    ///
    /// assert!(SampleFormat::parse("X7").is_err());
    /// ```
    pub fn parse(descriptor: &str) -> Result<Self, FormatError> {
        let trimmed = descriptor.trim();
        if trimmed.is_empty() {
            return Err(FormatError::Empty);
        }

        // Split into prefix, first digit run and suffix.
        let digits_start = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| FormatError::MissingBitDepth {
                descriptor: trimmed.to_string(),
            })?;
        let digits_len = trimmed[digits_start..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len() - digits_start);
        let digits_end = digits_start + digits_len;

        let prefix = &trimmed[..digits_start];
        let digits = &trimmed[digits_start..digits_end];
        let suffix = &trimmed[digits_end..];

        // Overlong digit runs can never be a supported depth.
        let bits = digits.parse::<u64>().unwrap_or(u64::MAX);
        let bit_depth =
            BitDepth::from_bits(bits).ok_or_else(|| FormatError::UnsupportedBitDepth {
                descriptor: trimmed.to_string(),
                bits,
            })?;

        let signedness = if prefix.is_empty() || prefix.eq_ignore_ascii_case("S") {
            Signedness::Signed
        } else if prefix.eq_ignore_ascii_case("U") {
            Signedness::Unsigned
        } else {
            return Err(FormatError::UnexpectedInput {
                descriptor: trimmed.to_string(),
                position: 0,
                found: prefix.to_string(),
            });
        };

        let byte_order = if suffix.is_empty() || suffix.eq_ignore_ascii_case("_LE") {
            ByteOrder::LittleEndian
        } else if suffix.eq_ignore_ascii_case("_BE") {
            ByteOrder::BigEndian
        } else {
            return Err(FormatError::UnexpectedInput {
                descriptor: trimmed.to_string(),
                position: digits_end,
                found: suffix.to_string(),
            });
        };

        // Single-byte samples have no byte order; keep one canonical value.
        let byte_order = match bit_depth {
            BitDepth::Eight => ByteOrder::LittleEndian,
            _ => byte_order,
        };

        Ok(Self::new(bit_depth, signedness, byte_order))
    }

    /// Returns true for signed formats.
    pub fn is_signed(&self) -> bool {
        self.signedness == Signedness::Signed
    }

    /// Bytes occupied by one sample.
    pub fn bytes_per_sample(&self) -> usize {
        self.bit_depth.bytes()
    }

    /// Highest magnitude the waveforms aim for.
    ///
    /// `2^n - 1` for unsigned formats, `2^(n-1) - 1` for signed ones.
    pub fn peak(&self) -> i64 {
        let bits = self.bit_depth.bits();
        match self.signedness {
            Signedness::Unsigned => (1i64 << bits) - 1,
            Signedness::Signed => (1i64 << (bits - 1)) - 1,
        }
    }

    /// Lowest magnitude the waveforms aim for: `0` unsigned, `-peak` signed.
    pub fn bottom(&self) -> i64 {
        match self.signedness {
            Signedness::Unsigned => 0,
            Signedness::Signed => -self.peak(),
        }
    }

    /// Center line of the waveform: `peak / 2` unsigned, `0` signed.
    pub fn midline(&self) -> f64 {
        match self.signedness {
            Signedness::Unsigned => self.peak() as f64 / 2.0,
            Signedness::Signed => 0.0,
        }
    }

    /// Half-range amplitude `2^n / 2 - 1`, independent of signedness.
    pub fn half_range_peak(&self) -> i64 {
        (1i64 << (self.bit_depth.bits() - 1)) - 1
    }

    /// Smallest value the container can hold.
    pub fn min_value(&self) -> i64 {
        match self.signedness {
            Signedness::Unsigned => 0,
            Signedness::Signed => -(1i64 << (self.bit_depth.bits() - 1)),
        }
    }

    /// Largest value the container can hold.
    pub fn max_value(&self) -> i64 {
        match self.signedness {
            Signedness::Unsigned => (1i64 << self.bit_depth.bits()) - 1,
            Signedness::Signed => (1i64 << (self.bit_depth.bits() - 1)) - 1,
        }
    }

    /// Returns true if `value` fits in the container.
    pub fn contains(&self, value: i64) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }
}

impl Default for SampleFormat {
    fn default() -> Self {
        Self::new(BitDepth::Sixteen, Signedness::Signed, ByteOrder::LittleEndian)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.signedness {
            Signedness::Signed => 'S',
            Signedness::Unsigned => 'U',
        };
        write!(f, "{}{}", sign, self.bit_depth.bits())?;
        if self.bit_depth != BitDepth::Eight {
            match self.byte_order {
                ByteOrder::LittleEndian => write!(f, "_LE")?,
                ByteOrder::BigEndian => write!(f, "_BE")?,
            }
        }
        Ok(())
    }
}

impl FromStr for SampleFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SampleFormat {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SampleFormat> for String {
    fn from(format: SampleFormat) -> Self {
        format.to_string()
    }
}
