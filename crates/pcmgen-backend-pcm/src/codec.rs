//! Quantization and binary encoding of samples.
//!
//! Generators produce real-valued magnitudes. [`quantize`] rounds them to the
//! nearest integer (half away from zero) and rejects anything the target
//! container cannot hold. [`write_sample`] and [`read_sample`] move integer
//! samples to and from their fixed-width binary form.

use std::io::{Cursor, Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use pcmgen_spec::{BitDepth, ByteOrder, SampleFormat, Signedness};

use crate::error::{PcmError, PcmResult};

/// Rounds a magnitude to an integer sample that fits `format`.
///
/// # Errors
/// [`PcmError::Encoding`] for NaN, infinities, and values outside the
/// container range after rounding.
pub fn quantize(magnitude: f64, format: SampleFormat) -> PcmResult<i64> {
    if !magnitude.is_finite() {
        return Err(PcmError::encoding(magnitude, format));
    }

    let rounded = magnitude.round();
    if rounded < format.min_value() as f64 || rounded > format.max_value() as f64 {
        return Err(PcmError::encoding(magnitude, format));
    }

    Ok(rounded as i64)
}

/// Writes one sample in the binary layout of `format`.
pub fn write_sample<W: Write>(writer: &mut W, value: i64, format: SampleFormat) -> PcmResult<()> {
    match format.byte_order {
        ByteOrder::LittleEndian => write_with::<LittleEndian, W>(writer, value, format),
        ByteOrder::BigEndian => write_with::<BigEndian, W>(writer, value, format),
    }
}

/// Reads one sample in the binary layout of `format`.
pub fn read_sample<R: Read>(reader: &mut R, format: SampleFormat) -> PcmResult<i64> {
    match format.byte_order {
        ByteOrder::LittleEndian => read_with::<LittleEndian, R>(reader, format),
        ByteOrder::BigEndian => read_with::<BigEndian, R>(reader, format),
    }
}

/// Encodes integer samples into raw PCM bytes.
pub fn encode(samples: &[i64], format: SampleFormat) -> PcmResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(samples.len() * format.bytes_per_sample());
    for &sample in samples {
        write_sample(&mut bytes, sample, format)?;
    }
    Ok(bytes)
}

/// Decodes raw PCM bytes into integer samples.
///
/// # Errors
/// [`PcmError::Decoding`] if the buffer length is not a whole number of samples.
pub fn decode(bytes: &[u8], format: SampleFormat) -> PcmResult<Vec<i64>> {
    let width = format.bytes_per_sample();
    if bytes.len() % width != 0 {
        return Err(PcmError::decoding(format!(
            "{} bytes is not a multiple of the {}-byte {} sample size",
            bytes.len(),
            width,
            format
        )));
    }

    let mut cursor = Cursor::new(bytes);
    (0..bytes.len() / width)
        .map(|_| read_sample(&mut cursor, format))
        .collect()
}

fn narrow<T: TryFrom<i64>>(value: i64, format: SampleFormat) -> PcmResult<T> {
    T::try_from(value).map_err(|_| PcmError::encoding(value as f64, format))
}

fn write_with<B: byteorder::ByteOrder, W: Write>(
    writer: &mut W,
    value: i64,
    format: SampleFormat,
) -> PcmResult<()> {
    match (format.bit_depth, format.signedness) {
        (BitDepth::Eight, Signedness::Signed) => writer.write_i8(narrow(value, format)?)?,
        (BitDepth::Eight, Signedness::Unsigned) => writer.write_u8(narrow(value, format)?)?,
        (BitDepth::Sixteen, Signedness::Signed) => writer.write_i16::<B>(narrow(value, format)?)?,
        (BitDepth::Sixteen, Signedness::Unsigned) => {
            writer.write_u16::<B>(narrow(value, format)?)?
        }
        (BitDepth::ThirtyTwo, Signedness::Signed) => {
            writer.write_i32::<B>(narrow(value, format)?)?
        }
        (BitDepth::ThirtyTwo, Signedness::Unsigned) => {
            writer.write_u32::<B>(narrow(value, format)?)?
        }
    }
    Ok(())
}

fn read_with<B: byteorder::ByteOrder, R: Read>(
    reader: &mut R,
    format: SampleFormat,
) -> PcmResult<i64> {
    let value = match (format.bit_depth, format.signedness) {
        (BitDepth::Eight, Signedness::Signed) => reader.read_i8()? as i64,
        (BitDepth::Eight, Signedness::Unsigned) => reader.read_u8()? as i64,
        (BitDepth::Sixteen, Signedness::Signed) => reader.read_i16::<B>()? as i64,
        (BitDepth::Sixteen, Signedness::Unsigned) => reader.read_u16::<B>()? as i64,
        (BitDepth::ThirtyTwo, Signedness::Signed) => reader.read_i32::<B>()? as i64,
        (BitDepth::ThirtyTwo, Signedness::Unsigned) => reader.read_u32::<B>()? as i64,
    };
    Ok(value)
}
