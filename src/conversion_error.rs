/*
 * Copyright (c) Radzivon Bartoshyk, 11/2024. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::pixel_format::PixelFormat;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MismatchedDimensions {
    pub source_width: u32,
    pub source_height: u32,
    pub destination_width: u32,
    pub destination_height: u32,
}

/// Reasons a conversion is rejected. Every variant is produced before anything is written.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConversionError {
    /// Source or destination buffer is missing
    NullPointer,
    /// Paired image descriptors disagree on width or height
    SizeMismatch(MismatchedDimensions),
    /// Source and destination formats are the same
    FormatMismatch(PixelFormat),
    /// The format pair is not registered in the active conversion table
    UnsupportedFormat {
        input: PixelFormat,
        output: PixelFormat,
    },
    /// Numeric format tag outside of the catalog
    UnknownFormat(u8),
    ZeroBaseSize,
    PointerOverflow,
    PitchTooSmall(MismatchedSize),
    SourceBufferTooSmall(MismatchedSize),
    DestinationBufferTooSmall(MismatchedSize),
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::NullPointer => f.write_str("Source or destination buffer is null"),
            ConversionError::SizeMismatch(dims) => f.write_fmt(format_args!(
                "Source is {}x{} but destination is {}x{}",
                dims.source_width,
                dims.source_height,
                dims.destination_width,
                dims.destination_height
            )),
            ConversionError::FormatMismatch(format) => f.write_fmt(format_args!(
                "Source and destination have the same format {}",
                format
            )),
            ConversionError::UnsupportedFormat { input, output } => f.write_fmt(format_args!(
                "Conversion {} -> {} is not supported",
                input, output
            )),
            ConversionError::UnknownFormat(tag) => {
                f.write_fmt(format_args!("Unknown pixel format tag {}", tag))
            }
            ConversionError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            ConversionError::PointerOverflow => {
                f.write_str("Image size overflow pointer capabilities")
            }
            ConversionError::PitchTooSmall(size) => f.write_fmt(format_args!(
                "Pitch must be at least {} but it is {}",
                size.expected, size.received
            )),
            ConversionError::SourceBufferTooSmall(size) => f.write_fmt(format_args!(
                "Source must have size at least {} but it is {}",
                size.expected, size.received
            )),
            ConversionError::DestinationBufferTooSmall(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for ConversionError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, ConversionError> {
    v0.checked_mul(v1).ok_or(ConversionError::PointerOverflow)
}

#[inline]
pub(crate) fn check_pitch(pitch: u32, width: u32) -> Result<(), ConversionError> {
    if pitch < width {
        return Err(ConversionError::PitchTooSmall(MismatchedSize {
            expected: width as usize,
            received: pitch as usize,
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_source_len(data: &[u8], required: usize) -> Result<(), ConversionError> {
    if data.len() < required {
        return Err(ConversionError::SourceBufferTooSmall(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_destination_len(data: &[u8], required: usize) -> Result<(), ConversionError> {
    if data.len() < required {
        return Err(ConversionError::DestinationBufferTooSmall(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_is_reported() {
        assert_eq!(check_overflow_v2(usize::MAX, 2), Err(ConversionError::PointerOverflow));
        assert_eq!(check_overflow_v2(4, 5), Ok(20));
    }

    #[test]
    fn display_names_formats() {
        let message = ConversionError::UnsupportedFormat {
            input: PixelFormat::Nv12,
            output: PixelFormat::Rgb565,
        }
        .to_string();
        assert_eq!(message, "Conversion NV12 -> RGB565 is not supported");
    }

    #[test]
    fn short_buffers() {
        let data = [0u8; 3];
        assert!(check_source_len(&data, 3).is_ok());
        assert_eq!(
            check_destination_len(&data, 4),
            Err(ConversionError::DestinationBufferTooSmall(MismatchedSize {
                expected: 4,
                received: 3
            }))
        );
        assert!(check_pitch(8, 9).is_err());
    }
}
