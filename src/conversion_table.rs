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
use crate::pixel_format::{FormatFamily, PixelFormat};

/// Group of format pairs that share one conversion primitive, each group maps to a Cargo feature.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConversionClass {
    RgbToRgb,
    RgbToYuv,
    YuvToRgb,
    YuvToYuv,
    /// Any pair where one side is ALPHA8/I400
    Luma,
}

impl ConversionClass {
    pub const ALL: [ConversionClass; 5] = [
        ConversionClass::RgbToRgb,
        ConversionClass::RgbToYuv,
        ConversionClass::YuvToRgb,
        ConversionClass::YuvToYuv,
        ConversionClass::Luma,
    ];

    /// Class of an ordered pair, `None` when both formats are the same.
    pub const fn of(input: PixelFormat, output: PixelFormat) -> Option<ConversionClass> {
        if input as u8 == output as u8 {
            return None;
        }
        let class = match (input.family(), output.family()) {
            (FormatFamily::Luma, _) | (_, FormatFamily::Luma) => ConversionClass::Luma,
            (FormatFamily::Rgb, FormatFamily::Rgb) => ConversionClass::RgbToRgb,
            (FormatFamily::Rgb, FormatFamily::Yuv) => ConversionClass::RgbToYuv,
            (FormatFamily::Yuv, FormatFamily::Rgb) => ConversionClass::YuvToRgb,
            (FormatFamily::Yuv, FormatFamily::Yuv) => ConversionClass::YuvToYuv,
        };
        Some(class)
    }

    const fn enabled_by_features(self) -> bool {
        match self {
            ConversionClass::RgbToRgb => cfg!(feature = "rgb_to_rgb"),
            ConversionClass::RgbToYuv => cfg!(feature = "rgb_to_yuv"),
            ConversionClass::YuvToRgb => cfg!(feature = "yuv_to_rgb"),
            ConversionClass::YuvToYuv => cfg!(feature = "yuv_to_yuv"),
            ConversionClass::Luma => cfg!(feature = "luma"),
        }
    }
}

/// Set of ordered format pairs a [`crate::Converter`] accepts.
///
/// One bit mask row per input format, bit `n` of a row registers output format with tag `n`.
/// Same format pairs are never registered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ConversionTable {
    rows: [u32; PixelFormat::COUNT],
}

impl ConversionTable {
    pub const fn empty() -> ConversionTable {
        ConversionTable {
            rows: [0; PixelFormat::COUNT],
        }
    }

    /// Every pair of distinct formats.
    pub fn all() -> ConversionTable {
        ConversionClass::ALL
            .into_iter()
            .fold(ConversionTable::empty(), ConversionTable::with_class)
    }

    /// Classes selected by the enabled Cargo features.
    pub fn from_features() -> ConversionTable {
        ConversionClass::ALL
            .into_iter()
            .filter(|class| class.enabled_by_features())
            .fold(ConversionTable::empty(), ConversionTable::with_class)
    }

    pub fn with_class(self, class: ConversionClass) -> ConversionTable {
        let mut table = self;
        for input in PixelFormat::ALL {
            for output in PixelFormat::ALL {
                if ConversionClass::of(input, output) == Some(class) {
                    table.rows[input as usize] |= 1 << (output as u32);
                }
            }
        }
        table
    }

    pub fn with_pair(self, input: PixelFormat, output: PixelFormat) -> ConversionTable {
        let mut table = self;
        if input != output {
            table.rows[input as usize] |= 1 << (output as u32);
        }
        table
    }

    pub fn without_pair(self, input: PixelFormat, output: PixelFormat) -> ConversionTable {
        let mut table = self;
        table.rows[input as usize] &= !(1 << (output as u32));
        table
    }

    #[inline]
    pub fn supports(&self, input: PixelFormat, output: PixelFormat) -> bool {
        self.rows[input as usize] & (1 << (output as u32)) != 0
    }

    /// Registered pairs ordered by input then output tag.
    pub fn pairs(&self) -> impl Iterator<Item = (PixelFormat, PixelFormat)> + '_ {
        PixelFormat::ALL.into_iter().flat_map(move |input| {
            PixelFormat::ALL
                .into_iter()
                .filter(move |&output| self.supports(input, output))
                .map(move |output| (input, output))
        })
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        ConversionTable::from_features()
    }
}
