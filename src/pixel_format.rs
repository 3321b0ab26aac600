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
use crate::conversion_error::{check_overflow_v2, check_pitch, ConversionError};
use crate::images::FrameLayout;
use crate::yuv_support::{YuvChromaSubsampling, YuvNVOrder, Yuy2Description};
use std::fmt::{Display, Formatter};

/// Broad class of a pixel format, the first level of conversion routing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FormatFamily {
    /// Single 8-bit channel, luma or alpha
    Luma,
    Rgb,
    Yuv,
}

/// Supported pixel formats.
///
/// RGB formats are little-endian pixel words named from the most significant channel down,
/// e.g. [`PixelFormat::Argb8888`] is the word `0xAARRGGBB` stored as bytes `B G R A`,
/// [`PixelFormat::Rgb565`] keeps red in bits 11..16.
///
/// | format | planes | layout |
/// |--------|--------|--------|
/// | `Alpha8` / `I400` | 1 | 8-bit luma or alpha |
/// | `Argb8888`, `Rgba8888` | 1 | 32 bpp |
/// | `Argb4444`, `Argb1555`, `Rgba4444`, `Rgba5551`, `Rgb565` | 1 | 16 bpp |
/// | `Rgb888`, `Bgr888` | 1 | 24 bpp |
/// | `I420` / `Yv12` | 3 | Y, U, V / Y, V, U at 4:2:0 |
/// | `Nv12` / `Nv21` | 2 | Y, UV / Y, VU at 4:2:0 |
/// | `I422` | 3 | Y, U, V at 4:2:2 |
/// | `I444` | 3 | Y, U, V at 4:4:4 |
/// | `Yuy2` / `Uyvy` | 1 | Y0 U Y1 V / U Y0 V Y1 |
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PixelFormat {
    Alpha8 = 0,
    Argb8888 = 1,
    Rgba8888 = 2,
    Argb4444 = 3,
    Argb1555 = 4,
    Rgba4444 = 5,
    Rgba5551 = 6,
    Rgb565 = 7,
    Rgb888 = 8,
    Bgr888 = 9,
    I420 = 10,
    Yv12 = 11,
    Nv12 = 12,
    Nv21 = 13,
    I422 = 14,
    I444 = 15,
    Yuy2 = 16,
    Uyvy = 17,
}

/// Position and width of one channel inside a packed RGB pixel word.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChannelBits {
    pub shift: u32,
    pub bits: u32,
}

impl ChannelBits {
    const fn new(shift: u32, bits: u32) -> ChannelBits {
        ChannelBits { shift, bits }
    }

    /// True if the channel occupies exactly one whole byte of the pixel.
    #[inline]
    pub const fn is_byte(&self) -> bool {
        self.bits == 8 && self.shift % 8 == 0
    }

    #[inline]
    pub const fn byte_offset(&self) -> usize {
        (self.shift / 8) as usize
    }
}

/// Bit layout of an RGB format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RgbLayout {
    pub bytes_per_pixel: usize,
    pub r: ChannelBits,
    pub g: ChannelBits,
    pub b: ChannelBits,
    pub a: Option<ChannelBits>,
}

impl RgbLayout {
    const fn new(
        bytes_per_pixel: usize,
        r: ChannelBits,
        g: ChannelBits,
        b: ChannelBits,
        a: Option<ChannelBits>,
    ) -> RgbLayout {
        RgbLayout {
            bytes_per_pixel,
            r,
            g,
            b,
            a,
        }
    }

    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.a.is_some()
    }

    /// True when every channel is a whole byte, so pixels can be reordered byte by byte.
    pub const fn is_byte_aligned(&self) -> bool {
        let alpha_aligned = match self.a {
            Some(a) => a.is_byte(),
            None => true,
        };
        self.r.is_byte() && self.g.is_byte() && self.b.is_byte() && alpha_aligned
    }
}

/// Plane arrangement of a YUV format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum YuvLayout {
    /// Three planes, chroma planes stored in `order`
    Planar {
        subsampling: YuvChromaSubsampling,
        order: YuvNVOrder,
    },
    /// Luma plane followed by one plane of interleaved chroma pairs
    SemiPlanar {
        subsampling: YuvChromaSubsampling,
        order: YuvNVOrder,
    },
    /// Single plane of 4:2:2 groups, two pixels per four bytes
    Packed { description: Yuy2Description },
}

impl YuvLayout {
    #[inline]
    pub const fn subsampling(&self) -> YuvChromaSubsampling {
        match self {
            YuvLayout::Planar { subsampling, .. } | YuvLayout::SemiPlanar { subsampling, .. } => {
                *subsampling
            }
            YuvLayout::Packed { .. } => YuvChromaSubsampling::Yuv422,
        }
    }

    #[inline]
    pub const fn plane_count(&self) -> usize {
        match self {
            YuvLayout::Planar { .. } => 3,
            YuvLayout::SemiPlanar { .. } => 2,
            YuvLayout::Packed { .. } => 1,
        }
    }
}

const A_8888: ChannelBits = ChannelBits::new(24, 8);
const R_8888: ChannelBits = ChannelBits::new(16, 8);
const G_8888: ChannelBits = ChannelBits::new(8, 8);
const B_8888: ChannelBits = ChannelBits::new(0, 8);

impl PixelFormat {
    /// Luma-only alias of [`PixelFormat::Alpha8`].
    pub const I400: PixelFormat = PixelFormat::Alpha8;

    pub const COUNT: usize = 18;

    pub const ALL: [PixelFormat; PixelFormat::COUNT] = [
        PixelFormat::Alpha8,
        PixelFormat::Argb8888,
        PixelFormat::Rgba8888,
        PixelFormat::Argb4444,
        PixelFormat::Argb1555,
        PixelFormat::Rgba4444,
        PixelFormat::Rgba5551,
        PixelFormat::Rgb565,
        PixelFormat::Rgb888,
        PixelFormat::Bgr888,
        PixelFormat::I420,
        PixelFormat::Yv12,
        PixelFormat::Nv12,
        PixelFormat::Nv21,
        PixelFormat::I422,
        PixelFormat::I444,
        PixelFormat::Yuy2,
        PixelFormat::Uyvy,
    ];

    pub const fn family(self) -> FormatFamily {
        match self {
            PixelFormat::Alpha8 => FormatFamily::Luma,
            PixelFormat::Argb8888
            | PixelFormat::Rgba8888
            | PixelFormat::Argb4444
            | PixelFormat::Argb1555
            | PixelFormat::Rgba4444
            | PixelFormat::Rgba5551
            | PixelFormat::Rgb565
            | PixelFormat::Rgb888
            | PixelFormat::Bgr888 => FormatFamily::Rgb,
            PixelFormat::I420
            | PixelFormat::Yv12
            | PixelFormat::Nv12
            | PixelFormat::Nv21
            | PixelFormat::I422
            | PixelFormat::I444
            | PixelFormat::Yuy2
            | PixelFormat::Uyvy => FormatFamily::Yuv,
        }
    }

    /// Channel layout of RGB formats, `None` for luma and YUV formats.
    pub const fn rgb_layout(self) -> Option<RgbLayout> {
        let layout = match self {
            PixelFormat::Argb8888 => RgbLayout::new(4, R_8888, G_8888, B_8888, Some(A_8888)),
            PixelFormat::Rgba8888 => RgbLayout::new(
                4,
                ChannelBits::new(24, 8),
                ChannelBits::new(16, 8),
                ChannelBits::new(8, 8),
                Some(ChannelBits::new(0, 8)),
            ),
            PixelFormat::Argb4444 => RgbLayout::new(
                2,
                ChannelBits::new(8, 4),
                ChannelBits::new(4, 4),
                ChannelBits::new(0, 4),
                Some(ChannelBits::new(12, 4)),
            ),
            PixelFormat::Argb1555 => RgbLayout::new(
                2,
                ChannelBits::new(10, 5),
                ChannelBits::new(5, 5),
                ChannelBits::new(0, 5),
                Some(ChannelBits::new(15, 1)),
            ),
            PixelFormat::Rgba4444 => RgbLayout::new(
                2,
                ChannelBits::new(12, 4),
                ChannelBits::new(8, 4),
                ChannelBits::new(4, 4),
                Some(ChannelBits::new(0, 4)),
            ),
            PixelFormat::Rgba5551 => RgbLayout::new(
                2,
                ChannelBits::new(11, 5),
                ChannelBits::new(6, 5),
                ChannelBits::new(1, 5),
                Some(ChannelBits::new(0, 1)),
            ),
            PixelFormat::Rgb565 => RgbLayout::new(
                2,
                ChannelBits::new(11, 5),
                ChannelBits::new(5, 6),
                ChannelBits::new(0, 5),
                None,
            ),
            PixelFormat::Rgb888 => RgbLayout::new(3, R_8888, G_8888, B_8888, None),
            PixelFormat::Bgr888 => RgbLayout::new(3, B_8888, G_8888, R_8888, None),
            _ => return None,
        };
        Some(layout)
    }

    /// Plane arrangement of YUV formats, `None` for luma and RGB formats.
    pub const fn yuv_layout(self) -> Option<YuvLayout> {
        let layout = match self {
            PixelFormat::I420 => YuvLayout::Planar {
                subsampling: YuvChromaSubsampling::Yuv420,
                order: YuvNVOrder::UV,
            },
            PixelFormat::Yv12 => YuvLayout::Planar {
                subsampling: YuvChromaSubsampling::Yuv420,
                order: YuvNVOrder::VU,
            },
            PixelFormat::Nv12 => YuvLayout::SemiPlanar {
                subsampling: YuvChromaSubsampling::Yuv420,
                order: YuvNVOrder::UV,
            },
            PixelFormat::Nv21 => YuvLayout::SemiPlanar {
                subsampling: YuvChromaSubsampling::Yuv420,
                order: YuvNVOrder::VU,
            },
            PixelFormat::I422 => YuvLayout::Planar {
                subsampling: YuvChromaSubsampling::Yuv422,
                order: YuvNVOrder::UV,
            },
            PixelFormat::I444 => YuvLayout::Planar {
                subsampling: YuvChromaSubsampling::Yuv444,
                order: YuvNVOrder::UV,
            },
            PixelFormat::Yuy2 => YuvLayout::Packed {
                description: Yuy2Description::YUYV,
            },
            PixelFormat::Uyvy => YuvLayout::Packed {
                description: Yuy2Description::UYVY,
            },
            _ => return None,
        };
        Some(layout)
    }

    pub const fn chroma_subsampling(self) -> Option<YuvChromaSubsampling> {
        match self.yuv_layout() {
            Some(layout) => Some(layout.subsampling()),
            None => None,
        }
    }

    pub const fn plane_count(self) -> usize {
        match self.yuv_layout() {
            Some(layout) => layout.plane_count(),
            None => 1,
        }
    }

    /// Average storage cost of one pixel, including chroma shared with neighbours.
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Alpha8 => 8,
            PixelFormat::I420 | PixelFormat::Yv12 | PixelFormat::Nv12 | PixelFormat::Nv21 => 12,
            PixelFormat::I422 | PixelFormat::Yuy2 | PixelFormat::Uyvy => 16,
            PixelFormat::I444 => 24,
            _ => match self.rgb_layout() {
                Some(layout) => layout.bytes_per_pixel as u32 * 8,
                None => 0,
            },
        }
    }

    pub const fn has_alpha(self) -> bool {
        match self.rgb_layout() {
            Some(layout) => layout.has_alpha(),
            None => false,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Alpha8 => "ALPHA8",
            PixelFormat::Argb8888 => "ARGB8888",
            PixelFormat::Rgba8888 => "RGBA8888",
            PixelFormat::Argb4444 => "ARGB4444",
            PixelFormat::Argb1555 => "ARGB1555",
            PixelFormat::Rgba4444 => "RGBA4444",
            PixelFormat::Rgba5551 => "RGBA5551",
            PixelFormat::Rgb565 => "RGB565",
            PixelFormat::Rgb888 => "RGB888",
            PixelFormat::Bgr888 => "BGR888",
            PixelFormat::I420 => "I420",
            PixelFormat::Yv12 => "YV12",
            PixelFormat::Nv12 => "NV12",
            PixelFormat::Nv21 => "NV21",
            PixelFormat::I422 => "I422",
            PixelFormat::I444 => "I444",
            PixelFormat::Yuy2 => "YUY2",
            PixelFormat::Uyvy => "UYVY",
        }
    }

    /// Geometry of every plane of a `width` x `height` frame whose rows are `pitch` pixels apart.
    ///
    /// Planes are stored back to back in plane order. Chroma pitches are derived from `pitch`
    /// with the same subsampling as the chroma width.
    pub fn frame_layout(
        self,
        pitch: u32,
        width: u32,
        height: u32,
    ) -> Result<FrameLayout, ConversionError> {
        if width == 0 || height == 0 {
            return Err(ConversionError::ZeroBaseSize);
        }
        check_pitch(pitch, width)?;
        let pitch = pitch as usize;
        let width = width as usize;
        let height = height as usize;

        if let Some(rgb) = self.rgb_layout() {
            return FrameLayout::from_planes(&[(
                check_overflow_v2(pitch, rgb.bytes_per_pixel)?,
                height,
                check_overflow_v2(width, rgb.bytes_per_pixel)?,
            )]);
        }

        match self.yuv_layout() {
            Some(YuvLayout::Planar { subsampling, .. }) => {
                let chroma = (
                    subsampling.chroma_width(pitch),
                    subsampling.chroma_height(height),
                    subsampling.chroma_width(width),
                );
                FrameLayout::from_planes(&[(pitch, height, width), chroma, chroma])
            }
            Some(YuvLayout::SemiPlanar { subsampling, .. }) => FrameLayout::from_planes(&[
                (pitch, height, width),
                (
                    check_overflow_v2(subsampling.chroma_width(pitch), 2)?,
                    subsampling.chroma_height(height),
                    check_overflow_v2(subsampling.chroma_width(width), 2)?,
                ),
            ]),
            Some(YuvLayout::Packed { .. }) => FrameLayout::from_planes(&[(
                check_overflow_v2(pitch.div_ceil(2), 4)?,
                height,
                check_overflow_v2(width.div_ceil(2), 4)?,
            )]),
            None => FrameLayout::from_planes(&[(pitch, height, width)]),
        }
    }

    /// Bytes needed by a tightly packed `width` x `height` frame.
    pub fn buffer_size(self, width: u32, height: u32) -> Result<usize, ConversionError> {
        Ok(self.frame_layout(width, width, height)?.required_len())
    }
}

impl Display for PixelFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for PixelFormat {
    type Error = ConversionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PixelFormat::ALL
            .get(value as usize)
            .copied()
            .ok_or(ConversionError::UnknownFormat(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for (index, format) in PixelFormat::ALL.iter().enumerate() {
            assert_eq!(*format as usize, index);
            assert_eq!(PixelFormat::try_from(index as u8), Ok(*format));
        }
        assert_eq!(
            PixelFormat::try_from(PixelFormat::COUNT as u8),
            Err(ConversionError::UnknownFormat(PixelFormat::COUNT as u8))
        );
        assert_eq!(PixelFormat::I400, PixelFormat::Alpha8);
    }

    #[test]
    fn every_format_belongs_to_one_description() {
        for format in PixelFormat::ALL {
            let described = match format.family() {
                FormatFamily::Luma => format.rgb_layout().is_none() && format.yuv_layout().is_none(),
                FormatFamily::Rgb => format.rgb_layout().is_some() && format.yuv_layout().is_none(),
                FormatFamily::Yuv => format.rgb_layout().is_none() && format.yuv_layout().is_some(),
            };
            assert!(described, "{} is described inconsistently", format);
        }
    }

    #[test]
    fn rgb_channels_fit_inside_pixel() {
        for format in PixelFormat::ALL {
            let Some(layout) = format.rgb_layout() else {
                continue;
            };
            let word_bits = layout.bytes_per_pixel as u32 * 8;
            let mut used = 0u32;
            for channel in [Some(layout.r), Some(layout.g), Some(layout.b), layout.a]
                .into_iter()
                .flatten()
            {
                assert!(channel.shift + channel.bits <= word_bits, "{}", format);
                let mask = ((1u32 << channel.bits) - 1) << channel.shift;
                assert_eq!(used & mask, 0, "{} channels overlap", format);
                used |= mask;
            }
        }
    }

    #[test]
    fn byte_aligned_formats() {
        let aligned: Vec<PixelFormat> = PixelFormat::ALL
            .into_iter()
            .filter(|f| f.rgb_layout().is_some_and(|l| l.is_byte_aligned()))
            .collect();
        assert_eq!(
            aligned,
            vec![
                PixelFormat::Argb8888,
                PixelFormat::Rgba8888,
                PixelFormat::Rgb888,
                PixelFormat::Bgr888
            ]
        );
    }

    #[test]
    fn plane_counts() {
        assert_eq!(PixelFormat::Alpha8.plane_count(), 1);
        assert_eq!(PixelFormat::Rgb565.plane_count(), 1);
        assert_eq!(PixelFormat::I420.plane_count(), 3);
        assert_eq!(PixelFormat::Yv12.plane_count(), 3);
        assert_eq!(PixelFormat::Nv21.plane_count(), 2);
        assert_eq!(PixelFormat::Uyvy.plane_count(), 1);
    }

    #[test]
    fn chroma_plane_sizes() {
        let (w, h) = (16u32, 8u32);
        let luma = (w * h) as usize;

        let i420 = PixelFormat::I420.frame_layout(w, w, h).unwrap();
        assert_eq!(i420.plane(1).len(), luma / 4);
        assert_eq!(i420.plane(2).len(), luma / 4);

        let i422 = PixelFormat::I422.frame_layout(w, w, h).unwrap();
        assert_eq!(i422.plane(1).len(), luma / 2);
        assert_eq!(i422.plane(2).len(), luma / 2);

        let i444 = PixelFormat::I444.frame_layout(w, w, h).unwrap();
        assert_eq!(i444.plane(1).len(), luma);

        let nv12 = PixelFormat::Nv12.frame_layout(w, w, h).unwrap();
        assert_eq!(nv12.plane(1).len(), 2 * luma / 4);

        assert_eq!(PixelFormat::I420.buffer_size(w, h), Ok(luma * 3 / 2));
        assert_eq!(PixelFormat::Yuy2.buffer_size(w, h), Ok(luma * 2));
        assert_eq!(PixelFormat::Rgb888.buffer_size(w, h), Ok(luma * 3));
        assert_eq!(PixelFormat::Alpha8.buffer_size(w, h), Ok(luma));
    }

    #[test]
    fn bits_per_pixel_matches_buffer_size() {
        for format in PixelFormat::ALL {
            let size = format.buffer_size(8, 8).unwrap();
            assert_eq!(size * 8, 64 * format.bits_per_pixel() as usize, "{}", format);
        }
    }

    #[test]
    fn padded_pitch_and_odd_sizes() {
        let frame = PixelFormat::I420.frame_layout(10, 7, 5).unwrap();
        assert_eq!(frame.plane(0).stride, 10);
        assert_eq!(frame.plane(1).stride, 5);
        assert_eq!(frame.plane(1).rows, 3);
        assert_eq!(frame.plane(1).row_bytes, 4);
        assert_eq!(frame.plane(1).offset, 50);
        assert_eq!(frame.plane(2).offset, 65);
        assert_eq!(frame.required_len(), 80);

        let packed = PixelFormat::Uyvy.frame_layout(5, 5, 2).unwrap();
        assert_eq!(packed.plane(0).stride, 12);
        assert_eq!(packed.plane(0).row_bytes, 12);

        assert_eq!(
            PixelFormat::Rgb565.frame_layout(3, 4, 4),
            Err(ConversionError::PitchTooSmall(
                crate::conversion_error::MismatchedSize {
                    expected: 4,
                    received: 3
                }
            ))
        );
        assert_eq!(
            PixelFormat::Rgb565.frame_layout(4, 0, 4),
            Err(ConversionError::ZeroBaseSize)
        );
    }
}
