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
use crate::conversion_error::{
    check_destination_len, check_source_len, ConversionError, MismatchedDimensions,
};
use crate::conversion_table::ConversionTable;
use crate::images::{FrameLayout, PixelImage, PixelImageMut};
use crate::pixel_format::{PixelFormat, RgbLayout, YuvLayout};
use crate::rgb_repack::rgb_repack;
use crate::rgb_to_y::rgb_to_luma;
use crate::rgba_to_yuv::rgb_to_yuv;
use crate::shuffle::shuffle;
use crate::y_to_rgb::luma_to_rgb;
use crate::y_to_yuv::{luma_to_yuv, yuv_to_luma};
use crate::yuv_to_rgba::yuv_to_rgb;
use crate::yuv_transcode::yuv_transcode;
use std::sync::OnceLock;

/// Primitive a format pair is routed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Route {
    Shuffle,
    Repack,
    RgbToYuv,
    RgbToLuma,
    YuvToRgb,
    Transcode,
    YuvToLuma,
    LumaToRgb,
    LumaToYuv,
}

/// Validated conversion, nothing left to check before writing.
#[derive(Debug, Copy, Clone)]
struct ConversionPlan {
    input_format: PixelFormat,
    output_format: PixelFormat,
    src_frame: FrameLayout,
    dst_frame: FrameLayout,
    width: usize,
    height: usize,
}

impl ConversionPlan {
    fn execute(&self, input: &[u8], output: &mut [u8]) -> Route {
        match (self.input_format.rgb_layout(), self.input_format.yuv_layout()) {
            (Some(src_layout), _) => self.route_from_rgb(src_layout, input, output),
            (None, Some(src_layout)) => self.route_from_yuv(src_layout, input, output),
            (None, None) => self.route_from_luma(input, output),
        }
    }

    fn route_from_rgb(&self, src_layout: RgbLayout, input: &[u8], output: &mut [u8]) -> Route {
        if let Some(dst_layout) = self.output_format.rgb_layout() {
            if src_layout.is_byte_aligned() && dst_layout.is_byte_aligned() {
                shuffle(
                    input,
                    &self.src_frame,
                    src_layout,
                    output,
                    &self.dst_frame,
                    dst_layout,
                    self.width,
                );
                return Route::Shuffle;
            }
            rgb_repack(
                input,
                &self.src_frame,
                src_layout,
                output,
                &self.dst_frame,
                dst_layout,
            );
            return Route::Repack;
        }
        if let Some(dst_layout) = self.output_format.yuv_layout() {
            rgb_to_yuv(
                input,
                &self.src_frame,
                src_layout,
                output,
                &self.dst_frame,
                dst_layout,
                self.width,
            );
            return Route::RgbToYuv;
        }
        rgb_to_luma(input, &self.src_frame, src_layout, output, &self.dst_frame);
        Route::RgbToLuma
    }

    fn route_from_yuv(&self, src_layout: YuvLayout, input: &[u8], output: &mut [u8]) -> Route {
        if let Some(dst_layout) = self.output_format.rgb_layout() {
            yuv_to_rgb(
                input,
                &self.src_frame,
                src_layout,
                output,
                &self.dst_frame,
                dst_layout,
            );
            return Route::YuvToRgb;
        }
        if let Some(dst_layout) = self.output_format.yuv_layout() {
            yuv_transcode(
                input,
                &self.src_frame,
                src_layout,
                output,
                &self.dst_frame,
                dst_layout,
                self.width,
                self.height,
            );
            return Route::Transcode;
        }
        yuv_to_luma(input, &self.src_frame, src_layout, output, &self.dst_frame);
        Route::YuvToLuma
    }

    fn route_from_luma(&self, input: &[u8], output: &mut [u8]) -> Route {
        if let Some(dst_layout) = self.output_format.rgb_layout() {
            luma_to_rgb(input, &self.src_frame, output, &self.dst_frame, dst_layout);
            return Route::LumaToRgb;
        }
        if let Some(dst_layout) = self.output_format.yuv_layout() {
            luma_to_yuv(
                input,
                &self.src_frame,
                output,
                &self.dst_frame,
                dst_layout,
                self.width,
            );
            return Route::LumaToYuv;
        }
        // Alpha8 -> Alpha8 never gets here, same formats are rejected while planning
        Route::LumaToYuv
    }
}

/// Pixel format conversion engine restricted to the pairs of its [`ConversionTable`].
#[derive(Debug, Clone)]
pub struct Converter {
    table: ConversionTable,
}

impl Converter {
    pub fn new(table: ConversionTable) -> Self {
        Converter { table }
    }

    /// Process-wide converter with the table selected by Cargo features.
    pub fn global() -> &'static Converter {
        static INSTANCE: OnceLock<Converter> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let table = ConversionTable::from_features();
            tracing::debug!("Converter: default table registers {} pairs", table.len());
            Converter::new(table)
        })
    }

    pub fn table(&self) -> &ConversionTable {
        &self.table
    }

    fn plan(
        &self,
        pitch: u32,
        width: u32,
        height: u32,
        input_format: PixelFormat,
        output_format: PixelFormat,
    ) -> Result<ConversionPlan, ConversionError> {
        if input_format == output_format {
            return Err(ConversionError::FormatMismatch(input_format));
        }
        if !self.table.supports(input_format, output_format) {
            return Err(ConversionError::UnsupportedFormat {
                input: input_format,
                output: output_format,
            });
        }
        let src_frame = input_format.frame_layout(pitch, width, height)?;
        let dst_frame = output_format.frame_layout(width, width, height)?;
        Ok(ConversionPlan {
            input_format,
            output_format,
            src_frame,
            dst_frame,
            width: width as usize,
            height: height as usize,
        })
    }

    fn convert_impl(
        &self,
        input: &[u8],
        output: &mut [u8],
        pitch: u32,
        width: u32,
        height: u32,
        input_format: PixelFormat,
        output_format: PixelFormat,
    ) -> Result<(), ConversionError> {
        if input.is_empty() || output.is_empty() {
            return Err(ConversionError::NullPointer);
        }
        let plan = self.plan(pitch, width, height, input_format, output_format)?;
        check_source_len(input, plan.src_frame.required_len())?;
        check_destination_len(output, plan.dst_frame.required_len())?;
        let route = plan.execute(input, output);
        tracing::trace!(
            "Converter: {} {}x{} pitch {} -> {} via {:?}",
            input_format,
            width,
            height,
            pitch,
            output_format,
            route
        );
        Ok(())
    }

    /// Converts a frame of `input_format` into a tightly packed frame of `output_format`.
    ///
    /// `pitch` is the distance between source rows in pixels, chroma pitches follow from it.
    /// The destination pitch is always `width`. Buffers may be longer than required.
    /// Nothing is written when an error is returned.
    pub fn convert(
        &self,
        input: &[u8],
        output: &mut [u8],
        pitch: u32,
        width: u32,
        height: u32,
        input_format: PixelFormat,
        output_format: PixelFormat,
    ) -> Result<(), ConversionError> {
        self.convert_impl(
            input,
            output,
            pitch,
            width,
            height,
            input_format,
            output_format,
        )
        .inspect_err(|err| {
            tracing::debug!(
                "Converter: rejected {} -> {} {}x{}: {}",
                input_format,
                output_format,
                width,
                height,
                err
            )
        })
    }

    /// Converts between image descriptors, which must agree on dimensions.
    pub fn convert_image(
        &self,
        input: &PixelImage,
        output: &mut PixelImageMut,
    ) -> Result<(), ConversionError> {
        if input.width != output.width || input.height != output.height {
            let err = ConversionError::SizeMismatch(MismatchedDimensions {
                source_width: input.width,
                source_height: input.height,
                destination_width: output.width,
                destination_height: output.height,
            });
            tracing::debug!("Converter: rejected image pair: {}", err);
            return Err(err);
        }
        let output_format = output.format;
        self.convert(
            input.data,
            output.data.as_mut(),
            input.pitch,
            input.width,
            input.height,
            input.format,
            output_format,
        )
    }

    /// Pointer based [`Converter::convert`], null pointers are reported as [`ConversionError::NullPointer`].
    ///
    /// # Safety
    ///
    /// `input` must be valid for reads of
    /// `input_format.frame_layout(pitch, width, height)?.required_len()` bytes, `output`
    /// must be valid for writes of `output_format.buffer_size(width, height)?` bytes and
    /// the two regions must not overlap.
    pub unsafe fn convert_raw(
        &self,
        input: *const u8,
        output: *mut u8,
        pitch: u32,
        width: u32,
        height: u32,
        input_format: PixelFormat,
        output_format: PixelFormat,
    ) -> Result<(), ConversionError> {
        if input.is_null() || output.is_null() {
            tracing::debug!("Converter: rejected null buffer");
            return Err(ConversionError::NullPointer);
        }
        let plan = self
            .plan(pitch, width, height, input_format, output_format)
            .inspect_err(|err| tracing::debug!("Converter: rejected raw conversion: {}", err))?;
        let input = std::slice::from_raw_parts(input, plan.src_frame.required_len());
        let output = std::slice::from_raw_parts_mut(output, plan.dst_frame.required_len());
        let route = plan.execute(input, output);
        tracing::trace!(
            "Converter: raw {} {}x{} pitch {} -> {} via {:?}",
            input_format,
            width,
            height,
            pitch,
            output_format,
            route
        );
        Ok(())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(ConversionTable::from_features())
    }
}

/// Converts `input` of `input_format` into `output` of `output_format` with the
/// process-wide [`Converter`].
///
/// # Arguments
///
/// * `input` - Source frame, planes stored back to back.
/// * `output` - Destination, receives a tightly packed frame.
/// * `pitch` - Distance between source rows in pixels, at least `width`.
/// * `width` - Frame width in pixels.
/// * `height` - Frame height in pixels.
/// * `input_format` - Format of `input`.
/// * `output_format` - Format to produce.
///
/// # Errors
///
/// See [`ConversionError`], checks run before anything is written.
pub fn convert(
    input: &[u8],
    output: &mut [u8],
    pitch: u32,
    width: u32,
    height: u32,
    input_format: PixelFormat,
    output_format: PixelFormat,
) -> Result<(), ConversionError> {
    Converter::global().convert(
        input,
        output,
        pitch,
        width,
        height,
        input_format,
        output_format,
    )
}

/// Converts between image descriptors with the process-wide [`Converter`].
pub fn convert_image(input: &PixelImage, output: &mut PixelImageMut) -> Result<(), ConversionError> {
    Converter::global().convert_image(input, output)
}

/// Pointer based [`convert`] with the process-wide [`Converter`].
///
/// # Safety
///
/// Same contract as [`Converter::convert_raw`].
pub unsafe fn convert_raw(
    input: *const u8,
    output: *mut u8,
    pitch: u32,
    width: u32,
    height: u32,
    input_format: PixelFormat,
    output_format: PixelFormat,
) -> Result<(), ConversionError> {
    Converter::global().convert_raw(
        input,
        output,
        pitch,
        width,
        height,
        input_format,
        output_format,
    )
}

macro_rules! convert_from {
    ($name:ident, $format:expr, $label:literal) => {
        #[doc = concat!("Converts a ", $label, " frame into `output_format`, see [`convert`].")]
        pub fn $name(
            input: &[u8],
            output: &mut [u8],
            pitch: u32,
            width: u32,
            height: u32,
            output_format: PixelFormat,
        ) -> Result<(), ConversionError> {
            convert(input, output, pitch, width, height, $format, output_format)
        }
    };
}

convert_from!(convert_from_alpha8, PixelFormat::Alpha8, "ALPHA8 / I400");
convert_from!(convert_from_argb8888, PixelFormat::Argb8888, "ARGB8888");
convert_from!(convert_from_rgba8888, PixelFormat::Rgba8888, "RGBA8888");
convert_from!(convert_from_argb4444, PixelFormat::Argb4444, "ARGB4444");
convert_from!(convert_from_argb1555, PixelFormat::Argb1555, "ARGB1555");
convert_from!(convert_from_rgba4444, PixelFormat::Rgba4444, "RGBA4444");
convert_from!(convert_from_rgba5551, PixelFormat::Rgba5551, "RGBA5551");
convert_from!(convert_from_rgb565, PixelFormat::Rgb565, "RGB565");
convert_from!(convert_from_rgb888, PixelFormat::Rgb888, "RGB888");
convert_from!(convert_from_bgr888, PixelFormat::Bgr888, "BGR888");
convert_from!(convert_from_i420, PixelFormat::I420, "I420");
convert_from!(convert_from_yv12, PixelFormat::Yv12, "YV12");
convert_from!(convert_from_nv12, PixelFormat::Nv12, "NV12");
convert_from!(convert_from_nv21, PixelFormat::Nv21, "NV21");
convert_from!(convert_from_i422, PixelFormat::I422, "I422");
convert_from!(convert_from_i444, PixelFormat::I444, "I444");
convert_from!(convert_from_yuy2, PixelFormat::Yuy2, "YUY2");
convert_from!(convert_from_uyvy, PixelFormat::Uyvy, "UYVY");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion_error::MismatchedSize;
    use rand::Rng;

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255u8)).collect()
    }

    #[test]
    fn red_argb_to_rgb565() {
        let src = [0u8, 0, 255, 255].repeat(16);
        let mut dst = vec![0u8; 32];
        convert(
            &src,
            &mut dst,
            4,
            4,
            4,
            PixelFormat::Argb8888,
            PixelFormat::Rgb565,
        )
        .unwrap();
        for px in dst.chunks_exact(2) {
            assert_eq!(u16::from_le_bytes([px[0], px[1]]), 0xF800);
        }
    }

    #[test]
    fn black_i420_to_argb() {
        let mut src = vec![16u8; 16];
        src.extend_from_slice(&[128u8; 8]);
        let mut dst = vec![0u8; 64];
        convert_from_i420(&src, &mut dst, 4, 4, 4, PixelFormat::Argb8888).unwrap();
        assert_eq!(dst, [0u8, 0, 0, 255].repeat(16));
    }

    #[test]
    fn yuy2_to_uyvy_swaps_pairs() {
        let src = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut dst = [0u8; 8];
        convert(&src, &mut dst, 2, 2, 2, PixelFormat::Yuy2, PixelFormat::Uyvy).unwrap();
        assert_eq!(dst, [2, 1, 4, 3, 6, 5, 8, 7]);
    }

    #[test]
    fn swaps_are_exact() {
        let chains = [
            (PixelFormat::I420, PixelFormat::Yv12),
            (PixelFormat::Nv12, PixelFormat::Nv21),
            (PixelFormat::Yuy2, PixelFormat::Uyvy),
            (PixelFormat::Rgb888, PixelFormat::Bgr888),
        ];
        let (width, height) = (8u32, 6u32);
        for (first, second) in chains {
            let src = random_bytes(first.buffer_size(width, height).unwrap());
            let mut there = vec![0u8; second.buffer_size(width, height).unwrap()];
            let mut back = vec![0u8; src.len()];
            convert(&src, &mut there, width, width, height, first, second).unwrap();
            convert(&there, &mut back, width, width, height, second, first).unwrap();
            assert_eq!(src, back, "{} <-> {}", first, second);
        }
    }

    #[test]
    fn same_format_is_rejected() {
        let src = [0u8; 64];
        let mut dst = [0u8; 64];
        for format in PixelFormat::ALL {
            assert_eq!(
                convert(&src, &mut dst, 2, 2, 2, format, format),
                Err(ConversionError::FormatMismatch(format))
            );
        }
    }

    #[test]
    fn empty_buffers_are_null() {
        let mut dst = [0u8; 4];
        assert_eq!(
            convert(&[], &mut dst, 2, 2, 1, PixelFormat::Rgb565, PixelFormat::Rgba5551),
            Err(ConversionError::NullPointer)
        );
        assert_eq!(
            convert(&[0u8; 4], &mut [], 2, 2, 1, PixelFormat::Rgb565, PixelFormat::Rgba5551),
            Err(ConversionError::NullPointer)
        );
        // Null wins over every other check
        assert_eq!(
            convert(&[], &mut dst, 0, 0, 0, PixelFormat::Rgb565, PixelFormat::Rgb565),
            Err(ConversionError::NullPointer)
        );
    }

    #[test]
    fn validation_order() {
        let src = [0u8; 8];
        let mut dst = [0u8; 8];
        let converter = Converter::new(ConversionTable::empty());
        assert_eq!(
            converter.convert(&src, &mut dst, 0, 0, 0, PixelFormat::Nv12, PixelFormat::Rgb565),
            Err(ConversionError::UnsupportedFormat {
                input: PixelFormat::Nv12,
                output: PixelFormat::Rgb565
            })
        );
        let converter = Converter::new(ConversionTable::all());
        assert_eq!(
            converter.convert(&src, &mut dst, 0, 0, 2, PixelFormat::Nv12, PixelFormat::Rgb565),
            Err(ConversionError::ZeroBaseSize)
        );
        assert_eq!(
            converter.convert(&src, &mut dst, 1, 2, 2, PixelFormat::Nv12, PixelFormat::Rgb565),
            Err(ConversionError::PitchTooSmall(MismatchedSize {
                expected: 2,
                received: 1
            }))
        );
        assert_eq!(
            converter.convert(&src[..5], &mut dst, 2, 2, 2, PixelFormat::Nv12, PixelFormat::Rgb565),
            Err(ConversionError::SourceBufferTooSmall(MismatchedSize {
                expected: 6,
                received: 5
            }))
        );
        assert_eq!(
            converter.convert(&src, &mut dst, 2, 2, 2, PixelFormat::Nv12, PixelFormat::Argb8888),
            Err(ConversionError::DestinationBufferTooSmall(MismatchedSize {
                expected: 16,
                received: 8
            }))
        );
        assert_eq!(
            converter.convert(
                &src,
                &mut dst,
                u32::MAX,
                u32::MAX,
                u32::MAX,
                PixelFormat::Argb8888,
                PixelFormat::Rgb888
            ),
            Err(ConversionError::PointerOverflow)
        );
    }

    #[test]
    fn errors_leave_output_untouched() {
        let src = [0u8; 5];
        let mut dst = [0xAAu8; 32];
        assert!(convert(&src, &mut dst, 4, 4, 1, PixelFormat::Rgb565, PixelFormat::Rgb888).is_err());
        assert!(dst.iter().all(|&v| v == 0xAA));
    }

    #[test]
    fn padded_pitch_is_honoured() {
        // 2x2 RGB888 with one pixel of padding per row
        let src = [1u8, 2, 3, 4, 5, 6, 0xEE, 0xEE, 0xEE, 7, 8, 9, 10, 11, 12, 0xEE, 0xEE, 0xEE];
        let mut dst = [0u8; 12];
        convert(&src, &mut dst, 3, 2, 2, PixelFormat::Rgb888, PixelFormat::Bgr888).unwrap();
        assert_eq!(dst, [3, 2, 1, 6, 5, 4, 9, 8, 7, 12, 11, 10]);

        // 2x2 I422 with pitch 4, chroma pitch 2
        let mut padded = vec![0xEEu8; 4 * 2 + 2 * 2 * 2];
        padded[..2].copy_from_slice(&[16, 235]);
        padded[4..6].copy_from_slice(&[16, 235]);
        let mut gray = [0u8; 4];
        convert(&padded, &mut gray, 4, 2, 2, PixelFormat::I422, PixelFormat::I400).unwrap();
        assert_eq!(gray, [16, 235, 16, 235]);
    }

    #[test]
    fn restricted_table_rejects_pairs() {
        let converter = Converter::new(
            ConversionTable::all().without_pair(PixelFormat::Nv12, PixelFormat::Rgb565),
        );
        let src = [0u8; 6];
        let mut dst = [0u8; 8];
        assert_eq!(
            converter.convert(&src, &mut dst, 2, 2, 2, PixelFormat::Nv12, PixelFormat::Rgb565),
            Err(ConversionError::UnsupportedFormat {
                input: PixelFormat::Nv12,
                output: PixelFormat::Rgb565
            })
        );
        assert!(converter
            .convert(&src, &mut dst, 2, 2, 2, PixelFormat::Nv12, PixelFormat::Rgba5551)
            .is_ok());
        assert_eq!(converter.table().len(), ConversionTable::all().len() - 1);
    }

    #[test]
    fn every_pair_handles_odd_sizes() {
        let converter = Converter::new(ConversionTable::all());
        let (pitch, width, height) = (9u32, 5u32, 3u32);
        for (input_format, output_format) in converter.table().pairs() {
            let src_len = input_format
                .frame_layout(pitch, width, height)
                .unwrap()
                .required_len();
            let src = random_bytes(src_len);
            let mut dst = vec![0u8; output_format.buffer_size(width, height).unwrap()];
            converter
                .convert(&src, &mut dst, pitch, width, height, input_format, output_format)
                .unwrap();
        }
    }

    #[test]
    fn gray_round_trips_through_every_format() {
        let (width, height) = (4u32, 2u32);
        let gray: Vec<u8> = (0..8u8).map(|v| v * 30).collect();
        for format in PixelFormat::ALL {
            if format == PixelFormat::I400 {
                continue;
            }
            let mut image = PixelImageMut::alloc(width, height, format).unwrap();
            let source = PixelImage {
                data: &gray,
                pitch: width,
                width,
                height,
                format: PixelFormat::I400,
            };
            convert_image(&source, &mut image).unwrap();
            let mut back = PixelImageMut::alloc(width, height, PixelFormat::I400).unwrap();
            convert_image(&image.to_fixed(), &mut back).unwrap();
            let tolerance = match format.rgb_layout() {
                Some(layout) => 255 >> layout.g.bits.min(layout.r.bits).min(layout.b.bits),
                None => 0,
            };
            for (expected, actual) in gray.iter().zip(back.data.borrow()) {
                assert!(
                    (*expected as i32 - *actual as i32).abs() <= tolerance,
                    "{}: {} vs {}",
                    format,
                    expected,
                    actual
                );
            }
        }
    }

    #[test]
    fn image_sizes_must_agree() {
        let data = [0u8; 16];
        let source = PixelImage {
            data: &data,
            pitch: 4,
            width: 4,
            height: 1,
            format: PixelFormat::Argb8888,
        };
        let mut target = PixelImageMut::alloc(2, 2, PixelFormat::Rgb888).unwrap();
        assert_eq!(
            convert_image(&source, &mut target),
            Err(ConversionError::SizeMismatch(MismatchedDimensions {
                source_width: 4,
                source_height: 1,
                destination_width: 2,
                destination_height: 2
            }))
        );
    }

    #[test]
    fn raw_pointers() {
        let src = [0u8, 0, 255, 255];
        let mut dst = [0u8; 2];
        unsafe {
            assert_eq!(
                convert_raw(
                    std::ptr::null(),
                    dst.as_mut_ptr(),
                    1,
                    1,
                    1,
                    PixelFormat::Argb8888,
                    PixelFormat::Rgb565
                ),
                Err(ConversionError::NullPointer)
            );
            convert_raw(
                src.as_ptr(),
                dst.as_mut_ptr(),
                1,
                1,
                1,
                PixelFormat::Argb8888,
                PixelFormat::Rgb565,
            )
            .unwrap();
        }
        assert_eq!(dst, [0x00, 0xF8]);
    }
}
