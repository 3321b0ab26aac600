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

/// Rec. 601 luma weight of the red primary.
pub(crate) const BT601_KR: f32 = 0.299f32;
/// Rec. 601 luma weight of the blue primary.
pub(crate) const BT601_KB: f32 = 0.114f32;

/// Fixed point precision of the RGB -> YUV transform.
pub(crate) const FORWARD_PRECISION: i32 = 13;
/// Fixed point precision of the YUV -> RGB transform.
pub(crate) const INVERSE_PRECISION: i32 = 12;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Chroma subsampling ratio of a YUV format
pub enum YuvChromaSubsampling {
    /// One chroma sample per 2x2 luma block
    Yuv420 = 0,
    /// One chroma sample per 2x1 luma pair
    Yuv422 = 1,
    /// One chroma sample per luma sample
    Yuv444 = 2,
}

impl YuvChromaSubsampling {
    /// How many luma columns share one chroma column.
    #[inline(always)]
    pub const fn horizontal_factor(&self) -> usize {
        match self {
            YuvChromaSubsampling::Yuv420 | YuvChromaSubsampling::Yuv422 => 2,
            YuvChromaSubsampling::Yuv444 => 1,
        }
    }

    /// How many luma rows share one chroma row.
    #[inline(always)]
    pub const fn vertical_factor(&self) -> usize {
        match self {
            YuvChromaSubsampling::Yuv420 => 2,
            YuvChromaSubsampling::Yuv422 | YuvChromaSubsampling::Yuv444 => 1,
        }
    }

    #[inline(always)]
    pub const fn chroma_width(&self, width: usize) -> usize {
        width.div_ceil(self.horizontal_factor())
    }

    #[inline(always)]
    pub const fn chroma_height(&self, height: usize) -> usize {
        height.div_ceil(self.vertical_factor())
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Order of the chroma components in planar and semi-planar layouts
pub enum YuvNVOrder {
    UV = 0,
    VU = 1,
}

impl YuvNVOrder {
    #[inline(always)]
    pub const fn get_u_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 0,
            YuvNVOrder::VU => 1,
        }
    }

    #[inline(always)]
    pub const fn get_v_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 1,
            YuvNVOrder::VU => 0,
        }
    }
}

#[repr(usize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Byte order of a packed 4:2:2 group of two pixels
pub enum Yuy2Description {
    /// Y0 U Y1 V
    YUYV = 0,
    /// U Y0 V Y1
    UYVY = 1,
}

impl Yuy2Description {
    #[inline]
    pub const fn get_u_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 1,
            Yuy2Description::UYVY => 0,
        }
    }

    #[inline]
    pub const fn get_v_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 3,
            Yuy2Description::UYVY => 2,
        }
    }

    #[inline(always)]
    pub const fn get_first_y_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 0,
            Yuy2Description::UYVY => 1,
        }
    }

    #[inline]
    pub const fn get_second_y_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 2,
            Yuy2Description::UYVY => 3,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Declares YUV range TV (limited) or Full
pub(crate) enum YuvRange {
    /// Y ∈ [16, 235], UV ∈ [16, 240]
    Limited,
    /// Y, UV ∈ [0, 255]
    Full,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct YuvChromaRange {
    pub(crate) bias_y: u32,
    pub(crate) bias_uv: u32,
    pub(crate) range_y: u32,
    pub(crate) range_uv: u32,
}

pub(crate) const fn get_yuv_range(depth: u32, range: YuvRange) -> YuvChromaRange {
    match range {
        YuvRange::Limited => YuvChromaRange {
            bias_y: 16 << (depth - 8),
            bias_uv: 1 << (depth - 1),
            range_y: 219 << (depth - 8),
            range_uv: 224 << (depth - 8),
        },
        YuvRange::Full => YuvChromaRange {
            bias_y: 0,
            bias_uv: 1 << (depth - 1),
            range_uv: (1 << depth) - 1,
            range_y: (1 << depth) - 1,
        },
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct CbCrInverseTransform<T> {
    pub(crate) y_coef: T,
    pub(crate) cr_coef: T,
    pub(crate) cb_coef: T,
    pub(crate) g_coeff_1: T,
    pub(crate) g_coeff_2: T,
}

impl CbCrInverseTransform<f32> {
    /// Integral transformation adds an error not less than 1%
    pub(crate) fn to_integers(&self, precision: u32) -> CbCrInverseTransform<i32> {
        let precision_scale: i32 = 1i32 << (precision as i32);
        CbCrInverseTransform::<i32> {
            y_coef: (self.y_coef * precision_scale as f32).round() as i32,
            cr_coef: (self.cr_coef * precision_scale as f32).round() as i32,
            cb_coef: (self.cb_coef * precision_scale as f32).round() as i32,
            g_coeff_1: (self.g_coeff_1 * precision_scale as f32).round() as i32,
            g_coeff_2: (self.g_coeff_2 * precision_scale as f32).round() as i32,
        }
    }
}

/// Transformation YUV to RGB with coefficients as specified in [ITU-R](https://www.itu.int/rec/T-REC-H.273/en)
pub(crate) fn get_inverse_transform(
    range_rgba: u32,
    range_y: u32,
    range_uv: u32,
    kr: f32,
    kb: f32,
) -> CbCrInverseTransform<f32> {
    let range_uv = range_rgba as f32 / range_uv as f32;
    let y_coef = range_rgba as f32 / range_y as f32;
    let cr_coef = (2f32 * (1f32 - kr)) * range_uv;
    let cb_coef = (2f32 * (1f32 - kb)) * range_uv;
    let kg = 1.0f32 - kr - kb;
    let g_coeff_1 = (2f32 * ((1f32 - kr) * kr / kg)) * range_uv;
    let g_coeff_2 = (2f32 * ((1f32 - kb) * kb / kg)) * range_uv;
    CbCrInverseTransform {
        y_coef,
        cr_coef,
        cb_coef,
        g_coeff_1,
        g_coeff_2,
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct CbCrForwardTransform<T> {
    pub(crate) yr: T,
    pub(crate) yg: T,
    pub(crate) yb: T,
    pub(crate) cb_r: T,
    pub(crate) cb_g: T,
    pub(crate) cb_b: T,
    pub(crate) cr_r: T,
    pub(crate) cr_g: T,
    pub(crate) cr_b: T,
}

impl CbCrForwardTransform<f32> {
    pub(crate) fn to_integers(&self, precision: u32) -> CbCrForwardTransform<i32> {
        let scale = (1 << precision) as f32;
        CbCrForwardTransform::<i32> {
            yr: (self.yr * scale).round() as i32,
            yg: (self.yg * scale).round() as i32,
            yb: (self.yb * scale).round() as i32,
            cb_r: (self.cb_r * scale).round() as i32,
            cb_g: (self.cb_g * scale).round() as i32,
            cb_b: (self.cb_b * scale).round() as i32,
            cr_r: (self.cr_r * scale).round() as i32,
            cr_g: (self.cr_g * scale).round() as i32,
            cr_b: (self.cr_b * scale).round() as i32,
        }
    }
}

/// Transformation RGB to YUV with coefficients as specified in [ITU-R](https://www.itu.int/rec/T-REC-H.273/en)
pub(crate) fn get_forward_transform(
    range_rgba: u32,
    range_y: u32,
    range_uv: u32,
    kr: f32,
    kb: f32,
) -> CbCrForwardTransform<f32> {
    let kg = 1.0f32 - kr - kb;

    let yr = kr * range_y as f32 / range_rgba as f32;
    let yg = kg * range_y as f32 / range_rgba as f32;
    let yb = kb * range_y as f32 / range_rgba as f32;

    let cb_r = -0.5f32 * kr / (1f32 - kb) * range_uv as f32 / range_rgba as f32;
    let cb_g = -0.5f32 * kg / (1f32 - kb) * range_uv as f32 / range_rgba as f32;
    let cb_b = 0.5f32 * range_uv as f32 / range_rgba as f32;

    let cr_r = 0.5f32 * range_uv as f32 / range_rgba as f32;
    let cr_g = -0.5f32 * kg / (1f32 - kr) * range_uv as f32 / range_rgba as f32;
    let cr_b = -0.5f32 * kb / (1f32 - kr) * range_uv as f32 / range_rgba as f32;
    CbCrForwardTransform {
        yr,
        yg,
        yb,
        cb_r,
        cb_g,
        cb_b,
        cr_r,
        cr_g,
        cr_b,
    }
}

/// Fixed point BT.601 forward transform with the rounding bias folded into the offsets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct ForwardTransform {
    pub(crate) transform: CbCrForwardTransform<i32>,
    pub(crate) bias_y: i32,
    pub(crate) bias_uv: i32,
}

impl ForwardTransform {
    pub(crate) fn bt601(range: YuvRange) -> ForwardTransform {
        let range = get_yuv_range(8, range);
        let transform = get_forward_transform(
            255,
            range.range_y,
            range.range_uv,
            BT601_KR,
            BT601_KB,
        )
        .to_integers(FORWARD_PRECISION as u32);
        let precision_scale = (1 << FORWARD_PRECISION) as f32;
        ForwardTransform {
            transform,
            bias_y: ((range.bias_y as f32 + 0.5f32) * precision_scale) as i32,
            bias_uv: ((range.bias_uv as f32 + 0.5f32) * precision_scale) as i32,
        }
    }

    #[inline(always)]
    pub(crate) fn luma(&self, r: i32, g: i32, b: i32) -> u8 {
        let t = &self.transform;
        ((r * t.yr + g * t.yg + b * t.yb + self.bias_y) >> FORWARD_PRECISION).clamp(0, 255) as u8
    }

    #[inline(always)]
    pub(crate) fn chroma(&self, r: i32, g: i32, b: i32) -> (u8, u8) {
        let t = &self.transform;
        let cb = (r * t.cb_r + g * t.cb_g + b * t.cb_b + self.bias_uv) >> FORWARD_PRECISION;
        let cr = (r * t.cr_r + g * t.cr_g + b * t.cr_b + self.bias_uv) >> FORWARD_PRECISION;
        (cb.clamp(0, 255) as u8, cr.clamp(0, 255) as u8)
    }
}

/// Fixed point BT.601 limited range inverse transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct InverseTransform {
    pub(crate) transform: CbCrInverseTransform<i32>,
    pub(crate) bias_y: i32,
    pub(crate) bias_uv: i32,
}

impl InverseTransform {
    pub(crate) fn bt601() -> InverseTransform {
        let range = get_yuv_range(8, YuvRange::Limited);
        let transform = get_inverse_transform(
            255,
            range.range_y,
            range.range_uv,
            BT601_KR,
            BT601_KB,
        )
        .to_integers(INVERSE_PRECISION as u32);
        InverseTransform {
            transform,
            bias_y: range.bias_y as i32,
            bias_uv: range.bias_uv as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chroma_dimensions_round_up() {
        assert_eq!(YuvChromaSubsampling::Yuv420.chroma_width(7), 4);
        assert_eq!(YuvChromaSubsampling::Yuv420.chroma_height(5), 3);
        assert_eq!(YuvChromaSubsampling::Yuv422.chroma_height(5), 5);
        assert_eq!(YuvChromaSubsampling::Yuv444.chroma_width(7), 7);
    }

    #[test]
    fn limited_range_extremes() {
        let forward = ForwardTransform::bt601(YuvRange::Limited);
        assert_eq!(forward.luma(0, 0, 0), 16);
        assert_eq!(forward.luma(255, 255, 255), 235);
        assert_eq!(forward.chroma(0, 0, 0), (128, 128));
        assert_eq!(forward.chroma(255, 255, 255), (128, 128));
        assert_eq!(forward.chroma(0, 0, 255).0, 240);
        assert_eq!(forward.chroma(255, 0, 0).1, 240);
    }

    #[test]
    fn full_range_gray_is_identity() {
        let forward = ForwardTransform::bt601(YuvRange::Full);
        for v in 0..=255 {
            assert_eq!(forward.luma(v, v, v), v as u8);
        }
    }

    #[test]
    fn packed_positions_are_disjoint() {
        for description in [Yuy2Description::YUYV, Yuy2Description::UYVY] {
            let mut seen = [false; 4];
            for position in [
                description.get_first_y_position(),
                description.get_second_y_position(),
                description.get_u_position(),
                description.get_v_position(),
            ] {
                assert!(!seen[position]);
                seen[position] = true;
            }
        }
    }
}
