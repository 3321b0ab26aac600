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
use crate::images::{FrameLayout, YuvCursors};
use crate::numerics::qrshr;
use crate::pixel_format::{RgbLayout, YuvLayout};
use crate::yuv_support::{InverseTransform, INVERSE_PRECISION};

/// BT.601 limited range YUV to RGB, chroma is upsampled by nearest neighbour.
/// Destinations with alpha are written opaque.
pub(crate) fn yuv_to_rgb(
    src: &[u8],
    src_frame: &FrameLayout,
    src_layout: YuvLayout,
    dst: &mut [u8],
    dst_frame: &FrameLayout,
    dst_layout: RgbLayout,
) {
    let inverse = InverseTransform::bt601();
    let transform = inverse.transform;
    let cursors = YuvCursors::new(src_layout);
    let horizontal_factor = cursors.subsampling.horizontal_factor();
    let vertical_factor = cursors.subsampling.vertical_factor();

    for (y, dst_row) in dst_frame.plane_rows_mut(dst, 0).enumerate() {
        let y_start = cursors.y.row_start(src_frame, y);
        let u_start = cursors.u.row_start(src_frame, y / vertical_factor);
        let v_start = cursors.v.row_start(src_frame, y / vertical_factor);

        for (x, rgba) in dst_row
            .chunks_exact_mut(dst_layout.bytes_per_pixel)
            .enumerate()
        {
            let cx = x / horizontal_factor;
            let y_value = (src[y_start + x * cursors.y.step] as i32 - inverse.bias_y)
                * transform.y_coef;
            let cb_value = src[u_start + cx * cursors.u.step] as i32 - inverse.bias_uv;
            let cr_value = src[v_start + cx * cursors.v.step] as i32 - inverse.bias_uv;

            let r = qrshr::<INVERSE_PRECISION, 8>(y_value + transform.cr_coef * cr_value);
            let b = qrshr::<INVERSE_PRECISION, 8>(y_value + transform.cb_coef * cb_value);
            let g = qrshr::<INVERSE_PRECISION, 8>(
                y_value - transform.g_coeff_1 * cr_value - transform.g_coeff_2 * cb_value,
            );

            dst_layout.pack([r as u8, g as u8, b as u8, 255], rgba);
        }
    }
}
