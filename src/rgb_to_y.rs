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
use crate::images::FrameLayout;
use crate::pixel_format::RgbLayout;
use crate::yuv_support::{ForwardTransform, YuvRange};

/// RGB to full range 8-bit luma, gray input keeps its value.
pub(crate) fn rgb_to_luma(
    src: &[u8],
    src_frame: &FrameLayout,
    src_layout: RgbLayout,
    dst: &mut [u8],
    dst_frame: &FrameLayout,
) {
    let transform = ForwardTransform::bt601(YuvRange::Full);
    for (src_row, y_row) in src_frame
        .plane_rows(src, 0)
        .zip(dst_frame.plane_rows_mut(dst, 0))
    {
        for (rgba, y_dst) in src_row
            .chunks_exact(src_layout.bytes_per_pixel)
            .zip(y_row.iter_mut())
        {
            let [r, g, b, _] = src_layout.unpack(rgba);
            *y_dst = transform.luma(r as i32, g as i32, b as i32);
        }
    }
}
