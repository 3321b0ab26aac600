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
use crate::pixel_format::{RgbLayout, YuvLayout};
use crate::yuv_support::{ForwardTransform, YuvRange};

/// RGB to BT.601 limited range YUV.
///
/// Luma is computed for every pixel. Chroma of a subsampled group is taken from the
/// top-left pixel of the group.
pub(crate) fn rgb_to_yuv(
    src: &[u8],
    src_frame: &FrameLayout,
    src_layout: RgbLayout,
    dst: &mut [u8],
    dst_frame: &FrameLayout,
    dst_layout: YuvLayout,
    width: usize,
) {
    let transform = ForwardTransform::bt601(YuvRange::Limited);
    let cursors = YuvCursors::new(dst_layout);
    let bpp = src_layout.bytes_per_pixel;
    let luma_samples = cursors.luma_samples(width);

    for (y, src_row) in src_frame.plane_rows(src, 0).enumerate() {
        let y_start = cursors.y.row_start(dst_frame, y);
        for x in 0..luma_samples {
            let source_x = x.min(width - 1);
            let [r, g, b, _] = src_layout.unpack(&src_row[source_x * bpp..]);
            dst[y_start + x * cursors.y.step] = transform.luma(r as i32, g as i32, b as i32);
        }
    }

    let subsampling = cursors.subsampling;
    let chroma_width = subsampling.chroma_width(width);
    let horizontal_step = subsampling.horizontal_factor() * bpp;

    for (cy, src_row) in src_frame
        .plane_rows(src, 0)
        .step_by(subsampling.vertical_factor())
        .enumerate()
    {
        let u_start = cursors.u.row_start(dst_frame, cy);
        let v_start = cursors.v.row_start(dst_frame, cy);
        for cx in 0..chroma_width {
            let [r, g, b, _] = src_layout.unpack(&src_row[cx * horizontal_step..]);
            let (cb, cr) = transform.chroma(r as i32, g as i32, b as i32);
            dst[u_start + cx * cursors.u.step] = cb;
            dst[v_start + cx * cursors.v.step] = cr;
        }
    }
}
