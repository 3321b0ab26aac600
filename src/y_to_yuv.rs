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
use crate::pixel_format::YuvLayout;

const NEUTRAL_CHROMA: u8 = 0x80;

/// Copies luma into the Y component and fills chroma with the neutral value.
pub(crate) fn luma_to_yuv(
    src: &[u8],
    src_frame: &FrameLayout,
    dst: &mut [u8],
    dst_frame: &FrameLayout,
    dst_layout: YuvLayout,
    width: usize,
) {
    let cursors = YuvCursors::new(dst_layout);
    let luma_samples = cursors.luma_samples(width);

    for (y, y_row) in src_frame.plane_rows(src, 0).enumerate() {
        let y_start = cursors.y.row_start(dst_frame, y);
        for x in 0..luma_samples {
            dst[y_start + x * cursors.y.step] = y_row[x.min(width - 1)];
        }
    }

    let subsampling = cursors.subsampling;
    let chroma_height = subsampling.chroma_height(src_frame.plane(0).rows);
    let chroma_width = subsampling.chroma_width(width);
    for cy in 0..chroma_height {
        let u_start = cursors.u.row_start(dst_frame, cy);
        let v_start = cursors.v.row_start(dst_frame, cy);
        for cx in 0..chroma_width {
            dst[u_start + cx * cursors.u.step] = NEUTRAL_CHROMA;
            dst[v_start + cx * cursors.v.step] = NEUTRAL_CHROMA;
        }
    }
}

/// Extracts the Y component, chroma is discarded.
pub(crate) fn yuv_to_luma(
    src: &[u8],
    src_frame: &FrameLayout,
    src_layout: YuvLayout,
    dst: &mut [u8],
    dst_frame: &FrameLayout,
) {
    let cursors = YuvCursors::new(src_layout);
    for (y, y_row) in dst_frame.plane_rows_mut(dst, 0).enumerate() {
        let y_start = cursors.y.row_start(src_frame, y);
        if cursors.y.step == 1 {
            y_row.copy_from_slice(&src[y_start..y_start + y_row.len()]);
            continue;
        }
        for (x, y_dst) in y_row.iter_mut().enumerate() {
            *y_dst = src[y_start + x * cursors.y.step];
        }
    }
}
