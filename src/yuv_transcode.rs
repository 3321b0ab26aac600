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
use crate::images::{FrameLayout, SampleCursor, YuvCursors};
use crate::pixel_format::YuvLayout;

/// Moves samples between any two YUV layouts without touching their values.
///
/// Every destination chroma site is mapped to the luma position it covers and takes the
/// source chroma site covering that position, so subsampling drops samples and
/// upsampling duplicates them.
pub(crate) fn yuv_transcode(
    src: &[u8],
    src_frame: &FrameLayout,
    src_layout: YuvLayout,
    dst: &mut [u8],
    dst_frame: &FrameLayout,
    dst_layout: YuvLayout,
    width: usize,
    height: usize,
) {
    let src_cursors = YuvCursors::new(src_layout);
    let dst_cursors = YuvCursors::new(dst_layout);

    let luma_samples = dst_cursors.luma_samples(width);
    let contiguous_luma = src_cursors.y.step == 1 && dst_cursors.y.step == 1;
    for y in 0..height {
        let src_start = src_cursors.y.row_start(src_frame, y);
        let dst_start = dst_cursors.y.row_start(dst_frame, y);
        if contiguous_luma {
            dst[dst_start..dst_start + width].copy_from_slice(&src[src_start..src_start + width]);
            continue;
        }
        for x in 0..luma_samples {
            dst[dst_start + x * dst_cursors.y.step] =
                src[src_start + x.min(width - 1) * src_cursors.y.step];
        }
    }

    let src_subsampling = src_cursors.subsampling;
    let dst_subsampling = dst_cursors.subsampling;
    let chroma_width = dst_subsampling.chroma_width(width);

    for cy in 0..dst_subsampling.chroma_height(height) {
        let source_cy = cy * dst_subsampling.vertical_factor() / src_subsampling.vertical_factor();
        let copy_row = |dst: &mut [u8], dst_cursor: SampleCursor, src_cursor: SampleCursor| {
            let src_start = src_cursor.row_start(src_frame, source_cy);
            let dst_start = dst_cursor.row_start(dst_frame, cy);
            for cx in 0..chroma_width {
                let source_cx = cx * dst_subsampling.horizontal_factor()
                    / src_subsampling.horizontal_factor();
                dst[dst_start + cx * dst_cursor.step] = src[src_start + source_cx * src_cursor.step];
            }
        };
        copy_row(&mut *dst, dst_cursors.u, src_cursors.u);
        copy_row(&mut *dst, dst_cursors.v, src_cursors.v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::PixelFormat;
    use rand::Rng;

    fn transcode(src_format: PixelFormat, src: &[u8], dst_format: PixelFormat, w: u32, h: u32) -> Vec<u8> {
        let src_frame = src_format.frame_layout(w, w, h).unwrap();
        let dst_frame = dst_format.frame_layout(w, w, h).unwrap();
        let mut dst = vec![0u8; dst_frame.required_len()];
        yuv_transcode(
            src,
            &src_frame,
            src_format.yuv_layout().unwrap(),
            &mut dst,
            &dst_frame,
            dst_format.yuv_layout().unwrap(),
            w as usize,
            h as usize,
        );
        dst
    }

    fn random_frame(format: PixelFormat, w: u32, h: u32) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..format.buffer_size(w, h).unwrap())
            .map(|_| rng.random_range(0..=255u8))
            .collect()
    }

    #[test]
    fn yuy2_to_uyvy_swaps_bytes() {
        let src = [1u8, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(
            transcode(PixelFormat::Yuy2, &src, PixelFormat::Uyvy, 4, 1),
            vec![2, 1, 4, 3, 6, 5, 8, 7]
        );
    }

    #[test]
    fn order_swaps_are_involutions() {
        let pairs = [
            (PixelFormat::I420, PixelFormat::Yv12),
            (PixelFormat::Nv12, PixelFormat::Nv21),
            (PixelFormat::Yuy2, PixelFormat::Uyvy),
            (PixelFormat::I420, PixelFormat::Nv12),
        ];
        for (first, second) in pairs {
            let (w, h) = (6u32, 4u32);
            let src = random_frame(first, w, h);
            let there = transcode(first, &src, second, w, h);
            let back = transcode(second, &there, first, w, h);
            assert_eq!(src, back, "{} <-> {}", first, second);
        }
    }

    #[test]
    fn yv12_swaps_chroma_planes() {
        let src = [0u8, 0, 0, 0, 1, 2];
        assert_eq!(
            transcode(PixelFormat::I420, &src, PixelFormat::Yv12, 2, 2),
            vec![0, 0, 0, 0, 2, 1]
        );
        assert_eq!(
            transcode(PixelFormat::I420, &src, PixelFormat::Nv21, 2, 2),
            vec![0, 0, 0, 0, 2, 1]
        );
    }

    #[test]
    fn upsampling_duplicates_and_downsampling_drops() {
        // 4x2 I420 with two chroma sites per component
        let src = [0u8, 1, 2, 3, 4, 5, 6, 7, 10, 11, 20, 21];
        let i444 = transcode(PixelFormat::I420, &src, PixelFormat::I444, 4, 2);
        assert_eq!(&i444[8..16], &[10, 10, 11, 11, 10, 10, 11, 11]);
        assert_eq!(&i444[16..24], &[20, 20, 21, 21, 20, 20, 21, 21]);

        let back = transcode(PixelFormat::I444, &i444, PixelFormat::I420, 4, 2);
        assert_eq!(back, src.to_vec());

        let i422 = transcode(PixelFormat::I420, &src, PixelFormat::I422, 4, 2);
        assert_eq!(&i422[8..12], &[10, 11, 10, 11]);
    }

    #[test]
    fn odd_width_to_packed_repeats_last_luma() {
        let src = [1u8, 2, 3, 9, 9, 8, 8];
        let packed = transcode(PixelFormat::I420, &src, PixelFormat::Uyvy, 3, 1);
        assert_eq!(packed, vec![9, 1, 8, 2, 9, 3, 8, 3]);
    }
}
