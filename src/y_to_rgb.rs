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

/// Broadcasts luma to every color channel, alpha is opaque.
pub(crate) fn luma_to_rgb(
    src: &[u8],
    src_frame: &FrameLayout,
    dst: &mut [u8],
    dst_frame: &FrameLayout,
    dst_layout: RgbLayout,
) {
    for (y_row, rgba_row) in src_frame
        .plane_rows(src, 0)
        .zip(dst_frame.plane_rows_mut(dst, 0))
    {
        for (&y_value, rgba) in y_row
            .iter()
            .zip(rgba_row.chunks_exact_mut(dst_layout.bytes_per_pixel))
        {
            dst_layout.pack([y_value, y_value, y_value, 255], rgba);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::PixelFormat;

    #[test]
    fn luma_is_broadcast() {
        let src = [0x10u8, 0x80, 0xFF, 0, 9, 9];
        let frame = PixelFormat::Alpha8.frame_layout(6, 3, 1).unwrap();
        let dst_frame = PixelFormat::Rgba8888.frame_layout(3, 3, 1).unwrap();
        let mut dst = [0u8; 12];
        luma_to_rgb(
            &src,
            &frame,
            &mut dst,
            &dst_frame,
            PixelFormat::Rgba8888.rgb_layout().unwrap(),
        );
        assert_eq!(
            dst,
            [255, 0x10, 0x10, 0x10, 255, 0x80, 0x80, 0x80, 255, 255, 255, 255]
        );
    }

    #[test]
    fn narrow_formats_truncate() {
        let frame = PixelFormat::Alpha8.frame_layout(1, 1, 1).unwrap();
        let dst_frame = PixelFormat::Argb4444.frame_layout(1, 1, 1).unwrap();
        let mut dst = [0u8; 2];
        luma_to_rgb(
            &[0x9C],
            &frame,
            &mut dst,
            &dst_frame,
            PixelFormat::Argb4444.rgb_layout().unwrap(),
        );
        assert_eq!(dst, [0x99, 0xF9]);
    }
}
