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

pub(crate) trait ShuffleConverter {
    fn convert(&self, src: &[u8], dst: &mut [u8], width: usize);
}

/// Byte position of every channel of a byte aligned layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct ChannelOffsets {
    r: usize,
    g: usize,
    b: usize,
    a: Option<usize>,
    channels: usize,
}

impl ChannelOffsets {
    fn new(layout: RgbLayout) -> ChannelOffsets {
        ChannelOffsets {
            r: layout.r.byte_offset(),
            g: layout.g.byte_offset(),
            b: layout.b.byte_offset(),
            a: layout.a.map(|a| a.byte_offset()),
            channels: layout.bytes_per_pixel,
        }
    }
}

struct Rgba8DefaultConverter {
    src: ChannelOffsets,
    dst: ChannelOffsets,
}

impl Rgba8DefaultConverter {
    fn new(src: RgbLayout, dst: RgbLayout) -> Self {
        Rgba8DefaultConverter {
            src: ChannelOffsets::new(src),
            dst: ChannelOffsets::new(dst),
        }
    }
}

impl ShuffleConverter for Rgba8DefaultConverter {
    fn convert(&self, src: &[u8], dst: &mut [u8], width: usize) {
        let src_channels = self.src;
        let dst_channels = self.dst;
        for (dst, src) in dst
            .chunks_exact_mut(dst_channels.channels)
            .zip(src.chunks_exact(src_channels.channels))
            .take(width)
        {
            dst[dst_channels.r] = src[src_channels.r];
            dst[dst_channels.g] = src[src_channels.g];
            dst[dst_channels.b] = src[src_channels.b];
            if let Some(dst_a) = dst_channels.a {
                dst[dst_a] = src_channels.a.map_or(255, |src_a| src[src_a]);
            }
        }
    }
}

/// Channel reshuffling between byte aligned RGB layouts
pub(crate) fn shuffle(
    src: &[u8],
    src_frame: &FrameLayout,
    src_layout: RgbLayout,
    dst: &mut [u8],
    dst_frame: &FrameLayout,
    dst_layout: RgbLayout,
    width: usize,
) {
    let converter = Rgba8DefaultConverter::new(src_layout, dst_layout);
    for (src_row, dst_row) in src_frame
        .plane_rows(src, 0)
        .zip(dst_frame.plane_rows_mut(dst, 0))
    {
        converter.convert(src_row, dst_row, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::PixelFormat;
    use crate::rgb_repack::rgb_repack;
    use rand::Rng;

    const ALIGNED: [PixelFormat; 4] = [
        PixelFormat::Argb8888,
        PixelFormat::Rgba8888,
        PixelFormat::Rgb888,
        PixelFormat::Bgr888,
    ];

    #[test]
    fn rgb888_to_bgr888_swaps_bytes() {
        let frame = PixelFormat::Rgb888.frame_layout(2, 2, 1).unwrap();
        let mut dst = [0u8; 6];
        shuffle(
            &[1, 2, 3, 4, 5, 6],
            &frame,
            PixelFormat::Rgb888.rgb_layout().unwrap(),
            &mut dst,
            &frame,
            PixelFormat::Bgr888.rgb_layout().unwrap(),
            2,
        );
        assert_eq!(dst, [3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn shuffle_agrees_with_repack() {
        let mut rng = rand::rng();
        let (width, height) = (5u32, 4u32);
        for src_format in ALIGNED {
            for dst_format in ALIGNED {
                if src_format == dst_format {
                    continue;
                }
                let src_frame = src_format.frame_layout(width + 2, width, height).unwrap();
                let dst_frame = dst_format.frame_layout(width, width, height).unwrap();
                let src: Vec<u8> = (0..src_frame.required_len())
                    .map(|_| rng.random_range(0..=255u8))
                    .collect();
                let mut shuffled = vec![0u8; dst_frame.required_len()];
                let mut repacked = vec![0u8; dst_frame.required_len()];
                let src_layout = src_format.rgb_layout().unwrap();
                let dst_layout = dst_format.rgb_layout().unwrap();
                shuffle(
                    &src,
                    &src_frame,
                    src_layout,
                    &mut shuffled,
                    &dst_frame,
                    dst_layout,
                    width as usize,
                );
                rgb_repack(
                    &src,
                    &src_frame,
                    src_layout,
                    &mut repacked,
                    &dst_frame,
                    dst_layout,
                );
                assert_eq!(shuffled, repacked, "{} -> {}", src_format, dst_format);
            }
        }
    }
}
