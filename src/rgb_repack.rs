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
use crate::numerics::{compress_from_u8, expand_to_u8, extract_bits};
use crate::pixel_format::{ChannelBits, RgbLayout};

#[inline(always)]
fn load_word(px: &[u8]) -> u32 {
    px.iter()
        .enumerate()
        .fold(0u32, |word, (i, &byte)| word | ((byte as u32) << (8 * i)))
}

#[inline(always)]
fn store_word(word: u32, px: &mut [u8]) {
    for (i, dst) in px.iter_mut().enumerate() {
        *dst = (word >> (8 * i)) as u8;
    }
}

#[inline(always)]
fn read_channel(word: u32, channel: ChannelBits) -> u8 {
    expand_to_u8(extract_bits(word, channel.shift, channel.bits), channel.bits)
}

#[inline(always)]
fn write_channel(value: u8, channel: ChannelBits) -> u32 {
    compress_from_u8(value, channel.bits) << channel.shift
}

impl RgbLayout {
    /// Reads one pixel as 8-bit `[r, g, b, a]`, formats without alpha read as opaque.
    #[inline(always)]
    pub(crate) fn unpack(&self, px: &[u8]) -> [u8; 4] {
        let word = load_word(&px[..self.bytes_per_pixel]);
        [
            read_channel(word, self.r),
            read_channel(word, self.g),
            read_channel(word, self.b),
            self.a.map_or(255, |a| read_channel(word, a)),
        ]
    }

    /// Writes 8-bit `[r, g, b, a]`, narrowing every channel to its width.
    #[inline(always)]
    pub(crate) fn pack(&self, rgba: [u8; 4], px: &mut [u8]) {
        let mut word = write_channel(rgba[0], self.r)
            | write_channel(rgba[1], self.g)
            | write_channel(rgba[2], self.b);
        if let Some(a) = self.a {
            word |= write_channel(rgba[3], a);
        }
        store_word(word, &mut px[..self.bytes_per_pixel]);
    }
}

/// Converts between any two RGB layouts through 8-bit channels.
pub(crate) fn rgb_repack(
    src: &[u8],
    src_frame: &FrameLayout,
    src_layout: RgbLayout,
    dst: &mut [u8],
    dst_frame: &FrameLayout,
    dst_layout: RgbLayout,
) {
    for (src_row, dst_row) in src_frame
        .plane_rows(src, 0)
        .zip(dst_frame.plane_rows_mut(dst, 0))
    {
        for (src, dst) in src_row
            .chunks_exact(src_layout.bytes_per_pixel)
            .zip(dst_row.chunks_exact_mut(dst_layout.bytes_per_pixel))
        {
            dst_layout.pack(src_layout.unpack(src), dst);
        }
    }
}
