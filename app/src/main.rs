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
mod max_divergence;

use crate::max_divergence::check_div;
use pixconv::{convert_image, PixelFormat, PixelImage, PixelImageMut};
use std::time::Instant;

fn main() {
    let width = 1920u32;
    let height = 1080u32;
    let pitch = width + 64;

    let mut source = vec![0u8; PixelFormat::Argb8888.frame_layout(pitch, width, height).unwrap().required_len()];
    for (i, px) in source.chunks_exact_mut(4).enumerate() {
        let v = (i % 256) as u8;
        px.copy_from_slice(&[v, v.wrapping_mul(3), 255 - v, 255]);
    }
    let image = PixelImage {
        data: &source,
        pitch,
        width,
        height,
        format: PixelFormat::Argb8888,
    };

    for format in [PixelFormat::I420, PixelFormat::Nv12, PixelFormat::Yuy2, PixelFormat::Rgb565] {
        let mut target = PixelImageMut::alloc(width, height, format).unwrap();
        let start_time = Instant::now();
        convert_image(&image, &mut target).unwrap();
        println!(
            "ARGB8888 -> {} time: {:?}",
            format,
            start_time.elapsed()
        );
    }

    check_div();
}
