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

#![no_main]

use libfuzzer_sys::fuzz_target;
use pixconv::{convert, PixelFormat};

fuzz_target!(|data: (u8, u8, u8, u8)| {
    fuzz_swap(PixelFormat::I420, PixelFormat::Yv12, data.0, data.1, data.2, data.3);
    fuzz_swap(PixelFormat::Nv12, PixelFormat::Nv21, data.0, data.1, data.2, data.3);
    fuzz_swap(PixelFormat::Yuy2, PixelFormat::Uyvy, data.0, data.1, data.2, data.3);
    fuzz_swap(PixelFormat::Rgb888, PixelFormat::Bgr888, data.0, data.1, data.2, data.3);
});

fn fuzz_swap(
    first: PixelFormat,
    second: PixelFormat,
    i_width: u8,
    i_height: u8,
    seed: u8,
    step: u8,
) {
    if i_width == 0 || i_height == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;

    let mut src = vec![0u8; first.buffer_size(width, height).unwrap()];
    for (i, v) in src.iter_mut().enumerate() {
        *v = seed.wrapping_add((i as u8).wrapping_mul(step | 1));
    }
    // Odd packed widths duplicate the last luma sample, make the source agree
    if first == PixelFormat::Yuy2 && width % 2 == 1 {
        for row in src.chunks_exact_mut(((width as usize).div_ceil(2)) * 4) {
            let last = row.len() - 4;
            row[last + 2] = row[last];
        }
    }

    let mut there = vec![0u8; second.buffer_size(width, height).unwrap()];
    let mut back = vec![0u8; src.len()];
    convert(&src, &mut there, width, width, height, first, second).unwrap();
    convert(&there, &mut back, width, width, height, second, first).unwrap();
    assert_eq!(src, back);
}
