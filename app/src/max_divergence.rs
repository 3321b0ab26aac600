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
use pixconv::{convert, FormatFamily, PixelFormat};
use rand::Rng;

/// Largest per channel difference after `rgb_format -> yuv_format -> rgb_format`
/// over sampled points of a solid color frame.
fn matrix(rgb_format: PixelFormat, yuv_format: PixelFormat, color: [u8; 4]) -> [u32; 3] {
    let image_width = 16usize;
    let image_height = 16usize;

    let random_point_x = rand::rng().random_range(0..image_width);
    let random_point_y = rand::rng().random_range(0..image_height);

    let pixel_points = [
        [0, 0],
        [image_width - 1, image_height - 1],
        [image_width - 1, 0],
        [0, image_height - 1],
        [(image_width - 1) / 2, (image_height - 1) / 2],
        [random_point_x, random_point_y],
    ];

    let width = image_width as u32;
    let height = image_height as u32;

    let mut rgba = vec![0u8; PixelFormat::Rgba8888.buffer_size(width, height).unwrap()];
    for px in rgba.chunks_exact_mut(4) {
        // RGBA8888 is stored A B G R
        px.copy_from_slice(&[color[3], color[2], color[1], color[0]]);
    }

    let mut source = vec![0u8; rgb_format.buffer_size(width, height).unwrap()];
    if rgb_format != PixelFormat::Rgba8888 {
        convert(
            &rgba,
            &mut source,
            width,
            width,
            height,
            PixelFormat::Rgba8888,
            rgb_format,
        )
        .unwrap();
    } else {
        source.copy_from_slice(&rgba);
    }

    let mut yuv = vec![0u8; yuv_format.buffer_size(width, height).unwrap()];
    convert(&source, &mut yuv, width, width, height, rgb_format, yuv_format).unwrap();

    let mut decoded = vec![0u8; source.len()];
    convert(&yuv, &mut decoded, width, width, height, yuv_format, rgb_format).unwrap();

    let mut expected = vec![0u8; rgba.len()];
    let mut actual = vec![0u8; rgba.len()];
    for (src, dst) in [(&source, &mut expected), (&decoded, &mut actual)] {
        if rgb_format != PixelFormat::Rgba8888 {
            convert(src, dst, width, width, height, rgb_format, PixelFormat::Rgba8888).unwrap();
        } else {
            dst.copy_from_slice(src);
        }
    }

    let mut max_diff = [u32::MIN; 3];
    for point in &pixel_points {
        let px = (point[0] + point[1] * image_width) * 4;
        for (c, diff) in max_diff.iter_mut().enumerate() {
            let channel = px + 3 - c;
            let d = (expected[channel] as i32 - actual[channel] as i32).unsigned_abs();
            *diff = d.max(*diff);
        }
    }
    max_diff
}

pub(crate) fn search_for_max_divergences(rgb_format: PixelFormat, yuv_format: PixelFormat) -> [u32; 3] {
    let mut max_diff = [u32::MIN; 3];
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(15) {
                let diff = matrix(rgb_format, yuv_format, [r, g, b, 255]);
                for (m, d) in max_diff.iter_mut().zip(diff) {
                    *m = d.max(*m);
                }
            }
        }
    }
    max_diff
}

pub(crate) fn check_div() {
    let yuv_formats: Vec<PixelFormat> = PixelFormat::ALL
        .into_iter()
        .filter(|f| f.family() == FormatFamily::Yuv)
        .collect();
    for rgb_format in [PixelFormat::Rgb888, PixelFormat::Argb8888, PixelFormat::Rgb565] {
        for &yuv_format in &yuv_formats {
            let max_divergence = search_for_max_divergences(rgb_format, yuv_format);
            println!(
                "Max Divergence {} -> {} -> {} {:?}",
                rgb_format, yuv_format, rgb_format, max_divergence
            );
        }
    }
}
