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
use criterion::{criterion_group, criterion_main, Criterion};
use pixconv::{convert, PixelFormat};
use rand::Rng;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn random_frame(format: PixelFormat) -> Vec<u8> {
    let mut rng = rand::rng();
    let size = format.buffer_size(WIDTH, HEIGHT).unwrap();
    (0..size).map(|_| rng.random_range(0..=255u8)).collect()
}

fn bench_pair(c: &mut Criterion, input_format: PixelFormat, output_format: PixelFormat) {
    let src = random_frame(input_format);
    let mut dst = vec![0u8; output_format.buffer_size(WIDTH, HEIGHT).unwrap()];
    c.bench_function(
        &format!("pixconv {} -> {}", input_format, output_format),
        |b| {
            b.iter(|| {
                convert(
                    &src,
                    &mut dst,
                    WIDTH,
                    WIDTH,
                    HEIGHT,
                    input_format,
                    output_format,
                )
                .unwrap();
            })
        },
    );
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_pair(c, PixelFormat::Argb8888, PixelFormat::Rgb565);
    bench_pair(c, PixelFormat::Rgb888, PixelFormat::Bgr888);
    bench_pair(c, PixelFormat::Argb8888, PixelFormat::I420);
    bench_pair(c, PixelFormat::Rgb565, PixelFormat::Nv12);
    bench_pair(c, PixelFormat::I420, PixelFormat::Argb8888);
    bench_pair(c, PixelFormat::Nv21, PixelFormat::Rgb565);
    bench_pair(c, PixelFormat::Yuy2, PixelFormat::Rgba8888);
    bench_pair(c, PixelFormat::I420, PixelFormat::Nv12);
    bench_pair(c, PixelFormat::Yuy2, PixelFormat::Uyvy);
    bench_pair(c, PixelFormat::I444, PixelFormat::I420);
    bench_pair(c, PixelFormat::Argb8888, PixelFormat::I400);
    bench_pair(c, PixelFormat::I400, PixelFormat::Rgb565);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
