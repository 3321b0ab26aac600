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
use pixconv::{convert, ConversionError, PixelFormat};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, Vec<u8>)| {
    fuzz_convert(data.0, data.1, data.2, data.3, data.4, data.5, &data.6);
});

fn fuzz_convert(
    input_tag: u8,
    output_tag: u8,
    i_width: u8,
    i_height: u8,
    padding: u8,
    fill: u8,
    payload: &[u8],
) {
    let (Ok(input_format), Ok(output_format)) = (
        PixelFormat::try_from(input_tag % 20),
        PixelFormat::try_from(output_tag % 20),
    ) else {
        return;
    };
    let width = i_width as u32;
    let height = i_height as u32;
    let pitch = width + (padding % 16) as u32;

    let required = match input_format.frame_layout(pitch, width, height) {
        Ok(layout) => layout.required_len(),
        Err(_) => 0,
    };
    // Short payloads exercise the size checks
    let mut src = vec![fill; required.min(payload.len().max(1))];
    for (dst, src) in src.iter_mut().zip(payload.iter()) {
        *dst = *src;
    }
    if payload.len() > 64 {
        src.resize(required, fill);
    }

    let dst_len = output_format.buffer_size(width, height).unwrap_or(1);
    let mut dst = vec![0xA5u8; dst_len.max(1)];

    match convert(&src, &mut dst, pitch, width, height, input_format, output_format) {
        Ok(()) => {}
        Err(ConversionError::FormatMismatch(_))
        | Err(ConversionError::ZeroBaseSize)
        | Err(ConversionError::SourceBufferTooSmall(_))
        | Err(ConversionError::NullPointer) => {
            assert!(dst.iter().all(|&v| v == 0xA5));
        }
        Err(err) => panic!("Unexpected error {}", err),
    }
}
