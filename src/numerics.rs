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
#![forbid(unsafe_code)]
use num_traits::{clamp, PrimInt};

#[inline(always)]
/// Saturating rounding shift right against bit depth
pub(crate) fn qrshr<const PRECISION: i32, const BIT_DEPTH: usize>(val: i32) -> i32 {
    let rounding: i32 = 1 << (PRECISION - 1);
    let max_value: i32 = (1 << BIT_DEPTH) - 1;
    clamp((val + rounding) >> PRECISION, 0, max_value)
}

#[inline(always)]
/// Extracts `bits` wide field starting at `shift` from a packed pixel word
pub(crate) fn extract_bits<W: PrimInt>(word: W, shift: u32, bits: u32) -> W {
    let mask = (W::one() << bits as usize) - W::one();
    (word >> shift as usize) & mask
}

#[inline(always)]
/// Widens a `bits` wide channel to 8 bits by replicating its high bits into the low bits,
/// so every value of the narrow channel maps to a distinct 8-bit value and `0`/`max` map to `0`/`255`.
pub(crate) fn expand_to_u8(value: u32, bits: u32) -> u8 {
    if bits >= 8 {
        return (value >> (bits - 8)) as u8;
    }
    let mut acc = value << (8 - bits);
    let mut filled = bits;
    while filled < 8 {
        acc |= acc >> filled;
        filled <<= 1;
    }
    acc as u8
}

#[inline(always)]
/// Narrows an 8-bit channel to `bits` by truncation
pub(crate) fn compress_from_u8(value: u8, bits: u32) -> u32 {
    (value as u32) >> (8 - bits)
}
