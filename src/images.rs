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
use crate::conversion_error::{check_overflow_v2, ConversionError};
use crate::pixel_format::{PixelFormat, YuvLayout};
use crate::yuv_support::YuvChromaSubsampling;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Geometry of one plane inside a frame buffer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PlaneDescriptor {
    /// First byte of the plane from the start of the buffer
    pub offset: usize,
    /// Distance in bytes between two rows
    pub stride: usize,
    pub rows: usize,
    /// Bytes of a row that hold samples, the rest up to `stride` is padding
    pub row_bytes: usize,
}

impl PlaneDescriptor {
    /// Bytes the plane occupies, padding included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.stride * self.rows
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub(crate) const fn row_offset(&self, row: usize) -> usize {
        self.offset + row * self.stride
    }
}

/// Planes of one frame, stored back to back in plane order.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameLayout {
    planes: [PlaneDescriptor; 3],
    count: usize,
}

impl FrameLayout {
    /// Lays out planes given as `(stride, rows, row_bytes)` one after another.
    pub(crate) fn from_planes(planes: &[(usize, usize, usize)]) -> Result<FrameLayout, ConversionError> {
        let mut layout = FrameLayout::default();
        let mut offset = 0usize;
        for (dst, &(stride, rows, row_bytes)) in layout.planes.iter_mut().zip(planes.iter()) {
            *dst = PlaneDescriptor {
                offset,
                stride,
                rows,
                row_bytes,
            };
            let len = check_overflow_v2(stride, rows)?;
            offset = offset
                .checked_add(len)
                .ok_or(ConversionError::PointerOverflow)?;
        }
        layout.count = planes.len().min(layout.planes.len());
        Ok(layout)
    }

    #[inline]
    pub fn planes(&self) -> &[PlaneDescriptor] {
        &self.planes[..self.count]
    }

    #[inline(always)]
    pub fn plane(&self, index: usize) -> PlaneDescriptor {
        self.planes[index]
    }

    /// Minimal buffer length holding every plane.
    pub fn required_len(&self) -> usize {
        self.planes()
            .last()
            .map(|plane| plane.offset + plane.len())
            .unwrap_or(0)
    }

    /// Sample bytes of every row of a plane, padding excluded.
    pub(crate) fn plane_rows<'a>(
        &self,
        data: &'a [u8],
        index: usize,
    ) -> impl Iterator<Item = &'a [u8]> + 'a {
        let plane = self.plane(index);
        data[plane.offset..plane.offset + plane.len()]
            .chunks_exact(plane.stride)
            .map(move |row| &row[..plane.row_bytes])
    }

    pub(crate) fn plane_rows_mut<'a>(
        &self,
        data: &'a mut [u8],
        index: usize,
    ) -> impl Iterator<Item = &'a mut [u8]> + 'a {
        let plane = self.plane(index);
        data[plane.offset..plane.offset + plane.len()]
            .chunks_exact_mut(plane.stride)
            .map(move |row| &mut row[..plane.row_bytes])
    }
}

/// Addresses every sample of one YUV component inside a frame: sample `n` of row `r`
/// lives at `plane.offset + r * plane.stride + first + n * step`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct SampleCursor {
    pub(crate) plane: usize,
    pub(crate) first: usize,
    pub(crate) step: usize,
}

impl SampleCursor {
    const fn new(plane: usize, first: usize, step: usize) -> SampleCursor {
        SampleCursor { plane, first, step }
    }

    #[inline(always)]
    pub(crate) fn row_start(&self, frame: &FrameLayout, row: usize) -> usize {
        frame.plane(self.plane).row_offset(row) + self.first
    }
}

/// Cursors of the three components of a YUV frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct YuvCursors {
    pub(crate) y: SampleCursor,
    pub(crate) u: SampleCursor,
    pub(crate) v: SampleCursor,
    pub(crate) subsampling: YuvChromaSubsampling,
    /// Packed groups always carry two luma samples
    pub(crate) paired_luma: bool,
}

impl YuvCursors {
    pub(crate) const fn new(layout: YuvLayout) -> YuvCursors {
        match layout {
            YuvLayout::Planar { subsampling, order } => YuvCursors {
                y: SampleCursor::new(0, 0, 1),
                u: SampleCursor::new(1 + order.get_u_position(), 0, 1),
                v: SampleCursor::new(1 + order.get_v_position(), 0, 1),
                subsampling,
                paired_luma: false,
            },
            YuvLayout::SemiPlanar { subsampling, order } => YuvCursors {
                y: SampleCursor::new(0, 0, 1),
                u: SampleCursor::new(1, order.get_u_position(), 2),
                v: SampleCursor::new(1, order.get_v_position(), 2),
                subsampling,
                paired_luma: false,
            },
            YuvLayout::Packed { description } => YuvCursors {
                y: SampleCursor::new(0, description.get_first_y_position(), 2),
                u: SampleCursor::new(0, description.get_u_position(), 4),
                v: SampleCursor::new(0, description.get_v_position(), 4),
                subsampling: YuvChromaSubsampling::Yuv422,
                paired_luma: true,
            },
        }
    }

    /// Luma samples stored per row, an odd width in a packed layout still fills its last group.
    #[inline]
    pub(crate) const fn luma_samples(&self, width: usize) -> usize {
        if self.paired_luma {
            width.div_ceil(2) * 2
        } else {
            width
        }
    }
}

#[derive(Debug, Clone)]
/// Non-mutable frame in any supported format
pub struct PixelImage<'a> {
    pub data: &'a [u8],
    /// Distance between rows in pixels, at least `width`
    pub pitch: u32,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl PixelImage<'_> {
    pub fn frame_layout(&self) -> Result<FrameLayout, ConversionError> {
        self.format.frame_layout(self.pitch, self.width, self.height)
    }
}

#[derive(Debug)]
/// Mutable frame in any supported format, rows are always tightly packed
pub struct PixelImageMut<'a> {
    pub data: BufferStoreMut<'a, u8>,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl<'a> PixelImageMut<'a> {
    /// Allocates zeroed target image
    pub fn alloc(width: u32, height: u32, format: PixelFormat) -> Result<Self, ConversionError> {
        let size = format.buffer_size(width, height)?;
        Ok(PixelImageMut {
            data: BufferStoreMut::Owned(vec![0u8; size]),
            width,
            height,
            format,
        })
    }

    pub fn frame_layout(&self) -> Result<FrameLayout, ConversionError> {
        self.format.frame_layout(self.width, self.width, self.height)
    }

    pub fn to_fixed(&'a self) -> PixelImage<'a> {
        PixelImage {
            data: self.data.borrow(),
            pitch: self.width,
            width: self.width,
            height: self.height,
            format: self.format,
        }
    }
}
