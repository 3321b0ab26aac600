#![allow(clippy::too_many_arguments)]
mod conversion_error;
mod conversion_table;
mod dispatcher;
mod images;
mod numerics;
mod pixel_format;
mod rgb_repack;
mod rgb_to_y;
mod rgba_to_yuv;
mod shuffle;
mod y_to_rgb;
mod y_to_yuv;
mod yuv_support;
mod yuv_to_rgba;
mod yuv_transcode;

pub use yuv_support::YuvChromaSubsampling;
pub use yuv_support::YuvNVOrder;
pub use yuv_support::Yuy2Description;

pub use pixel_format::ChannelBits;
pub use pixel_format::FormatFamily;
pub use pixel_format::PixelFormat;
pub use pixel_format::RgbLayout;
pub use pixel_format::YuvLayout;

pub use images::BufferStoreMut;
pub use images::FrameLayout;
pub use images::PixelImage;
pub use images::PixelImageMut;
pub use images::PlaneDescriptor;

pub use conversion_error::ConversionError;
pub use conversion_error::MismatchedDimensions;
pub use conversion_error::MismatchedSize;

pub use conversion_table::ConversionClass;
pub use conversion_table::ConversionTable;

pub use dispatcher::convert;
pub use dispatcher::convert_image;
pub use dispatcher::convert_raw;
pub use dispatcher::Converter;

pub use dispatcher::convert_from_alpha8;
pub use dispatcher::convert_from_argb1555;
pub use dispatcher::convert_from_argb4444;
pub use dispatcher::convert_from_argb8888;
pub use dispatcher::convert_from_bgr888;
pub use dispatcher::convert_from_i420;
pub use dispatcher::convert_from_i422;
pub use dispatcher::convert_from_i444;
pub use dispatcher::convert_from_nv12;
pub use dispatcher::convert_from_nv21;
pub use dispatcher::convert_from_rgb565;
pub use dispatcher::convert_from_rgb888;
pub use dispatcher::convert_from_rgba4444;
pub use dispatcher::convert_from_rgba5551;
pub use dispatcher::convert_from_rgba8888;
pub use dispatcher::convert_from_uyvy;
pub use dispatcher::convert_from_yuy2;
pub use dispatcher::convert_from_yv12;
