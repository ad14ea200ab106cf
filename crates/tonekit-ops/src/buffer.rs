//! Buffer-level tone mapping.

use tracing::trace;

use crate::{HuePreservingToneMapper, OpsError, OpsResult};

/// Checks an interleaved buffer layout and returns the pixel count.
pub(crate) fn check_layout(pixels: &[f32], channels: usize) -> OpsResult<usize> {
    if channels != 3 && channels != 4 {
        return Err(OpsError::InvalidDimensions(format!(
            "expected 3 or 4 channels, got {channels}"
        )));
    }
    if pixels.len() % channels != 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "buffer length {} is not a multiple of {channels} channels",
            pixels.len()
        )));
    }
    Ok(pixels.len() / channels)
}

/// Maps one interleaved pixel; alpha (if any) is left alone.
#[inline]
pub(crate) fn map_pixel(mapper: &HuePreservingToneMapper, px: &mut [f32]) {
    let out = mapper.apply([px[0], px[1], px[2]]);
    px[..3].copy_from_slice(&out);
}

/// Applies `mapper` to an interleaved RGB or RGBA buffer in place.
///
/// Values are expected in the 16-bit domain `[0, 65535]`.
///
/// # Example
///
/// ```rust
/// use tonekit_ops::{apply_rgb_buffer, HuePreservingToneMapper};
///
/// let mapper = HuePreservingToneMapper::from_curve(&|t: f64| t, 0.0).unwrap();
/// let mut px = vec![1000.0, 2000.0, 3000.0, 1.0];
/// apply_rgb_buffer(&mapper, &mut px, 4).unwrap();
/// assert_eq!(px[3], 1.0);
/// ```
pub fn apply_rgb_buffer(
    mapper: &HuePreservingToneMapper,
    pixels: &mut [f32],
    channels: usize,
) -> OpsResult<()> {
    let count = check_layout(pixels, channels)?;
    trace!(pixels = count, channels, "apply_rgb_buffer");

    for px in pixels.chunks_exact_mut(channels) {
        map_pixel(mapper, px);
    }
    Ok(())
}
