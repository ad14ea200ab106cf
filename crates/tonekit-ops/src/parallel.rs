//! Parallel buffer tone mapping using Rayon.
//!
//! A built [`HuePreservingToneMapper`] is read-only, so a single instance is
//! shared by every worker.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::buffer::{check_layout, map_pixel};
use crate::{HuePreservingToneMapper, OpsResult};

/// Pixels handed to one rayon task.
const PIXELS_PER_TASK: usize = 4096;

/// Parallel version of [`apply_rgb_buffer`](crate::apply_rgb_buffer).
///
/// # Example
///
/// ```rust
/// use tonekit_ops::{par_apply_rgb_buffer, HuePreservingToneMapper};
///
/// let mapper = HuePreservingToneMapper::from_curve(&|t: f64| t.sqrt(), 0.0).unwrap();
/// let mut px = vec![1000.0f32; 256 * 256 * 3];
/// par_apply_rgb_buffer(&mapper, &mut px, 3).unwrap();
/// ```
pub fn par_apply_rgb_buffer(
    mapper: &HuePreservingToneMapper,
    pixels: &mut [f32],
    channels: usize,
) -> OpsResult<()> {
    let count = check_layout(pixels, channels)?;
    trace!(pixels = count, channels, "par_apply_rgb_buffer");
    debug!(pixels = count, tasks = count.div_ceil(PIXELS_PER_TASK), "Tone mapping in parallel");

    pixels
        .par_chunks_mut(channels * PIXELS_PER_TASK)
        .for_each(|block| {
            for px in block.chunks_exact_mut(channels) {
                map_pixel(mapper, px);
            }
        });
    Ok(())
}
