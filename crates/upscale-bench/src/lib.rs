//! Shared fixtures for the upscale benchmarks.

/// Deterministic sensor-like frame: a smooth ramp with a little jitter.
pub fn sensor_frame(width: u32, height: u32) -> Vec<f32> {
    let mut state = 0x2545_f491u32;
    (0..width * height)
        .map(|i| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let jitter = (state >> 24) as f32 / 255.0;
            20.0 + (i % width) as f32 * 0.5 + (i / width) as f32 * 0.25 + jitter
        })
        .collect()
}
