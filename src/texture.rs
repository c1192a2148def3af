//! The procedural 2x2 texture sampled by the fragment shader.
use crate::gl_wrappers::{Filter, SamplerParams, Texture2d, Wrap};

pub const CHECKERBOARD_WIDTH: i32 = 2;
pub const CHECKERBOARD_HEIGHT: i32 = 2;

/// Row-major RGB texels: black, white / white, black.
pub const CHECKERBOARD: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 0.0, 0.0],
];

/// Texture unit the sampler reads from.
pub const CHECKERBOARD_UNIT: u32 = 0;

pub const CHECKERBOARD_SAMPLER: SamplerParams = SamplerParams {
    min_filter: Filter::Nearest,
    mag_filter: Filter::Nearest,
    wrap_s: Wrap::Repeat,
    wrap_t: Wrap::Repeat,
};

/// Create the checkerboard on [`CHECKERBOARD_UNIT`] and leave it bound there.
pub fn upload_checkerboard() -> Texture2d {
    Texture2d::new_rgb_f32(
        CHECKERBOARD_UNIT,
        CHECKERBOARD_WIDTH,
        CHECKERBOARD_HEIGHT,
        CHECKERBOARD_SAMPLER,
        &CHECKERBOARD,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_texels_match() {
        let at = |x: usize, y: usize| CHECKERBOARD[y * CHECKERBOARD_WIDTH as usize + x];
        assert_eq!(at(0, 0), at(1, 1));
        assert_eq!(at(1, 0), at(0, 1));
        assert_eq!(at(0, 0), [0.0; 3]);
        assert_eq!(at(1, 0), [1.0; 3]);
    }

    #[test]
    fn texel_count_matches_size() {
        assert_eq!(
            CHECKERBOARD.len(),
            (CHECKERBOARD_WIDTH * CHECKERBOARD_HEIGHT) as usize
        );
    }

    #[test]
    fn sampler_is_nearest_repeat() {
        assert_eq!(CHECKERBOARD_SAMPLER.min_filter, Filter::Nearest);
        assert_eq!(CHECKERBOARD_SAMPLER.mag_filter, Filter::Nearest);
        assert_eq!(CHECKERBOARD_SAMPLER.wrap_s, Wrap::Repeat);
        assert_eq!(CHECKERBOARD_SAMPLER.wrap_t, Wrap::Repeat);
    }
}
