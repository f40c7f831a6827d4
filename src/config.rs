// src/config.rs

use crate::koch::Subdivision;

/// Viewer settings. All values are compile-time defaults; there is no config file.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub iterations: u32,
    pub rule: Subdivision,
    pub line_color: [f32; 4],
    pub clear_color: [f64; 4],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Koch Snowflake".to_string(),
            window_width: 512,
            window_height: 512,
            iterations: 3,
            rule: Subdivision::Koch,
            line_color: [1.0, 1.0, 1.0, 1.0],
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::koch::MAX_ITERATIONS;

    #[test]
    fn defaults_describe_a_square_depth_three_koch_window() {
        let config = ViewerConfig::default();
        assert_eq!((config.window_width, config.window_height), (512, 512));
        assert_eq!(config.iterations, 3);
        assert_eq!(config.rule, Subdivision::Koch);
        assert!(config.iterations <= MAX_ITERATIONS);
    }
}
