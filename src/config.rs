//! Drawing session configuration

/// Output and safety settings of a drawing session
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingConfig {
    /// Rendered canvas width in pixels
    pub width: u32,
    /// Rendered canvas height in pixels
    pub height: u32,
    pub stroke_width: f64,
    /// Command count above which a trace is reported as large
    pub large_trace: u64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            stroke_width: 2.0,
            large_trace: 1_000_000,
        }
    }
}
