//! Size negotiation helpers for hosts with measure passes

/// Constraint imposed by the parent on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The view must be exactly this size
    Exactly(f32),
    /// The view may be at most this size
    AtMost(f32),
    /// No constraint
    Unspecified,
}

/// Preferred size for a view given its default size and the parent constraint
pub fn resolve_size(default_size: f32, spec: MeasureSpec) -> f32 {
    match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(size) => size.min(default_size),
        MeasureSpec::Unspecified => default_size,
    }
}

/// Convert density-independent units to whole pixels (rounded)
pub fn dp_to_pixels(dp: f32, density: f32) -> f32 {
    (dp * density + 0.5).floor()
}

/// Convert pixels to density-independent units
pub fn pixels_to_dp(px: f32, density: f32) -> f32 {
    if density > 0.0 {
        px / density
    } else {
        px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_size() {
        assert_eq!(resolve_size(120.0, MeasureSpec::Exactly(300.0)), 300.0);
        assert_eq!(resolve_size(120.0, MeasureSpec::AtMost(100.0)), 100.0);
        assert_eq!(resolve_size(120.0, MeasureSpec::AtMost(300.0)), 120.0);
        assert_eq!(resolve_size(120.0, MeasureSpec::Unspecified), 120.0);
    }

    #[test]
    fn test_density_conversion() {
        assert_eq!(dp_to_pixels(14.0, 1.0), 14.0);
        assert_eq!(dp_to_pixels(14.0, 2.625), 37.0);
        assert_eq!(pixels_to_dp(42.0, 2.0), 21.0);
        assert_eq!(pixels_to_dp(42.0, 0.0), 42.0);
    }
}
