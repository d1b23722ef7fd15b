/// Square-root scale from traffic counts to marker radius in pixels.
///
/// The input is square-rooted and then mapped linearly from
/// `[sqrt(domain[0]), sqrt(domain[1])]` onto `range`, so marker *area* grows
/// linearly with traffic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl RadiusScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        RadiusScale { domain, range }
    }

    /// Radius for `value`. Negative values count as zero; a degenerate domain
    /// maps everything to the lower end of the range.
    pub fn radius(&self, value: f64) -> f64 {
        let lo = self.domain[0].max(0.0).sqrt();
        let hi = self.domain[1].max(0.0).sqrt();
        let span = hi - lo;
        if span <= 0.0 {
            return self.range[0];
        }
        let t = (value.max(0.0).sqrt() - lo) / span;
        self.range[0] + t * (self.range[1] - self.range[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn endpoints_map_to_range() {
        let scale = RadiusScale::new([0.0, 400.0], [3.0, 50.0]);
        assert!(close(scale.radius(0.0), 3.0));
        assert!(close(scale.radius(400.0), 50.0));
    }

    #[test]
    fn square_root_interpolation() {
        let scale = RadiusScale::new([0.0, 100.0], [0.0, 25.0]);
        // sqrt(25) / sqrt(100) = 0.5
        assert!(close(scale.radius(25.0), 12.5));
        assert!(close(scale.radius(1.0), 2.5));
    }

    #[test]
    fn degenerate_domain_uses_range_start() {
        let scale = RadiusScale::new([0.0, 0.0], [3.0, 50.0]);
        assert_eq!(scale.radius(0.0), 3.0);
        assert_eq!(scale.radius(10.0), 3.0);
    }

    #[test]
    fn negative_input_is_zero() {
        let scale = RadiusScale::new([0.0, 100.0], [0.0, 25.0]);
        assert_eq!(scale.radius(-4.0), 0.0);
    }
}
