//! Numeric scales used by the SVG chart components.

/// Linear mapping from a numeric domain to a pixel range.
///
/// Ranges may be inverted (`r0 > r1`), which is the normal case for the
/// SVG y axis where pixel coordinates grow downward.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    /// A degenerate (zero-span) domain is widened to a unit span so that
    /// `scale` never divides by zero.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < f64::EPSILON {
            d1 = d0 + 1.0;
        }
        Self {
            d0,
            d1,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Map a domain value to its pixel position.
    pub fn scale(&self, value: f64) -> f64 {
        let t = (value - self.d0) / (self.d1 - self.d0);
        self.r0 + t * (self.r1 - self.r0)
    }

    /// Round tick values covering the domain, roughly `count` of them,
    /// stepped at 1/2/5 × 10^k.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = nice_step((self.d1 - self.d0) / count.max(1) as f64);
        let start = (self.d0 / step).ceil() * step;

        let mut out = Vec::new();
        let mut i = 0u32;
        loop {
            let v = start + step * f64::from(i);
            if v > self.d1 + step * 1e-6 {
                break;
            }
            // snap to the step grid to avoid float noise like 0.30000000000000004
            out.push((v / step).round() * step);
            i += 1;
        }
        out
    }
}

/// Largest of 1/2/5 × 10^k not exceeding the raw step, using the d3
/// rounding thresholds so tick counts stay close to the request.
fn nice_step(raw: f64) -> f64 {
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 7.07 {
        10.0
    } else if error >= 3.16 {
        5.0
    } else if error >= 1.41 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Maps `n` categorical slots to evenly spaced horizontal bands.
#[derive(Debug, Clone, Copy)]
pub struct BandScale {
    len: usize,
    r0: f64,
    r1: f64,
    /// Fraction of each band reserved as gap, 0..1.
    padding: f64,
}

impl BandScale {
    pub fn new(len: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            len: len.max(1),
            r0: range.0,
            r1: range.1,
            padding: padding.clamp(0.0, 0.9),
        }
    }

    /// Full width of one band, gap included.
    pub fn band_width(&self) -> f64 {
        (self.r1 - self.r0) / self.len as f64
    }

    /// Usable width inside one band.
    pub fn inner_width(&self) -> f64 {
        self.band_width() * (1.0 - self.padding)
    }

    /// Center x of band `i`.
    pub fn center(&self, i: usize) -> f64 {
        self.r0 + self.band_width() * (i as f64 + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale_maps_endpoints() {
        let scale = LinearScale::new((0.0, 100.0), (40.0, 640.0));
        assert_eq!(scale.scale(0.0), 40.0);
        assert_eq!(scale.scale(100.0), 640.0);
        assert_eq!(scale.scale(50.0), 340.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // y axis: domain bottom maps to the larger pixel coordinate
        let scale = LinearScale::new((0.0, 100.0), (220.0, 12.0));
        assert_eq!(scale.scale(0.0), 220.0);
        assert_eq!(scale.scale(100.0), 12.0);
    }

    #[test]
    fn test_degenerate_domain_does_not_divide_by_zero() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert!(scale.scale(5.0).is_finite());
        assert_eq!(scale.scale(5.0), 0.0);
    }

    #[test]
    fn test_ticks_are_round_and_cover_domain() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

        let scale = LinearScale::new((0.0, 0.8), (0.0, 1.0));
        let ticks = scale.ticks(5);
        let expected = [0.0, 0.2, 0.4, 0.6, 0.8];
        assert_eq!(ticks.len(), expected.len());
        for (got, want) in ticks.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "tick {got} != {want}");
        }
    }

    #[test]
    fn test_ticks_stay_inside_domain() {
        let scale = LinearScale::new((0.0, 245.0), (0.0, 1.0));
        let ticks = scale.ticks(5);
        assert_eq!(ticks.first(), Some(&0.0));
        assert!(ticks.iter().all(|t| *t <= 245.0));
        assert!(ticks.len() >= 3);
    }

    #[test]
    fn test_band_centers_increase_inside_range() {
        let bands = BandScale::new(4, (40.0, 640.0), 0.3);
        let centers: Vec<f64> = (0..4).map(|i| bands.center(i)).collect();
        for pair in centers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(centers.iter().all(|c| *c > 40.0 && *c < 640.0));
        assert!(bands.inner_width() > 0.0);
        assert!(bands.inner_width() < bands.band_width());
    }

    #[test]
    fn test_empty_band_scale_is_safe() {
        let bands = BandScale::new(0, (0.0, 100.0), 0.2);
        assert!(bands.band_width().is_finite());
    }
}
