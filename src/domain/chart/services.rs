use super::value_objects::{ChartPoint, YDomain};

/// Fraction of the observed range added above and below the data.
pub const DOMAIN_PADDING: f64 = 0.1;

/// Number of horizontal ticks drawn on the Y axis.
pub const Y_TICK_COUNT: usize = 5;

/// Domain service for chart scaling
pub struct ChartScaleService;

impl ChartScaleService {
    /// Observed `[min, max]` widened by 10% of the range on each side.
    ///
    /// A flat series would collapse the domain, so it gets ±1% of its value
    /// (±1 around zero) instead.
    pub fn y_domain(points: &[ChartPoint]) -> Option<YDomain> {
        let mut values = points.iter().map(|p| p.value).filter(|v| v.is_finite());
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let range = max - min;
        if range == 0.0 {
            let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.01 };
            return Some(YDomain { min: min - pad, max: max + pad });
        }
        Some(YDomain { min: min - range * DOMAIN_PADDING, max: max + range * DOMAIN_PADDING })
    }

    /// Draw every `step`-th X label. More than ten points keep roughly six labels.
    pub fn label_step(point_count: usize) -> usize {
        if point_count > 10 { point_count / 5 + 1 } else { 1 }
    }

    /// Indices whose X labels are drawn.
    pub fn label_indices(point_count: usize) -> Vec<usize> {
        let step = Self::label_step(point_count);
        (0..point_count).step_by(step).collect()
    }

    /// Evenly spaced tick values from `domain.min` to `domain.max` inclusive.
    pub fn y_ticks(domain: YDomain) -> Vec<f64> {
        let intervals = (Y_TICK_COUNT - 1) as f64;
        (0..Y_TICK_COUNT).map(|i| domain.min + domain.span() * i as f64 / intervals).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_step_matches_thinning_rule() {
        assert_eq!(ChartScaleService::label_step(0), 1);
        assert_eq!(ChartScaleService::label_step(10), 1);
        assert_eq!(ChartScaleService::label_step(11), 3);
        assert_eq!(ChartScaleService::label_step(90), 19);
        assert_eq!(ChartScaleService::label_indices(12), vec![0, 3, 6, 9]);
    }

    #[test]
    fn padding_is_ten_percent_of_range() {
        let points = vec![ChartPoint::new("a", 1.10), ChartPoint::new("b", 1.30), ChartPoint::new("c", 1.20)];
        let domain = ChartScaleService::y_domain(&points).unwrap();
        assert!((domain.min - 1.08).abs() < 1e-9);
        assert!((domain.max - 1.32).abs() < 1e-9);
    }

    #[test]
    fn flat_series_gets_nonzero_span() {
        let points = vec![ChartPoint::new("a", 2.0), ChartPoint::new("b", 2.0)];
        let domain = ChartScaleService::y_domain(&points).unwrap();
        assert!(domain.span() > 0.0);
        assert!((domain.min - 1.98).abs() < 1e-12);
    }
}
