//! Numeric helpers shared by the analytics views
//!
//! Undefined statistics (empty input, too few samples) are `None`.

/// Round to `decimals` places, halves away from zero
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// [`round_to`] lifted over an optional value
pub fn round_opt(value: Option<f64>, decimals: u32) -> Option<f64> {
    value.map(|v| round_to(v, decimals))
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (N-1 divisor); needs at least two values
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Percentile by linear interpolation between order statistics.
///
/// `sorted` must be ascending; `pct` is in `[0, 100]`. Interpolates from
/// the nearer neighbour, so the float result matches numpy's `percentile`
/// bit for bit and truncating it gives the same integer.
pub fn percentile(sorted: &[f64], pct: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = (pct / 100.0).clamp(0.0, 1.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let fraction = rank - lo as f64;
    let (below, above) = (sorted[lo], sorted[hi]);
    let diff = above - below;
    if fraction >= 0.5 {
        Some(above - diff * (1.0 - fraction))
    } else {
        Some(below + diff * fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(33.333333, 2), 33.33);
        assert_eq!(round_to(66.666666, 2), 66.67);
        assert_eq!(round_to(0.1236, 3), 0.124);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_sample_std() {
        assert_eq!(sample_std(&[]), None);
        assert_eq!(sample_std(&[4.0]), None);
        assert_eq!(sample_std(&[2.0, 4.0]), Some(2f64.sqrt()));
        let std = sample_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((std - 2.138089935).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&data, 0.0), Some(1.0));
        assert_eq!(percentile(&data, 50.0), Some(2.5));
        assert_eq!(percentile(&data, 100.0), Some(4.0));
        let p10 = percentile(&data, 10.0).unwrap();
        assert!((p10 - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_interpolates_from_upper_neighbour() {
        // rank 3.8 lands on 228.999..., which truncates to 228
        let data = [30.0, 72.0, 92.0, 145.0, 250.0];
        let p95 = percentile(&data, 95.0).unwrap();
        assert_eq!(p95 as u64, 228);
        assert_eq!(percentile(&data, 10.0).map(|v| v as u64), Some(46));
    }

    #[test]
    fn test_percentile_edges() {
        assert_eq!(percentile(&[], 50.0), None);
        assert_eq!(percentile(&[7.0], 99.0), Some(7.0));
    }
}
