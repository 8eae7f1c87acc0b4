/// `count` equally spaced values from `min` to `max` inclusive.
///
/// Follows linspace semantics: `count == 0` gives an empty axis, `count == 1` gives
/// `[min]`, otherwise the step is `(max - min) / (count - 1)` and the last sample is
/// exactly `max`. A reversed range (`min > max`) yields a descending axis.
pub fn build_axis(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            let mut axis: Vec<f64> = (0..count).map(|i| min + i as f64 * step).collect();
            axis[count - 1] = max;
            axis
        }
    }
}

/// Axis tick labels rounded to two decimals, as shown on the heatmap axes
pub fn axis_labels(axis: &[f64]) -> Vec<String> {
    axis.iter().map(|v| format!("{:.2}", v)).collect()
}
