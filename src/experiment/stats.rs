//! Summary statistics over repetitions.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`). Returns 0.0 for an
/// empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Per-column mean and standard deviation of a `[row][column]` matrix.
///
/// All rows must have the same length.
pub fn column_stats(rows: &[Vec<f64>]) -> (Vec<f64>, Vec<f64>) {
    let columns = rows.first().map_or(0, Vec::len);
    let mut means = Vec::with_capacity(columns);
    let mut stds = Vec::with_capacity(columns);
    let mut column = Vec::with_capacity(rows.len());
    for c in 0..columns {
        column.clear();
        column.extend(rows.iter().map(|row| row[c]));
        means.push(mean(&column));
        stds.push(std_dev(&column));
    }
    (means, stds)
}
