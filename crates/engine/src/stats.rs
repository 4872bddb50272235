// Descriptive statistics and normalization
//
// All functions take a borrowed slice and never reorder or modify it.
// Each one checks for empty input itself so it can be called on its own.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

fn ensure_non_empty(data: &[f64], operation: &'static str) -> EngineResult<()> {
    if data.is_empty() {
        return Err(EngineError::EmptyInput { operation });
    }
    Ok(())
}

/// Arithmetic mean
pub fn mean(data: &[f64]) -> EngineResult<f64> {
    ensure_non_empty(data, "mean")?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Middle value of the sorted data; the average of the two middle values
/// when the length is even
pub fn median(data: &[f64]) -> EngineResult<f64> {
    ensure_non_empty(data, "median")?;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Most frequent value(s).
///
/// Ties are all returned, in the order each value first appears in `data`.
/// Values are compared exactly, except that `-0.0` and `0.0` count as the
/// same value.
pub fn mode(data: &[f64]) -> EngineResult<Vec<f64>> {
    ensure_non_empty(data, "mode")?;

    // Frequency table, kept in first-occurrence order
    let mut table: Vec<(f64, usize)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for &x in data {
        match index.get(&value_key(x)) {
            Some(&slot) => table[slot].1 += 1,
            None => {
                index.insert(value_key(x), table.len());
                table.push((x, 1));
            }
        }
    }

    let max_count = table.iter().map(|&(_, count)| count).max().unwrap_or(0);

    Ok(table
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value)
        .collect())
}

// f64 is not Hash; key on the bit pattern with both zeros folded together
fn value_key(x: f64) -> u64 {
    if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() }
}

/// Population variance (divides by n, not n - 1)
pub fn variance(data: &[f64]) -> EngineResult<f64> {
    ensure_non_empty(data, "variance")?;

    if data.len() < 2 {
        return Ok(0.0);
    }

    let mu = mean(data)?;
    let sum_sq: f64 = data.iter().map(|&x| (x - mu).powi(2)).sum();
    Ok(sum_sq / data.len() as f64)
}

/// Population standard deviation
pub fn std_dev(data: &[f64]) -> EngineResult<f64> {
    ensure_non_empty(data, "standard deviation")?;
    Ok(variance(data)?.sqrt())
}

/// Smallest value
pub fn min(data: &[f64]) -> EngineResult<f64> {
    ensure_non_empty(data, "minimum")?;
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest value
pub fn max(data: &[f64]) -> EngineResult<f64> {
    ensure_non_empty(data, "maximum")?;
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Rescale into [0, 1]. A constant sequence maps to all zeros.
pub fn normalize_min_max(data: &[f64]) -> EngineResult<Vec<f64>> {
    ensure_non_empty(data, "min-max normalization")?;

    let lo = min(data)?;
    let hi = max(data)?;
    let range = hi - lo;

    if range == 0.0 {
        return Ok(vec![0.0; data.len()]);
    }

    Ok(data.iter().map(|&x| (x - lo) / range).collect())
}

/// Rescale to mean 0 and standard deviation 1.
/// Fewer than two values, or zero spread, maps to all zeros.
pub fn normalize_z_score(data: &[f64]) -> EngineResult<Vec<f64>> {
    ensure_non_empty(data, "z-score normalization")?;

    if data.len() < 2 {
        return Ok(vec![0.0; data.len()]);
    }

    let mu = mean(data)?;
    let sigma = std_dev(data)?;

    if sigma == 0.0 {
        return Ok(vec![0.0; data.len()]);
    }

    Ok(data.iter().map(|&x| (x - mu) / sigma).collect())
}

/// Every descriptive statistic of one sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Compute a [`Summary`] in one call
pub fn summarize(data: &[f64]) -> EngineResult<Summary> {
    ensure_non_empty(data, "summary")?;

    Ok(Summary {
        count: data.len(),
        mean: mean(data)?,
        median: median(data)?,
        mode: mode(data)?,
        variance: variance(data)?,
        std_dev: std_dev(data)?,
        min: min(data)?,
        max: max(data)?,
    })
}
