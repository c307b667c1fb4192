//! Loaded fitness data and summary statistics.

use crate::error::{EvoplotError, Result};
use ndarray::{ArrayD, IxDyn};
use std::path::PathBuf;

/// Loaded fitness samples with pre-computed statistics.
///
/// Rows are successive generations, columns are the individuals sampled in
/// each generation. The data is read-only after load.
#[derive(Debug, Clone)]
pub struct FitnessMatrix {
    /// Path to the source file.
    pub source: PathBuf,
    /// The sampled fitness values.
    ///
    /// Single-column input loads as a 1-D array of length `generations`,
    /// multi-column input as a 2-D (generations x individuals) array.
    pub data: ArrayD<f64>,
    /// Minimum and maximum values (pre-computed for performance).
    pub min_max: Option<(f64, f64)>,
    /// Mean value (pre-computed for performance).
    pub mean: Option<f64>,
    /// Sample standard deviation (pre-computed for performance).
    pub std: Option<f64>,
    /// Count of valid (finite) values.
    pub valid_count: usize,
}

impl FitnessMatrix {
    /// Build a matrix from parsed rows.
    ///
    /// The loader guarantees uniform row lengths; a single-column input
    /// collapses to a 1-D array.
    pub(crate) fn from_rows(source: PathBuf, rows: Vec<Vec<f64>>) -> Result<Self> {
        let generations = rows.len();
        let columns = rows.first().map(|row| row.len()).unwrap_or(0);
        let flat: Vec<f64> = rows.into_iter().flatten().collect();

        let shape = if columns > 1 {
            vec![generations, columns]
        } else {
            vec![generations]
        };

        let data = ArrayD::from_shape_vec(IxDyn(&shape), flat)
            .map_err(|e| EvoplotError::Malformed(format!("invalid shape/data size: {}", e)))?;

        // Compute statistics
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for &v in data.iter() {
            if v.is_finite() {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
                sum += v;
                count += 1;
            }
        }
        let min_max = if count > 0 { Some((min, max)) } else { None };
        let mean = if count > 0 { Some(sum / count as f64) } else { None };
        let std = if count > 1 {
            let mean_val = sum / count as f64;
            let mut ssd = 0.0;
            for &v in data.iter() {
                if v.is_finite() {
                    let d = v - mean_val;
                    ssd += d * d;
                }
            }
            Some((ssd / (count - 1) as f64).sqrt())
        } else {
            None
        };

        Ok(Self {
            source,
            data,
            min_max,
            mean,
            std,
            valid_count: count,
        })
    }

    /// Number of generations (rows) loaded.
    pub fn generations(&self) -> usize {
        self.data.shape().first().copied().unwrap_or(0)
    }

    /// Number of individuals sampled per generation.
    pub fn population(&self) -> usize {
        match self.data.ndim() {
            1 => {
                if self.data.is_empty() {
                    0
                } else {
                    1
                }
            }
            _ => self.data.shape().get(1).copied().unwrap_or(0),
        }
    }

    /// True when no data rows were loaded.
    pub fn is_empty(&self) -> bool {
        self.generations() == 0
    }

    /// Fitness of one individual in one generation.
    pub fn value(&self, generation: usize, individual: usize) -> Option<f64> {
        match self.data.ndim() {
            1 if individual == 0 => self.data.get(IxDyn(&[generation])).copied(),
            1 => None,
            _ => self.data.get(IxDyn(&[generation, individual])).copied(),
        }
    }

    /// Chart points for one individual: (generation, fitness), finite values only.
    pub fn series(&self, individual: usize) -> Vec<(f64, f64)> {
        (0..self.generations())
            .filter_map(|generation| {
                let v = self.value(generation, individual)?;
                v.is_finite().then_some((generation as f64, v))
            })
            .collect()
    }

    /// Min, max and mean of one generation's finite values.
    pub fn generation_stats(&self, generation: usize) -> Option<(f64, f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;
        for individual in 0..self.population() {
            if let Some(v) = self.value(generation, individual) {
                if v.is_finite() {
                    if v < min {
                        min = v;
                    }
                    if v > max {
                        max = v;
                    }
                    sum += v;
                    count += 1;
                }
            }
        }
        (count > 0).then(|| (min, max, sum / count as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn matrix(rows: Vec<Vec<f64>>) -> FitnessMatrix {
        FitnessMatrix::from_rows(PathBuf::from("test.txt"), rows).unwrap()
    }

    #[test]
    fn single_column_collapses_to_1d() {
        let m = matrix(vec![vec![1.0], vec![2.0], vec![3.0]]);
        assert_eq!(m.data.ndim(), 1);
        assert_eq!(m.generations(), 3);
        assert_eq!(m.population(), 1);
        assert_eq!(m.value(1, 0), Some(2.0));
        assert_eq!(m.value(1, 1), None);
    }

    #[test]
    fn multi_column_keeps_2d_shape() {
        let m = matrix(vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(m.data.shape(), &[1, 3]);
        assert_eq!(m.generations(), 1);
        assert_eq!(m.population(), 3);
        assert_eq!(m.value(0, 2), Some(3.0));
    }

    #[test]
    fn empty_input_has_no_statistics() {
        let m = matrix(vec![]);
        assert!(m.is_empty());
        assert_eq!(m.population(), 0);
        assert_eq!(m.valid_count, 0);
        assert_eq!(m.min_max, None);
        assert_eq!(m.mean, None);
        assert_eq!(m.std, None);
    }

    #[test]
    fn statistics_cover_finite_values_only() {
        let m = matrix(vec![vec![1.0], vec![f64::NAN], vec![3.0]]);
        assert_eq!(m.valid_count, 2);
        assert_eq!(m.min_max, Some((1.0, 3.0)));
        assert_eq!(m.mean, Some(2.0));
    }

    #[test]
    fn sample_standard_deviation() {
        let m = matrix(vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]]);
        let std = m.std.unwrap();
        assert!((std - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn series_skips_non_finite_points() {
        let m = matrix(vec![vec![1.0, 2.0], vec![f64::NAN, 4.0]]);
        assert_eq!(m.series(0), vec![(0.0, 1.0)]);
        assert_eq!(m.series(1), vec![(0.0, 2.0), (1.0, 4.0)]);
    }

    #[test]
    fn generation_stats_summarise_one_row() {
        let m = matrix(vec![vec![1.0, 2.0, 6.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.generation_stats(0), Some((1.0, 6.0, 3.0)));
        assert_eq!(m.generation_stats(2), None);
    }
}
