use log::info;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::error::{Result, TrainErr};

/// A partition of `0..n` into disjoint train and holdout index lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    train: Vec<usize>,
    test: Vec<usize>,
}

/// Both halves of a split, materialized.
#[derive(Debug, Clone)]
pub struct SplitData {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<f64>,
    pub y_test: Array1<f64>,
}

impl Split {
    #[inline]
    pub fn train(&self) -> &[usize] {
        &self.train
    }

    #[inline]
    pub fn test(&self) -> &[usize] {
        &self.test
    }

    /// Gathers the rows of `x` and `y` belonging to each side of the split.
    ///
    /// # Panics
    /// If `x` or `y` have fewer rows than the split was computed for.
    pub fn apply(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> SplitData {
        SplitData {
            x_train: x.select(Axis(0), &self.train),
            x_test: x.select(Axis(0), &self.test),
            y_train: y.select(Axis(0), &self.train),
            y_test: y.select(Axis(0), &self.test),
        }
    }
}

/// Shuffles `0..n` with a `StdRng` seeded from `seed`, then cuts it: the first
/// `ceil(n * test_size)` indices are held out and the remainder is for training.
///
/// The same `n`, `test_size` and `seed` always give the same split.
///
/// # Errors
/// * `TrainErr::InvalidConfig` - `test_size` is not strictly between 0 and 1.
/// * `TrainErr::InsufficientData` - Either side of the split would be empty.
pub fn train_test_split(n: usize, test_size: f64, seed: u64) -> Result<Split> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(TrainErr::InvalidConfig(format!(
            "test_size must be in (0, 1), got {test_size}"
        )));
    }

    let holdout_len = |rows: usize| (rows as f64 * test_size).ceil() as usize;

    let n_test = holdout_len(n);
    if n_test == 0 || n_test >= n {
        let needed = (2..).find(|&rows| holdout_len(rows) < rows).unwrap_or(usize::MAX);
        return Err(TrainErr::InsufficientData {
            what: "a train/holdout split",
            got: n,
            needed,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    let test = indices;

    info!(
        "split {n} rows into {} train / {} holdout (seed {seed})",
        train.len(),
        test.len()
    );
    Ok(Split { train, test })
}
