use std::fmt;

use serde::Serialize;

/// Summary of absolute residuals `|p(r)|` over every root a solver returned.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Residuals {
    pub count: usize,
    /// Mean absolute residual
    pub mean: f64,
    /// Population standard deviation of the absolute residuals
    pub std: f64,
    pub max: f64,
}

impl Residuals {
    pub fn new(values: &[ f64 ]) -> Self {
        let count = values.len();
        if count == 0 {
            return Residuals::default();
        }
        let n = count as f64;
        let mean = values.iter().map(|v| v.abs()).sum::<f64>() / n;
        let var = values.iter().map(|v| (v.abs() - mean).powi(2)).sum::<f64>() / n;
        let max = values.iter().fold(0., |m: f64, v| m.max(v.abs()));
        Residuals { count, mean, std: var.sqrt(), max }
    }
}

impl fmt::Display for Residuals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MAE: {:.16} | MAE Std: {:.16} | EMax: {:.16} | Roots: {}", self.mean, self.std, self.max, self.count)
    }
}
