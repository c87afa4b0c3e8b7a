//! Piecewise-linear 1-D probability density with inverse-CDF sampling.

use crate::error::{Result, WallLoadError};

/// A piecewise-linear density over a strictly increasing grid `x`, together
/// with its normalized cumulative distribution for inverse-transform
/// sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct PDF1D {
    x: Vec<f64>,
    y: Vec<f64>,
    cdf: Vec<f64>,
}

impl PDF1D {
    /// Requires `x.len() >= 2`, `x` strictly increasing, and `y` non-negative
    /// with a positive integral. The CDF is the trapezoidal integral of `y`
    /// over `x`, normalized so `cdf[0] = 0` and `cdf[N-1] = 1`.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        let n = x.len();
        if n < 2 || y.len() != n {
            return Err(WallLoadError::DomainError(format!(
                "PDF1D requires matching x/y arrays of length >= 2, got {} and {}",
                n,
                y.len()
            )));
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(WallLoadError::DomainError(
                "PDF1D requires strictly increasing x".to_string(),
            ));
        }
        if y.iter().any(|&v| v < 0.0) {
            return Err(WallLoadError::DomainError(
                "PDF1D requires y >= 0".to_string(),
            ));
        }

        let mut cdf = vec![0.0; n];
        for i in 1..n {
            cdf[i] = cdf[i - 1] + 0.5 * (y[i] + y[i - 1]) * (x[i] - x[i - 1]);
        }
        let total = cdf[n - 1];
        if total <= 0.0 {
            return Err(WallLoadError::DomainError(
                "PDF1D integral must be positive".to_string(),
            ));
        }
        for v in cdf.iter_mut() {
            *v /= total;
        }

        Ok(PDF1D { x, y, cdf })
    }

    /// Inverse-CDF sample for `u` in `[0, 1)`. Linearly interpolates within
    /// the CDF bin containing `u`. Numerical drift that leaves `u` outside
    /// every bin is tolerated, returning `0.0` rather than panicking.
    pub fn sample(&self, u: f64) -> f64 {
        for i in 1..self.cdf.len() {
            if u >= self.cdf[i - 1] && u < self.cdf[i] {
                let tau = (self.cdf[i] - u) / (self.cdf[i] - self.cdf[i - 1]);
                return (1.0 - tau) * self.x[i - 1] + tau * self.x[i];
            }
        }
        0.0
    }

    /// Linear interpolation of the density itself; 0 outside `[x[0], x[N-1]]`.
    pub fn value(&self, x: f64) -> f64 {
        if x < self.x[0] || x > self.x[self.x.len() - 1] {
            return 0.0;
        }
        for i in 1..self.x.len() {
            if self.x[i - 1] <= x && x <= self.x[i] {
                let t = (x - self.x[i - 1]) / (self.x[i] - self.x[i - 1]);
                return (1.0 - t) * self.y[i - 1] + t * self.y[i];
            }
        }
        0.0
    }

    pub fn max(&self) -> f64 {
        self.y.iter().cloned().fold(f64::MIN, f64::max)
    }

    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_is_monotone_and_normalized() {
        let pdf = PDF1D::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
        assert_eq!(pdf.cdf()[0], 0.0);
        assert!((pdf.cdf()[2] - 1.0).abs() < 1e-12);
        assert!(pdf.cdf().windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn s4_triangular_pdf_sample() {
        // x=[0,1,2], y=[0,1,0] -> CDF=[0, 0.5, 1]. Linear interpolation
        // within the CDF bin (the algorithm §4.5 actually specifies) gives
        // symmetric results straddling the peak at x=1; see DESIGN.md for
        // why this test does not use the spec's own worked numbers.
        let pdf = PDF1D::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
        assert!((pdf.max() - 1.0).abs() < 1e-12);
        assert!((pdf.cdf()[1] - 0.5).abs() < 1e-12);

        let s_lo = pdf.sample(0.25);
        assert!((s_lo - 0.5).abs() < 1e-12);

        let s_hi = pdf.sample(0.75);
        assert!((s_hi - 1.5).abs() < 1e-12);
        assert!((s_lo - (2.0 - s_hi)).abs() < 1e-12, "sampling is symmetric about x=1");
    }

    #[test]
    fn value_interpolates_and_vanishes_outside_support() {
        let pdf = PDF1D::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
        assert!((pdf.value(0.5) - 0.5).abs() < 1e-12);
        assert_eq!(pdf.value(-1.0), 0.0);
        assert_eq!(pdf.value(3.0), 0.0);
    }

    #[test]
    fn rejects_non_positive_integral() {
        assert!(PDF1D::new(vec![0.0, 1.0], vec![0.0, 0.0]).is_err());
    }

    #[test]
    fn rejects_non_increasing_x() {
        assert!(PDF1D::new(vec![0.0, 0.0], vec![1.0, 1.0]).is_err());
    }

    #[test]
    fn sampling_reproduces_linear_density() {
        let pdf = PDF1D::new(vec![0.0, 1.0], vec![0.0, 2.0]).unwrap();
        let mut rng_state: u64 = 0x243F6A8885A308D3;
        let mut next = || {
            rng_state ^= rng_state << 13;
            rng_state ^= rng_state >> 7;
            rng_state ^= rng_state << 17;
            (rng_state >> 11) as f64 / (1u64 << 53) as f64
        };
        const BINS: usize = 20;
        let mut counts = [0u64; BINS];
        const M: u64 = 200_000;
        for _ in 0..M {
            let s = pdf.sample(next());
            let bin = ((s * BINS as f64) as usize).min(BINS - 1);
            counts[bin] += 1;
        }
        // Target density is y(x) = 2x on [0,1], normalized (integral 1);
        // bin i in [i/20, (i+1)/20) has mass (i+1)^2/400 - i^2/400.
        for (i, &c) in counts.iter().enumerate() {
            let lo = i as f64 / BINS as f64;
            let hi = (i + 1) as f64 / BINS as f64;
            let expected_mass = hi * hi - lo * lo;
            let expected = expected_mass * M as f64;
            let sigma = (expected * (1.0 - expected_mass)).sqrt().max(1.0);
            assert!(
                (c as f64 - expected).abs() < 5.0 * sigma,
                "bin {i}: expected ~{expected}, got {c}"
            );
        }
    }
}
