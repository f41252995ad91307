//! Standard Scaler with Fixed Model Constants

use crate::features::{FeatureVector, ScaledFeatureVector, NUM_FEATURES};

/// Per-feature mean seen during training
pub const SCALER_MEAN: [f32; NUM_FEATURES] = [13.530488, 3.746800, 43.080350, 900.020213];

/// Per-feature standard deviation seen during training
pub const SCALER_STD: [f32; NUM_FEATURES] = [8.256446, 3.049463, 14.431640, 169.050730];

// Division safety is a build-time guarantee.
const _: () = {
    let mut i = 0;
    while i < NUM_FEATURES {
        assert!(SCALER_STD[i] > 0.0, "scaler standard deviation must be positive");
        i += 1;
    }
};

/// Affine standardization `(x - mean) / std`, one pair per feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler {
    /// Mean subtracted from each feature
    mean: [f32; NUM_FEATURES],
    /// Standard deviation each centered feature is divided by
    std_dev: [f32; NUM_FEATURES],
}

impl StandardScaler {
    /// Scaler the forest was trained against
    pub const MODEL: StandardScaler = StandardScaler {
        mean: SCALER_MEAN,
        std_dev: SCALER_STD,
    };

    /// Create a scaler from explicit parameters
    ///
    /// Callers must not pass a zero standard deviation.
    pub const fn new(mean: [f32; NUM_FEATURES], std_dev: [f32; NUM_FEATURES]) -> Self {
        Self { mean, std_dev }
    }

    /// Scale a raw feature vector
    #[inline]
    pub fn transform(&self, raw: &FeatureVector) -> ScaledFeatureVector {
        let raw = raw.as_array();
        let mut scaled = [0.0f32; NUM_FEATURES];
        for i in 0..NUM_FEATURES {
            scaled[i] = (raw[i] - self.mean[i]) / self.std_dev[i];
        }
        ScaledFeatureVector::new(scaled)
    }

    /// Map a scaled vector back to raw measurement space
    pub fn inverse(&self, scaled: &ScaledFeatureVector) -> FeatureVector {
        let scaled = scaled.as_array();
        let mut raw = [0.0f32; NUM_FEATURES];
        for i in 0..NUM_FEATURES {
            raw[i] = scaled[i] * self.std_dev[i] + self.mean[i];
        }
        FeatureVector::new(raw)
    }

    /// Per-feature means
    pub fn mean(&self) -> &[f32; NUM_FEATURES] {
        &self.mean
    }

    /// Per-feature standard deviations
    pub fn std_dev(&self) -> &[f32; NUM_FEATURES] {
        &self.std_dev
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::MODEL
    }
}

/// Apply the model's scaler to a raw feature vector
#[inline]
pub fn scale_features(raw: &FeatureVector) -> ScaledFeatureVector {
    StandardScaler::MODEL.transform(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mean_scales_to_origin() {
        let scaled = scale_features(&FeatureVector::new(SCALER_MEAN));
        assert_eq!(scaled.as_array(), &[0.0; NUM_FEATURES]);
    }

    #[test]
    fn test_one_std_above_mean() {
        let mut raw = SCALER_MEAN;
        raw[1] += SCALER_STD[1];
        let scaled = scale_features(&FeatureVector::new(raw));
        assert!((scaled.as_array()[1] - 1.0).abs() < 1e-5);
        assert_eq!(scaled.as_array()[0], 0.0);
    }

    #[test]
    fn test_custom_scaler() {
        let scaler = StandardScaler::new([1.0, 2.0, 3.0, 4.0], [2.0, 2.0, 2.0, 2.0]);
        let scaled = scaler.transform(&FeatureVector::new([3.0, 2.0, 1.0, 4.0]));
        assert_eq!(scaled.as_array(), &[1.0, 0.0, -1.0, 0.0]);
    }

    proptest! {
        #[test]
        fn prop_matches_formula(
            v in 0.0f32..40.0,
            i in 0.0f32..15.0,
            t in -20.0f32..100.0,
            l in 0.0f32..2000.0,
        ) {
            let raw = [v, i, t, l];
            let scaled = scale_features(&FeatureVector::new(raw));
            for k in 0..NUM_FEATURES {
                let expected = (f64::from(raw[k]) - f64::from(SCALER_MEAN[k]))
                    / f64::from(SCALER_STD[k]);
                let actual = f64::from(scaled.as_array()[k]);
                prop_assert!((actual - expected).abs() <= 1e-5 * expected.abs().max(1.0));
            }
        }

        #[test]
        fn prop_inverse_recovers_raw(
            v in 0.0f32..40.0,
            l in 0.0f32..2000.0,
        ) {
            let raw = FeatureVector::new([v, 3.0, 40.0, l]);
            let back = StandardScaler::MODEL.inverse(&StandardScaler::MODEL.transform(&raw));
            for k in 0..NUM_FEATURES {
                let (a, b) = (raw.as_array()[k], back.as_array()[k]);
                prop_assert!((a - b).abs() <= 1e-3 * a.abs().max(1.0));
            }
        }
    }
}
