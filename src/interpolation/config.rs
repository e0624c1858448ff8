//! Shared configuration for interpolation algorithms.  
//! 
//! [`CommonCfg`] — universal fields  
//! - `samples`     : validated [`SampleSet`], built when points are set 
//! - `x_eval`      : x values to evaluate 
//! - `spacing_tol` : [`SpacingTol`] used by the equal-spacing test; only 
//!   consulted by the finite-difference methods and the router 
//!
//! [`CommonCfg::new`] initializes configuration with no samples and an 
//! empty evaluation slice. Every algorithm config embeds a [`CommonCfg`] 
//! and gets the shared setters through `impl_common_cfg!`. 


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::sample_set::SampleSet;
use crate::interpolation::spacing::SpacingTol;


#[derive(Debug, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) samples    : Option<SampleSet>,
    pub(crate) x_eval     : &'a [f64],
    pub(crate) spacing_tol: SpacingTol,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            samples    : None,
            x_eval     : &[],
            spacing_tol: SpacingTol::default(),
        }
    }

    /// Returns the configured samples.
    ///
    /// # Errors
    /// - [`InterpolationError::MissingPoints`] if no points were set.
    pub fn samples(&self) -> Result<&SampleSet, InterpolationError> {
        self.samples.as_ref().ok_or(InterpolationError::MissingPoints)
    }

    // getters
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn spacing_tol(&self) -> SpacingTol { self.spacing_tol }

    // setters
    pub(crate) fn with_samples(&mut self, v: SampleSet) { self.samples = Some(v); }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
    pub(crate) fn with_spacing_tol(&mut self, v: SpacingTol) { self.spacing_tol = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            /// Validates raw `(x, y)` pairs into a
            /// [`SampleSet`](crate::interpolation::sample_set::SampleSet).
            pub fn set_points(
                mut self,
                v: &[(f64, f64)],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                let samples = $crate::interpolation::sample_set::SampleSet::new(v)?;
                self.common.with_samples(samples);
                Ok(self)
            }

            pub fn set_samples(
                mut self,
                v: $crate::interpolation::sample_set::SampleSet,
            ) -> Self {
                self.common.with_samples(v);
                self
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteQuery { got: v[idx] });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_spacing_tol(
                mut self,
                abs: f64,
                rel: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                let tol = $crate::interpolation::spacing::SpacingTol::new(abs, rel)?;
                self.common.with_spacing_tol(tol);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
