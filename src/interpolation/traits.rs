use crate::interpolation::algorithms::Algorithm;

pub trait Interpolator {
    /// which formula this evaluator implements
    fn algorithm(&self) -> Algorithm;

    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
