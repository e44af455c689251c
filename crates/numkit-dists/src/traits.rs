//! Traits shared by the distribution evaluators

/// A specialised one-argument function with its parameters baked in
pub trait UnivariateFunction {
    /// Evaluate at `x`
    fn eval(&self, x: f64) -> f64;

    /// Evaluate at every element of `xs`, writing into `out`
    ///
    /// Only the first `min(xs.len(), out.len())` elements are written.
    fn eval_into<'a>(&self, xs: &[f64], out: &'a mut [f64]) -> &'a mut [f64] {
        for (o, &x) in out.iter_mut().zip(xs) {
            *o = self.eval(x);
        }
        out
    }
}

/// Summary moments of a validated distribution
pub trait Moments {
    fn mean(&self) -> f64;

    fn variance(&self) -> f64;

    fn stdev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// NaN when the mode is undefined
    fn mode(&self) -> f64;

    /// Differential entropy in nats
    fn entropy(&self) -> f64;

    fn skewness(&self) -> f64;
}
