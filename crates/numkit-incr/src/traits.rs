//! The accumulator interface shared by every incremental statistic

use tracing::debug;

/// Lifecycle of an accumulator
///
/// `Empty` until the first datum, `Active` afterwards, and `Poisoned` for
/// good once a NaN is seen or the internal state turns NaN (for example a
/// sum fed both `+inf` and `-inf`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccumulatorState {
    #[default]
    Empty,
    Active,
    Poisoned,
}

/// A streaming statistic updated one datum at a time
///
/// # Example
///
/// ```rust
/// use numkit_incr::{incrmean, Accumulator, AccumulatorState};
///
/// let mut acc = incrmean();
/// assert_eq!(acc.value(), None);
/// acc.update(2.0);
/// assert_eq!(acc.update(4.0), 3.0);
/// assert_eq!(acc.state(), AccumulatorState::Active);
///
/// acc.update(f64::NAN);
/// assert!(acc.update(1.0).is_nan());
/// assert_eq!(acc.state(), AccumulatorState::Poisoned);
/// ```
pub trait Accumulator {
    type Input;
    type Output;

    /// Fold one datum into the state and return the updated statistic
    ///
    /// A poisoned accumulator ignores the datum and returns NaN.
    fn update(&mut self, input: Self::Input) -> Self::Output;

    /// Current statistic, `None` before the first datum
    fn value(&self) -> Option<Self::Output>;

    fn state(&self) -> AccumulatorState;

    /// Number of data folded in before any poisoning
    fn count(&self) -> u64;

    /// Fold every datum of `inputs` and return the final statistic
    fn accumulate<I>(&mut self, inputs: I) -> Option<Self::Output>
    where
        I: IntoIterator<Item = Self::Input>,
    {
        for input in inputs {
            self.update(input);
        }
        self.value()
    }

    fn is_poisoned(&self) -> bool {
        self.state() == AccumulatorState::Poisoned
    }
}

/// Log the transition to `Poisoned`
pub(crate) fn log_poisoned(accumulator: &'static str, count: u64) {
    debug!(accumulator, count, "accumulator poisoned by NaN");
}

/// Map a state and a live value to the `value()` contract
#[inline]
pub(crate) fn report(state: AccumulatorState, live: impl FnOnce() -> f64) -> Option<f64> {
    match state {
        AccumulatorState::Empty => None,
        AccumulatorState::Poisoned => Some(f64::NAN),
        AccumulatorState::Active => Some(live()),
    }
}
