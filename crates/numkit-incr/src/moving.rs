//! Moving-window covariance and Pearson correlation
//!
//! Both accumulators keep the last `W` pairs in a circular buffer. While the
//! buffer fills, the co-moments grow with Welford's update; once it is full,
//! each new pair replaces the oldest and the co-moments slide in O(1).
//!
//! A NaN only affects the windows that contain it: the statistic is NaN
//! while the offending pair is in the buffer, and the co-moments are rebuilt
//! from the buffer once it has been evicted. The accumulators are never
//! poisoned by data.

use numkit_core::{Error, Result};
use tracing::trace;

use crate::covariance::CovarianceOptions;
use crate::traits::{log_poisoned, report, Accumulator, AccumulatorState};

/// Windowed co-moment state shared by [`IncrMCovariance`] and [`IncrMPcorr`]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct WindowMoments {
    window: usize,
    buffer: Vec<(f64, f64)>,
    /// Slot holding the oldest pair once the buffer is full
    head: usize,
    known: bool,
    mx: f64,
    my: f64,
    m2x: f64,
    m2y: f64,
    c: f64,
    /// Pairs in the buffer with a NaN component
    nans: usize,
    /// Set while the running moments do not describe the buffer
    stale: bool,
    count: u64,
    state: AccumulatorState,
}

impl WindowMoments {
    fn new(window: usize, options: CovarianceOptions, name: &'static str) -> Result<Self> {
        if window == 0 {
            return Err(Error::invalid_parameter("window", 0.0, "window >= 1"));
        }
        let (mx, my) = options.means.unwrap_or((0.0, 0.0));
        let mut m = Self {
            window,
            buffer: Vec::with_capacity(window),
            head: 0,
            known: options.means.is_some(),
            mx,
            my,
            m2x: 0.0,
            m2y: 0.0,
            c: 0.0,
            nans: 0,
            stale: false,
            count: 0,
            state: AccumulatorState::Empty,
        };
        if mx.is_nan() || my.is_nan() {
            m.state = AccumulatorState::Poisoned;
            log_poisoned(name, 0);
        }
        Ok(m)
    }

    /// Returns `false` when the state is poisoned
    fn push(&mut self, x: f64, y: f64, name: &'static str) -> bool {
        if self.state == AccumulatorState::Poisoned {
            return false;
        }
        self.count += 1;
        self.state = AccumulatorState::Active;

        let evicted = if self.buffer.len() < self.window {
            self.buffer.push((x, y));
            None
        } else {
            let old = std::mem::replace(&mut self.buffer[self.head], (x, y));
            self.head = (self.head + 1) % self.window;
            Some(old)
        };
        if x.is_nan() || y.is_nan() {
            self.nans += 1;
        }
        if evicted.is_some_and(|(ox, oy)| ox.is_nan() || oy.is_nan()) {
            self.nans -= 1;
        }

        if self.nans > 0 {
            self.stale = true;
            return true;
        }
        match evicted {
            _ if self.stale => self.rebuild(name),
            None => self.grow(x, y),
            Some((ox, oy)) => self.slide(x, y, ox, oy),
        }
        if self.c.is_nan() || self.m2x.is_nan() || self.m2y.is_nan() {
            self.rebuild(name);
        }
        true
    }

    fn grow(&mut self, x: f64, y: f64) {
        let dx = x - self.mx;
        let dy = y - self.my;
        if self.known {
            self.m2x += dx * dx;
            self.m2y += dy * dy;
            self.c += dx * dy;
        } else {
            let n = self.buffer.len() as f64;
            self.mx += dx / n;
            self.my += dy / n;
            let dy_n = y - self.my;
            self.m2x += dx * (x - self.mx);
            self.m2y += dy * dy_n;
            self.c += dx * dy_n;
        }
    }

    /// Replace `(ox, oy)` by `(x, y)` in a full window
    fn slide(&mut self, x: f64, y: f64, ox: f64, oy: f64) {
        let (dx_old, dy_old) = (ox - self.mx, oy - self.my);
        let (dx_new, dy_new) = (x - self.mx, y - self.my);
        if self.known {
            self.m2x += (dx_new - dx_old) * (dx_new + dx_old);
            self.m2y += (dy_new - dy_old) * (dy_new + dy_old);
            self.c += dx_new * dy_new - dx_old * dy_old;
        } else {
            let w = self.window as f64;
            let dx = dx_new - dx_old;
            let dy = dy_new - dy_old;
            self.mx += dx / w;
            self.my += dy / w;
            self.m2x += dx * (dx_old + (x - self.mx));
            self.m2y += dy * (dy_old + (y - self.my));
            self.c += dx_new * dy_new - dx_old * dy_old - dx * dy / w;
        }
    }

    /// Recompute every moment from the buffer with a two-pass sweep
    fn rebuild(&mut self, name: &'static str) {
        trace!(accumulator = name, len = self.buffer.len(), "rebuilding window moments");
        let n = self.buffer.len() as f64;
        if !self.known {
            let (sx, sy) = self
                .buffer
                .iter()
                .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
            self.mx = sx / n;
            self.my = sy / n;
        }
        let (mut m2x, mut m2y, mut c) = (0.0, 0.0, 0.0);
        for &(x, y) in &self.buffer {
            let (dx, dy) = (x - self.mx, y - self.my);
            m2x += dx * dx;
            m2y += dy * dy;
            c += dx * dy;
        }
        self.m2x = m2x;
        self.m2y = m2y;
        self.c = c;
        self.stale = false;
    }

    /// Current window length
    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn covariance(&self) -> f64 {
        if self.nans > 0 {
            return f64::NAN;
        }
        let n = self.len() as f64;
        match (self.known, self.len()) {
            (true, _) => self.c / n,
            (false, 1) => 0.0,
            (false, _) => self.c / (n - 1.0),
        }
    }

    fn correlation(&self) -> f64 {
        if self.nans > 0 {
            return f64::NAN;
        }
        if !self.known && self.len() == 1 {
            return 0.0;
        }
        self.c / (self.m2x.sqrt() * self.m2y.sqrt())
    }
}

macro_rules! moving_accumulator {
    ($(#[$meta:meta])* $name:ident, $label:literal, $stat:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            moments: WindowMoments,
        }

        impl $name {
            /// Errors when `window` is zero
            pub fn new(window: usize, options: CovarianceOptions) -> Result<Self> {
                Ok(Self {
                    moments: WindowMoments::new(window, options, $label)?,
                })
            }

            pub fn window(&self) -> usize {
                self.moments.window
            }

            /// Number of pairs currently in the window
            pub fn len(&self) -> usize {
                self.moments.len()
            }

            pub fn is_empty(&self) -> bool {
                self.moments.len() == 0
            }
        }

        impl Accumulator for $name {
            type Input = (f64, f64);
            type Output = f64;

            fn update(&mut self, (x, y): (f64, f64)) -> f64 {
                if !self.moments.push(x, y, $label) {
                    return f64::NAN;
                }
                self.moments.$stat()
            }

            fn value(&self) -> Option<f64> {
                report(self.moments.state, || self.moments.$stat())
            }

            fn state(&self) -> AccumulatorState {
                self.moments.state
            }

            fn count(&self) -> u64 {
                self.moments.count
            }
        }
    };
}

moving_accumulator!(
    /// Covariance of the last `W` pairs
    ///
    /// Divides by `n - 1` (or `n` with known means), `n` being the number of
    /// pairs in the window.
    IncrMCovariance,
    "incrmcovariance",
    covariance
);

moving_accumulator!(
    /// Pearson correlation of the last `W` pairs
    IncrMPcorr,
    "incrmpcorr",
    correlation
);
