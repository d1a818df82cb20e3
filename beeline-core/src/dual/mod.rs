// src/dual/mod.rs

//! # Dual numbers
//!
//! A [`Dual`] carries the value of an expression together with its partial
//! derivative with respect to the single parameter that is currently seeded.
//!
//! The operator impls on `Dual` (`+`, `-`, `*`, `/`, unary `-`) are the raw
//! dual-number rules. Network code goes through a [`DualEngine`] instead, which
//! applies the derivative guard and the optional diagnostics after every
//! primitive.

pub mod engine;
pub mod traced;
pub mod transform;

pub use engine::{DualEngine, EngineOptions, NumericFault, DERIVATIVE_BOUND};
pub use traced::{Describable, Expr, Traced};

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value and its derivative with respect to one seeded parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dual {
    pub val: f32,
    pub der: f32,
}

impl Dual {
    /// Builds a dual number from explicit parts.
    #[inline]
    pub fn new(val: f32, der: f32) -> Self {
        Dual { val, der }
    }

    /// A constant: derivative 0.
    #[inline]
    pub fn constant(val: f32) -> Self {
        Dual { val, der: 0.0 }
    }

    /// The seeded variable: derivative 1.
    #[inline]
    pub fn seeded(val: f32) -> Self {
        Dual { val, der: 1.0 }
    }

    /// True when both channels are finite.
    pub fn is_finite(&self) -> bool {
        self.val.is_finite() && self.der.is_finite()
    }
}

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.val, self.der)
    }
}

// (a + bε) + (c + dε) = (a+c) + (b+d)ε
impl Add for Dual {
    type Output = Dual;
    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        Dual {
            val: self.val + rhs.val,
            der: self.der + rhs.der,
        }
    }
}

impl Sub for Dual {
    type Output = Dual;
    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        Dual {
            val: self.val - rhs.val,
            der: self.der - rhs.der,
        }
    }
}

// (a + bε)(c + dε) = ac + (bc + ad)ε
impl Mul for Dual {
    type Output = Dual;
    #[inline]
    fn mul(self, rhs: Dual) -> Dual {
        Dual {
            val: self.val * rhs.val,
            der: self.der * rhs.val + self.val * rhs.der,
        }
    }
}

// (a + bε)/(c + dε) = a/c + (bc - ad)/c² ε
impl Div for Dual {
    type Output = Dual;
    #[inline]
    fn div(self, rhs: Dual) -> Dual {
        Dual {
            val: self.val / rhs.val,
            der: (self.der * rhs.val - self.val * rhs.der) / (rhs.val * rhs.val),
        }
    }
}

impl Neg for Dual {
    type Output = Dual;
    #[inline]
    fn neg(self) -> Dual {
        Dual {
            val: -self.val,
            der: -self.der,
        }
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Dual::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.val == 0.0 && self.der == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Dual::constant(1.0)
    }
}
