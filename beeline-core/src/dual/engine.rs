use super::Dual;
use crate::error::BeeLineError;
use num_traits::One;
use std::cell::RefCell;

/// Derivatives whose magnitude exceeds this bound are divided by it.
pub const DERIVATIVE_BOUND: f32 = 256.0;

/// Switches for the dual-number engine.
///
/// * `clamp_derivatives`: after every primitive, a NaN or infinite derivative
///   becomes 0 and a derivative with magnitude above [`DERIVATIVE_BOUND`] is
///   divided by [`DERIVATIVE_BOUND`]. The value channel is never touched.
/// * `diagnostics`: every primitive checks its operands (non-finite parts, zero
///   divisor, non-positive logarithm argument) and records the first fault.
///   Results are numerically identical with diagnostics on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub clamp_derivatives: bool,
    pub diagnostics: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            clamp_derivatives: true,
            diagnostics: false,
        }
    }
}

impl EngineOptions {
    /// Raw dual-number arithmetic: no clamping, no checks.
    pub fn unguarded() -> Self {
        EngineOptions {
            clamp_derivatives: false,
            diagnostics: false,
        }
    }

    /// Default clamping plus operand diagnostics.
    pub fn diagnostic() -> Self {
        EngineOptions {
            clamp_derivatives: true,
            diagnostics: true,
        }
    }
}

/// First numeric problem observed by an engine running with diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericFault {
    pub operation: &'static str,
    pub detail: String,
}

impl From<NumericFault> for BeeLineError {
    fn from(fault: NumericFault) -> Self {
        BeeLineError::NumericDegeneracy {
            operation: fault.operation.to_string(),
            detail: fault.detail,
        }
    }
}

/// Applies dual-number primitives under a fixed [`EngineOptions`].
///
/// All primitives are pure with respect to their operands. The only state is
/// the diagnostic fault slot, which keeps the first fault until
/// [`take_fault`](DualEngine::take_fault) is called.
#[derive(Debug, Clone, Default)]
pub struct DualEngine {
    options: EngineOptions,
    fault: RefCell<Option<NumericFault>>,
}

impl DualEngine {
    pub fn new(options: EngineOptions) -> Self {
        DualEngine {
            options,
            fault: RefCell::new(None),
        }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Removes and returns the recorded fault, if any.
    pub fn take_fault(&self) -> Option<NumericFault> {
        self.fault.borrow_mut().take()
    }

    /// The derivative guard on its own: NaN/inf -> 0, |der| > 256 -> der / 256.
    #[inline]
    pub fn clamp(d: Dual) -> Dual {
        let der = if !d.der.is_finite() {
            0.0
        } else if d.der.abs() > DERIVATIVE_BOUND {
            d.der / DERIVATIVE_BOUND
        } else {
            d.der
        };
        Dual { val: d.val, der }
    }

    #[inline]
    fn finish(&self, d: Dual) -> Dual {
        if self.options.clamp_derivatives {
            Self::clamp(d)
        } else {
            d
        }
    }

    fn record(&self, operation: &'static str, detail: String) {
        let mut slot = self.fault.borrow_mut();
        if slot.is_none() {
            log::debug!("numeric fault in {}: {}", operation, detail);
            *slot = Some(NumericFault { operation, detail });
        }
    }

    fn check(&self, operation: &'static str, d: Dual) {
        if !self.options.diagnostics {
            return;
        }
        if d.val.is_nan() {
            self.record(operation, format!("value of operand {} is NaN", d));
        } else if d.val.is_infinite() {
            self.record(operation, format!("value of operand {} is infinite", d));
        } else if d.der.is_nan() {
            self.record(operation, format!("derivative of operand {} is NaN", d));
        } else if d.der.is_infinite() {
            self.record(operation, format!("derivative of operand {} is infinite", d));
        }
    }

    pub fn add(&self, u: Dual, v: Dual) -> Dual {
        self.check("+", u);
        self.check("+", v);
        self.finish(u + v)
    }

    pub fn sub(&self, u: Dual, v: Dual) -> Dual {
        self.check("-", u);
        self.check("-", v);
        self.finish(u - v)
    }

    pub fn mul(&self, u: Dual, v: Dual) -> Dual {
        self.check("*", u);
        self.check("*", v);
        self.finish(u * v)
    }

    /// Quotient rule. A zero divisor yields ±inf/NaN; only diagnostics report it.
    pub fn div(&self, u: Dual, v: Dual) -> Dual {
        self.check("/", u);
        self.check("/", v);
        if self.options.diagnostics && v.val == 0.0 {
            self.record("/", format!("divisor {} is zero", v));
        }
        self.finish(u / v)
    }

    pub fn neg(&self, u: Dual) -> Dual {
        self.check("neg", u);
        self.finish(-u)
    }

    pub fn sin(&self, u: Dual) -> Dual {
        self.check("sin", u);
        self.finish(Dual {
            val: u.val.sin(),
            der: u.der * u.val.cos(),
        })
    }

    pub fn cos(&self, u: Dual) -> Dual {
        self.check("cos", u);
        self.finish(Dual {
            val: u.val.cos(),
            der: -u.der * u.val.sin(),
        })
    }

    pub fn exp(&self, u: Dual) -> Dual {
        self.check("exp", u);
        let exp = u.val.exp();
        self.finish(Dual {
            val: exp,
            der: u.der * exp,
        })
    }

    pub fn log(&self, u: Dual) -> Dual {
        self.check("log", u);
        if self.options.diagnostics && u.val <= 0.0 {
            self.record("log", format!("argument {} is not positive", u));
        }
        self.finish(Dual {
            val: u.val.ln(),
            der: u.der / u.val,
        })
    }

    /// |u| with sign(0) = 0.
    pub fn abs(&self, u: Dual) -> Dual {
        self.check("abs", u);
        let sign = if u.val == 0.0 { 0.0 } else { u.val.signum() };
        self.finish(Dual {
            val: u.val.abs(),
            der: u.der * sign,
        })
    }

    /// `u^p` for a constant exponent `p`.
    pub fn pow(&self, u: Dual, p: f32) -> Dual {
        self.check("^", u);
        self.finish(Dual {
            val: u.val.powf(p),
            der: p * u.der * u.val.powf(p - 1.0),
        })
    }

    /// `exp(u) / (exp(u) + 1)`, each step guarded.
    pub fn sigmoid(&self, u: Dual) -> Dual {
        let e = self.exp(u);
        self.div(e, self.add(e, Dual::one()))
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
