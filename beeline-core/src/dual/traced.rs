// src/dual/traced.rs

//! Symbolic tracing for debugging.
//!
//! [`Traced`] pairs a [`Dual`] with the expression tree that produced it. The
//! numbers are always computed by a [`DualEngine`], so tracing a computation
//! gives bit-identical values and derivatives to running it untraced. Plain
//! `Dual` arithmetic carries no tree and pays nothing for this.

use super::{Dual, DualEngine};
use std::fmt;
use std::rc::Rc;

/// Something that can print the computation behind it.
pub trait Describable {
    fn describe(&self) -> String;
}

/// A node of a traced expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A named input captured with its value and derivative at trace time.
    Leaf { name: String, val: f32, der: f32 },
    Constant(f32),
    Unary { op: &'static str, operand: Rc<Expr> },
    Binary {
        op: &'static str,
        left: Rc<Expr>,
        right: Rc<Expr>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Leaf { name, val, der } => write!(f, "{}({},{})", name, val, der),
            Expr::Constant(val) => write!(f, "{}", val),
            Expr::Unary { op, operand } => write!(f, "{}({})", op, operand),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

/// A dual number that remembers how it was computed.
#[derive(Debug, Clone)]
pub struct Traced {
    dual: Dual,
    expr: Rc<Expr>,
}

impl Traced {
    pub fn variable(name: impl Into<String>, dual: Dual) -> Self {
        Traced {
            dual,
            expr: Rc::new(Expr::Leaf {
                name: name.into(),
                val: dual.val,
                der: dual.der,
            }),
        }
    }

    pub fn constant(val: f32) -> Self {
        Traced {
            dual: Dual::constant(val),
            expr: Rc::new(Expr::Constant(val)),
        }
    }

    pub fn dual(&self) -> Dual {
        self.dual
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    fn unary(&self, op: &'static str, dual: Dual) -> Traced {
        Traced {
            dual,
            expr: Rc::new(Expr::Unary {
                op,
                operand: Rc::clone(&self.expr),
            }),
        }
    }

    fn binary(&self, op: &'static str, other: &Traced, dual: Dual) -> Traced {
        Traced {
            dual,
            expr: Rc::new(Expr::Binary {
                op,
                left: Rc::clone(&self.expr),
                right: Rc::clone(&other.expr),
            }),
        }
    }

    pub fn add(&self, engine: &DualEngine, other: &Traced) -> Traced {
        self.binary("+", other, engine.add(self.dual, other.dual))
    }

    pub fn sub(&self, engine: &DualEngine, other: &Traced) -> Traced {
        self.binary("-", other, engine.sub(self.dual, other.dual))
    }

    pub fn mul(&self, engine: &DualEngine, other: &Traced) -> Traced {
        self.binary("*", other, engine.mul(self.dual, other.dual))
    }

    pub fn div(&self, engine: &DualEngine, other: &Traced) -> Traced {
        self.binary("/", other, engine.div(self.dual, other.dual))
    }

    pub fn pow(&self, engine: &DualEngine, p: f32) -> Traced {
        self.binary("^", &Traced::constant(p), engine.pow(self.dual, p))
    }

    pub fn sin(&self, engine: &DualEngine) -> Traced {
        self.unary("sin", engine.sin(self.dual))
    }

    pub fn cos(&self, engine: &DualEngine) -> Traced {
        self.unary("cos", engine.cos(self.dual))
    }

    pub fn abs(&self, engine: &DualEngine) -> Traced {
        self.unary("abs", engine.abs(self.dual))
    }

    pub fn exp(&self, engine: &DualEngine) -> Traced {
        self.unary("exp", engine.exp(self.dual))
    }

    pub fn log(&self, engine: &DualEngine) -> Traced {
        self.unary("log", engine.log(self.dual))
    }

    pub fn neg(&self, engine: &DualEngine) -> Traced {
        self.unary("neg", engine.neg(self.dual))
    }

    pub fn sigmoid(&self, engine: &DualEngine) -> Traced {
        self.unary("sigmoid", engine.sigmoid(self.dual))
    }
}

impl Describable for Traced {
    fn describe(&self) -> String {
        self.expr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::EngineOptions;

    #[test]
    fn test_trace_prints_operation_tree() {
        let engine = DualEngine::default();
        let x = Traced::variable("x", Dual::seeded(5.0));
        let y = Traced::variable("y", Dual::constant(6.0));
        let f = x.pow(&engine, 2.0).mul(&engine, &y);
        assert_eq!(f.describe(), "((x(5,1) ^ 2) * y(6,0))");
    }

    #[test]
    fn test_trace_never_alters_numbers() {
        for options in [EngineOptions::default(), EngineOptions::unguarded()] {
            let engine = DualEngine::new(options);
            let a = Dual::new(0.4, 1.0);
            let b = Dual::new(-2.0, 0.0);

            let plain = engine.sigmoid(engine.add(engine.mul(a, b), engine.exp(a)));

            let ta = Traced::variable("a", a);
            let tb = Traced::variable("b", b);
            let traced = ta.mul(&engine, &tb).add(&engine, &ta.exp(&engine)).sigmoid(&engine);

            assert_eq!(traced.dual(), plain);
            assert_eq!(traced.describe(), "sigmoid(((a(0.4,1) * b(-2,0)) + exp(a(0.4,1))))");
        }
    }

    #[test]
    fn test_trig_and_abs_nodes_match_engine() {
        let engine = DualEngine::default();
        let x = Dual::new(-0.7, 1.0);
        let tx = Traced::variable("x", x);
        let traced = tx.sin(&engine).add(&engine, &tx.cos(&engine)).abs(&engine);

        let plain = engine.abs(engine.add(engine.sin(x), engine.cos(x)));
        assert_eq!(traced.dual(), plain);
        assert_eq!(traced.describe(), "abs((sin(x(-0.7,1)) + cos(x(-0.7,1))))");
    }

    #[test]
    fn test_unary_and_division_nodes() {
        let engine = DualEngine::default();
        let x = Traced::variable("p", Dual::new(0.5, 1.0));
        let one = Traced::constant(1.0);
        let loss = one.div(&engine, &x).log(&engine).neg(&engine);
        assert!(matches!(loss.expr(), Expr::Unary { op: "neg", .. }));
        assert_eq!(loss.describe(), "neg(log((1 / p(0.5,1))))");
    }
}
