//! Numeric values that remember whether they were integral.
//!
//! Map files are plain text, and the loaders that read them accept both
//! `1` and `1.0`. What matters for reproducible output is that a value
//! prints the same way every time it is written. [`Scalar`] keeps the
//! integer/float distinction of its source so that an integral quaternion
//! component prints as `0` while a float position prints as `10.0`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A number in its natural decimal form.
///
/// - `Int` prints as a plain integer (`-1`, `150`).
/// - `Float` prints in shortest round-trip form and always carries a
///   decimal point or exponent (`10.0`, `0.25`, `1e-07`). Exponents are
///   signed and at least two digits wide (`1e+16`), the form other map
///   tools emit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// Returns the value as an `f64`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(v) => v as f64,
            Scalar::Float(v) => v,
        }
    }

    /// Returns true if the value is integral in representation (not in value).
    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    fn combine(
        self,
        rhs: Scalar,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Scalar {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => match int_op(a, b) {
                Some(v) => Scalar::Int(v),
                None => Scalar::Float(float_op(a as f64, b as f64)),
            },
            (a, b) => Scalar::Float(float_op(a.as_f64(), b.as_f64())),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Int(0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            // Debug keeps the trailing `.0` on integral floats.
            Scalar::Float(v) => {
                let text = format!("{:?}", v);
                match text.split_once('e') {
                    Some((mantissa, exp)) => {
                        let (sign, digits) = match exp.strip_prefix('-') {
                            Some(digits) => ('-', digits),
                            None => ('+', exp),
                        };
                        write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
                    }
                    None => f.write_str(&text),
                }
            }
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self {
            Scalar::Int(v) => match v.checked_neg() {
                Some(n) => Scalar::Int(n),
                None => Scalar::Float(-(v as f64)),
            },
            Scalar::Float(v) => Scalar::Float(-v),
        }
    }
}
