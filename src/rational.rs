use std::sync::Arc;

use serde::Serialize;

use crate::error::Error;
use crate::field::{unsafe_f64_field, Field, PartialOp};
use crate::group::{BinOp, ConstOp, EqOp, UnOp};
use crate::proof::Proof;

// formal fraction over a base field. never normalized: there is no GCD
// reduction (the base field need not have one), so representations grow
// across operations and equality goes through cross-multiplication
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rational<T> {
    pub numer: T,
    pub denom: T,
}

pub type RationalField<T> = Field<Rational<T>>;

pub fn fraction_field<T>(base: Field<T>) -> RationalField<T>
where
    T: Clone + 'static,
{
    // a/b = c/d <=> ad = bc; fraction equivalence is one relation, used
    // for both equality slots
    let eq: EqOp<Rational<T>> = {
        let base = base.clone();
        Arc::new(move |op1: &Rational<T>, op2: &Rational<T>| {
            base.add_eq(
                &base.mult(&op1.numer, &op2.denom),
                &base.mult(&op1.denom, &op2.numer),
            )
        })
    };

    // a/b + c/d = (ad + bc)/bd
    let add: BinOp<Rational<T>> = {
        let base = base.clone();
        Arc::new(move |op1: &Rational<T>, op2: &Rational<T>| Rational {
            numer: base.add(
                &base.mult(&op1.numer, &op2.denom),
                &base.mult(&op1.denom, &op2.numer),
            ),
            denom: base.mult(&op1.denom, &op2.denom),
        })
    };

    let add_inverse: UnOp<Rational<T>> = {
        let base = base.clone();
        Arc::new(move |op1: &Rational<T>| Rational {
            numer: base.add_inverse(&op1.numer),
            denom: op1.denom.clone(),
        })
    };

    // a/b * c/d = ac/bd
    let mult: BinOp<Rational<T>> = {
        let base = base.clone();
        Arc::new(move |op1: &Rational<T>, op2: &Rational<T>| Rational {
            numer: base.mult(&op1.numer, &op2.numer),
            denom: base.mult(&op1.denom, &op2.denom),
        })
    };

    // (a/b)^-1 = b/a; the numerator becomes the new denominator, so a
    // zero numerator has no inverse
    let mult_inverse: PartialOp<Rational<T>> = {
        let base = base.clone();
        Arc::new(move |op1: &Rational<T>| {
            if base.util().is_zero(&op1.numer) {
                return Err(Error::zero_inverse());
            }

            Ok(Rational {
                numer: op1.denom.clone(),
                denom: op1.numer.clone(),
            })
        })
    };

    let zero: ConstOp<Rational<T>> = {
        let base = base.clone();
        Arc::new(move || Rational {
            numer: base.zero(),
            denom: base.one(),
        })
    };

    let one: ConstOp<Rational<T>> = {
        let base = base.clone();
        Arc::new(move || Rational {
            numer: base.one(),
            denom: base.one(),
        })
    };

    let add_associative = Proof::asserted([]);
    let add_commutative = Proof::asserted([]);

    // the additive tokens and the addition closure double as the
    // multiplicative-group slots
    Field {
        add_associative,
        add_commutative,
        mult_associative: add_associative,
        mult_commutative: add_commutative,
        mult_distributive: Proof::asserted([]),
        add: add.clone(),
        add_inverse,
        mult,
        mult_add: add,
        mult_inverse,
        zero,
        one,
        add_eq: eq.clone(),
        mult_eq: eq,
    }
}

pub type F64Rational = Rational<f64>;

pub fn unsafe_f64_rational_field() -> RationalField<f64> {
    fraction_field(unsafe_f64_field())
}

pub fn f64_to_rational(n: f64) -> F64Rational {
    Rational {
        numer: n,
        denom: 1.0,
    }
}
