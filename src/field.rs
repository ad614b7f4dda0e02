use std::sync::Arc;

use crate::error::Error;
use crate::group::{f64_add_group, f64_mult_group, BinOp, ConstOp, EqOp, Group, UnOp};
use crate::proof::Proof;

pub type PartialOp<T> = Arc<dyn Fn(&T) -> Result<T, Error> + Send + Sync>;

// field over T: a commutative group under `add`, a commutative group over
// the nonzero elements generating `mult_inverse`, and a ring
// multiplication `mult` distributing over `add`.
//
// `mult` and `mult_add` are distinct slots: `mult_add` is the composition
// of the group that supplies `one` and `mult_inverse`, while `mult` is the
// multiplication the rest of the field uses. in a genuine field the two
// coincide, but nothing here enforces that
pub struct Field<T> {
    pub add_associative: Proof,
    pub add_commutative: Proof,
    pub mult_associative: Proof,
    pub mult_commutative: Proof,
    pub mult_distributive: Proof,
    pub(crate) add: BinOp<T>,
    pub(crate) add_inverse: UnOp<T>,
    pub(crate) mult: BinOp<T>,
    pub(crate) mult_add: BinOp<T>,
    pub(crate) mult_inverse: PartialOp<T>,
    pub(crate) zero: ConstOp<T>,
    pub(crate) one: ConstOp<T>,
    pub(crate) add_eq: EqOp<T>,
    pub(crate) mult_eq: EqOp<T>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Field {
            add_associative: self.add_associative,
            add_commutative: self.add_commutative,
            mult_associative: self.mult_associative,
            mult_commutative: self.mult_commutative,
            mult_distributive: self.mult_distributive,
            add: self.add.clone(),
            add_inverse: self.add_inverse.clone(),
            mult: self.mult.clone(),
            mult_add: self.mult_add.clone(),
            mult_inverse: self.mult_inverse.clone(),
            zero: self.zero.clone(),
            one: self.one.clone(),
            add_eq: self.add_eq.clone(),
            mult_eq: self.mult_eq.clone(),
        }
    }
}

impl<T> Field<T> {
    // identify the field's additive structure with `additive` and its
    // inverse-generating multiplicative structure with `multiplicative`,
    // copying operation by operation. `multiplicative`'s identity becomes
    // `one` and its inverse becomes `mult_inverse`; the ring
    // multiplication is supplied separately and is trusted as given
    pub fn from_groups<M>(
        additive: Group<T>,
        multiplicative: Group<T>,
        mult: M,
        distributive: Proof,
    ) -> Field<T>
    where
        M: Fn(&T, &T) -> T + Send + Sync + 'static,
        T: 'static,
    {
        let group_inverse = multiplicative.inverse.clone();

        Field {
            add_associative: additive.associative,
            add_commutative: additive.commutative,
            mult_associative: multiplicative.associative,
            mult_commutative: multiplicative.commutative,
            mult_distributive: distributive,
            add: additive.add,
            add_inverse: additive.inverse,
            mult: Arc::new(mult),
            mult_add: multiplicative.add,
            mult_inverse: Arc::new(move |u: &T| Ok(group_inverse(u))),
            zero: additive.zero,
            one: multiplicative.zero,
            add_eq: additive.eq,
            mult_eq: multiplicative.eq,
        }
    }

    pub fn add(&self, t1: &T, t2: &T) -> T {
        (self.add)(t1, t2)
    }

    pub fn add_inverse(&self, t: &T) -> T {
        (self.add_inverse)(t)
    }

    pub fn mult(&self, t: &T, u: &T) -> T {
        (self.mult)(t, u)
    }

    pub fn mult_add(&self, u1: &T, u2: &T) -> T {
        (self.mult_add)(u1, u2)
    }

    pub fn mult_inverse(&self, u: &T) -> Result<T, Error> {
        (self.mult_inverse)(u)
    }

    pub fn zero(&self) -> T {
        (self.zero)()
    }

    pub fn one(&self) -> T {
        (self.one)()
    }

    pub fn add_eq(&self, t1: &T, t2: &T) -> bool {
        (self.add_eq)(t1, t2)
    }

    pub fn mult_eq(&self, u1: &T, u2: &T) -> bool {
        (self.mult_eq)(u1, u2)
    }

    pub fn util(&self) -> FieldUtil<'_, T> {
        FieldUtil { field: self }
    }
}

pub struct FieldUtil<'a, T> {
    field: &'a Field<T>,
}

impl<T> FieldUtil<'_, T> {
    pub fn is_zero(&self, t: &T) -> bool {
        self.field.add_eq(&self.field.zero(), t)
    }

    pub fn is_one(&self, u: &T) -> bool {
        self.field.mult_eq(&self.field.one(), u)
    }

    // signed integer embedding by double-and-add: the doubling term starts
    // at one() and doubles additively, so |n| costs O(log n) additions
    pub fn from_int(&self, n: i64) -> T {
        let mut m = n.unsigned_abs();
        let mut r = self.field.zero();
        let mut p = self.field.one();

        while m > 0 {
            if m & 1 == 1 {
                r = self.field.add(&r, &p);
            }
            p = self.field.add(&p, &p);
            m >>= 1;
        }

        if n < 0 {
            self.field.add_inverse(&r)
        } else {
            r
        }
    }

    // square-and-multiply. pow(t, 0) is one() for every t, zero included;
    // a negative exponent inverts the positive power, which is the only
    // way this can fail
    pub fn pow(&self, t: &T, n: i64) -> Result<T, Error>
    where
        T: Clone,
    {
        let mut m = n.unsigned_abs();
        let mut r = self.field.one();
        let mut p = t.clone();

        while m > 0 {
            if m & 1 == 1 {
                r = self.field.mult(&r, &p);
            }
            p = self.field.mult(&p, &p);
            m >>= 1;
        }

        if n < 0 {
            self.field.mult_inverse(&r)
        } else {
            Ok(r)
        }
    }
}

// not actually a field: f64 addition and multiplication are not
// associative, and 0.0 has no multiplicative inverse. test fixture only
pub fn unsafe_f64_field() -> Field<f64> {
    Field::from_groups(
        f64_add_group(),
        f64_mult_group(),
        |t: &f64, u: &f64| t * u,
        Proof::asserted([]),
    )
}
