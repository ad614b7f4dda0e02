use std::sync::Arc;

use crate::proof::Proof;

pub type BinOp<T> = Arc<dyn Fn(&T, &T) -> T + Send + Sync>;
pub type UnOp<T> = Arc<dyn Fn(&T) -> T + Send + Sync>;
pub type ConstOp<T> = Arc<dyn Fn() -> T + Send + Sync>;
pub type EqOp<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

// commutative group over T, written additively: `add` must be associative
// and commutative, `zero` a two-sided identity, `inverse` a two-sided
// inverse, and `eq` an equivalence relation. none of that is checked; the
// two proof tokens are the caller's word for it
pub struct Group<T> {
    pub associative: Proof,
    pub commutative: Proof,
    pub(crate) add: BinOp<T>,
    pub(crate) inverse: UnOp<T>,
    pub(crate) zero: ConstOp<T>,
    pub(crate) eq: EqOp<T>,
}

impl<T> Clone for Group<T> {
    fn clone(&self) -> Self {
        Group {
            associative: self.associative,
            commutative: self.commutative,
            add: self.add.clone(),
            inverse: self.inverse.clone(),
            zero: self.zero.clone(),
            eq: self.eq.clone(),
        }
    }
}

impl<T> Group<T> {
    pub fn new<A, I, Z, E>(
        add: A,
        inverse: I,
        zero: Z,
        eq: E,
        associative: Proof,
        commutative: Proof,
    ) -> Group<T>
    where
        A: Fn(&T, &T) -> T + Send + Sync + 'static,
        I: Fn(&T) -> T + Send + Sync + 'static,
        Z: Fn() -> T + Send + Sync + 'static,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Group {
            associative,
            commutative,
            add: Arc::new(add),
            inverse: Arc::new(inverse),
            zero: Arc::new(zero),
            eq: Arc::new(eq),
        }
    }

    pub fn add(&self, t1: &T, t2: &T) -> T {
        (self.add)(t1, t2)
    }

    pub fn inverse(&self, t: &T) -> T {
        (self.inverse)(t)
    }

    pub fn zero(&self) -> T {
        (self.zero)()
    }

    pub fn eq(&self, t1: &T, t2: &T) -> bool {
        (self.eq)(t1, t2)
    }

    pub fn util(&self) -> GroupUtil<'_, T> {
        GroupUtil { group: self }
    }
}

pub struct GroupUtil<'a, T> {
    group: &'a Group<T>,
}

impl<T> GroupUtil<'_, T> {
    pub fn is_zero(&self, t: &T) -> bool {
        self.group.eq(&self.group.zero(), t)
    }
}

// f64 under addition. floating point only approximates the group laws, so
// this is a test fixture, not a trustworthy instance
pub fn f64_add_group() -> Group<f64> {
    Group::new(
        |n1: &f64, n2: &f64| n1 + n2,
        |n: &f64| -n,
        || 0.0,
        |n1: &f64, n2: &f64| n1 == n2,
        Proof::asserted([]),
        Proof::asserted([]),
    )
}

// nonzero f64 under multiplication; 0.0 maps to infinity under `inverse`,
// which is the representation's problem, not this layer's
pub fn f64_mult_group() -> Group<f64> {
    Group::new(
        |n1: &f64, n2: &f64| n1 * n2,
        |n: &f64| 1.0 / n,
        || 1.0,
        |n1: &f64, n2: &f64| n1 == n2,
        Proof::asserted([]),
        Proof::asserted([]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn add_group_laws() {
        let group = f64_add_group();
        let mut rng = SmallRng::seed_from_u64(1);

        // integer-valued samples keep f64 arithmetic exact
        for _ in 0..1000 {
            let a = rng.gen_range(-1000..1000) as f64;
            let b = rng.gen_range(-1000..1000) as f64;
            let c = rng.gen_range(-1000..1000) as f64;

            assert!(group.eq(
                &group.add(&group.add(&a, &b), &c),
                &group.add(&a, &group.add(&b, &c))
            ));
            assert!(group.eq(&group.add(&a, &b), &group.add(&b, &a)));
            assert!(group.eq(&group.add(&a, &group.zero()), &a));
            assert!(group.eq(&group.add(&a, &group.inverse(&a)), &group.zero()));
        }
    }

    #[test]
    fn mult_group_laws() {
        let group = f64_mult_group();
        let mut rng = SmallRng::seed_from_u64(1);

        // powers of two stay exact under f64 multiplication and inversion
        for _ in 0..1000 {
            let a = 2.0f64.powi(rng.gen_range(-10..10));
            let b = 2.0f64.powi(rng.gen_range(-10..10));
            let c = 2.0f64.powi(rng.gen_range(-10..10));

            assert!(group.eq(
                &group.add(&group.add(&a, &b), &c),
                &group.add(&a, &group.add(&b, &c))
            ));
            assert!(group.eq(&group.add(&a, &b), &group.add(&b, &a)));
            assert!(group.eq(&group.add(&a, &group.zero()), &a));
            assert!(group.eq(&group.add(&a, &group.inverse(&a)), &group.zero()));
        }
    }

    #[test]
    fn is_zero_is_the_identity_test() {
        let add = f64_add_group();

        assert!(add.util().is_zero(&0.0));
        assert!(!add.util().is_zero(&3.0));

        // for the multiplicative group the identity is 1.0
        let mult = f64_mult_group();

        assert!(mult.util().is_zero(&1.0));
        assert!(!mult.util().is_zero(&0.0));
    }
}
