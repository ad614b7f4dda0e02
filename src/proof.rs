use serde::Serialize;

// a token recording that some algebraic law is taken to hold for a
// particular descriptor; nothing is ever checked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Proof;

impl Proof {
    // merge any number of premise tokens (including none) into one
    pub fn asserted<I>(premises: I) -> Proof
    where
        I: IntoIterator<Item = Proof>,
    {
        premises.into_iter().for_each(drop);

        Proof
    }
}
