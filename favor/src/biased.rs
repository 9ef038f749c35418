/// Exactly one of two labeled values; `Primary` is the favored side.
/// The combinator surface lives on [`Projection`](crate::Projection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biased<P, S> {
    Primary(P),
    Secondary(S),
}

impl<P, S> Biased<P, S> {
    pub fn is_primary(&self) -> bool {
        match self {
            Self::Primary(_) => true,
            Self::Secondary(_) => false,
        }
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary()
    }
}

#[inline]
pub fn primary<P, S>(value: P) -> Biased<P, S> {
    Biased::Primary(value)
}

#[inline]
pub fn secondary<P, S>(value: S) -> Biased<P, S> {
    Biased::Secondary(value)
}
