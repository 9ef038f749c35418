use std::error;

use crate::biased::Biased;
use crate::either::Either;
use crate::validation::Validation;

/// Combinator layer over [`Biased`]: operations act on the primary side
/// and pass the secondary through, unless named otherwise (`recover`,
/// `swap`, `transform`, `fold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Projection<P, S>(Biased<P, S>);

#[inline]
pub fn primary<P, S>(value: P) -> Projection<P, S> {
    Projection(Biased::Primary(value))
}

#[inline]
pub fn secondary<P, S>(value: S) -> Projection<P, S> {
    Projection(Biased::Secondary(value))
}

impl<P, S> Projection<P, S> {
    pub fn new(value: Biased<P, S>) -> Self {
        Self(value)
    }

    pub fn is_primary(&self) -> bool {
        self.0.is_primary()
    }

    pub fn is_secondary(&self) -> bool {
        self.0.is_secondary()
    }

    pub fn map<F, C>(self, mapper: F) -> Projection<C, S>
    where
        F: FnOnce(P) -> C,
    {
        match self.0 {
            Biased::Primary(value) => primary(mapper(value)),
            Biased::Secondary(other) => secondary(other),
        }
    }

    pub fn recover<F>(self, recovery: F) -> Projection<P, S>
    where
        F: FnOnce(S) -> P,
    {
        match self.0 {
            Biased::Primary(value) => primary(value),
            Biased::Secondary(other) => {
                trace!("recovering secondary into primary");
                primary(recovery(other))
            }
        }
    }

    /// Like [`recover`](Self::recover), but the recovery itself may land on
    /// either side, with any secondary type.
    pub fn recover_with<F, X>(self, recovery: F) -> Projection<P, X>
    where
        F: FnOnce(S) -> Projection<P, X>,
    {
        match self.0 {
            Biased::Primary(value) => primary(value),
            Biased::Secondary(other) => recovery(other),
        }
    }

    pub fn for_each<F>(&self, effect: F)
    where
        F: FnOnce(&P),
    {
        match &self.0 {
            Biased::Primary(value) => effect(value),
            Biased::Secondary(_) => (),
        }
    }

    pub fn flat_map<F, C>(self, binder: F) -> Projection<C, S>
    where
        F: FnOnce(P) -> Projection<C, S>,
    {
        match self.0 {
            Biased::Primary(value) => binder(value),
            Biased::Secondary(other) => secondary(other),
        }
    }

    /// A failed check demotes the primary to a secondary carrying the
    /// reason; on a secondary the check never runs.
    pub fn filter<F>(self, check: F) -> Projection<P, S>
    where
        F: FnOnce(&P) -> Validation<S>,
    {
        match self.0 {
            Biased::Primary(value) => match check(&value) {
                Validation::Pass => primary(value),
                Validation::Fail(reason) => {
                    trace!("filter rejected a primary value");
                    secondary(reason)
                }
            },
            Biased::Secondary(other) => secondary(other),
        }
    }

    pub fn exists<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&P) -> bool,
    {
        match &self.0 {
            Biased::Primary(value) => predicate(value),
            Biased::Secondary(_) => false,
        }
    }

    pub fn forall<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&P) -> bool,
    {
        match &self.0 {
            Biased::Primary(value) => predicate(value),
            Biased::Secondary(_) => true,
        }
    }

    /// `default` runs only on the secondary branch, once per call.
    pub fn get_or_else<F>(self, default: F) -> P
    where
        F: FnOnce() -> P,
    {
        match self.0 {
            Biased::Primary(value) => value,
            Biased::Secondary(_) => default(),
        }
    }

    /// Lazy like [`get_or_else`](Self::get_or_else); the original secondary
    /// payload is discarded.
    pub fn or_else<F, X>(self, alternative: F) -> Projection<P, X>
    where
        F: FnOnce() -> Projection<P, X>,
    {
        match self.0 {
            Biased::Primary(value) => primary(value),
            Biased::Secondary(_) => alternative(),
        }
    }

    pub fn into_option(self) -> Option<P> {
        match self.0 {
            Biased::Primary(value) => Some(value),
            Biased::Secondary(_) => None,
        }
    }

    /// **Swaps sides**: the favored primary lands in the `Right` (success)
    /// slot of the `Either` convention, the secondary in `Left`.
    pub fn into_either(self) -> Either<S, P> {
        match self.0 {
            Biased::Primary(value) => Either::Right(value),
            Biased::Secondary(other) => Either::Left(other),
        }
    }

    /// Unlike [`into_either`](Self::into_either) this preserves polarity.
    pub fn into_biased(self) -> Biased<P, S> {
        self.0
    }

    pub fn swap(self) -> Projection<S, P> {
        match self.0 {
            Biased::Primary(value) => secondary(value),
            Biased::Secondary(other) => primary(other),
        }
    }

    pub fn transform<BF, WF, C, X>(self, on_primary: BF, on_secondary: WF) -> Projection<C, X>
    where
        BF: FnOnce(P) -> Projection<C, X>,
        WF: FnOnce(S) -> Projection<C, X>,
    {
        match self.0 {
            Biased::Primary(value) => on_primary(value),
            Biased::Secondary(other) => on_secondary(other),
        }
    }

    pub fn fold<BF, WF, V>(self, on_primary: BF, on_secondary: WF) -> V
    where
        BF: FnOnce(P) -> V,
        WF: FnOnce(S) -> V,
    {
        match self.0 {
            Biased::Primary(value) => on_primary(value),
            Biased::Secondary(other) => on_secondary(other),
        }
    }
}

impl<P, S> Projection<P, S>
where
    S: error::Error,
{
    /// Only available when the secondary side is an error type; a
    /// non-error secondary rejects this call at compile time.
    pub fn into_result(self) -> Result<P, S> {
        match self.0 {
            Biased::Primary(value) => Ok(value),
            Biased::Secondary(other) => Err(other),
        }
    }
}

/// Sequence view of a projection: one item when primary, none otherwise.
pub struct IntoIter<P>(Option<P>);

impl<P> Iterator for IntoIter<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        self.0.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.0.is_some() { 1 } else { 0 };
        (remaining, Some(remaining))
    }
}

impl<P> DoubleEndedIterator for IntoIter<P> {
    fn next_back(&mut self) -> Option<P> {
        self.0.take()
    }
}

impl<P> ExactSizeIterator for IntoIter<P> {}

impl<P, S> IntoIterator for Projection<P, S> {
    type Item = P;
    type IntoIter = IntoIter<P>;

    fn into_iter(self) -> IntoIter<P> {
        IntoIter(self.into_option())
    }
}
