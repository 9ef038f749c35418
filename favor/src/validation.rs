/// Check result consumed by [`Projection::filter`](crate::Projection::filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validation<X> {
    Pass,
    Fail(X),
}

impl<X> Validation<X> {
    pub fn is_pass(&self) -> bool {
        match self {
            Self::Pass => true,
            Self::Fail(_) => false,
        }
    }

    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    pub fn map_reason<F, U>(self, map: F) -> Validation<U>
    where
        F: FnOnce(X) -> U,
    {
        match self {
            Self::Pass => Validation::Pass,
            Self::Fail(reason) => Validation::Fail(map(reason)),
        }
    }
}

#[inline]
pub fn pass<X>() -> Validation<X> {
    Validation::Pass
}

#[inline]
pub fn fail<X>(reason: X) -> Validation<X> {
    Validation::Fail(reason)
}
