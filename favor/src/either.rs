#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        match self {
            Self::Left(_) => true,
            Self::Right(_) => false,
        }
    }

    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    pub fn map_left<F, U>(self, map: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::Left(left) => Either::Left(map(left)),
            Self::Right(right) => Either::Right(right),
        }
    }

    pub fn map_right<F, U>(self, map: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(map(right)),
        }
    }

    pub fn left_or_map<F>(self, map: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(left) => left,
            Self::Right(right) => map(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_are_side_local() {
        let value: Either<&str, i32> = Either::Right(5);
        assert!(value.is_right() && !value.is_left());
        assert_eq!(value.map_right(|x| x * 2), Either::Right(10));
        assert_eq!(value.map_left(|s: &str| s.len()), Either::Right(5));
    }

    #[test]
    fn left_or_map_collapses_to_the_left_type() {
        assert_eq!(Either::<usize, &str>::Left(4).left_or_map(|s| s.len()), 4);
        assert_eq!(Either::<usize, &str>::Right("abc").left_or_map(|s| s.len()), 3);
    }
}
