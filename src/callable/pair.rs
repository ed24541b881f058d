//! Storage for two callables.
//!
//! [`Pair`] is the building block of every two-callable adaptor. Zero-sized
//! callables (closures that capture nothing, unit structs) take no space in
//! it, so an adaptor nested ten levels deep over stateless callables is still
//! zero-sized.

/// Two values stored side by side.
///
/// `Pair<A, B>` is exactly as large as its non-zero-sized members require;
/// when both are zero-sized the pair is zero-sized too.
///
/// # Examples
///
/// ```
/// use fitting::callable::Pair;
/// use std::mem::size_of;
///
/// let double = |x: i32| x * 2;
/// let pair = Pair::new(double, 7_u64);
///
/// assert_eq!((pair.first())(*pair.second() as i32), 14);
/// assert_eq!(size_of::<Pair<(), ()>>(), 0);
/// assert_eq!(size_of_val(&pair), size_of::<u64>());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Pair<First, Second> {
    /// Stores `first` and `second`.
    #[inline]
    pub const fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }

    /// Stores values converted from `first` and `second`.
    ///
    /// The stored types must be named, since they cannot be inferred from
    /// the sources of the conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitting::callable::Pair;
    ///
    /// let pair: Pair<i64, String> = Pair::convert(3_i32, "three");
    /// assert_eq!(*pair.first(), 3_i64);
    /// assert_eq!(pair.second(), "three");
    /// ```
    #[inline]
    pub fn convert<A, B>(first: A, second: B) -> Self
    where
        A: Into<First>,
        B: Into<Second>,
    {
        Self::new(first.into(), second.into())
    }

    /// Returns the first value.
    #[inline]
    pub const fn first(&self) -> &First {
        &self.first
    }

    /// Returns the second value.
    #[inline]
    pub const fn second(&self) -> &Second {
        &self.second
    }

    /// Returns both values, giving up the pair.
    #[inline]
    pub fn into_parts(self) -> (First, Second) {
        (self.first, self.second)
    }
}

static_assertions::assert_eq_size!(Pair<(), ()>, ());
static_assertions::assert_eq_size!(Pair<(), u64>, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[derive(Clone, Copy)]
    struct Stateless;

    #[test]
    fn test_zero_sized_members_cost_nothing() {
        assert_eq!(size_of::<Pair<Stateless, Stateless>>(), 0);
        assert_eq!(size_of::<Pair<Stateless, u32>>(), size_of::<u32>());
        assert_eq!(size_of::<Pair<u32, Stateless>>(), size_of::<u32>());
    }

    #[test]
    fn test_nested_zero_sized_pairs_stay_empty() {
        type Deep = Pair<Stateless, Pair<Stateless, Pair<Stateless, Pair<Stateless, Stateless>>>>;
        assert_eq!(size_of::<Deep>(), 0);
    }

    #[test]
    fn test_into_parts_returns_members() {
        let pair = Pair::new(String::from("left"), vec![1, 2]);
        let (first, second) = pair.into_parts();
        assert_eq!(first, "left");
        assert_eq!(second, vec![1, 2]);
    }
}
