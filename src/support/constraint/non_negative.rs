use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Layer thicknesses and layer resistances use this bound: an absent layer
/// contributes exactly zero, never a negative amount.
///
/// # Examples
///
/// ```
/// use thermal_encroachment::support::constraint::{Constrained, NonNegative};
/// use uom::si::{f64::Length, length::inch};
///
/// let thickness = Constrained::<_, NonNegative>::new(Length::new::<inch>(2.0)).unwrap();
/// assert_eq!(thickness.into_inner().get::<inch>(), 2.0);
///
/// assert!(NonNegative::new(Length::new::<inch>(0.0)).is_ok());
/// assert!(NonNegative::new(Length::new::<inch>(-0.5)).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative>::zero()
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two `Constrained<T, NonNegative>` values.
///
/// The invariant is checked in debug builds.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "Addition produced a negative value, violating NonNegative bound invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: PartialOrd + Zero,
{
    fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::inch};

    #[test]
    fn floats() {
        assert!(NonNegative::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(-2.0).is_err());
        assert!(matches!(
            NonNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn thicknesses() {
        assert!(NonNegative::new(Length::new::<inch>(6.0)).is_ok());
        assert!(NonNegative::new(Length::new::<inch>(0.0)).is_ok());
        assert!(matches!(
            NonNegative::new(Length::new::<inch>(-1.0)),
            Err(ConstraintError::Negative)
        ));
    }

    #[test]
    fn layers_sum_in_series() {
        let layers = [1.5, 0.0, 2.25]
            .into_iter()
            .map(|t| NonNegative::new(Length::new::<inch>(t)).unwrap());

        let total: Constrained<Length, NonNegative> = layers.sum();
        assert_relative_eq!(total.into_inner().get::<inch>(), 3.75, epsilon = 1e-12);

        let empty: Constrained<Length, NonNegative> = std::iter::empty().sum();
        assert!(empty.is_zero());
    }
}
