//! Input values and their validation
mod datum;

pub use self::datum::Datum;

use num_traits::ToPrimitive;

/// A value that may or may not be a real number.
///
/// The validating entry points of a distribution accept anything implementing
/// `AsReal`, so that a value of the wrong kind can be rejected with an error
/// rather than at compile time. This lets dynamically typed data, e.g.
/// [`Datum`], flow through the same checks as plain floats.
///
/// # Example
///
/// ```
/// use expdist::data::AsReal;
///
/// assert_eq!(2_u8.as_real(), Some(2.0));
/// assert_eq!(true.as_real(), None);
/// assert_eq!("5".as_real(), None);
/// assert_eq!(None::<f64>.as_real(), None);
/// ```
pub trait AsReal {
    /// The numeric value, or `None` if `self` is not a number. NaN is
    /// returned as-is.
    fn as_real(&self) -> Option<f64>;

    /// The numeric value if `self` is a number that is neither NaN nor
    /// infinite
    fn as_finite_real(&self) -> Option<f64> {
        self.as_real().filter(|x| x.is_finite())
    }
}

macro_rules! impl_as_real {
    ($($kind: ty),+) => {
        $(
            impl AsReal for $kind {
                #[inline]
                fn as_real(&self) -> Option<f64> {
                    self.to_f64()
                }
            }
        )+
    };
}

impl_as_real!(f64, f32, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl AsReal for bool {
    fn as_real(&self) -> Option<f64> {
        None
    }
}

impl AsReal for str {
    fn as_real(&self) -> Option<f64> {
        None
    }
}

impl AsReal for String {
    fn as_real(&self) -> Option<f64> {
        None
    }
}

impl<T: AsReal> AsReal for Option<T> {
    fn as_real(&self) -> Option<f64> {
        self.as_ref().and_then(AsReal::as_real)
    }
}

impl<T: AsReal + ?Sized> AsReal for &T {
    #[inline]
    fn as_real(&self) -> Option<f64> {
        (**self).as_real()
    }
}
