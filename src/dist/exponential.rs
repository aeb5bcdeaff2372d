//! Exponential distribution over x in [0, ∞)
use crate::data::{AsReal, Datum};
use crate::impl_display;
use crate::traits::*;
use std::f64;
use std::f64::consts::LN_2;
use std::fmt;

/// [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution),
/// Exp(λ) over x in [0, ∞).
///
/// # Examples
///
/// ```rust
/// use expdist::prelude::*;
///
/// let mut expon = Exponential::default();
/// assert_eq!(expon.rate(), 1.0);
///
/// expon.set_rate(10.0).unwrap();
/// let variance: f64 = expon.variance().unwrap();
/// assert_eq!(variance, 0.01);
///
/// // Quantiles of the CDF
/// let xs = expon.inv_each(&[0.0, 0.5]).unwrap();
/// assert_eq!(xs[0], 0.0);
/// assert!((xs[1] - 0.1 * 2.0_f64.ln()).abs() < 1E-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    /// λ > 0, rate or inverse scale
    rate: f64,
}

impl Default for Exponential {
    fn default() -> Self {
        Self::new_unchecked(1.0)
    }
}

/// The validating operations of an [`Exponential`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Rate,
    Pdf,
    Cdf,
    Inv,
}

impl Operation {
    pub fn as_str(&self) -> &str {
        match self {
            Operation::Rate => "rate",
            Operation::Pdf => "pdf",
            Operation::Cdf => "cdf",
            Operation::Inv => "inv",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The functions of an [`Exponential`] that can be evaluated over a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Probability density function, λ exp(-λx)
    Pdf,
    /// Cumulative distribution function, 1 - exp(-λx)
    Cdf,
    /// Quantile function, -ln(1 - p) / λ
    Inv,
}

impl Function {
    /// Returns `true` if `x` is a valid input to the function
    ///
    /// # Example
    ///
    /// ```
    /// use expdist::dist::Function;
    ///
    /// assert!(Function::Pdf.domain_contains(2.0));
    /// assert!(!Function::Cdf.domain_contains(-0.01));
    /// assert!(Function::Inv.domain_contains(1.0));
    /// assert!(!Function::Inv.domain_contains(1.01));
    /// ```
    pub fn domain_contains(&self, x: f64) -> bool {
        match self {
            Function::Pdf | Function::Cdf => x >= 0.0,
            Function::Inv => (0.0..=1.0).contains(&x),
        }
    }

    /// The operation reported in errors raised by this function
    pub fn operation(&self) -> Operation {
        match self {
            Function::Pdf => Operation::Pdf,
            Function::Cdf => Operation::Cdf,
            Function::Inv => Operation::Inv,
        }
    }

    /// The function applied at rate λ. No input validation is done.
    fn eval(&self, rate: f64, x: f64) -> f64 {
        match self {
            Function::Pdf => pdf_at(rate, x),
            Function::Cdf => cdf_at(rate, x),
            Function::Inv => quantile_at(rate, x),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    /// A value was not a finite real number, or an argument was not a
    /// sequence
    InvalidType,
    /// A value was outside of the domain of the operation
    InvalidDomain,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExponentialError {
    /// The rate, an argument, or the sequence element at `index` was not a
    /// finite real number
    InvalidType {
        op: Operation,
        index: Option<usize>,
    },
    /// The rate or the sequence element at `index` was outside of the
    /// domain of `op`
    InvalidDomain {
        op: Operation,
        value: f64,
        index: Option<usize>,
    },
}

impl ExponentialError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::InvalidDomain { .. } => ErrorKind::InvalidDomain,
        }
    }
}

#[inline]
fn pdf_at(rate: f64, x: f64) -> f64 {
    rate * (-rate * x).exp()
}

#[inline]
fn cdf_at(rate: f64, x: f64) -> f64 {
    -(-rate * x).exp_m1()
}

#[inline]
fn quantile_at(rate: f64, p: f64) -> f64 {
    -(-p).ln_1p() / rate
}

fn validate_rate<T: AsReal>(rate: T) -> Result<f64, ExponentialError> {
    let rate = rate.as_finite_real().ok_or(ExponentialError::InvalidType {
        op: Operation::Rate,
        index: None,
    })?;
    if rate <= 0.0 {
        Err(ExponentialError::InvalidDomain {
            op: Operation::Rate,
            value: rate,
            index: None,
        })
    } else {
        Ok(rate)
    }
}

impl Exponential {
    /// Create a new exponential distribution
    ///
    /// # Arguments
    /// - rate: λ > 0, rate or inverse scale
    ///
    /// # Example
    ///
    /// ```rust
    /// # use expdist::dist::{ErrorKind, Exponential};
    /// assert!(Exponential::new(1.5).is_ok());
    ///
    /// let err = Exponential::new(0.0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidDomain);
    ///
    /// let err = Exponential::new(f64::NAN).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidType);
    /// ```
    #[inline]
    pub fn new<T: AsReal>(rate: T) -> Result<Self, ExponentialError> {
        validate_rate(rate).map(Self::new_unchecked)
    }

    /// Creates a new Exponential without checking whether the parameter is
    /// valid.
    #[inline]
    pub fn new_unchecked(rate: f64) -> Self {
        Exponential { rate }
    }

    /// Get the rate parameter
    ///
    /// # Example
    ///
    /// ```rust
    /// # use expdist::dist::Exponential;
    /// let expon = Exponential::new(1.3).unwrap();
    /// assert_eq!(expon.rate(), 1.3);
    /// ```
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Set the rate parameter
    ///
    /// # Example
    /// ```rust
    /// # use expdist::dist::Exponential;
    /// let mut expon = Exponential::new(1.3).unwrap();
    /// assert_eq!(expon.rate(), 1.3);
    ///
    /// expon.set_rate(2.1).unwrap();
    /// assert_eq!(expon.rate(), 2.1);
    /// ```
    ///
    /// Will error for invalid values, leaving the rate unchanged
    ///
    /// ```rust
    /// # use expdist::dist::Exponential;
    /// # let mut expon = Exponential::new(1.3).unwrap();
    /// assert!(expon.set_rate(2.1).is_ok());
    /// assert!(expon.set_rate(10).is_ok());
    /// assert!(expon.set_rate(0.0).is_err());
    /// assert!(expon.set_rate(-1.0).is_err());
    /// assert!(expon.set_rate(f64::INFINITY).is_err());
    /// assert!(expon.set_rate(f64::NAN).is_err());
    /// assert!(expon.set_rate("5").is_err());
    /// assert!(expon.set_rate(true).is_err());
    /// assert_eq!(expon.rate(), 10.0);
    /// ```
    #[inline]
    pub fn set_rate<T: AsReal>(
        &mut self,
        rate: T,
    ) -> Result<(), ExponentialError> {
        let rate = validate_rate(rate)?;
        self.set_rate_unchecked(rate);
        Ok(())
    }

    /// Set the rate parameter without input validation
    #[inline]
    pub fn set_rate_unchecked(&mut self, rate: f64) {
        self.rate = rate;
    }

    /// The support of the distribution, [0, ∞)
    ///
    /// # Example
    ///
    /// ```rust
    /// # use expdist::dist::Exponential;
    /// let expon = Exponential::new(3.0).unwrap();
    /// assert_eq!(expon.support(), (0.0, f64::INFINITY));
    /// ```
    #[inline]
    pub fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    /// Returns the probability density function, λ exp(-λx), at the current
    /// rate. Later changes to the rate do not affect the returned function.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use expdist::dist::Exponential;
    /// let mut expon = Exponential::new(2.0).unwrap();
    /// let pdf = expon.pdf_fn();
    ///
    /// expon.set_rate(4.0).unwrap();
    /// assert_eq!(pdf(0.0), 2.0);
    /// assert_eq!(expon.pdf_fn()(0.0), 4.0);
    /// ```
    pub fn pdf_fn(&self) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
        let rate = self.rate;
        move |x| pdf_at(rate, x)
    }

    /// Returns the cumulative distribution function, 1 - exp(-λx), at the
    /// current rate
    pub fn cdf_fn(&self) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
        let rate = self.rate;
        move |x| cdf_at(rate, x)
    }

    /// Returns the quantile function, -ln(1 - p) / λ, at the current rate
    pub fn inv_fn(&self) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
        let rate = self.rate;
        move |p| quantile_at(rate, p)
    }

    /// Evaluate `func` at each element of `xs`.
    ///
    /// Elements are checked in order. The first element that is not a
    /// finite real number raises `InvalidType`, and the first that is
    /// outside of the domain of `func` raises `InvalidDomain`, whichever
    /// comes first. Nothing is returned on error.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use expdist::dist::{ErrorKind, Exponential, Function};
    /// let expon = Exponential::default();
    ///
    /// let fx = expon.evaluate(Function::Pdf, &[0.0, 1.0]).unwrap();
    /// assert_eq!(fx, vec![1.0, (-1.0_f64).exp()]);
    ///
    /// // The negative value comes before the NaN
    /// let err = expon.evaluate(Function::Cdf, &[1.0, -1.0, f64::NAN]);
    /// assert_eq!(err.unwrap_err().kind(), ErrorKind::InvalidDomain);
    /// ```
    pub fn evaluate<T: AsReal>(
        &self,
        func: Function,
        xs: &[T],
    ) -> Result<Vec<f64>, ExponentialError> {
        let op = func.operation();
        xs.iter()
            .enumerate()
            .map(|(ix, x)| {
                let x = x.as_finite_real().ok_or(
                    ExponentialError::InvalidType {
                        op,
                        index: Some(ix),
                    },
                )?;
                if func.domain_contains(x) {
                    Ok(func.eval(self.rate, x))
                } else {
                    Err(ExponentialError::InvalidDomain {
                        op,
                        value: x,
                        index: Some(ix),
                    })
                }
            })
            .collect()
    }

    /// Evaluate `func` at each element of a dynamically typed sequence.
    ///
    /// Raises `InvalidType` if `arg` is not a sequence; otherwise behaves
    /// as [`Exponential::evaluate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// # use expdist::prelude::*;
    /// let expon = Exponential::default();
    ///
    /// let xs = Datum::Compound(vec![Datum::F64(0.0), Datum::U8(1)]);
    /// assert!(expon.evaluate_datum(Function::Cdf, &xs).is_ok());
    ///
    /// let err = expon.evaluate_datum(Function::Cdf, &Datum::F64(0.5));
    /// assert_eq!(err.unwrap_err().kind(), ErrorKind::InvalidType);
    /// ```
    pub fn evaluate_datum(
        &self,
        func: Function,
        arg: &Datum,
    ) -> Result<Vec<f64>, ExponentialError> {
        match arg {
            Datum::Vec(xs) => self.evaluate(func, xs.as_slice()),
            Datum::Compound(xs) => self.evaluate(func, xs.as_slice()),
            _ => Err(ExponentialError::InvalidType {
                op: func.operation(),
                index: None,
            }),
        }
    }

    /// Evaluate the PDF at each element of `xs`, which must be non-negative
    pub fn pdf_each<T: AsReal>(
        &self,
        xs: &[T],
    ) -> Result<Vec<f64>, ExponentialError> {
        self.evaluate(Function::Pdf, xs)
    }

    /// Evaluate the CDF at each element of `xs`, which must be non-negative
    pub fn cdf_each<T: AsReal>(
        &self,
        xs: &[T],
    ) -> Result<Vec<f64>, ExponentialError> {
        self.evaluate(Function::Cdf, xs)
    }

    /// Evaluate the quantile function at each element of `ps`, which must be
    /// in [0, 1]
    pub fn inv_each<T: AsReal>(
        &self,
        ps: &[T],
    ) -> Result<Vec<f64>, ExponentialError> {
        self.evaluate(Function::Inv, ps)
    }

    /// Evaluate the PDF at each element of a dynamically typed sequence
    pub fn pdf_datum(&self, arg: &Datum) -> Result<Vec<f64>, ExponentialError> {
        self.evaluate_datum(Function::Pdf, arg)
    }

    /// Evaluate the CDF at each element of a dynamically typed sequence
    pub fn cdf_datum(&self, arg: &Datum) -> Result<Vec<f64>, ExponentialError> {
        self.evaluate_datum(Function::Cdf, arg)
    }

    /// Evaluate the quantile function at each element of a dynamically
    /// typed sequence
    pub fn inv_datum(&self, arg: &Datum) -> Result<Vec<f64>, ExponentialError> {
        self.evaluate_datum(Function::Inv, arg)
    }
}

impl From<&Exponential> for String {
    fn from(expon: &Exponential) -> String {
        format!("Expon(λ: {})", expon.rate)
    }
}

impl_display!(Exponential);

macro_rules! impl_traits {
    ($kind:ty) => {
        impl HasDensity<$kind> for Exponential {
            fn ln_f(&self, x: &$kind) -> f64 {
                // TODO: could cache ln(rate)
                if x < &0.0 {
                    f64::NEG_INFINITY
                } else {
                    self.rate.mul_add(-f64::from(*x), self.rate.ln())
                }
            }
        }

        impl Support<$kind> for Exponential {
            fn supports(&self, x: &$kind) -> bool {
                *x >= 0.0 && x.is_finite()
            }
        }

        impl ContinuousDistr<$kind> for Exponential {}

        impl Cdf<$kind> for Exponential {
            fn cdf(&self, x: &$kind) -> f64 {
                if x < &0.0 {
                    0.0
                } else {
                    cdf_at(self.rate, f64::from(*x))
                }
            }

            fn sf(&self, x: &$kind) -> f64 {
                if x < &0.0 {
                    1.0
                } else {
                    (-self.rate * f64::from(*x)).exp()
                }
            }
        }

        impl InverseCdf<$kind> for Exponential {
            fn invcdf(&self, p: f64) -> $kind {
                quantile_at(self.rate, p) as $kind
            }
        }

        impl Mean<$kind> for Exponential {
            fn mean(&self) -> Option<$kind> {
                Some(self.rate.recip() as $kind)
            }
        }

        impl Median<$kind> for Exponential {
            fn median(&self) -> Option<$kind> {
                Some((LN_2 / self.rate) as $kind)
            }
        }

        impl Mode<$kind> for Exponential {
            fn mode(&self) -> Option<$kind> {
                Some(0.0)
            }
        }

        impl Variance<$kind> for Exponential {
            fn variance(&self) -> Option<$kind> {
                Some((self.rate * self.rate).recip() as $kind)
            }
        }
    };
}

impl Skewness for Exponential {
    fn skewness(&self) -> Option<f64> {
        Some(2.0)
    }
}

impl Kurtosis for Exponential {
    fn kurtosis(&self) -> Option<f64> {
        Some(6.0)
    }
}

impl Entropy for Exponential {
    fn entropy(&self) -> f64 {
        1.0 - self.rate.ln()
    }
}

impl FisherInformation for Exponential {
    fn information(&self) -> f64 {
        (self.rate * self.rate).recip()
    }
}

impl KlDivergence for Exponential {
    fn kl(&self, other: &Self) -> f64 {
        self.rate.ln() - other.rate.ln() + other.rate / self.rate - 1.0
    }
}

impl_traits!(f64);
impl_traits!(f32);

impl std::error::Error for ExponentialError {}

impl fmt::Display for ExponentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType {
                op: Operation::Rate,
                ..
            } => write!(f, "rate: the rate must be a finite number"),
            Self::InvalidType { op, index: None } => {
                write!(f, "{}: argument must be a sequence", op)
            }
            Self::InvalidType {
                op,
                index: Some(ix),
            } => write!(f, "{}: element {} is not a finite number", op, ix),
            Self::InvalidDomain {
                op: Operation::Rate,
                value,
                ..
            } => write!(f, "rate ({}) must be greater than zero", value),
            Self::InvalidDomain { op, value, index } => {
                let domain = match op {
                    Operation::Inv => "[0, 1]",
                    _ => "[0, ∞)",
                };
                match index {
                    Some(ix) => write!(
                        f,
                        "{}: element {} ({}) is outside of the domain {}",
                        op, ix, value, domain
                    ),
                    None => write!(
                        f,
                        "{}: {} is outside of the domain {}",
                        op, value, domain
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_basic_impls;
    use proptest::prelude::*;
    use std::f64::consts::E;

    const TOL: f64 = 1E-12;

    test_basic_impls!(Exponential::default());

    #[test]
    fn default_rate_is_one() {
        assert_eq!(Exponential::default().rate(), 1.0);
    }

    #[test]
    fn new() {
        let expon = Exponential::new(1.5).unwrap();
        assert::close(expon.rate, 1.5, TOL);
    }

    #[test]
    fn new_should_reject_non_finite_rate() {
        assert!(Exponential::new(1.5).is_ok());
        assert!(Exponential::new(f64::NAN).is_err());
        assert!(Exponential::new(f64::INFINITY).is_err());
        assert!(Exponential::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn new_should_reject_leq_0_rate() {
        assert!(Exponential::new(f64::MIN_POSITIVE).is_ok());
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-f64::MIN_POSITIVE).is_err());
    }

    #[test]
    fn set_rate_reports_type_before_domain() {
        let mut expon = Exponential::default();
        let err = expon.set_rate(f64::NEG_INFINITY).unwrap_err();
        assert_eq!(
            err,
            ExponentialError::InvalidType {
                op: Operation::Rate,
                index: None
            }
        );

        let err = expon.set_rate(-1.0).unwrap_err();
        assert_eq!(
            err,
            ExponentialError::InvalidDomain {
                op: Operation::Rate,
                value: -1.0,
                index: None
            }
        );
    }

    #[test]
    fn failed_set_rate_keeps_rate() {
        let mut expon = Exponential::new(3.0).unwrap();
        assert!(expon.set_rate(0.0).is_err());
        assert!(expon.set_rate(Datum::Null).is_err());
        assert_eq!(expon.rate(), 3.0);
    }

    #[test]
    fn ln_f() {
        let expon = Exponential::new_unchecked(1.5);
        assert::close(expon.ln_f(&1.2_f64), -1.394_534_891_891_835_7, TOL);
        assert::close(expon.ln_f(&0.2_f64), 0.105_465_108_108_164_4, TOL);
        assert::close(expon.ln_f(&4.4_f64), -6.194_534_891_891_836, TOL);
        assert_eq!(expon.ln_f(&-1.0_f64), f64::NEG_INFINITY);
    }

    #[test]
    fn ln_pdf() {
        let expon = Exponential::new(1.5).unwrap();
        assert::close(expon.ln_pdf(&1.2_f64), -1.394_534_891_891_835_7, TOL);
        assert::close(expon.ln_pdf(&0.2_f64), 0.105_465_108_108_164_4, TOL);
        assert::close(expon.ln_pdf(&4.4_f64), -6.194_534_891_891_836, TOL);
        assert_eq!(expon.pdf(&-1.0_f64), 0.0);
    }

    #[test]
    fn cdf() {
        let expon = Exponential::new(1.5).unwrap();
        assert::close(expon.cdf(&1.2_f64), 0.834_701_111_778_413_4, TOL);
        assert::close(expon.cdf(&0.2_f64), 0.259_181_779_318_282_2, TOL);
        assert::close(expon.cdf(&4.4_f64), 0.998_639_631_962_452_1, TOL);
        assert_eq!(expon.cdf(&-1.0_f64), 0.0);
    }

    #[test]
    fn sf_complements_cdf() {
        let expon = Exponential::new(1.5).unwrap();
        for x in [0.0_f64, 0.2, 1.2, 4.4] {
            assert::close(expon.sf(&x) + expon.cdf(&x), 1.0, TOL);
        }
    }

    #[test]
    fn mean() {
        let m: f64 = Exponential::new(1.5).unwrap().mean().unwrap();
        assert::close(m, 0.666_666_666_666_666_6, TOL);
    }

    #[test]
    fn median() {
        let m: f64 = Exponential::new(1.5).unwrap().median().unwrap();
        assert::close(m, 0.462_098_120_373_296_84, TOL);
    }

    #[test]
    fn mode() {
        let m: f64 = Exponential::new(1.5).unwrap().mode().unwrap();
        assert::close(m, 0.0, TOL);
    }

    #[test]
    fn variance() {
        let v: f64 = Exponential::new(1.5).unwrap().variance().unwrap();
        assert::close(v, 0.444_444_444_444_444_4, TOL);
    }

    #[test]
    fn f32_moments() {
        let expon = Exponential::new(2.0).unwrap();
        let m: f32 = expon.mean().unwrap();
        let v: f32 = expon.variance().unwrap();
        assert_eq!(m, 0.5);
        assert_eq!(v, 0.25);
    }

    #[test]
    fn skewness() {
        let s = Exponential::new(1.5).unwrap().skewness().unwrap();
        assert::close(s, 2.0, TOL);
    }

    #[test]
    fn kurtosis() {
        let k = Exponential::new(1.5).unwrap().kurtosis().unwrap();
        assert::close(k, 6.0, TOL);
    }

    #[test]
    fn entropy() {
        let h = Exponential::new(1.5).unwrap().entropy();
        assert::close(h, 0.594_534_891_891_835_6, TOL);
    }

    #[test]
    fn entropy_is_zero_at_e() {
        let h = Exponential::new(E).unwrap().entropy();
        assert::close(h, 0.0, TOL);
    }

    #[test]
    fn information_equals_variance() {
        let expon = Exponential::new(1.5).unwrap();
        let v: f64 = expon.variance().unwrap();
        assert_eq!(expon.information(), v);
    }

    #[test]
    fn quantile() {
        let expon = Exponential::new(1.5).unwrap();
        let q25: f64 = expon.quantile(0.25);
        let q75: f64 = expon.quantile(0.75);
        assert::close(q25, 0.191_788_048_301_187_26, TOL);
        assert::close(q75, 0.924_196_240_746_593_7, TOL);
    }

    #[test]
    fn kl_of_self_is_zero() {
        let expon = Exponential::new(1.5).unwrap();
        assert::close(expon.kl(&expon), 0.0, TOL);
    }

    #[test]
    fn kl_known_value() {
        // KL(Exp(1) || Exp(2)) = ln(1) - ln(2) + 2 - 1
        let p = Exponential::new(1.0).unwrap();
        let q = Exponential::new(2.0).unwrap();
        assert::close(p.kl(&q), 1.0 - LN_2, TOL);
        assert!(p.kl_sym(&q) > 0.0);
    }

    #[test]
    fn evaluators_agree_with_traits() {
        let expon = Exponential::new(1.5).unwrap();
        let pdf = expon.pdf_fn();
        let cdf = expon.cdf_fn();
        let inv = expon.inv_fn();
        for x in [0.0_f64, 0.2, 1.2, 4.4] {
            assert::close(pdf(x), expon.pdf(&x), TOL);
            assert::close(cdf(x), expon.cdf(&x), TOL);
        }
        assert::close(inv(0.25), InverseCdf::<f64>::quantile(&expon, 0.25), TOL);
    }

    #[test]
    fn evaluators_snapshot_rate() {
        let mut expon = Exponential::new(1.0).unwrap();
        let cdf = expon.cdf_fn();
        let inv = expon.inv_fn();
        expon.set_rate(5.0).unwrap();
        assert::close(cdf(1.0), 1.0 - (-1.0_f64).exp(), TOL);
        assert::close(inv(0.5), LN_2, TOL);
        assert::close(expon.inv_fn()(0.5), LN_2 / 5.0, TOL);
    }

    #[test]
    fn evaluate_reports_first_offending_element() {
        let expon = Exponential::default();
        let err = expon
            .evaluate(Function::Pdf, &[Datum::F64(1.0), Datum::Bool(true)])
            .unwrap_err();
        assert_eq!(
            err,
            ExponentialError::InvalidType {
                op: Operation::Pdf,
                index: Some(1)
            }
        );

        let err = expon
            .evaluate(
                Function::Pdf,
                &[Datum::F64(-2.0), Datum::from("x"), Datum::F64(1.0)],
            )
            .unwrap_err();
        assert_eq!(
            err,
            ExponentialError::InvalidDomain {
                op: Operation::Pdf,
                value: -2.0,
                index: Some(0)
            }
        );
    }

    #[test]
    fn evaluate_empty_sequence() {
        let expon = Exponential::default();
        let empty: [f64; 0] = [];
        assert!(expon.evaluate(Function::Inv, &empty).unwrap().is_empty());
    }

    #[test]
    fn inv_boundaries() {
        let expon = Exponential::new(2.0).unwrap();
        let qs = expon.inv_each(&[0.0, 1.0]).unwrap();
        assert_eq!(qs[0], 0.0);
        assert_eq!(qs[1], f64::INFINITY);
        assert_eq!(
            expon.inv_each(&[1.01]).unwrap_err().kind(),
            ErrorKind::InvalidDomain
        );
        assert_eq!(
            expon.inv_each(&[-0.01]).unwrap_err().kind(),
            ErrorKind::InvalidDomain
        );
    }

    #[test]
    fn evaluate_rejects_infinite_elements() {
        let expon = Exponential::default();
        for func in [Function::Pdf, Function::Cdf, Function::Inv] {
            for x in [f64::INFINITY, f64::NEG_INFINITY] {
                let err = expon.evaluate(func, &[x]).unwrap_err();
                assert_eq!(
                    err,
                    ExponentialError::InvalidType {
                        op: func.operation(),
                        index: Some(0)
                    }
                );
            }
        }
    }

    #[test]
    fn evaluate_negative_before_infinite_is_domain_error() {
        let expon = Exponential::default();
        for func in [Function::Pdf, Function::Cdf, Function::Inv] {
            let err = expon
                .evaluate(func, &[-1.0, f64::INFINITY])
                .unwrap_err();
            assert_eq!(
                err,
                ExponentialError::InvalidDomain {
                    op: func.operation(),
                    value: -1.0,
                    index: Some(0)
                }
            );
        }
    }

    #[test]
    fn evaluate_datum_rejects_scalars() {
        let expon = Exponential::default();
        for arg in [Datum::F64(1.0), Datum::Null, Datum::from("a")] {
            let err = expon.evaluate_datum(Function::Inv, &arg).unwrap_err();
            assert_eq!(
                err,
                ExponentialError::InvalidType {
                    op: Operation::Inv,
                    index: None
                }
            );
        }
    }

    #[test]
    fn error_display() {
        let expon = Exponential::default();
        let err = expon.cdf_each(&[0.5, -1.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cdf: element 1 (-1) is outside of the domain [0, ∞)"
        );
        let err = Exponential::new(-2.0).unwrap_err();
        assert_eq!(err.to_string(), "rate (-2) must be greater than zero");
    }

    #[test]
    fn display() {
        let expon = Exponential::new(2.5).unwrap();
        assert_eq!(expon.to_string(), "Expon(λ: 2.5)");
    }

    proptest! {
        #[test]
        fn cdf_and_inv_are_inverses(rate in 0.1_f64..10.0, u in 0.0_f64..5.0) {
            let expon = Exponential::new(rate).unwrap();
            let x = u / rate;
            let p = expon.cdf_each(&[x]).unwrap()[0];
            let y = expon.inv_each(&[p]).unwrap()[0];
            prop_assert!((x - y).abs() < 1E-9 * x.max(1.0));
        }

        #[test]
        fn moments_follow_rate(rate in 1E-3_f64..1E3) {
            let expon = Exponential::new(rate).unwrap();
            let mean: f64 = expon.mean().unwrap();
            let var: f64 = expon.variance().unwrap();
            prop_assert_eq!(mean, 1.0 / rate);
            prop_assert_eq!(var, 1.0 / (rate * rate));
            prop_assert_eq!(expon.information(), var);
            prop_assert_eq!(expon.support(), (0.0, f64::INFINITY));
        }

        #[test]
        fn pdf_is_positive_on_support(rate in 0.1_f64..10.0, x in 0.0_f64..10.0) {
            let expon = Exponential::new(rate).unwrap();
            let fx = expon.pdf_each(&[x]).unwrap()[0];
            prop_assert!(fx > 0.0 && fx <= rate);
        }
    }
}
