//! Traits describing the properties of a probability distribution
//!
//! Point-wise methods on these traits do no input validation; they are the
//! fast path for callers that already know their inputs are well-formed. The
//! validating, sequence-oriented surface lives on the distributions
//! themselves.

/// A distribution with a (possibly un-normalized) density
pub trait HasDensity<X> {
    /// Probability function
    ///
    /// # Example
    ///
    /// ```
    /// use expdist::dist::Exponential;
    /// use expdist::traits::HasDensity;
    ///
    /// let expon = Exponential::new(2.0).unwrap();
    /// assert!((expon.f(&0.0_f64) - 2.0).abs() < 1E-12);
    /// ```
    fn f(&self, x: &X) -> f64 {
        self.ln_f(x).exp()
    }

    /// Natural log of the probability function
    fn ln_f(&self, x: &X) -> f64;
}

/// Identifies the support of the distribution
pub trait Support<X> {
    /// Returns `true` if `x` is in the support of the distribution
    ///
    /// # Example
    ///
    /// ```
    /// use expdist::dist::Exponential;
    /// use expdist::traits::Support;
    ///
    /// let expon = Exponential::default();
    /// assert!(expon.supports(&0.0_f64));
    /// assert!(!expon.supports(&-0.1_f64));
    /// assert!(!expon.supports(&f64::INFINITY));
    /// ```
    fn supports(&self, x: &X) -> bool;
}

/// A continuous probability distribution
pub trait ContinuousDistr<X>: HasDensity<X> + Support<X> {
    /// The value of the Probability Density Function (PDF) at `x`. Zero
    /// outside of the support.
    fn pdf(&self, x: &X) -> f64 {
        self.ln_pdf(x).exp()
    }

    /// The value of the log Probability Density Function (PDF) at `x`
    fn ln_pdf(&self, x: &X) -> f64 {
        if self.supports(x) {
            self.ln_f(x)
        } else {
            f64::NEG_INFINITY
        }
    }
}

/// Has a cumulative distribution function (CDF)
pub trait Cdf<X>: HasDensity<X> {
    /// The value of the Cumulative Density Function at `x`
    fn cdf(&self, x: &X) -> f64;

    /// Survival function, `1 - CDF(x)`
    fn sf(&self, x: &X) -> f64 {
        1.0 - self.cdf(x)
    }
}

/// Has an inverse-CDF / quantile function
pub trait InverseCdf<X>: HasDensity<X> {
    /// The value of the `x` at the given probability in the CDF
    ///
    /// # Example
    ///
    /// ```
    /// use expdist::dist::Exponential;
    /// use expdist::traits::InverseCdf;
    ///
    /// let expon = Exponential::default();
    /// let x: f64 = expon.invcdf(0.5);
    /// assert!((x - 2.0_f64.ln()).abs() < 1E-12);
    /// ```
    fn invcdf(&self, p: f64) -> X;

    /// Alias for `invcdf`
    fn quantile(&self, p: f64) -> X {
        self.invcdf(p)
    }
}

/// Defines the distribution mean
pub trait Mean<X> {
    /// Returns `None` if the mean is undefined
    fn mean(&self) -> Option<X>;
}

/// Defines the distribution median
pub trait Median<X> {
    /// Returns `None` if the median is undefined
    fn median(&self) -> Option<X>;
}

/// Defines the distribution mode
pub trait Mode<X> {
    /// Returns `None` if the mode is undefined or is not a single value
    fn mode(&self) -> Option<X>;
}

/// Defines the distribution variance
pub trait Variance<X> {
    /// Returns `None` if the variance is undefined
    fn variance(&self) -> Option<X>;
}

/// Defines the entropy of the distribution
pub trait Entropy {
    /// The entropy, in nats
    fn entropy(&self) -> f64;
}

/// Defines the skewness of the distribution
pub trait Skewness {
    fn skewness(&self) -> Option<f64>;
}

/// Defines the kurtosis of the distribution
pub trait Kurtosis {
    /// The excess kurtosis, i.e. kurtosis - 3
    fn kurtosis(&self) -> Option<f64>;
}

/// Defines the Fisher information of the distribution's parameter
pub trait FisherInformation {
    fn information(&self) -> f64;
}

/// Kullback-Leibler divergence between two distributions of the same family
pub trait KlDivergence {
    /// The KL divergence, KL(self || other)
    fn kl(&self, other: &Self) -> f64;

    /// Symmetrized divergence, KL(self || other) + KL(other || self)
    fn kl_sym(&self, other: &Self) -> f64 {
        self.kl(other) + other.kl(self)
    }
}
