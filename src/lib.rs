//! The exponential distribution, Exp(λ), over x in [0, ∞).
//!
//! `expdist` provides the closed-form properties of the distribution (mean,
//! variance, median, mode, skewness, excess kurtosis, entropy, and Fisher
//! information) along with its density, cumulative distribution, and
//! quantile functions. Each function can be taken as a standalone evaluator
//! or mapped over a sequence of inputs with validation.
//!
//! # Example
//!
//! ```rust
//! use expdist::prelude::*;
//!
//! let mut expon = Exponential::default();
//! expon.set_rate(10.0).unwrap();
//!
//! let mean: f64 = expon.mean().unwrap();
//! assert_eq!(mean, 0.1);
//!
//! // Evaluators capture the rate at the time they are created
//! let pdf = expon.pdf_fn();
//! expon.set_rate(2.0).unwrap();
//! assert_eq!(pdf(0.0), 10.0);
//!
//! // Vector forms validate their input
//! let ps = expon.cdf_each(&[0.0, 1.0]).unwrap();
//! assert_eq!(ps[0], 0.0);
//! assert!(expon.cdf_each(&[-1.0]).is_err());
//! ```
#![warn(clippy::all, clippy::imprecise_flops, clippy::suboptimal_flops)]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Implements `Display` through an existing `From<&T> for String`
#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}

pub mod data;
pub mod dist;
pub mod prelude;
pub mod traits;

#[cfg(test)]
mod test;
