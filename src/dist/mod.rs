//! Probability distributions
mod exponential;

pub use self::exponential::{
    ErrorKind, Exponential, ExponentialError, Function, Operation,
};
