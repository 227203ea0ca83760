//! Binomial coefficients under a prime modulus.

pub mod lucas;
pub mod table;

pub use lucas::LucasBinomial;
pub use table::{BinomialError, BinomialTable};
