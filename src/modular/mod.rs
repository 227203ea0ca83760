//! Modular integers and the multiply-reduce strategies behind them.

pub mod modular;
pub mod modulus;
pub mod mulmod;
pub mod ops;

pub use modular::*;
pub use modulus::*;
pub use mulmod::*;
#[allow(unused_imports)]
pub use ops::*;
