//! Matrix algebra and matrix powers.

pub mod matrix;
pub mod ops;
pub mod power;

pub use matrix::{Matrix, MatrixError};
#[allow(unused_imports)]
pub use ops::*;
pub use power::*;
