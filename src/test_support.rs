//! Shared helpers for the crate's tests.

use crate::modular::{Modulus, RuntimeModulus};

/// Every test that touches the process-wide runtime slot agrees on this
/// value; the slot can only be written once per process.
pub(crate) const TEST_RUNTIME_MODULUS: u64 = 1000000007;

pub(crate) fn init_runtime_modulus() {
    let _ = RuntimeModulus::set(TEST_RUNTIME_MODULUS);
    assert_eq!(RuntimeModulus::modulus(), TEST_RUNTIME_MODULUS);
}
