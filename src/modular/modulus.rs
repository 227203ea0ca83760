//! The supported modulus contexts.
//!
//! A [Modulus] type decides where the modulus of a [ModularNumber] comes
//! from: a constant folded into the type, or the single process-wide
//! runtime slot.
//!
//! [ModularNumber]: crate::modular::ModularNumber

use std::{fmt::Debug, sync::OnceLock};
use thiserror::Error;

/// A type that supplies the modulus in force for modular values.
///
/// Implementations are zero-sized markers selected as a type parameter, so
/// values carrying different moduli are different types and cannot be
/// mixed accidentally.
pub trait Modulus:
    Clone + Copy + Debug + Default + PartialEq + Eq + PartialOrd + Ord + Send + Sync + 'static
{
    /// The modulus value. Always positive.
    fn modulus() -> u64;
}

/// Defines a marker type with a compile-time constant modulus.
///
/// ```
/// use modmath_lib::{const_modulus, modular::Modulus};
///
/// const_modulus!(P17 = 17);
/// assert_eq!(P17::modulus(), 17);
/// ```
#[macro_export]
macro_rules! const_modulus {
    ($name:ident = $value:literal) => {
        #[doc = concat!("The constant modulus ", stringify!($value), ".")]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name;

        impl $crate::modular::Modulus for $name {
            fn modulus() -> u64 {
                $value
            }
        }
    };
}

const_modulus!(Mod1000000007 = 1000000007);
const_modulus!(Mod998244353 = 998244353);

static RUNTIME_MODULUS: OnceLock<u64> = OnceLock::new();

/// The process-wide runtime modulus.
///
/// [RuntimeModulus::set] must be called exactly once, before any value
/// typed over [RuntimeModulus] is constructed or operated on; the modulus
/// cannot change afterwards. The once-only slot orders the write before
/// every read, so concurrent readers are safe once initialization is done.
///
/// ```
/// use modmath_lib::modular::{Modulus, RuntimeModulus};
///
/// # fn main() -> anyhow::Result<()> {
/// RuntimeModulus::set(10007)?;
/// assert_eq!(RuntimeModulus::modulus(), 10007);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeModulus;

impl RuntimeModulus {
    /// Sets the process-wide modulus.
    pub fn set(modulus: u64) -> Result<(), ModulusAlreadySet> {
        RUNTIME_MODULUS
            .set(modulus)
            .map_err(|_| ModulusAlreadySet { current: RUNTIME_MODULUS.get().copied().unwrap_or(modulus) })
    }

    /// Returns the modulus if it has been set.
    pub fn get() -> Option<u64> {
        RUNTIME_MODULUS.get().copied()
    }
}

impl Modulus for RuntimeModulus {
    // Reading before the single `set` call is a programmer error, not a
    // recoverable condition.
    #[allow(clippy::expect_used)]
    fn modulus() -> u64 {
        *RUNTIME_MODULUS.get().expect("runtime modulus read before RuntimeModulus::set")
    }
}

/// The runtime modulus was set more than once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("runtime modulus already set to {current}")]
pub struct ModulusAlreadySet {
    /// The value the slot already holds.
    pub current: u64,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_support::{init_runtime_modulus, TEST_RUNTIME_MODULUS};

    #[test]
    fn constant_moduli() {
        assert_eq!(Mod1000000007::modulus(), 1000000007);
        assert_eq!(Mod998244353::modulus(), 998244353);
    }

    #[test]
    fn runtime_modulus_set_once() {
        init_runtime_modulus();
        assert_eq!(RuntimeModulus::get(), Some(TEST_RUNTIME_MODULUS));
        let result = RuntimeModulus::set(999);
        assert_eq!(result, Err(ModulusAlreadySet { current: TEST_RUNTIME_MODULUS }));
        assert_eq!(RuntimeModulus::modulus(), TEST_RUNTIME_MODULUS);
    }
}
