//! Modular integers.

use super::{Modulus, MulReduce, NativeWide};
use rand::Rng;
use std::{
    fmt::{Debug, Display, Formatter},
    marker::PhantomData,
};

/// A number that performs modular arithmetic in every operation.
///
/// `ModularNumber<M, W>` keeps its value reduced into `[0, modulus)`, with
/// the modulus supplied by the marker type `M` and every multiplication
/// routed through the [MulReduce] strategy `W`. Swapping either parameter
/// never changes results, only where the modulus comes from and how the
/// double-width product is computed.
///
/// # Examples
///
/// ```
/// use modmath_lib::modular::{Mod1000000007, ModularNumber};
///
/// let two = ModularNumber::<Mod1000000007>::new(2);
/// let one = ModularNumber::one();
/// let three = two + &one;
/// let six = three * &two;
///
/// assert_eq!(six, ModularNumber::new(6));
/// ```
///
/// Values under a modulus chosen at startup use [RuntimeModulus] instead of
/// a constant type, with the same API.
///
/// [RuntimeModulus]: crate::modular::RuntimeModulus
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModularNumber<M: Modulus, W: MulReduce = NativeWide> {
    pub(crate) value: u64,
    pub(crate) _context: PhantomData<(M, W)>,
}

impl<M: Modulus, W: MulReduce> ModularNumber<M, W> {
    /// The zero value.
    pub const ZERO: Self = ModularNumber { value: 0, _context: PhantomData };

    /// Constructs a new modular number, reducing the value into range.
    pub fn new(value: u64) -> Self {
        let modulus = M::modulus();
        let value = if value >= modulus { value % modulus } else { value };
        ModularNumber { value, _context: PhantomData }
    }

    /// The value one, reduced.
    pub fn one() -> Self {
        Self::new(1)
    }

    /// The modulus in force for this type.
    pub fn modulus() -> u64 {
        M::modulus()
    }

    /// Returns the reduced value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Generates a random modular number.
    pub fn gen_random() -> Self {
        let mut rng = rand::thread_rng();
        Self::gen_random_with_rng(&mut rng)
    }

    /// Generates a random modular number using the provided generator.
    pub fn gen_random_with_rng<R: Rng>(rng: &mut R) -> Self {
        ModularNumber { value: rng.gen_range(0..M::modulus()), _context: PhantomData }
    }

    // Constructs from a value that is already reduced.
    pub(crate) fn from_reduced(value: u64) -> Self {
        ModularNumber { value, _context: PhantomData }
    }
}

impl<M: Modulus, W: MulReduce> Default for ModularNumber<M, W> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<M: Modulus, W: MulReduce> From<u64> for ModularNumber<M, W> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<M: Modulus, W: MulReduce> From<ModularNumber<M, W>> for u64 {
    fn from(value: ModularNumber<M, W>) -> Self {
        value.value()
    }
}

impl<M: Modulus, W: MulReduce> Debug for ModularNumber<M, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mod {}", self.value, M::modulus())
    }
}

impl<M: Modulus, W: MulReduce> Display for ModularNumber<M, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
