//! ModularNumber operations.

use super::{add_mod, pow_mod, sub_mod, ModularNumber, Modulus, MulReduce};
use num_traits::{One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

impl<M: Modulus, W: MulReduce> Add for ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn add(self, other: ModularNumber<M, W>) -> ModularNumber<M, W> {
        (&self).add(&other)
    }
}

impl<M: Modulus, W: MulReduce> Add<&ModularNumber<M, W>> for ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn add(self, other: &ModularNumber<M, W>) -> ModularNumber<M, W> {
        (&self).add(other)
    }
}

impl<M: Modulus, W: MulReduce> Add for &ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn add(self, other: &ModularNumber<M, W>) -> ModularNumber<M, W> {
        // The sum is already in range, so skip the constructor's reduction.
        ModularNumber::from_reduced(add_mod(self.value, other.value, M::modulus()))
    }
}

impl<M: Modulus, W: MulReduce> Sub for ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn sub(self, other: ModularNumber<M, W>) -> ModularNumber<M, W> {
        (&self).sub(&other)
    }
}

impl<M: Modulus, W: MulReduce> Sub<&ModularNumber<M, W>> for ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn sub(self, other: &ModularNumber<M, W>) -> ModularNumber<M, W> {
        (&self).sub(other)
    }
}

impl<M: Modulus, W: MulReduce> Sub for &ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn sub(self, other: &ModularNumber<M, W>) -> ModularNumber<M, W> {
        ModularNumber::from_reduced(sub_mod(self.value, other.value, M::modulus()))
    }
}

impl<M: Modulus, W: MulReduce> Mul for ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn mul(self, other: ModularNumber<M, W>) -> ModularNumber<M, W> {
        (&self).mul(&other)
    }
}

impl<M: Modulus, W: MulReduce> Mul<&ModularNumber<M, W>> for ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn mul(self, other: &ModularNumber<M, W>) -> ModularNumber<M, W> {
        (&self).mul(other)
    }
}

impl<M: Modulus, W: MulReduce> Mul for &ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn mul(self, other: &ModularNumber<M, W>) -> ModularNumber<M, W> {
        ModularNumber::from_reduced(W::mul_mod(self.value, other.value, M::modulus()))
    }
}

impl<M: Modulus, W: MulReduce> Neg for ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn neg(self) -> Self::Output {
        (&self).neg()
    }
}

impl<M: Modulus, W: MulReduce> Neg for &ModularNumber<M, W> {
    type Output = ModularNumber<M, W>;

    fn neg(self) -> Self::Output {
        ModularNumber::from_reduced(sub_mod(0, self.value, M::modulus()))
    }
}

impl<M: Modulus, W: MulReduce> ModularNumber<M, W> {
    /// Raises this number to the given power by square-and-multiply.
    pub fn pow(self, exponent: u64) -> Self {
        Self::from_reduced(pow_mod::<W>(self.value, exponent, M::modulus()))
    }
}

impl<M: Modulus, W: MulReduce> Zero for ModularNumber<M, W> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<M: Modulus, W: MulReduce> One for ModularNumber<M, W> {
    fn one() -> Self {
        ModularNumber::one()
    }
}
