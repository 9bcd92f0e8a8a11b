//! Dimension vectors and the predicates that gate dimension-sensitive operations.
//!
//! A physical dimension is a vector of seven integer exponents, one per SI base quantity, in the fixed order
//! time, length, mass, current, temperature, amount, luminosity. It exists in two forms:
//!
//! - at the type level as [`Dim`], whose parameters are `typenum` integers. This is what [`Quantity`] carries and
//!   what the compiler reasons about;
//! - at run time as [`DimensionVector`], a plain value exposed through [`Dimension::VECTOR`] for formatting,
//!   diagnostics and dynamically tagged values.
//!
//! [`Quantity`]: crate::Quantity

use core::fmt;
use core::marker::PhantomData;
use typenum::{Integer, PartialDiv, P2, Z0};

// ─────────────────────────────────────────────────────────────────────────────
// Runtime mirror
// ─────────────────────────────────────────────────────────────────────────────

/// The seven SI base exponents of a dimension, as a runtime value.
///
/// Every derivation rule available at the type level has a `const fn` counterpart here that produces exactly the
/// same vector, so `<Product<A, B> as Dimension>::VECTOR == A::VECTOR.product(B::VECTOR)` always holds.
///
/// [`Product`]: crate::Product
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimensionVector {
    /// Exponent of the second.
    pub time: i32,
    /// Exponent of the metre.
    pub length: i32,
    /// Exponent of the kilogram.
    pub mass: i32,
    /// Exponent of the ampere.
    pub current: i32,
    /// Exponent of the kelvin.
    pub temperature: i32,
    /// Exponent of the mole.
    pub amount: i32,
    /// Exponent of the candela.
    pub luminosity: i32,
}

/// Base unit symbols, in vector order.
const SYMBOLS: [&str; 7] = ["s", "m", "kg", "A", "K", "mol", "cd"];

impl DimensionVector {
    /// The all-zero vector.
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Builds a vector from its seven exponents.
    #[inline]
    pub const fn new(
        time: i32,
        length: i32,
        mass: i32,
        current: i32,
        temperature: i32,
        amount: i32,
        luminosity: i32,
    ) -> Self {
        Self {
            time,
            length,
            mass,
            current,
            temperature,
            amount,
            luminosity,
        }
    }

    /// Builds a vector from an array in `[time, length, mass, current, temperature, amount, luminosity]` order.
    #[inline]
    pub const fn from_array(e: [i32; 7]) -> Self {
        Self::new(e[0], e[1], e[2], e[3], e[4], e[5], e[6])
    }

    /// Returns the exponents in `[time, length, mass, current, temperature, amount, luminosity]` order.
    #[inline]
    pub const fn to_array(self) -> [i32; 7] {
        [
            self.time,
            self.length,
            self.mass,
            self.current,
            self.temperature,
            self.amount,
            self.luminosity,
        ]
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub const fn is_dimensionless(self) -> bool {
        self.is_compatible(Self::DIMENSIONLESS)
    }

    /// Compatibility predicate: `true` iff all seven exponents are pairwise equal.
    ///
    /// ```rust
    /// use sidim_core::DimensionVector;
    /// let speed = DimensionVector::new(-1, 1, 0, 0, 0, 0, 0);
    /// assert!(speed.is_compatible(speed));
    /// assert!(!speed.is_compatible(DimensionVector::DIMENSIONLESS));
    /// ```
    #[inline]
    pub const fn is_compatible(self, other: Self) -> bool {
        self.time == other.time
            && self.length == other.length
            && self.mass == other.mass
            && self.current == other.current
            && self.temperature == other.temperature
            && self.amount == other.amount
            && self.luminosity == other.luminosity
    }

    /// Sqrt-eligibility predicate: `true` iff every exponent is even.
    ///
    /// ```rust
    /// use sidim_core::DimensionVector;
    /// assert!(DimensionVector::new(0, 2, 0, 0, 0, 0, 0).is_sqrtable());
    /// assert!(!DimensionVector::new(0, 3, 0, 0, 0, 0, 0).is_sqrtable());
    /// ```
    #[inline]
    pub const fn is_sqrtable(self) -> bool {
        self.time % 2 == 0
            && self.length % 2 == 0
            && self.mass % 2 == 0
            && self.current % 2 == 0
            && self.temperature % 2 == 0
            && self.amount % 2 == 0
            && self.luminosity % 2 == 0
    }

    /// Dimension of a product: elementwise sum, or `None` if an exponent overflows `i32`.
    ///
    /// ```rust
    /// use sidim_core::DimensionVector;
    /// let a = DimensionVector::new(i32::MAX, 0, 0, 0, 0, 0, 0);
    /// assert_eq!(a.checked_product(DimensionVector::new(1, 0, 0, 0, 0, 0, 0)), None);
    /// ```
    pub const fn checked_product(self, rhs: Self) -> Option<Self> {
        let (a, b) = (self.to_array(), rhs.to_array());
        let mut out = [0; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = match a[i].checked_add(b[i]) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(Self::from_array(out))
    }

    /// Dimension of a quotient: elementwise difference, or `None` if an exponent overflows `i32`.
    pub const fn checked_quotient(self, rhs: Self) -> Option<Self> {
        let (a, b) = (self.to_array(), rhs.to_array());
        let mut out = [0; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = match a[i].checked_sub(b[i]) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(Self::from_array(out))
    }

    /// Dimension of an integer power: elementwise scaling by `n`, or `None` if an exponent overflows `i32`.
    pub const fn checked_powi(self, n: i32) -> Option<Self> {
        let a = self.to_array();
        let mut out = [0; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = match a[i].checked_mul(n) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(Self::from_array(out))
    }

    /// Dimension of a product: elementwise sum.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `i32`, in every build profile. See [`checked_product`](Self::checked_product).
    #[inline]
    pub const fn product(self, rhs: Self) -> Self {
        match self.checked_product(rhs) {
            Some(v) => v,
            None => panic!("dimension exponent overflow in product"),
        }
    }

    /// Dimension of a quotient: elementwise difference.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `i32`. See [`checked_quotient`](Self::checked_quotient).
    #[inline]
    pub const fn quotient(self, rhs: Self) -> Self {
        match self.checked_quotient(rhs) {
            Some(v) => v,
            None => panic!("dimension exponent overflow in quotient"),
        }
    }

    /// Dimension of an integer power: elementwise scaling by `n`.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `i32`. See [`checked_powi`](Self::checked_powi).
    #[inline]
    pub const fn powi(self, n: i32) -> Self {
        match self.checked_powi(n) {
            Some(v) => v,
            None => panic!("dimension exponent overflow in powi"),
        }
    }

    /// Dimension of the reciprocal: elementwise negation.
    ///
    /// # Panics
    ///
    /// Panics if an exponent is `i32::MIN`.
    #[inline]
    pub const fn inverse(self) -> Self {
        Self::DIMENSIONLESS.quotient(self)
    }

    /// Dimension of a square root, or `None` if any exponent is odd.
    #[inline]
    pub const fn sqrt(self) -> Option<Self> {
        if !self.is_sqrtable() {
            return None;
        }
        Some(Self::new(
            self.time / 2,
            self.length / 2,
            self.mass / 2,
            self.current / 2,
            self.temperature / 2,
            self.amount / 2,
            self.luminosity / 2,
        ))
    }
}

impl fmt::Display for DimensionVector {
    /// Formats as a product of base unit symbols, e.g. `s^-2·m·kg`. The dimensionless vector prints as `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (symbol, exponent) in SYMBOLS.iter().zip(self.to_array()) {
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(symbol)?;
            if exponent != 1 {
                write!(f, "^{}", exponent)?;
            }
        }
        Ok(())
    }
}

impl From<[i32; 7]> for DimensionVector {
    fn from(exponents: [i32; 7]) -> Self {
        Self::from_array(exponents)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Type-level dimension
// ─────────────────────────────────────────────────────────────────────────────

/// Trait implemented by every type-level dimension.
///
/// Each associated type is a `typenum` integer holding one SI base exponent. The only implementor is [`Dim`]; the
/// trait exists so that generic code can name the components.
pub trait Dimension: 'static {
    /// Exponent of time.
    type Time: Integer;
    /// Exponent of length.
    type Length: Integer;
    /// Exponent of mass.
    type Mass: Integer;
    /// Exponent of electric current.
    type Current: Integer;
    /// Exponent of thermodynamic temperature.
    type Temperature: Integer;
    /// Exponent of amount of substance.
    type Amount: Integer;
    /// Exponent of luminous intensity.
    type Luminosity: Integer;

    /// The runtime mirror of this dimension.
    const VECTOR: DimensionVector = DimensionVector::new(
        <Self::Time as Integer>::I32,
        <Self::Length as Integer>::I32,
        <Self::Mass as Integer>::I32,
        <Self::Current as Integer>::I32,
        <Self::Temperature as Integer>::I32,
        <Self::Amount as Integer>::I32,
        <Self::Luminosity as Integer>::I32,
    );
}

/// A dimension with exponents `T` (time), `L` (length), `M` (mass), `I` (current), `K` (temperature), `N` (amount)
/// and `J` (luminosity).
///
/// `Dim` is never instantiated; it only appears as the second parameter of [`Quantity`](crate::Quantity).
///
/// ```rust
/// use sidim_core::{Dim, Dimension, DimensionVector};
/// use sidim_core::typenum::{N2, P1, Z0};
///
/// type Acceleration = Dim<N2, P1, Z0, Z0, Z0, Z0, Z0>;
/// assert_eq!(Acceleration::VECTOR, DimensionVector::new(-2, 1, 0, 0, 0, 0, 0));
/// ```
pub struct Dim<T, L, M, I, K, N, J>(PhantomData<(T, L, M, I, K, N, J)>);

impl<T, L, M, I, K, N, J> Dimension for Dim<T, L, M, I, K, N, J>
where
    T: Integer + 'static,
    L: Integer + 'static,
    M: Integer + 'static,
    I: Integer + 'static,
    K: Integer + 'static,
    N: Integer + 'static,
    J: Integer + 'static,
{
    type Time = T;
    type Length = L;
    type Mass = M;
    type Current = I;
    type Temperature = K;
    type Amount = N;
    type Luminosity = J;
}

/// The all-zero dimension (ratios, angles, counts).
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

// ─────────────────────────────────────────────────────────────────────────────
// Predicates
// ─────────────────────────────────────────────────────────────────────────────

/// Compatibility predicate at the type level.
///
/// `A: Compatible<B>` holds iff all seven exponents of `A` and `B` are equal. Because `typenum` integers have a
/// single canonical representation, that is the same as `A` and `B` being the same type, so the trait has a single
/// reflexive implementation. Every operation that requires matching dimensions (`+`, `-`, `+=`, `-=`, comparisons,
/// [`Quantity::in_unit`](crate::Quantity::in_unit)) is bounded on it.
#[diagnostic::on_unimplemented(
    message = "dimensions do not match: `{Self}` is not `{D}`",
    label = "incompatible dimension",
    note = "quantities can only be added, subtracted, compared or converted when all seven SI exponents agree"
)]
pub trait Compatible<D: Dimension>: Dimension {}

impl<D: Dimension> Compatible<D> for D {}

/// Sqrt-eligibility predicate at the type level: every exponent is even.
///
/// Implemented through `typenum::PartialDiv`, which only exists when the division by two is exact.
#[diagnostic::on_unimplemented(
    message = "dimension `{Self}` is not sqrt-able",
    label = "has an odd exponent",
    note = "the square root of a quantity requires every SI exponent of its dimension to be even"
)]
pub trait Sqrtable: Dimension {}

impl<T, L, M, I, K, N, J> Sqrtable for Dim<T, L, M, I, K, N, J>
where
    Dim<T, L, M, I, K, N, J>: Dimension,
    T: PartialDiv<P2>,
    L: PartialDiv<P2>,
    M: PartialDiv<P2>,
    I: PartialDiv<P2>,
    K: PartialDiv<P2>,
    N: PartialDiv<P2>,
    J: PartialDiv<P2>,
{
}
