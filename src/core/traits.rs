//! Core scalar traits for mdlinalg.
//!
//! Conjugation and absolute value are resolved through explicit per-type
//! registrations rather than a generic fallback: a type that never implements
//! [`ConjIfNeeded`] or [`AbsIfNeeded`] cannot be used where those operations are
//! required, and the mistake surfaces at compile time.

/// Conjugate a value if its type has a conjugate, otherwise return it unchanged.
pub trait ConjIfNeeded: Sized {
    /// Returns the complex conjugate, or `self` for real-like types.
    fn conj_if_needed(self) -> Self;
}

/// Absolute value with the unsigned no-op rule.
///
/// Unsigned integers return themselves, other arithmetic types use their
/// absolute value, and anything else must provide a deliberate implementation.
pub trait AbsIfNeeded: Sized {
    /// Magnitude type (the real part type for complex values).
    type Output;
    fn abs_if_needed(self) -> Self::Output;
}

/// Read access to a storage location holding a `V`.
///
/// Proxies only ever call [`ScalarRef::read`]; they never write through the
/// reference, even when it is mutable.
pub trait ScalarRef<V> {
    /// Read the current value. Implementations backed by synchronized storage
    /// perform exactly one explicit load per call.
    fn read(&self) -> V;
}

/// Storage that must be read with an explicit load instead of a plain copy
/// (std atomics, `Mutex`, `RwLock`).
pub trait ExplicitLoad {
    type Value;
    fn load_value(&self) -> Self::Value;
}

/// Free-function form of [`ConjIfNeeded::conj_if_needed`].
#[inline]
pub fn conj_if_needed<T: ConjIfNeeded>(t: T) -> T {
    t.conj_if_needed()
}

/// Free-function form of [`AbsIfNeeded::abs_if_needed`].
#[inline]
pub fn abs_if_needed<T: AbsIfNeeded>(t: T) -> T::Output {
    t.abs_if_needed()
}

/// Element types the kernels can accumulate with.
pub trait Scalar:
    Copy + Send + Sync + num_traits::Zero + std::ops::Add<Output = Self> + std::ops::Mul<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy + Send + Sync + num_traits::Zero + std::ops::Add<Output = T> + std::ops::Mul<Output = T>
{
}
