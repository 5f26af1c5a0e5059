//! Scalar-trait registrations for std numeric types, `num_complex::Complex`,
//! and the storage-reference kinds proxies can wrap.
//!
//! # Registered types
//! - Real primitives: `conj_if_needed` is the identity.
//! - Unsigned integers: `abs_if_needed` is the identity (no sign-conversion hazards).
//! - Signed integers and floats: `abs_if_needed` is `abs`.
//! - `Complex<T>`: conjugate negates the imaginary part, `abs_if_needed` is the modulus.
//!
//! # Storage references
//! - `&V` and `&mut V` read by copy.
//! - [`AtomicRef`] wraps storage that needs an explicit load (std atomics,
//!   `Mutex<V>`, `RwLock<V>`).

use crate::core::traits::{AbsIfNeeded, ConjIfNeeded, ExplicitLoad, ScalarRef};
use num_complex::Complex;
use num_traits::{Float, Num};
use std::sync::atomic::{
    AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicIsize, AtomicU8, AtomicU16, AtomicU32,
    AtomicU64, AtomicUsize, Ordering,
};
use std::sync::{Mutex, RwLock};

macro_rules! impl_real_conj {
    ($($t:ty),*) => {
        $(impl ConjIfNeeded for $t {
            #[inline(always)]
            fn conj_if_needed(self) -> Self {
                self
            }
        })*
    };
}

impl_real_conj!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: Clone + Num + std::ops::Neg<Output = T>> ConjIfNeeded for Complex<T> {
    #[inline(always)]
    fn conj_if_needed(self) -> Self {
        Complex::conj(&self)
    }
}

macro_rules! impl_unsigned_abs {
    ($($t:ty),*) => {
        $(impl AbsIfNeeded for $t {
            type Output = $t;
            #[inline(always)]
            fn abs_if_needed(self) -> $t {
                self
            }
        })*
    };
}

macro_rules! impl_float_abs {
    ($($t:ty),*) => {
        $(impl AbsIfNeeded for $t {
            type Output = $t;
            #[inline(always)]
            fn abs_if_needed(self) -> $t {
                self.abs()
            }
        })*
    };
}

// `MIN` has no positive counterpart and maps to itself.
macro_rules! impl_signed_int_abs {
    ($($t:ty),*) => {
        $(impl AbsIfNeeded for $t {
            type Output = $t;
            #[inline(always)]
            fn abs_if_needed(self) -> $t {
                self.wrapping_abs()
            }
        })*
    };
}

impl_unsigned_abs!(u8, u16, u32, u64, u128, usize);
impl_signed_int_abs!(i8, i16, i32, i64, i128, isize);
impl_float_abs!(f32, f64);

impl<T: Float> AbsIfNeeded for Complex<T> {
    type Output = T;
    #[inline]
    fn abs_if_needed(self) -> T {
        self.norm()
    }
}

impl<V: Copy> ScalarRef<V> for &V {
    #[inline(always)]
    fn read(&self) -> V {
        **self
    }
}

impl<V: Copy> ScalarRef<V> for &mut V {
    #[inline(always)]
    fn read(&self) -> V {
        **self
    }
}

/// Reference to storage that may only be read through an explicit load.
///
/// Every [`ScalarRef::read`] through an `AtomicRef` is a single
/// [`ExplicitLoad::load_value`]; concurrent writers are allowed.
#[derive(Debug)]
pub struct AtomicRef<'a, A: ?Sized> {
    storage: &'a A,
}

impl<'a, A: ?Sized> AtomicRef<'a, A> {
    pub fn new(storage: &'a A) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> A::Value
    where
        A: ExplicitLoad,
    {
        self.storage.load_value()
    }
}

impl<A: ?Sized> Clone for AtomicRef<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for AtomicRef<'_, A> {}

impl<A: ExplicitLoad + ?Sized> ScalarRef<A::Value> for AtomicRef<'_, A> {
    #[inline]
    fn read(&self) -> A::Value {
        self.storage.load_value()
    }
}

macro_rules! impl_atomic_load {
    ($($atomic:ty => $t:ty),*) => {
        $(impl ExplicitLoad for $atomic {
            type Value = $t;
            #[inline]
            fn load_value(&self) -> $t {
                self.load(Ordering::SeqCst)
            }
        })*
    };
}

impl_atomic_load!(
    AtomicI8 => i8, AtomicI16 => i16, AtomicI32 => i32, AtomicI64 => i64,
    AtomicIsize => isize, AtomicU8 => u8, AtomicU16 => u16, AtomicU32 => u32,
    AtomicU64 => u64, AtomicUsize => usize
);

// A poisoned lock still holds a fully written value; readers never observe a torn write.
impl<V: Copy> ExplicitLoad for Mutex<V> {
    type Value = V;
    fn load_value(&self) -> V {
        match self.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl<V: Copy> ExplicitLoad for RwLock<V> {
    type Value = V;
    fn load_value(&self) -> V {
        match self.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::{abs_if_needed, conj_if_needed};

    #[test]
    fn real_conj_is_identity() {
        assert_eq!(conj_if_needed(2.0f64), 2.0);
        assert_eq!(conj_if_needed(-7i32), -7);
        assert_eq!(conj_if_needed(9u64), 9);
    }

    #[test]
    fn complex_conj_negates_imaginary_part() {
        let z = Complex::new(2.0f32, -3.0);
        assert_eq!(conj_if_needed(z), Complex::new(2.0, 3.0));
        assert_eq!(conj_if_needed(conj_if_needed(z)), z);
    }

    #[test]
    fn signed_abs_at_min_does_not_overflow() {
        assert_eq!(abs_if_needed(-7i32), 7);
        assert_eq!(abs_if_needed(i32::MIN), i32::MIN);
        assert_eq!(abs_if_needed(i8::MIN), i8::MIN);
        assert_eq!(abs_if_needed(i64::MIN + 1), i64::MAX);
    }

    #[test]
    fn unsigned_abs_is_identity() {
        assert_eq!(abs_if_needed(5u8), 5);
        assert_eq!(abs_if_needed(u64::MAX), u64::MAX);
    }

    #[test]
    fn signed_and_complex_abs() {
        assert_eq!(abs_if_needed(-4i64), 4);
        assert_eq!(abs_if_needed(-2.5f64), 2.5);
        assert_eq!(abs_if_needed(Complex::new(3.0f64, -4.0)), 5.0);
    }

    #[test]
    fn atomic_ref_loads_current_value() {
        let storage = AtomicU32::new(4);
        let r = AtomicRef::new(&storage);
        assert_eq!(r.read(), 4);
        storage.store(11, Ordering::SeqCst);
        assert_eq!(r.read(), 11);
    }

    #[test]
    fn poisoned_mutex_still_loads() {
        let m = std::sync::Arc::new(Mutex::new(Complex::new(1.0f64, 2.0)));
        let m2 = m.clone();
        let _ = std::thread::spawn(move || {
            let _guard = m2.lock().unwrap();
            panic!("poison");
        })
        .join();
        assert!(m.is_poisoned());
        assert_eq!(AtomicRef::new(&*m).read(), Complex::new(1.0, 2.0));
    }
}
