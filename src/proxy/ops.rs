//! Operator suite for the proxy scalars.
//!
//! Every impl evaluates `op(lhs, rhs)` where a proxy operand contributes one
//! `value()` read and a plain operand contributes itself; operand order is
//! always preserved. The impls come from two templates: `impl_proxy_ops!` for a
//! proxy on the left, and [`impl_proxy_lhs_ops!`](crate::impl_proxy_lhs_ops) for
//! a value type on the left.

use crate::core::traits::{ConjIfNeeded, ScalarRef};
use crate::proxy::{ConjugatedScalar, ScaledScalar};
use num_complex::Complex;
use num_traits::Num;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_proxy_ops {
    // proxy ⊕ V, proxy ⊕ &V, for owned and borrowed proxies
    (@value [$($gen:tt)*] $proxy:ty, [$($bound:tt)*], $Op:ident, $op:ident) => {
        impl<$($gen)*> $Op<V> for $proxy
        where
            $($bound)*
            V: $Op<Output = V>,
        {
            type Output = V;
            #[inline]
            fn $op(self, rhs: V) -> V {
                $Op::$op(self.value(), rhs)
            }
        }

        impl<'b, $($gen)*> $Op<&'b V> for $proxy
        where
            $($bound)*
            V: $Op<Output = V>,
        {
            type Output = V;
            #[inline]
            fn $op(self, rhs: &'b V) -> V {
                $Op::$op(self.value(), *rhs)
            }
        }

        impl<'p, $($gen)*> $Op<V> for &'p $proxy
        where
            $($bound)*
            V: $Op<Output = V>,
        {
            type Output = V;
            #[inline]
            fn $op(self, rhs: V) -> V {
                $Op::$op(self.value(), rhs)
            }
        }

        impl<'p, 'b, $($gen)*> $Op<&'b V> for &'p $proxy
        where
            $($bound)*
            V: $Op<Output = V>,
        {
            type Output = V;
            #[inline]
            fn $op(self, rhs: &'b V) -> V {
                $Op::$op(self.value(), *rhs)
            }
        }
    };

    // proxy ⊕ other proxy, owned or borrowed on either side, one `other` at a time
    (@others [$($gen:tt)*] $proxy:ty, [$($bound:tt)*], $Op:ident, $op:ident, {}) => {};
    (@others [$($gen:tt)*] $proxy:ty, [$($bound:tt)*], $Op:ident, $op:ident,
        { [$($ogen:tt)*] $other:ty where [$($obound:tt)*]; $($rest:tt)* }) => {
        impl<$($gen)* $($ogen)*> $Op<$other> for $proxy
        where
            $($bound)*
            $($obound)*
            V: $Op<Output = V>,
        {
            type Output = V;
            #[inline]
            fn $op(self, rhs: $other) -> V {
                $Op::$op(self.value(), rhs.value())
            }
        }

        impl<'p, $($gen)* $($ogen)*> $Op<$other> for &'p $proxy
        where
            $($bound)*
            $($obound)*
            V: $Op<Output = V>,
        {
            type Output = V;
            #[inline]
            fn $op(self, rhs: $other) -> V {
                $Op::$op(self.value(), rhs.value())
            }
        }

        impl<'q, $($gen)* $($ogen)*> $Op<&'q $other> for $proxy
        where
            $($bound)*
            $($obound)*
            V: $Op<Output = V>,
        {
            type Output = V;
            #[inline]
            fn $op(self, rhs: &'q $other) -> V {
                $Op::$op(self.value(), rhs.value())
            }
        }

        impl<'p, 'q, $($gen)* $($ogen)*> $Op<&'q $other> for &'p $proxy
        where
            $($bound)*
            $($obound)*
            V: $Op<Output = V>,
        {
            type Output = V;
            #[inline]
            fn $op(self, rhs: &'q $other) -> V {
                $Op::$op(self.value(), rhs.value())
            }
        }

        impl_proxy_ops!(@others [$($gen)*] $proxy, [$($bound)*], $Op, $op, { $($rest)* });
    };

    (@eq [$($gen:tt)*] $proxy:ty, [$($bound:tt)*], {}) => {};
    (@eq [$($gen:tt)*] $proxy:ty, [$($bound:tt)*],
        { [$($ogen:tt)*] $other:ty where [$($obound:tt)*]; $($rest:tt)* }) => {
        impl<$($gen)* $($ogen)*> PartialEq<$other> for $proxy
        where
            $($bound)*
            $($obound)*
            V: PartialEq,
        {
            #[inline]
            fn eq(&self, other: &$other) -> bool {
                self.value() == other.value()
            }
        }

        impl_proxy_ops!(@eq [$($gen)*] $proxy, [$($bound)*], { $($rest)* });
    };

    (impl [$($gen:tt)*] $proxy:ty where [$($bound:tt)*] with $others:tt) => {
        impl_proxy_ops!(@value [$($gen)*] $proxy, [$($bound)*], Add, add);
        impl_proxy_ops!(@value [$($gen)*] $proxy, [$($bound)*], Sub, sub);
        impl_proxy_ops!(@value [$($gen)*] $proxy, [$($bound)*], Mul, mul);
        impl_proxy_ops!(@value [$($gen)*] $proxy, [$($bound)*], Div, div);

        impl_proxy_ops!(@others [$($gen)*] $proxy, [$($bound)*], Add, add, $others);
        impl_proxy_ops!(@others [$($gen)*] $proxy, [$($bound)*], Sub, sub, $others);
        impl_proxy_ops!(@others [$($gen)*] $proxy, [$($bound)*], Mul, mul, $others);
        impl_proxy_ops!(@others [$($gen)*] $proxy, [$($bound)*], Div, div, $others);

        impl<$($gen)*> Neg for $proxy
        where
            $($bound)*
            V: Neg<Output = V>,
        {
            type Output = V;
            #[inline]
            fn neg(self) -> V {
                -self.value()
            }
        }

        impl<'p, $($gen)*> Neg for &'p $proxy
        where
            $($bound)*
            V: Neg<Output = V>,
        {
            type Output = V;
            #[inline]
            fn neg(self) -> V {
                -self.value()
            }
        }

        impl<$($gen)*> PartialEq<V> for $proxy
        where
            $($bound)*
            V: PartialEq,
        {
            #[inline]
            fn eq(&self, other: &V) -> bool {
                self.value() == *other
            }
        }

        impl_proxy_ops!(@eq [$($gen)*] $proxy, [$($bound)*], $others);
    };
}

impl_proxy_ops!(
    impl [R, V,] ConjugatedScalar<R, V>
    where [R: ScalarRef<V>, V: ConjIfNeeded + Copy,]
    with {
        [R2,] ConjugatedScalar<R2, V> where [R2: ScalarRef<V>,];
        [S2, R2,] ScaledScalar<S2, R2, V> where [S2: Copy + Mul<V, Output = V>, R2: ScalarRef<V>,];
    }
);

impl_proxy_ops!(
    impl [S, R, V,] ScaledScalar<S, R, V>
    where [S: Copy + Mul<V, Output = V>, R: ScalarRef<V>, V: Copy,]
    with {
        [S2, R2,] ScaledScalar<S2, R2, V> where [S2: Copy + Mul<V, Output = V>, R2: ScalarRef<V>,];
        [R2,] ConjugatedScalar<R2, V> where [R2: ScalarRef<V>, V: ConjIfNeeded,];
    }
);

/// Registers a value type for use on the left of `+ - * /` with a proxy on the right.
///
/// Rust's orphan rules keep the crate from writing `impl<V> Add<Proxy<V>> for V`,
/// so each value type is registered explicitly. Primitive numbers and
/// `num_complex::Complex<T>` are registered by this crate; register your own
/// numeric types the same way:
///
/// ```ignore
/// mdlinalg::impl_proxy_lhs_ops!(MyReal, MyComplex);
/// mdlinalg::impl_proxy_lhs_ops!(impl [T,] MyWrapper<T> where [T: Copy,]);
/// ```
///
/// The type must implement `Copy` and the operators with itself.
#[macro_export]
macro_rules! impl_proxy_lhs_ops {
    (@op [$($gen:tt)*] $t:ty, [$($bound:tt)*], $Op:ident, $op:ident) => {
        impl<ProxyRef, $($gen)*> ::core::ops::$Op<$crate::proxy::ConjugatedScalar<ProxyRef, $t>> for $t
        where
            ProxyRef: $crate::core::ScalarRef<$t>,
            $t: $crate::core::ConjIfNeeded + Copy + ::core::ops::$Op<Output = $t>,
            $($bound)*
        {
            type Output = $t;
            #[inline]
            fn $op(self, rhs: $crate::proxy::ConjugatedScalar<ProxyRef, $t>) -> $t {
                ::core::ops::$Op::$op(self, rhs.value())
            }
        }

        impl<'l, ProxyRef, $($gen)*> ::core::ops::$Op<$crate::proxy::ConjugatedScalar<ProxyRef, $t>> for &'l $t
        where
            ProxyRef: $crate::core::ScalarRef<$t>,
            $t: $crate::core::ConjIfNeeded + Copy + ::core::ops::$Op<Output = $t>,
            $($bound)*
        {
            type Output = $t;
            #[inline]
            fn $op(self, rhs: $crate::proxy::ConjugatedScalar<ProxyRef, $t>) -> $t {
                ::core::ops::$Op::$op(*self, rhs.value())
            }
        }

        impl<'p, ProxyRef, $($gen)*> ::core::ops::$Op<&'p $crate::proxy::ConjugatedScalar<ProxyRef, $t>> for $t
        where
            ProxyRef: $crate::core::ScalarRef<$t>,
            $t: $crate::core::ConjIfNeeded + Copy + ::core::ops::$Op<Output = $t>,
            $($bound)*
        {
            type Output = $t;
            #[inline]
            fn $op(self, rhs: &'p $crate::proxy::ConjugatedScalar<ProxyRef, $t>) -> $t {
                ::core::ops::$Op::$op(self, rhs.value())
            }
        }

        impl<'l, 'p, ProxyRef, $($gen)*> ::core::ops::$Op<&'p $crate::proxy::ConjugatedScalar<ProxyRef, $t>> for &'l $t
        where
            ProxyRef: $crate::core::ScalarRef<$t>,
            $t: $crate::core::ConjIfNeeded + Copy + ::core::ops::$Op<Output = $t>,
            $($bound)*
        {
            type Output = $t;
            #[inline]
            fn $op(self, rhs: &'p $crate::proxy::ConjugatedScalar<ProxyRef, $t>) -> $t {
                ::core::ops::$Op::$op(*self, rhs.value())
            }
        }

        impl<ProxyFactor, ProxyRef, $($gen)*> ::core::ops::$Op<$crate::proxy::ScaledScalar<ProxyFactor, ProxyRef, $t>> for $t
        where
            ProxyFactor: Copy + ::core::ops::Mul<$t, Output = $t>,
            ProxyRef: $crate::core::ScalarRef<$t>,
            $t: Copy + ::core::ops::$Op<Output = $t>,
            $($bound)*
        {
            type Output = $t;
            #[inline]
            fn $op(self, rhs: $crate::proxy::ScaledScalar<ProxyFactor, ProxyRef, $t>) -> $t {
                ::core::ops::$Op::$op(self, rhs.value())
            }
        }

        impl<'l, ProxyFactor, ProxyRef, $($gen)*> ::core::ops::$Op<$crate::proxy::ScaledScalar<ProxyFactor, ProxyRef, $t>> for &'l $t
        where
            ProxyFactor: Copy + ::core::ops::Mul<$t, Output = $t>,
            ProxyRef: $crate::core::ScalarRef<$t>,
            $t: Copy + ::core::ops::$Op<Output = $t>,
            $($bound)*
        {
            type Output = $t;
            #[inline]
            fn $op(self, rhs: $crate::proxy::ScaledScalar<ProxyFactor, ProxyRef, $t>) -> $t {
                ::core::ops::$Op::$op(*self, rhs.value())
            }
        }

        impl<'p, ProxyFactor, ProxyRef, $($gen)*> ::core::ops::$Op<&'p $crate::proxy::ScaledScalar<ProxyFactor, ProxyRef, $t>> for $t
        where
            ProxyFactor: Copy + ::core::ops::Mul<$t, Output = $t>,
            ProxyRef: $crate::core::ScalarRef<$t>,
            $t: Copy + ::core::ops::$Op<Output = $t>,
            $($bound)*
        {
            type Output = $t;
            #[inline]
            fn $op(self, rhs: &'p $crate::proxy::ScaledScalar<ProxyFactor, ProxyRef, $t>) -> $t {
                ::core::ops::$Op::$op(self, rhs.value())
            }
        }

        impl<'l, 'p, ProxyFactor, ProxyRef, $($gen)*> ::core::ops::$Op<&'p $crate::proxy::ScaledScalar<ProxyFactor, ProxyRef, $t>> for &'l $t
        where
            ProxyFactor: Copy + ::core::ops::Mul<$t, Output = $t>,
            ProxyRef: $crate::core::ScalarRef<$t>,
            $t: Copy + ::core::ops::$Op<Output = $t>,
            $($bound)*
        {
            type Output = $t;
            #[inline]
            fn $op(self, rhs: &'p $crate::proxy::ScaledScalar<ProxyFactor, ProxyRef, $t>) -> $t {
                ::core::ops::$Op::$op(*self, rhs.value())
            }
        }
    };

    (impl [$($gen:tt)*] $t:ty where [$($bound:tt)*]) => {
        $crate::impl_proxy_lhs_ops!(@op [$($gen)*] $t, [$($bound)*], Add, add);
        $crate::impl_proxy_lhs_ops!(@op [$($gen)*] $t, [$($bound)*], Sub, sub);
        $crate::impl_proxy_lhs_ops!(@op [$($gen)*] $t, [$($bound)*], Mul, mul);
        $crate::impl_proxy_lhs_ops!(@op [$($gen)*] $t, [$($bound)*], Div, div);
    };

    ($($t:ty),+ $(,)?) => {
        $($crate::impl_proxy_lhs_ops!(impl [] $t where []);)+
    };
}

crate::impl_proxy_lhs_ops!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

crate::impl_proxy_lhs_ops!(impl [T,] Complex<T> where [T: Clone + Num + Neg<Output = T>,]);
