//! Element types that can be zero-initialized byte-wise.
//!
//! [`ZeroElem`] is the bridge between the byte-level guarantee of
//! [`crate::raw::RawZeroed`] (every byte is zero) and typed containers:
//! it marks types whose all-zero byte pattern IS their zero value. The
//! trait is sealed — for types with niches or invariant-carrying bit
//! patterns (references, `NonZero*`, enums) an all-zero pattern can be
//! invalid, so downstream impls are not permitted.

mod private {
    pub trait Sealed {}
}

/// A type whose all-zero byte pattern is a valid value, exposed as `ZERO`.
pub trait ZeroElem: private::Sealed + Copy {
    /// The zero value for this type.
    const ZERO: Self;
}

macro_rules! impl_zero_elem {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl ZeroElem for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_zero_elem! {
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
}
