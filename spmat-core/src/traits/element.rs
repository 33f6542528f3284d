//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Sub};
use core::str::FromStr;

use crate::format::DataType;

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared for equality (zero detection relies on it)
/// - Display/FromStr: Can be written to and read back from the text format
///   without loss
/// - Closed under the four arithmetic operators
pub trait MatrixElement:
    Copy
    + PartialEq
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Get the DataType tag persisted for this element type
    fn data_type() -> DataType;

    /// The additive identity, read back for every coordinate not in storage
    fn zero() -> Self;

    /// The multiplicative identity, used for identity matrices
    fn one() -> Self;

    /// Whether this value is the implicit default
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $tag:ident, $zero:expr, $one:expr;)*) => {
        $(
            impl MatrixElement for $ty {
                fn data_type() -> DataType {
                    DataType::$tag
                }

                fn zero() -> Self {
                    $zero
                }

                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_matrix_element! {
    f32 => F32, 0.0, 1.0;
    f64 => F64, 0.0, 1.0;
    i32 => I32, 0, 1;
    i64 => I64, 0, 1;
    u32 => U32, 0, 1;
    u64 => U64, 0, 1;
}
