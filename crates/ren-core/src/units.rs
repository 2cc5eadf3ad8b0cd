//! Compile-time unit safety for electrification planning quantities.
//!
//! Prevents mixing incompatible units like watt-hours and watts, or meters
//! and dollars.
//!
//! # Design Philosophy
//!
//! Network planning involves a handful of physical and economic quantities
//! with specific units:
//! - Line lengths and node separations (m)
//! - Battery capacity of a Solar Home System (Wh)
//! - Peak power a system must deliver (W)
//! - Equipment prices ($)
//!
//! Using raw `f64` values throughout the codebase makes it easy to
//! accidentally compare a capacity against a power rating or add a price to
//! a distance. This module provides newtype wrappers that catch such errors
//! at compile time.
//!
//! # Zero Runtime Overhead
//!
//! All types use `#[repr(transparent)]` ensuring they have the same memory
//! layout as `f64`. The compiler optimizes away all wrapper overhead.
//!
//! # Usage
//!
//! ```
//! use ren_core::units::{Meters, WattHours, Watts};
//!
//! let span = Meters(120.0) + Meters(35.5);
//! assert_eq!(span, Meters(155.5));
//!
//! // This would NOT compile - different units
//! // let wrong = Meters(1.0) + Watts(1.0);
//!
//! let daily = Watts(40.0).energy_over(24.0);
//! assert_eq!(daily, WattHours(960.0));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Macro to implement common arithmetic operations for unit types
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Mul<$type> for f64 {
            type Output = $type;
            fn mul(self, rhs: $type) -> Self::Output {
                <$type>::new(self * rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Div<$type> for $type {
            type Output = f64;
            fn div(self, rhs: $type) -> Self::Output {
                self.0 / rhs.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.4} {}", self.0, $unit_name)
            }
        }

        impl $type {
            /// Create a new value
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            /// Absolute value
            #[inline]
            pub fn abs(self) -> Self {
                Self(self.0.abs())
            }

            /// Check if value is finite
            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            /// Minimum of two values
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Maximum of two values
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }

        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }
    };
}

// =============================================================================
// Distance Units
// =============================================================================

/// Distance in meters (m)
///
/// Node coordinates are planar projected coordinates, so straight-line
/// separations and line lengths come out directly in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(pub f64);

impl_unit_ops!(Meters, "m");

impl Meters {
    /// Zero length
    pub const ZERO: Self = Self(0.0);
}

// =============================================================================
// Energy and Power Units
// =============================================================================

/// Energy in watt-hours (Wh)
///
/// Battery capacity of a Solar Home System, or the daily energy a node
/// requires.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct WattHours(pub f64);

impl_unit_ops!(WattHours, "Wh");

/// Power in watts (W)
///
/// Peak power a node draws, or the maximum power a Solar Home System can
/// deliver.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Watts(pub f64);

impl_unit_ops!(Watts, "W");

// Energy/power relationships
impl Watts {
    /// Energy delivered at this power over a duration in hours: E = P × t
    #[inline]
    pub fn energy_over(self, hours: f64) -> WattHours {
        WattHours(self.0 * hours)
    }
}

impl WattHours {
    /// Mean power required to deliver this energy over a duration in hours: P = E / t
    #[inline]
    pub fn mean_power_over(self, hours: f64) -> Watts {
        Watts(self.0 / hours)
    }
}

// =============================================================================
// Economic Units
// =============================================================================

/// Cost in dollars ($)
///
/// Equipment prices from the SHS reference catalog and aggregated
/// disconnection costs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Dollars(pub f64);

impl_unit_ops!(Dollars, "$");
