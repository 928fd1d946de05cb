//! The numeric contract for search costs and priorities.
//!
//! The engine accumulates edge costs by addition and compares priorities
//! under a total order. Nothing else is required of the numeric type, so
//! the contract is exactly that: addition, an additive identity to seed
//! accumulation, and a total comparison.
//!
//! Floats are admitted through their IEEE-754 `total_cmp`; NaN priorities
//! sort deterministically instead of poisoning the frontier. Non-negativity
//! of edge costs is NOT enforced — a caller supplying negative costs keeps
//! memory safety but forfeits path-optimality guarantees.

use std::cmp::Ordering;
use std::ops::Add;

/// A numeric type usable as a search cost and frontier priority.
pub trait Cost: Copy + Add<Output = Self> {
    /// The additive identity. Seeds cost accumulation at the start node.
    const ZERO: Self;

    /// Total-order comparison used for frontier extraction.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_cost_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0;

                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_cost_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_cost_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0.0;

                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_cost_float!(f32, f64);
