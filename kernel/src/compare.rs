//! Tri-state comparator construction.
//!
//! A comparator is a closure `FnMut(&T) -> Ordering` that reports how a
//! probed element relates to an implicit sought value: `Less` means the
//! element sorts before the target, `Greater` after, `Equal` is a match.
//! [`std::cmp::Ordering`] is the tri-state result type; a fourth state is
//! unrepresentable, so the "unhandled comparison result" failure mode of
//! looser type systems cannot occur here.

use std::cmp::Ordering;

/// Build a comparator that probes elements against `target` using the
/// type's natural ordering.
///
/// The returned closure reports `probe.cmp(&target)`: `Less` while the
/// probe sorts before the target, `Equal` on a match, `Greater` after.
pub fn compare_to<T: Ord>(target: T) -> impl Fn(&T) -> Ordering {
    move |probe| probe.cmp(&target)
}

/// Build a comparator that probes elements against `target` using a
/// caller-supplied ordering function.
///
/// `cmp(probe, target)` must be consistent with the ordering of the
/// sequence being searched, or the bracket invariant of binary search
/// does not hold.
pub fn compare_to_by<T, F>(target: T, cmp: F) -> impl Fn(&T) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    move |probe| cmp(probe, &target)
}
