//! Display ordering of content collections
//!
//! Collections are ordered client-side after every fetch. All sorts here are
//! stable: objects with the same rank keep the order the store returned them in.

use std::cmp::Ordering;

use crate::domain::entities::{ContentObject, Experience, Ordered};

/// Sort ascending by display order (unset orders rank last)
pub fn sort_by_order<M: Ordered>(items: &mut [ContentObject<M>]) {
    items.sort_by_key(|item| item.rank());
}

/// Sort experience by display order, then most recent start date first
///
/// Start dates that cannot be parsed count as the earliest possible date.
pub fn sort_experience(items: &mut [Experience]) {
    items.sort_by(compare_experience);
}

fn compare_experience(a: &Experience, b: &Experience) -> Ordering {
    a.rank()
        .cmp(&b.rank())
        .then_with(|| b.metadata.start().cmp(&a.metadata.start()))
}
