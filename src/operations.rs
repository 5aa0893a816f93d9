use std::cmp::{max, min};
use std::iter::{FusedIterator, Peekable};
use std::ops::RangeInclusive;
use std::slice;

use crate::std_ext::RangeInclusiveExt;

/// Iterator that produces the coalesced union of two sequences of
/// sorted, disjoint intervals.
pub struct Union<'a, T> {
    left: Peekable<slice::Iter<'a, RangeInclusive<T>>>,
    right: Peekable<slice::Iter<'a, RangeInclusive<T>>>,
}

impl<'a, T> Union<'a, T> {
    pub(crate) fn new(left: &'a [RangeInclusive<T>], right: &'a [RangeInclusive<T>]) -> Self {
        Union {
            left: left.iter().peekable(),
            right: right.iter().peekable(),
        }
    }
}

impl<'a, T> Iterator for Union<'a, T>
where
    T: Ord + Clone,
{
    type Item = RangeInclusive<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // Start from whichever side begins earlier.
        let mut interval = match (self.left.peek(), self.right.peek()) {
            (Some(_), None) => self.left.next().unwrap(),
            (None, Some(_)) => self.right.next().unwrap(),
            (Some(left), Some(right)) => {
                if left.start() <= right.start() {
                    self.left.next().unwrap()
                } else {
                    self.right.next().unwrap()
                }
            }
            (None, None) => return None,
        }
        .clone();

        // Pull in the next interval of one side if it overlaps what
        // we have so far.
        let mut join = |iter: &mut Peekable<slice::Iter<'a, RangeInclusive<T>>>| {
            if let Some(next) = iter.peek() {
                if interval.overlaps(next) {
                    interval = interval.hull(next);
                    iter.next();
                    return true;
                }
            }
            false
        };

        // Keep merging intervals as long as we can.
        loop {
            if !(join(&mut self.left) || join(&mut self.right)) {
                break;
            }
        }

        Some(interval)
    }
}

impl<'a, T> FusedIterator for Union<'a, T> where T: Ord + Clone {}

/// Iterator that produces the intervals common to two sequences of
/// sorted, disjoint intervals.
///
/// Closed intervals may intersect in a single point, so the output
/// can contain point intervals like `3..=3`.
pub struct Intersection<'a, T> {
    left: Peekable<slice::Iter<'a, RangeInclusive<T>>>,
    right: Peekable<slice::Iter<'a, RangeInclusive<T>>>,
}

impl<'a, T> Intersection<'a, T> {
    pub(crate) fn new(left: &'a [RangeInclusive<T>], right: &'a [RangeInclusive<T>]) -> Self {
        Intersection {
            left: left.iter().peekable(),
            right: right.iter().peekable(),
        }
    }
}

impl<'a, T> Iterator for Intersection<'a, T>
where
    T: Ord + Clone,
{
    type Item = RangeInclusive<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // If we don't have one interval on each side, there
            // cannot be an intersection.
            let (left, right) = match (self.left.peek(), self.right.peek()) {
                (Some(left), Some(right)) => (left, right),
                _ => return None,
            };

            let start = max(left.start(), right.start());
            let end = min(left.end(), right.end());
            let intersection = if start <= end {
                Some(start.clone()..=end.clone())
            } else {
                None
            };

            // Pop the interval that ends earlier.
            let advance_left = left.end() <= right.end();
            if advance_left {
                self.left.next();
            } else {
                self.right.next();
            }

            if let Some(intersection) = intersection {
                return Some(intersection);
            }
        }
    }
}

impl<'a, T> FusedIterator for Intersection<'a, T> where T: Ord + Clone {}
