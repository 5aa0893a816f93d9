use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::mem;
use std::ops::RangeInclusive;

use crate::operations::{Intersection, Union};
use crate::std_ext::*;

#[cfg(feature = "serde1")]
use core::marker::PhantomData;
#[cfg(feature = "serde1")]
use serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, Serializer},
};

#[derive(Clone)]
/// A set of closed intervals `(start..=end)`, stored sorted by start.
///
/// Intervals that share at least one point are coalesced into a
/// single interval, so the stored intervals are always pairwise
/// disjoint.
///
/// See the [crate documentation](crate) for the boundary semantics of
/// closed intervals.
pub struct IntervalSet<T> {
    intervals: Vec<RangeInclusive<T>>,
}

impl<T> Default for IntervalSet<T>
where
    T: Ord + Clone,
{
    fn default() -> Self {
        IntervalSet::new()
    }
}

impl<T> IntervalSet<T>
where
    T: Ord + Clone,
{
    /// Makes a new empty `IntervalSet`.
    pub fn new() -> Self {
        IntervalSet {
            intervals: Vec::new(),
        }
    }

    /// Returns a reference to the interval covering the given value,
    /// if any.
    pub fn get(&self, value: &T) -> Option<&RangeInclusive<T>> {
        // The only stored interval that could contain the given value
        // is the last one whose start is less than or equal to it.
        let candidates = self
            .intervals
            .partition_point(|interval| interval.start() <= value);
        self.intervals[..candidates]
            .last()
            .filter(|interval| interval.contains(value))
    }

    /// Returns `true` if any interval in the set covers the specified
    /// value.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Gets an ordered iterator over all intervals.
    pub fn iter(&self) -> impl Iterator<Item = &RangeInclusive<T>> {
        self.intervals.iter()
    }

    /// Returns the maintained intervals as a slice, sorted by start.
    pub fn as_slice(&self) -> &[RangeInclusive<T>] {
        &self.intervals
    }

    /// Returns the number of stored intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set contains no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Adds a closed interval to the set.
    ///
    /// If the added interval shares at least one point with any
    /// stored intervals, they are all coalesced into a single
    /// interval.
    ///
    /// Returns the resulting maintained sequence.
    pub fn add(&mut self, range: RangeInclusive<T>) -> &[RangeInclusive<T>] {
        self.intervals.push(range);
        self.coalesce();
        self.as_slice()
    }

    /// Removes the interior of the given span from the set.
    ///
    /// Stored intervals that partially overlap `range` are contracted
    /// so that they no longer cover it; intervals wholly inside it
    /// are dropped. Points shared with the bounds of `range` itself
    /// survive: removing `2..=3` from a set holding `1..=5` leaves
    /// `1..=2` and `3..=5`.
    ///
    /// Returns the resulting maintained sequence.
    pub fn remove(&mut self, range: RangeInclusive<T>) -> &[RangeInclusive<T>] {
        let stored = mem::take(&mut self.intervals);
        for interval in stored {
            if interval.overlaps(&range) {
                // Keep between 0 and 2 pieces at the ends of the
                // span to remove.
                self.intervals.extend(interval.subtract(&range));
            } else {
                self.intervals.push(interval);
            }
        }
        self.coalesce();
        self.as_slice()
    }

    /// Gets an iterator over the coalesced union of the intervals in
    /// `self` and `other`.
    ///
    /// The iterator element type is `RangeInclusive<T>`.
    pub fn union<'a>(&'a self, other: &'a IntervalSet<T>) -> Union<'a, T> {
        Union::new(self.as_slice(), other.as_slice())
    }

    /// Gets an iterator over the intervals covered by both `self` and
    /// `other`.
    ///
    /// The iterator element type is `RangeInclusive<T>`.
    pub fn intersection<'a>(&'a self, other: &'a IntervalSet<T>) -> Intersection<'a, T> {
        Intersection::new(self.as_slice(), other.as_slice())
    }

    // Re-establishes the invariant: sort by start, then walk the
    // sorted intervals merging each one that overlaps the last
    // emitted interval and appending the ones that don't.
    fn coalesce(&mut self) {
        self.intervals.sort_by(|a, b| a.start().cmp(b.start()));
        let mut coalesced: Vec<RangeInclusive<T>> = Vec::with_capacity(self.intervals.len());
        for interval in self.intervals.drain(..) {
            match coalesced.last_mut() {
                Some(last) if last.overlaps(&interval) => {
                    *last = last.hull(&interval);
                }
                _ => coalesced.push(interval),
            }
        }
        self.intervals = coalesced;
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = RangeInclusive<T>;
    type IntoIter = std::vec::IntoIter<RangeInclusive<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<T> FromIterator<RangeInclusive<T>> for IntervalSet<T>
where
    T: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = RangeInclusive<T>>>(iter: I) -> Self {
        let mut set = IntervalSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<RangeInclusive<T>> for IntervalSet<T>
where
    T: Ord + Clone,
{
    fn extend<I: IntoIterator<Item = RangeInclusive<T>>>(&mut self, iter: I) {
        self.intervals.extend(iter);
        self.coalesce();
    }
}

// A derived `Debug` would expose the private `Vec` field; render the
// way the standard set types do instead.
impl<T: Debug> Debug for IntervalSet<T>
where
    T: Ord + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde1")]
impl<T> Serialize for IntervalSet<T>
where
    T: Ord + Clone + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.intervals.len()))?;
        for interval in self.iter() {
            seq.serialize_element(&(interval.start(), interval.end()))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde1")]
impl<'de, T> Deserialize<'de> for IntervalSet<T>
where
    T: Ord + Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(IntervalSetVisitor::new())
    }
}

#[cfg(feature = "serde1")]
struct IntervalSetVisitor<T> {
    marker: PhantomData<fn() -> IntervalSet<T>>,
}

#[cfg(feature = "serde1")]
impl<T> IntervalSetVisitor<T> {
    fn new() -> Self {
        IntervalSetVisitor {
            marker: PhantomData,
        }
    }
}

#[cfg(feature = "serde1")]
impl<'de, T> Visitor<'de> for IntervalSetVisitor<T>
where
    T: Ord + Clone + Deserialize<'de>,
{
    type Value = IntervalSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("IntervalSet")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Adding the pairs one by one re-establishes the sorted
        // disjoint invariant no matter what the input looked like.
        let mut set = IntervalSet::new();
        while let Some((start, end)) = access.next_element::<(T, T)>()? {
            set.add(start..=end);
        }
        Ok(set)
    }
}

#[cfg(feature = "quickcheck")]
impl<T> quickcheck::Arbitrary for IntervalSet<T>
where
    T: quickcheck::Arbitrary + Ord + Clone,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Vec::<(T, T)>::arbitrary(g)
            .into_iter()
            .map(|(a, b)| if a <= b { a..=b } else { b..=a })
            .collect()
    }
}


#[cfg(all(test, feature = "quickcheck"))]
mod prop_tests {
    use super::*;
    use quickcheck::quickcheck;

    quickcheck! {
        fn stays_sorted_and_disjoint(set: IntervalSet<i8>) -> bool {
            set.as_slice().windows(2).all(|pair| {
                pair[0].start() <= pair[1].start()
                    && !pair[0].overlaps(&pair[1])
                    && !pair[1].overlaps(&pair[0])
            })
        }

        fn rebuilding_is_identity(set: IntervalSet<i8>) -> bool {
            let rebuilt: IntervalSet<i8> = set.iter().cloned().collect();
            rebuilt.as_slice() == set.as_slice()
        }

        fn add_then_remove_preserves_outside_coverage(set: IntervalSet<i8>, a: i8, b: i8) -> bool {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let mut mutated = set.clone();
            mutated.add(lo..=hi);
            mutated.remove(lo..=hi);
            (i8::MIN..=i8::MAX)
                .filter(|value| *value < lo || *value > hi)
                .all(|value| mutated.contains(&value) == set.contains(&value))
        }
    }
}
