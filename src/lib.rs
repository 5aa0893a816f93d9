/*!
[`IntervalSet`] is a set of closed intervals `start..=end` over an
ordered domain. Intervals that share at least one point are coalesced
into a single interval, and the stored sequence is kept sorted by
start at all times.

Adding an interval merges it with everything it overlaps; removing one
carves the overlapped portion out of the stored intervals, splitting
them where necessary. Both operations return the resulting sequence.

```rust
use intervalset::IntervalSet;

let mut set = IntervalSet::new();
set.add(1..=5);
set.add(8..=10);

// `4..=8` bridges the two stored intervals,
// so all three become one.
set.add(4..=8);
assert_eq!(set.as_slice(), &[1..=10]);

// Removal splits: the interior of `3..=6` goes away, while the
// boundary points `3` and `6` stay covered.
set.remove(3..=6);
assert_eq!(set.as_slice(), &[1..=3, 6..=10]);
```


# Closed intervals and boundaries

Every interval is a [`RangeInclusive`]: both endpoints belong to it.
Two consequences follow, and both are deliberate:

- Coalescing happens only when intervals actually share a point.
  `1..=2` and `3..=4` stay separate even over an integer domain,
  because the set has no notion of a successor function. `1..=3` and
  `3..=5` are merged, because `3` belongs to both.
- [`remove`](IntervalSet::remove) deletes the _interior_ of the given
  span. The bounds of the removed span themselves remain covered
  wherever a stored interval reached them: removing `2..=3` from a set
  holding `1..=5` leaves `1..=2` and `3..=5`.

A point interval like `7..=7` is valid and participates in coalescing
like any other. An inverted range (`start > end`) is accepted and
stored as given; it never coalesces with anything, and queries treat
it as empty.


# Example: use with Chrono

Any `Ord + Clone` key type works. Dates make a natural domain for
closed intervals:

```rust
use chrono::NaiveDate;
use intervalset::IntervalSet;

let date = |d: u32| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();

let mut outage = IntervalSet::new();
outage.add(date(4)..=date(8));
outage.add(date(8)..=date(12));

// The two windows share March 8, so they have been coalesced.
assert_eq!(outage.as_slice(), &[date(4)..=date(12)]);

// Cancel the middle of the outage; the boundary days stay scheduled.
outage.remove(date(6)..=date(10));
assert_eq!(
    outage.as_slice(),
    &[date(4)..=date(6), date(10)..=date(12)]
);
```

Floating-point domains work through a total-order wrapper such as the
one from the _ordered-float_ crate, since `f64` itself is not `Ord`.


## Crate features

By default this crate has no dependencies on other crates.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`IntervalSet`].

You can enable the **serde1** feature in your _Cargo.toml_ file like so:

```toml
[dependencies]
intervalset = { version = "0.4", features = ["serde1"] }
```

You can similarly enable support for _quickcheck_ by enabling
the **quickcheck** feature.


[`IntervalSet`]: crate::IntervalSet
[`RangeInclusive`]: core::ops::RangeInclusive

*/

mod operations;
pub mod set;
mod std_ext;

pub use operations::{Intersection, Union};
pub use set::IntervalSet;
pub use std_ext::{Difference, RangeInclusiveExt};
