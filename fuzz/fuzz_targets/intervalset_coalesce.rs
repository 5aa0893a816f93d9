#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use intervalset::{IntervalSet, RangeInclusiveExt};

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Add(i16, i16),
    Remove(i16, i16),
}

impl Op {
    fn apply(self, set: &mut IntervalSet<i16>) {
        match self {
            Op::Add(a, b) => {
                set.add(if a <= b { a..=b } else { b..=a });
            }
            Op::Remove(a, b) => {
                set.remove(if a <= b { a..=b } else { b..=a });
            }
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut set = IntervalSet::new();

    for op in ops {
        op.apply(&mut set);
    }

    // The set must come out sorted and pairwise disjoint,
    // with the overlap test failing in both directions.
    let mut peek = set.iter().peekable();
    while let Some(interval) = peek.next() {
        if let Some(next) = peek.peek() {
            if interval.start() > next.start()
                || interval.overlaps(next)
                || next.overlaps(interval)
            {
                panic!()
            }
        }
    }
});
