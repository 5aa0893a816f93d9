use intervalset::IntervalSet;

// Walk through a small add/remove session, printing the maintained
// set after every operation.
fn main() {
    let mut reserved = IntervalSet::new();

    println!("{:?}", reserved.add(1..=5));
    println!("{:?}", reserved.remove(2..=3));
    println!("{:?}", reserved.add(6..=8));
    println!("{:?}", reserved.remove(4..=7));
    println!("{:?}", reserved.add(2..=7));

    // Output:
    // [1..=5]
    // [1..=2, 3..=5]
    // [1..=2, 3..=5, 6..=8]
    // [1..=2, 3..=4, 7..=8]
    // [1..=8]
}
