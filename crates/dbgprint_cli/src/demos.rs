//! The demo tests, one per family of printable values.

use dbgprint::{debug, DebugRepr};
use dbgprint_harness::declare_test;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, LinkedList, VecDeque};
use std::rc::Rc;

/// Print `x` as an owned value, a reference, a shared pointer and a closure result.
fn single_test<T: DebugRepr + Clone>(x: T) {
    let owned = x.clone();
    let y = &x;
    let z = Rc::new(x.clone());
    let lambda = move || owned.clone();
    debug!(x, y, z, lambda());
}

declare_test!(pub TestBasicType {
    single_test(1);
    single_test('x');
    single_test(b'x' as i8);
    single_test(false);
    single_test(1i64 << 60);
    single_test(2.0);
});

declare_test!(pub TestStrings {
    let word = String::from("mao");
    let quoted = "say \"hi\"";
    let escapes = "tab\tnewline\nnul\0";
    let chars = ['\'', '\\', 'z'];
    debug!(word, quoted, escapes, chars);
});

declare_test!(pub TestSequences {
    let empty: Vec<i32> = Vec::new();
    let grid = vec![vec![1, 2], vec![3]];
    let window = VecDeque::from(vec![4, 5, 6]);
    let list: LinkedList<_> = "ab".chars().collect();
    let fixed = [0.5, 1.0];
    debug!(empty, grid, window, list, fixed);
});

declare_test!(pub TestAssociative {
    let seen: BTreeSet<_> = vec![3, 1, 2].into_iter().collect();
    let mut degree = BTreeMap::new();
    degree.insert('a', 2);
    degree.insert('b', 0);
    let mut memo = HashMap::new();
    memo.insert((1, 2), true);
    debug!(seen, degree, memo);
});

declare_test!(pub TestTuples {
    let pair = (3, 4);
    let triple = ("id", 7u64, 'c');
    let nested = ((1, 2), vec![(3, "x")]);
    debug!(pair, triple, nested);
});

declare_test!(pub TestAdapters {
    let heap: BinaryHeap<_> = vec![5, 1, 8, 3].into_iter().collect();
    let min_heap: BinaryHeap<_> = vec![5, 1, 8, 3].into_iter().map(Reverse).collect();
    let events: BinaryHeap<_> = vec![(2, "b"), (9, "a")].into_iter().collect();
    debug!(heap, min_heap, events);
});
