//! The three set operations on `LineSet`s, and dispatch from an operation
//! name to the operation. The operations never modify their operands; each
//! returns a new set.

use crate::args::OpName;
use crate::error::{Error, Invalid};
use crate::set::LineSet;

/// The lines in both `a` and `b`, in `a`'s order.
#[must_use]
pub fn intersection(a: &LineSet, b: &LineSet) -> LineSet {
    let mut set = a.clone();
    set.retain(|line| b.contains(line));
    set
}

/// The lines in either `a` or `b`: `a`'s lines in order, then the lines only
/// `b` has, in `b`'s order.
#[must_use]
pub fn union(a: &LineSet, b: &LineSet) -> LineSet {
    let mut set = a.clone();
    set.extend(b.iter().map(str::to_owned));
    set
}

/// The lines in `a` but not in `b`, in `a`'s order. Lines only `b` has never
/// appear.
#[must_use]
pub fn difference(a: &LineSet, b: &LineSet) -> LineSet {
    let mut set = a.clone();
    set.retain(|line| !b.contains(line));
    set
}

/// Calculates the set operation named by `operation`:
///
/// * `OpName::Intersect` returns the lines that occur in both operands,
/// * `OpName::Union` returns the lines that occur in either operand, and
/// * `OpName::Diff` returns the lines that occur in `a` but not `b`.
///
/// The result is written with `a`'s line terminator.
#[must_use]
pub fn calculate(operation: OpName, a: &LineSet, b: &LineSet) -> LineSet {
    match operation {
        OpName::Intersect => intersection(a, b),
        OpName::Union => union(a, b),
        OpName::Diff => difference(a, b),
    }
}

/// The operation named by `selector`. A missing or unknown name is an
/// `Error::InvalidOperation`.
pub fn selected(selector: Option<&str>) -> Result<OpName, Error> {
    let name = selector.ok_or(Invalid::NoOperation)?;
    Ok(name.parse::<OpName>()?)
}

/// Like `calculate`, but with the operation given by name. If the name is
/// missing or unknown, no operation is run.
pub fn dispatch(selector: Option<&str>, a: &LineSet, b: &LineSet) -> Result<LineSet, Error> {
    let operation = selected(selector)?;
    Ok(calculate(operation, a, b))
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::set::LineTerminator;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use self::OpName::*;

    fn set(lines: &[&str]) -> LineSet {
        lines.iter().copied().collect()
    }

    fn output(set: &LineSet) -> String {
        let mut out = Vec::new();
        set.output_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sorted(set: &LineSet) -> Vec<&str> {
        set.iter().sorted().collect()
    }

    #[test]
    fn results_for_each_operation() {
        let a = set(&["a", "b", "c"]);
        let b = set(&["b", "c", "d"]);
        assert_eq!(sorted(&calculate(Intersect, &a, &b)), ["b", "c"]);
        assert_eq!(sorted(&calculate(Union, &a, &b)), ["a", "b", "c", "d"]);
        assert_eq!(sorted(&calculate(Diff, &a, &b)), ["a"]);
        assert_eq!(sorted(&calculate(Diff, &b, &a)), ["d"]);
    }

    #[test]
    fn results_keep_first_seen_order() {
        let x = set(&["xyz", "abc", "xy", "xz", "x"]);
        let y = set(&["xyz", "abc", "xy", "yz", "y"]);
        assert_eq!(output(&union(&x, &y)), "xyz\nabc\nxy\nxz\nx\nyz\ny\n");
        assert_eq!(output(&intersection(&y, &x)), "xyz\nabc\nxy\n");
        assert_eq!(output(&difference(&x, &y)), "xz\nx\n");
    }

    #[test]
    fn empty_operands() {
        let empty = LineSet::default();
        let x = set(&["x"]);
        assert_eq!(union(&empty, &x), x);
        assert_eq!(union(&x, &empty), x);
        assert!(intersection(&empty, &x).is_empty());
        assert!(intersection(&x, &empty).is_empty());
        assert!(difference(&empty, &x).is_empty());
        assert_eq!(difference(&x, &empty), x);
        for op in [Intersect, Union, Diff] {
            assert!(calculate(op, &empty, &empty).is_empty(), "for {op:?}");
        }
    }

    #[test]
    fn operands_are_not_modified() {
        let a = set(&["a", "b"]);
        let b = set(&["b", "c"]);
        for op in [Intersect, Union, Diff] {
            let _ = calculate(op, &a, &b);
        }
        assert_eq!(output(&a), "a\nb\n");
        assert_eq!(output(&b), "b\nc\n");
    }

    #[test]
    fn result_takes_the_first_operands_terminator() {
        let mut a = LineSet::with_terminator(LineTerminator::CrLf);
        a.extend(["a".to_string()]);
        let b = set(&["b"]);
        for op in [Intersect, Union, Diff] {
            assert_eq!(calculate(op, &a, &b).line_terminator(), LineTerminator::CrLf);
            assert_eq!(calculate(op, &b, &a).line_terminator(), LineTerminator::Lf);
        }
    }

    #[test]
    fn dispatch_by_name() {
        let a = set(&["a", "b"]);
        let b = set(&["b"]);
        assert_eq!(dispatch(Some("union"), &a, &b).unwrap(), set(&["a", "b"]));
        assert_eq!(dispatch(Some("intersect"), &a, &b).unwrap(), set(&["b"]));
        assert_eq!(dispatch(Some("差集"), &a, &b).unwrap(), set(&["a"]));
    }

    #[test]
    fn dispatch_rejects_unknown_and_missing_operations() {
        let a = set(&["a"]);
        match dispatch(Some("xor"), &a, &a) {
            Err(Error::InvalidOperation(Invalid::UnknownOperation(name))) => assert_eq!(name, "xor"),
            other => panic!("expected UnknownOperation, got {other:?}"),
        }
        assert!(matches!(
            dispatch(None, &a, &a),
            Err(Error::InvalidOperation(Invalid::NoOperation))
        ));
    }

    fn line_set() -> impl Strategy<Value = LineSet> {
        // A small alphabet so that random sets overlap
        prop::collection::vec("[abc]{0,2}", 0..12)
            .prop_map(|lines| lines.into_iter().collect::<LineSet>())
    }

    proptest! {
        #[test]
        fn intersection_and_union_are_symmetric(a in line_set(), b in line_set()) {
            prop_assert_eq!(intersection(&a, &b), intersection(&b, &a));
            prop_assert_eq!(union(&a, &b), union(&b, &a));
        }

        #[test]
        fn difference_is_asymmetric(a in line_set(), b in line_set()) {
            // A - B and B - A share nothing, so they're equal only when both are empty
            let ab = difference(&a, &b);
            let ba = difference(&b, &a);
            prop_assert!(ab.iter().all(|line| !ba.contains(line)));
            prop_assert_eq!(ab == ba, ab.is_empty() && ba.is_empty());
        }

        #[test]
        fn operations_with_itself(a in line_set()) {
            prop_assert_eq!(&intersection(&a, &a), &a);
            prop_assert_eq!(&union(&a, &a), &a);
            prop_assert!(difference(&a, &a).is_empty());
        }

        #[test]
        fn union_is_partitioned_by_differences_and_intersection(a in line_set(), b in line_set()) {
            let parts = union(
                &union(&difference(&a, &b), &difference(&b, &a)),
                &intersection(&a, &b),
            );
            prop_assert_eq!(union(&a, &b), parts);
        }

        #[test]
        fn recomputing_gives_the_same_result(a in line_set(), b in line_set()) {
            for op in [Intersect, Union, Diff] {
                let first = calculate(op, &a, &b);
                let again = calculate(op, &a, &b);
                prop_assert_eq!(output(&first), output(&again));
            }
        }

        #[test]
        fn results_have_set_semantics(a in line_set(), b in line_set()) {
            let either = union(&a, &b);
            for line in a.iter().chain(b.iter()) {
                prop_assert!(either.contains(line));
            }
            let both = intersection(&a, &b);
            for line in both.iter() {
                prop_assert!(a.contains(line) && b.contains(line));
            }
            let only_a = difference(&a, &b);
            for line in a.iter() {
                prop_assert_eq!(only_a.contains(line), !b.contains(line));
            }
            prop_assert!(only_a.len() <= a.len());
        }
    }
}
