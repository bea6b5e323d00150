//! What kind of list is this?

use gc::Gc;

use super::bad_arg_type;
use crate::{Expr, ListError, Value};

/// The shape of a chain of pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Ends in `()` after this many pairs.
    Proper(usize),
    /// Ends in some other atom after this many pairs.
    Dotted(usize),
    /// `lead` pairs lead up to a cycle of `period` pairs.
    Circular { lead: usize, period: usize },
    /// Not a pair and not `()`.
    Atom,
}

/// Find the shape of a list in linear time and constant space.
///
/// Never loops forever, even on circular lists.
pub fn classify(list: &Value) -> Shape {
    // the hare takes two steps for every one of the tortoise's
    let mut tortoise = list.clone();
    let mut hare = list.clone();
    let mut len = 0;
    loop {
        for _ in 0..2 {
            hare = match hare.next_cdr() {
                Some(cdr) => cdr,
                None if hare.is_nil() => return Shape::Proper(len),
                None if len == 0 => return Shape::Atom,
                None => return Shape::Dotted(len),
            };
            len += 1;
        }
        // the hare already went past here, so this is a pair
        tortoise = step(&tortoise);
        if Gc::ptr_eq(&tortoise, &hare) {
            return cycle_shape(list, &hare);
        }
    }
}

fn step(pair: &Value) -> Value {
    pair.next_cdr().unwrap_or_else(|| pair.clone())
}

fn cycle_shape(list: &Value, meeting: &Value) -> Shape {
    let mut period = 1;
    let mut probe = step(meeting);
    while !Gc::ptr_eq(&probe, meeting) {
        probe = step(&probe);
        period += 1;
    }

    // walk one cursor from the head and one `period` ahead of it;
    // they first meet where the cycle starts
    let mut ahead = list.clone();
    for _ in 0..period {
        ahead = step(&ahead);
    }
    let mut behind = list.clone();
    let mut lead = 0;
    while !Gc::ptr_eq(&behind, &ahead) {
        behind = step(&behind);
        ahead = step(&ahead);
        lead += 1;
    }

    Shape::Circular { lead, period }
}

pub fn is_pair(value: &Value) -> bool {
    value.is_pair()
}

pub fn not_pair(value: &Value) -> bool {
    !value.is_pair()
}

pub fn is_null(value: &Value) -> bool {
    value.is_nil()
}

/// A finite chain of pairs ending in `()`, or `()` itself.
pub fn is_proper_list(value: &Value) -> bool {
    matches!(classify(value), Shape::Proper(_))
}

pub fn is_circular_list(value: &Value) -> bool {
    matches!(classify(value), Shape::Circular { .. })
}

/// A finite chain of pairs ending in an atom other than `()`.
pub fn is_dotted_list(value: &Value) -> bool {
    matches!(classify(value), Shape::Dotted(_))
}

/// Whether a list is empty. Anything that isn't a list is an error.
pub fn is_null_list(value: &Value) -> Result<bool, ListError> {
    match &**value {
        Expr::Nil => Ok(true),
        Expr::Pair(..) => Ok(false),
        _ => Err(bad_arg_type(value, 0, "list")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{circular_list, last_pair, read, set_cdr};

    #[test]
    fn shapes() {
        assert_eq!(classify(&read("()").unwrap()), Shape::Proper(0));
        assert_eq!(classify(&read("(1 2 3)").unwrap()), Shape::Proper(3));
        assert_eq!(classify(&read("(1 2 . 3)").unwrap()), Shape::Dotted(2));
        assert_eq!(classify(&read("3").unwrap()), Shape::Atom);
    }

    #[test]
    fn cycles_are_measured() {
        let ring = circular_list(&[Expr::integer(1), Expr::integer(2), Expr::integer(3)]).unwrap();
        assert_eq!(classify(&ring), Shape::Circular { lead: 0, period: 3 });

        // (a b c d e) with e pointing back at c
        let list = read("(a b c d e)").unwrap();
        let c = list.next_cdr().unwrap().next_cdr().unwrap();
        set_cdr(&last_pair(&list).unwrap(), c).unwrap();
        assert_eq!(classify(&list), Shape::Circular { lead: 2, period: 3 });

        let one = read("(x)").unwrap();
        set_cdr(&one, one.clone()).unwrap();
        assert_eq!(classify(&one), Shape::Circular { lead: 0, period: 1 });
        assert!(is_circular_list(&one));
        assert!(!is_proper_list(&one));
        assert!(!is_dotted_list(&one));
    }

    #[test]
    fn atoms_are_neither() {
        assert!(!is_dotted_list(&Expr::integer(42)));
        assert!(!is_proper_list(&Expr::integer(42)));
        assert!(!is_dotted_list(&Expr::nil()));
        assert!(is_proper_list(&Expr::nil()));
        assert!(is_null_list(&Expr::integer(42)).is_err());
    }
}
