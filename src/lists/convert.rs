//! Converting lists to and from other things.

use super::{list, proper_items};
use crate::{display::ExprFmt, ListError, Value};

/// The elements of a proper list.
pub fn to_array(lst: &Value) -> Result<Vec<Value>, ListError> {
    proper_items(lst, 0)
}

pub fn array_to_list(items: &[Value]) -> Value {
    list(items)
}

/// Render a value the way it prints: `(1 2 3)`, `(1 . 2)`, `(1 2 . 3)`.
pub fn to_string(value: &Value) -> String {
    ExprFmt::print(value).to_string()
}

#[test]
fn conversions() {
    use crate::{circular_list, read, Expr};

    let lst = read("(1 \"two\" (3))").unwrap();
    let items = to_array(&lst).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(to_string(&array_to_list(&items)), "(1 two (3))");
    assert!(to_array(&read("(1 . 2)").unwrap()).is_err());

    assert_eq!(
        to_string(&Expr::pair(Expr::integer(1), Expr::pair(Expr::integer(2), Expr::integer(3)))),
        "(1 2 . 3)"
    );
    assert_eq!(to_string(&Expr::nil()), "()");
    assert_eq!(to_string(&Expr::array(items)), "[1 two (3)]");

    let ring = circular_list(&[Expr::integer(1), Expr::integer(2)]).unwrap();
    assert_eq!(to_string(&ring), "(1 2 ...)");
}
