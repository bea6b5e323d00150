//! Print and write exprs.

use std::fmt::{self, Debug, Display, Write};

use itertools::Itertools;

use crate::{
    lists::{classify, Shape},
    Expr, PromiseState, Value,
};

/// Formats a value.
///
/// `print` renders strings bare and is what [`to_string`](crate::to_string) uses.
/// `write` quotes and escapes strings, so numbers, strings, lists and
/// arrays read back equal. Symbols spelled like bools or numbers
/// (`true`, `#f`, `12`) read back as those, as do the non-finite floats
/// (`inf`, `NaN`, read as symbols). Procedures, promises and streams have
/// no readable form at all.
///
/// Circular lists print their distinct pairs and then `...`.
#[derive(Clone, Copy)]
pub struct ExprFmt<'a> {
    expr: &'a Value,
    quoted: bool,
}

impl<'a> ExprFmt<'a> {
    pub fn print(expr: &'a Value) -> Self {
        ExprFmt {
            expr,
            quoted: false,
        }
    }

    pub fn write(expr: &'a Value) -> Self {
        ExprFmt { expr, quoted: true }
    }
}

impl Display for ExprFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        recur(f, self.expr, self.quoted)
    }
}

fn recur(w: &mut fmt::Formatter<'_>, expr: &Value, quoted: bool) -> fmt::Result {
    match &**expr {
        Expr::Integer(i) => write!(w, "{}", i),
        Expr::Float(f) => write!(w, "{:?}", f),
        Expr::String(s) => {
            if quoted {
                write!(w, "{:?}", StrFmt(s))
            } else {
                write!(w, "{}", s)
            }
        }
        Expr::Bool(b) => write!(w, "{}", b),
        Expr::Symbol(sym) => write!(w, "{}", sym),
        Expr::Pair(..) => write_list(w, expr, quoted),
        Expr::Nil => write!(w, "()"),
        Expr::Unspecified => write!(w, "<unspecified>"),
        Expr::Array(items) => write!(
            w,
            "[{}]",
            items
                .iter()
                .map(|item| ExprFmt { expr: item, quoted })
                .join(" ")
        ),
        Expr::Procedure { name, .. } => match name {
            Some(name) => write!(w, "<procedure {}>", name),
            None => write!(w, "<anonymous procedure>"),
        },
        Expr::Promise(state) => match &*state.borrow() {
            PromiseState::Ready(_) => write!(w, "<promise (forced)>"),
            _ => write!(w, "<promise>"),
        },
        Expr::Stream { .. } => write!(w, "<stream>"),
        Expr::EmptyStream => write!(w, "<empty stream>"),
    }
}

fn write_list(w: &mut fmt::Formatter<'_>, list: &Value, quoted: bool) -> fmt::Result {
    // A cycle is cut off once every distinct pair has been written.
    let limit = match classify(list) {
        Shape::Circular { lead, period } => Some(lead + period),
        _ => None,
    };

    write!(w, "(")?;
    let mut cursor = list.clone();
    let mut written = 0;
    while let Some((car, cdr)) = cursor.split_cons() {
        if written != 0 {
            write!(w, " ")?;
        }
        recur(w, &car, quoted)?;
        written += 1;
        if Some(written) == limit {
            return write!(w, " ...)");
        }

        match &*cdr {
            // Proper list's end or more list, keep going
            Expr::Nil | Expr::Pair(..) => {}
            // Just a pair
            _ => {
                write!(w, " . ")?;
                recur(w, &cdr, quoted)?;
            }
        }
        cursor = cdr;
    }
    write!(w, ")")
}

/// Displays a string with its escapes written out.
pub struct StrFmt<S: AsRef<str>>(pub S);

impl<S: AsRef<str>> Display for StrFmt<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_ref())
    }
}

impl<S: AsRef<str>> Debug for StrFmt<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.0.as_ref().chars() {
            match c {
                '\t' => write!(f, "\\t")?,
                '\r' => write!(f, "\\r")?,
                '\n' => write!(f, "\\n")?,
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\0' => write!(f, "\\0")?,
                c => f.write_char(c)?,
            }
        }
        write!(f, "\"")
    }
}

#[test]
fn str_escapes() {
    assert_eq!(format!("{:?}", StrFmt("a\"b\\c\n")), r#""a\"b\\c\n""#);
    assert_eq!(format!("{}", StrFmt("a\"b")), "a\"b");
}

#[test]
fn written_forms_that_read_back_differently() {
    use crate::{is_equal, read};

    let written = |v: &Value| ExprFmt::write(v).to_string();

    let sym = Expr::symbol("true");
    assert_eq!(written(&sym), "true");
    assert!(!is_equal(&read(&written(&sym)).unwrap(), &sym));

    let inf = Expr::float(f64::INFINITY);
    assert_eq!(written(&inf), "inf");
    assert!(read(&written(&inf)).unwrap().is_symbol());

    let plain = crate::read(r#"(a "b\n" [1.5 -2])"#).unwrap();
    assert!(is_equal(&read(&written(&plain)).unwrap(), &plain));
}
