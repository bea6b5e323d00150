use std::{fmt::Debug, num::ParseIntError, ops::Range};

use ariadne::{CharSet, Label, Report, ReportKind};
use thiserror::Error;

use crate::{lists::list_with_tail, Expr, Value};

/// A datum that could not be read, with a report pointing at the problem.
#[derive(Error)]
#[error("{source:}")]
pub struct ExprParseError {
    source: ExprParseErrorInfo,
    report: Report<(String, Range<usize>)>,
}

impl ExprParseError {
    fn new<'a>(s: &'a str, source: String, err: ExprParseErrorLimited<'a>) -> ExprParseError {
        let (start, end) = string_pos(s, err.offender);

        let mut report = Report::build(ReportKind::Error, &source, start)
            .with_config(ariadne::Config::default().with_char_set(CharSet::Ascii))
            .with_message(err.data.to_string());

        let all = (source.clone(), start..end);

        match &err.data {
            ExprParseErrorInfo::ParseInt {
                radix,
                radix_prefix,
                source,
            } => {
                report = report
                    .with_label(Label::new(all).with_message(source.to_string()))
                    .with_note(if let Some(prefix) = radix_prefix {
                        format!("{} makes this a base-{} number", prefix, radix)
                    } else {
                        "without a prefix numbers are base 10".to_string()
                    });
            }
            &ExprParseErrorInfo::BadIntRadix(radix) => {
                report = report
                    .with_label(Label::new(all).with_message(format!("{:?} is not a radix", radix)))
                    .with_note("use 0x for hex, 0o for octal or 0b for binary");
            }
            ExprParseErrorInfo::IndeterminableToken => {
                report = report
                    .with_label(Label::new(all).with_message("can't tell what this is"))
                    .with_note(format!("read as {:?}", err.offender));
            }
            ExprParseErrorInfo::ExpectedCloseParen { opener, closer } => {
                report = report
                    .with_label(Label::new(all).with_message(format!(
                        "{:?} is never closed by a {:?}",
                        opener, closer
                    )))
                    .with_note(format!("add a {:?}", closer));
            }
            ExprParseErrorInfo::WrongCloseParen {
                opener,
                expected_closer,
                got_closer,
            } => {
                report = report
                    .with_label(Label::new(all).with_message(format!(
                        "{:?} is closed by {:?} instead of {:?}",
                        opener, got_closer, expected_closer
                    )))
                    .with_note(format!("use {:?} here", expected_closer));
            }
            ExprParseErrorInfo::WrongDotTrailCount => {
                report = report.with_label(
                    Label::new(all)
                        .with_message("a dot must be followed by exactly one datum"),
                )
            }
            ExprParseErrorInfo::DottedArray => {
                report = report
                    .with_label(Label::new(all).with_message("this array has a dotted tail"))
                    .with_note("arrays are flat; use parens for a dotted list")
            }
            ExprParseErrorInfo::ExpectedCloseQuote => {
                report = report
                    .with_label(Label::new(all).with_message(
                        "this string never ends",
                    ))
                    .with_note("add a closing '\"'");
            }
            ExprParseErrorInfo::InvalidEscape(_, problem) => {
                report = report.with_label(Label::new(all).with_message(problem.to_string()));
            }
            ExprParseErrorInfo::InvalidRemainder => {
                report = report
                    .with_label(
                        Label::new(all)
                            .with_message("more input after the datum"),
                    )
                    .with_note(
                        "read_one wants a single datum; wrap these in a list or use read_many",
                    );
            }
            ExprParseErrorInfo::ExpectedCloseBlockComment => {
                report = report
                    .with_label(Label::new(all).with_message(
                        "this block comment is never closed",
                    ))
                    .with_note("close it with \"*;\"");
            }
            ExprParseErrorInfo::Eof => {
                report = report.with_label(Label::new(all).with_message("no datum here"))
            }
        }

        ExprParseError {
            report: report.finish(),
            source: err.data,
        }
    }

    pub fn report(&self) -> &Report<(String, Range<usize>)> {
        &self.report
    }

    /// Get a reference to the expr parse error's source.
    pub fn source(&self) -> &ExprParseErrorInfo {
        &self.source
    }
}

impl Debug for ExprParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ExprParseError").field(&self.source).finish()
    }
}

#[derive(Error, Debug)]
pub enum ExprParseErrorInfo {
    #[error("bad base-{radix} integer")]
    ParseInt {
        radix: u32,
        radix_prefix: Option<String>,
        source: ParseIntError,
    },
    #[error("unknown radix {0:?}")]
    BadIntRadix(char),
    #[error("unreadable token")]
    IndeterminableToken,
    /// Spans from the opener to the end of input.
    #[error("unclosed {opener:?}")]
    ExpectedCloseParen { opener: char, closer: char },
    #[error("{opener:?} closed by the wrong bracket")]
    WrongCloseParen {
        opener: char,
        expected_closer: char,
        got_closer: char,
    },
    #[error("need exactly one datum after a dot")]
    WrongDotTrailCount,
    #[error("dotted tail in an array")]
    DottedArray,
    #[error("unterminated string")]
    ExpectedCloseQuote,
    /// Byte offset of the backslash, counting the opening quote.
    #[error("bad escape sequence")]
    InvalidEscape(usize, InvalidEscape),
    #[error("trailing input after the datum")]
    InvalidRemainder,
    #[error("unclosed block comment")]
    ExpectedCloseBlockComment,
    #[error("no datum to read")]
    Eof,
}

struct ExprParseErrorLimited<'a> {
    data: ExprParseErrorInfo,
    offender: &'a str,
}

/// Read as many datums as possible from the source string until it is exhausted.
pub fn read_many(whole: &str, source: String) -> Result<Vec<Value>, ExprParseError> {
    let mut out = Vec::new();

    let mut s = whole;
    while !s.is_empty() {
        let (expr, rest) = try_read_expr(s).map_err(|err| {
            tracing::debug!(source = %source, problem = %err.data, "could not read datum");
            ExprParseError::new(whole, source.to_owned(), err)
        })?;
        if let Some(expr) = expr {
            out.push(expr);
        }
        s = rest;
    }

    Ok(out)
}

/// Read exactly one datum and return it.
pub fn read_one(s: &str, source: String) -> Result<Value, ExprParseError> {
    let mut exprs = read_many(s, source.clone())?;
    let info = match exprs.len() {
        1 => return Ok(exprs.swap_remove(0)),
        0 => ExprParseErrorInfo::Eof,
        _ => ExprParseErrorInfo::InvalidRemainder,
    };
    Err(ExprParseError::new(
        s,
        source,
        ExprParseErrorLimited {
            data: info,
            offender: s,
        },
    ))
}

/// Read exactly one datum from an anonymous source.
pub fn read(s: &str) -> Result<Value, ExprParseError> {
    read_one(s, "<input>".to_owned())
}

/// What was read and the input left after it.
type ReadResult<'a, T> = Result<(T, &'a str), ExprParseErrorLimited<'a>>;

#[derive(Debug, Error)]
pub enum InvalidEscape {
    #[error("{0:?} cannot be escaped")]
    BadChar(char),
    #[error("cannot escape the end of file")]
    Eof,
}

/// also trim whitespace from start
fn read_until_delim(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    let idx = s.find(is_delim);
    match idx {
        // there is no remainder, it is all token
        // make the "rest" string still part of s by splitting it at the end
        None => s.split_at(s.len()),
        Some(idx) => s.split_at(idx),
    }
}

fn is_delim(c: char) -> bool {
    match c {
        '(' | ')' | '[' | ']' | ';' => true,
        _ if c.is_whitespace() => true,
        _ => false,
    }
}

fn try_read_expr(whole: &str) -> ReadResult<'_, Option<Value>> {
    let s = whole.trim_start();
    if let Some(body) = s.strip_prefix(";*") {
        // block comment, which may nest
        fn skip(mut s: &str) -> Option<&str> {
            let mut depth = 1;
            loop {
                let close = s.find("*;")?;
                match s.find(";*") {
                    Some(open) if open < close => {
                        depth += 1;
                        s = &s[open + 2..];
                    }
                    _ => {
                        depth -= 1;
                        s = &s[close + 2..];
                        if depth == 0 {
                            return Some(s);
                        }
                    }
                }
            }
        }

        return match skip(body) {
            Some(rest) => try_read_expr(rest),
            None => Err(ExprParseErrorLimited {
                data: ExprParseErrorInfo::ExpectedCloseBlockComment,
                offender: s,
            }),
        };
    } else if s.starts_with(';') {
        // line comment
        let rest = if let Some(idx) = s.find('\n') {
            // one byte to skip the line feed
            &s[idx + 1..]
        } else {
            // get the end of the string
            s.split_at(s.len()).1
        };
        return try_read_expr(rest);
    }

    if let Some(int) = try_read_int(s) {
        let (int, rest) = int?;
        Ok((Some(Expr::integer(int)), rest))
    } else if let Some(float) = try_read_float(s) {
        let (float, rest) = float?;
        Ok((Some(Expr::float(float)), rest))
    } else if let Some(string) = try_read_string(s) {
        let (string, rest) = string?;
        Ok((Some(Expr::string(string)), rest))
    } else if let Some(list) = try_read_sexpr(s) {
        let (list, rest) = list?;
        Ok((Some(list), rest))
    } else if let Some((b, rest)) = try_read_bool(s) {
        Ok((Some(Expr::bool(b)), rest))
    } else if let Some((sym, rest)) = try_read_symbol(s) {
        // Do symbols last so we need to specially omit as little as possible
        Ok((Some(Expr::symbol(sym)), rest))
    } else if s.contains(|c: char| !c.is_whitespace()) {
        Err(ExprParseErrorLimited {
            data: ExprParseErrorInfo::IndeterminableToken,
            offender: s,
        })
    } else {
        Ok((None, s))
    }
}

fn try_read_float(s: &str) -> Option<ReadResult<'_, f64>> {
    let (s, rest) = read_until_delim(s);
    if s.starts_with(|c: char| c.is_numeric() || c == '-' || c == '+' || c == '.') {
        let f = s.parse::<f64>().ok();
        f.map(|f| Ok((f, rest)))
    } else {
        None
    }
}

fn try_read_int(s: &str) -> Option<ReadResult<'_, i64>> {
    let (whole, rest) = read_until_delim(s);
    if whole.contains('.') {
        // maybe a float, who knows? it's sure not an int
        return None;
    }

    if whole.starts_with(|c: char| c.is_numeric() || c == '-' || c == '+') {
        // Only a leading zero introduces a radix prefix like `0x`
        let base = whole.char_indices().nth(1).filter(|_| whole.starts_with('0'));
        let (radix, prefix, s) = match base {
            Some((idx, c)) if c.is_alphabetic() => {
                let radix = match c {
                    'x' => 16,
                    'o' => 8,
                    'b' => 2,
                    _ => {
                        return Some(Err(ExprParseErrorLimited {
                            data: ExprParseErrorInfo::BadIntRadix(c),
                            offender: &whole[idx..idx + c.len_utf8()],
                        }));
                    }
                };
                (radix, Some(&whole[..=idx]), &whole[idx + c.len_utf8()..])
            }
            _ => (10, None, whole),
        };

        match i64::from_str_radix(s, radix) {
            Ok(num) => Some(Ok((num, rest))),
            Err(_) if prefix.is_none() && whole.parse::<f64>().is_ok() => {
                // something like `1e3`, let the float reader have it
                None
            }
            Err(ono) => {
                if whole.starts_with(&['+', '-'][..]) {
                    // Special-case allow symbols starting with `+` and `-`
                    // by passing thru here
                    None
                } else {
                    Some(Err(ExprParseErrorLimited {
                        data: ExprParseErrorInfo::ParseInt {
                            radix,
                            radix_prefix: prefix.map(|s| s.to_owned()),
                            source: ono,
                        },
                        offender: whole,
                    }))
                }
            }
        }
    } else {
        None
    }
}

fn try_read_bool(s: &str) -> Option<(bool, &str)> {
    let (s, rest) = read_until_delim(s);
    match s {
        "true" | "#t" => Some((true, rest)),
        "false" | "#f" => Some((false, rest)),
        _ => None,
    }
}

fn try_read_symbol(s: &str) -> Option<(&str, &str)> {
    let (s, rest) = read_until_delim(s);

    if is_valid_symbol(s) {
        Some((s, rest))
    } else {
        None
    }
}

fn is_valid_symbol(s: &str) -> bool {
    !s.is_empty() && s != "." && !s.starts_with(char::is_numeric) && !s.starts_with('"')
}

/// May return a list, an array or null
fn try_read_sexpr(s: &str) -> Option<ReadResult<'_, Value>> {
    fn recurse<'b>(
        s: &'b str,
        opener: char,
        closer: char,
        original_rest: &'b str,
    ) -> Result<(Vec<Value>, Value, &'b str), ExprParseErrorLimited<'b>> {
        let mut items = Vec::new();
        let mut s = s;
        loop {
            s = s.trim_start();
            if let Some(rest) = s.strip_prefix(closer) {
                // we can finally rest
                return Ok((items, Expr::nil(), rest));
            } else if let Some(got_closer) = s.chars().next().filter(|&c| is_closer(c)) {
                let (start, _) = string_pos(original_rest, s);
                return Err(ExprParseErrorLimited {
                    data: ExprParseErrorInfo::WrongCloseParen {
                        opener,
                        expected_closer: closer,
                        got_closer,
                    },
                    offender: &original_rest[..=start],
                });
            }

            let (car, rest) = try_read_expr(s)?;
            let car = match car {
                Some(car) => car,
                None => {
                    return Err(ExprParseErrorLimited {
                        data: ExprParseErrorInfo::ExpectedCloseParen { opener, closer },
                        offender: original_rest,
                    })
                }
            };
            items.push(car);

            let (rest_first, rest_last) = read_until_delim(rest);
            if rest_first != "." {
                s = rest;
                continue;
            }
            if opener == '[' {
                return Err(ExprParseErrorLimited {
                    data: ExprParseErrorInfo::DottedArray,
                    offender: rest_first,
                });
            }

            // ok we expect one more expr then leave
            let (cdr, rest) = try_read_expr(rest_last)?;
            let cdr = match cdr {
                Some(it) => it,
                None => {
                    return Err(ExprParseErrorLimited {
                        data: ExprParseErrorInfo::WrongDotTrailCount,
                        offender: s,
                    })
                }
            };
            let rest = rest.trim_start();
            return if let Some(rest) = rest.strip_prefix(closer) {
                Ok((items, cdr, rest))
            } else if let Some(got_closer) = rest.chars().next().filter(|&c| is_closer(c)) {
                Err(ExprParseErrorLimited {
                    data: ExprParseErrorInfo::WrongCloseParen {
                        opener,
                        expected_closer: closer,
                        got_closer,
                    },
                    offender: &rest[..got_closer.len_utf8()],
                })
            } else {
                Err(ExprParseErrorLimited {
                    data: ExprParseErrorInfo::WrongDotTrailCount,
                    offender: rest,
                })
            };
        }
    }

    let (s, rest) = read_until_delim(s);
    // The paren is always put in `rest`, this means we have only WS until a (
    if s.is_empty() {
        let opener = rest.chars().next()?;
        if let Some(closer) = match_paren(opener) {
            let s = &rest[opener.len_utf8()..];

            let (items, tail, rest) = match recurse(s, opener, closer, rest) {
                Ok(it) => it,
                Err(err) => return Some(Err(err)),
            };
            let read = if opener == '[' {
                Expr::array(items)
            } else {
                list_with_tail(&items, tail)
            };
            return Some(Ok((read, rest)));
        }
    }

    None
}

/// Get the character matching with the given character
fn match_paren(c: char) -> Option<char> {
    Some(match c {
        '(' => ')',
        '[' => ']',
        _ => return None,
    })
}

fn is_closer(c: char) -> bool {
    c == ')' || c == ']'
}

fn try_read_string(s: &str) -> Option<ReadResult<'_, String>> {
    let whole = s.trim_start();
    let mut s = whole.strip_prefix('"')?;
    let mut accumulated = String::new();
    loop {
        let special = match s.find(&['\\', '"'][..]) {
            Some(idx) => idx,
            None => {
                let remove_newline = if let Some(idx) = whole.find(&['\n', '\r'][..]) {
                    &whole[..idx]
                } else {
                    whole
                };
                return Some(Err(ExprParseErrorLimited {
                    data: ExprParseErrorInfo::ExpectedCloseQuote,
                    offender: remove_newline,
                }));
            }
        };
        accumulated.push_str(&s[..special]);

        if s[special..].starts_with('"') {
            return Some(Ok((accumulated, &s[special + 1..])));
        }

        // add 1 to skip the backslash
        let rest = &s[special + 1..];
        let (esc, rest) = match escape(rest) {
            Ok(it) => it,
            Err(ono) => {
                let (badpos, _) = string_pos(whole, rest);
                return Some(Err(ExprParseErrorLimited {
                    data: ExprParseErrorInfo::InvalidEscape(badpos, ono),
                    // up to and including the backslash
                    offender: &whole[..badpos],
                }));
            }
        };
        accumulated.push(esc);
        s = rest;
    }
}

/// Consume an escape sequence with the backslash already gone.
fn escape(s: &str) -> Result<(char, &str), InvalidEscape> {
    let sentinel = s.chars().next().ok_or(InvalidEscape::Eof)?;
    // the rest, assuming only 1 char escape
    let naive_rest = &s[sentinel.len_utf8()..];
    let escaped = match sentinel {
        '\\' => '\\',
        '"' => '"',
        '\'' => '\'',
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        _ => return Err(InvalidEscape::BadChar(sentinel)),
    };
    Ok((escaped, naive_rest))
}

/// Find the byte positions of the child string's start and end in the parent string.
/// Start is inclusive, end is exclusive.
///
/// Panics if any part of the child string is outside the parent.
fn string_pos<'a>(parent: &'a str, child: &'a str) -> (usize, usize) {
    // this should go down with no unsafe code, even though it involves pointers.
    let pparent = parent.as_ptr() as usize;
    let pchild = child.as_ptr() as usize;

    debug_assert!(
        pparent <= pchild,
        "the child string {:?} started before the parent string {:?} ({:#x} < {:#x})",
        child,
        parent,
        pchild,
        pparent
    );
    let start = pchild - pparent;

    let end = start + child.len();
    debug_assert!(
        end <= parent.len(),
        "the end of the child string {:?} ended after the parent string {:?} ({:#x} > {:#x})",
        child,
        parent,
        pchild + child.len(),
        pparent + parent.len()
    );

    (start, end)
}

#[test]
fn test_string_pos() {
    let s = "True, nervous, dreadfully nervous I have been, and am.";

    let child = &s[3..13];
    let bounds = string_pos(s, child);
    assert_eq!(bounds, (3, 13));

    let bounds = string_pos(s, s);
    assert_eq!(bounds, (0, s.len()));
}
