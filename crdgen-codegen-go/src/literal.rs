//! Scalar literals, spelled the way `jen.Lit` spells them.
//!
//! Every sized integer, `uint`, `uintptr` and `float32` literal carries an
//! explicit conversion so the constant is typed without help from context.
//! `int`, `float64`, `bool` and `string` are the default types of untyped
//! constants and are written bare.

use crdgen_ir::{Scalar, ScalarKind};

use crate::ast::Expr;
use crate::imports::MATH;

/// The Go literal for `scalar` as a value of the builtin `kind`. `None`
/// when the payload cannot represent that kind.
pub fn scalar(kind: ScalarKind, scalar: &Scalar) -> Option<Expr> {
    let expr = match (kind, scalar) {
        (ScalarKind::Bool, Scalar::Bool(b)) => Expr::ident(if *b { "true" } else { "false" }),
        (ScalarKind::String, Scalar::String(s)) => Expr::lit(string(s)),
        (ScalarKind::Int, Scalar::Int(i)) => Expr::lit(i.to_string()),
        (kind, Scalar::Int(i)) if kind.is_signed() => convert(kind, Expr::lit(i.to_string())),
        (kind, Scalar::Uint(u)) if kind.is_unsigned() => convert(kind, Expr::lit(format!("{u:#x}"))),
        (ScalarKind::Float64, Scalar::Float(f)) => float64(*f),
        (ScalarKind::Float32, Scalar::Float(f)) => convert(ScalarKind::Float32, float32(*f as f32)),
        _ => return None,
    };
    Some(expr)
}

fn convert(kind: ScalarKind, inner: Expr) -> Expr {
    Expr::ident(kind.go_name()).call(vec![inner])
}

/// Non-finite values and negative zero have no constant spelling.
fn special(f: f64) -> Option<Expr> {
    if f.is_nan() {
        Some(Expr::qual(MATH, "NaN").call(vec![]))
    } else if f.is_infinite() {
        let sign = if f > 0.0 { "1" } else { "-1" };
        Some(Expr::qual(MATH, "Inf").call(vec![Expr::lit(sign)]))
    } else if f == 0.0 && f.is_sign_negative() {
        Some(Expr::qual(MATH, "Copysign").call(vec![Expr::lit("0"), Expr::lit("-1")]))
    } else {
        None
    }
}

fn float64(f: f64) -> Expr {
    if let Some(expr) = special(f) {
        return expr;
    }
    let mut text = shortest(&format!("{:e}", f.abs()), f < 0.0);
    if !text.contains('.') && !text.contains('e') {
        text.push_str(".0");
    }
    Expr::lit(text)
}

fn float32(f: f32) -> Expr {
    if let Some(expr) = special(f64::from(f)) {
        return expr;
    }
    Expr::lit(shortest(&format!("{:e}", f.abs()), f < 0.0))
}

/// Go's `%v` layout for floats: the shortest round-trip digits, in
/// exponent form when the decimal exponent is below -4 or at least 6.
///
/// `sci` is Rust's shortest `{:e}` rendering of the absolute value.
fn shortest(sci: &str, negative: bool) -> String {
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = if digits.is_empty() { "0".to_string() } else { digits };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if exp < -4 || exp >= 6 {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.abs()));
        return out;
    }

    let point = exp + 1;
    if point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let point = point as usize;
        if digits.len() <= point {
            out.push_str(&digits);
            out.push_str(&"0".repeat(point - digits.len()));
        } else {
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }
    out
}

/// A double-quoted Go string literal.
pub fn string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{0b}' => out.push_str("\\v"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if c.is_control() || c == '\u{feff}' => {
                if (c as u32) <= 0xffff {
                    out.push_str(&format!("\\u{:04x}", c as u32));
                } else {
                    out.push_str(&format!("\\U{:08x}", c as u32));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::Printer;

    fn lit(kind: ScalarKind, value: Scalar) -> String {
        Printer::canonical().print(&scalar(kind, &value).unwrap())
    }

    #[test]
    fn test_integers() {
        assert_eq!(lit(ScalarKind::Int, Scalar::Int(5)), "5");
        assert_eq!(lit(ScalarKind::Int32, Scalar::Int(5)), "int32(5)");
        assert_eq!(lit(ScalarKind::Int8, Scalar::Int(-128)), "int8(-128)");
        assert_eq!(lit(ScalarKind::Int64, Scalar::Int(i64::MIN)), "int64(-9223372036854775808)");
        assert_eq!(lit(ScalarKind::Uint8, Scalar::Uint(255)), "uint8(0xff)");
        assert_eq!(lit(ScalarKind::Uint, Scalar::Uint(0)), "uint(0x0)");
        assert_eq!(lit(ScalarKind::Uintptr, Scalar::Uint(1)), "uintptr(0x1)");
    }

    #[test]
    fn test_float64() {
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(5.0)), "5.0");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(0.0)), "0.0");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(1.5)), "1.5");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(-0.25)), "-0.25");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(100000.0)), "100000.0");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(1e6)), "1e+06");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(123456789.0)), "1.23456789e+08");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(0.0001)), "0.0001");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(0.00001)), "1e-05");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(1e300)), "1e+300");
    }

    #[test]
    fn test_float32_uses_single_precision_digits() {
        assert_eq!(lit(ScalarKind::Float32, Scalar::Float(f64::from(0.1f32))), "float32(0.1)");
        assert_eq!(lit(ScalarKind::Float32, Scalar::Float(2.0)), "float32(2)");
    }

    #[test]
    fn test_special_floats() {
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(f64::NAN)), "\"math\".NaN()");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(f64::NEG_INFINITY)), "\"math\".Inf(-1)");
        assert_eq!(lit(ScalarKind::Float32, Scalar::Float(f64::INFINITY)), "float32(\"math\".Inf(1))");
        assert_eq!(lit(ScalarKind::Float64, Scalar::Float(-0.0)), "\"math\".Copysign(0, -1)");
    }

    #[test]
    fn test_strings() {
        assert_eq!(string("plain"), "\"plain\"");
        assert_eq!(string("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(string("line\nnext\ttab"), "\"line\\nnext\\ttab\"");
        assert_eq!(string("\u{1}"), "\"\\x01\"");
        assert_eq!(string("héllo 世界"), "\"héllo 世界\"");
        assert_eq!(string("\u{85}"), "\"\\u0085\"");
    }

    #[test]
    fn test_bool_and_mismatch() {
        assert_eq!(lit(ScalarKind::Bool, Scalar::Bool(true)), "true");
        assert!(scalar(ScalarKind::Int32, &Scalar::String("x".into())).is_none());
        assert!(scalar(ScalarKind::Uint8, &Scalar::Int(1)).is_none());
    }
}
