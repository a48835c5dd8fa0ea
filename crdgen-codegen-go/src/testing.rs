//! Test utilities for the Go generator.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.
//!
//! The evaluator reads back the Go subset the compiler emits. It is guided
//! by the expected [`TypeDescriptor`] the way the Go type checker would be,
//! and applies Go's defaulting: fields missing from a composite literal
//! take their zero value. Records rebuilt from JSON come back as zero
//! values carrying that JSON as their encoding; [`equivalent`] compares
//! them by encoding.

use std::fmt;

use crdgen_ir::{Data, Kind, Scalar, ScalarKind, TypeDescriptor, Value};

use crate::ast::Expr;
use crate::compiler::{RenderContext, ValueCompiler};

/// Error from evaluating emitted Go source.
#[derive(Debug)]
pub struct EvalError {
    pub message: String,
    /// Source text from the point of failure.
    pub near: String,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\nNear:\n{}", self.message, self.near)
    }
}

impl std::error::Error for EvalError {}

type Result<T> = std::result::Result<T, EvalError>;

/// Evaluate a Go expression of type `ty`.
pub fn eval(source: &str, ty: &TypeDescriptor) -> Result<Value> {
    let mut parser = Parser::new(source)?;
    let value = parser.value(ty)?;
    parser.finish()?;
    Ok(value)
}

/// Evaluate an expression tree, printed with full import paths.
pub fn eval_expr(expr: &Expr, ty: &TypeDescriptor) -> Result<Value> {
    eval(&expr.canonical(), ty)
}

/// Evaluate the value returned by the zero-argument function `name` in a
/// generated file. `ty` is the function's result type.
pub fn eval_constructor(source: &str, name: &str, ty: &TypeDescriptor) -> Result<Value> {
    let header = format!("func {name}() ");
    let not_found = || EvalError {
        message: format!("function {name} not found"),
        near: String::new(),
    };
    let start = source.find(&header).ok_or_else(not_found)?;
    let end = source[start..].find("\n}\n").ok_or_else(not_found)? + start + 2;

    let mut parser = Parser::new(&source[start..end])?;
    parser.expect_ident("func")?;
    parser.expect_ident(name)?;
    parser.expect_punct("(")?;
    parser.expect_punct(")")?;
    parser.skip_type()?;
    parser.expect_punct("{")?;
    parser.expect_ident("return")?;
    let value = parser.value(ty)?;
    parser.expect_punct("}")?;
    parser.finish()?;
    Ok(value)
}

/// Deep equality that treats maps as unordered, compares floats by bit
/// pattern (any NaN equals any NaN) and compares records that hide state
/// by their JSON encoding when both sides have one.
pub fn equivalent(a: &Value, b: &Value) -> bool {
    match (a.data(), b.data()) {
        (Data::Scalar(Scalar::Float(x)), Data::Scalar(Scalar::Float(y))) => {
            (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits()
        }
        (Data::Scalar(x), Data::Scalar(y)) => x == y,
        (Data::Pointer(None), Data::Pointer(None)) => true,
        (Data::Pointer(Some(x)), Data::Pointer(Some(y))) => equivalent(x, y),
        (Data::Sequence(xs), Data::Sequence(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| equivalent(x, y))
        }
        (Data::Mapping(xs), Data::Mapping(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, v)| ys.iter().any(|(k2, v2)| equivalent(k, k2) && equivalent(v, v2)))
        }
        (Data::Record(x), Data::Record(y)) => {
            if a.classify().has_hidden_fields()
                && let (Some(Ok(ex)), Some(Ok(ey))) = (&x.encoded, &y.encoded)
            {
                return ex == ey;
            }
            x.fields.len() == y.fields.len() && x.fields.iter().zip(&y.fields).all(|(f, g)| equivalent(f, g))
        }
        (Data::Unsupported, Data::Unsupported) => true,
        _ => false,
    }
}

/// Compile `value`, evaluate the result and assert nothing changed.
pub fn assert_round_trip(value: &Value) {
    let expr = match ValueCompiler::new().render(value, RenderContext::TOP) {
        Ok(Some(expr)) => expr,
        Ok(None) => panic!("{} has no Go literal form", value.classify()),
        Err(e) => panic!("failed to compile {}: {e}", value.classify()),
    };
    let source = expr.canonical();
    let back = eval(&source, value.classify()).unwrap_or_else(|e| panic!("failed to evaluate emitted Go: {e}"));
    assert!(
        equivalent(value, &back),
        "round trip changed the value\n\nemitted:\n{source}\n\noriginal: {value:?}\n\nevaluated: {back:?}"
    );
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let mut diff = String::new();
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
        let act = actual_lines.get(i).copied().unwrap_or("<missing>");
        if exp != act {
            diff.push_str(&format!("Line {}:\n  expected: {}\n  actual:   {}\n", i + 1, exp, act));
        }
    }
    panic!("Content mismatch:\n{}", diff);
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Number(String),
    Str(String),
    Punct(&'static str),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) | Token::Number(s) => f.write_str(s),
            Token::Str(s) => write!(f, "{s:?}"),
            Token::Punct(p) => f.write_str(p),
        }
    }
}

const PUNCTS: [&str; 13] = [":=", "&", "*", "(", ")", "{", "}", "[", "]", ",", ":", ".", "-"];

fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(at, c)) = chars.peek() {
        let rest = &source[at..];
        if c.is_whitespace() {
            chars.next();
        } else if rest.starts_with("//") {
            while chars.next_if(|&(_, c)| c != '\n').is_some() {}
        } else if c.is_ascii_alphabetic() || c == '_' {
            let mut ident = String::new();
            while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_alphanumeric() || c == '_') {
                ident.push(c);
            }
            tokens.push(Token::Ident(ident));
        } else if c.is_ascii_digit() {
            let hex = rest.starts_with("0x") || rest.starts_with("0X");
            let mut number = String::new();
            while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_alphanumeric() || c == '.' || c == '_') {
                number.push(c);
                if !hex && (c == 'e' || c == 'E') {
                    if let Some((_, sign)) = chars.next_if(|&(_, c)| c == '+' || c == '-') {
                        number.push(sign);
                    }
                }
            }
            tokens.push(Token::Number(number));
        } else if c == '"' {
            chars.next();
            tokens.push(Token::Str(unquote(&mut chars, rest)?));
        } else if c == '=' {
            chars.next();
            tokens.push(Token::Punct("="));
        } else if let Some(punct) = PUNCTS.iter().find(|p| rest.starts_with(*p)) {
            for _ in 0..punct.len() {
                chars.next();
            }
            tokens.push(Token::Punct(*punct));
        } else {
            return Err(EvalError {
                message: format!("unexpected character {c:?}"),
                near: rest.chars().take(40).collect(),
            });
        }
    }
    Ok(tokens)
}

fn unquote(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>, rest: &str) -> Result<String> {
    let unterminated = || EvalError {
        message: "unterminated string literal".to_string(),
        near: rest.chars().take(40).collect(),
    };
    let mut out = String::new();
    loop {
        let (_, c) = chars.next().ok_or_else(unterminated)?;
        match c {
            '"' => return Ok(out),
            '\\' => {
                let (_, escape) = chars.next().ok_or_else(unterminated)?;
                let digits = match escape {
                    'x' => 2,
                    'u' => 4,
                    'U' => 8,
                    _ => 0,
                };
                if digits == 0 {
                    out.push(match escape {
                        'n' => '\n',
                        'r' => '\r',
                        't' => '\t',
                        'a' => '\u{07}',
                        'b' => '\u{08}',
                        'f' => '\u{0c}',
                        'v' => '\u{0b}',
                        other => other,
                    });
                    continue;
                }
                let hex: String = (0..digits).filter_map(|_| chars.next().map(|(_, c)| c)).collect();
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(unterminated)?;
                out.push(decoded);
            }
            c => out.push(c),
        }
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(source: &str) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(source)?,
            pos: 0,
        })
    }

    fn error(&self, message: impl Into<String>) -> EvalError {
        let near: Vec<String> = self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .take(12)
            .map(Token::to_string)
            .collect();
        EvalError {
            message: message.into(),
            near: near.join(" "),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn is_punct(&self, punct: &str) -> bool {
        matches!(self.peek(), Some(Token::Punct(p)) if *p == punct)
    }

    fn is_ident(&self, name: &str) -> bool {
        matches!(self.peek(), Some(Token::Ident(i)) if i == name)
    }

    fn eat_punct(&mut self, punct: &str) -> bool {
        let found = self.is_punct(punct);
        if found {
            self.pos += 1;
        }
        found
    }

    fn eat_ident(&mut self, name: &str) -> bool {
        let found = self.is_ident(name);
        if found {
            self.pos += 1;
        }
        found
    }

    fn expect_punct(&mut self, punct: &str) -> Result<()> {
        if self.eat_punct(punct) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{punct}`")))
        }
    }

    fn expect_ident(&mut self, name: &str) -> Result<()> {
        if self.eat_ident(name) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{name}`")))
        }
    }

    fn ident(&mut self) -> Result<String> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.error("expected identifier")),
        }
    }

    fn number(&mut self) -> Result<String> {
        match self.peek() {
            Some(Token::Number(text)) => {
                let text = text.clone();
                self.pos += 1;
                Ok(text)
            }
            _ => Err(self.error("expected number")),
        }
    }

    fn string(&mut self) -> Result<String> {
        match self.peek() {
            Some(Token::Str(text)) => {
                let text = text.clone();
                self.pos += 1;
                Ok(text)
            }
            _ => Err(self.error("expected string literal")),
        }
    }

    fn finish(&self) -> Result<()> {
        if self.pos < self.tokens.len() {
            return Err(self.error("unexpected trailing tokens"));
        }
        Ok(())
    }

    fn is_qualified(&self) -> bool {
        matches!(self.peek(), Some(Token::Ident(_) | Token::Str(_))) && self.peek_at(1) == Some(&Token::Punct("."))
    }

    /// `alias.Name` or `"path".Name`; returns `Name`.
    fn qualified(&mut self) -> Result<String> {
        if !self.is_qualified() {
            return Err(self.error("expected qualified identifier"));
        }
        self.pos += 2;
        self.ident()
    }

    fn skip_type(&mut self) -> Result<()> {
        while self.eat_punct("*") {}
        if self.is_qualified() {
            self.qualified()?;
            return Ok(());
        }
        match self.next() {
            Some(Token::Punct("[")) => {
                if !self.eat_punct("]") {
                    self.number()?;
                    self.expect_punct("]")?;
                }
                self.skip_type()
            }
            Some(Token::Punct("(")) => {
                self.skip_type()?;
                self.expect_punct(")")
            }
            Some(Token::Ident(word)) => match word.as_str() {
                "map" => {
                    self.expect_punct("[")?;
                    self.skip_type()?;
                    self.expect_punct("]")?;
                    self.skip_type()
                }
                "struct" => {
                    self.expect_punct("{")?;
                    while !self.eat_punct("}") {
                        self.ident()?;
                        self.skip_type()?;
                    }
                    Ok(())
                }
                "chan" => self.skip_type(),
                "func" => {
                    self.expect_punct("(")?;
                    self.expect_punct(")")
                }
                _ => Ok(()),
            },
            _ => {
                self.pos -= 1;
                Err(self.error("expected type"))
            }
        }
    }

    /// `{`, optionally preceded by the literal's type.
    fn composite_open(&mut self) -> Result<()> {
        if !self.is_punct("{") {
            self.skip_type()?;
        }
        self.expect_punct("{")
    }

    /// After an element: either `,` or the closing brace. Returns true
    /// when the literal is closed.
    fn element_end(&mut self) -> Result<bool> {
        if self.eat_punct(",") {
            return Ok(self.eat_punct("}"));
        }
        self.expect_punct("}")?;
        Ok(true)
    }

    fn value(&mut self, ty: &TypeDescriptor) -> Result<Value> {
        match &ty.kind {
            Kind::Scalar(kind) => self.scalar(ty, *kind),
            Kind::Pointer(elem) => self.pointer(ty, elem),
            Kind::Sequence { elem, len } => self.sequence(ty, elem, *len),
            Kind::Mapping { key, value } => self.mapping(ty, key, value),
            Kind::Record(_) => self.record(ty, false),
            Kind::Unsupported(_) => {
                self.expect_ident("nil")?;
                Ok(Value::unsupported(ty.clone()))
            }
        }
    }

    fn scalar(&mut self, ty: &TypeDescriptor, kind: ScalarKind) -> Result<Value> {
        if !ty.is_custom_named() {
            return Ok(Value::scalar(ty.clone(), self.builtin(kind)?));
        }
        self.qualified()?;
        self.expect_punct("(")?;
        let scalar = self.builtin(kind)?;
        self.expect_punct(")")?;
        Ok(Value::scalar(ty.clone(), scalar))
    }

    /// A constant, possibly inside a conversion to its builtin type.
    fn builtin(&mut self, kind: ScalarKind) -> Result<Scalar> {
        if self.is_ident(kind.go_name()) && self.peek_at(1) == Some(&Token::Punct("(")) {
            self.pos += 2;
            let scalar = self.constant(kind)?;
            self.expect_punct(")")?;
            return Ok(scalar);
        }
        self.constant(kind)
    }

    fn constant(&mut self, kind: ScalarKind) -> Result<Scalar> {
        match kind {
            ScalarKind::Bool => {
                if self.eat_ident("true") {
                    Ok(Scalar::Bool(true))
                } else if self.eat_ident("false") {
                    Ok(Scalar::Bool(false))
                } else {
                    Err(self.error("expected bool"))
                }
            }
            ScalarKind::String => Ok(Scalar::String(self.string()?)),
            kind if kind.is_float() => self.float(kind),
            kind if kind.is_signed() => {
                let negative = self.eat_punct("-");
                let magnitude = i128::from(self.unsigned()?);
                let value = if negative { -magnitude } else { magnitude };
                i64::try_from(value)
                    .map(Scalar::Int)
                    .map_err(|_| self.error("integer out of range"))
            }
            _ => Ok(Scalar::Uint(self.unsigned()?)),
        }
    }

    fn unsigned(&mut self) -> Result<u64> {
        let text = self.number()?;
        let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => text.parse(),
        };
        parsed.map_err(|_| self.error(format!("invalid integer {text}")))
    }

    fn float(&mut self, kind: ScalarKind) -> Result<Scalar> {
        if self.is_qualified() {
            let function = self.qualified()?;
            self.expect_punct("(")?;
            let value = match function.as_str() {
                "NaN" => f64::NAN,
                "Inf" => {
                    let negative = self.eat_punct("-");
                    self.number()?;
                    if negative { f64::NEG_INFINITY } else { f64::INFINITY }
                }
                "Copysign" => {
                    self.number()?;
                    self.expect_punct(",")?;
                    self.expect_punct("-")?;
                    self.number()?;
                    -0.0
                }
                other => return Err(self.error(format!("unexpected call to {other}"))),
            };
            self.expect_punct(")")?;
            return Ok(Scalar::Float(value));
        }

        let negative = self.eat_punct("-");
        let text = self.number()?;
        let parsed = if kind == ScalarKind::Float32 {
            text.parse::<f32>().map(f64::from)
        } else {
            text.parse::<f64>()
        };
        let value = parsed.map_err(|_| self.error(format!("invalid float {text}")))?;
        Ok(Scalar::Float(if negative { -value } else { value }))
    }

    fn pointer(&mut self, ty: &TypeDescriptor, elem: &TypeDescriptor) -> Result<Value> {
        if self.eat_ident("nil") {
            return Ok(Value::pointer(ty.clone(), None));
        }
        let target = match &elem.kind {
            Kind::Scalar(kind) => {
                let cast = self.is_punct("(") && self.peek_at(1) == Some(&Token::Punct("*"));
                if cast {
                    self.expect_punct("(")?;
                    self.skip_type()?;
                    self.expect_punct(")")?;
                    self.expect_punct("(")?;
                }
                self.qualified()?;
                self.expect_punct("(")?;
                let scalar = self.builtin(*kind)?;
                self.expect_punct(")")?;
                if cast {
                    self.expect_punct(")")?;
                }
                Value::scalar(elem.clone(), scalar)
            }
            Kind::Record(_) => self.record(elem, true)?,
            Kind::Sequence { .. } | Kind::Mapping { .. } => {
                self.expect_punct("&")?;
                self.value(elem)?
            }
            Kind::Pointer(_) | Kind::Unsupported(_) => self.address_of_local(elem)?,
        };
        Ok(Value::pointer(ty.clone(), Some(target)))
    }

    /// `(func() **T { var p *T = ...; return &p })()`
    fn address_of_local(&mut self, elem: &TypeDescriptor) -> Result<Value> {
        self.expect_punct("(")?;
        self.expect_ident("func")?;
        self.expect_punct("(")?;
        self.expect_punct(")")?;
        self.skip_type()?;
        self.expect_punct("{")?;
        self.expect_ident("var")?;
        self.expect_ident("p")?;
        self.skip_type()?;
        let target = if self.eat_punct("=") {
            self.value(elem)?
        } else {
            Value::zero(elem)
        };
        self.expect_ident("return")?;
        self.expect_punct("&")?;
        self.expect_ident("p")?;
        self.expect_punct("}")?;
        self.expect_punct(")")?;
        self.expect_punct("(")?;
        self.expect_punct(")")?;
        Ok(target)
    }

    fn sequence(&mut self, ty: &TypeDescriptor, elem: &TypeDescriptor, len: Option<usize>) -> Result<Value> {
        self.composite_open()?;
        let mut items = Vec::new();
        if !self.eat_punct("}") {
            loop {
                items.push(self.value(elem)?);
                if self.element_end()? {
                    break;
                }
            }
        }
        if let Some(len) = len {
            if items.len() > len {
                return Err(self.error(format!("array literal has more than {len} elements")));
            }
            items.resize_with(len, || Value::zero(elem));
        }
        Ok(Value::sequence(ty.clone(), items))
    }

    fn mapping(&mut self, ty: &TypeDescriptor, key: &TypeDescriptor, value: &TypeDescriptor) -> Result<Value> {
        self.composite_open()?;
        let mut entries = Vec::new();
        if !self.eat_punct("}") {
            loop {
                let k = self.value(key)?;
                self.expect_punct(":")?;
                let v = self.value(value)?;
                entries.push((k, v));
                if self.element_end()? {
                    break;
                }
            }
        }
        Ok(Value::mapping(ty.clone(), entries))
    }

    /// A composite literal, `&` literal or JSON rebuild of a record.
    /// Omitted fields take their zero value.
    fn record(&mut self, ty: &TypeDescriptor, pointer: bool) -> Result<Value> {
        if pointer {
            self.eat_punct("&");
        }
        if self.is_punct("(") && self.peek_at(1) == Some(&Token::Ident("func".to_string())) {
            return self.opaque(ty);
        }

        self.composite_open()?;
        let fields = ty.fields();
        let mut values: Vec<Value> = fields.iter().map(|f| Value::zero(&f.ty())).collect();
        if !self.eat_punct("}") {
            loop {
                let name = self.ident()?;
                let index = fields
                    .iter()
                    .position(|f| f.name == name)
                    .ok_or_else(|| self.error(format!("{ty} has no field {name}")))?;
                self.expect_punct(":")?;
                values[index] = self.value(&fields[index].ty())?;
                if self.element_end()? {
                    break;
                }
            }
        }
        Ok(Value::record(ty.clone(), values))
    }

    fn opaque(&mut self, ty: &TypeDescriptor) -> Result<Value> {
        self.expect_punct("(")?;
        self.expect_ident("func")?;
        self.expect_punct("(")?;
        self.expect_punct(")")?;
        self.skip_type()?;
        self.expect_punct("{")?;
        self.expect_ident("jsonStr")?;
        self.expect_punct(":=")?;
        let json = self.string()?;
        self.expect_ident("var")?;
        self.expect_ident("obj")?;
        self.skip_type()?;
        if self.qualified()? != "Unmarshal" {
            return Err(self.error("expected json.Unmarshal"));
        }
        self.expect_punct("(")?;
        self.skip_type()?;
        self.expect_punct("(")?;
        self.expect_ident("jsonStr")?;
        self.expect_punct(")")?;
        self.expect_punct(",")?;
        self.expect_punct("&")?;
        self.expect_ident("obj")?;
        self.expect_punct(")")?;
        self.expect_ident("return")?;
        self.eat_punct("&");
        self.expect_ident("obj")?;
        self.expect_punct("}")?;
        self.expect_punct(")")?;
        self.expect_punct("(")?;
        self.expect_punct(")")?;
        Ok(Value::zero(ty).with_encoding(Ok(json)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crdgen_ir::Quote;

    use super::*;

    #[test]
    fn test_eval_scalars() {
        let v = eval("int32(-5)", &i32::descriptor()).unwrap();
        assert_eq!(v, (-5i32).quote());
        let v = eval("uint8(0xff)", &u8::descriptor()).unwrap();
        assert_eq!(v, 255u8.quote());
        let v = eval("1e+06", &f64::descriptor()).unwrap();
        assert_eq!(v, 1e6f64.quote());
        let v = eval("\"a\\\"b\\n\"", &String::descriptor()).unwrap();
        assert_eq!(v, "a\"b\n".quote());
    }

    #[test]
    fn test_eval_collections() {
        let v = eval("[]int{\n\t1,\n\t2,\n}", &Vec::<isize>::descriptor()).unwrap();
        assert_eq!(v, vec![1isize, 2].quote());
        let v = eval("[3]bool{\n\ttrue,\n}", &<[bool; 3]>::descriptor()).unwrap();
        assert_eq!(v, [true, false, false].quote());
    }

    #[test]
    fn test_equivalent_ignores_map_order() {
        let a = HashMap::from([("x".to_string(), 1u8), ("y".to_string(), 2u8)]).quote();
        let b = eval("map[string]uint8{\"y\": uint8(0x2), \"x\": uint8(0x1)}", a.classify()).unwrap();
        assert!(equivalent(&a, &b));
        let c = eval("map[string]uint8{\"y\": uint8(0x2)}", a.classify()).unwrap();
        assert!(!equivalent(&a, &c));
    }

    #[test]
    fn test_equivalent_nan() {
        assert!(equivalent(&f64::NAN.quote(), &f64::NAN.quote()));
        assert!(!equivalent(&0.0f64.quote(), &(-0.0f64).quote()));
    }

    #[test]
    fn test_errors_point_at_source() {
        let err = eval("int32(5", &i32::descriptor()).unwrap_err();
        assert!(err.message.contains("expected `)`"));
        let err = eval("5 6", &isize::descriptor()).unwrap_err();
        assert_eq!(err.message, "unexpected trailing tokens");
        assert_eq!(err.near, "6");
    }

    #[test]
    fn test_eval_constructor() {
        let source = "package x\n\n//nolint\nfunc NewA() *int32 {\n\treturn nil\n}\n\nfunc NewB() *int32 {\n\treturn pointer.Int32(int32(2))\n}\n";
        let ty = Option::<i32>::descriptor();
        assert_eq!(eval_constructor(source, "NewB", &ty).unwrap(), Some(2i32).quote());
        assert_eq!(eval_constructor(source, "NewA", &ty).unwrap(), None::<i32>.quote());
        assert!(eval_constructor(source, "NewC", &ty).is_err());
    }
}
