//! Value-to-Go compiler.
//!
//! [`ValueCompiler::render`] turns a quoted [`Value`] into an expression
//! that evaluates to an equal Go value. Dispatch follows the value's
//! [`Kind`]; the [`RenderContext`] carries what the syntactic position of
//! the expression already implies.

use crdgen_core::capitalize;
use crdgen_ir::{Data, Kind, RecordData, TypeDescriptor, TypeName, Unsupported, Value};
use tracing::warn;

use crate::ast::{Element, Expr, Stmt};
use crate::error::{QuoteError, Result};
use crate::imports::{ENCODING_JSON, POINTER};
use crate::literal;

/// Positional flags for one nested expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// The enclosing composite literal already states the type. Only valid
    /// for sequence elements and mapping values.
    pub omit_type: bool,
    /// The caller needs a pointer to the record rather than the record.
    pub ptr_result: bool,
}

impl RenderContext {
    pub const TOP: Self = Self {
        omit_type: false,
        ptr_result: false,
    };

    pub const ELEMENT: Self = Self {
        omit_type: true,
        ptr_result: false,
    };
}

/// Compiles values to Go expressions.
///
/// Channels and functions have no literal form: they render as nothing at
/// the top level and as record fields, and as `nil` inside sequences and
/// mappings so element counts survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueCompiler;

impl ValueCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Compile `value`. `None` means the value's kind cannot be expressed.
    pub fn render(&self, value: &Value, ctx: RenderContext) -> Result<Option<Expr>> {
        let ty = value.classify();
        match (&ty.kind, value.data()) {
            (Kind::Scalar(_), Data::Scalar(_)) => self.render_literal(value).map(Some),
            (Kind::Pointer(_), Data::Pointer(target)) => self.render_pointer(ty, target.as_deref(), ctx).map(Some),
            (Kind::Sequence { .. }, Data::Sequence(items)) => self.render_sequence(ty, items, ctx).map(Some),
            (Kind::Mapping { .. }, Data::Mapping(entries)) => self.render_mapping(ty, entries, ctx).map(Some),
            (Kind::Record(_), Data::Record(record)) => self.render_record(ty, record, ctx).map(Some),
            (Kind::Unsupported(_), _) => Ok(None),
            (kind, _) => Err(malformed(ty, kind)),
        }
    }

    /// A scalar literal, converted to the declared type when there is one:
    /// `apps.Phase("Running")`.
    pub fn render_literal(&self, value: &Value) -> Result<Expr> {
        let ty = value.classify();
        let lit = builtin_literal(value)?;
        Ok(match &ty.name {
            Some(name) => qual(name).call(vec![lit]),
            None => lit,
        })
    }

    /// A pointer to a scalar, built with the pointer-of helper and cast
    /// back to the declared pointer type when there is one:
    /// `(*apps.Phase)(pointer.String("Running"))`.
    pub fn render_pointer_literal(&self, pointee: &Value) -> Result<Expr> {
        let ty = pointee.classify();
        let Some(kind) = ty.scalar_kind() else {
            return Err(malformed(ty, &ty.kind));
        };
        let call = Expr::qual(POINTER, capitalize(kind.go_name())).call(vec![builtin_literal(pointee)?]);
        Ok(match &ty.name {
            Some(name) => qual(name).star().paren().call(vec![call]),
            None => call,
        })
    }

    fn render_pointer(&self, ty: &TypeDescriptor, target: Option<&Value>, ctx: RenderContext) -> Result<Expr> {
        let Some(target) = target else {
            return Ok(Expr::nil());
        };
        let target_ty = target.classify();
        match (&target_ty.kind, target.data()) {
            (Kind::Scalar(_), _) => self.render_pointer_literal(target),
            (Kind::Record(_), Data::Record(record)) => {
                let ctx = RenderContext {
                    ptr_result: true,
                    ..ctx
                };
                self.render_record(target_ty, record, ctx)
            }
            (Kind::Sequence { .. } | Kind::Mapping { .. }, _) => match self.render(target, RenderContext::TOP)? {
                Some(inner) => Ok(inner.address_of()),
                None => Err(malformed(target_ty, &target_ty.kind)),
            },
            // `&&x` is not an expression: take the address of a local.
            (Kind::Pointer(_) | Kind::Unsupported(_), _) => {
                let init = if target.is_zero() {
                    None
                } else {
                    self.render(target, RenderContext::TOP)?
                };
                let body = vec![
                    Stmt::var("p", type_expr(target_ty), init),
                    Stmt::ret(Expr::ident("p").address_of()),
                ];
                Ok(Expr::func_lit(type_expr(ty), body).invoke())
            }
            (kind, _) => Err(malformed(target_ty, kind)),
        }
    }

    fn render_sequence(&self, ty: &TypeDescriptor, items: &[Value], ctx: RenderContext) -> Result<Expr> {
        let elems = items
            .iter()
            .map(|item| {
                let expr = self.render(item, RenderContext::ELEMENT)?;
                Ok(Element::Value(expr.unwrap_or_else(Expr::nil)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Expr::composite(typed(ty, ctx), elems))
    }

    /// Entries are ordered by the canonical text of their keys, so the
    /// output does not depend on the source map's iteration order.
    fn render_mapping(&self, ty: &TypeDescriptor, entries: &[(Value, Value)], ctx: RenderContext) -> Result<Expr> {
        let mut keyed = entries
            .iter()
            .map(|(key, value)| {
                let key = self.render(key, RenderContext::TOP)?.unwrap_or_else(Expr::nil);
                let value = self.render(value, RenderContext::ELEMENT)?.unwrap_or_else(Expr::nil);
                Ok((key.canonical(), key, value))
            })
            .collect::<Result<Vec<_>>>()?;
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        let elems = keyed
            .into_iter()
            .map(|(_, key, value)| Element::Keyed(key, value))
            .collect();
        Ok(Expr::composite(typed(ty, ctx), elems))
    }

    fn render_record(&self, ty: &TypeDescriptor, record: &RecordData, ctx: RenderContext) -> Result<Expr> {
        if ty.has_hidden_fields() {
            match &record.encoded {
                Some(Ok(json)) => return Ok(self.render_opaque(ty, json, ctx)),
                Some(Err(message)) => {
                    return Err(QuoteError::Serialize {
                        type_name: ty.to_string(),
                        message: message.clone(),
                    });
                }
                None => warn!(
                    type_name = %ty,
                    "record has unexported fields but no JSON encoding; rendering exported fields only"
                ),
            }
        }

        let mut elems = Vec::new();
        for (field, value) in ty.fields().iter().zip(&record.fields) {
            if !field.visible || field.ty().is_anonymous() || value.is_zero() {
                continue;
            }
            if let Some(expr) = self.render(value, RenderContext::TOP)? {
                elems.push(Element::Keyed(Expr::ident(field.name), expr));
            }
        }

        if ctx.omit_type {
            return Ok(Expr::composite(None, elems));
        }
        let literal = Expr::composite(Some(type_expr(ty)), elems);
        Ok(if ctx.ptr_result { literal.address_of() } else { literal })
    }

    /// Rebuild a record with private state from its JSON form:
    ///
    /// ```go
    /// (func() T {
    ///     jsonStr := "..."
    ///     var obj T
    ///     json.Unmarshal([]byte(jsonStr), &obj)
    ///     return obj
    /// })()
    /// ```
    fn render_opaque(&self, ty: &TypeDescriptor, json: &str, ctx: RenderContext) -> Expr {
        let record = type_expr(ty);
        let (result, returned) = if ctx.ptr_result {
            (record.clone().star(), Expr::ident("obj").address_of())
        } else {
            (record.clone(), Expr::ident("obj"))
        };
        let unmarshal = Expr::qual(ENCODING_JSON, "Unmarshal").call(vec![
            Expr::slice_of(Expr::ident("byte")).call(vec![Expr::ident("jsonStr")]),
            Expr::ident("obj").address_of(),
        ]);
        let body = vec![
            Stmt::define("jsonStr", Expr::lit(literal::string(json))),
            Stmt::var("obj", record, None),
            Stmt::Expr(unmarshal),
            Stmt::ret(returned),
        ];
        Expr::func_lit(result, body).invoke()
    }
}

/// The Go type expression for `ty`. Declared types are referenced by
/// name; anonymous records spell out their field list.
pub fn type_expr(ty: &TypeDescriptor) -> Expr {
    if let Some(name) = &ty.name {
        return qual(name);
    }
    match &ty.kind {
        Kind::Scalar(kind) => Expr::ident(kind.go_name()),
        Kind::Pointer(elem) => type_expr(elem).star(),
        Kind::Sequence { elem, len: None } => Expr::slice_of(type_expr(elem)),
        Kind::Sequence { elem, len: Some(n) } => Expr::array_of(*n, type_expr(elem)),
        Kind::Mapping { key, value } => Expr::map_of(type_expr(key), type_expr(value)),
        Kind::Record(fields) => Expr::StructType(
            fields
                .iter()
                .map(|field| (field.name.to_string(), type_expr(&field.ty())))
                .collect(),
        ),
        Kind::Unsupported(Unsupported::Chan(elem)) => Expr::chan_of(type_expr(elem)),
        Kind::Unsupported(Unsupported::Func) => Expr::FuncType,
    }
}

fn typed(ty: &TypeDescriptor, ctx: RenderContext) -> Option<Expr> {
    (!ctx.omit_type).then(|| type_expr(ty))
}

fn qual(name: &TypeName) -> Expr {
    Expr::qual(&name.package, &name.name)
}

fn builtin_literal(value: &Value) -> Result<Expr> {
    let ty = value.classify();
    let (Some(kind), Data::Scalar(scalar)) = (ty.scalar_kind(), value.data()) else {
        return Err(malformed(ty, &ty.kind));
    };
    literal::scalar(kind, scalar).ok_or_else(|| malformed(ty, &Kind::Scalar(kind)))
}

fn malformed(ty: &TypeDescriptor, kind: &Kind) -> QuoteError {
    QuoteError::Malformed {
        type_name: ty.to_string(),
        kind: kind.as_str(),
    }
}
