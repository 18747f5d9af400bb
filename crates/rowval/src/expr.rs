//! Scalar expressions and the render/bind contract.
//!
//! Every renderable unit in the crate satisfies [`QueryPart`]: one pass
//! emits SQL text into a [`RenderContext`], an independent pass emits bind
//! values into a [`BindContext`]. Both are deterministic, side-effect-free
//! on the part itself, and traverse children in the same order.

use crate::context::{BindContext, ParamList, RenderContext};
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::ident::Ident;
use crate::value::Value;

/// The two-method contract shared by every renderable unit.
pub trait QueryPart {
    /// Emit SQL text into the context.
    fn render(&self, ctx: &mut RenderContext) -> SqlResult<()>;

    /// Emit bind values into the context, in render order.
    fn bind(&self, ctx: &mut BindContext) -> SqlResult<()>;

    /// Render this part standalone for the given dialect.
    fn to_sql(&self, dialect: Dialect) -> SqlResult<String> {
        let mut ctx = RenderContext::new(dialect);
        self.render(&mut ctx)?;
        Ok(ctx.finish())
    }

    /// Collect this part's bind parameters standalone.
    fn params(&self) -> SqlResult<ParamList> {
        let mut ctx = BindContext::new();
        self.bind(&mut ctx)?;
        Ok(ctx.into_params())
    }
}

/// A scalar expression: one element of a row value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarExpr {
    /// A column reference, validated and quoted at render time.
    Column(String),
    /// A bind value, rendered as a placeholder.
    Value(Value),
    /// A trusted raw SQL fragment with no parameters.
    Raw(String),
}

impl ScalarExpr {
    /// Create a column reference.
    pub fn column(name: impl Into<String>) -> Self {
        ScalarExpr::Column(name.into())
    }

    /// Create a bind value.
    pub fn value(value: impl Into<Value>) -> Self {
        ScalarExpr::Value(value.into())
    }

    /// Create a raw SQL fragment.
    pub fn raw(sql: impl Into<String>) -> Self {
        ScalarExpr::Raw(sql.into())
    }
}

/// Shorthand for [`ScalarExpr::column`].
pub fn col(name: impl Into<String>) -> ScalarExpr {
    ScalarExpr::column(name)
}

impl QueryPart for ScalarExpr {
    fn render(&self, ctx: &mut RenderContext) -> SqlResult<()> {
        match self {
            ScalarExpr::Column(name) => {
                let ident = Ident::parse(name)?;
                let sql = ident.to_sql(ctx.dialect());
                ctx.push_sql(&sql);
            }
            ScalarExpr::Value(_) => ctx.push_placeholder(),
            ScalarExpr::Raw(sql) => ctx.push_sql(sql),
        }
        Ok(())
    }

    fn bind(&self, ctx: &mut BindContext) -> SqlResult<()> {
        if let ScalarExpr::Value(value) = self {
            ctx.push_value(value.clone());
        }
        Ok(())
    }
}

impl From<Value> for ScalarExpr {
    fn from(value: Value) -> Self {
        ScalarExpr::Value(value)
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ScalarExpr {
                fn from(v: $ty) -> Self {
                    ScalarExpr::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_scalar_from!(
    bool,
    i16,
    i32,
    i64,
    f32,
    f64,
    &str,
    String,
    Vec<u8>,
    uuid::Uuid,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    serde_json::Value,
);

#[cfg(feature = "rust_decimal")]
impl_scalar_from!(rust_decimal::Decimal);

#[derive(Debug, Clone, PartialEq)]
enum FragmentPart {
    Raw(String),
    Bind(Value),
}

/// A parameter-safe subquery fragment.
///
/// Stores SQL pieces and bind values separately; placeholders are numbered
/// by the surrounding [`RenderContext`] when the fragment is rendered, so
/// its parameters merge into the outer statement in order.
///
/// # Example
/// ```
/// use rowval::{Dialect, QueryPart, Subquery};
///
/// let mut sq = Subquery::new("select id from users where status = ");
/// sq.push_bind("active");
/// assert_eq!(
///     sq.to_sql(Dialect::Postgres).unwrap(),
///     "select id from users where status = $1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[must_use]
pub struct Subquery {
    parts: Vec<FragmentPart>,
}

impl Subquery {
    /// Create a new fragment with an initial SQL piece.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            parts: vec![FragmentPart::Raw(sql.into())],
        }
    }

    /// Create an empty fragment.
    pub fn empty() -> Self {
        Self { parts: Vec::new() }
    }

    /// Append raw SQL (no parameters).
    pub fn push(&mut self, sql: &str) -> &mut Self {
        if sql.is_empty() {
            return self;
        }
        match self.parts.last_mut() {
            Some(FragmentPart::Raw(last)) => last.push_str(sql),
            _ => self.parts.push(FragmentPart::Raw(sql.to_string())),
        }
        self
    }

    /// Append a placeholder and bind its value.
    pub fn push_bind(&mut self, value: impl Into<Value>) -> &mut Self {
        self.parts.push(FragmentPart::Bind(value.into()));
        self
    }

    /// Consuming counterpart of [`Subquery::push_bind`], convenient for
    /// chaining on temporary values.
    pub fn bound(mut self, value: impl Into<Value>) -> Self {
        self.push_bind(value);
        self
    }
}

impl QueryPart for Subquery {
    fn render(&self, ctx: &mut RenderContext) -> SqlResult<()> {
        for part in &self.parts {
            match part {
                FragmentPart::Raw(sql) => ctx.push_sql(sql),
                FragmentPart::Bind(_) => ctx.push_placeholder(),
            }
        }
        Ok(())
    }

    fn bind(&self, ctx: &mut BindContext) -> SqlResult<()> {
        for part in &self.parts {
            if let FragmentPart::Bind(value) = part {
                ctx.push_value(value.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_render() {
        let expr = col("users.id");
        assert_eq!(expr.to_sql(Dialect::Postgres).unwrap(), "users.id");
        assert!(expr.params().unwrap().is_empty());
    }

    #[test]
    fn test_quoted_column_render() {
        let expr = col(r#""CamelCase""#);
        assert_eq!(expr.to_sql(Dialect::MySql).unwrap(), "`CamelCase`");
    }

    #[test]
    fn test_invalid_column_fails_at_render() {
        let expr = col("not a column");
        assert!(expr.to_sql(Dialect::Postgres).is_err());
    }

    #[test]
    fn test_value_render_and_bind() {
        let expr = ScalarExpr::value(7i32);
        assert_eq!(expr.to_sql(Dialect::Postgres).unwrap(), "$1");
        assert_eq!(expr.to_sql(Dialect::Sqlite).unwrap(), "?");
        assert_eq!(expr.params().unwrap().values(), &[Value::Int(7)]);
    }

    #[test]
    fn test_raw_fragment() {
        let expr = ScalarExpr::raw("lower(name)");
        assert_eq!(expr.to_sql(Dialect::Postgres).unwrap(), "lower(name)");
        assert!(expr.params().unwrap().is_empty());
    }

    #[test]
    fn test_subquery_parts_merge() {
        let mut sq = Subquery::new("select x from t where a = ");
        sq.push_bind(1i32).push(" and b = ").push_bind(2i32);
        assert_eq!(
            sq.to_sql(Dialect::Postgres).unwrap(),
            "select x from t where a = $1 and b = $2"
        );
        assert_eq!(
            sq.params().unwrap().values(),
            &[Value::Int(1), Value::Int(2)]
        );
    }

    #[test]
    fn test_subquery_push_merges_raw_runs() {
        let mut sq = Subquery::empty();
        sq.push("select ").push("1");
        assert_eq!(sq.to_sql(Dialect::Postgres).unwrap(), "select 1");
    }
}
