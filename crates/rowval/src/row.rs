//! Row values (tuples of scalar expressions) and their condition DSL.
//!
//! A [`Row`] is an immutable ordered group of scalar expressions compared
//! positionally as a unit. It renders as a parenthesized comma list and
//! binds each element's values in element order. Conditions are produced on
//! demand by [`Row::equal`], [`Row::in_list`] and friends, one instance per
//! call, and compose into the [`crate::condition::Condition`] tree.

use crate::condition::{Comparator, Condition, InOperator, InRhs};
use crate::context::{BindContext, RenderContext};
use crate::error::SqlResult;
use crate::expr::{QueryPart, ScalarExpr, Subquery};

/// An immutable ordered group of scalar expressions.
///
/// Arity is fixed at construction and never mutated; element order
/// determines positional comparison semantics against the right-hand
/// operand. The core supports arbitrary arity; tuples of arity 1..8 convert
/// via `From` for call-site ergonomics.
///
/// # Example
/// ```
/// use rowval::{col, Dialect, QueryPart, Row};
///
/// let pair = Row::from((col("last_name"), col("first_name")));
/// assert_eq!(
///     pair.to_sql(Dialect::Postgres).unwrap(),
///     "(last_name, first_name)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    elements: Vec<ScalarExpr>,
}

impl Row {
    /// Create a row from an ordered list of elements.
    pub fn new(elements: Vec<ScalarExpr>) -> Self {
        Self { elements }
    }

    /// The number of elements in this row.
    pub fn arity(&self) -> usize {
        self.elements.len()
    }

    /// The element at `index`, if any.
    pub fn element(&self, index: usize) -> Option<&ScalarExpr> {
        self.elements.get(index)
    }

    /// All elements in order.
    pub fn elements(&self) -> &[ScalarExpr] {
        &self.elements
    }

    /// Row-value equality: `self = other`.
    pub fn equal(self, other: impl Into<Row>) -> Condition {
        Condition::RowCompare {
            left: self,
            right: other.into(),
            comparator: Comparator::Equals,
        }
    }

    /// Alias for [`Row::equal`].
    pub fn eq(self, other: impl Into<Row>) -> Condition {
        self.equal(other)
    }

    /// Row-value inequality: `self <> other`.
    ///
    /// On dialects without native row inequality this renders as
    /// `not(self = other)`.
    pub fn not_equal(self, other: impl Into<Row>) -> Condition {
        Condition::RowCompare {
            left: self,
            right: other.into(),
            comparator: Comparator::NotEquals,
        }
    }

    /// Alias for [`Row::not_equal`].
    pub fn ne(self, other: impl Into<Row>) -> Condition {
        self.not_equal(other)
    }

    /// Membership in a literal list of rows: `self in ((..), (..))`.
    pub fn in_list<R: Into<Row>>(self, rows: impl IntoIterator<Item = R>) -> Condition {
        Condition::RowIn {
            left: self,
            rhs: InRhs::List(rows.into_iter().map(Into::into).collect()),
            operator: InOperator::In,
        }
    }

    /// Negated membership in a literal list of rows.
    pub fn not_in_list<R: Into<Row>>(self, rows: impl IntoIterator<Item = R>) -> Condition {
        Condition::RowIn {
            left: self,
            rhs: InRhs::List(rows.into_iter().map(Into::into).collect()),
            operator: InOperator::NotIn,
        }
    }

    /// Membership in a subquery's result set: `self in (select ..)`.
    pub fn in_select(self, subquery: Subquery) -> Condition {
        Condition::RowIn {
            left: self,
            rhs: InRhs::Select(subquery),
            operator: InOperator::In,
        }
    }

    /// Negated membership in a subquery's result set.
    pub fn not_in_select(self, subquery: Subquery) -> Condition {
        Condition::RowIn {
            left: self,
            rhs: InRhs::Select(subquery),
            operator: InOperator::NotIn,
        }
    }
}

impl QueryPart for Row {
    fn render(&self, ctx: &mut RenderContext) -> SqlResult<()> {
        ctx.push_sql("(");
        let mut separator = "";
        for element in &self.elements {
            ctx.push_sql(separator);
            element.render(ctx)?;
            separator = ", ";
        }
        ctx.push_sql(")");
        Ok(())
    }

    fn bind(&self, ctx: &mut BindContext) -> SqlResult<()> {
        for element in &self.elements {
            element.bind(ctx)?;
        }
        Ok(())
    }
}

/// Create a row from any ordered sequence of element-convertible values.
///
/// # Example
/// ```
/// use rowval::{row, Dialect, QueryPart};
///
/// let r = row(["a", "b", "c"]);
/// assert_eq!(r.to_sql(Dialect::MySql).unwrap(), "(?, ?, ?)");
/// ```
pub fn row<I>(elements: I) -> Row
where
    I: IntoIterator,
    I::Item: Into<ScalarExpr>,
{
    Row::new(elements.into_iter().map(Into::into).collect())
}

impl From<Vec<ScalarExpr>> for Row {
    fn from(elements: Vec<ScalarExpr>) -> Self {
        Row::new(elements)
    }
}

impl From<ScalarExpr> for Row {
    fn from(element: ScalarExpr) -> Self {
        Row::new(vec![element])
    }
}

macro_rules! impl_row_from_tuple {
    ($(($($t:ident : $idx:tt),+)),+ $(,)?) => {
        $(
            impl<$($t: Into<ScalarExpr>),+> From<($($t,)+)> for Row {
                fn from(tuple: ($($t,)+)) -> Self {
                    Row::new(vec![$(tuple.$idx.into()),+])
                }
            }
        )+
    };
}

impl_row_from_tuple!(
    (T1: 0),
    (T1: 0, T2: 1),
    (T1: 0, T2: 1, T3: 2),
    (T1: 0, T2: 1, T3: 2, T4: 3),
    (T1: 0, T2: 1, T3: 2, T4: 3, T5: 4),
    (T1: 0, T2: 1, T3: 2, T4: 3, T5: 4, T6: 5),
    (T1: 0, T2: 1, T3: 2, T4: 3, T5: 4, T6: 5, T7: 6),
    (T1: 0, T2: 1, T3: 2, T4: 3, T5: 4, T6: 5, T7: 6, T8: 7),
);
