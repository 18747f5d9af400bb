//! Row-value conditions and the composable condition tree.
//!
//! [`Condition`] is the unit handed to the surrounding query: row-value
//! comparisons and membership tests compose with AND/OR/NOT under the same
//! render/bind contract as every other part. Dialect quirks (inequality
//! rewrite, extra right-hand parentheses) are read from the active
//! dialect's capability table, never from dialect identity.

use crate::context::{BindContext, ParamList, RenderContext};
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::expr::{QueryPart, Subquery};
use crate::row::Row;

/// Row-value comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Equals,
    NotEquals,
}

impl Comparator {
    /// The comparator's SQL symbol.
    pub fn as_sql(self) -> &'static str {
        match self {
            Comparator::Equals => "=",
            Comparator::NotEquals => "<>",
        }
    }
}

/// Membership direction for row-value `IN` tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InOperator {
    In,
    NotIn,
}

impl InOperator {
    /// The operator's SQL keyword.
    pub fn as_sql(self) -> &'static str {
        match self {
            InOperator::In => "in",
            InOperator::NotIn => "not in",
        }
    }
}

/// The right-hand side of a membership test.
#[derive(Debug, Clone, PartialEq)]
pub enum InRhs {
    /// A literal list of rows, each of the left row's arity.
    List(Vec<Row>),
    /// A subquery producing rows of the left row's arity.
    Select(Subquery),
}

/// A condition node in the expression tree.
///
/// Arity agreement between the two sides of a comparison is the caller's
/// responsibility; a mismatch surfaces when the database rejects the
/// generated SQL, not at build time.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// AND group: all conditions must be true.
    And(Vec<Condition>),

    /// OR group: at least one condition must be true.
    Or(Vec<Condition>),

    /// NOT: negate the inner condition.
    Not(Box<Condition>),

    /// Row-value comparison: `left <comparator> right`.
    RowCompare {
        left: Row,
        right: Row,
        comparator: Comparator,
    },

    /// Row-value membership test: `left <in|not in> (rhs)`.
    RowIn {
        left: Row,
        rhs: InRhs,
        operator: InOperator,
    },
}

impl Condition {
    /// Combine with another condition under AND.
    pub fn and(self, other: Condition) -> Condition {
        match self {
            Condition::And(mut conditions) => {
                conditions.push(other);
                Condition::And(conditions)
            }
            first => Condition::And(vec![first, other]),
        }
    }

    /// Combine with another condition under OR.
    pub fn or(self, other: Condition) -> Condition {
        match self {
            Condition::Or(mut conditions) => {
                conditions.push(other);
                Condition::Or(conditions)
            }
            first => Condition::Or(vec![first, other]),
        }
    }

    /// Negate this condition.
    pub fn not(self) -> Condition {
        Condition::Not(Box::new(self))
    }

    /// Render the condition and collect its parameters in one call.
    ///
    /// Returns the SQL text and the ordered bind values.
    pub fn build(&self, dialect: Dialect) -> SqlResult<(String, ParamList)> {
        let mut render_ctx = RenderContext::new(dialect);
        self.render(&mut render_ctx)?;
        let mut bind_ctx = BindContext::new();
        self.bind(&mut bind_ctx)?;
        let sql = render_ctx.finish();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sql = %sql,
            params = bind_ctx.params().len(),
            ?dialect,
            "built condition"
        );
        Ok((sql, bind_ctx.into_params()))
    }
}

impl QueryPart for Condition {
    fn render(&self, ctx: &mut RenderContext) -> SqlResult<()> {
        match self {
            Condition::And(conditions) => {
                let mut separator = "";
                for condition in conditions {
                    ctx.push_sql(separator);
                    // Wrap OR groups in parentheses
                    let parens = matches!(condition, Condition::Or(_));
                    if parens {
                        ctx.push_sql("(");
                    }
                    condition.render(ctx)?;
                    if parens {
                        ctx.push_sql(")");
                    }
                    separator = " and ";
                }
                Ok(())
            }
            Condition::Or(conditions) => {
                let mut separator = "";
                for condition in conditions {
                    ctx.push_sql(separator);
                    // Wrap AND groups in parentheses
                    let parens = matches!(condition, Condition::And(_));
                    if parens {
                        ctx.push_sql("(");
                    }
                    condition.render(ctx)?;
                    if parens {
                        ctx.push_sql(")");
                    }
                    separator = " or ";
                }
                Ok(())
            }
            Condition::Not(inner) => {
                ctx.push_keyword("not");
                ctx.push_sql(" (");
                inner.render(ctx)?;
                ctx.push_sql(")");
                Ok(())
            }
            Condition::RowCompare {
                left,
                right,
                comparator,
            } => render_row_compare(left, right, *comparator, ctx),
            Condition::RowIn {
                left,
                rhs,
                operator,
            } => render_row_in(left, rhs, *operator, ctx),
        }
    }

    fn bind(&self, ctx: &mut BindContext) -> SqlResult<()> {
        match self {
            Condition::And(conditions) | Condition::Or(conditions) => {
                for condition in conditions {
                    condition.bind(ctx)?;
                }
                Ok(())
            }
            Condition::Not(inner) => inner.bind(ctx),
            // Left binds once, then right, regardless of the textual form
            // taken at render time. The not(left = right) rewrite mentions
            // left once in text, so per-occurrence binding would over-bind.
            Condition::RowCompare { left, right, .. } => {
                left.bind(ctx)?;
                right.bind(ctx)
            }
            Condition::RowIn { left, rhs, .. } => {
                left.bind(ctx)?;
                match rhs {
                    InRhs::List(rows) => {
                        for row in rows {
                            row.bind(ctx)?;
                        }
                        Ok(())
                    }
                    InRhs::Select(subquery) => subquery.bind(ctx),
                }
            }
        }
    }
}

fn render_row_compare(
    left: &Row,
    right: &Row,
    comparator: Comparator,
    ctx: &mut RenderContext,
) -> SqlResult<()> {
    let caps = ctx.dialect().capabilities();

    // Dialects without native row inequality get a rewritten negation.
    if comparator == Comparator::NotEquals && !caps.native_row_inequality {
        ctx.push_keyword("not");
        ctx.push_sql("(");
        left.render(ctx)?;
        ctx.push_sql(" = ");
        right.render(ctx)?;
        ctx.push_sql(")");
        return Ok(());
    }

    left.render(ctx)?;
    ctx.push_sql(" ");
    ctx.push_sql(comparator.as_sql());
    ctx.push_sql(" ");
    if caps.parenthesized_row_rhs {
        ctx.push_sql("(");
    }
    right.render(ctx)?;
    if caps.parenthesized_row_rhs {
        ctx.push_sql(")");
    }
    Ok(())
}

fn render_row_in(
    left: &Row,
    rhs: &InRhs,
    operator: InOperator,
    ctx: &mut RenderContext,
) -> SqlResult<()> {
    let caps = ctx.dialect().capabilities();
    // The extra parenthesis pair applies to subqueries only, never to
    // literal row lists.
    let extra_parens = caps.parenthesized_subquery_in_membership
        && matches!(rhs, InRhs::Select(_));

    left.render(ctx)?;
    ctx.push_sql(" ");
    ctx.push_keyword(operator.as_sql());
    ctx.push_sql(" (");
    if extra_parens {
        ctx.push_sql("(");
    }
    match rhs {
        InRhs::List(rows) => {
            let mut separator = "";
            for row in rows {
                ctx.push_sql(separator);
                row.render(ctx)?;
                separator = ", ";
            }
        }
        InRhs::Select(subquery) => {
            ctx.with_subquery(|ctx| subquery.render(ctx))?;
        }
    }
    if extra_parens {
        ctx.push_sql(")");
    }
    ctx.push_sql(")");
    Ok(())
}
