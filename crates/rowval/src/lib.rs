//! # rowval
//!
//! A dialect-aware renderer for SQL row-value (tuple) conditions.
//!
//! ## Features
//!
//! - **Row-value comparisons**: `(a, b) = (x, y)` and `(a, b) <> (x, y)`,
//!   with the `not(.. = ..)` rewrite on dialects lacking native row
//!   inequality
//! - **Row-value membership**: `IN` / `NOT IN` against literal row lists or
//!   subqueries, with dialect-specific parenthesization applied from a
//!   capability table
//! - **Strict bind ordering**: a condition always binds its left row's
//!   values first, then the right-hand operand's, matching the rendered
//!   placeholder order
//! - **Composable conditions**: AND/OR/NOT trees with the same render/bind
//!   contract as every row condition
//! - **Parameter safe**: values never render inline; they become `$n` or
//!   `?` placeholders and travel in a [`ParamList`]
//!
//! ## Example
//!
//! ```
//! use rowval::{col, row, Dialect};
//!
//! let cond = row([col("last_name"), col("first_name")])
//!     .not_equal(("Doe", "John"));
//!
//! let (sql, params) = cond.build(Dialect::Postgres).unwrap();
//! assert_eq!(sql, "(last_name, first_name) <> ($1, $2)");
//! assert_eq!(params.len(), 2);
//!
//! // DB2 has no native row inequality, so the comparator is rewritten.
//! let (sql, params) = cond.build(Dialect::Db2).unwrap();
//! assert_eq!(sql, "not((last_name, first_name) = (?, ?))");
//! assert_eq!(params.len(), 2);
//! ```

pub mod condition;
pub mod context;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod ident;
pub mod row;
pub mod value;

pub use condition::{Comparator, Condition, InOperator, InRhs};
pub use context::{BindContext, ParamList, RenderContext};
pub use dialect::{Dialect, DialectCaps};
pub use error::{SqlError, SqlResult};
pub use expr::{col, QueryPart, ScalarExpr, Subquery};
pub use ident::{Ident, IdentPart};
pub use row::{row, Row};
pub use value::Value;
