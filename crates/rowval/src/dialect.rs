//! Target SQL dialects and their row-value capabilities.
//!
//! Renderers never branch on dialect identity directly; they read the
//! [`DialectCaps`] table returned by [`Dialect::capabilities`]. Quirk growth
//! stays isolated here.

use serde::{Deserialize, Serialize};

/// The target database product's SQL variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
    SqlServer,
    Oracle,
    Db2,
}

/// Row-value rendering capabilities of a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectCaps {
    /// Whether the dialect supports a native `<>` between row values.
    /// When false, inequality renders as `not(left = right)`.
    pub native_row_inequality: bool,

    /// Whether a row literal on the right of a comparison needs an extra
    /// parenthesis pair.
    pub parenthesized_row_rhs: bool,

    /// Whether a subquery on the right of `IN`/`NOT IN` needs an extra
    /// parenthesis pair. Does not apply to literal row lists.
    pub parenthesized_subquery_in_membership: bool,
}

impl Default for DialectCaps {
    fn default() -> Self {
        Self {
            native_row_inequality: true,
            parenthesized_row_rhs: false,
            parenthesized_subquery_in_membership: false,
        }
    }
}

impl Dialect {
    /// Look up the row-value capabilities of this dialect.
    pub fn capabilities(self) -> DialectCaps {
        match self {
            Dialect::Db2 => DialectCaps {
                native_row_inequality: false,
                ..DialectCaps::default()
            },
            Dialect::Oracle => DialectCaps {
                parenthesized_row_rhs: true,
                parenthesized_subquery_in_membership: true,
                ..DialectCaps::default()
            },
            _ => DialectCaps::default(),
        }
    }

    /// Bind placeholder for the 1-based parameter `index`.
    ///
    /// Postgres uses `$n`; every other dialect uses positional `?`.
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            _ => "?".to_string(),
        }
    }

    /// Quote character for quoted identifiers.
    pub fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            _ => '"',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_table() {
        assert!(Dialect::Postgres.capabilities().native_row_inequality);
        assert!(!Dialect::Postgres.capabilities().parenthesized_row_rhs);

        let db2 = Dialect::Db2.capabilities();
        assert!(!db2.native_row_inequality);
        assert!(!db2.parenthesized_row_rhs);

        let oracle = Dialect::Oracle.capabilities();
        assert!(oracle.native_row_inequality);
        assert!(oracle.parenthesized_row_rhs);
        assert!(oracle.parenthesized_subquery_in_membership);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Dialect::Postgres.placeholder(3), "$3");
        assert_eq!(Dialect::MySql.placeholder(3), "?");
        assert_eq!(Dialect::Db2.placeholder(1), "?");
    }

    #[test]
    fn test_quote_chars() {
        assert_eq!(Dialect::MySql.quote_char(), '`');
        assert_eq!(Dialect::Postgres.quote_char(), '"');
    }

    #[test]
    fn test_dialect_serde() {
        let json = serde_json::to_string(&Dialect::Postgres).unwrap();
        assert_eq!(json, "\"postgres\"");
        let back: Dialect = serde_json::from_str("\"my_sql\"").unwrap();
        assert_eq!(back, Dialect::MySql);
    }
}
