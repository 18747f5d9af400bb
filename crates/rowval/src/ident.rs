//! Safe SQL identifier handling.
//!
//! [`Ident`] represents a SQL identifier (schema/table/column), supporting
//! dotted notation and quoted identifiers.
//!
//! - Unquoted parts are validated against: `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow any characters except NUL and escape the quote
//!   character by doubling it
//!
//! Rendering is dialect-aware: quoted parts use the active dialect's quote
//! character (backticks on MySQL, double quotes elsewhere).

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};

/// A part of a SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    /// Unquoted identifier: must match `[A-Za-z_][A-Za-z0-9_$]*`.
    Unquoted(String),
    /// Quoted identifier: allows any characters except NUL.
    Quoted(String),
}

/// A SQL identifier (column, table, or schema name).
///
/// Supports dotted notation (e.g., `schema.table.column`) and quoted
/// identifiers (e.g., `"CamelCase"."User"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Parse an identifier string, supporting dotted and quoted forms.
    ///
    /// - Dotted: `schema.table.column`
    /// - Quoted: `"CamelCase"."UserTable"`
    /// - Mixed: `public."UserTable".id`
    pub fn parse(s: &str) -> SqlResult<Self> {
        if s.is_empty() {
            return Err(SqlError::identifier("identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(SqlError::identifier(
                "identifier cannot contain NUL character",
            ));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        loop {
            if chars.peek() == Some(&'"') {
                // Quoted part, `""` escapes a literal quote.
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                            name.push('"');
                        }
                        Some('"') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(SqlError::identifier("unclosed quoted identifier"));
                        }
                    }
                }
                if name.is_empty() {
                    return Err(SqlError::identifier("empty quoted identifier"));
                }
                parts.push(IdentPart::Quoted(name));
            } else {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '.' {
                        break;
                    }
                    let valid = if name.is_empty() {
                        c == '_' || c.is_ascii_alphabetic()
                    } else {
                        c == '_' || c == '$' || c.is_ascii_alphanumeric()
                    };
                    if !valid {
                        return Err(SqlError::identifier(format!(
                            "invalid character '{c}' in identifier"
                        )));
                    }
                    name.push(c);
                    chars.next();
                }
                if name.is_empty() {
                    return Err(SqlError::identifier("empty identifier part"));
                }
                parts.push(IdentPart::Unquoted(name));
            }

            match chars.next() {
                None => break,
                Some('.') => {
                    if chars.peek().is_none() {
                        return Err(SqlError::identifier("trailing '.' in identifier"));
                    }
                }
                Some(c) => {
                    return Err(SqlError::identifier(format!(
                        "expected '.' between identifier parts, got '{c}'"
                    )));
                }
            }
        }

        Ok(Self { parts })
    }

    /// Render this identifier for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        let quote = dialect.quote_char();
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Unquoted(name) => out.push_str(name),
                IdentPart::Quoted(name) => {
                    out.push(quote);
                    for c in name.chars() {
                        if c == quote {
                            out.push(quote);
                        }
                        out.push(c);
                    }
                    out.push(quote);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let id = Ident::parse("users").unwrap();
        assert_eq!(id.parts, vec![IdentPart::Unquoted("users".to_string())]);
    }

    #[test]
    fn test_parse_dotted() {
        let id = Ident::parse("public.users.id").unwrap();
        assert_eq!(id.parts.len(), 3);
        assert_eq!(id.to_sql(Dialect::Postgres), "public.users.id");
    }

    #[test]
    fn test_parse_quoted() {
        let id = Ident::parse(r#"public."UserTable""#).unwrap();
        assert_eq!(
            id.parts,
            vec![
                IdentPart::Unquoted("public".to_string()),
                IdentPart::Quoted("UserTable".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_escaped_quote() {
        let id = Ident::parse(r#""a""b""#).unwrap();
        assert_eq!(id.parts, vec![IdentPart::Quoted(r#"a"b"#.to_string())]);
        assert_eq!(id.to_sql(Dialect::Postgres), r#""a""b""#);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Ident::parse("").is_err());
        assert!(Ident::parse("1abc").is_err());
        assert!(Ident::parse("a-b").is_err());
        assert!(Ident::parse("a.").is_err());
        assert!(Ident::parse(r#""unclosed"#).is_err());
    }

    #[test]
    fn test_mysql_backtick_quoting() {
        let id = Ident::parse(r#""CamelCase".id"#).unwrap();
        assert_eq!(id.to_sql(Dialect::MySql), "`CamelCase`.id");
        assert_eq!(id.to_sql(Dialect::Sqlite), r#""CamelCase".id"#);
    }
}
