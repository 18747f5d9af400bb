//! Rendering and binding contexts.
//!
//! A [`RenderContext`] accumulates SQL text and tracks transient render-mode
//! state (placeholder numbering, the in-subquery flag). A [`BindContext`]
//! accumulates the ordered bind-parameter sequence. Each context is owned by
//! a single render-and-bind pass; renderers only ever append to it.

use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::value::Value;

/// An ordered collection of bind-parameter values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamList {
    values: Vec<Value>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Add a value and return its 1-based index.
    pub fn push(&mut self, value: impl Into<Value>) -> usize {
        self.values.push(value.into());
        self.values.len()
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values in bind order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the list, returning the values in bind order.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Extend this list with another list's values.
    pub fn extend(&mut self, other: &ParamList) {
        self.values.extend(other.values.iter().cloned());
    }
}

/// The text sink for one rendering pass.
#[derive(Debug)]
pub struct RenderContext {
    dialect: Dialect,
    sql: String,
    bind_index: usize,
    in_subquery: bool,
}

impl RenderContext {
    /// Create a new context targeting the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            sql: String::new(),
            bind_index: 0,
            in_subquery: false,
        }
    }

    /// The target dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Append raw SQL text.
    pub fn push_sql(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a SQL keyword. Keyword casing policy lives here: keywords
    /// render lowercase.
    pub fn push_keyword(&mut self, keyword: &str) {
        self.sql.extend(keyword.chars().map(|c| c.to_ascii_lowercase()));
    }

    /// Append the next bind placeholder and advance the placeholder counter.
    pub fn push_placeholder(&mut self) {
        self.bind_index += 1;
        let marker = self.dialect.placeholder(self.bind_index);
        self.sql.push_str(&marker);
    }

    /// Whether rendering is currently inside a subquery.
    pub fn in_subquery(&self) -> bool {
        self.in_subquery
    }

    /// Run `f` with the in-subquery flag set, restoring the prior flag on
    /// every exit path.
    pub fn with_subquery<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> SqlResult<T>,
    ) -> SqlResult<T> {
        let prior = self.in_subquery;
        self.in_subquery = true;
        let result = f(self);
        self.in_subquery = prior;
        result
    }

    /// Consume the context, returning the rendered SQL.
    pub fn finish(self) -> String {
        self.sql
    }

    /// The SQL rendered so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

/// The parameter sink for one binding pass.
#[derive(Debug, Default)]
pub struct BindContext {
    params: ParamList,
}

impl BindContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self {
            params: ParamList::new(),
        }
    }

    /// Append a bind value.
    pub fn push_value(&mut self, value: impl Into<Value>) {
        self.params.push(value);
    }

    /// The parameters bound so far.
    pub fn params(&self) -> &ParamList {
        &self.params
    }

    /// Consume the context, returning the ordered parameters.
    pub fn into_params(self) -> ParamList {
        self.params
    }
}
