//! Incremental assembly of a parameterized SQL statement.
//!
//! [`QueryAssembly`] keeps the statement text and the ordered parameter list
//! together as one value: [`QueryAssembly::push_bind`] appends the value and
//! writes its `$N` placeholder in a single step, so placeholder numbering
//! cannot drift from the parameter's position. [`QueryAssembly::push_filter`]
//! layers predicate chaining on top, using `WHERE` for the first predicate
//! appended and `AND` for every one after it. The builder itself tracks
//! first-ness; it is not recomputed from the parameter count at call sites.

use std::fmt::Write;

/// A scalar bound into a statement, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Int(i64),
    Float(f64),
    Text(String),
}

/// A statement under construction: text buffer plus bound parameters.
#[derive(Debug)]
pub struct QueryAssembly {
    sql: String,
    params: Vec<Param>,
    predicates: usize,
}

impl QueryAssembly {
    pub fn new(base: &str) -> Self {
        Self {
            sql: base.to_string(),
            params: Vec::new(),
            predicates: 0,
        }
    }

    /// Appends raw statement text.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Binds `value` and appends its positional placeholder. The placeholder
    /// index is the parameter's 1-based position, assigned here and nowhere
    /// else.
    pub fn push_bind(&mut self, value: Param) -> &mut Self {
        self.params.push(value);
        let _ = write!(self.sql, "${}", self.params.len());
        self
    }

    /// Appends one filter predicate with its bound value. The first predicate
    /// gets `WHERE`, every later one `AND`.
    pub fn push_filter(&mut self, predicate: &str, value: Param) -> &mut Self {
        let keyword = if self.predicates == 0 { "WHERE" } else { "AND" };
        self.predicates += 1;
        let _ = write!(self.sql, "\n{keyword} {predicate} ");
        self.push_bind(value)
    }

    /// Tears the assembly into statement text and its parameters, in order.
    pub fn into_parts(self) -> (String, Vec<Param>) {
        (self.sql, self.params)
    }
}
