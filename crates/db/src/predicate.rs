//! Filter-to-query translation for catalog list endpoints.
//!
//! A [`ListFilter`] pushes its populated fields into a [`Predicate`], which
//! renders a `WHERE` clause of numbered placeholders (`$1`, `$2`, ...) and
//! keeps the matching bind values in the same order. Request values only
//! ever reach the database as bound parameters.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// Typed bind value for dynamically-built catalog queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Bool(bool),
    BigInt(i64),
    Text(String),
}

/// Conjunction of column conditions plus their bind values.
///
/// Placeholder numbers are assigned in push order and always equal the
/// position of the corresponding value in [`Predicate::bind_values`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    conditions: Vec<String>,
    bind_values: Vec<BindValue>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_placeholder(&mut self, value: BindValue) -> String {
        self.bind_values.push(value);
        format!("${}", self.bind_values.len())
    }

    /// Add `column = $n`.
    pub fn push_eq(&mut self, column: &'static str, value: BindValue) -> &mut Self {
        let placeholder = self.next_placeholder(value);
        self.conditions.push(format!("{column} = {placeholder}"));
        self
    }

    /// Add `column IN ($n, $n+1, ...)` with one placeholder per value.
    ///
    /// `values` must not be empty: `IN ()` is not valid SQL. Filters skip
    /// empty lists before calling this.
    pub fn push_in<I>(&mut self, column: &'static str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = BindValue>,
    {
        let placeholders: Vec<String> = values
            .into_iter()
            .map(|value| self.next_placeholder(value))
            .collect();
        debug_assert!(
            !placeholders.is_empty(),
            "set-membership condition on `{column}` needs at least one value"
        );
        self.conditions
            .push(format!("{column} IN ({})", placeholders.join(", ")));
        self
    }

    /// True when no condition has been added.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render the clause: empty when there are no conditions, otherwise
    /// `WHERE a AND b ...`.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn bind_values(&self) -> &[BindValue] {
        &self.bind_values
    }
}

/// A request filter that knows which conditions its populated fields imply.
pub trait ListFilter {
    /// Push one condition per populated field into `predicate`.
    fn apply(&self, predicate: &mut Predicate);
}

/// Translate an optional filter into a predicate.
///
/// An absent filter yields an empty predicate, i.e. an unfiltered read.
pub fn translate_filter<F: ListFilter>(filter: Option<&F>) -> Predicate {
    let mut predicate = Predicate::new();
    if let Some(filter) = filter {
        filter.apply(&mut predicate);
    }
    predicate
}

/// Bind a slice of [`BindValue`] to a sqlx `QueryAs`, in order.
pub fn bind_values<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    bind_values: &'q [BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Bool(v) => q = q.bind(*v),
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
