//! Query option construction.
//!
//! [`QueryOptions`] collects the filter, sort, expansion, and pagination
//! parameters a caller wants on a query request, and [`QueryOptions::apply_to`]
//! turns them into the final request path. Predicate and sort expressions are
//! opaque strings in the platform's query language; each one is
//! percent-escaped as a single unit and appended as its own repeated query
//! key, in insertion order.

use std::fmt::Write as _;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in query parameter values.
///
/// Covers everything with reserved meaning in a query string plus the
/// characters that would corrupt a percent-decode round trip. The escape is
/// applied to a whole predicate/sort/expansion expression at once, so
/// characters meaningful inside the expression itself (`=`, `"`, spaces) are
/// escaped along with the rest.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub(crate) fn escape(component: &str) -> String {
    utf8_percent_encode(component, QUERY_COMPONENT).to_string()
}

/// Applies expansion paths to a base path.
///
/// An empty expansion list leaves the path untouched; otherwise each path
/// becomes one `expand=` parameter, escaped individually, in input order.
pub(crate) fn path_with_expansion(base_path: &str, expansion: &[String]) -> String {
    if expansion.is_empty() {
        return base_path.to_owned();
    }
    let joined = expansion.iter().map(|path| escape(path)).collect::<Vec<_>>().join("&expand=");
    format!("{base_path}?expand={joined}")
}

/// Filter, sort, expansion, and pagination options for a query request.
///
/// All fields are independently optional and empty by default. Insertion
/// order of predicates, sort expressions, and expansion paths is preserved on
/// the wire; nothing is deduplicated. A value is consumed read-only per call
/// and never mutated by the SDK.
///
/// # Examples
///
/// ```
/// use storefront_sdk::QueryOptions;
///
/// let options = QueryOptions::new()
///     .filter(r#"cartState="Active""#)
///     .sort_by("createdAt desc")
///     .limit(20)
///     .offset(10);
///
/// let path = options.apply_to("carts");
/// assert!(path.starts_with("carts?"));
/// assert!(path.ends_with("&limit=20&offset=10"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    predicates: Vec<String>,
    sort: Vec<String>,
    expansion: Vec<String>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl QueryOptions {
    /// Creates empty options: no filtering, no sorting, platform-default
    /// pagination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one predicate in the platform's query language,
    /// e.g. `customerId="abc"`. Repeated predicates are ANDed by the server.
    #[must_use]
    pub fn filter(mut self, predicate: impl Into<String>) -> Self {
        self.predicates.push(predicate.into());
        self
    }

    /// Adds one sort expression, e.g. `createdAt desc`. Earlier entries take
    /// precedence.
    #[must_use]
    pub fn sort_by(mut self, expression: impl Into<String>) -> Self {
        self.sort.push(expression.into());
        self
    }

    /// Adds one reference-expansion path, e.g.
    /// `lineItems[*].discountedPrice`.
    #[must_use]
    pub fn expand(mut self, path: impl Into<String>) -> Self {
        self.expansion.push(path.into());
        self
    }

    /// Caps the number of returned results.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the first `offset` results.
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Builds the final request path from a base resource path.
    ///
    /// Expansion is applied first, then exactly one trailing `/` is stripped
    /// if present, then a `?` separator is ensured (never duplicated), then
    /// `where`, `sort`, `limit`, and `offset` parameters are appended in that
    /// order. This cannot fail: pagination values are unsigned by type and
    /// expressions are escaped, not validated.
    #[must_use]
    pub fn apply_to(&self, base_path: &str) -> String {
        let mut path = path_with_expansion(base_path, &self.expansion);

        if path.ends_with('/') {
            path.pop();
        }
        if !path.contains('?') {
            path.push('?');
        }

        for predicate in &self.predicates {
            path.push_str("&where=");
            path.push_str(&escape(predicate));
        }
        for expression in &self.sort {
            path.push_str("&sort=");
            path.push_str(&escape(expression));
        }
        if let Some(limit) = self.limit {
            let _ = write!(path, "&limit={limit}");
        }
        if let Some(offset) = self.offset {
            let _ = write!(path, "&offset={offset}");
        }

        path
    }
}
