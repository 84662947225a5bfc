// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Conditions and paging for multi-row statements.
//!
//! [`SelectQuery`] carries the caller-supplied parts of a `SELECT`: a raw
//! `WHERE` fragment, a raw `ORDER BY` fragment and the paging window. The
//! fragments are inserted verbatim; any parameters they reference are bound
//! by the caller.

/// Filter, ordering and paging for a multi-row `SELECT`.
///
/// # Example
///
/// ```rust
/// use entity_sql::SelectQuery;
///
/// let query = SelectQuery::new()
///     .filter("[Age] > @MinAge")
///     .order_by("[Name] ASC")
///     .page(2, 25);
///
/// assert_eq!(query.skip_rows(), Some(50));
/// assert_eq!(query.limit_rows(), Some(25));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    filter: Option<String>,
    order_by: Option<String>,
    skip: Option<u64>,
    limit: Option<u64>
}

impl SelectQuery {
    /// Empty query: every row, natural order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw `WHERE` fragment, without the keyword.
    #[must_use]
    pub fn filter(mut self, condition: impl Into<String>) -> Self {
        self.filter = Some(condition.into());
        self
    }

    /// Raw `ORDER BY` fragment, without the keyword.
    #[must_use]
    pub fn order_by(mut self, order: impl Into<String>) -> Self {
        self.order_by = Some(order.into());
        self
    }

    /// Number of rows to skip.
    #[must_use]
    pub fn skip(mut self, rows: u64) -> Self {
        self.skip = Some(rows);
        self
    }

    /// Maximum number of rows to return.
    #[must_use]
    pub fn limit(mut self, rows: u64) -> Self {
        self.limit = Some(rows);
        self
    }

    /// Window for a 0-indexed page.
    ///
    /// ```rust
    /// use entity_sql::SelectQuery;
    ///
    /// let first = SelectQuery::new().page(0, 10); // skip 0, limit 10
    /// let third = SelectQuery::new().page(2, 10); // skip 20, limit 10
    /// assert_eq!(third.skip_rows(), Some(20));
    /// # assert_eq!(first.skip_rows(), Some(0));
    /// ```
    #[must_use]
    pub fn page(self, page: u64, per_page: u64) -> Self {
        self.skip(page.saturating_mul(per_page)).limit(per_page)
    }

    /// `WHERE` fragment, if any.
    #[must_use]
    pub fn filter_clause(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// `ORDER BY` fragment, if any.
    #[must_use]
    pub fn order_clause(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    /// Rows to skip, if requested.
    #[must_use]
    pub fn skip_rows(&self) -> Option<u64> {
        self.skip
    }

    /// Row limit, if requested.
    #[must_use]
    pub fn limit_rows(&self) -> Option<u64> {
        self.limit
    }

    /// Whether any paging was requested.
    #[must_use]
    pub fn is_paged(&self) -> bool {
        self.skip.is_some() || self.limit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query() {
        let q = SelectQuery::new();
        assert_eq!(q.filter_clause(), None);
        assert_eq!(q.order_clause(), None);
        assert!(!q.is_paged());
    }

    #[test]
    fn page_zero() {
        let q = SelectQuery::new().page(0, 25);
        assert_eq!(q.skip_rows(), Some(0));
        assert_eq!(q.limit_rows(), Some(25));
        assert!(q.is_paged());
    }

    #[test]
    fn page_saturates() {
        let q = SelectQuery::new().page(u64::MAX, 2);
        assert_eq!(q.skip_rows(), Some(u64::MAX));
    }

    #[test]
    fn skip_only_is_paged() {
        assert!(SelectQuery::new().skip(5).is_paged());
        assert!(SelectQuery::new().limit(5).is_paged());
    }
}
