//! Substring list filter.
//!
//! # Example
//!
//! ```
//! use stroy_query::ListFilter;
//!
//! struct Contact {
//!     name: String,
//!     email: String,
//! }
//!
//! fn name(c: &Contact) -> &str {
//!     &c.name
//! }
//!
//! fn email(c: &Contact) -> &str {
//!     &c.email
//! }
//!
//! let contacts = vec![
//!     Contact { name: "Иван Петров".into(), email: "petrov@stroycrm.ru".into() },
//!     Contact { name: "Мария Сидорова".into(), email: "sidorova@stroycrm.ru".into() },
//! ];
//!
//! let filter = ListFilter::new(vec![name, email]);
//! let hits = filter.apply(&contacts, "ПЕТР");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(filter.apply(&contacts, "").len(), 2);
//! ```

use std::fmt;

use stroy_core::fold_case;

/// Reads one searchable text field of a record.
pub type FieldSelector<T> = fn(&T) -> &str;

/// Case-insensitive substring filter over a fixed set of fields.
///
/// Matching uses OR semantics across fields: a record is retained if any
/// selected field contains the query.
pub struct ListFilter<T> {
    selectors: Vec<FieldSelector<T>>,
}

impl<T> ListFilter<T> {
    /// Creates a filter over the given field selectors.
    pub fn new(selectors: Vec<FieldSelector<T>>) -> Self {
        Self { selectors }
    }

    /// Number of fields the filter inspects.
    pub fn field_count(&self) -> usize {
        self.selectors.len()
    }

    /// Returns `true` if `record` matches `query`.
    ///
    /// An empty query matches every record.
    pub fn matches(&self, record: &T, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.matches_folded(record, &fold_case(query))
    }

    /// Returns the matching records, borrowed, in input order.
    pub fn apply<'a>(&self, records: &'a [T], query: &str) -> Vec<&'a T> {
        if query.is_empty() {
            return records.iter().collect();
        }
        let folded = fold_case(query);
        records
            .iter()
            .filter(|record| self.matches_folded(record, &folded))
            .collect()
    }

    /// Returns clones of the matching records, in input order.
    pub fn apply_cloned(&self, records: &[T], query: &str) -> Vec<T>
    where
        T: Clone,
    {
        self.apply(records, query).into_iter().cloned().collect()
    }

    fn matches_folded(&self, record: &T, folded_query: &str) -> bool {
        self.selectors
            .iter()
            .any(|select| fold_case(select(record)).contains(folded_query))
    }
}

impl<T> Clone for ListFilter<T> {
    fn clone(&self) -> Self {
        Self {
            selectors: self.selectors.clone(),
        }
    }
}

impl<T> fmt::Debug for ListFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListFilter")
            .field("fields", &self.selectors.len())
            .finish()
    }
}

/// Filters `records` by `query` over `fields` in one call.
pub fn filter_records<T: Clone>(
    records: &[T],
    query: &str,
    fields: &[FieldSelector<T>],
) -> Vec<T> {
    ListFilter::new(fields.to_vec()).apply_cloned(records, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Client {
        name: String,
        company: String,
        email: String,
        phone: String,
    }

    fn name(c: &Client) -> &str {
        &c.name
    }

    fn company(c: &Client) -> &str {
        &c.company
    }

    fn email(c: &Client) -> &str {
        &c.email
    }

    fn client(name: &str, company: &str, email: &str) -> Client {
        Client {
            name: name.into(),
            company: company.into(),
            email: email.into(),
            phone: "+7 (495) 000-00-00".into(),
        }
    }

    fn clients() -> Vec<Client> {
        vec![
            client("Александр Иванов", "ООО \"Инвест\"", "ivanov@invest.ru"),
            client("Петр Смирнов", "ИП Петров", "petrov@mail.ru"),
            client("Мария Сидорова", "АО \"РемСтрой\"", "sidorova@remstroy.ru"),
            client("Дмитрий Козлов", "ООО \"Стройком\"", "kozlov@stroikom.ru"),
        ]
    }

    fn filter() -> ListFilter<Client> {
        ListFilter::new(vec![name, company, email])
    }

    fn names(hits: &[&Client]) -> Vec<String> {
        hits.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let all = clients();
        assert_eq!(filter().apply_cloned(&all, ""), all);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let all = clients();
        let hits = filter().apply(&all, "мАрИя");
        assert_eq!(names(&hits), vec!["Мария Сидорова"]);
    }

    #[test]
    fn test_matches_any_selected_field() {
        let all = clients();
        let hits = filter().apply(&all, "ооо");
        assert_eq!(names(&hits), vec!["Александр Иванов", "Дмитрий Козлов"]);
    }

    #[test]
    fn test_matches_email() {
        let all = clients();
        let hits = filter().apply(&all, "MAIL.RU");
        assert_eq!(names(&hits), vec!["Петр Смирнов"]);
    }

    #[test]
    fn test_unselected_field_is_ignored() {
        let all = clients();
        assert!(filter().apply(&all, "495").is_empty());
        assert!(all.iter().all(|c| c.phone.contains("495")));
    }

    #[test]
    fn test_no_match() {
        let all = clients();
        assert!(filter().apply(&all, "zzz").is_empty());
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let all = clients();
        let hits = filter().apply(&all, " ");
        assert_eq!(hits.len(), 4);
        assert!(filter().apply(&all, "  ").is_empty());
    }

    #[test]
    fn test_stable_order() {
        let all = clients();
        let hits = filter().apply(&all, "ov");
        assert_eq!(
            names(&hits),
            vec!["Александр Иванов", "Петр Смирнов", "Мария Сидорова", "Дмитрий Козлов"]
        );
    }

    #[test]
    fn test_matches_single_record() {
        let c = client("Иван", "X", "a@b.c");
        assert!(filter().matches(&c, "ИВ"));
        assert!(filter().matches(&c, ""));
        assert!(!filter().matches(&c, "q"));
    }

    #[test]
    fn test_no_selectors_matches_only_empty_query() {
        let all = clients();
        let none: ListFilter<Client> = ListFilter::new(Vec::new());
        assert_eq!(none.apply(&all, "").len(), 4);
        assert!(none.apply(&all, "a").is_empty());
        assert_eq!(none.field_count(), 0);
    }

    #[test]
    fn test_filter_records_function() {
        let all = clients();
        let fields: [FieldSelector<Client>; 1] = [email];
        let hits = filter_records(&all, "remstroy", &fields);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Мария Сидорова");
    }
}
