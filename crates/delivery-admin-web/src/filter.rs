//! Client-side search and status filtering
//!
//! Filtering is a pure function of the fetched collection and the current
//! [`ListQuery`]; the source collection is never touched.

/// A record that can be matched against the search box and the status selector
pub trait Searchable {
    /// Field values the search term is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Raw status value compared against the selected status option
    fn status_key(&self) -> Option<&str> {
        None
    }
}

/// One entry of a status selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    /// Value of the `<option>`
    pub value: &'static str,
    /// Text shown in the selector
    pub label: &'static str,
    /// Lowercased status a record must have to match
    pub matches: &'static str,
}

impl StatusOption {
    /// Build a status option
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str, matches: &'static str) -> Self {
        Self {
            value,
            label,
            matches,
        }
    }
}

/// Current status selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No status restriction
    #[default]
    All,
    /// Only records whose lowercased status equals this value
    Only(String),
}

impl StatusFilter {
    /// Resolve a selector value against the options of a screen.
    ///
    /// `all` and unknown values select everything.
    #[must_use]
    pub fn from_selection(value: &str, options: &[StatusOption]) -> Self {
        options
            .iter()
            .find(|option| option.value == value)
            .map_or(Self::All, |option| Self::Only(option.matches.to_string()))
    }

    fn accepts(&self, status: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => {
                status.is_some_and(|status| status.trim().to_lowercase() == *expected)
            }
        }
    }
}

/// Search term and status selection of one screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Free text typed in the search box
    pub search: String,
    /// Selected status
    pub status: StatusFilter,
}

impl ListQuery {
    /// Whether a record passes both the search term and the status filter.
    ///
    /// An empty search term matches everything.
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        if !self.status.accepts(record.status_key()) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || record
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Records of `records` that match `query`, in their original order
pub fn apply<T: Searchable + Clone>(records: &[T], query: &ListQuery) -> Vec<T> {
    records
        .iter()
        .filter(|record| query.matches(*record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
        city: String,
        status: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.city.as_str()]
        }

        fn status_key(&self) -> Option<&str> {
            Some(&self.status)
        }
    }

    const OPTIONS: [StatusOption; 2] = [
        StatusOption::new("active", "Ativos", "ativo"),
        StatusOption::new("inactive", "Inativos", "inativo"),
    ];

    fn row(id: u32, name: &str, city: &str, status: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
            city: city.to_string(),
            status: status.to_string(),
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row(1, "Cantina da Nonna", "São Paulo", "Ativo"),
            row(2, "Sushi Kenzo", "Curitiba", "Inativo"),
            row(3, "Burger Point", "são paulo", "ATIVO"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let query = ListQuery {
            search: "SÃO PAULO".to_string(),
            status: StatusFilter::All,
        };
        let ids: Vec<_> = apply(&rows(), &query).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_status_filter_compares_lowercased_status() {
        let query = ListQuery {
            search: String::new(),
            status: StatusFilter::from_selection("active", &OPTIONS),
        };
        let ids: Vec<_> = apply(&rows(), &query).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_unknown_selection_means_all() {
        assert_eq!(StatusFilter::from_selection("all", &OPTIONS), StatusFilter::All);
        assert_eq!(StatusFilter::from_selection("vip", &OPTIONS), StatusFilter::All);
    }

    #[test]
    fn test_record_without_status_fails_status_filter() {
        struct Bare;
        impl Searchable for Bare {
            fn search_fields(&self) -> Vec<&str> {
                vec!["x"]
            }
        }

        let query = ListQuery {
            search: String::new(),
            status: StatusFilter::Only("ativo".to_string()),
        };
        assert!(!query.matches(&Bare));
        assert!(ListQuery::default().matches(&Bare));
    }

    #[test]
    fn test_source_collection_is_untouched() {
        let source = rows();
        let query = ListQuery {
            search: "sushi".to_string(),
            status: StatusFilter::All,
        };
        let filtered = apply(&source, &query);

        assert_eq!(filtered.len(), 1);
        assert_eq!(source, rows());
    }

    fn arb_row() -> impl Strategy<Value = Row> {
        (
            0_u32..100,
            "[a-zA-Z ]{0,12}",
            "[a-zA-Z ]{0,12}",
            prop_oneof![Just("Ativo"), Just("Inativo"), Just("ativo"), Just("")],
        )
            .prop_map(|(id, name, city, status)| row(id, &name, &city, status))
    }

    fn arb_query() -> impl Strategy<Value = ListQuery> {
        (
            "[a-zA-Z ]{0,4}",
            prop_oneof![Just("all"), Just("active"), Just("inactive")],
        )
            .prop_map(|(search, status)| ListQuery {
                search,
                status: StatusFilter::from_selection(status, &OPTIONS),
            })
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(
            records in proptest::collection::vec(arb_row(), 0..20),
            query in arb_query(),
        ) {
            let once = apply(&records, &query);
            let twice = apply(&once, &query);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn filtering_preserves_relative_order(
            records in proptest::collection::vec(arb_row(), 0..20),
            query in arb_query(),
        ) {
            let filtered = apply(&records, &query);
            let mut cursor = records.iter();
            for kept in &filtered {
                prop_assert!(cursor.any(|r| r == kept));
            }
        }
    }
}
