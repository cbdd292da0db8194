//! Case-insensitive substring filtering shared by the static lookup tables.

/// A reference entry that can be matched against a free-text query.
pub trait Searchable {
    /// Fields the query is matched against (e.g. name and country).
    fn search_fields(&self) -> [&str; 2];

    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Order-preserving selection of the entries matching `query`.
///
/// An empty (or whitespace-only) query selects everything.
pub fn filter<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let query = query.trim();
    if query.is_empty() {
        return items.into_iter().collect();
    }

    items.into_iter().filter(|item| item.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(&'static str, &'static str);

    impl Searchable for Entry {
        fn search_fields(&self) -> [&str; 2] {
            [self.0, self.1]
        }
    }

    const ENTRIES: &[Entry] = &[
        Entry("Париж", "Франция"),
        Entry("Ницца", "Франция"),
        Entry("Рим", "Италия"),
    ];

    #[test]
    fn test_matches_second_field() {
        let found = filter(ENTRIES, "франц");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0, "Париж");
        assert_eq!(found[1].0, "Ницца");
    }

    #[test]
    fn test_uppercase_query() {
        let found = filter(ENTRIES, "РИМ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1, "Италия");
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        assert_eq!(filter(ENTRIES, "   ").len(), ENTRIES.len());
    }

    #[test]
    fn test_idempotent() {
        let once = filter(ENTRIES, "и");
        let twice = filter(once.iter().copied(), "и");
        let names = |v: &[&Entry]| v.iter().map(|e| e.0).collect::<Vec<_>>();
        assert_eq!(names(&once), names(&twice));
    }
}
