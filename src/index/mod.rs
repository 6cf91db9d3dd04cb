use crate::models::{IndexEntry, PageRecord};
use crate::text::{tokenize_page, StripPolicy, TokenFilter};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Book number to the in-book pages a word appears on.
pub type Locations = BTreeMap<u32, BTreeSet<u32>>;

/// Eligible words of every retained page, keyed by `(book, page)`.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pages: BTreeMap<(u32, u32), Vec<String>>,
}

impl PageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, book: u32, page: u32, words: Vec<String>) {
        self.pages.entry((book, page)).or_default().extend(words);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn words_on(&self, book: u32, page: u32) -> Option<&[String]> {
        self.pages.get(&(book, page)).map(Vec::as_slice)
    }

    /// Inverts the page map. A word repeated on one page is counted once.
    pub fn locations(&self) -> BTreeMap<&str, Locations> {
        let mut by_word: BTreeMap<&str, Locations> = BTreeMap::new();
        for (&(book, page), words) in &self.pages {
            for word in words {
                by_word
                    .entry(word.as_str())
                    .or_default()
                    .entry(book)
                    .or_default()
                    .insert(page);
            }
        }
        by_word
    }
}

/// Counts reported after the index is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub pages: usize,
    pub unique_words: usize,
    pub entries: usize,
    pub too_frequent: usize,
}

pub fn build_page_index(
    pages: &[PageRecord],
    policy: &StripPolicy,
    filter: &TokenFilter<'_>,
) -> PageIndex {
    let mut index = PageIndex::new();
    for record in pages {
        let words = tokenize_page(&record.text, policy, filter);
        debug!(
            "Book {} page {}: {} eligible words",
            record.book,
            record.page,
            words.len()
        );
        index.insert(record.book, record.page, words);
    }
    index
}

/// Total number of `(book, page)` references.
pub fn reference_count(locations: &Locations) -> usize {
    locations.values().map(BTreeSet::len).sum()
}

/// Renders `book(p1, p2) | book(p1)` with books and pages ascending.
pub fn format_locations(locations: &Locations) -> String {
    locations
        .iter()
        .map(|(book, pages)| {
            let pages: Vec<String> = pages.iter().map(u32::to_string).collect();
            format!("{}({})", book, pages.join(", "))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Keeps words referenced on at least one and fewer than `max_references`
/// pages, sorted case-insensitively.
pub fn build_entries(index: &PageIndex, max_references: usize) -> (Vec<IndexEntry>, IndexSummary) {
    let locations = index.locations();
    let mut summary = IndexSummary {
        pages: index.page_count(),
        unique_words: locations.len(),
        ..IndexSummary::default()
    };

    let mut entries: Vec<IndexEntry> = locations
        .iter()
        .filter(|(_, locs)| {
            let refs = reference_count(locs);
            if refs >= max_references {
                summary.too_frequent += 1;
            }
            refs > 0 && refs < max_references
        })
        .map(|(word, locs)| IndexEntry {
            word: word.to_string(),
            page_refs: format_locations(locs),
        })
        .collect();

    entries.sort_by(|a, b| {
        a.word
            .to_lowercase()
            .cmp(&b.word.to_lowercase())
            .then_with(|| a.word.cmp(&b.word))
    });
    summary.entries = entries.len();

    (entries, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::WordList;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_rare_word_across_books() {
        let mut index = PageIndex::new();
        index.insert(1, 1, words(&["alpha"]));
        index.insert(1, 2, words(&["theword", "alpha"]));
        index.insert(2, 1, words(&["theword"]));

        let (entries, summary) = build_entries(&index, 15);
        assert_eq!(
            entries,
            vec![
                IndexEntry { word: "alpha".into(), page_refs: "1(1, 2)".into() },
                IndexEntry { word: "theword".into(), page_refs: "1(2) | 2(1)".into() },
            ]
        );
        assert_eq!(summary.unique_words, 2);
        assert_eq!(summary.pages, 3);
    }

    #[test]
    fn test_repeats_on_one_page_count_once() {
        let mut index = PageIndex::new();
        index.insert(3, 7, words(&["nmap", "nmap", "nmap"]));

        let (entries, _) = build_entries(&index, 2);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].page_refs, "3(7)");
    }

    #[test]
    fn test_frequency_threshold() {
        let mut index = PageIndex::new();
        for page in 1..=15 {
            index.insert(1, page, words(&["common"]));
        }
        for page in 1..=14 {
            index.insert(2, page, words(&["edge"]));
        }

        let (entries, summary) = build_entries(&index, 15);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "edge");
        assert_eq!(entries[0].page_refs.matches(',').count(), 13);
        assert_eq!(summary.too_frequent, 1);
    }

    #[test]
    fn test_configurable_threshold() {
        let mut index = PageIndex::new();
        index.insert(1, 1, words(&["ldap"]));
        index.insert(1, 2, words(&["ldap"]));

        assert_eq!(build_entries(&index, 3).0.len(), 1);
        assert!(build_entries(&index, 2).0.is_empty());
    }

    #[test]
    fn test_pages_sorted_numerically() {
        let mut locs = Locations::new();
        locs.entry(2).or_default().extend([10, 9, 100]);
        locs.entry(1).or_default().insert(3);
        assert_eq!(format_locations(&locs), "1(3) | 2(9, 10, 100)");
        assert_eq!(reference_count(&locs), 4);
    }

    #[test]
    fn test_entries_sorted_case_insensitively() {
        let mut index = PageIndex::new();
        index.insert(1, 1, words(&["Zeek", "apache", "Bro"]));

        let (entries, _) = build_entries(&index, 15);
        let order: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["apache", "Bro", "Zeek"]);
    }

    #[test]
    fn test_build_page_index_filters_common_words() {
        let common = WordList::from_words(["router"]);
        let prefixes = vec!["http://".to_string()];
        let filter = TokenFilter {
            common_words: &common,
            min_length: 3,
            url_prefixes: &prefixes,
        };
        let pages = vec![
            PageRecord::new(1, 1, "The Router forwards IPsec".to_string()),
            PageRecord::new(1, 2, "ROUTER ipsec".to_string()),
        ];

        let index = build_page_index(&pages, &StripPolicy::default(), &filter);
        assert_eq!(index.words_on(1, 2), Some(&["ipsec".to_string()][..]));

        let (entries, _) = build_entries(&index, 15);
        assert!(entries.iter().all(|e| e.word != "router"));
        assert!(entries.iter().any(|e| e.word == "ipsec" && e.page_refs == "1(1, 2)"));
    }
}
