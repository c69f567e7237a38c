//! Link graph of a document corpus.
//!
//! Pages are stored densely and addressed by [`PageId`], which is the
//! position of the page name in sorted order. Outlinks are restricted to
//! the corpus itself: self-links and links to unknown pages are dropped on
//! construction, so every link target is also a page.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;

/// Dense index of a page within a [`Corpus`].
pub type PageId = usize;

/// A closed set of pages and the links between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    /// Page names, sorted.
    names: Vec<String>,

    /// Name -> id lookup.
    index: FxHashMap<String, PageId>,

    /// Outlinks per page: sorted, unique, never the page itself.
    outlinks: Vec<Vec<PageId>>,
}

impl Corpus {
    /// Build a corpus from `(page, linked pages)` pairs.
    ///
    /// Repeated pages have their links merged. Links to the page itself or
    /// to pages that never appear as a key are discarded.
    ///
    /// # Example
    /// ```
    /// use solver_poc_ai::rank::Corpus;
    ///
    /// let corpus = Corpus::from_links([
    ///     ("1.html", vec!["2.html", "1.html", "missing.html"]),
    ///     ("2.html", vec![]),
    /// ]);
    /// assert_eq!(corpus.links("1.html"), Some(vec!["2.html"]));
    /// assert!(corpus.is_dangling(corpus.id("2.html").unwrap()));
    /// ```
    pub fn from_links<I, P, L, T>(links: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in links {
            raw.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::<String>::into));
        }

        let names: Vec<String> = raw.keys().cloned().collect();
        let index: FxHashMap<String, PageId> = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();

        let outlinks = raw
            .iter()
            .map(|(page, targets)| {
                targets
                    .iter()
                    .filter(|target| *target != page)
                    .filter_map(|target| index.get(target).copied())
                    .collect()
            })
            .collect();

        Self {
            names,
            index,
            outlinks,
        }
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the corpus has no pages.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Page names in id order (sorted).
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up the id of a page.
    pub fn id(&self, page: &str) -> Option<PageId> {
        self.index.get(page).copied()
    }

    /// Name of the page with the given id.
    pub fn name(&self, id: PageId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Outlinks of a page by id. Empty for dangling pages and unknown ids.
    pub fn outlinks(&self, id: PageId) -> &[PageId] {
        self.outlinks.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of the pages linked from `page`, `None` if `page` is unknown.
    pub fn links(&self, page: &str) -> Option<Vec<&str>> {
        let id = self.id(page)?;
        Some(
            self.outlinks(id)
                .iter()
                .map(|&target| self.names[target].as_str())
                .collect(),
        )
    }

    /// Whether a page has no outlinks.
    ///
    /// A dangling page is treated as linking to every page in the corpus.
    pub fn is_dangling(&self, id: PageId) -> bool {
        self.outlinks(id).is_empty()
    }

    /// Pages linking to each page, indexed by target id.
    pub fn inlinks(&self) -> Vec<Vec<PageId>> {
        let mut inlinks = vec![Vec::new(); self.len()];
        for (source, targets) in self.outlinks.iter().enumerate() {
            for &target in targets {
                inlinks[target].push(source);
            }
        }
        inlinks
    }

    /// Iterate `(page, linked pages)` in sorted page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec<&str>)> + '_ {
        self.names.iter().zip(&self.outlinks).map(move |(name, targets)| {
            let linked = targets.iter().map(|&t| self.names[t].as_str()).collect();
            (name.as_str(), linked)
        })
    }

    /// Export as a name -> linked names map.
    pub fn to_map(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.iter()
            .map(|(page, linked)| {
                (
                    page.to_string(),
                    linked.into_iter().map(str::to_string).collect(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn test_ids_follow_sorted_names() {
        let corpus = Corpus::from_links([("b", vec!["a"]), ("a", vec![]), ("c", vec!["a", "b"])]);
        assert_eq!(corpus.names(), &["a", "b", "c"]);
        assert_eq!(corpus.id("c"), Some(2));
        assert_eq!(corpus.name(1), Some("b"));
        assert_eq!(corpus.outlinks(2), &[0, 1]);
    }

    #[test]
    fn test_self_and_external_links_dropped() {
        let corpus = Corpus::from_links([
            ("a", vec!["a", "b", "http://elsewhere"]),
            ("b", vec!["b"]),
        ]);
        assert_eq!(corpus.links("a"), Some(vec!["b"]));
        assert_eq!(corpus.links("b"), Some(vec![]));
        assert!(corpus.is_dangling(corpus.id("b").unwrap()));
        assert_eq!(corpus.links("zzz"), None);
    }

    #[test]
    fn test_repeated_pages_merge_links() {
        let corpus = Corpus::from_links([("a", vec!["b"]), ("a", vec!["c"]), ("b", vec![]), ("c", vec![])]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.links("a"), Some(vec!["b", "c"]));
    }

    #[test]
    fn test_inlinks_transpose() {
        let corpus = sample_corpus();
        let inlinks = corpus.inlinks();
        assert_eq!(inlinks[0], vec![1]);
        assert_eq!(inlinks[1], vec![0, 2]);
        assert_eq!(inlinks[2], vec![1]);
    }

    #[test]
    fn test_to_map_round_trip() {
        let corpus = sample_corpus();
        let map = corpus.to_map();
        assert_eq!(map["2.html"].len(), 2);
        assert_eq!(Corpus::from_links(map), corpus);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::from_links(Vec::<(String, Vec<String>)>::new());
        assert!(corpus.is_empty());
        assert!(corpus.inlinks().is_empty());
        assert_eq!(corpus.outlinks(0), &[] as &[PageId]);
    }
}
