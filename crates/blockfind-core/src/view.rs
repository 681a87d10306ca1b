//! Pagination and filtering over the classified aggregate.
//!
//! Pure view logic: everything here is derived from an already-classified
//! result set without re-parsing. Counts are computed before filtering so
//! badge totals stay stable while the user toggles views.

use crate::{DocumentResult, FilterMode, parent_label, target_label};
use serde::{Deserialize, Serialize};

/// Default number of documents per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One document on the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Document id.
    pub id: u64,
    /// Document title (placeholder-substituted upstream).
    pub title: String,
    /// Edit locator.
    pub edit_link: String,
    /// View locator.
    pub view_link: String,
    /// At least one root-level instance.
    pub has_root: bool,
    /// At least one nested instance. Independent of `has_root`; both may be
    /// true for the same document.
    pub has_nested: bool,
    /// Distinct immediate-parent display labels of the nested instances,
    /// first-occurrence order.
    pub parent_labels: Vec<String>,
}

/// The structured payload a rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Display label of the searched block.
    pub target_label: String,
    /// Documents in the unfiltered aggregate.
    pub all_count: usize,
    /// Documents with at least one nested instance, counted once each.
    pub nested_count: usize,
    /// Documents after the active filter.
    pub total: usize,
    /// Clamped current page, 1-based.
    pub page: usize,
    /// Page count; at least 1 even when empty.
    pub total_pages: usize,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Whether filter toggle controls should render.
    pub show_filters: bool,
    /// The filter that produced this page.
    pub filter: FilterMode,
    /// The page slice.
    pub items: Vec<ResultItem>,
}

/// Slices, filters, and annotates the aggregate for one page.
pub fn render(
    target: &str,
    results: &[DocumentResult],
    page: usize,
    filter: FilterMode,
    page_size: usize,
) -> ResultSet {
    let page_size = page_size.max(1);

    let all_count = results.len();
    let nested_count = results.iter().filter(|d| d.has_nested()).count();

    let filtered: Vec<&DocumentResult> = match filter {
        FilterMode::All => results.iter().collect(),
        FilterMode::Nested => results.iter().filter(|d| d.has_nested()).collect(),
    };

    let total = filtered.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let offset = (page - 1) * page_size;

    let items = filtered
        .iter()
        .skip(offset)
        .take(page_size)
        .map(|doc| annotate(doc))
        .collect();

    ResultSet {
        target_label: target_label(target),
        all_count,
        nested_count,
        total,
        page,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
        show_filters: nested_count > 0,
        filter,
        items,
    }
}

fn annotate(doc: &DocumentResult) -> ResultItem {
    let mut parent_labels: Vec<String> = Vec::new();
    for instance in &doc.block_instances {
        if let Some(immediate_parent) = instance.parent_chain.last() {
            let label = parent_label(immediate_parent);
            if !parent_labels.contains(&label) {
                parent_labels.push(label);
            }
        }
    }

    ResultItem {
        id: doc.id,
        title: doc.title.clone(),
        edit_link: doc.edit_link.clone(),
        view_link: doc.view_link.clone(),
        has_root: doc.has_root(),
        has_nested: doc.has_nested(),
        parent_labels,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::MatchInstance;
    use proptest::prelude::*;

    fn doc(id: u64, instances: Vec<MatchInstance>) -> DocumentResult {
        DocumentResult {
            id,
            title: format!("Doc {id:03}"),
            edit_link: format!("/edit/{id}"),
            view_link: format!("/view/{id}"),
            block_instances: instances,
        }
    }

    fn root_only(id: u64) -> DocumentResult {
        doc(id, vec![MatchInstance::new(vec![])])
    }

    fn nested_only(id: u64, parent: &str) -> DocumentResult {
        doc(id, vec![MatchInstance::new(vec![parent.to_string()])])
    }

    #[test]
    fn pages_partition_the_result_set() {
        let results: Vec<_> = (1..=25).map(root_only).collect();
        let mut seen = Vec::new();
        for page in 1..=3 {
            let set = render("core/quote", &results, page, FilterMode::All, 10);
            assert_eq!(set.total_pages, 3);
            seen.extend(set.items.iter().map(|i| i.id));
        }
        let expected: Vec<u64> = (1..=25).collect();
        assert_eq!(seen, expected);

        let last = render("core/quote", &results, 3, FilterMode::All, 10);
        assert_eq!(last.items.len(), 5);
        assert!(last.has_previous);
        assert!(!last.has_next);
    }

    #[test]
    fn page_is_clamped_into_range() {
        let results: Vec<_> = (1..=5).map(root_only).collect();
        let set = render("core/quote", &results, 99, FilterMode::All, 10);
        assert_eq!(set.page, 1);
        let set = render("core/quote", &results, 0, FilterMode::All, 10);
        assert_eq!(set.page, 1);
    }

    #[test]
    fn empty_aggregate_still_has_one_page() {
        let set = render("core/quote", &[], 1, FilterMode::All, 10);
        assert_eq!(set.total_pages, 1);
        assert_eq!(set.all_count, 0);
        assert!(!set.show_filters);
        assert!(set.items.is_empty());
    }

    #[test]
    fn nested_count_counts_documents_not_instances() {
        let results = vec![
            doc(
                1,
                vec![
                    MatchInstance::new(vec!["core/columns".into()]),
                    MatchInstance::new(vec!["core/group".into()]),
                ],
            ),
            root_only(2),
        ];
        let set = render("core/quote", &results, 1, FilterMode::All, 10);
        assert_eq!(set.all_count, 2);
        assert_eq!(set.nested_count, 1);
        assert!(set.show_filters);
    }

    #[test]
    fn nested_filter_keeps_documents_that_also_have_root_matches() {
        let both = doc(
            1,
            vec![
                MatchInstance::new(vec![]),
                MatchInstance::new(vec!["core/columns".into()]),
            ],
        );
        let results = vec![both, root_only(2)];
        let set = render("core/quote", &results, 1, FilterMode::Nested, 10);
        assert_eq!(set.total, 1);
        assert_eq!(set.items[0].id, 1);
        assert!(set.items[0].has_root);
        assert!(set.items[0].has_nested);
        // Header counts are pre-filter.
        assert_eq!(set.all_count, 2);
    }

    #[test]
    fn parent_labels_are_distinct_and_ordered_by_first_occurrence() {
        let result = doc(
            1,
            vec![
                MatchInstance::new(vec!["core/media-text".into(), "acme/fancy-group".into()]),
                MatchInstance::new(vec!["core/columns".into()]),
                MatchInstance::new(vec!["other/fancy-group".into()]),
            ],
        );
        let set = render("core/quote", &[result], 1, FilterMode::All, 10);
        // Immediate parents only, namespace-stripped, de-duplicated.
        assert_eq!(set.items[0].parent_labels, ["Fancy Group", "Columns"]);
    }

    #[test]
    fn target_label_strips_core_prefix() {
        let set = render("core/pullquote", &[], 1, FilterMode::All, 10);
        assert_eq!(set.target_label, "Pullquote");
    }

    proptest! {
        #[test]
        fn pagination_never_overlaps_or_gaps(
            total in 0usize..60,
            page_size in 1usize..12,
        ) {
            let results: Vec<_> = (1..=total as u64).map(root_only).collect();
            let pages = total.div_ceil(page_size).max(1);
            let mut seen = Vec::new();
            for page in 1..=pages {
                let set = render("core/quote", &results, page, FilterMode::All, page_size);
                prop_assert_eq!(set.total_pages, pages);
                seen.extend(set.items.iter().map(|i| i.id));
            }
            let expected: Vec<u64> = (1..=total as u64).collect();
            prop_assert_eq!(seen, expected);
        }
    }
}
