//! Placeholder selection for an empty users table.

/// Which empty-state message replaces the table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// A search query matched nothing; offer a clear-search affordance.
    EmptySearchResult,
    /// The directory has no users at all.
    EmptyList,
}

/// Decides between the live table and an empty placeholder. The
/// search-specific message wins when both a query and zero results hold.
pub fn select_placeholder(search_query: Option<&str>, total_results: u64) -> Option<PlaceholderKind> {
    let query_active = search_query.is_some_and(|query| !query.trim().is_empty());

    if query_active && total_results == 0 {
        Some(PlaceholderKind::EmptySearchResult)
    } else if total_results == 0 {
        Some(PlaceholderKind::EmptyList)
    } else {
        None
    }
}
