use serde::Serialize;

use crate::domain::types::{Limit, Offset};
use crate::sync::FilterSyncConfig;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current + 1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Entry of the pagination bar; `number == None` renders as an ellipsis.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub number: Option<usize>,
    pub url: Option<String>,
    pub current: bool,
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageLink>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Paginated<T> {
    /// Wraps one page of `items` out of `total_count` matches. Page links keep
    /// the current filter value under the control's parameter name.
    pub fn new(
        items: Vec<T>,
        total_count: usize,
        limit: Limit,
        offset: Offset,
        links: &FilterSyncConfig,
        filter_value: &str,
    ) -> Self {
        let total_pages = total_count.div_ceil(limit.get());
        let current_page = offset.page(limit);

        // An offset past the last page still shows the window around the end.
        let pages = get_pages(total_pages, current_page.min(total_pages), 2, 2, 4, 2)
            .into_iter()
            .map(|number| PageLink {
                number,
                url: number.map(|n| links.page_url(limit, n, filter_value)),
                current: number == Some(current_page),
            })
            .collect();

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            total_count,
            limit: limit.get(),
            offset: offset.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_collapses_with_ellipses() {
        assert_eq!(
            get_pages(20, 10, 2, 2, 4, 2),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
        assert!(get_pages(0, 1, 2, 2, 4, 2).is_empty());
        assert_eq!(
            get_pages(3, 1, 2, 2, 4, 2),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn links_carry_offset_and_filter() {
        let limit = Limit::new(10).unwrap();
        let config = FilterSyncConfig::resetting("/day_off/", "filter");

        let page = Paginated::new(vec![(); 10], 35, limit, Offset::new(20), &config, "true");

        assert_eq!(page.total_pages, 4);
        assert_eq!(page.page, 3);
        assert_eq!(
            page.pages[2],
            PageLink {
                number: Some(3),
                url: Some("/day_off/?limit=10&offset=20&filter=true".to_string()),
                current: true,
            }
        );
        assert_eq!(
            page.pages[0].url.as_deref(),
            Some("/day_off/?limit=10&offset=0&filter=true")
        );
    }

    #[test]
    fn offset_past_the_end_keeps_all_links() {
        let limit = Limit::new(1).unwrap();
        let config = FilterSyncConfig::resetting("/day_off/", "filter");

        let page: Paginated<()> =
            Paginated::new(vec![], 3, limit, Offset::new(usize::MAX), &config, "");

        assert_eq!(page.page, usize::MAX);
        assert_eq!(
            page.pages.iter().map(|link| link.number).collect::<Vec<_>>(),
            vec![Some(1), Some(2), Some(3)]
        );
        assert!(page.pages.iter().all(|link| !link.current));
    }

    #[test]
    fn empty_result_has_no_pages() {
        let config = FilterSyncConfig::preserving("/overtime/", "is_used");
        let page: Paginated<()> =
            Paginated::new(vec![], 0, Limit::default(), Offset::default(), &config, "");

        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert!(page.pages.is_empty());
    }
}
