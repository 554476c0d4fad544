//! Pagination Controls
//!
//! Windowed page links: always the first and last page, the two pages either
//! side of the current one, and ellipsis gaps where pages are elided.

use leptos::prelude::*;

use crate::api::SearchQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Gap,
}

/// Which links to render for `current` of `total` pages.
pub fn page_window(current: u32, total: u32) -> Vec<PageLink> {
    let mut links = Vec::new();
    for page in 1..=total {
        if page == 1 || page == total || (page + 2 >= current && page <= current + 2) {
            links.push(PageLink::Page(page));
        } else if (page + 3 == current && current > 4)
            || (page == current + 3 && current + 3 < total)
        {
            links.push(PageLink::Gap);
        }
    }
    links
}

#[component]
pub fn Pagination(query: SearchQuery, total_pages: u32) -> impl IntoView {
    let current = query.page;
    let prev = (current > 1).then(|| query.href(current - 1));
    let next = (current < total_pages).then(|| query.href(current + 1));

    view! {
        <div class="pagination">
            {match prev {
                Some(href) => view! { <a class="page-step" href=href>"Previous"</a> }.into_any(),
                None => view! { <span class="page-step disabled">"Previous"</span> }.into_any(),
            }}
            <div class="page-numbers">
                {page_window(current, total_pages)
                    .into_iter()
                    .map(|link| match link {
                        PageLink::Page(page) => {
                            let class = if page == current {
                                "page-link current"
                            } else {
                                "page-link"
                            };
                            view! { <a class=class href=query.href(page)>{page}</a> }.into_any()
                        }
                        PageLink::Gap => view! { <span class="page-gap">"..."</span> }.into_any(),
                    })
                    .collect_view()}
            </div>
            {match next {
                Some(href) => view! { <a class="page-step" href=href>"Next"</a> }.into_any(),
                None => view! { <span class="page-step disabled">"Next"</span> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Gap, Page};

    #[test]
    fn test_small_totals_have_no_gaps() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(
            page_window(2, 4),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
    }

    #[test]
    fn test_middle_page_windows_both_sides() {
        assert_eq!(
            page_window(10, 20),
            vec![
                Page(1),
                Gap,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Gap,
                Page(20),
            ]
        );
    }

    #[test]
    fn test_near_start_elides_only_tail() {
        assert_eq!(
            page_window(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(10)]
        );
    }

    #[test]
    fn test_near_end_elides_only_head() {
        assert_eq!(
            page_window(9, 10),
            vec![Page(1), Gap, Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
