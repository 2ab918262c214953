//! Cursor over a fixed list of rows, one page at a time.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One labelled entry of a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Rows side by side, two per line.
    Compact,
    /// One row per line.
    #[default]
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
}

#[derive(Debug, Clone)]
pub struct Paginator {
    rows: Vec<Row>,
    page_size: usize,
    current: usize,
    window: Range<usize>,
    layout: Layout,
    title: Option<String>,
}

impl Paginator {
    /// Starts on the first page. A page size of zero is treated as one.
    pub fn new(rows: Vec<Row>, layout: Layout, page_size: usize, title: Option<String>) -> Self {
        let mut paginator = Self {
            rows,
            page_size: page_size.max(1),
            current: 0,
            window: 0..0,
            layout,
            title,
        };
        paginator.refresh_window();
        paginator
    }

    /// Always at least one, so an empty list still has an (empty) page.
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn current_page(&self) -> &[Row] {
        &self.rows[self.window.clone()]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.page_count()
    }

    /// Move one page. Returns false when already at that edge.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        let moved = match navigation {
            Navigation::Previous if !self.is_first() => {
                self.current -= 1;
                true
            }
            Navigation::Next if !self.is_last() => {
                self.current += 1;
                true
            }
            _ => false,
        };

        if moved {
            self.refresh_window();
        }
        moved
    }

    fn refresh_window(&mut self) {
        let start = (self.current * self.page_size).min(self.rows.len());
        let end = (start + self.page_size).min(self.rows.len());
        self.window = start..end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        (0..n).map(|i| Row::new(format!("row {}", i), i.to_string())).collect()
    }

    fn paginator(n: usize, page_size: usize) -> Paginator {
        Paginator::new(rows(n), Layout::Compact, page_size, None)
    }

    #[test]
    fn page_sizes_follow_ceiling_division() {
        for (n, p) in [(1, 1), (5, 2), (12, 12), (13, 12), (25, 5), (26, 5), (100, 7)] {
            let mut paginator = paginator(n, p);
            let count = paginator.page_count();
            assert_eq!(count, n.div_ceil(p), "n={} p={}", n, p);

            let mut seen = 0;
            for index in 0..count {
                let len = paginator.current_page().len();
                if index + 1 < count {
                    assert_eq!(len, p);
                } else {
                    assert_eq!(len, n - p * (count - 1));
                }
                seen += len;
                paginator.navigate(Navigation::Next);
            }
            assert_eq!(seen, n);
        }
    }

    #[test]
    fn fourteen_rows_on_pages_of_twelve() {
        let mut paginator = paginator(14, 12);
        assert_eq!(paginator.page_count(), 2);
        assert_eq!(paginator.current_page().len(), 12);
        assert!(paginator.navigate(Navigation::Next));
        assert_eq!(paginator.current_page().len(), 2);
        assert_eq!(paginator.current_page()[0].label, "row 12");
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let mut paginator = paginator(0, 12);
        assert_eq!(paginator.page_count(), 1);
        assert!(paginator.current_page().is_empty());
        assert!(!paginator.navigate(Navigation::Next));
        assert!(!paginator.navigate(Navigation::Previous));
        assert_eq!(paginator.current_index(), 0);
    }

    #[test]
    fn navigation_is_clamped_at_both_edges() {
        let mut paginator = paginator(30, 10);
        assert!(!paginator.navigate(Navigation::Previous));
        assert_eq!(paginator.current_index(), 0);

        assert!(paginator.navigate(Navigation::Next));
        assert!(paginator.navigate(Navigation::Next));
        assert_eq!(paginator.current_index(), 2);
        let last_page = paginator.current_page().to_vec();

        assert!(!paginator.navigate(Navigation::Next));
        assert_eq!(paginator.current_index(), 2);
        assert_eq!(paginator.current_page(), last_page.as_slice());

        assert!(paginator.navigate(Navigation::Previous));
        assert_eq!(paginator.current_index(), 1);
        assert_eq!(paginator.current_page()[0].label, "row 10");
    }

    #[test]
    fn zero_page_size_behaves_as_one() {
        let paginator = paginator(3, 0);
        assert_eq!(paginator.page_size(), 1);
        assert_eq!(paginator.page_count(), 3);
    }
}
