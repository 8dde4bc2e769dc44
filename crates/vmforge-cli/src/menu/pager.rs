//! Pagination state and command parsing for the selection menu.

use vmforge_core::Template;

/// Templates shown per page.
pub const PAGE_SIZE: usize = 10;

/// One line of menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// 1-based position in the filtered list.
    Pick(usize),
    All,
    Next,
    Previous,
    Filter,
    Quit,
    Invalid(String),
}

impl MenuCommand {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "a" | "all" => Self::All,
            "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "f" | "filter" => Self::Filter,
            "q" | "quit" | "exit" => Self::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Self::Pick(n),
                _ => Self::Invalid(trimmed.to_string()),
            },
        }
    }
}

/// A filtered template list split into fixed-size pages.
#[derive(Debug, Clone)]
pub struct Pager {
    items: Vec<Template>,
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(items: Vec<Template>, page_size: usize) -> Self {
        Self {
            items,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Zero-based current page.
    pub const fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// Templates on the current page with their 1-based list numbers.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Template)> {
        let start = self.page * self.page_size;
        self.items
            .iter()
            .enumerate()
            .skip(start)
            .take(self.page_size)
            .map(|(i, t)| (i + 1, t))
    }

    /// Advance a page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back a page. Returns `false` on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Template by 1-based list number, on any page.
    pub fn pick(&self, number: usize) -> Option<&Template> {
        number.checked_sub(1).and_then(|i| self.items.get(i))
    }

    pub fn into_items(self) -> Vec<Template> {
        self.items
    }
}
