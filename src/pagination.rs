use serde::Serialize;

use crate::tf_idf::row::Row;

pub const ROWS_PER_PAGE: usize = 10;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Page<'a> {
    pub rows: &'a [Row],
    pub current_page: usize,
    pub total_pages: usize,
}

impl<'a> Page<'a> {
    pub fn new(table: &'a [Row], current_page: usize, rows_per_page: usize) -> Self {
        Self {
            rows: page(table, current_page, rows_per_page),
            current_page,
            total_pages: total_pages(table.len(), rows_per_page),
        }
    }

    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

pub const fn total_pages(rows: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 0;
    }

    rows.div_ceil(rows_per_page)
}

/// Rows of the 1-indexed `current_page`. Page 0 and pages past the end are empty.
pub fn page(table: &[Row], current_page: usize, rows_per_page: usize) -> &[Row] {
    let Some(start) = current_page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(rows_per_page))
    else {
        return &[];
    };

    if start >= table.len() {
        return &[];
    }

    let end = start.saturating_add(rows_per_page).min(table.len());
    &table[start..end]
}
