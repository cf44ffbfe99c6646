use crate::{
    pagination::{total_pages, Page, ROWS_PER_PAGE},
    tf_idf::row::RankedTable,
};

/// The last uploaded table and its page count, kept between page views.
#[derive(Debug, Clone)]
pub struct Session {
    result_table: RankedTable,
    total_pages: usize,
    rows_per_page: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ROWS_PER_PAGE)
    }
}

impl Session {
    pub const fn new(rows_per_page: usize) -> Self {
        Self {
            result_table: RankedTable::new(),
            total_pages: 0,
            rows_per_page,
        }
    }

    pub fn upload(&mut self, table: RankedTable) {
        self.total_pages = total_pages(table.len(), self.rows_per_page);
        self.result_table = table;
    }

    pub fn view(&self, current_page: usize) -> Page<'_> {
        Page::new(&self.result_table, current_page, self.rows_per_page)
    }

    pub fn reset(&mut self) {
        self.result_table.clear();
        self.total_pages = 0;
    }

    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.result_table.is_empty()
    }
}
