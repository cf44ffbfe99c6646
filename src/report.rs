use crate::{error::Result, pagination::Page};

const WORD_WIDTH: usize = 24;

pub fn render_text(page: &Page<'_>) -> String {
    let mut out = String::new();

    if page.rows.is_empty() {
        out.push_str("No rows to show.\n");
    } else {
        out.push_str(&format!(
            "{:<WORD_WIDTH$} {:>10} {:>10}\n",
            "word", "tf", "idf"
        ));
        for row in page.rows {
            out.push_str(&format!(
                "{:<WORD_WIDTH$} {:>10.6} {:>10.4}\n",
                row.word, row.tf, row.idf
            ));
        }
    }

    out.push_str(&format!(
        "page {} of {}\n",
        page.current_page, page.total_pages
    ));

    out
}

/// Previous/next links for the page, empty when there is nowhere to go.
pub fn render_navigation(page: &Page<'_>) -> String {
    match (page.has_previous(), page.has_next()) {
        (true, true) => "<< p(rev) | n(ext) >>".to_string(),
        (true, false) => "<< p(rev)".to_string(),
        (false, true) => "n(ext) >>".to_string(),
        (false, false) => String::new(),
    }
}

pub fn render_json(page: &Page<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(page)?)
}
