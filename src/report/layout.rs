//! Table layout: wraps cell text to equal-width columns and splits rows
//! across pages, repeating the header row on every page.
//!
//! All vertical positions are measured downwards from the top edge of the
//! page; the PDF writer flips them into PDF user space.

use super::font::{text_width, FontStyle};
use super::spec::DocumentSpec;

/// Page geometry and typography for rendered reports, in points.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub title_size: f32,
    pub font_size: f32,
    pub cell_padding: f32,
    pub line_spacing: f32,
    /// Gap between the title and the table on the first page.
    pub title_gap: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        // A4 portrait
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 36.0,
            title_size: 18.0,
            font_size: 9.0,
            cell_padding: 4.0,
            line_spacing: 1.25,
            title_gap: 12.0,
        }
    }
}

impl RenderOptions {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_spacing
    }

    fn title_block_height(&self) -> f32 {
        self.title_size * self.line_spacing + self.title_gap
    }

    fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin
    }
}

/// Header labels and body rows projected from a record sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableLayout {
    /// Project `records` through `spec`, keeping input order.
    pub fn from_records<R>(records: &[R], spec: &DocumentSpec<R>, title: &str) -> Self {
        Self {
            title: title.to_string(),
            header: spec.labels().into_iter().map(String::from).collect(),
            rows: records.iter().map(|record| spec.row(record)).collect(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

/// One table row placed on a page, with each cell already wrapped into lines.
#[derive(Debug, Clone)]
pub struct PlacedRow {
    pub top: f32,
    pub height: f32,
    pub is_header: bool,
    /// Lines carried over from a row split at the previous page break.
    pub continued: bool,
    pub cells: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Present on the first page only.
    pub title: Option<String>,
    pub rows: Vec<PlacedRow>,
}

impl PageLayout {
    pub fn body_rows(&self) -> impl Iterator<Item = &PlacedRow> {
        self.rows.iter().filter(|row| !row.is_header)
    }
}

/// A table fully positioned onto pages.
#[derive(Debug, Clone)]
pub struct PagePlan {
    pub column_width: f32,
    pub pages: Vec<PageLayout>,
}

impl PagePlan {
    /// Body rows counted once each, however many pages they span.
    pub fn body_row_count(&self) -> usize {
        self.pages
            .iter()
            .map(|page| page.body_rows().filter(|row| !row.continued).count())
            .sum()
    }
}

/// Position `table` onto as many pages as needed.
///
/// A row taller than the space left under the header on a fresh page is split
/// between wrapped lines; its remaining lines continue at the top of the next
/// page as a `continued` fragment.
pub fn paginate(table: &TableLayout, options: &RenderOptions) -> PagePlan {
    let columns = table.column_count().max(1);
    let column_width = options.content_width() / columns as f32;
    let text_width_limit = (column_width - 2.0 * options.cell_padding).max(1.0);

    let wrap_row = |cells: &[String], style: FontStyle| -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|cell| wrap_text(cell, text_width_limit, options.font_size, style))
            .collect()
    };
    let row_height = |lines: usize| lines.max(1) as f32 * options.line_height() + 2.0 * options.cell_padding;

    let header_cells = wrap_row(table.header.as_slice(), FontStyle::Bold);
    let header_height = row_height(line_count(&header_cells));

    let start_page = |title: Option<String>| -> (PageLayout, f32) {
        let mut cursor = options.margin;
        if title.is_some() {
            cursor += options.title_block_height();
        }
        let page = PageLayout {
            title,
            rows: vec![PlacedRow {
                top: cursor,
                height: header_height,
                is_header: true,
                continued: false,
                cells: header_cells.clone(),
            }],
        };
        (page, cursor + header_height)
    };

    let mut pages = Vec::new();
    let (mut page, mut cursor) = start_page(Some(table.title.clone()));

    for row in &table.rows {
        let mut cells = wrap_row(row.as_slice(), FontStyle::Regular);
        let mut height = row_height(line_count(&cells));
        let mut continued = false;

        if cursor + height > options.bottom_limit() && page.body_rows().next().is_some() {
            pages.push(page);
            (page, cursor) = start_page(None);
        }

        while cursor + height > options.bottom_limit() {
            let room = options.bottom_limit() - cursor - 2.0 * options.cell_padding;
            let fit = ((room / options.line_height()).floor().max(0.0) as usize)
                .min(line_count(&cells).saturating_sub(1));
            // Not even one line fits; place the row and let it overflow.
            if fit == 0 {
                break;
            }

            let rest = split_lines(&mut cells, fit);
            page.rows.push(PlacedRow {
                top: cursor,
                height: row_height(fit),
                is_header: false,
                continued,
                cells,
            });
            pages.push(page);
            (page, cursor) = start_page(None);

            cells = rest;
            height = row_height(line_count(&cells));
            continued = true;
        }

        page.rows.push(PlacedRow {
            top: cursor,
            height,
            is_header: false,
            continued,
            cells,
        });
        cursor += height;
    }
    pages.push(page);

    PagePlan {
        column_width,
        pages,
    }
}

fn line_count(cells: &[Vec<String>]) -> usize {
    cells.iter().map(Vec::len).max().unwrap_or(1)
}

/// Keep the first `keep` lines of every cell in place and return the rest.
fn split_lines(cells: &mut [Vec<String>], keep: usize) -> Vec<Vec<String>> {
    cells
        .iter_mut()
        .map(|lines| {
            if lines.len() > keep {
                lines.split_off(keep)
            } else {
                Vec::new()
            }
        })
        .collect()
}

/// Greedy word wrap. Words wider than `max_width` are split by character.
/// Always yields at least one line.
pub fn wrap_text(text: &str, max_width: f32, size: f32, style: FontStyle) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width(&candidate, size, style) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word, size, style) <= max_width {
            current = word.to_string();
        } else {
            for ch in word.chars() {
                current.push(ch);
                if text_width(&current, size, style) > max_width && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize, cell: &str) -> TableLayout {
        TableLayout {
            title: "Report".to_string(),
            header: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            rows: (0..rows)
                .map(|i| vec![i.to_string(), cell.to_string(), cell.to_string()])
                .collect(),
        }
    }

    #[test]
    fn test_wrap_text_fits_on_one_line() {
        let lines = wrap_text("North America", 200.0, 9.0, FontStyle::Regular);
        assert_eq!(lines, vec!["North America".to_string()]);
    }

    #[test]
    fn test_wrap_text_breaks_between_words() {
        let lines = wrap_text("South Georgia and the South Sandwich Islands", 60.0, 9.0, FontStyle::Regular);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 9.0, FontStyle::Regular) <= 60.0);
        }
        assert_eq!(lines.join(" "), "South Georgia and the South Sandwich Islands");
    }

    #[test]
    fn test_wrap_text_splits_long_word() {
        let word = "W".repeat(40);
        let lines = wrap_text(&word, 50.0, 9.0, FontStyle::Regular);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_wrap_text_empty_yields_single_line() {
        assert_eq!(wrap_text("", 50.0, 9.0, FontStyle::Regular), vec![String::new()]);
    }

    #[test]
    fn test_columns_share_content_width() {
        let options = RenderOptions::default();
        let plan = paginate(&table(1, "x"), &options);
        assert!((plan.column_width * 3.0 - options.content_width()).abs() < 0.01);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let plan = paginate(&table(0, "x"), &RenderOptions::default());
        assert_eq!(plan.pages.len(), 1);
        assert_eq!(plan.pages[0].rows.len(), 1);
        assert!(plan.pages[0].rows[0].is_header);
        assert_eq!(plan.body_row_count(), 0);
    }

    #[test]
    fn test_rows_flow_onto_new_pages_with_header() {
        let plan = paginate(&table(200, "x"), &RenderOptions::default());

        assert!(plan.pages.len() > 1);
        assert_eq!(plan.body_row_count(), 200);
        assert!(plan.pages[0].title.is_some());
        for page in &plan.pages[1..] {
            assert!(page.title.is_none());
            assert!(page.rows[0].is_header);
        }
    }

    #[test]
    fn test_rows_stay_within_bottom_margin() {
        let options = RenderOptions::default();
        let plan = paginate(&table(120, "a few words per cell"), &options);
        for page in &plan.pages {
            let last = page.rows.last().unwrap();
            assert!(last.top + last.height <= options.page_height - options.margin + 0.01);
        }
    }

    #[test]
    fn test_rows_keep_input_order_across_pages() {
        let plan = paginate(&table(150, "x"), &RenderOptions::default());
        let ids: Vec<String> = plan
            .pages
            .iter()
            .flat_map(|page| page.body_rows())
            .map(|row| row.cells[0][0].clone())
            .collect();
        let expected: Vec<String> = (0..150).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_oversized_row_splits_across_pages() {
        let options = RenderOptions::default();
        let long = "word ".repeat(3000);
        let plan = paginate(&table(1, &long), &options);

        assert!(plan.pages.len() > 1);
        assert_eq!(plan.body_row_count(), 1);

        let fragments: Vec<&PlacedRow> = plan.pages.iter().flat_map(|page| page.body_rows()).collect();
        assert_eq!(fragments.len(), plan.pages.len());
        assert!(!fragments[0].continued);
        assert!(fragments[1..].iter().all(|row| row.continued));

        for page in &plan.pages {
            assert!(page.rows[0].is_header);
            let last = page.rows.last().unwrap();
            assert!(last.top + last.height <= options.page_height - options.margin + 0.01);
        }

        let text: Vec<String> = fragments.iter().flat_map(|row| row.cells[1].clone()).collect();
        assert_eq!(text.join(" "), long.trim_end());
        assert_eq!(fragments[0].cells[0], vec!["0".to_string()]);
        assert!(fragments[1].cells[0].is_empty());
    }

    #[test]
    fn test_oversized_row_starts_on_fresh_page() {
        let options = RenderOptions::default();
        let mut layout = table(3, "x");
        layout.rows[2][1] = "word ".repeat(3000);
        let plan = paginate(&layout, &options);

        let first_page_ids: Vec<&str> = plan.pages[0]
            .body_rows()
            .map(|row| row.cells[0][0].as_str())
            .collect();
        assert_eq!(first_page_ids, vec!["0", "1"]);
        assert_eq!(plan.pages[1].body_rows().next().unwrap().cells[0][0], "2");
        assert_eq!(plan.body_row_count(), 3);
    }

    #[test]
    fn test_wrapped_cells_grow_row_height() {
        let options = RenderOptions::default();
        let short = paginate(&table(1, "x"), &options);
        let long = paginate(&table(1, "several words that will certainly wrap in a narrow column"), &options);
        let short_height = short.pages[0].rows[1].height;
        let long_height = long.pages[0].rows[1].height;
        assert!(long_height > short_height);
    }
}
