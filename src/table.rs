//! Terminal table rendering for extracted articles.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::feed::Article;

/// Caption printed above the table, carrying the article count.
pub fn caption(count: usize) -> String {
    format!("Enable Sysadmin RSS headlines for today ({count})")
}

/// Build a three-column table of the articles, one row per record.
///
/// Absent fields render as empty cells; rendering never fails on missing
/// data.
pub fn render(articles: &[Article]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Link", "Description"]);

    for article in articles {
        table.add_row(vec![
            article.title.as_deref().unwrap_or(""),
            article.link.as_deref().unwrap_or(""),
            article.description.as_deref().unwrap_or(""),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_carries_count() {
        assert_eq!(
            caption(10),
            "Enable Sysadmin RSS headlines for today (10)"
        );
        assert_eq!(caption(0), "Enable Sysadmin RSS headlines for today (0)");
    }

    #[test]
    fn test_render_absent_fields_as_empty_cells() {
        let articles = vec![
            Article {
                title: Some("A title".to_string()),
                link: None,
                description: None,
            },
            Article::default(),
        ];
        let table = render(&articles);
        // Header plus one row per record, never a panic on absent fields.
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("A title"));
    }

    #[test]
    fn test_render_empty_list() {
        let table = render(&[]);
        assert_eq!(table.row_iter().count(), 0);
    }
}
