//! Permissive RSS extraction.
//!
//! This module turns raw feed XML into a flat list of [`Article`] records.
//! The parse is deliberately forgiving: real-world feeds ship with stray
//! characters, unclosed tags and namespace prefixes, and none of that should
//! cost the reader the items that *are* recoverable.
//!
//! # Traversal
//!
//! Only two levels below the document root are inspected: every direct child
//! of the root (the `<channel>` in a normal RSS 2.0 feed) is scanned for
//! direct `<item>` children. Within an item, only its direct children are
//! read; `<item>` elements buried any deeper are ignored on purpose.
//!
//! # Field rules
//!
//! - Tag names are compared by local name, so `<dc:title>` counts as `title`.
//! - A duplicated field keeps the last occurrence, even when the later one
//!   is empty.
//! - An empty element (`<title/>` or `<title></title>`) leaves the field
//!   absent rather than storing an empty string.
//! - Only the text that appears before the first child element of a field is
//!   taken; markup nested inside a field is not flattened.

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use tracing::{debug, instrument, trace};

use crate::error::FeedError;

/// One extracted feed entry. All fields default to absent; items are never
/// dropped for missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// The item children we extract; everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Description,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"link" => Some(Field::Link),
            b"description" => Some(Field::Description),
            _ => None,
        }
    }

    fn assign(self, article: &mut Article, value: Option<String>) {
        match self {
            Field::Title => article.title = value,
            Field::Link => article.link = value,
            Field::Description => article.description = value,
        }
    }
}

/// Parse raw feed XML into an ordered list of [`Article`] records.
///
/// One record is produced per `<item>` found exactly two levels below the
/// document root, in document order. Recoverable XML errors (mismatched or
/// missing end tags, stray markup) are skipped and parsing continues with
/// whatever structure remains.
///
/// # Errors
///
/// [`FeedError::Parse`] only when no root element can be recovered at all —
/// empty input or text that is not XML in any sense. A well-formed feed with
/// zero items returns `Ok(vec![])`.
#[instrument(level = "debug", skip_all, fields(bytes = xml.len()))]
pub fn parse_rss(xml: &str) -> Result<Vec<Article>, FeedError> {
    let mut reader = Reader::from_str(xml);
    // Tolerate mismatched end tags instead of aborting on them.
    reader.config_mut().check_end_names = false;

    let mut articles: Vec<Article> = Vec::new();
    // Number of currently open elements; the root opens at depth 0, so an
    // <item> of interest starts at depth 2 and its fields at depth 3.
    let mut depth = 0usize;
    let mut root_seen = false;
    let mut current: Option<Article> = None;
    let mut field: Option<Field> = None;
    let mut field_saw_child = false;
    let mut text = String::new();
    let mut last_error: Option<String> = None;

    loop {
        let pos_before = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if depth == 0 {
                    root_seen = true;
                }
                if field.is_some() {
                    // Markup inside a field ends its direct text content.
                    field_saw_child = true;
                } else if depth == 2 && e.local_name().as_ref() == b"item" {
                    if let Some(prev) = current.replace(Article::default()) {
                        // Unclosed previous item; keep what it had.
                        articles.push(prev);
                    }
                } else if depth == 3 && current.is_some() {
                    if let Some(f) = Field::from_local_name(e.local_name().as_ref()) {
                        field = Some(f);
                        field_saw_child = false;
                        text.clear();
                    }
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    root_seen = true;
                }
                if field.is_some() {
                    field_saw_child = true;
                } else if depth == 2 && e.local_name().as_ref() == b"item" {
                    articles.push(Article::default());
                } else if depth == 3 {
                    if let (Some(article), Some(f)) = (
                        current.as_mut(),
                        Field::from_local_name(e.local_name().as_ref()),
                    ) {
                        // An empty element has no text, so the field is
                        // overwritten with absent.
                        f.assign(article, None);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if field.is_some() && !field_saw_child {
                    // Entity references arrive as separate GeneralRef events,
                    // so the raw text can be taken as-is.
                    text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::CData(e)) => {
                if field.is_some() && !field_saw_child {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if field.is_some() && !field_saw_child {
                    if let Ok(Some(ch)) = e.resolve_char_ref() {
                        text.push(ch);
                    } else {
                        let name = String::from_utf8_lossy(e.as_ref());
                        match resolve_predefined_entity(&name) {
                            Some(replacement) => text.push_str(replacement),
                            // Unknown entities are dropped, as a recovering
                            // parse does.
                            None => {
                                trace!(entity = %name, "Dropping unknown entity reference")
                            }
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                depth = depth.saturating_sub(1);
                let local = e.local_name();
                if let Some(f) = field {
                    // Close the field on its own end tag, or structurally if
                    // a recovered document jumped out past it.
                    if depth <= 3 || Field::from_local_name(local.as_ref()) == Some(f) {
                        if let Some(article) = current.as_mut() {
                            let value = if text.is_empty() {
                                None
                            } else {
                                Some(std::mem::take(&mut text))
                            };
                            f.assign(article, value);
                        }
                        field = None;
                        text.clear();
                    }
                }
                if current.is_some() && (depth <= 2 || local.as_ref() == b"item") {
                    if let Some(article) = current.take() {
                        trace!(?article, "Extracted item");
                        articles.push(article);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                last_error = Some(e.to_string());
                trace!(error = %e, "Skipping recoverable XML error");
                // Bail out if the reader stopped moving forward; keep what
                // was recovered so far.
                if reader.buffer_position() == pos_before {
                    break;
                }
            }
        }
    }

    // A truncated document still yields the item that was in flight.
    if let Some(mut article) = current.take() {
        if let Some(f) = field.take() {
            let value = if text.is_empty() {
                None
            } else {
                Some(std::mem::take(&mut text))
            };
            f.assign(&mut article, value);
        }
        articles.push(article);
    }

    if !root_seen {
        let detail = last_error.unwrap_or_else(|| "no root element found".to_string());
        return Err(FeedError::Parse(detail));
    }

    debug!(count = articles.len(), "Parsed feed items");
    Ok(articles)
}
