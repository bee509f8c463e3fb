//! RSS 2.0 / Atom parsing into raw [`FeedEntry`] values.

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;

use crate::error::FeedError;

/// Fields pulled from one `<item>` or `<entry>`, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    /// Plain-text summary; HTML tags are already stripped.
    pub summary: String,
    pub published: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Summary,
    Content,
    Published,
    Updated,
}

impl Field {
    fn from_tag(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "link" => Some(Self::Link),
            "description" | "summary" => Some(Self::Summary),
            "content" | "content:encoded" => Some(Self::Content),
            "pubDate" | "published" | "dc:date" => Some(Self::Published),
            "updated" => Some(Self::Updated),
            _ => None,
        }
    }
}

/// Fields of the entry currently being read.
#[derive(Default)]
struct EntryBuilder {
    entry: FeedEntry,
    content: String,
    updated: String,
}

impl EntryBuilder {
    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.entry.title,
            Field::Link => &mut self.entry.link,
            Field::Summary => &mut self.entry.summary,
            Field::Content => &mut self.content,
            Field::Published => &mut self.entry.published,
            Field::Updated => &mut self.updated,
        };
        // First occurrence wins.
        if slot.is_empty() {
            *slot = value;
        }
    }

    fn finish(mut self) -> FeedEntry {
        if self.entry.summary.is_empty() {
            self.entry.summary = self.content;
        }
        if self.entry.published.is_empty() {
            self.entry.published = self.updated;
        }
        self.entry.summary = strip_html(&self.entry.summary);
        self.entry
    }
}

/// Parse an RSS or Atom document into its entries, in document order.
///
/// Documents with no `<item>` / `<entry>` elements yield an empty list.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] if the XML is malformed.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut current: Option<EntryBuilder> = None;
    // Field being read, and how many nested elements deep inside it we are.
    let mut field: Option<(Field, usize)> = None;
    let mut buf = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = tag_name(&e);
                if name == "item" || name == "entry" {
                    current = Some(EntryBuilder::default());
                    field = None;
                    continue;
                }
                let Some(builder) = current.as_mut() else {
                    continue;
                };
                if let Some((_, depth)) = field.as_mut() {
                    *depth += 1;
                    continue;
                }
                if name == "link" {
                    if let Some(href) = alternate_href(&e) {
                        builder.set(Field::Link, href);
                    }
                }
                if let Some(f) = Field::from_tag(&name) {
                    field = Some((f, 0));
                    buf.clear();
                }
            }
            Event::Empty(e) => {
                if let Some(builder) = current.as_mut() {
                    if field.is_none() && tag_name(&e) == "link" {
                        if let Some(href) = alternate_href(&e) {
                            builder.set(Field::Link, href);
                        }
                    }
                }
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                match field {
                    Some((f, depth)) if depth > 0 => field = Some((f, depth - 1)),
                    Some((f, _)) => {
                        if let Some(builder) = current.as_mut() {
                            builder.set(f, std::mem::take(&mut buf));
                        }
                        field = None;
                    }
                    None => {
                        if name == "item" || name == "entry" {
                            if let Some(builder) = current.take() {
                                entries.push(builder.finish());
                            }
                        }
                    }
                }
            }
            Event::Text(e) => {
                if field.is_some() {
                    push_text(&mut buf, &unescape_text(&e));
                }
            }
            Event::CData(e) => {
                if field.is_some() {
                    push_text(&mut buf, &String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// The `href` of an Atom link whose `rel` is absent or `alternate`.
fn alternate_href(e: &BytesStart<'_>) -> Option<String> {
    let href = attr_value(e, "href")?;
    match attr_value(e, "rel").as_deref() {
        None | Some("alternate") => Some(href),
        Some(_) => None,
    }
}

fn attr_value(e: &BytesStart<'_>, key: &str) -> Option<String> {
    e.try_get_attribute(key)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok())
        .map(std::borrow::Cow::into_owned)
}

/// Unescape a text node, keeping the raw text if it holds unknown entities.
fn unescape_text(e: &BytesText<'_>) -> String {
    match e.unescape() {
        Ok(text) => text.into_owned(),
        Err(_) => String::from_utf8_lossy(e.as_ref()).into_owned(),
    }
}

fn push_text(buf: &mut String, text: &str) {
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(text);
}

/// Strip HTML tags from a string and normalize whitespace.
pub(crate) fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                if in_tag {
                    in_tag = false;
                    out.push(' ');
                } else {
                    out.push(ch);
                }
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
