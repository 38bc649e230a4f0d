use regex::Regex;
use url::Url;

use crate::domain::NormalizedItem;

/// How the link column is rendered in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Bare URL, written as raw text.
    Plain,
    /// `=HYPERLINK("url", "label")` formula, label derived from the host.
    Hyperlink,
}

impl std::str::FromStr for LinkStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(LinkStyle::Plain),
            "hyperlink" => Ok(LinkStyle::Hyperlink),
            _ => Err(format!("Unknown link style: {}", s)),
        }
    }
}

/// Column layout variant. The layouts evolved over time; they are one
/// configuration value, not separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetLayout {
    /// [일시, 뉴스제목, 출처]
    Basic,
    /// [일시, 뉴스제목, 출처, 분류]
    Tagged,
    /// [일시, 뉴스제목, 출처, 요약, 분류]
    Full,
}

impl std::str::FromStr for SheetLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(SheetLayout::Basic),
            "tagged" => Ok(SheetLayout::Tagged),
            "full" => Ok(SheetLayout::Full),
            _ => Err(format!("Unknown sheet layout: {}", s)),
        }
    }
}

/// The sheet's row contract: header names, column count and link
/// encoding. The header row is what downstream dashboards key on, so
/// column order and count are a breaking change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSchema {
    layout: SheetLayout,
    link_style: LinkStyle,
}

impl SinkSchema {
    pub fn new(layout: SheetLayout, link_style: LinkStyle) -> Self {
        Self { layout, link_style }
    }

    pub fn link_style(&self) -> LinkStyle {
        self.link_style
    }

    pub fn headers(&self) -> Vec<String> {
        let names: &[&str] = match self.layout {
            SheetLayout::Basic => &["일시", "뉴스제목", "출처"],
            SheetLayout::Tagged => &["일시", "뉴스제목", "출처", "분류"],
            SheetLayout::Full => &["일시", "뉴스제목", "출처", "요약", "분류"],
        };
        names.iter().map(|s| s.to_string()).collect()
    }

    pub fn column_count(&self) -> usize {
        match self.layout {
            SheetLayout::Basic => 3,
            SheetLayout::Tagged => 4,
            SheetLayout::Full => 5,
        }
    }

    /// 0-based column indices; fixed across layouts.
    pub fn timestamp_column(&self) -> usize {
        0
    }

    pub fn title_column(&self) -> usize {
        1
    }

    pub fn link_column(&self) -> usize {
        2
    }

    pub fn carries_summary(&self) -> bool {
        matches!(self.layout, SheetLayout::Full)
    }

    pub fn carries_tag(&self) -> bool {
        matches!(self.layout, SheetLayout::Tagged | SheetLayout::Full)
    }

    /// Map an item to exactly `column_count()` cells, in header order.
    pub fn row_for(&self, item: &NormalizedItem) -> Vec<String> {
        let mut row = vec![
            item.timestamp.clone(),
            item.title.clone(),
            self.encode_link(&item.link),
        ];
        if self.carries_summary() {
            row.push(item.summary.clone().unwrap_or_default());
        }
        if self.carries_tag() {
            row.push(item.tag.clone().unwrap_or_default());
        }
        row
    }

    fn encode_link(&self, link: &str) -> String {
        match self.link_style {
            LinkStyle::Plain => link.to_string(),
            LinkStyle::Hyperlink => {
                if link.is_empty() {
                    String::new()
                } else {
                    format!(
                        "=HYPERLINK(\"{}\", \"{}\")",
                        escape_quotes(link),
                        escape_quotes(&host_label(link))
                    )
                }
            }
        }
    }
}

/// Decode a link cell back to the raw URL, undoing any HYPERLINK
/// encoding a previous run may have written. Plain cells pass through.
pub fn decode_link(cell: &str) -> String {
    let formula = Regex::new(r#"^=HYPERLINK\("((?:[^"]|"")*)""#).unwrap();
    if let Some(caps) = formula.captures(cell.trim()) {
        caps[1].replace("\"\"", "\"")
    } else {
        cell.trim().to_string()
    }
}

/// Human-readable label for a URL: its host, minus a leading `www.`.
fn host_label(link: &str) -> String {
    Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .map(|h| h.trim_start_matches("www.").to_string())
        .unwrap_or_else(|| link.to_string())
}

fn escape_quotes(s: &str) -> String {
    s.replace('"', "\"\"")
}
