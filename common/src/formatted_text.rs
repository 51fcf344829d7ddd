//! Sanitizing decomposition of article titles and abstracts.
//!
//! The API returns these fields with inline markup (`<i>`, `<sup>`, stray
//! `<p>`, sometimes MathML). Instead of injecting that markup into the page,
//! it is split into plain-text spans carrying the formatting of an
//! allow-listed tag set; everything else is dropped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    pub italic: bool,
    pub bold: bool,
    pub superscript: bool,
    pub subscript: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTextSpan {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Italic,
    Bold,
    Superscript,
    Subscript,
}

fn allowed_format(tag: &str) -> Option<Format> {
    match tag {
        "i" | "italic" | "em" => Some(Format::Italic),
        "b" | "strong" | "bold" => Some(Format::Bold),
        "sup" => Some(Format::Superscript),
        "sub" | "inf" => Some(Format::Subscript),
        _ => None,
    }
}

/// Tags whose content is never text.
const DROPPED_CONTENT_TAGS: [&str; 2] = ["script", "style"];

#[derive(Default)]
struct Depths {
    italic: usize,
    bold: usize,
    superscript: usize,
    subscript: usize,
}

impl Depths {
    fn slot(&mut self, format: Format) -> &mut usize {
        match format {
            Format::Italic => &mut self.italic,
            Format::Bold => &mut self.bold,
            Format::Superscript => &mut self.superscript,
            Format::Subscript => &mut self.subscript,
        }
    }

    fn style(&self) -> TextStyle {
        TextStyle {
            italic: self.italic > 0,
            bold: self.bold > 0,
            superscript: self.superscript > 0,
            subscript: self.subscript > 0,
        }
    }
}

pub fn decompose_markup(text: &str) -> Vec<FormattedTextSpan> {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return vec![];
    }
    if !text.contains('<') {
        return vec![FormattedTextSpan { text: decode_entities(&text), style: TextStyle::default() }];
    }

    let s = text.as_str();
    let mut spans: Vec<FormattedTextSpan> = Vec::new();
    let mut buffer = String::new();
    let mut depths = Depths::default();
    let mut i = 0;

    while i < s.len() {
        let Some(lt) = s[i..].find('<').map(|p| p + i) else {
            break;
        };
        let Some(gt) = s[lt..].find('>').map(|p| p + lt) else {
            break;
        };
        buffer.push_str(&s[i..lt]);
        flush(&mut spans, &mut buffer, depths.style());

        let tag = &s[lt + 1..gt];
        let closing = tag.starts_with('/');
        let name = tag
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        i = gt + 1;

        if !closing && DROPPED_CONTENT_TAGS.contains(&name.as_str()) {
            let end_tag = format!("</{name}");
            i = match s[i..].to_ascii_lowercase().find(&end_tag) {
                Some(p) => s[i + p..].find('>').map(|q| i + p + q + 1).unwrap_or(s.len()),
                None => s.len(),
            };
            continue;
        }
        if name == "br" {
            buffer.push(' ');
            continue;
        }
        let Some(format) = allowed_format(&name) else {
            continue;
        };
        let self_closing = tag.ends_with('/');
        let depth = depths.slot(format);
        if closing {
            *depth = depth.saturating_sub(1);
        } else if !self_closing {
            *depth += 1;
        }
    }

    if i < s.len() {
        buffer.push_str(&s[i..]);
    }
    flush(&mut spans, &mut buffer, depths.style());
    spans
}

/// Plain text with all markup removed.
pub fn plain_text(text: &str) -> String {
    decompose_markup(text).into_iter().map(|span| span.text).collect()
}

fn flush(spans: &mut Vec<FormattedTextSpan>, buffer: &mut String, style: TextStyle) {
    if buffer.is_empty() {
        return;
    }
    let text = decode_entities(buffer);
    buffer.clear();
    if let Some(last) = spans.last_mut() {
        if last.style == style {
            last.text.push_str(&text);
            return;
        }
    }
    spans.push(FormattedTextSpan { text, style });
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .filter(|semi| *semi <= 10)
            .and_then(|semi| decode_entity(&rest[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)
        }
    }
}
