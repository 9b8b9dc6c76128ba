//! Alternative renderings of record content
//!
//! Each renderer returns `None` when the content is not in a shape it understands; callers
//! expose that as an empty string so clients can disable the view.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

/// Re-indent `content` as XML, two spaces per level
pub fn indent_xml(content: &str) -> Option<String> {
    // Untrimmed: text is split at entity references, trimming would eat the spaces around them
    let mut reader = Reader::from_str(content);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let mut saw_element = false;

    loop {
        let event = reader.read_event().ok()?;
        match &event {
            Event::Eof => break,
            Event::Start(_) | Event::Empty(_) => saw_element = true,
            // Whitespace between elements is replaced by the writer's own indentation
            Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => continue,
            _ => {}
        }
        writer.write_event(event).ok()?;
    }

    if !saw_element {
        return None;
    }

    String::from_utf8(writer.into_inner()).ok()
}

enum Field {
    Control {
        tag: String,
        value: String,
    },
    Data {
        tag: String,
        indicators: String,
        subfields: Vec<(String, String)>,
    },
}

impl Field {
    fn push_text(&mut self, text: &str, in_subfield: bool) {
        match self {
            Field::Control { value, .. } => value.push_str(text),
            Field::Data { subfields, .. } if in_subfield => {
                if let Some((_, value)) = subfields.last_mut() {
                    value.push_str(text);
                }
            },
            Field::Data { .. } => {},
        }
    }

    fn render(&self) -> String {
        match self {
            Field::Control { tag, value } => format!("{tag} {value}"),
            Field::Data {
                tag,
                indicators,
                subfields,
            } => {
                let mut line = format!("{tag} {indicators}");
                for (code, value) in subfields {
                    line.push_str(&format!(" *{code} {value}"));
                }
                line
            },
        }
    }
}

fn attribute(element: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name)
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

fn indicator(element: &BytesStart<'_>, name: &[u8]) -> String {
    attribute(element, name)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "0".to_string())
}

fn decode_text(raw: &[u8]) -> String {
    let raw = String::from_utf8_lossy(raw);
    match unescape(&raw) {
        Ok(text) => text.into_owned(),
        Err(_) => raw.into_owned(),
    }
}

/// Render MarcXchange content in MARC line format
///
/// Control fields become `TAG value`; data fields become `TAG I1I2 *a value *b value`.
/// The leader is omitted. Content without any MARC field yields `None`.
pub fn marc_line_format(content: &str) -> Option<String> {
    // Untrimmed: whitespace next to entity references belongs to the value
    let mut reader = Reader::from_str(content);

    let mut lines = Vec::new();
    let mut current: Option<Field> = None;
    let mut in_subfield = false;

    loop {
        match reader.read_event().ok()? {
            Event::Eof => break,
            Event::Start(element) => match element.local_name().as_ref() {
                b"controlfield" => {
                    current = Some(Field::Control {
                        tag: attribute(&element, b"tag")?,
                        value: String::new(),
                    });
                },
                b"datafield" => {
                    current = Some(Field::Data {
                        tag: attribute(&element, b"tag")?,
                        indicators: format!(
                            "{}{}",
                            indicator(&element, b"ind1"),
                            indicator(&element, b"ind2")
                        ),
                        subfields: Vec::new(),
                    });
                },
                b"subfield" => {
                    if let Some(Field::Data { subfields, .. }) = current.as_mut() {
                        subfields.push((attribute(&element, b"code")?, String::new()));
                        in_subfield = true;
                    }
                },
                _ => {},
            },
            Event::Empty(element) if element.local_name().as_ref() == b"subfield" => {
                if let Some(Field::Data { subfields, .. }) = current.as_mut() {
                    subfields.push((attribute(&element, b"code")?, String::new()));
                }
            },
            Event::Text(text) => {
                if let Some(field) = current.as_mut() {
                    field.push_text(&decode_text(&text), in_subfield);
                }
            },
            Event::GeneralRef(reference) => {
                if let Some(field) = current.as_mut() {
                    let entity = format!("&{};", String::from_utf8_lossy(&reference));
                    field.push_text(&decode_text(entity.as_bytes()), in_subfield);
                }
            },
            Event::End(element) => match element.local_name().as_ref() {
                b"subfield" => in_subfield = false,
                b"controlfield" | b"datafield" => {
                    if let Some(field) = current.take() {
                        lines.push(field.render());
                    }
                },
                _ => {},
            },
            _ => {},
        }
    }

    if lines.is_empty() {
        return None;
    }

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<marcx:record xmlns:marcx="info:lc/xmlns/marcxchange-v1" format="danMARC2" type="Bibliographic">
  <marcx:leader>00000n    2200000   4500</marcx:leader>
  <marcx:controlfield tag="003">DBC</marcx:controlfield>
  <marcx:datafield ind1="0" ind2="0" tag="001">
    <marcx:subfield code="a">00003196</marcx:subfield>
    <marcx:subfield code="b">125320</marcx:subfield>
  </marcx:datafield>
  <marcx:datafield ind1="0" ind2="0" tag="245">
    <marcx:subfield code="a">Rust &amp; friends</marcx:subfield>
  </marcx:datafield>
</marcx:record>"#;

    #[test]
    fn test_marc_line_format() {
        let lines = marc_line_format(MARCX).unwrap();
        assert_eq!(
            lines,
            "003 DBC\n001 00 *a 00003196 *b 125320\n245 00 *a Rust & friends"
        );
    }

    #[test]
    fn test_marc_line_format_defaults_blank_indicators() {
        let xml = r#"<record><datafield tag="100" ind1=" " ind2=""><subfield code="a">x</subfield></datafield></record>"#;
        assert_eq!(marc_line_format(xml).unwrap(), "100 00 *a x");
    }

    #[test]
    fn test_marc_line_format_rejects_non_marc() {
        assert!(marc_line_format("<doc><title>x</title></doc>").is_none());
        assert!(marc_line_format("plain text content").is_none());
    }

    #[test]
    fn test_indent_xml() {
        let indented = indent_xml("<a><b>text</b><c/></a>").unwrap();
        assert!(indented.starts_with("<a>\n  <b>text</b>"));
        assert!(indented.contains("\n  <c/>"));
        assert!(indented.ends_with("\n</a>"));
    }

    #[test]
    fn test_indent_xml_keeps_text_around_entities() {
        let indented = indent_xml("<a><b>Rust &amp; friends &#65;</b></a>").unwrap();
        assert!(
            indented.contains("<b>Rust &amp; friends &#65;</b>"),
            "text altered: {indented:?}"
        );
    }

    #[test]
    fn test_indent_xml_replaces_existing_layout() {
        let indented = indent_xml("<a>\n\t\t<b>x</b>\n    <c/>\n</a>").unwrap();
        assert_eq!(indented, indent_xml("<a><b>x</b><c/></a>").unwrap());
        assert!(indented.contains("\n  <b>x</b>"));
    }

    #[test]
    fn test_indent_xml_rejects_plain_text() {
        assert!(indent_xml("just some bytes").is_none());
    }

    #[test]
    fn test_indent_xml_rejects_mismatched_tags() {
        assert!(indent_xml("<a><b></a>").is_none());
    }
}
