//! Scope-content rich text.
//!
//! Paragraphs are kept as small element trees so they can be written back
//! out verbatim as XML fragments for presentation. Serialization uses
//! `quick-xml`'s [`Writer`]; text and attribute values are escaped.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};

use crate::error::MarkupError;

/// One node of a rich-text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Markup {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<Markup>,
    },
    Text(String),
}

impl Markup {
    pub fn element(name: impl Into<String>) -> Self {
        Markup::Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Markup::Text(text.into())
    }

    /// Builder: add an attribute. No-op on text nodes.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Markup::Element { attributes, .. } = &mut self {
            attributes.push((key.into(), value.into()));
        }
        self
    }

    /// Builder: append a child. No-op on text nodes.
    pub fn with_child(mut self, child: Markup) -> Self {
        if let Markup::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }
}

/// Serialize a sequence of fragments into one XML string.
pub fn serialize_markup(fragments: &[Markup]) -> Result<String, MarkupError> {
    let mut writer = Writer::new(Vec::new());
    for fragment in fragments {
        write_fragment(&mut writer, fragment)?;
    }
    String::from_utf8(writer.into_inner()).map_err(|e| MarkupError::Write(e.to_string()))
}

fn write_fragment(writer: &mut Writer<Vec<u8>>, fragment: &Markup) -> Result<(), MarkupError> {
    match fragment {
        Markup::Text(text) => writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| MarkupError::Write(e.to_string())),
        Markup::Element {
            name,
            attributes,
            children,
        } => {
            if !is_xml_name(name) {
                return Err(MarkupError::InvalidName(name.clone()));
            }
            let mut start = BytesStart::new(name.as_str());
            for (key, value) in attributes {
                if !is_xml_name(key) {
                    return Err(MarkupError::InvalidAttribute {
                        element: name.clone(),
                        attribute: key.clone(),
                    });
                }
                start.push_attribute((key.as_str(), value.as_str()));
            }
            writer
                .write_event(Event::Start(start))
                .map_err(|e| MarkupError::Write(e.to_string()))?;
            for child in children {
                write_fragment(writer, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(name.as_str())))
                .map_err(|e| MarkupError::Write(e.to_string()))
        }
    }
}

/// Loose XML `Name` production check.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_paragraphs_in_order() {
        let paragraphs = vec![
            Markup::element("p").with_child(Markup::text("First")),
            Markup::element("p")
                .with_child(Markup::text("Second "))
                .with_child(
                    Markup::element("emph")
                        .with_attribute("render", "italic")
                        .with_child(Markup::text("part")),
                ),
        ];
        let html = serialize_markup(&paragraphs).unwrap();
        assert_eq!(
            html,
            r#"<p>First</p><p>Second <emph render="italic">part</emph></p>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let paragraph = Markup::element("p")
            .with_attribute("title", "a \"quoted\" <value>")
            .with_child(Markup::text("Smith & Sons <1900>"));
        let html = serialize_markup(&[paragraph]).unwrap();
        assert!(html.contains("Smith &amp; Sons &lt;1900&gt;"));
        assert!(!html.contains("\"quoted\""));
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(serialize_markup(&[]).unwrap(), "");
    }

    #[test]
    fn invalid_element_name_fails() {
        let bad = Markup::element("p").with_child(Markup::element("1bad"));
        let err = serialize_markup(&[bad]).unwrap_err();
        assert_eq!(err, MarkupError::InvalidName("1bad".to_string()));

        let err = serialize_markup(&[Markup::element("")]).unwrap_err();
        assert!(matches!(err, MarkupError::InvalidName(_)));
    }

    #[test]
    fn invalid_attribute_name_fails() {
        let bad = Markup::element("p").with_attribute("has space", "x");
        let err = serialize_markup(&[bad]).unwrap_err();
        assert!(matches!(err, MarkupError::InvalidAttribute { .. }));
    }

    #[test]
    fn names_with_namespaces_and_punctuation_are_valid() {
        assert!(is_xml_name("xlink:href"));
        assert!(is_xml_name("_x-1.2"));
        assert!(!is_xml_name("-x"));
        assert!(!is_xml_name("a b"));
    }
}
