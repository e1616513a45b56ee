//! # XML Builder
//!
//! Thin indented writer over `quick_xml`.

use crate::domain::validation::FieldValue;
use crate::infrastructure::xml::{CodecError, CodecResult};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Indentation width of generated documents.
const INDENT: usize = 2;

/// Writes nested elements with two-space indentation.
///
/// Elements without text are written self-closed and attributes with no
/// value are omitted.
///
/// # Examples
///
/// ```
/// use freightquote::infrastructure::xml::XmlBuilder;
///
/// let mut xml = XmlBuilder::new();
/// xml.block("stop1", &[], |xml| xml.text_tag("zipcode", "46202")).unwrap();
/// assert_eq!(xml.finish().unwrap(), "<stop1>\n  <zipcode>46202</zipcode>\n</stop1>");
/// ```
pub struct XmlBuilder {
    writer: Writer<Vec<u8>>,
}

impl Default for XmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlBuilder {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', INDENT),
        }
    }

    /// Writes `<name>value</name>`, or `<name/>` when the value renders empty.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Write` if the writer fails.
    pub fn tag(&mut self, name: &str, value: &FieldValue) -> CodecResult<()> {
        self.text_tag(name, &value.to_string())
    }

    /// Writes `<name>text</name>`, or `<name/>` when `text` is empty.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Write` if the writer fails.
    pub fn text_tag(&mut self, name: &str, text: &str) -> CodecResult<()> {
        if text.is_empty() {
            return self.write(Event::Empty(BytesStart::new(name)));
        }
        self.write(Event::Start(BytesStart::new(name)))?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Writes an element with `attributes` whose children come from `body`.
    ///
    /// Attributes whose value is `None` are left out.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Write` if the writer fails, or whatever `body`
    /// returns.
    pub fn block<F>(&mut self, name: &str, attributes: &[(&str, Option<&str>)], body: F) -> CodecResult<()>
    where
        F: FnOnce(&mut Self) -> CodecResult<()>,
    {
        let start = BytesStart::new(name).with_attributes(
            attributes
                .iter()
                .filter_map(|(key, value)| value.map(|value| (*key, value))),
        );
        self.write(Event::Start(start))?;
        body(self)?;
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Returns the document text.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Encoding` if the output is not UTF-8.
    pub fn finish(self) -> CodecResult<String> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| CodecError::encoding(e.to_string()))
    }

    fn write(&mut self, event: Event<'_>) -> CodecResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| CodecError::write(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_self_close() {
        let mut xml = XmlBuilder::new();
        xml.tag("nmfc", &FieldValue::Null).unwrap();
        assert_eq!(xml.finish().unwrap(), "<nmfc/>");
    }

    #[test]
    fn text_is_escaped() {
        let mut xml = XmlBuilder::new();
        xml.text_tag("productdesc", "nuts & bolts <steel>").unwrap();
        assert_eq!(
            xml.finish().unwrap(),
            "<productdesc>nuts &amp; bolts &lt;steel&gt;</productdesc>"
        );
    }

    #[test]
    fn missing_attributes_are_omitted() {
        let mut xml = XmlBuilder::new();
        xml.block("root", &[("a", Some("1")), ("b", None)], |_| Ok(()))
            .unwrap();
        let document = xml.finish().unwrap();
        assert!(document.starts_with("<root a=\"1\">"));
        assert!(!document.contains("b="));
    }

    #[test]
    fn body_errors_propagate() {
        let mut xml = XmlBuilder::new();
        let result = xml.block("root", &[], |_| Err(CodecError::write("boom")));
        assert_eq!(result, Err(CodecError::write("boom")));
    }
}
