//! # Response Parser
//!
//! Turns the raw response body into a quote id and carriers, or into an
//! error map.
//!
//! # Sentinel codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `000` | no body at all |
//! | `001` | empty body |
//! | `002` | body is not well-formed or has neither `FQERROR` nor `FQQUOTE` |
//!
//! Errors reported by the service (`FQERROR`) are keyed by their
//! `ERRORTYPE`; a type reported twice keeps the later description. When
//! any are present no carriers are read.
//!
//! Element text is collected across text, CDATA and entity pieces and
//! trimmed once the element closes.

use crate::domain::entities::Carrier;
use crate::domain::validation::{Assignable, Attributes, Errors};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::warn;

/// Code recorded when there is no response body.
pub const NO_RESPONSE_CODE: &str = "000";
/// Message recorded when there is no response body.
pub const NO_RESPONSE_MESSAGE: &str = "INVALID QUOTE. CHECK ERRORS.";
/// Code recorded when the response body is empty.
pub const EMPTY_RESPONSE_CODE: &str = "001";
/// Message recorded when the response body is empty.
pub const EMPTY_RESPONSE_MESSAGE: &str = "EMPTY RESPONSE FROM SERVER";
/// Code recorded when the response body cannot be understood.
pub const MALFORMED_RESPONSE_CODE: &str = "002";
/// Message recorded when the response body cannot be understood.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "MALFORMED RESPONSE FROM SERVER";

/// Response element name to carrier field.
const CARRIER_FIELDS: [(&str, &str); 6] = [
    ("CARRIERNAME", "name"),
    ("SCAC", "scac"),
    ("RATE", "rate"),
    ("FREIGHTCOST", "freight_cost"),
    ("FUEL_SURCHARGE", "fuel_surcharge"),
    ("TRANSIT", "transit"),
];

/// Outcome of parsing one response body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteResponse {
    /// Quote identifier, when a quote was returned.
    pub quote_id: Option<String>,
    /// Carrier options in document order.
    pub carriers: Vec<Carrier>,
    /// Service errors or sentinel codes.
    pub errors: Errors,
}

impl QuoteResponse {
    fn sentinel(code: &str, message: &str) -> Self {
        let mut errors = Errors::new();
        errors.add(code, message);
        Self {
            errors,
            ..Self::default()
        }
    }

    /// Returns true if no errors were recorded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses a response body.
///
/// # Examples
///
/// ```
/// use freightquote::infrastructure::xml::parse_response;
///
/// let response = parse_response(Some(
///     "<FQERROR><ERRORTYPE>100</ERRORTYPE><ERRORDESC>Invalid login</ERRORDESC></FQERROR>",
/// ));
/// assert_eq!(response.errors.on("100"), Some("Invalid login"));
/// assert!(response.carriers.is_empty());
/// ```
#[must_use]
pub fn parse_response(body: Option<&str>) -> QuoteResponse {
    let Some(body) = body else {
        return QuoteResponse::sentinel(NO_RESPONSE_CODE, NO_RESPONSE_MESSAGE);
    };
    if body.trim().is_empty() {
        return QuoteResponse::sentinel(EMPTY_RESPONSE_CODE, EMPTY_RESPONSE_MESSAGE);
    }

    let mut scan = DocumentScan::default();
    if let Err(message) = scan.run(body) {
        warn!(error = %message, "unreadable quote response");
        return QuoteResponse::sentinel(MALFORMED_RESPONSE_CODE, MALFORMED_RESPONSE_MESSAGE);
    }
    scan.into_response()
}

/// Text collected for one `FQERROR`.
#[derive(Default)]
struct ServiceError {
    kind: Option<String>,
    description: Option<String>,
}

/// Single pass over the document, tracking the open element path.
#[derive(Default)]
struct DocumentScan {
    path: Vec<String>,
    service_errors: Vec<(String, String)>,
    current_error: Option<ServiceError>,
    saw_quote: bool,
    quote_id: Option<String>,
    carriers: Vec<Attributes>,
    current_carrier: Option<Attributes>,
    text: String,
}

impl DocumentScan {
    fn run(&mut self, body: &str) -> Result<(), String> {
        let mut reader = Reader::from_str(body);

        loop {
            match reader.read_event().map_err(|e| e.to_string())? {
                Event::Start(element) => {
                    let name = element_name(&element)?;
                    self.open(&name, &element)?;
                    self.path.push(name);
                    self.text.clear();
                }
                Event::Empty(element) => {
                    let name = element_name(&element)?;
                    self.open(&name, &element)?;
                    self.close(&name);
                    self.text.clear();
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(|e| e.to_string())?;
                    self.text.push_str(&text);
                }
                Event::CData(data) => {
                    let text = std::str::from_utf8(&data).map_err(|e| e.to_string())?;
                    self.text.push_str(text);
                }
                Event::End(_) => {
                    if let Some(name) = self.path.pop() {
                        self.finish_text(&name);
                        self.close(&name);
                    }
                    self.text.clear();
                }
                Event::Eof => break,
                _ => {}
            }
        }
        Ok(())
    }

    fn open(&mut self, name: &str, element: &BytesStart<'_>) -> Result<(), String> {
        match name {
            "FQERROR" => self.current_error = Some(ServiceError::default()),
            "FQQUOTE" if !self.saw_quote => {
                self.saw_quote = true;
                self.quote_id = attribute(element, "QUOTEID")?;
            }
            "CARRIER" if self.parent() == Some("FQQUOTE") => {
                let mut carrier = Attributes::new();
                if let Some(option_id) = attribute(element, "OPTIONID")? {
                    carrier.insert("option_id", option_id);
                }
                self.current_carrier = Some(carrier);
            }
            _ => {}
        }
        Ok(())
    }

    /// Stores the text collected for the element `name` that just closed.
    /// The first occurrence of a field wins.
    fn finish_text(&mut self, name: &str) {
        let text = self.text.trim();

        if let Some(error) = self.current_error.as_mut() {
            let slot = match name {
                "ERRORTYPE" => &mut error.kind,
                "ERRORDESC" => &mut error.description,
                _ => return,
            };
            if slot.is_none() {
                *slot = Some(text.to_string());
            }
            return;
        }

        if let Some(carrier) = self.current_carrier.as_mut() {
            let field = CARRIER_FIELDS
                .iter()
                .find(|(tag, _)| *tag == name)
                .map(|(_, field)| *field);
            if let Some(field) = field
                && carrier.get(field).is_none()
            {
                carrier.insert(field, text);
            }
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            "FQERROR" => {
                if let Some(error) = self.current_error.take() {
                    self.service_errors.push((
                        error.kind.unwrap_or_default(),
                        error.description.unwrap_or_default(),
                    ));
                }
            }
            "CARRIER" => {
                if let Some(carrier) = self.current_carrier.take() {
                    self.carriers.push(carrier);
                }
            }
            _ => {}
        }
    }

    /// Name of the element enclosing the one being opened.
    fn parent(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    fn into_response(self) -> QuoteResponse {
        if !self.service_errors.is_empty() {
            let mut errors = Errors::new();
            for (kind, description) in self.service_errors {
                errors.set(kind, description);
            }
            return QuoteResponse {
                errors,
                ..QuoteResponse::default()
            };
        }

        if !self.saw_quote {
            return QuoteResponse::sentinel(MALFORMED_RESPONSE_CODE, MALFORMED_RESPONSE_MESSAGE);
        }

        let mut carriers = Vec::with_capacity(self.carriers.len());
        for attributes in self.carriers {
            match Carrier::from_attributes(attributes) {
                Ok(carrier) => carriers.push(carrier),
                Err(error) => {
                    warn!(error = %error, "dropping carrier option");
                    return QuoteResponse::sentinel(
                        MALFORMED_RESPONSE_CODE,
                        MALFORMED_RESPONSE_MESSAGE,
                    );
                }
            }
        }

        QuoteResponse {
            quote_id: self.quote_id,
            carriers,
            errors: Errors::new(),
        }
    }
}

fn element_name(element: &BytesStart<'_>) -> Result<String, String> {
    std::str::from_utf8(element.name().as_ref())
        .map(str::to_string)
        .map_err(|e| e.to_string())
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, String> {
    match element.try_get_attribute(name).map_err(|e| e.to_string())? {
        Some(attribute) => attribute
            .unescape_value()
            .map(|value| Some(value.into_owned()))
            .map_err(|e| e.to_string()),
        None => Ok(None),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const QUOTE: &str = r#"<?xml version="1.0"?>
<FQQUOTE QUOTEID="4894702">
  <CARRIER OPTIONID="1">
    <CARRIERNAME>USFREIGHTWAYS - DUGAN</CARRIERNAME>
    <SCAC>DUGN</SCAC>
    <RATE>$74.43</RATE>
    <DETAIL>
      <FREIGHTCOST>$72.13</FREIGHTCOST>
      <FUEL_SURCHARGE>$2.30</FUEL_SURCHARGE>
    </DETAIL>
    <TRANSIT>2</TRANSIT>
  </CARRIER>
  <CARRIER OPTIONID="2">
    <CARRIERNAME>CENTRAL TRANSPORT INTERNATIONAL</CARRIERNAME>
    <SCAC>CTII</SCAC>
    <RATE>$79.27</RATE>
    <DETAIL>
      <FREIGHTCOST>$76.80</FREIGHTCOST>
      <FUEL_SURCHARGE>$2.47</FUEL_SURCHARGE>
    </DETAIL>
    <TRANSIT>3</TRANSIT>
  </CARRIER>
</FQQUOTE>"#;

    #[test]
    fn missing_body_is_000() {
        let response = parse_response(None);
        assert_eq!(response.errors.count(), 1);
        assert_eq!(response.errors.on("000"), Some(NO_RESPONSE_MESSAGE));
    }

    #[test]
    fn empty_body_is_001() {
        let response = parse_response(Some(""));
        assert_eq!(response.errors.count(), 1);
        assert_eq!(response.errors.on("001"), Some(EMPTY_RESPONSE_MESSAGE));
    }

    #[test]
    fn quote_is_read_verbatim() {
        let response = parse_response(Some(QUOTE));
        assert!(response.is_success());
        assert_eq!(response.quote_id.as_deref(), Some("4894702"));
        assert_eq!(response.carriers.len(), 2);

        let first = &response.carriers[0];
        assert_eq!(first.option_id(), "1");
        assert_eq!(first.name(), "USFREIGHTWAYS - DUGAN");
        assert_eq!(first.scac(), "DUGN");
        assert_eq!(first.rate(), "$74.43");
        assert_eq!(first.freight_cost(), "$72.13");
        assert_eq!(first.fuel_surcharge(), "$2.30");
        assert_eq!(first.transit(), "2");

        let second = &response.carriers[1];
        assert_eq!(second.option_id(), "2");
        assert_eq!(second.scac(), "CTII");
        assert_eq!(second.rate(), "$79.27");
        assert_eq!(second.transit(), "3");
    }

    #[test]
    fn service_errors_suppress_carriers() {
        let body = "<RESPONSE>\
            <FQERROR><ERRORTYPE>100</ERRORTYPE><ERRORDESC>Invalid login</ERRORDESC></FQERROR>\
            <FQQUOTE QUOTEID=\"1\"><CARRIER OPTIONID=\"1\"><RATE>$1.00</RATE></CARRIER></FQQUOTE>\
            </RESPONSE>";
        let response = parse_response(Some(body));
        assert_eq!(response.errors.count(), 1);
        assert_eq!(response.errors.on("100"), Some("Invalid login"));
        assert!(response.carriers.is_empty());
        assert!(response.quote_id.is_none());
    }

    #[test]
    fn every_service_error_is_kept() {
        let body = "<ERRORS>\
            <FQERROR><ERRORTYPE>100</ERRORTYPE><ERRORDESC>Invalid login</ERRORDESC></FQERROR>\
            <FQERROR><ERRORTYPE>210</ERRORTYPE><ERRORDESC>Bad zip &amp; state</ERRORDESC></FQERROR>\
            </ERRORS>";
        let response = parse_response(Some(body));
        assert_eq!(response.errors.count(), 2);
        assert_eq!(response.errors.on("210"), Some("Bad zip & state"));
    }

    #[test]
    fn repeated_error_type_keeps_later_description() {
        let body = "<ERRORS>\
            <FQERROR><ERRORTYPE>100</ERRORTYPE><ERRORDESC>first</ERRORDESC></FQERROR>\
            <FQERROR><ERRORTYPE>100</ERRORTYPE><ERRORDESC>second</ERRORDESC></FQERROR>\
            </ERRORS>";
        let response = parse_response(Some(body));
        assert_eq!(response.errors.count(), 1);
        assert_eq!(response.errors.get("100").unwrap(), &["second".to_string()]);
    }

    #[test]
    fn text_split_by_cdata_or_comments_is_joined() {
        let body = "<FQERROR><ERRORTYPE>100</ERRORTYPE>\
            <ERRORDESC>Invalid <![CDATA[login]]></ERRORDESC></FQERROR>";
        let response = parse_response(Some(body));
        assert_eq!(response.errors.on("100"), Some("Invalid login"));

        let body = "<FQQUOTE QUOTEID=\"5\"><CARRIER OPTIONID=\"1\">\
            <CARRIERNAME>A<!-- c -->B Lines</CARRIERNAME>\
            <RATE> $1.00 &amp; fuel </RATE>\
            </CARRIER></FQQUOTE>";
        let response = parse_response(Some(body));
        let carrier = &response.carriers[0];
        assert_eq!(carrier.name(), "AB Lines");
        assert_eq!(carrier.rate(), "$1.00 & fuel");
    }

    #[test]
    fn nested_carriers_are_ignored() {
        let body = "<FQQUOTE QUOTEID=\"9\">\
            <CARRIER OPTIONID=\"1\"><RATE>$5.00</RATE></CARRIER>\
            <OTHER><CARRIER OPTIONID=\"2\"><RATE>$1.00</RATE></CARRIER></OTHER>\
            </FQQUOTE>";
        let response = parse_response(Some(body));
        assert_eq!(response.carriers.len(), 1);
        assert_eq!(response.carriers[0].rate(), "$5.00");
    }

    #[test]
    fn quote_without_carriers_is_success() {
        let response = parse_response(Some("<FQQUOTE QUOTEID=\"77\"/>"));
        assert!(response.is_success());
        assert_eq!(response.quote_id.as_deref(), Some("77"));
        assert!(response.carriers.is_empty());
    }

    #[test]
    fn unreadable_body_is_002() {
        let response = parse_response(Some("<FQQUOTE><CARRIER></FQQUOTE>"));
        assert_eq!(response.errors.on("002"), Some(MALFORMED_RESPONSE_MESSAGE));

        let response = parse_response(Some("<HTML><BODY>Service unavailable</BODY></HTML>"));
        assert_eq!(response.errors.on("002"), Some(MALFORMED_RESPONSE_MESSAGE));
    }
}
