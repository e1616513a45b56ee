//! # Request Document
//!
//! Renders a [`QuoteRequest`] as the `freightquote` document.

use crate::domain::entities::{Cod, Origin, QuoteRequest};
use crate::infrastructure::xml::{CodecResult, Fragment, XmlBuilder};

/// Root element name.
pub const ROOT_ELEMENT: &str = "freightquote";

/// Value of the root `request` attribute.
pub const REQUEST_KIND: &str = "quote";

/// Renders the request document before upper-casing.
///
/// Missing origin or destination render as empty fragments; callers
/// validate the request first.
///
/// # Errors
///
/// Returns `CodecError` if the writer fails.
pub fn render_request(request: &QuoteRequest) -> CodecResult<String> {
    let email = request.email().to_string();
    let password = request.password().to_string();
    let bill_to = request.bill_to().to_string();
    let attributes = [
        ("request", Some(REQUEST_KIND)),
        ("email", present(&email)),
        ("password", present(&password)),
        ("billto", present(&bill_to)),
    ];

    let mut xml = XmlBuilder::new();
    xml.block(ROOT_ELEMENT, &attributes, |xml| {
        match request.origin() {
            Some(origin) => origin.to_xml(xml, 0)?,
            None => Origin::default().to_xml(xml, 0)?,
        }
        for (index, stop) in request.stops().iter().enumerate() {
            stop.to_xml(xml, index)?;
        }
        match request.destination() {
            Some(destination) => destination.to_xml(xml, 0)?,
            None => xml.block("destination", &[], |_| Ok(()))?,
        }
        for (index, shipment) in request.shipments().iter().enumerate() {
            shipment.to_xml(xml, index)?;
        }
        xml.block("service", &[], |xml| {
            match request.service_cod() {
                Some(cod) => cod.to_xml(xml, 0)?,
                None => Cod::default().to_xml(xml, 0)?,
            }
            xml.tag("blind", request.service_blind())?;
            xml.tag("packaged", request.service_packaged())
        })?;
        xml.block("hazmat", &[], |xml| {
            xml.tag("contact", request.hazmat_contact())?;
            xml.tag("phone", request.hazmat_phone())
        })
    })?;
    xml.finish()
}

/// Renders the request document as transmitted: entirely upper-cased.
///
/// # Errors
///
/// Returns `CodecError` if the writer fails.
pub fn render_wire_request(request: &QuoteRequest) -> CodecResult<String> {
    Ok(render_request(request)?.to_uppercase())
}

fn present(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::{Destination, Shipment, Stop};
    use crate::domain::validation::{Assignable, Attributes};
    use crate::domain::value_objects::BillTo;

    fn shipment(weight: i64) -> Shipment {
        Shipment::from_attributes(
            Attributes::new()
                .with("weight", weight)
                .with("weight_class", 50)
                .with("product_description", "books")
                .with("package_type", "boxes"),
        )
        .unwrap()
    }

    fn request() -> QuoteRequest {
        QuoteRequest::new()
            .with_credentials("me@example.com", "secret", false)
            .with_origin(Origin::new("46202"))
            .with_stop(Stop::new("60601"))
            .with_stop(Stop::new("80202"))
            .with_destination(Destination::new("95014").with_flags(false, true, false, false, true))
            .with_shipment(shipment(150))
            .with_shipment(shipment(200))
            .with_service_blind(false)
            .with_service_packaged(true)
            .with_hazmat_contact("Pat")
            .with_hazmat_phone("555-0100")
    }

    fn position(document: &str, needle: &str) -> usize {
        document.find(needle).unwrap()
    }

    #[test]
    fn root_attributes_skip_missing_values() {
        let document = render_request(&request()).unwrap();
        assert!(document.starts_with(
            "<freightquote request=\"quote\" email=\"me@example.com\" password=\"secret\">"
        ));

        let billed = render_request(&request().with_bill_to(BillTo::Site)).unwrap();
        assert!(billed.contains("billto=\"SITE\""));
    }

    #[test]
    fn children_follow_fixed_order() {
        let document = render_request(&request()).unwrap();
        let order = [
            "<origin>",
            "<stop1>",
            "<stop2>",
            "<destination>",
            "<shipment>",
            "<shipment2>",
            "<service>",
            "<cod>",
            "<blind>",
            "<packaged>",
            "<hazmat>",
            "<contact>",
            "<phone>",
        ];
        for pair in order.windows(2) {
            if let [first, second] = pair {
                assert!(
                    position(&document, first) < position(&document, second),
                    "{first} should precede {second}"
                );
            }
        }
    }

    #[test]
    fn default_cod_is_written_when_absent() {
        let document = render_request(&request()).unwrap();
        assert!(document.contains("<service>\n    <cod>\n      <amounttocollect/>"));
    }

    #[test]
    fn wire_document_is_upper_cased() {
        let document = render_wire_request(&request()).unwrap();
        assert!(document.starts_with(
            "<FREIGHTQUOTE REQUEST=\"QUOTE\" EMAIL=\"ME@EXAMPLE.COM\" PASSWORD=\"SECRET\">"
        ));
        assert!(document.contains("<PRODUCTDESC>BOOKS</PRODUCTDESC>"));
        assert!(document.contains("<RESIDENCE>TRUE</RESIDENCE>"));
        assert_eq!(document, document.to_uppercase());
    }
}
