//! # Quote Request
//!
//! The aggregate submitted to the quoting service: credentials, locations,
//! freight lines and service options.
//!
//! Scalar fields may be mass-assigned from [`Attributes`]; entity-valued
//! fields are set through typed `with_*` methods. A scalar supplied for an
//! entity-valued key is reported by validation as mistyped.
//!
//! [`Attributes`]: crate::domain::validation::Attributes

use crate::domain::entities::{Cod, Destination, Origin, Shipment, Stop};
use crate::domain::errors::DomainResult;
use crate::domain::validation::{Assignable, Errors, FieldValue, Validateable};
use crate::domain::value_objects::BillTo;

/// Email of the published test account.
pub const TEST_ACCOUNT_EMAIL: &str = "xmltest@freightquote.com";

/// Password of the published test account.
pub const TEST_ACCOUNT_PASSWORD: &str = "xml";

/// An entity-valued field.
#[derive(Debug, Clone, PartialEq, Default)]
enum Slot<T> {
    #[default]
    Absent,
    Present(T),
    Mistyped,
}

impl<T> Slot<T> {
    fn from_scalar(value: FieldValue) -> Self {
        if value.is_null() {
            Self::Absent
        } else {
            Self::Mistyped
        }
    }

    fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Mistyped => None,
        }
    }
}

impl<T> Slot<Vec<T>> {
    fn push(&mut self, item: T) {
        match self {
            Self::Present(items) => items.push(item),
            Self::Absent | Self::Mistyped => *self = Self::Present(vec![item]),
        }
    }

    fn items(&self) -> &[T] {
        match self {
            Self::Present(items) => items,
            Self::Absent | Self::Mistyped => &[],
        }
    }
}

/// A complete quote request.
///
/// # Examples
///
/// ```
/// use freightquote::domain::entities::{Destination, Origin, QuoteRequest, Shipment};
/// use freightquote::domain::validation::{Assignable, Attributes, Validateable};
///
/// let shipment = Shipment::from_attributes(
///     Attributes::new()
///         .with("weight", 150)
///         .with("weight_class", 50)
///         .with("product_description", "books")
///         .with("hazardous", false)
///         .with("package_type", "BOXES")
///         .with("pieces", 2)
///         .with("stackable", true),
/// )
/// .unwrap();
///
/// let mut request = QuoteRequest::new()
///     .with_origin(Origin::new("46202"))
///     .with_destination(Destination::new("95014").with_flags(true, false, false, false, false))
///     .with_shipment(shipment);
///
/// assert!(request.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteRequest {
    email: FieldValue,
    password: FieldValue,
    test: FieldValue,
    bill_to: FieldValue,
    origin: Slot<Origin>,
    stops: Slot<Vec<Stop>>,
    destination: Slot<Destination>,
    shipments: Slot<Vec<Shipment>>,
    service_blind: FieldValue,
    service_packaged: FieldValue,
    service_cod: Slot<Cod>,
    hazmat_contact: FieldValue,
    hazmat_phone: FieldValue,
    errors: Errors,
}

impl QuoteRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account credentials and the test flag.
    #[must_use]
    pub fn with_credentials(
        mut self,
        email: impl Into<FieldValue>,
        password: impl Into<FieldValue>,
        test: bool,
    ) -> Self {
        self.email = email.into();
        self.password = password.into();
        self.test = test.into();
        self
    }

    /// Sets the paying party.
    #[must_use]
    pub fn with_bill_to(mut self, bill_to: BillTo) -> Self {
        self.bill_to = bill_to.as_str().into();
        self
    }

    /// Sets the pickup location.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Slot::Present(origin);
        self
    }

    /// Appends an intermediate stop.
    #[must_use]
    pub fn with_stop(mut self, stop: Stop) -> Self {
        self.stops.push(stop);
        self
    }

    /// Sets the delivery location.
    #[must_use]
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = Slot::Present(destination);
        self
    }

    /// Appends a line of freight.
    #[must_use]
    pub fn with_shipment(mut self, shipment: Shipment) -> Self {
        self.shipments.push(shipment);
        self
    }

    /// Replaces every line of freight with `shipments`.
    #[must_use]
    pub fn with_shipments(mut self, shipments: Vec<Shipment>) -> Self {
        self.shipments = Slot::Present(shipments);
        self
    }

    /// Sets the blind shipment flag.
    #[must_use]
    pub fn with_service_blind(mut self, blind: bool) -> Self {
        self.service_blind = blind.into();
        self
    }

    /// Sets the packaging service flag.
    #[must_use]
    pub fn with_service_packaged(mut self, packaged: bool) -> Self {
        self.service_packaged = packaged.into();
        self
    }

    /// Sets the collect-on-delivery instructions.
    #[must_use]
    pub fn with_service_cod(mut self, cod: Cod) -> Self {
        self.service_cod = Slot::Present(cod);
        self
    }

    /// Sets the hazardous materials contact.
    #[must_use]
    pub fn with_hazmat_contact(mut self, contact: impl Into<FieldValue>) -> Self {
        self.hazmat_contact = contact.into();
        self
    }

    /// Sets the hazardous materials phone number.
    #[must_use]
    pub fn with_hazmat_phone(mut self, phone: impl Into<FieldValue>) -> Self {
        self.hazmat_phone = phone.into();
        self
    }

    /// Replaces the credentials with the test account when the test flag is
    /// set.
    pub fn apply_test_account(&mut self) {
        if self.is_test() {
            self.email = TEST_ACCOUNT_EMAIL.into();
            self.password = TEST_ACCOUNT_PASSWORD.into();
        }
    }

    /// Returns true if the test flag is literally `true`.
    #[inline]
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.test.is_true()
    }

    /// Returns the account email.
    #[inline]
    #[must_use]
    pub fn email(&self) -> &FieldValue {
        &self.email
    }

    /// Returns the account password.
    #[inline]
    #[must_use]
    pub fn password(&self) -> &FieldValue {
        &self.password
    }

    /// Returns the paying party as supplied.
    #[inline]
    #[must_use]
    pub fn bill_to(&self) -> &FieldValue {
        &self.bill_to
    }

    /// Returns the pickup location, if set.
    #[must_use]
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.present()
    }

    /// Returns the intermediate stops.
    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        self.stops.items()
    }

    /// Returns the delivery location, if set.
    #[must_use]
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.present()
    }

    /// Returns the lines of freight.
    #[must_use]
    pub fn shipments(&self) -> &[Shipment] {
        self.shipments.items()
    }

    /// Returns the blind shipment flag.
    #[inline]
    #[must_use]
    pub fn service_blind(&self) -> &FieldValue {
        &self.service_blind
    }

    /// Returns the packaging service flag.
    #[inline]
    #[must_use]
    pub fn service_packaged(&self) -> &FieldValue {
        &self.service_packaged
    }

    /// Returns the collect-on-delivery instructions, if set.
    #[must_use]
    pub fn service_cod(&self) -> Option<&Cod> {
        self.service_cod.present()
    }

    /// Returns the hazardous materials contact.
    #[inline]
    #[must_use]
    pub fn hazmat_contact(&self) -> &FieldValue {
        &self.hazmat_contact
    }

    /// Returns the hazardous materials phone number.
    #[inline]
    #[must_use]
    pub fn hazmat_phone(&self) -> &FieldValue {
        &self.hazmat_phone
    }
}

impl Assignable for QuoteRequest {
    const ENTITY: &'static str = "Quote";

    fn assign(&mut self, attribute: &str, value: FieldValue) -> DomainResult<()> {
        match attribute {
            "email" => self.email = value,
            "password" => self.password = value,
            "test" => self.test = value,
            "bill_to" => self.bill_to = value,
            "service_blind" => self.service_blind = value,
            "service_packaged" => self.service_packaged = value,
            "hazmat_contact" => self.hazmat_contact = value,
            "hazmat_phone" => self.hazmat_phone = value,
            "origin" => self.origin = Slot::from_scalar(value),
            "stops" => self.stops = Slot::from_scalar(value),
            "destination" => self.destination = Slot::from_scalar(value),
            "shipments" => self.shipments = Slot::from_scalar(value),
            "service_cod" => self.service_cod = Slot::from_scalar(value),
            // Response-only fields.
            "quote_id" | "carriers" => {}
            other => return Err(Self::unknown_attribute(other)),
        }
        Ok(())
    }
}

impl Validateable for QuoteRequest {
    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }

    fn validate(&mut self, errors: &mut Errors) {
        if !self.bill_to.is_blank()
            && !self
                .bill_to
                .as_str()
                .is_some_and(|text| text.parse::<BillTo>().is_ok())
        {
            errors.add("bill_to", "is not valid");
        }

        if !matches!(self.origin, Slot::Present(_)) {
            errors.add("origin", "should be an Origin object");
        }

        match &mut self.stops {
            Slot::Absent => {}
            Slot::Mistyped => errors.add("stops", "should be an array of Stop objects."),
            Slot::Present(stops) => {
                for (index, stop) in stops.iter_mut().enumerate() {
                    if !stop.is_valid() {
                        errors.add_to_base(format!("Stop {index} does not validate"));
                    }
                }
            }
        }

        if !matches!(self.destination, Slot::Present(_)) {
            errors.add("destination", "should be a Destination object");
        }

        match &mut self.shipments {
            Slot::Present(shipments) => {
                if shipments.is_empty() {
                    errors.add("shipments", "should contain at least one Shipment object");
                }
                for (index, shipment) in shipments.iter_mut().enumerate() {
                    if !shipment.is_valid() {
                        errors.add_to_base(format!("Shipment {index} does not validate"));
                    }
                }
            }
            Slot::Absent | Slot::Mistyped => {
                errors.add("shipments", "should be an array of Shipment objects.");
            }
        }

        match &mut self.service_cod {
            Slot::Absent => {}
            Slot::Mistyped => errors.add("service_cod", "should be a Cod object"),
            Slot::Present(cod) => {
                if !cod.is_valid() {
                    errors.add("service_cod", "does not validate");
                }
            }
        }
    }
}
