//! # Entity Fragments
//!
//! Element layout of each entity inside the request document.

use crate::domain::entities::{Cod, Destination, Origin, Shipment, Stop};
use crate::infrastructure::xml::{CodecResult, XmlBuilder};

/// An entity that renders as one element of the request document.
pub trait Fragment {
    /// Element name for the entity at `index` within its list.
    fn tag_name(&self, index: usize) -> String;

    /// Writes the child elements.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the writer fails.
    fn write_children(&self, xml: &mut XmlBuilder) -> CodecResult<()>;

    /// Writes the whole element.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the writer fails.
    fn to_xml(&self, xml: &mut XmlBuilder, index: usize) -> CodecResult<()> {
        let name = self.tag_name(index);
        xml.block(&name, &[], |xml| self.write_children(xml))
    }
}

impl Fragment for Origin {
    fn tag_name(&self, _index: usize) -> String {
        "origin".to_string()
    }

    fn write_children(&self, xml: &mut XmlBuilder) -> CodecResult<()> {
        xml.tag("zipcode", self.zip_code())?;
        xml.tag("loadingdock", self.loading_dock())?;
        xml.tag("residence", self.residence())?;
        xml.tag("constructionsite", self.construction_site())?;
        xml.tag("insidepickup", self.inside())?;
        xml.tag("liftgatepickup", self.lift_gate())
    }
}

impl Fragment for Stop {
    /// `stop1`, `stop2`, ...
    fn tag_name(&self, index: usize) -> String {
        format!("stop{}", index + 1)
    }

    fn write_children(&self, xml: &mut XmlBuilder) -> CodecResult<()> {
        xml.tag("zipcode", self.zip_code())
    }
}

impl Fragment for Destination {
    fn tag_name(&self, _index: usize) -> String {
        "destination".to_string()
    }

    fn write_children(&self, xml: &mut XmlBuilder) -> CodecResult<()> {
        xml.tag("zipcode", self.zip_code())?;
        xml.tag("loadingdock", self.loading_dock())?;
        xml.tag("residence", self.residence())?;
        xml.tag("constructionsite", self.construction_site())?;
        xml.tag("insidepickup", self.inside())?;
        xml.tag("liftgatepickup", self.lift_gate())
    }
}

impl Fragment for Shipment {
    /// `shipment`, `shipment2`, `shipment3`, ...
    fn tag_name(&self, index: usize) -> String {
        if index == 0 {
            "shipment".to_string()
        } else {
            format!("shipment{}", index + 1)
        }
    }

    fn write_children(&self, xml: &mut XmlBuilder) -> CodecResult<()> {
        xml.tag("weight", self.weight())?;
        xml.tag("class", self.weight_class())?;
        xml.block("dimensions", &[], |xml| {
            xml.tag("length", self.length())?;
            xml.tag("width", self.width())?;
            xml.tag("height", self.height())
        })?;
        xml.tag("nmfc", self.nmfc())?;
        xml.tag("productdesc", self.product_description())?;
        xml.tag("hzmt", self.hazardous())?;
        xml.tag("packagetype", self.package_type())?;
        xml.tag("pieces", self.pieces())?;
        xml.tag("stackable", self.stackable())
    }
}

impl Fragment for Cod {
    fn tag_name(&self, _index: usize) -> String {
        "cod".to_string()
    }

    fn write_children(&self, xml: &mut XmlBuilder) -> CodecResult<()> {
        xml.tag("amounttocollect", self.amount_to_collect())?;
        xml.tag("remittoname", self.remit_to_name())?;
        xml.tag("remittoaddress", self.remit_to_address())?;
        xml.tag("remittocity", self.remit_to_city())?;
        xml.tag("remittostate", self.remit_to_state())?;
        xml.tag("remittozip", self.remit_to_zip_code())
    }
}
