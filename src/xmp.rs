//! PDF/A identification schema (`pdfaid`) in XMP packets.
//!
//! XMP allows two serialisations of the same property:
//! - attribute syntax : `<rdf:Description pdfaid:part="2" pdfaid:conformance="B"/>`
//! - element syntax   : `<pdfaid:part>2</pdfaid:part>`
//!
//! Properties are matched by namespace URI, not by prefix, so a packet that
//! binds the schema to another prefix is still read. An undeclared `pdfaid`
//! prefix is accepted too; some producers forget the `xmlns` declaration.

use crate::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

const PDFAID_NS: &[u8] = b"http://www.aiim.org/pdfa/ns/id/";
const PDFAID_PREFIX: &[u8] = b"pdfaid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Part,
    Conformance,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"part" => Some(Self::Part),
            b"conformance" => Some(Self::Conformance),
            _ => None,
        }
    }
}

/// `pdfaid:part` and `pdfaid:conformance` as found in an XMP packet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PdfaId {
    pub(crate) part: Option<String>,
    pub(crate) conformance: Option<String>,
}

impl PdfaId {
    /// Part followed by conformance, e.g. `"2B"`. Empty unless both are set.
    pub(crate) fn status(&self) -> String {
        match (&self.part, &self.conformance) {
            (Some(part), Some(conformance)) => format!("{part}{conformance}"),
            _ => String::new(),
        }
    }

    /// Record `value` unless the field already has one. Merged or updated
    /// packets repeat the schema; the first statement wins.
    fn set(&mut self, field: Field, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let slot = match field {
            Field::Part => &mut self.part,
            Field::Conformance => &mut self.conformance,
        };
        if slot.is_none() {
            *slot = Some(value.to_owned());
        }
    }
}

fn is_pdfaid(ns: &ResolveResult) -> bool {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => *uri == PDFAID_NS,
        ResolveResult::Unknown(prefix) => prefix.as_slice() == PDFAID_PREFIX,
        ResolveResult::Unbound => false,
    }
}

/// Read the PDF/A identification from an XMP packet.
///
/// Malformed XML is an error; a packet without the schema is not.
pub(crate) fn read_pdfa_id(xml: &str) -> Result<PdfaId> {
    let mut reader = NsReader::from_str(xml);
    let mut id = PdfaId::default();
    // Element-syntax property being read, with its text so far. Text may
    // arrive in several events (entities, CDATA) and is committed at `End`.
    let mut current: Option<(Field, String)> = None;

    loop {
        let (element_in_schema, event) = {
            let (ns, event) = reader.read_resolved_event()?;
            (is_pdfaid(&ns), event)
        };

        match event {
            Event::Start(e) => {
                read_attributes(&reader, &e, &mut id)?;
                current = if element_in_schema {
                    Field::from_local_name(e.local_name().as_ref()).map(|f| (f, String::new()))
                } else {
                    None
                };
            }
            Event::Empty(e) => read_attributes(&reader, &e, &mut id)?,
            Event::Text(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                if let Some((field, value)) = current.take() {
                    id.set(field, &value);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(id)
}

fn read_attributes(reader: &NsReader<&[u8]>, e: &BytesStart, id: &mut PdfaId) -> Result<()> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let (ns, local) = reader.resolve_attribute(attr.key);
        if !is_pdfaid(&ns) {
            continue;
        }
        if let Some(field) = Field::from_local_name(local.as_ref()) {
            id.set(field, &attr.unescape_value()?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet(description: &str) -> String {
        format!(
            r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    {description}
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#
        )
    }

    #[test]
    fn reads_attribute_syntax() {
        let xml = packet(
            r#"<rdf:Description rdf:about="" xmlns:pdfaid="http://www.aiim.org/pdfa/ns/id/"
                pdfaid:part="1" pdfaid:conformance="B"/>"#,
        );
        assert_eq!(read_pdfa_id(&xml).unwrap().status(), "1B");
    }

    #[test]
    fn reads_element_syntax() {
        let xml = packet(
            r#"<rdf:Description rdf:about="" xmlns:pdfaid="http://www.aiim.org/pdfa/ns/id/">
                 <pdfaid:part>3</pdfaid:part>
                 <pdfaid:conformance>U</pdfaid:conformance>
               </rdf:Description>"#,
        );
        assert_eq!(read_pdfa_id(&xml).unwrap().status(), "3U");
    }

    #[test]
    fn matches_namespace_not_prefix() {
        let xml = packet(
            r#"<rdf:Description rdf:about="" xmlns:id="http://www.aiim.org/pdfa/ns/id/"
                id:part="2" id:conformance="A"/>"#,
        );
        assert_eq!(read_pdfa_id(&xml).unwrap().status(), "2A");

        let foreign = packet(
            r#"<rdf:Description rdf:about="" xmlns:pdfaid="urn:example:not-pdfa"
                pdfaid:part="2" pdfaid:conformance="A"/>"#,
        );
        assert_eq!(read_pdfa_id(&foreign).unwrap(), PdfaId::default());
    }

    #[test]
    fn accepts_undeclared_prefix() {
        let xml = packet(r#"<rdf:Description rdf:about="" pdfaid:part="2" pdfaid:conformance="U"/>"#);
        assert_eq!(read_pdfa_id(&xml).unwrap().status(), "2U");
    }

    #[test]
    fn part_without_conformance_is_empty() {
        let xml = packet(
            r#"<rdf:Description rdf:about="" xmlns:pdfaid="http://www.aiim.org/pdfa/ns/id/"
                pdfaid:part="4"/>"#,
        );
        let id = read_pdfa_id(&xml).unwrap();
        assert_eq!(id.part.as_deref(), Some("4"));
        assert_eq!(id.status(), "");
    }

    #[test]
    fn repeated_identification_keeps_first_value() {
        let xml = packet(
            r#"<rdf:Description rdf:about="" xmlns:pdfaid="http://www.aiim.org/pdfa/ns/id/"
                pdfaid:part="2" pdfaid:conformance="B"/>
               <rdf:Description rdf:about="" xmlns:pdfaid="http://www.aiim.org/pdfa/ns/id/">
                 <pdfaid:part>2</pdfaid:part>
                 <pdfaid:conformance>B</pdfaid:conformance>
               </rdf:Description>"#,
        );
        assert_eq!(read_pdfa_id(&xml).unwrap().status(), "2B");
    }

    #[test]
    fn conflicting_identification_keeps_first_value() {
        let xml = packet(
            r#"<rdf:Description rdf:about="" xmlns:pdfaid="http://www.aiim.org/pdfa/ns/id/">
                 <pdfaid:part>1</pdfaid:part>
                 <pdfaid:conformance>A</pdfaid:conformance>
               </rdf:Description>
               <rdf:Description rdf:about="" xmlns:pdfaid="http://www.aiim.org/pdfa/ns/id/"
                pdfaid:part="3" pdfaid:conformance="U"/>"#,
        );
        assert_eq!(read_pdfa_id(&xml).unwrap().status(), "1A");
    }

    #[test]
    fn element_text_split_by_cdata_is_joined() {
        let xml = packet(
            r#"<rdf:Description rdf:about="" xmlns:pdfaid="http://www.aiim.org/pdfa/ns/id/">
                 <pdfaid:part>2</pdfaid:part>
                 <pdfaid:conformance><![CDATA[B]]></pdfaid:conformance>
               </rdf:Description>"#,
        );
        assert_eq!(read_pdfa_id(&xml).unwrap().status(), "2B");
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(read_pdfa_id("<x:xmpmeta><rdf:RDF></x:xmpmeta>").is_err());
    }
}
