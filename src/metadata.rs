use crate::{PdfaError, Result};
use lopdf::Document;

// ── MetadataReader ────────────────────────────────────────────────────────────
//
// Internal type. Callers use PdfaInspector, which delegates here.

pub(crate) struct MetadataReader<'a> {
    document: &'a Document,
}

impl<'a> MetadataReader<'a> {
    pub(crate) fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Walk catalog → /Metadata → stream → bytes → UTF-8 string.
    ///
    /// Returns `Ok(None)` when the catalog has no `/Metadata` entry. Once the
    /// entry exists, every failure to turn it into text is
    /// [`PdfaError::Metadata`]: the document carries XMP we cannot read, which
    /// is not the same as carrying none.
    pub(crate) fn read_xmp(&self) -> Result<Option<String>> {
        let catalog = self.document.catalog()?;

        let meta_obj = match catalog.get(b"Metadata") {
            Ok(obj) => obj,
            Err(_) => return Ok(None),
        };

        let meta_id = meta_obj.as_reference().map_err(|_| {
            PdfaError::Metadata("/Metadata entry is not an indirect reference".into())
        })?;

        let meta_object = self.document.get_object(meta_id).map_err(|e| {
            PdfaError::Metadata(format!("cannot resolve /Metadata object: {e}"))
        })?;

        let stream = meta_object
            .as_stream()
            .map_err(|_| PdfaError::Metadata("/Metadata object is not a stream".into()))?;

        // PDF/A requires XMP to be stored unfiltered; only decode when asked to.
        let bytes = if stream.dict.has(b"Filter") {
            stream.decompressed_content().map_err(|e| {
                PdfaError::Metadata(format!("cannot decompress /Metadata stream: {e}"))
            })?
        } else {
            stream.content.clone()
        };

        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}
