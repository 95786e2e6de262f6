use crate::content::{OpacityStates, PageContext};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use leafprint_render_core::{Document, DocumentRenderer, RenderError};
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::io::Write;

/// PDF backend built on lopdf's in-memory object graph.
///
/// The whole object graph is assembled first and written out in one
/// [`lopdf::Document::save_to`] call.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    compress: bool,
    title: Option<String>,
    producer: String,
    creation_date: bool,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self {
            compress: true,
            title: None,
            producer: format!("leafprint {}", env!("CARGO_PKG_VERSION")),
            creation_date: true,
        }
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// FlateDecode page content streams. On by default.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    /// Whether the Info dictionary carries a `CreationDate`. Turning it off
    /// makes the output byte-for-byte reproducible.
    pub fn with_creation_date(mut self, enabled: bool) -> Self {
        self.creation_date = enabled;
        self
    }

    fn content_stream(&self, encoded: Vec<u8>) -> Result<Stream, RenderError> {
        if !self.compress {
            return Ok(Stream::new(dictionary! {}, encoded));
        }
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&encoded)?;
        let compressed_content = encoder.finish()?;
        Ok(Stream::new(dictionary! {"Filter" => "FlateDecode"}, compressed_content))
    }

    fn font_resources(&self, pdf: &mut lopdf::Document, document: &Document) -> Dictionary {
        let mut font_dict = Dictionary::new();
        for handle in document.fonts() {
            let font_id = pdf.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => handle.base_font,
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(handle.resource_name, font_id);
        }
        font_dict
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut info = dictionary! {
            "Producer" => Object::string_literal(self.producer.as_str()),
        };
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(title.as_str()));
        }
        if self.creation_date {
            let stamp = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
            info.set("CreationDate", Object::string_literal(stamp));
        }
        info
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn render_to(&self, document: &Document, mut writer: &mut dyn Write) -> Result<(), RenderError> {
        if document.page_count() == 0 {
            return Err(RenderError::Other("Document has no pages".into()));
        }

        let mut pdf = lopdf::Document::with_version("1.7");
        let pages_id = pdf.new_object_id();
        let resources_id = pdf.new_object_id();

        let font_dict = self.font_resources(&mut pdf, document);
        let opacity = OpacityStates::collect(document);
        let mut resources_dict = dictionary! { "Font" => font_dict };
        if !opacity.is_empty() {
            resources_dict.set("ExtGState", opacity.to_dictionary());
        }
        pdf.objects
            .insert(resources_id, Object::Dictionary(resources_dict));

        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(document.page_count());
        for (index, page) in document.pages().iter().enumerate() {
            let content = PageContext::new(document, &opacity).render(page);
            let stream = self.content_stream(content.encode()?)?;
            let content_id = pdf.add_object(stream);

            let size = page.size();
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
            log::trace!(
                "Serialized page {} with {} draw commands",
                index + 1,
                page.commands().len()
            );
        }

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::from(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
        };
        pdf.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = pdf.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        pdf.trailer.set("Root", catalog_id);
        let info_id = pdf.add_object(self.info_dictionary());
        pdf.trailer.set("Info", info_id);

        pdf.save_to(&mut writer)?;
        log::debug!("Wrote PDF with {} pages", page_ids.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafprint_types::{Color, FontStyle, PageSize};
    use lopdf::content::Content;

    fn sample_document() -> Document {
        let mut doc = Document::new(PageSize::LETTER);
        doc.draw_text("Hello", 72.0, 708.0, FontStyle::Bold, 16.0, Color::BLACK)
            .unwrap();
        doc.draw_rect(72.0, 690.0, 468.0, 15.0, Color::rgb(46, 125, 50), 0.12);
        doc.new_page();
        doc.draw_text("Page 2", 500.0, 36.0, FontStyle::Regular, 9.0, Color::gray(128))
            .unwrap();
        doc
    }

    fn tj_strings(pdf: &lopdf::Document, page_id: ObjectId) -> Vec<String> {
        let raw = pdf.get_page_content(page_id).unwrap();
        let content = Content::decode(&raw).unwrap();
        content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn output_is_a_parseable_pdf() {
        let bytes = LopdfRenderer::new().render(&sample_document()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));

        let pdf = lopdf::Document::load_mem(&bytes).unwrap();
        let pages = pdf.get_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(tj_strings(&pdf, pages[&1]), vec!["Hello"]);
        assert_eq!(tj_strings(&pdf, pages[&2]), vec!["Page 2"]);
    }

    #[test]
    fn uncompressed_streams_have_no_filter() {
        let bytes = LopdfRenderer::new()
            .with_compression(false)
            .render(&sample_document())
            .unwrap();
        let pdf = lopdf::Document::load_mem(&bytes).unwrap();
        let page_id = pdf.get_pages()[&1];
        let page = pdf.get_dictionary(page_id).unwrap();
        let content_id = page.get(b"Contents").unwrap().as_reference().unwrap();
        let stream = pdf.get_object(content_id).unwrap().as_stream().unwrap();
        assert!(stream.dict.get(b"Filter").is_err());
    }

    #[test]
    fn resources_declare_fonts_and_opacity() {
        let bytes = LopdfRenderer::new().render(&sample_document()).unwrap();
        let pdf = lopdf::Document::load_mem(&bytes).unwrap();
        let page = pdf.get_dictionary(pdf.get_pages()[&1]).unwrap();
        let resources_id = page.get(b"Resources").unwrap().as_reference().unwrap();
        let resources = pdf.get_dictionary(resources_id).unwrap();

        let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
        assert_eq!(fonts.len(), 4);
        let states = resources.get(b"ExtGState").unwrap().as_dict().unwrap();
        assert!(states.has(b"GS1"));
    }

    #[test]
    fn info_dictionary_carries_metadata() {
        let bytes = LopdfRenderer::new()
            .with_title("Worksheet")
            .with_creation_date(false)
            .render(&sample_document())
            .unwrap();
        let pdf = lopdf::Document::load_mem(&bytes).unwrap();
        let info_id = pdf.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = pdf.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Worksheet");
        assert!(info.get(b"CreationDate").is_err());
    }

    #[test]
    fn output_without_timestamp_is_reproducible() {
        let renderer = LopdfRenderer::new().with_creation_date(false);
        let doc = sample_document();
        assert_eq!(renderer.render(&doc).unwrap(), renderer.render(&doc).unwrap());
    }
}
