#![allow(dead_code)]

use leafprint::{LeafprintConfig, Pipeline, PipelineError};
use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    fn operations(&self, page: u32) -> Vec<lopdf::content::Operation> {
        let pages = self.doc.get_pages();
        let Some(page_id) = pages.get(&page) else {
            return Vec::new();
        };
        self.doc
            .get_page_content(*page_id)
            .ok()
            .and_then(|raw| Content::decode(&raw).ok())
            .map(|content| content.operations)
            .unwrap_or_default()
    }

    /// The `Tj` strings of a 1-based page, in drawing order.
    pub fn page_strings(&self, page: u32) -> Vec<String> {
        self.operations(page)
            .into_iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .collect()
    }

    /// Font resource names selected with `Tf` on a page.
    pub fn page_fonts(&self, page: u32) -> Vec<String> {
        self.operations(page)
            .into_iter()
            .filter(|op| op.operator == "Tf")
            .filter_map(|op| match op.operands.first() {
                Some(Object::Name(name)) => Some(String::from_utf8_lossy(name).into_owned()),
                _ => None,
            })
            .collect()
    }

    /// All visible text with runs of whitespace collapsed.
    pub fn text(&self) -> String {
        let mut words = Vec::new();
        for page in 1..=self.page_count() as u32 {
            for s in self.page_strings(page) {
                words.extend(s.split_whitespace().map(str::to_string));
            }
        }
        words.join(" ")
    }
}

pub fn generate_with(config: LeafprintConfig, content: &str) -> Result<GeneratedPdf, PipelineError> {
    let pipeline = Pipeline::new(config)?;
    let pdf = pipeline.generate(content)?;
    GeneratedPdf::from_bytes(pdf.bytes).map_err(|e| PipelineError::Config(e.to_string()))
}

pub fn generate(content: &str) -> Result<GeneratedPdf, PipelineError> {
    generate_with(LeafprintConfig::default(), content)
}

/// `count` words of plain prose without any markup.
pub fn plain_words(count: usize) -> String {
    const WORDS: [&str; 8] = ["forests", "absorb", "carbon", "while", "oceans", "store", "heat", "slowly"];
    (0..count).map(|i| WORDS[i % WORDS.len()]).collect::<Vec<_>>().join(" ")
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $expected:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $expected,
            "expected {} pages, found {}",
            $expected,
            $pdf.page_count()
        );
    };
}

#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $needle:expr) => {
        let text = $pdf.text();
        assert!(text.contains($needle), "PDF text does not contain {:?}:\n{}", $needle, text);
    };
}
