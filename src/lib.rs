//! Turns climate-enhanced worksheet text into paginated PDF documents.
//!
//! ```no_run
//! use leafprint::{Pipeline, PipelineError};
//!
//! fn main() -> Result<(), PipelineError> {
//!     let pipeline = Pipeline::builder().with_title("Photosynthesis").build()?;
//!     let pdf = pipeline.generate("**Photosynthesis**\nPlants turn light into sugar.")?;
//!     pdf.write_to_file("worksheet.pdf")?;
//!     Ok(())
//! }
//! ```

pub mod enhance;
pub mod error;
pub mod pipeline;

pub use enhance::{EnhancementRequest, Enhancer, PassthroughEnhancer, build_prompt};
pub use error::PipelineError;
pub use pipeline::api::{GenerateRequest, GenerateResponse, handle_generate_json};
pub use pipeline::{LeafprintConfig, OutputConfig, Pipeline, PipelineBuilder, RenderedPdf, Stage};

pub use leafprint_layout::{FooterMode, LayoutConfig};
pub use leafprint_types::{Margins, PageSize};
