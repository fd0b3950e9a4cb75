//! # reportcard-core
//!
//! Platform-agnostic report-card painting.
//!
//! This crate turns a decoded [`Template`] and a [`RenderData`] bundle into
//! an ordered stream of calls on a [`Surface`]:
//! - **scaler**: maps authoring units onto the output page
//! - **fields**: resolves dynamic field symbols against the record
//! - **primitives**: shapes, text and images
//! - **table**: the grid renderer for subject, affective and psychomotor tables
//! - **orchestrator**: walks the template in paint order
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**:
//! - No filesystem or network access
//! - No async runtime (`tokio`)
//!
//! Images arrive already decoded in an [`ImageCache`]; anything missing from
//! the cache is painted as an error box.

pub use reportcard_record as record;
pub use reportcard_render_core as render;
pub use reportcard_template as template;

pub mod context;
pub mod fields;
pub mod images;
pub mod orchestrator;
pub mod primitives;
pub mod scaler;
pub mod settings;
pub mod table;

pub use context::RenderContext;
pub use images::{CachedImage, ImageCache};
pub use orchestrator::{RenderSummary, render};
pub use scaler::Scaler;
pub use settings::LayoutSettings;

pub use reportcard_record::RenderData;
pub use reportcard_render_core::{RecordingSurface, Surface};
pub use reportcard_template::Template;
