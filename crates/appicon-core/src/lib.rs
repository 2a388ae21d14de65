//! Generation and packaging of platform app icon sets.
//!
//! One decoded source image is resized to every entry of a fixed catalog
//! (Android, iOS, macOS) and the results can be bundled into a single ZIP.

pub mod archive;
pub mod config;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod raster;
pub mod source;

pub use archive::ArchiveBuilder;
pub use config::{ArchiveCompression, PipelineOptions, ResizeFilter};
pub use error::IconError;
pub use manifest::{CATALOG, Platform, SizeEntry};
pub use pipeline::{Icon, IconSet, PREVIEW, Pipeline, PreviewSlot, ProgressEvent};
pub use raster::{ImageRasterizer, Rasterizer};
pub use source::{Advisory, SourceImage};

/// Conventional file name for the packaged icon archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "app-icons.zip";
