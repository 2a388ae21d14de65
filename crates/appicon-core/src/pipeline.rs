//! Orchestration of one generation run and its packaging.

use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::archive::ArchiveBuilder;
use crate::config::PipelineOptions;
use crate::error::IconError;
use crate::manifest::{CATALOG, SizeEntry};
use crate::raster::{ImageRasterizer, Rasterizer};
use crate::source::{RECOMMENDED_MIN_SIZE, SourceImage};

/// One generated icon and the catalog entry it was made for.
#[derive(Debug, Clone)]
pub struct Icon {
    pub entry: &'static SizeEntry,
    pub png: Vec<u8>,
}

/// A labelled icon shown when previewing a generated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSlot {
    pub label: &'static str,
    pub key: &'static str,
}

/// Representative icons for a quick visual check, in display order.
pub static PREVIEW: [PreviewSlot; 6] = [
    PreviewSlot { label: "Android MDPI", key: "android-48" },
    PreviewSlot { label: "Android XHDPI", key: "android-96" },
    PreviewSlot { label: "iOS App Store", key: "ios-1024" },
    PreviewSlot { label: "iOS iPhone", key: "ios-60" },
    PreviewSlot { label: "macOS", key: "macos-512" },
    PreviewSlot { label: "macOS Small", key: "macos-32" },
];

/// All icons produced by one successful run, keyed by [`SizeEntry::key`].
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: BTreeMap<String, Icon>,
}

impl IconSet {
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Icon> {
        self.icons.get(key)
    }

    /// PNG bytes stored under `key`.
    pub fn png(&self, key: &str) -> Option<&[u8]> {
        self.icons.get(key).map(|icon| icon.png.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Icon)> {
        self.icons.iter().map(|(key, icon)| (key.as_str(), icon))
    }

    /// The [`PREVIEW`] slots present in this set.
    pub fn preview(&self) -> impl Iterator<Item = (&'static PreviewSlot, &Icon)> {
        PREVIEW
            .iter()
            .filter_map(|slot| self.icons.get(slot.key).map(|icon| (slot, icon)))
    }

    fn from_icons(icons: Vec<Icon>) -> Self {
        IconSet {
            icons: icons
                .into_iter()
                .map(|icon| (icon.entry.key(), icon))
                .collect(),
        }
    }
}

/// Progress event emitted during a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Source bytes are being decoded
    Decoding,
    /// Decoding finished; resizing of `total` entries begins
    Generating { total: usize },
    /// One entry was resized. Order is unspecified for parallel runs.
    Generated { key: String, size: u32 },
    /// Every entry succeeded
    Ready { count: usize },
    /// The run was aborted; no icon set is returned
    Failed { message: String },
}

/// Drives the catalog through a [`Rasterizer`] and packages the results.
pub struct Pipeline<R = ImageRasterizer> {
    rasterizer: R,
    archiver: ArchiveBuilder,
    parallel: bool,
}

impl Pipeline {
    pub fn new(options: &PipelineOptions) -> Self {
        Self::with_rasterizer(ImageRasterizer::new(options.filter), options)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&PipelineOptions::default())
    }
}

impl<R: Rasterizer> Pipeline<R> {
    pub fn with_rasterizer(rasterizer: R, options: &PipelineOptions) -> Self {
        Pipeline {
            rasterizer,
            archiver: ArchiveBuilder::new(options.compression),
            parallel: options.parallel,
        }
    }

    /// Decode `bytes` once and resize it to every catalog entry.
    ///
    /// All-or-nothing: the first failing entry fails the whole run.
    pub fn generate(&self, bytes: &[u8]) -> Result<IconSet, IconError> {
        self.generate_with_progress(bytes, |_| {})
    }

    /// Like [`generate`](Self::generate), reporting progress to `on_progress`.
    ///
    /// The callback may be invoked from worker threads.
    pub fn generate_with_progress<F>(&self, bytes: &[u8], on_progress: F) -> Result<IconSet, IconError>
    where
        F: Fn(ProgressEvent) + Sync,
    {
        on_progress(ProgressEvent::Decoding);

        let source = match SourceImage::decode(bytes) {
            Ok(source) => source,
            Err(e) => {
                warn!("decode failed: {}", e);
                on_progress(ProgressEvent::Failed {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };
        info!("decoded source image {}x{}", source.width(), source.height());

        self.render_catalog(&source, &on_progress)
    }

    /// Resize an already decoded source to every catalog entry.
    pub fn generate_from(&self, source: &SourceImage) -> Result<IconSet, IconError> {
        self.render_catalog(source, &|_: ProgressEvent| {})
    }

    /// Log quality warnings for `source`. Generation never depends on them.
    fn warn_advisory(source: &SourceImage) {
        let advisory = source.advisory();
        if advisory.is_ok() {
            return;
        }
        if !advisory.is_square {
            warn!(
                "{}x{} is not square; icons will be stretched. Use a 1:1 image for best results",
                source.width(),
                source.height()
            );
        }
        if !advisory.is_high_res {
            warn!(
                "{}x{} is low resolution; consider at least {}x{}",
                source.width(),
                source.height(),
                RECOMMENDED_MIN_SIZE,
                RECOMMENDED_MIN_SIZE
            );
        }
    }

    /// Package every icon at its entry's archive path.
    pub fn package(&self, icons: &IconSet) -> Result<Vec<u8>, IconError> {
        if icons.is_empty() {
            return Err(IconError::EmptySet);
        }

        self.archiver.build(
            icons
                .iter()
                .map(|(_, icon)| (icon.entry.archive_path, icon.png.as_slice())),
        )
    }

    fn render_catalog<F>(&self, source: &SourceImage, on_progress: &F) -> Result<IconSet, IconError>
    where
        F: Fn(ProgressEvent) + Sync,
    {
        Self::warn_advisory(source);
        on_progress(ProgressEvent::Generating {
            total: CATALOG.len(),
        });

        let render = |entry: &'static SizeEntry| -> Result<Icon, IconError> {
            let png = self.rasterizer.resize(source, entry.pixel_size)?;
            debug!("rendered {} ({} bytes)", entry.key(), png.len());
            on_progress(ProgressEvent::Generated {
                key: entry.key(),
                size: entry.pixel_size,
            });
            Ok(Icon { entry, png })
        };

        // Collecting into a Result stops at the first error.
        let rendered: Result<Vec<Icon>, IconError> = if self.parallel {
            CATALOG.par_iter().map(render).collect()
        } else {
            CATALOG.iter().map(render).collect()
        };

        match rendered {
            Ok(icons) => {
                let set = IconSet::from_icons(icons);
                info!("generated {} icons", set.len());
                on_progress(ProgressEvent::Ready { count: set.len() });
                Ok(set)
            }
            Err(e) => {
                warn!("generation aborted: {}", e);
                on_progress(ProgressEvent::Failed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
