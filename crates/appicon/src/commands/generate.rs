use appicon_core::{ArchiveCompression, Pipeline, PipelineOptions, ProgressEvent, ResizeFilter};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Command-line overrides applied on top of a config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub filter: Option<ResizeFilter>,
    pub sequential: bool,
    pub store: bool,
}

/// Load options from `config` (or defaults) and apply `overrides`.
pub fn resolve_options(config: Option<&Path>, overrides: &Overrides) -> Result<PipelineOptions, String> {
    let mut options = match config {
        Some(path) => PipelineOptions::load(path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        None => PipelineOptions::default(),
    };

    if let Some(filter) = overrides.filter {
        options.filter = filter;
    }
    if overrides.sequential {
        options.parallel = false;
    }
    if overrides.store {
        options.compression = ArchiveCompression::Stored;
    }

    Ok(options)
}

/// Generate every icon from `input` and write the archive to `output`.
///
/// Returns the number of icons packaged.
pub fn run(input: &Path, output: &Path, options: &PipelineOptions) -> Result<usize, String> {
    let bytes = super::read_source(input)?;
    let pipeline = Pipeline::new(options);

    let done = AtomicUsize::new(0);
    let icons = pipeline
        .generate_with_progress(&bytes, |event| match event {
            ProgressEvent::Decoding => println!("Decoding {}...", input.display()),
            ProgressEvent::Generating { total } => println!("Generating {} icons...", total),
            ProgressEvent::Generated { key, size } => {
                let index = done.fetch_add(1, Ordering::Relaxed);
                println!("  [{}] {} ({}x{})", index + 1, key, size, size);
            }
            ProgressEvent::Ready { .. } | ProgressEvent::Failed { .. } => {}
        })
        .map_err(|e| e.to_string())?;

    let archive = pipeline.package(&icons).map_err(|e| e.to_string())?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    fs::write(output, &archive)
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;

    println!("Created {} ({} icons)", output.display(), icons.len());
    Ok(icons.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::fs::File;
    use tempfile::tempdir;
    use zip::ZipArchive;

    fn write_png(path: &Path, width: u32, height: u32) {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 99, 71, 255]));
        DynamicImage::ImageRgba8(image)
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    fn fast_options() -> PipelineOptions {
        PipelineOptions {
            filter: ResizeFilter::Nearest,
            ..PipelineOptions::default()
        }
    }

    #[test]
    fn writes_archive_with_every_icon() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("logo.png");
        let output = dir.path().join("out").join("app-icons.zip");
        write_png(&input, 64, 64);

        let count = run(&input, &output, &fast_options()).unwrap();
        assert_eq!(count, 26);

        let zip = ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert_eq!(zip.len(), 26);
        assert!(zip.file_names().any(|n| n == "mipmap-xxxhdpi/icon-192.png"));
    }

    #[test]
    fn non_square_input_still_succeeds() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("wide.png");
        let output = dir.path().join("icons.zip");
        write_png(&input, 30, 80);

        assert_eq!(run(&input, &output, &fast_options()).unwrap(), 26);
    }

    #[test]
    fn non_image_input_fails_without_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("notes.png");
        let output = dir.path().join("icons.zip");
        fs::write(&input, b"plain text").unwrap();

        let err = run(&input, &output, &fast_options()).unwrap_err();
        assert!(err.contains("decode"), "{}", err);
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_fails() {
        let dir = tempdir().unwrap();
        let err = run(
            &dir.path().join("missing.png"),
            &dir.path().join("icons.zip"),
            &fast_options(),
        )
        .unwrap_err();
        assert!(err.starts_with("Failed to read"));
    }

    #[test]
    fn overrides_win_over_config_file() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("appicon.json");
        fs::write(&config, r#"{ "filter": "gaussian", "parallel": true }"#).unwrap();

        let overrides = Overrides {
            filter: Some(ResizeFilter::Nearest),
            sequential: true,
            store: true,
        };
        let options = resolve_options(Some(&config), &overrides).unwrap();

        assert_eq!(options.filter, ResizeFilter::Nearest);
        assert!(!options.parallel);
        assert_eq!(options.compression, ArchiveCompression::Stored);
    }

    #[test]
    fn config_values_kept_without_overrides() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("appicon.json");
        fs::write(&config, r#"{ "filter": "gaussian" }"#).unwrap();

        let options = resolve_options(Some(&config), &Overrides::default()).unwrap();
        assert_eq!(options.filter, ResizeFilter::Gaussian);
        assert!(options.parallel);
    }

    #[test]
    fn missing_config_is_an_error() {
        let result = resolve_options(Some(Path::new("/nonexistent/appicon.json")), &Overrides::default());
        assert!(result.is_err());
    }
}
