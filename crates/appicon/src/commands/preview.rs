use appicon_core::{Pipeline, PipelineOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Generate the icon set and write its preview subset into `output_dir`.
///
/// Returns the written files in display order.
pub fn run(input: &Path, output_dir: &Path, options: &PipelineOptions) -> Result<Vec<PathBuf>, String> {
    let bytes = super::read_source(input)?;
    let icons = Pipeline::new(options)
        .generate(&bytes)
        .map_err(|e| e.to_string())?;

    fs::create_dir_all(output_dir)
        .map_err(|e| format!("Failed to create {}: {}", output_dir.display(), e))?;

    let mut written = Vec::new();
    for (slot, icon) in icons.preview() {
        let path = output_dir.join(format!("{}.png", slot.key));
        fs::write(&path, &icon.png)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        println!("{:<14} {:>5}px  {}", slot.label, icon.entry.pixel_size, path.display());
        written.push(path);
    }

    Ok(written)
}
