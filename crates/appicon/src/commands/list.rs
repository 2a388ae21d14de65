use appicon_core::manifest::{self, CATALOG, Platform};

/// Render the catalog, optionally limited to one platform.
pub fn render(platform: Option<Platform>, json: bool) -> Result<String, String> {
    if json {
        return manifest::catalog_json(platform).map_err(|e| format!("Failed to serialize catalog: {}", e));
    }

    let entries = match platform {
        Some(p) => p.entries(),
        None => &CATALOG[..],
    };

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{:<8} {:<16} {:>5}px  {}\n",
            entry.platform, entry.name, entry.pixel_size, entry.archive_path
        ));
    }
    Ok(out)
}
