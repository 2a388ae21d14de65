use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Resampling filter used when scaling the source image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResizeFilter {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "nearest" => Ok(ResizeFilter::Nearest),
            "triangle" | "bilinear" => Ok(ResizeFilter::Triangle),
            "catmullrom" | "bicubic" => Ok(ResizeFilter::CatmullRom),
            "gaussian" => Ok(ResizeFilter::Gaussian),
            "lanczos3" | "lanczos" => Ok(ResizeFilter::Lanczos3),
            _ => Err(format!("unknown resize filter '{}'", name)),
        }
    }
}

/// How icons are stored inside the archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveCompression {
    #[default]
    Deflated,
    Stored,
}

impl ArchiveCompression {
    pub fn method(self) -> zip::CompressionMethod {
        match self {
            ArchiveCompression::Deflated => zip::CompressionMethod::Deflated,
            ArchiveCompression::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// Tunables for a [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub filter: ResizeFilter,
    /// Resize catalog entries on the rayon thread pool
    pub parallel: bool,
    pub compression: ArchiveCompression,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            filter: ResizeFilter::default(),
            parallel: true,
            compression: ArchiveCompression::default(),
        }
    }
}

impl PipelineOptions {
    pub fn load(path: &Path) -> io::Result<PipelineOptions> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults() {
        let options = PipelineOptions::default();
        assert_eq!(options.filter, ResizeFilter::Lanczos3);
        assert!(options.parallel);
        assert_eq!(options.compression, ArchiveCompression::Deflated);
    }

    #[test]
    fn roundtrip_through_file() {
        let options = PipelineOptions {
            filter: ResizeFilter::CatmullRom,
            parallel: false,
            compression: ArchiveCompression::Stored,
        };

        let temp_file = NamedTempFile::new().unwrap();
        options.save(temp_file.path()).unwrap();

        let loaded = PipelineOptions::load(temp_file.path()).unwrap();
        assert_eq!(options, loaded);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), r#"{ "filter": "nearest" }"#).unwrap();

        let options = PipelineOptions::load(temp_file.path()).unwrap();
        assert_eq!(options.filter, ResizeFilter::Nearest);
        assert!(options.parallel);
        assert_eq!(options.compression, ArchiveCompression::Deflated);
    }

    #[test]
    fn save_writes_lowercase_names() {
        let temp_file = NamedTempFile::new().unwrap();
        PipelineOptions::default().save(temp_file.path()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"filter\": \"lanczos3\""));
        assert!(content.contains("\"compression\": \"deflated\""));
    }

    #[test]
    fn load_malformed_json_returns_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "not valid json").unwrap();

        let err = PipelineOptions::load(temp_file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn parse_filter_names() {
        assert_eq!("Lanczos".parse::<ResizeFilter>(), Ok(ResizeFilter::Lanczos3));
        assert_eq!("catmullrom".parse::<ResizeFilter>(), Ok(ResizeFilter::CatmullRom));
        assert_eq!("bilinear".parse::<ResizeFilter>(), Ok(ResizeFilter::Triangle));
        assert!("sinc".parse::<ResizeFilter>().is_err());
    }

    #[test]
    fn load_missing_file_returns_error() {
        assert!(PipelineOptions::load(Path::new("/nonexistent/options.json")).is_err());
    }
}
