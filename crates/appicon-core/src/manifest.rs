//! Static catalog of every icon the generator produces.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Largest pixel size any catalog entry may request.
pub const MAX_PIXEL_SIZE: u32 = 1024;

/// Target platform of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Macos,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Android, Platform::Ios, Platform::Macos];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Macos => "macos",
        }
    }

    /// Catalog entries for this platform, in ascending pixel size.
    pub fn entries(self) -> &'static [SizeEntry] {
        match self {
            Platform::Android => &CATALOG[0..5],
            Platform::Ios => &CATALOG[5..19],
            Platform::Macos => &CATALOG[19..26],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    /// Accepts "android", "ios" / "iphone", "macos" / "mac" / "osx".
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" | "iphone" => Ok(Platform::Ios),
            "macos" | "mac" | "osx" => Ok(Platform::Macos),
            _ => Err(format!("unknown platform '{}'", name)),
        }
    }
}

/// One required output icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeEntry {
    pub platform: Platform,
    /// Logical name, unique within the platform (e.g. "xhdpi", "Icon-60")
    pub name: &'static str,
    /// Width and height of the square output
    pub pixel_size: u32,
    /// Relative path of the icon inside the archive
    pub archive_path: &'static str,
}

impl SizeEntry {
    /// Key of this entry in an [`IconSet`](crate::IconSet), e.g. "ios-60".
    pub fn key(&self) -> String {
        format!("{}-{}", self.platform, self.pixel_size)
    }
}

const fn entry(
    platform: Platform,
    name: &'static str,
    pixel_size: u32,
    archive_path: &'static str,
) -> SizeEntry {
    SizeEntry {
        platform,
        name,
        pixel_size,
        archive_path,
    }
}

use Platform::{Android, Ios, Macos};

/// Every icon to generate, ordered by platform then ascending size.
pub static CATALOG: [SizeEntry; 26] = [
    entry(Android, "mdpi", 48, "mipmap-mdpi/icon-48.png"),
    entry(Android, "hdpi", 72, "mipmap-hdpi/icon-72.png"),
    entry(Android, "xhdpi", 96, "mipmap-xhdpi/icon-96.png"),
    entry(Android, "xxhdpi", 144, "mipmap-xxhdpi/icon-144.png"),
    entry(Android, "xxxhdpi", 192, "mipmap-xxxhdpi/icon-192.png"),
    entry(Ios, "Icon-20", 20, "Icon-20.png"),
    entry(Ios, "Icon-29", 29, "Icon-29.png"),
    entry(Ios, "Icon-40", 40, "Icon-40.png"),
    entry(Ios, "Icon-58", 58, "Icon-58.png"),
    entry(Ios, "Icon-60", 60, "Icon-60.png"),
    entry(Ios, "Icon-76", 76, "Icon-76.png"),
    entry(Ios, "Icon-80", 80, "Icon-80.png"),
    entry(Ios, "Icon-87", 87, "Icon-87.png"),
    entry(Ios, "Icon-120", 120, "Icon-120.png"),
    entry(Ios, "Icon-152", 152, "Icon-152.png"),
    entry(Ios, "Icon-167", 167, "Icon-167.png"),
    entry(Ios, "Icon-180", 180, "Icon-180.png"),
    entry(Ios, "Icon-512", 512, "Icon-512.png"),
    entry(Ios, "Icon-1024", 1024, "Icon-1024.png"),
    entry(Macos, "icon_16x16", 16, "icon_16x16.png"),
    entry(Macos, "icon_32x32", 32, "icon_32x32.png"),
    entry(Macos, "icon_64x64", 64, "icon_64x64.png"),
    entry(Macos, "icon_128x128", 128, "icon_128x128.png"),
    entry(Macos, "icon_256x256", 256, "icon_256x256.png"),
    entry(Macos, "icon_512x512", 512, "icon_512x512.png"),
    entry(Macos, "icon_1024x1024", 1024, "icon_1024x1024.png"),
];

/// Serialize the catalog (or one platform's slice of it) as pretty JSON.
pub fn catalog_json(platform: Option<Platform>) -> serde_json::Result<String> {
    let entries = match platform {
        Some(p) => p.entries(),
        None => &CATALOG[..],
    };
    serde_json::to_string_pretty(entries)
}
