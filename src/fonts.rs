//! Font catalog
//!
//! The list of font names the settings screen cycles through. It is built
//! once at startup from three sources, in this order:
//! 1. A fixed fallback list of faces every platform is expected to resolve
//! 2. Custom fonts declared in the parameters file
//! 3. Font files found directly inside the fonts directory
//!
//! Names are de-duplicated and the first occurrence wins. The catalog only
//! knows names and file names; loading the font data is the renderer's job.

use crate::config::CustomFontParam;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const FALLBACK_FONTS: [&str; 6] = [
    "GameFont",
    "Arial",
    "Courier New",
    "Georgia",
    "Times New Roman",
    "Verdana",
];

const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "woff", "woff2"];

/// A selectable font face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    pub name: String,
    /// File name under the fonts directory, `None` for system faces
    pub source_file: Option<String>,
}

impl FontDescriptor {
    pub fn system(name: &str) -> Self {
        FontDescriptor {
            name: name.to_string(),
            source_file: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FontCatalog {
    fonts: Vec<FontDescriptor>,
}

impl FontCatalog {
    /// Only the fallback faces
    pub fn fallback() -> Self {
        FontCatalog {
            fonts: FALLBACK_FONTS.iter().map(|name| FontDescriptor::system(name)).collect(),
        }
    }

    /// Build the catalog from custom declarations and a fonts directory
    ///
    /// An unreadable directory is logged and skipped.
    pub fn discover(fonts_dir: impl AsRef<Path>, custom: &[CustomFontParam]) -> Self {
        let mut catalog = Self::fallback();

        for font in custom {
            catalog.push(FontDescriptor {
                name: font.name.clone(),
                source_file: Some(font.file.clone()),
            });
        }

        match scan_font_files(fonts_dir.as_ref()) {
            Ok(found) => {
                debug!(count = found.len(), dir = %fonts_dir.as_ref().display(), "scanned fonts directory");
                for font in found {
                    catalog.push(font);
                }
            }
            Err(e) => {
                warn!(
                    dir = %fonts_dir.as_ref().display(),
                    error = %e,
                    "could not read fonts directory, using fallback fonts"
                );
            }
        }

        catalog
    }

    fn push(&mut self, font: FontDescriptor) {
        if font.name.trim().is_empty() || self.fonts.iter().any(|f| f.name == font.name) {
            return;
        }
        self.fonts.push(font);
    }

    pub fn fonts(&self) -> &[FontDescriptor] {
        &self.fonts
    }

    pub fn names(&self) -> Vec<String> {
        self.fonts.iter().map(|f| f.name.clone()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&FontDescriptor> {
        self.fonts.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Font files directly inside `dir`, sorted by name
fn scan_font_files(dir: &Path) -> Result<Vec<FontDescriptor>, walkdir::Error> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let is_font = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| FONT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if !is_font {
            continue;
        }

        if let (Some(stem), Some(file)) = (
            path.file_stem().and_then(|s| s.to_str()),
            path.file_name().and_then(|s| s.to_str()),
        ) {
            found.push(FontDescriptor {
                name: stem.to_string(),
                source_file: Some(file.to_string()),
            });
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_fallback_catalog() {
        let catalog = FontCatalog::fallback();
        assert_eq!(catalog.len(), FALLBACK_FONTS.len());
        assert_eq!(catalog.names()[0], "GameFont");
        assert!(catalog.fonts().iter().all(|f| f.source_file.is_none()));
    }

    #[test]
    fn test_discovers_font_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Pixel.ttf"), b"").unwrap();
        fs::write(dir.path().join("Alpha.OTF"), b"").unwrap();
        fs::write(dir.path().join("readme.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("nested.ttf")).unwrap();

        let catalog = FontCatalog::discover(dir.path(), &[]);
        let names = catalog.names();
        assert_eq!(names.len(), FALLBACK_FONTS.len() + 2);
        // Sorted after the fallback list
        assert_eq!(names[FALLBACK_FONTS.len()], "Alpha");
        assert_eq!(names[FALLBACK_FONTS.len() + 1], "Pixel");
        assert_eq!(
            catalog.find("Pixel").and_then(|f| f.source_file.as_deref()),
            Some("Pixel.ttf")
        );
    }

    #[test]
    fn test_custom_fonts_come_before_discovered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pixel.ttf"), b"").unwrap();

        let custom = vec![CustomFontParam {
            name: "Pixel Sans".to_string(),
            file: "pixel.ttf".to_string(),
        }];
        let catalog = FontCatalog::discover(dir.path(), &custom);
        let names = catalog.names();
        assert_eq!(names[FALLBACK_FONTS.len()], "Pixel Sans");
        assert_eq!(names[FALLBACK_FONTS.len() + 1], "pixel");
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Arial.ttf"), b"").unwrap();

        let catalog = FontCatalog::discover(dir.path(), &[]);
        assert_eq!(catalog.len(), FALLBACK_FONTS.len());
        assert!(catalog.find("Arial").unwrap().source_file.is_none());
    }

    #[test]
    fn test_unreadable_directory_degrades_to_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = FontCatalog::discover(dir.path().join("missing"), &[]);
        assert_eq!(catalog.names(), FontCatalog::fallback().names());
    }
}
