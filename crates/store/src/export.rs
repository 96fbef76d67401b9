use anyhow::{anyhow, Context as _, Result};
use element::Element;
use std::fs;
use std::path::PathBuf;

/// Name of the export artifact.
pub const EXPORT_FILE_NAME: &str = "website.json";

/// Writes the element collection to `website.json` and returns the written
/// path.
///
/// The file holds the same JSON array shape as the saved store value. When
/// no directory is given, the platform download directory is used, falling
/// back to the home directory.
pub fn export_website(elements: &[Element], dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir,
        None => dirs::download_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow!("no download or home directory"))?,
    };

    let path = dir.join(EXPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(elements)?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("exported {} elements to {}", elements.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use element::Page;

    #[test]
    fn test_export_matches_collection() {
        let dir = tempfile::tempdir().unwrap();
        let page = Page::seed();

        let path = export_website(page.elements(), Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);

        let contents = fs::read_to_string(&path).unwrap();
        let exported: Vec<Element> = serde_json::from_str(&contents).unwrap();
        assert_eq!(exported, page.elements());

        // Export is a JSON array at the top level.
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_export_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = Page::seed();

        export_website(page.elements(), Some(dir.path().to_path_buf())).unwrap();
        page.remove(page.elements()[0].id);
        let path = export_website(page.elements(), Some(dir.path().to_path_buf())).unwrap();

        let exported: Vec<Element> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(exported.len(), 1);
    }
}
