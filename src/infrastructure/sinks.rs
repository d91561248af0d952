//! Destinations for exported journal content

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Hands generated bytes to the user as a named file
pub trait FileSaver {
    fn save(&self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<()>;
}

/// Opens markup in a printable form
pub trait PrintRenderer {
    fn render_printable(&self, html: &str, title: &str) -> Result<()>;
}

/// Writes saved files into a directory, creating it when needed
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: PathBuf) -> Self {
        DirectorySaver { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DirectorySaver {
    fn save(&self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        tracing::info!("Saved {} ({}) to {}", filename, mime_type, path.display());
        Ok(())
    }
}

/// Writes printable documents as `<title-slug>.html` into a directory
#[derive(Debug, Clone)]
pub struct HtmlFileRenderer {
    dir: PathBuf,
}

impl HtmlFileRenderer {
    pub fn new(dir: PathBuf) -> Self {
        HtmlFileRenderer { dir }
    }

    /// File the document titled `title` is written to
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(format!("{}.html", slugify(title)))
    }
}

impl PrintRenderer for HtmlFileRenderer {
    fn render_printable(&self, html: &str, title: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(title);
        fs::write(&path, html)?;
        tracing::info!("Printable document '{}' written to {}", title, path.display());
        Ok(())
    }
}

fn slugify(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "document".to_string()
    } else {
        slug
    }
}
