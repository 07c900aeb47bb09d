use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::content::frontmatter::{parse_frontmatter, split_frontmatter};
use crate::content::schema::Entry;

const EXTENSIONS: &[&str] = &["md", "mdx"];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{path}: document does not start with a `+++` frontmatter block")]
    MissingFrontmatter { path: PathBuf },

    #[error("{path}: frontmatter does not match the collection schema: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads every `*.md` / `*.mdx` document under `root`, validating each
/// frontmatter block against `T`. A missing root yields an empty collection.
pub fn load_collection<T: DeserializeOwned>(root: &Path) -> Result<Vec<Entry<T>>, ContentError> {
    if !root.is_dir() {
        warn!("Collection directory {} not found; treating as empty", root.display());
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for item in WalkDir::new(root).sort_by_file_name() {
        let item = item.map_err(|source| ContentError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        let path = item.path();
        if !item.file_type().is_file() || !has_content_extension(path) {
            continue;
        }

        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let id = entry_id(root, path);
        debug!("Loading {id} from {}", path.display());
        entries.push(parse_entry(id, &source, path)?);
    }

    Ok(entries)
}

pub fn parse_entry<T: DeserializeOwned>(
    id: String,
    source: &str,
    path: &Path,
) -> Result<Entry<T>, ContentError> {
    let (frontmatter, body) =
        split_frontmatter(source).ok_or_else(|| ContentError::MissingFrontmatter {
            path: path.to_path_buf(),
        })?;
    let data = parse_frontmatter(frontmatter).map_err(|source| ContentError::Schema {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Entry {
        slug: id.clone(),
        id,
        data,
        body: body.trim_start_matches(['\r', '\n']).to_string(),
    })
}

fn has_content_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// `blog/2024/hello.md` under `blog/` becomes `2024/hello`.
fn entry_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::content::schema::{BlogPostData, TestimonialData};

    const POST: &str = "+++\ntitle = \"Hello\"\ndescription = \"d\"\npubDate = 2024-01-02\n\
                        +++\n\nBody words here.\n";

    #[test]
    fn test_loads_nested_markdown_and_mdx() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("2024")).unwrap();
        fs::write(dir.path().join("first.md"), POST).unwrap();
        fs::write(dir.path().join("2024/second.mdx"), POST).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let entries: Vec<Entry<BlogPostData>> = load_collection(dir.path()).unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2024/second", "first"]);
        assert_eq!(entries[1].slug, "first");
        assert_eq!(entries[1].body, "Body words here.\n");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let entries: Vec<Entry<TestimonialData>> =
            load_collection(Path::new("/nonexistent/testimonials")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_schema_failure_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = "+++\ntitle = \"x\"\n+++\nbody";
        fs::write(dir.path().join("broken.md"), broken).unwrap();
        let err = load_collection::<BlogPostData>(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Schema { .. }));
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn test_document_without_frontmatter() {
        let err = parse_entry::<BlogPostData>("x".into(), "# Just markdown", Path::new("x.md"))
            .unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontmatter { .. }));
    }
}
