//! Page generation: markdown files + an HTML template → HTML files.

pub mod assets;

pub use assets::copy_static;

use crate::{error::MarkdownError, parsing};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Path {0} is not inside the content directory")]
    OutsideContentDir(PathBuf),
    #[error("Document {path} rejected")]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
}

/// Fills `template` with the rendered `markdown` and its title.
///
/// Root-relative `href="/` and `src="/` references in the result are rebased
/// onto `base_path`.
pub fn render_page(
    markdown: &str,
    template: &str,
    base_path: &str,
) -> Result<String, MarkdownError> {
    let content = parsing::markdown_to_html(markdown)?;
    let title = parsing::extract_title(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"));
    Ok(page)
}

/// Read a file, reporting a missing file as [`SiteError::NotFound`]
pub fn read_file(path: &Path) -> Result<String, SiteError> {
    if !path.exists() {
        return Err(SiteError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(SiteError::Io)
}

/// Renders one markdown file into `dest_path`, creating parent directories.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = read_file(from_path)?;
    let template = read_file(template_path)?;
    let page =
        render_page(&markdown, &template, base_path).map_err(|source| SiteError::Markdown {
            path: from_path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(SiteError::Io)?;
    }
    fs::write(dest_path, page).map_err(SiteError::Io)
}

/// Renders every `.md` file under `content_dir` to the same relative path
/// under `dest_dir` with an `.html` extension.
///
/// Returns the written pages, sorted.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut written = Vec::new();

    for source in scan_markdown_files(content_dir)? {
        let relative = relative_to(&source, content_dir)?;
        let dest = relative.with_extension("html").to_path(dest_dir);
        generate_page(&source, template_path, &dest, base_path)?;
        written.push(dest);
    }

    Ok(written)
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, SiteError> {
    if !root.is_dir() {
        return Err(SiteError::NotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(SiteError::Io)?;

    for entry in entries {
        let entry = entry.map_err(SiteError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        } else {
            log::debug!("Skipping non-markdown file {}", path.display());
        }
    }

    Ok(())
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, SiteError> {
    path.strip_prefix(root)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| SiteError::OutsideContentDir(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_site_dir};
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str =
        r#"<html><head><title>{{ Title }}</title><link href="/index.css"></head><body>{{ Content }}</body></html>"#;

    #[test]
    fn render_page_fills_placeholders() {
        let page = render_page("# Hello\n\nWorld", TEMPLATE, "/").unwrap();
        assert_eq!(
            page,
            r#"<html><head><title>Hello</title><link href="/index.css"></head><body><div><h1>Hello</h1><p>World</p></div></body></html>"#
        );
    }

    #[test]
    fn render_page_rebases_root_relative_links() {
        let page = render_page(
            "# T\n\n[home](/) ![logo](/images/logo.png)",
            TEMPLATE,
            "/blog/",
        )
        .unwrap();
        assert!(page.contains(r#"<link href="/blog/index.css">"#));
        assert!(page.contains(r#"<a href="/blog/">home</a>"#));
        assert!(page.contains(r#"<img src="/blog/images/logo.png" alt="logo">"#));
    }

    #[test]
    fn render_page_requires_title() {
        assert_eq!(
            render_page("no heading here", TEMPLATE, "/"),
            Err(MarkdownError::MissingTitle)
        );
    }

    #[test]
    fn generate_page_writes_file() {
        let site = create_test_site_dir();
        let from = create_test_file(&site, "content/index.md", "# Home\n\nWelcome");
        let template = create_test_file(&site, "template.html", TEMPLATE);
        let dest = site.path().join("public/nested/index.html");

        generate_page(&from, &template, &dest, "/").unwrap();

        let written = fs::read_to_string(&dest).unwrap();
        assert!(written.contains("<title>Home</title>"));
        assert!(written.contains("<p>Welcome</p>"));
    }

    #[test]
    fn generate_page_reports_offending_document() {
        let site = create_test_site_dir();
        let from = create_test_file(&site, "bad.md", "# Bad\n\nunclosed `code");
        let template = create_test_file(&site, "template.html", TEMPLATE);
        let dest = site.path().join("bad.html");

        let err = generate_page(&from, &template, &dest, "/").unwrap_err();
        match err {
            SiteError::Markdown { path, source } => {
                assert_eq!(path, from);
                assert_eq!(source, MarkdownError::UnbalancedDelimiter { delimiter: "`" });
            }
            other => panic!("expected Markdown error, got {other:?}"),
        }
        assert!(!dest.exists());
    }

    #[test]
    fn markdown_error_is_reported_as_source_only() {
        let err = SiteError::Markdown {
            path: PathBuf::from("bad.md"),
            source: MarkdownError::MissingTitle,
        };
        assert_eq!(err.to_string(), "Document bad.md rejected");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source, Some(MarkdownError::MissingTitle.to_string()));
    }

    #[test]
    fn generate_page_missing_template() {
        let site = create_test_site_dir();
        let from = create_test_file(&site, "index.md", "# Home");
        let missing = site.path().join("missing.html");

        let result = generate_page(&from, &missing, &site.path().join("out.html"), "/");
        assert!(matches!(result, Err(SiteError::NotFound(p)) if p == missing));
    }

    #[test]
    fn generate_pages_mirrors_tree() {
        let site = create_test_site_dir();
        create_test_file(&site, "content/index.md", "# Index");
        create_test_file(&site, "content/blog/post.md", "# Post\n\n**bold**");
        create_test_file(&site, "content/blog/photo.png", "not markdown");
        let template = create_test_file(&site, "template.html", TEMPLATE);
        let public = site.path().join("public");

        let written =
            generate_pages_recursive(&site.path().join("content"), &template, &public, "/")
                .unwrap();

        assert_eq!(
            written,
            vec![public.join("blog/post.html"), public.join("index.html")]
        );
        let post = fs::read_to_string(public.join("blog/post.html")).unwrap();
        assert!(post.contains("<p><b>bold</b></p>"));
        assert!(!public.join("blog/photo.png").exists());
    }

    #[test]
    fn scan_missing_directory() {
        let result = scan_markdown_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(SiteError::NotFound(_))));
    }
}
