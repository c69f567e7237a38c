//! Corpus builder for a directory of HTML pages.
//!
//! Every `*.html` file in the directory becomes a page. A page links to the
//! `href="..."` targets of its `<a ...>` tags that name another file of the
//! same directory.

use std::fs;
use std::path::Path;

use crate::rank::corpus::Corpus;
use crate::rank::RankError;

/// Build a [`Corpus`] from the HTML files of `dir` (not recursive).
///
/// # Errors
/// [`RankError::Io`] if the directory or one of its pages cannot be read.
pub fn crawl(dir: impl AsRef<Path>) -> Result<Corpus, RankError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| RankError::Io {
        operation: "read corpus directory",
        path: dir.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RankError::Io {
            operation: "read corpus directory",
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) if name.ends_with(".html") && path.is_file() => name.to_string(),
            _ => continue,
        };

        let contents = fs::read_to_string(&path).map_err(|source| RankError::Io {
            operation: "read page",
            path: path.clone(),
            source,
        })?;
        pages.push((name, extract_links(&contents)));
    }

    Ok(Corpus::from_links(pages))
}

/// Targets of `href="..."` attributes on `<a>` tags, in document order.
///
/// The tag name must be followed by whitespace, and the attribute must use
/// double quotes. Matching is case-sensitive.
pub fn extract_links(html: &str) -> Vec<String> {
    const TAG: &str = "<a";
    const ATTR: &str = "href=\"";

    let mut links = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find(TAG) {
        rest = &rest[start + TAG.len()..];
        if !rest.starts_with(|c: char| c.is_whitespace()) {
            continue;
        }

        let tag_end = rest.find('>').unwrap_or(rest.len());
        let Some(attr) = rest[..tag_end].find(ATTR) else {
            rest = &rest[tag_end..];
            continue;
        };

        let value = &rest[attr + ATTR.len()..];
        match value.find('"') {
            Some(end) => {
                links.push(value[..end].to_string());
                rest = &value[end + 1..];
            }
            None => break,
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_extract_links() {
        let html = r#"
            <html><body>
            <a href="2.html">two</a>
            <a class="nav" href="3.html">three</a>
            <abbr href="nope.html">x</abbr>
            <a>no href</a>
            <a name='x'>n</a> <a href="4.html">four</a>
            </body></html>
        "#;
        assert_eq!(extract_links(html), vec!["2.html", "3.html", "4.html"]);
    }

    #[test]
    fn test_extract_links_requires_href_inside_tag() {
        assert!(extract_links(r#"<a id="x">text href="1.html""#).is_empty());
        assert!(extract_links(r#"<a href="unterminated"#).is_empty());
        assert!(extract_links("<ahref=\"1.html\">").is_empty());
    }

    #[test]
    fn test_crawl_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("1.html"),
            r#"<a href="2.html">2</a><a href="1.html">self</a><a href="https://x.org">ext</a>"#,
        )
        .unwrap();
        fs::write(dir.path().join("2.html"), r#"<a href="1.html">1</a> <a href="3.html">3</a>"#).unwrap();
        fs::write(dir.path().join("3.html"), "no links").unwrap();
        fs::write(dir.path().join("notes.txt"), r#"<a href="1.html">"#).unwrap();

        let corpus = crawl(dir.path()).unwrap();

        assert_eq!(corpus.names(), &["1.html", "2.html", "3.html"]);
        assert_eq!(corpus.links("1.html"), Some(vec!["2.html"]));
        assert_eq!(corpus.links("2.html"), Some(vec!["1.html", "3.html"]));
        assert_eq!(corpus.links("3.html"), Some(vec![]));
    }

    #[test]
    fn test_crawl_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let err = crawl(&missing).unwrap_err();
        assert!(matches!(err, RankError::Io { .. }));
        assert!(err.to_string().contains("absent"));
    }
}
