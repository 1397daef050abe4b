//! Fetching and reshaping of published changelog entries.
//!
//! Entries are markdown documents with an optional YAML front-matter
//! header, published under a per-date URL. The body carries a few
//! site-specific tags (badges, contributor lists, raw `<p>` wrappers)
//! that are rewritten to plain markdown before rendering.

use regex_lite::{Captures, Regex};
use serde::Deserialize;

use crate::config::PanelConfig;
use crate::error::{PanelError, Result};

/// Front-matter header of a changelog document.
///
/// `title` is what makes a block usable as a header; the remaining
/// fields are optional extras.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Retrieves changelog markdown by URL.
pub trait ChangelogFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches changelog markdown over HTTPS.
pub struct HttpFetcher;

impl ChangelogFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = minreq::get(url)
            .with_header("User-Agent", "relnote")
            .with_timeout(10)
            .send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(PanelError::Http {
                url: url.to_string(),
                status: response.status_code,
            });
        }

        Ok(response.as_str()?.to_string())
    }
}

/// Parse the leading front-matter block, if any.
///
/// The document must start with a `---` line; the block runs to the
/// next `---` line. Anything that fails to decode as a front-matter
/// record counts as "no front matter" rather than an error.
pub fn parse_front_matter(md: &str) -> Option<FrontMatter> {
    if !md.starts_with("---") {
        return None;
    }

    let lines: Vec<&str> = md.lines().collect();
    let end = lines.iter().skip(1).position(|line| *line == "---")? + 1;
    let block = lines[1..end].join("\n");

    match serde_yaml::from_str(&block) {
        Ok(info) => Some(info),
        Err(e) => {
            eprintln!("Failed to parse changelog front-matter: {}. Ignoring it.", e);
            None
        }
    }
}

/// Rewrite the document body to plain markdown.
///
/// The order matters: the front-matter strip must run before the
/// paragraph unwrap (a front-matter excerpt may itself contain `<p>`
/// tags), and the leading-blank-line strip cleans up whatever the
/// earlier removals leave behind.
pub fn transform_body(md: &str) -> String {
    let front_matter = Regex::new(r"(?s)---.*?---").unwrap();
    let script = Regex::new(r"(?s)<script>.*?</script>").unwrap();
    let badge = Regex::new(r#"(?i)<Badge.*?text="(.*?)".*?/>"#).unwrap();
    let contributors = Regex::new(r#"(?i)<Contributors usernames="(.*?)" />"#).unwrap();
    let paragraph = Regex::new(r"<p>(.*?)</p>").unwrap();
    let leading_blank = Regex::new(r"(?m)^\n+").unwrap();

    let md = front_matter.replace_all(md, "");
    let md = script.replace_all(&md, "");
    let md = badge.replace_all(&md, "`$1`");
    let md = contributors.replace_all(&md, |caps: &Captures| {
        let links: Vec<String> = caps[1]
            .split(',')
            .map(|user| format!("[{}](https://github.com/{})", user, user))
            .collect();
        format!("Contributors: {}", links.join(", "))
    });
    let md = paragraph.replace_all(&md, "$1");
    let md = leading_blank.replace(&md, "");

    md.into_owned()
}

/// Prepend the generated note header when front matter is present.
pub fn compose_note(
    date: &str,
    info: Option<&FrontMatter>,
    body: &str,
    config: &PanelConfig,
) -> String {
    let Some(info) = info else {
        return body.to_string();
    };

    let mut sections = vec![
        format!("# {}", info.title),
        format!(
            "> Published at {}, see also {}",
            date, config.changelog_index_url
        ),
    ];
    if let Some(image) = &info.image {
        let alt = info.alt.as_deref().unwrap_or("image");
        sections.push(format!(
            "![{}]({}/{})",
            alt,
            config.image_url.trim_end_matches('/'),
            image
        ));
    }
    sections.push(body.to_string());

    sections.join("\n\n")
}

/// Fetch the changelog entry for `date` and return it as display-ready
/// markdown.
pub fn load_changelog(
    fetcher: &dyn ChangelogFetcher,
    config: &PanelConfig,
    date: &str,
) -> Result<String> {
    let md = fetcher.fetch(&config.changelog_url_for(date))?;
    let info = parse_front_matter(&md);
    let body = transform_body(&md);
    Ok(compose_note(date, info.as_ref(), &body, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = "---\ntitle: \"Foo\"\ndate: \"2022-07-04\"\nimage: foo.webp\nalt: Foo banner\nexcerpt: Small release\n---\n\nShipped <Badge text=\"NEW\" /> things.\n\n<p>Inline paragraph</p>\n\n<Contributors usernames=\"alice,bob\" />\n";

    struct StubFetcher(String);

    impl ChangelogFetcher for StubFetcher {
        fn fetch(&self, _url: &str) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_parse_front_matter_well_formed() {
        let info = parse_front_matter(ENTRY).unwrap();
        assert_eq!(info.title, "Foo");
        assert_eq!(info.date.as_deref(), Some("2022-07-04"));
        assert_eq!(info.image.as_deref(), Some("foo.webp"));
        assert_eq!(info.alt.as_deref(), Some("Foo banner"));
        assert_eq!(info.excerpt.as_deref(), Some("Small release"));
    }

    #[test]
    fn test_parse_front_matter_missing_delimiter() {
        assert_eq!(parse_front_matter("# Just markdown\n\nBody"), None);
    }

    #[test]
    fn test_parse_front_matter_unterminated() {
        assert_eq!(parse_front_matter("---\ntitle: \"Foo\"\n\nBody"), None);
    }

    #[test]
    fn test_parse_front_matter_without_title_is_absent() {
        assert_eq!(parse_front_matter("---\ndate: \"2022-07-04\"\n---\nBody"), None);
    }

    #[test]
    fn test_transform_strips_front_matter() {
        let out = transform_body(ENTRY);
        assert!(!out.contains("title:"));
        assert!(!out.contains("---"));
    }

    #[test]
    fn test_transform_strips_scripts() {
        let out = transform_body("Before\n<script>\nalert('hi');\n</script>\nAfter\n");
        assert!(!out.contains("script"));
        assert!(!out.contains("alert"));
        assert!(out.contains("Before"));
        assert!(out.contains("After"));
    }

    #[test]
    fn test_transform_rewrites_badge_to_inline_code() {
        let out = transform_body("Shipped <Badge type=\"tip\" text=\"NEW\" vertical=\"top\" /> today");
        assert_eq!(out, "Shipped `NEW` today");
    }

    #[test]
    fn test_transform_rewrites_contributors_to_profile_links() {
        let out = transform_body("<Contributors usernames=\"alice,bob\" />");
        assert!(out.contains("[alice](https://github.com/alice)"));
        assert!(out.contains("[bob](https://github.com/bob)"));
        assert!(out.starts_with("Contributors: "));
    }

    #[test]
    fn test_transform_unwraps_paragraph_tags() {
        let out = transform_body("<p>Inline paragraph</p>");
        assert_eq!(out, "Inline paragraph");
    }

    #[test]
    fn test_transform_strips_leading_blank_lines() {
        let out = transform_body("---\ntitle: \"Foo\"\n---\n\n\nBody\n");
        assert!(out.starts_with("Body"));
    }

    #[test]
    fn test_compose_note_without_front_matter_is_body() {
        let config = PanelConfig::default();
        assert_eq!(compose_note("2022-07-04", None, "Body", &config), "Body");
    }

    #[test]
    fn test_compose_note_header() {
        let config = PanelConfig::default();
        let info = FrontMatter {
            title: "Foo".to_string(),
            date: Some("2022-07-04".to_string()),
            image: Some("foo.webp".to_string()),
            alt: Some("Foo banner".to_string()),
            excerpt: None,
        };
        let note = compose_note("2022-07-04", Some(&info), "Body", &config);
        assert!(note.starts_with("# Foo\n\n"));
        assert!(note.contains(&format!(
            "> Published at 2022-07-04, see also {}",
            config.changelog_index_url
        )));
        assert!(note.contains("![Foo banner]("));
        assert!(note.contains("/foo.webp)"));
        assert!(note.ends_with("Body"));
    }

    #[test]
    fn test_compose_note_alt_falls_back() {
        let config = PanelConfig::default();
        let info = FrontMatter {
            title: "Foo".to_string(),
            date: None,
            image: Some("foo.webp".to_string()),
            alt: None,
            excerpt: None,
        };
        let note = compose_note("2022-07-04", Some(&info), "Body", &config);
        assert!(note.contains("![image]("));
    }

    #[test]
    fn test_compose_note_skips_missing_image() {
        let config = PanelConfig::default();
        let info = FrontMatter {
            title: "Foo".to_string(),
            date: None,
            image: None,
            alt: None,
            excerpt: None,
        };
        let note = compose_note("2022-07-04", Some(&info), "Body", &config);
        assert!(!note.contains("!["));
    }

    #[test]
    fn test_load_changelog_end_to_end() {
        let config = PanelConfig::default();
        let fetcher = StubFetcher(ENTRY.to_string());
        let note = load_changelog(&fetcher, &config, "2022-07-04").unwrap();
        assert!(note.starts_with("# Foo"));
        assert!(note.contains("`NEW`"));
        assert!(note.contains("[alice](https://github.com/alice)"));
        assert!(note.contains("Inline paragraph"));
        assert!(!note.contains("<p>"));
    }
}
