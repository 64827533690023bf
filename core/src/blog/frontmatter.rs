use serde::Deserialize;

use super::BlogPost;
use crate::error::FrontMatterError;

const DELIMITER: &str = "---";

/// Metadata block at the top of a post
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
}

/// Split a post into its YAML front matter and markdown body.
///
/// The first line must be `---`; the block ends at the next line that is
/// exactly `---`. Both `\n` and `\r\n` line endings are accepted.
pub fn split_front_matter(raw: &str) -> Result<(&str, &str), FrontMatterError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let rest = raw
        .strip_prefix(DELIMITER)
        .and_then(|r| r.strip_prefix("\r\n").or_else(|| r.strip_prefix('\n')))
        .ok_or(FrontMatterError::MissingOpening)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }
    Err(FrontMatterError::MissingClosing)
}

/// Parse one post file. `file_name` provides the slug.
pub fn parse_post(file_name: &str, raw: &str) -> Result<BlogPost, FrontMatterError> {
    let (yaml, body) = split_front_matter(raw)?;
    let meta: FrontMatter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    let title = meta
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or(FrontMatterError::MissingField("title"))?;
    let date = meta.date.ok_or(FrontMatterError::MissingField("date"))?;

    let mut tags: Vec<String> = Vec::with_capacity(meta.tags.len());
    for tag in meta.tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    Ok(BlogPost {
        slug: slug_from_file_name(file_name),
        title,
        date,
        summary: meta.summary.unwrap_or_default(),
        tags,
        body: body.trim_start_matches(['\r', '\n']).to_string(),
    })
}

fn slug_from_file_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    base.strip_suffix(".md").unwrap_or(base).to_lowercase()
}
