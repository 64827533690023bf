use thiserror::Error;

/// Errors that can occur while loading the portfolio document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse portfolio config at line {line}, column {column}: {source}")]
    Parse {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

/// Errors that can occur while reading a blog post's front matter
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("post does not start with a `---` front matter block")]
    MissingOpening,

    #[error("front matter block is never closed with `---`")]
    MissingClosing,

    #[error("invalid front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("front matter is missing required field `{0}`")]
    MissingField(&'static str),
}
