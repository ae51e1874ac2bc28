use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Kind of form item. Fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostType {
    /// Photo capture slot
    Photo,
    /// Pick exactly one of `data_map.options`
    SingleChoice,
    /// Free-text comment behind an opt-in switch
    Comment,
    /// A type string this build does not know how to render
    Unsupported(String),
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Photo => write!(f, "PHOTO"),
            Self::SingleChoice => write!(f, "SINGLE_CHOICE"),
            Self::Comment => write!(f, "COMMENT"),
            Self::Unsupported(raw) => write!(f, "{raw}"),
        }
    }
}

impl FromStr for PostType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "PHOTO" => Self::Photo,
            "SINGLE_CHOICE" => Self::SingleChoice,
            "COMMENT" => Self::Comment,
            other => Self::Unsupported(other.to_string()),
        })
    }
}

impl From<String> for PostType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<PostType> for String {
    fn from(kind: PostType) -> Self {
        kind.to_string()
    }
}

/// Type-specific payload of a post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataMap {
    #[serde(default)]
    pub options: Vec<String>,
}

/// Opaque handle to a captured image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A single form item.
///
/// Posts are values: every interaction builds a new `Post` that replaces the
/// old one in the [`PostStore`](super::PostStore). Fields that do not belong
/// to `post_type` are tolerated but never drive rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub data_map: DataMap,
    #[serde(default)]
    pub selected_option: Option<String>,
    #[serde(default)]
    pub allow_comment: bool,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

impl Post {
    pub fn new(post_type: PostType, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            post_type,
            id: id.into(),
            title: title.into(),
            data_map: DataMap::default(),
            selected_option: None,
            allow_comment: false,
            comment: None,
            image: None,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_map.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn options(&self) -> &[String] {
        &self.data_map.options
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.data_map.options.iter().any(|o| o == option)
    }
}
