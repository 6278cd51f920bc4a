use serde::{Deserialize, Serialize};

/// Normalized metadata for one page.
///
/// Every field is either present or absent; an extractor never stores an
/// empty string. Serializes absent fields as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub lang: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub image: Option<String>,
    pub logo: Option<String>,
    pub url: Option<String>,
    pub date: Option<String>,
}

/// Metadata field names, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Lang,
    Author,
    Title,
    Description,
    Publisher,
    Image,
    Logo,
    Url,
    Date,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Lang,
        Field::Author,
        Field::Title,
        Field::Description,
        Field::Publisher,
        Field::Image,
        Field::Logo,
        Field::Url,
        Field::Date,
    ];

    /// Field Name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lang => "lang",
            Self::Author => "author",
            Self::Title => "title",
            Self::Description => "description",
            Self::Publisher => "publisher",
            Self::Image => "image",
            Self::Logo => "logo",
            Self::Url => "url",
            Self::Date => "date",
        }
    }
}

impl MetadataRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Lang => &self.lang,
            Field::Author => &self.author,
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Publisher => &self.publisher,
            Field::Image => &self.image,
            Field::Logo => &self.logo,
            Field::Url => &self.url,
            Field::Date => &self.date,
        };
        slot.as_deref()
    }

    /// Store a value; blank strings are stored as absent.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        let value = value.filter(|v| !v.trim().is_empty());
        let slot = match field {
            Field::Lang => &mut self.lang,
            Field::Author => &mut self.author,
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Publisher => &mut self.publisher,
            Field::Image => &mut self.image,
            Field::Logo => &mut self.logo,
            Field::Url => &mut self.url,
            Field::Date => &mut self.date,
        };
        *slot = value;
    }

    /// True when the field holds a non-blank value.
    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some_and(|v| !v.trim().is_empty())
    }
}

/// Per-request knobs a caller may override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overrides {
    pub user_agent: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// JSON envelope printed by the CLI: `{"status": true, "data": ...}` or
/// `{"status": false, "message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
            message: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            status: false,
            data: None,
            message: Some(msg.into()),
        }
    }
}
