use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full name used whenever a version code is not recognised.
pub const DEFAULT_VERSION_NAME: &str = "King James Version of the Bible";

/// Bible translations offered in the version selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BibleVersion {
    #[default]
    #[serde(rename = "KJV")]
    Kjv,
    #[serde(rename = "NIV")]
    Niv,
    #[serde(rename = "ESV")]
    Esv,
    #[serde(rename = "NLT")]
    Nlt,
    #[serde(rename = "MSG")]
    Msg,
}

impl BibleVersion {
    pub const ALL: [BibleVersion; 5] = [
        BibleVersion::Kjv,
        BibleVersion::Niv,
        BibleVersion::Esv,
        BibleVersion::Nlt,
        BibleVersion::Msg,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "KJV" => Some(BibleVersion::Kjv),
            "NIV" => Some(BibleVersion::Niv),
            "ESV" => Some(BibleVersion::Esv),
            "NLT" => Some(BibleVersion::Nlt),
            "MSG" => Some(BibleVersion::Msg),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BibleVersion::Kjv => "KJV",
            BibleVersion::Niv => "NIV",
            BibleVersion::Esv => "ESV",
            BibleVersion::Nlt => "NLT",
            BibleVersion::Msg => "MSG",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            BibleVersion::Kjv => DEFAULT_VERSION_NAME,
            BibleVersion::Niv => "New International Version of the Bible",
            BibleVersion::Esv => "English Standard Version of the Bible",
            BibleVersion::Nlt => "New Living Translation of the Bible",
            BibleVersion::Msg => "The Message Version of the Bible",
        }
    }
}

/// Maps any version code to the name used in the prompt, falling back to KJV.
pub fn full_version_name(code: &str) -> &'static str {
    BibleVersion::from_code(code)
        .map(|v| v.full_name())
        .unwrap_or(DEFAULT_VERSION_NAME)
}

/// Languages the UI (and therefore the generated content) can be shown in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// English name of the language, as used in prompt instructions.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub code: &'static str,
    pub full_name: &'static str,
}

impl From<BibleVersion> for VersionInfo {
    fn from(version: BibleVersion) -> Self {
        Self {
            code: version.code(),
            full_name: version.full_name(),
        }
    }
}

/// Request body for a verse lookup, as sent by the UI.
///
/// `bible_version` stays a raw string: unknown codes are not rejected, they
/// resolve to the King James Version when the prompt is built.
#[derive(Debug, Clone, Deserialize)]
pub struct VerseLookupRequest {
    pub problem_text: String,
    #[serde(default)]
    pub bible_version: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// A validated verse request, consumed exactly once by the upstream call.
#[derive(Debug, Clone, PartialEq)]
pub struct VerseRequest {
    pub problem_text: String,
    pub bible_version: String,
    pub language: Language,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerseLookupResponse {
    pub request_id: Uuid,
    pub bible_version: String,
    pub language: Language,
    /// Every fragment the parser produced, in upstream order.
    pub verses: Vec<String>,
    /// `verses` without its first element; what the UI renders.
    pub display_verses: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub verses: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
}
