use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Od,
    Sa,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale `{0}` (expected one of: en, hi, od, sa)")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 4] = [Self::En, Self::Hi, Self::Od, Self::Sa];

    /// Lenient parse used at the request boundary: anything unrecognized,
    /// including a missing value, resolves to English.
    pub fn from_optional_str(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace('_', "-");
        let primary = normalized.split('-').next().unwrap_or_default();

        match primary {
            "en" | "english" => Some(Self::En),
            "hi" | "hindi" => Some(Self::Hi),
            "od" | "or" | "odia" | "oriya" => Some(Self::Od),
            "sa" | "sanskrit" => Some(Self::Sa),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Od => "od",
            Self::Sa => "sa",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिन्दी",
            Self::Od => "ଓଡ଼ିଆ",
            Self::Sa => "संस्कृतम्",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_code())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnsupportedLocale(value.trim().to_string()))
    }
}

/// Intents in declaration order. The order is significant: classification
/// walks the table top to bottom and the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Projects,
    NamasteRides,
    NetrikXr,
    QrMenu,
    Hire,
    Skills,
    Meditation,
    Donate,
    Contact,
    Meeting,
    About,
    Pricing,
    Timeline,
    Thanks,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Projects => "projects",
            Self::NamasteRides => "namaste_rides",
            Self::NetrikXr => "netrik_xr",
            Self::QrMenu => "qr_menu",
            Self::Hire => "hire",
            Self::Skills => "skills",
            Self::Meditation => "meditation",
            Self::Donate => "donate",
            Self::Contact => "contact",
            Self::Meeting => "meeting",
            Self::About => "about",
            Self::Pricing => "pricing",
            Self::Timeline => "timeline",
            Self::Thanks => "thanks",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatInput {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub locale: Option<String>,
}

impl ChatInput {
    pub fn new(message: impl Into<String>, locale: Option<&str>) -> Self {
        Self {
            message: message.into(),
            locale: locale.map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub intent: Option<Intent>,
    pub locale: Locale,
    pub matched_keyword: Option<String>,
}

impl ChatReply {
    pub fn is_fallback(&self) -> bool {
        self.intent.is_none()
    }
}
