//! Declarations of the recognized metadata keys.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Format of date and time values (`releasedate`, `lastplayed`).
pub const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Value type of a metadata key, used for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataType {
    /// Free text on one line.
    String,
    /// Free text that may span lines.
    MultilineString,
    /// A filesystem path (artwork, video).
    Path,
    /// A rating between 0 and 1.
    Rating,
    /// A calendar date.
    Date,
    /// A point in time.
    Time,
    /// A non-negative integer.
    Int,
    /// `true` or `false`.
    Bool,
}

/// One recognized metadata key with its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataDecl {
    /// Key, also the XML tag name.
    pub key: &'static str,
    /// Value type.
    pub value_type: MetadataType,
    /// Value considered "unset"; never written to a gamelist.
    pub default: &'static str,
    /// Whether the value is a play statistic rather than descriptive data.
    pub is_statistic: bool,
}

const fn decl(
    key: &'static str,
    value_type: MetadataType,
    default: &'static str,
    is_statistic: bool,
) -> MetadataDecl {
    MetadataDecl {
        key,
        value_type,
        default,
        is_statistic,
    }
}

/// Keys recognized on games, in canonical order.
pub const GAME_DECLS: &[MetadataDecl] = &[
    decl("name", MetadataType::String, "", false),
    decl("desc", MetadataType::MultilineString, "", false),
    decl("image", MetadataType::Path, "", false),
    decl("video", MetadataType::Path, "", false),
    decl("marquee", MetadataType::Path, "", false),
    decl("thumbnail", MetadataType::Path, "", false),
    decl("rating", MetadataType::Rating, "0.000000", false),
    decl("releasedate", MetadataType::Date, "not-a-date-time", false),
    decl("developer", MetadataType::String, "unknown", false),
    decl("publisher", MetadataType::String, "unknown", false),
    decl("genre", MetadataType::String, "unknown", false),
    decl("players", MetadataType::Int, "1", false),
    decl("favorite", MetadataType::Bool, "false", false),
    decl("hidden", MetadataType::Bool, "false", false),
    decl("kidgame", MetadataType::Bool, "false", false),
    decl("playcount", MetadataType::Int, "0", true),
    decl("lastplayed", MetadataType::Time, "0", true),
];

/// Keys recognized on folders, in canonical order.
pub const FOLDER_DECLS: &[MetadataDecl] = &[
    decl("name", MetadataType::String, "", false),
    decl("desc", MetadataType::MultilineString, "", false),
    decl("image", MetadataType::Path, "", false),
    decl("thumbnail", MetadataType::Path, "", false),
    decl("video", MetadataType::Path, "", false),
    decl("marquee", MetadataType::Path, "", false),
];

impl MetadataDecl {
    /// Check that `value` is acceptable for this key.
    ///
    /// The default value is always acceptable.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming the key.
    pub fn validate(&self, value: &str) -> Result<()> {
        if value == self.default {
            return Ok(());
        }

        let problem = match self.value_type {
            MetadataType::String => (value.contains('\n') || value.contains('\r'))
                .then(|| "must be a single line".to_string()),
            MetadataType::MultilineString | MetadataType::Path => None,
            MetadataType::Rating => match value.parse::<f32>() {
                Ok(r) if (0.0..=1.0).contains(&r) => None,
                _ => Some("must be a number between 0 and 1".to_string()),
            },
            MetadataType::Date | MetadataType::Time => {
                NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
                    .err()
                    .map(|_| format!("must be a date in {DATE_TIME_FORMAT} form"))
            }
            MetadataType::Int => value
                .parse::<u32>()
                .err()
                .map(|_| "must be a non-negative integer".to_string()),
            MetadataType::Bool => (!matches!(value, "true" | "false"))
                .then(|| "must be true or false".to_string()),
        };

        match problem {
            None => Ok(()),
            Some(message) => Err(Error::Validation {
                field: self.key.to_string(),
                message,
            }),
        }
    }
}
