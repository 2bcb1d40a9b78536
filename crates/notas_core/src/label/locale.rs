//! Display locale selection and per-locale wording.
//!
//! # Responsibility
//! - Map host locale tags onto the closed set of supported display locales.
//! - Own every user-visible word the core produces (relative days, statuses,
//!   tab titles).
//!
//! # Invariants
//! - Resolution never fails; unusable candidates are skipped.
//! - `English` is the reference locale and the fallback.

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable consulted before `LANG` during resolution.
pub const DISPLAY_LOCALE_ENV: &str = "NOTAS_DISPLAY_LOCALE";
const LANG_ENV: &str = "LANG";

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayLocale {
    /// Reference locale (`en_US` names, 12-hour short time).
    #[default]
    English,
    /// `es_ES` names, 24-hour short time.
    Spanish,
}

/// Locale tag parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    Empty,
    Unsupported(String),
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "locale tag cannot be empty"),
            Self::Unsupported(tag) => {
                write!(f, "unsupported display locale `{tag}`; expected en|es")
            }
        }
    }
}

impl Error for LocaleError {}

impl DisplayLocale {
    /// Parses a BCP-47 (`es-ES`) or POSIX (`es_ES.UTF-8`) tag.
    ///
    /// Only the language subtag is significant; region, encoding and
    /// modifier suffixes are ignored.
    ///
    /// # Errors
    /// - `LocaleError::Empty` for blank input.
    /// - `LocaleError::Unsupported` for any other language.
    pub fn from_tag(tag: &str) -> Result<Self, LocaleError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Empty);
        }

        let language = trimmed
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Self::English),
            "es" => Ok(Self::Spanish),
            _ => Err(LocaleError::Unsupported(trimmed.to_string())),
        }
    }

    /// Resolves the active locale: `explicit`, then `NOTAS_DISPLAY_LOCALE`,
    /// then `LANG`, then the default.
    pub fn resolve(explicit: Option<&str>) -> Self {
        let from_env = |name: &str| std::env::var(name).ok();
        Self::resolve_from(
            explicit,
            from_env(DISPLAY_LOCALE_ENV).as_deref(),
            from_env(LANG_ENV).as_deref(),
        )
    }

    fn resolve_from(explicit: Option<&str>, configured: Option<&str>, lang: Option<&str>) -> Self {
        for (source, candidate) in [("explicit", explicit), ("env", configured), ("lang", lang)] {
            let Some(tag) = candidate else {
                continue;
            };
            match Self::from_tag(tag) {
                Ok(locale) => return locale,
                Err(err) => {
                    debug!("event=locale_skip module=label source={source} reason={err}");
                }
            }
        }
        Self::default()
    }

    /// Stable short code (`en`/`es`).
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    /// Backing locale for chrono's localized month/weekday names.
    pub fn chrono_locale(self) -> chrono::Locale {
        match self {
            Self::English => chrono::Locale::en_US,
            Self::Spanish => chrono::Locale::es_ES,
        }
    }

    /// Short time-of-day pattern in strftime syntax.
    pub fn short_time_pattern(self) -> &'static str {
        match self {
            Self::English => "%-I:%M %p",
            Self::Spanish => "%H:%M",
        }
    }

    pub fn today(self) -> &'static str {
        match self {
            Self::English => "Today",
            Self::Spanish => "Hoy",
        }
    }

    pub fn tomorrow(self) -> &'static str {
        match self {
            Self::English => "Tomorrow",
            Self::Spanish => "Mañana",
        }
    }

    pub fn done(self) -> &'static str {
        match self {
            Self::English => "Done",
            Self::Spanish => "Cumplida",
        }
    }

    pub fn overdue(self) -> &'static str {
        match self {
            Self::English => "Overdue",
            Self::Spanish => "Vencida",
        }
    }

    pub fn notes_title(self) -> &'static str {
        match self {
            Self::English => "Notes",
            Self::Spanish => "Notas",
        }
    }

    pub fn tasks_title(self) -> &'static str {
        match self {
            Self::English => "Tasks",
            Self::Spanish => "Tareas",
        }
    }

    /// The search field shows the same placeholder on both tabs.
    pub fn search_placeholder(self) -> &'static str {
        "Search"
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayLocale, LocaleError};

    #[test]
    fn from_tag_accepts_common_shapes() {
        assert_eq!(DisplayLocale::from_tag("en"), Ok(DisplayLocale::English));
        assert_eq!(DisplayLocale::from_tag("en-US"), Ok(DisplayLocale::English));
        assert_eq!(
            DisplayLocale::from_tag(" en_GB.UTF-8 "),
            Ok(DisplayLocale::English)
        );
        assert_eq!(DisplayLocale::from_tag("ES"), Ok(DisplayLocale::Spanish));
        assert_eq!(
            DisplayLocale::from_tag("es_MX@euro"),
            Ok(DisplayLocale::Spanish)
        );
    }

    #[test]
    fn from_tag_rejects_blank_and_unknown() {
        assert_eq!(DisplayLocale::from_tag("  "), Err(LocaleError::Empty));
        let err = DisplayLocale::from_tag("fr_FR").expect_err("french is unsupported");
        assert_eq!(err, LocaleError::Unsupported("fr_FR".to_string()));
        assert!(err.to_string().contains("fr_FR"));
    }

    #[test]
    fn resolve_prefers_explicit_then_env_then_lang() {
        assert_eq!(
            DisplayLocale::resolve_from(Some("es"), Some("en"), Some("en_US.UTF-8")),
            DisplayLocale::Spanish
        );
        assert_eq!(
            DisplayLocale::resolve_from(None, Some("es-ES"), Some("en_US.UTF-8")),
            DisplayLocale::Spanish
        );
        assert_eq!(
            DisplayLocale::resolve_from(None, None, Some("es_ES.UTF-8")),
            DisplayLocale::Spanish
        );
    }

    #[test]
    fn resolve_skips_unusable_candidates() {
        assert_eq!(
            DisplayLocale::resolve_from(Some("de"), Some(""), Some("es")),
            DisplayLocale::Spanish
        );
        assert_eq!(
            DisplayLocale::resolve_from(None, None, Some("C")),
            DisplayLocale::English
        );
        assert_eq!(
            DisplayLocale::resolve_from(None, None, None),
            DisplayLocale::English
        );
    }
}
