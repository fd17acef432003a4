//! Theme preference persistence.
//!
//! # Invariants
//! - A stored `dark`/`light` value always wins over the environment preference.
//! - Unknown stored values are ignored, not rewritten, until the next toggle.

use crate::model::theme::Theme;
use crate::repo::kv_repo::{KeyValueRepository, RepoError};
use log::{info, warn};

/// Storage key holding `dark` or `light`.
pub const THEME_KEY: &str = "theme";

/// Result of applying a theme.
#[derive(Debug)]
pub struct ThemeChange {
    pub theme: Theme,
    /// Set when the preference could not be saved; the theme still applies.
    pub persist_warning: Option<RepoError>,
}

pub struct ThemeService<R: KeyValueRepository> {
    repo: R,
}

impl<R: KeyValueRepository> ThemeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stored preference, if readable and recognized.
    pub fn saved_theme(&self) -> Option<Theme> {
        match self.repo.get_value(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(err) => {
                warn!("event=theme_load module=theme status=error error={err}");
                None
            }
        }
    }

    /// Theme to apply at page load.
    ///
    /// `prefers_dark` is the environment's color-scheme preference.
    pub fn resolve(&self, prefers_dark: bool) -> Theme {
        self.saved_theme().unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    /// Switches away from `current` and saves the result.
    pub fn toggle(&self, current: Theme) -> ThemeChange {
        self.apply(current.toggled())
    }

    /// Saves an explicit theme choice.
    pub fn apply(&self, theme: Theme) -> ThemeChange {
        let persist_warning = self.repo.set_value(THEME_KEY, theme.as_str()).err();
        match &persist_warning {
            None => info!("event=theme_apply module=theme status=ok theme={theme}"),
            Some(err) => {
                warn!("event=theme_apply module=theme status=degraded theme={theme} error={err}")
            }
        }
        ThemeChange {
            theme,
            persist_warning,
        }
    }
}
