//! Light/dark theme initialization, toggle, and system-preference tracking.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme="dark"` attribute on the `<html>` element (light removes it).
//! Only an explicit toggle writes the preference back; until then the page
//! follows `prefers-color-scheme` live.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native builds
//! no-op so tests stay deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme-preference";

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// The two page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored preference value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph on the toggle button: the theme you would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}\u{fe0f}",
            Self::Light => "\u{1f319}",
        }
    }

    /// Pick the startup theme: a valid stored value wins, otherwise the
    /// system preference.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }
}

/// The stored preference, if any.
pub fn read_stored() -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        Theme::parse(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Theme to show at startup.
pub fn read_preference() -> Theme {
    let stored = read_stored();
    Theme::resolve(stored.map(Theme::as_str), system_prefers_dark())
}

/// Reflect `theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let result = match theme {
                Theme::Dark => el.set_attribute("data-theme", "dark"),
                Theme::Light => el.remove_attribute("data-theme"),
            };
            if result.is_err() {
                log::warn!("theme: could not update data-theme");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if storage.set_item(STORAGE_KEY, next.as_str()).is_err() {
                log::warn!("theme: could not persist preference");
            }
        }
    }
    log::debug!("theme toggled to {}", next.as_str());
    next
}

/// Follow system color-scheme changes while no preference is stored.
///
/// `on_change` receives each theme that gets applied. The listener lives for
/// the rest of the page.
pub fn watch_system_preference<F>(on_change: F)
where
    F: Fn(Theme) + 'static,
{
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            if read_stored().is_some() {
                return;
            }
            let theme = Theme::resolve(None, ev.matches());
            apply(theme);
            on_change(theme);
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        if mq
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
