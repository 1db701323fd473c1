//! # Theme
//!
//! Light and dark palettes plus [`ThemeState`], the application state object that views
//! receive at construction. Views that care about the color scheme subscribe to it and are
//! called back whenever the scheme changes.

use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Scheme reported by the operating system. Anything but dark counts as light.
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(TodoError::Api(format!("Unknown color scheme: {}", other))),
        }
    }
}

/// An sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TodoError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub button: Color,
}

pub const LIGHT_THEME: Theme = Theme {
    background: Color::rgb(0xff, 0xff, 0xff),
    text: Color::rgb(0x11, 0x18, 0x1c),
    button: Color::rgb(0x1e, 0x1e, 0x1e),
};

pub const DARK_THEME: Theme = Theme {
    background: Color::rgb(0x15, 0x17, 0x18),
    text: Color::rgb(0xec, 0xed, 0xee),
    button: Color::rgb(0xff, 0xff, 0xff),
};

impl Theme {
    /// Build a theme from `#rrggbb` strings.
    pub fn new(background: &str, text: &str, button: &str) -> Result<Self> {
        Ok(Self {
            background: background.parse()?,
            text: text.parse()?,
            button: button.parse()?,
        })
    }

    pub fn for_scheme(scheme: ColorScheme) -> &'static Theme {
        match scheme {
            ColorScheme::Light => &LIGHT_THEME,
            ColorScheme::Dark => &DARK_THEME,
        }
    }
}

/// Handle returned by [`ThemeState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn Fn(ColorScheme, &Theme)>;

/// The current color scheme, shared by handing the same state to every view.
pub struct ThemeState {
    scheme: ColorScheme,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: usize,
}

impl ThemeState {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::for_scheme(self.scheme)
    }

    /// Switch to `scheme`. Returns false, and notifies nobody, if it was already active.
    pub fn set_scheme(&mut self, scheme: ColorScheme) -> bool {
        if self.scheme == scheme {
            return false;
        }
        self.scheme = scheme;
        let theme = self.theme();
        for (_, listener) in &self.listeners {
            listener(scheme, theme);
        }
        true
    }

    pub fn toggle(&mut self) -> ColorScheme {
        self.set_scheme(self.scheme.toggled());
        self.scheme
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(ColorScheme, &Theme) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn scheme_parses_and_prints() {
        assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert_eq!("Light".parse::<ColorScheme>().unwrap(), ColorScheme::Light);
        assert!("blue".parse::<ColorScheme>().is_err());
        assert_eq!(ColorScheme::Dark.to_string(), "dark");
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
    }

    #[test]
    fn color_parses_hex() {
        let color: Color = "#1E90ff".parse().unwrap();
        assert_eq!(color, Color::rgb(0x1e, 0x90, 0xff));
        assert_eq!(color.to_string(), "#1e90ff");
    }

    #[test]
    fn color_rejects_malformed_values() {
        for raw in ["1e90ff", "#1e90f", "#1e90ffa", "#gg0000", "", "#ééé"] {
            assert!(
                matches!(raw.parse::<Color>(), Err(TodoError::InvalidColor(_))),
                "value {:?}",
                raw
            );
        }
    }

    #[test]
    fn theme_new_validates_every_field() {
        let theme = Theme::new("#ffffff", "#000000", "#336699").unwrap();
        assert_eq!(theme.button, Color::rgb(0x33, 0x66, 0x99));
        assert!(Theme::new("#ffffff", "black", "#336699").is_err());
    }

    #[test]
    fn palettes_match_schemes() {
        assert_eq!(Theme::for_scheme(ColorScheme::Light), &LIGHT_THEME);
        assert_eq!(Theme::for_scheme(ColorScheme::Dark), &DARK_THEME);
    }

    #[test]
    fn toggle_notifies_subscribers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = ThemeState::new(ColorScheme::Light);
        let sink = Rc::clone(&seen);
        state.subscribe(move |scheme, theme| sink.borrow_mut().push((scheme, *theme)));

        assert_eq!(state.toggle(), ColorScheme::Dark);
        assert_eq!(state.theme(), &DARK_THEME);
        assert_eq!(state.toggle(), ColorScheme::Light);

        assert_eq!(
            *seen.borrow(),
            vec![
                (ColorScheme::Dark, DARK_THEME),
                (ColorScheme::Light, LIGHT_THEME)
            ]
        );
    }

    #[test]
    fn setting_the_same_scheme_is_silent() {
        let calls = Rc::new(RefCell::new(0));
        let mut state = ThemeState::new(ColorScheme::Dark);
        let counter = Rc::clone(&calls);
        state.subscribe(move |_, _| *counter.borrow_mut() += 1);

        assert!(!state.set_scheme(ColorScheme::Dark));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut state = ThemeState::new(ColorScheme::Dark);
        let counter = Rc::clone(&calls);
        let id = state.subscribe(move |_, _| *counter.borrow_mut() += 1);

        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.toggle();
        assert_eq!(*calls.borrow(), 0);
    }
}
