//! Semantic color roles and the per-theme color sets built from them.

use std::fmt;
use std::str::FromStr;

use horizon_facet_core::Color;

use crate::error::Error;

/// A semantic color slot independent of interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Fill,
    Border,
    Text,
}

impl ColorRole {
    /// All roles, in paint order.
    pub const ALL: [ColorRole; 3] = [ColorRole::Fill, ColorRole::Border, ColorRole::Text];

    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Fill => "fill",
            ColorRole::Border => "border",
            ColorRole::Text => "text",
        }
    }
}

/// The state-specific variant of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorVariant {
    /// The role's default color.
    Base,
    /// Light-style alternate of `Base`. Ignored for borders.
    Plain,
    Hover,
    Press,
    Selected,
    ReadOnly,
    Disabled,
}

impl ColorVariant {
    pub const ALL: [ColorVariant; 7] = [
        ColorVariant::Base,
        ColorVariant::Plain,
        ColorVariant::Hover,
        ColorVariant::Press,
        ColorVariant::Selected,
        ColorVariant::ReadOnly,
        ColorVariant::Disabled,
    ];

    /// Suffix used in slot names; empty for `Base`.
    pub fn suffix(self) -> &'static str {
        match self {
            ColorVariant::Base => "",
            ColorVariant::Plain => "plain",
            ColorVariant::Hover => "hover",
            ColorVariant::Press => "press",
            ColorVariant::Selected => "selected",
            ColorVariant::ReadOnly => "read-only",
            ColorVariant::Disabled => "disabled",
        }
    }
}

/// A (role, variant) pair such as `fill-hover` or `text-read-only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSlot {
    pub role: ColorRole,
    pub variant: ColorVariant,
}

impl ColorSlot {
    pub const fn new(role: ColorRole, variant: ColorVariant) -> Self {
        Self { role, variant }
    }

    pub const fn base(role: ColorRole) -> Self {
        Self::new(role, ColorVariant::Base)
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            ColorVariant::Base => f.write_str(self.role.name()),
            variant => write!(f, "{}-{}", self.role.name(), variant.suffix()),
        }
    }
}

impl FromStr for ColorSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.replace('_', "-");
        let (role_name, suffix) = match name.split_once('-') {
            Some((role, rest)) => (role, rest),
            None => (name.as_str(), ""),
        };

        let role = ColorRole::ALL
            .into_iter()
            .find(|r| r.name() == role_name)
            .ok_or_else(|| Error::UnknownColorSlot(s.to_string()))?;
        let variant = ColorVariant::ALL
            .into_iter()
            .find(|v| v.suffix() == suffix)
            .ok_or_else(|| Error::UnknownColorSlot(s.to_string()))?;

        Ok(ColorSlot::new(role, variant))
    }
}

/// The colors of one role: a mandatory base plus optional state variants.
///
/// A missing variant means "keep whatever the resolver has chosen so far".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleColors {
    pub base: Color,
    pub plain: Option<Color>,
    pub hover: Option<Color>,
    pub press: Option<Color>,
    pub selected: Option<Color>,
    pub read_only: Option<Color>,
    pub disabled: Option<Color>,
}

impl RoleColors {
    /// A role with only a base color.
    pub const fn new(base: Color) -> Self {
        Self {
            base,
            plain: None,
            hover: None,
            press: None,
            selected: None,
            read_only: None,
            disabled: None,
        }
    }

    /// Get a variant, `Base` always present.
    pub fn get(&self, variant: ColorVariant) -> Option<Color> {
        match variant {
            ColorVariant::Base => Some(self.base),
            ColorVariant::Plain => self.plain,
            ColorVariant::Hover => self.hover,
            ColorVariant::Press => self.press,
            ColorVariant::Selected => self.selected,
            ColorVariant::ReadOnly => self.read_only,
            ColorVariant::Disabled => self.disabled,
        }
    }

    /// Set a variant.
    pub fn set(&mut self, variant: ColorVariant, color: Color) {
        match variant {
            ColorVariant::Base => self.base = color,
            ColorVariant::Plain => self.plain = Some(color),
            ColorVariant::Hover => self.hover = Some(color),
            ColorVariant::Press => self.press = Some(color),
            ColorVariant::Selected => self.selected = Some(color),
            ColorVariant::ReadOnly => self.read_only = Some(color),
            ColorVariant::Disabled => self.disabled = Some(color),
        }
    }

    /// Set a variant using builder pattern.
    pub fn with(mut self, variant: ColorVariant, color: Color) -> Self {
        self.set(variant, color);
        self
    }
}

/// The named colors a widget paints with, for every role and variant.
///
/// Built-in themes construct these once and share them; a widget switched
/// to custom styling edits a private copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColorSet {
    pub fill: RoleColors,
    pub border: RoleColors,
    pub text: RoleColors,
}

impl ThemeColorSet {
    pub const fn new(fill: RoleColors, border: RoleColors, text: RoleColors) -> Self {
        Self { fill, border, text }
    }

    /// Get the colors of a role.
    pub fn role(&self, role: ColorRole) -> &RoleColors {
        match role {
            ColorRole::Fill => &self.fill,
            ColorRole::Border => &self.border,
            ColorRole::Text => &self.text,
        }
    }

    /// Get mutable colors of a role.
    pub fn role_mut(&mut self, role: ColorRole) -> &mut RoleColors {
        match role {
            ColorRole::Fill => &mut self.fill,
            ColorRole::Border => &mut self.border,
            ColorRole::Text => &mut self.text,
        }
    }

    /// Look up a single slot.
    pub fn get(&self, slot: ColorSlot) -> Option<Color> {
        self.role(slot.role).get(slot.variant)
    }

    /// Set a single slot.
    pub fn set(&mut self, slot: ColorSlot, color: Color) {
        self.role_mut(slot.role).set(slot.variant, color);
    }

    /// Iterate over every defined slot.
    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, Color)> + '_ {
        ColorRole::ALL.into_iter().flat_map(move |role| {
            ColorVariant::ALL.into_iter().filter_map(move |variant| {
                self.get(ColorSlot::new(role, variant))
                    .map(|color| (ColorSlot::new(role, variant), color))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_names_round_trip() {
        for role in ColorRole::ALL {
            for variant in ColorVariant::ALL {
                let slot = ColorSlot::new(role, variant);
                assert_eq!(slot.to_string().parse::<ColorSlot>().unwrap(), slot);
            }
        }
    }

    #[test]
    fn slot_parsing_accepts_common_spellings() {
        assert_eq!(
            "fill".parse::<ColorSlot>().unwrap(),
            ColorSlot::base(ColorRole::Fill)
        );
        assert_eq!(
            "Text_Read_Only".parse::<ColorSlot>().unwrap(),
            ColorSlot::new(ColorRole::Text, ColorVariant::ReadOnly)
        );
        assert!(matches!(
            "shadow-hover".parse::<ColorSlot>(),
            Err(Error::UnknownColorSlot(_))
        ));
        assert!("fill-wobbly".parse::<ColorSlot>().is_err());
    }

    #[test]
    fn set_and_get_slots() {
        let mut set = ThemeColorSet::new(
            RoleColors::new(Color::WHITE),
            RoleColors::new(Color::GRAY),
            RoleColors::new(Color::BLACK),
        );
        let hover = ColorSlot::new(ColorRole::Fill, ColorVariant::Hover);
        assert_eq!(set.get(hover), None);

        set.set(hover, Color::BLUE);
        assert_eq!(set.get(hover), Some(Color::BLUE));
        assert_eq!(set.iter().count(), 4);
    }
}
