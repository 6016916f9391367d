use iced::theme::Palette;
use iced::{Color, Theme};

/// Resolved colors used by every view.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) sidebar: Color,
    pub(crate) overlay: Color,
    pub(crate) accent: Color,
    pub(crate) accent_hover: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
    pub(crate) dim_foreground: Color,
}

impl Default for IcedColorPalette {
    fn default() -> Self {
        Self {
            foreground: Color::from_rgb8(0xEC, 0xEF, 0xF4),
            background: Color::from_rgb8(0xE4, 0xE9, 0xF7),
            sidebar: Color::from_rgb8(0x11, 0x10, 0x1D),
            overlay: Color::from_rgb8(0x1D, 0x1B, 0x31),
            accent: Color::from_rgb8(0x69, 0x5C, 0xFE),
            accent_hover: Color::from_rgb8(0x4F, 0x43, 0xD9),
            green: Color::from_rgb8(0x98, 0xC3, 0x79),
            red: Color::from_rgb8(0xE0, 0x6C, 0x75),
            yellow: Color::from_rgb8(0xE5, 0xC0, 0x7B),
            dim_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("midify"),
            iced_palette: IcedColorPalette::default(),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.sidebar,
            primary: palette.accent,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Page -> Widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Holds the current global theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

/// Scale the alpha channel of `color` by `opacity`.
pub(crate) fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_half_opacity_when_fading_then_alpha_is_halved() {
        let color = Color::from_rgba(0.1, 0.2, 0.3, 0.8);

        let faded = fade(color, 0.5);

        assert!((faded.a - 0.4).abs() < f32::EPSILON);
        assert_eq!(faded.r, color.r);
    }

    #[test]
    fn given_out_of_range_opacity_when_fading_then_it_is_clamped() {
        let color = Color::from_rgb(1.0, 1.0, 1.0);

        assert_eq!(fade(color, 2.0).a, 1.0);
        assert_eq!(fade(color, -1.0).a, 0.0);
    }
}
