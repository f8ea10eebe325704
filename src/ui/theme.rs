use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug)]
pub struct Theme {
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    pub success: ColorSpec,
    pub error: ColorSpec,

    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification held as plain RGB components.
///
#[derive(Clone, Copy, Debug)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        // Tokyo-night palette.
        Theme {
            primary: ColorSpec::new(122, 162, 247),
            accent: ColorSpec::new(187, 154, 247),
            banner: ColorSpec::new(122, 162, 247),
            text: ColorSpec::new(192, 202, 245),
            text_muted: ColorSpec::new(86, 95, 137),
            success: ColorSpec::new(158, 206, 106),
            error: ColorSpec::new(247, 118, 142),
            border_active: ColorSpec::new(122, 162, 247),
            border_normal: ColorSpec::new(65, 72, 104),
            highlight_bg: ColorSpec::new(41, 46, 66),
            highlight_fg: ColorSpec::new(192, 202, 245),
        }
    }
}
