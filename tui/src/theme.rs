//! Color theme and glyphs for the cubist TUI.
//!
//! Face colors follow the usual scheme: white up, yellow down, green front,
//! blue back, red right, orange left.

use ratatui::style::{Color, Modifier, Style};

use cubist_types::Face;

/// Display options resolved from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29);
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(54, 54, 70);
    pub const BORDER: Color = Color::Rgb(84, 84, 109);

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186);
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105);
    pub const TEXT_DISABLED: Color = Color::Rgb(84, 84, 88);

    pub const ACCENT: Color = Color::Rgb(127, 180, 202);
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108);
    pub const WARNING: Color = Color::Rgb(230, 195, 132);
    pub const ERROR: Color = Color::Rgb(255, 93, 98);

    pub const FACE_U: Color = Color::Rgb(238, 238, 238);
    pub const FACE_D: Color = Color::Rgb(255, 213, 0);
    pub const FACE_F: Color = Color::Rgb(0, 155, 72);
    pub const FACE_B: Color = Color::Rgb(0, 70, 173);
    pub const FACE_R: Color = Color::Rgb(183, 18, 52);
    pub const FACE_L: Color = Color::Rgb(255, 88, 0);
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub sticker_text: Color,
    faces: [Color; 6],
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            border: colors::BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
            sticker_text: colors::BG_DARK,
            faces: [
                colors::FACE_U,
                colors::FACE_D,
                colors::FACE_F,
                colors::FACE_B,
                colors::FACE_L,
                colors::FACE_R,
            ],
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            sticker_text: Color::Black,
            faces: [
                Color::White,
                Color::Yellow,
                Color::Green,
                Color::Blue,
                Color::Magenta,
                Color::Red,
            ],
        }
    }

    #[must_use]
    pub fn face(&self, face: Face) -> Color {
        let slot = match face {
            Face::U => 0,
            Face::D => 1,
            Face::F => 2,
            Face::B => 3,
            Face::L => 4,
            Face::R => 5,
        };
        self.faces[slot]
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub cursor: &'static str,
    pub selected: &'static str,
    pub locked: &'static str,
    pub empty: &'static str,
    pub pointer: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            cursor: "v",
            selected: "*",
            locked: "#",
            empty: "..",
            pointer: ">",
            separator: "|",
        }
    } else {
        Glyphs {
            cursor: "▾",
            selected: "◆",
            locked: "◇",
            empty: "··",
            pointer: "▸",
            separator: "│",
        }
    }
}

pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn sticker(palette: &Palette, face: Color) -> Style {
        Style::default()
            .fg(palette.sticker_text)
            .bg(face)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn candidate(palette: &Palette, available: bool) -> Style {
        if available {
            Style::default().fg(palette.text_primary)
        } else {
            Style::default()
                .fg(palette.text_disabled)
                .add_modifier(Modifier::CROSSED_OUT)
        }
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
