//! Dark and light palettes for the terminal panel.

use folio_terminal::LineKind;
use folio_types::color::Color;
use folio_types::config::ThemeMode;

/// Complete visual theme of the terminal panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Panel background.
    pub background: Color,
    /// Title bar background.
    pub header_bg: Color,
    /// Title bar text.
    pub header_text: Color,
    /// The three window dots, left to right.
    pub dots: [Color; 3],

    /// Echoed commands and the prompt.
    pub input_text: Color,
    /// Command output.
    pub output_text: Color,
    /// Welcome banner and other system lines.
    pub system_text: Color,
    /// Error lines and the label of an unknown-command line.
    pub error_text: Color,

    /// Text being typed.
    pub draft_text: Color,
    /// Placeholder in the empty input field.
    pub placeholder: Color,

    /// Typing caret after an animating output line.
    pub caret: Color,
    /// Typing caret after an animating error line.
    pub caret_error: Color,
}

const GREEN_400: Color = Color::rgb(74, 222, 128);
const YELLOW_400: Color = Color::rgb(250, 204, 21);
const RED_400: Color = Color::rgb(248, 113, 113);
const BLUE_300: Color = Color::rgb(147, 197, 253);
const GRAY_200: Color = Color::rgb(229, 231, 235);

impl Theme {
    /// Translucent black panel with neon text.
    pub fn dark() -> Self {
        let background = Color::rgb(10, 10, 14);
        Self {
            background,
            header_bg: Color::rgba(30, 58, 138, 102).over(background),
            header_text: BLUE_300,
            dots: [GREEN_400, YELLOW_400, RED_400],

            input_text: GREEN_400,
            output_text: GRAY_200,
            system_text: BLUE_300,
            error_text: RED_400,

            draft_text: Color::rgb(243, 244, 246),
            placeholder: Color::rgb(107, 114, 128),

            caret: BLUE_300.with_alpha(153).over(background),
            caret_error: RED_400.with_alpha(153).over(background),
        }
    }

    /// Pale gray panel with darkened accents.
    pub fn light() -> Self {
        let background = Color::rgb(243, 244, 246);
        Self {
            background,
            header_bg: Color::rgb(209, 213, 219),
            header_text: Color::rgb(29, 78, 216),
            dots: [GREEN_400, YELLOW_400, RED_400],

            input_text: Color::rgb(21, 128, 61),
            output_text: Color::rgb(17, 24, 39),
            system_text: Color::rgb(29, 78, 216),
            error_text: Color::rgb(220, 38, 38),

            draft_text: Color::rgb(17, 24, 39),
            placeholder: Color::rgb(107, 114, 128),

            caret: Color::rgb(29, 78, 216).with_alpha(153).over(background),
            caret_error: Color::rgb(220, 38, 38).with_alpha(153).over(background),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Body color of a line. Mixed lines use this for the part after the
    /// error label.
    pub fn line_color(&self, kind: LineKind) -> Color {
        match kind {
            LineKind::Input => self.input_text,
            LineKind::System => self.system_text,
            LineKind::Error => self.error_text,
            LineKind::Output | LineKind::Mixed => self.output_text,
        }
    }

    /// Caret color shown after an animating line, if that kind shows one.
    pub fn caret_color(&self, kind: LineKind) -> Option<Color> {
        match kind {
            LineKind::Output | LineKind::Mixed => Some(self.caret),
            LineKind::Error => Some(self.caret_error),
            LineKind::Input | LineKind::System => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
