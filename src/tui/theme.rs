//! Nutrino dark palette for the terminal screen

use ratatui::style::Color;

/// TUI color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub header: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub send: Color,
    pub back: Color,
    pub user_bubble: Color,
    pub bot_bubble: Color,
    pub input_background: Color,
    pub jump_up: Color,
    pub jump_down: Color,
    pub typing_dot: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme matching the Nutrino palette
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(2, 38, 35),
            header: Color::Rgb(3, 48, 44),
            text: Color::Rgb(255, 255, 255),
            text_muted: Color::Rgb(176, 190, 197),
            border: Color::Rgb(31, 42, 48),
            accent: Color::Rgb(35, 204, 150),
            send: Color::Rgb(0, 230, 118),
            back: Color::Rgb(87, 203, 255),
            user_bubble: Color::Rgb(23, 62, 25),
            bot_bubble: Color::Rgb(12, 59, 105),
            input_background: Color::Rgb(42, 57, 66),
            jump_up: Color::Rgb(59, 130, 246),
            jump_down: Color::Rgb(22, 163, 74),
            typing_dot: Color::Rgb(35, 204, 150),
        }
    }

    /// Interpolate a color toward the background, for fades.
    ///
    /// `t` of 0.0 yields the background, 1.0 the full color. Non-RGB colors
    /// pass through unchanged.
    pub fn fade(&self, color: Color, t: f32) -> Color {
        match (color, self.background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let lerp = |from: u8, to: u8| -> u8 {
                    (from as f32 + (to as f32 - from as f32) * t).round() as u8
                };
                Color::Rgb(lerp(br, r), lerp(bg, g), lerp(bb, b))
            }
            _ => color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_endpoints() {
        let theme = Theme::dark();
        assert_eq!(theme.fade(theme.text, 1.0), theme.text);
        assert_eq!(theme.fade(theme.text, 0.0), theme.background);
    }
}
