//! Message list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::StatefulWidget,
};

use crate::chat::{Message, Sender};
use crate::tui::theme::Theme;

/// State for the message list
#[derive(Debug, Default)]
pub struct MessageListState {
    /// Current scroll offset (in lines)
    pub offset: usize,
    /// Total content height (in lines)
    pub content_height: usize,
    /// Viewport height
    pub viewport_height: usize,
}

impl MessageListState {
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max_offset = self.content_height.saturating_sub(self.viewport_height);
        self.offset = (self.offset + amount).min(max_offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.content_height.saturating_sub(self.viewport_height);
    }
}

/// Widget for rendering the message list
///
/// The seed greeting renders as a welcome card; every other message renders
/// as a sender line, wrapped text, and an `HH:MM` footer. User messages sit
/// against the right edge, bot messages against the left.
pub struct MessageList<'a> {
    messages: &'a [Message],
    theme: &'a Theme,
    is_loading: bool,
    typing_dots: [bool; 3],
    fade: f32,
}

impl<'a> MessageList<'a> {
    pub fn new(messages: &'a [Message], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            is_loading: false,
            typing_dots: [false; 3],
            fade: 1.0,
        }
    }

    /// Show the typing indicator below the last message.
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Which typing dots are currently lit.
    pub fn typing_dots(mut self, dots: [bool; 3]) -> Self {
        self.typing_dots = dots;
        self
    }

    /// Entry-fade opacity, `0.0..=1.0`.
    pub fn fade(mut self, fade: f32) -> Self {
        self.fade = fade.clamp(0.0, 1.0);
        self
    }

    fn faded(&self, color: ratatui::style::Color) -> ratatui::style::Color {
        self.theme.fade(color, self.fade)
    }

    /// Pad a line so it ends at the right edge of the viewport.
    fn align_right(line: Line<'static>, width: usize) -> Line<'static> {
        let pad = width.saturating_sub(line.width());
        if pad == 0 {
            return line;
        }
        let mut spans = vec![Span::raw(" ".repeat(pad))];
        spans.extend(line.spans);
        Line::from(spans)
    }

    fn welcome_card(&self, bubble_width: usize) -> Vec<Line<'static>> {
        let title_style = Style::default()
            .fg(self.faded(self.theme.accent))
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(self.faded(self.theme.text_muted));
        let text_style = Style::default().fg(self.faded(self.theme.text));

        let mut lines = vec![
            Line::from(Span::styled("Welcome to Nutrino", title_style)),
            Line::from(vec![
                Span::styled("● ", Style::default().fg(self.faded(self.theme.accent))),
                Span::styled("AI Health Assistant", muted),
            ]),
            Line::from(""),
        ];

        if let Some(greeting) = self.messages.first() {
            for wrapped in textwrap::wrap(&greeting.text, bubble_width) {
                lines.push(Line::from(Span::styled(wrapped.to_string(), text_style)));
            }
        }

        lines.push(Line::from(Span::styled(
            "─".repeat(bubble_width),
            Style::default().fg(self.faded(self.theme.border)),
        )));
        for tip in [
            "• Personalized nutrition advice",
            "• Dietary recommendations based on your needs",
            "• Health tracking and progress monitoring",
        ] {
            lines.push(Line::from(Span::styled(tip.to_string(), muted)));
        }
        lines
    }

    fn bubble(&self, message: &Message, width: usize, bubble_width: usize) -> Vec<Line<'static>> {
        let is_user = message.sender == Sender::User;
        let (name, name_color) = if is_user {
            ("You", self.theme.send)
        } else {
            ("Nutrino", self.theme.accent)
        };

        let name_style = Style::default()
            .fg(self.faded(name_color))
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(self.faded(self.theme.text));
        let time_style = Style::default().fg(self.faded(self.theme.text_muted));

        let mut lines = vec![Line::from(Span::styled(name, name_style))];
        for wrapped in textwrap::wrap(&message.text, bubble_width) {
            lines.push(Line::from(Span::styled(wrapped.to_string(), text_style)));
        }
        lines.push(Line::from(Span::styled(message.time_label(), time_style)));

        if is_user {
            lines = lines
                .into_iter()
                .map(|line| Self::align_right(line, width))
                .collect();
        }
        lines
    }

    fn typing_indicator(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(5);
        for (i, lit) in self.typing_dots.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let color = if *lit {
                self.faded(self.theme.typing_dot)
            } else {
                self.faded(self.theme.border)
            };
            spans.push(Span::styled("●", Style::default().fg(color)));
        }
        Line::from(spans)
    }

    /// Lay the whole conversation out as lines for the current width.
    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        if width < 4 {
            return Vec::new();
        }
        // Bubbles take up to three quarters of the viewport, like the
        // original's maxWidth: 85%
        let bubble_width = (width * 3 / 4).clamp(1, width.saturating_sub(2));

        let mut lines = Vec::new();
        for (index, message) in self.messages.iter().enumerate() {
            if index == 0 && message.sender == Sender::Bot {
                lines.extend(self.welcome_card(bubble_width));
            } else {
                lines.extend(self.bubble(message, width, bubble_width));
            }
            // Spacer between bubbles
            lines.push(Line::from(""));
        }

        if self.is_loading {
            lines.push(self.typing_indicator());
            lines.push(Line::from(""));
        }
        lines
    }
}

impl StatefulWidget for MessageList<'_> {
    type State = MessageListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let lines = self.build_lines(area.width as usize);

        state.content_height = lines.len();
        state.viewport_height = area.height as usize;
        let max_offset = state.content_height.saturating_sub(state.viewport_height);
        state.offset = state.offset.min(max_offset);

        for (row, line) in lines
            .iter()
            .skip(state.offset)
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_line(area.x, area.y + row as u16, line, area.width);
        }
    }
}
