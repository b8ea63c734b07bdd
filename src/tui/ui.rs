//! Main UI rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::animation::{entry_progress, typing_dots};
use super::app::ChatSession;
use super::hit_test::ClickTarget;
use super::widgets::MessageList;

/// Render the entire screen
pub fn render(frame: &mut Frame, session: &mut ChatSession) {
    session.hit_registry.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Messages
            Constraint::Length(3), // Input
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_messages(frame, session, chunks[1]);
    render_input(frame, session, chunks[2]);

    // Floating jump button sits on top of the message list
    if session.button_fade.is_visible() {
        render_scroll_button(frame, session, chunks[1]);
    }
}

fn render_header(frame: &mut Frame, session: &mut ChatSession, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(session.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(inner);

    let fade = entry_progress(session.mounted_at.elapsed());

    let back = Paragraph::new(Span::styled(
        "←",
        Style::default()
            .fg(session.theme.fade(session.theme.back, fade))
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(back, chunks[0]);
    session.hit_registry.register(chunks[0], ClickTarget::Back);

    let title = Paragraph::new(Span::styled(
        "Nutrino Chat",
        Style::default()
            .fg(session.theme.fade(session.theme.text, fade))
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let glyph = Paragraph::new(Span::styled(
        "🤖",
        Style::default().fg(session.theme.fade(session.theme.accent, fade)),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(glyph, chunks[2]);
}

fn render_messages(frame: &mut Frame, session: &mut ChatSession, area: Rect) {
    let dots = session
        .loading_since
        .map(|since| typing_dots(since.elapsed()))
        .unwrap_or_default();

    let message_list = MessageList::new(session.conversation.messages(), &session.theme)
        .loading(session.is_loading)
        .typing_dots(dots)
        .fade(entry_progress(session.mounted_at.elapsed()));

    frame.render_stateful_widget(message_list, area, &mut session.message_list_state);
}

fn render_scroll_button(frame: &mut Frame, session: &mut ChatSession, messages_area: Rect) {
    if messages_area.width < 8 || messages_area.height < 2 {
        return;
    }

    let button_area = Rect::new(
        messages_area.x + messages_area.width - 6,
        messages_area.y + messages_area.height - 2,
        5,
        1,
    );

    let (glyph, color) = if session.scroll.scrolling_up() {
        ("↑", session.theme.jump_up)
    } else {
        ("↓", session.theme.jump_down)
    };

    let button = Paragraph::new(Span::styled(
        format!("[ {glyph} ]"),
        Style::default()
            .fg(session.theme.fade(color, session.button_fade.value()))
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Clear, button_area);
    frame.render_widget(button, button_area);
    session
        .hit_registry
        .register(button_area, ClickTarget::ScrollJump);
}

fn render_input(frame: &mut Frame, session: &mut ChatSession, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    let border_color = if session.is_loading {
        session.theme.border
    } else {
        session.theme.accent
    };
    session.input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Message "),
    );
    frame.render_widget(&session.input, chunks[0]);

    // Send control greys out while the buffer trims empty, like the
    // original's disabled send button
    let has_text = !session.input.lines().join("\n").trim().is_empty();
    let send_color = if has_text {
        session.theme.send
    } else {
        session.theme.text_muted
    };
    let send = Paragraph::new(Span::styled(
        "➤",
        Style::default().fg(send_color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(session.theme.border)),
    );
    frame.render_widget(send, chunks[1]);
    session.hit_registry.register(chunks[1], ClickTarget::Send);
}
