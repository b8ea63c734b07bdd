//! Main application state and event loop

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::{CursorMove, Input, TextArea};

use super::animation::CrossFade;
use super::event::{AppEvent, ClipboardManager, EventHandler};
use super::hit_test::{ClickTarget, HitTestRegistry};
use super::scroll::ScrollTracker;
use super::theme::Theme;
use super::ui;
use super::widgets::MessageListState;
use crate::chat::{Conversation, Reply, ReplyHandle, ScriptedResponder};
use crate::haptics::{Haptics, Intensity, TerminalHaptics};
use crate::nav::Navigator;
use crate::runner::AppConfig;

/// Lines moved per wheel notch
const SCROLL_STEP: usize = 3;

/// Leaves the screen by asking the event loop to shut down.
///
/// There is no screen stack behind the chat, so back is equivalent to quit.
struct ExitNavigator {
    events: mpsc::UnboundedSender<AppEvent>,
}

impl Navigator for ExitNavigator {
    fn back(&mut self) {
        let _ = self.events.send(AppEvent::Quit);
    }
}

/// Screen state and transitions, independent of the terminal.
///
/// Everything the send/reply flow touches lives here so it can be driven
/// without raw mode or a real backend; [`ChatApp`] owns the terminal and
/// feeds events into this.
pub struct ChatSession {
    /// Color theme
    pub theme: Theme,
    /// Conversation state
    pub conversation: Conversation,
    /// Scripted reply scheduling
    responder: ScriptedResponder,
    /// Sender handed to each scheduled reply
    replies_tx: mpsc::UnboundedSender<Reply>,
    /// Cancellation handles for replies still in flight
    pending_replies: Vec<ReplyHandle>,
    /// True between a send and its scripted reply
    pub is_loading: bool,
    /// When the current loading phase started (drives the typing dots)
    pub loading_since: Option<Instant>,
    /// Text input area
    pub input: TextArea<'static>,
    /// Haptic feedback sink
    haptics: Box<dyn Haptics>,
    /// Back-navigation sink
    navigator: Box<dyn Navigator>,
    /// Scroll-direction bookkeeping
    pub scroll: ScrollTracker,
    /// Message list scroll state
    pub message_list_state: MessageListState,
    /// Hit test registry for mouse interaction
    pub hit_registry: HitTestRegistry,
    /// When the screen mounted (drives the entry fade)
    pub mounted_at: Instant,
    /// Jump-button cross-fade
    pub button_fade: CrossFade,
}

impl ChatSession {
    pub fn new(
        responder: ScriptedResponder,
        replies_tx: mpsc::UnboundedSender<Reply>,
        haptics: Box<dyn Haptics>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        let theme = Theme::dark();
        let input = Self::build_input(&theme);
        Self {
            theme,
            conversation: Conversation::new(),
            responder,
            replies_tx,
            pending_replies: Vec::new(),
            is_loading: false,
            loading_since: None,
            input,
            haptics,
            navigator,
            scroll: ScrollTracker::new(),
            message_list_state: MessageListState::default(),
            hit_registry: HitTestRegistry::new(),
            mounted_at: Instant::now(),
            button_fade: CrossFade::new(),
        }
    }

    /// Append the input buffer as a user message and schedule the reply
    pub fn send_message(&mut self) {
        let content: String = self.input.lines().join("\n");
        if content.trim().is_empty() {
            // Silently ignored; the input buffer is left untouched
            return;
        }

        self.haptics.impact(Intensity::Light);
        self.conversation.push_user(&content);
        self.input = Self::build_input(&self.theme);
        self.is_loading = true;
        self.loading_since = Some(Instant::now());

        let handle = self.responder.schedule(self.replies_tx.clone());
        self.pending_replies.push(handle);

        self.message_list_state.scroll_to_bottom();
        self.observe_scroll();
        tracing::debug!(chars = content.len(), "user message sent");
    }

    /// Handle an arriving scripted reply
    pub fn handle_reply(&mut self, reply: Reply) {
        tracing::debug!(chars = reply.text.len(), "scripted reply arrived");
        self.conversation.push_bot(&reply.text);
        self.is_loading = false;
        self.loading_since = None;
        self.pending_replies.retain(|handle| !handle.is_finished());
        self.message_list_state.scroll_to_bottom();
        // Resample so the jump button reflects the new position
        self.observe_scroll();
    }

    /// Back gesture: medium haptic, then hand off to the navigator
    pub fn navigate_back(&mut self) {
        self.haptics.impact(Intensity::Medium);
        self.navigator.back();
    }

    /// Jump to the top while scrolling up, otherwise to the bottom
    pub fn jump(&mut self) {
        if self.scroll.scrolling_up() {
            self.message_list_state.scroll_to_top();
        } else {
            self.message_list_state.scroll_to_bottom();
        }
        self.observe_scroll();
    }

    pub fn observe_scroll(&mut self) {
        self.scroll.observe(self.message_list_state.offset);
    }

    /// Stop every reply still in flight.
    pub fn cancel_pending(&mut self) {
        for handle in self.pending_replies.drain(..) {
            handle.cancel();
        }
    }

    fn build_input(theme: &Theme) -> TextArea<'static> {
        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        input.set_placeholder_text("Ask me about nutrition, health...");
        input.set_placeholder_style(Style::default().fg(theme.text_muted));
        input.set_style(Style::default().fg(theme.text).bg(theme.input_background));
        input.move_cursor(CursorMove::End);
        input
    }
}

/// Main chat application
pub struct ChatApp {
    /// Terminal instance
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Event handler (optional so we can take it out in run loop)
    events: Option<EventHandler>,
    /// Whether the app should quit
    should_quit: bool,
    /// Screen state
    pub session: ChatSession,
    /// Receiver side (taken out in run loop)
    replies_rx: Option<mpsc::UnboundedReceiver<Reply>>,
    /// Clipboard manager
    pub clipboard: ClipboardManager,
    /// Last animation tick
    last_tick: Instant,
}

impl ChatApp {
    /// Create a new chat application
    pub fn new(config: AppConfig) -> Result<Self> {
        // Initialize terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        // Enable keyboard enhancement where supported so Shift+Enter is
        // distinguishable; Alt+Enter stays as the fallback newline
        if crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false) {
            let _ = execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            );
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let events = EventHandler::new(Duration::from_millis(33));
        let navigator = ExitNavigator {
            events: events.sender(),
        };
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        let session = ChatSession::new(
            ScriptedResponder::new(config.reply_delay),
            replies_tx,
            Box::new(TerminalHaptics),
            Box::new(navigator),
        );

        Ok(Self {
            terminal,
            events: Some(events),
            should_quit: false,
            session,
            replies_rx: Some(replies_rx),
            clipboard: ClipboardManager::new(),
            last_tick: Instant::now(),
        })
    }

    /// Run the main event loop
    pub async fn run(&mut self) -> Result<()> {
        // Take channels out of self to avoid borrow conflicts in select!
        let mut events = self.events.take().expect("Events not initialized");
        let mut replies = self.replies_rx.take().expect("Replies not initialized");

        while !self.should_quit {
            // Draw UI
            let app_ptr: *mut ChatApp = self;
            self.terminal
                .draw(|frame| unsafe { ui::render(frame, &mut (*app_ptr).session) })?;

            tokio::select! {
                biased;  // Prefer replies over UI events

                Some(reply) = replies.recv() => {
                    self.session.handle_reply(reply);
                }
                maybe_event = events.next() => {
                    if let Some(event) = maybe_event {
                        self.handle_event(event)?;
                    }
                }
            }
        }

        // No state updates may land after the screen is gone
        self.session.cancel_pending();
        self.events = Some(events);

        Ok(())
    }

    /// Handle an application event
    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => {
                use crossterm::event::{KeyCode, KeyModifiers};

                match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('q'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                        self.should_quit = true;
                    }
                    (_, KeyCode::Esc) => {
                        self.session.navigate_back();
                    }
                    (KeyModifiers::CONTROL, KeyCode::Char('v')) => {
                        if let Some(text) = self.clipboard.paste() {
                            self.session.input.insert_str(&text);
                        }
                    }
                    (KeyModifiers::NONE, KeyCode::Enter)
                    | (KeyModifiers::NONE, KeyCode::Char('\n')) => {
                        self.session.send_message();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Enter)
                    | (KeyModifiers::ALT, KeyCode::Enter) => {
                        self.session.input.insert_newline();
                    }
                    (KeyModifiers::NONE, KeyCode::Home) => {
                        self.session.message_list_state.scroll_to_top();
                        self.session.observe_scroll();
                    }
                    (KeyModifiers::NONE, KeyCode::End) => {
                        self.session.message_list_state.scroll_to_bottom();
                        self.session.observe_scroll();
                    }
                    _ => {
                        self.session.input.input(Input::from(key));
                    }
                }
            }
            AppEvent::ScrollUp => {
                self.session.message_list_state.scroll_up(SCROLL_STEP);
                self.session.observe_scroll();
            }
            AppEvent::ScrollDown => {
                self.session.message_list_state.scroll_down(SCROLL_STEP);
                self.session.observe_scroll();
            }
            AppEvent::Click { row, col } => match self.session.hit_registry.hit_test(col, row) {
                Some(ClickTarget::Back) => self.session.navigate_back(),
                Some(ClickTarget::ScrollJump) => self.session.jump(),
                Some(ClickTarget::Send) => self.session.send_message(),
                None => {}
            },
            AppEvent::Resize(_, _) => {
                // ratatui resizes on the next draw
            }
            AppEvent::Tick => {
                let now = Instant::now();
                let dt = now - self.last_tick;
                self.last_tick = now;
                self.session
                    .button_fade
                    .tick(dt, self.session.scroll.button_visible());
            }
            AppEvent::Paste(text) => {
                self.session.input.insert_str(&text);
            }
            AppEvent::Quit => {
                self.should_quit = true;
            }
        }
        Ok(())
    }
}

impl Drop for ChatApp {
    fn drop(&mut self) {
        // Restore terminal - order matters!
        let _ = execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags);
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingHaptics(Rc<RefCell<Vec<Intensity>>>);

    impl Haptics for RecordingHaptics {
        fn impact(&mut self, intensity: Intensity) {
            self.0.borrow_mut().push(intensity);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator(Rc<RefCell<usize>>);

    impl Navigator for RecordingNavigator {
        fn back(&mut self) {
            *self.0.borrow_mut() += 1;
        }
    }

    fn session() -> (
        ChatSession,
        RecordingHaptics,
        RecordingNavigator,
        mpsc::UnboundedReceiver<Reply>,
    ) {
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        let haptics = RecordingHaptics::default();
        let navigator = RecordingNavigator::default();
        let session = ChatSession::new(
            ScriptedResponder::new(Duration::from_millis(1500)),
            replies_tx,
            Box::new(haptics.clone()),
            Box::new(navigator.clone()),
        );
        (session, haptics, navigator, replies_rx)
    }

    #[test]
    fn whitespace_send_leaves_everything_untouched() {
        let (mut session, haptics, _navigator, _replies) = session();
        session.input.insert_str("   ");

        session.send_message();

        assert_eq!(session.input.lines(), ["   "]);
        assert_eq!(session.conversation.len(), 1);
        assert!(!session.is_loading);
        assert!(haptics.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn loading_spans_send_to_reply() {
        let (mut session, _haptics, _navigator, _replies) = session();
        session.input.insert_str("what should I eat?");

        session.send_message();
        assert!(session.is_loading);
        assert!(session.loading_since.is_some());
        assert_eq!(session.conversation.len(), 2);
        assert_eq!(session.input.lines(), [""]);

        session.handle_reply(Reply {
            text: "some advice".to_string(),
        });
        assert!(!session.is_loading);
        assert!(session.loading_since.is_none());
        assert_eq!(session.conversation.len(), 3);
    }

    #[tokio::test]
    async fn haptics_light_on_send_medium_on_back() {
        let (mut session, haptics, navigator, _replies) = session();
        session.input.insert_str("hello");

        session.send_message();
        session.navigate_back();

        assert_eq!(
            *haptics.0.borrow(),
            vec![Intensity::Light, Intensity::Medium]
        );
        assert_eq!(*navigator.0.borrow(), 1);
    }

    #[test]
    fn reply_resamples_the_scroll_position() {
        let (mut session, _haptics, _navigator, _replies) = session();
        session.message_list_state.content_height = 100;
        session.message_list_state.viewport_height = 40;
        session.message_list_state.offset = 350;
        session.observe_scroll();
        assert!(session.scroll.button_visible());

        session.handle_reply(Reply {
            text: "done".to_string(),
        });

        assert_eq!(session.message_list_state.offset, 60);
        assert!(!session.scroll.button_visible());
        assert!(session.scroll.scrolling_up());
    }
}
