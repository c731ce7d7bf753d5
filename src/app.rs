//! Application state and core logic

use crate::config::SiteConfig;
use crate::content::{self, ChannelKind};
use crate::state::{
    AppState, ContactForm, Form, FormButton, FormVariant, Section, SplashState, SubmitAttempt,
    View,
};
use crate::submission::{InquirySubmitter, SubmissionOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Delivers accepted inquiries
    submitter: Arc<dyn InquirySubmitter>,
    /// Spawned submissions report back here
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcome_rx: UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &SiteConfig, submitter: Arc<dyn InquirySubmitter>) -> Self {
        let reduced_motion = config.reduced_motion();
        let mut state = AppState::new(config.particle_density(), reduced_motion);
        let splash_state = if reduced_motion {
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new(Instant::now()))
        };
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            state,
            submitter,
            outcome_tx,
            outcome_rx,
            quit: false,
            status_message: None,
            splash_state,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, now: Instant, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(now, terminal_height);
            if splash.is_complete() {
                self.finish_splash();
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Page;
    }

    /// Advance animations and apply finished submissions
    pub fn tick(&mut self, now: Instant) {
        self.state.tick(now);
        self.drain_outcomes();
    }

    /// Deliver a new drawing area to the hero particle field
    pub fn resize(&mut self, width: u16, height: u16) {
        self.state.particles.resize(width, height);
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True when the loop should poll at animation rate
    pub fn wants_fast_tick(&self) -> bool {
        self.in_splash() || self.state.is_animating()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if self.in_splash() {
            self.finish_splash();
            return Ok(());
        }

        match self.state.focused_form() {
            Some(variant) => self.handle_form_key(variant, key),
            None => self.handle_page_key(key),
        }
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.state.next_section(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.state.prev_section(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Home => self.state.go_to_section(Section::Hero),
            KeyCode::Char(c @ '0'..='9') => {
                if let Some(section) = c.to_digit(10).and_then(Section::from_nav_number) {
                    self.state.go_to_section(section);
                }
            }
            KeyCode::Char('g') => self.open_quote(),
            KeyCode::Char('p') => self.state.go_to_section(Section::Products),
            KeyCode::Char('e') => self.copy_contact(ChannelKind::Email),
            KeyCode::Char('t') => self.copy_contact(ChannelKind::Phone),
            KeyCode::Enter | KeyCode::Char('f') => match self.state.section {
                Section::Hero => self.open_quote(),
                Section::Contact => self.state.contact_form_focused = true,
                _ => {}
            },
            _ => {}
        }
    }

    /// Open the standalone quote form
    pub fn open_quote(&mut self) {
        tracing::debug!("Opening quote form");
        self.state.current_view = View::Quote;
    }

    fn leave_form(&mut self, variant: FormVariant) {
        match variant {
            FormVariant::Contact => self.state.contact_form_focused = false,
            FormVariant::Quote => self.state.current_view = View::Page,
        }
    }

    fn handle_form_key(&mut self, variant: FormVariant, key: KeyEvent) {
        let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::COPY_MODIFIER);

        match key.code {
            KeyCode::Esc => self.leave_form(variant),
            KeyCode::Char('s') if shortcut => {
                self.submit_form(variant);
            }
            KeyCode::Char('l') if shortcut => {
                self.clear_form(variant);
            }
            _ => {
                let form = self.state.form_mut(variant);
                if form.is_buttons_row_active() {
                    if let Some(button) = Self::buttons_row_key(form, key) {
                        match button {
                            FormButton::Send => {
                                self.submit_form(variant);
                            }
                            FormButton::Clear => {
                                self.clear_form(variant);
                            }
                        }
                    }
                } else {
                    Self::field_key(form, key);
                }
            }
        }
    }

    /// Navigation on the buttons row; returns the button to press on Enter
    fn buttons_row_key(form: &mut ContactForm, key: KeyEvent) -> Option<FormButton> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                form.toggle_button()
            }
            KeyCode::Enter | KeyCode::Char(' ') => return Some(form.selected_button),
            _ => {}
        }
        None
    }

    fn field_key(form: &mut ContactForm, key: KeyEvent) {
        let on_select = form
            .active_form_field()
            .is_some_and(|f| f.kind.is_select());

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Right | KeyCode::Char(' ') if on_select => {
                form.cycle_option(true);
            }
            KeyCode::Left if on_select => {
                form.cycle_option(false);
            }
            KeyCode::Enter => {
                if !form.newline() {
                    form.next_field();
                }
            }
            KeyCode::Char(c) => {
                form.input_char(c);
            }
            KeyCode::Backspace => {
                form.backspace();
            }
            _ => {}
        }
    }

    /// Validate a form and, when accepted, deliver it in the background
    pub fn submit_form(&mut self, variant: FormVariant) -> SubmitAttempt {
        let attempt = self.state.form_mut(variant).attempt_submit();

        match &attempt {
            SubmitAttempt::Accepted(inquiry) => {
                tracing::info!(
                    id = %inquiry.id,
                    form = ?variant,
                    inquiry_type = ?inquiry.inquiry_type,
                    "Inquiry accepted, submitting"
                );
                let submitter = Arc::clone(&self.submitter);
                let tx = self.outcome_tx.clone();
                let inquiry = inquiry.clone();
                tokio::spawn(async move {
                    let result = submitter.submit(&inquiry).await;
                    // Receiver lives as long as the App; a send error means we are shutting down
                    let _ = tx.send(SubmissionOutcome {
                        form: variant,
                        result,
                    });
                });
            }
            SubmitAttempt::Rejected => {
                self.status_message = Some("Please correct the highlighted fields".to_string());
            }
            SubmitAttempt::Ignored => {
                tracing::debug!(form = ?variant, "Submit ignored while a submission is in flight");
            }
        }
        attempt
    }

    pub fn clear_form(&mut self, variant: FormVariant) -> bool {
        let cleared = self.state.form_mut(variant).clear();
        if !cleared {
            tracing::debug!(form = ?variant, "Clear ignored while a submission is in flight");
        }
        cleared
    }

    /// Apply every finished submission without waiting
    pub fn drain_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(&outcome);
            applied += 1;
        }
        applied
    }

    /// Wait for the next finished submission and apply it
    #[cfg(test)]
    pub async fn next_outcome(&mut self) -> Option<SubmissionOutcome> {
        let outcome = self.outcome_rx.recv().await?;
        self.apply_outcome(&outcome);
        Some(outcome)
    }

    fn apply_outcome(&mut self, outcome: &SubmissionOutcome) {
        let form = self.state.form_mut(outcome.form);
        if form.resolve(&outcome.result) && outcome.result.is_ok() {
            tracing::info!(form = ?outcome.form, "Inquiry submitted");
        }
    }

    /// Copy a contact channel to the clipboard
    pub fn copy_contact(&mut self, kind: ChannelKind) {
        let text = match kind {
            ChannelKind::Email => content::SALES_EMAIL,
            ChannelKind::Phone => content::SALES_PHONE,
            ChannelKind::Address => return,
        };
        match self.copy_to_clipboard(text) {
            Ok(()) => self.status_message = Some(format!("Copied {text} to clipboard")),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard unavailable");
                self.push_error(format!("Could not copy to clipboard.\n{e}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
