//! Application state definitions

use super::animation::{CounterAnimation, Density, ParticleField, RevealDirection, RevealState};
use super::forms::ContactForm;
use super::FormVariant;
use crate::content;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    /// Storefront sections under the navigation header
    #[default]
    Page,
    /// Standalone "Request a Quote" form
    Quote,
}

/// Page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Products,
    Applications,
    Quality,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Products,
        Section::Applications,
        Section::Quality,
        Section::About,
        Section::Contact,
    ];

    /// Sections listed in the header navigation
    pub const NAV: [Section; 5] = [
        Section::Products,
        Section::Applications,
        Section::Quality,
        Section::About,
        Section::Contact,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Products => "Products",
            Section::Applications => "Applications",
            Section::Quality => "Quality",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    /// Next section, stopping at the last one
    pub fn next(&self) -> Self {
        Self::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Section::Contact)
    }

    /// Previous section, stopping at the hero
    pub fn prev(&self) -> Self {
        self.index()
            .checked_sub(1)
            .map(|i| Self::ALL[i])
            .unwrap_or(Section::Hero)
    }

    /// Section for a 1-based navigation number key
    pub fn from_nav_number(n: u32) -> Option<Self> {
        match n {
            0 => Some(Section::Hero),
            n => Self::NAV.get(n as usize - 1).copied(),
        }
    }

    fn reveal_direction(&self) -> RevealDirection {
        match self {
            Section::Hero => RevealDirection::Down,
            Section::About => RevealDirection::Left,
            Section::Contact => RevealDirection::Right,
            _ => RevealDirection::Up,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub section: Section,
    pub scroll_offset: u16,

    // Forms
    pub contact_form: ContactForm,
    pub quote_form: ContactForm,
    /// Keys in the contact section go to the form instead of the page
    pub contact_form_focused: bool,

    // Animation
    pub now: Instant,
    pub reduced_motion: bool,
    pub reveals: [RevealState; 6],
    pub stats: Vec<CounterAnimation>,
    pub particles: ParticleField,

    /// Pending error messages, shown one at a time in a modal dialog
    pub error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Density::default(), false)
    }
}

impl AppState {
    pub fn new(density: Density, reduced_motion: bool) -> Self {
        let reveals = Section::ALL.map(|s| {
            let reveal = RevealState::new(s.reveal_direction());
            if s == Section::Contact {
                reveal.with_delay(Duration::from_millis(200))
            } else {
                reveal
            }
        });
        let stats = content::STATS
            .iter()
            .map(|s| {
                CounterAnimation::new(s.target)
                    .with_decimals(s.decimals)
                    .with_suffix(s.suffix)
            })
            .collect();

        Self {
            current_view: View::default(),
            section: Section::default(),
            scroll_offset: 0,
            contact_form: ContactForm::new(FormVariant::Contact),
            quote_form: ContactForm::new(FormVariant::Quote),
            contact_form_focused: false,
            now: Instant::now(),
            reduced_motion,
            reveals,
            stats,
            particles: ParticleField::new(density, 0, 0),
            error_queue: VecDeque::new(),
        }
    }

    pub fn form(&self, variant: FormVariant) -> &ContactForm {
        match variant {
            FormVariant::Contact => &self.contact_form,
            FormVariant::Quote => &self.quote_form,
        }
    }

    pub fn form_mut(&mut self, variant: FormVariant) -> &mut ContactForm {
        match variant {
            FormVariant::Contact => &mut self.contact_form,
            FormVariant::Quote => &mut self.quote_form,
        }
    }

    /// Form receiving keystrokes, if any
    pub fn focused_form(&self) -> Option<FormVariant> {
        match self.current_view {
            View::Quote => Some(FormVariant::Quote),
            View::Page if self.section == Section::Contact && self.contact_form_focused => {
                Some(FormVariant::Contact)
            }
            _ => None,
        }
    }

    /// Header turns solid once the page has moved past the top of the hero
    pub fn is_scrolled(&self) -> bool {
        self.section != Section::Hero || self.scroll_offset > 0
    }

    /// Jump to a section, resetting the scroll position
    pub fn go_to_section(&mut self, section: Section) {
        if section != self.section {
            tracing::debug!(from = ?self.section, to = ?section, "Section changed");
            self.reveals[self.section.index()].hide();
        }
        self.section = section;
        self.scroll_offset = 0;
        self.contact_form_focused = false;
        self.reveal_current();
    }

    pub fn next_section(&mut self) {
        self.go_to_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.go_to_section(self.section.prev());
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn reveal(&self, section: Section) -> &RevealState {
        &self.reveals[section.index()]
    }

    fn reveal_current(&mut self) {
        let now = self.now;
        self.reveals[self.section.index()].trigger(now);
        if self.section == Section::Products {
            for stat in &mut self.stats {
                if self.reduced_motion {
                    stat.finish();
                } else {
                    stat.start(now);
                }
            }
        }
    }

    /// Advance animations to `now`
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        if self.current_view == View::Page {
            self.reveal_current();
            if self.section == Section::Hero && !self.reduced_motion {
                self.particles.step();
            }
        }
    }

    /// True while something on screen is moving or a submission is in flight
    pub fn is_animating(&self) -> bool {
        let now = self.now;
        let page_moving = self.current_view == View::Page
            && !self.reduced_motion
            && (self.section == Section::Hero
                || self.reveal(self.section).is_animating(now)
                || self.stats.iter().any(|s| s.is_running(now)));

        page_moving || self.contact_form.is_submitting() || self.quote_form.is_submitting()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
