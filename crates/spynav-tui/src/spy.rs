//! The two-pane scroll-spy component.
//!
//! [`ScrollSpy`] owns the section list, the synchronization state, one
//! scroll animator per pane, and the measured pane layouts. The embedding
//! application feeds it events and renders it once per frame; visibility
//! evaluation, active-heading reconciliation, and guarded programmatic
//! scrolling all happen internally.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    widgets::{Block, Borders},
    Frame,
};
use tracing::debug;

use spynav_core::{Result, Sections, SpyConfig, SpyHooks, SpyState};

use crate::event::SpyEvent;
use crate::input::{self, Action};
use crate::layout::PaneLayout;
use crate::scroll::{AnimationTick, ScrollAnimator};
use crate::style::PaneStyles;
use crate::widgets::{ContentViewWidget, HeadingListWidget};

/// Rows scrolled per mouse wheel tick.
const WHEEL_STEP: i32 = 3;

/// Pane holding input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Navigation,
    Content,
}

pub struct ScrollSpy {
    sections: Sections,
    config: SpyConfig,
    styles: PaneStyles,
    state: SpyState,
    nav_anim: ScrollAnimator,
    content_anim: ScrollAnimator,
    nav_layout: Option<PaneLayout>,
    content_layout: Option<PaneLayout>,
    nav_area: Option<Rect>,
    content_area: Option<Rect>,
    focus: Focus,
}

impl ScrollSpy {
    pub fn new(
        headings: impl IntoIterator<Item = impl Into<String>>,
        contents: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        Self::with_config(headings, contents, SpyConfig::default())
    }

    pub fn with_config(
        headings: impl IntoIterator<Item = impl Into<String>>,
        contents: impl IntoIterator<Item = impl Into<String>>,
        config: SpyConfig,
    ) -> Result<Self> {
        config.validate()?;
        let sections = Sections::from_parallel(headings, contents)?;
        let state = SpyState::new(sections.len(), SpyHooks::new());
        let nav_anim = ScrollAnimator::new(config.scroll.clone());
        let content_anim = ScrollAnimator::new(config.scroll.clone());

        Ok(Self {
            sections,
            config,
            styles: PaneStyles::default(),
            state,
            nav_anim,
            content_anim,
            nav_layout: None,
            content_layout: None,
            nav_area: None,
            content_area: None,
            focus: Focus::Navigation,
        })
    }

    /// Attach embedder callbacks.
    pub fn hooks(mut self, hooks: SpyHooks) -> Self {
        self.state.set_hooks(hooks);
        self
    }

    /// Override the default pane styling.
    pub fn styles(mut self, styles: PaneStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Current content-pane scroll offset in rows.
    pub fn content_offset(&self) -> u16 {
        self.content_anim.offset()
    }

    /// Whether the next frame should run at animation rate.
    pub fn needs_fast_update(&self) -> bool {
        self.nav_anim.needs_update() || self.content_anim.needs_update()
    }

    /// Feed one terminal event through the component. Returns `true` when
    /// the user asked to quit.
    pub fn handle_event(&mut self, event: SpyEvent) -> bool {
        match event {
            SpyEvent::Key(key) => {
                let action = input::handle_key_event(key);
                if action == Action::Quit {
                    return true;
                }
                self.handle_action(action);
            }
            SpyEvent::Mouse(mouse) => self.handle_mouse(mouse),
            SpyEvent::Tick => self.on_tick(),
            // The next render remeasures against the new areas.
            SpyEvent::Resize(_, _) => {}
        }
        false
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::FocusLeft => self.focus = Focus::Navigation,
            Action::FocusRight => self.focus = Focus::Content,
            Action::MoveDown => self.move_line(1),
            Action::MoveUp => self.move_line(-1),
            Action::ScrollHalfPageDown => self.scroll_content(self.half_page()),
            Action::ScrollHalfPageUp => self.scroll_content(-self.half_page()),
            Action::ScrollPageDown => self.scroll_content(self.full_page()),
            Action::ScrollPageUp => self.scroll_content(-self.full_page()),
            Action::JumpToTop => match self.focus {
                Focus::Navigation => self.select_section(0),
                Focus::Content => self.jump_content_to(0),
            },
            Action::JumpToBottom => match self.focus {
                Focus::Navigation => self.select_section(self.sections.last_index()),
                Focus::Content => self.jump_content_to(u16::MAX),
            },
            Action::Select => {
                if self.focus == Focus::Navigation {
                    self.select_section(self.state.active_index());
                }
            }
            Action::Quit | Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollDown => self.wheel(position, WHEEL_STEP),
            MouseEventKind::ScrollUp => self.wheel(position, -WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => self.click(position),
            _ => {}
        }
    }

    /// Jump to a section, animating the content pane. Out-of-range indices
    /// and selections during an in-flight programmatic scroll are dropped.
    pub fn select_section(&mut self, index: usize) {
        let Some(target) = self.state.select_section(index) else {
            return;
        };
        let Some(layout) = self.content_layout.as_ref() else {
            // Nothing measured yet: settle logically without animating.
            self.state.programmatic_scroll_done();
            return;
        };

        let top = layout.section_top(target).unwrap_or(0);
        let max = layout.max_offset();
        if !self.content_anim.scroll_to(top, max) {
            // Instant jump (or already there): complete in place.
            self.state.programmatic_scroll_done();
        }
    }

    /// Animate the navigation pane so the heading is fully visible.
    /// Out-of-range indices are dropped.
    pub fn scroll_to_heading(&mut self, index: usize) {
        if index >= self.sections.len() {
            return;
        }
        self.reveal_heading(index);
    }

    /// Advance animations by one frame.
    pub fn on_tick(&mut self) {
        if let Some(max) = self.nav_layout.as_ref().map(PaneLayout::max_offset) {
            self.nav_anim.update(max);
        }

        let Some(max) = self.content_layout.as_ref().map(PaneLayout::max_offset) else {
            return;
        };
        match self.content_anim.update(max) {
            AnimationTick::Idle => {}
            AnimationTick::Moving => {
                // User-driven smooth scrolling evaluates on every frame;
                // programmatic motion stays suppressed until it settles.
                if !self.state.is_scroll_in_flight() {
                    self.sync_from_content_scroll();
                }
            }
            AnimationTick::Finished => {
                if self.state.is_scroll_in_flight() {
                    self.state.programmatic_scroll_done();
                } else {
                    self.sync_from_content_scroll();
                }
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [nav_area, divider_area, content_area] = Layout::horizontal([
            Constraint::Fill(self.config.layout.navigation_weight),
            Constraint::Length(1),
            Constraint::Fill(self.config.layout.content_weight),
        ])
        .areas(area);

        self.relayout(nav_area, content_area);

        let divider = Block::default()
            .borders(Borders::LEFT)
            .border_style(self.styles.divider);
        frame.render_widget(divider, divider_area);

        HeadingListWidget::render(
            frame,
            nav_area,
            &self.sections,
            &self.config.layout,
            &self.styles,
            self.state.active_index(),
            self.nav_anim.offset(),
        );
        ContentViewWidget::render(
            frame,
            content_area,
            &self.sections,
            &self.config.layout,
            &self.styles,
            self.content_anim.offset(),
        );
    }

    /// Remeasure pane layouts when the rendered areas change.
    fn relayout(&mut self, nav_area: Rect, content_area: Rect) {
        if self.nav_area != Some(nav_area) || self.nav_layout.is_none() {
            debug!(?nav_area, "measuring navigation pane");
            let layout = PaneLayout::measure_nav(&self.sections, &self.config.layout, nav_area.height);
            self.nav_anim.clamp_to(layout.max_offset());
            self.nav_layout = Some(layout);
            self.nav_area = Some(nav_area);
        }
        if self.content_area != Some(content_area) || self.content_layout.is_none() {
            debug!(?content_area, "measuring content pane");
            let layout = PaneLayout::measure_content(
                &self.sections,
                &self.config.layout,
                content_area.width,
                content_area.height,
            );
            self.content_anim.clamp_to(layout.max_offset());
            self.content_layout = Some(layout);
            self.content_area = Some(content_area);
        }
    }

    fn move_line(&mut self, direction: i32) {
        match self.focus {
            Focus::Navigation => {
                let active = self.state.active_index();
                let next = if direction > 0 {
                    (active + 1).min(self.sections.last_index())
                } else {
                    active.saturating_sub(1)
                };
                if next != active {
                    self.select_section(next);
                }
            }
            Focus::Content => {
                let rows = i32::from(self.config.scroll.scroll_lines.max(1));
                self.scroll_content(direction * rows);
            }
        }
    }

    /// Scroll the content pane by a user-driven delta. Dropped while a
    /// programmatic scroll is in flight so completion lands exactly on the
    /// selected section.
    fn scroll_content(&mut self, delta: i32) {
        if delta == 0 || self.state.is_scroll_in_flight() {
            return;
        }
        let Some(max) = self.content_layout.as_ref().map(PaneLayout::max_offset) else {
            return;
        };

        let before = self.content_anim.offset();
        self.content_anim.scroll_by(delta, max);
        if self.content_anim.offset() != before {
            self.sync_from_content_scroll();
        }
    }

    /// User-driven jump to an absolute content offset.
    fn jump_content_to(&mut self, target: u16) {
        if self.state.is_scroll_in_flight() {
            return;
        }
        let Some(max) = self.content_layout.as_ref().map(PaneLayout::max_offset) else {
            return;
        };

        let before = self.content_anim.offset();
        self.content_anim.scroll_to(target.min(max), max);
        if self.content_anim.offset() != before {
            self.sync_from_content_scroll();
        }
    }

    /// Run evaluation + reconciliation against fresh geometry snapshots.
    fn sync_from_content_scroll(&mut self) {
        let (Some(content_layout), Some(nav_layout)) =
            (self.content_layout.as_ref(), self.nav_layout.as_ref())
        else {
            return;
        };

        let content_geometry = content_layout.geometry(self.content_anim.offset());
        let nav_geometry = nav_layout.geometry(self.nav_anim.offset());
        let reveal = self
            .state
            .handle_content_scroll(&content_geometry, &nav_geometry);
        if let Some(index) = reveal {
            self.reveal_heading(index);
        }
    }

    fn reveal_heading(&mut self, index: usize) {
        let Some(layout) = self.nav_layout.as_ref() else {
            return;
        };
        if let Some(target) = layout.reveal_offset(index, self.nav_anim.offset()) {
            self.nav_anim.scroll_to(target, layout.max_offset());
        }
    }

    fn half_page(&self) -> i32 {
        self.content_layout
            .as_ref()
            .map(|l| i32::from((l.viewport_height() / 2).max(1)))
            .unwrap_or(0)
    }

    fn full_page(&self) -> i32 {
        self.content_layout
            .as_ref()
            .map(|l| i32::from(l.viewport_height().max(1)))
            .unwrap_or(0)
    }

    fn wheel(&mut self, position: Position, delta: i32) {
        if self.nav_area.is_some_and(|a| a.contains(position)) {
            if let Some(max) = self.nav_layout.as_ref().map(PaneLayout::max_offset) {
                self.nav_anim.scroll_by(delta, max);
            }
        } else if self.content_area.is_some_and(|a| a.contains(position)) {
            self.scroll_content(delta);
        }
    }

    fn click(&mut self, position: Position) {
        if let Some(area) = self.nav_area.filter(|a| a.contains(position)) {
            self.focus = Focus::Navigation;
            let row = position.y - area.y;
            let index = self
                .nav_layout
                .as_ref()
                .and_then(|l| l.index_at(row, self.nav_anim.offset()));
            if let Some(index) = index {
                self.select_section(index);
            }
        } else if self.content_area.is_some_and(|a| a.contains(position)) {
            self.focus = Focus::Content;
        }
    }
}
