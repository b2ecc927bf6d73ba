use ratatui::style::{Color, Modifier, Style};

/// Visual styling for the two panes.
#[derive(Debug, Clone)]
pub struct PaneStyles {
    /// Heading of the active section.
    pub active_heading: Style,
    /// All other headings.
    pub inactive_heading: Style,
    /// Content pane text.
    pub content: Style,
    /// Vertical divider between the panes.
    pub divider: Style,
}

impl Default for PaneStyles {
    fn default() -> Self {
        Self {
            active_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            inactive_heading: Style::default().fg(Color::Gray),
            content: Style::default(),
            divider: Style::default().fg(Color::DarkGray),
        }
    }
}
