use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use spynav_core::{LayoutConfig, Sections};

use crate::layout::wrap_text;
use crate::style::PaneStyles;

pub struct ContentViewWidget;

impl ContentViewWidget {
    /// Render the content pane at the given scroll offset.
    ///
    /// Bodies are pre-wrapped with the same routine the layout measurement
    /// uses, so each section occupies exactly the rows its extent claims;
    /// ratatui's own wrapping stays off.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        sections: &Sections,
        layout: &LayoutConfig,
        styles: &PaneStyles,
        offset: u16,
    ) {
        let mut lines = Vec::new();

        for (index, section) in sections.iter().enumerate() {
            if index > 0 {
                for _ in 0..layout.item_spacing {
                    lines.push(Line::from(""));
                }
            }
            for _ in 0..layout.content_padding {
                lines.push(Line::from(""));
            }
            for row in wrap_text(&section.body, area.width) {
                lines.push(Line::from(Span::styled(row, styles.content)));
            }
            for _ in 0..layout.content_padding {
                lines.push(Line::from(""));
            }
        }

        let view = Paragraph::new(lines).scroll((offset, 0));
        frame.render_widget(view, area);
    }
}
