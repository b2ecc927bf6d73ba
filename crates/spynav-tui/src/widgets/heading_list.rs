use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use spynav_core::{LayoutConfig, Sections};

use crate::style::PaneStyles;

pub struct HeadingListWidget;

impl HeadingListWidget {
    /// Render the navigation pane at the given scroll offset.
    ///
    /// Row construction mirrors [`crate::layout::PaneLayout::measure_nav`]:
    /// one truncated heading row per section, padded and spaced per the
    /// layout config, so hit testing and reveal targets line up with what
    /// is drawn.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        sections: &Sections,
        layout: &LayoutConfig,
        styles: &PaneStyles,
        active_index: usize,
        offset: u16,
    ) {
        let mut lines = Vec::new();

        for (index, section) in sections.iter().enumerate() {
            if index > 0 {
                for _ in 0..layout.item_spacing {
                    lines.push(Line::from(""));
                }
            }
            for _ in 0..layout.heading_padding {
                lines.push(Line::from(""));
            }

            let (marker, style) = if index == active_index {
                ("▌ ", styles.active_heading)
            } else {
                ("  ", styles.inactive_heading)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(section.heading.clone(), style),
            ]));

            for _ in 0..layout.heading_padding {
                lines.push(Line::from(""));
            }
        }

        let list = Paragraph::new(lines).scroll((offset, 0));
        frame.render_widget(list, area);
    }
}
