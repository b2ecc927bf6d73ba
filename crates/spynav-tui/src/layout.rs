//! Pane layout measurement.
//!
//! Converts the section list into content-space row extents for each pane,
//! using the same word wrap the widgets render with so measured geometry
//! and drawn rows always agree. A [`PaneLayout`] is rebuilt whenever the
//! pane is resized; until the first measurement the synchronization logic
//! sees no geometry at all and defers.

use unicode_width::UnicodeWidthStr;

use spynav_core::{LayoutConfig, PaneGeometry, SectionBounds, Sections};

/// Content-space extent of one rendered section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    /// First row of the section, measured from the top of the pane content.
    pub top: u16,
    /// Rows the section occupies, padding included.
    pub height: u16,
}

impl SectionExtent {
    fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

/// Measured layout of one scrollable pane.
#[derive(Debug, Clone)]
pub struct PaneLayout {
    extents: Vec<SectionExtent>,
    total_height: u16,
    viewport_height: u16,
}

impl PaneLayout {
    /// Measure the content pane: each section's wrapped body plus vertical
    /// padding, with spacing rows between sections.
    pub fn measure_content(
        sections: &Sections,
        layout: &LayoutConfig,
        width: u16,
        viewport_height: u16,
    ) -> Self {
        let mut extents = Vec::with_capacity(sections.len());
        let mut top = 0u16;

        for (index, section) in sections.iter().enumerate() {
            if index > 0 {
                top = top.saturating_add(layout.item_spacing);
            }
            let body_rows = wrap_text(&section.body, width).len() as u16;
            let height = body_rows.saturating_add(layout.content_padding * 2);
            extents.push(SectionExtent { top, height });
            top = top.saturating_add(height);
        }

        Self {
            extents,
            total_height: top,
            viewport_height,
        }
    }

    /// Measure the navigation pane: one truncated row per heading plus
    /// vertical padding, with spacing rows between headings.
    pub fn measure_nav(
        sections: &Sections,
        layout: &LayoutConfig,
        viewport_height: u16,
    ) -> Self {
        let item_height = 1u16.saturating_add(layout.heading_padding * 2);
        let mut extents = Vec::with_capacity(sections.len());
        let mut top = 0u16;

        for index in 0..sections.len() {
            if index > 0 {
                top = top.saturating_add(layout.item_spacing);
            }
            extents.push(SectionExtent {
                top,
                height: item_height,
            });
            top = top.saturating_add(item_height);
        }

        Self {
            extents,
            total_height: top,
            viewport_height,
        }
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> u16 {
        self.total_height.saturating_sub(self.viewport_height)
    }

    pub fn extent(&self, index: usize) -> Option<SectionExtent> {
        self.extents.get(index).copied()
    }

    /// Content-space top row of a section.
    pub fn section_top(&self, index: usize) -> Option<u16> {
        self.extent(index).map(|e| e.top)
    }

    /// Viewport-relative snapshot at a scroll offset.
    pub fn geometry(&self, offset: u16) -> PaneGeometry {
        let sections = self
            .extents
            .iter()
            .map(|e| Some(SectionBounds::new(i32::from(e.top) - i32::from(offset), e.height)))
            .collect();
        PaneGeometry {
            offset,
            max_offset: self.max_offset(),
            viewport_height: self.viewport_height,
            sections,
        }
    }

    /// Offset that brings a section fully into view with minimal movement,
    /// or `None` when it already is fully visible. Sections taller than the
    /// viewport align to their top edge.
    pub fn reveal_offset(&self, index: usize, current: u16) -> Option<u16> {
        let extent = self.extent(index)?;
        let viewport_bottom = current.saturating_add(self.viewport_height);

        let target = if extent.top < current || extent.height > self.viewport_height {
            extent.top
        } else if extent.bottom() > viewport_bottom {
            extent.bottom() - self.viewport_height
        } else {
            return None;
        };
        Some(target.min(self.max_offset()))
    }

    /// Section under a viewport row at the given scroll offset. Rows in
    /// the spacing between sections hit nothing.
    pub fn index_at(&self, viewport_row: u16, offset: u16) -> Option<usize> {
        let row = offset.checked_add(viewport_row)?;
        self.extents
            .iter()
            .position(|e| row >= e.top && row < e.bottom())
    }
}

/// Greedy word wrap by display width. Blank input lines survive as blank
/// rows; words wider than the pane are hard-broken.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return text.lines().map(str::to_string).collect();
    }

    let mut rows = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            rows.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0usize;
        for word in line.split_whitespace() {
            let word_width = word.width();

            if word_width > width {
                // Flush the pending row, then hard-break the oversized word.
                if !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let mut chunk = String::new();
                let mut chunk_width = 0usize;
                for ch in word.chars() {
                    let ch_width = ch.to_string().width();
                    if chunk_width + ch_width > width && !chunk.is_empty() {
                        rows.push(std::mem::take(&mut chunk));
                        chunk_width = 0;
                    }
                    chunk.push(ch);
                    chunk_width += ch_width;
                }
                current = chunk;
                current_width = chunk_width;
                continue;
            }

            let separator = usize::from(!current.is_empty());
            if current_width + separator + word_width > width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        if !current.is_empty() {
            rows.push(current);
        }
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
