//! Section model: one (heading, body) pair per navigable entry.

use crate::error::{Error, Result};

/// One heading/content pair, identified by its position in [`Sections`].
#[derive(Debug, Clone)]
pub struct Section {
    /// Label shown in the navigation pane.
    pub heading: String,
    /// Body text shown in the content pane, wrapped at render time.
    pub body: String,
}

/// Ordered, immutable collection of sections.
///
/// Built from two parallel sequences; a length mismatch or an empty list is
/// rejected up front so every index in `0..len()` is always addressable.
#[derive(Debug, Clone)]
pub struct Sections {
    items: Vec<Section>,
}

impl Sections {
    pub fn from_parallel(
        headings: impl IntoIterator<Item = impl Into<String>>,
        contents: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let headings: Vec<String> = headings.into_iter().map(Into::into).collect();
        let contents: Vec<String> = contents.into_iter().map(Into::into).collect();

        if headings.len() != contents.len() {
            return Err(Error::SectionMismatch {
                headings: headings.len(),
                contents: contents.len(),
            });
        }
        if headings.is_empty() {
            return Err(Error::Config("at least one section is required".to_string()));
        }

        let items = headings
            .into_iter()
            .zip(contents)
            .map(|(heading, body)| Section { heading, body })
            .collect();

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.items.iter()
    }
}
