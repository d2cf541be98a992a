//! Section lookup against the live document

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::document;
use crate::error::Result;
use crate::interaction::SectionLookup;

/// Resolves section ids with `getElementById` and scrolls smoothly
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSections;

impl SectionLookup for DocumentSections {
    fn scroll_into_view(&self, id: &str) -> Result<bool> {
        let Some(section) = document()?.get_element_by_id(id) else {
            return Ok(false);
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }
}
