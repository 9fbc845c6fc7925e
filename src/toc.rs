//! Table-of-contents highlighting for the rules page.

/// Section anchors on the rules page, in document order.
pub const RULES_SECTIONS: [&str; 5] = [
    "principles",
    "phases",
    "versioning",
    "git-commits",
    "project-structure",
];

/// A section anchor and the vertical position where it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionOffset<'a> {
    pub id: &'a str,
    pub top: f64,
}

/// The section to highlight for the current scroll position.
///
/// `sections` must be in document order. A section becomes current once
/// the viewport has scrolled to within `offset` of its top; the last such
/// section wins. Returns `None` above the first section.
pub fn active_section<'a>(
    sections: &[SectionOffset<'a>],
    scroll_y: f64,
    offset: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .take_while(|section| section.top - offset <= scroll_y)
        .last()
        .map(|section| section.id)
}
