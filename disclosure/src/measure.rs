use crate::element::{Content, Element};
use crate::text::wrap_words;

/// Width used to wrap text when neither the element nor an ancestor fixes
/// one. Matches a conventional host surface width.
pub const DEFAULT_MEASURE_WIDTH: u16 = 80;

/// The natural rendered height of an element in rows: the height its
/// content takes up when nothing clamps it. This is the scroll-height
/// equivalent the max-height animation needs; `max_height` itself is
/// deliberately ignored.
pub fn natural_height(element: &Element) -> u16 {
    height_at(element, element.width.unwrap_or(DEFAULT_MEASURE_WIDTH))
}

fn height_at(element: &Element, inherited_width: u16) -> u16 {
    if let Some(height) = element.height {
        return height;
    }

    let width = element.width.unwrap_or(inherited_width);

    match &element.content {
        Content::None => 0,
        Content::Text(text) => wrap_words(text, width as usize).len() as u16,
        Content::Children(children) => children
            .iter()
            .map(|child| height_at(child, width))
            .sum(),
    }
}
