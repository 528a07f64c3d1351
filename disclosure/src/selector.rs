use crate::element::{Content, Element};

/// A minimal selector: a class (`.foo`), an ID (`#bar`) or a tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Class(String),
    Id(String),
    Tag(String),
}

impl Selector {
    /// Parse a selector string. A leading `.` selects by class, a leading
    /// `#` by ID, anything else by tag name.
    pub fn parse(input: &str) -> Self {
        if let Some(class) = input.strip_prefix('.') {
            Selector::Class(class.to_string())
        } else if let Some(id) = input.strip_prefix('#') {
            Selector::Id(id.to_string())
        } else {
            Selector::Tag(input.to_string())
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Class(class) => element.has_class(class),
            Selector::Id(id) => element.id == *id,
            Selector::Tag(tag) => element.tag == *tag,
        }
    }
}

impl From<&str> for Selector {
    fn from(input: &str) -> Self {
        Selector::parse(input)
    }
}

/// Collect the IDs of all descendants of `root` matching the selector, in
/// document order. The root itself is not considered, mirroring a
/// find-within-context query.
pub fn query_all(root: &Element, selector: &Selector) -> Vec<String> {
    let mut result = Vec::new();
    if let Content::Children(children) = &root.content {
        for child in children {
            query_recursive(child, selector, &mut result);
        }
    }
    result
}

fn query_recursive(element: &Element, selector: &Selector, result: &mut Vec<String>) {
    if selector.matches(element) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            query_recursive(child, selector, result);
        }
    }
}

/// Find the first descendant of `root` matching the selector, mutably.
pub fn query_first_mut<'a>(
    root: &'a mut Element,
    selector: &Selector,
) -> Option<&'a mut Element> {
    if let Content::Children(children) = &mut root.content {
        for child in children {
            if selector.matches(child) {
                return Some(child);
            }
            if let Some(found) = query_first_mut(child, selector) {
                return Some(found);
            }
        }
    }
    None
}
