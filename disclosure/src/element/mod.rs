mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the ID of the direct parent of the element with the given ID.
pub fn parent_id_of(root: &Element, id: &str) -> Option<String> {
    if let Content::Children(children) = &root.content {
        for child in children {
            if child.id == id {
                return Some(root.id.clone());
            }
            if let Some(found) = parent_id_of(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Insert `element` as a sibling immediately before the descendant with the
/// given ID. Returns false if no descendant matched.
pub fn insert_before(root: &mut Element, target_id: &str, element: Element) -> bool {
    let Some(parent_id) = parent_id_of(root, target_id) else {
        return false;
    };
    let Some(parent) = find_element_mut(root, &parent_id) else {
        return false;
    };

    if let Content::Children(children) = &mut parent.content {
        if let Some(pos) = children.iter().position(|c| c.id == target_id) {
            children.insert(pos, element);
            return true;
        }
    }

    false
}
