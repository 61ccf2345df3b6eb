mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the first element carrying the given attribute value, depth first.
pub fn find_by_attr<'a>(root: &'a Element, key: &str, value: &str) -> Option<&'a Element> {
    if root.get_attr(key) == Some(value) {
        return Some(root);
    }

    root.content
        .children()
        .iter()
        .find_map(|child| find_by_attr(child, key, value))
}
