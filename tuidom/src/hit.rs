use crate::element::{find_element, Element};

/// Check whether `target` is `ancestor` itself or lies somewhere inside it.
pub fn contains(root: &Element, ancestor: &str, target: &str) -> bool {
    find_element(root, ancestor).is_some_and(|el| find_element(el, target).is_some())
}

/// Ids from `target` up to the root, deepest first.
///
/// Returns an empty vector if `target` is not part of the tree.
pub fn ancestors(root: &Element, target: &str) -> Vec<String> {
    let mut path = Vec::new();
    if collect_path(root, target, &mut path) {
        path.reverse();
    }
    path
}

fn collect_path(element: &Element, target: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == target {
        return true;
    }

    for child in element.content.children() {
        if collect_path(child, target, path) {
            return true;
        }
    }

    path.pop();
    false
}
