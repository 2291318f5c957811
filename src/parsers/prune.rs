use ego_tree::NodeId;
use scraper::{ElementRef, Html};

use super::is_allowed;

/// Disallowed elements below `root`, in document (pre-)order.
///
/// `root` itself is never included.
pub fn disallowed_elements(doc: &Html, root: NodeId) -> Vec<NodeId> {
    let Some(root) = doc.tree.get(root) else {
        return Vec::new();
    };

    root.descendants()
        .skip(1)
        .filter(|node| {
            node.value()
                .as_element()
                .is_some_and(|element| !is_allowed(element.name()))
        })
        .map(|node| node.id())
        .collect()
}

/// Replace an element by its children, keeping them at the same position.
///
/// Returns false when the node is missing or detached.
pub fn unwrap_node(doc: &mut Html, id: NodeId) -> bool {
    let children: Vec<NodeId> = match doc.tree.get(id) {
        Some(node) if node.parent().is_some() => node.children().map(|c| c.id()).collect(),
        _ => return false,
    };

    let Some(mut node) = doc.tree.get_mut(id) else {
        return false;
    };
    for child in children {
        node.insert_id_before(child);
    }
    node.detach();
    true
}

/// Unwrap every disallowed element below `root`.
///
/// The removal set is collected before the tree is touched, so moving
/// children up never hides an element from the pass. Returns the number of
/// elements unwrapped.
pub fn prune(doc: &mut Html, root: NodeId) -> usize {
    let doomed = disallowed_elements(doc, root);
    ::log::debug!("Unwrapping {} disallowed elements", doomed.len());

    doomed
        .into_iter()
        .filter(|&id| unwrap_node(doc, id))
        .count()
}

/// Serialize the children of `root` as a markup fragment
pub fn inner_markup(doc: &Html, root: NodeId) -> String {
    doc.tree
        .get(root)
        .and_then(ElementRef::wrap)
        .map(|element| element.inner_html())
        .unwrap_or_default()
}
