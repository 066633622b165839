//! Minimal element tree
//!
//! Just enough of a document model for class-driven widgets: elements with
//! a tag, an optional id, a class list, attributes and text, stored in a flat
//! arena and addressed by [`NodeId`].

use std::collections::{BTreeMap, HashMap};

/// Handle to an element in a [`Document`]
///
/// Only valid for the document that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A single element
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An element tree rooted at `body`
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    ids: HashMap<String, NodeId>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only `body`
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body")],
            ids: HashMap::new(),
            body: NodeId(0),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.elements[node.0]
    }

    fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.elements[node.0]
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.elements.push(Element::new(tag));
        NodeId(self.elements.len() - 1)
    }

    /// Attach `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.contains(child, parent) {
            // would create a cycle
            return;
        }
        if let Some(old) = self.element(child).parent {
            self.element_mut(old).children.retain(|c| *c != child);
        }
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(child);
    }

    /// Create an element with the given classes and append it to `parent`
    pub fn append(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let node = self.create_element(tag);
        for class in classes {
            self.add_class(node, class);
        }
        self.append_child(parent, node);
        node
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.element(node).tag
    }

    /// Assign an element id, replacing any previous one
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(old) = self.element_mut(node).id.take() {
            self.ids.remove(&old);
        }
        self.element_mut(node).id = Some(id.to_string());
        self.ids.insert(id.to_string(), node);
    }

    /// The element carrying `id`, if it is attached under `body`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids
            .get(id)
            .copied()
            .filter(|node| self.contains(self.body, *node))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.element_mut(node).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.element_mut(node).classes.retain(|c| c != class);
    }

    /// Toggle a class; returns whether the class is now present
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.element_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Option<String> {
        self.element_mut(node).attributes.remove(name)
    }

    /// Rendered text of the element and its descendants
    pub fn text(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let element = self.element(node);
        out.push_str(&element.text);
        for child in &element.children {
            self.collect_text(*child, out);
        }
    }

    /// Replace the element's content with `text`
    ///
    /// Children are detached, the same as assigning `innerText`.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        let children = std::mem::take(&mut self.element_mut(node).children);
        for child in children {
            self.element_mut(child).parent = None;
        }
        self.element_mut(node).text = text.to_string();
    }

    /// Nearest inclusive ancestor carrying `class`
    pub fn closest(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.ancestors(node).find(|n| self.has_class(*n, class))
    }

    /// Whether `node` is `ancestor` or one of its descendants
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|n| n == ancestor)
    }

    /// `node` followed by its parents up to the root
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), |n| self.element(*n).parent)
    }

    /// First descendant of `root` (excluding `root`) with `class`, and with
    /// `tag` when given, in document order
    pub fn query_selector(&self, root: NodeId, class: &str, tag: Option<&str>) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|n| self.matches(*n, class, tag))
    }

    /// Every element attached under `body` with `class`, in document order
    pub fn query_selector_all(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    fn matches(&self, node: NodeId, class: &str, tag: Option<&str>) -> bool {
        self.has_class(node, class) && tag.is_none_or(|t| self.tag(node).eq_ignore_ascii_case(t))
    }

    /// Descendants of `root` in pre-order
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.element(root).children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.element(node).children.iter().rev().copied());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_and_contains() {
        let mut doc = Document::new();
        let outer = doc.append(doc.body(), "div", &["outer"]);
        let inner = doc.append(outer, "div", &["inner"]);
        let leaf = doc.append(inner, "span", &[]);

        assert_eq!(doc.closest(leaf, "outer"), Some(outer));
        assert_eq!(doc.closest(inner, "inner"), Some(inner));
        assert_eq!(doc.closest(outer, "inner"), None);
        assert!(doc.contains(outer, leaf));
        assert!(doc.contains(leaf, leaf));
        assert!(!doc.contains(leaf, outer));
    }

    #[test]
    fn test_query_selector_document_order_and_tag() {
        let mut doc = Document::new();
        let root = doc.append(doc.body(), "div", &["root"]);
        let first = doc.append(root, "div", &["item"]);
        let nested = doc.append(first, "span", &["item"]);
        let second = doc.append(root, "span", &["item"]);

        assert_eq!(doc.query_selector(root, "item", None), Some(first));
        assert_eq!(doc.query_selector(root, "item", Some("span")), Some(nested));
        assert_eq!(doc.query_selector(nested, "item", None), None);
        assert_eq!(doc.query_selector_all("item"), vec![first, nested, second]);
    }

    #[test]
    fn test_detached_elements_are_not_queried() {
        let mut doc = Document::new();
        let loose = doc.create_element("div");
        doc.add_class(loose, "item");
        assert!(doc.query_selector_all("item").is_empty());
    }

    #[test]
    fn test_class_list() {
        let mut doc = Document::new();
        let node = doc.append(doc.body(), "div", &["a"]);
        doc.add_class(node, "a");
        assert_eq!(doc.element(node).classes(), ["a".to_string()]);
        assert!(doc.toggle_class(node, "b"));
        assert!(!doc.toggle_class(node, "b"));
        doc.remove_class(node, "a");
        assert!(doc.element(node).classes().is_empty());
    }

    #[test]
    fn test_text_and_set_text() {
        let mut doc = Document::new();
        let item = doc.append(doc.body(), "li", &[]);
        let label = doc.append(item, "b", &[]);
        doc.set_text(label, "Rust");
        let version = doc.append(item, "i", &[]);
        doc.set_text(version, " (1.85)");
        assert_eq!(doc.text(item), "Rust (1.85)");

        doc.set_text(item, "C++");
        assert_eq!(doc.text(item), "C++");
        assert!(doc.element(item).children().is_empty());
        assert_eq!(doc.element(label).parent(), None);
    }

    #[test]
    fn test_detached_elements_are_not_found_by_id() {
        let mut doc = Document::new();
        let button = doc.append(doc.body(), "button", &[]);
        let value = doc.append(button, "span", &[]);
        let icon = doc.append(value, "i", &[]);
        doc.set_id(value, "language-value");
        doc.set_id(icon, "language-icon");

        doc.set_text(button, "Python");
        assert_eq!(doc.get_element_by_id("language-value"), None);
        assert_eq!(doc.get_element_by_id("language-icon"), None);

        let loose = doc.create_element("div");
        doc.set_id(loose, "loose");
        assert_eq!(doc.get_element_by_id("loose"), None);
        let body = doc.body();
        doc.append_child(body, loose);
        assert_eq!(doc.get_element_by_id("loose"), Some(loose));
    }

    #[test]
    fn test_ids_and_attributes() {
        let mut doc = Document::new();
        let year = doc.append(doc.body(), "span", &[]);
        doc.set_id(year, "judge0-year");
        assert_eq!(doc.get_element_by_id("judge0-year"), Some(year));
        doc.set_id(year, "other");
        assert_eq!(doc.get_element_by_id("judge0-year"), None);

        let body = doc.body();
        doc.set_attribute(body, "style", "display: none");
        assert_eq!(doc.attribute(body, "style"), Some("display: none"));
        assert_eq!(doc.remove_attribute(body, "style").as_deref(), Some("display: none"));
        assert_eq!(doc.attribute(body, "style"), None);
    }

    #[test]
    fn test_append_child_moves_and_rejects_cycles() {
        let mut doc = Document::new();
        let a = doc.append(doc.body(), "div", &[]);
        let b = doc.append(doc.body(), "div", &[]);
        let c = doc.append(a, "div", &[]);

        doc.append_child(b, c);
        assert_eq!(doc.element(c).parent(), Some(b));
        assert!(doc.element(a).children().is_empty());

        doc.append_child(c, b);
        assert_eq!(doc.element(b).parent(), Some(doc.body()));
    }
}
