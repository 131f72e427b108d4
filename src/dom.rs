use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node as HtmlNode};

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
    Raw(String),
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(existing) = self.attrs.iter_mut().find(|(key, _)| key == name) {
            existing.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn append_text(&mut self, text: &str) {
        self.children.push(Node::Text(text.to_string()));
    }

    /// Replaces the element's content with unescaped markup, like assigning
    /// `innerHTML` on a DOM element.
    pub fn set_inner_html(&mut self, markup: &str) {
        self.children = vec![Node::Raw(markup.to_string())];
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Builds an element in one call: attributes first, then children, then
/// `text` as a trailing text node when non-empty.
pub fn el(tag: &str, text: &str, children: Vec<Node>, attrs: &[(&str, &str)]) -> Element {
    let mut element = Element::new(tag);
    for (name, value) in attrs {
        element.set_attr(name, value);
    }
    for child in children {
        element.append_child(child);
    }
    if !text.is_empty() {
        element.append_text(text);
    }
    element
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    roots: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a full HTML document. Parsing is lenient: html5ever repairs
    /// malformed markup. Comments are dropped, the doctype is kept.
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let mut roots = Vec::new();
        for child in parsed.tree.root().children() {
            if let Some(node) = convert_node(child) {
                roots.push(node);
            }
        }
        Self { roots }
    }

    pub fn append_root(&mut self, node: Node) {
        self.roots.push(node);
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        let path = find_path(&self.roots, id)?;
        let mut node = &self.roots[path[0]];
        for &index in &path[1..] {
            let Node::Element(element) = node else {
                return None;
            };
            node = &element.children[index];
        }
        match node {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        let path = find_path(&self.roots, id)?;
        let mut node = &mut self.roots[path[0]];
        for &index in &path[1..] {
            let Node::Element(element) = node else {
                return None;
            };
            node = &mut element.children[index];
        }
        match node {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.roots {
            write_node(&mut out, node);
        }
        out
    }
}

fn convert_node(node: NodeRef<'_, HtmlNode>) -> Option<Node> {
    match node.value() {
        HtmlNode::Element(_) => {
            let element = ElementRef::wrap(node).expect("element node");
            Some(Node::Element(convert_element(element)))
        }
        HtmlNode::Text(text) => Some(Node::Text(text.to_string())),
        HtmlNode::Doctype(doctype) => Some(Node::Raw(format!("<!DOCTYPE {}>", doctype.name()))),
        _ => None,
    }
}

fn convert_element(element_ref: ElementRef<'_>) -> Element {
    let mut element = Element::new(element_ref.value().name());
    for (name, value) in element_ref.value().attrs() {
        element.set_attr(name, value);
    }
    for child in element_ref.children() {
        if let Some(node) = convert_node(child) {
            element.append_child(node);
        }
    }
    element
}

// Index path to the first element with the given id, in tree order.
fn find_path(nodes: &[Node], id: &str) -> Option<Vec<usize>> {
    for (index, node) in nodes.iter().enumerate() {
        if let Node::Element(element) = node {
            if element.attr("id") == Some(id) {
                return Some(vec![index]);
            }
            if let Some(mut rest) = find_path(&element.children, id) {
                let mut path = vec![index];
                path.append(&mut rest);
                return Some(path);
            }
        }
    }
    None
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(text) => escape_text(out, text),
        Node::Raw(markup) => out.push_str(markup),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attr(out, value);
        out.push('"');
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }
    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn escape_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
