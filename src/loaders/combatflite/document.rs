use quick_xml::{events::Event, Reader};

use crate::error::LegacyImportError;

#[derive(Debug, Clone)]
enum Node {
    Element(Element),
    Text(String),
}

/// Just enough of an XML tree to walk an export by element name.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    nodes: Vec<Node>,
}

impl Element {
    fn new(name: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            nodes: Vec::new(),
        }
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children().filter(move |el| el.name == name)
    }

    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children().find(|el| el.name == name)
    }

    /// All descendant text, in document order.
    pub fn value(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Elements reached by following `path` from this element's children.
    pub fn select<'a>(&'a self, path: &[&str]) -> Vec<&'a Element> {
        let mut current = vec![self];
        for name in path {
            current = current
                .into_iter()
                .flat_map(move |el| el.children().filter(move |child| child.name == *name))
                .collect();
        }
        current
    }
}

/// Parses a whole document and returns its root element.
///
/// Anything that is not well formed is rejected, including text outside the
/// root and elements left open at the end of input.
pub fn parse_document(xml: &str) -> Result<Element, LegacyImportError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(LegacyImportError::MultipleRoots);
                }
                stack.push(Element::new(start.name().as_ref()));
            }
            Event::Empty(start) => {
                attach(&mut stack, &mut root, Element::new(start.name().as_ref()))?;
            }
            Event::End(_) => {
                let el = stack.pop().ok_or(LegacyImportError::UnmatchedEnd)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let raw = data.into_inner();
                let text = std::str::from_utf8(&raw).map_err(|_| LegacyImportError::InvalidCData)?;
                push_text(&mut stack, text)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(LegacyImportError::UnclosedElement(open.name));
    }

    root.ok_or(LegacyImportError::MissingRoot)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) -> Result<(), LegacyImportError> {
    match stack.last_mut() {
        Some(parent) => parent.nodes.push(Node::Element(el)),
        None if root.is_some() => return Err(LegacyImportError::MultipleRoots),
        None => *root = Some(el),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) -> Result<(), LegacyImportError> {
    match stack.last_mut() {
        Some(parent) => parent.nodes.push(Node::Text(text.to_owned())),
        None if text.trim().is_empty() => {}
        None => return Err(LegacyImportError::TextOutsideRoot),
    }
    Ok(())
}
