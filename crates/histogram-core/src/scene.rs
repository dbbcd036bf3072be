// File: crates/histogram-core/src/scene.rs
// Summary: Declarative graphic tree handed to hosts; carries per-node transitions and tooltips, serializes to SVG.

use std::fmt::Write as _;

use crate::animation::Transition;
use crate::geometry::fmt_num;
use crate::types::SVG_NS;

/// One element of the graphic: an SVG tag with ordered attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub translate: Option<(f64, f64)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
    pub transitions: Vec<Transition>,
    /// Text shown by the host while the pointer is over this node.
    pub tooltip: Option<String>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, ..Self::default() }
    }

    /// Set (or replace) an attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn num(self, name: &'static str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    /// Numeric attribute; `None` when missing or not a number.
    pub fn get_num(&self, name: &str) -> Option<f64> {
        self.get_attr(name).and_then(|v| v.parse().ok())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map_or(false, |c| c.split_whitespace().any(|c| c == class))
    }

    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.translate = Some((x, y));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn transition(mut self, t: Transition) -> Self {
        self.transitions.push(t);
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    /// Depth-first, pre-order walk.
    pub fn walk<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for c in &self.children {
            c.walk(out);
        }
    }

    /// Latest end time of any transition in this subtree.
    pub fn animation_end_ms(&self) -> f64 {
        let own = self.transitions.iter().map(Transition::end_ms).fold(0.0, f64::max);
        self.children.iter().map(Node::animation_end_ms).fold(own, f64::max)
    }

    fn apply_at(&mut self, elapsed_ms: f64) {
        let values: Vec<(&'static str, f64)> =
            self.transitions.iter().map(|t| (t.attr, t.value_at(elapsed_ms))).collect();
        for (attr, v) in values {
            self.set_attr(attr, fmt_num(v));
        }
        for c in &mut self.children {
            c.apply_at(elapsed_ms);
        }
    }

    fn write_svg(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.tag);
        if depth == 0 {
            let _ = write!(out, " xmlns=\"{SVG_NS}\"");
        }
        for (k, v) in &self.attrs {
            let _ = write!(out, " {k}=\"{}\"", escape(v));
        }
        if let Some((x, y)) = self.translate {
            let _ = write!(out, " transform=\"translate({},{})\"", fmt_num(x), fmt_num(y));
        }
        match (&self.text, self.children.is_empty()) {
            (None, true) => out.push_str("/>\n"),
            (Some(text), true) => {
                let _ = writeln!(out, ">{}</{}>", escape(text), self.tag);
            }
            (text, false) => {
                out.push_str(">\n");
                if let Some(text) = text {
                    let _ = writeln!(out, "{indent}  {}", escape(text));
                }
                for c in &self.children {
                    c.write_svg(out, depth + 1);
                }
                let _ = writeln!(out, "{indent}</{}>", self.tag);
            }
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A complete chart graphic: the root `<svg>` node plus its pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct Graphic {
    pub width: f64,
    pub height: f64,
    pub root: Node,
}

impl Graphic {
    pub fn new(width: f64, height: f64, root: Node) -> Self {
        Self { width, height, root }
    }

    /// The graphic as it looks `elapsed_ms` after mount, with every transition evaluated.
    pub fn at(&self, elapsed_ms: f64) -> Graphic {
        let mut g = self.clone();
        g.root.apply_at(elapsed_ms);
        g
    }

    /// The graphic once every transition has completed.
    pub fn settled(&self) -> Graphic {
        self.at(self.animation_end_ms())
    }

    pub fn animation_end_ms(&self) -> f64 { self.root.animation_end_ms() }

    pub fn nodes(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.root.walk(&mut out);
        out
    }

    /// Nodes carrying `class`, in document order.
    pub fn find_class(&self, class: &str) -> Vec<&Node> {
        self.nodes().into_iter().filter(|n| n.has_class(class)).collect()
    }

    /// Bar rectangles ordered by their `data-index`.
    pub fn bars(&self) -> Vec<&Node> {
        let mut bars = self.find_class("bar");
        bars.sort_by_key(|n| n.get_attr("data-index").and_then(|i| i.parse::<usize>().ok()).unwrap_or(usize::MAX));
        bars
    }

    pub fn bar(&self, index: usize) -> Option<&Node> {
        let key = index.to_string();
        self.find_class("bar").into_iter().find(|n| n.get_attr("data-index") == Some(key.as_str()))
    }

    /// Serialize the current attribute state to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.root.write_svg(&mut out, 0);
        out
    }
}
