// File: crates/histogram-web/src/dom.rs
// Summary: Builds SVG DOM from a graphic and binds hover handlers that drive the tooltip overlay.

use histogram_core::geometry::{fmt_num, Rect};
use histogram_core::tooltip::{overlay_style, TOOLTIP_OFFSET};
use histogram_core::types::SVG_NS;
use histogram_core::{Node, Theme, Transition};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DomRect, Element, HtmlElement, MouseEvent};

pub type Handler = Closure<dyn FnMut(MouseEvent)>;

/// Output of [`build`]: the element tree plus what the host must keep alive.
pub struct Built {
    pub root: Element,
    pub animated: Vec<(Element, Vec<Transition>)>,
    pub handlers: Vec<Handler>,
}

/// Create `node` (and its subtree) in the SVG namespace.
pub fn build(document: &Document, node: &Node, container: &HtmlElement, tooltip: &HtmlElement) -> Result<Built, JsValue> {
    let mut animated = Vec::new();
    let mut handlers = Vec::new();
    let root = build_node(document, node, container, tooltip, &mut animated, &mut handlers)?;
    Ok(Built { root, animated, handlers })
}

fn build_node(
    document: &Document,
    node: &Node,
    container: &HtmlElement,
    tooltip: &HtmlElement,
    animated: &mut Vec<(Element, Vec<Transition>)>,
    handlers: &mut Vec<Handler>,
) -> Result<Element, JsValue> {
    let el = document.create_element_ns(Some(SVG_NS), node.tag)?;
    for (name, value) in &node.attrs {
        el.set_attribute(name, value)?;
    }
    if let Some((x, y)) = node.translate {
        el.set_attribute("transform", &format!("translate({},{})", fmt_num(x), fmt_num(y)))?;
    }
    if let Some(text) = &node.text {
        el.set_text_content(Some(text.as_str()));
    }
    for child in &node.children {
        let c = build_node(document, child, container, tooltip, animated, handlers)?;
        el.append_child(&c)?;
    }
    if !node.transitions.is_empty() {
        animated.push((el.clone(), node.transitions.clone()));
    }
    if let Some(text) = &node.tooltip {
        bind_tooltip(&el, text, container, tooltip, handlers)?;
    }
    Ok(el)
}

fn bind_tooltip(el: &Element, text: &str, container: &HtmlElement, tooltip: &HtmlElement, handlers: &mut Vec<Handler>) -> Result<(), JsValue> {
    let enter = {
        let (target, container, tooltip, text) = (el.clone(), container.clone(), tooltip.clone(), text.to_string());
        Closure::wrap(Box::new(move |_: MouseEvent| {
            let (left, top) = overlay_position(
                rect_of(&target.get_bounding_client_rect()),
                rect_of(&container.get_bounding_client_rect()),
            );
            tooltip.set_text_content(Some(text.as_str()));
            let style = tooltip.style();
            let _ = style.set_property("left", &format!("{}px", fmt_num(left)));
            let _ = style.set_property("top", &format!("{}px", fmt_num(top)));
            let _ = style.set_property("display", "block");
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let leave = {
        let tooltip = tooltip.clone();
        Closure::wrap(Box::new(move |_: MouseEvent| {
            let _ = tooltip.style().set_property("display", "none");
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
    el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;
    handlers.push(enter);
    handlers.push(leave);
    Ok(())
}

/// Overlay anchor relative to the container: horizontally centred on the bar and
/// `TOOLTIP_OFFSET` above its top edge. Both rects are in viewport coordinates.
pub fn overlay_position(bar: Rect, container: Rect) -> (f64, f64) {
    (bar.center_x() - container.x, bar.y - container.y - TOOLTIP_OFFSET)
}

fn rect_of(r: &DomRect) -> Rect {
    Rect::from_xywh(r.x(), r.y(), r.width(), r.height())
}

/// Absolutely positioned tooltip div, hidden until a bar is hovered.
pub fn create_overlay(document: &Document, container: &HtmlElement, theme: &Theme) -> Result<HtmlElement, JsValue> {
    let div: HtmlElement = document.create_element("div")?.dyn_into()?;
    div.set_class_name("hourly-histogram-tooltip");
    let style = div.style();
    for (name, value) in overlay_style(theme) {
        style.set_property(name, &value)?;
    }
    let position = container.style().get_property_value("position")?;
    if position.is_empty() || position == "static" {
        container.style().set_property("position", "relative")?;
    }
    container.append_child(&div)?;
    Ok(div)
}
