// File: crates/histogram-core/tests/scene.rs
// Purpose: Scene graph evaluation and SVG serialization (structure, escaping, transition sampling).

mod support;

use histogram_core::{Easing, Graphic, Node, Renderer, Samples, Transition};
use support::{afternoon, approx, wave};

fn bar_graphic() -> Graphic {
    let rect = Node::new("rect")
        .attr("class", "bar")
        .attr("data-index", "0")
        .num("height", 0.0)
        .transition(Transition::new("height", 0.0, 40.0).delay(100.0).duration(200.0).ease(Easing::Linear))
        .tooltip("12");
    Graphic::new(100.0, 70.0, Node::new("svg").num("width", 100.0).num("height", 70.0).child(rect))
}

#[test]
fn at_samples_transitions() {
    let g = bar_graphic();
    assert_eq!(g.animation_end_ms(), 300.0);
    assert_eq!(g.at(50.0).bar(0).and_then(|b| b.get_num("height")), Some(0.0));
    assert!(approx(g.at(200.0).bar(0).and_then(|b| b.get_num("height")).unwrap(), 20.0));
    assert_eq!(g.settled().bar(0).and_then(|b| b.get_num("height")), Some(40.0));
    // Evaluating does not mutate the source graphic.
    assert_eq!(g.bar(0).and_then(|b| b.get_num("height")), Some(0.0));
}

#[test]
fn svg_escapes_text_and_attributes() {
    let root = Node::new("svg")
        .attr("data-label", "a \"quoted\" <value>")
        .child(Node::new("text").text("5 < 7 & 8 > 2"));
    let svg = Graphic::new(10.0, 10.0, root).to_svg();
    assert!(svg.contains("data-label=\"a &quot;quoted&quot; &lt;value&gt;\""));
    assert!(svg.contains(">5 &lt; 7 &amp; 8 &gt; 2</text>"));
}

#[test]
fn chart_svg_has_expected_structure() {
    let samples = Samples::try_new(wave()).unwrap();
    let g = Renderer::default().graphic(&samples, 640.0, afternoon());
    let svg = g.to_svg();
    assert_eq!(svg.matches("class=\"bar\"").count(), 48);
    assert!(svg.contains("class=\"axis axis-time\""));
    assert!(svg.contains("class=\"axis axis-value\""));
    assert!(svg.contains("transform=\"translate(20,0)\""));
    assert_eq!(g.find_class("bars").len(), 1);

    let indices: Vec<usize> = g.bars().iter().filter_map(|b| b.get_attr("data-index")?.parse().ok()).collect();
    assert_eq!(indices, (0..48).collect::<Vec<_>>());
}
