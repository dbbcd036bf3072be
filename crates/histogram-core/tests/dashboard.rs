// File: crates/histogram-core/tests/dashboard.rs
// Purpose: Registry and coordinator behavior: redraw-all, failure isolation, resize subscriptions, environment probing.

mod support;

use std::rc::Rc;

use histogram_core::{
    Capabilities, ChartError, ChartRegistry, Dashboard, FixedClock, MemoryHost, Renderer, Samples,
};
use support::{afternoon, five_then_threes, wave};

fn dashboard(host: &Rc<MemoryHost>) -> Dashboard<MemoryHost> {
    Dashboard::new(Rc::clone(host), Renderer::default(), FixedClock(afternoon())).expect("dashboard")
}

#[test]
fn register_renders_immediately() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let c = host.add_container(500.0);
    let id = d.register_chart(c, &wave()).unwrap();
    assert_eq!(d.chart_for(c), Some(id));
    assert_eq!(host.mount_count(c), 1);
    assert_eq!(d.chart_count(), 1);
}

#[test]
fn invalid_samples_register_nothing() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let c = host.add_container(500.0);
    assert!(matches!(d.register_chart(c, &[]), Err(ChartError::InvalidInput(_))));
    assert!(matches!(d.register_chart(c, &[1.0]), Err(ChartError::InvalidInput(_))));
    assert_eq!(d.chart_count(), 0);
    assert_eq!(host.mount_count(c), 0);
}

#[test]
fn registering_same_container_updates_in_place() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let c = host.add_container(500.0);
    let first = d.register_chart(c, &wave()).unwrap();
    let second = d.register_chart(c, &five_then_threes()).unwrap();
    assert_eq!(first, second);
    assert_eq!(d.chart_count(), 1);
    host.advance(10_000.0);
    assert_eq!(host.hover(c, 0).as_deref(), Some("5"));
}

#[test]
fn redraw_all_renders_each_entry_once_with_latest_samples() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let containers: Vec<_> = (0..3).map(|i| host.add_container(400.0 + 100.0 * i as f64)).collect();
    let ids: Vec<_> = containers.iter().map(|c| d.register_chart(*c, &wave()).unwrap()).collect();
    d.update_chart(ids[1], &five_then_threes()).unwrap();

    let before: Vec<_> = containers.iter().map(|c| host.mount_count(*c)).collect();
    let report = d.redraw_all();
    assert!(report.is_clean());
    assert_eq!(report.rendered, 3);
    for (c, n) in containers.iter().zip(before) {
        assert_eq!(host.mount_count(*c), n + 1);
    }

    host.advance(10_000.0);
    assert_eq!(host.hover(containers[1], 0).as_deref(), Some("5"));
}

#[test]
fn redraw_all_isolates_detached_containers() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let a = host.add_container(500.0);
    let b = host.add_container(500.0);
    let c = host.add_container(500.0);
    d.register_chart(a, &wave()).unwrap();
    let gone = d.register_chart(b, &wave()).unwrap();
    d.register_chart(c, &wave()).unwrap();

    host.detach(b);
    let report = d.redraw_all();
    assert_eq!(report.rendered, 2);
    assert_eq!(report.failures, vec![(gone, ChartError::DetachedContainer(b))]);
    assert_eq!(host.mount_count(a), 2);
    assert_eq!(host.mount_count(c), 2);
    // Failing entries are kept until pruned.
    assert_eq!(d.chart_count(), 3);
    assert!(host.is_tracked(b));
    assert_eq!(d.prune_detached(), 1);
    assert_eq!(d.chart_count(), 2);
    assert!(d.redraw_all().is_clean());
}

#[test]
fn pruning_releases_detached_containers() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let kept = host.add_container(500.0);
    let gone = host.add_container(500.0);
    d.register_chart(kept, &wave()).unwrap();
    d.register_chart(gone, &wave()).unwrap();
    assert_eq!(host.tracked_count(), 2);

    host.detach(gone);
    assert_eq!(d.redraw_all().failures.len(), 1);
    // Still held until pruned.
    assert_eq!(host.graphic_count(gone), 1);

    assert_eq!(d.prune_detached(), 1);
    assert_eq!(host.graphic_count(gone), 0);
    assert!(!host.is_tracked(gone));
    assert!(host.is_tracked(kept));
    assert_eq!(host.tracked_count(), 1);
    assert_eq!(d.prune_detached(), 0);
}

#[test]
fn unregister_removes_entry_and_graphic() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let c = host.add_container(500.0);
    let id = d.register_chart(c, &wave()).unwrap();
    assert!(d.unregister_chart(id));
    assert!(!d.unregister_chart(id));
    assert_eq!(host.graphic_count(c), 0);
    assert!(!host.is_tracked(c));
    assert_eq!(d.redraw_all().rendered, 0);
    assert!(matches!(d.update_chart(id, &wave()), Err(ChartError::InvalidInput(_))));
}

#[test]
fn unregister_all_then_reregister_starts_clean() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let a = host.add_container(500.0);
    let b = host.add_container(300.0);
    d.register_chart(a, &wave()).unwrap();
    d.register_chart(b, &wave()).unwrap();

    assert_eq!(d.unregister_all(), 2);
    assert_eq!(d.chart_count(), 0);
    assert_eq!(host.tracked_count(), 0);
    assert_eq!(host.graphic_count(a), 0);

    // A fresh dashboard over the same host takes the containers over.
    let next = Dashboard::new(Rc::clone(&host), Renderer::default(), FixedClock(afternoon())).unwrap();
    next.register_chart(a, &five_then_threes()).unwrap();
    assert_eq!(host.graphic_count(a), 1);
    assert_eq!(host.tracked_count(), 1);
    host.advance(10_000.0);
    assert_eq!(host.hover(a, 0).as_deref(), Some("5"));
}

#[test]
fn resize_subscription_redraws_until_dropped() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let c = host.add_container(960.0);
    d.register_chart(c, &wave()).unwrap();

    let sub = d.subscribe_resize();
    assert!(sub.is_active());
    assert_eq!(host.listener_count(), 1);

    host.set_width(c, 320.0);
    host.resize();
    assert_eq!(host.mount_count(c), 2);
    assert_eq!(host.frame(c).unwrap().width, 320.0);

    drop(sub);
    assert_eq!(host.listener_count(), 0);
    host.resize();
    assert_eq!(host.mount_count(c), 2);
}

#[test]
fn cancel_unsubscribes() {
    let host = Rc::new(MemoryHost::new());
    let d = dashboard(&host);
    let c = host.add_container(500.0);
    d.register_chart(c, &wave()).unwrap();
    d.subscribe_resize().cancel();
    host.resize();
    assert_eq!(host.mount_count(c), 1);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn subscription_outliving_dashboard_is_inert() {
    let host = Rc::new(MemoryHost::new());
    let c = host.add_container(500.0);
    let sub = {
        let d = dashboard(&host);
        d.register_chart(c, &wave()).unwrap();
        d.subscribe_resize()
    };
    host.resize();
    assert_eq!(host.mount_count(c), 1);
    drop(sub);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn missing_primitives_are_fatal_at_startup() {
    let host = Rc::new(MemoryHost::with_capabilities(Capabilities { animation: false, ..Capabilities::default() }));
    let err = Dashboard::new(host, Renderer::default(), FixedClock(afternoon())).err().expect("probe fails");
    assert!(matches!(err, ChartError::EnvironmentUnavailable(ref m) if m.contains("animation")));
}

#[test]
fn registry_preserves_insertion_order() {
    let host = MemoryHost::new();
    let mut reg = ChartRegistry::new();
    let cs: Vec<_> = (0..4).map(|_| host.add_container(300.0)).collect();
    for c in cs.iter().rev() {
        reg.register(*c, Samples::zeros());
    }
    let order: Vec<_> = reg.iter().map(|e| e.container).collect();
    assert_eq!(order, cs.iter().rev().copied().collect::<Vec<_>>());
    let report = reg.redraw_all(&host, &Renderer::default(), afternoon());
    assert_eq!(report.rendered, 4);
}
