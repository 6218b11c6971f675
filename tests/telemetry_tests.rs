use chart_geom::telemetry::{DEFAULT_FILTER, init_default_tracing, init_tracing_with_filter};

#[test]
fn default_filter_scopes_debug_events_to_this_crate() {
    assert!(DEFAULT_FILTER.contains("chart_geom=debug"));
    assert!(DEFAULT_FILTER.starts_with("warn"));
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_the_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_filter("chart_geom=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_succeeds_only_once() {
    let _ = init_tracing_with_filter("chart_geom=trace");

    assert!(!init_default_tracing());
    assert!(!init_tracing_with_filter("chart_geom=trace"));
}
