use crate::*;

#[test]
fn estimate_of_nothing_is_zero() {
    assert_eq!(estimate_magnitude(&[]).value(), 0.0);
}

#[test]
fn estimate_follows_empirical_mapping() {
    // avg / 9.81 = 1 -> log10 ~ 0 -> 3 + 3 * 0.75
    let estimate = estimate_magnitude(&[9.81; 5]);
    assert!(math::approx_eq(estimate.value(), 5.25, 1e-3));
    assert_eq!(estimate.to_string(), "5.25");

    // Tiny readings bottom out around magnitude 3.
    let estimate = estimate_magnitude(&[0.0; 5]);
    assert!(math::approx_eq(estimate.value(), 3.0 + (-6.0 + 3.0) * 0.75, 1e-3));
}

#[test]
fn bridge_keeps_last_five_readings() {
    let mut bridge = AlertBridge::new();
    for i in 0..8 {
        let line = format!("{}.00,1.00,2.00", i);
        assert!(matches!(bridge.feed(&line), BridgeOutput::Reading(_)));
    }
    assert_eq!(bridge.buffered(), 5);
}

#[test]
fn alert_uses_and_clears_buffer() {
    let mut bridge = AlertBridge::new();
    bridge.feed("100.00,1.00,2.00");
    for _ in 0..5 {
        bridge.feed("9.81,1.00,2.00");
    }
    match bridge.feed("ALERT,ALERT,ALERT") {
        BridgeOutput::Alert(estimate) => assert!(math::approx_eq(estimate.value(), 5.25, 1e-3)),
        other => panic!("expected alert, got {:?}", other),
    }
    assert_eq!(bridge.buffered(), 0);

    match bridge.feed("ALERT ALERT ALERT") {
        BridgeOutput::Alert(estimate) => assert_eq!(estimate.value(), 0.0),
        other => panic!("expected alert, got {:?}", other),
    }
}

#[test]
fn other_lines_pass_through() {
    let mut bridge = AlertBridge::new();
    assert_eq!(bridge.feed("System resetting in 5s..."), BridgeOutput::Message("System resetting in 5s..."));
    assert_eq!(bridge.buffered(), 0);
}
