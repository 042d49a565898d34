use crate::*;

#[test]
fn two_neighbouring_channels_are_lit() {
    let pattern = FlowPattern::DEFAULT;
    let frame: Vec<u16> = pattern.frame(0).collect();
    assert_eq!(frame, vec![40000, 40000, 0, 0, 0, 0]);
}

#[test]
fn pattern_wraps_around() {
    let pattern = FlowPattern::DEFAULT;
    let frame: Vec<u16> = pattern.frame(5).collect();
    assert_eq!(frame, vec![40000, 0, 0, 0, 0, 40000]);
    assert_eq!(pattern.frame(6).collect::<Vec<_>>(), pattern.frame(0).collect::<Vec<_>>());
}

#[test]
fn gap_spreads_the_lit_channels() {
    let pattern = FlowPattern { gap: 3, ..FlowPattern::DEFAULT };
    let lit: Vec<usize> = (0..pattern.channels).filter(|c| pattern.is_lit(1, *c)).collect();
    assert_eq!(lit, vec![1, 4]);
}

#[test]
fn every_step_lights_exactly_two_channels() {
    let pattern = FlowPattern::DEFAULT;
    for step in 0..24 {
        assert_eq!(pattern.frame(step).filter(|duty| *duty > 0).count(), 2);
    }
}

#[test]
fn no_channels_means_nothing_lit() {
    let pattern = FlowPattern { channels: 0, ..FlowPattern::DEFAULT };
    assert_eq!(pattern.frame(3).count(), 0);
    assert_eq!(pattern.duty(3, 0), 0);
}
