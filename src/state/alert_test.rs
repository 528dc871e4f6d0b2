use super::*;

#[test]
fn dismiss_delay_is_six_seconds() {
    assert_eq!(ALERT_DISMISS_MS, 6000);
}

#[test]
fn constructors_set_the_kind() {
    assert_eq!(Alert::success("ok").kind, AlertKind::Success);
    assert_eq!(Alert::danger("bad").kind, AlertKind::Danger);
}

#[test]
fn kinds_map_to_distinct_css_classes() {
    let kinds = [AlertKind::Success, AlertKind::Danger, AlertKind::Info, AlertKind::Warning];
    for (i, a) in kinds.iter().enumerate() {
        for (j, b) in kinds.iter().enumerate() {
            if i != j {
                assert_ne!(a.css_class(), b.css_class());
            }
        }
    }
}
