use super::*;

// =============================================================
// SectionId
// =============================================================

#[test]
fn default_section_is_hero() {
    assert_eq!(SectionId::default(), SectionId::Hero);
    assert_eq!(SectionId::ALL[0], SectionId::Hero);
}

#[test]
fn dom_ids_are_unique() {
    for (i, a) in SectionId::ALL.iter().enumerate() {
        for b in &SectionId::ALL[i + 1..] {
            assert_ne!(a.dom_id(), b.dom_id());
        }
    }
}

#[test]
fn href_is_anchor_to_dom_id() {
    assert_eq!(SectionId::Projects.href(), "#projects");
}

// =============================================================
// ScrollSpy
// =============================================================

#[test]
fn scroll_spy_defaults_to_hero_without_tracking() {
    let spy = ScrollSpy::default();
    assert_eq!(spy.active, SectionId::Hero);
    assert!(!spy.tracking);
}

#[test]
fn no_highlight_while_not_tracking() {
    let spy = ScrollSpy { active: SectionId::About, tracking: false };
    assert!(SectionId::ALL.iter().all(|s| !spy.is_highlighted(*s)));
}

#[test]
fn only_active_section_highlighted_while_tracking() {
    let spy = ScrollSpy { active: SectionId::Skills, tracking: true };
    let highlighted: Vec<_> = SectionId::ALL
        .into_iter()
        .filter(|s| spy.is_highlighted(*s))
        .collect();
    assert_eq!(highlighted, vec![SectionId::Skills]);
}

// =============================================================
// pick_active
// =============================================================

#[test]
fn empty_batch_picks_nothing() {
    assert_eq!(pick_active(Vec::<(SectionId, f64)>::new()), None);
}

#[test]
fn ratio_at_threshold_does_not_qualify() {
    assert_eq!(pick_active([(SectionId::About, ACTIVE_RATIO)]), None);
    assert_eq!(pick_active([(SectionId::About, 0.1)]), None);
}

#[test]
fn single_qualifying_entry_wins() {
    assert_eq!(pick_active([(SectionId::About, 0.1), (SectionId::Skills, 0.3)]), Some(SectionId::Skills));
}

#[test]
fn greatest_ratio_wins_regardless_of_order() {
    let batch = [(SectionId::About, 0.8), (SectionId::Skills, 0.3)];
    assert_eq!(pick_active(batch), Some(SectionId::About));

    let reversed = [(SectionId::Skills, 0.3), (SectionId::About, 0.8)];
    assert_eq!(pick_active(reversed), Some(SectionId::About));
}

#[test]
fn exact_tie_goes_to_later_delivery() {
    let batch = [(SectionId::About, 0.5), (SectionId::Skills, 0.5)];
    assert_eq!(pick_active(batch), Some(SectionId::Skills));
}

#[test]
fn nan_ratio_is_ignored() {
    assert_eq!(pick_active([(SectionId::About, f64::NAN)]), None);
    assert_eq!(
        pick_active([(SectionId::Contact, 0.4), (SectionId::About, f64::NAN)]),
        Some(SectionId::Contact)
    );
}
