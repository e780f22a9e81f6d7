use super::*;

#[test]
fn accordion_starts_closed() {
    let accordion = FaqAccordion::default();
    assert!(!accordion.is_open(0));
}

#[test]
fn opening_another_entry_closes_the_first() {
    let mut accordion = FaqAccordion::default();
    accordion.toggle(0);
    accordion.toggle(2);
    assert!(!accordion.is_open(0));
    assert!(accordion.is_open(2));
}

#[test]
fn toggling_open_entry_closes_it() {
    let mut accordion = FaqAccordion::default();
    accordion.toggle(1);
    accordion.toggle(1);
    assert_eq!(accordion, FaqAccordion::default());
}

#[test]
fn heading_names_salt_when_known() {
    assert_eq!(faq_heading(Some("Ursodiol")), "Frequently Asked Questions about Ursodiol");
    assert_eq!(faq_heading(Some(" ")), "Frequently Asked Questions");
    assert_eq!(faq_heading(None), "Frequently Asked Questions");
}
