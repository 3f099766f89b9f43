use super::*;

#[test]
fn items_toggle_independently() {
    let mut faq = Faq::new(3);
    assert!(faq.toggle(0));
    assert!(faq.toggle(2));
    assert!(faq.is_open(0));
    assert!(!faq.is_open(1));
    assert!(faq.is_open(2));
    assert!(!faq.toggle(0));
    assert!(faq.is_open(2));
}

#[test]
fn unknown_item_is_closed() {
    let mut faq = Faq::new(1);
    assert!(!faq.toggle(5));
    assert!(!faq.is_open(5));
}
