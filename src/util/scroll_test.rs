use super::*;

#[test]
fn fragment_hrefs_scroll() {
    assert_eq!(anchor_target("#projects"), Some("#projects"));
    assert_eq!(anchor_target("#a"), Some("#a"));
}

#[test]
fn bare_hash_keeps_default_behavior() {
    assert_eq!(anchor_target("#"), None);
}

#[test]
fn non_fragment_hrefs_are_ignored() {
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://example.com/#top"), None);
    assert_eq!(anchor_target("/about"), None);
}

#[test]
fn scroll_to_is_noop_natively() {
    scroll_to("#contact");
    install_smooth_scroll();
}
