use super::*;

fn image(url: &str, is_default: bool) -> Image {
    Image { url: url.to_owned(), is_default }
}

fn urls(images: &[Image]) -> Vec<&str> {
    images.iter().map(|i| i.url.as_str()).collect()
}

// =============================================================
// Gallery partitioning
// =============================================================

#[test]
fn ordered_puts_defaults_first_preserving_order() {
    let images = vec![
        image("x1", false),
        image("d1", true),
        image("x2", false),
        image("d2", true),
    ];
    let gallery = Gallery::from_images(&images);
    assert_eq!(urls(gallery.defaults()), vec!["d1", "d2"]);
    assert_eq!(urls(gallery.extras()), vec!["x1", "x2"]);
    assert_eq!(urls(&gallery.ordered()), vec!["d1", "d2", "x1", "x2"]);
}

#[test]
fn ordered_keeps_duplicates() {
    let images = vec![image("same", true), image("same", true), image("same", false)];
    let gallery = Gallery::from_images(&images);
    assert_eq!(gallery.len(), 3);
    assert_eq!(gallery.ordered().len(), 3);
}

#[test]
fn empty_gallery() {
    let gallery = Gallery::from_images(&[]);
    assert!(gallery.is_empty());
    assert!(gallery.ordered().is_empty());
}

#[test]
fn slot_url_uses_defaults_only() {
    let gallery = Gallery::from_images(&[image("x1", false), image("d1", true)]);
    assert_eq!(gallery.slot_url(0), "d1");
    assert_eq!(gallery.slot_url(1), NO_IMAGE_URL);
}

#[test]
fn slot_url_blank_url_falls_back_to_placeholder() {
    let gallery = Gallery::from_images(&[image("", true)]);
    assert_eq!(gallery.slot_url(0), NO_IMAGE_URL);
}

#[test]
fn image_url_indexes_full_order() {
    let gallery = Gallery::from_images(&[image("x1", false), image("d1", true)]);
    assert_eq!(gallery.image_url(0), "d1");
    assert_eq!(gallery.image_url(1), "x1");
    assert_eq!(gallery.image_url(2), NO_IMAGE_URL);
}

// =============================================================
// Carousel
// =============================================================

#[test]
fn next_wraps_from_last_to_first() {
    let carousel = Carousel::open(2, 3);
    assert_eq!(carousel.next().index, 0);
}

#[test]
fn prev_wraps_from_first_to_last() {
    let carousel = Carousel::open(0, 3);
    assert_eq!(carousel.prev().index, 2);
}

#[test]
fn full_cycle_returns_to_start() {
    let start = Carousel::open(1, 4);
    let mut forward = start;
    let mut backward = start;
    for _ in 0..4 {
        forward = forward.next();
        backward = backward.prev();
    }
    assert_eq!(forward, start);
    assert_eq!(backward, start);
}

#[test]
fn open_clamps_past_the_end() {
    assert_eq!(Carousel::open(4, 3).index, 2);
}

#[test]
fn empty_carousel_navigation_is_noop() {
    let carousel = Carousel::open(3, 0);
    assert_eq!(carousel.index, 0);
    assert_eq!(carousel.next(), carousel);
    assert_eq!(carousel.prev(), carousel);
    assert_eq!(carousel.counter_label(), "Hình ảnh 0 / 0");
}

#[test]
fn counter_label_is_one_based() {
    assert_eq!(Carousel::open(0, 5).counter_label(), "Hình ảnh 1 / 5");
    assert_eq!(Carousel::open(4, 5).counter_label(), "Hình ảnh 5 / 5");
}

#[test]
fn modal_keys_map_to_commands() {
    assert_eq!(ModalKey::from_key("Escape"), Some(ModalKey::Close));
    assert_eq!(ModalKey::from_key("ArrowRight"), Some(ModalKey::Next));
    assert_eq!(ModalKey::from_key("ArrowLeft"), Some(ModalKey::Prev));
    assert_eq!(ModalKey::from_key("Enter"), None);
    assert_eq!(ModalKey::from_key("escape"), None);
}
