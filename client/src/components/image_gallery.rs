//! Detail-page image grid with a full-screen carousel modal.
//!
//! DESIGN
//! ======
//! The grid shows the first five default images in fixed slots. Slots 2-4
//! open the modal, which walks the full viewable order (defaults, then
//! extras) and wraps at both ends.

use leptos::prelude::*;

use crate::net::types::Image;
use crate::util::gallery::{CLICKABLE_SLOTS, Carousel, GALLERY_SLOTS, Gallery, ModalKey};

#[component]
pub fn ImageGallery(images: Vec<Image>) -> impl IntoView {
    let gallery = StoredValue::new(Gallery::from_images(&images));
    let carousel = RwSignal::new(None::<Carousel>);
    let total = gallery.with_value(Gallery::len);

    let slot = move |index: usize| {
        let src = gallery.with_value(|g| g.slot_url(index));
        let alt = format!("Room Image {}", index + 1);
        let clickable = CLICKABLE_SLOTS.contains(&index);
        let on_click = move |_| {
            if clickable {
                carousel.set(Some(Carousel::open(index, total)));
            }
        };
        let overlay = index + 1 == GALLERY_SLOTS;
        view! {
            <div class="gallery__slot" class:gallery__slot--clickable=clickable on:click=on_click>
                <img class="gallery__image" src=src alt=alt/>
                <Show when=move || overlay>
                    <div class="gallery__overlay">"Xem thêm"</div>
                </Show>
            </div>
        }
    };

    view! {
        <div class="gallery">
            <div class="gallery__primary">{slot(0)} {slot(1)}</div>
            <div class="gallery__secondary">{slot(2)} {slot(3)} {slot(4)}</div>
        </div>
        <Show when=move || carousel.get().is_some()>
            <ImageModal gallery=gallery carousel=carousel/>
        </Show>
    }
}

/// Modal carousel over the full gallery order.
#[component]
fn ImageModal(gallery: StoredValue<Gallery>, carousel: RwSignal<Option<Carousel>>) -> impl IntoView {
    let close = move || carousel.set(None);
    let step = move |forward: bool| {
        carousel.update(|c| {
            if let Some(current) = c.as_mut() {
                *current = if forward { current.next() } else { current.prev() };
            }
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ModalKey::from_key(&ev.key()) {
        Some(ModalKey::Close) => {
            ev.prevent_default();
            close();
        }
        Some(ModalKey::Next) => step(true),
        Some(ModalKey::Prev) => step(false),
        None => {}
    };

    // Keyboard navigation needs focus inside the dialog as soon as it opens.
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    let index = move || carousel.get().map_or(0, |c| c.index);
    let label = move || carousel.get().unwrap_or_default().counter_label();
    let src = move || gallery.with_value(|g| g.image_url(index()));
    let alt = move || format!("Room Image {}", index() + 1);

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog image-modal"
                role="dialog"
                aria-label="All Room Images"
                tabindex="0"
                autofocus=true
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="image-modal__header">
                    <button class="image-modal__nav" on:click=move |_| step(false)>
                        "< Trước"
                    </button>
                    <h2 class="image-modal__counter">{label}</h2>
                    <button class="image-modal__nav" on:click=move |_| step(true)>
                        "Tiếp >"
                    </button>
                </div>
                <img class="image-modal__image" src=src alt=alt/>
                <div class="dialog__actions dialog__actions--center">
                    <button class="btn btn--danger" on:click=move |_| close()>
                        "Đóng"
                    </button>
                </div>
            </div>
        </div>
    }
}
