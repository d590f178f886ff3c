use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::spy::{scroll_offset, ScrollSpy, SectionLayout};

/// Keeps the returned signal on the section under the scroll position.
///
/// The listener is passive and unthrottled; it is removed when the calling
/// component's owner is cleaned up.
pub fn use_scroll_spy(spy: ScrollSpy) -> ReadSignal<String> {
    let (active, set_active) = signal(spy.active().to_string());
    let spy = StoredValue::new(spy);

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            let offset = scroll_offset(window().scroll_y().unwrap_or_default());
            let changed = spy
                .try_update_value(|s| s.advance(offset, section_layout).map(str::to_owned))
                .flatten();
            if let Some(next) = changed {
                set_active.set(next);
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    active
}

/// Layout of the element with `id`, if it is on the page.
fn section_layout(id: &str) -> Option<SectionLayout> {
    let el = document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionLayout::new(el.offset_top(), el.offset_height()))
}

pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no section #{id} to scroll to");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
