use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::pointer::{
    PointerPosition, PointerTracker, ScheduleError, Scheduler, DEFAULT_THROTTLE,
};

// half the follower's size, so it is centred on the pointer
const CURSOR_OFFSET: i32 = 12;

/// One-shot `setTimeout`.
struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule_once(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce() + Send + 'static>,
    ) -> Result<(), ScheduleError> {
        set_timeout_with_handle(task, delay)
            .map(|_| ())
            .map_err(|e| ScheduleError(format!("{e:?}")))
    }
}

/// Latest pointer position, sampled at most once per `window`.
pub fn use_pointer_position(window: Duration) -> ReadSignal<PointerPosition> {
    let (position, set_position) = signal(PointerPosition::default());
    let tracker = PointerTracker::new(window);

    let _ = use_event_listener(use_window(), ev::mousemove, {
        let tracker = tracker.clone();
        move |ev| {
            let sample = PointerPosition::new(ev.client_x(), ev.client_y());
            if let Some(accepted) = tracker.on_move(sample, &TimeoutScheduler) {
                set_position.set(accepted);
            }
        }
    });
    on_cleanup(move || tracker.dispose());

    position
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let position = use_pointer_position(DEFAULT_THROTTLE);

    view! {
        <div
            class="fixed w-7 h-7 bg-blue-500 rounded-full pointer-events-none z-50 mix-blend-difference cursor-pulse"
            style:left=move || format!("{}px", position.get().x - CURSOR_OFFSET)
            style:top=move || format!("{}px", position.get().y - CURSOR_OFFSET)
        />
    }
}
