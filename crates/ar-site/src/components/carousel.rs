//! Self-advancing carousel state

use std::time::Duration;

use ar_core::Carousel;
use leptos::*;

/// Carousel over `total` slides that advances every `period` while the
/// calling component is mounted. The timer only starts in the browser and
/// only when there is more than one slide; it is cleared on unmount.
pub fn use_rotation(total: usize, period: Duration) -> RwSignal<Carousel> {
    let carousel = create_rw_signal(Carousel::new(total));

    create_effect(move |_| {
        if !carousel.with_untracked(Carousel::autoplays) {
            return;
        }

        match set_interval_with_handle(move || carousel.update(Carousel::next), period) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!(?err, "slide timer not started"),
        }
    });

    carousel
}
