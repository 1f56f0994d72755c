//! Scroll Reveal Demo
//!
//! Simulates a page scroll driving a reveal, a count-up statistic, and a
//! parallax layer, logging the states a renderer would apply.
//!
//! Run with:
//! `cargo run -p kinetic_motion --example scroll_reveal_demo`

use kinetic_core::Rect;
use kinetic_motion::{fade_in_up, CountUp, Parallax, Reveal};
use kinetic_observe::ViewportObserver;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let viewport_height = 600.0;
    let mut observer = ViewportObserver::new(Rect::new(0.0, 0.0, 800.0, viewport_height));

    // A hero section below the fold
    let hero_rect = Rect::new(0.0, 900.0, 800.0, 400.0);
    let mut reveal = Reveal::new(fade_in_up(0.6));

    let entered = Arc::new(AtomicBool::new(false));
    let entered_flag = entered.clone();
    observer.observe(hero_rect, reveal.observe_options(), move |visible| {
        if visible {
            entered_flag.store(true, Ordering::SeqCst);
        }
    });

    let mut counter = CountUp::with_default_duration(12500.0);
    let mut parallax = Parallax::new(40.0);

    // Scroll 1200px at 60fps, then hold while the animations finish
    let dt = 1.0 / 60.0;
    let total_scroll = 1200.0;
    for frame in 0..240 {
        let scroll = (frame as f32 * 10.0).min(total_scroll);
        observer.set_viewport(Rect::new(0.0, scroll, 800.0, viewport_height));

        if entered.load(Ordering::SeqCst) && !reveal.is_visible() {
            tracing::info!(frame, scroll, "hero entered view");
            reveal.set_visible(true);
            counter.set_visible(true);
        }

        parallax.set_progress(scroll / total_scroll);
        parallax.tick(dt);
        counter.tick(dt);

        if frame % 60 == 0 {
            tracing::info!(
                frame,
                state = ?reveal.current_state(),
                count = counter.value(),
                parallax = parallax.offset(),
                "frame"
            );
        }
    }

    tracing::info!(
        final_count = counter.value(),
        final_parallax = parallax.offset(),
        "scroll complete"
    );
}
