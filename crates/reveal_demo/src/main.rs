//! Reveal demo
//!
//! A headless host for the reveal toolkit: stands in for a rendering layer
//! by driving the animation scheduler with a fixed 60fps timestep and
//! logging the clip descriptors and item transforms each scene produces.

use std::time::Duration;

use anyhow::Result;
use reveal_animation::{
    AnimationScheduler, CircularReveal, ItemGroup, ItemPhysicsSpec, Origin, RevealOrigin,
    RevealSpec,
};
use reveal_core::{ClipDescriptor, Point, Size};
use tracing::info;

const FRAME: Duration = Duration::from_micros(16_667);
const CONTAINER: Size = Size::new(360.0, 640.0);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    touch_reveal_scene();
    staggered_menu_scene();

    Ok(())
}

/// Reveal a sheet from a touch point, reverse it mid-flight, then let it
/// finish. Demonstrates smooth retargeting: progress never jumps.
fn touch_reveal_scene() {
    info!("--- touch reveal scene ---");

    let scheduler = AnimationScheduler::new();
    let spec = RevealSpec {
        origin: Origin::from_touch(Point::new(300.0, 580.0), CONTAINER),
        ..Default::default()
    };
    let mut reveal = CircularReveal::new(scheduler.handle(), spec);

    reveal.set_visible(true);
    run_frames(&scheduler, 10, |frame| log_clip(frame, &reveal));

    // User taps again before the sheet finishes opening.
    reveal.set_visible(false);
    run_frames(&scheduler, 6, |frame| log_clip(10 + frame, &reveal));

    reveal.set_visible(true);
    let settled = run_until_idle(&scheduler, 600);
    info!(
        frames = settled,
        progress = reveal.progress(),
        "sheet fully revealed"
    );
}

/// Open a staggered menu from the bottom-end corner, then dismiss it while
/// later items are still waiting on their stagger delay. The dismissal
/// snaps every item back instantly; no late starts.
fn staggered_menu_scene() {
    info!("--- staggered menu scene ---");

    let scheduler = AnimationScheduler::new();
    let handle = scheduler.handle();
    let spec = RevealSpec::from_origin(RevealOrigin::BottomEnd);

    let mut reveal = CircularReveal::new(handle.clone(), spec);
    let mut menu = ItemGroup::new(
        &handle,
        5,
        RevealOrigin::BottomEnd,
        ItemPhysicsSpec::strong_bounce(),
        spec.item_stagger_delay_ms,
    );

    reveal.set_visible(true);
    menu.set_revealed(true);

    run_frames(&scheduler, 8, |frame| {
        let poses: Vec<String> = menu
            .transforms()
            .map(|t| format!("a={:.2} s={:.2} tx={:+.0}", t.alpha, t.scale_x, t.translate_x))
            .collect();
        info!(frame, items = ?poses, "menu opening");
    });

    // Dismiss while items 3 and 4 are still pending.
    reveal.set_visible(false);
    menu.set_revealed(false);

    let transforms: Vec<_> = menu.transforms().collect();
    info!(?transforms, "menu dismissed, items snapped to hidden pose");

    let settled = run_until_idle(&scheduler, 600);
    info!(
        frames = settled,
        clip = ?reveal.clip(CONTAINER),
        "menu reveal collapsed"
    );
}

fn log_clip(frame: usize, reveal: &CircularReveal) {
    match reveal.clip(CONTAINER) {
        ClipDescriptor::Hidden => info!(frame, "clip: hidden"),
        ClipDescriptor::Circle { center, radius } => {
            info!(
                frame,
                center_x = center.x,
                center_y = center.y,
                radius,
                "clip: circle"
            );
        }
    }
}

fn run_frames(scheduler: &AnimationScheduler, count: usize, mut per_frame: impl FnMut(usize)) {
    for frame in 0..count {
        scheduler.advance(FRAME);
        per_frame(frame);
    }
}

/// Tick until the scheduler reports idle, returning the frame count.
fn run_until_idle(scheduler: &AnimationScheduler, max_frames: usize) -> usize {
    for frame in 0..max_frames {
        if !scheduler.advance(FRAME) {
            return frame + 1;
        }
    }
    max_frames
}
