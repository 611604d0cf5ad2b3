//! Headless walkthrough of both navigable surfaces.
//!
//! Drives the seven-slide carousel and the overlay picker against the
//! in-process viewport and history backends, printing the state the way
//! a host UI would consume it. Run with `RUST_LOG=debug` to watch the
//! controllers narrate their decisions.

use std::time::{Duration, Instant};

use anyhow::Result;
use vitrine_model::{VariationId, VariationRegistry};
use vitrine_viewer::carousel::{DirectionalKey, Modifiers};
use vitrine_viewer::history::{HistoryBackend, MemoryHistory};
use vitrine_viewer::shell::{CarouselShell, OverlayShell, SlideSlot};
use vitrine_viewer::viewport::SharedViewport;

const SLIDE_WIDTH: f32 = 1280.0;

fn describe_plan(plan: &[SlideSlot<'_, &'static str>]) -> String {
    plan.iter()
        .map(|slot| match slot {
            SlideSlot::Live { id, .. } => format!("[{id}]"),
            SlideSlot::Placeholder { id } => format!(" {id} "),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    env_logger::init();

    // The host owns the renderable units; here they are just labels.
    let carousel_registry = VariationRegistry::from_entries(
        [
            ("v1", "classic-trust"),
            ("v2", "editorial-modern"),
            ("v3", "dynamic-innovation"),
            ("v4", "bold-immersive"),
            ("v5", "convergence"),
            ("v6", "structural-build"),
            ("v7", "expansion-pulse"),
        ]
        .iter()
        .map(|(raw, unit)| Ok((VariationId::parse(raw)?, *unit)))
        .collect::<Result<Vec<_>, vitrine_model::ModelError>>()?,
    )?;

    let viewport = SharedViewport::new(SLIDE_WIDTH);
    let mut carousel = CarouselShell::new(carousel_registry, Some("v3"));
    let mut now = Instant::now();
    carousel.attach_viewport(viewport.clone(), now);
    println!("carousel seeded from #v3: {}", describe_plan(&carousel.render_plan()));

    // Two keyboard steps right.
    for _ in 0..2 {
        now += Duration::from_secs(1);
        carousel.handle_key(DirectionalKey::ArrowRight, Modifiers::NONE, now);
    }
    println!("after two arrow steps:   {}", describe_plan(&carousel.render_plan()));

    // A user drag that settles on the last slide.
    now += Duration::from_secs(2);
    viewport.set_offset(6.2 * SLIDE_WIDTH);
    carousel.handle_scroll(now);
    if let Some(deadline) = carousel.next_deadline() {
        carousel.poll(deadline);
    }
    println!("after drag to the end:   {}", describe_plan(&carousel.render_plan()));
    carousel.dispose();

    // Overlay picker: featured variation first, then alternatives.
    let picker_registry = VariationRegistry::from_entries(
        [
            ("v4", "geometric"),
            ("v5", "editorial"),
            ("v2", "bold-typography"),
            ("v3", "gradient-accent"),
        ]
        .iter()
        .map(|(raw, unit)| Ok((VariationId::parse(raw)?, *unit)))
        .collect::<Result<Vec<_>, vitrine_model::ModelError>>()?,
    )?;

    let mut overlay = OverlayShell::new(picker_registry, MemoryHistory::new());
    overlay.open_pressed(&VariationId::parse("v4")?);
    println!(
        "overlay open: {:?} at #{}",
        overlay.active_unit(),
        overlay.history().backend().fragment().unwrap_or_default()
    );

    overlay.close_pressed();
    while let Some(entry) = overlay.history_mut().backend_mut().pop_notification() {
        overlay.on_navigate(entry.as_ref());
    }
    println!("overlay after close: open = {}", overlay.is_open());
    overlay.dispose();

    Ok(())
}
