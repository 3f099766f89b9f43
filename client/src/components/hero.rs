//! Hero section with the animated particle background.
//!
//! ARCHITECTURE
//! ============
//! The `particles` crate owns simulation and drawing; this component only
//! binds an `Engine` to the canvas once it mounts, drives it with a
//! `FrameLoop`, and forwards window resizes. Both live in a local
//! `StoredValue`, so disposing the component drops the loop, which cancels
//! the pending animation frame.

use leptos::prelude::*;

use crate::components::stats::StatCounters;
use crate::content::BRAND;

#[cfg(feature = "hydrate")]
struct Running {
    engine: std::rc::Rc<std::cell::RefCell<particles::engine::Engine>>,
    _frames: particles::frame_loop::FrameLoop,
}

#[cfg(feature = "hydrate")]
fn start(canvas: web_sys::HtmlCanvasElement) -> Result<Running, wasm_bindgen::JsValue> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use particles::engine::Engine;
    use particles::frame_loop::FrameLoop;

    let (width, height) = crate::util::scroll::viewport_size();
    let engine = Rc::new(RefCell::new(Engine::new(canvas, width, height)?));
    let ticking = Rc::clone(&engine);
    let frames = FrameLoop::start(move || ticking.borrow_mut().frame())?;
    Ok(Running { engine, _frames: frames })
}

#[component]
pub fn HeroCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let running = StoredValue::new_local(None::<Running>);

        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if running.with_value(Option::is_some) {
                return;
            }
            match start(canvas) {
                Ok(r) => running.set_value(Some(r)),
                Err(err) => log::warn!("hero animation unavailable: {err:?}"),
            }
        });

        let resize = window_event_listener(leptos::ev::resize, move |_| {
            let (width, height) = crate::util::scroll::viewport_size();
            running.with_value(|r| {
                if let Some(r) = r {
                    r.engine.borrow_mut().resize(width, height);
                }
            });
        });
        on_cleanup(move || resize.remove());
    }

    view! { <canvas id="heroCanvas" class="hero-canvas" node_ref=canvas_ref></canvas> }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <HeroCanvas/>
            <div class="hero-content">
                <h1 class="hero-title">
                    "Building Africa's AI Future, "
                    <span class="highlight">"One Solution at a Time"</span>
                </h1>
                <p class="hero-subtitle">
                    {BRAND}
                    " designs, builds, and ships practical AI for businesses across the continent."
                </p>
                <div class="hero-buttons">
                    <a href="#contact" class="btn btn-primary">"Start a Project"</a>
                    <a href="#portfolio" class="btn btn-secondary">"See Our Work"</a>
                </div>
                <StatCounters/>
            </div>
        </section>
    }
}
