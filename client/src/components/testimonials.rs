//! Testimonial carousel with autoplay, indicators, and swipe.
//!
//! The autoplay interval is rebuilt whenever the carousel's epoch or pause
//! state changes, which restarts the 5 s countdown after every navigation.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::TESTIMONIALS;
use crate::state::carousel::Carousel;

/// Horizontal screen position of the touch that changed in `ev`.
#[cfg(feature = "hydrate")]
fn touch_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| f64::from(t.screen_x()))
}

#[cfg(not(feature = "hydrate"))]
fn touch_x(_ev: &leptos::ev::TouchEvent) -> Option<f64> {
    None
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = expect_context::<RwSignal<Carousel>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::carousel::AUTOPLAY_MS;
        use gloo_timers::callback::Interval;

        let schedule = Memo::new(move |_| carousel.with(|c| (c.epoch(), c.autoplay_active())));
        let timer = StoredValue::new_local(None::<Interval>);
        Effect::new(move || {
            let (_, active) = schedule.get();
            let next = active.then(|| {
                Interval::new(AUTOPLAY_MS, move || {
                    carousel.try_update(Carousel::autoplay_tick);
                })
            });
            // Dropping the previous interval cancels it.
            timer.set_value(next);
        });
    }

    let slides = TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(i, t)| {
            view! {
                <div class="testimonial-slide" class:active=move || carousel.with(|c| c.index() == i)>
                    <p class="testimonial-quote">{t.quote}</p>
                    <div class="testimonial-author">
                        <strong>{t.name}</strong>
                        <span>{t.role}</span>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let indicators = (0..TESTIMONIALS.len())
        .map(|i| {
            view! {
                <button
                    class="indicator"
                    class:active=move || carousel.with(|c| c.index() == i)
                    aria-label=format!("Show testimonial {}", i + 1)
                    on:click=move |_| carousel.update(|c| c.go_to(i))
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="testimonials" class="testimonials">
            <Reveal>
                <h2 class="section-title">"What Our Clients Say"</h2>
            </Reveal>
            <div class="testimonial-carousel">
                <div
                    id="testimonialTrack"
                    class="testimonial-track"
                    on:mouseenter=move |_| carousel.update(Carousel::pause)
                    on:mouseleave=move |_| carousel.update(Carousel::resume)
                    on:touchstart=move |ev| {
                        if let Some(x) = touch_x(&ev) {
                            carousel.update(|c| c.touch_start(x));
                        }
                    }
                    on:touchend=move |ev| {
                        let x = touch_x(&ev);
                        carousel.update(|c| match x {
                            Some(x) => {
                                c.touch_end(x);
                            }
                            None => c.resume(),
                        });
                    }
                >
                    {slides}
                </div>
                <button id="prevBtn" class="carousel-btn prev" aria-label="Previous testimonial" on:click=move |_| {
                    carousel.update(Carousel::prev)
                }>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <button id="nextBtn" class="carousel-btn next" aria-label="Next testimonial" on:click=move |_| {
                    carousel.update(Carousel::next)
                }>
                    <i class="fas fa-chevron-right"></i>
                </button>
                <div id="carouselIndicators" class="carousel-indicators">{indicators}</div>
            </div>
        </section>
    }
}
