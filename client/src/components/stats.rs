//! Hero stat counters that count up the first time they scroll into view.

use leptos::prelude::*;

use crate::content::STATS;

/// Advance every counter one step and reschedule until all are done.
#[cfg(feature = "hydrate")]
fn step(values: RwSignal<Vec<u32>>, mut counts: Vec<crate::util::counter::CountUp>) {
    use crate::util::counter::{CountUp, STEP_MS};

    let shown: Vec<u32> = counts.iter_mut().map(CountUp::tick).collect();
    if values.try_set(shown).is_some() {
        // Owner disposed.
        return;
    }
    if !counts.iter().all(CountUp::is_done) {
        gloo_timers::callback::Timeout::new(STEP_MS, move || step(values, counts)).forget();
    }
}

#[component]
pub fn StatCounters() -> impl IntoView {
    let values = RwSignal::new(vec![0_u32; STATS.len()]);
    let block_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::util::counter::{CountUp, STEP_MS};
        use crate::util::observe::{COUNTER_THRESHOLD, once_visible};

        let Some(block) = block_ref.get() else {
            return;
        };
        let started = once_visible(&block, COUNTER_THRESHOLD, None, move || {
            let counts = STATS.iter().map(|s| CountUp::new(s.target)).collect();
            gloo_timers::callback::Timeout::new(STEP_MS, move || step(values, counts)).forget();
        });
        if let Err(err) = started {
            log::warn!("stat counters unavailable: {err:?}");
        }
    });

    view! {
        <div class="hero-stats" node_ref=block_ref>
            {STATS
                .iter()
                .enumerate()
                .map(|(i, stat)| {
                    view! {
                        <div class="stat">
                            <span class="stat-number" data-target={stat.target.to_string()}>
                                {move || values.with(|v| v.get(i).copied().unwrap_or(0))}
                            </span>
                            <span class="stat-suffix">{stat.suffix}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
