//! Row of small statistic cards above a resource table

use crate::data_view::Tone;
use leptos::prelude::*;

/// One statistic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    /// Caption
    pub label: &'static str,
    /// Formatted value
    pub value: String,
    /// Accent color
    pub tone: Tone,
}

impl Stat {
    /// Build a statistic
    pub fn new(label: &'static str, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label,
            value: value.into(),
            tone,
        }
    }
}

/// Statistic cards; renders nothing when `stats` is empty
#[component]
pub fn SummaryCards(stats: Signal<Vec<Stat>>) -> impl IntoView {
    view! {
        <Show when=move || stats.with(|s| !s.is_empty())>
            <div class="summary-cards">
                {move || {
                    stats
                        .get()
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class=format!("summary-card {}", stat.tone.class())>
                                    <p class="summary-label">{stat.label}</p>
                                    <p class="summary-value">{stat.value}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
