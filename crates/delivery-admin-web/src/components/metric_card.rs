//! Headline metric card

use leptos::prelude::*;

/// Change badge next to a metric
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    /// Formatted change, e.g. `+12%`
    pub text: String,
    /// Non-negative change
    pub positive: bool,
}

impl Trend {
    /// Trend of a percentage change
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self {
            text: delivery_admin_core::utils::format_change(percent),
            positive: percent >= 0.0,
        }
    }

    /// Fixed trend text
    pub fn fixed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            positive: true,
        }
    }
}

/// Dashboard card with a value and an optional trend
#[component]
pub fn MetricCard(
    /// Card title
    title: &'static str,
    /// Formatted value; `...` while unknown
    value: Signal<String>,
    /// Change badge
    trend: Signal<Option<Trend>>,
    /// Icon glyph
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-icon">{icon}</div>
            <div class="metric-body">
                <p class="metric-title">{title}</p>
                <p class="metric-value">{move || value.get()}</p>
                {move || {
                    trend
                        .get()
                        .map(|trend| {
                            let class = if trend.positive {
                                "metric-change positive"
                            } else {
                                "metric-change negative"
                            };
                            view! { <span class=class>{trend.text}</span> }
                        })
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_sign() {
        assert_eq!(
            Trend::from_percent(12.0),
            Trend {
                text: "+12%".to_string(),
                positive: true
            }
        );
        assert!(!Trend::from_percent(-3.5).positive);
        assert!(Trend::from_percent(0.0).positive);
    }
}
