//! Dashboard: headline metrics and the last seven days
//!
//! The metrics and the weekly series are fetched concurrently and
//! independently; either can fail without blanking the other.

use crate::components::loading::{LoadFailed, Loading};
use crate::components::metric_card::{MetricCard, Trend};
use crate::data_view::bar_height;
use crate::resource::LoadState;
use crate::state::use_api;
use crate::toast::use_toaster;
use delivery_admin_core::utils::{format_brl, format_decimal};
use delivery_admin_core::{DashboardMetrics, WeeklyPoint};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Weekday labels in display order, Sunday first
pub const WEEKDAYS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Placeholder for a metric the backend did not send
const UNKNOWN: &str = "...";

/// One weekday of the reconstructed week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTotals {
    /// Weekday label
    pub day: &'static str,
    /// Orders that day
    pub orders: u64,
    /// Revenue that day
    pub revenue: f64,
}

/// A full week, always seven days long
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    /// `Dom` through `Sáb`
    pub days: Vec<DayTotals>,
    /// Revenue summed over the seven days
    pub total_revenue: f64,
}

impl Week {
    /// Highest order count of the week
    #[must_use]
    pub fn peak_orders(&self) -> u64 {
        self.days.iter().map(|d| d.orders).max().unwrap_or(0)
    }
}

/// Rebuild the week from whatever days the backend returned.
///
/// Missing days count as zero and the first record wins for duplicated
/// days. Records with an unknown day label are ignored.
#[must_use]
pub fn weekly_totals(points: &[WeeklyPoint]) -> Week {
    let days: Vec<DayTotals> = WEEKDAYS
        .iter()
        .map(|day| {
            let point = points.iter().find(|p| p.day.trim() == *day);
            DayTotals {
                day,
                orders: point.map_or(0, |p| p.total_orders),
                revenue: point.and_then(|p| p.total_revenue).unwrap_or(0.0),
            }
        })
        .collect();
    let total_revenue = days.iter().map(|d| d.revenue).sum();

    Week {
        days,
        total_revenue,
    }
}

fn count_text(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| format_decimal(v, 0))
}

fn trend(percent: Option<f64>) -> Option<Trend> {
    percent.map(|p| Trend::from_percent(p.round()))
}

/// Text of the four metric cards, in display order
#[must_use]
pub fn metric_values(metrics: Option<&DashboardMetrics>) -> [String; 4] {
    let m = metrics.copied().unwrap_or_default();
    [
        count_text(m.orders_today),
        count_text(m.users),
        count_text(m.restaurants),
        m.revenue_today
            .map_or_else(|| UNKNOWN.to_string(), format_brl),
    ]
}

#[component]
fn OrdersChart(week: Week) -> impl IntoView {
    let peak = week.peak_orders();

    view! {
        <div class="bar-chart">
            {week
                .days
                .into_iter()
                .map(|day| {
                    let height = bar_height(day.orders, peak, 160);
                    view! {
                        <div class="bar-column">
                            <div
                                class="bar"
                                title=format!("{} pedidos", day.orders)
                                style=format!("height: {height}px")
                            ></div>
                            <span class="bar-label">{day.day}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RevenueList(week: Week) -> impl IntoView {
    view! {
        <ul class="revenue-list">
            {week
                .days
                .into_iter()
                .map(|day| {
                    view! {
                        <li class="revenue-row">
                            <span>{day.day}</span>
                            <span>{format_brl(day.revenue)}</span>
                        </li>
                    }
                })
                .collect_view()}
            <li class="revenue-row revenue-total">
                <span>"Total"</span>
                <span>{format_brl(week.total_revenue)}</span>
            </li>
        </ul>
    }
}

/// Landing page of the console
#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_api();
    let toaster = use_toaster();
    let metrics = RwSignal::new(None::<DashboardMetrics>);
    let weekly = RwSignal::new(Vec::<WeeklyPoint>::new());
    let weekly_state = RwSignal::new(LoadState::Idle);

    let load_metrics = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                match client.dashboard().await {
                    Ok(data) => {
                        let _ = metrics.try_set(Some(data));
                    }
                    Err(e) => toaster.report("Failed to load dashboard metrics", &e),
                }
            });
        }
    };

    let load_weekly = StoredValue::new(move || {
        let client = client.clone();
        weekly_state.set(LoadState::Loading);
        spawn_local(async move {
            match client.dashboard_weekly().await {
                Ok(points) => {
                    tracing::debug!("Weekly series with {} days", points.len());
                    let _ = weekly.try_set(points);
                    let _ = weekly_state.try_set(LoadState::Ready);
                }
                Err(e) => {
                    let _ = weekly_state.try_set(LoadState::Failed(e.user_message()));
                    toaster.report("Failed to load weekly series", &e);
                }
            }
        });
    });

    load_metrics();
    load_weekly.with_value(|load| load());

    let value = move |index: usize| {
        Signal::derive(move || {
            metrics.with(|m| metric_values(m.as_ref()))
                .get(index)
                .cloned()
                .unwrap_or_default()
        })
    };
    let retry = Callback::new(move |()| load_weekly.with_value(|load| load()));

    let weekly_panel = move |render: fn(Week) -> AnyView| {
        move || match weekly_state.get() {
            LoadState::Ready => render(weekly.with(|points| weekly_totals(points))),
            LoadState::Failed(message) => {
                view! { <LoadFailed message=message on_retry=retry /> }.into_any()
            }
            LoadState::Idle | LoadState::Loading => view! { <Loading /> }.into_any(),
        }
    };

    view! {
        <div class="dashboard">
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page-subtitle">"Visão geral do seu app de delivery"</p>
                </div>
            </div>

            <div class="metric-grid">
                <MetricCard
                    title="Pedidos Hoje"
                    value=value(0)
                    trend=Signal::derive(move || {
                        metrics.with(|m| m.and_then(|m| trend(m.orders_today_percent)))
                    })
                    icon="🛍"
                />
                <MetricCard
                    title="Total de Usuários"
                    value=value(1)
                    trend=Signal::derive(move || {
                        metrics.with(|m| m.and_then(|m| trend(m.users_percent)))
                    })
                    icon="👥"
                />
                <MetricCard
                    title="Restaurantes Ativos"
                    value=value(2)
                    trend=Signal::derive(move || {
                        metrics.with(|m| m.map(|_| Trend::fixed("+0")))
                    })
                    icon="🏪"
                />
                <MetricCard
                    title="Faturamento Hoje"
                    value=value(3)
                    trend=Signal::derive(move || {
                        metrics.with(|m| m.and_then(|m| trend(m.revenue_percent)))
                    })
                    icon="💰"
                />
            </div>

            <div class="chart-grid">
                <div class="card">
                    <h3>"Pedidos por Dia"</h3>
                    <p class="card-subtitle">"Últimos 7 dias"</p>
                    {weekly_panel(|week| view! { <OrdersChart week=week /> }.into_any())}
                </div>
                <div class="card">
                    <h3>"Faturamento"</h3>
                    <p class="card-subtitle">"Esta semana"</p>
                    {weekly_panel(|week| view! { <RevenueList week=week /> }.into_any())}
                </div>
            </div>
        </div>
    }
}
