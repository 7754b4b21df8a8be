//! Advertising campaigns

use super::fixtures;
use super::resource_screen::{Collection, DataSource, RecordDetail, Resource, ResourceScreen};
use crate::components::summary_cards::Stat;
use crate::data_view::{ActionKind, Cell, Column, RowAction, Tone};
use crate::filter::Searchable;
use crate::forms::ad::AdForm;
use delivery_admin_core::Ad;
use delivery_admin_core::utils::{format_brl, format_decimal, format_rate};
use leptos::prelude::*;

fn is_running(ad: &Ad) -> bool {
    ad.status.trim().eq_ignore_ascii_case("ativo")
}

#[allow(clippy::cast_precision_loss)]
fn count(value: u64) -> String {
    format_decimal(value as f64, 0)
}

impl Searchable for Ad {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.restaurant.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(&self.status)
    }
}

impl Resource for Ad {
    const TITLE: &'static str = "Anúncios";
    const SUBTITLE: &'static str = "Gerencie campanhas publicitárias da plataforma";
    const SEARCH_PLACEHOLDER: &'static str = "Buscar campanhas...";

    fn source() -> DataSource<Self> {
        DataSource::Fixture(fixtures::ads)
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("campaign", "Campanha"),
            Column::new("type", "Tipo"),
            Column::new("period", "Período"),
            Column::new("budget", "Orçamento"),
            Column::new("performance", "Performance"),
            Column::new("status", "Status"),
            Column::new("actions", "Ações").with_width("90px"),
        ]
    }

    fn render_cell(&self, column: &Column) -> Option<Cell> {
        match column.key {
            "campaign" => Some(Cell::stacked(&self.title, &self.restaurant)),
            "type" => Some(Cell::badge(&self.kind, Tone::Neutral)),
            "period" => Some(Cell::stacked(
                &self.start_date,
                format!("até {}", self.end_date),
            )),
            "budget" => Some(Cell::text(
                self.budget.map_or_else(|| "-".to_string(), format_brl),
            )),
            "performance" => Some(Cell::stacked(
                format!("{} cliques", count(self.clicks)),
                format!("{} impressões · CTR {}", count(self.impressions), self.ctr()),
            )),
            "status" => Some(Cell::badge(
                &self.status,
                if is_running(self) { Tone::Success } else { Tone::Warning },
            )),
            "actions" => Some(Cell::Actions(vec![RowAction::new(
                ActionKind::View,
                "Ver",
                Tone::Info,
            )])),
            _ => None,
        }
    }

    fn summary(records: &[Self]) -> Vec<Stat> {
        let clicks: u64 = records.iter().map(|ad| ad.clicks).sum();
        let impressions: u64 = records.iter().map(|ad| ad.impressions).sum();
        let budget: f64 = records.iter().filter_map(|ad| ad.budget).sum();
        let running = records.iter().filter(|ad| is_running(ad)).count();

        vec![
            Stat::new("Campanhas Ativas", running.to_string(), Tone::Neutral),
            Stat::new("Orçamento Total", format_brl(budget), Tone::Info),
            Stat::new("Cliques Totais", count(clicks), Tone::Success),
            Stat::new("CTR Médio", format_rate(clicks, impressions), Tone::Warning),
        ]
    }
}

/// Campaign list with the new campaign form
#[component]
pub fn AdsPage() -> impl IntoView {
    let collection = Collection::<Ad>::new();
    let creating = RwSignal::new(false);
    let selected = RwSignal::new(None::<Ad>);

    let open_form = Callback::new(move |()| creating.set(true));
    let close_form = Callback::new(move |()| creating.set(false));
    let close_detail = Callback::new(move |()| selected.set(None));
    let saved = Callback::new(move |()| collection.load());
    let on_action = Callback::new(move |(kind, ad): (ActionKind, Ad)| {
        if kind == ActionKind::View {
            selected.set(Some(ad));
        }
    });

    view! {
        <ResourceScreen
            collection=collection
            on_action=on_action
            create_label="Nova Campanha"
            on_create=open_form
        />
        <Show when=move || creating.get()>
            <AdForm on_save=saved on_close=close_form />
        </Show>
        {move || {
            selected
                .get()
                .map(|ad| {
                    view! { <RecordDetail title=ad.title.clone() record=ad on_close=close_detail /> }
                })
        }}
    }
}
