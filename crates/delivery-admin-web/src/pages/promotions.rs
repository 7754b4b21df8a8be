//! Coupons and special offers

use super::fixtures;
use super::resource_screen::{Collection, DataSource, RecordDetail, Resource, ResourceScreen};
use crate::components::summary_cards::Stat;
use crate::data_view::{ActionKind, Cell, Column, RowAction, Tone};
use crate::filter::{Searchable, StatusOption};
use crate::forms::promotion::PromotionForm;
use delivery_admin_core::Promotion;
use delivery_admin_core::utils::format_decimal;
use leptos::prelude::*;

const STATUS_OPTIONS: &[StatusOption] = &[
    StatusOption::new("active", "Ativas", "ativo"),
    StatusOption::new("paused", "Pausadas", "pausado"),
    StatusOption::new("expired", "Expiradas", "expirado"),
];

fn status_tone(status: &str) -> Tone {
    match status.trim().to_lowercase().as_str() {
        "ativo" => Tone::Success,
        "pausado" => Tone::Warning,
        _ => Tone::Neutral,
    }
}

impl Searchable for Promotion {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(&self.status)
    }
}

impl Resource for Promotion {
    const TITLE: &'static str = "Promoções";
    const SUBTITLE: &'static str = "Gerencie cupons e ofertas especiais";
    const SEARCH_PLACEHOLDER: &'static str = "Buscar promoções...";

    fn source() -> DataSource<Self> {
        DataSource::Fixture(fixtures::promotions)
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("promotion", "Promoção"),
            Column::new("type", "Tipo"),
            Column::new("discount", "Desconto"),
            Column::new("period", "Período"),
            Column::new("usage", "Uso").with_width("140px"),
            Column::new("status", "Status"),
            Column::new("actions", "Ações").with_width("90px"),
        ]
    }

    fn render_cell(&self, column: &Column) -> Option<Cell> {
        match column.key {
            "promotion" => Some(Cell::stacked(
                &self.name,
                format!("Código: {} · {}", self.code, self.restaurants),
            )),
            "type" => Some(Cell::badge(&self.kind, Tone::Neutral)),
            "period" => Some(Cell::stacked(
                &self.start_date,
                format!("até {}", self.end_date),
            )),
            "usage" => Some(Cell::Progress {
                label: format!("{} / {}", self.used_count, self.usage_limit),
                percent: self.usage_percent(),
            }),
            "status" => Some(Cell::badge(&self.status, status_tone(&self.status))),
            "actions" => Some(Cell::Actions(vec![RowAction::new(
                ActionKind::View,
                "Ver",
                Tone::Info,
            )])),
            _ => None,
        }
    }

    fn status_options() -> &'static [StatusOption] {
        STATUS_OPTIONS
    }

    #[allow(clippy::cast_precision_loss)]
    fn summary(records: &[Self]) -> Vec<Stat> {
        let active = records
            .iter()
            .filter(|p| status_tone(&p.status) == Tone::Success)
            .count();
        let used: u64 = records.iter().map(|p| p.used_count).sum();
        let limit: u64 = records.iter().map(|p| p.usage_limit).sum();
        let usage = if limit == 0 {
            0.0
        } else {
            used as f64 / limit as f64 * 100.0
        };

        vec![
            Stat::new("Promoções Ativas", active.to_string(), Tone::Neutral),
            Stat::new("Cupons Utilizados", format_decimal(used as f64, 0), Tone::Info),
            Stat::new("Limite Total", format_decimal(limit as f64, 0), Tone::Success),
            Stat::new("Uso do Limite", format!("{usage:.0}%"), Tone::Warning),
        ]
    }
}

/// Promotion list with the new promotion form
#[component]
pub fn PromotionsPage() -> impl IntoView {
    let collection = Collection::<Promotion>::new();
    let creating = RwSignal::new(false);
    let selected = RwSignal::new(None::<Promotion>);

    let open_form = Callback::new(move |()| creating.set(true));
    let close_form = Callback::new(move |()| creating.set(false));
    let close_detail = Callback::new(move |()| selected.set(None));
    let saved = Callback::new(move |()| collection.load());
    let on_action = Callback::new(move |(kind, promotion): (ActionKind, Promotion)| {
        if kind == ActionKind::View {
            selected.set(Some(promotion));
        }
    });

    view! {
        <ResourceScreen
            collection=collection
            on_action=on_action
            create_label="Nova Promoção"
            on_create=open_form
        />
        <Show when=move || creating.get()>
            <PromotionForm on_save=saved on_close=close_form />
        </Show>
        {move || {
            selected
                .get()
                .map(|promotion| {
                    view! {
                        <RecordDetail
                            title=promotion.name.clone()
                            record=promotion
                            on_close=close_detail
                        />
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ListQuery, StatusFilter, apply};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_matches_code() {
        let query = ListQuery {
            search: "pizzaback".to_string(),
            status: StatusFilter::All,
        };
        let names: Vec<_> = apply(&fixtures::promotions(), &query)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Combo Pizza"]);
    }

    #[test]
    fn test_paused_filter() {
        let query = ListQuery {
            search: String::new(),
            status: StatusFilter::from_selection("paused", Promotion::status_options()),
        };
        assert_eq!(apply(&fixtures::promotions(), &query).len(), 1);
    }

    #[test]
    fn test_usage_cell_is_progress() {
        let promotion = fixtures::promotions().remove(1);
        let cell = promotion.render_cell(&Column::new("usage", ""));

        assert_eq!(
            cell.map(|c| c.to_string()),
            Some("234 / 500".to_string())
        );
    }

    #[test]
    fn test_summary() {
        let values: Vec<_> = Promotion::summary(&fixtures::promotions())
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, vec!["2", "779", "1.700", "46%"]);
    }
}
