//! Couriers

use super::resource_screen::{Collection, DataSource, RecordDetail, Resource, ResourceScreen};
use crate::components::summary_cards::Stat;
use crate::data_view::{ActionKind, Cell, Column, RowAction, Tone};
use crate::filter::Searchable;
use crate::forms::deliverer::DelivererForm;
use delivery_admin_core::Deliverer;
use delivery_admin_core::utils::format_decimal;
use leptos::prelude::*;

/// Mean rating with one decimal; `0.0` for an empty list.
///
/// Deliverers without a rating count as zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_performance(deliverers: &[Deliverer]) -> String {
    if deliverers.is_empty() {
        return "0.0".to_string();
    }
    let sum: f64 = deliverers
        .iter()
        .map(|d| d.performance.unwrap_or(0.0))
        .sum();
    format!("{:.1}", sum / deliverers.len() as f64)
}

impl Searchable for Deliverer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(&self.status)
    }
}

impl Resource for Deliverer {
    const TITLE: &'static str = "Entregadores";
    const SUBTITLE: &'static str = "Gerencie os entregadores da plataforma";
    const SEARCH_PLACEHOLDER: &'static str = "Buscar entregadores...";

    fn source() -> DataSource<Self> {
        DataSource::Remote("/deliverers")
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Nome"),
            Column::new("contact", "Contato"),
            Column::new("vehicle", "Veículo"),
            Column::new("performance", "Performance"),
            Column::new("status", "Status"),
            Column::new("actions", "Ações").with_width("90px"),
        ]
    }

    fn render_cell(&self, column: &Column) -> Option<Cell> {
        match column.key {
            "name" => Some(Cell::stacked(&self.name, format!("ID: {}", self.id))),
            "contact" => Some(Cell::stacked(&self.email, &self.phone)),
            "vehicle" => Some(Cell::badge(&self.vehicle, Tone::Neutral)),
            "performance" => Some(Cell::Rating {
                score: self
                    .performance
                    .map_or_else(|| "-".to_string(), |p| format!("{p:.1}")),
                note: Some(format!("{} entregas", self.deliveries)),
            }),
            "status" => Some(Cell::badge(
                &self.status,
                if self.is_active() { Tone::Success } else { Tone::Danger },
            )),
            "actions" => Some(Cell::Actions(vec![RowAction::new(
                ActionKind::View,
                "Ver",
                Tone::Info,
            )])),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn summary(records: &[Self]) -> Vec<Stat> {
        let active = records.iter().filter(|d| d.is_active()).count();
        let deliveries: u64 = records.iter().map(|d| d.deliveries).sum();

        vec![
            Stat::new("Total de Entregadores", records.len().to_string(), Tone::Neutral),
            Stat::new("Entregadores Ativos", active.to_string(), Tone::Success),
            Stat::new("Avaliação Média", average_performance(records), Tone::Info),
            Stat::new(
                "Total de Entregas",
                format_decimal(deliveries as f64, 0),
                Tone::Warning,
            ),
        ]
    }
}

/// Deliverer list with the registration form
#[component]
pub fn DeliverersPage() -> impl IntoView {
    let collection = Collection::<Deliverer>::new();
    let creating = RwSignal::new(false);
    let selected = RwSignal::new(None::<Deliverer>);

    let open_form = Callback::new(move |()| creating.set(true));
    let close_form = Callback::new(move |()| creating.set(false));
    let close_detail = Callback::new(move |()| selected.set(None));
    let saved = Callback::new(move |()| collection.load());
    let on_action = Callback::new(move |(kind, deliverer): (ActionKind, Deliverer)| {
        if kind == ActionKind::View {
            selected.set(Some(deliverer));
        }
    });

    view! {
        <ResourceScreen
            collection=collection
            on_action=on_action
            create_label="Novo Entregador"
            on_create=open_form
        />
        <Show when=move || creating.get()>
            <DelivererForm on_save=saved on_close=close_form />
        </Show>
        {move || {
            selected
                .get()
                .map(|deliverer| {
                    view! {
                        <RecordDetail
                            title=deliverer.name.clone()
                            record=deliverer
                            on_close=close_detail
                        />
                    }
                })
        }}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn deliverer(performance: Option<f64>, deliveries: u64, status: &str) -> Deliverer {
        Deliverer {
            id: 7,
            name: "Lucas".to_string(),
            performance,
            deliveries,
            status: status.to_string(),
            ..Deliverer::default()
        }
    }

    #[rstest]
    #[case(vec![], "0.0")]
    #[case(vec![Some(4.8), Some(4.6)], "4.7")]
    #[case(vec![Some(5.0), None], "2.5")]
    fn test_average_performance(#[case] ratings: Vec<Option<f64>>, #[case] expected: &str) {
        let records: Vec<_> = ratings
            .into_iter()
            .map(|r| deliverer(r, 0, "Ativo"))
            .collect();
        assert_eq!(average_performance(&records), expected);
    }

    #[test]
    fn test_summary() {
        let records = vec![
            deliverer(Some(4.9), 1200, "Ativo"),
            deliverer(Some(4.5), 340, "Inativo"),
        ];
        let values: Vec<_> = Deliverer::summary(&records)
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, vec!["2", "1", "4.7", "1.540"]);
    }

    #[test]
    fn test_string_ratings_from_backend() {
        let records: Vec<Deliverer> = serde_json::from_value(json!([
            {"id": "3", "name": "Rita", "performance": "4.8", "deliveries": "12", "status": "Ativo"}
        ]))
        .unwrap();

        let table = Deliverer::data_view().project(&records).unwrap();
        let cells: Vec<_> = table
            .rows
            .iter()
            .flat_map(|row| row.cells.iter().map(ToString::to_string))
            .collect();

        assert_eq!(cells.first().map(String::as_str), Some("Rita ID: 3"));
        assert_eq!(cells.get(3).map(String::as_str), Some("★ 4.8 12 entregas"));
    }
}
