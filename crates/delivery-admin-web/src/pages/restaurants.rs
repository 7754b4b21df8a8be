//! Restaurant management

use super::resource_screen::{Collection, DataSource, Resource, ResourceScreen};
use crate::components::modal::{DetailRow, Modal};
use crate::data_view::{ActionKind, Cell, Column, RowAction, Tone};
use crate::filter::{Searchable, StatusOption};
use crate::forms::restaurant::RestaurantForm;
use crate::resource::DetailRequests;
use delivery_admin_core::Restaurant;
use delivery_admin_core::types::StatusChange;
use delivery_admin_core::utils::format_brl;
use leptos::prelude::*;
use leptos::task::spawn_local;

const STATUS_OPTIONS: &[StatusOption] = &[
    StatusOption::new("active", "Ativos", "ativo"),
    StatusOption::new("inactive", "Inativos", "inativo"),
];

impl Searchable for Restaurant {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.city.as_str(), self.category.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(&self.status)
    }
}

fn rating_text(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}"))
}

impl Resource for Restaurant {
    const TITLE: &'static str = "Restaurantes";
    const SUBTITLE: &'static str = "Gerencie os restaurantes parceiros";
    const SEARCH_PLACEHOLDER: &'static str = "Buscar por nome, cidade ou categoria...";

    fn source() -> DataSource<Self> {
        DataSource::Remote("/restaurants")
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Restaurante"),
            Column::new("city", "Cidade"),
            Column::new("category", "Categoria"),
            Column::new("rating", "Avaliação"),
            Column::new("orders", "Pedidos"),
            Column::new("commission", "Comissão"),
            Column::new("avg_time", "Tempo Médio"),
            Column::new("status", "Status"),
            Column::new("actions", "Ações").with_width("220px"),
        ]
    }

    fn render_cell(&self, column: &Column) -> Option<Cell> {
        match column.key {
            "rating" => Some(Cell::Rating {
                score: rating_text(self.rating),
                note: None,
            }),
            "commission" => Some(Cell::text(format_brl(self.commission.unwrap_or(0.0)))),
            "status" => Some(Cell::badge(
                &self.status,
                if self.is_active() { Tone::Success } else { Tone::Danger },
            )),
            "actions" => Some(Cell::Actions(vec![
                RowAction::new(ActionKind::View, "Ver", Tone::Info),
                RowAction::new(ActionKind::Edit, "Editar", Tone::Neutral),
                if self.is_active() {
                    RowAction::new(ActionKind::ToggleStatus, "Desativar", Tone::Danger)
                } else {
                    RowAction::new(ActionKind::ToggleStatus, "Ativar", Tone::Success)
                },
            ])),
            _ => None,
        }
    }

    fn status_options() -> &'static [StatusOption] {
        STATUS_OPTIONS
    }
}

#[derive(Debug, Clone)]
enum Dialog {
    Closed,
    Detail(Restaurant),
    Edit(Restaurant),
}

/// Restaurants screen with detail, edit and status toggle
#[component]
pub fn RestaurantsPage() -> impl IntoView {
    let collection = Collection::<Restaurant>::new();
    let dialog = RwSignal::new(Dialog::Closed);
    let requests = RwSignal::new(DetailRequests::default());
    let close = Callback::new(move |()| {
        requests.update(DetailRequests::cancel);
        dialog.set(Dialog::Closed);
    });
    let saved = Callback::new(move |()| collection.load());

    // View and edit both work on a fresh detail record
    let open = move |id: u64, wrap: fn(Restaurant) -> Dialog| {
        let Some(ticket) = requests.try_update(DetailRequests::begin) else {
            return;
        };
        let client = collection.client();
        let toaster = collection.toaster();
        spawn_local(async move {
            let result = client.restaurant(id).await;
            if requests.try_update(|r| r.finish(ticket)) != Some(true) {
                tracing::debug!("Dropped stale detail of restaurant {id}");
                return;
            }
            match result {
                Ok(detail) => {
                    let _ = dialog.try_set(wrap(detail));
                }
                Err(e) => toaster.report("Failed to load restaurant detail", &e),
            }
        });
    };

    let on_action = Callback::new(move |(kind, restaurant): (ActionKind, Restaurant)| {
        let id = restaurant.id;
        match kind {
            ActionKind::View => open(id, Dialog::Detail),
            ActionKind::Edit => open(id, Dialog::Edit),
            ActionKind::ToggleStatus => {
                let change = StatusChange {
                    status: restaurant.toggled_status(),
                };
                collection.mutate(
                    "Restaurant status change",
                    "Status do restaurante atualizado!",
                    move |client| async move { client.set_restaurant_status(id, change).await },
                );
            }
            ActionKind::Delete => {}
        }
    });

    view! {
        <ResourceScreen collection=collection on_action=on_action />
        {move || match dialog.get() {
            Dialog::Closed => ().into_any(),
            Dialog::Detail(restaurant) => view! {
                <Modal title=restaurant.name.clone() on_close=close>
                    <DetailRow label="Cidade" value=restaurant.city.clone() />
                    <DetailRow label="Categoria" value=restaurant.category.clone() />
                    <DetailRow label="Avaliação" value=format!("★ {}", rating_text(restaurant.rating)) />
                    <DetailRow label="Status" value=restaurant.status.clone() />
                    <DetailRow label="Pedidos" value=restaurant.orders.to_string() />
                    <DetailRow
                        label="Comissão"
                        value=format_brl(restaurant.commission.unwrap_or(0.0))
                    />
                    <DetailRow label="Tempo Médio" value=restaurant.avg_time.clone() />
                </Modal>
            }
            .into_any(),
            Dialog::Edit(restaurant) => view! {
                <RestaurantForm restaurant=restaurant on_save=saved on_close=close />
            }
            .into_any(),
        }}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::filter::{ListQuery, StatusFilter, apply};
    use pretty_assertions::assert_eq;

    fn restaurant(id: u64, name: &str, status: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            city: "Recife".to_string(),
            category: "Nordestina".to_string(),
            rating: Some(4.6),
            status: status.to_string(),
            ..Restaurant::default()
        }
    }

    #[test]
    fn test_toggle_label_follows_status() {
        let table = Restaurant::data_view()
            .project(&[restaurant(1, "A", "Ativo"), restaurant(2, "B", "Inativo")])
            .unwrap();

        let labels: Vec<_> = table
            .rows
            .iter()
            .filter_map(|row| row.cells.last().map(ToString::to_string))
            .collect();
        assert_eq!(labels, vec!["Ver Editar Desativar", "Ver Editar Ativar"]);
    }

    #[test]
    fn test_rating_and_commission_cells() {
        let mut record = restaurant(1, "A", "Ativo");
        record.commission = Some(1234.5);

        assert_eq!(
            record.render_cell(&Column::new("rating", "")).unwrap().to_string(),
            "★ 4.6"
        );
        assert_eq!(
            record.render_cell(&Column::new("commission", "")).unwrap(),
            Cell::text("R$ 1.234,50")
        );
        assert_eq!(record.render_cell(&Column::new("city", "")), None);
    }

    #[test]
    fn test_active_filter_keeps_only_active() {
        let records = vec![restaurant(1, "A", "Ativo"), restaurant(2, "B", "Inativo")];
        let query = ListQuery {
            search: String::new(),
            status: StatusFilter::from_selection("active", Restaurant::status_options()),
        };

        let ids: Vec<_> = apply(&records, &query).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
