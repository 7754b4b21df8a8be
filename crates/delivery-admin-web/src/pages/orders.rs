//! Order management

use super::resource_screen::{Collection, DataSource, Resource, ResourceScreen};
use crate::components::modal::{DetailRow, Modal};
use crate::data_view::{ActionKind, Cell, Column, RowAction, Tone};
use crate::filter::{Searchable, StatusOption};
use delivery_admin_core::Order;
use delivery_admin_core::types::OrderStatus;
use delivery_admin_core::utils::format_brl;
use leptos::prelude::*;

const STATUS_OPTIONS: &[StatusOption] = &[
    StatusOption::new("pendente", "Pendente", "pendente"),
    StatusOption::new("em_preparo", "Em Preparo", "em_preparo"),
    StatusOption::new("entregue", "Entregue", "entregue"),
    StatusOption::new("cancelado", "Cancelado", "cancelado"),
];

/// Badge tone of an order status
#[must_use]
pub fn status_tone(status: &OrderStatus) -> Tone {
    match status {
        OrderStatus::Delivered => Tone::Success,
        OrderStatus::Preparing => Tone::Info,
        OrderStatus::Pending => Tone::Warning,
        OrderStatus::Cancelled => Tone::Danger,
        OrderStatus::Other(_) => Tone::Neutral,
    }
}

fn value_text(value: Option<f64>) -> String {
    format_brl(value.unwrap_or(0.0))
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.customer.as_str(),
            self.restaurant.as_str(),
            self.deliverer.as_str(),
        ]
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.code())
    }
}

impl Resource for Order {
    const TITLE: &'static str = "Pedidos";
    const SUBTITLE: &'static str = "Acompanhe todos os pedidos da plataforma";
    const SEARCH_PLACEHOLDER: &'static str = "Buscar por pedido, cliente, restaurante ou entregador...";

    fn source() -> DataSource<Self> {
        DataSource::Remote("/orders")
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "Pedido").with_width("90px"),
            Column::new("customer", "Cliente"),
            Column::new("restaurant", "Restaurante"),
            Column::new("deliverer", "Entregador"),
            Column::new("value", "Valor"),
            Column::new("status", "Status"),
            Column::new("payment", "Pagamento"),
            Column::new("time", "Horário"),
            Column::new("actions", "Ações").with_width("90px"),
        ]
    }

    fn render_cell(&self, column: &Column) -> Option<Cell> {
        match column.key {
            "id" => Some(Cell::text(format!("#{}", self.id))),
            "value" => Some(Cell::text(value_text(self.value))),
            "status" => Some(Cell::badge(self.status.label(), status_tone(&self.status))),
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
}

/// Orders screen with a read-only detail panel
#[component]
pub fn OrdersPage() -> impl IntoView {
    let collection = Collection::<Order>::new();
    let selected = RwSignal::new(None::<Order>);
    let close = Callback::new(move |()| selected.set(None));
    let on_action = Callback::new(move |(kind, order): (ActionKind, Order)| {
        if kind == ActionKind::View {
            selected.set(Some(order));
        }
    });

    view! {
        <ResourceScreen collection=collection on_action=on_action />
        {move || {
            selected
                .get()
                .map(|order| {
                    view! {
                        <Modal title=format!("Pedido #{}", order.id) on_close=close>
                            <DetailRow label="Cliente" value=order.customer.clone() />
                            <DetailRow label="Restaurante" value=order.restaurant.clone() />
                            <DetailRow label="Entregador" value=order.deliverer.clone() />
                            <DetailRow label="Valor" value=value_text(order.value) />
                            <DetailRow label="Status" value=order.status.label().to_string() />
                            <DetailRow label="Pagamento" value=order.payment.clone() />
                            <DetailRow label="Horário" value=order.time.clone() />
                        </Modal>
                    }
                })
        }}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::filter::{ListQuery, StatusFilter, apply};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn orders() -> Vec<Order> {
        serde_json::from_value(json!([
            {"id": 1, "customer": "Ana", "restaurant": "Sushi Kenzo", "value": 89.9, "status": "entregue"},
            {"id": 2, "customer": "Bruno", "restaurant": "Cantina", "value": "32.5", "status": "pendente"},
            {"id": 3, "customer": "Carla", "restaurant": "Cantina", "status": "estornado"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_status_filter_uses_raw_codes() {
        let query = ListQuery {
            search: String::new(),
            status: StatusFilter::from_selection("pendente", Order::status_options()),
        };
        let ids: Vec<_> = apply(&orders(), &query).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_unknown_status_renders_verbatim() {
        let table = Order::data_view().project(&orders()).unwrap();
        let statuses: Vec<_> = table
            .rows
            .iter()
            .filter_map(|row| row.cells.get(5).cloned())
            .collect();

        assert_eq!(
            statuses,
            vec![
                Cell::badge("Entregue", Tone::Success),
                Cell::badge("Pendente", Tone::Warning),
                Cell::badge("estornado", Tone::Neutral),
            ]
        );
    }

    #[test]
    fn test_value_cell_is_money() {
        let table = Order::data_view().project(&orders()).unwrap();
        let values: Vec<_> = table
            .rows
            .iter()
            .filter_map(|row| row.cells.get(4).map(ToString::to_string))
            .collect();
        assert_eq!(values, vec!["R$ 89,90", "R$ 32,50", "R$ 0,00"]);
    }
}
