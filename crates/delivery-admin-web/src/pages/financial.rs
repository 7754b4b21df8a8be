//! Financial control: transactions and recent revenue

use super::fixtures::{self, WEEK_REVENUE};
use super::resource_screen::{Collection, DataSource, RecordDetail, Resource, ResourceScreen};
use crate::components::summary_cards::Stat;
use crate::data_view::{ActionKind, Cell, Column, RowAction, Tone, bar_height};
use crate::filter::{Searchable, StatusOption};
use delivery_admin_core::Transaction;
use delivery_admin_core::utils::format_brl;
use leptos::prelude::*;

const STATUS_OPTIONS: &[StatusOption] = &[
    StatusOption::new("processed", "Processadas", "processado"),
    StatusOption::new("pending", "Pendentes", "pendente"),
];

fn is_processed(transaction: &Transaction) -> bool {
    transaction.status.trim().eq_ignore_ascii_case("processado")
}

fn total<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> f64 {
    transactions.filter_map(|t| t.amount).sum()
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.restaurant.as_str(), self.order_id.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(&self.status)
    }
}

impl Resource for Transaction {
    const TITLE: &'static str = "Financeiro";
    const SUBTITLE: &'static str = "Controle financeiro e relatórios";
    const SEARCH_PLACEHOLDER: &'static str = "Buscar transações...";

    fn source() -> DataSource<Self> {
        DataSource::Fixture(fixtures::transactions)
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("transaction", "Transação"),
            Column::new("restaurant", "Restaurante"),
            Column::new("amount", "Valor"),
            Column::new("method", "Método"),
            Column::new("date", "Data"),
            Column::new("status", "Status"),
            Column::new("actions", "Ações").with_width("90px"),
        ]
    }

    fn render_cell(&self, column: &Column) -> Option<Cell> {
        match column.key {
            "transaction" => Some(Cell::stacked(&self.kind, &self.order_id)),
            "amount" => Some(Cell::text(format_brl(self.amount.unwrap_or(0.0)))),
            "method" => Some(Cell::badge(&self.payment_method, Tone::Neutral)),
            "status" => Some(Cell::badge(
                &self.status,
                if is_processed(self) { Tone::Success } else { Tone::Warning },
            )),
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

    fn summary(records: &[Self]) -> Vec<Stat> {
        let commissions = total(
            records
                .iter()
                .filter(|t| t.kind.to_lowercase().starts_with("comiss")),
        );
        let pending = total(records.iter().filter(|t| !is_processed(t)));
        let processed = records.iter().filter(|t| is_processed(t)).count();

        vec![
            Stat::new("Receita", format_brl(total(records.iter())), Tone::Success),
            Stat::new("Comissões", format_brl(commissions), Tone::Info),
            Stat::new("Pendente", format_brl(pending), Tone::Warning),
            Stat::new("Processadas", processed.to_string(), Tone::Neutral),
        ]
    }
}

#[component]
fn RevenueBars() -> impl IntoView {
    let peak = WEEK_REVENUE.iter().map(|(_, v)| *v).max().unwrap_or(0);

    view! {
        <div class="card">
            <h3>"Receita dos Últimos 7 Dias"</h3>
            <div class="bar-chart">
                {WEEK_REVENUE
                    .iter()
                    .map(|(day, value)| {
                        view! {
                            <div class="bar-column">
                                <div
                                    class="bar"
                                    title=format!("R$ {value}k")
                                    style=format!(
                                        "height: {}px",
                                        bar_height(u64::from(*value), u64::from(peak), 160)
                                    )
                                ></div>
                                <span class="bar-label">{*day}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Transactions with summary cards and the weekly revenue chart
#[component]
pub fn FinancialPage() -> impl IntoView {
    let collection = Collection::<Transaction>::new();
    let selected = RwSignal::new(None::<Transaction>);
    let close_detail = Callback::new(move |()| selected.set(None));
    let on_action = Callback::new(move |(kind, transaction): (ActionKind, Transaction)| {
        if kind == ActionKind::View {
            selected.set(Some(transaction));
        }
    });

    view! {
        <ResourceScreen collection=collection on_action=on_action>
            <RevenueBars />
        </ResourceScreen>
        {move || {
            selected
                .get()
                .map(|transaction| {
                    view! {
                        <RecordDetail
                            title=format!("Transação {}", transaction.order_id)
                            record=transaction
                            on_close=close_detail
                        />
                    }
                })
        }}
    }
}
