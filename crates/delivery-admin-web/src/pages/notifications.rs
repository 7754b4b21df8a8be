//! Push notifications: list, send, inspect and delete

use super::resource_screen::{Collection, DataSource, Resource, ResourceScreen};
use crate::components::loading::Loading;
use crate::components::modal::{DetailRow, Modal};
use crate::data_view::{ActionKind, Cell, Column, RowAction, Tone};
use crate::filter::Searchable;
use crate::forms::notification::NotificationForm;
use crate::resource::DetailRequests;
use chrono::{DateTime, Utc};
use delivery_admin_core::types::{StatusMessage, target_label};
use delivery_admin_core::utils::time_ago;
use delivery_admin_core::{Notification, NotificationDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;

const CONFIRM_DELETE: &str = "Tem certeza que deseja excluir esta notificação?";

fn sent_at(created: Option<DateTime<Utc>>, raw: &str) -> String {
    created.map_or_else(|| raw.to_string(), |t| t.format("%d/%m/%Y %H:%M").to_string())
}

impl Searchable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }
}

impl Resource for Notification {
    const TITLE: &'static str = "Notificações";
    const SUBTITLE: &'static str = "Envie e acompanhe notificações push";
    const SEARCH_PLACEHOLDER: &'static str = "Buscar notificação...";

    fn source() -> DataSource<Self> {
        DataSource::Remote("/notifications")
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("title", "Título"),
            Column::new("content", "Mensagem"),
            Column::new("target_type", "Destinatário"),
            Column::new("created_at", "Data"),
            Column::new("actions", "Ações").with_width("160px"),
        ]
    }

    fn render_cell(&self, column: &Column) -> Option<Cell> {
        match column.key {
            "target_type" => Some(Cell::text(target_label(&self.target_type))),
            "created_at" => Some(Cell::text(sent_at(self.created(), &self.created_at))),
            "actions" => Some(Cell::Actions(vec![
                RowAction::new(ActionKind::View, "Ver", Tone::Info),
                RowAction::new(ActionKind::Delete, "Excluir", Tone::Danger),
            ])),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Dialog {
    Closed,
    Creating,
    Fetching,
    Detail(NotificationDetail),
}

fn confirmed() -> bool {
    window()
        .confirm_with_message(CONFIRM_DELETE)
        .unwrap_or(false)
}

#[component]
fn DeliveryStats(detail: NotificationDetail) -> impl IntoView {
    let age = detail
        .created()
        .map(|t| time_ago(t, Utc::now()))
        .unwrap_or_default();

    view! {
        <p class="notification-content">{detail.content.clone()}</p>
        <DetailRow label="Enviada" value=sent_at(detail.created(), &detail.created_at) />
        <DetailRow label="Há" value=age />
        <DetailRow label="Destinatário" value=target_label(&detail.target_type) />
        <DetailRow label="Destinos" value=detail.total.to_string() />
        <DetailRow
            label="Visualizaram"
            value=format!("{} ({})", detail.read, detail.read_rate())
        />
        <DetailRow
            label="Clicaram"
            value=format!("{} ({})", detail.clicked, detail.click_rate())
        />
    }
}

/// Notifications screen
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let collection = Collection::<Notification>::new();
    let dialog = RwSignal::new(Dialog::Closed);
    let requests = RwSignal::new(DetailRequests::default());
    let show = move |next: Dialog| {
        requests.update(DetailRequests::cancel);
        dialog.set(next);
    };
    let close = Callback::new(move |()| show(Dialog::Closed));
    let open_form = Callback::new(move |()| show(Dialog::Creating));
    let saved = Callback::new(move |()| collection.load());

    let delete = move |id: u64| {
        if !confirmed() {
            return;
        }
        show(Dialog::Closed);
        collection.mutate(
            "Notification removal",
            "Notificação excluída.",
            move |client| async move {
                client
                    .delete_notification(id)
                    .await
                    .map(|()| StatusMessage::default())
            },
        );
    };

    let view_detail = move |id: u64| {
        let Some(ticket) = requests.try_update(DetailRequests::begin) else {
            return;
        };
        dialog.set(Dialog::Fetching);
        let client = collection.client();
        let toaster = collection.toaster();
        spawn_local(async move {
            let result = client.notification(id).await;
            if requests.try_update(|r| r.finish(ticket)) != Some(true) {
                tracing::debug!("Dropped stale detail of notification {id}");
                return;
            }
            match result {
                Ok(detail) => {
                    let _ = dialog.try_set(Dialog::Detail(detail));
                }
                Err(e) => {
                    let _ = dialog.try_set(Dialog::Closed);
                    toaster.report("Failed to load notification", &e);
                }
            }
        });
    };

    let on_action = Callback::new(move |(kind, notification): (ActionKind, Notification)| {
        match kind {
            ActionKind::View => view_detail(notification.id),
            ActionKind::Delete => delete(notification.id),
            ActionKind::Edit | ActionKind::ToggleStatus => {}
        }
    });

    view! {
        <ResourceScreen
            collection=collection
            on_action=on_action
            create_label="Nova Notificação"
            on_create=open_form
        />
        {move || match dialog.get() {
            Dialog::Closed => ().into_any(),
            Dialog::Creating => view! { <NotificationForm on_save=saved on_close=close /> }.into_any(),
            Dialog::Fetching => view! {
                <Modal title="Notificação" on_close=close>
                    <Loading />
                </Modal>
            }
            .into_any(),
            Dialog::Detail(detail) => {
                let id = detail.id;
                view! {
                    <Modal title=detail.title.clone() on_close=close>
                        <DeliveryStats detail=detail />
                        <div class="form-actions">
                            <button class="btn btn-danger" on:click=move |_| delete(id)>
                                "Excluir"
                            </button>
                        </div>
                    </Modal>
                }
                .into_any()
            }
        }}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_cells() {
        let records: Vec<Notification> = serde_json::from_value(json!([{
            "id": 4,
            "title": "Promoção",
            "content": "Frete grátis hoje",
            "target_type": "DELIVERY",
            "created_at": "2024-02-15 14:30:00"
        }, {
            "id": 5,
            "title": "Aviso",
            "target_type": "VIP",
            "created_at": "ontem"
        }]))
        .unwrap();

        let table = Notification::data_view().project(&records).unwrap();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.cells.iter().map(ToString::to_string).collect())
            .collect();

        assert_eq!(
            rows,
            vec![
                vec![
                    "Promoção",
                    "Frete grátis hoje",
                    "Apenas entregadores",
                    "15/02/2024 14:30",
                    "Ver Excluir"
                ],
                vec!["Aviso", "", "VIP", "ontem", "Ver Excluir"],
            ]
        );
    }
}
