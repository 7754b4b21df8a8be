//! Customer accounts

use super::resource_screen::{Collection, DataSource, RecordDetail, Resource, ResourceScreen};
use crate::data_view::{ActionKind, Cell, Column, RowAction, Tone};
use crate::filter::{Searchable, StatusOption};
use delivery_admin_core::User;
use delivery_admin_core::types::StatusChange;
use delivery_admin_core::utils::format_brl;
use leptos::prelude::*;

const STATUS_OPTIONS: &[StatusOption] = &[
    StatusOption::new("active", "Ativos", "ativo"),
    StatusOption::new("banned", "Banidos", "banido"),
];

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(&self.status)
    }
}

impl Resource for User {
    const TITLE: &'static str = "Gestão de Usuários";
    const SUBTITLE: &'static str = "Gerencie todos os usuários da plataforma";
    const SEARCH_PLACEHOLDER: &'static str = "Buscar por nome, email ou telefone...";

    fn source() -> DataSource<Self> {
        DataSource::Remote("/users")
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Nome"),
            Column::new("email", "Email"),
            Column::new("phone", "Telefone"),
            Column::new("orders", "Pedidos").with_width("80px"),
            Column::new("total_spent", "Gasto Total"),
            Column::new("addresses", "Endereços").with_width("90px"),
            Column::new("last_order", "Último Pedido"),
            Column::new("status", "Status"),
            Column::new("actions", "Ações").with_width("160px"),
        ]
    }

    fn render_cell(&self, column: &Column) -> Option<Cell> {
        match column.key {
            "total_spent" => Some(Cell::text(format_brl(self.total_spent.unwrap_or(0.0)))),
            "status" => Some(Cell::badge(
                &self.status,
                if self.is_banned() { Tone::Danger } else { Tone::Success },
            )),
            "actions" => Some(Cell::Actions(vec![
                RowAction::new(ActionKind::View, "Ver", Tone::Info),
                if self.is_banned() {
                    RowAction::new(ActionKind::ToggleStatus, "Reativar", Tone::Success)
                } else {
                    RowAction::new(ActionKind::ToggleStatus, "Banir", Tone::Danger)
                },
            ])),
            _ => None,
        }
    }

    fn status_options() -> &'static [StatusOption] {
        STATUS_OPTIONS
    }
}

/// Users screen with ban and unban
#[component]
pub fn UsersPage() -> impl IntoView {
    let collection = Collection::<User>::new();
    let selected = RwSignal::new(None::<User>);
    let close_detail = Callback::new(move |()| selected.set(None));

    let on_action = Callback::new(move |(kind, user): (ActionKind, User)| match kind {
        ActionKind::View => selected.set(Some(user)),
        ActionKind::ToggleStatus => {
            let id = user.id;
            let change = StatusChange {
                status: user.toggled_status(),
            };
            collection.mutate(
                "User status change",
                "Status do usuário atualizado!",
                move |client| async move { client.set_user_status(id, change).await },
            );
        }
        ActionKind::Edit | ActionKind::Delete => {}
    });

    view! {
        <ResourceScreen collection=collection on_action=on_action />
        {move || {
            selected
                .get()
                .map(|user| {
                    view! { <RecordDetail title=user.name.clone() record=user on_close=close_detail /> }
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

    fn users() -> Vec<User> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Maria Souza", "email": "maria@mail.com", "phone": "81 99999-0000", "status": "Ativo"},
            {"id": 2, "name": "João Lima", "email": "joao@mail.com", "phone": null, "status": "Banido"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_search_by_phone_tolerates_missing_phone() {
        let query = ListQuery {
            search: "99999".to_string(),
            status: StatusFilter::All,
        };
        let ids: Vec<_> = apply(&users(), &query).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_banned_filter() {
        let query = ListQuery {
            search: String::new(),
            status: StatusFilter::from_selection("banned", User::status_options()),
        };
        let ids: Vec<_> = apply(&users(), &query).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_toggle_label() {
        let table = User::data_view().project(&users()).unwrap();
        let actions: Vec<_> = table
            .rows
            .iter()
            .filter_map(|row| row.cells.last().map(ToString::to_string))
            .collect();
        assert_eq!(actions, vec!["Ver Banir", "Ver Reativar"]);
    }
}
