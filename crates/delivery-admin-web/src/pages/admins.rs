//! Console operators

use super::fixtures;
use super::resource_screen::{Collection, DataSource, RecordDetail, Resource, ResourceScreen};
use crate::components::summary_cards::Stat;
use crate::data_view::{ActionKind, Cell, Column, RowAction, Tone};
use crate::filter::{Searchable, StatusOption};
use crate::forms::admin::AdminForm;
use delivery_admin_core::Admin;
use leptos::prelude::*;

const STATUS_OPTIONS: &[StatusOption] = &[
    StatusOption::new("active", "Ativos", "ativo"),
    StatusOption::new("inactive", "Inativos", "inativo"),
];

/// Permission levels described under the table
const LEVELS: [(&str, &str, &str); 3] = [
    (
        "Super Admin",
        "Acesso total a todos os módulos e configurações",
        "tone-danger",
    ),
    (
        "Gerente",
        "Acesso a pedidos, restaurantes e relatórios",
        "tone-info",
    ),
    ("Suporte", "Acesso limitado a pedidos e usuários", "tone-success"),
];

fn role_tone(role: &str) -> Tone {
    match role {
        "Super Admin" => Tone::Danger,
        "Gerente" => Tone::Info,
        _ => Tone::Success,
    }
}

fn is_active(admin: &Admin) -> bool {
    admin.status.trim().eq_ignore_ascii_case("ativo")
}

impl Searchable for Admin {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(&self.status)
    }
}

impl Resource for Admin {
    const TITLE: &'static str = "Administradores";
    const SUBTITLE: &'static str = "Gerencie os administradores da plataforma";
    const SEARCH_PLACEHOLDER: &'static str = "Buscar administradores...";

    fn source() -> DataSource<Self> {
        DataSource::Fixture(fixtures::admins)
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("admin", "Administrador"),
            Column::new("role", "Função"),
            Column::new("permissions", "Permissões"),
            Column::new("last_login", "Último Acesso"),
            Column::new("status", "Status"),
            Column::new("actions", "Ações").with_width("90px"),
        ]
    }

    fn render_cell(&self, column: &Column) -> Option<Cell> {
        match column.key {
            "admin" => Some(Cell::stacked(&self.name, &self.email)),
            "role" => Some(Cell::badge(&self.role, role_tone(&self.role))),
            "last_login" => Some(Cell::text(&self.last_login)),
            "status" => Some(Cell::badge(
                &self.status,
                if is_active(self) { Tone::Success } else { Tone::Neutral },
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
        let active = records.iter().filter(|a| is_active(a)).count();
        let supers = records.iter().filter(|a| a.role == "Super Admin").count();

        vec![
            Stat::new("Total de Admins", records.len().to_string(), Tone::Neutral),
            Stat::new("Admins Ativos", active.to_string(), Tone::Success),
            Stat::new("Super Admins", supers.to_string(), Tone::Danger),
            Stat::new(
                "Inativos",
                (records.len() - active).to_string(),
                Tone::Warning,
            ),
        ]
    }
}

#[component]
fn PermissionLevels() -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Níveis de Permissão"</h3>
            <div class="permission-levels">
                {LEVELS
                    .iter()
                    .map(|(name, description, tone)| {
                        view! {
                            <div class=format!("permission-level {tone}")>
                                <h4>{*name}</h4>
                                <p>{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Operator list with the new operator form
#[component]
pub fn AdminsPage() -> impl IntoView {
    let collection = Collection::<Admin>::new();
    let creating = RwSignal::new(false);
    let selected = RwSignal::new(None::<Admin>);

    let open_form = Callback::new(move |()| creating.set(true));
    let close_form = Callback::new(move |()| creating.set(false));
    let close_detail = Callback::new(move |()| selected.set(None));
    let saved = Callback::new(move |()| collection.load());
    let on_action = Callback::new(move |(kind, admin): (ActionKind, Admin)| {
        if kind == ActionKind::View {
            selected.set(Some(admin));
        }
    });

    view! {
        <ResourceScreen
            collection=collection
            on_action=on_action
            create_label="Novo Admin"
            on_create=open_form
        >
            <PermissionLevels />
        </ResourceScreen>
        <Show when=move || creating.get()>
            <AdminForm on_save=saved on_close=close_form />
        </Show>
        {move || {
            selected
                .get()
                .map(|admin| {
                    view! {
                        <RecordDetail title=admin.name.clone() record=admin on_close=close_detail />
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

    #[test]
    fn test_permissions_fall_back_to_joined_list() {
        let table = Admin::data_view().project(&fixtures::admins()).unwrap();
        let permissions: Vec<_> = table
            .rows
            .iter()
            .filter_map(|row| row.cells.get(2).map(ToString::to_string))
            .collect();

        assert_eq!(
            permissions,
            vec![
                "Todos os módulos",
                "Pedidos, Restaurantes, Relatórios",
                "Pedidos, Usuários"
            ]
        );
    }

    #[test]
    fn test_summary() {
        let values: Vec<_> = Admin::summary(&fixtures::admins())
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, vec!["3", "2", "1", "1"]);
    }
}
