//! Create form for console operators

use super::{EntityForm, SubmitGuard, non_blank, submit};
use crate::api_client::ApiClient;
use crate::components::fields::{
    CheckboxField, FormActions, SelectField, TextField, bind, setter,
};
use crate::components::modal::Modal;
use crate::state::use_api;
use crate::toast::use_toaster;
use delivery_admin_core::Result;
use delivery_admin_core::types::{NewAdmin, StatusMessage};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use validator::Validate;

/// Console sections a permission can be granted for, with their labels
pub const PERMISSION_SECTIONS: [(&str, &str); 10] = [
    ("dashboard", "Dashboard"),
    ("orders", "Pedidos"),
    ("restaurants", "Restaurantes"),
    ("users", "Usuários"),
    ("deliverers", "Entregadores"),
    ("ads", "Anúncios"),
    ("promotions", "Promoções"),
    ("financial", "Financeiro"),
    ("settings", "Configurações"),
    ("admins", "Administradores"),
];

const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("super-admin", "Super Admin"),
    ("admin", "Administrador"),
    ("moderator", "Moderador"),
    ("analyst", "Analista"),
];

const DEPARTMENT_OPTIONS: &[(&str, &str)] = &[
    ("", "Selecione"),
    ("operations", "Operações"),
    ("marketing", "Marketing"),
    ("finance", "Financeiro"),
    ("support", "Suporte"),
    ("tech", "Tecnologia"),
];

/// Fields of the admin form
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AdminDraft {
    /// Full name
    #[validate(custom(function = "non_blank", message = "Nome completo"))]
    pub name: String,
    /// E-mail
    #[validate(
        custom(function = "non_blank", message = "E-mail"),
        email(message = "Informe um e-mail válido.")
    )]
    pub email: String,
    /// Initial password
    #[validate(custom(function = "non_blank", message = "Senha"))]
    pub password: String,
    /// Password typed a second time
    #[validate(
        custom(function = "non_blank", message = "Confirmar senha"),
        must_match(other = "password", message = "As senhas não coincidem.")
    )]
    pub confirm_password: String,
    /// Role code
    pub role: String,
    /// Phone number
    pub phone: String,
    /// Department code
    pub department: String,
    /// Account enabled
    pub is_active: bool,
    /// Section key to granted flag, one entry per [`PERMISSION_SECTIONS`]
    pub permissions: BTreeMap<String, bool>,
}

impl Default for AdminDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: "admin".to_string(),
            phone: String::new(),
            department: String::new(),
            is_active: true,
            permissions: PERMISSION_SECTIONS
                .iter()
                .map(|(key, _)| ((*key).to_string(), false))
                .collect(),
        }
    }
}

impl AdminDraft {
    /// Whether every section is granted
    #[must_use]
    pub fn all_granted(&self) -> bool {
        self.permissions.values().all(|granted| *granted)
    }

    /// Grant every section, or revoke all of them when all are already granted
    pub fn toggle_all(&mut self) {
        let grant = !self.all_granted();
        for granted in self.permissions.values_mut() {
            *granted = grant;
        }
    }

    /// Grant or revoke one section
    pub fn set_permission(&mut self, section: &str, granted: bool) {
        if let Some(flag) = self.permissions.get_mut(section) {
            *flag = granted;
        }
    }

    fn granted(&self, section: &str) -> bool {
        self.permissions.get(section).copied().unwrap_or(false)
    }
}

impl EntityForm for AdminDraft {
    type Payload = NewAdmin;

    fn payload(&self) -> Result<NewAdmin> {
        Ok(NewAdmin {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role.clone(),
            phone: self.phone.trim().to_string(),
            department: self.department.clone(),
            is_active: self.is_active,
            permissions: self.permissions.clone(),
        })
    }
}

/// Validate and create an operator account
///
/// # Errors
///
/// Returns the validation error, a concurrent submit or the request error.
pub async fn save(client: &ApiClient, guard: &SubmitGuard, draft: &AdminDraft) -> Result<StatusMessage> {
    submit(guard, draft, |payload| async move {
        client.create("/admins", &payload).await
    })
    .await
}

/// Modal form that creates an operator account
#[component]
pub fn AdminForm(
    /// Called after a successful save
    on_save: Callback<()>,
    /// Closes the modal
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_api();
    let toaster = use_toaster();
    let form = RwSignal::new(AdminDraft::default());
    let busy = RwSignal::new(false);
    let guard = SubmitGuard::observed(move |state| {
        let _ = busy.try_set(state);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked();
        let client = client.clone();
        let guard = guard.clone();
        spawn_local(async move {
            match save(&client, &guard, &draft).await {
                Ok(ack) => {
                    tracing::info!("Admin {} created", draft.email);
                    toaster.success(
                        ack.message
                            .unwrap_or_else(|| "Administrador criado com sucesso!".to_string()),
                    );
                    on_save.run(());
                    on_close.run(());
                }
                Err(e) => toaster.report("Failed to create admin", &e),
            }
        });
    };

    let permission_boxes = PERMISSION_SECTIONS
        .iter()
        .map(|(key, label)| {
            let key = *key;
            view! {
                <CheckboxField
                    label=*label
                    checked=Signal::derive(move || form.with(|f| f.granted(key)))
                    on_toggle=Callback::new(move |granted| {
                        form.update(|f| f.set_permission(key, granted));
                    })
                    disabled=busy
                />
            }
        })
        .collect_view();

    view! {
        <Modal title="Novo Administrador" on_close=on_close>
            <form class="entity-form" on:submit=on_submit>
                <div class="form-grid">
                    <TextField
                        label="Nome completo"
                        required=true
                        value=bind(form, |f| f.name.clone())
                        on_input=setter(form, |f, v| f.name = v)
                        disabled=busy
                    />
                    <TextField
                        label="E-mail"
                        required=true
                        input_type="email"
                        value=bind(form, |f| f.email.clone())
                        on_input=setter(form, |f, v| f.email = v)
                        disabled=busy
                    />
                    <TextField
                        label="Senha"
                        required=true
                        input_type="password"
                        value=bind(form, |f| f.password.clone())
                        on_input=setter(form, |f, v| f.password = v)
                        disabled=busy
                    />
                    <TextField
                        label="Confirmar senha"
                        required=true
                        input_type="password"
                        value=bind(form, |f| f.confirm_password.clone())
                        on_input=setter(form, |f, v| f.confirm_password = v)
                        disabled=busy
                    />
                    <SelectField
                        label="Função"
                        options=ROLE_OPTIONS
                        value=bind(form, |f| f.role.clone())
                        on_change=setter(form, |f, v| f.role = v)
                        disabled=busy
                    />
                    <TextField
                        label="Telefone"
                        value=bind(form, |f| f.phone.clone())
                        on_input=setter(form, |f, v| f.phone = v)
                        disabled=busy
                    />
                    <SelectField
                        label="Departamento"
                        options=DEPARTMENT_OPTIONS
                        value=bind(form, |f| f.department.clone())
                        on_change=setter(form, |f, v| f.department = v)
                        disabled=busy
                    />
                </div>
                <CheckboxField
                    label="Conta ativa"
                    checked=bind(form, |f| f.is_active)
                    on_toggle=setter(form, |f, v| f.is_active = v)
                    disabled=busy
                />

                <div class="form-section-header">
                    <h4 class="form-section">"Permissões"</h4>
                    <button
                        type="button"
                        class="btn btn-sm btn-secondary"
                        prop:disabled=move || busy.get()
                        on:click=move |_| form.update(AdminDraft::toggle_all)
                    >
                        {move || {
                            if form.with(AdminDraft::all_granted) {
                                "Desmarcar todas"
                            } else {
                                "Selecionar todas"
                            }
                        }}
                    </button>
                </div>
                <div class="permission-grid">{permission_boxes}</div>

                <FormActions submit_label="Criar Administrador" busy=busy on_cancel=on_close />
            </form>
        </Modal>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use delivery_admin_core::Error;
    use pretty_assertions::assert_eq;

    fn filled() -> AdminDraft {
        AdminDraft {
            name: "Maria Souza".to_string(),
            email: "maria@example.com".to_string(),
            password: "s3cr3t".to_string(),
            confirm_password: "s3cr3t".to_string(),
            ..AdminDraft::default()
        }
    }

    #[test]
    fn test_passwords_must_match() {
        let draft = AdminDraft {
            confirm_password: "outra".to_string(),
            ..filled()
        };

        let error = draft.check().unwrap_err();
        assert_eq!(error.user_message(), "As senhas não coincidem.");
        assert!(filled().check().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let draft = AdminDraft {
            email: "maria".to_string(),
            ..filled()
        };
        assert!(matches!(draft.check(), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_select_all_toggles_every_section() {
        let mut draft = AdminDraft::default();
        assert_eq!(draft.permissions.len(), PERMISSION_SECTIONS.len());

        draft.set_permission("orders", true);
        draft.toggle_all();
        assert!(draft.all_granted());

        draft.toggle_all();
        assert!(draft.permissions.values().all(|granted| !granted));
    }

    #[test]
    fn test_payload_leaves_out_confirmation() {
        let payload = serde_json::to_value(filled().payload().unwrap()).unwrap();

        assert!(payload.get("confirmPassword").is_none());
        assert_eq!(payload["isActive"], true);
        assert_eq!(payload["permissions"]["financial"], false);
    }
}
