//! Create form for advertising campaigns

use super::{EntityForm, SubmitGuard, non_blank, optional, submit};
use crate::api_client::ApiClient;
use crate::components::fields::{
    CheckboxField, FormActions, SelectField, TextArea, TextField, bind, setter,
};
use crate::components::modal::Modal;
use crate::state::use_api;
use crate::toast::use_toaster;
use delivery_admin_core::types::{NewAd, StatusMessage};
use delivery_admin_core::utils::parse_decimal;
use delivery_admin_core::{Error, Result};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use validator::Validate;

const TYPE_OPTIONS: &[(&str, &str)] = &[
    ("banner", "Banner"),
    ("popup", "Pop-up"),
    ("sponsored", "Patrocinado"),
    ("native", "Nativo"),
];

const POSITION_OPTIONS: &[(&str, &str)] = &[
    ("home-top", "Topo da Home"),
    ("home-middle", "Meio da Home"),
    ("restaurant-list", "Lista de Restaurantes"),
    ("checkout", "Checkout"),
];

const AUDIENCE_OPTIONS: &[(&str, &str)] = &[
    ("all", "Todos os usuários"),
    ("new", "Novos usuários"),
    ("frequent", "Usuários frequentes"),
    ("inactive", "Usuários inativos"),
];

const PRIORITY_OPTIONS: &[(&str, &str)] = &[
    ("low", "Baixa"),
    ("medium", "Média"),
    ("high", "Alta"),
];

/// Fields of the ad form
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AdDraft {
    /// Campaign title
    #[validate(custom(function = "non_blank", message = "Título"))]
    pub title: String,
    /// Free text description
    pub description: String,
    /// Placement kind
    pub kind: String,
    /// Placement in the customer app
    pub position: String,
    /// Link opened on click
    pub target_url: String,
    /// Creative image
    pub image_url: String,
    /// Budget as typed
    pub budget: String,
    /// First day
    pub start_date: String,
    /// Last day
    pub end_date: String,
    /// Audience code
    pub target_audience: String,
    /// Priority code
    pub priority: String,
    /// Campaign enabled
    pub is_active: bool,
}

impl Default for AdDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            kind: "banner".to_string(),
            position: "home-top".to_string(),
            target_url: String::new(),
            image_url: String::new(),
            budget: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            target_audience: "all".to_string(),
            priority: "medium".to_string(),
            is_active: true,
        }
    }
}

impl EntityForm for AdDraft {
    type Payload = NewAd;

    fn payload(&self) -> Result<NewAd> {
        let budget = match optional(&self.budget) {
            Some(raw) => Some(parse_decimal(&raw).ok_or_else(|| Error::Validation {
                field: "budget".to_string(),
                message: "Orçamento inválido.".to_string(),
            })?),
            None => None,
        };

        Ok(NewAd {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            kind: self.kind.clone(),
            position: self.position.clone(),
            target_url: self.target_url.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            budget,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            target_audience: self.target_audience.clone(),
            priority: self.priority.clone(),
            is_active: self.is_active,
        })
    }
}

/// Validate and create a campaign
///
/// # Errors
///
/// Returns the validation error, a concurrent submit or the request error.
pub async fn save(client: &ApiClient, guard: &SubmitGuard, draft: &AdDraft) -> Result<StatusMessage> {
    submit(guard, draft, |payload| async move {
        client.create("/ads", &payload).await
    })
    .await
}

/// Modal form that creates a campaign
#[component]
pub fn AdForm(
    /// Called after a successful save
    on_save: Callback<()>,
    /// Closes the modal
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_api();
    let toaster = use_toaster();
    let form = RwSignal::new(AdDraft::default());
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
                    tracing::info!("Campaign {} created", draft.title);
                    toaster.success(
                        ack.message
                            .unwrap_or_else(|| "Anúncio criado com sucesso!".to_string()),
                    );
                    on_save.run(());
                    on_close.run(());
                }
                Err(e) => toaster.report("Failed to create ad", &e),
            }
        });
    };

    view! {
        <Modal title="Novo Anúncio" on_close=on_close>
            <form class="entity-form" on:submit=on_submit>
                <TextField
                    label="Título"
                    required=true
                    value=bind(form, |f| f.title.clone())
                    on_input=setter(form, |f, v| f.title = v)
                    disabled=busy
                />
                <TextArea
                    label="Descrição"
                    value=bind(form, |f| f.description.clone())
                    on_input=setter(form, |f, v| f.description = v)
                    disabled=busy
                />
                <div class="form-grid">
                    <SelectField
                        label="Tipo"
                        options=TYPE_OPTIONS
                        value=bind(form, |f| f.kind.clone())
                        on_change=setter(form, |f, v| f.kind = v)
                        disabled=busy
                    />
                    <SelectField
                        label="Posição"
                        options=POSITION_OPTIONS
                        value=bind(form, |f| f.position.clone())
                        on_change=setter(form, |f, v| f.position = v)
                        disabled=busy
                    />
                    <TextField
                        label="URL de destino"
                        input_type="url"
                        value=bind(form, |f| f.target_url.clone())
                        on_input=setter(form, |f, v| f.target_url = v)
                        disabled=busy
                    />
                    <TextField
                        label="URL da imagem"
                        input_type="url"
                        value=bind(form, |f| f.image_url.clone())
                        on_input=setter(form, |f, v| f.image_url = v)
                        disabled=busy
                    />
                    <TextField
                        label="Orçamento (R$)"
                        placeholder="0,00"
                        value=bind(form, |f| f.budget.clone())
                        on_input=setter(form, |f, v| f.budget = v)
                        disabled=busy
                    />
                    <SelectField
                        label="Público-alvo"
                        options=AUDIENCE_OPTIONS
                        value=bind(form, |f| f.target_audience.clone())
                        on_change=setter(form, |f, v| f.target_audience = v)
                        disabled=busy
                    />
                    <TextField
                        label="Data de início"
                        input_type="date"
                        value=bind(form, |f| f.start_date.clone())
                        on_input=setter(form, |f, v| f.start_date = v)
                        disabled=busy
                    />
                    <TextField
                        label="Data de término"
                        input_type="date"
                        value=bind(form, |f| f.end_date.clone())
                        on_input=setter(form, |f, v| f.end_date = v)
                        disabled=busy
                    />
                    <SelectField
                        label="Prioridade"
                        options=PRIORITY_OPTIONS
                        value=bind(form, |f| f.priority.clone())
                        on_change=setter(form, |f, v| f.priority = v)
                        disabled=busy
                    />
                </div>
                <CheckboxField
                    label="Ativar anúncio imediatamente"
                    checked=bind(form, |f| f.is_active)
                    on_toggle=setter(form, |f, v| f.is_active = v)
                    disabled=busy
                />
                <FormActions submit_label="Criar Anúncio" busy=busy on_cancel=on_close />
            </form>
        </Modal>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_a_fresh_campaign() {
        let draft = AdDraft::default();
        assert_eq!(draft.priority, "medium");
        assert_eq!(draft.kind, "banner");
        assert!(draft.is_active);
    }

    #[test]
    fn test_budget_accepts_comma_and_blank() {
        let mut draft = AdDraft {
            title: "Semana do Sushi".to_string(),
            budget: "1500,50".to_string(),
            ..AdDraft::default()
        };
        assert_eq!(draft.payload().unwrap().budget, Some(1500.5));

        draft.budget = "  ".to_string();
        assert_eq!(draft.payload().unwrap().budget, None);

        draft.budget = "muito".to_string();
        assert!(matches!(draft.payload(), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_blank_title_is_rejected_before_any_request() {
        // Nothing listens here; a request would surface as a transport error
        let client = ApiClient::new("http://127.0.0.1:9");
        let guard = SubmitGuard::default();

        for title in ["", "    "] {
            let draft = AdDraft {
                title: title.to_string(),
                budget: "1500".to_string(),
                ..AdDraft::default()
            };
            assert_eq!(
                block_on(save(&client, &guard, &draft)),
                Err(Error::MissingField {
                    field: "Título".to_string()
                })
            );
        }
        assert!(!guard.is_busy());
    }
}
