//! Platform-wide settings

use super::{EntityForm, SubmitGuard, non_blank, submit};
use crate::api_client::ApiClient;
use crate::components::fields::{CheckboxField, TextArea, TextField, bind, setter};
use crate::state::use_api;
use crate::toast::use_toaster;
use delivery_admin_core::types::{PaymentMethod, PlatformSettings, StatusMessage};
use delivery_admin_core::utils::parse_decimal;
use delivery_admin_core::{Error, Result};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;
use validator::Validate;

const TABS: [(&str, &str); 5] = [
    ("general", "Geral"),
    ("delivery", "Entrega"),
    ("notifications", "Notificações"),
    ("security", "Segurança"),
    ("payments", "Pagamentos"),
];

/// Fields of the settings form
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct SettingsDraft {
    /// Public name of the platform
    #[validate(custom(function = "non_blank", message = "Nome da plataforma"))]
    pub site_name: String,
    /// Public description
    pub site_description: String,
    /// Default delivery fee as typed
    #[validate(custom(function = "non_blank", message = "Taxa de entrega padrão"))]
    pub delivery_fee: String,
    /// Default minimum order as typed
    #[validate(custom(function = "non_blank", message = "Valor mínimo do pedido"))]
    pub min_order_value: String,
    /// Maximum delivery distance as typed
    #[validate(custom(function = "non_blank", message = "Distância máxima"))]
    pub max_delivery_distance: String,
    /// Send e-mail notifications
    pub email_notifications: bool,
    /// Send SMS notifications
    pub sms_notifications: bool,
    /// Send push notifications
    pub push_notifications: bool,
    /// Approve new restaurants without review
    pub auto_approve_restaurants: bool,
    /// Approve new deliverers without review
    pub auto_approve_deliverers: bool,
    /// Maintenance mode
    pub maintenance_mode: bool,
    /// Accepted payment methods
    pub payment_methods: BTreeSet<PaymentMethod>,
}

impl Default for SettingsDraft {
    fn default() -> Self {
        Self {
            site_name: "DeliveryApp".to_string(),
            site_description: "O melhor app de delivery da cidade".to_string(),
            delivery_fee: "5.90".to_string(),
            min_order_value: "15.00".to_string(),
            max_delivery_distance: "10".to_string(),
            email_notifications: true,
            sms_notifications: false,
            push_notifications: true,
            auto_approve_restaurants: false,
            auto_approve_deliverers: false,
            maintenance_mode: false,
            payment_methods: [PaymentMethod::Pix, PaymentMethod::Credit, PaymentMethod::Debit]
                .into_iter()
                .collect(),
        }
    }
}

impl SettingsDraft {
    /// Accept or refuse one payment method
    pub fn set_payment_method(&mut self, method: PaymentMethod, accepted: bool) {
        if accepted {
            self.payment_methods.insert(method);
        } else {
            self.payment_methods.remove(&method);
        }
    }
}

fn amount(raw: &str, field: &str, label: &str) -> Result<f64> {
    parse_decimal(raw)
        .filter(|value| *value >= 0.0)
        .ok_or_else(|| Error::Validation {
            field: field.to_string(),
            message: format!("{label} inválido."),
        })
}

impl EntityForm for SettingsDraft {
    type Payload = PlatformSettings;

    fn payload(&self) -> Result<PlatformSettings> {
        Ok(PlatformSettings {
            site_name: self.site_name.trim().to_string(),
            site_description: self.site_description.trim().to_string(),
            delivery_fee: amount(&self.delivery_fee, "delivery_fee", "Valor da taxa")?,
            min_order_value: amount(&self.min_order_value, "min_order_value", "Valor mínimo")?,
            max_delivery_distance: amount(
                &self.max_delivery_distance,
                "max_delivery_distance",
                "Valor de distância",
            )?,
            email_notifications: self.email_notifications,
            sms_notifications: self.sms_notifications,
            push_notifications: self.push_notifications,
            auto_approve_restaurants: self.auto_approve_restaurants,
            auto_approve_deliverers: self.auto_approve_deliverers,
            maintenance_mode: self.maintenance_mode,
            payment_methods: self.payment_methods.iter().copied().collect(),
        })
    }
}

/// Validate and save the settings
///
/// # Errors
///
/// Returns the validation error, a concurrent submit or the request error.
pub async fn save(
    client: &ApiClient,
    guard: &SubmitGuard,
    draft: &SettingsDraft,
) -> Result<StatusMessage> {
    submit(guard, draft, |payload| async move {
        client.update_settings(&payload).await
    })
    .await
}

/// Tabbed settings form
#[component]
pub fn SettingsForm() -> impl IntoView {
    let client = use_api();
    let toaster = use_toaster();
    let form = RwSignal::new(SettingsDraft::default());
    let tab = RwSignal::new("general");
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
                    tracing::info!("Platform settings saved");
                    toaster.success(
                        ack.message
                            .unwrap_or_else(|| "Configurações salvas com sucesso!".to_string()),
                    );
                }
                Err(e) => toaster.report("Failed to save settings", &e),
            }
        });
    };

    let tab_buttons = TABS
        .iter()
        .map(|(key, label)| {
            let key = *key;
            view! {
                <button
                    type="button"
                    class=move || if tab.get() == key { "tab active" } else { "tab" }
                    on:click=move |_| tab.set(key)
                >
                    {*label}
                </button>
            }
        })
        .collect_view();

    let payment_boxes = PaymentMethod::ALL
        .into_iter()
        .map(|method| {
            view! {
                <CheckboxField
                    label=method.label()
                    checked=Signal::derive(move || {
                        form.with(|f| f.payment_methods.contains(&method))
                    })
                    on_toggle=Callback::new(move |accepted| {
                        form.update(|f| f.set_payment_method(method, accepted));
                    })
                    disabled=busy
                />
            }
        })
        .collect_view();

    view! {
        <form class="settings-form" on:submit=on_submit>
            <div class="page-header">
                <div>
                    <h1>"Configurações"</h1>
                    <p class="page-subtitle">"Gerencie as configurações da plataforma"</p>
                </div>
                <button type="submit" class="btn btn-primary" prop:disabled=move || busy.get()>
                    {move || if busy.get() { "Salvando..." } else { "Salvar Alterações" }}
                </button>
            </div>
            <div class="tabs">{tab_buttons}</div>

            <div class="card" class:hidden=move || tab.get() != "general">
                <h3>"Informações Gerais"</h3>
                <TextField
                    label="Nome da Plataforma"
                    required=true
                    value=bind(form, |f| f.site_name.clone())
                    on_input=setter(form, |f, v| f.site_name = v)
                    disabled=busy
                />
                <TextField
                    label="Valor Mínimo do Pedido (R$)"
                    required=true
                    value=bind(form, |f| f.min_order_value.clone())
                    on_input=setter(form, |f, v| f.min_order_value = v)
                    disabled=busy
                />
                <TextArea
                    label="Descrição"
                    value=bind(form, |f| f.site_description.clone())
                    on_input=setter(form, |f, v| f.site_description = v)
                    disabled=busy
                />
                <h3>"Modo de Manutenção"</h3>
                <CheckboxField
                    label="Ativar modo de manutenção"
                    checked=bind(form, |f| f.maintenance_mode)
                    on_toggle=setter(form, |f, v| f.maintenance_mode = v)
                    disabled=busy
                />
            </div>

            <div class="card" class:hidden=move || tab.get() != "delivery">
                <h3>"Configurações de Entrega"</h3>
                <TextField
                    label="Taxa de Entrega Padrão (R$)"
                    required=true
                    value=bind(form, |f| f.delivery_fee.clone())
                    on_input=setter(form, |f, v| f.delivery_fee = v)
                    disabled=busy
                />
                <TextField
                    label="Distância Máxima (km)"
                    required=true
                    input_type="number"
                    value=bind(form, |f| f.max_delivery_distance.clone())
                    on_input=setter(form, |f, v| f.max_delivery_distance = v)
                    disabled=busy
                />
            </div>

            <div class="card" class:hidden=move || tab.get() != "notifications">
                <h3>"Notificações"</h3>
                <CheckboxField
                    label="Notificações por Email"
                    checked=bind(form, |f| f.email_notifications)
                    on_toggle=setter(form, |f, v| f.email_notifications = v)
                    disabled=busy
                />
                <CheckboxField
                    label="Notificações por SMS"
                    checked=bind(form, |f| f.sms_notifications)
                    on_toggle=setter(form, |f, v| f.sms_notifications = v)
                    disabled=busy
                />
                <CheckboxField
                    label="Notificações Push"
                    checked=bind(form, |f| f.push_notifications)
                    on_toggle=setter(form, |f, v| f.push_notifications = v)
                    disabled=busy
                />
            </div>

            <div class="card" class:hidden=move || tab.get() != "security">
                <h3>"Segurança e Aprovações"</h3>
                <CheckboxField
                    label="Aprovação Automática de Restaurantes"
                    checked=bind(form, |f| f.auto_approve_restaurants)
                    on_toggle=setter(form, |f, v| f.auto_approve_restaurants = v)
                    disabled=busy
                />
                <CheckboxField
                    label="Aprovação Automática de Entregadores"
                    checked=bind(form, |f| f.auto_approve_deliverers)
                    on_toggle=setter(form, |f, v| f.auto_approve_deliverers = v)
                    disabled=busy
                />
            </div>

            <div class="card" class:hidden=move || tab.get() != "payments">
                <h3>"Métodos de Pagamento"</h3>
                <div class="permission-grid">{payment_boxes}</div>
            </div>
        </form>
    }
}
