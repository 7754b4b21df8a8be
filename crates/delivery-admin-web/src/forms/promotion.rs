//! Create form for promotions and coupons

use super::{EntityForm, SubmitGuard, non_blank, optional, submit};
use crate::api_client::ApiClient;
use crate::components::fields::{FormActions, SelectField, TextArea, TextField, bind, setter};
use crate::components::modal::Modal;
use crate::state::use_api;
use crate::toast::use_toaster;
use delivery_admin_core::types::{NewPromotion, StatusMessage};
use delivery_admin_core::utils::parse_decimal;
use delivery_admin_core::{Error, Result};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use validator::Validate;

const TYPE_OPTIONS: &[(&str, &str)] = &[
    ("discount", "Desconto"),
    ("free-delivery", "Frete Grátis"),
    ("cashback", "Cashback"),
];

const DISCOUNT_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("percentage", "Porcentagem (%)"),
    ("fixed", "Valor fixo (R$)"),
];

const SCOPE_OPTIONS: &[(&str, &str)] = &[
    ("all", "Todos os restaurantes"),
    ("selected", "Restaurantes selecionados"),
    ("category", "Por categoria"),
];

const STATUS_OPTIONS: &[(&str, &str)] = &[("active", "Ativa"), ("inactive", "Inativa")];

/// Fields of the promotion form
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PromotionDraft {
    /// Promotion name
    #[validate(custom(function = "non_blank", message = "Nome da promoção"))]
    pub name: String,
    /// Free text description
    pub description: String,
    /// Promotion kind code
    pub kind: String,
    /// Coupon code
    #[validate(custom(function = "non_blank", message = "Código do cupom"))]
    pub code: String,
    /// `percentage` or `fixed`
    pub discount_type: String,
    /// Discount as typed
    #[validate(custom(function = "non_blank", message = "Valor do desconto"))]
    pub discount_value: String,
    /// Maximum redemptions as typed
    pub usage_limit: String,
    /// Minimum order value as typed
    pub min_order_value: String,
    /// First valid day
    pub start_date: String,
    /// Last valid day
    pub end_date: String,
    /// Restaurant scope code
    pub restaurants: String,
    /// `active` or `inactive`
    pub status: String,
}

impl Default for PromotionDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            kind: "discount".to_string(),
            code: String::new(),
            discount_type: "percentage".to_string(),
            discount_value: String::new(),
            usage_limit: String::new(),
            min_order_value: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            restaurants: "all".to_string(),
            status: "active".to_string(),
        }
    }
}

fn invalid(field: &str, message: &str) -> Error {
    Error::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl EntityForm for PromotionDraft {
    type Payload = NewPromotion;

    fn payload(&self) -> Result<NewPromotion> {
        let discount_value = parse_decimal(&self.discount_value)
            .ok_or_else(|| invalid("discount_value", "Valor do desconto inválido."))?;

        let usage_limit = optional(&self.usage_limit)
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|_| invalid("usage_limit", "Limite de uso inválido."))
            })
            .transpose()?;

        let min_order_value = optional(&self.min_order_value)
            .map(|raw| {
                parse_decimal(&raw)
                    .ok_or_else(|| invalid("min_order_value", "Pedido mínimo inválido."))
            })
            .transpose()?;

        Ok(NewPromotion {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            kind: self.kind.clone(),
            code: self.code.trim().to_uppercase(),
            discount_type: self.discount_type.clone(),
            discount_value,
            usage_limit,
            min_order_value,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            restaurants: self.restaurants.clone(),
            status: self.status.clone(),
        })
    }
}

/// Validate and create a promotion
///
/// # Errors
///
/// Returns the validation error, a concurrent submit or the request error.
pub async fn save(
    client: &ApiClient,
    guard: &SubmitGuard,
    draft: &PromotionDraft,
) -> Result<StatusMessage> {
    submit(guard, draft, |payload| async move {
        client.create("/promotions", &payload).await
    })
    .await
}

/// Modal form that creates a promotion
#[component]
pub fn PromotionForm(
    /// Called after a successful save
    on_save: Callback<()>,
    /// Closes the modal
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_api();
    let toaster = use_toaster();
    let form = RwSignal::new(PromotionDraft::default());
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
                    tracing::info!("Promotion {} created", draft.code);
                    toaster.success(
                        ack.message
                            .unwrap_or_else(|| "Promoção criada com sucesso!".to_string()),
                    );
                    on_save.run(());
                    on_close.run(());
                }
                Err(e) => toaster.report("Failed to create promotion", &e),
            }
        });
    };

    view! {
        <Modal title="Nova Promoção" on_close=on_close>
            <form class="entity-form" on:submit=on_submit>
                <div class="form-grid">
                    <TextField
                        label="Nome da promoção"
                        required=true
                        value=bind(form, |f| f.name.clone())
                        on_input=setter(form, |f, v| f.name = v)
                        disabled=busy
                    />
                    <TextField
                        label="Código do cupom"
                        required=true
                        placeholder="EX: PIZZA20"
                        value=bind(form, |f| f.code.clone())
                        on_input=setter(form, |f, v| f.code = v)
                        disabled=busy
                    />
                </div>
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
                        label="Tipo de desconto"
                        options=DISCOUNT_TYPE_OPTIONS
                        value=bind(form, |f| f.discount_type.clone())
                        on_change=setter(form, |f, v| f.discount_type = v)
                        disabled=busy
                    />
                    <TextField
                        label="Valor do desconto"
                        required=true
                        value=bind(form, |f| f.discount_value.clone())
                        on_input=setter(form, |f, v| f.discount_value = v)
                        disabled=busy
                    />
                    <TextField
                        label="Limite de uso"
                        input_type="number"
                        value=bind(form, |f| f.usage_limit.clone())
                        on_input=setter(form, |f, v| f.usage_limit = v)
                        disabled=busy
                    />
                    <TextField
                        label="Pedido mínimo (R$)"
                        value=bind(form, |f| f.min_order_value.clone())
                        on_input=setter(form, |f, v| f.min_order_value = v)
                        disabled=busy
                    />
                    <SelectField
                        label="Restaurantes"
                        options=SCOPE_OPTIONS
                        value=bind(form, |f| f.restaurants.clone())
                        on_change=setter(form, |f, v| f.restaurants = v)
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
                        label="Status"
                        options=STATUS_OPTIONS
                        value=bind(form, |f| f.status.clone())
                        on_change=setter(form, |f, v| f.status = v)
                        disabled=busy
                    />
                </div>
                <FormActions submit_label="Criar Promoção" busy=busy on_cancel=on_close />
            </form>
        </Modal>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> PromotionDraft {
        PromotionDraft {
            name: "Pizza em dobro".to_string(),
            code: " pizza20 ".to_string(),
            discount_value: "20".to_string(),
            ..PromotionDraft::default()
        }
    }

    #[test]
    fn test_payload_parses_numbers() {
        let payload = PromotionDraft {
            usage_limit: "500".to_string(),
            min_order_value: "35,90".to_string(),
            ..filled()
        }
        .payload()
        .unwrap();

        assert_eq!(payload.code, "PIZZA20");
        assert_eq!(payload.discount_value, 20.0);
        assert_eq!(payload.usage_limit, Some(500));
        assert_eq!(payload.min_order_value, Some(35.9));
        assert_eq!(payload.status, "active");
    }

    #[test]
    fn test_optional_numbers_may_be_blank() {
        let payload = filled().payload().unwrap();
        assert_eq!(payload.usage_limit, None);
        assert_eq!(payload.min_order_value, None);
    }

    #[test]
    fn test_discount_value_is_required() {
        let draft = PromotionDraft {
            discount_value: String::new(),
            ..filled()
        };
        assert!(matches!(draft.check(), Err(Error::MissingField { .. })));
    }
}
