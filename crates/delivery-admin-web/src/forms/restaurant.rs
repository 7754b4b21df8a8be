//! Edit form for a restaurant profile and its weekly opening hours

use super::{EntityForm, SubmitGuard, non_blank, submit};
use crate::api_client::ApiClient;
use crate::components::fields::{CheckboxField, FormActions, TextArea, TextField, bind, setter};
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::state::use_api;
use crate::toast::use_toaster;
use delivery_admin_core::types::{
    BusinessHours, PaymentMethod, Restaurant, RestaurantProfile, RestaurantUpdate, StatusMessage,
    WeeklySchedule,
};
use delivery_admin_core::utils::{format_decimal, parse_decimal};
use delivery_admin_core::Result;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use std::collections::BTreeSet;
use validator::Validate;

/// Radius used when the field is blank or not a number
const DEFAULT_RADIUS_KM: u32 = 5;
const MIN_RADIUS_KM: u32 = 1;
const MAX_RADIUS_KM: u32 = 50;

/// Fields of the restaurant form
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RestaurantDraft {
    /// Trading name
    #[validate(custom(function = "non_blank", message = "Nome do restaurante"))]
    pub restaurant_name: String,
    /// Cuisine type
    #[validate(custom(function = "non_blank", message = "Tipo de cozinha"))]
    pub cuisine_type: String,
    /// Delivery fee as typed
    #[validate(custom(function = "non_blank", message = "Taxa de entrega"))]
    pub delivery_fee: String,
    /// Minimum order as typed
    #[validate(custom(function = "non_blank", message = "Pedido mínimo"))]
    pub minimum_order: String,
    /// Delivery radius in km as typed
    #[validate(custom(function = "non_blank", message = "Raio de entrega"))]
    pub delivery_radius: String,
    /// Free text description
    pub description: String,
    /// Instagram handle
    pub instagram: String,
    /// `WhatsApp` number
    pub whatsapp: String,
    /// Pix key for payouts
    #[validate(custom(function = "non_blank", message = "Chave Pix"))]
    pub pix_key: String,
    /// Logo image URL
    pub logo_url: String,
    /// Banner image URL
    pub banner_url: String,
    /// Accepted payment methods
    pub payment_methods: BTreeSet<PaymentMethod>,
    /// Only linked deliverers may pick up orders
    pub only_linked_delivery: bool,
    /// Opening hours, one entry per day
    pub schedule: WeeklySchedule,
}

impl Default for RestaurantDraft {
    fn default() -> Self {
        Self {
            restaurant_name: String::new(),
            cuisine_type: String::new(),
            delivery_fee: String::new(),
            minimum_order: String::new(),
            delivery_radius: DEFAULT_RADIUS_KM.to_string(),
            description: String::new(),
            instagram: String::new(),
            whatsapp: String::new(),
            pix_key: String::new(),
            logo_url: String::new(),
            banner_url: String::new(),
            payment_methods: PaymentMethod::ALL.into_iter().collect(),
            only_linked_delivery: false,
            schedule: WeeklySchedule::default(),
        }
    }
}

fn decimal_field(value: Option<f64>) -> String {
    value.map(|v| format_decimal(v, 2)).unwrap_or_default()
}

impl RestaurantDraft {
    /// Seed the form from the stored profile and opening hours
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_profile(profile: &RestaurantProfile, hours: &[BusinessHours]) -> Self {
        Self {
            restaurant_name: profile.restaurant_name.clone(),
            cuisine_type: profile.cuisine_type.clone(),
            delivery_fee: decimal_field(profile.delivery_fee),
            minimum_order: decimal_field(profile.minimum_order),
            delivery_radius: profile
                .delivery_radius
                .filter(|radius| *radius >= 0.0)
                .map_or(DEFAULT_RADIUS_KM, |radius| radius.round() as u32)
                .to_string(),
            description: profile.description.clone(),
            instagram: profile.instagram.clone(),
            whatsapp: profile.whatsapp.clone(),
            pix_key: profile.pix_key.clone(),
            logo_url: profile.logo_url.clone(),
            banner_url: profile.banner_url.clone(),
            payment_methods: profile.payment_methods().into_iter().collect(),
            only_linked_delivery: profile.only_linked_delivery,
            schedule: WeeklySchedule::from_records(hours),
        }
    }

    /// Accept or refuse one payment method
    pub fn set_payment_method(&mut self, method: PaymentMethod, accepted: bool) {
        if accepted {
            self.payment_methods.insert(method);
        } else {
            self.payment_methods.remove(&method);
        }
    }

    /// Radius in km, defaulting to 5 and kept within 1 to 50
    #[must_use]
    pub fn radius_km(&self) -> u32 {
        self.delivery_radius
            .trim()
            .parse::<u32>()
            .unwrap_or(DEFAULT_RADIUS_KM)
            .clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
    }
}

/// Both requests issued by one save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantChanges {
    /// Body of the profile update
    pub profile: RestaurantUpdate,
    /// Open days only
    pub business_hours: Vec<BusinessHours>,
}

impl EntityForm for RestaurantDraft {
    type Payload = RestaurantChanges;

    fn payload(&self) -> Result<RestaurantChanges> {
        let profile = RestaurantUpdate {
            restaurant_name: self.restaurant_name.trim().to_string(),
            cuisine_type: self.cuisine_type.trim().to_string(),
            delivery_fee: parse_decimal(&self.delivery_fee).unwrap_or(0.0),
            minimum_order: parse_decimal(&self.minimum_order).unwrap_or(0.0),
            description: self.description.trim().to_string(),
            delivery_radius: self.radius_km(),
            pix_key: self.pix_key.trim().to_string(),
            instagram: self.instagram.trim().to_string(),
            whatsapp: self.whatsapp.trim().to_string(),
            logo_url: self.logo_url.trim().to_string(),
            banner_url: self.banner_url.trim().to_string(),
            accepted_payment_methods: self.payment_methods.iter().copied().collect(),
            only_linked_delivery: u8::from(self.only_linked_delivery),
        };

        Ok(RestaurantChanges {
            profile,
            business_hours: self.schedule.open_days(),
        })
    }
}

/// Fetch the profile and opening hours of a restaurant concurrently
///
/// # Errors
///
/// Returns the first failed request.
pub async fn load(client: &ApiClient, id: u64) -> Result<RestaurantDraft> {
    let (profile, hours) = futures::join!(client.restaurant_profile(id), client.business_hours(id));
    Ok(RestaurantDraft::from_profile(&profile?, &hours?))
}

/// Validate and save the profile, then the opening hours
///
/// # Errors
///
/// Returns the validation error, a concurrent submit or the first failed request.
pub async fn save(
    client: &ApiClient,
    guard: &SubmitGuard,
    id: u64,
    draft: &RestaurantDraft,
) -> Result<StatusMessage> {
    submit(guard, draft, |changes| async move {
        let ack = client.update_restaurant(id, &changes.profile).await?;
        client
            .update_business_hours(id, changes.business_hours)
            .await?;
        Ok(ack)
    })
    .await
}

/// Modal form that edits a restaurant
#[component]
pub fn RestaurantForm(
    /// Restaurant being edited
    restaurant: Restaurant,
    /// Called after a successful save
    on_save: Callback<()>,
    /// Closes the modal
    on_close: Callback<()>,
) -> impl IntoView {
    let id = restaurant.id;
    let client = use_api();
    let toaster = use_toaster();
    let form = RwSignal::new(RestaurantDraft::default());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let locked = Signal::derive(move || busy.get() || loading.get());
    let guard = SubmitGuard::observed(move |state| {
        let _ = busy.try_set(state);
    });

    {
        let client = client.clone();
        spawn_local(async move {
            match load(&client, id).await {
                Ok(draft) => {
                    let _ = form.try_set(draft);
                    let _ = loading.try_set(false);
                }
                Err(e) => {
                    toaster.report("Failed to load restaurant profile", &e);
                    on_close.run(());
                }
            }
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked();
        let client = client.clone();
        let guard = guard.clone();
        spawn_local(async move {
            match save(&client, &guard, id, &draft).await {
                Ok(_) => {
                    tracing::info!("Restaurant {id} updated");
                    toaster.success("Restaurante atualizado com sucesso!");
                    on_save.run(());
                    on_close.run(());
                }
                Err(e) => toaster.report("Failed to update restaurant", &e),
            }
        });
    };

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
                    disabled=locked
                />
            }
        })
        .collect_view();

    let schedule_rows = (1..=7_u64)
        .map(|day| {
            let name = BusinessHours::closed(day).day_name();
            view! {
                <div class="schedule-row">
                    <span class="schedule-day">{name}</span>
                    <TextField
                        label="Abre"
                        input_type="time"
                        value=Signal::derive(move || {
                            form.with(|f| {
                                f.schedule.day(day).map(|d| d.open_time.clone()).unwrap_or_default()
                            })
                        })
                        on_input=Callback::new(move |time| {
                            form.update(|f| f.schedule.set_open_time(day, time));
                        })
                        disabled=locked
                    />
                    <TextField
                        label="Fecha"
                        input_type="time"
                        value=Signal::derive(move || {
                            form.with(|f| {
                                f.schedule.day(day).map(|d| d.close_time.clone()).unwrap_or_default()
                            })
                        })
                        on_input=Callback::new(move |time| {
                            form.update(|f| f.schedule.set_close_time(day, time));
                        })
                        disabled=locked
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <Modal title=format!("Editar {}", restaurant.name) on_close=on_close>
            <Show when=move || loading.get()>
                <Loading message="Carregando perfil..." />
            </Show>
            <form class="entity-form" on:submit=on_submit>
                <h4 class="form-section">"Informações básicas"</h4>
                <div class="form-grid">
                    <TextField
                        label="Nome do restaurante"
                        required=true
                        value=bind(form, |f| f.restaurant_name.clone())
                        on_input=setter(form, |f, v| f.restaurant_name = v)
                        disabled=locked
                    />
                    <TextField
                        label="Tipo de cozinha"
                        required=true
                        value=bind(form, |f| f.cuisine_type.clone())
                        on_input=setter(form, |f, v| f.cuisine_type = v)
                        disabled=locked
                    />
                    <TextField
                        label="Taxa de entrega (R$)"
                        required=true
                        value=bind(form, |f| f.delivery_fee.clone())
                        on_input=setter(form, |f, v| f.delivery_fee = v)
                        disabled=locked
                    />
                    <TextField
                        label="Pedido mínimo (R$)"
                        required=true
                        value=bind(form, |f| f.minimum_order.clone())
                        on_input=setter(form, |f, v| f.minimum_order = v)
                        disabled=locked
                    />
                    <TextField
                        label="Raio de entrega (km)"
                        required=true
                        input_type="number"
                        value=bind(form, |f| f.delivery_radius.clone())
                        on_input=setter(form, |f, v| f.delivery_radius = v)
                        disabled=locked
                    />
                    <TextField
                        label="Chave Pix"
                        required=true
                        value=bind(form, |f| f.pix_key.clone())
                        on_input=setter(form, |f, v| f.pix_key = v)
                        disabled=locked
                    />
                </div>
                <TextArea
                    label="Descrição"
                    value=bind(form, |f| f.description.clone())
                    on_input=setter(form, |f, v| f.description = v)
                    disabled=locked
                />

                <h4 class="form-section">"Contato e mídia"</h4>
                <div class="form-grid">
                    <TextField
                        label="Instagram"
                        placeholder="@restaurante"
                        value=bind(form, |f| f.instagram.clone())
                        on_input=setter(form, |f, v| f.instagram = v)
                        disabled=locked
                    />
                    <TextField
                        label="WhatsApp"
                        value=bind(form, |f| f.whatsapp.clone())
                        on_input=setter(form, |f, v| f.whatsapp = v)
                        disabled=locked
                    />
                    <TextField
                        label="URL do logo"
                        input_type="url"
                        value=bind(form, |f| f.logo_url.clone())
                        on_input=setter(form, |f, v| f.logo_url = v)
                        disabled=locked
                    />
                    <TextField
                        label="URL do banner"
                        input_type="url"
                        value=bind(form, |f| f.banner_url.clone())
                        on_input=setter(form, |f, v| f.banner_url = v)
                        disabled=locked
                    />
                </div>

                <h4 class="form-section">"Pagamento e entrega"</h4>
                <div class="permission-grid">{payment_boxes}</div>
                <CheckboxField
                    label="Apenas entregadores vinculados"
                    checked=bind(form, |f| f.only_linked_delivery)
                    on_toggle=setter(form, |f, v| f.only_linked_delivery = v)
                    disabled=locked
                />

                <h4 class="form-section">"Horário de funcionamento"</h4>
                <div class="schedule">{schedule_rows}</div>

                <FormActions submit_label="Salvar Alterações" busy=locked on_cancel=on_close />
            </form>
        </Modal>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use delivery_admin_core::Error;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn filled() -> RestaurantDraft {
        RestaurantDraft {
            restaurant_name: "Cantina da Nonna".to_string(),
            cuisine_type: "Italiana".to_string(),
            delivery_fee: "5,90".to_string(),
            minimum_order: "20".to_string(),
            pix_key: "cantina@pix".to_string(),
            ..RestaurantDraft::default()
        }
    }

    #[test]
    fn test_seed_from_profile() {
        let profile: RestaurantProfile = serde_json::from_value(json!({
            "restaurant_name": "Cantina da Nonna",
            "cuisine_type": "Italiana",
            "delivery_fee": "7.5",
            "delivery_radius": 8,
            "accepted_payment_methods": ["PIX"],
            "only_linked_delivery": 0
        }))
        .unwrap();
        let hours = vec![BusinessHours {
            day_of_week: 6,
            open_time: "18:00".to_string(),
            close_time: "23:00".to_string(),
        }];

        let draft = RestaurantDraft::from_profile(&profile, &hours);

        assert_eq!(draft.delivery_fee, "7,50");
        assert_eq!(draft.minimum_order, "");
        assert_eq!(draft.delivery_radius, "8");
        assert_eq!(
            draft.payment_methods.into_iter().collect::<Vec<_>>(),
            vec![PaymentMethod::Pix]
        );
        assert_eq!(draft.schedule.open_days().len(), 1);
    }

    #[rstest]
    #[case("", 5)]
    #[case("abc", 5)]
    #[case("0", 1)]
    #[case("12", 12)]
    #[case("80", 50)]
    fn test_radius_defaults_and_bounds(#[case] typed: &str, #[case] expected: u32) {
        let draft = RestaurantDraft {
            delivery_radius: typed.to_string(),
            ..filled()
        };
        assert_eq!(draft.radius_km(), expected);
    }

    #[test]
    fn test_payload_converts_numbers_and_flags() {
        let mut draft = RestaurantDraft {
            minimum_order: "muito".to_string(),
            only_linked_delivery: true,
            ..filled()
        };
        draft.set_payment_method(PaymentMethod::Cash, false);
        draft.schedule.set_open_time(2, "11:00");
        draft.schedule.set_close_time(2, "15:00");
        draft.schedule.set_open_time(3, "11:00");

        let changes = draft.payload().unwrap();

        assert_eq!(changes.profile.delivery_fee, 5.9);
        assert_eq!(changes.profile.minimum_order, 0.0);
        assert_eq!(changes.profile.only_linked_delivery, 1);
        assert_eq!(
            changes.profile.accepted_payment_methods,
            vec![PaymentMethod::Pix, PaymentMethod::Credit, PaymentMethod::Debit]
        );
        assert_eq!(changes.business_hours.len(), 1);
        assert_eq!(changes.business_hours[0].day_of_week, 2);
    }

    #[test]
    fn test_pix_key_is_required() {
        for pix_key in ["", "   "] {
            let draft = RestaurantDraft {
                pix_key: pix_key.to_string(),
                ..filled()
            };
            assert_eq!(
                draft.check(),
                Err(Error::MissingField {
                    field: "Chave Pix".to_string()
                })
            );
        }
    }
}
