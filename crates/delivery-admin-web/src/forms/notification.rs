//! Create form for push notifications

use super::{EntityForm, SubmitGuard, non_blank, submit};
use crate::api_client::ApiClient;
use crate::components::fields::{FormActions, SelectField, TextArea, TextField, bind, setter};
use crate::components::modal::Modal;
use crate::state::use_api;
use crate::toast::use_toaster;
use delivery_admin_core::types::{NewNotification, StatusMessage, TargetType};
use delivery_admin_core::utils::parse_id_list;
use delivery_admin_core::{Error, Result};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use validator::Validate;

const TARGET_OPTIONS: &[(&str, &str)] = &[
    (TargetType::All.code(), TargetType::All.label()),
    (TargetType::Establishment.code(), TargetType::Establishment.label()),
    (TargetType::Delivery.code(), TargetType::Delivery.label()),
    (TargetType::Customer.code(), TargetType::Customer.label()),
    (TargetType::Custom.code(), TargetType::Custom.label()),
];

/// Fields of the notification form
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct NotificationDraft {
    /// Title
    #[validate(custom(function = "non_blank", message = "Título"))]
    pub title: String,
    /// Body text
    #[validate(custom(function = "non_blank", message = "Mensagem"))]
    pub content: String,
    /// Audience
    pub target_type: TargetType,
    /// Comma separated user ids, read only for [`TargetType::Custom`]
    pub custom_ids: String,
}

impl EntityForm for NotificationDraft {
    type Payload = NewNotification;

    fn check(&self) -> Result<()> {
        self.validate()?;
        if self.target_type == TargetType::Custom && parse_id_list(&self.custom_ids).is_empty() {
            return Err(Error::Validation {
                field: "custom_ids".to_string(),
                message: "Informe ao menos um ID de usuário válido.".to_string(),
            });
        }
        Ok(())
    }

    fn payload(&self) -> Result<NewNotification> {
        Ok(NewNotification {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            target_type: self.target_type,
            custom_user_ids: (self.target_type == TargetType::Custom)
                .then(|| parse_id_list(&self.custom_ids)),
        })
    }
}

/// Validate and send a notification
///
/// # Errors
///
/// Returns the validation error, [`Error::AlreadySubmitting`] or the request error.
pub async fn save(
    client: &ApiClient,
    guard: &SubmitGuard,
    draft: &NotificationDraft,
) -> Result<StatusMessage> {
    submit(guard, draft, |payload| async move {
        client.create_notification(&payload).await
    })
    .await
}

/// Modal form that sends a new notification
#[component]
pub fn NotificationForm(
    /// Called after a successful send, e.g. to refetch the list
    on_save: Callback<()>,
    /// Closes the modal
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_api();
    let toaster = use_toaster();
    let form = RwSignal::new(NotificationDraft::default());
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
                    tracing::info!("Notification sent to {}", draft.target_type.code());
                    toaster.success(
                        ack.message
                            .unwrap_or_else(|| "Notificação enviada com sucesso!".to_string()),
                    );
                    on_save.run(());
                    on_close.run(());
                }
                Err(e) => toaster.report("Failed to send notification", &e),
            }
        });
    };

    view! {
        <Modal title="Nova Notificação" on_close=on_close>
            <form class="entity-form" on:submit=on_submit>
                <TextField
                    label="Título"
                    required=true
                    value=bind(form, |f| f.title.clone())
                    on_input=setter(form, |f, v| f.title = v)
                    disabled=busy
                />
                <TextArea
                    label="Mensagem"
                    required=true
                    value=bind(form, |f| f.content.clone())
                    on_input=setter(form, |f, v| f.content = v)
                    disabled=busy
                />
                <SelectField
                    label="Público-alvo"
                    options=TARGET_OPTIONS
                    value=bind(form, |f| f.target_type.code().to_string())
                    on_change=setter(form, |f, v: String| {
                        f.target_type = TargetType::from_code(&v).unwrap_or_default();
                    })
                    disabled=busy
                />
                <Show when=move || form.with(|f| f.target_type == TargetType::Custom)>
                    <TextField
                        label="IDs dos usuários"
                        placeholder="Ex: 3, 7, 12"
                        value=bind(form, |f| f.custom_ids.clone())
                        on_input=setter(form, |f, v| f.custom_ids = v)
                        disabled=busy
                    />
                </Show>
                <FormActions submit_label="Enviar Notificação" busy=busy on_cancel=on_close />
            </form>
        </Modal>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(target_type: TargetType, custom_ids: &str) -> NotificationDraft {
        NotificationDraft {
            title: " Promoção ".to_string(),
            content: "Frete grátis hoje".to_string(),
            target_type,
            custom_ids: custom_ids.to_string(),
        }
    }

    #[test]
    fn test_custom_ids_only_sent_for_custom_target() {
        let broadcast = draft(TargetType::Customer, "3, 7").payload().unwrap();
        assert_eq!(broadcast.custom_user_ids, None);
        assert_eq!(broadcast.title, "Promoção");

        let custom = draft(TargetType::Custom, "3, 7, abc, 0").payload().unwrap();
        assert_eq!(custom.custom_user_ids, Some(vec![3, 7]));
    }

    #[test]
    fn test_custom_target_needs_an_id() {
        let result = draft(TargetType::Custom, "abc").check();
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!(draft(TargetType::All, "").check().is_ok());
    }

    #[test]
    fn test_title_is_required() {
        let mut empty = draft(TargetType::All, "");
        empty.title.clear();

        assert_eq!(
            empty.check(),
            Err(Error::MissingField {
                field: "Título".to_string()
            })
        );
    }
}
