//! Create form for deliverers

use super::{EntityForm, SubmitGuard, non_blank, submit};
use crate::api_client::ApiClient;
use crate::components::fields::{
    CheckboxField, FormActions, SelectField, TextField, bind, setter,
};
use crate::components::modal::Modal;
use crate::state::use_api;
use crate::toast::use_toaster;
use delivery_admin_core::Result;
use delivery_admin_core::types::{NewDeliverer, StatusMessage};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use validator::Validate;

const VEHICLE_OPTIONS: &[(&str, &str)] = &[
    ("bike", "Bicicleta"),
    ("motorcycle", "Moto"),
    ("car", "Carro"),
];

const BANK_OPTIONS: &[(&str, &str)] = &[
    ("", "Selecione"),
    ("bradesco", "Bradesco"),
    ("itau", "Itaú"),
    ("bb", "Banco do Brasil"),
    ("santander", "Santander"),
    ("caixa", "Caixa"),
    ("nubank", "Nubank"),
];

/// Fields of the deliverer form
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct DelivererDraft {
    /// Full name
    #[validate(custom(function = "non_blank", message = "Nome completo"))]
    pub name: String,
    /// E-mail
    #[validate(custom(function = "non_blank", message = "E-mail"))]
    pub email: String,
    /// Phone number
    #[validate(custom(function = "non_blank", message = "Telefone"))]
    pub phone: String,
    /// Brazilian taxpayer id
    #[validate(custom(function = "non_blank", message = "CPF"))]
    pub cpf: String,
    /// Birth date
    #[validate(custom(function = "non_blank", message = "Data de nascimento"))]
    pub birth_date: String,
    /// Vehicle type code
    pub vehicle_type: String,
    /// Licence plate
    pub vehicle_plate: String,
    /// Driving licence
    pub cnh: String,
    /// Bank code
    pub bank_name: String,
    /// Bank agency
    pub bank_agency: String,
    /// Bank account
    pub bank_account: String,
    /// Pix key
    pub pix_key: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Postal code
    pub zip_code: String,
    /// Emergency contact name
    pub emergency_contact: String,
    /// Emergency contact phone
    pub emergency_phone: String,
    /// Account enabled
    pub is_active: bool,
    /// Uses their own vehicle
    pub has_own_vehicle: bool,
    /// Comma separated names of attached documents
    pub documents: String,
}

impl Default for DelivererDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            cpf: String::new(),
            birth_date: String::new(),
            vehicle_type: "motorcycle".to_string(),
            vehicle_plate: String::new(),
            cnh: String::new(),
            bank_name: String::new(),
            bank_agency: String::new(),
            bank_account: String::new(),
            pix_key: String::new(),
            address: String::new(),
            city: String::new(),
            zip_code: String::new(),
            emergency_contact: String::new(),
            emergency_phone: String::new(),
            is_active: true,
            has_own_vehicle: true,
            documents: String::new(),
        }
    }
}

impl EntityForm for DelivererDraft {
    type Payload = NewDeliverer;

    fn payload(&self) -> Result<NewDeliverer> {
        let documents = self
            .documents
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Ok(NewDeliverer {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            cpf: self.cpf.trim().to_string(),
            birth_date: self.birth_date.clone(),
            vehicle_type: self.vehicle_type.clone(),
            vehicle_plate: self.vehicle_plate.trim().to_uppercase(),
            cnh: self.cnh.trim().to_string(),
            bank_name: self.bank_name.clone(),
            bank_agency: self.bank_agency.trim().to_string(),
            bank_account: self.bank_account.trim().to_string(),
            pix_key: self.pix_key.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            emergency_contact: self.emergency_contact.trim().to_string(),
            emergency_phone: self.emergency_phone.trim().to_string(),
            is_active: self.is_active,
            has_own_vehicle: self.has_own_vehicle,
            documents,
        })
    }
}

/// Validate and register a deliverer
///
/// # Errors
///
/// Returns the validation error, a concurrent submit or the request error.
pub async fn save(
    client: &ApiClient,
    guard: &SubmitGuard,
    draft: &DelivererDraft,
) -> Result<StatusMessage> {
    submit(guard, draft, |payload| async move {
        client.create("/deliverers", &payload).await
    })
    .await
}

/// Modal form that registers a new deliverer
#[component]
pub fn DelivererForm(
    /// Called after a successful save
    on_save: Callback<()>,
    /// Closes the modal
    on_close: Callback<()>,
) -> impl IntoView {
    let client = use_api();
    let toaster = use_toaster();
    let form = RwSignal::new(DelivererDraft::default());
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
                    tracing::info!("Deliverer {} registered", draft.email);
                    toaster.success(
                        ack.message
                            .unwrap_or_else(|| "Entregador cadastrado com sucesso!".to_string()),
                    );
                    on_save.run(());
                    on_close.run(());
                }
                Err(e) => toaster.report("Failed to register deliverer", &e),
            }
        });
    };

    view! {
        <Modal title="Novo Entregador" on_close=on_close>
            <form class="entity-form" on:submit=on_submit>
                <h4 class="form-section">"Dados pessoais"</h4>
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
                        label="Telefone"
                        required=true
                        placeholder="(11) 99999-9999"
                        value=bind(form, |f| f.phone.clone())
                        on_input=setter(form, |f, v| f.phone = v)
                        disabled=busy
                    />
                    <TextField
                        label="CPF"
                        required=true
                        placeholder="000.000.000-00"
                        value=bind(form, |f| f.cpf.clone())
                        on_input=setter(form, |f, v| f.cpf = v)
                        disabled=busy
                    />
                    <TextField
                        label="Data de nascimento"
                        required=true
                        input_type="date"
                        value=bind(form, |f| f.birth_date.clone())
                        on_input=setter(form, |f, v| f.birth_date = v)
                        disabled=busy
                    />
                </div>

                <h4 class="form-section">"Veículo"</h4>
                <div class="form-grid">
                    <SelectField
                        label="Tipo de veículo"
                        options=VEHICLE_OPTIONS
                        value=bind(form, |f| f.vehicle_type.clone())
                        on_change=setter(form, |f, v| f.vehicle_type = v)
                        disabled=busy
                    />
                    <TextField
                        label="Placa"
                        placeholder="ABC-1234"
                        value=bind(form, |f| f.vehicle_plate.clone())
                        on_input=setter(form, |f, v| f.vehicle_plate = v)
                        disabled=busy
                    />
                    <TextField
                        label="CNH"
                        value=bind(form, |f| f.cnh.clone())
                        on_input=setter(form, |f, v| f.cnh = v)
                        disabled=busy
                    />
                    <CheckboxField
                        label="Veículo próprio"
                        checked=bind(form, |f| f.has_own_vehicle)
                        on_toggle=setter(form, |f, v| f.has_own_vehicle = v)
                        disabled=busy
                    />
                </div>

                <h4 class="form-section">"Dados bancários"</h4>
                <div class="form-grid">
                    <SelectField
                        label="Banco"
                        options=BANK_OPTIONS
                        value=bind(form, |f| f.bank_name.clone())
                        on_change=setter(form, |f, v| f.bank_name = v)
                        disabled=busy
                    />
                    <TextField
                        label="Agência"
                        value=bind(form, |f| f.bank_agency.clone())
                        on_input=setter(form, |f, v| f.bank_agency = v)
                        disabled=busy
                    />
                    <TextField
                        label="Conta"
                        value=bind(form, |f| f.bank_account.clone())
                        on_input=setter(form, |f, v| f.bank_account = v)
                        disabled=busy
                    />
                    <TextField
                        label="Chave Pix"
                        value=bind(form, |f| f.pix_key.clone())
                        on_input=setter(form, |f, v| f.pix_key = v)
                        disabled=busy
                    />
                </div>

                <h4 class="form-section">"Endereço e contato de emergência"</h4>
                <div class="form-grid">
                    <TextField
                        label="Endereço"
                        value=bind(form, |f| f.address.clone())
                        on_input=setter(form, |f, v| f.address = v)
                        disabled=busy
                    />
                    <TextField
                        label="Cidade"
                        value=bind(form, |f| f.city.clone())
                        on_input=setter(form, |f, v| f.city = v)
                        disabled=busy
                    />
                    <TextField
                        label="CEP"
                        placeholder="00000-000"
                        value=bind(form, |f| f.zip_code.clone())
                        on_input=setter(form, |f, v| f.zip_code = v)
                        disabled=busy
                    />
                    <TextField
                        label="Contato de emergência"
                        value=bind(form, |f| f.emergency_contact.clone())
                        on_input=setter(form, |f, v| f.emergency_contact = v)
                        disabled=busy
                    />
                    <TextField
                        label="Telefone de emergência"
                        value=bind(form, |f| f.emergency_phone.clone())
                        on_input=setter(form, |f, v| f.emergency_phone = v)
                        disabled=busy
                    />
                </div>

                <TextField
                    label="Documentos"
                    placeholder="cnh.pdf, comprovante.pdf"
                    value=bind(form, |f| f.documents.clone())
                    on_input=setter(form, |f, v| f.documents = v)
                    disabled=busy
                />
                <CheckboxField
                    label="Entregador ativo"
                    checked=bind(form, |f| f.is_active)
                    on_toggle=setter(form, |f, v| f.is_active = v)
                    disabled=busy
                />
                <FormActions submit_label="Cadastrar Entregador" busy=busy on_cancel=on_close />
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

    fn filled() -> DelivererDraft {
        DelivererDraft {
            name: "Carlos Lima".to_string(),
            email: "carlos@example.com".to_string(),
            phone: "(81) 98888-0000".to_string(),
            cpf: "123.456.789-00".to_string(),
            birth_date: "1995-04-02".to_string(),
            vehicle_plate: " abc-1234 ".to_string(),
            documents: "cnh.pdf, , comprovante.pdf".to_string(),
            ..DelivererDraft::default()
        }
    }

    #[test]
    fn test_payload_normalizes_fields() {
        let payload = filled().payload().unwrap();

        assert_eq!(payload.vehicle_plate, "ABC-1234");
        assert_eq!(payload.vehicle_type, "motorcycle");
        assert_eq!(payload.documents, vec!["cnh.pdf", "comprovante.pdf"]);
        assert!(payload.is_active);
    }

    #[test]
    fn test_cpf_is_required() {
        let draft = DelivererDraft {
            cpf: String::new(),
            ..filled()
        };
        assert_eq!(
            draft.check(),
            Err(Error::MissingField {
                field: "CPF".to_string()
            })
        );
    }
}
