//! Records exchanged with the marketplace backend
//!
//! The backend owns these shapes. Every record tolerates missing fields and
//! numbers sent as strings, so a partial row still renders.

use crate::utils::{format_rate, lenient};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parse a backend timestamp, either RFC 3339 or `YYYY-MM-DD HH:MM:SS` in UTC
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Order status codes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// `pendente`
    Pending,
    /// `em_preparo`
    Preparing,
    /// `entregue`
    Delivered,
    /// `cancelado`
    Cancelled,
    /// Any code this console does not know, kept verbatim
    Other(String),
}

impl OrderStatus {
    /// Every known status, in filter order
    pub const KNOWN: [Self; 4] = [
        Self::Pending,
        Self::Preparing,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Wire code
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Pending => "pendente",
            Self::Preparing => "em_preparo",
            Self::Delivered => "entregue",
            Self::Cancelled => "cancelado",
            Self::Other(code) => code,
        }
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pendente",
            Self::Preparing => "Em Preparo",
            Self::Delivered => "Entregue",
            Self::Cancelled => "Cancelado",
            Self::Other(code) => code,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for OrderStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "pendente" => Self::Pending,
            "em_preparo" => Self::Preparing,
            "entregue" => Self::Delivered,
            "cancelado" => Self::Cancelled,
            _ => Self::Other(code),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.code().to_string()
    }
}

/// Order as listed by `GET /orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Order identifier, shown as-is
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    /// Customer name
    #[serde(deserialize_with = "lenient::text")]
    pub customer: String,
    /// Restaurant name
    #[serde(deserialize_with = "lenient::text")]
    pub restaurant: String,
    /// Deliverer name
    #[serde(deserialize_with = "lenient::text")]
    pub deliverer: String,
    /// Order total
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub value: Option<f64>,
    /// Status code
    pub status: OrderStatus,
    /// Payment method label
    #[serde(deserialize_with = "lenient::text")]
    pub payment: String,
    /// When the order was placed
    #[serde(deserialize_with = "lenient::text")]
    pub time: String,
}

/// Restaurant summary from `GET /restaurants` and `GET /restaurants/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restaurant {
    /// Restaurant identifier
    #[serde(deserialize_with = "lenient::count")]
    pub id: u64,
    /// Trading name
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// City
    #[serde(deserialize_with = "lenient::text")]
    pub city: String,
    /// Cuisine category
    #[serde(deserialize_with = "lenient::text")]
    pub category: String,
    /// Average rating
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub rating: Option<f64>,
    /// Orders received
    #[serde(deserialize_with = "lenient::count")]
    pub orders: u64,
    /// Platform commission collected
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub commission: Option<f64>,
    /// Average preparation time
    #[serde(deserialize_with = "lenient::text")]
    pub avg_time: String,
    /// `Ativo` or `Inativo`
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
}

impl Restaurant {
    /// Whether the restaurant is currently accepting orders
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("ativo")
    }

    /// Status to request when the operator toggles this restaurant
    #[must_use]
    pub fn toggled_status(&self) -> ActivationStatus {
        if self.is_active() {
            ActivationStatus::Inactive
        } else {
            ActivationStatus::Active
        }
    }
}

/// Target of a status toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    /// Re-enable the record
    Active,
    /// Disable a restaurant
    Inactive,
    /// Ban a user
    Banned,
}

/// Body of every status toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Requested status
    pub status: ActivationStatus,
}

/// Acknowledgement returned by mutation endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusMessage {
    /// Human readable outcome
    pub message: Option<String>,
}

/// Payment methods a restaurant can accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    /// Cash on delivery
    Cash,
    /// Pix instant transfer
    Pix,
    /// Credit card
    Credit,
    /// Debit card
    Debit,
}

impl PaymentMethod {
    /// Every method, in display order
    pub const ALL: [Self; 4] = [Self::Cash, Self::Pix, Self::Credit, Self::Debit];

    /// Wire code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Pix => "PIX",
            Self::Credit => "CREDIT",
            Self::Debit => "DEBIT",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cash => "Dinheiro",
            Self::Pix => "Pix",
            Self::Credit => "Cartão de Crédito",
            Self::Debit => "Cartão de Débito",
        }
    }

    /// Parse a wire code, ignoring case
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Full restaurant profile from `GET /restaurants/{id}/profile`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantProfile {
    /// Trading name
    #[serde(deserialize_with = "lenient::text")]
    pub restaurant_name: String,
    /// Cuisine type
    #[serde(deserialize_with = "lenient::text")]
    pub cuisine_type: String,
    /// Delivery fee
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub delivery_fee: Option<f64>,
    /// Minimum order value
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub minimum_order: Option<f64>,
    /// Free text description
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    /// Delivery radius in km
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub delivery_radius: Option<f64>,
    /// Pix key for payouts
    #[serde(deserialize_with = "lenient::text")]
    pub pix_key: String,
    /// Instagram handle
    #[serde(deserialize_with = "lenient::text")]
    pub instagram: String,
    /// `WhatsApp` number
    #[serde(deserialize_with = "lenient::text")]
    pub whatsapp: String,
    /// Logo image URL
    #[serde(deserialize_with = "lenient::text")]
    pub logo_url: String,
    /// Banner image URL
    #[serde(deserialize_with = "lenient::text")]
    pub banner_url: String,
    /// Accepted payment method codes; the backend stores them as a JSON string
    #[serde(deserialize_with = "lenient::string_list")]
    pub accepted_payment_methods: Option<Vec<String>>,
    /// Only deliverers linked to the restaurant may pick up orders
    #[serde(deserialize_with = "lenient::flag")]
    pub only_linked_delivery: bool,
}

impl RestaurantProfile {
    /// Known payment methods in the profile; all of them when the profile has none
    #[must_use]
    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        match &self.accepted_payment_methods {
            Some(codes) => {
                let mut methods: Vec<_> = codes
                    .iter()
                    .filter_map(|code| PaymentMethod::from_code(code))
                    .collect();
                methods.sort_unstable();
                methods.dedup();
                methods
            }
            None => PaymentMethod::ALL.to_vec(),
        }
    }
}

/// Body of `PUT /restaurants/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    /// Trading name
    pub restaurant_name: String,
    /// Cuisine type
    pub cuisine_type: String,
    /// Delivery fee
    pub delivery_fee: f64,
    /// Minimum order value
    pub minimum_order: f64,
    /// Free text description
    pub description: String,
    /// Delivery radius in km
    pub delivery_radius: u32,
    /// Pix key for payouts
    pub pix_key: String,
    /// Instagram handle
    pub instagram: String,
    /// `WhatsApp` number
    pub whatsapp: String,
    /// Logo image URL
    pub logo_url: String,
    /// Banner image URL
    pub banner_url: String,
    /// Accepted payment methods
    pub accepted_payment_methods: Vec<PaymentMethod>,
    /// `1` when only linked deliverers may pick up orders
    pub only_linked_delivery: u8,
}

/// Display names of the days of the week, indexed by `day_of_week - 1`
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
];

/// Opening hours for one day of the week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    /// 1 (Sunday) through 7 (Saturday)
    #[serde(deserialize_with = "lenient::count")]
    pub day_of_week: u64,
    /// Opening time, `HH:MM`
    #[serde(deserialize_with = "lenient::text")]
    pub open_time: String,
    /// Closing time, `HH:MM`
    #[serde(deserialize_with = "lenient::text")]
    pub close_time: String,
}

impl BusinessHours {
    /// A closed day
    #[must_use]
    pub const fn closed(day_of_week: u64) -> Self {
        Self {
            day_of_week,
            open_time: String::new(),
            close_time: String::new(),
        }
    }

    /// Both times are filled in
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.open_time.trim().is_empty() && !self.close_time.trim().is_empty()
    }

    /// Display name of the day
    #[must_use]
    pub fn day_name(&self) -> &'static str {
        usize::try_from(self.day_of_week)
            .ok()
            .and_then(|day| day.checked_sub(1))
            .and_then(|index| WEEKDAY_NAMES.get(index))
            .copied()
            .unwrap_or("?")
    }
}

/// Exactly one [`BusinessHours`] entry per day of the week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: Vec<BusinessHours>,
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self {
            days: (1..=7).map(BusinessHours::closed).collect(),
        }
    }
}

impl WeeklySchedule {
    /// Build a schedule from backend records.
    ///
    /// Days the backend did not send stay closed; out-of-range days are
    /// ignored and the first record for a day wins.
    #[must_use]
    pub fn from_records(records: &[BusinessHours]) -> Self {
        let mut schedule = Self::default();
        for day in &mut schedule.days {
            if let Some(record) = records.iter().find(|r| r.day_of_week == day.day_of_week) {
                day.open_time.clone_from(&record.open_time);
                day.close_time.clone_from(&record.close_time);
            }
        }
        schedule
    }

    /// All seven days, Sunday first
    #[must_use]
    pub fn days(&self) -> &[BusinessHours] {
        &self.days
    }

    /// Hours for one day
    #[must_use]
    pub fn day(&self, day_of_week: u64) -> Option<&BusinessHours> {
        self.days.iter().find(|day| day.day_of_week == day_of_week)
    }

    /// Set the opening time of a day
    pub fn set_open_time(&mut self, day_of_week: u64, time: impl Into<String>) {
        if let Some(day) = self.days.iter_mut().find(|d| d.day_of_week == day_of_week) {
            day.open_time = time.into();
        }
    }

    /// Set the closing time of a day
    pub fn set_close_time(&mut self, day_of_week: u64, time: impl Into<String>) {
        if let Some(day) = self.days.iter_mut().find(|d| d.day_of_week == day_of_week) {
            day.close_time = time.into();
        }
    }

    /// Days with both times set; closed days are left out of updates
    #[must_use]
    pub fn open_days(&self) -> Vec<BusinessHours> {
        self.days.iter().filter(|d| d.is_open()).cloned().collect()
    }
}

/// Body of `PUT /restaurants/{id}/business-hours`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHoursUpdate {
    /// Open days only
    #[serde(rename = "businessHours")]
    pub business_hours: Vec<BusinessHours>,
}

/// Customer account from `GET /users`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User identifier
    #[serde(deserialize_with = "lenient::count")]
    pub id: u64,
    /// Full name
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// E-mail
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    /// Phone number
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    /// Orders placed
    #[serde(deserialize_with = "lenient::count")]
    pub orders: u64,
    /// Lifetime spend
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub total_spent: Option<f64>,
    /// Saved addresses
    #[serde(deserialize_with = "lenient::count")]
    pub addresses: u64,
    /// Date of the last order
    #[serde(deserialize_with = "lenient::text")]
    pub last_order: String,
    /// `Ativo` or `Banido`
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
}

impl User {
    /// Whether the account is banned
    #[must_use]
    pub fn is_banned(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("banido")
    }

    /// Status to request when the operator toggles the ban
    #[must_use]
    pub fn toggled_status(&self) -> ActivationStatus {
        if self.is_banned() {
            ActivationStatus::Active
        } else {
            ActivationStatus::Banned
        }
    }
}

/// Courier from `GET /deliverers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deliverer {
    /// Deliverer identifier
    #[serde(deserialize_with = "lenient::count")]
    pub id: u64,
    /// Full name
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// E-mail
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    /// Phone number
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    /// Vehicle description
    #[serde(deserialize_with = "lenient::text")]
    pub vehicle: String,
    /// Average rating
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub performance: Option<f64>,
    /// Completed deliveries
    #[serde(deserialize_with = "lenient::count")]
    pub deliveries: u64,
    /// `Ativo` or anything else
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
}

impl Deliverer {
    /// Whether the deliverer is currently active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("ativo")
    }
}

/// Advertising campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ad {
    /// Campaign identifier
    #[serde(deserialize_with = "lenient::count")]
    pub id: u64,
    /// Campaign title
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    /// Sponsoring restaurant
    #[serde(deserialize_with = "lenient::text")]
    pub restaurant: String,
    /// Placement kind
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: String,
    /// `Ativo` or `Pausado`
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    /// First day of the campaign
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: String,
    /// Last day of the campaign
    #[serde(deserialize_with = "lenient::text")]
    pub end_date: String,
    /// Budget
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub budget: Option<f64>,
    /// Clicks received
    #[serde(deserialize_with = "lenient::count")]
    pub clicks: u64,
    /// Times shown
    #[serde(deserialize_with = "lenient::count")]
    pub impressions: u64,
}

impl Ad {
    /// Click-through rate
    #[must_use]
    pub fn ctr(&self) -> String {
        format_rate(self.clicks, self.impressions)
    }
}

/// Discount campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Promotion {
    /// Promotion identifier
    #[serde(deserialize_with = "lenient::count")]
    pub id: u64,
    /// Promotion name
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Discount, free delivery or cashback
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: String,
    /// Discount shown to customers, e.g. `15%`
    #[serde(deserialize_with = "lenient::text")]
    pub discount: String,
    /// Coupon code
    #[serde(deserialize_with = "lenient::text")]
    pub code: String,
    /// `Ativo`, `Pausado` or `Expirado`
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    /// First valid day
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: String,
    /// Last valid day
    #[serde(deserialize_with = "lenient::text")]
    pub end_date: String,
    /// Maximum redemptions
    #[serde(deserialize_with = "lenient::count")]
    pub usage_limit: u64,
    /// Redemptions so far
    #[serde(deserialize_with = "lenient::count")]
    pub used_count: u64,
    /// Participating restaurants
    #[serde(deserialize_with = "lenient::text")]
    pub restaurants: String,
}

impl Promotion {
    /// Share of the usage limit already consumed, 0 to 100
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn usage_percent(&self) -> f64 {
        if self.usage_limit == 0 {
            return 0.0;
        }
        (self.used_count as f64 / self.usage_limit as f64 * 100.0).min(100.0)
    }
}

/// Console operator account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Admin {
    /// Admin identifier
    #[serde(deserialize_with = "lenient::count")]
    pub id: u64,
    /// Full name
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// E-mail
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    /// Permission level
    #[serde(deserialize_with = "lenient::text")]
    pub role: String,
    /// `Ativo` or `Inativo`
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    /// Last login timestamp
    #[serde(deserialize_with = "lenient::text")]
    pub last_login: String,
    /// Account creation date
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: String,
    /// Granted permission names
    pub permissions: Vec<String>,
}

/// Money movement on the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction identifier
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    /// `Pagamento`, `Comissão`, `Repasse`, ...
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: String,
    /// Related order
    #[serde(deserialize_with = "lenient::text")]
    pub order_id: String,
    /// Related restaurant
    #[serde(deserialize_with = "lenient::text")]
    pub restaurant: String,
    /// Amount moved
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub amount: Option<f64>,
    /// `Processado` or `Pendente`
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    /// Transaction date
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    /// Payment method label
    #[serde(deserialize_with = "lenient::text")]
    pub payment_method: String,
}

/// Audience of a push notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetType {
    /// Every account
    #[default]
    All,
    /// Restaurant accounts
    Establishment,
    /// Deliverer accounts
    Delivery,
    /// Customer accounts
    Customer,
    /// Explicit list of user ids
    Custom,
}

impl TargetType {
    /// Every audience, in selector order
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Establishment,
        Self::Delivery,
        Self::Customer,
        Self::Custom,
    ];

    /// Wire code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Establishment => "ESTABLISHMENT",
            Self::Delivery => "DELIVERY",
            Self::Customer => "CUSTOMER",
            Self::Custom => "CUSTOM",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Todos os usuários",
            Self::Establishment => "Apenas estabelecimentos",
            Self::Delivery => "Apenas entregadores",
            Self::Customer => "Apenas clientes",
            Self::Custom => "IDs específicos",
        }
    }

    /// Parse a wire code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|target| target.code() == code.trim())
    }
}

/// Label for a raw target code; unknown codes are shown verbatim
#[must_use]
pub fn target_label(code: &str) -> String {
    TargetType::from_code(code).map_or_else(|| code.to_string(), |t| t.label().to_string())
}

/// Notification summary from `GET /notifications`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    /// Notification identifier
    #[serde(deserialize_with = "lenient::count")]
    pub id: u64,
    /// Title
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    /// Body text
    #[serde(deserialize_with = "lenient::text")]
    pub content: String,
    /// Creation timestamp as sent
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: String,
    /// Audience code
    #[serde(deserialize_with = "lenient::text")]
    pub target_type: String,
}

impl Notification {
    /// Parsed creation time
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Notification with delivery statistics from `GET /notifications/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationDetail {
    /// Notification identifier
    #[serde(deserialize_with = "lenient::count")]
    pub id: u64,
    /// Title
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    /// Body text
    #[serde(deserialize_with = "lenient::text")]
    pub content: String,
    /// Creation timestamp as sent
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: String,
    /// Audience code
    #[serde(deserialize_with = "lenient::text")]
    pub target_type: String,
    /// Recipients
    #[serde(deserialize_with = "lenient::count")]
    pub total: u64,
    /// Recipients who opened it
    #[serde(deserialize_with = "lenient::count")]
    pub read: u64,
    /// Recipients who clicked it
    #[serde(deserialize_with = "lenient::count")]
    pub clicked: u64,
}

impl NotificationDetail {
    /// Read rate over all recipients
    #[must_use]
    pub fn read_rate(&self) -> String {
        format_rate(self.read, self.total)
    }

    /// Click rate over all recipients
    #[must_use]
    pub fn click_rate(&self) -> String {
        format_rate(self.clicked, self.total)
    }

    /// Parsed creation time
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Body of `POST /notifications`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    /// Title
    pub title: String,
    /// Body text
    pub content: String,
    /// Audience
    pub target_type: TargetType,
    /// Recipients, only for [`TargetType::Custom`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_user_ids: Option<Vec<u64>>,
}

/// Body of `POST /admins`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    /// Full name
    pub name: String,
    /// E-mail
    pub email: String,
    /// Initial password
    pub password: String,
    /// `super-admin`, `admin`, `moderator` or `analyst`
    pub role: String,
    /// Phone number
    pub phone: String,
    /// Department code
    pub department: String,
    /// Account enabled
    pub is_active: bool,
    /// Section name to granted flag
    pub permissions: BTreeMap<String, bool>,
}

/// Body of `POST /deliverers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliverer {
    /// Full name
    pub name: String,
    /// E-mail
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Brazilian taxpayer id
    pub cpf: String,
    /// Birth date, `YYYY-MM-DD`
    pub birth_date: String,
    /// `bike`, `motorcycle` or `car`
    pub vehicle_type: String,
    /// Licence plate
    pub vehicle_plate: String,
    /// Driving licence number
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
    /// Names of the attached document files
    pub documents: Vec<String>,
}

/// Body of `POST /ads`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAd {
    /// Campaign title
    pub title: String,
    /// Free text description
    pub description: String,
    /// `banner`, `popup`, `sponsored` or `native`
    #[serde(rename = "type")]
    pub kind: String,
    /// Placement in the customer app
    pub position: String,
    /// Link opened on click
    pub target_url: String,
    /// Creative image
    pub image_url: String,
    /// Budget
    pub budget: Option<f64>,
    /// First day
    pub start_date: String,
    /// Last day
    pub end_date: String,
    /// `all`, `new`, `frequent` or `inactive`
    pub target_audience: String,
    /// `low`, `medium` or `high`
    pub priority: String,
    /// Campaign enabled
    pub is_active: bool,
}

/// Body of `POST /promotions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPromotion {
    /// Promotion name
    pub name: String,
    /// Free text description
    pub description: String,
    /// `discount`, `free-delivery` or `cashback`
    #[serde(rename = "type")]
    pub kind: String,
    /// Coupon code
    pub code: String,
    /// `percentage` or `fixed`
    pub discount_type: String,
    /// Discount amount
    pub discount_value: f64,
    /// Maximum redemptions
    pub usage_limit: Option<u64>,
    /// Minimum order value
    pub min_order_value: Option<f64>,
    /// First valid day
    pub start_date: String,
    /// Last valid day
    pub end_date: String,
    /// `all`, `selected` or `category`
    pub restaurants: String,
    /// `active` or `inactive`
    pub status: String,
}

/// Headline metrics from `GET /dashboard`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Orders placed today
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub orders_today: Option<f64>,
    /// Change against yesterday, percent
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub orders_today_percent: Option<f64>,
    /// Registered users
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub users: Option<f64>,
    /// Change in users, percent
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub users_percent: Option<f64>,
    /// Active restaurants
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub restaurants: Option<f64>,
    /// Revenue today
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub revenue_today: Option<f64>,
    /// Change in revenue, percent
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub revenue_percent: Option<f64>,
}

/// One day of `GET /dashboard/weekly`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeeklyPoint {
    /// Short weekday label, `Dom` through `Sáb`
    #[serde(deserialize_with = "lenient::text")]
    pub day: String,
    /// Orders that day
    #[serde(deserialize_with = "lenient::count")]
    pub total_orders: u64,
    /// Revenue that day
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub total_revenue: Option<f64>,
}

/// Body of `PUT /settings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSettings {
    /// Public name of the platform
    pub site_name: String,
    /// Public description
    pub site_description: String,
    /// Default delivery fee
    pub delivery_fee: f64,
    /// Default minimum order value
    pub min_order_value: f64,
    /// Maximum delivery distance in km
    pub max_delivery_distance: f64,
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
    /// Put the customer app in maintenance mode
    pub maintenance_mode: bool,
    /// Accepted payment methods platform-wide
    pub payment_methods: Vec<PaymentMethod>,
}
