//! Sidebar navigation and the active screen

use crate::pages::{
    admins::AdminsPage, ads::AdsPage, dashboard::DashboardPage, deliverers::DeliverersPage,
    financial::FinancialPage, notifications::NotificationsPage, orders::OrdersPage,
    promotions::PromotionsPage, restaurants::RestaurantsPage, settings::SettingsPage,
    users::UsersPage,
};
use leptos::prelude::*;

/// Navigation sections, in sidebar order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    /// Headline metrics
    #[default]
    Dashboard,
    /// Orders
    Orders,
    /// Partner restaurants
    Restaurants,
    /// Customer accounts
    Users,
    /// Couriers
    Deliverers,
    /// Advertising
    Ads,
    /// Coupons
    Promotions,
    /// Transactions
    Financial,
    /// Platform settings
    Settings,
    /// Console operators
    Admins,
    /// Push notifications
    Notifications,
}

impl Section {
    /// Every section, in sidebar order
    pub const ALL: [Self; 11] = [
        Self::Dashboard,
        Self::Orders,
        Self::Restaurants,
        Self::Users,
        Self::Deliverers,
        Self::Ads,
        Self::Promotions,
        Self::Financial,
        Self::Settings,
        Self::Admins,
        Self::Notifications,
    ];

    /// Stable key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Orders => "orders",
            Self::Restaurants => "restaurants",
            Self::Users => "users",
            Self::Deliverers => "deliverers",
            Self::Ads => "ads",
            Self::Promotions => "promotions",
            Self::Financial => "financial",
            Self::Settings => "settings",
            Self::Admins => "admins",
            Self::Notifications => "notifications",
        }
    }

    /// Sidebar label
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Orders => "Pedidos",
            Self::Restaurants => "Restaurantes",
            Self::Users => "Usuários",
            Self::Deliverers => "Entregadores",
            Self::Ads => "Anúncios",
            Self::Promotions => "Promoções",
            Self::Financial => "Financeiro",
            Self::Settings => "Configurações",
            Self::Admins => "Administradores",
            Self::Notifications => "Notificações",
        }
    }

    /// Sidebar glyph
    const fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Orders => "🛍",
            Self::Restaurants => "🏪",
            Self::Users => "👥",
            Self::Deliverers => "🛵",
            Self::Ads => "📣",
            Self::Promotions => "🎁",
            Self::Financial => "💰",
            Self::Settings => "⚙",
            Self::Admins => "🛡",
            Self::Notifications => "🔔",
        }
    }

    /// Section for a key; unknown keys land on the dashboard
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|section| section.key() == key.trim())
            .unwrap_or_default()
    }

    fn render(self) -> AnyView {
        match self {
            Self::Dashboard => view! { <DashboardPage /> }.into_any(),
            Self::Orders => view! { <OrdersPage /> }.into_any(),
            Self::Restaurants => view! { <RestaurantsPage /> }.into_any(),
            Self::Users => view! { <UsersPage /> }.into_any(),
            Self::Deliverers => view! { <DeliverersPage /> }.into_any(),
            Self::Ads => view! { <AdsPage /> }.into_any(),
            Self::Promotions => view! { <PromotionsPage /> }.into_any(),
            Self::Financial => view! { <FinancialPage /> }.into_any(),
            Self::Settings => view! { <SettingsPage /> }.into_any(),
            Self::Admins => view! { <AdminsPage /> }.into_any(),
            Self::Notifications => view! { <NotificationsPage /> }.into_any(),
        }
    }
}

/// Navigation sidebar
#[component]
fn Sidebar(active: RwSignal<Section>) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h2>"DeliveryAdmin"</h2>
                <p>"Painel de Controle"</p>
            </div>
            <p class="sidebar-group">"Navegação Principal"</p>
            <nav class="sidebar-nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="nav-link"
                                class:active=move || active.get() == section
                                on:click=move |_| active.set(section)
                            >
                                <span class="nav-icon">{section.icon()}</span>
                                <span>{section.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Sidebar plus the screen of the selected section
#[component]
pub fn Shell() -> impl IntoView {
    let active = RwSignal::new(Section::default());

    view! {
        <div class="shell">
            <Sidebar active=active />
            <main class="content">
                {move || {
                    let section = active.get();
                    tracing::debug!("Showing section {}", section.key());
                    section.render()
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("orders", Section::Orders)]
    #[case(" notifications ", Section::Notifications)]
    #[case("reports", Section::Dashboard)]
    #[case("", Section::Dashboard)]
    fn test_from_key(#[case] key: &str, #[case] expected: Section) {
        assert_eq!(Section::from_key(key), expected);
    }

    #[test]
    fn test_keys_round_trip_in_sidebar_order() {
        let titles: Vec<_> = Section::ALL
            .into_iter()
            .map(|s| Section::from_key(s.key()).title())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Dashboard",
                "Pedidos",
                "Restaurantes",
                "Usuários",
                "Entregadores",
                "Anúncios",
                "Promoções",
                "Financeiro",
                "Configurações",
                "Administradores",
                "Notificações",
            ]
        );
    }
}
