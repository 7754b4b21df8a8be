//! Built-in sample records for screens without a backend endpoint

use delivery_admin_core::{Ad, Admin, Promotion, Transaction};

fn text(value: &str) -> String {
    value.to_string()
}

/// Advertising campaigns
pub fn ads() -> Vec<Ad> {
    vec![
        Ad {
            id: 1,
            title: text("Promoção Burger King"),
            restaurant: text("Burger King Centro"),
            kind: text("Banner Principal"),
            status: text("Ativo"),
            start_date: text("2024-01-15"),
            end_date: text("2024-02-15"),
            budget: Some(2500.0),
            clicks: 15_670,
            impressions: 89_450,
        },
        Ad {
            id: 2,
            title: text("Pizza em Dobro"),
            restaurant: text("Pizzaria Bella"),
            kind: text("Destaque Categoria"),
            status: text("Pausado"),
            start_date: text("2024-01-20"),
            end_date: text("2024-02-20"),
            budget: Some(1800.0),
            clicks: 8_920,
            impressions: 45_600,
        },
        Ad {
            id: 3,
            title: text("Sushi Week"),
            restaurant: text("Sushi House"),
            kind: text("Banner Lateral"),
            status: text("Ativo"),
            start_date: text("2024-02-01"),
            end_date: text("2024-02-28"),
            budget: Some(3200.0),
            clicks: 12_340,
            impressions: 67_800,
        },
    ]
}

/// Discount campaigns
pub fn promotions() -> Vec<Promotion> {
    vec![
        Promotion {
            id: 1,
            name: text("Primeira Compra"),
            kind: text("Desconto"),
            discount: text("30%"),
            code: text("FIRST30"),
            status: text("Ativo"),
            start_date: text("2024-01-01"),
            end_date: text("2024-12-31"),
            usage_limit: 1000,
            used_count: 456,
            restaurants: text("Todos"),
        },
        Promotion {
            id: 2,
            name: text("Frete Grátis Sexta"),
            kind: text("Frete Grátis"),
            discount: text("100% frete"),
            code: text("FRETEFRIDAY"),
            status: text("Ativo"),
            start_date: text("2024-02-01"),
            end_date: text("2024-02-29"),
            usage_limit: 500,
            used_count: 234,
            restaurants: text("Selecionados"),
        },
        Promotion {
            id: 3,
            name: text("Combo Pizza"),
            kind: text("Cashback"),
            discount: text("R$ 10"),
            code: text("PIZZABACK"),
            status: text("Pausado"),
            start_date: text("2024-01-15"),
            end_date: text("2024-03-15"),
            usage_limit: 200,
            used_count: 89,
            restaurants: text("Pizzarias"),
        },
    ]
}

/// Platform money movements
pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: text("1"),
            kind: text("Comissão Pedido"),
            order_id: text("#ORD-1847"),
            restaurant: text("Burger King Centro"),
            amount: Some(4.5),
            status: text("Processado"),
            date: text("2024-02-15 14:30"),
            payment_method: text("PIX"),
        },
        Transaction {
            id: text("2"),
            kind: text("Taxa Entrega"),
            order_id: text("#ORD-1846"),
            restaurant: text("Pizzaria Bella"),
            amount: Some(6.9),
            status: text("Pendente"),
            date: text("2024-02-15 14:15"),
            payment_method: text("Cartão"),
        },
        Transaction {
            id: text("3"),
            kind: text("Publicidade"),
            order_id: text("#AD-234"),
            restaurant: text("Sushi House"),
            amount: Some(125.0),
            status: text("Processado"),
            date: text("2024-02-15 13:45"),
            payment_method: text("Transferência"),
        },
    ]
}

/// Console operators
pub fn admins() -> Vec<Admin> {
    vec![
        Admin {
            id: 1,
            name: text("Carlos Admin"),
            email: text("carlos@deliveryapp.com"),
            role: text("Super Admin"),
            status: text("Ativo"),
            last_login: text("2024-02-15 09:30"),
            created_at: text("2023-01-10"),
            permissions: vec![text("Todos os módulos")],
        },
        Admin {
            id: 2,
            name: text("Ana Gerente"),
            email: text("ana@deliveryapp.com"),
            role: text("Gerente"),
            status: text("Ativo"),
            last_login: text("2024-02-15 08:45"),
            created_at: text("2023-03-15"),
            permissions: vec![text("Pedidos"), text("Restaurantes"), text("Relatórios")],
        },
        Admin {
            id: 3,
            name: text("Pedro Suporte"),
            email: text("pedro@deliveryapp.com"),
            role: text("Suporte"),
            status: text("Inativo"),
            last_login: text("2024-02-10 16:20"),
            created_at: text("2023-06-20"),
            permissions: vec![text("Pedidos"), text("Usuários")],
        },
    ]
}

/// Revenue of the last seven days, in thousands, Monday first
pub const WEEK_REVENUE: [(&str, u32); 7] = [
    ("Seg", 45),
    ("Ter", 52),
    ("Qua", 48),
    ("Qui", 61),
    ("Sex", 55),
    ("Sáb", 67),
    ("Dom", 58),
];
