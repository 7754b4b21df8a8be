//! Sample backend payloads

use serde_json::{Value, json};

/// Two restaurants, one of them inactive
pub fn restaurants_json() -> Value {
    json!([
        {"id": 1, "name": "A", "city": "São Paulo", "category": "Pizza", "status": "Ativo"},
        {"id": 2, "name": "B", "city": "Curitiba", "category": "Japonesa", "status": "Inativo"}
    ])
}

/// Orders with money values sent as strings and numbers
pub fn orders_json() -> Value {
    json!([
        {"id": 1001, "customer": "Maria Silva", "restaurant": "Pizzaria Bella",
         "value": "89.90", "status": "entregue", "time": "12:30"},
        {"id": 1002, "customer": "João Santos", "restaurant": "Sushi House",
         "value": 156.5, "status": "pendente", "time": "12:45"}
    ])
}

/// Dashboard counters as the backend sends them
pub fn dashboard_json() -> Value {
    json!({
        "ordersToday": 1847,
        "ordersTodayPercent": 12.4,
        "users": 25000,
        "usersPercent": 8.2,
        "restaurants": 342,
        "revenueToday": 45231.9,
        "revenuePercent": -3.1
    })
}
