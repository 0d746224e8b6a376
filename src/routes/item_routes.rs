use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};

use crate::errors::StoreError;
use crate::services::item_service::{self, ItemParams};
use crate::state::items::ItemStore;

/// Decoded query string, in order. Duplicate keys are allowed here and
/// resolved by [`ItemParams`].
type QueryPairs = Query<Vec<(String, String)>>;

/// Build the item routes. Every endpoint answers GET and POST and reads
/// its parameters from the query string.
pub fn routes(store: ItemStore) -> Router {
    Router::new()
        .route("/list", get(list_items).post(list_items))
        .route("/price", get(item_price).post(item_price))
        .route("/create", get(create_item).post(create_item))
        .route("/update", get(update_item).post(update_item))
        .route("/delete", get(delete_item).post(delete_item))
        .with_state(store)
}

//
// ─────────────────────────────────────────────────────────────
// /list
// One "name: $price" line per item
// ─────────────────────────────────────────────────────────────
//
async fn list_items(State(store): State<ItemStore>) -> String {
    item_service::list(&store)
        .into_iter()
        .map(|(name, price)| format!("{name}: {price}\n"))
        .collect()
}

//
// ─────────────────────────────────────────────────────────────
// /price?item=
// Price of one item or 404
// ─────────────────────────────────────────────────────────────
//
async fn item_price(
    State(store): State<ItemStore>,
    Query(pairs): QueryPairs,
) -> Result<String, StoreError> {
    let params = ItemParams::from(pairs);
    let price = item_service::price(&store, &params)?;
    Ok(format!("{price}\n"))
}

//
// ─────────────────────────────────────────────────────────────
// /create?item=&price=
// 400 on a bad price, 409 if the item exists
// ─────────────────────────────────────────────────────────────
//
async fn create_item(
    State(store): State<ItemStore>,
    Query(pairs): QueryPairs,
) -> Result<String, StoreError> {
    let params = ItemParams::from(pairs);
    let (name, price) = item_service::create(&store, &params)?;
    Ok(format!("created {name}: {price}\n"))
}

//
// ─────────────────────────────────────────────────────────────
// /update?item=&price=
// 400 on a bad price, 404 if the item is absent
// ─────────────────────────────────────────────────────────────
//
async fn update_item(
    State(store): State<ItemStore>,
    Query(pairs): QueryPairs,
) -> Result<String, StoreError> {
    let params = ItemParams::from(pairs);
    let (name, price) = item_service::update(&store, &params)?;
    Ok(format!("updated {name}: {price}\n"))
}

//
// ─────────────────────────────────────────────────────────────
// /delete?item=
// 404 if the item is absent
// ─────────────────────────────────────────────────────────────
//
async fn delete_item(
    State(store): State<ItemStore>,
    Query(pairs): QueryPairs,
) -> Result<String, StoreError> {
    let params = ItemParams::from(pairs);
    let name = item_service::delete(&store, &params)?;
    Ok(format!("deleted {name}\n"))
}
