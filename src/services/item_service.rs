use crate::errors::StoreError;
use crate::state::items::ItemStore;
use crate::state::price::Dollars;

/// Query parameters accepted by the item endpoints.
///
/// Both fields are optional at the transport level; each operation decides
/// which ones it requires.
#[derive(Debug, Clone, Default)]
pub struct ItemParams {
    pub item: Option<String>,
    pub price: Option<String>,
}

/// Builds params from decoded query pairs. When a key repeats, the first
/// value wins and later ones are ignored.
impl From<Vec<(String, String)>> for ItemParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut params = ItemParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "item" => &mut params.item,
                "price" => &mut params.price,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl ItemParams {
    fn item(&self) -> Result<&str, StoreError> {
        self.item
            .as_deref()
            .ok_or(StoreError::MissingParameter("item"))
    }

    /// A missing price is the empty string, which never parses.
    fn price(&self) -> Result<Dollars, StoreError> {
        self.price.as_deref().unwrap_or_default().parse()
    }
}

/// All items, sorted by name.
pub fn list(store: &ItemStore) -> Vec<(String, Dollars)> {
    store.list()
}

/// Look up the price of `params.item`.
pub fn price(store: &ItemStore, params: &ItemParams) -> Result<Dollars, StoreError> {
    store.get(params.item()?)
}

/// Add a new item.
///
/// The price is parsed before the store is touched, so a bad price is
/// reported even when the item already exists.
pub fn create(store: &ItemStore, params: &ItemParams) -> Result<(String, Dollars), StoreError> {
    let name = params.item()?;
    let price = params.price()?;
    let created = store.create(name.to_string(), price)?;
    tracing::info!(item = %created.0, price = %created.1, "item created");
    Ok(created)
}

/// Change the price of an existing item.
pub fn update(store: &ItemStore, params: &ItemParams) -> Result<(String, Dollars), StoreError> {
    let name = params.item()?;
    let price = params.price()?;
    let updated = store.update(name.to_string(), price)?;
    tracing::info!(item = %updated.0, price = %updated.1, "item updated");
    Ok(updated)
}

/// Remove an item, returning its name.
pub fn delete(store: &ItemStore, params: &ItemParams) -> Result<String, StoreError> {
    let deleted = store.delete(params.item()?)?;
    tracing::info!(item = %deleted, "item deleted");
    Ok(deleted)
}
