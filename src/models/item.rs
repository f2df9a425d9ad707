use serde::{Deserialize, Serialize};
use crate::utils::constants::DEFAULT_PAGE_SIZE;

pub type ItemId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[serde(alias = "available", alias = "pending")]
    Active,
    Sold,
    Donated,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Sold => "sold",
            ItemStatus::Donated => "donated",
        }
    }
}

/// Listado (chatarra, obra de arte...) tal como lo devuelve /items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub price: u64,
    pub status: ItemStatus,
    #[serde(default)]
    pub seller_name: String,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub green_coins_reward: u32,
    /// Emoji usado como miniatura cuando no hay imagen
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub sold_at: Option<String>,
    #[serde(default)]
    pub waste_used_kg: Option<f32>,
    #[serde(default)]
    pub medium: Option<String>,
}

fn default_category() -> String {
    "other".to_string()
}

impl Item {
    pub fn category_emoji(&self) -> &'static str {
        match self.category.as_str() {
            "metal" => "🔩",
            "plastic" => "🧴",
            "e-waste" => "💡",
            "wood" => "🌲",
            "glass" => "🪟",
            "paper" => "📄",
            "textile" => "🧵",
            "ceramic" => "🏺",
            "artwork" => "🎨",
            _ => "📦",
        }
    }

    pub fn thumbnail(&self) -> String {
        self.image
            .clone()
            .unwrap_or_else(|| self.category_emoji().to_string())
    }
}

/// Filtros de GET /items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
    pub limit: u32,
    pub page: u32,
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            category: None,
            status: None,
            limit: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

impl ItemFilter {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Parámetros de query para el backend REST
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs.push(("limit", self.limit.to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs
    }
}

/// Una página de resultados
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub total: usize,
    pub pages: u32,
}

impl ItemPage {
    /// Cortar `all` según `limit`/`page`; `pages` nunca es 0
    pub fn paginate(all: Vec<Item>, limit: u32, page: u32) -> Self {
        let limit = limit.max(1) as usize;
        let page = page.max(1) as usize;
        let total = all.len();
        let pages = total.div_ceil(limit).max(1) as u32;
        let items = all.into_iter().skip((page - 1) * limit).take(limit).collect();
        Self { items, total, pages }
    }
}

/// Datos para crear un listado nuevo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    pub category: String,
    pub price: u64,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub waste_used_kg: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId) -> Item {
        Item {
            id,
            title: format!("Item {}", id),
            category: "metal".into(),
            price: 10,
            status: ItemStatus::Active,
            seller_name: "Ravi K.".into(),
            views: 0,
            green_coins_reward: 0,
            image: None,
            image_url: None,
            buyer_name: None,
            sold_at: None,
            waste_used_kg: None,
            medium: None,
        }
    }

    #[test]
    fn paginate_counts_pages_and_slices() {
        let all: Vec<Item> = (1..=5).map(item).collect();
        let page = ItemPage::paginate(all, 2, 3);
        assert_eq!(page.total, 5);
        assert_eq!(page.pages, 3);
        assert_eq!(page.items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let page = ItemPage::paginate(Vec::new(), 24, 1);
        assert_eq!(page.pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn legacy_statuses_are_accepted() {
        let status: ItemStatus = serde_json::from_str("\"available\"").unwrap();
        assert_eq!(status, ItemStatus::Active);
    }

    #[test]
    fn filter_query_pairs() {
        let filter = ItemFilter::default().category("artwork").status(ItemStatus::Active).limit(48);
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("category", "artwork".to_string()),
                ("status", "active".to_string()),
                ("limit", "48".to_string()),
                ("page", "1".to_string()),
            ]
        );
    }

    #[test]
    fn thumbnail_falls_back_to_category_emoji() {
        assert_eq!(item(1).thumbnail(), "🔩");
    }
}
