use std::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use serde::{Deserialize, Serialize};

use super::model::{Product, ProductId};

/// Fixed number of products per rendered page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Price,
    Quantity,
    Brand,
    Category,
}

impl SortKey {
    fn is_numeric(self) -> bool {
        matches!(self, SortKey::Price | SortKey::Quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Derived view state for the product table. Never persisted; owned by
/// whoever drives the view and handed to [`project`] by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    query: String,
    sort: Option<(SortKey, SortDirection)>,
    page: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<(SortKey, SortDirection)> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Changing the filter always brings the view back to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Selecting the key already in use flips the direction; selecting a
    /// new key resets to ascending. The page is left where it was.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == key => {
                Some((key, SortDirection::Descending))
            }
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    pub fn set_sort(&mut self, sort: Option<(SortKey, SortDirection)>) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// The exact slice to render plus the figures the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPage {
    pub items: Vec<Product>,
    /// Page actually shown, clamped to `[1, total_pages]`.
    pub page: usize,
    pub total_pages: usize,
}

fn matches_query(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    product.name.to_lowercase().contains(&query)
        || product.brand.to_lowercase().contains(&query)
        || product.category.to_lowercase().contains(&query)
}

/// Portuguese collator shared by every text sort. Secondary strength
/// keeps the comparison case-insensitive while accents still order
/// the way a pt-BR reader expects ("Água" before "Zebra").
fn collator() -> Option<&'static Collator> {
    static COLLATOR: OnceLock<Option<Collator>> = OnceLock::new();
    COLLATOR
        .get_or_init(|| {
            let mut options = CollatorOptions::new();
            options.strength = Some(Strength::Secondary);
            Collator::try_new(&locale!("pt-BR").into(), options).ok()
        })
        .as_ref()
}

fn compare_text(a: &str, b: &str) -> Ordering {
    match collator() {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    if key.is_numeric() {
        match key {
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            _ => Ordering::Equal,
        }
    } else {
        let (a, b) = match key {
            SortKey::Name => (&a.name, &b.name),
            SortKey::Brand => (&a.brand, &b.brand),
            SortKey::Category => (&a.category, &b.category),
            _ => return Ordering::Equal,
        };
        compare_text(a, b)
    }
}

/// Filter, then sort, then paginate, always in that order, recomputed
/// from the full collection on every call.
pub fn project(products: &[Product], state: &ListViewState) -> ProjectedPage {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| matches_query(p, &state.query))
        .cloned()
        .collect();

    if let Some((key, direction)) = state.sort {
        // sort_by is stable: equal keys keep their prior relative order.
        filtered.sort_by(|a, b| {
            let ordering = compare(a, b, key);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    let total_pages = filtered.len().div_ceil(PAGE_SIZE).max(1);
    let page = state.page.clamp(1, total_pages);

    let start = (page - 1) * PAGE_SIZE;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect();

    ProjectedPage {
        items,
        page,
        total_pages,
    }
}

/// The ids a "select all" toggle acts over: the currently filtered set,
/// never the full collection.
pub fn visible_ids(products: &[Product], query: &str) -> Vec<ProductId> {
    products
        .iter()
        .filter(|p| matches_query(p, query))
        .map(|p| p.id.clone())
        .collect()
}
