//! The products table's record shape.

use shopdeck_listing::{Number, Tabular, Value};

/// A catalog product as the admin products screen sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalog id, e.g. `PRD-001`.
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Image paths, first one is the thumbnail.
    pub images: Vec<String>,
    pub stock: u32,
    pub category1: String,
    pub category2: String,
    pub page_type: PageType,
    /// Informational content pages shown on the product detail view.
    pub pages: Vec<InfoPage>,
}

/// Whether the product page is a single layout or grouped sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    Simple,
    Grouped,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            PageType::Simple => "simple",
            PageType::Grouped => "grouped",
        }
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One titled content block on a product page.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPage {
    pub title: String,
    pub content: String,
}

impl Tabular for Product {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "price",
        "stock",
        "category1",
        "category2",
        "pageType",
    ];

    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "id" => Value::Str(&self.id),
            "name" => Value::Str(&self.name),
            "price" => Value::Number(Number::F64(self.price)),
            "stock" => Value::Number(Number::U64(self.stock as u64)),
            "category1" => Value::Str(&self.category1),
            "category2" => Value::Str(&self.category2),
            "pageType" => Value::Str(self.page_type.as_str()),
            _ => Value::None,
        }
    }
}

impl Product {
    /// Out-of-stock marker for the table's stock badge.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Low-stock warning threshold used by the table's stock badge.
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock < 20
    }
}
