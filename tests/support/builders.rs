// tests/support/builders.rs
use super::mocks::fixed_now;
use directory_core::domain::enquiry::{
    CustomerContact, Enquiry, EnquiryId, EnquiryItem, EnquiryStatus, Quantity,
};
use directory_core::domain::product::{
    Currency, Measure, Price, Product, ProductCategory, ProductId, ProductName, Stock,
};
use directory_core::domain::slug::Slug;
use rust_decimal::Decimal;

pub struct ProductBuilder {
    id: i64,
    name: String,
    slug: String,
    price: Decimal,
    category: ProductCategory,
    is_active: bool,
}

impl ProductBuilder {
    pub fn new(id: i64, slug: &str) -> Self {
        Self {
            id,
            name: slug.replace('-', " "),
            slug: slug.into(),
            price: Decimal::new(100, 0),
            category: ProductCategory::Other,
            is_active: true,
        }
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn category(mut self, category: ProductCategory) -> Self {
        self.category = category;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> Product {
        Product {
            id: ProductId::new(self.id).unwrap(),
            name: ProductName::new(self.name).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            description: None,
            category: self.category,
            weight_per_piece: Measure::new("weight_per_piece", 250.0).unwrap(),
            pieces_per_kg: Measure::new("pieces_per_kg", 4.0).unwrap(),
            price: Price::new(self.price).unwrap(),
            currency: Currency::default(),
            stock: Stock::new(10).unwrap(),
            images: Vec::new(),
            is_active: self.is_active,
            created_by: None,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

pub struct EnquiryBuilder {
    id: i64,
    slug: String,
    items: Vec<EnquiryItem>,
}

impl EnquiryBuilder {
    pub fn new(id: i64, slug: &str) -> Self {
        Self {
            id,
            slug: slug.into(),
            items: Vec::new(),
        }
    }

    /// Item as persisted by older releases: a possibly stale slug plus the product id.
    pub fn item(mut self, product_slug: Option<&str>, product_id: Option<i64>, quantity: i64) -> Self {
        self.items.push(EnquiryItem {
            product_slug: product_slug.map(str::to_string),
            product_id: product_id.map(|id| ProductId::new(id).unwrap()),
            quantity: Quantity::new(quantity).unwrap(),
        });
        self
    }

    pub fn build(self) -> Enquiry {
        Enquiry {
            id: EnquiryId::new(self.id).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            contact: CustomerContact::new("Asha", "asha@example.com", "+91 90000 00000", None)
                .unwrap(),
            items: self.items,
            message: None,
            status: EnquiryStatus::New,
            admin_notes: None,
            total_value: Decimal::ZERO,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
