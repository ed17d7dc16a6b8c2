// tests/support/mocks/repos.rs
use async_trait::async_trait;
use directory_core::domain::{
    category::{
        Category, CategoryId, CategoryName, CategoryReadRepository, CategoryUpdate,
        CategoryWriteRepository, NewCategory,
    },
    enquiry::{
        Enquiry, EnquiryId, EnquiryReadRepository, EnquiryUpdate, EnquiryWriteRepository,
        NewEnquiry,
    },
    errors::{DomainError, DomainResult},
    product::{
        NewProduct, Product, ProductCategory, ProductId, ProductReadRepository, ProductUpdate,
        ProductWriteRepository,
    },
    slug::Slug,
    testimonial::{
        NewTestimonial, Testimonial, TestimonialId, TestimonialRepository, TestimonialUpdate,
    },
    user::{Email, NewUser, User, UserId, UserRepository},
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

/* -------------------------------- users -------------------------------- */

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|user| user.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let user = User {
            id: UserId::new(rows.len() as i64 + 1)?,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|user| &user.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|user| user.id == id).cloned())
    }
}

/* -------------------------------- products -------------------------------- */

/// Enforces slug uniqueness the way the `products_slug_key` constraint does.
#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
    next_id: AtomicUsize,
    batch_loads: AtomicUsize,
}

impl InMemoryProducts {
    pub fn all(&self) -> Vec<Product> {
        self.rows.lock().unwrap().clone()
    }

    /// Number of `find_by_ids` calls served so far.
    pub fn batch_loads(&self) -> usize {
        self.batch_loads.load(Ordering::SeqCst)
    }

    /// Store a product as-is, bypassing the slug lifecycle.
    pub fn seed(&self, product: Product) {
        self.rows.lock().unwrap().push(product);
    }
}

#[async_trait]
impl ProductWriteRepository for InMemoryProducts {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let slug = product.assigned_slug()?.clone();
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.slug == slug) {
            return Err(DomainError::SlugTaken(slug.into_inner()));
        }
        let id = ProductId::new(1000 + self.next_id.fetch_add(1, Ordering::SeqCst) as i64)?;
        let created = Product {
            id,
            name: product.name,
            slug,
            description: product.description,
            category: product.category,
            weight_per_piece: product.weight_per_piece,
            pieces_per_kg: product.pieces_per_kg,
            price: product.price,
            currency: product.currency,
            stock: product.stock,
            images: product.images,
            is_active: true,
            created_by: product.created_by,
            created_at: product.created_at,
            updated_at: product.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &update.slug {
            if rows.iter().any(|row| &row.slug == slug && row.id != update.id) {
                return Err(DomainError::SlugTaken(slug.to_string()));
            }
        }
        let row = rows
            .iter_mut()
            .find(|row| row.id == update.id)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        if let Some(name) = update.name {
            row.name = name;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(description) = update.description {
            row.description = Some(description);
        }
        if let Some(category) = update.category {
            row.category = category;
        }
        if let Some(weight) = update.weight_per_piece {
            row.weight_per_piece = weight;
        }
        if let Some(pieces) = update.pieces_per_kg {
            row.pieces_per_kg = pieces;
        }
        if let Some(price) = update.price {
            row.price = price;
        }
        if let Some(currency) = update.currency {
            row.currency = currency;
        }
        if let Some(stock) = update.stock {
            row.stock = stock;
        }
        if let Some(images) = update.images {
            row.images = images;
        }
        if let Some(is_active) = update.is_active {
            row.is_active = is_active;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }
}

#[async_trait]
impl ProductReadRepository for InMemoryProducts {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| &row.slug == slug).cloned())
    }

    async fn find_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>> {
        self.batch_loads.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|row| ids.contains(&row.id)).cloned().collect())
    }

    async fn list_active(&self, category: Option<ProductCategory>) -> DomainResult<Vec<Product>> {
        let rows = self.rows.lock().unwrap();
        let mut active: Vec<Product> = rows
            .iter()
            .filter(|row| row.is_active)
            .filter(|row| category.is_none_or(|wanted| row.category == wanted))
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active)
    }
}

/* -------------------------------- categories -------------------------------- */

/// `simulated_races` makes the next inserts lose a race: a rival row takes
/// the slug just before the write, which then fails with `SlugTaken`.
#[derive(Default)]
pub struct InMemoryCategories {
    rows: Mutex<Vec<Category>>,
    next_id: AtomicUsize,
    simulated_races: AtomicU32,
    insert_attempts: AtomicU32,
}

impl InMemoryCategories {
    pub fn with_races(races: u32) -> Self {
        let repo = Self::default();
        repo.simulated_races.store(races, Ordering::SeqCst);
        repo
    }

    pub fn insert_attempts(&self) -> u32 {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    pub fn slugs(&self) -> Vec<String> {
        let rows = self.rows.lock().unwrap();
        rows.iter().map(|row| row.slug.to_string()).collect()
    }

    fn next_id(&self) -> DomainResult<CategoryId> {
        CategoryId::new(self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1)
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategories {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        let slug = category.assigned_slug()?.clone();

        if self
            .simulated_races
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
        {
            let rival = Category {
                id: self.next_id()?,
                name: CategoryName::new(format!("rival of {}", category.name))?,
                slug: slug.clone(),
                is_active: true,
                created_at: category.created_at,
                updated_at: category.created_at,
            };
            self.rows.lock().unwrap().push(rival);
            return Err(DomainError::SlugTaken(slug.into_inner()));
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.slug == slug) {
            return Err(DomainError::SlugTaken(slug.into_inner()));
        }
        if rows.iter().any(|row| row.name == category.name) {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        let created = Category {
            id: self.next_id()?,
            name: category.name,
            slug,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &update.slug {
            if rows.iter().any(|row| &row.slug == slug && row.id != update.id) {
                return Err(DomainError::SlugTaken(slug.to_string()));
            }
        }
        let row = rows
            .iter_mut()
            .find(|row| row.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(name) = update.name {
            row.name = name;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(is_active) = update.is_active {
            row.is_active = is_active;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategories {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| &row.slug == slug).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| &row.name == name).cloned())
    }

    async fn list_active(&self) -> DomainResult<Vec<Category>> {
        let rows = self.rows.lock().unwrap();
        let mut active: Vec<Category> = rows.iter().filter(|row| row.is_active).cloned().collect();
        active.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(active)
    }
}

/* -------------------------------- enquiries -------------------------------- */

/// Counts every mutating call so tests can assert that nothing was written.
#[derive(Default)]
pub struct InMemoryEnquiries {
    rows: Mutex<Vec<Enquiry>>,
    next_id: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryEnquiries {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn all(&self) -> Vec<Enquiry> {
        self.rows.lock().unwrap().clone()
    }

    /// Store an enquiry as-is, without counting it as a write.
    pub fn seed(&self, enquiry: Enquiry) {
        self.rows.lock().unwrap().push(enquiry);
    }
}

#[async_trait]
impl EnquiryWriteRepository for InMemoryEnquiries {
    async fn insert(&self, enquiry: NewEnquiry) -> DomainResult<Enquiry> {
        let slug = enquiry.assigned_slug()?.clone();
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.slug == slug) {
            return Err(DomainError::SlugTaken(slug.into_inner()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        let created = Enquiry {
            id: EnquiryId::new(self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1)?,
            slug,
            contact: enquiry.contact,
            items: enquiry.items,
            message: enquiry.message,
            status: Default::default(),
            admin_notes: None,
            total_value: enquiry.total_value,
            created_at: enquiry.created_at,
            updated_at: enquiry.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: EnquiryUpdate) -> DomainResult<Enquiry> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == update.id)
            .ok_or_else(|| DomainError::NotFound("enquiry not found".into()))?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = update.status {
            row.status = status;
        }
        if let Some(notes) = update.admin_notes {
            row.admin_notes = Some(notes);
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: EnquiryId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("enquiry not found".into()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn backfill_item_slug(
        &self,
        id: EnquiryId,
        position: usize,
        product_slug: &Slug,
    ) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let item = rows
            .iter_mut()
            .find(|row| row.id == id)
            .and_then(|row| row.items.get_mut(position))
            .ok_or_else(|| DomainError::NotFound("enquiry item not found".into()))?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        item.product_slug = Some(product_slug.to_string());
        Ok(())
    }
}

#[async_trait]
impl EnquiryReadRepository for InMemoryEnquiries {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Enquiry>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| &row.slug == slug).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Enquiry>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

/* -------------------------------- testimonials -------------------------------- */

#[derive(Default)]
pub struct InMemoryTestimonials {
    rows: Mutex<Vec<Testimonial>>,
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonials {
    async fn insert(&self, testimonial: NewTestimonial) -> DomainResult<Testimonial> {
        let mut rows = self.rows.lock().unwrap();
        let created = Testimonial {
            id: TestimonialId::new(rows.len() as i64 + 1)?,
            text: testimonial.text,
            author: testimonial.author,
            img_src: testimonial.img_src,
            is_active: true,
            order: testimonial.order,
            created_at: testimonial.created_at,
            updated_at: testimonial.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: TestimonialUpdate) -> DomainResult<Testimonial> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == update.id)
            .ok_or_else(|| DomainError::NotFound("testimonial not found".into()))?;
        if let Some(text) = update.text {
            row.text = text;
        }
        if let Some(author) = update.author {
            row.author = author;
        }
        if let Some(img_src) = update.img_src {
            row.img_src = img_src;
        }
        if let Some(is_active) = update.is_active {
            row.is_active = is_active;
        }
        if let Some(order) = update.order {
            row.order = order;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn find_by_id(&self, id: TestimonialId) -> DomainResult<Option<Testimonial>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn list_active(&self) -> DomainResult<Vec<Testimonial>> {
        let rows = self.rows.lock().unwrap();
        let mut active: Vec<Testimonial> =
            rows.iter().filter(|row| row.is_active).cloned().collect();
        active.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(active)
    }
}
