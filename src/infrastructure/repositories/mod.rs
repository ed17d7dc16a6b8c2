// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_enquiry;
mod postgres_product;
mod postgres_testimonial;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_enquiry::PostgresEnquiryRepository;
pub use postgres_product::PostgresProductRepository;
pub use postgres_testimonial::PostgresTestimonialRepository;
pub use postgres_user::PostgresUserRepository;

use crate::application::services::Repositories;
use sqlx::PgPool;
use std::sync::Arc;

/// Postgres-backed adapters for every aggregate, sharing one pool.
pub fn postgres_repositories(pool: &PgPool) -> Repositories {
    let products = Arc::new(PostgresProductRepository::new(pool.clone()));
    let categories = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let enquiries = Arc::new(PostgresEnquiryRepository::new(pool.clone()));

    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        product_writes: products.clone(),
        product_reads: products,
        category_writes: categories.clone(),
        category_reads: categories,
        enquiry_writes: enquiries.clone(),
        enquiry_reads: enquiries,
        testimonials: Arc::new(PostgresTestimonialRepository::new(pool.clone())),
    }
}
