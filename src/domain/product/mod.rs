pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductUpdate};
pub use repository::{ProductReadRepository, ProductSlugOwners, ProductWriteRepository};
pub use value_objects::{
    Currency, Measure, Price, ProductCategory, ProductId, ProductImage, ProductName, Stock,
};
