// src/application/ports/util.rs
use chrono::{DateTime, Utc};

/// Produces opaque enquiry references such as `enq-m1x2k3l4-a9z0q`.
pub trait ReferenceGenerator: Send + Sync {
    fn generate(&self, now: DateTime<Utc>) -> String;
}
