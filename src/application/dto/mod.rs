pub mod auth;
pub mod categories;
pub mod enquiries;
pub mod products;
pub mod testimonials;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::CategoryDto;
pub use enquiries::{EnquiryDto, EnquiryItemDto};
pub use products::ProductDto;
pub use testimonials::TestimonialDto;
pub use users::{CapabilityView, UserDto, UserProfileDto};
