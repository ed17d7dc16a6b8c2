use crate::domain::errors::DomainError;

const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_ENQUIRY_SLUG: &str = "enquiries_slug_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_PRODUCT_CREATOR: &str = "products_created_by_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PRODUCT_SLUG => DomainError::SlugTaken("product slug already exists".into()),
                    CNT_CATEGORY_SLUG => {
                        DomainError::SlugTaken("category slug already exists".into())
                    }
                    CNT_ENQUIRY_SLUG => {
                        DomainError::SlugTaken("enquiry reference already exists".into())
                    }
                    CNT_CATEGORY_NAME => DomainError::Conflict("category name already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_PRODUCT_CREATOR => DomainError::NotFound("creator not found".into()),
                    other if db_err.is_check_violation() => {
                        DomainError::Validation(format!("check constraint violated: {other}"))
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    "22003" => {
                        return DomainError::Validation("numeric value out of range".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
