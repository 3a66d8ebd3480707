mod checkout;
mod error;
mod http;
mod ingestion;
mod repository;
mod service;

pub use self::checkout::CheckoutError;
pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::ingestion::IngestionError;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
