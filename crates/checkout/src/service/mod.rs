mod checkout;

pub use self::checkout::{CheckoutService, CheckoutServiceDeps};
