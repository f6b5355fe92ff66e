// Payment gateway module
// Narrow interface over the external payment provider

pub mod gateway;

pub use gateway::{PaymentError, PaymentGateway, StripeGateway};
