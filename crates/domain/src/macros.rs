//! Macro for implementing Display and FromStr for code-like domain enums
//!
//! Negotiation types and installment frequencies travel as short lowercase
//! codes (`pif`, `installment`, `monthly`, ...). This macro gives an enum a
//! single table of variant/code pairs and derives both directions from it.
//!
//! # Example
//!
//! ```rust
//! use younegotiate_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ConsumerStatus {
//!     Uploaded,
//!     Joined,
//!     PaymentSetup,
//!     Settled,
//! }
//!
//! impl_domain_status_conversions!(ConsumerStatus {
//!     Uploaded => "uploaded",
//!     Joined => "joined",
//!     PaymentSetup => "payment_setup",
//!     Settled => "settled",
//! });
//!
//! assert_eq!(ConsumerStatus::PaymentSetup.to_string(), "payment_setup");
//! assert_eq!("JOINED".parse::<ConsumerStatus>(), Ok(ConsumerStatus::Joined));
//! ```

/// Implements Display and FromStr traits for code-like enums
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase codes
///
/// Parsing is case-insensitive; display always emits the lowercase code.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
