//! Internationalization (i18n) for the three UI locales.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their labels
//! - `locale`: Validated `Locale` type
//! - `strings`: Typed message keys and one table per locale
//! - `messages`: Lookup with default-locale fallback
//! - `validator`: Startup completeness audit of the tables
//! - `context`: Request-scoped `LocaleContext` handed to the renderer
//! - `metrics`: Fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Locale, Messages};
//!
//! let korean = Locale::from_code("ko")?;
//! assert_eq!(Messages::resolve("nav.home", korean), "홈");
//! ```

mod context;
mod locale;
mod messages;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use context::LocaleContext;
pub use locale::Locale;
pub use messages::Messages;
pub use metrics::{FallbackMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::MessageKey;
pub use validator::{TranslationValidator, ValidationReport};
