//! # tidemark
//!
//! Declarative record validation that reports *every* problem at once.
//!
//! A validator runs a list of independent rules against a record and collects
//! each violated rule's name, grouped by the field(s) it implicates and by a
//! severity classification ("variant"), instead of stopping at the first
//! failure. The result is ready to drive a form UI: every field is present,
//! and every field lists its alerts per variant.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tidemark::{rules, rule::invert, Alert, Severity, ValidationDefiner, Verdict};
//!
//! type SignUp = HashMap<&'static str, String>;
//!
//! fn value<'a>(form: &'a SignUp, field: &str) -> &'a str {
//!     form.get(field).map(String::as_str).unwrap_or_default()
//! }
//!
//! fn required_user_id(form: &SignUp) -> Verdict<&'static str, Severity> {
//!     Verdict::ensure(!value(form, "user_id").is_empty(), || {
//!         Alert::on(Severity::Danger, "required", "user_id")
//!     })
//! }
//!
//! fn passwords_match(form: &SignUp) -> Verdict<&'static str, Severity> {
//!     Verdict::ensure(value(form, "password") == value(form, "confirm"), || {
//!         Alert::new(
//!             Severity::Danger,
//!             "not-confirm-pass",
//!             tidemark::nonempty!["password", "confirm"],
//!         )
//!     })
//! }
//!
//! let define = ValidationDefiner::declare(Severity::ALL).unwrap();
//! let validate = define.define(rules![
//!     required_user_id,
//!     passwords_match,
//!     // "fails when the password is short", without double negation
//!     invert(|form: &SignUp| -> Option<Alert<&'static str, Severity>> {
//!         (value(form, "password").len() <= 8)
//!             .then(|| Alert::on(Severity::Warning, "too-short-password", "password"))
//!     }),
//! ]);
//!
//! let form: SignUp = [
//!     ("user_id", String::new()),
//!     ("password", "abc".to_string()),
//!     ("confirm", "ab".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let result = validate.validate(&form).unwrap();
//! assert!(result[&"user_id"][&Severity::Danger].contains("required"));
//! assert!(result[&"confirm"][&Severity::Danger].contains("not-confirm-pass"));
//! assert!(result[&"password"][&Severity::Warning].contains("too-short-password"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: log detected alerts and contract violations through `tracing`.
//! - `serde`: `Serialize` for alerts, severities and results.
//! - `proptest`: `Arbitrary` for [`Severity`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod alert;
pub mod definer;
pub mod error;
pub mod nonempty;
pub mod record;
pub mod result;
pub mod rule;
pub mod semigroup;
pub mod severity;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use alert::{Alert, Verdict};
pub use definer::{ValidationDefiner, Validator};
pub use error::{DefineError, RuleError, ValidateError};
pub use nonempty::NonEmptyVec;
pub use record::Record;
pub use result::{AlertSets, ValidationResult};
pub use rule::{Invalidator, Rule, RuleExt, RuleMap};
pub use semigroup::Semigroup;
pub use severity::Severity;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::alert::{Alert, Verdict};
    pub use crate::definer::{ValidationDefiner, Validator};
    pub use crate::error::{DefineError, ValidateError};
    pub use crate::record::Record;
    pub use crate::result::ValidationResult;
    pub use crate::rule::{invert, or_relax, try_rule, Invalidator, Rule, RuleExt, RuleMap};
    pub use crate::semigroup::Semigroup;
    pub use crate::severity::Severity;
    pub use crate::{nonempty, rules};
}
