//! Ready-made severity variants
//!
//! Any `Clone + Eq + Hash + Debug` type can serve as a variant. [`Severity`]
//! covers the common danger / warning / info split.
//!
//! ```
//! use tidemark::{Severity, ValidationDefiner};
//!
//! let definer = ValidationDefiner::declare(Severity::ALL).unwrap();
//! assert_eq!(definer.variants(), &Severity::ALL);
//! ```

use std::fmt;

/// Three-level severity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Blocks submission.
    Danger,
    /// Worth surfacing, does not block.
    Warning,
    /// Informational hint.
    Info,
}

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Severity; 3] = [Severity::Danger, Severity::Warning, Severity::Info];

    /// Lower-case label, e.g. `"danger"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for Severity {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        prop_oneof![
            Just(Severity::Danger),
            Just(Severity::Warning),
            Just(Severity::Info),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_label() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string(), severity.as_str());
        }
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_ordering_most_severe_first() {
        assert!(Severity::Danger < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_severity_is_declared(severity in any::<Severity>()) {
                prop_assert!(Severity::ALL.contains(&severity));
            }
        }
    }
}
