//! Sign-up form scenarios
//!
//! A typed record with a field enum, validated by a mix of plain rules,
//! inverted rules and relaxed rules.

use std::sync::Arc;
use std::thread;

use tidemark::prelude::*;
use tidemark::{assert_alerts, assert_clean};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum UserField {
    UserId,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    user_id: String,
    password: String,
    confirm_password: String,
}

impl User {
    fn new(user_id: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }
}

impl Record for User {
    type Field = UserField;

    fn fields(&self) -> Vec<UserField> {
        vec![
            UserField::UserId,
            UserField::Password,
            UserField::ConfirmPassword,
        ]
    }
}

type UserVerdict = Verdict<UserField, Severity>;

fn required_user_id(user: &User) -> UserVerdict {
    Verdict::ensure(!user.user_id.is_empty(), || {
        Alert::on(Severity::Danger, "required", UserField::UserId)
    })
}

fn missing_password(user: &User) -> Option<Alert<UserField, Severity>> {
    user.password
        .is_empty()
        .then(|| Alert::on(Severity::Danger, "required", UserField::Password))
}

fn not_confirmed_password(user: &User) -> UserVerdict {
    let ok = user.password.is_empty() || user.password == user.confirm_password;
    Verdict::ensure(ok, || {
        Alert::new(
            Severity::Danger,
            "not-confirm-pass",
            nonempty![UserField::Password, UserField::ConfirmPassword],
        )
    })
}

fn too_short_password(user: &User) -> UserVerdict {
    let ok = user.password.is_empty() || user.password.len() > 8;
    Verdict::ensure(ok, || {
        Alert::on(Severity::Warning, "too-short-password", UserField::Password)
    })
}

fn definer() -> ValidationDefiner<Severity> {
    ValidationDefiner::declare([Severity::Danger, Severity::Warning, Severity::Info]).unwrap()
}

fn base_validator() -> Validator<User, Severity> {
    definer().define(rules![
        required_user_id,
        invert(missing_password),
        not_confirmed_password,
    ])
}

#[test]
fn test_alert_on_one_field() {
    let result = base_validator()
        .validate(&User::new("", "abc", "abc"))
        .unwrap();

    assert_alerts!(result, UserField::UserId, Severity::Danger, ["required"]);
    assert_alerts!(result, UserField::UserId, Severity::Warning, []);
    assert_alerts!(result, UserField::UserId, Severity::Info, []);

    for field in [UserField::Password, UserField::ConfirmPassword] {
        for variant in Severity::ALL {
            assert_alerts!(result, field, variant, []);
        }
    }
}

#[test]
fn test_alert_over_multiple_fields() {
    let result = base_validator()
        .validate(&User::new("xxx", "abc", "abd"))
        .unwrap();

    for variant in Severity::ALL {
        assert_alerts!(result, UserField::UserId, variant, []);
    }
    assert_alerts!(result, UserField::Password, Severity::Danger, ["not-confirm-pass"]);
    assert_alerts!(result, UserField::Password, Severity::Warning, []);
    assert_alerts!(result, UserField::ConfirmPassword, Severity::Danger, ["not-confirm-pass"]);
    assert_alerts!(result, UserField::ConfirmPassword, Severity::Info, []);
}

#[test]
fn test_inverted_rule_reports_missing_password() {
    let result = base_validator().validate(&User::new("xxx", "", "")).unwrap();

    assert_alerts!(result, UserField::Password, Severity::Danger, ["required"]);
    assert_alerts!(result, UserField::ConfirmPassword, Severity::Danger, []);
}

#[test]
fn test_or_condition_relaxes_rule() {
    let generate_random_user_id = true;
    let when_generated = or_relax(generate_random_user_id);

    let strict = base_validator();
    let relaxed = definer().define(rules![
        when_generated.apply(required_user_id),
        invert(missing_password),
        not_confirmed_password,
    ]);

    let user = User::new("", "abc", "abc");

    let strict_result = strict.validate(&user).unwrap();
    assert_alerts!(strict_result, UserField::UserId, Severity::Danger, ["required"]);

    let relaxed_result = relaxed.validate(&user).unwrap();
    assert_clean!(relaxed_result);
}

#[test]
fn test_detection_of_all_alerts() {
    let validator = definer().define(rules![
        required_user_id,
        invert(missing_password),
        not_confirmed_password,
        too_short_password,
    ]);

    let mut alerts = Vec::new();
    let result = validator
        .validate_with(&User::new("", "abc", "ab"), |alert| alerts.push(alert.clone()))
        .unwrap();

    assert_alerts!(result, UserField::UserId, Severity::Danger, ["required"]);
    assert_alerts!(result, UserField::UserId, Severity::Warning, []);
    assert_alerts!(result, UserField::Password, Severity::Danger, ["not-confirm-pass"]);
    assert_alerts!(result, UserField::Password, Severity::Warning, ["too-short-password"]);
    assert_alerts!(result, UserField::Password, Severity::Info, []);
    assert_alerts!(result, UserField::ConfirmPassword, Severity::Danger, ["not-confirm-pass"]);
    assert_alerts!(result, UserField::ConfirmPassword, Severity::Warning, []);

    assert_eq!(
        alerts,
        vec![
            Alert::on(Severity::Danger, "required", UserField::UserId),
            Alert::new(
                Severity::Danger,
                "not-confirm-pass",
                nonempty![UserField::Password, UserField::ConfirmPassword],
            ),
            Alert::on(Severity::Warning, "too-short-password", UserField::Password),
        ]
    );
}

#[test]
fn test_same_name_from_two_rules_collapses() {
    let validator = definer().define(rules![required_user_id, required_user_id]);

    let mut observed = 0;
    let result = validator
        .validate_with(&User::new("", "abcdefghij", "abcdefghij"), |_| observed += 1)
        .unwrap();

    assert_eq!(observed, 2);
    assert_alerts!(result, UserField::UserId, Severity::Danger, ["required"]);
    assert_eq!(result.alert_count(), 1);
}

#[test]
fn test_validation_is_repeatable() {
    let validator = base_validator();
    let user = User::new("", "abc", "xyz");

    let first = validator.validate(&user).unwrap();
    let second = validator.validate(&user).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_partial_variant_declaration() {
    let danger_only = ValidationDefiner::declare([Severity::Danger])
        .unwrap()
        .define(rules![required_user_id]);

    let result = danger_only.validate(&User::new("", "", "")).unwrap();
    assert_alerts!(result, UserField::UserId, Severity::Danger, ["required"]);
    assert!(result.names(&UserField::UserId, &Severity::Warning).is_none());

    let warns = ValidationDefiner::declare([Severity::Danger])
        .unwrap()
        .define(rules![too_short_password]);
    let err = warns.validate(&User::new("a", "abc", "abc")).unwrap_err();
    assert!(matches!(err, ValidateError::UnknownVariant { .. }));
}

#[test]
fn test_rule_map_binding() {
    let map = RuleMap::<User, Severity>::new()
        .with(UserField::UserId, required_user_id)
        .with(UserField::Password, too_short_password);

    let validator = definer().define_map(map).unwrap();
    let result = validator.validate(&User::new("", "abc", "abc")).unwrap();

    assert_alerts!(result, UserField::UserId, Severity::Danger, ["required"]);
    assert_alerts!(result, UserField::Password, Severity::Warning, ["too-short-password"]);
}

#[test]
fn test_merging_results_of_two_validators() {
    let user = User::new("", "abc", "abd");

    let identity = definer().define(rules![required_user_id]);
    let security = definer().define(rules![not_confirmed_password, too_short_password]);

    let merged = identity
        .validate(&user)
        .unwrap()
        .combine(security.validate(&user).unwrap());

    let combined = definer()
        .define(rules![
            required_user_id,
            not_confirmed_password,
            too_short_password
        ])
        .validate(&user)
        .unwrap();

    assert_eq!(merged, combined);
}

#[test]
fn test_validator_shared_across_threads() {
    let validator = Arc::new(base_validator());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                let user_id = if i % 2 == 0 { "" } else { "someone" };
                let result = validator.validate(&User::new(user_id, "abc", "abc")).unwrap();
                result.contains(&UserField::UserId, &Severity::Danger, "required")
            })
        })
        .collect();

    let flags: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(flags, vec![true, false, true, false]);
}
