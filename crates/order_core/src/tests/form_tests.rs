use super::*;

fn filled(name: &str, size: &str, toppings: &[u8]) -> OrderForm {
    let mut form = OrderForm::new();
    form.set_full_name(name);
    form.select_size(size);
    for id in toppings {
        form.toggle_topping(ToppingId(*id)).expect("catalog topping");
    }
    form
}

fn assert_gate_consistent(form: &OrderForm) {
    let expected =
        validate_full_name(&form.draft().full_name).is_ok() && form.draft().size.is_some();
    assert_eq!(form.is_submit_enabled(), expected);
}

#[test]
fn mounts_empty_with_submit_disabled_and_no_errors() {
    let form = OrderForm::new();
    assert_eq!(form.draft(), &DraftOrder::default());
    assert!(!form.is_submit_enabled());
    assert!(!form.errors().has_errors());
    assert_eq!(form.errors().full_name, FieldStatus::Untouched);
    assert!(form.confirmation().is_none());
}

#[test]
fn short_name_blocks_submit() {
    let form = filled("Al", "S", &[]);
    assert!(!form.is_submit_enabled());
    assert_eq!(
        form.errors().message(FormField::FullName).as_deref(),
        Some("full name must be at least 3 characters")
    );
    assert_eq!(form.errors().size, FieldStatus::Valid);
}

#[test]
fn placeholder_size_blocks_submit_without_name_error() {
    let form = filled("Alice Smith", "", &[]);
    assert!(!form.is_submit_enabled());
    assert_eq!(
        form.errors().message(FormField::Size).as_deref(),
        Some("size must be S or M or L")
    );
    assert_eq!(form.errors().message(FormField::FullName), None);
    assert_eq!(form.draft().size, None);
}

#[test]
fn submitting_with_two_toppings_confirms_and_resets() {
    let mut form = filled("Alice Smith", "M", &[1, 5]);
    assert!(form.is_submit_enabled());

    let order = match form.submit() {
        SubmitOutcome::Placed(order) => order,
        other => panic!("expected placed order, got {other:?}"),
    };
    assert_eq!(order.full_name, "Alice Smith");
    assert_eq!(order.size, PizzaSize::Medium);
    assert_eq!(order.topping_names(), ["Pepperoni", "Ham"]);

    assert_eq!(
        form.confirmation(),
        Some("Thank you for your order, Alice Smith! Your Medium pizza with 2 toppings is on the way.")
    );
    assert_eq!(form.draft(), &DraftOrder::default());
    assert!(!form.is_submit_enabled());
    assert!(!form.errors().has_errors());
}

#[test]
fn submitting_without_toppings_says_so() {
    let mut form = filled("Alice Smith", "L", &[]);
    assert!(form.is_submit_enabled());
    assert!(matches!(form.submit(), SubmitOutcome::Placed(_)));
    assert_eq!(
        form.confirmation(),
        Some("Thank you for your order, Alice Smith! Your Large pizza with no toppings is on the way.")
    );
}

#[test]
fn correcting_a_long_name_enables_submit() {
    let mut form = filled(&"a".repeat(21), "S", &[]);
    assert!(!form.is_submit_enabled());
    assert_eq!(
        form.errors().status(FormField::FullName),
        FieldStatus::Invalid(ValidationError::FullNameTooLong)
    );

    form.set_full_name(&"a".repeat(20));
    assert_eq!(form.errors().status(FormField::FullName), FieldStatus::Valid);
    assert!(form.is_submit_enabled());
}

#[test]
fn stores_trimmed_name() {
    let form = filled("   Alice Smith  ", "S", &[]);
    assert_eq!(form.draft().full_name, "Alice Smith");
    assert!(form.is_submit_enabled());
}

#[test]
fn whitespace_name_is_too_short() {
    let form = filled("     ", "S", &[]);
    assert_eq!(
        form.errors().status(FormField::FullName),
        FieldStatus::Invalid(ValidationError::FullNameTooShort)
    );
    assert!(!form.is_submit_enabled());
}

#[test]
fn invalid_size_code_clears_previous_size() {
    let mut form = filled("Alice Smith", "M", &[]);
    assert!(form.is_submit_enabled());
    form.select_size("XL");
    assert_eq!(form.draft().size, None);
    assert!(!form.is_submit_enabled());
}

#[test]
fn toggling_twice_restores_selection() {
    let mut form = filled("Alice Smith", "S", &[2]);
    let before = form.draft().toppings.clone();

    assert_eq!(form.toggle_topping(ToppingId(3)), Ok(true));
    assert!(form.draft().is_selected(ToppingId(3)));
    assert_eq!(form.toggle_topping(ToppingId(3)), Ok(false));
    assert_eq!(form.draft().toppings, before);

    assert_eq!(form.toggle_topping(ToppingId(2)), Ok(false));
    assert_eq!(form.toggle_topping(ToppingId(2)), Ok(true));
    assert_eq!(form.draft().toppings, before);
}

#[test]
fn toppings_never_affect_submit_gate() {
    let mut disabled = filled("Al", "S", &[]);
    let mut enabled = filled("Alice Smith", "S", &[]);
    for topping in catalog::all() {
        disabled.toggle_topping(topping.id).expect("toggle");
        enabled.toggle_topping(topping.id).expect("toggle");
        assert!(!disabled.is_submit_enabled());
        assert!(enabled.is_submit_enabled());
    }
}

#[test]
fn rejects_toppings_outside_catalog() {
    let mut form = OrderForm::new();
    assert_eq!(
        form.toggle_topping(ToppingId(42)),
        Err(OrderError::UnknownTopping(ToppingId(42)))
    );
    assert!(form.draft().toppings.is_empty());
}

#[test]
fn submit_while_disabled_is_inert() {
    let mut form = filled("Al", "", &[1]);
    let draft = form.draft().clone();
    let errors = *form.errors();

    assert_eq!(form.submit(), SubmitOutcome::Ignored);
    assert_eq!(form.draft(), &draft);
    assert_eq!(form.errors(), &errors);
    assert!(form.confirmation().is_none());
}

#[test]
fn submit_revalidates_a_stale_gate() {
    let mut form = filled("Al", "M", &[4]);
    form.submit_enabled = true;

    let errors = match form.submit() {
        SubmitOutcome::Rejected(errors) => errors,
        other => panic!("expected rejection, got {other:?}"),
    };
    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        [(FormField::FullName, ValidationError::FullNameTooShort)]
    );
    assert_eq!(form.draft().full_name, "Al");
    assert!(form.draft().is_selected(ToppingId(4)));
    assert!(!form.is_submit_enabled());
    assert!(form.confirmation().is_none());
}

#[test]
fn confirmation_stays_until_next_edit() {
    let mut form = filled("Alice Smith", "S", &[]);
    form.submit();
    assert!(form.confirmation().is_some());

    assert_eq!(form.submit(), SubmitOutcome::Ignored);
    assert!(form.confirmation().is_some());

    form.toggle_topping(ToppingId(1)).expect("toggle");
    assert!(form.confirmation().is_none());
}

#[test]
fn gate_tracks_every_transition() {
    let mut form = OrderForm::new();
    let long = "x".repeat(25);
    let names = ["", "Al", "Alice", "  Bob ", long.as_str(), "Dana Scully"];
    let sizes = ["", "S", "Q", "L", "M"];
    for name in names {
        form.set_full_name(name);
        assert_gate_consistent(&form);
        for size in sizes {
            form.select_size(size);
            assert_gate_consistent(&form);
        }
    }
}

#[test]
fn errors_report_form_keys() {
    let form = filled("", "", &[]);
    let keys: Vec<_> = form.errors().iter().map(|(field, _)| field.key()).collect();
    assert_eq!(keys, ["fullName", "size"]);
}

#[test]
fn placed_order_serializes_for_logging() {
    let mut form = filled("Alice Smith", "S", &[3]);
    let SubmitOutcome::Placed(order) = form.submit() else {
        panic!("expected placed order");
    };
    let json = serde_json::to_value(&order).expect("json");
    assert_eq!(
        json,
        serde_json::json!({ "full_name": "Alice Smith", "size": "S", "toppings": [3] })
    );
}
