use crate::{BuildError, ScopesConfig, generate, generate_from_path};
use syn::{ImplItem, Item, ItemImpl};

// ---- helpers -----------------------------------------------------------

fn impls(source: &str) -> Vec<ItemImpl> {
    let file = syn::parse_file(source).expect("generated code parses");

    file.items
        .into_iter()
        .filter_map(|item| match item {
            Item::Impl(item) => Some(item),
            _ => None,
        })
        .collect()
}

fn trait_name(item: &ItemImpl) -> Option<String> {
    item.trait_
        .as_ref()
        .and_then(|(_, path, _)| path.segments.last())
        .map(|segment| segment.ident.to_string())
}

fn inherent_fns(items: &[ItemImpl]) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.trait_.is_none())
        .flat_map(|item| item.items.iter())
        .filter_map(|item| match item {
            ImplItem::Fn(f) => Some(f.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

const LISTING: &str = r#"
[models."crate::shop::Listing"]
scopes = ["for_seller_id", "for_status"]
"#;

// ---- tests -------------------------------------------------------------

#[test]
fn emits_target_functions_and_table() {
    let config = ScopesConfig::from_toml_str(LISTING).expect("valid toml");
    let source = generate(&config).expect("valid scopes");
    let items = impls(&source);

    let traits: Vec<_> = items.iter().filter_map(trait_name).collect();
    assert_eq!(traits, vec!["ScopeTarget", "ScopedTarget"]);
    assert_eq!(inherent_fns(&items), vec!["for_seller_id", "for_status"]);

    // the entity path is the config key, and each body names its column
    assert!(source.contains("\"crate::shop::Listing\""));
    assert!(source.contains("\"seller_id\""));
    assert!(source.contains("\"status\""));
}

#[test]
fn custom_target_skips_scope_target_impl() {
    let config = ScopesConfig::from_toml_str(
        r#"
        [models.Listing]
        scopes = ["for_status"]
        custom_target = true
        "#,
    )
    .expect("valid toml");
    let items = impls(&generate(&config).expect("valid scopes"));

    let traits: Vec<_> = items.iter().filter_map(trait_name).collect();
    assert_eq!(traits, vec!["ScopedTarget"]);
}

#[test]
fn model_prefix_overrides_file_prefix() {
    let config = ScopesConfig::from_toml_str(
        r#"
        prefix = "by_"

        [models.Account]
        scopes = ["by_owner"]

        [models.Order]
        prefix = "for_"
        scopes = ["for_account_id"]
        "#,
    )
    .expect("valid toml");
    let items = impls(&generate(&config).expect("valid scopes"));

    assert_eq!(inherent_fns(&items), vec!["by_owner", "for_account_id"]);
}

#[test]
fn empty_scope_list_emits_empty_impl() {
    let config = ScopesConfig::from_toml_str(
        r#"
        [models.Listing]
        scopes = []
        "#,
    )
    .expect("valid toml");
    let items = impls(&generate(&config).expect("empty is valid"));

    assert!(inherent_fns(&items).is_empty());
}

#[test]
fn bad_scope_names_fail_with_model_context() {
    let config = ScopesConfig::from_toml_str(
        r#"
        [models.Listing]
        scopes = ["seller_id", "for_status", "status"]
        "#,
    )
    .expect("valid toml");

    let err = generate(&config).expect_err("unprefixed scopes");
    let BuildError::Scope { model, source } = &err else {
        panic!("expected scope error, got {err:?}");
    };
    assert_eq!(model, "Listing");
    assert_eq!(source.bad_scopes().len(), 2);
    assert!(err.to_string().starts_with("model `Listing`: invalid scope configuration"));
}

#[test]
fn non_identifier_scope_is_a_codegen_error() {
    let config = ScopesConfig::from_toml_str(
        r#"
        [models.Listing]
        scopes = ["for_seller-id"]
        "#,
    )
    .expect("valid toml");

    let err = generate(&config).expect_err("dash is not an identifier");
    assert!(matches!(err, BuildError::Codegen { .. }));
    assert!(err.to_string().contains("`for_seller-id` is not a valid Rust identifier"));
}

#[test]
fn invalid_model_path_is_rejected() {
    let config = ScopesConfig::from_toml_str(
        r#"
        [models."not a path"]
        scopes = ["for_id"]
        "#,
    )
    .expect("valid toml");

    assert!(matches!(
        generate(&config),
        Err(BuildError::InvalidModelPath { model }) if model == "not a path"
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ScopesConfig::from_toml_str(
        r#"
        [models.Listing]
        scope = ["for_id"]
        "#,
    )
    .expect_err("typo in key");

    assert!(matches!(err, BuildError::Toml(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = generate_from_path("does/not/exist.toml").expect_err("no such file");

    assert!(matches!(err, BuildError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.toml"));
}
