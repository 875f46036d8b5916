//! Fixture models for derive and build-step scope tests.
//!
//! `zoo` models use `#[derive(Scopes)]`; `shop` models get their scopes from
//! `scopes.toml` through `build.rs` and `include_scopes!`.

pub mod zoo {
    use colscope::prelude::*;

    #[derive(Clone, Debug, FieldValues, PartialEq, Scopes)]
    #[scopes(names(for_user_id, for_seller_id))]
    pub struct Monkey {
        pub id: u64,
        pub user_id: u64,
        pub seller_id: Option<u64>,
        pub name: String,
    }

    ///
    /// Keeper
    /// Custom prefix and a hand-written query entry point.
    ///

    #[derive(Clone, Debug, FieldValues, PartialEq, Scopes)]
    #[scopes(names(by_enclosure, by_shift), prefix = "by_", custom_target)]
    pub struct Keeper {
        pub id: u64,
        pub enclosure: String,
        pub shift: u8,
        pub active: bool,
    }

    impl ScopeTarget for Keeper {
        const PATH: &'static str = "zoo::Keeper";

        fn query() -> Query<Self> {
            Query::new().filter(FieldRef::new("active").eq(true))
        }
    }

    ///
    /// LegacyScopes
    /// Older hand-written scopes that predate the derive.
    ///

    pub trait LegacyScopes: Sized {
        fn for_user_id(value: u64) -> Query<Self>;
    }

    impl LegacyScopes for Monkey {
        fn for_user_id(value: u64) -> Query<Self> {
            Query::new().filter(FieldRef::new("id").eq(value))
        }
    }
}

pub mod shop {
    use colscope::prelude::*;

    #[derive(Clone, Debug, FieldValues, PartialEq)]
    pub struct Listing {
        pub id: u64,
        pub seller_id: u64,
        pub status: String,
    }

    #[derive(Clone, Debug, FieldValues, PartialEq)]
    pub struct Order {
        pub id: u64,
        pub listing_id: u64,
    }

    impl ScopeTarget for Order {
        const PATH: &'static str = "shop::Order";

        fn query() -> Query<Self> {
            Query::new().limit(100)
        }
    }
}

colscope::include_scopes!();
