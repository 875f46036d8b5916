use proc_macro::TokenStream;

mod field_values;
mod scopes;

/// Attach equality scopes to a model.
///
/// ```ignore
/// #[derive(Scopes)]
/// #[scopes(names(for_user_id, for_seller_id))]
/// struct Monkey { .. }
/// ```
#[proc_macro_derive(Scopes, attributes(scopes))]
pub fn derive_scopes(input: TokenStream) -> TokenStream {
    scopes::derive_scopes(input.into()).into()
}

#[proc_macro_derive(FieldValues)]
pub fn derive_field_values(input: TokenStream) -> TokenStream {
    field_values::derive_field_values(input.into()).into()
}
