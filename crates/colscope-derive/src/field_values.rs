use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields};

// derive_field_values
// column lookup by field name; Option and Vec fields go through their
// FieldValue impls (Null / List)
pub fn derive_field_values(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Error::new_spanned(
            &input.ident,
            "FieldValues can only be derived for structs with named fields",
        )
        .to_compile_error();
    };
    let Fields::Named(named) = &data.fields else {
        return Error::new_spanned(
            &data.fields,
            "FieldValues can only be derived for structs with named fields",
        )
        .to_compile_error();
    };

    let arms = named.named.iter().filter_map(|field| {
        let field_ident = field.ident.as_ref()?;
        let field_name = field_ident.to_string();

        Some(quote! {
            #field_name => Some(::colscope::traits::FieldValue::to_value(&self.#field_ident)),
        })
    });

    quote! {
        impl #impl_generics ::colscope::traits::FieldValues for #ident #ty_generics #where_clause {
            fn get_value(&self, field: &str) -> Option<::colscope::value::Value> {
                match field {
                    #(#arms)*
                    _ => None,
                }
            }
        }
    }
}
