use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

// ============================================================================
// #[derive(Record)]
// ============================================================================

/// Derives the `Record` trait for a struct with a named `id: Uuid` field.
///
/// The collection name defaults to the snake-cased type name with an `s`
/// appended, so `Product` persists as `"products"` and `MenuItem` as
/// `"menu_items"`.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// struct Product {
///     id: Uuid,
///     name: String,
/// }
/// ```
///
/// Override the derived name when the default pluralization is wrong:
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "inventory")]
/// struct StockEntry {
///     id: Uuid,
///     count: u32,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let mut collection: Option<String> = None;
    for attr in &input.attrs {
        if attr.path().is_ident("record") {
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("collection") {
                    let value: LitStr = meta.value()?.parse()?;
                    collection = Some(value.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `collection = \"...\"`"))
                }
            });
            if let Err(err) = parsed {
                return err.to_compile_error().into();
            }
        }
    }
    let collection = collection.unwrap_or_else(|| pluralize(&snake_case(&name.to_string())));

    if !has_named_id_field(&input.data) {
        return syn::Error::new_spanned(
            name,
            "#[derive(Record)] requires a struct with a named `id` field; implement Record by hand for enums",
        )
        .to_compile_error()
        .into();
    }

    let expanded = quote! {
        impl ::stashed_rust::Record for #name {
            const COLLECTION: &'static str = #collection;

            fn id(&self) -> ::stashed_rust::Uuid {
                self.id
            }

            fn set_id(&mut self, id: ::stashed_rust::Uuid) {
                self.id = id;
            }
        }
    };

    expanded.into()
}

fn has_named_id_field(data: &Data) -> bool {
    match data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields
                .named
                .iter()
                .any(|field| field.ident.as_ref().is_some_and(|ident| ident == "id")),
            _ => false,
        },
        _ => false,
    }
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn pluralize(name: &str) -> String {
    format!("{}s", name)
}
