// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for closed vocabularies of the YouTube API.
///
/// This macro can be used on fieldless enums whose variants map one-to-one to the
/// string values accepted by the API (sort orders, text formats, `part` sections...).
/// Each variant must be annotated with a `#[value(id = "...")]` attribute specifying
/// the wire value.
///
/// The macro will implement:
/// - `as_str`, `AsRef<str>` and `Display`
/// - `TryFrom<&str>` and `FromStr`, failing with `ytapi_core::Error::VariableValueError`
/// - `serde::Serialize` and `serde::Deserialize`
/// - An associated `VALUES` constant listing every wire value in declaration order.
///
/// # Errors
/// - Only enums with unit variants are supported.
/// - Each variant must have an `id` specified in the `#[value]` attribute.
/// - Ids must be unique.
///
/// # Example
/// ```
/// use ytapi_macros::ApiValue;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, ApiValue)]
/// pub enum TextFormat {
///     #[value(id = "plainText")]
///     PlainText,
///     #[value(id = "html")]
///     Html,
/// }
///
/// assert_eq!(TextFormat::PlainText.as_ref(), "plainText");
/// assert_eq!(TextFormat::VALUES, &["plainText", "html"]);
/// ```
#[proc_macro_derive(ApiValue, attributes(value))]
pub fn api_value_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match api_value_derive_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn api_value_derive_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let type_name = name.to_string();

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "ApiValue can only be derived for enums",
        ));
    };

    let variant_infos = data_enum
        .variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    &variant.fields,
                    "ApiValue variants cannot carry fields",
                ));
            }
            let id_value = extract_value_id(variant)?;
            Ok((&variant.ident, id_value))
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let mut seen = std::collections::HashSet::new();
    for (variant_name, id_value) in &variant_infos {
        if !seen.insert(id_value) {
            return Err(syn::Error::new_spanned(
                variant_name,
                "Repeated Id: value id must be unique",
            ));
        }
    }

    let as_str_arms = variant_infos.iter().map(|(variant_name, id_value)| {
        quote! {
            #name::#variant_name => #id_value,
        }
    });

    let from_str_arms = variant_infos
        .iter()
        .map(|(variant_name, id_value)| {
            quote! {
                #id_value => Ok(#name::#variant_name),
            }
        })
        .collect::<Vec<_>>();

    let valid_values = variant_infos
        .iter()
        .map(|(_, id_value)| id_value.as_str())
        .collect::<Vec<_>>();

    let expecting_message = format!("one of: {}", valid_values.join(", "));
    let invalid_message = format!(
        "Acceptable values for \"{type_name}\" are ({}), current value is {{}}.",
        valid_values.join(", ")
    );

    let expanded = quote! {
        impl ::core::convert::AsRef<str> for #name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::core::convert::AsRef::<str>::as_ref(self))
            }
        }

        impl ::core::convert::TryFrom<&str> for #name {
            type Error = ::ytapi_core::Error;
            fn try_from(value: &str) -> ::ytapi_core::Result<Self> {
                match value {
                    #(#from_str_arms)*
                    invalid => Err(::ytapi_core::Error::variable_value(format!(#invalid_message, invalid))),
                }
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = ::ytapi_core::Error;
            fn from_str(value: &str) -> ::ytapi_core::Result<Self> {
                <Self as ::core::convert::TryFrom<&str>>::try_from(value)
            }
        }

        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(::core::convert::AsRef::<str>::as_ref(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct ValueVisitor;

                impl<'de> ::serde::de::Visitor<'de> for ValueVisitor {
                    type Value = #name;

                    fn expecting(&self, formatter: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                        formatter.write_str(#expecting_message)
                    }

                    fn visit_str<E>(self, value: &str) -> ::std::result::Result<Self::Value, E>
                    where
                        E: ::serde::de::Error,
                    {
                        match value {
                            #(#from_str_arms)*
                            _ => Err(::serde::de::Error::unknown_variant(value, &[#(#valid_values),*]))
                        }
                    }
                }

                deserializer.deserialize_str(ValueVisitor)
            }
        }

        impl #name {
            /// The wire value of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    #(#as_str_arms)*
                }
            }

            /// Every accepted wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[#(#valid_values),*];
        }
    };

    Ok(expanded)
}

fn extract_value_id(variant: &syn::Variant) -> syn::Result<String> {
    use syn::{Error, Expr, Lit, Meta};

    let mut value_id = None;

    for attr in &variant.attrs {
        if !attr.path().is_ident("value") {
            continue;
        }

        let args = attr
            .parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)
            .map_err(|_| syn::Error::new_spanned(attr, "Invalid value attribute syntax"))?;

        for meta in args {
            match meta {
                Meta::NameValue(name_value) if name_value.path.is_ident("id") => {
                    let Expr::Lit(expr_lit) = &name_value.value else {
                        return Err(Error::new_spanned(
                            &name_value.value,
                            "Value id must be a string literal",
                        ));
                    };
                    let Lit::Str(lit_str) = &expr_lit.lit else {
                        return Err(Error::new_spanned(
                            &name_value.value,
                            "Value id must be a string literal",
                        ));
                    };
                    value_id = Some(lit_str.value());
                }
                Meta::NameValue(name_value) => {
                    return Err(Error::new_spanned(
                        &name_value.path,
                        "Only 'id' is supported in #[value] attribute",
                    ));
                }
                _ => {
                    return Err(Error::new_spanned(
                        meta,
                        "Expected #[value(id = \"...\")]",
                    ));
                }
            }
        }
    }

    value_id.ok_or_else(|| Error::new_spanned(&variant.ident, "missing #[value] attribute with id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn derive_error(input: DeriveInput) -> String {
        api_value_derive_impl(input).unwrap_err().to_string()
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let input = parse_quote! {
            enum Order {
                #[value(id = "date")]
                Date,
                Rating,
            }
        };

        assert_eq!(derive_error(input), "missing #[value] attribute with id");
    }

    #[test]
    fn test_repeated_id_is_rejected() {
        let input = parse_quote! {
            enum Order {
                #[value(id = "date")]
                Date,
                #[value(id = "date")]
                AlsoDate,
            }
        };

        assert_eq!(derive_error(input), "Repeated Id: value id must be unique");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let input = parse_quote! {
            enum Order {
                #[value(id = "date", name = "Date")]
                Date,
            }
        };

        assert_eq!(
            derive_error(input),
            "Only 'id' is supported in #[value] attribute"
        );
    }

    #[test]
    fn test_structs_are_rejected() {
        let input = parse_quote! {
            struct Order {
                id: String,
            }
        };

        assert_eq!(derive_error(input), "ApiValue can only be derived for enums");
    }

    #[test]
    fn test_tuple_variants_are_rejected() {
        let input = parse_quote! {
            enum Order {
                #[value(id = "date")]
                Date(u8),
            }
        };

        assert_eq!(derive_error(input), "ApiValue variants cannot carry fields");
    }

    #[test]
    fn test_expansion_lists_values_in_order() {
        let input = parse_quote! {
            enum TextFormat {
                #[value(id = "plainText")]
                PlainText,
                #[value(id = "html")]
                Html,
            }
        };

        let tokens = api_value_derive_impl(input).unwrap().to_string();
        assert!(tokens.contains(r#"["plainText" , "html"]"#));
    }
}
