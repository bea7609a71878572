//! `#[derive(Record)]` code generation.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Type};

use crate::attrs::{CursorAttr, Order, parse_cursor_attr};
use crate::errors::{duplicate_error, unsupported_item_error};

/// Cursor value kind a Rust type maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Integer,
    String,
    Timestamp,
    Other(String),
}

/// Classify a field type by its last path segment.
fn classify(ty: &Type) -> Kind {
    match ty {
        Type::Reference(reference) => classify(&reference.elem),
        Type::Group(group) => classify(&group.elem),
        Type::Path(type_path) => match type_path.path.segments.last() {
            Some(segment) => match segment.ident.to_string().as_str() {
                "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" => Kind::Integer,
                "String" | "str" => Kind::String,
                "DateTime" | "SystemTime" => Kind::Timestamp,
                other => Kind::Other(other.to_string()),
            },
            None => Kind::Other(quote!(#ty).to_string()),
        },
        _ => Kind::Other(quote!(#ty).to_string()),
    }
}

fn field_type_tokens(kind: &Kind) -> TokenStream {
    match kind {
        Kind::Integer => quote! { ::keyset_cursor::FieldType::Integer },
        Kind::String => quote! { ::keyset_cursor::FieldType::String },
        Kind::Timestamp => quote! { ::keyset_cursor::FieldType::Timestamp },
        Kind::Other(name) => quote! { ::keyset_cursor::FieldType::Other(#name) },
    }
}

fn tag_tokens(attr: Option<&CursorAttr>) -> TokenStream {
    match attr {
        None => quote! { ::core::option::Option::None },
        Some(attr) => {
            let default = attr.default;
            let order = match attr.order {
                Order::Asc => quote! { ::keyset_cursor::SortOrder::Asc },
                Order::Desc => quote! { ::keyset_cursor::SortOrder::Desc },
            };
            quote! {
                ::core::option::Option::Some(::keyset_cursor::CursorTag::new(#default, #order))
            }
        },
    }
}

/// Expand the derive for one struct.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(unsupported_item_error(input.ident.span())),
        },
        _ => return Err(unsupported_item_error(input.ident.span())),
    };

    let name = &input.ident;
    let shape_name = name.to_string();

    let mut defs = Vec::new();
    let mut arms = Vec::new();
    let mut columns = HashSet::new();
    let mut default_column: Option<String> = None;

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attr = parse_cursor_attr(&field.attrs)?;

        let column = attr
            .as_ref()
            .and_then(|a| a.rename.as_ref())
            .map_or_else(|| ident.unraw().to_string(), syn::LitStr::value);
        if !columns.insert(column.clone()) {
            return Err(duplicate_error(field.span(), "column", &column));
        }

        if let Some(attr) = &attr
            && attr.default
        {
            if let Some(first) = &default_column {
                return Err(syn::Error::new(
                    field.span(),
                    format!(
                        "Only one field can be #[cursor(default)]; '{first}' already is.\n\n\
                         Use #[cursor] to make '{column}' selectable without being the default."
                    ),
                ));
            }
            default_column = Some(column.clone());
        }

        let kind = classify(&field.ty);
        let ty = field_type_tokens(&kind);
        let tag = tag_tokens(attr.as_ref());
        defs.push(quote! { ::keyset_cursor::FieldDef::new(#column, #ty, #tag) });

        if attr.is_some() && !matches!(kind, Kind::Other(_)) {
            arms.push(quote! {
                #column => ::core::option::Option::Some(
                    ::keyset_cursor::IntoCursorValue::to_cursor_value(&self.#ident)
                ),
            });
        }
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::keyset_cursor::Record for #name #ty_generics #where_clause {
            fn shape() -> &'static ::keyset_cursor::Shape {
                static SHAPE: ::keyset_cursor::Shape = ::keyset_cursor::Shape::new(
                    #shape_name,
                    &[#(#defs),*],
                );
                &SHAPE
            }

            fn cursor_value(
                &self,
                field: &str,
            ) -> ::core::option::Option<::keyset_cursor::CursorValue> {
                match field {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
