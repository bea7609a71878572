//! `#[cursor(...)]` field attribute parsing.

use quote::ToTokens;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr, Meta};

use crate::errors::{duplicate_error, invalid_column_error, unknown_error};

const OPTIONS: &[&str] = &["default", "desc", "asc", "rename"];

/// Sort order requested by the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

/// Parsed `#[cursor]` attribute of one field.
#[derive(Debug, Default)]
pub struct CursorAttr {
    pub default: bool,
    pub order: Order,
    pub rename: Option<LitStr>,
}

/// Parse the `#[cursor]` attribute of a field, `None` if the field has none.
pub fn parse_cursor_attr(attrs: &[Attribute]) -> syn::Result<Option<CursorAttr>> {
    let mut result: Option<CursorAttr> = None;

    for attr in attrs {
        if !attr.path().is_ident("cursor") {
            continue;
        }
        if result.is_some() {
            return Err(duplicate_error(attr.span(), "attribute", "cursor"));
        }

        let mut parsed = CursorAttr::default();
        match &attr.meta {
            Meta::Path(_) => {},
            Meta::List(_) => parse_options(attr, &mut parsed)?,
            Meta::NameValue(nv) => {
                return Err(syn::Error::new(
                    nv.span(),
                    "Expected #[cursor] or #[cursor(...)].\n\nExample: #[cursor(default, desc)]",
                ));
            },
        }
        result = Some(parsed);
    }

    Ok(result)
}

fn parse_options(attr: &Attribute, parsed: &mut CursorAttr) -> syn::Result<()> {
    let mut order_set = false;

    attr.parse_nested_meta(|meta| {
        let span = meta.path.span();
        if meta.path.is_ident("default") {
            if parsed.default {
                return Err(duplicate_error(span, "option", "default"));
            }
            parsed.default = true;
        } else if meta.path.is_ident("desc") || meta.path.is_ident("asc") {
            if order_set {
                return Err(duplicate_error(span, "option", "sort order"));
            }
            order_set = true;
            parsed.order = if meta.path.is_ident("desc") {
                Order::Desc
            } else {
                Order::Asc
            };
        } else if meta.path.is_ident("rename") {
            if parsed.rename.is_some() {
                return Err(duplicate_error(span, "option", "rename"));
            }
            let name: LitStr = meta.value()?.parse()?;
            if !is_valid_column(&name.value()) {
                return Err(invalid_column_error(name.span(), &name.value()));
            }
            parsed.rename = Some(name);
        } else {
            let got = meta.path.to_token_stream().to_string();
            return Err(unknown_error(span, "cursor option", &got, OPTIONS));
        }
        Ok(())
    })
}

/// Whether `name` is a plain SQL identifier.
pub fn is_valid_column(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(attrs: Vec<Attribute>) -> syn::Result<Option<CursorAttr>> {
        parse_cursor_attr(&attrs)
    }

    #[test]
    fn test_untagged_field() {
        let attrs: Vec<Attribute> = parse_quote! { #[serde(skip)] };
        assert!(parse(attrs).unwrap().is_none());
    }

    #[test]
    fn test_bare_tag() {
        let attrs: Vec<Attribute> = parse_quote! { #[cursor] };
        let attr = parse(attrs).unwrap().unwrap();
        assert!(!attr.default);
        assert_eq!(attr.order, Order::Asc);
        assert!(attr.rename.is_none());
    }

    #[test]
    fn test_all_options() {
        let attrs: Vec<Attribute> = parse_quote! { #[cursor(default, desc, rename = "CreatedAt")] };
        let attr = parse(attrs).unwrap().unwrap();
        assert!(attr.default);
        assert_eq!(attr.order, Order::Desc);
        assert_eq!(attr.rename.unwrap().value(), "CreatedAt");
    }

    #[test]
    fn test_unknown_option() {
        let attrs: Vec<Attribute> = parse_quote! { #[cursor(primary)] };
        let err = parse(attrs).unwrap_err().to_string();
        assert!(err.contains("Unknown cursor option 'primary'"));
        assert!(err.contains("rename"));
    }

    #[test]
    fn test_conflicting_order() {
        let attrs: Vec<Attribute> = parse_quote! { #[cursor(asc, desc)] };
        assert!(parse(attrs).unwrap_err().to_string().contains("sort order"));
    }

    #[test]
    fn test_repeated_attribute() {
        let attrs: Vec<Attribute> = parse_quote! { #[cursor] #[cursor(default)] };
        assert!(parse(attrs).unwrap_err().to_string().contains("Duplicate attribute"));
    }

    #[test]
    fn test_invalid_rename() {
        for bad in ["", "1st", "Created At", "id; DROP TABLE t", "a-b"] {
            let lit = LitStr::new(bad, proc_macro2::Span::call_site());
            let attrs: Vec<Attribute> = parse_quote! { #[cursor(rename = #lit)] };
            let err = parse(attrs).unwrap_err().to_string();
            assert!(err.contains("Invalid column name"), "{bad}: {err}");
        }
    }

    #[test]
    fn test_column_names() {
        assert!(is_valid_column("CreatedAt"));
        assert!(is_valid_column("_seq"));
        assert!(is_valid_column("col_2"));
        assert!(!is_valid_column("2col"));
        assert!(!is_valid_column("naïve"));
    }
}
