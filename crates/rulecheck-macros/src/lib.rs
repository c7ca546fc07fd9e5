//! Procedural macros for rulecheck
//!
//! - `#[derive(Validate)]` - Builds the field-descriptor table from `#[rule(...)]` attributes
//!
//! Supported field rules:
//!
//! - `#[rule(required)]`
//! - `#[rule(email)]`
//! - `#[rule(length(min = 10, max = 255))]` (`min` defaults to 0, `max` to `usize::MAX`)
//!
//! Several rules may share one attribute and attributes may be stacked; the
//! generated table keeps declaration order.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitInt};

/// Derive `rulecheck::Validate` for a struct with named fields.
///
/// # Example
///
/// ```rust,ignore
/// use rulecheck::Validate;
///
/// #[derive(Validate)]
/// struct UserRegistration {
///     #[rule(required)]
///     #[rule(length(min = 10, max = 255))]
///     user: String,
///
///     #[rule(required, email)]
///     email: String,
/// }
/// ```
#[proc_macro_derive(Validate, attributes(rule))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_validate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A parsed `#[rule(...)]` entry.
#[derive(Debug, PartialEq)]
enum Rule {
    Required,
    Email,
    Length { min: Option<usize>, max: Option<usize> },
}

impl Rule {
    fn to_tokens(&self) -> TokenStream2 {
        match self {
            Rule::Required => quote!(::rulecheck::RuleMarker::Required),
            Rule::Email => quote!(::rulecheck::RuleMarker::Email),
            Rule::Length { min, max } => {
                let min = min.unwrap_or(0);
                let max = match max {
                    Some(max) => quote!(#max),
                    None => quote!(::core::primitive::usize::MAX),
                };
                quote!(::rulecheck::RuleMarker::Length { min: #min, max: #max })
            }
        }
    }
}

fn expand_validate(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Validate can only be derived for structs",
        ));
    };

    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &data.fields,
            "Validate requires named fields",
        ));
    };

    let mut entries = Vec::new();
    for field in &named.named {
        let rules = parse_rules(&field.attrs)?;
        if rules.is_empty() {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        // raw identifiers report without the r# prefix
        let name = ident.to_string().trim_start_matches("r#").to_string();
        let markers = rules.iter().map(Rule::to_tokens);

        entries.push(quote! {
            ::rulecheck::Field::new(#name, &self.#ident, {
                const MARKERS: &[::rulecheck::RuleMarker] = &[#(#markers),*];
                MARKERS
            })
        });
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::rulecheck::Validate for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::rulecheck::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

fn parse_rules(attrs: &[Attribute]) -> syn::Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("rule") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("required") {
                rules.push(Rule::Required);
                return Ok(());
            }
            if meta.path.is_ident("email") {
                rules.push(Rule::Email);
                return Ok(());
            }
            if meta.path.is_ident("length") {
                rules.push(parse_length(&meta)?);
                return Ok(());
            }
            Err(meta.error(
                "unknown rule, expected `required`, `email` or `length(min = .., max = ..)`",
            ))
        })?;
    }
    Ok(rules)
}

fn parse_length(meta: &ParseNestedMeta<'_>) -> syn::Result<Rule> {
    let mut min: Option<usize> = None;
    let mut max: Option<usize> = None;

    meta.parse_nested_meta(|inner| {
        let slot = if inner.path.is_ident("min") {
            &mut min
        } else if inner.path.is_ident("max") {
            &mut max
        } else {
            return Err(inner.error("unsupported length parameter, expected `min` or `max`"));
        };
        if slot.is_some() {
            return Err(inner.error("duplicate length parameter"));
        }
        let lit: LitInt = inner.value()?.parse()?;
        *slot = Some(lit.base10_parse()?);
        Ok(())
    })?;

    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(meta.error(format!("length min ({lo}) is greater than max ({hi})")));
        }
    }

    Ok(Rule::Length { min, max })
}
