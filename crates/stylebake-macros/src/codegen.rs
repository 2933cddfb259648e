//! Code generation for the styles! macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::{Entry, EntryItem, StylesRoot, ValueNode};

/// Generate an expression evaluating to a `StyleDefinition`.
pub fn generate(root: StylesRoot) -> TokenStream {
    let has_spreads = root
        .items
        .iter()
        .any(|item| matches!(item, EntryItem::Spread(_)));

    if !has_spreads {
        // No spreads - build straight from a vec! literal
        let pairs: Vec<TokenStream> = root
            .items
            .iter()
            .filter_map(|item| match item {
                EntryItem::Entry(entry) => Some(generate_pair(entry)),
                EntryItem::Spread(_) => None,
            })
            .collect();
        return quote! {
            ::stylebake::StyleDefinition::from_entries(
                ::std::vec::Vec::<(&str, ::stylebake::StyleValue)>::from([#(#pairs),*])
            )
        };
    }

    let statements: Vec<TokenStream> = root
        .items
        .iter()
        .map(|item| match item {
            EntryItem::Entry(entry) => {
                let key = &entry.key;
                let value = generate_value(&entry.value);
                quote! { __definition.insert(#key, #value); }
            }
            EntryItem::Spread(expr) => quote! { __definition.extend(#expr); },
        })
        .collect();

    quote! {
        {
            let mut __definition = ::stylebake::StyleDefinition::new();
            #(#statements)*
            __definition
        }
    }
}

fn generate_pair(entry: &Entry) -> TokenStream {
    let key = &entry.key;
    let value = generate_value(&entry.value);
    quote! { (#key, #value) }
}

fn generate_value(value: &ValueNode) -> TokenStream {
    match value {
        ValueNode::Null => quote! { ::stylebake::StyleValue::Null },
        ValueNode::Fallbacks(items) => {
            let items: Vec<TokenStream> = items.iter().map(generate_value).collect();
            quote! {
                ::stylebake::StyleValue::Fallbacks(::std::vec![#(#items),*])
            }
        }
        ValueNode::Conditional(entries) => {
            let pairs: Vec<TokenStream> = entries.iter().map(generate_pair).collect();
            quote! {
                ::stylebake::StyleValue::conditional(
                    ::std::vec::Vec::<(&str, ::stylebake::StyleValue)>::from([#(#pairs),*])
                )
            }
        }
        ValueNode::Expr(expr) => quote! { ::stylebake::StyleValue::from(#expr) },
    }
}
