use proc_macro2::TokenStream;
use syn::{GenericArgument, PathArguments, Type};

/// An empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Returns `T` if `ty` is written as `Option<T>`.
///
/// This is syntactic: a type alias of `Option` is not recognized.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// The path of an attribute as written, for error messages.
pub(crate) fn path_name(path: &syn::Path) -> String {
    quote::ToTokens::to_token_stream(path).to_string().replace(' ', "")
}

/// Does any of `idents` appear in `tokens`?
pub(crate) fn mentions_any(idents: &[syn::Ident], tokens: TokenStream) -> bool {
    tokens.into_iter().any(|token_tree| match token_tree {
        proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
        proc_macro2::TokenTree::Group(group) => mentions_any(idents, group.stream()),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::parse_quote;

    use super::{mentions_any, option_inner};

    #[test]
    fn option_inner_is_syntactic() {
        let ty: syn::Type = parse_quote!(Option<String>);
        assert_eq!(option_inner(&ty), Some(&parse_quote!(String)));

        let ty: syn::Type = parse_quote!(::core::option::Option<Vec<u8>>);
        assert_eq!(option_inner(&ty), Some(&parse_quote!(Vec<u8>)));

        let ty: syn::Type = parse_quote!(Vec<Option<u8>>);
        assert_eq!(option_inner(&ty), None);
    }

    #[test]
    fn mentions_any_walks_groups() {
        let idents = [syn::Ident::new("T", proc_macro2::Span::call_site())];
        assert!(mentions_any(&idents, quote!(Vec<(u8, T)>)));
        assert!(!mentions_any(&idents, quote!(Vec<u8>)));
    }
}
