use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, GenericArgument, ItemFn, Path, PathArguments, ReturnType, Token, Type,
};

/// Turns a function returning `anyhow::Result<T>` into one returning
/// `anyhow::Result<outcome::Res<T>>`.
///
/// Errors of the listed kinds come back as `Outcome::Err`, every other error
/// is propagated unchanged. Works for `fn` and `async fn`.
///
/// ```ignore
/// #[as_result(std::num::ParseIntError)]
/// fn port(raw: &str) -> anyhow::Result<u16> {
///     Ok(raw.parse()?)
/// }
/// ```
///
/// An empty or duplicated kind list is rejected at compile time, including
/// two different paths to the same type. Kinds must be concrete types, not
/// generic parameters of the function. The return type must be
/// `anyhow::Result<T>` (or `Result<T>` / `Result<T, anyhow::Error>`).
#[proc_macro_attribute]
pub fn as_result(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let kinds = match Punctuated::<Path, Token![,]>::parse_terminated.parse(attr) {
        Ok(kinds) => kinds,
        Err(err) => return err.to_compile_error().into(),
    };
    let function = parse_macro_input!(item as ItemFn);

    match expand(kinds, function) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(kinds: Punctuated<Path, Token![,]>, function: ItemFn) -> syn::Result<TokenStream> {
    validate_kinds(&kinds, &function)?;

    let ItemFn {
        attrs,
        vis,
        mut sig,
        block,
    } = function;

    let ok_type = success_type(&sig.output)?;

    // Return type of the generated function.
    sig.output = syn::parse_quote!(
        -> ::outcome::anyhow::Result<::outcome::Res<#ok_type>>
    );

    let descriptors = kinds.iter().map(|kind| {
        quote_spanned!(kind.span() => ::outcome::Kind::of::<#kind>())
    });

    // Two paths naming the same type (an alias, a re-export or a full path)
    // pass the textual check; they conflict here instead.
    let distinct = kinds.iter().map(|kind| {
        quote_spanned!(kind.span() => impl __DistinctFailureKind<#kind> for () {})
    });

    let raised = if sig.asyncness.is_some() {
        quote! {
            ::outcome::adapter::settle::<#ok_type, _>(async move #block).await
        }
    } else {
        quote! {
            (move || -> ::outcome::anyhow::Result<#ok_type> #block)()
        }
    };

    Ok(quote! {
        #(#attrs)*
        #vis #sig {
            #[allow(dead_code)]
            trait __DistinctFailureKind<K: ?Sized> {}
            #(#distinct)*

            ::outcome::adapter::convert(#raised, &[#(#descriptors),*])
        }
    })
}

// Decoration time validation: at least one kind, none declared twice.
fn validate_kinds(kinds: &Punctuated<Path, Token![,]>, function: &ItemFn) -> syn::Result<()> {
    if kinds.is_empty() {
        return Err(syn::Error::new(
            function.sig.ident.span(),
            "as_result requires one or more failure kinds",
        ));
    }

    let mut seen: Vec<String> = vec![];
    for kind in kinds {
        let rendered = quote!(#kind).to_string();
        if seen.contains(&rendered) {
            return Err(syn::Error::new(
                kind.span(),
                format!("failure kind `{}` is declared more than once", rendered),
            ));
        }
        seen.push(rendered);
    }
    Ok(())
}

// Extracts `T` from `anyhow::Result<T>`, `Result<T>` or
// `Result<T, anyhow::Error>`. Any other error type is rejected, the generated
// closure could not hand it to the adapter.
fn success_type(output: &ReturnType) -> syn::Result<Type> {
    let ty = match output {
        ReturnType::Type(_, ty) => ty,
        ReturnType::Default => {
            return Err(syn::Error::new(
                output.span(),
                "as_result requires a function returning `anyhow::Result<T>`",
            ))
        }
    };

    if let Type::Path(ref path) = **ty {
        if path.qself.is_none() && is_result_path(&path.path) {
            if let Some(segment) = path.path.segments.last() {
                if let PathArguments::AngleBracketed(ref args) = segment.arguments {
                    let mut args = args.args.iter();
                    match (args.next(), args.next(), args.next()) {
                        (Some(GenericArgument::Type(ok)), None, None) => return Ok(ok.clone()),
                        (Some(GenericArgument::Type(ok)), Some(GenericArgument::Type(err)), None)
                            if is_anyhow_error(err) =>
                        {
                            return Ok(ok.clone())
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    Err(syn::Error::new(
        ty.span(),
        "as_result requires a function returning `anyhow::Result<T>`",
    ))
}

fn idents(path: &Path) -> Vec<String> {
    path.segments.iter().map(|s| s.ident.to_string()).collect()
}

// `Result` or `anyhow::Result`, optionally with a leading `::`.
fn is_result_path(path: &Path) -> bool {
    let segments = idents(path);
    segments == ["Result"] || segments == ["anyhow", "Result"]
}

fn is_anyhow_error(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && idents(&path.path) == ["anyhow", "Error"],
        _ => false,
    }
}
