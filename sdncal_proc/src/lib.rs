//! Attribute helpers for `sdncal`.
//!
//! Neither `wasm-bindgen` nor PyO3 cope well with every qualifier and attribute combination under
//! `cfg_attr`, so these macros let the main crate switch qualifiers on and off per feature. See
//! [`fn_attr()`] and [`py_attr()`].

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Abi, Attribute, ImplItem, ImplItemFn, ItemFn, ItemImpl, Meta, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// A qualifier that [`fn_attr()`] can put on a function signature.
enum Qualifier {
    Const(Token![const]),
    Abi(Abi),
}

impl Parse for Qualifier {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![const]) {
            Ok(Self::Const(input.parse()?))
        } else {
            Ok(Self::Abi(input.parse()?))
        }
    }
}

/// Add a qualifier (`const` or an ABI like `extern "C"`) to a function or method.
///
/// `wasm-bindgen` rejects `const fn` and a C export needs its ABI, so the qualifiers must be
/// conditional:
///
/// ```rust,ignore
/// #[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
/// #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
/// pub fn day_of_week(sdn: Sdn) -> Weekday { todo!() }
/// ```
///
/// Other attributes on the item are kept as they are.
#[proc_macro_attribute]
pub fn fn_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let qualifier = parse_macro_input!(args as Qualifier);
    let mut item_fn = parse_macro_input!(tokens as ItemFn);

    match qualifier {
        Qualifier::Const(token) => item_fn.sig.constness = Some(token),
        Qualifier::Abi(abi) => item_fn.sig.abi = Some(abi),
    }

    let output: proc_macro2::TokenStream = quote! { #item_fn };
    output.into()
}

/// Create bindgens for conditional pyo3.
///
/// PyO3 generally does not support attributes under conditional clauses
/// (<https://github.com/PyO3/pyo3/issues/780>). Simply, when the header macro of a block like
/// `pymethods` is conditional (via `cfg_attr`), the nested macros (like `staticmethod`) will
/// misbehave.
///
/// As of now, this only supports usage for `impl` blocks and only with `pymethods` input similar to
/// the example below:
///
/// ```rust,ignore
/// #[pymethods]
/// impl X {
///     #[staticmethod]
///     pub fn from_ymd() -> Self { todo!() }
/// }
///
/// // can be conditionally written like so all the functions will have the given attribute:
///
/// #[cfg_attr(criterion, py_attr(pymethods, staticmethod))]
/// impl X {
///     pub fn from_ymd() -> Self { todo!() }
/// }
/// ```
#[proc_macro_attribute]
pub fn py_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let arg_parser = |input: ParseStream| {
        let parent = input.parse::<Meta>()?;
        input.parse::<Token![,]>()?;
        let meta = input.parse::<Meta>()?;
        Ok((parent, meta))
    };

    let (parent, meta) = parse_macro_input!(args with arg_parser);

    if !parent.path().is_ident("pymethods") {
        return syn::Error::new_spanned(parent, "only `pymethods` is supported as the parent")
            .to_compile_error()
            .into();
    }

    let mut item_impl = parse_macro_input!(tokens as ItemImpl);
    for i in item_impl.items.iter_mut() {
        if let ImplItem::Fn(ImplItemFn { attrs, .. }) = i {
            attrs.push(Attribute {
                pound_token: Default::default(),
                style: syn::AttrStyle::Outer,
                bracket_token: syn::token::Bracket::default(),
                meta: meta.clone(),
            });
        }
    }
    let output: proc_macro2::TokenStream = quote! {
        #[#parent]
        #item_impl
    };
    output.into()
}
