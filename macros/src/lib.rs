use proc_macro::TokenStream;

/// Runs the given expression whenever the annotated function returns, by any
/// path. Stacked attributes run top to bottom.
///
/// The body runs inside a closure before the guard is created, so the
/// expression may use `&mut` parameters the body also uses. `async fn` and
/// `impl Trait` return types are rejected.
#[proc_macro_attribute]
pub fn scope_exit(attr: TokenStream, item: TokenStream) -> TokenStream {
    codegen::scope_exit::scope_exit(attr.into(), item.into()).into()
}
