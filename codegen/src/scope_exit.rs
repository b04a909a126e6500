use proc_macro2::{Delimiter, Group, Span, TokenStream, TokenTree};
use quote::quote;
use syn::{Expr, Ident};

fn error(span: Span, msg: &str) -> TokenStream {
    syn::Error::new(span, msg).to_compile_error()
}

fn is_async(item: &TokenStream) -> bool {
    for tt in item.clone() {
        if let TokenTree::Ident(ident) = tt {
            if ident == "fn" {
                return false;
            }
            if ident == "async" {
                return true;
            }
        }
    }
    false
}

pub fn scope_exit(attr: TokenStream, item: TokenStream) -> TokenStream {
    let action = match syn::parse2::<Expr>(attr) {
        Ok(expr) => expr,
        Err(e) => return e.to_compile_error(),
    };

    if is_async(&item) {
        return error(Span::call_site(), "scope_exit does not support async functions");
    }

    let mut func = match venial::parse_item(item) {
        Ok(venial::Item::Function(f)) => f,
        Ok(_) => return error(Span::call_site(), "scope_exit can only be used on functions"),
        Err(e) => return error(Span::call_site(), &e.to_string()),
    };

    let Some(body) = func.body.take() else {
        return error(func.name.span(), "scope_exit requires a function body");
    };

    let ret = match &func.return_ty {
        Some(ty) => quote!(#ty),
        None => quote!(()),
    };
    if ret.to_string().split_whitespace().any(|t| t == "impl") {
        return error(func.name.span(), "scope_exit does not support `impl Trait` return types");
    }

    // The guard must not exist while the body runs. A panic from the body is
    // resumed after the guard is created.
    let result = Ident::new("scope_exit_result", Span::mixed_site());
    let value = Ident::new("scope_exit_value", Span::mixed_site());
    let payload = Ident::new("scope_exit_payload", Span::mixed_site());
    let guard = Ident::new("scope_exit_guard", Span::mixed_site());
    let stmts = body.stream();
    let mut wrapped = Group::new(
        Delimiter::Brace,
        quote! {
            let #result = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| -> #ret {
                #stmts
            }));
            let #guard = ::defer_scope::defer::Defer::new(|| {
                #action;
            });
            match #result {
                ::std::result::Result::Ok(#value) => #value,
                ::std::result::Result::Err(#payload) => ::std::panic::resume_unwind(#payload),
            }
        },
    );
    wrapped.set_span(body.span());
    func.body = Some(wrapped);

    quote!(#func)
}
