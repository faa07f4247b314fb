mod deserialize;
mod fixed_size;

use syn::{parse_macro_input, ItemStruct};

#[proc_macro_derive(Deserialize)]
pub fn derive_deserialize(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(item as ItemStruct);

    deserialize::derive_deserialize_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[proc_macro_derive(FixedSize)]
pub fn derive_fixed_size(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(item as ItemStruct);

    fixed_size::derive_fixed_size_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
