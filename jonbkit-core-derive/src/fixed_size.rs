use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemStruct;

/// The size is the sum of the field sizes. Binary records carry no implicit padding.
pub fn derive_fixed_size_impl(st: ItemStruct) -> syn::Result<TokenStream> {
    let field_sizes = st.fields.iter().map(|field| {
        let field_type = &field.ty;
        quote! { <#field_type as ::jonbkit_core::binary::FixedSize>::SIZE }
    });

    let type_name = st.ident;
    let (impl_generics, type_generics, where_clause) = st.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::jonbkit_core::binary::FixedSize for #type_name #type_generics #where_clause {
            const SIZE: usize = 0 #(+ #field_sizes)*;
        }
    })
}
