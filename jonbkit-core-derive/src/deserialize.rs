use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Fields, ItemStruct, LitStr};

pub fn derive_deserialize_impl(st: ItemStruct) -> syn::Result<TokenStream> {
    let mut variables = vec![];
    let mut field_names = vec![];
    for (i, field) in st.fields.iter().enumerate() {
        let (variable, display_name): (Ident, String) = match &field.ident {
            Some(ident) => (ident.clone(), ident.to_string()),
            None => (format_ident!("__field{}", i), i.to_string()),
        };
        let field_type = field.ty.clone();
        let error = LitStr::new(
            &format!("cannot deserialize field {}::{}", st.ident, display_name),
            field.span(),
        );

        variables.push(quote! {
            let #variable: #field_type = ::jonbkit_core::binary::ResultContextExt::context(
                ::jonbkit_core::binary::Deserialize::deserialize(deserializer),
                #error,
            )?;
        });
        field_names.push(variable);
    }

    let constructor = match &st.fields {
        Fields::Named(_) => quote! { Self { #(#field_names,)* } },
        Fields::Unnamed(_) => quote! { Self(#(#field_names,)*) },
        Fields::Unit => quote! { Self },
    };

    let type_name = st.ident;
    let (impl_generics, type_generics, where_clause) = st.generics.split_for_impl();
    let variables = TokenStream::from_iter(variables);

    Ok(quote! {
        impl #impl_generics ::jonbkit_core::binary::Deserialize for #type_name #type_generics #where_clause {
            fn deserialize(
                deserializer: &mut ::jonbkit_core::binary::Deserializer<'_>,
            ) -> ::std::result::Result<Self, ::jonbkit_core::binary::Error> {
                #variables
                ::std::result::Result::Ok(#constructor)
            }
        }
    })
}
