use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, LitStr};

struct MappedField<'a> {
    ident: &'a syn::Ident,
    ty: &'a syn::Type,
    column: String,
    key: bool,
}

pub(crate) fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = named_fields(&input)?;
    let table = table_attr(&input)?;
    let mapped = mapped_fields(fields)?;

    let hydrate = mapped.iter().map(|field| {
        let field_ident = field.ident;
        let field_ty = field.ty;
        let column = &field.column;
        quote! {
            if let ::core::option::Option::Some(value) = row.get(#column) {
                if let ::core::option::Option::Some(parsed) =
                    <#field_ty as ::recordbind::FromValue>::from_value(value)
                {
                    record.#field_ident = parsed;
                }
            }
        }
    });

    let row_param = if mapped.is_empty() {
        quote!(_row)
    } else {
        quote!(row)
    };
    let hydrate_body = if mapped.is_empty() {
        quote! { <Self as ::core::default::Default>::default() }
    } else {
        quote! {
            let mut record = <Self as ::core::default::Default>::default();
            #(#hydrate)*
            record
        }
    };
    let from_row_impl = quote! {
        impl #impl_generics ::recordbind::FromRow for #ident #ty_generics #where_clause {
            fn from_row(#row_param: &::recordbind::Row) -> Self {
                #hydrate_body
            }
        }
    };

    let record_impl = table.map(|table| {
        let columns = mapped.iter().map(|field| {
            let name = &field.column;
            let key = field.key;
            quote! {
                ::recordbind::Column { name: #name, key: #key }
            }
        });
        let values = mapped.iter().map(|field| {
            let field_ident = field.ident;
            quote! {
                ::recordbind::ToValue::to_value(&self.#field_ident)
            }
        });
        quote! {
            impl #impl_generics ::recordbind::Record for #ident #ty_generics #where_clause {
                const TABLE: &'static str = #table;
                const COLUMNS: &'static [::recordbind::Column] = &[#(#columns),*];

                fn values(&self) -> ::std::vec::Vec<::recordbind::Value> {
                    ::std::vec![#(#values),*]
                }
            }
        }
    });

    Ok(quote! {
        #from_row_impl
        #record_impl
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&syn::FieldsNamed> {
    if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            return Ok(named);
        }
        return Err(Error::new_spanned(
            &data.fields,
            "Record can only be derived for structs with named fields",
        ));
    }
    Err(Error::new_spanned(
        &input.ident,
        "Record can only be derived for structs with named fields",
    ))
}

fn table_attr(input: &DeriveInput) -> syn::Result<Option<String>> {
    let mut table: Option<String> = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                if table.is_some() {
                    return Err(meta.error("duplicate `table` attribute"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                table = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `table = \"...\"`"))
            }
        })?;
    }
    Ok(table)
}

fn mapped_fields(fields: &syn::FieldsNamed) -> syn::Result<Vec<MappedField<'_>>> {
    let mut mapped = Vec::new();
    let mut saw_key = false;

    for field in &fields.named {
        let mut column: Option<String> = None;
        let mut key = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("column") {
                    if column.is_some() {
                        return Err(meta.error("duplicate `column` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    column = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("key") {
                    if key {
                        return Err(meta.error("duplicate `key` attribute"));
                    }
                    key = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `column = \"...\"` or `key`"))
                }
            })?;
        }

        let ident = field.ident.as_ref().ok_or_else(|| {
            Error::new_spanned(field, "Record fields must be named")
        })?;

        let Some(column) = column else {
            if key {
                return Err(Error::new_spanned(
                    field,
                    "`key` requires `column = \"...\"`",
                ));
            }
            // No attribute: the field is invisible to the mapper.
            continue;
        };

        if key {
            if saw_key {
                return Err(Error::new_spanned(
                    ident,
                    "at most one field may carry `key`",
                ));
            }
            saw_key = true;
        }

        mapped.push(MappedField {
            ident,
            ty: &field.ty,
            column,
            key,
        });
    }

    Ok(mapped)
}
