use crate::derive_utils::{apply_derives, expect_str};
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, MetaNameValue, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[entity_id] 宏实现
/// 仅支持内层为 `String` 的单字段 tuple struct：
/// - 合并/追加派生：Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord
/// - 构造一律经过 `validate_identifier`，包括反序列化
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityIdAttrConfig);
    let input = parse_macro_input!(item as Item);

    let st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    if !st.generics.params.is_empty() {
        return syn::Error::new(st.generics.span(), "#[entity_id] does not support generics")
            .to_compile_error()
            .into();
    }

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => &f.unnamed[0].ty,
        syn::Fields::Unnamed(f) => {
            return syn::Error::new(
                f.span(),
                "#[entity_id] requires a tuple struct with exactly one field",
            )
            .to_compile_error()
            .into();
        }
        _ => {
            return syn::Error::new(
                st.span(),
                "#[entity_id] supports only tuple struct, e.g., struct X(String);",
            )
            .to_compile_error()
            .into();
        }
    };

    if !is_string(inner_ty) {
        return syn::Error::new(inner_ty.span(), "#[entity_id] inner field must be String")
            .to_compile_error()
            .into();
    }

    let mut st_out = st.clone();
    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(Debug),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
        syn::parse_quote!(PartialOrd),
        syn::parse_quote!(Ord),
    ];
    apply_derives(&mut st_out.attrs, required);

    let ident = &st_out.ident;
    let prefix = cfg.prefix.unwrap_or_default();
    let label = cfg.label.unwrap_or_else(|| ident.to_string());
    let serde = quote!(::seedwork_domain::__private::serde);

    let out = quote! {
        #st_out

        impl #ident {
            /// 标识必须携带的前缀
            pub const PREFIX: &'static str = #prefix;

            /// 校验并构造标识
            pub fn parse(
                value: impl ::core::convert::Into<::std::string::String>,
            ) -> ::seedwork_domain::error::DomainResult<Self> {
                let value = value.into();
                ::seedwork_domain::identity::validate_identifier(&value, Self::PREFIX, #label)?;
                ::std::result::Result::Ok(Self(value))
            }

            /// 生成新的随机标识
            pub fn generate() -> Self {
                Self(::seedwork_domain::identity::generate_identifier(Self::PREFIX))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::seedwork_domain::identity::Identifier for #ident {
            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::str::FromStr for #ident {
            type Err = ::seedwork_domain::error::DomainError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::core::convert::TryFrom<::std::string::String> for #ident {
            type Error = ::seedwork_domain::error::DomainError;

            fn try_from(value: ::std::string::String) -> ::std::result::Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl ::core::convert::TryFrom<&str> for #ident {
            type Error = ::seedwork_domain::error::DomainError;

            fn try_from(value: &str) -> ::std::result::Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl ::core::convert::From<#ident> for ::std::string::String {
            fn from(value: #ident) -> Self {
                value.0
            }
        }

        impl ::core::convert::AsRef<str> for #ident {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl #serde::Serialize for #ident {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: #serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> #serde::Deserialize<'de> for #ident {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: #serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as #serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(raw).map_err(<D::Error as #serde::de::Error>::custom)
            }
        }
    };

    TokenStream::from(out)
}

fn is_string(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(p) => p
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "String" && seg.arguments.is_empty()),
        _ => false,
    }
}

// -------- parsing --------

#[derive(Default)]
struct EntityIdAttrConfig {
    prefix: Option<String>,
    label: Option<String>,
}

impl Parse for EntityIdAttrConfig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut cfg = Self::default();
        let pairs: Punctuated<MetaNameValue, Token![,]> = Punctuated::parse_terminated(input)?;

        for pair in pairs {
            let slot = if pair.path.is_ident("prefix") {
                &mut cfg.prefix
            } else if pair.path.is_ident("label") {
                &mut cfg.label
            } else {
                return Err(syn::Error::new(
                    pair.path.span(),
                    "unknown key in attribute; expected 'prefix' or 'label'",
                ));
            };

            if slot.is_some() {
                return Err(syn::Error::new(pair.path.span(), "duplicate key in attribute"));
            }
            let key = if pair.path.is_ident("prefix") { "prefix" } else { "label" };
            *slot = Some(expect_str(&pair.value, key)?);
        }

        Ok(cfg)
    }
}
