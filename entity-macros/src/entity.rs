use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Ident, Item, ItemStruct, Result as SynResult, Token, Type, parse::Parse,
    parse::ParseStream, parse_macro_input};

/// #[entity] 宏实现
/// - 追加字段：`id: IdentitySlot<IdType>`, `version: Version`（若缺失）并置于字段最前
/// - 自动为目标结构体实现 `::entity_domain::entity::Entity` trait
/// - 必选参数：`#[entity(id = IdType)]`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity] only on struct")
                .to_compile_error()
                .into();
        }
    };

    // 仅支持具名字段
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    // id 类型为必选参数：标识是显式的领域概念，不提供默认
    let id_type = match cfg.id_ty {
        Some(ty) => ty,
        None => {
            return syn::Error::new(
                proc_macro2::Span::call_site(),
                "missing required key 'id', e.g., #[entity(id = PostId)]",
            )
            .to_compile_error()
            .into();
        }
    };

    // 重建字段顺序：将 id、version 放在最前，其他字段保持原有相对顺序
    let mut new_named: Punctuated<syn::Field, Token![,]> = Punctuated::new();

    // 取出现有 id/version 字段（若存在则复用原定义）
    let existed_id = fields_named
        .named
        .iter()
        .find(|f| f.ident.as_ref().map(|i| i == "id").unwrap_or(false))
        .cloned();

    let existed_version = fields_named
        .named
        .iter()
        .find(|f| f.ident.as_ref().map(|i| i == "version").unwrap_or(false))
        .cloned();

    // id：若存在则放前面；若不存在则按配置类型包入标识槽位后新增
    if let Some(f) = existed_id {
        new_named.push(f);
    } else {
        new_named.push(syn::parse_quote! { id: ::entity_domain::identity::IdentitySlot<#id_type> });
    }

    // version：若存在则放前面；若不存在则新增并放前面
    if let Some(f) = existed_version {
        new_named.push(f);
    } else {
        new_named.push(syn::parse_quote! { version: ::entity_domain::value_object::Version });
    }

    // 其他字段按原来顺序追加，但跳过 id/version，避免重复
    for f in fields_named.named.clone().into_iter() {
        let is_id_or_version = f
            .ident
            .as_ref()
            .map(|i| i == "id" || i == "version")
            .unwrap_or(false);
        if !is_id_or_version {
            new_named.push(f);
        }
    }

    fields_named.named = new_named;

    let out_struct = ItemStruct { ..st };

    // 为结构体生成 Entity 实现
    let ident = &out_struct.ident;
    let generics = out_struct.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        #out_struct

        impl #impl_generics ::entity_domain::entity::Entity for #ident #ty_generics #where_clause {
            type Id = #id_type;

            fn identity(&self) -> ::entity_domain::error::DomainResult<&Self::Id> {
                self.id.get()
            }

            fn bind_identity(
                &mut self,
                id: Self::Id,
            ) -> ::entity_domain::error::DomainResult<()> {
                self.id.bind(id)
            }

            fn identity_slot(&self) -> &::entity_domain::identity::IdentitySlot<Self::Id> {
                &self.id
            }

            fn version(&self) -> ::entity_domain::value_object::Version {
                self.version
            }

            fn advance_version(&mut self) {
                self.version = self.version.next();
            }
        }
    };

    TokenStream::from(expanded)
}

// 解析 entity 宏键值参数：id = <Type>
struct EntityAttrConfig {
    id_ty: Option<Type>,
}

impl Parse for EntityAttrConfig {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let mut id_ty: Option<Type> = None;

        if input.is_empty() {
            return Ok(Self { id_ty });
        }

        let pairs: Punctuated<KvType, Token![,]> =
            Punctuated::<KvType, Token![,]>::parse_terminated(input)?;

        for kv in pairs.into_iter() {
            let key = kv.key.to_string();
            match key.as_str() {
                "id" => {
                    if id_ty.is_some() {
                        return Err(syn::Error::new(
                            kv.key.span(),
                            "duplicate key 'id' in attribute",
                        ));
                    }
                    id_ty = Some(kv.ty);
                }
                _ => {
                    return Err(syn::Error::new(
                        kv.key.span(),
                        "unknown key in attribute; expected 'id'",
                    ));
                }
            }
        }

        Ok(Self { id_ty })
    }
}

struct KvType {
    key: Ident,
    #[allow(dead_code)]
    eq: Token![=],
    ty: Type,
}

impl Parse for KvType {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let key: Ident = input.parse()?;
        let eq: Token![=] = input.parse()?;
        let ty: Type = input.parse()?;
        Ok(Self { key, eq, ty })
    }
}
