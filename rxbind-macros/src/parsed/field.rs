use super::*;

pub(crate) struct ParsedField {
    member: Member,
    name: String,
    ty: Type,
    tags: Vec<(String, LitStr)>,
    flatten: bool,
    // Fields without `#[capture]` never touch `Capture`, so their type is unconstrained.
    captured: bool,
}

impl ParsedField {
    pub(crate) fn from_field(index: usize, field: &Field) -> Result<Self> {
        let (member, name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
            None => (
                Member::Unnamed(Index {
                    index: index as u32,
                    span: field.span(),
                }),
                index.to_string(),
            ),
        };

        let mut tags: Vec<(String, LitStr)> = Vec::new();
        let mut flatten = false;
        let mut captured = false;
        for attr in &field.attrs {
            if attr.path().is_ident("capture") {
                captured = true;
                Self::parse_field_attr(attr, &mut tags, &mut flatten)?;
            }
        }

        Ok(Self {
            member,
            name,
            ty: field.ty.clone(),
            tags,
            flatten,
            captured,
        })
    }

    fn parse_field_attr(attr: &Attribute, tags: &mut Vec<(String, LitStr)>, flatten: &mut bool) -> Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("flatten") {
                if *flatten {
                    return Err(Error::new(meta.path.span(), "field already marked as `flatten`"));
                }
                *flatten = true;
                return Ok(());
            }

            let key = match meta.path.get_ident() {
                Some(ident) => ident.clone(),
                None => return Err(meta.error("expected a tag such as `rx = \"name\"`")),
            };
            let value: LitStr = meta.value()?.parse()?;
            let key_name = key.unraw().to_string();
            if tags.iter().any(|(existing, _)| *existing == key_name) {
                return Err(Error::new(key.span(), format!("duplicate capture tag `{key_name}`")));
            }
            tags.push((key_name, value));
            Ok(())
        })
    }

    /// `FieldDecl` expression describing this field in the record schema.
    pub(crate) fn decl_tokens(&self) -> TokenStream2 {
        let name = LitStr::new(&self.name, Span::call_site());
        if !self.captured {
            return quote! { ::rxbind::FieldDecl::new(#name, ::rxbind::Shape::ignored) };
        }
        let ty = &self.ty;
        let tags = self.tags.iter().map(|(key, value)| {
            let key = LitStr::new(key, value.span());
            quote! { .tag(#key, #value) }
        });
        let flatten = self.flatten.then(|| quote! { .flatten(true) });
        quote! {
            ::rxbind::FieldDecl::new(#name, <#ty as ::rxbind::Capture>::shape)
                #(#tags)*
                #flatten
        }
    }

    /// Match arm returning a slot for this field from `Fields::field_mut`.
    pub(crate) fn slot_arm(&self, index: usize) -> Option<TokenStream2> {
        if !self.captured {
            return None;
        }
        let member = &self.member;
        Some(quote! {
            #index => ::core::option::Option::Some(::rxbind::Capture::slot(&mut self.#member)),
        })
    }

    /// Type that must implement `Capture`, if this field takes part in binding.
    pub(crate) fn captured_type(&self) -> Option<&Type> {
        self.captured.then_some(&self.ty)
    }
}
