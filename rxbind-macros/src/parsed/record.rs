use super::*;

pub(crate) struct ParsedRecord {
    name: Ident,
    generics: Generics,
    fields: Vec<ParsedField>,
}

impl ParsedRecord {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        if let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident("capture")) {
            return Err(Error::new_spanned(attr, "#[capture(...)] belongs on fields, not on the struct"));
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => Self::parse_fields(named.named.iter())?,
                Fields::Unnamed(unnamed) => Self::parse_fields(unnamed.unnamed.iter())?,
                Fields::Unit => Vec::new(),
            },
            _ => return Err(Error::new(input.ident.span(), "Record can only be derived for structs")),
        };

        Ok(Self {
            name: input.ident.clone(),
            generics: input.generics.clone(),
            fields,
        })
    }

    fn parse_fields<'a>(fields: impl Iterator<Item = &'a Field>) -> Result<Vec<ParsedField>> {
        fields
            .enumerate()
            .map(|(index, field)| ParsedField::from_field(index, field))
            .collect()
    }

    /// Struct generics plus the bounds the generated impls need.
    ///
    /// Every captured field type that mentions a type parameter must implement
    /// `Capture`, and the struct itself must implement `Default`. Field types
    /// naming the struct are skipped so recursive records do not produce a
    /// cyclic bound.
    fn bounded_generics(&self) -> Generics {
        let mut generics = self.generics.clone();
        let params: Vec<Ident> = generics.type_params().map(|param| param.ident.clone()).collect();
        if params.is_empty() {
            return generics;
        }

        let name = &self.name;
        let (_, ty_generics, _) = self.generics.split_for_impl();
        let where_clause = generics.make_where_clause();
        for ty in self.fields.iter().filter_map(ParsedField::captured_type) {
            let tokens = ty.to_token_stream();
            if mentions(tokens.clone(), |ident| params.contains(ident)) && !mentions(tokens, |ident| ident == name) {
                where_clause.predicates.push(parse_quote!(#ty: ::rxbind::Capture));
            }
        }
        where_clause
            .predicates
            .push(parse_quote!(#name #ty_generics: ::core::default::Default));
        generics
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let generics = self.bounded_generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        let decls = self.fields.iter().map(|field| field.decl_tokens());
        let arms = self
            .fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| field.slot_arm(index));

        quote! {
            #[automatically_derived]
            impl #impl_generics ::rxbind::Fields for #name #ty_generics #where_clause {
                fn field_mut(&mut self, index: usize) -> ::core::option::Option<::rxbind::Slot<'_>> {
                    match index {
                        #(#arms)*
                        _ => ::core::option::Option::None,
                    }
                }
            }

            #[automatically_derived]
            impl #impl_generics ::rxbind::Capture for #name #ty_generics #where_clause {
                fn shape() -> ::rxbind::Shape {
                    ::rxbind::Shape::Record(<Self as ::rxbind::Record>::schema)
                }

                fn slot(&mut self) -> ::rxbind::Slot<'_> {
                    ::rxbind::Slot::Record(self)
                }
            }

            #[automatically_derived]
            impl #impl_generics ::rxbind::Record for #name #ty_generics #where_clause {
                fn schema() -> ::rxbind::Schema {
                    ::rxbind::Schema::new(
                        ::core::any::type_name::<Self>(),
                        ::std::vec![#(#decls),*],
                    )
                }
            }
        }
    }
}

fn mentions(tokens: TokenStream2, matches: impl Fn(&Ident) -> bool + Copy) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => matches(&ident),
        TokenTree::Group(group) => mentions(group.stream(), matches),
        _ => false,
    })
}
