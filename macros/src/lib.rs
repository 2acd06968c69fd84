use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;

/// Range attributes collected from a single model field.
struct FieldSpec {
    ident: syn::Ident,
    min: syn::Expr,
    max: syn::Expr,
    wraps: bool,
    label: Option<syn::LitStr>,
}

fn field_spec(field: &mut syn::Field) -> syn::Result<FieldSpec> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(&*field, "model fields must be named"))?;

    let mut range = None;
    let mut wraps = false;
    let mut label = None;

    for attr in &field.attrs {
        if attr.path().is_ident("range") {
            let args = attr.parse_args_with(
                Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated,
            )?;
            if args.len() != 2 {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected #[range(min, max)]",
                ));
            }
            let mut args = args.into_iter();
            range = args.next().zip(args.next());
        } else if attr.path().is_ident("wrapping") {
            wraps = true;
        } else if attr.path().is_ident("label") {
            label = Some(attr.parse_args::<syn::LitStr>()?);
        }
    }

    // Strip our helper attributes, they are not real attributes.
    field.attrs.retain(|a| {
        !a.path().is_ident("range") && !a.path().is_ident("wrapping") && !a.path().is_ident("label")
    });

    let (min, max) = range.ok_or_else(|| {
        syn::Error::new_spanned(&ident, "every model field needs a #[range(min, max)]")
    })?;

    Ok(FieldSpec {
        ident,
        min,
        max,
        wraps,
        label,
    })
}

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let mut specs = Vec::new();
    for field in input.fields.iter_mut() {
        match field_spec(field) {
            Ok(spec) => specs.push(spec),
            Err(err) => return err.to_compile_error().into(),
        }
        // Make sure all the component fields are public.
        field.vis = syn::Visibility::Public(Default::default());
    }

    if specs.is_empty() {
        return quote! {
            compile_error!("Models must have at least one component field.")
        }
        .into();
    }

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        })
        .expect("derive attributes are well formed");
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let count = specs.len();
    let idents = specs.iter().map(|s| &s.ident).collect::<Vec<_>>();
    let indices = (0..count).collect::<Vec<_>>();

    let fields: Vec<proc_macro2::TokenStream> = specs
        .iter()
        .map(|s| {
            // The diagnostic name defaults to the field name.
            let name = s
                .label
                .as_ref()
                .map(syn::LitStr::value)
                .unwrap_or_else(|| s.ident.to_string());
            let min = &s.min;
            let max = &s.max;
            let wraps = s.wraps;
            quote! {
                crate::models::Field {
                    name: #name,
                    range: crate::models::Bounds::new(#min, #max),
                    wraps: #wraps,
                }
            }
        })
        .collect();

    let new_impl = quote! {
        impl #struct_name {
            /// The components of this model, in declaration order, with the
            /// range each of them is kept in.
            pub const FIELDS: [crate::models::Field; #count] = [#(#fields,)*];

            /// Create a new color, constraining every component into its range.
            pub fn new(#(#idents: crate::color::Component,)*) -> Self {
                Self {
                    #(#idents: Self::FIELDS[#indices].constrain(#idents),)*
                }
            }

            /// Return the components in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#idents,)*]
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                Self::new(#(value[#indices],)*)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
