mod model;
mod route;

use proc_macro::TokenStream;

/// Creates a documentation function for the route, named after the handler with the suffix `_docs`.
///
/// The first line of the doc comment becomes the operation summary and the remaining
/// lines become its description.
#[proc_macro_attribute]
pub fn route(args: TokenStream, input: TokenStream) -> TokenStream {
	route::from_input(args, input)
}

/// Creates two new structs for an entity: `CreateXInput` and `UpdateXInput`.
///
/// Fields with `#[serde(skip)]` or `#[serde(skip_deserializing)]` are left out of both.
/// Every field of the update struct is optional; fields that are already `Option<T>`
/// are not wrapped twice. Row mapping derives and `#[sqlx(..)]` attributes only apply
/// to the entity itself and are not forwarded.
#[proc_macro_attribute]
pub fn model(_args: TokenStream, input: TokenStream) -> TokenStream {
	model::from_input(input)
}
