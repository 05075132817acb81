//! Typed GraphQL documents and entities for the modscope moderation API.
//!
//! Every operation is a variables struct implementing
//! [`GraphqlRequest`](modscope_common::GraphqlRequest), an `...Output` struct
//! holding the `data` object, and a `...Response` marker tying the two
//! together. Operations with no variables are empty structs so their
//! `variables` serialize as `{}`.
//!
//! Selection sets are fixed per document. Where two documents select
//! different subsets of the same schema type, each gets its own entity
//! struct so required fields stay required.

pub mod analysis;
pub mod categories;
pub mod dashboard;
pub mod profanity;
pub mod reports;
pub mod synonyms;

/// Collect the present items of a nullable list of nullable items.
///
/// Absent lists and `null` items both disappear, which is how every unit
/// exposes a server collection.
pub fn present<T: Clone>(list: &Option<Vec<Option<T>>>) -> Vec<T> {
    list.iter().flatten().flatten().cloned().collect()
}
