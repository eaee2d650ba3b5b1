pub mod error;
mod models;

pub use models::{About, AuthContext, CredentialsPayload, Item, ItemDraft, ItemPatch, UserRecord};
