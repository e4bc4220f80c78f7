//! 存储抽象 Trait 定义

mod credential_store;

pub use credential_store::{CredentialStore, InMemoryCredentialStore};
