// Word selection and custom word handling

pub mod custom;
pub mod selector;
pub mod source;
pub mod store;

pub use custom::CustomWords;
pub use selector::{ExhaustedFallback, SelectionPolicy, StoreOutage, WordSelector};
pub use source::{GeminiWordSource, SourceError, WordSource};
pub use store::{
    CustomWordStore, MemoryCustomWordStore, MemoryRecentWordStore, PgCustomWordStore,
    PgRecentWordStore, RecentWordStore,
};
