// src/localization/mod.rs
pub mod observer;
pub mod page;
pub mod storage;
pub mod synchronizer;
pub mod target;

pub use observer::{LanguageObserver, LogObserver, ObservedEvent, RecordingObserver};
pub use page::Page;
pub use storage::{FileStore, MemoryStore, PreferenceStore};
pub use synchronizer::{LocalizationSynchronizer, SyncOptions, SyncReport};
pub use target::{Content, RenderTarget};
