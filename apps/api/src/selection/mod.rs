// Template selection engine.
// Pure and synchronous over an immutable `TemplateCatalog`: score every
// template, rank, apply the acceptance threshold, fall back when nothing fits.
// No I/O and no shared mutable state, so concurrent calls need no locking.

pub mod alternatives;
pub mod catalog;
pub mod criteria;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod scorer;
pub mod selector;
pub mod statistics;
