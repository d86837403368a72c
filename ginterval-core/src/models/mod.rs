pub mod genomic_interval;
pub mod relation;

// re-export for cleaner imports
pub use self::genomic_interval::GenomicInterval;
pub use self::relation::Relation;
