mod builders;

pub use builders::LocalRecordBuilder;
