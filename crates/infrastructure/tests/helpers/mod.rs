mod builders;

pub use builders::{chain, example_zone, local, query_bytes, CLIENT};
