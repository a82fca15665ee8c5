pub mod prefer;

pub use prefer::{PreferFilter, ResponseRecorder};
