mod prefer_filter;
mod response_recorder;

pub use prefer_filter::PreferFilter;
pub use response_recorder::ResponseRecorder;
