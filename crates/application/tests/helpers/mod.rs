mod mock_handlers;

pub use mock_handlers::{MockFilterMetrics, MockResponseSink, ZoneHandler};
