pub mod mock_ui_sink;

pub use mock_ui_sink::{MockUiSink, SinkCall};
