//! アダプター（Outbound ポートの実装）

pub(crate) mod console_display;
pub(crate) mod json_display;
pub(crate) mod json_file_source;
pub(crate) mod line_io;
pub(crate) mod thrones_api;

pub(crate) use console_display::ConsoleDisplay;
pub(crate) use json_display::JsonDisplay;
pub(crate) use json_file_source::JsonFileSource;
pub(crate) use line_io::LineIo;
pub(crate) use thrones_api::ThronesApiSource;
