pub mod analysis_client;
pub mod format_dispatcher;
pub mod text_input;

pub use analysis_client::{AnalysisClient, AnalysisService};
pub use format_dispatcher::{DispatchOutcome, FormatDispatcher, UNSUPPORTED_FORMAT_MESSAGE};
pub use text_input::{SubmitBlocked, TextInput, EMPTY_INPUT_WARNING, READING_PLACEHOLDER};
