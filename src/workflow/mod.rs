pub mod session;

pub use session::{RenderedReport, Session, SessionState, SubmissionTicket, SubmitOutcome};
