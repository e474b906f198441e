pub mod analysis;
pub mod document;

pub use analysis::{
    AnalysisReport, AnalysisRequest, AnalysisRequestBody, AnalysisResult, ApiResponse,
    FailureKind, LexicalAnalysis, Stats, TokenLists,
};
pub use document::{ExtractedText, FileExtension, Format, SourceFile};
