use crate::domain::{GenerationRequest, QuoteError, QuoteSuccess};

pub trait QuoteBackend: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<QuoteSuccess, QuoteError>;
}
