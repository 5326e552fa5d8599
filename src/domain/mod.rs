mod errors;
mod quote_contract;

pub use errors::{QuoteError, QuoteErrorCategory};
pub use quote_contract::{
    GenerationRequest, GenerationResult, PredefinedTheme, QuoteSuccess, ThemeSelection,
};
