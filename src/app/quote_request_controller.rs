use crate::domain::{
    GenerationRequest, GenerationResult, PredefinedTheme, QuoteError, QuoteSuccess, ThemeSelection,
};
use crate::infra::api::QuoteBackend;

/// Owns the form-submission state: the theme selection, the last completed
/// outcome, and the in-flight flag. Setters are its only mutators so the
/// selection invariants hold without a rendering environment.
#[derive(Debug, Default)]
pub struct QuoteRequestController {
    selection: ThemeSelection,
    result: Option<GenerationResult>,
    in_flight: bool,
}

impl QuoteRequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &ThemeSelection {
        &self.selection
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The current success result, when the last completed request produced
    /// one. Copy/share actions are no-ops while this is `None`.
    pub fn current_success(&self) -> Option<&QuoteSuccess> {
        self.result.as_ref().and_then(GenerationResult::success)
    }

    /// `Some` selects the tag and clears any custom text; `None` deselects.
    pub fn select_predefined_theme(&mut self, theme: Option<PredefinedTheme>) {
        self.selection = match theme {
            Some(theme) => ThemeSelection::Predefined(theme),
            None => ThemeSelection::None,
        };
    }

    /// Non-empty text (after trimming) replaces any predefined selection.
    /// Emptying the field drops only a custom selection: it neither clears a
    /// predefined tag nor resurrects one that was previously overridden.
    pub fn set_custom_theme(&mut self, text: &str) {
        if !text.trim().is_empty() {
            self.selection = ThemeSelection::Custom(text.to_string());
        } else if matches!(self.selection, ThemeSelection::Custom(_)) {
            self.selection = ThemeSelection::None;
        }
    }

    /// First phase of a generation: validates intent and marks the request in
    /// flight. Returns `Ok(None)` while a request is already in flight (the
    /// controller never double-submits, independent of UI disablement) and a
    /// validation error when no theme is selected; neither touches `result`.
    /// A previously displayed failure is cleared here, while a previous
    /// success stays visible until the new outcome arrives.
    pub fn begin_generate(&mut self) -> Result<Option<GenerationRequest>, QuoteError> {
        if self.in_flight {
            return Ok(None);
        }

        let request = self
            .selection
            .to_request()
            .ok_or_else(|| QuoteError::validation("no theme selected"))?;

        if matches!(self.result, Some(GenerationResult::Failure { .. })) {
            self.result = None;
        }
        self.in_flight = true;
        Ok(Some(request))
    }

    /// Second phase: reconciles the outcome into the replacement result and
    /// releases the in-flight flag on every path.
    pub fn complete_generate(&mut self, outcome: Result<QuoteSuccess, QuoteError>) {
        self.result = Some(match outcome {
            Ok(success) => GenerationResult::Success(success),
            Err(error) => GenerationResult::Failure {
                message: error.failure_message(),
            },
        });
        self.in_flight = false;
    }

    /// Issues at most one backend call: none when validation fails or a
    /// request is already in flight.
    pub fn generate(&mut self, backend: &dyn QuoteBackend) -> Result<(), QuoteError> {
        let Some(request) = self.begin_generate()? else {
            return Ok(());
        };

        tracing::debug!(
            theme = %request.theme,
            has_custom_theme = request.custom_theme.is_some(),
            "submitting quote generation request"
        );
        let outcome = backend.generate(&request);
        self.complete_generate(outcome);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::{
        GenerationRequest, GenerationResult, PredefinedTheme, QuoteError, QuoteSuccess,
        ThemeSelection,
    };
    use crate::infra::api::QuoteBackend;

    use super::QuoteRequestController;

    struct CountingBackend {
        calls: AtomicUsize,
        last_request: Mutex<Option<GenerationRequest>>,
        outcome: Result<QuoteSuccess, QuoteError>,
    }

    impl CountingBackend {
        fn returning(outcome: Result<QuoteSuccess, QuoteError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
                outcome,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl QuoteBackend for CountingBackend {
        fn generate(&self, request: &GenerationRequest) -> Result<QuoteSuccess, QuoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().expect("mutex poisoned") = Some(request.clone());
            self.outcome.clone()
        }
    }

    fn wisdom_success() -> QuoteSuccess {
        QuoteSuccess {
            quote: "Q".to_string(),
            author: "A".to_string(),
            resolved_theme: "wisdom".to_string(),
        }
    }

    #[test]
    fn custom_text_overrides_predefined_selection() {
        let mut controller = QuoteRequestController::new();
        controller.select_predefined_theme(Some(PredefinedTheme::Motivation));
        controller.set_custom_theme("friendship");

        assert_eq!(
            *controller.selection(),
            ThemeSelection::Custom("friendship".to_string())
        );
        assert_eq!(controller.selection().predefined(), None);
    }

    #[test]
    fn predefined_selection_overrides_custom_text() {
        let mut controller = QuoteRequestController::new();
        controller.set_custom_theme("friendship");
        controller.select_predefined_theme(Some(PredefinedTheme::Love));

        assert_eq!(
            *controller.selection(),
            ThemeSelection::Predefined(PredefinedTheme::Love)
        );
        assert_eq!(controller.selection().custom_text(), None);
    }

    #[test]
    fn emptying_custom_text_keeps_predefined_selection() {
        let mut controller = QuoteRequestController::new();
        controller.select_predefined_theme(Some(PredefinedTheme::Wisdom));
        controller.set_custom_theme("   ");

        assert_eq!(
            *controller.selection(),
            ThemeSelection::Predefined(PredefinedTheme::Wisdom)
        );
    }

    #[test]
    fn emptying_custom_text_drops_custom_selection_without_resurrecting_tag() {
        let mut controller = QuoteRequestController::new();
        controller.select_predefined_theme(Some(PredefinedTheme::Wisdom));
        controller.set_custom_theme("friendship");
        controller.set_custom_theme("");

        assert_eq!(*controller.selection(), ThemeSelection::None);
    }

    #[test]
    fn deselecting_predefined_theme_clears_selection() {
        let mut controller = QuoteRequestController::new();
        controller.select_predefined_theme(Some(PredefinedTheme::Wisdom));
        controller.select_predefined_theme(None);

        assert!(controller.selection().is_none());
    }

    #[test]
    fn generate_without_selection_fails_fast_and_keeps_result() {
        let backend = CountingBackend::returning(Ok(wisdom_success()));
        let mut controller = QuoteRequestController::new();

        controller.select_predefined_theme(Some(PredefinedTheme::Wisdom));
        controller
            .generate(&backend)
            .expect("generation should succeed");
        controller.select_predefined_theme(None);

        let error = controller
            .generate(&backend)
            .expect_err("missing selection should fail");

        assert!(matches!(
            error,
            QuoteError::Validation { message } if message == "no theme selected"
        ));
        assert_eq!(backend.call_count(), 1);
        assert_eq!(
            controller.result(),
            Some(&GenerationResult::Success(wisdom_success()))
        );
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn generate_maps_success_outcome() {
        let backend = CountingBackend::returning(Ok(wisdom_success()));
        let mut controller = QuoteRequestController::new();
        controller.select_predefined_theme(Some(PredefinedTheme::Wisdom));

        controller
            .generate(&backend)
            .expect("generation should succeed");

        assert_eq!(
            controller.result(),
            Some(&GenerationResult::Success(wisdom_success()))
        );
        assert!(!controller.is_in_flight());
        assert_eq!(
            backend
                .last_request
                .lock()
                .expect("mutex poisoned")
                .as_ref()
                .map(|request| request.theme.clone()),
            Some("wisdom".to_string())
        );
    }

    #[test]
    fn generate_maps_rejection_outcome_to_failure_message() {
        let backend = CountingBackend::returning(Err(QuoteError::rejected("no quotes found")));
        let mut controller = QuoteRequestController::new();
        controller.select_predefined_theme(Some(PredefinedTheme::Wisdom));

        controller
            .generate(&backend)
            .expect("rejection still completes the request");

        assert_eq!(
            controller.result(),
            Some(&GenerationResult::Failure {
                message: "no quotes found".to_string()
            })
        );
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn generate_maps_transport_outcome_to_failure_message() {
        let backend = CountingBackend::returning(Err(QuoteError::transport("Network Error")));
        let mut controller = QuoteRequestController::new();
        controller.set_custom_theme("creativity");

        controller
            .generate(&backend)
            .expect("transport failure still completes the request");

        assert_eq!(
            controller.result(),
            Some(&GenerationResult::Failure {
                message: "Network Error".to_string()
            })
        );
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn generate_is_a_no_op_while_in_flight() {
        let backend = CountingBackend::returning(Ok(wisdom_success()));
        let mut controller = QuoteRequestController::new();
        controller.select_predefined_theme(Some(PredefinedTheme::Wisdom));

        let request = controller
            .begin_generate()
            .expect("begin should accept the request")
            .expect("a request should be produced");
        assert!(controller.is_in_flight());

        let second = controller
            .begin_generate()
            .expect("re-entrant begin should not error");
        assert_eq!(second, None);

        controller
            .generate(&backend)
            .expect("re-entrant generate should be a no-op");
        assert_eq!(backend.call_count(), 0);

        controller.complete_generate(Ok(wisdom_success()));
        assert!(!controller.is_in_flight());
        assert_eq!(request.theme, "wisdom");
    }

    #[test]
    fn begin_clears_previous_failure_but_keeps_previous_success() {
        let mut controller = QuoteRequestController::new();
        controller.select_predefined_theme(Some(PredefinedTheme::Wisdom));

        controller
            .begin_generate()
            .expect("begin should accept the request");
        controller.complete_generate(Err(QuoteError::rejected("no quotes found")));
        assert!(matches!(
            controller.result(),
            Some(GenerationResult::Failure { .. })
        ));

        controller
            .begin_generate()
            .expect("begin should accept the retry");
        assert_eq!(controller.result(), None);
        controller.complete_generate(Ok(wisdom_success()));

        controller
            .begin_generate()
            .expect("begin should accept the next request");
        assert_eq!(
            controller.result(),
            Some(&GenerationResult::Success(wisdom_success()))
        );
        controller.complete_generate(Ok(wisdom_success()));
    }

    #[test]
    fn custom_request_carries_trimmed_text_and_empty_tag() {
        let backend = CountingBackend::returning(Ok(wisdom_success()));
        let mut controller = QuoteRequestController::new();
        controller.set_custom_theme("  creativity  ");

        controller
            .generate(&backend)
            .expect("generation should succeed");

        let request = backend
            .last_request
            .lock()
            .expect("mutex poisoned")
            .clone()
            .expect("backend should record the request");
        assert_eq!(request.theme, "");
        assert_eq!(request.custom_theme.as_deref(), Some("creativity"));
    }
}
