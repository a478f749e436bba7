//! # Submission Controller
//!
//! Pure state machine for the order form.
//!
//! ```text
//! Idle ──submit──▶ ValidationPending ──valid────▶ Success
//!                                    └─invalid──▶ Failure
//! Success / Failure ──submit──▶ ValidationPending ...
//! ```
//!
//! `ValidationPending` is entered and left within a single
//! [`transition`] call; validation is synchronous and there is nothing to
//! wait on. It is still a distinct phase so the submit control can be
//! disabled while it holds.
//!
//! Transitions never mutate their input. [`transition`] returns the next
//! state and the commands the host should run, and emits
//! [`OrderCommand::Render`] only when the state actually changed.

use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::draft::{FieldUpdate, OrderDraft};
use crate::form::{Field, ValidationResult, Validator};
use crate::order::PizzaOrder;
use crate::validation::OrderValidator;
use crate::views::StatusBanner;

/// Submission lifecycle phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Submit received, validation running
    ValidationPending,
    /// Last submit was valid
    Success,
    /// Last submit had field errors
    Failure,
}

impl SubmitPhase {
    /// Outcome of the last submit, as shown to the user
    #[must_use]
    pub fn status(self) -> SubmitStatus {
        match self {
            Self::Idle | Self::ValidationPending => SubmitStatus::None,
            Self::Success => SubmitStatus::Success,
            Self::Failure => SubmitStatus::Failure,
        }
    }
}

/// Displayed submit outcome
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No banner
    #[default]
    None,
    /// Success banner
    Success,
    /// Failure banner
    Failure,
}

/// Input events handled by the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderEvent {
    /// A field changed
    Edit(FieldUpdate),
    /// The submit control was activated
    Submit,
}

/// Side effects requested by a transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderCommand {
    /// State changed; dependent UI should re-render
    Render,
    /// A valid order was submitted
    OrderPlaced(PizzaOrder),
}

/// Complete order form state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderFormState {
    config: FormConfig,
    validator: OrderValidator,
    draft: OrderDraft,
    errors: ValidationResult,
    phase: SubmitPhase,
    banner: Option<StatusBanner>,
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl OrderFormState {
    /// Create an empty form using the given configuration
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self {
            validator: OrderValidator::new(&config),
            config,
            draft: OrderDraft::default(),
            errors: ValidationResult::default(),
            phase: SubmitPhase::Idle,
            banner: None,
        }
    }

    /// Current draft
    #[must_use]
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Errors from the last submit
    #[must_use]
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Error to show next to a field, if any
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Displayed submit outcome
    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.phase.status()
    }

    /// Banner to show, if any
    #[must_use]
    pub fn banner(&self) -> Option<&StatusBanner> {
        self.banner.as_ref()
    }

    /// Check if the submit control should be enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase != SubmitPhase::ValidationPending && self.draft.can_submit()
    }

    /// Apply a field change. Errors and banner stay until the next submit.
    #[must_use]
    pub fn edit(&self, update: FieldUpdate) -> Self {
        Self {
            draft: self.draft.set_field(update),
            ..self.clone()
        }
    }

    /// Enter `ValidationPending`, clearing the previous banner and errors
    #[must_use]
    pub fn begin_submit(&self) -> Self {
        Self {
            errors: ValidationResult::default(),
            phase: SubmitPhase::ValidationPending,
            banner: None,
            ..self.clone()
        }
    }

    /// Validate the draft and leave `ValidationPending`.
    ///
    /// Returns the placed order on success. From any other phase the state
    /// is returned unchanged.
    #[must_use]
    pub fn complete_submit(&self) -> (Self, Option<PizzaOrder>) {
        if self.phase != SubmitPhase::ValidationPending {
            debug!(phase = ?self.phase, "complete_submit outside ValidationPending ignored");
            return (self.clone(), None);
        }

        let errors = self.validator.validate(&self.draft);
        if !errors.is_valid() {
            debug!(invalid_fields = errors.len(), "Order rejected");
            return (self.failed(errors), None);
        }

        match PizzaOrder::from_draft(&self.draft) {
            Ok(order) => {
                info!(
                    size = %order.size,
                    toppings = order.toppings.len(),
                    "Order placed"
                );
                let next = Self {
                    errors: ValidationResult::default(),
                    phase: SubmitPhase::Success,
                    banner: Some(StatusBanner::success(&self.config.success_message)),
                    ..self.clone()
                };
                (next, Some(order))
            }
            Err(e) => {
                warn!(error = %e, "Validated draft did not convert to an order");
                (self.failed(ValidationResult::default()), None)
            }
        }
    }

    fn failed(&self, errors: ValidationResult) -> Self {
        Self {
            errors,
            phase: SubmitPhase::Failure,
            banner: Some(StatusBanner::failure(&self.config.failure_message)),
            ..self.clone()
        }
    }
}

/// Run one event through the form.
pub fn transition(
    state: &OrderFormState,
    event: OrderEvent,
) -> (OrderFormState, Vec<OrderCommand>) {
    let mut commands = Vec::new();

    let next = match event {
        OrderEvent::Edit(update) => state.edit(update),
        OrderEvent::Submit => {
            let pending = state.begin_submit();
            let (done, order) = pending.complete_submit();
            debug!(from = ?state.phase, to = ?done.phase, "Submit handled");
            if let Some(order) = order {
                commands.push(OrderCommand::OrderPlaced(order));
            }
            done
        }
    };

    if next != *state {
        commands.insert(0, OrderCommand::Render);
    }
    (next, commands)
}
