//! Simulated checkout flow.
//!
//! Three form steps, then a "processing" phase standing in for payment, then
//! completion. No real transaction semantics: the timed processing delay is
//! a presentation concern, so the caller drives the processing → completed
//! transition explicitly.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use solezone_cart::Cart;
use solezone_core::{DomainError, DomainResult};

/// Flat demo shipping fee, canonical units. Charged once the buyer moves
/// past the information step.
pub const FLAT_SHIPPING: Decimal = dec!(25);

/// Form steps of the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Information,
    Shipping,
    Payment,
}

impl CheckoutStep {
    fn next(self) -> Option<Self> {
        match self {
            CheckoutStep::Information => Some(CheckoutStep::Shipping),
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            CheckoutStep::Information => None,
            CheckoutStep::Shipping => Some(CheckoutStep::Information),
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
        }
    }
}

/// Order number shown on the confirmation screen, rendered as `#SZ-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(pub u32);

impl core::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#SZ-{}", self.0)
    }
}

/// Where the flow currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum CheckoutState {
    InProgress { step: CheckoutStep },
    Processing,
    Completed {
        order_number: OrderNumber,
        placed_at: DateTime<Utc>,
    },
}

/// Price breakdown for the order summary, canonical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

/// One checkout attempt over a snapshot of the cart's subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    state: CheckoutState,
    subtotal: Decimal,
}

impl Checkout {
    /// Begin checkout for a non-empty cart.
    pub fn begin(cart: &Cart) -> DomainResult<Self> {
        if cart.is_empty() {
            return Err(DomainError::validation(
                "cannot start checkout with an empty cart",
            ));
        }
        Ok(Self {
            state: CheckoutState::InProgress {
                step: CheckoutStep::Information,
            },
            subtotal: cart.subtotal(),
        })
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, CheckoutState::Completed { .. })
    }

    /// Current totals: shipping is charged once past the information step,
    /// and stays on the bill through processing and completion.
    pub fn totals(&self) -> CheckoutTotals {
        let shipping = match &self.state {
            CheckoutState::InProgress {
                step: CheckoutStep::Information,
            } => Decimal::ZERO,
            _ => FLAT_SHIPPING,
        };
        CheckoutTotals {
            subtotal: self.subtotal,
            shipping,
            total: self.subtotal + shipping,
        }
    }

    /// Move forward one step; advancing past the payment step submits the
    /// order and enters processing.
    pub fn advance(&mut self) -> DomainResult<()> {
        match &self.state {
            CheckoutState::InProgress { step } => {
                self.state = match step.next() {
                    Some(next) => CheckoutState::InProgress { step: next },
                    None => CheckoutState::Processing,
                };
                Ok(())
            }
            CheckoutState::Processing => {
                Err(DomainError::conflict("order is already being processed"))
            }
            CheckoutState::Completed { .. } => {
                Err(DomainError::conflict("checkout is already completed"))
            }
        }
    }

    /// Submit the order from the payment step, entering processing. This is
    /// what the final [`advance`](Self::advance) does, under the name the
    /// confirmation flow uses.
    pub fn place_order(&mut self) -> DomainResult<()> {
        match &self.state {
            CheckoutState::InProgress {
                step: CheckoutStep::Payment,
            } => {
                self.state = CheckoutState::Processing;
                Ok(())
            }
            CheckoutState::InProgress { .. } => Err(DomainError::invariant(
                "the order is placed from the payment step",
            )),
            CheckoutState::Processing => {
                Err(DomainError::conflict("order is already being processed"))
            }
            CheckoutState::Completed { .. } => {
                Err(DomainError::conflict("checkout is already completed"))
            }
        }
    }

    /// Move back one form step.
    pub fn back(&mut self) -> DomainResult<()> {
        match &self.state {
            CheckoutState::InProgress { step } => match step.previous() {
                Some(previous) => {
                    self.state = CheckoutState::InProgress { step: previous };
                    Ok(())
                }
                None => Err(DomainError::invariant("already at the first step")),
            },
            CheckoutState::Processing => {
                Err(DomainError::conflict("order is already being processed"))
            }
            CheckoutState::Completed { .. } => {
                Err(DomainError::conflict("checkout is already completed"))
            }
        }
    }

    /// Finish the simulated processing phase.
    pub fn complete(
        &mut self,
        order_number: OrderNumber,
        placed_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        match &self.state {
            CheckoutState::Processing => {
                self.state = CheckoutState::Completed {
                    order_number,
                    placed_at,
                };
                Ok(())
            }
            CheckoutState::InProgress { .. } => Err(DomainError::invariant(
                "order has not been submitted for processing",
            )),
            CheckoutState::Completed { .. } => {
                Err(DomainError::conflict("checkout is already completed"))
            }
        }
    }
}
