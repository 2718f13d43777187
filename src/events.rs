use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{ExtraPaymentEffect, ExtraPaymentId};

/// notable moments of a single calculation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ExtraPaymentApplied {
        payment_id: ExtraPaymentId,
        month: u32,
        amount: Money,
        effect: ExtraPaymentEffect,
    },
    InstallmentRecalculated {
        month: u32,
        old_installment: Money,
        new_installment: Money,
        remaining_months: u32,
    },
    LoanPaidOff {
        month: u32,
        total_paid: Money,
        total_interest: Money,
    },
    /// the loop hit its month ceiling with balance outstanding
    SafetyCeilingReached {
        month: u32,
        remaining_balance: Money,
    },
}

impl Event {
    pub fn month(&self) -> u32 {
        match self {
            Event::ExtraPaymentApplied { month, .. }
            | Event::InstallmentRecalculated { month, .. }
            | Event::LoanPaidOff { month, .. }
            | Event::SafetyCeilingReached { month, .. } => *month,
        }
    }
}

/// event store for collecting events during a run
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
