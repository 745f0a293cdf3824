use serde::Serialize;

use museo_core::{BusinessDate, Clock, DomainResult, Price, SystemClock, TicketSequence};

/// A priced, numbered, dated museum entry pass.
///
/// Tickets are immutable once issued. Cloning one yields the same ticket (same
/// sequence number), so a visitor and the day's ledger can each hold a copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    sequence_number: u64,
    price: Price,
    issue_date: BusinessDate,
}

impl Ticket {
    /// Issue a ticket numbered from the process-wide sequence and dated with
    /// the host's local date.
    pub fn new(price: f64) -> DomainResult<Self> {
        Self::issue(price, TicketSequence::global(), &SystemClock)
    }

    /// Issue a ticket from an explicit sequence and clock.
    ///
    /// The price is validated before a number is claimed, so a rejected ticket
    /// leaves `sequence` untouched.
    pub fn issue(price: f64, sequence: &TicketSequence, clock: &dyn Clock) -> DomainResult<Self> {
        let price = Price::new(price).inspect_err(|e| {
            tracing::warn!(error = %e, "ticket issuance rejected");
        })?;

        let sequence_number = sequence.next();
        let issue_date = clock.today();

        tracing::debug!(
            sequence_number,
            price = price.amount(),
            issue_date = %issue_date,
            "ticket issued"
        );

        Ok(Self {
            sequence_number,
            price,
            issue_date,
        })
    }

    /// Number of tickets issued from the process-wide sequence so far.
    pub fn global_count() -> u64 {
        TicketSequence::global().current()
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn issue_date(&self) -> BusinessDate {
        self.issue_date
    }
}

impl core::fmt::Display for Ticket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "BoletoMuseo")?;
        writeln!(f, " Numero: {}", self.sequence_number)?;
        writeln!(f, " Precio: {}", self.price)?;
        write!(f, " Fecha Emision: {}", self.issue_date)
    }
}
