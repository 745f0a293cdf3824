use serde::ser::{Serialize, SerializeStruct, Serializer};

use museo_core::price::format_amount;
use museo_core::{BusinessDate, Clock, DomainError, DomainResult, SystemClock};
use museo_tickets::Ticket;

/// Tickets sold on one calendar day.
///
/// The ledger only grows: sales are appended in the order they are registered,
/// duplicates included. Totals are derived on every call, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    sale_date: BusinessDate,
    sold_tickets: Vec<Ticket>,
}

impl DailySales {
    /// Open an empty ledger for the host's current local date.
    pub fn new() -> Self {
        Self::opened_on(&SystemClock)
    }

    /// Open an empty ledger for the day reported by `clock`.
    pub fn opened_on(clock: &dyn Clock) -> Self {
        Self {
            sale_date: clock.today(),
            sold_tickets: Vec::new(),
        }
    }

    /// Record a sold ticket at the end of the ledger.
    ///
    /// An absent ticket is rejected with [`DomainError::InvalidArgument`] and the
    /// ledger is left as it was.
    pub fn register_sale(&mut self, ticket: impl Into<Option<Ticket>>) -> DomainResult<()> {
        let Some(ticket) = ticket.into() else {
            tracing::warn!(sale_date = %self.sale_date, "sale rejected: no ticket");
            return Err(DomainError::invalid_argument("ticket must be present"));
        };

        tracing::debug!(
            sale_date = %self.sale_date,
            sequence_number = ticket.sequence_number(),
            price = ticket.price().amount(),
            "sale registered"
        );
        self.sold_tickets.push(ticket);
        Ok(())
    }

    /// Sum of the prices of every sold ticket; `0.0` for an empty day.
    ///
    /// Folds from `+0.0`: `Iterator::sum` over no floats yields `-0.0`, which
    /// would render as `$-0.0`.
    pub fn total(&self) -> f64 {
        self.sold_tickets
            .iter()
            .fold(0.0, |acc, t| acc + t.price().amount())
    }

    pub fn sold_count(&self) -> usize {
        self.sold_tickets.len()
    }

    pub fn sale_date(&self) -> BusinessDate {
        self.sale_date
    }

    /// An owned copy of the ledger, in registration order.
    pub fn sold_tickets(&self) -> Vec<Ticket> {
        self.sold_tickets.clone()
    }
}

impl Default for DailySales {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for DailySales {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "VentaDelDia")?;
        writeln!(f, " Fecha: {}", self.sale_date)?;
        writeln!(f, " Cantidad de boletos: {}", self.sold_count())?;
        writeln!(f, " Detalle:")?;
        for ticket in &self.sold_tickets {
            writeln!(
                f,
                " - Boleto #{} | ${}",
                ticket.sequence_number(),
                ticket.price()
            )?;
        }
        write!(f, " Total: ${}", format_amount(self.total()))
    }
}

/// Snapshot with the derived count and total alongside the stored fields.
impl Serialize for DailySales {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DailySales", 4)?;
        state.serialize_field("sale_date", &self.sale_date)?;
        state.serialize_field("sold_count", &self.sold_count())?;
        state.serialize_field("sold_tickets", &self.sold_tickets)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}
