use serde::Serialize;

use museo_core::{DomainError, DomainResult};
use museo_tickets::Ticket;

/// Rendering of an absent identification in the visitor report.
const NO_IDENTIFICATION: &str = "null";

/// A museum visitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visitor {
    full_name: String,
    identification: Option<String>,
    assigned_ticket: Option<Ticket>,
}

impl Visitor {
    /// Create a visitor with no identification and no ticket.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            identification: None,
            assigned_ticket: None,
        }
    }

    pub fn with_identification(
        full_name: impl Into<String>,
        identification: impl Into<String>,
    ) -> Self {
        let mut visitor = Self::new(full_name);
        visitor.set_identification(Some(identification.into()));
        visitor
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn identification(&self) -> Option<&str> {
        self.identification.as_deref()
    }

    /// Replace the identification. `None` and the empty string are both accepted.
    pub fn set_identification(&mut self, identification: Option<String>) {
        self.identification = identification;
    }

    /// Hand the visitor a ticket, replacing any ticket held before.
    ///
    /// Passing `None` is accepted and clears the assignment; unlike
    /// `DailySales::register_sale`, an absent ticket is not an error here.
    pub fn assign_ticket(&mut self, ticket: impl Into<Option<Ticket>>) {
        self.assigned_ticket = ticket.into();
        match &self.assigned_ticket {
            Some(ticket) => tracing::debug!(
                visitor = %self.full_name,
                sequence_number = ticket.sequence_number(),
                "ticket assigned"
            ),
            None => tracing::debug!(visitor = %self.full_name, "ticket assignment cleared"),
        }
    }

    pub fn assigned_ticket(&self) -> Option<&Ticket> {
        self.assigned_ticket.as_ref()
    }

    /// Sequence number of the held ticket.
    ///
    /// Holding a ticket is a precondition; without one this returns
    /// [`DomainError::PreconditionViolated`].
    pub fn assigned_ticket_number(&self) -> DomainResult<u64> {
        self.assigned_ticket
            .as_ref()
            .map(Ticket::sequence_number)
            .ok_or_else(|| {
                DomainError::precondition(format!(
                    "visitor {:?} has no ticket assigned",
                    self.full_name
                ))
            })
    }
}

impl core::fmt::Display for Visitor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Persona")?;
        writeln!(f, " Nombre: {}", self.full_name)?;
        writeln!(
            f,
            " Identificacion: {}",
            self.identification.as_deref().unwrap_or(NO_IDENTIFICATION)
        )?;
        match &self.assigned_ticket {
            Some(ticket) => writeln!(f, " Boleto asignado: #{}", ticket.sequence_number()),
            None => writeln!(f, " Boleto asignado: (ninguno)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use museo_core::{BusinessDate, FixedClock, TicketSequence};

    fn issue(seq: &TicketSequence, price: f64) -> Ticket {
        let clock = FixedClock(BusinessDate::from_ymd(2024, 1, 15).unwrap());
        Ticket::issue(price, seq, &clock).unwrap()
    }

    #[test]
    fn new_visitor_has_no_identification_or_ticket() {
        let visitor = Visitor::new("Luis");
        assert_eq!(visitor.full_name(), "Luis");
        assert_eq!(visitor.identification(), None);
        assert!(visitor.assigned_ticket().is_none());
    }

    #[test]
    fn empty_name_is_allowed() {
        let visitor = Visitor::new("");
        assert_eq!(visitor.full_name(), "");
    }

    #[test]
    fn identification_can_be_set_replaced_and_cleared() {
        let mut visitor = Visitor::with_identification("Ana", "X123");
        assert_eq!(visitor.identification(), Some("X123"));

        visitor.set_identification(Some("P-998".to_string()));
        assert_eq!(visitor.identification(), Some("P-998"));

        visitor.set_identification(Some(String::new()));
        assert_eq!(visitor.identification(), Some(""));

        visitor.set_identification(None);
        assert_eq!(visitor.identification(), None);
    }

    #[test]
    fn ticket_number_requires_an_assigned_ticket() {
        let seq = TicketSequence::new();
        let mut visitor = Visitor::new("Ana");

        match visitor.assigned_ticket_number() {
            Err(DomainError::PreconditionViolated(_)) => {}
            other => panic!("Expected PreconditionViolated, got {other:?}"),
        }

        let ticket = issue(&seq, 15.0);
        visitor.assign_ticket(ticket.clone());
        assert_eq!(visitor.assigned_ticket_number().unwrap(), ticket.sequence_number());
    }

    #[test]
    fn last_assignment_wins() {
        let seq = TicketSequence::new();
        let mut visitor = Visitor::new("Ana");

        visitor.assign_ticket(issue(&seq, 10.0));
        visitor.assign_ticket(issue(&seq, 12.0));

        assert_eq!(visitor.assigned_ticket_number().unwrap(), 2);
        assert_eq!(visitor.assigned_ticket().unwrap().price().amount(), 12.0);
    }

    #[test]
    fn assigning_none_clears_the_ticket() {
        let seq = TicketSequence::new();
        let mut visitor = Visitor::new("Ana");
        visitor.assign_ticket(issue(&seq, 10.0));

        visitor.assign_ticket(None);

        assert!(visitor.assigned_ticket().is_none());
        assert!(matches!(
            visitor.assigned_ticket_number(),
            Err(DomainError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn describe_without_ticket() {
        let visitor = Visitor::new("Luis");
        assert_eq!(
            visitor.to_string(),
            "Persona\n Nombre: Luis\n Identificacion: null\n Boleto asignado: (ninguno)\n"
        );
    }

    #[test]
    fn describe_with_ticket() {
        let seq = TicketSequence::starting_at(4);
        let mut visitor = Visitor::with_identification("Ana", "X123");
        visitor.assign_ticket(issue(&seq, 15.0));

        assert_eq!(
            visitor.to_string(),
            "Persona\n Nombre: Ana\n Identificacion: X123\n Boleto asignado: #5\n"
        );
    }

    #[test]
    fn serializes_snapshot() {
        let visitor = Visitor::with_identification("Ana", "X123");
        let json = serde_json::to_value(&visitor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "full_name": "Ana",
                "identification": "X123",
                "assigned_ticket": null,
            })
        );
    }
}
