//! One day at the ticket office.

use serde::Serialize;

use museo_core::{Clock, DomainResult, TicketSequence};
use museo_sales::DailySales;
use museo_tickets::Ticket;
use museo_visitors::Visitor;

use crate::config::{AppConfig, OutputFormat};

/// Outcome of a simulated day: the configured visitor and the sales ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub visitor: Visitor,
    pub sales: DailySales,
}

impl DayReport {
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => {
                let mut out = self.visitor.to_string();
                if let Some(ticket) = self.visitor.assigned_ticket() {
                    out.push('\n');
                    out.push_str(&ticket.to_string());
                    out.push('\n');
                }
                out.push('\n');
                out.push_str(&self.sales.to_string());
                out.push('\n');
                Ok(out)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Sell `config.tickets_to_sell` tickets, hand the first one to the configured
/// visitor and record every sale in a ledger opened on `clock`'s day.
pub fn run_day(
    config: &AppConfig,
    sequence: &TicketSequence,
    clock: &dyn Clock,
) -> DomainResult<DayReport> {
    let mut visitor = match &config.visitor_id {
        Some(id) => Visitor::with_identification(config.visitor_name.clone(), id.clone()),
        None => Visitor::new(config.visitor_name.clone()),
    };
    let mut sales = DailySales::opened_on(clock);

    for n in 0..config.tickets_to_sell {
        let ticket = Ticket::issue(config.ticket_price.amount(), sequence, clock)?;
        if n == 0 {
            visitor.assign_ticket(ticket.clone());
        }
        sales.register_sale(ticket)?;
    }

    tracing::info!(
        sale_date = %sales.sale_date(),
        sold = sales.sold_count(),
        total = sales.total(),
        "day closed"
    );

    Ok(DayReport { visitor, sales })
}
