//! # Order Commands
//!
//! `order place` runs the full placement workflow: lookup, stock check,
//! atomic decrement + insert, bill.

use serde_json::json;
use stockroom_service::{ServiceResult, Services};

use crate::args::OrderCommand;
use crate::output::Output;

pub async fn run(cmd: OrderCommand, services: &Services, out: Output) -> ServiceResult<String> {
    let orders = &services.orders;

    match cmd {
        OrderCommand::Place {
            client_id,
            product_id,
            amount,
        } => {
            let placement = orders.place_order(client_id, product_id, amount).await?;
            let text = format!(
                "Placed order {} ({} left in stock)",
                placement.order.id, placement.remaining_stock
            );
            Ok(out.message(
                &text,
                &json!({
                    "order": placement.order,
                    "remaining_stock": placement.remaining_stock,
                }),
            ))
        }
        OrderCommand::Show { id } => Ok(out.row(&orders.find_by_id(id).await?)),
        OrderCommand::List => Ok(out.rows(&orders.find_all().await?)),
        OrderCommand::Bill { id } => {
            let bill = orders.emit_bill_for(id).await?;
            Ok(out.message(bill.render().trim_end(), &json!(bill)))
        }
    }
}
