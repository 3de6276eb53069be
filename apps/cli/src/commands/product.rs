//! # Product Commands

use serde_json::json;
use stockroom_core::{NewProduct, Product};
use stockroom_service::{ServiceResult, Services};
use tracing::debug;

use crate::args::ProductCommand;
use crate::output::Output;

pub async fn run(cmd: ProductCommand, services: &Services, out: Output) -> ServiceResult<String> {
    let products = &services.products;

    match cmd {
        ProductCommand::Add { name, quantity } => {
            let id = products.insert(&NewProduct::new(name, quantity)).await?;
            Ok(out.message(&format!("Added product {}", id), &json!({ "id": id })))
        }
        ProductCommand::Update { id, name, quantity } => {
            products.update(&Product { id, name, quantity }).await?;
            Ok(out.row(&products.find_by_id(id).await?))
        }
        ProductCommand::Delete { id } => {
            products.delete(id).await?;
            Ok(out.message(&format!("Deleted product {}", id), &json!({ "deleted": id })))
        }
        ProductCommand::Show { id } => Ok(out.row(&products.find_by_id(id).await?)),
        ProductCommand::List => {
            let all = products.find_all().await?;
            debug!(count = all.len(), "Listing products");
            Ok(out.rows(&all))
        }
    }
}
