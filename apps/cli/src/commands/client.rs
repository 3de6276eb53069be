//! # Client Commands

use serde_json::json;
use stockroom_core::{Client, NewClient};
use stockroom_service::{ServiceResult, Services};

use crate::args::ClientCommand;
use crate::output::Output;

pub async fn run(cmd: ClientCommand, services: &Services, out: Output) -> ServiceResult<String> {
    let clients = &services.clients;

    match cmd {
        ClientCommand::Add { name } => {
            let id = clients.insert(&NewClient::new(name)).await?;
            Ok(out.message(&format!("Added client {}", id), &json!({ "id": id })))
        }
        ClientCommand::Update { id, name } => {
            clients.update(&Client { id, name }).await?;
            let client = clients.find_by_id(id).await?;
            Ok(out.row(&client))
        }
        ClientCommand::Delete { id } => {
            clients.delete(id).await?;
            Ok(out.message(&format!("Deleted client {}", id), &json!({ "deleted": id })))
        }
        ClientCommand::Show { id } => Ok(out.row(&clients.find_by_id(id).await?)),
        ClientCommand::List => Ok(out.rows(&clients.find_all().await?)),
    }
}
