//! # Commands Module
//!
//! One handler per subcommand group.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch)
//! ├── client.rs   ◄─── client add/update/delete/show/list
//! ├── product.rs  ◄─── product add/update/delete/show/list
//! └── order.rs    ◄─── order place/show/list/bill
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  $ stockroom order place 1 2 5                                         │
//! │         │                                                               │
//! │         │ (clap)                                                        │
//! │         ▼                                                               │
//! │  Command::Order(OrderCommand::Place { .. })                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  order::run(cmd, &services, output) -> ServiceResult<String>           │
//! │         │                                                               │
//! │         ├── Ok(text)  ──► stdout, exit 0                               │
//! │         └── Err(e)    ──► UserError ──► stderr, exit 1                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod order;
pub mod product;

use stockroom_service::Services;

use crate::args::Command;
use crate::error::{UserError, SUCCESS};
use crate::output::Output;

/// What a finished command prints and how the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: i32,
}

/// Runs one subcommand against the wired services.
pub async fn dispatch(cmd: Command, services: &Services, out: Output) -> Outcome {
    let result = match cmd {
        Command::Client(cmd) => client::run(cmd, services, out).await,
        Command::Product(cmd) => product::run(cmd, services, out).await,
        Command::Order(cmd) => order::run(cmd, services, out).await,
    };

    match result {
        Ok(text) => Outcome {
            stdout: Some(text),
            stderr: None,
            exit_code: SUCCESS,
        },
        Err(err) => {
            let err = UserError::from(err);
            Outcome {
                stdout: None,
                stderr: Some(out.error(&err)),
                exit_code: err.exit_code(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stockroom_db::{Database, DbConfig};
    use stockroom_service::MemoryBillSink;

    use super::*;
    use crate::args::{ClientCommand, OrderCommand, ProductCommand};
    use crate::error::OPERATION_FAILED;

    async fn services() -> (Services, Arc<MemoryBillSink>) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let bills = Arc::new(MemoryBillSink::new());
        (Services::new(&db, bills.clone()), bills)
    }

    async fn run(services: &Services, cmd: Command) -> Outcome {
        dispatch(cmd, services, Output::Table).await
    }

    #[tokio::test]
    async fn test_place_order_end_to_end() {
        let (services, bills) = services().await;

        let added = run(&services, Command::Client(ClientCommand::Add { name: "Alice".into() })).await;
        assert_eq!(added.stdout.as_deref(), Some("Added client 1"));

        run(
            &services,
            Command::Product(ProductCommand::Add {
                name: "Widget".into(),
                quantity: 10,
            }),
        )
        .await;

        let placed = run(
            &services,
            Command::Order(OrderCommand::Place {
                client_id: 1,
                product_id: 1,
                amount: 5,
            }),
        )
        .await;
        assert_eq!(placed.exit_code, SUCCESS);
        assert_eq!(
            placed.stdout.as_deref(),
            Some("Placed order 1 (5 left in stock)")
        );
        assert!(bills.contents(1).await.unwrap().contains("Client: Alice"));

        let listed = run(&services, Command::Order(OrderCommand::List)).await;
        assert!(listed.stdout.unwrap().contains("client_id"));
    }

    #[tokio::test]
    async fn test_business_error_exits_with_one() {
        let (services, _) = services().await;

        let outcome = run(&services, Command::Client(ClientCommand::Show { id: 3 })).await;

        assert_eq!(outcome.exit_code, OPERATION_FAILED);
        assert_eq!(outcome.stdout, None);
        assert_eq!(
            outcome.stderr.as_deref(),
            Some("error: Client with id=3 was not found")
        );
    }

    #[tokio::test]
    async fn test_negative_quantity_is_reported() {
        let (services, _) = services().await;

        let outcome = run(
            &services,
            Command::Product(ProductCommand::Add {
                name: "Widget".into(),
                quantity: -1,
            }),
        )
        .await;

        assert_eq!(outcome.exit_code, OPERATION_FAILED);
        assert!(outcome.stderr.unwrap().contains("quantity"));
    }

    #[tokio::test]
    async fn test_json_output() {
        let (services, _) = services().await;
        services
            .clients
            .insert(&stockroom_core::NewClient::new("Bob"))
            .await
            .unwrap();

        let outcome = dispatch(
            Command::Client(ClientCommand::List),
            &services,
            Output::Json,
        )
        .await;

        let value: serde_json::Value = serde_json::from_str(&outcome.stdout.unwrap()).unwrap();
        assert_eq!(value[0]["name"], "Bob");
    }
}
