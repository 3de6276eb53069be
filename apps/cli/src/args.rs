//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "stockroom",
    version,
    about = "Clients, products and orders kept in a local SQLite store"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Flags accepted by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// SQLite database file (default: platform data directory)
    #[arg(long, global = true, env = "STOCKROOM_DB_PATH")]
    pub db: Option<PathBuf>,

    /// Directory receiving Order<id>.txt bills (default: <data dir>/bills)
    #[arg(long, global = true, env = "STOCKROOM_BILL_DIR")]
    pub bill_dir: Option<PathBuf>,

    /// Print entities as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Keep bills in memory instead of writing files
    #[arg(long, global = true)]
    pub no_bill_files: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage clients
    #[command(subcommand)]
    Client(ClientCommand),
    /// Manage products and stock
    #[command(subcommand)]
    Product(ProductCommand),
    /// Place and inspect orders
    #[command(subcommand)]
    Order(OrderCommand),
}

#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Add a client
    Add { name: String },
    /// Rename a client
    Update { id: i64, name: String },
    /// Delete a client
    Delete { id: i64 },
    /// Show one client
    Show { id: i64 },
    /// List all clients
    List,
}

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// Add a product with its initial stock
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Replace a product's name and stock
    Update {
        id: i64,
        name: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Delete a product
    Delete { id: i64 },
    /// Show one product
    Show { id: i64 },
    /// List all products
    List,
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// Place an order, decrement stock and write its bill
    Place {
        client_id: i64,
        product_id: i64,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Show one order
    Show { id: i64 },
    /// List all orders
    List,
    /// Write the bill for an existing order again
    Bill { id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_order_place() {
        let cli = Cli::try_parse_from(["stockroom", "--json", "order", "place", "1", "2", "5"]).unwrap();

        assert!(cli.global.json);
        assert!(matches!(
            cli.cmd,
            Command::Order(OrderCommand::Place {
                client_id: 1,
                product_id: 2,
                amount: 5
            })
        ));
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let cli = Cli::try_parse_from(["stockroom", "product", "add", "Widget", "-3"]).unwrap();

        assert!(matches!(
            cli.cmd,
            Command::Product(ProductCommand::Add { quantity: -3, .. })
        ));
    }

    #[test]
    fn test_non_numeric_id_is_rejected_by_clap() {
        assert!(Cli::try_parse_from(["stockroom", "client", "show", "abc"]).is_err());
    }
}
