//! # Bill Sinks
//!
//! Where rendered bills go.
//!
//! ```text
//! OrderService::emit_bill(order)
//!       │  resolve client + product names, render text
//!       ▼
//! BillSink::append(order_id, text)
//!       ├── FileBillSink   → <dir>/Order<id>.txt (append mode)
//!       └── MemoryBillSink → HashMap<order_id, String>
//! ```
//!
//! Appending the same order twice leaves two records in its bill.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

/// Destination for rendered bill text.
#[async_trait]
pub trait BillSink: Send + Sync {
    /// Appends `text` to the bill of `order_id`, creating it if needed.
    async fn append(&self, order_id: i64, text: &str) -> io::Result<()>;
}

// =============================================================================
// File Sink
// =============================================================================

/// Writes one `Order<id>.txt` file per order into a directory.
#[derive(Debug, Clone)]
pub struct FileBillSink {
    dir: PathBuf,
}

impl FileBillSink {
    /// Creates a sink writing into `dir`. The directory is created on the
    /// first append.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBillSink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the bill file for an order.
    pub fn path_for(&self, order_id: i64) -> PathBuf {
        self.dir.join(format!("Order{}.txt", order_id))
    }
}

#[async_trait]
impl BillSink for FileBillSink {
    async fn append(&self, order_id: i64, text: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(order_id);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        file.write_all(text.as_bytes()).await?;
        file.flush().await?;

        debug!(order_id, path = %path.display(), "Bill written");
        Ok(())
    }
}

// =============================================================================
// Memory Sink
// =============================================================================

/// Keeps bills in memory. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryBillSink {
    bills: Mutex<HashMap<i64, String>>,
}

impl MemoryBillSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended so far for `order_id`.
    pub async fn contents(&self, order_id: i64) -> Option<String> {
        self.bills.lock().await.get(&order_id).cloned()
    }

    /// Number of orders with at least one bill.
    pub async fn len(&self) -> usize {
        self.bills.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bills.lock().await.is_empty()
    }
}

#[async_trait]
impl BillSink for MemoryBillSink {
    async fn append(&self, order_id: i64, text: &str) -> io::Result<()> {
        self.bills
            .lock()
            .await
            .entry(order_id)
            .or_default()
            .push_str(text);
        Ok(())
    }
}
