use serde::Serialize;
use serde_json::Value;

use crate::models::errors::FieldError;

/// Per-item outcome types for the bulk operations. Batches never fail as a
/// whole on a single bad element; every element lands in exactly one of the
/// two detail lists.

#[derive(Debug, Clone, Serialize)]
pub struct CreateSuccess {
  pub id: String,
  pub name: String,
  pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateFailure {
  /// Index of the item in the submitted array.
  pub index: usize,
  /// The original payload, echoed so the caller can resubmit it.
  pub product: Value,
  pub error: FieldError,
}

#[derive(Debug, Serialize)]
pub struct BulkCreateReport {
  pub total: usize,
  pub success: usize,
  pub failed: usize,
  pub details: BulkCreateDetails,
}

#[derive(Debug, Serialize)]
pub struct BulkCreateDetails {
  pub success: Vec<CreateSuccess>,
  pub failed: Vec<CreateFailure>,
}

impl BulkCreateReport {
  pub fn new(total: usize) -> Self {
    Self {
      total,
      success: 0,
      failed: 0,
      details: BulkCreateDetails { success: vec![], failed: vec![] },
    }
  }

  pub fn record_success(&mut self, entry: CreateSuccess) {
    self.success += 1;
    self.details.success.push(entry);
  }

  pub fn record_failure(&mut self, entry: CreateFailure) {
    self.failed += 1;
    self.details.failed.push(entry);
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutcome {
  pub id: String,
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteReport {
  pub deleted: usize,
  pub failed: usize,
  pub details: BulkDeleteDetails,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteDetails {
  pub success: Vec<DeleteOutcome>,
  pub failed: Vec<DeleteOutcome>,
}

impl BulkDeleteReport {
  pub fn new() -> Self {
    Self { deleted: 0, failed: 0, details: BulkDeleteDetails { success: vec![], failed: vec![] } }
  }

  pub fn record_deleted(&mut self, id: String) {
    self.deleted += 1;
    self.details.success.push(DeleteOutcome { id, message: "Deleted successfully".into() });
  }

  pub fn record_failure(&mut self, id: String, message: impl Into<String>) {
    self.failed += 1;
    self.details.failed.push(DeleteOutcome { id, message: message.into() });
  }
}

impl Default for BulkDeleteReport {
  fn default() -> Self {
    Self::new()
  }
}
