//! # curvetrader-sdk
//!
//! A typed Rust client for a treasury yield-curve order service: fetch the
//! daily curve, place simulated fixed-income orders against its points, and
//! keep the displayed history reconciled with server truth.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — shared newtypes, domain models, maturity arithmetic
//! 2. **HTTP API** — `CurveHttp`, one method per endpoint, wire types only
//! 3. **High-Level Client** — `TreasuryClient` with nested sub-clients
//! 4. **Workflow** — `OrderWorkflow`, the order-entry state machine
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use curvetrader_sdk::prelude::*;
//!
//! let client = TreasuryClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let snapshot = client.curve().fetch().await?;
//! let mut workflow = OrderWorkflow::new();
//! workflow.point_clicked(snapshot.points[0].clone());
//! workflow.submit(&client, "2,000").await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Maturity date arithmetic for term codes.
pub mod maturity;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `TreasuryClient` — the primary entry point.
pub mod client;

// ── Layer 4: Workflow ────────────────────────────────────────────────────────

/// Order-entry state machine.
pub mod workflow;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{parse_amount, TermCode, TermSpan, TermUnit};

    // Domain types — curve
    pub use crate::domain::curve::{CurvePoint, CurveSnapshot};

    // Domain types — order
    pub use crate::domain::order::{Order, OrderHistory, OrderRequest, RefreshAfterWrite};

    // Maturity arithmetic
    pub use crate::maturity::maturity_date;

    // Errors
    pub use crate::error::{
        FetchError, LocalValidationError, SdkError, SubmissionError, TermError,
    };

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Client + sub-clients
    pub use crate::client::{CurveClient, OrdersClient, TreasuryClient, TreasuryClientBuilder};

    // Workflow
    pub use crate::workflow::{OrderWorkflow, WorkflowState};
}
