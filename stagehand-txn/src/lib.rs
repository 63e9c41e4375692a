//! Transaction staging and atomic submission for Stagehand.
//!
//! A [`TransactionStager`] holds the ordered list of operations queued in
//! this session; a [`TransactionSubmitter`] hands the whole list to a
//! caller-supplied [`ApplyTransaction`] backend as one atomic unit. On
//! success the stager is cleared and a [`CommittedTransaction`] snapshot
//! retained for review; on failure the staged list is left untouched for
//! an unmodified retry. [`PendingTransaction`] bundles the pair into the
//! explicitly constructed session object callers pass around by
//! reference; there is no hidden global.
//!
//! `append`, `discard_all`, and `snapshot` never suspend; the only
//! suspension point in the crate is the apply call inside `submit`, and
//! the in-flight guard turns a doubly-triggered submit into a
//! deterministic accept-first/reject-rest.
//!
//! # Example
//!
//! ```
//! use stagehand_txn::PendingTransaction;
//! use stagehand_types::{Key, KeySegment, MetaOperation};
//!
//! let txn = PendingTransaction::new();
//! txn.append(MetaOperation::Delete {
//!     key: Key::top_level(KeySegment::id("User", 9)),
//! });
//! assert_eq!(txn.snapshot().len(), 1);
//! txn.discard_all();
//! assert!(txn.is_empty());
//! ```

mod apply;
mod error;
mod session;
mod stager;
mod submitter;

pub use apply::ApplyTransaction;
pub use error::{SubmitError, SubmitResult};
pub use session::PendingTransaction;
pub use stager::TransactionStager;
pub use submitter::{CommittedTransaction, SubmitState, TransactionSubmitter};
