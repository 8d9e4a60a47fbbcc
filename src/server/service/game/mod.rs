//! Battle-result merges and the cabinet request dispatcher.
//!
//! A merge resolves the card by session id, decodes its documents, applies the result
//! and writes everything back in a single transaction.

pub mod dispatch;
pub mod merge;
pub mod step;
pub mod vsc;
pub mod vsm;

#[cfg(test)]
mod tests;
