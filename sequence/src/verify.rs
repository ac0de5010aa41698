//! The sequence verifier.

use crate::config::VerifierConfig;
use crate::error::SequenceError;
use crate::state::SequenceState;
use omp_crypto::ConfigurableHasher;
use omp_format::{decode_envelope, parse_envelope};
use omp_types::{Action, ActionType, BidAction, ContentHash, Envelope, EscrowType};
use rayon::prelude::*;
use serde_json::Value;

/// Longest valid trade: listing, bid, accept, lock.
pub const MAX_ACTIONS: usize = 4;

/// Verifies ordered message sequences.
#[derive(Clone, Debug, Default)]
pub struct SequenceVerifier {
    config: VerifierConfig,
}

/// Verify `messages` with the default configuration.
pub fn validate_sequence(messages: &[Value]) -> Result<(), SequenceError> {
    SequenceVerifier::default().validate(messages)
}

impl SequenceVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify an ordered sequence of parsed envelopes.
    ///
    /// The empty sequence is valid. On failure the error names the lowest
    /// offending index.
    pub fn validate(&self, messages: &[Value]) -> Result<(), SequenceError> {
        let span = tracing::debug_span!("validate_sequence", actions = messages.len());
        let _enter = span.enter();

        let result = self.run(messages);
        match &result {
            Ok(()) => tracing::debug!("sequence accepted"),
            Err(e) => tracing::debug!(index = e.index(), error = %e, "sequence rejected"),
        }
        result
    }

    /// Parse each serialized message under the size limit, then verify.
    pub fn validate_json(&self, messages: &[&str]) -> Result<(), SequenceError> {
        let parsed = messages
            .iter()
            .enumerate()
            .map(|(index, text)| {
                parse_envelope(text, self.config.max_message_bytes)
                    .map_err(|source| SequenceError::Format { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.validate(&parsed)
    }

    fn run(&self, messages: &[Value]) -> Result<(), SequenceError> {
        let envelopes = self.decode_all(messages)?;

        let mut state = SequenceState::default();
        let mut previous: Option<ActionType> = None;
        for (index, (message, envelope)) in messages.iter().zip(&envelopes).enumerate() {
            let action_type = envelope.action.action_type();
            validate_action_index(index, action_type, messages.len())?;
            validate_previous_action(index, previous)?;

            state = apply(state, index, &message["action"], &envelope.action)?;

            tracing::debug!(index, action = %action_type, "step accepted");
            previous = Some(action_type);
        }
        Ok(())
    }

    /// Format-check and decode every message. Results are inspected in index
    /// order, so the lowest failing index wins in both modes.
    fn decode_all(&self, messages: &[Value]) -> Result<Vec<Envelope>, SequenceError> {
        let decode = |(index, message): (usize, &Value)| {
            decode_envelope(message).map_err(|source| SequenceError::Format { index, source })
        };
        if self.config.parallel_format_checks {
            let results: Vec<_> = messages.par_iter().enumerate().map(decode).collect();
            results.into_iter().collect()
        } else {
            messages.iter().enumerate().map(decode).collect()
        }
    }
}

/// Which action types each position admits; terminal actions must be last.
fn validate_action_index(
    index: usize,
    action_type: ActionType,
    len: usize,
) -> Result<(), SequenceError> {
    if index >= MAX_ACTIONS {
        return Err(SequenceError::OrderViolation {
            index,
            reason: "invalid amount of actions".to_string(),
        });
    }
    let allowed: &[ActionType] = match index {
        0 => &[ActionType::ListingAdd],
        1 => &[ActionType::Bid],
        2 => &[ActionType::Accept, ActionType::Reject, ActionType::Cancel],
        _ => &[ActionType::Lock, ActionType::Cancel],
    };

    if !allowed.contains(&action_type) {
        let expected = allowed
            .iter()
            .map(ActionType::as_str)
            .collect::<Vec<_>>()
            .join(" | ");
        return Err(SequenceError::OrderViolation {
            index,
            reason: format!("expected {expected}, received={action_type}"),
        });
    }

    if action_type.is_terminal() && index + 1 != len {
        return Err(SequenceError::OrderViolation {
            index,
            reason: format!("{action_type} must be the last action"),
        });
    }
    Ok(())
}

/// Each response must directly follow the message it answers.
fn validate_previous_action(
    index: usize,
    previous: Option<ActionType>,
) -> Result<(), SequenceError> {
    let expected = match index {
        0 => return Ok(()),
        1 => ActionType::ListingAdd,
        2 => ActionType::Bid,
        _ => ActionType::Accept,
    };
    match previous {
        Some(previous) if previous == expected => Ok(()),
        Some(previous) => Err(SequenceError::OrderViolation {
            index,
            reason: format!("previous action should be {expected}, received={previous}"),
        }),
        None => Err(SequenceError::OrderViolation {
            index,
            reason: format!("previous action should be {expected}"),
        }),
    }
}

/// Check one message against the accumulated state and return the next state.
fn apply(
    state: SequenceState,
    index: usize,
    raw: &Value,
    action: &Action,
) -> Result<SequenceState, SequenceError> {
    if let Some(bid) = action.bid_reference() {
        validate_reference(index, action.action_type(), state.bid_hash.as_ref(), bid)?;
    }
    match action {
        Action::ListingAdd(listing) => {
            let hash = validate_hash(index, raw, ActionType::ListingAdd)?;
            Ok(SequenceState::with_listing(listing.clone(), hash))
        }
        Action::Bid(bid) => {
            let listing_hash = state.listing_hash.as_ref();
            validate_reference(index, ActionType::Bid, listing_hash, &bid.item)?;
            validate_currency(index, &state, bid)?;
            validate_escrow(index, &state, ActionType::Bid, bid.buyer.payment.escrow_type())?;
            let bid_hash = validate_hash(index, raw, ActionType::Bid)?;
            Ok(state.with_bid_hash(bid_hash))
        }
        Action::Accept(accept) => {
            validate_escrow(
                index,
                &state,
                ActionType::Accept,
                accept.seller.payment.escrow_type(),
            )?;
            Ok(state)
        }
        Action::Reject(_) | Action::Cancel(_) => Ok(state),
        Action::Lock(lock) => {
            validate_escrow(index, &state, ActionType::Lock, lock.buyer.payment.escrow_type())?;
            Ok(state)
        }
    }
}

/// Recompute the derived hash of an accepted message.
fn validate_hash(
    index: usize,
    raw: &Value,
    action_type: ActionType,
) -> Result<ContentHash, SequenceError> {
    ConfigurableHasher::hash_action(raw, action_type)
        .map_err(|source| SequenceError::Hash { index, source })
}

fn validate_reference(
    index: usize,
    action: ActionType,
    expected: Option<&ContentHash>,
    received: &ContentHash,
) -> Result<(), SequenceError> {
    let expected = expected.ok_or_else(|| SequenceError::OrderViolation {
        index,
        reason: format!("{action} has nothing to reference"),
    })?;
    if expected != received {
        return Err(SequenceError::LinkageMismatch {
            index,
            action,
            expected: expected.clone(),
            received: received.clone(),
        });
    }
    Ok(())
}

fn validate_currency(
    index: usize,
    state: &SequenceState,
    bid: &BidAction,
) -> Result<(), SequenceError> {
    let currency = bid.buyer.payment.cryptocurrency();
    match &state.listing {
        Some(listing) if listing.accepts_currency(currency) => Ok(()),
        _ => Err(SequenceError::PolicyMismatch {
            index,
            reason: format!("currency {currency} is not offered by the listing"),
        }),
    }
}

fn validate_escrow(
    index: usize,
    state: &SequenceState,
    action: ActionType,
    received: EscrowType,
) -> Result<(), SequenceError> {
    let expected = state.listing.as_ref().map(|listing| listing.escrow_type());
    if expected != Some(received) {
        let expected = expected.map_or("none", |e| e.as_str());
        return Err(SequenceError::PolicyMismatch {
            index,
            reason: format!("{action} escrow {received} does not match listing escrow {expected}"),
        });
    }
    Ok(())
}
