//! Effects over a shared engine.

use crate::core::ObservationError;
use crate::engine::{Engine, RecordReceipt, ResetReceipt};
use crate::persistence::HistoryStore;
use crate::predict::Prediction;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;

/// Environment every engine effect runs against.
pub type SharedEngine<P> = Arc<Engine<P>>;

/// A request a transport layer can forward to the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    /// Record one raw observation
    Record { opened: String },

    /// Predict the next observation
    Predict,

    /// Clear the history
    Clear,
}

/// Engine answer to a [`Command`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Predicted(Prediction),
    Recorded(RecordReceipt),
    Cleared(ResetReceipt),
}

/// Record `raw` when run.
pub fn record<P>(
    raw: impl Into<String>,
) -> impl Effect<Output = RecordReceipt, Error = ObservationError, Env = SharedEngine<P>>
where
    P: HistoryStore + 'static,
{
    let raw = raw.into();
    from_fn(move |engine: &SharedEngine<P>| engine.record_observation(&raw))
}

/// Predict the next observation when run.
pub fn predict<P>() -> impl Effect<Output = Prediction, Error = Infallible, Env = SharedEngine<P>>
where
    P: HistoryStore + 'static,
{
    from_fn(|engine: &SharedEngine<P>| Ok(engine.predict_next()))
}

/// Clear the history when run.
pub fn reset<P>() -> impl Effect<Output = ResetReceipt, Error = Infallible, Env = SharedEngine<P>>
where
    P: HistoryStore + 'static,
{
    from_fn(|engine: &SharedEngine<P>| Ok(engine.reset_history()))
}

/// Turn a command into the effect that serves it.
pub fn dispatch<P>(
    command: Command,
) -> impl Effect<Output = Response, Error = ObservationError, Env = SharedEngine<P>>
where
    P: HistoryStore + 'static,
{
    from_fn(move |engine: &SharedEngine<P>| match &command {
        Command::Record { opened } => engine.record_observation(opened).map(Response::Recorded),
        Command::Predict => Ok(Response::Predicted(engine.predict_next())),
        Command::Clear => Ok(Response::Cleared(engine.reset_history())),
    })
}
