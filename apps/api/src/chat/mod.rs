// Chat façade: one POST endpoint in front of the completion model.
// No session state and no history; every request is a single turn.

pub mod handlers;
pub mod service;
