//! Inbox ingest — scanning the mail source and importing extraction results
//! into the board.

pub mod handlers;
pub mod inbox;
pub mod pipeline;
