// Composition root for the activities bounded context.
//
// Responsibilities:
// - Read config from environment.
// - Seed the in-memory directory and wire it into the use case handlers.
// - Expose the HTTP route table.

pub mod http;
pub mod state;
