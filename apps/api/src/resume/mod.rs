// Resume parsing: upload handler, extraction pipeline and the response model.
// The response shape is a compatibility contract with the front-end; do not add or drop fields.

pub mod handlers;
pub mod models;
pub mod pipeline;
