// Domain layer: request-scoped models, form/page state and gateway ports.

pub mod form;
pub mod model;
pub mod page;
pub mod ports;
