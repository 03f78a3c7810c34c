//! Generated source for UI bindings.
//!
//! The output is a single C++ file with two functions: one registering
//! producers and consumers with the host, one adding objects to the input
//! group. Output depends only on the store and [`EmitOptions`], so the
//! same store always renders byte-identical text (banner aside).

mod emit;
mod error;
mod write;

pub use emit::{
    BINDING_INCLUDE, Banner, EmitOptions, GROUP_SIGNATURE, HOST_INCLUDE, REGISTRATION_SIGNATURE,
    consumer_call, generate_binding_source, group_body, group_call, producer_call,
    registration_body,
};
pub use error::{ReportError, Result};
pub use write::write_binding_source;
