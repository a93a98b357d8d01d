//! Static reference data bundled with the client.

pub mod countries;
