//! Claimwise server library (HTTP gateway over the retrieval core).

pub mod gateway;
