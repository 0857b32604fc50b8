//! Drives every collection through the shared `Collection` contract.

mod collections;
mod scenarios;
