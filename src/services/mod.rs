//! Business logic services

pub mod bucket;
pub mod geo;
pub mod sequencer;
pub mod smart_pack;
pub mod zone_cluster;
