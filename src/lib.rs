//! MUSTER: normalize list-builder roster exports into flat unit cards.
//! Ingests the nested selection tree a tabletop list builder emits, walks it
//! for unit-like nodes, and flattens each into one uniform record (statlines,
//! weapons, wargear, enhancements, abilities, composition) ready for display
//! or export. Also carries the keyword shorthand encoder and the two input
//! transports (JSON file, base64+gzip URL fragment).

pub mod cli;
pub mod display;
pub mod roster;
pub mod shorthand;
pub mod transport;
