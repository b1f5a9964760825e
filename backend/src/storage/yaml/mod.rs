//! YAML document storage backend: one human-readable document per
//! saved itinerary, laid out under the connection's base directory.

pub mod connection;
pub mod itinerary_repository;

pub use connection::YamlConnection;
pub use itinerary_repository::ItineraryRepository;
