// Repository ports
// Implemented by adapters in the infrastructure layer

pub mod registration_repository;

pub use registration_repository::RegistrationRepository;
