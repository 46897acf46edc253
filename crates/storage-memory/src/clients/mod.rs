mod repository;
mod seed;

pub use repository::ClientRepository;
pub use seed::{demo_clients, DEMO_HOUSEHOLD_ID, DEMO_MORTGAGE_ID, DEMO_PROSPECT_ID};
