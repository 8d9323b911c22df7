pub mod loader;

pub use loader::{find_tournament, load_tournament_file, load_tournaments};
