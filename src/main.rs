mod config;
mod models;
mod services;
mod utils;

use crate::config::Config;
use crate::services::api::OpenDotaClient;
use crate::services::collector;
use crate::utils::storage::MatchStorage;

fn main() {
    let config = Config::from_env();

    println!(
        "Début de la collecte (limite de {} requêtes)",
        config.daily_limit
    );
    println!("Fichier de sauvegarde: {}", config.file_path.display());

    let mut known_ids = MatchStorage::load_known_ids(&config.file_path);
    if !known_ids.is_empty() {
        println!(
            "Fichier existant trouvé, {} matchs déjà collectés seront ignorés.",
            known_ids.len()
        );
    }

    // Without a writable store the run is pointless, so these two are fatal.
    let mut storage = MatchStorage::open(&config.file_path).expect("Failed to open match storage");
    let client = OpenDotaClient::new().expect("Failed to build the HTTP client");

    let report = collector::run(&config, &client, &mut storage, &mut known_ids)
        .expect("Failed to write to match storage");

    println!(
        "Limite quotidienne atteinte. Collecte terminée: {} nouveaux, {} ignorés, {} requêtes.",
        report.collected, report.skipped, report.requests
    );
}
