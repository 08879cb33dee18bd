use bevy::prelude::*;
use std::path::PathBuf;

pub mod decor_io;

pub use decor_io::{
    load_config, load_config_or_default, load_template, load_template_or_default, load_universe,
    save_config, save_template, save_universe, DecorIoError, CONFIG_FILE, DECOR_DIR, TEMPLATE_FILE,
};

/// Persistence plugin for Driftgate.
/// Loads decoration config and the gate template from RON files in `dir`.
/// Missing files leave the defaults in place; unreadable ones are logged.
pub struct DgPersistencePlugin {
    pub dir: PathBuf,
}

impl Default for DgPersistencePlugin {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DECOR_DIR),
        }
    }
}

impl Plugin for DgPersistencePlugin {
    fn build(&self, app: &mut App) {
        let config_path = self.dir.join(CONFIG_FILE);
        match load_config_or_default(&config_path) {
            Ok(config) => {
                app.insert_resource(config);
            }
            Err(e) => warn!("Ignoring {}: {}", config_path.display(), e),
        }

        let template_path = self.dir.join(TEMPLATE_FILE);
        match load_template_or_default(&template_path) {
            Ok(template) => {
                app.insert_resource(template);
            }
            Err(e) => warn!("Ignoring {}: {}", template_path.display(), e),
        }
    }
}
