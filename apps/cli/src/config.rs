use std::{collections::HashMap, fs};

#[derive(Debug)]
pub struct Settings {
    pub base_url: String,
    pub bearer_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000/walkcore-backend/".into(),
            bearer_token: None,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("walkcore.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("WALKCORE_BASE_URL") {
        settings.base_url = v;
    }
    if let Ok(v) = std::env::var("WALKCORE_TOKEN") {
        settings.bearer_token = Some(v);
    }

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("base_url") {
            settings.base_url = v.clone();
        }
        if let Some(v) = file_cfg.get("bearer_token") {
            settings.bearer_token = Some(v.clone());
        }
    }
}
